use ratatui::layout::Rect;
use ratatui::prelude::Buffer;
use ratatui::widgets::Widget;

/// Floating rect of `width` x `height` next to `anchor`, flipped and
/// clamped so it stays inside `bounds`.
pub fn anchored_rect(anchor: (u16, u16), width: u16, height: u16, bounds: Rect) -> Rect {
    let (column, row) = anchor;
    let width = width.min(bounds.width);
    let height = height.min(bounds.height);

    // Prefer sitting right of and below the anchor, like a cursor tooltip.
    let mut x = column.saturating_add(2);
    let mut y = row.saturating_add(1);

    if x + width > bounds.x + bounds.width {
        x = column.saturating_sub(width + 1);
    }
    if y + height > bounds.y + bounds.height {
        y = row.saturating_sub(height);
    }

    let x = x.clamp(bounds.x, (bounds.x + bounds.width).saturating_sub(width));
    let y = y.clamp(bounds.y, (bounds.y + bounds.height).saturating_sub(height));

    Rect {
        x,
        y,
        width,
        height,
    }
}

pub struct ClearWidget;

impl Widget for ClearWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        ratatui::widgets::Clear.render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sits_beside_the_anchor_when_there_is_room() {
        let bounds = Rect::new(0, 0, 80, 24);
        let rect = anchored_rect((10, 5), 20, 5, bounds);
        assert_eq!((rect.x, rect.y), (12, 6));
    }

    #[test]
    fn flips_when_the_anchor_is_near_the_edge() {
        let bounds = Rect::new(0, 0, 80, 24);
        let rect = anchored_rect((78, 22), 20, 5, bounds);
        assert!(rect.x + rect.width <= 80);
        assert!(rect.y + rect.height <= 24);
        assert!(rect.x < 78, "flipped to the left of the anchor");
    }

    #[test]
    fn never_exceeds_tiny_bounds() {
        let bounds = Rect::new(0, 0, 10, 3);
        let rect = anchored_rect((5, 1), 20, 5, bounds);
        assert!(rect.width <= 10);
        assert!(rect.height <= 3);
    }
}
