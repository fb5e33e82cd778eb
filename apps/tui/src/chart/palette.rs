use ratatui::style::Color;

/// Fixed fill palette, claimed in first-seen order and reused cyclically.
pub const PALETTE: [Color; 8] = [
    Color::Rgb(102, 194, 165),
    Color::Rgb(252, 141, 98),
    Color::Rgb(141, 160, 203),
    Color::Rgb(231, 138, 195),
    Color::Rgb(166, 216, 84),
    Color::Rgb(255, 217, 47),
    Color::Rgb(229, 196, 148),
    Color::Rgb(179, 179, 179),
];

/// Fill used for the hovered slice.
pub const HIGHLIGHT: Color = Color::White;

/// Ordinal color scale keyed by record name.
///
/// Names keep their color for the lifetime of the scale, so a record whose
/// cost changes does not change color. Distinct records sharing a name share
/// a color, which also collapses them into one legend row.
#[derive(Debug, Default)]
pub struct ColorScale {
    domain: Vec<String>,
}

impl ColorScale {
    pub fn new() -> Self {
        Self::default()
    }

    /// Color for `name`, claiming the next palette slot on first sight.
    pub fn color(&mut self, name: &str) -> Color {
        let index = match self.domain.iter().position(|known| known == name) {
            Some(index) => index,
            None => {
                self.domain.push(name.to_string());
                self.domain.len() - 1
            }
        };
        PALETTE[index % PALETTE.len()]
    }

    /// Color for `name` without claiming a slot.
    pub fn peek(&self, name: &str) -> Option<Color> {
        self.domain
            .iter()
            .position(|known| known == name)
            .map(|index| PALETTE[index % PALETTE.len()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_claim_slots_in_first_seen_order() {
        let mut scale = ColorScale::new();
        assert_eq!(scale.color("Food"), PALETTE[0]);
        assert_eq!(scale.color("Rent"), PALETTE[1]);
        assert_eq!(scale.color("Fun"), PALETTE[2]);
    }

    #[test]
    fn assignments_are_stable_across_lookups() {
        let mut scale = ColorScale::new();
        let first = scale.color("Rent");
        scale.color("Food");
        scale.color("Travel");
        assert_eq!(scale.color("Rent"), first);
        assert_eq!(scale.peek("Rent"), Some(first));
    }

    #[test]
    fn same_name_shares_a_color() {
        let mut scale = ColorScale::new();
        let a = scale.color("Food");
        let b = scale.color("Food");
        assert_eq!(a, b);
    }

    #[test]
    fn palette_wraps_after_eight_names() {
        let mut scale = ColorScale::new();
        for i in 0..PALETTE.len() {
            scale.color(&format!("name-{i}"));
        }
        assert_eq!(scale.color("ninth"), PALETTE[0]);
    }

    #[test]
    fn peek_does_not_claim_a_slot() {
        let mut scale = ColorScale::new();
        assert_eq!(scale.peek("Food"), None);
        scale.color("Rent");
        assert_eq!(scale.peek("Rent"), Some(PALETTE[0]));
    }
}
