use ratatui::layout::Rect;

use crate::chart::angles::FULL_TURN;
use crate::chart::transition::RenderedArc;

/// Fraction of the chart square the donut's outer edge reaches.
const OUTER_MARGIN: f64 = 0.9;

/// Shared mapping between the chart's terminal cells and its canvas
/// coordinates. Painting and hit-testing both go through this, so a slice
/// is clickable exactly where it is drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartGeometry {
    /// Centered square inside the widget area.
    pub square: Rect,
    pub center_x: f64,
    pub center_y: f64,
    pub outer_radius: f64,
    pub inner_radius: f64,
}

impl ChartGeometry {
    /// Lays the donut out inside `area`, or `None` when the area is too
    /// small to draw anything sensible.
    pub fn for_area(area: Rect) -> Option<Self> {
        if area.width < 8 || area.height < 6 {
            return None;
        }

        let size = area.width.min(area.height);
        let square = Rect {
            x: area.x + (area.width - size) / 2,
            y: area.y + (area.height - size) / 2,
            width: size,
            height: size,
        };

        let width = f64::from(square.width);
        let height = f64::from(square.height);
        let outer_radius = width.min(height) / 2.0 * OUTER_MARGIN;

        Some(Self {
            square,
            center_x: width / 2.0,
            center_y: height / 2.0,
            outer_radius,
            inner_radius: outer_radius / 2.0,
        })
    }

    pub fn x_bounds(&self) -> [f64; 2] {
        [0.0, f64::from(self.square.width)]
    }

    pub fn y_bounds(&self) -> [f64; 2] {
        [0.0, f64::from(self.square.height)]
    }

    /// Canvas point at `angle` (clockwise from twelve o'clock) and `radius`.
    pub fn point_at(&self, angle: f64, radius: f64) -> (f64, f64) {
        (
            angle.sin().mul_add(radius, self.center_x),
            angle.cos().mul_add(radius, self.center_y),
        )
    }

    /// Terminal cell closest to the canvas point at `angle` / `radius`.
    pub fn cell_at(&self, angle: f64, radius: f64) -> (u16, u16) {
        let (x, y) = self.point_at(angle, radius);
        let column = f64::from(self.square.x) + x;
        let row = f64::from(self.square.y) + (f64::from(self.square.height) - y);
        (column as u16, row as u16)
    }

    /// Polar position of a terminal cell, or `None` outside the square.
    pub fn polar_at_cell(&self, column: u16, row: u16) -> Option<(f64, f64)> {
        if column < self.square.x
            || row < self.square.y
            || column >= self.square.x + self.square.width
            || row >= self.square.y + self.square.height
        {
            return None;
        }

        let x = f64::from(column - self.square.x) + 0.5;
        let y = f64::from(self.square.height) - f64::from(row - self.square.y) - 0.5;
        let dx = x - self.center_x;
        let dy = y - self.center_y;
        let radius = dx.hypot(dy);
        let angle = dx.atan2(dy).rem_euclid(FULL_TURN);

        Some((angle, radius))
    }

    /// The present slice under a terminal cell, if any.
    pub fn hit_test<'a>(
        &self,
        column: u16,
        row: u16,
        arcs: &'a [RenderedArc],
    ) -> Option<&'a RenderedArc> {
        let (angle, radius) = self.polar_at_cell(column, row)?;
        if radius < self.inner_radius || radius > self.outer_radius {
            return None;
        }

        arcs.iter().find(|arc| {
            arc.phase.is_present() && !arc.interval.is_empty() && arc.interval.contains(angle)
        })
    }
}
