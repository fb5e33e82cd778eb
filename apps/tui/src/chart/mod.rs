// Chart module: angular layout, color assignment, and the animated
// enter/update/exit reconciliation between renders.

pub mod angles;
pub mod geometry;
pub mod palette;
pub mod transition;

pub use angles::{layout_arcs, ArcInterval, ArcSpec, FULL_TURN};
pub use geometry::ChartGeometry;
pub use palette::{ColorScale, HIGHLIGHT, PALETTE};
pub use transition::{ArcAnimator, Phase, RenderedArc, TRANSITION};
