use std::time::Instant;

use crate::app::actions::AppActions;
use crate::chart::{layout_arcs, ArcAnimator, ChartGeometry, ColorScale, RenderedArc};
use crate::domain::ChangeBatch;
use crate::store::ExpenseStore;
use color_eyre::Result;

#[derive(Debug)]
pub struct App {
    pub running: bool,
    pub show_help: bool,
    pub status_message: String,
    pub actions: AppActions,
    /// Local mirror of the ledger, mutated only by change batches.
    pub store: ExpenseStore,
    pub animator: ArcAnimator,
    pub palette: ColorScale,
    /// Slices as sampled for the current frame.
    pub arcs: Vec<RenderedArc>,
    /// Identifier of the hovered record, if any.
    pub hovered: Option<String>,
    /// Last pointer cell; anchors the tooltip when hovering by mouse.
    pub pointer: Option<(u16, u16)>,
    /// Delete request queued by a click, consumed by the event loop.
    pub pending_delete: Option<String>,
    /// Chart geometry of the current frame, set by the event loop.
    pub geometry: Option<ChartGeometry>,
    pub animation_counter: f64,
    pub last_frame: Instant,
}

impl App {
    pub fn new() -> Self {
        Self {
            running: true,
            show_help: false,
            status_message: String::new(),
            actions: AppActions::new(),
            store: ExpenseStore::new(),
            animator: ArcAnimator::new(),
            palette: ColorScale::new(),
            arcs: Vec::new(),
            hovered: None,
            pointer: None,
            pending_delete: None,
            geometry: None,
            animation_counter: 0.0,
            last_frame: Instant::now(),
        }
    }

    pub async fn initialize_db(&mut self) -> Result<()> {
        self.actions.initialize().await
    }

    /// Advance the per-frame clock and resample the slice set.
    pub fn tick(&mut self, now: Instant) {
        let delta = now.duration_since(self.last_frame);
        self.last_frame = now;

        self.animation_counter += delta.as_secs_f64() * 2.0;
        if self.animation_counter > 2.0 * std::f64::consts::PI {
            self.animation_counter -= 2.0 * std::f64::consts::PI;
        }

        self.arcs = self.animator.sample(now);

        // Hover-leave when the hovered record has left the data.
        if let Some(hovered) = &self.hovered {
            let still_present = self
                .arcs
                .iter()
                .any(|arc| arc.phase.is_present() && &arc.id == hovered);
            if !still_present {
                self.clear_hover();
            }
        }
    }

    /// Apply a change batch from the feed and retarget the chart. This is
    /// the one path through which remote truth reaches the screen.
    pub fn apply_batch(&mut self, batch: &ChangeBatch, now: Instant) {
        self.store.apply(batch);

        let specs = layout_arcs(self.store.records());
        for spec in &specs {
            self.palette.color(&spec.name);
        }
        self.animator.retarget(&specs, now);
    }

    pub fn hovered_arc(&self) -> Option<&RenderedArc> {
        let hovered = self.hovered.as_deref()?;
        self.arcs.iter().find(|arc| arc.id == hovered)
    }

    /// Pointer moved: re-resolve which slice is under it.
    pub fn hover_at(&mut self, column: u16, row: u16) {
        self.pointer = Some((column, row));
        self.hovered = self
            .geometry
            .as_ref()
            .and_then(|geometry| geometry.hit_test(column, row, &self.arcs))
            .map(|arc| arc.id.clone());
    }

    /// Keyboard hover: step through visible slices in draw order.
    pub fn hover_step(&mut self, step: isize) {
        let candidates: Vec<&str> = self
            .arcs
            .iter()
            .filter(|arc| arc.phase.is_present() && !arc.interval.is_empty())
            .map(|arc| arc.id.as_str())
            .collect();
        if candidates.is_empty() {
            self.clear_hover();
            return;
        }

        let len = candidates.len() as isize;
        let position = self
            .hovered
            .as_deref()
            .and_then(|id| candidates.iter().position(|candidate| *candidate == id));
        let next = match position {
            Some(index) => (index as isize + step).rem_euclid(len),
            None if step < 0 => len - 1,
            None => 0,
        };

        self.hovered = Some(candidates[next as usize].to_string());
        // Tooltip anchors at the slice itself when hovering by keyboard.
        self.pointer = None;
    }

    pub fn clear_hover(&mut self) {
        self.hovered = None;
        self.pointer = None;
    }

    /// Queue a delete request for the hovered record. The record stays on
    /// screen until its removal comes back through the change feed.
    pub fn request_delete_hovered(&mut self) {
        if let Some(arc) = self.hovered_arc() {
            self.pending_delete = Some(arc.id.clone());
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DocChange, Expense};
    use std::time::Duration;

    fn app_with_two_records() -> (App, Instant) {
        let mut app = App::new();
        let t0 = Instant::now();
        app.apply_batch(
            &vec![
                DocChange::added(Expense::new("a", "Food", 30.0)),
                DocChange::added(Expense::new("b", "Rent", 70.0)),
            ],
            t0,
        );
        app.tick(t0 + Duration::from_millis(750));
        (app, t0)
    }

    #[test]
    fn batches_flow_into_store_and_chart() {
        let (app, _) = app_with_two_records();
        assert_eq!(app.store.len(), 2);
        assert_eq!(app.arcs.len(), 2);
        assert!(app.animator.is_idle());
    }

    #[test]
    fn keyboard_hover_cycles_through_slices() {
        let (mut app, _) = app_with_two_records();

        app.hover_step(1);
        assert_eq!(app.hovered.as_deref(), Some("a"));
        app.hover_step(1);
        assert_eq!(app.hovered.as_deref(), Some("b"));
        app.hover_step(1);
        assert_eq!(app.hovered.as_deref(), Some("a"), "wraps around");
        app.hover_step(-1);
        assert_eq!(app.hovered.as_deref(), Some("b"));
    }

    #[test]
    fn delete_request_targets_the_hovered_record_without_touching_the_store() {
        let (mut app, _) = app_with_two_records();

        app.hover_step(1);
        app.hover_step(1);
        app.request_delete_hovered();

        assert_eq!(app.pending_delete.as_deref(), Some("b"));
        // Not applied optimistically.
        assert_eq!(app.store.len(), 2);
        assert_eq!(app.arcs.len(), 2);
    }

    #[test]
    fn hover_clears_once_the_record_is_removed() {
        let (mut app, t0) = app_with_two_records();
        app.hover_step(1);
        assert_eq!(app.hovered.as_deref(), Some("a"));

        let t1 = t0 + Duration::from_millis(750);
        app.apply_batch(&vec![DocChange::removed("a")], t1);
        app.tick(t1 + Duration::from_millis(10));

        assert_eq!(app.hovered, None);
        assert_eq!(app.pointer, None);
    }
}
