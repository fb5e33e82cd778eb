use std::time::{Duration, Instant};

use crate::chart::angles::{ArcInterval, ArcSpec};

/// Shared duration of enter, update and exit sweeps.
pub const TRANSITION: Duration = Duration::from_millis(750);

/// What a slice is currently doing on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Settled at its computed interval.
    Idle,
    /// Sweeping open from a zero-width wedge at its end angle.
    Entering,
    /// Moving from its previous interval to a recomputed one.
    Updating,
    /// Collapsing toward its end angle before being dropped.
    Exiting,
}

impl Phase {
    /// Whether the backing record is still present in the data.
    pub const fn is_present(self) -> bool {
        !matches!(self, Self::Exiting)
    }
}

#[derive(Debug, Clone, Copy)]
struct Tween {
    from: ArcInterval,
    to: ArcInterval,
    started: Instant,
}

impl Tween {
    fn sample(&self, now: Instant, duration: Duration) -> ArcInterval {
        let elapsed = now.saturating_duration_since(self.started);
        let progress = if duration.is_zero() {
            1.0
        } else {
            (elapsed.as_secs_f64() / duration.as_secs_f64()).min(1.0)
        };
        let eased = ease_cubic_in_out(progress);
        ArcInterval::new(
            lerp(self.from.start, self.to.start, eased),
            lerp(self.from.end, self.to.end, eased),
        )
    }

    fn finished(&self, now: Instant, duration: Duration) -> bool {
        now.saturating_duration_since(self.started) >= duration
    }
}

#[derive(Debug, Clone)]
struct Slice {
    id: String,
    name: String,
    cost: f64,
    phase: Phase,
    /// Last sampled or settled interval; the `from` of the next tween.
    current: ArcInterval,
    tween: Option<Tween>,
}

/// A slice as sampled for one frame of drawing.
#[derive(Debug, Clone)]
pub struct RenderedArc {
    pub id: String,
    pub name: String,
    pub cost: f64,
    pub interval: ArcInterval,
    pub phase: Phase,
}

/// Reconciles the on-screen slice set against each new layout.
///
/// Slices are partitioned into entering (new ids), updating (kept ids) and
/// exiting (dropped ids); each partition animates per its phase and the
/// settled interval is remembered by id as the starting point of whatever
/// comes next. Retargeting with an unchanged layout starts no tweens.
#[derive(Debug)]
pub struct ArcAnimator {
    duration: Duration,
    slices: Vec<Slice>,
}

impl Default for ArcAnimator {
    fn default() -> Self {
        Self::new()
    }
}

impl ArcAnimator {
    pub fn new() -> Self {
        Self::with_duration(TRANSITION)
    }

    pub fn with_duration(duration: Duration) -> Self {
        Self {
            duration,
            slices: Vec::new(),
        }
    }

    /// Reconcile against a freshly computed layout.
    pub fn retarget(&mut self, specs: &[ArcSpec], now: Instant) {
        // Bring every slice to its position as of `now` so in-flight tweens
        // hand over from where they actually are.
        self.advance(now);

        let mut next: Vec<Slice> = Vec::with_capacity(specs.len());

        for spec in specs {
            match self.slices.iter().position(|slice| slice.id == spec.id) {
                Some(position) => {
                    let mut slice = self.slices.remove(position);
                    slice.name = spec.name.clone();
                    slice.cost = spec.cost;
                    let target = slice.tween.map_or(slice.current, |tween| tween.to);
                    if slice.phase == Phase::Exiting || !target.approx_eq(spec.interval) {
                        slice.tween = Some(Tween {
                            from: slice.current,
                            to: spec.interval,
                            started: now,
                        });
                        slice.phase = Phase::Updating;
                    }
                    next.push(slice);
                }
                None => {
                    // Zero-width wedge at the final end angle, sweeping open.
                    let from = ArcInterval::point(spec.interval.end);
                    next.push(Slice {
                        id: spec.id.clone(),
                        name: spec.name.clone(),
                        cost: spec.cost,
                        phase: Phase::Entering,
                        current: from,
                        tween: Some(Tween {
                            from,
                            to: spec.interval,
                            started: now,
                        }),
                    });
                }
            }
        }

        // Whatever was not claimed above is leaving: collapse the start
        // angle onto the end angle, then drop.
        for mut slice in self.slices.drain(..) {
            if slice.phase != Phase::Exiting {
                let from = slice.current;
                slice.tween = Some(Tween {
                    from,
                    to: ArcInterval::point(from.end),
                    started: now,
                });
                slice.phase = Phase::Exiting;
            }
            next.push(slice);
        }

        self.slices = next;
    }

    /// Sample every slice at `now`. Finished tweens settle; slices whose
    /// exit collapse completed are dropped.
    pub fn sample(&mut self, now: Instant) -> Vec<RenderedArc> {
        self.advance(now);
        self.slices
            .iter()
            .map(|slice| RenderedArc {
                id: slice.id.clone(),
                name: slice.name.clone(),
                cost: slice.cost,
                interval: slice.current,
                phase: slice.phase,
            })
            .collect()
    }

    /// Remembered interval for a record still on screen.
    pub fn remembered(&self, id: &str) -> Option<ArcInterval> {
        self.slices
            .iter()
            .find(|slice| slice.id == id)
            .map(|slice| slice.current)
    }

    pub fn is_idle(&self) -> bool {
        self.slices.iter().all(|slice| slice.tween.is_none())
    }

    fn advance(&mut self, now: Instant) {
        for slice in &mut self.slices {
            if let Some(tween) = slice.tween {
                slice.current = tween.sample(now, self.duration);
                if tween.finished(now, self.duration) {
                    slice.current = tween.to;
                    slice.tween = None;
                    if slice.phase != Phase::Exiting {
                        slice.phase = Phase::Idle;
                    }
                }
            }
        }
        self.slices
            .retain(|slice| !(slice.phase == Phase::Exiting && slice.tween.is_none()));
    }
}

fn lerp(from: f64, to: f64, t: f64) -> f64 {
    (to - from).mul_add(t, from)
}

fn ease_cubic_in_out(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let flipped = 2.0f64.mul_add(-t, 2.0);
        1.0 - flipped.powi(3) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::angles::{layout_arcs, FULL_TURN};
    use crate::domain::Expense;

    const HALF: Duration = Duration::from_millis(375);
    const FULL: Duration = Duration::from_millis(750);

    fn assert_close(actual: f64, expected: f64) {
        let diff = (actual - expected).abs();
        assert!(diff < 1e-9, "expected {expected}, got {actual}, diff {diff}");
    }

    fn food_and_rent() -> Vec<Expense> {
        vec![
            Expense::new("a", "Food", 30.0),
            Expense::new("b", "Rent", 70.0),
        ]
    }

    #[test]
    fn easing_is_symmetric_and_clamped() {
        assert_close(ease_cubic_in_out(0.0), 0.0);
        assert_close(ease_cubic_in_out(0.5), 0.5);
        assert_close(ease_cubic_in_out(1.0), 1.0);
    }

    #[test]
    fn entering_slices_open_from_their_end_angle() {
        let mut animator = ArcAnimator::new();
        let t0 = Instant::now();
        animator.retarget(&layout_arcs(&food_and_rent()), t0);

        let arcs = animator.sample(t0);
        assert_eq!(arcs.len(), 2);
        for arc in &arcs {
            assert_eq!(arc.phase, Phase::Entering);
            assert!(arc.interval.is_empty(), "enter starts as a point wedge");
        }
        // Anchored at the final end angle.
        assert_close(arcs[0].interval.end, 0.3 * FULL_TURN);
        assert_close(arcs[1].interval.end, FULL_TURN);

        // Halfway through, Food has swept open half of its span.
        let arcs = animator.sample(t0 + HALF);
        assert_close(arcs[0].interval.start, 0.15 * FULL_TURN);
        assert_close(arcs[0].interval.end, 0.3 * FULL_TURN);

        // Settled: 30% and 70% shares, nothing left in flight.
        let arcs = animator.sample(t0 + FULL);
        assert_close(arcs[0].interval.span(), 0.3 * FULL_TURN);
        assert_close(arcs[1].interval.span(), 0.7 * FULL_TURN);
        assert!(animator.is_idle());
        assert!(arcs.iter().all(|arc| arc.phase == Phase::Idle));
    }

    #[test]
    fn retargeting_an_unchanged_layout_is_a_no_op() {
        let mut animator = ArcAnimator::new();
        let t0 = Instant::now();
        let specs = layout_arcs(&food_and_rent());
        animator.retarget(&specs, t0);
        animator.sample(t0 + FULL);

        let before_a = animator.remembered("a");
        animator.retarget(&specs, t0 + FULL + FULL);

        assert!(animator.is_idle(), "no tween may start for unchanged data");
        assert_eq!(animator.remembered("a"), before_a);
    }

    #[test]
    fn updates_interpolate_from_the_remembered_interval() {
        let mut animator = ArcAnimator::new();
        let t0 = Instant::now();
        animator.retarget(&layout_arcs(&food_and_rent()), t0);
        animator.sample(t0 + FULL);

        // Food drops to zero cost; Rent absorbs the whole circle.
        let t1 = t0 + FULL;
        animator.retarget(
            &layout_arcs(&[
                Expense::new("a", "Food", 0.0),
                Expense::new("b", "Rent", 70.0),
            ]),
            t1,
        );

        let arcs = animator.sample(t1 + HALF);
        assert_eq!(arcs[0].phase, Phase::Updating);
        assert_close(arcs[0].interval.start, 0.0);
        assert_close(arcs[0].interval.end, 0.15 * FULL_TURN);
        assert_close(arcs[1].interval.start, 0.15 * FULL_TURN);
        assert_close(arcs[1].interval.end, FULL_TURN);

        let arcs = animator.sample(t1 + FULL);
        assert!(arcs[0].interval.is_empty(), "zero-cost arc collapses");
        assert_close(arcs[1].interval.span(), FULL_TURN);
    }

    #[test]
    fn exiting_slices_collapse_onto_their_end_angle_then_drop() {
        let mut animator = ArcAnimator::new();
        let t0 = Instant::now();
        animator.retarget(&layout_arcs(&food_and_rent()), t0);
        animator.sample(t0 + FULL);

        let t1 = t0 + FULL;
        animator.retarget(&layout_arcs(&[Expense::new("a", "Food", 30.0)]), t1);

        let arcs = animator.sample(t1 + HALF);
        let rent = arcs
            .iter()
            .find(|arc| arc.id == "b")
            .expect("exiting slice must stay on screen while collapsing");
        assert_eq!(rent.phase, Phase::Exiting);
        assert!(!rent.phase.is_present());
        assert_close(rent.interval.end, FULL_TURN);
        assert_close(rent.interval.start, 0.65 * FULL_TURN);

        let arcs = animator.sample(t1 + FULL);
        assert!(arcs.iter().all(|arc| arc.id != "b"), "collapsed slice is dropped");
        assert_eq!(animator.remembered("b"), None);
        // The survivor now owns the circle.
        assert_close(arcs[0].interval.span(), FULL_TURN);
    }

    #[test]
    fn retargeting_mid_flight_continues_from_the_sampled_position() {
        let mut animator = ArcAnimator::new();
        let t0 = Instant::now();
        animator.retarget(&layout_arcs(&food_and_rent()), t0);

        // Interrupt the enter sweep halfway with new proportions.
        let t1 = t0 + HALF;
        animator.retarget(
            &layout_arcs(&[
                Expense::new("a", "Food", 50.0),
                Expense::new("b", "Rent", 50.0),
            ]),
            t1,
        );

        // The new tween starts exactly where the old one was sampled.
        let arcs = animator.sample(t1);
        assert_close(arcs[0].interval.start, 0.15 * FULL_TURN);
        assert_close(arcs[0].interval.end, 0.3 * FULL_TURN);

        let arcs = animator.sample(t1 + FULL);
        assert_close(arcs[0].interval.span(), 0.5 * FULL_TURN);
        assert_close(arcs[1].interval.span(), 0.5 * FULL_TURN);
    }
}
