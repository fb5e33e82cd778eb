use crate::domain::Expense;

/// A full revolution, the total angle the chart divides up.
pub const FULL_TURN: f64 = std::f64::consts::TAU;

/// Spans narrower than this are treated as empty.
pub const ANGLE_EPS: f64 = 1e-9;

/// An arc's angular position, measured clockwise from twelve o'clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcInterval {
    pub start: f64,
    pub end: f64,
}

impl ArcInterval {
    pub const fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// The zero-width interval sitting at `angle`.
    pub const fn point(angle: f64) -> Self {
        Self {
            start: angle,
            end: angle,
        }
    }

    pub fn span(self) -> f64 {
        self.end - self.start
    }

    pub fn is_empty(self) -> bool {
        self.span() <= ANGLE_EPS
    }

    pub fn midpoint(self) -> f64 {
        (self.start + self.end) / 2.0
    }

    pub fn contains(self, angle: f64) -> bool {
        angle >= self.start && angle < self.end
    }

    pub fn approx_eq(self, other: Self) -> bool {
        (self.start - other.start).abs() <= ANGLE_EPS && (self.end - other.end).abs() <= ANGLE_EPS
    }
}

/// One record's slot in the pie: its data plus the computed interval.
#[derive(Debug, Clone, PartialEq)]
pub struct ArcSpec {
    pub id: String,
    pub name: String,
    pub cost: f64,
    pub interval: ArcInterval,
}

/// Divides the circle among `records` in order, each span proportional to
/// its share of the total cost. Zero-cost records occupy zero angle; when
/// every cost is zero nothing occupies any angle at all.
pub fn layout_arcs(records: &[Expense]) -> Vec<ArcSpec> {
    let total: f64 = records.iter().map(|record| record.cost.max(0.0)).sum();
    let mut cursor = 0.0;

    records
        .iter()
        .map(|record| {
            let share = if total > 0.0 {
                record.cost.max(0.0) / total
            } else {
                0.0
            };
            let start = cursor;
            cursor += share * FULL_TURN;
            ArcSpec {
                id: record.id.clone(),
                name: record.name.clone(),
                cost: record.cost,
                interval: ArcInterval::new(start, cursor),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expense(id: &str, name: &str, cost: f64) -> Expense {
        Expense::new(id, name, cost)
    }

    #[test]
    fn spans_are_proportional_to_cost_share() {
        let arcs = layout_arcs(&[
            expense("a", "Food", 30.0),
            expense("b", "Rent", 70.0),
        ]);

        assert_eq!(arcs.len(), 2);
        assert!((arcs[0].interval.span() - 0.3 * FULL_TURN).abs() < 1e-9);
        assert!((arcs[1].interval.span() - 0.7 * FULL_TURN).abs() < 1e-9);
    }

    #[test]
    fn intervals_tile_the_full_circle() {
        let arcs = layout_arcs(&[
            expense("a", "Food", 12.5),
            expense("b", "Rent", 61.2),
            expense("c", "Fun", 9.3),
            expense("d", "Travel", 17.0),
        ]);

        let total_span: f64 = arcs.iter().map(|arc| arc.interval.span()).sum();
        assert!((total_span - FULL_TURN).abs() < 1e-9);

        // Contiguous, in record order, starting at twelve o'clock.
        assert!(arcs[0].interval.start.abs() < 1e-9);
        for pair in arcs.windows(2) {
            assert!((pair[0].interval.end - pair[1].interval.start).abs() < 1e-9);
        }
    }

    #[test]
    fn zero_cost_records_occupy_zero_angle() {
        let arcs = layout_arcs(&[
            expense("a", "Food", 0.0),
            expense("b", "Rent", 70.0),
        ]);

        assert!(arcs[0].interval.is_empty());
        assert!((arcs[1].interval.span() - FULL_TURN).abs() < 1e-9);
    }

    #[test]
    fn all_zero_costs_yield_only_empty_intervals() {
        let arcs = layout_arcs(&[
            expense("a", "Food", 0.0),
            expense("b", "Rent", 0.0),
        ]);

        assert!(arcs.iter().all(|arc| arc.interval.is_empty()));
    }

    #[test]
    fn negative_costs_are_clamped_out_of_the_layout() {
        let arcs = layout_arcs(&[
            expense("a", "Refund", -10.0),
            expense("b", "Rent", 50.0),
        ]);

        assert!(arcs[0].interval.is_empty());
        assert!((arcs[1].interval.span() - FULL_TURN).abs() < 1e-9);
    }

    #[test]
    fn contains_is_half_open() {
        let interval = ArcInterval::new(1.0, 2.0);
        assert!(interval.contains(1.0));
        assert!(interval.contains(1.999));
        assert!(!interval.contains(2.0));
        assert!(!interval.contains(0.5));
    }
}
