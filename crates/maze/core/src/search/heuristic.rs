use crate::config::ConfigError;
use crate::grid::{Cell, DIAGONAL_COST, ORTHOGONAL_COST};

/// Octile distance under the 10/14 step-cost model:
/// `10 * max(dx, dy) + 4 * min(dx, dy)`.
pub fn octile_distance(from: Cell, to: Cell) -> u32 {
    let dr = from.row.abs_diff(to.row);
    let dc = from.col.abs_diff(to.col);
    ORTHOGONAL_COST * dr.max(dc) + (DIAGONAL_COST - ORTHOGONAL_COST) * dr.min(dc)
}

/// Cost-to-go estimate used to order the A* open set.
///
/// With weight `1.0` the estimate never exceeds the true remaining cost, so
/// returned paths are least-cost. A larger weight makes the search greedier:
/// fewer expansions, but paths may be longer than optimal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Heuristic {
    weight: f64,
}

impl Heuristic {
    /// Unweighted octile distance; guarantees optimal paths.
    pub const ADMISSIBLE: Self = Self { weight: 1.0 };

    /// Octile distance scaled by `weight`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidHeuristicWeight`] unless `weight` is a
    /// finite number `>= 1.0`.
    pub fn weighted(weight: f64) -> Result<Self, ConfigError> {
        if !weight.is_finite() || weight < 1.0 {
            return Err(ConfigError::InvalidHeuristicWeight(weight));
        }
        Ok(Self { weight })
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn is_admissible(&self) -> bool {
        self.weight == 1.0
    }

    pub fn estimate(&self, from: Cell, to: Cell) -> u32 {
        let base = octile_distance(from, to);
        if self.is_admissible() {
            base
        } else {
            (f64::from(base) * self.weight).round() as u32
        }
    }
}

impl Default for Heuristic {
    fn default() -> Self {
        Self::ADMISSIBLE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn octile_distance_matches_step_costs() {
        let origin = Cell::new(0, 0);
        assert_eq!(octile_distance(origin, origin), 0);
        assert_eq!(octile_distance(origin, Cell::new(0, 3)), 30);
        assert_eq!(octile_distance(origin, Cell::new(2, 2)), 28);
        assert_eq!(octile_distance(origin, Cell::new(-3, 1)), 34);
    }

    #[test]
    fn weight_scales_estimate() {
        let h = Heuristic::weighted(1.5).unwrap();
        assert!(!h.is_admissible());
        assert_eq!(h.estimate(Cell::new(0, 0), Cell::new(0, 4)), 60);
    }

    #[test]
    fn rejects_weights_below_one() {
        assert!(Heuristic::weighted(0.99).is_err());
        assert!(Heuristic::weighted(f64::NAN).is_err());
        assert!(Heuristic::weighted(1.0).unwrap().is_admissible());
    }
}
