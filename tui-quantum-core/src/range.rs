//! Two-thumb range values
//!
//! A range value is a `(left, right)` pair on a [`Scale`]. Both ends are
//! always guarded and ordered, and keyboard steps never let one thumb pass the
//! other.

use serde::{Deserialize, Serialize};

use crate::scale::Scale;

/// Which thumb of a range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RangeSide {
    #[default]
    Left,
    Right,
}

impl RangeSide {
    /// The other thumb
    pub fn toggle(self) -> Self {
        match self {
            RangeSide::Left => RangeSide::Right,
            RangeSide::Right => RangeSide::Left,
        }
    }
}

/// Guard both ends and order them so `left <= right`
pub fn guard_range(scale: &Scale, (left, right): (f64, f64)) -> (f64, f64) {
    let left = scale.guard(left);
    let right = scale.guard(right);
    (left.min(right), left.max(right))
}

/// Move one thumb by a single keyboard step ([`Scale::key_step`])
///
/// The moving thumb stops at the other one instead of crossing it. Returns
/// `None` when the value would not change (at a bound, thumbs touching, or a
/// zero step).
pub fn step_range(
    scale: &Scale,
    (left, right): (f64, f64),
    side: RangeSide,
    increment: bool,
) -> Option<(f64, f64)> {
    let step = if increment {
        scale.key_step()
    } else {
        -scale.key_step()
    };

    let next = match side {
        RangeSide::Left => (scale.guard(left + step).min(right), right),
        RangeSide::Right => (left, scale.guard(right + step).max(left)),
    };

    if next == (left, right) {
        return None;
    }
    Some(guard_range(scale, next))
}

/// Which thumb moved between two values, left wins when both did
pub fn changed_side(old: (f64, f64), new: (f64, f64)) -> Option<RangeSide> {
    if old.0 != new.0 {
        Some(RangeSide::Left)
    } else if old.1 != new.1 {
        Some(RangeSide::Right)
    } else {
        None
    }
}

/// Thumb closest to `point`
///
/// When the thumbs overlap, the side `point` lies on decides, so a drag can
/// pull them apart.
pub fn nearest_side((left, right): (f64, f64), point: f64) -> RangeSide {
    if left == right {
        return if point > right {
            RangeSide::Right
        } else {
            RangeSide::Left
        };
    }
    if (point - left).abs() <= (point - right).abs() {
        RangeSide::Left
    } else {
        RangeSide::Right
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quantum::{Bounds, Quantum};

    fn scale() -> Scale {
        Scale::new(Bounds::new(0.0, 10.0).unwrap()).with_quantum(Some(Quantum::new(1.0).unwrap()))
    }

    #[test]
    fn test_guard_orders_ends() {
        assert_eq!(guard_range(&scale(), (7.2, 2.6)), (3.0, 7.0));
        assert_eq!(guard_range(&scale(), (-5.0, 50.0)), (0.0, 10.0));
    }

    #[test]
    fn test_step_moves_active_side() {
        let s = scale();
        assert_eq!(step_range(&s, (2.0, 8.0), RangeSide::Left, true), Some((3.0, 8.0)));
        assert_eq!(step_range(&s, (2.0, 8.0), RangeSide::Left, false), Some((1.0, 8.0)));
        assert_eq!(step_range(&s, (2.0, 8.0), RangeSide::Right, true), Some((2.0, 9.0)));
        assert_eq!(step_range(&s, (2.0, 8.0), RangeSide::Right, false), Some((2.0, 7.0)));
    }

    #[test]
    fn test_step_never_crosses() {
        let s = scale();
        assert_eq!(step_range(&s, (5.0, 5.0), RangeSide::Left, true), None);
        assert_eq!(step_range(&s, (5.0, 5.0), RangeSide::Right, false), None);
        assert_eq!(step_range(&s, (4.0, 5.0), RangeSide::Left, true), Some((5.0, 5.0)));
    }

    #[test]
    fn test_step_stops_at_bounds() {
        let s = scale();
        assert_eq!(step_range(&s, (0.0, 4.0), RangeSide::Left, false), None);
        assert_eq!(step_range(&s, (4.0, 10.0), RangeSide::Right, true), None);
    }

    #[test]
    fn test_step_uses_explicit_steps() {
        let s = scale().with_steps(2);
        assert_eq!(step_range(&s, (0.0, 10.0), RangeSide::Left, true), Some((5.0, 10.0)));
    }

    #[test]
    fn test_step_without_quantum_moves_a_hundredth() {
        let s = Scale::new(Bounds::new(0.0, 100.0).unwrap()).with_quantum(None);
        assert_eq!(step_range(&s, (10.0, 90.0), RangeSide::Left, true), Some((11.0, 90.0)));
        assert_eq!(step_range(&s, (10.0, 90.0), RangeSide::Right, false), Some((10.0, 89.0)));
    }

    #[test]
    fn test_changed_side() {
        assert_eq!(changed_side((1.0, 2.0), (0.0, 2.0)), Some(RangeSide::Left));
        assert_eq!(changed_side((1.0, 2.0), (1.0, 3.0)), Some(RangeSide::Right));
        assert_eq!(changed_side((1.0, 2.0), (1.0, 2.0)), None);
    }

    #[test]
    fn test_nearest_side() {
        assert_eq!(nearest_side((2.0, 8.0), 3.0), RangeSide::Left);
        assert_eq!(nearest_side((2.0, 8.0), 7.0), RangeSide::Right);
        assert_eq!(nearest_side((5.0, 5.0), 9.0), RangeSide::Right);
        assert_eq!(nearest_side((5.0, 5.0), 1.0), RangeSide::Left);
        assert_eq!(RangeSide::Left.toggle(), RangeSide::Right);
    }
}
