use crate::foundation::math::normalize_angle_delta;

/// Degrees of heading per digit value: digit `d` points at `d * 36` degrees.
pub const DEGREES_PER_DIGIT: f64 = 36.0;

/// Fraction of the remaining turn applied per step.
pub const HEADING_EASING: f64 = 0.15;

/// Result of feeding one digit through the smoother.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeadingUpdate {
    /// Heading the digit points at, in radians within `[0, 2*PI)`.
    pub target: f64,
    /// Shortest signed turn from the previous heading to `target`, in `(-PI, PI]`.
    pub delta: f64,
    /// Smoothed heading after this step.
    pub heading: f64,
}

/// Eases the walker's heading toward each digit's direction along the shorter arc.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeadingSmoother {
    easing: f64,
}

impl Default for HeadingSmoother {
    fn default() -> Self {
        Self {
            easing: HEADING_EASING,
        }
    }
}

impl HeadingSmoother {
    /// Target heading for a digit, in radians.
    pub fn target_for_digit(digit: u8) -> f64 {
        (f64::from(digit) * DEGREES_PER_DIGIT).to_radians()
    }

    /// Advance `heading` one step toward `digit`'s direction.
    ///
    /// The heading itself is unbounded (it accumulates turns), only the difference is
    /// folded, so the walker never spins the long way around.
    pub fn advance(&self, heading: f64, digit: u8) -> HeadingUpdate {
        let target = Self::target_for_digit(digit);
        let delta = normalize_angle_delta(target - heading);
        HeadingUpdate {
            target,
            delta,
            heading: heading + delta * self.easing,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/walk/heading.rs"]
mod tests;
