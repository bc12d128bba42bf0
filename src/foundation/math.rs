use std::f64::consts::{PI, TAU};

/// Fold an angular difference into `(-PI, PI]`.
///
/// Inputs produced by the walk are at most one turn away from that range, so each loop
/// runs at most a couple of times; arbitrary finite inputs still converge.
pub fn normalize_angle_delta(mut delta: f64) -> f64 {
    if !delta.is_finite() {
        return 0.0;
    }
    if delta.abs() > 4.0 * TAU {
        delta %= TAU;
    }
    while delta <= -PI {
        delta += TAU;
    }
    while delta > PI {
        delta -= TAU;
    }
    delta
}

/// One step of exponential smoothing: move `current` a `factor` fraction toward `target`.
pub fn ease_toward(current: f64, target: f64, factor: f64) -> f64 {
    current + (target - current) * factor
}

pub(crate) fn mul_div255_u16(x: u16, y: u16) -> u16 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u16
}

pub(crate) fn mul_div255_u8(x: u16, y: u16) -> u8 {
    mul_div255_u16(x, y) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
