/// Wrap `value` into `[0, period)`. Non-positive or non-finite periods collapse to `0`.
pub(crate) fn wrap(value: f64, period: f64) -> f64 {
    if !period.is_finite() || period <= 0.0 || !value.is_finite() {
        return 0.0;
    }
    let w = value.rem_euclid(period);
    // rem_euclid may round up to `period` for tiny negative inputs.
    if w >= period { 0.0 } else { w }
}

/// Triangular envelope over `fraction` in `[0, 1]`: rises linearly to `max` at `peak`, then
/// falls back to `0` at `1`. Values outside the unit range evaluate to `0`.
pub(crate) fn peak_alpha(fraction: f64, peak: f64, max: f64) -> f64 {
    if !fraction.is_finite() || !(0.0..=1.0).contains(&fraction) {
        return 0.0;
    }
    let peak = peak.clamp(f64::EPSILON, 1.0 - f64::EPSILON);
    if fraction < peak {
        max * fraction / peak
    } else {
        max * (1.0 - fraction) / (1.0 - peak)
    }
}

/// Convert an alpha value in `0..=255` to a unit opacity.
pub(crate) fn alpha_to_opacity(alpha: f64) -> f32 {
    if !alpha.is_finite() {
        return 0.0;
    }
    (alpha.clamp(0.0, 255.0) / 255.0) as f32
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
