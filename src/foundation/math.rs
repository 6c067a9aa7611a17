use crate::foundation::core::DVec3;
use crate::foundation::error::{LunaError, LunaResult};

/// Fraction of the remaining distance covered by one exponential-smoothing step.
pub(crate) fn smoothing_factor(dt: f64, rate: f64) -> f64 {
    (dt * rate).clamp(0.0, 1.0)
}

pub(crate) fn ensure_finite_non_negative(field: &str, value: f64) -> LunaResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(LunaError::validation(format!(
            "{field} must be finite and >= 0 (got {value})"
        )));
    }
    Ok(())
}

pub(crate) fn ensure_positive(field: &str, value: f64) -> LunaResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(LunaError::validation(format!(
            "{field} must be finite and > 0 (got {value})"
        )));
    }
    Ok(())
}

pub(crate) fn ensure_finite_vec3(field: &str, v: DVec3) -> LunaResult<()> {
    if !v.is_finite() {
        return Err(LunaError::validation(format!("{field} must be finite")));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
