//! Hyperparameter introspection and flat-vector construction.
//!
//! External tuners treat an optimizer's hyperparameters as a point in
//! `R^k`; [`Hyperparameters`] maps between that vector and the typed
//! parameter structs.

use crate::error::{OptimizerError, Result};

/// Typed hyperparameters of one optimizer.
pub trait Hyperparameters: Default + Clone {
    /// Short name of the optimizer these parameters belong to.
    const OPTIMIZER: &'static str;
    /// Names in flat-vector order.
    const NAMES: &'static [&'static str];

    /// Current values in [`NAMES`](Self::NAMES) order.
    fn values(&self) -> Vec<f64>;

    /// Set one hyperparameter by name, without range checking.
    fn set(&mut self, name: &str, value: f64) -> Result<()>;

    /// Check every value against its valid range.
    fn validate(&self) -> Result<()>;

    /// Name/value pairs, as stored in the run record.
    fn named(&self) -> Vec<(String, f64)> {
        Self::NAMES
            .iter()
            .zip(self.values())
            .map(|(n, v)| (n.to_string(), v))
            .collect()
    }

    /// Build from a flat vector in [`NAMES`](Self::NAMES) order, then validate.
    fn from_values(values: &[f64]) -> Result<Self> {
        if values.len() != Self::NAMES.len() {
            return Err(OptimizerError::HyperparameterLayout {
                optimizer: Self::OPTIMIZER,
                message: format!(
                    "expected {} values ({}), got {}",
                    Self::NAMES.len(),
                    Self::NAMES.join(", "),
                    values.len()
                ),
            });
        }
        let mut p = Self::default();
        for (name, &v) in Self::NAMES.iter().zip(values) {
            p.set(name, v)?;
        }
        p.validate()?;
        Ok(p)
    }
}

pub(crate) fn invalid(
    optimizer: &'static str,
    name: &'static str,
    value: f64,
    reason: &str,
) -> OptimizerError {
    OptimizerError::InvalidHyperparameter {
        optimizer,
        name,
        value,
        reason: reason.to_string(),
    }
}

pub(crate) fn unknown_name(optimizer: &'static str, names: &[&str], name: &str) -> OptimizerError {
    OptimizerError::HyperparameterLayout {
        optimizer,
        message: if names.is_empty() {
            format!("unknown hyperparameter '{}'; this optimizer has none", name)
        } else {
            format!(
                "unknown hyperparameter '{}'; expected one of {}",
                name,
                names.join(", ")
            )
        },
    }
}

/// Reject NaN and infinities.
pub(crate) fn require_finite(optimizer: &'static str, name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(invalid(optimizer, name, value, "must be finite"))
    }
}

/// Require `value >= 0` (and finite).
pub(crate) fn require_non_negative(
    optimizer: &'static str,
    name: &'static str,
    value: f64,
) -> Result<()> {
    require_finite(optimizer, name, value)?;
    if value < 0.0 {
        return Err(invalid(optimizer, name, value, "must be >= 0"));
    }
    Ok(())
}

/// Require `value` in `[0, 1]`.
pub(crate) fn require_probability(
    optimizer: &'static str,
    name: &'static str,
    value: f64,
) -> Result<()> {
    if !(0.0..=1.0).contains(&value) {
        return Err(invalid(optimizer, name, value, "must lie in [0, 1]"));
    }
    Ok(())
}

/// Convert a flat-vector entry to a count, rejecting fractions and negatives.
pub(crate) fn to_count(optimizer: &'static str, name: &'static str, value: f64) -> Result<usize> {
    if !value.is_finite() || value < 0.0 || value.fract() != 0.0 {
        return Err(invalid(optimizer, name, value, "must be a non-negative integer"));
    }
    Ok(value as usize)
}

/// Convert a flat-vector entry to a flag: exactly 0 or 1.
pub(crate) fn to_flag(optimizer: &'static str, name: &'static str, value: f64) -> Result<bool> {
    if value == 0.0 {
        Ok(false)
    } else if value == 1.0 {
        Ok(true)
    } else {
        Err(invalid(optimizer, name, value, "must be 0 or 1"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_count() {
        assert_eq!(to_count("BBO", "elite", 3.0).unwrap(), 3);
        assert!(to_count("BBO", "elite", 2.5).is_err());
        assert!(to_count("BBO", "elite", -1.0).is_err());
    }

    #[test]
    fn test_to_flag() {
        assert!(to_flag("GSA", "elitist", 1.0).unwrap());
        assert!(!to_flag("GSA", "elitist", 0.0).unwrap());
        assert!(to_flag("GSA", "elitist", 0.5).unwrap_err().is_configuration_error());
    }
}
