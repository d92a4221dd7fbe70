// ============================================================================
// Amount
// A measured quantity: exact integer, or estimate with absolute error
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The value of an [`Amount`]: exactly one branch is active.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AmountValue {
    /// An exact integer with no associated uncertainty
    Exact(i64),
    /// A measured value with a non-negative absolute error
    Measured {
        /// The measured/estimated value
        estimate: f64,
        /// Uncertainty magnitude, in the same unit as the estimate
        error: f64,
    },
}

/// A quantity with optional measurement uncertainty and an opaque unit.
///
/// The unit type `U` is never interpreted here; it travels through the
/// formatter to the unit service unchanged.
///
/// # Example
/// ```
/// use amount_format::domain::Amount;
///
/// let exact = Amount::exact(5, "m".to_string());
/// assert!(exact.is_exact());
///
/// let measured = Amount::measured(1.34, 0.01, "m".to_string());
/// assert_eq!(measured.estimated_value(), 1.34);
/// assert_eq!(measured.absolute_error(), 0.01);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Amount<U> {
    value: AmountValue,
    unit: U,
}

impl<U> Amount<U> {
    /// Creates an exact quantity.
    pub fn exact(value: i64, unit: U) -> Self {
        Self {
            value: AmountValue::Exact(value),
            unit,
        }
    }

    /// Creates a measured quantity. The error magnitude is taken as an
    /// absolute value.
    pub fn measured(estimate: f64, error: f64, unit: U) -> Self {
        Self {
            value: AmountValue::Measured {
                estimate,
                error: error.abs(),
            },
            unit,
        }
    }

    /// The active value branch.
    pub fn value(&self) -> &AmountValue {
        &self.value
    }

    /// True iff the quantity carries no uncertainty.
    pub fn is_exact(&self) -> bool {
        matches!(self.value, AmountValue::Exact(_))
    }

    /// The exact integer value, when this quantity is exact.
    pub fn exact_value(&self) -> Option<i64> {
        match self.value {
            AmountValue::Exact(value) => Some(value),
            AmountValue::Measured { .. } => None,
        }
    }

    /// The estimated value; exact quantities report their integer value.
    pub fn estimated_value(&self) -> f64 {
        match self.value {
            AmountValue::Exact(value) => value as f64,
            AmountValue::Measured { estimate, .. } => estimate,
        }
    }

    /// The absolute error; zero for exact quantities.
    pub fn absolute_error(&self) -> f64 {
        match self.value {
            AmountValue::Exact(_) => 0.0,
            AmountValue::Measured { error, .. } => error,
        }
    }

    /// The unit handle.
    pub fn unit(&self) -> &U {
        &self.unit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_accessors() {
        let amount = Amount::exact(-7, "kg");
        assert!(amount.is_exact());
        assert_eq!(amount.exact_value(), Some(-7));
        assert_eq!(amount.estimated_value(), -7.0);
        assert_eq!(amount.absolute_error(), 0.0);
        assert_eq!(*amount.unit(), "kg");
    }

    #[test]
    fn test_measured_accessors() {
        let amount = Amount::measured(1.34, 0.01, "m");
        assert!(!amount.is_exact());
        assert_eq!(amount.exact_value(), None);
        assert_eq!(amount.estimated_value(), 1.34);
        assert_eq!(amount.absolute_error(), 0.01);
    }

    #[test]
    fn test_measured_error_is_absolute() {
        let amount = Amount::measured(1.0, -0.5, "s");
        assert_eq!(amount.absolute_error(), 0.5);
    }

    #[test]
    fn test_value_branch_is_exclusive() {
        assert!(matches!(Amount::exact(1, ()).value(), AmountValue::Exact(1)));
        assert!(matches!(
            Amount::measured(1.0, 0.1, ()).value(),
            AmountValue::Measured { .. }
        ));
    }
}
