use std::cmp::Ordering;

use num_traits::{One, Zero};

use super::{Constrained, Constraint, ConstraintError};

/// Marker for fractions in the lower-open unit interval `0 < x ≤ 1`.
///
/// Efficiencies and wetted-area fractions live here: one means ideal, and
/// zero would describe a path that carries no heat at all, which the
/// resistance formulas cannot represent.
///
/// # Examples
///
/// ```
/// use heatsink_sizer::support::constraint::UnitIntervalLowerOpen;
///
/// let via_efficiency = UnitIntervalLowerOpen::new(0.8).unwrap();
/// assert_eq!(via_efficiency.into_inner(), 0.8);
///
/// assert!(UnitIntervalLowerOpen::new(1.0).is_ok());
/// assert!(UnitIntervalLowerOpen::new(0.0).is_err());
/// assert!(UnitIntervalLowerOpen::new(1.01).is_err());
/// assert!(UnitIntervalLowerOpen::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct UnitIntervalLowerOpen;

impl UnitIntervalLowerOpen {
    /// Constructs a [`Constrained<T, UnitIntervalLowerOpen>`].
    ///
    /// # Errors
    ///
    /// - [`ConstraintError::BelowMinimum`] if the value is zero or less.
    /// - [`ConstraintError::AboveMaximum`] if the value exceeds one.
    /// - [`ConstraintError::NotANumber`] if the value is `NaN`.
    pub fn new<T: PartialOrd + Zero + One>(
        value: T,
    ) -> Result<Constrained<T, UnitIntervalLowerOpen>, ConstraintError> {
        Constrained::<T, UnitIntervalLowerOpen>::new(value)
    }
}

impl<T: PartialOrd + Zero + One> Constraint<T> for UnitIntervalLowerOpen {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match (value.partial_cmp(&T::zero()), value.partial_cmp(&T::one())) {
            (None, _) | (_, None) => Err(ConstraintError::NotANumber),
            (Some(Ordering::Less | Ordering::Equal), _) => Err(ConstraintError::BelowMinimum),
            (_, Some(Ordering::Greater)) => Err(ConstraintError::AboveMaximum),
            _ => Ok(()),
        }
    }
}
