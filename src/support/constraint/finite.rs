use num_traits::Float;

use super::{Constrained, Constraint, ConstraintError};

/// Marker for values that are neither `NaN` nor infinite.
///
/// Temperatures and gradients may take any sign, but a non-finite one would
/// carry through every margin and slip past comparisons downstream.
///
/// # Examples
///
/// ```
/// use heatsink_sizer::support::constraint::{ConstraintError, Finite};
///
/// assert!(Finite::new(-40.0).is_ok());
/// assert_eq!(Finite::new(f64::NAN).unwrap_err(), ConstraintError::NotANumber);
/// assert_eq!(Finite::new(f64::INFINITY).unwrap_err(), ConstraintError::Infinite);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Finite;

impl Finite {
    /// Constructs a [`Constrained<T, Finite>`].
    ///
    /// # Errors
    ///
    /// Returns an error if the value is `NaN` or infinite.
    pub fn new<T: Float>(value: T) -> Result<Constrained<T, Finite>, ConstraintError> {
        Constrained::<T, Finite>::new(value)
    }
}

impl<T: Float> Constraint<T> for Finite {
    fn check(value: &T) -> Result<(), ConstraintError> {
        if value.is_nan() {
            Err(ConstraintError::NotANumber)
        } else if value.is_infinite() {
            Err(ConstraintError::Infinite)
        } else {
            Ok(())
        }
    }
}
