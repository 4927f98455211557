//! Numeric invariants checked once, at construction.
//!
//! Sizing inputs arrive from tables and forms, so every quantity that has a
//! physical sign or range (pad dimensions, powers, efficiencies) is passed
//! through a [`Constrained<T, C>`] wrapper before the engine sees it.
//! After construction the wrapper costs nothing.
//!
//! # Provided constraints
//!
//! - [`NonNegative`]: zero or greater (lengths, powers, resistances)
//! - [`StrictlyPositive`]: greater than zero (margin ratio, conductivities)
//! - [`UnitIntervalLowerOpen`]: `0 < x ≤ 1` (efficiencies, wetted fractions)
//! - [`Finite`]: neither `NaN` nor infinite (temperatures, gradients)
//!
//! New invariants are added by implementing [`Constraint<T>`] for a
//! zero-sized marker type.

mod finite;
mod non_negative;
mod strictly_positive;
mod unit_interval;

use std::{iter::Sum, marker::PhantomData, ops::Add};

use num_traits::Zero;
use thiserror::Error;

pub use finite::Finite;
pub use non_negative::NonNegative;
pub use strictly_positive::StrictlyPositive;
pub use unit_interval::UnitIntervalLowerOpen;

/// A numeric invariant enforced by [`Constrained`].
pub trait Constraint<T> {
    /// Checks that `value` satisfies the invariant.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] describing the violation.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// The ways a value can violate a [`Constraint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("value must not be negative")]
    Negative,
    #[error("value must not be zero")]
    Zero,
    #[error("value is not a number")]
    NotANumber,
    #[error("value must be finite")]
    Infinite,
    #[error("value is below the minimum allowed")]
    BelowMinimum,
    #[error("value is above the maximum allowed")]
    AboveMaximum,
}

/// Result alias for fallible constrained construction.
pub type ConstraintResult<T, E = ConstraintError> = Result<T, E>;

/// A value of type `T` known to satisfy the constraint `C`.
///
/// # Example
///
/// ```
/// use heatsink_sizer::support::constraint::{Constrained, NonNegative};
/// use uom::si::{f64::Length, length::millimeter};
///
/// let pad = Constrained::<_, NonNegative>::new(Length::new::<millimeter>(12.0)).unwrap();
/// assert_eq!(pad.into_inner().get::<millimeter>(), 12.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Constrained<T, C: Constraint<T>> {
    value: T,
    _marker: PhantomData<C>,
}

impl<T, C: Constraint<T>> Constrained<T, C> {
    /// Wraps `value` after checking it against `C`.
    ///
    /// # Errors
    ///
    /// Returns an error if the value does not satisfy the constraint.
    pub fn new(value: T) -> Result<Self, ConstraintError> {
        C::check(&value)?;
        Ok(Self {
            value,
            _marker: PhantomData,
        })
    }

    /// Consumes the wrapper and returns the checked value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

/// Sums constrained values whose constraint survives addition.
impl<T, C> Sum for Constrained<T, C>
where
    C: Constraint<T>,
    Constrained<T, C>: Add<Output = Self> + Zero,
{
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |a, b| a + b)
    }
}
