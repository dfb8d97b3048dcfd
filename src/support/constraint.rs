//! Numeric constraints checked once at construction.
//!
//! Machine parameters are validated when a model is built so the per-crank-angle
//! closures never re-check them. A [`Constrained<T, C>`] value proves that its
//! inner value passed the check of marker `C`.
//!
//! Markers provided here:
//!
//! - [`StrictlyPositive`]: `x > 0`
//! - [`NonNegative`]: `x ≥ 0`
//! - [`UnitIntervalLowerOpen`]: `0 < x ≤ 1`, used for efficiencies
//!
//! ```
//! use recip_models::support::constraint::{NonNegative, StrictlyPositive};
//!
//! assert!(StrictlyPositive::new(0.02).is_ok());
//! assert!(StrictlyPositive::new(0.0).is_err());
//! assert!(NonNegative::new(0.0).is_ok());
//! ```

use std::{cmp::Ordering, marker::PhantomData};

use num_traits::{One, Zero};
use thiserror::Error;

/// A numeric invariant enforced by [`Constrained::new`].
pub trait Constraint<T> {
    /// Checks `value` against this constraint.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] describing the violated bound.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// Reason a value was rejected by a [`Constraint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("value must not be negative")]
    Negative,
    #[error("value must not be zero")]
    Zero,
    #[error("value is not a number")]
    NotANumber,
    #[error("value is above the maximum allowed")]
    AboveMaximum,
}

/// A result type alias to use with [`Constraint`].
pub type ConstraintResult<T, E = ConstraintError> = Result<T, E>;

/// A value that satisfied constraint `C` when it was built.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Constrained<T, C: Constraint<T>> {
    value: T,
    _marker: PhantomData<C>,
}

impl<T, C: Constraint<T>> Constrained<T, C> {
    /// Checks `value` and wraps it.
    ///
    /// # Errors
    ///
    /// Returns an error if the value does not satisfy the constraint.
    pub fn new(value: T) -> ConstraintResult<Self> {
        C::check(&value)?;
        Ok(Self {
            value,
            _marker: PhantomData,
        })
    }

    /// Consumes the wrapper and returns the inner value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T: Copy, C: Constraint<T>> Constrained<T, C> {
    /// Returns a copy of the inner value.
    pub fn get(&self) -> T {
        self.value
    }
}

impl<T, C: Constraint<T>> AsRef<T> for Constrained<T, C> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}

fn compare_to_zero<T: PartialOrd + Zero>(value: &T) -> Result<Ordering, ConstraintError> {
    value
        .partial_cmp(&T::zero())
        .ok_or(ConstraintError::NotANumber)
}

/// Marker for values greater than zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrictlyPositive;

impl StrictlyPositive {
    /// Wraps `value` if it is greater than zero.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is zero, negative or `NaN`.
    pub fn new<T: PartialOrd + Zero>(value: T) -> ConstraintResult<Constrained<T, Self>> {
        Constrained::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for StrictlyPositive {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match compare_to_zero(value)? {
            Ordering::Greater => Ok(()),
            Ordering::Equal => Err(ConstraintError::Zero),
            Ordering::Less => Err(ConstraintError::Negative),
        }
    }
}

/// Marker for values that are zero or greater.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NonNegative;

impl NonNegative {
    /// Wraps `value` if it is zero or greater.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is negative or `NaN`.
    pub fn new<T: PartialOrd + Zero>(value: T) -> ConstraintResult<Constrained<T, Self>> {
        Constrained::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for NonNegative {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match compare_to_zero(value)? {
            Ordering::Greater | Ordering::Equal => Ok(()),
            Ordering::Less => Err(ConstraintError::Negative),
        }
    }
}

/// Marker for the lower-open unit interval `0 < x ≤ 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitIntervalLowerOpen;

impl UnitIntervalLowerOpen {
    /// Wraps `value` if it lies in `(0, 1]`.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not positive, exceeds one or is `NaN`.
    pub fn new<T: PartialOrd + Zero + One>(value: T) -> ConstraintResult<Constrained<T, Self>> {
        Constrained::new(value)
    }
}

impl<T: PartialOrd + Zero + One> Constraint<T> for UnitIntervalLowerOpen {
    fn check(value: &T) -> Result<(), ConstraintError> {
        StrictlyPositive::check(value)?;
        match value.partial_cmp(&T::one()) {
            Some(Ordering::Less | Ordering::Equal) => Ok(()),
            Some(Ordering::Greater) => Err(ConstraintError::AboveMaximum),
            None => Err(ConstraintError::NotANumber),
        }
    }
}
