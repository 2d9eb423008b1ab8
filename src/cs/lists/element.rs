//! Values that can be held by a list whose median is taken.
//!
//! Homogeneous numeric lists are checked at compile time through the
//! [`Element`] bound. Lists that mix kinds of values at runtime use
//! [`Value`], where a value outside the numeric order is reported as
//! [`Error::NotComparable`].

use std::cmp::Ordering;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::FromPrimitive;

use crate::error::{Error, Result};

/// A totally ordered value that converts exactly to a rational.
pub trait Element {
    /// Compares two values. `index` is the list position reported if the
    /// comparison fails.
    fn try_cmp(&self, other: &Self, index: usize) -> Result<Ordering>;

    /// Exact rational value of `self`.
    fn to_rational(&self, index: usize) -> Result<BigRational>;

    /// Fails exactly when [`Element::to_rational`] would, without building
    /// the rational.
    fn check(&self, index: usize) -> Result<()> {
        self.to_rational(index).map(|_| ())
    }
}

macro_rules! impl_element_for_int {
    ($($t:ty),*) => {
        $(
            impl Element for $t {
                fn try_cmp(&self, other: &Self, _index: usize) -> Result<Ordering> {
                    Ok(self.cmp(other))
                }

                fn to_rational(&self, _index: usize) -> Result<BigRational> {
                    Ok(BigRational::from_integer(BigInt::from(*self)))
                }

                fn check(&self, _index: usize) -> Result<()> {
                    Ok(())
                }
            }
        )*
    };
}

impl_element_for_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Element for BigInt {
    fn try_cmp(&self, other: &Self, _index: usize) -> Result<Ordering> {
        Ok(self.cmp(other))
    }

    fn to_rational(&self, _index: usize) -> Result<BigRational> {
        Ok(BigRational::from_integer(self.clone()))
    }

    fn check(&self, _index: usize) -> Result<()> {
        Ok(())
    }
}

impl Element for BigRational {
    fn try_cmp(&self, other: &Self, _index: usize) -> Result<Ordering> {
        Ok(self.cmp(other))
    }

    fn to_rational(&self, _index: usize) -> Result<BigRational> {
        Ok(self.clone())
    }

    fn check(&self, _index: usize) -> Result<()> {
        Ok(())
    }
}

// Floats convert exactly; NaN and the infinities have no rational value.
macro_rules! impl_element_for_float {
    ($($t:ty => $from:ident),*) => {
        $(
            impl Element for $t {
                fn try_cmp(&self, other: &Self, index: usize) -> Result<Ordering> {
                    self.partial_cmp(other)
                        .ok_or(Error::NotComparable { index })
                }

                fn to_rational(&self, index: usize) -> Result<BigRational> {
                    BigRational::$from(*self).ok_or(Error::NotComparable { index })
                }

                fn check(&self, index: usize) -> Result<()> {
                    if self.is_finite() {
                        Ok(())
                    } else {
                        Err(Error::NotComparable { index })
                    }
                }
            }
        )*
    };
}

impl_element_for_float!(f32 => from_f32, f64 => from_f64);

/// A dynamically typed list value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    Rational(BigRational),
    Text(String),
}

impl Element for Value {
    fn try_cmp(&self, other: &Self, index: usize) -> Result<Ordering> {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => Ok(a.cmp(b)),
            _ => Ok(self.to_rational(index)?.cmp(&other.to_rational(index)?)),
        }
    }

    fn to_rational(&self, index: usize) -> Result<BigRational> {
        match self {
            Value::Int(n) => Ok(BigRational::from_integer(BigInt::from(*n))),
            Value::Rational(r) => Ok(r.clone()),
            Value::Text(_) => Err(Error::NotComparable { index }),
        }
    }

    fn check(&self, index: usize) -> Result<()> {
        match self {
            Value::Text(_) => Err(Error::NotComparable { index }),
            _ => Ok(()),
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<BigRational> for Value {
    fn from(r: BigRational) -> Self {
        Value::Rational(r)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}
