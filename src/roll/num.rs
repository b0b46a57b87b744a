use super::error::ArithmeticError;
use crate::common::*;
use serde::Serialize;
use std::fmt;

/// A scalar outcome. Stays integral until a division is involved.
#[derive(Debug, Copy, Clone, Serialize)]
#[serde(untagged)]
pub enum Number {
    Int(Int),
    Float(Float),
}

impl Number {
    pub(crate) const ZERO: Self = Self::Int(0);

    pub fn as_float(self) -> Float {
        match self {
            Self::Int(x) => x as Float,
            Self::Float(x) => x,
        }
    }

    fn is_zero(self) -> bool {
        self.as_float() == 0.0
    }

    /// Computes `self <op> rhs`. Division always yields a float.
    pub fn apply(self, op: BinaryOperator, rhs: Self) -> Result<Self, ArithmeticError> {
        use BinaryOperator::*;

        if op == Div {
            return if rhs.is_zero() {
                Err(ArithmeticError::ZeroDivision)
            } else {
                Ok(Self::Float(self.as_float() / rhs.as_float()))
            };
        }

        Ok(match (self, rhs) {
            (Self::Int(x), Self::Int(y)) => {
                let z = match op {
                    Add => x.checked_add(y),
                    Sub => x.checked_sub(y),
                    Mul => x.checked_mul(y),
                    Div => unreachable!("handled above"),
                };
                Self::Int(z.ok_or(ArithmeticError::Overflow)?)
            }
            (x, y) => {
                let (x, y) = (x.as_float(), y.as_float());
                Self::Float(match op {
                    Add => x + y,
                    Sub => x - y,
                    Mul => x * y,
                    Div => unreachable!("handled above"),
                })
            }
        })
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.as_float().eq(&other.as_float())
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.as_float().partial_cmp(&other.as_float())
    }
}

impl From<Int> for Number {
    fn from(x: Int) -> Self {
        Self::Int(x)
    }
}

impl From<Float> for Number {
    fn from(x: Float) -> Self {
        Self::Float(x)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(x) => fmt::Display::fmt(x, f),
            Self::Float(x) => fmt::Debug::fmt(x, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use BinaryOperator::*;

    #[test]
    fn test_apply() {
        let n = |x: Int| Number::Int(x);
        assert_eq!(n(2).apply(Add, n(3)), Ok(n(5)));
        assert_eq!(n(2).apply(Sub, n(3)), Ok(n(-1)));
        assert_eq!(n(2).apply(Mul, n(3)), Ok(n(6)));
        assert_eq!(n(7).apply(Div, n(2)), Ok(Number::Float(3.5)));
        assert_eq!(Number::Float(1.5).apply(Add, n(1)), Ok(Number::Float(2.5)));
        assert_eq!(n(10).apply(Div, n(0)), Err(ArithmeticError::ZeroDivision));
        assert_eq!(n(Int::MAX).apply(Add, n(1)), Err(ArithmeticError::Overflow));
    }

    #[test]
    fn test_display() {
        assert_eq!(Number::Int(14).to_string(), "14");
        assert_eq!(Number::Float(3.0).to_string(), "3.0");
        assert_eq!(Number::Float(2.5).to_string(), "2.5");
    }
}
