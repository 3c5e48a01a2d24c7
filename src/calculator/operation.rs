//! Binary operators supported by the calculator.

use std::fmt;

/// A pending binary operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// Symbol used in the secondary display line and in history expressions.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }

    /// Apply the operation to two operands.
    ///
    /// Division by zero yields NaN instead of an infinity so the caller can
    /// turn it into the `Error` display.
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide => {
                if rhs == 0.0 {
                    f64::NAN
                } else {
                    lhs / rhs
                }
            }
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbols() {
        assert_eq!(Operation::Add.symbol(), "+");
        assert_eq!(Operation::Subtract.symbol(), "-");
        assert_eq!(Operation::Multiply.to_string(), "×");
        assert_eq!(Operation::Divide.to_string(), "÷");
    }

    #[test]
    fn test_apply() {
        assert_eq!(Operation::Add.apply(5.0, 3.0), 8.0);
        assert_eq!(Operation::Subtract.apply(5.0, 3.0), 2.0);
        assert_eq!(Operation::Multiply.apply(7.0, 8.0), 56.0);
        assert_eq!(Operation::Divide.apply(9.0, 3.0), 3.0);
    }

    #[test]
    fn test_division_by_zero_is_nan() {
        assert!(Operation::Divide.apply(1.0, 0.0).is_nan());
        assert!(Operation::Divide.apply(0.0, -0.0).is_nan());
    }
}
