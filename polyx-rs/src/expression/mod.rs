// Copyright 2021 Rigetti Computing
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::{
    fmt,
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign},
};

use num_integer::Integer;

mod simplification;

/// The different possible types of errors that could occur during expression
/// evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvaluationError {
    #[error("The divisor of a quotient evaluated to zero.")]
    DivisionByZero,
}

/// The type of polynomial expressions: a finite, acyclic tree over one free
/// variable, written `X`.
///
/// Each binary variant strictly owns its two children, so a tree can be moved
/// and dropped as an ordinary value with no sharing between subtrees. Nodes
/// are never mutated after construction; [`Expression::evaluate`] borrows the
/// tree, and [`Expression::simplify`] replaces it wholesale with a newly
/// built one. Concurrent readers may therefore share a tree freely (`&`
/// references only).
///
/// Trees are built by composing variants directly, through the constructor
/// methods such as [`Expression::sum`], or with the standard arithmetic
/// operators:
///
/// ```rust
/// use polyx_rs::expression::Expression;
///
/// let by_hand = Expression::Sum(
///     Box::new(Expression::Variable),
///     Box::new(Expression::Constant(3)),
/// );
/// let by_operator = Expression::variable() + Expression::constant(3);
///
/// assert_eq!(by_hand, by_operator);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Expression {
    Constant(i64),
    Difference(Box<Expression>, Box<Expression>),
    Product(Box<Expression>, Box<Expression>),
    Quotient(Box<Expression>, Box<Expression>),
    Sum(Box<Expression>, Box<Expression>),
    Variable,
}

#[cfg(test)]
impl proptest::prelude::Arbitrary for Expression {
    type Parameters = ();
    type Strategy = proptest::prelude::BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        use proptest::prelude::*;

        let () = args;

        proptest_helpers::arb_expr().boxed()
    }
}

macro_rules! impl_expr_op {
    ($name:ident, $name_assign:ident, $function:ident, $function_assign:ident, $variant:ident) => {
        impl $name for Expression {
            type Output = Self;
            fn $function(self, other: Self) -> Self {
                Self::$variant(Box::new(self), Box::new(other))
            }
        }

        impl $name_assign for Expression {
            fn $function_assign(&mut self, other: Self) {
                // Move out of self to avoid cloning a potentially large tree
                let temp = ::std::mem::replace(self, Self::Variable);
                *self = temp.$function(other);
            }
        }
    };
}

impl_expr_op!(Add, AddAssign, add, add_assign, Sum);
impl_expr_op!(Sub, SubAssign, sub, sub_assign, Difference);
impl_expr_op!(Mul, MulAssign, mul, mul_assign, Product);
impl_expr_op!(Div, DivAssign, div, div_assign, Quotient);

impl From<i64> for Expression {
    fn from(value: i64) -> Self {
        Self::Constant(value)
    }
}

/// Compute the quotient of `dividend` and a non-zero `divisor`, rounding
/// toward negative infinity: `-7 / 2` is `-4`, not `-3`.
#[inline]
pub(crate) fn floor_div(dividend: i64, divisor: i64) -> i64 {
    dividend.div_floor(&divisor)
}

impl Expression {
    /// A `Constant` leaf holding the given value.
    pub fn constant(value: i64) -> Self {
        Self::Constant(value)
    }

    /// The `Variable` leaf, `X`.
    pub fn variable() -> Self {
        Self::Variable
    }

    /// A `Sum` node owning the given children.
    pub fn sum(left: Self, right: Self) -> Self {
        Self::Sum(left.into(), right.into())
    }

    /// A `Difference` node owning the given children.
    pub fn difference(left: Self, right: Self) -> Self {
        Self::Difference(left.into(), right.into())
    }

    /// A `Product` node owning the given children.
    pub fn product(left: Self, right: Self) -> Self {
        Self::Product(left.into(), right.into())
    }

    /// A `Quotient` node owning the given children.
    pub fn quotient(left: Self, right: Self) -> Self {
        Self::Quotient(left.into(), right.into())
    }

    /// Simplify the expression as much as possible, in-place.
    ///
    /// Simplification never fails, not even for a quotient with a literal
    /// zero divisor; that node is carried along unevaluated and only
    /// [`Expression::evaluate`] reports the failure.
    ///
    /// # Example
    ///
    /// ```rust
    /// use polyx_rs::expression::Expression;
    ///
    /// let mut expression = Expression::constant(4) + Expression::constant(3);
    /// expression.simplify();
    ///
    /// assert_eq!(expression, Expression::Constant(7));
    /// ```
    pub fn simplify(&mut self) {
        match self {
            Expression::Constant(_) | Expression::Variable => {}
            _ => *self = simplification::run(self),
        }
    }

    /// Consume the expression, simplifying it as much as possible.
    ///
    /// # Example
    ///
    /// ```rust
    /// use polyx_rs::expression::Expression;
    ///
    /// let simplified = (Expression::constant(0) + Expression::variable()).into_simplified();
    ///
    /// assert_eq!(simplified, Expression::Variable);
    /// ```
    pub fn into_simplified(mut self) -> Self {
        self.simplify();
        self
    }

    /// Evaluate the expression at the given value of the variable, folding
    /// the tree bottom-up into a single integer.
    ///
    /// Quotients divide with floor semantics (rounding toward negative
    /// infinity) and fail with [`EvaluationError::DivisionByZero`] when the
    /// divisor evaluates to zero; this is the only way evaluation can fail.
    ///
    /// # Example
    ///
    /// ```rust
    /// use polyx_rs::expression::Expression;
    ///
    /// let expression = Expression::variable() * Expression::constant(3);
    ///
    /// assert_eq!(expression.evaluate(2), Ok(6));
    /// ```
    pub fn evaluate(&self, x_value: i64) -> Result<i64, EvaluationError> {
        use Expression::*;

        match self {
            Constant(value) => Ok(*value),
            Difference(left, right) => Ok(left.evaluate(x_value)? - right.evaluate(x_value)?),
            Product(left, right) => Ok(left.evaluate(x_value)? * right.evaluate(x_value)?),
            Quotient(left, right) => {
                let dividend = left.evaluate(x_value)?;
                let divisor = right.evaluate(x_value)?;
                if divisor == 0 {
                    Err(EvaluationError::DivisionByZero)
                } else {
                    Ok(floor_div(dividend, divisor))
                }
            }
            Sum(left, right) => Ok(left.evaluate(x_value)? + right.evaluate(x_value)?),
            Variable => Ok(x_value),
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use Expression::*;
        match self {
            Constant(value) => write!(f, "{value}"),
            Difference(left, right) => {
                format_additive_operand(f, left)?;
                write!(f, " - ")?;
                format_additive_operand(f, right)
            }
            Product(left, right) => {
                format_factor(f, left)?;
                write!(f, " * ")?;
                format_factor(f, right)
            }
            Quotient(left, right) => {
                format_additive_operand(f, left)?;
                write!(f, " / ")?;
                format_additive_operand(f, right)
            }
            Sum(left, right) => write!(f, "{left} + {right}"),
            Variable => write!(f, "X"),
        }
    }
}

/// Utility function to wrap sums appearing under a product in parentheses, so
/// that the rendering preserves grouping.
///
/// Only sums are wrapped here; differences and quotients under a product stay
/// bare. That asymmetry is part of the output grammar and is kept as-is.
fn format_factor(f: &mut fmt::Formatter, operand: &Expression) -> fmt::Result {
    match operand {
        Expression::Sum(..) => write!(f, "( {operand} )"),
        _ => write!(f, "{operand}"),
    }
}

/// Utility function to wrap additive operands (sums and differences) of `-`
/// and `/` in parentheses, preserving evaluation order in the rendering.
fn format_additive_operand(f: &mut fmt::Formatter, operand: &Expression) -> fmt::Result {
    match operand {
        Expression::Sum(..) | Expression::Difference(..) => write!(f, "( {operand} )"),
        _ => write!(f, "{operand}"),
    }
}

#[cfg(test)]
mod test {
    use crate::expression::Expression;

    #[test]
    fn formats_nested_expression() {
        let expression = Expression::product(
            Expression::sum(Expression::constant(1), Expression::variable()),
            Expression::constant(2),
        );

        assert_eq!(expression.to_string(), "( 1 + X ) * 2");
    }

    #[test]
    fn sums_are_rendered_without_parentheses() {
        let expression = Expression::sum(
            Expression::sum(Expression::constant(1), Expression::constant(2)),
            Expression::sum(Expression::constant(3), Expression::variable()),
        );

        assert_eq!(expression.to_string(), "1 + 2 + 3 + X");
    }

    #[test]
    fn products_leave_differences_and_quotients_bare() {
        // Unlike sums, these operands keep their spot without parentheses.
        let expression = Expression::product(
            Expression::difference(Expression::variable(), Expression::constant(1)),
            Expression::quotient(Expression::variable(), Expression::constant(2)),
        );

        assert_eq!(expression.to_string(), "X - 1 * X / 2");
    }

    #[test]
    fn differences_parenthesize_additive_operands() {
        let expression = Expression::difference(
            Expression::sum(Expression::constant(1), Expression::variable()),
            Expression::difference(Expression::variable(), Expression::constant(1)),
        );

        assert_eq!(expression.to_string(), "( 1 + X ) - ( X - 1 )");
    }

    #[test]
    fn quotients_parenthesize_additive_operands() {
        let expression = Expression::quotient(
            Expression::sum(Expression::variable(), Expression::constant(1)),
            Expression::quotient(Expression::variable(), Expression::constant(2)),
        );

        assert_eq!(expression.to_string(), "( X + 1 ) / X / 2");
    }

    #[test]
    fn negative_constants_render_with_their_sign() {
        let expression = Expression::difference(Expression::constant(-5), Expression::variable());

        assert_eq!(expression.to_string(), "-5 - X");
    }
}

#[cfg(test)]
pub mod proptest_helpers {
    use super::*;

    use proptest::prelude::*;

    /// Leaf constants stay small so that deeply nested products cannot
    /// overflow an `i64` during evaluation or constant folding.
    pub fn arb_constant() -> impl Strategy<Value = Expression> {
        (-8i64..=8).prop_map(Expression::Constant)
    }

    /// Generate an arbitrary [`Expression`] for a property test, with custom
    /// leaf generation.
    pub fn arb_expr_custom_leaves(
        leaf: impl Strategy<Value = Expression> + 'static,
    ) -> impl Strategy<Value = Expression> {
        leaf.prop_recursive(
            4,  // No more than 4 branch levels deep
            64, // Target around 64 total nodes
            16, // Each "collection" is up to 16 elements
            |expr| {
                prop_oneof![
                    (expr.clone(), expr.clone())
                        .prop_map(|(left, right)| Expression::Sum(left.into(), right.into())),
                    (expr.clone(), expr.clone())
                        .prop_map(|(left, right)| Expression::Product(left.into(), right.into())),
                    (expr.clone(), expr.clone())
                        .prop_map(|(left, right)| Expression::Difference(left.into(), right.into())),
                    (expr.clone(), expr.clone())
                        .prop_map(|(left, right)| Expression::Quotient(left.into(), right.into())),
                ]
            },
        )
    }

    /// Generate an arbitrary [`Expression`] for a property test.
    pub fn arb_expr() -> impl Strategy<Value = Expression> {
        arb_expr_custom_leaves(prop_oneof![Just(Expression::Variable), arb_constant()])
    }

    /// Generate an [`Expression`] built from constants alone, with no
    /// occurrence of the variable.
    pub fn arb_constant_expr() -> impl Strategy<Value = Expression> {
        arb_expr_custom_leaves(arb_constant())
    }
}
