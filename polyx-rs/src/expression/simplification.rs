//! Rewrite machinery for simplifying [`Expression`]s.

use crate::expression::{floor_div, Expression};

/// Simplify an [`Expression`].
pub(super) fn run(expression: &Expression) -> Expression {
    simplify(expression)
}

/// Recursively simplify an [`Expression`], breaking into cases to make things
/// more manageable.
///
/// Recursion is post-order: both children are rewritten first, so every rule
/// below sees operands already in simplest form and the node it returns needs
/// no further pass.
fn simplify(e: &Expression) -> Expression {
    match e {
        Expression::Constant(_) | Expression::Variable => e.clone(),
        Expression::Sum(left, right) => simplify_sum(left, right),
        Expression::Product(left, right) => simplify_product(left, right),
        Expression::Difference(left, right) => simplify_difference(left, right),
        Expression::Quotient(left, right) => simplify_quotient(left, right),
    }
}

fn simplify_sum(left: &Expression, right: &Expression) -> Expression {
    match (simplify(left), simplify(right)) {
        // Adding with zero
        (Expression::Constant(0), right) => right,
        (left, Expression::Constant(0)) => left,
        // Adding constants
        (Expression::Constant(x), Expression::Constant(y)) => Expression::Constant(x + y),
        (left, right) => Expression::Sum(left.into(), right.into()),
    }
}

fn simplify_product(left: &Expression, right: &Expression) -> Expression {
    match (simplify(left), simplify(right)) {
        // Multiplication with zero
        (Expression::Constant(0), _) | (_, Expression::Constant(0)) => Expression::Constant(0),
        // Multiplication with one
        (Expression::Constant(1), right) => right,
        (left, Expression::Constant(1)) => left,
        // Multiplying constants
        (Expression::Constant(x), Expression::Constant(y)) => Expression::Constant(x * y),
        (left, right) => Expression::Product(left.into(), right.into()),
    }
}

fn simplify_difference(left: &Expression, right: &Expression) -> Expression {
    match (simplify(left), simplify(right)) {
        // Subtracting zero
        (left, Expression::Constant(0)) => left,
        // Subtracting constants
        (Expression::Constant(x), Expression::Constant(y)) => Expression::Constant(x - y),
        (left, right) => Expression::Difference(left.into(), right.into()),
    }
}

fn simplify_quotient(left: &Expression, right: &Expression) -> Expression {
    match (simplify(left), simplify(right)) {
        // A zero dividend, unless the divisor is itself the literal zero
        (Expression::Constant(0), right) if right != Expression::Constant(0) => {
            Expression::Constant(0)
        }
        // Division with one
        (left, Expression::Constant(1)) => left,
        // Dividing constants, with floor semantics; a zero constant divisor
        // stays unevaluated so that only evaluation reports the failure
        (Expression::Constant(x), Expression::Constant(y)) if y != 0 => {
            Expression::Constant(floor_div(x, y))
        }
        (left, right) => Expression::Quotient(left.into(), right.into()),
    }
}
