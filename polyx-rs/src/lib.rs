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

//! Tooling for building, evaluating, simplifying, and printing arithmetic
//! expressions in a single free variable.
//!
//! Within this crate you'll find:
//!
//! * Builder utilities for polynomial [expressions], including the usual
//!   arithmetic operators over [`Expression`] values
//! * An [evaluator] which reduces an expression to a single integer given a
//!   value for the variable
//! * A [simplifier] which rewrites an expression into an equivalent,
//!   smaller-or-equal form
//! * A canonical, precedence-aware text rendering through [`Display`]
//!
//! [expressions]: crate::expression::Expression
//! [evaluator]: crate::expression::Expression#method.evaluate
//! [simplifier]: crate::expression::Expression#method.simplify
//! [`Display`]: std::fmt::Display

pub mod expression;

pub use expression::Expression;
