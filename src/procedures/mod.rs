//! Procedures of the decision method, implemented as context methods.
//!
//! - [saturate](crate::context::Context::saturate) closes the valuation under the simple
//!   rules.
//! - [search](dilemma) settles open atoms by case splits, with the dilemma rule available.
//! - [solve](crate::context::Context::solve) ties the procedures together and fixes a verdict.

pub mod dilemma;
pub mod saturate;
pub mod solve;
