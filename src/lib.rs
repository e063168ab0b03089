//! A library for checking propositional formulas with Stålmarck's method.
//!
//! stalmarck_sat decides whether a formula in conjunctive normal form is satisfiable by
//! translating the formula to a conjunction of implication triplets, closing a partial
//! valuation under a handful of simple rules, and branching on open atoms with the dilemma
//! rule (at depth one) when propagation alone does not settle the formula.
//!
//! # Orientation
//!
//! The library is designed around the core structure of a [context](crate::context::Context).
//!
//! Contexts are built with a configuration, and clauses may be added through the
//! [DIMACS](crate::context::Context::read_dimacs) representation of a formula or
//! [programatically](crate::context::Context::add_clause).
//!
//! Internally, and at a high-level, a solve is viewed in terms of a handful of structures:
//! - A formula is stored as a collection of clauses.
//! - The formula is translated, once, to a read-only store of [triplets](crate::structures::triplet).
//! - A (partial) valuation together with a trail of the assignments made is stored in an
//!   [assignment database](crate::db::assignment), and is the only structure revised during a solve.
//!
//! Useful starting points, then, may be:
//! - The high-level [solve procedure](crate::procedures::solve) to inspect the dynamics of a solve.
//! - The [encoder](crate::encoder) for the translation of clauses to triplets.
//! - The [saturation procedure](crate::procedures::saturate) for the simple rules.
//!
//! # Examples
//!
//! + Check a pair of contradictory unit clauses.
//!
//! ```rust
//! # use stalmarck_sat::config::Config;
//! # use stalmarck_sat::context::Context;
//! # use stalmarck_sat::reports::Report;
//! # use stalmarck_sat::structures::literal::{CLiteral, Literal};
//! let mut ctx = Context::from_config(Config::default());
//!
//! assert!(ctx.add_clause(vec![CLiteral::new(1, true)]).is_ok());
//! assert!(ctx.add_clause(vec![CLiteral::new(1, false)]).is_ok());
//!
//! assert!(ctx.solve().is_ok());
//! assert_eq!(ctx.report(), Report::Unsatisfiable);
//! ```
//!
//! + Parse and solve a DIMACS formula.
//!
//! ```rust
//! # use stalmarck_sat::config::Config;
//! # use stalmarck_sat::context::Context;
//! # use stalmarck_sat::reports::Report;
//! # use std::io::Write;
//! let mut ctx = Context::from_config(Config::default());
//!
//! let mut dimacs = vec![];
//! let _ = dimacs.write(b"
//! p cnf 3 2
//!  1  2 0
//! -1  3 0
//! ");
//!
//! assert!(ctx.read_dimacs(dimacs.as_slice()).is_ok());
//! assert!(ctx.solve().is_ok());
//! assert_eq!(ctx.report(), Report::Satisfiable);
//! ```
//!
//! # Logs
//!
//! Calls to [log!](log) are made throughout the library, with a variety of targets defined to
//! help narrow output to relevant parts of a solve.
//! No log implementation is provided; the targets are listed in [misc::log].

#![allow(clippy::single_match)]
#![allow(clippy::collapsible_else_if)]

pub mod builder;
pub mod procedures;

pub mod config;
pub mod context;
pub mod structures;
pub mod types;

pub mod db;
pub mod encoder;

pub mod misc;
pub mod reports;
