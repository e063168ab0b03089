//! The context --- to which formulas are added and within which solves take place, etc.
//!
//! A context owns:
//! - The [formula](crate::structures::formula) under examination.
//! - The [triplet store](crate::encoder::TripletStore), once the formula has been translated.
//! - The [assignment database](crate::db::assignment), the only structure revised by a solve.
//!
//! The formula is built by clause insertion, through [add_clause](Context::add_clause) or
//! [read_dimacs](Context::read_dimacs).
//! Translation to triplets happens once, lazily, and adding a clause to a translated context
//! discards the translation (and any verdict) --- each solve examines the formula as given.
//!
//! # Example
//! ```rust
//! # use stalmarck_sat::config::Config;
//! # use stalmarck_sat::context::Context;
//! # use stalmarck_sat::reports::Report;
//! # use stalmarck_sat::structures::literal::{CLiteral, Literal};
//! let mut ctx = Context::from_config(Config::default());
//!
//! assert!(ctx.add_clause(vec![CLiteral::new(1, true), CLiteral::new(2, true)]).is_ok());
//! assert!(ctx.add_clause(vec![CLiteral::new(1, false)]).is_ok());
//!
//! assert!(ctx.solve().is_ok());
//! assert_eq!(ctx.report(), Report::Satisfiable);
//! assert_eq!(ctx.value_of(2), Some(true));
//! ```

mod counters;
pub use counters::Counters;

use crate::{
    config::Config,
    db::assignment::AssignmentDB,
    encoder::{self, TripletStore},
    reports::Report,
    structures::{
        atom::Atom,
        clause::Clause,
        formula::Formula,
        literal::Literal,
        valuation::Valuation,
    },
    types::err::{self},
};

/// The state of a context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContextState {
    /// A formula is being read in, and no verdict is known.
    Input,

    /// A solve is underway.
    Solving,

    /// The formula is known to be satisfiable, with a witnessing assignment.
    Satisfiable,

    /// The formula is known to be unsatisfiable.
    Unsatisfiable,
}

impl std::fmt::Display for ContextState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Input => write!(f, "Input"),
            Self::Solving => write!(f, "Solving"),
            Self::Satisfiable => write!(f, "Satisfiable"),
            Self::Unsatisfiable => write!(f, "Unsatisfiable"),
        }
    }
}

/// The context, the core structure of the library.
pub struct Context {
    /// The configuration of the context.
    pub config: Config,

    /// Counters related to a context/solve.
    pub counters: Counters,

    /// The formula under examination.
    pub formula: Formula,

    /// The translation of the formula to triplets, if the translation has been made.
    pub(crate) triplets: Option<TripletStore>,

    /// The assignment database.
    pub assignment: AssignmentDB,

    /// The status of the context.
    pub state: ContextState,
}

impl Context {
    /// A fresh context, using the given configuration.
    pub fn from_config(config: Config) -> Self {
        Context {
            config,
            counters: Counters::default(),
            formula: Formula::default(),
            triplets: None,
            assignment: AssignmentDB::new(1),
            state: ContextState::Input,
        }
    }

    /// A report on the state of the context.
    pub fn report(&self) -> Report {
        Report::from(&self.state)
    }

    /// Translates the formula to triplets, unless a translation is already present, and sizes
    /// the assignment database to the translation.
    pub fn encode(&mut self) -> Result<(), err::ErrorKind> {
        if self.triplets.is_none() {
            let store = encoder::encode(&self.formula)?;
            self.assignment = AssignmentDB::new(store.atom_count());
            self.triplets = Some(store);
        }
        Ok(())
    }

    /// The translation of the formula to triplets, made on first use.
    pub fn triplets(&mut self) -> Result<&TripletStore, err::ErrorKind> {
        self.encode()?;
        match self.triplets.as_ref() {
            Some(store) => Ok(store),
            None => Err(err::ErrorKind::InvalidState),
        }
    }

    /// Some value of an atom under the current assignment, or otherwise nothing.
    pub fn value_of(&self, atom: Atom) -> Option<bool> {
        self.assignment.value_of(atom)
    }

    /// The values of the original atoms as a string of DIMACS literals.
    pub fn valuation_string(&self) -> String {
        let mut string = String::default();
        for (atom, value) in self.assignment.valuation().atom_valued_pairs() {
            if atom > self.formula.num_variables() {
                break;
            }
            match value {
                true => string.push_str(format!("{atom} ").as_str()),
                false => string.push_str(format!("-{atom} ").as_str()),
            }
        }
        string.pop();
        string
    }

    /// True if the current assignment satisfies every clause of the formula, false otherwise.
    ///
    /// Only the values of original atoms are examined.
    pub fn is_satisfying_assignment(&self) -> bool {
        self.formula.clauses().all(|clause| {
            clause
                .literals()
                .any(|literal| self.assignment.eval(literal.canonical()) == Some(true))
        })
    }
}
