/*!
Tools for building a context.

The library has two methods for getting a formula into a context:
- [add_clause](crate::context::Context::add_clause), to add a single clause.
- [read_dimacs](crate::context::Context::read_dimacs), to read a DIMACS representation of a
  formula.

Clauses are added exactly as given.
In particular, duplicate literals are kept as distinct positions and tautological clauses are
kept whole --- the simple rules collapse both during propagation, and neither influences the
verdict.
*/

mod dimacs;
pub use dimacs::ParserInfo;

use crate::{
    context::{Context, ContextState},
    structures::{clause::CClause, literal::Literal},
    types::err::{self, BuildError},
};

/// Ok results when adding a clause to the context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClauseOk {
    /// The clause was added to the context.
    Added,
}

impl Context {
    /// Adds a clause to the formula of the context.
    ///
    /// Any standing translation of the formula (and with it, any verdict) is discarded, as
    /// the translation no longer reflects the formula.
    pub fn add_clause(&mut self, clause: CClause) -> Result<ClauseOk, err::ErrorKind> {
        for literal in &clause {
            if literal.atom() == 0 {
                return Err(err::ErrorKind::from(BuildError::ReservedAtom));
            }
        }

        self.formula.add_clause(clause);
        self.triplets = None;
        self.state = ContextState::Input;

        Ok(ClauseOk::Added)
    }
}

#[cfg(test)]
mod builder_tests {
    use super::*;
    use crate::config::Config;
    use crate::structures::literal::CLiteral;

    #[test]
    fn reserved_atom_rejected() {
        let mut ctx = Context::from_config(Config::default());

        assert_eq!(
            ctx.add_clause(vec![CLiteral::FALSUM]),
            Err(err::ErrorKind::Build(BuildError::ReservedAtom))
        );
    }

    #[test]
    fn addition_resets_translation() {
        let mut ctx = Context::from_config(Config::default());

        assert!(ctx.add_clause(vec![CLiteral::new(1, true)]).is_ok());
        assert!(ctx.encode().is_ok());
        assert!(ctx.triplets.is_some());

        assert!(ctx.add_clause(vec![CLiteral::new(2, true)]).is_ok());
        assert!(ctx.triplets.is_none());
        assert_eq!(ctx.state, ContextState::Input);
    }
}
