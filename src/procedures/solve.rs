/*!
Determines the satisfiability of the formula in a context.

# Overview

A solve is a short pipeline:

1. Trivial verdicts are taken directly from the clauses: a pair of complementary unit
   clauses or an empty clause is unsatisfiable without translation, and the empty formula is
   a vacuous truth.
2. Otherwise, the formula is translated to triplets (unless a translation is standing), the
   root representative is asserted, and the [search](crate::procedures::dilemma) settles the
   rest.

The verdict is recorded on the context and returned as a [Report].
On a satisfiable verdict the assignment database holds a full, verified valuation, of which
the values of the original atoms witness the formula
(see [valuation_string](crate::context::Context::valuation_string)).

A solve is deterministic --- the same formula yields the same verdict and, as case splits
always take the smallest open atom (true first), the same valuation.

```rust
# use stalmarck_sat::config::Config;
# use stalmarck_sat::context::Context;
# use stalmarck_sat::reports::Report;
# use stalmarck_sat::structures::literal::{CLiteral, Literal};
let mut ctx = Context::from_config(Config::default());

assert!(ctx.add_clause(vec![CLiteral::new(1, true), CLiteral::new(2, true)]).is_ok());
assert!(ctx.add_clause(vec![CLiteral::new(2, false)]).is_ok());

assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
assert_eq!(ctx.value_of(1), Some(true));
assert_eq!(ctx.value_of(2), Some(false));
```
*/

use crate::{
    context::{Context, ContextState},
    misc::log::targets::{self},
    reports::Report,
    structures::literal::{CLiteral, Literal},
    types::err::{self},
};

impl Context {
    /// Determines the satisfiability of the formula in the context.
    ///
    /// A standing verdict is returned as is --- adding a clause clears a verdict, and each
    /// fresh solve works from an empty assignment.
    pub fn solve(&mut self) -> Result<Report, err::ErrorKind> {
        match self.state {
            ContextState::Satisfiable | ContextState::Unsatisfiable => {
                return Ok(self.report());
            }
            ContextState::Solving => return Err(err::ErrorKind::InvalidState),
            ContextState::Input => {}
        }

        // Complementary unit clauses settle the formula without translation.
        if self.unit_contradiction() {
            log::info!(target: targets::SOLVE, "Complementary unit clauses");
            self.state = ContextState::Unsatisfiable;
            return Ok(self.report());
        }

        // As does an empty clause, being falsum.
        if self.formula.clauses().any(|clause| clause.is_empty()) {
            log::info!(target: targets::SOLVE, "Empty clause");
            self.state = ContextState::Unsatisfiable;
            return Ok(self.report());
        }

        // The empty formula is a vacuous truth.
        if self.formula.num_clauses() == 0 {
            self.state = ContextState::Satisfiable;
            return Ok(self.report());
        }

        self.encode()?;
        self.state = ContextState::Solving;

        let root = match self.triplets.as_ref().and_then(|store| store.root()) {
            Some(root) => root,
            // Unreachable, as a formula with clauses always has a root representative.
            None => return Err(err::ErrorKind::InvalidState),
        };

        log::info!(target: targets::SOLVE, "Asserting root representative {root}");
        self.assignment.assign(root, true);

        let satisfiable = self.search()?;

        self.state = match satisfiable {
            true => ContextState::Satisfiable,
            false => ContextState::Unsatisfiable,
        };
        log::info!(target: targets::SOLVE,
            "{} after {} sweeps and {} case splits",
            self.state, self.counters.sweeps, self.counters.branches);

        Ok(self.report())
    }

    /// True if some literal and its negation both appear as unit clauses, false otherwise.
    fn unit_contradiction(&self) -> bool {
        let mut units = std::collections::HashSet::new();

        for clause in self.formula.clauses() {
            if let [unit] = clause.as_slice() {
                if units.contains(&unit.negate()) {
                    return true;
                }
                units.insert(*unit);
            }
        }

        false
    }

    /// Evaluates every triplet under the (full) valuation, treating failure as a conflict.
    ///
    /// The check guards the verdict against any gap in the rule set: a valuation the rules
    /// failed to fault is rejected here, and the branch is pruned as if saturation had
    /// conflicted.
    pub(crate) fn verify_valuation(&mut self) -> bool {
        let store = match self.triplets.as_ref() {
            Some(store) => store,
            None => return true,
        };

        for triplet in store.triplets() {
            let x = self.assignment.eval(CLiteral::new(triplet.x, true));
            let y = self.assignment.eval(triplet.y);
            let z = self.assignment.eval(triplet.z);

            let holds = match (x, y, z) {
                (Some(x_value), Some(y_value), Some(z_value)) => x_value == (!y_value || z_value),
                // A partial valuation cannot be verified.
                _ => false,
            };

            if !holds {
                log::warn!(target: targets::VERIFY, "Valuation fails {triplet}");
                self.assignment.raise_contradiction();
                return false;
            }
        }

        log::debug!(target: targets::VERIFY, "Valuation verified over {} triplets", store.len());
        true
    }
}
