/*!
Search over open atoms by case splits, with the dilemma rule available.

# Overview

After saturation the valuation may still be partial, and the smallest open atom is settled by
examining both of its values --- Stålmarck's dilemma.

The plain search tries each value in turn:
- The valuation is snapshotted, the atom assigned true, and the search recursed.
- If the branch fails, the snapshot is restored, the contradiction cleared, and the atom
  assigned false.
- A formula is unsatisfiable (relative to the standing assignments) only when both branches
  fail, and the contradiction flag is left raised when so.

Each recursion settles at least one further atom, so the depth of the search is bounded by
the count of atoms.

# The dilemma rule

With the [dilemma](crate::config::Config::dilemma) option set, the intersection step of the
method is applied before any case split.
Both values of each open atom are saturated in turn and rolled back, and any assignment
common to the two branches is committed to the parent valuation --- whatever value the atom
takes, the common assignments follow.
When one branch conflicts, the whole of the other branch is committed.
When both conflict, the parent valuation is itself contradictory.

Rounds of the rule are applied to a fixed point, and only then is a case split made.
The rule trades extra saturation for fewer splits; the verdict is the same with the rule on
or off.

# On completion

A full valuation is not taken on trust: every triplet is evaluated before the branch reports
satisfiable, and a branch whose valuation fails the check is treated as conflicting.
This turns any incompleteness in the rule set into a pruned branch rather than a wrong
verdict.
*/

use crate::{
    context::Context,
    db::assignment::AtomValue,
    misc::log::targets::{self},
    structures::{
        atom::Atom,
        literal::{CLiteral, Literal},
    },
    types::err::{self},
};

impl Context {
    /// Decides whether the triplet store is satisfiable relative to the current valuation.
    ///
    /// On true, the assignment database holds a (verified) satisfying valuation.
    /// On false, the contradiction flag is raised and the valuation is as it stood when the
    /// final conflict appeared.
    pub(crate) fn search(&mut self) -> Result<bool, err::ErrorKind> {
        match self.saturate() {
            Err(err::SaturationError::Conflict) => return Ok(false),
            Ok(()) => {}
        }

        if self.config.dilemma.value {
            match self.dilemma_rounds() {
                Err(err::SaturationError::Conflict) => return Ok(false),
                Ok(()) => {}
            }
        }

        if self.assignment.is_complete() {
            return Ok(self.verify_valuation());
        }

        let open = match self.assignment.first_open_atom() {
            Some(atom) => atom,
            None => return Err(err::ErrorKind::InvalidState),
        };
        let literal = CLiteral::new(open, true);

        self.counters.branches += 1;
        log::trace!(target: targets::DILEMMA, "Case split on {open}");

        let snapshot = self.assignment.snapshot();
        self.assignment.assign(literal, true);
        if self.search()? {
            return Ok(true);
        }
        self.assignment.restore(snapshot);
        self.assignment.clear_contradiction();

        let snapshot = self.assignment.snapshot();
        self.assignment.assign(literal, false);
        if self.search()? {
            return Ok(true);
        }
        self.assignment.restore(snapshot);
        self.assignment.raise_contradiction();

        Ok(false)
    }

    /// Applies rounds of the dilemma rule until no round commits an assignment.
    ///
    /// A conflict is an error, as with saturation: either both values of some atom fail, or a
    /// committed assignment completes a contradiction.
    fn dilemma_rounds(&mut self) -> Result<(), err::SaturationError> {
        'round_loop: loop {
            // Commits from a previous round may have consequences of their own.
            self.saturate()?;

            if self.assignment.is_complete() {
                return Ok(());
            }

            let mut progress = false;
            let atom_limit = self.assignment.atom_count() as Atom;

            for atom in 1..atom_limit {
                if self.assignment.value_of(atom).is_some() {
                    continue;
                }

                let literal = CLiteral::new(atom, true);
                let snapshot = self.assignment.snapshot();

                self.assignment.assign(literal, true);
                let positive_branch = match self.saturate() {
                    Ok(()) => Some(self.assignment.assignments_since(snapshot).to_vec()),
                    Err(err::SaturationError::Conflict) => None,
                };
                self.assignment.restore(snapshot);
                self.assignment.clear_contradiction();

                self.assignment.assign(literal, false);
                let negative_branch = match self.saturate() {
                    Ok(()) => Some(self.assignment.assignments_since(snapshot).to_vec()),
                    Err(err::SaturationError::Conflict) => None,
                };
                self.assignment.restore(snapshot);
                self.assignment.clear_contradiction();

                let commits = match (positive_branch, negative_branch) {
                    (None, None) => {
                        log::trace!(target: targets::DILEMMA, "Both values of {atom} fail");
                        self.assignment.raise_contradiction();
                        return Err(err::SaturationError::Conflict);
                    }

                    // One value failed, so the other holds with all its consequences.
                    (Some(branch), None) | (None, Some(branch)) => branch,

                    // The assignments common to the two branches hold on either value.
                    (Some(positive), Some(negative)) => positive
                        .into_iter()
                        .filter(|literal| negative.contains(literal))
                        .collect(),
                };

                if !commits.is_empty() {
                    log::trace!(target: targets::DILEMMA,
                        "Dilemma on {atom} commits {} assignments", commits.len());
                    progress = true;
                    self.counters.dilemma_commits += commits.len();

                    for literal in commits {
                        match self.assignment.assign(literal, true) {
                            AtomValue::Different => return Err(err::SaturationError::Conflict),
                            AtomValue::NotSet | AtomValue::Same => {}
                        }
                    }
                }
            }

            if !progress {
                break 'round_loop Ok(());
            }
        }
    }
}
