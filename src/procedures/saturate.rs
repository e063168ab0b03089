/*!
Saturation of the valuation under the simple rules (0-saturation).

# Overview

Each triplet `(x, y, z)` asserts the equivalence `x ↔ (y → z)`, and whenever enough of the
three is settled to force a value elsewhere in the triplet, the value is forced.
The rules, for a current evaluation *v*:

| Rule | Pattern               | Forced                  |
| ---- | --------------------- | ----------------------- |
| R1   | *v*(x) = ⊥            | *v*(y) = ⊤, *v*(z) = ⊥  |
| R2   | *v*(y) = ⊥            | *v*(x) = ⊤              |
| R3   | *v*(z) = ⊥            | x ↔ ¬y                  |
| R4   | y ≡ z (structural)    | *v*(x) = ⊤              |
| R5   | *v*(z) = ⊤            | *v*(x) = ⊤              |
| R6   | *v*(y) = ⊤            | x ↔ z                   |
| R7   | x ≡ y (structural)    | *v*(x) = ⊤, *v*(z) = ⊤  |

R3 and R6 force an equivalence rather than a value.
These are realised greedily: a value is forced only when one side of the equivalence is
settled, and as the rules are reapplied until nothing changes a deferred equivalence is
picked up on a later sweep, as soon as either side settles.

# Iteration

Triplets are swept in stored order, and swept again whenever a sweep changed the valuation.
Saturation stops at a fixed point, when the valuation is full, or on the first conflict.
Each change settles an open atom and the valuation is bounded, so a fixed point is reached.

A conflict is returned as an (expected) error and settles the branch under examination ---
the caller rolls the valuation back, so the assignment database is left as it was when the
conflict appeared.

# Borrows

The triplet store and the assignment database are disjoint fields of the context, borrowed
immutably and mutably in turn.
The rules are applied by functions over the two structures, rather than methods on the
context, to keep the disjointness visible to the borrow checker.
*/

use crate::{
    context::Context,
    db::assignment::{AssignmentDB, AtomValue},
    misc::log::targets::{self},
    structures::{
        literal::{CLiteral, Literal},
        triplet::Triplet,
    },
    types::err::{self},
};

impl Context {
    /// Closes the current valuation under the simple rules, to a fixed point or a conflict.
    ///
    /// A quiet success when no translation of the formula is present, as there is nothing to
    /// saturate.
    pub fn saturate(&mut self) -> Result<(), err::SaturationError> {
        let store = match self.triplets.as_ref() {
            Some(store) => store,
            None => return Ok(()),
        };

        let before = self.assignment.size();

        let result = 'sweep_loop: loop {
            let mut changed = false;

            for triplet in store.triplets() {
                match apply_rules(triplet, &mut self.assignment) {
                    Ok(true) => changed = true,
                    Ok(false) => {}
                    Err(e) => {
                        log::trace!(target: targets::SATURATION, "Conflict on {triplet}");
                        break 'sweep_loop Err(e);
                    }
                }
            }

            self.counters.sweeps += 1;

            if !changed || self.assignment.is_complete() {
                break 'sweep_loop Ok(());
            }
        };

        self.counters.propagations += self.assignment.size() - before;
        result
    }
}

/// Applies each simple rule to `triplet`, forcing values through `assignment`.
///
/// Ok(true) when some open atom was settled, Ok(false) when nothing changed, and an error on
/// the first conflicting force.
fn apply_rules(
    triplet: &Triplet,
    assignment: &mut AssignmentDB,
) -> Result<bool, err::SaturationError> {
    let mut change = false;
    let Triplet { y, z, .. } = *triplet;
    let x = CLiteral::new(triplet.x, true);

    // R1: a false representative requires the implication to fail.
    if assignment.eval(x) == Some(false) {
        change |= force(assignment, y, true)?;
        change |= force(assignment, z, false)?;
    }

    // R2: a false antecedent satisfies the implication.
    if assignment.eval(y) == Some(false) {
        change |= force(assignment, x, true)?;
    }

    // R3: with a false consequent the representative is the negation of the antecedent.
    if assignment.eval(z) == Some(false) {
        match (assignment.eval(x), assignment.eval(y)) {
            (_, Some(y_value)) => change |= force(assignment, x, !y_value)?,
            (Some(x_value), None) => change |= force(assignment, y, !x_value)?,
            (None, None) => {}
        }
    }

    // R4: the implication is satisfied whenever antecedent and consequent agree.
    if y == z {
        change |= force(assignment, x, true)?;
    }

    // R5: a true consequent satisfies the implication.
    if assignment.eval(z) == Some(true) {
        change |= force(assignment, x, true)?;
    }

    // R6: with a true antecedent the representative is the consequent.
    if assignment.eval(y) == Some(true) {
        match (assignment.eval(x), assignment.eval(z)) {
            (_, Some(z_value)) => change |= force(assignment, x, z_value)?,
            (Some(x_value), None) => change |= force(assignment, z, x_value)?,
            (None, None) => {}
        }
    }

    // R7: a representative standing for its own antecedent holds, as must the consequent.
    if y == x {
        change |= force(assignment, x, true)?;
        change |= force(assignment, z, true)?;
    }

    Ok(change)
}

/// Forces `value` on `literal`, distinguishing a fresh assignment from a repeat, and a
/// conflict as an error.
fn force(
    assignment: &mut AssignmentDB,
    literal: CLiteral,
    value: bool,
) -> Result<bool, err::SaturationError> {
    match assignment.assign(literal, value) {
        AtomValue::NotSet => Ok(true),
        AtomValue::Same => Ok(false),
        AtomValue::Different => Err(err::SaturationError::Conflict),
    }
}
