/*!
The assignment database --- a partial valuation, a trail, and a contradiction flag.

The database holds:
- A current (often partial) [valuation](crate::structures::valuation).
- A trail of the literals made true, in the order the assignments were made.
- A contradiction flag, raised when an assignment conflicts with the valuation.

The trail supports branching.
A [snapshot](AssignmentDB::snapshot) records the current length of the trail in O(1), and
[restore](AssignmentDB::restore) clears the value of every atom assigned since the snapshot
was taken.
Restoring does not touch the contradiction flag, as a caller may need to distinguish rolling
back into further search from rolling back out of a failed final branch --- the flag is
cleared separately, with [clear_contradiction](AssignmentDB::clear_contradiction).

The reserved atom is given its fixed value of true at creation, outside the trail, and so no
rollback can clear it.
*/

use crate::{
    misc::log::targets::{self},
    structures::{
        atom::Atom,
        literal::{CLiteral, Literal},
        valuation::{VValuation, Valuation},
    },
};

/// The assignment database.
#[derive(Debug, Default)]
pub struct AssignmentDB {
    /// The current valuation, indexed by atoms.
    valuation: VValuation,

    /// The literals made true, in order of assignment.
    trail: Vec<CLiteral>,

    /// Raised when an assignment conflicts with the valuation, cleared on branch rollback.
    contradiction: bool,
}

/// A recording of the state of the database at some point, to restore to.
#[derive(Clone, Copy, Debug)]
pub struct Snapshot(usize);

/// The status of the value of an atom, relative to an assignment made.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AtomValue {
    /// The atom had no value, and now has the value assigned.
    NotSet,

    /// The atom already had the value assigned.
    Same,

    /// The atom has the value opposite to the value assigned.
    Different,
}

impl AssignmentDB {
    /// A fresh database over `atom_count` atoms, all unassigned except the reserved atom.
    pub fn new(atom_count: usize) -> Self {
        let mut valuation = vec![None; std::cmp::max(atom_count, 1)];
        valuation[0] = Some(true);

        AssignmentDB {
            valuation,
            trail: Vec::default(),
            contradiction: false,
        }
    }

    /// A count of all the atoms in the database (including the reserved atom).
    pub fn atom_count(&self) -> usize {
        self.valuation.len()
    }

    /// Some value of an atom, or otherwise nothing.
    pub fn value_of(&self, atom: Atom) -> Option<bool> {
        self.valuation.value_of(atom)
    }

    /// Some value of a literal under the valuation, or otherwise nothing.
    ///
    /// A literal is true when its atom has the value matching its polarity.
    /// In particular, the falsum literal always evaluates to false.
    pub fn eval(&self, literal: CLiteral) -> Option<bool> {
        self.value_of(literal.atom())
            .map(|value| value == literal.polarity())
    }

    /// Assigns `value` to `literal`, so the atom of the literal takes `value` XOR'd with the
    /// polarity of the literal.
    ///
    /// On conflict the prior valuation is untouched and the contradiction flag is raised.
    pub fn assign(&mut self, literal: CLiteral, value: bool) -> AtomValue {
        let atom = literal.atom();
        let atom_value = value == literal.polarity();

        match self.value_of(atom) {
            None => {
                self.valuation[atom as usize] = Some(atom_value);
                self.trail.push(CLiteral::new(atom, atom_value));
                log::trace!(target: targets::VALUATION, "Assigned {atom} to {atom_value}");
                AtomValue::NotSet
            }

            Some(present) if present == atom_value => AtomValue::Same,

            Some(_) => {
                log::trace!(target: targets::VALUATION, "Conflicting assignment of {atom}");
                self.contradiction = true;
                AtomValue::Different
            }
        }
    }

    /// A recording of the current state of the database, to restore to.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot(self.trail.len())
    }

    /// Undoes every assignment made since `snapshot` was taken.
    pub fn restore(&mut self, snapshot: Snapshot) {
        for literal in self.trail.split_off(snapshot.0) {
            self.valuation[literal.atom() as usize] = None;
        }
    }

    /// The literals made true since `snapshot` was taken, in order of assignment.
    pub fn assignments_since(&self, snapshot: Snapshot) -> &[CLiteral] {
        &self.trail[snapshot.0..]
    }

    /// A count of the assignments made (excluding the reserved atom).
    pub fn size(&self) -> usize {
        self.trail.len()
    }

    /// True if every atom has some value, false otherwise.
    pub fn is_complete(&self) -> bool {
        self.trail.len() + 1 == self.valuation.len()
    }

    /// The smallest atom without a value, if any.
    pub fn first_open_atom(&self) -> Option<Atom> {
        self.valuation
            .iter()
            .enumerate()
            .find(|(_, value)| value.is_none())
            .map(|(atom, _)| atom as Atom)
    }

    /// True if a contradiction has been noted and not cleared, false otherwise.
    pub fn has_contradiction(&self) -> bool {
        self.contradiction
    }

    /// Notes a contradiction.
    pub fn raise_contradiction(&mut self) {
        self.contradiction = true;
    }

    /// Clears a noted contradiction, for use on branch rollback.
    pub fn clear_contradiction(&mut self) {
        self.contradiction = false;
    }

    /// The current valuation, as a canonical [VValuation].
    pub fn valuation(&self) -> &VValuation {
        &self.valuation
    }
}

#[cfg(test)]
mod assignment_tests {
    use super::*;

    #[test]
    fn reserved_atom_fixed() {
        let db = AssignmentDB::new(3);
        assert_eq!(db.value_of(0), Some(true));
        assert_eq!(db.eval(CLiteral::FALSUM), Some(false));
        assert_eq!(db.eval(CLiteral::TOP), Some(true));
    }

    #[test]
    fn assign_and_eval() {
        let mut db = AssignmentDB::new(3);
        let not_two = CLiteral::new(2, false);

        assert_eq!(db.assign(not_two, true), AtomValue::NotSet);
        assert_eq!(db.value_of(2), Some(false));
        assert_eq!(db.eval(not_two), Some(true));
        assert_eq!(db.eval(not_two.negate()), Some(false));

        assert_eq!(db.assign(not_two.negate(), false), AtomValue::Same);
        assert!(!db.has_contradiction());
    }

    #[test]
    fn conflict_raises_and_preserves() {
        let mut db = AssignmentDB::new(2);
        let one = CLiteral::new(1, true);

        db.assign(one, true);
        assert_eq!(db.assign(one, false), AtomValue::Different);
        assert!(db.has_contradiction());
        assert_eq!(db.value_of(1), Some(true));
    }

    #[test]
    fn snapshot_restore() {
        let mut db = AssignmentDB::new(4);
        db.assign(CLiteral::new(1, true), true);

        let snapshot = db.snapshot();
        db.assign(CLiteral::new(2, true), false);
        db.assign(CLiteral::new(3, true), true);
        assert_eq!(db.size(), 3);

        db.restore(snapshot);
        assert_eq!(db.size(), 1);
        assert_eq!(db.value_of(1), Some(true));
        assert_eq!(db.value_of(2), None);
        assert_eq!(db.value_of(3), None);
    }

    #[test]
    fn completeness() {
        let mut db = AssignmentDB::new(2);
        assert!(!db.is_complete());
        assert_eq!(db.first_open_atom(), Some(1));

        db.assign(CLiteral::new(1, true), true);
        assert!(db.is_complete());
        assert_eq!(db.first_open_atom(), None);
    }

    #[test]
    fn contradiction_survives_restore() {
        let mut db = AssignmentDB::new(2);
        let snapshot = db.snapshot();

        db.assign(CLiteral::new(1, true), true);
        db.assign(CLiteral::new(1, true), false);
        assert!(db.has_contradiction());

        db.restore(snapshot);
        assert!(db.has_contradiction());

        db.clear_contradiction();
        assert!(!db.has_contradiction());
    }
}
