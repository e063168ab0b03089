/*!
A (partial) function from atoms to truth values.

If all atoms are assigned a value the valuation is 'full', otherwise the valuation is
'partial'.

The canonical representation of a valuation is a vector of optional booleans, where:
- The zero index (first) element is the reserved atom, fixed true.
- Each index of the vector is interpreted as an atom.

The trait is implemented for anything which can be dereferenced to a slice of optional
booleans.

# Soundness

The value of an atom is determined by using the atom as an index on the dereferenced
structure.
Atoms are created only by the formula store and the encoder, and an assignment database is
always sized to the full atom range, so an atom out of bounds of the valuation is a core
invariant violation --- and indexing panics with a diagnostic, by design of [std].
*/

use crate::structures::atom::Atom;

/// The canonical representation of a valuation.
pub type VValuation = Vec<Option<bool>>;

/// Something which stores some value of an atom and/or perhaps the information that the atom
/// has no value.
pub trait Valuation {
    /// Some value of an atom under the valuation, or otherwise nothing.
    fn value_of(&self, atom: Atom) -> Option<bool>;

    /// A count of all the atoms in the valuation (including the reserved atom).
    fn atom_count(&self) -> usize;

    /// True if every atom has some value, false otherwise.
    fn is_full(&self) -> bool;

    /// An iterator through all (Atom, value) pairs such that the atom has some value,
    /// excluding the reserved atom.
    fn atom_valued_pairs(&self) -> impl Iterator<Item = (Atom, bool)>;
}

impl<V: std::ops::Deref<Target = [Option<bool>]>> Valuation for V {
    fn value_of(&self, atom: Atom) -> Option<bool> {
        match self.get(atom as usize) {
            Some(value) => *value,
            None => panic!("! Atom {atom} is out of bounds of the valuation"),
        }
    }

    fn atom_count(&self) -> usize {
        self.len()
    }

    fn is_full(&self) -> bool {
        self.iter().all(|value| value.is_some())
    }

    fn atom_valued_pairs(&self) -> impl Iterator<Item = (Atom, bool)> {
        self.iter()
            .enumerate()
            .skip(1)
            .filter_map(|(atom, value)| value.map(|v| (atom as Atom, v)))
    }
}
