/*!
(The internal representation of) an atom (aka. a 'variable').

Each atom is a u32, and the atoms of a solve are a contiguous range [0..*m*) for some *m*.
This representation allows atoms to be used as the indicies of a structure, e.g. a valuation,
without taking too much space.

The atom `0` is reserved, and is fixed with a value of true when an assignment database is
created.
Having a designated true atom means the logical constants need no representation of their own:
verum is the positive literal of atom `0`, falsum its negation.
In particular, the falsum sentinel which may appear in a [triplet](crate::structures::triplet)
is an ordinary literal, and evaluation of a triplet requires no special cases.

# Notes
- Atoms read from DIMACS input are positive integers, and are used as given.
  Auxiliary atoms introduced by the [encoder](crate::encoder) extend the range.
- In the SAT literature these are often called 'variables' while in the logic literature these
  are often called 'atoms'.
*/

/// An atom, aka. a 'variable'.
pub type Atom = u32;

/// The reserved atom, fixed with a value of true.
pub const TOP_ATOM: Atom = 0;

/// The maximum instance of an atom, limited by the integer representation of literals.
pub const ATOM_MAX: Atom = i32::MAX.unsigned_abs();
