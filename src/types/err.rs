/*!
Error types used in the library.

- Most of these are very unlikely to occur during use.
- Some of these are internally expected --- notably, a saturation conflict is used to control
  the flow of a solve, and is consumed by the search rather than surfaced.
- Others are external --- e.g. parse errors are reported to whoever supplied the input.

Names of the error enums --- for the most part --- overlap with corresponding modules.
As such, throughout the library err::{self} is often used to prefix use of the types with
`err::`.
*/

use crate::structures::atom::Atom;

/// A union of varied error kinds.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// An error when adding a clause to a context.
    Build(BuildError),

    /// An error during the translation of a formula to triplets.
    Encode(EncodeError),

    /// An error related to parsing.
    Parse(ParseError),

    /// An error during saturation.
    Saturation(SaturationError),

    /// The attempted action could not be completed given the state of the context.
    InvalidState,
}

/// Errors when adding a clause to a context.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BuildError {
    /// A literal of the clause used the reserved atom.
    ReservedAtom,
}

impl From<BuildError> for ErrorKind {
    fn from(e: BuildError) -> Self {
        ErrorKind::Build(e)
    }
}

/// Errors during the translation of a formula to triplets.
///
/// Each of these notes a broken core invariant, and none is recoverable.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EncodeError {
    /// There are no more fresh atoms.
    AtomsExhausted,

    /// A clause used an atom above the count of variables in the formula.
    UnallocatedAtom(Atom),
}

impl From<EncodeError> for ErrorKind {
    fn from(e: EncodeError) -> Self {
        ErrorKind::Encode(e)
    }
}

/// Errors during parsing.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// Some issue with the problem specification in a DIMACS input, e.g. `p sat …`.
    ProblemSpecification,

    /// Some unspecific problem at a specific line.
    Line(usize),

    /// The problem specification of some DIMACS input is not in the header of the input.
    MisplacedProblem(usize),

    /// A literal at the noted line whose magnitude exceeds the declared variable count.
    OversizedLiteral(usize),

    /// A token at the noted line where a literal was required.
    UnreadableLiteral(usize),

    /// A required '0' delimiter was not found before the input ended.
    MissingDelimiter,
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

/// Noted errors during saturation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SaturationError {
    /// A conflict was found.
    /// This is expected from time to time, and settles the branch under examination.
    Conflict,
}

impl From<SaturationError> for ErrorKind {
    fn from(e: SaturationError) -> Self {
        ErrorKind::Saturation(e)
    }
}
