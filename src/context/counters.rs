/// Counters related to a context/solve.
#[derive(Clone, Copy, Debug, Default)]
pub struct Counters {
    /// The count of saturation sweeps over the triplet store.
    pub sweeps: usize,

    /// The count of assignments forced by the simple rules.
    pub propagations: usize,

    /// The count of case splits made during search.
    pub branches: usize,

    /// The count of assignments committed by the dilemma rule.
    pub dilemma_commits: usize,
}
