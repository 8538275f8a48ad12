/// Counts for various things which count, roughly.
#[derive(Clone, Debug, Default)]
pub struct Counters {
    /// A count of every literal taken from the trail and propagated.
    pub propagations: usize,

    /// A count of every inspection of a clause watching a falsified literal.
    pub inspections: usize,

    /// A count of every watch moved to a new literal.
    pub watch_moves: usize,

    /// A count of every literal forced by some clause during propagation.
    pub derivations: usize,

    /// A count of every conflict noted, whether from a clause, an assignment, or an empty clause.
    pub conflicts: usize,
}
