use crate::create_statistics_struct;

create_statistics_struct!(
    /// Statistics of the search performed by the [`BacktrackingSolver`](crate::BacktrackingSolver).
    ///
    /// Together with the trace-level log messages of the search these explain where the effort of
    /// a search went, e.g. why an unsatisfiable instance took long to refute.
    SolverStatistics {
        /// The number of values which were tentatively assigned to a variable
        num_decisions: u64,
        /// The number of values skipped because they conflicted with an assigned neighbour
        num_conflicts: u64,
        /// The number of times a variable ran out of values and the search returned to its parent
        num_backtracks: u64,
        /// The number of solutions which were produced
        num_solutions: u64,
        /// The largest number of variables which were assigned at the same time
        max_depth: u64,
        /// The amount of time (in milliseconds) which is spent in the search
        time_spent_in_solver: u64,
});
