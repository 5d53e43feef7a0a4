use std::fmt::Debug;
use std::fmt::Formatter;

use crate::basic_types::SearchCancelled;
use crate::basic_types::Solution;
use crate::branching::variable_selection::VariableSelector;
use crate::engine::Search;
use crate::engine::SolverStatistics;
use crate::termination::Indefinite;
use crate::ConstraintGraph;

/// The lazy sequence of every solution of a graph, as returned by [`crate::solve_all`].
///
/// Unlike [`super::SolutionIterator`] it owns its search state and statistics, and since it is
/// never cancelled it yields plain [`Solution`]s.
pub struct Solutions<'graph, Var, Value, Selector> {
    search: Search<'graph, Var, Value>,
    selector: Selector,
    statistics: SolverStatistics,
}

impl<'graph, Var, Value, Selector> Solutions<'graph, Var, Value, Selector>
where
    Var: Debug,
    Value: Clone + PartialEq + Debug,
    Selector: VariableSelector<Var, Value>,
{
    pub(crate) fn new(graph: &'graph ConstraintGraph<Var, Value>, selector: Selector) -> Self {
        Solutions {
            search: Search::new(graph),
            selector,
            statistics: SolverStatistics::default(),
        }
    }

    pub fn statistics(&self) -> &SolverStatistics {
        &self.statistics
    }
}

impl<'graph, Var, Value, Selector> Iterator for Solutions<'graph, Var, Value, Selector>
where
    Var: Debug,
    Value: Clone + PartialEq + Debug,
    Selector: VariableSelector<Var, Value>,
{
    type Item = Solution<'graph, Var, Value>;

    fn next(&mut self) -> Option<Self::Item> {
        match self
            .search
            .next_solution(&mut self.selector, &mut Indefinite, &mut self.statistics)
        {
            Ok(solution) => solution,
            Err(SearchCancelled) => unreachable!("a search without a budget is never cancelled"),
        }
    }
}

impl<Var: Debug, Value: Debug, Selector> Debug for Solutions<'_, Var, Value, Selector> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Solutions")
            .field("search", &self.search)
            .field("statistics", &self.statistics)
            .finish_non_exhaustive()
    }
}
