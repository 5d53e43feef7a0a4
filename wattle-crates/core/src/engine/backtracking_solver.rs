use std::fmt::Debug;
use std::time::Instant;

use log::debug;

use super::Search;
use super::SolverStatistics;
use crate::basic_types::SearchCancelled;
use crate::basic_types::Solution;
use crate::branching::variable_selection::VariableSelector;
use crate::results::SolutionIterator;
use crate::statistics::log_statistic_postfix;
use crate::statistics::should_log_statistics;
use crate::statistics::Statistic;
use crate::statistics::StatisticLogger;
use crate::termination::TerminationCondition;
use crate::ConstraintGraph;

/// A depth-first, depth-limited backtracking solver over a [`ConstraintGraph`].
///
/// The solver assigns one variable at a time, chosen by a [`VariableSelector`], and tries its
/// values in domain order. A value is skipped when it conflicts with an already assigned
/// neighbour; when no value is left the search backtracks to the previous variable. Every complete
/// assignment reached this way is a solution.
///
/// The [`TerminationCondition`] is polled every time a new variable is about to be selected; when
/// it fires the search stops with [`SearchCancelled`].
///
/// Statistics are accumulated over all searches started from the same solver.
#[derive(Debug)]
pub struct BacktrackingSolver<'graph, Var, Value> {
    graph: &'graph ConstraintGraph<Var, Value>,
    statistics: SolverStatistics,
}

impl<'graph, Var: Debug, Value: Clone + PartialEq + Debug> BacktrackingSolver<'graph, Var, Value> {
    pub fn new(graph: &'graph ConstraintGraph<Var, Value>) -> Self {
        BacktrackingSolver {
            graph,
            statistics: SolverStatistics::default(),
        }
    }

    pub fn graph(&self) -> &'graph ConstraintGraph<Var, Value> {
        self.graph
    }

    pub fn statistics(&self) -> &SolverStatistics {
        &self.statistics
    }

    /// Logs the statistics through the configured statistic logging, if it has been configured
    /// (see [`crate::statistics::configure_statistic_logging`]).
    pub fn log_statistics(&self) {
        if should_log_statistics() {
            self.statistics.log(StatisticLogger::default());
            log_statistic_postfix();
        }
    }

    /// Returns the first solution in search order, or `Ok(None)` if the problem has no solution.
    ///
    /// Solving the same graph twice with selectors in the same state yields the same solution.
    pub fn solve(
        &mut self,
        selector: &mut impl VariableSelector<Var, Value>,
        termination: &mut impl TerminationCondition,
    ) -> Result<Option<Solution<'graph, Var, Value>>, SearchCancelled> {
        let started_at = Instant::now();
        let mut search = Search::new(self.graph);

        let result = search.next_solution(selector, termination, &mut self.statistics);

        self.statistics.time_spent_in_solver += started_at.elapsed().as_millis() as u64;
        match &result {
            Ok(Some(_)) => debug!("Solve finished with a solution"),
            Ok(None) => debug!("Solve finished without a solution"),
            Err(_) => debug!("Solve was cancelled"),
        }

        result
    }

    /// Returns a lazy iterator over every solution, in search order.
    ///
    /// Each call starts a fresh search; no solution is produced twice by the same iterator.
    pub fn solve_all<Selector, Termination>(
        &mut self,
        selector: Selector,
        termination: Termination,
    ) -> SolutionIterator<'_, 'graph, Var, Value, Selector, Termination>
    where
        Selector: VariableSelector<Var, Value>,
        Termination: TerminationCondition,
    {
        SolutionIterator::new(
            Search::new(self.graph),
            selector,
            termination,
            &mut self.statistics,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::branching::variable_selection::InputOrder;
    use crate::branching::variable_selection::MaxDegree;
    use crate::containers::HashSet;
    use crate::termination::DecisionBudget;
    use crate::termination::Indefinite;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    enum Colour {
        Red,
        Green,
        Blue,
    }

    use Colour::*;

    fn triangle(colours: &[Colour]) -> ConstraintGraph<&'static str, Colour> {
        ConstraintGraph::from_instance(
            ["A", "B", "C"].map(|name| (name, colours.to_vec())),
            [("A", "B"), ("B", "C"), ("A", "C")],
        )
        .unwrap()
    }

    #[test]
    fn first_solution_follows_domain_order() {
        let graph = triangle(&[Red, Green, Blue]);
        let mut solver = BacktrackingSolver::new(&graph);

        let solution = solver
            .solve(&mut InputOrder::default(), &mut Indefinite)
            .unwrap()
            .expect("a triangle is 3-colourable");

        assert_eq!(solution.values().copied().collect::<Vec<_>>(), vec![Red, Green, Blue]);
    }

    #[test]
    fn triangle_with_two_colours_is_unsatisfiable() {
        let graph = triangle(&[Red, Green]);
        let mut solver = BacktrackingSolver::new(&graph);

        let result = solver.solve(&mut InputOrder::default(), &mut Indefinite);

        assert_eq!(result, Ok(None));
        assert!(solver.statistics().num_conflicts > 0);
        assert!(solver.statistics().num_backtracks > 0);
        assert_eq!(solver.statistics().num_solutions, 0);
    }

    #[test]
    fn all_solutions_are_distinct_and_valid() {
        let graph = triangle(&[Red, Green, Blue]);
        let mut solver = BacktrackingSolver::new(&graph);

        let solutions = solver
            .solve_all(InputOrder::default(), Indefinite)
            .collect::<Result<Vec<_>, _>>()
            .unwrap();

        // Every permutation of the three colours
        assert_eq!(solutions.len(), 6);
        let distinct = solutions
            .iter()
            .map(|solution| solution.values().copied().collect::<Vec<_>>())
            .collect::<HashSet<_>>();
        assert_eq!(distinct.len(), 6);
        assert!(solutions
            .iter()
            .all(|solution| graph.is_satisfied_by(&solution.to_assignment())));
        assert_eq!(solver.statistics().num_solutions, 6);
    }

    #[test]
    fn depth_never_exceeds_the_number_of_variables() {
        let graph = triangle(&[Red, Green, Blue]);
        let mut solver = BacktrackingSolver::new(&graph);

        let _ = solver.solve_all(MaxDegree, Indefinite).count();

        assert_eq!(solver.statistics().max_depth, 3);
    }

    #[test]
    fn variable_order_does_not_change_the_set_of_solutions() {
        let graph = triangle(&[Red, Green, Blue]);
        let mut solver = BacktrackingSolver::new(&graph);

        let in_order = solver
            .solve_all(InputOrder::default(), Indefinite)
            .collect::<Result<Vec<_>, _>>()
            .unwrap();
        let mut reversed_order = graph.variable_ids().collect::<Vec<_>>();
        reversed_order.reverse();
        let reversed = solver
            .solve_all(InputOrder::new(&reversed_order), Indefinite)
            .collect::<Result<Vec<_>, _>>()
            .unwrap();

        assert_eq!(distinct_values(in_order), distinct_values(reversed));
    }

    fn distinct_values(solutions: Vec<Solution<'_, &str, Colour>>) -> HashSet<Vec<Colour>> {
        solutions.into_iter().map(Solution::into_values).collect()
    }

    #[test]
    fn exhausted_budget_cancels_the_search() {
        let graph = triangle(&[Red, Green, Blue]);
        let mut solver = BacktrackingSolver::new(&graph);

        let result = solver.solve(&mut InputOrder::default(), &mut DecisionBudget::new(1));

        assert_eq!(result, Err(SearchCancelled));
        assert_eq!(solver.statistics().num_decisions, 1);
    }

    #[test]
    fn statistics_accumulate_over_searches() {
        let graph = triangle(&[Red, Green, Blue]);
        let mut solver = BacktrackingSolver::new(&graph);

        let _ = solver.solve(&mut InputOrder::default(), &mut Indefinite);
        let _ = solver.solve(&mut InputOrder::default(), &mut Indefinite);

        assert_eq!(solver.statistics().num_solutions, 2);
        assert_eq!(solver.statistics().num_decisions, 6);
    }
}
