//! Contains the structures corresponding to solution iterations.

use std::fmt::Debug;
use std::time::Instant;

use crate::basic_types::SearchCancelled;
use crate::basic_types::Solution;
use crate::branching::variable_selection::VariableSelector;
use crate::engine::Search;
use crate::engine::SolverStatistics;
use crate::termination::TerminationCondition;

/// A struct which allows the retrieval of every solution of a constraint graph, one at a time.
///
/// The search is suspended between two solutions; the partial assignment and the remaining
/// candidate values of every choice point are kept until the next solution is requested.
#[derive(Debug)]
pub struct SolutionIterator<'solver, 'graph, Var, Value, Selector, Termination> {
    search: Search<'graph, Var, Value>,
    selector: Selector,
    termination: Termination,
    statistics: &'solver mut SolverStatistics,

    has_solution: bool,
    was_cancelled: bool,
}

impl<'solver, 'graph, Var, Value, Selector, Termination>
    SolutionIterator<'solver, 'graph, Var, Value, Selector, Termination>
where
    Var: Debug,
    Value: Clone + PartialEq + Debug,
    Selector: VariableSelector<Var, Value>,
    Termination: TerminationCondition,
{
    pub(crate) fn new(
        search: Search<'graph, Var, Value>,
        selector: Selector,
        termination: Termination,
        statistics: &'solver mut SolverStatistics,
    ) -> Self {
        SolutionIterator {
            search,
            selector,
            termination,
            statistics,
            has_solution: false,
            was_cancelled: false,
        }
    }

    /// Resumes the search until the next solution is found.
    ///
    /// Once [`IteratedSolution::Cancelled`] has been returned, the iterator only returns
    /// [`IteratedSolution::Finished`].
    pub fn next_solution(&mut self) -> IteratedSolution<'graph, Var, Value> {
        if self.search.is_finished() {
            return self.exhausted();
        }

        let started_at = Instant::now();
        let result =
            self.search
                .next_solution(&mut self.selector, &mut self.termination, self.statistics);
        self.statistics.time_spent_in_solver += started_at.elapsed().as_millis() as u64;

        match result {
            Ok(Some(solution)) => {
                self.has_solution = true;
                IteratedSolution::Solution(solution)
            }
            Ok(None) => self.exhausted(),
            Err(SearchCancelled) => {
                self.was_cancelled = true;
                IteratedSolution::Cancelled
            }
        }
    }

    /// The statistics of the solver which created this iterator, including the work done so far.
    pub fn statistics(&self) -> &SolverStatistics {
        self.statistics
    }

    fn exhausted(&self) -> IteratedSolution<'graph, Var, Value> {
        if self.has_solution || self.was_cancelled {
            IteratedSolution::Finished
        } else {
            IteratedSolution::Unsatisfiable
        }
    }
}

impl<'graph, Var, Value, Selector, Termination> Iterator
    for SolutionIterator<'_, 'graph, Var, Value, Selector, Termination>
where
    Var: Debug,
    Value: Clone + PartialEq + Debug,
    Selector: VariableSelector<Var, Value>,
    Termination: TerminationCondition,
{
    type Item = Result<Solution<'graph, Var, Value>, SearchCancelled>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_solution() {
            IteratedSolution::Solution(solution) => Some(Ok(solution)),
            IteratedSolution::Cancelled => Some(Err(SearchCancelled)),
            IteratedSolution::Finished | IteratedSolution::Unsatisfiable => None,
        }
    }
}

/// Enum which specifies the status of the call to [`SolutionIterator::next_solution`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IteratedSolution<'graph, Var, Value> {
    /// A new solution was identified.
    Solution(Solution<'graph, Var, Value>),

    /// No more solutions exist.
    Finished,

    /// The termination condition fired during search.
    Cancelled,

    /// There exists no solution.
    Unsatisfiable,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::branching::variable_selection::InputOrder;
    use crate::termination::DecisionBudget;
    use crate::termination::Indefinite;
    use crate::BacktrackingSolver;
    use crate::ConstraintGraph;

    fn two_regions() -> ConstraintGraph<&'static str, &'static str> {
        ConstraintGraph::from_instance(
            [("A", vec!["Red", "Green"]), ("B", vec!["Red", "Green"])],
            [("A", "B")],
        )
        .unwrap()
    }

    #[test]
    fn two_regions_have_two_colourings() {
        let graph = two_regions();
        let mut solver = BacktrackingSolver::new(&graph);
        let mut solutions = solver.solve_all(InputOrder::default(), Indefinite);

        let IteratedSolution::Solution(first) = solutions.next_solution() else {
            panic!("expected a first solution");
        };
        assert_eq!(first.into_values(), vec!["Red", "Green"]);

        let IteratedSolution::Solution(second) = solutions.next_solution() else {
            panic!("expected a second solution");
        };
        assert_eq!(second.into_values(), vec!["Green", "Red"]);

        assert_eq!(solutions.next_solution(), IteratedSolution::Finished);
        assert_eq!(solutions.next_solution(), IteratedSolution::Finished);
        assert_eq!(solutions.statistics().num_solutions, 2);
    }

    #[test]
    fn unsatisfiable_graph_is_reported_as_such() {
        let graph = ConstraintGraph::from_instance(
            [("A", vec!["Red"]), ("B", vec!["Red"])],
            [("A", "B")],
        )
        .unwrap();
        let mut solver = BacktrackingSolver::new(&graph);
        let mut solutions = solver.solve_all(InputOrder::default(), Indefinite);

        assert_eq!(solutions.next_solution(), IteratedSolution::Unsatisfiable);
    }

    #[test]
    fn empty_domain_yields_no_solutions() {
        let mut graph = two_regions();
        let _ = graph.add_variable("C", Vec::new()).unwrap();
        let mut solver = BacktrackingSolver::new(&graph);

        assert_eq!(solver.solve_all(InputOrder::default(), Indefinite).count(), 0);
        assert_eq!(solver.statistics().num_decisions, 0);
    }

    #[test]
    fn graph_without_variables_has_one_empty_solution() {
        let graph = ConstraintGraph::<&str, u32>::new();
        let mut solver = BacktrackingSolver::new(&graph);

        let solutions = solver
            .solve_all(InputOrder::default(), Indefinite)
            .collect::<Vec<_>>();

        assert_eq!(solutions.len(), 1);
        assert!(solutions[0].as_ref().is_ok_and(Solution::is_empty));
    }

    #[test]
    fn cancellation_ends_the_iteration_after_the_found_solutions() {
        let graph = two_regions();
        let mut solver = BacktrackingSolver::new(&graph);

        // The first solution takes two decisions, the budget runs out before the second one
        let results = solver
            .solve_all(InputOrder::default(), DecisionBudget::new(3))
            .collect::<Vec<_>>();

        assert_eq!(results.len(), 2);
        assert!(results[0].is_ok());
        assert_eq!(results[1], Err(SearchCancelled));
    }
}
