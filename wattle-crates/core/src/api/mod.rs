mod outputs;

use std::fmt::Debug;

use crate::basic_types::SearchCancelled;
use crate::basic_types::Solution;
use crate::branching::variable_selection::InputOrder;
use crate::branching::variable_selection::VariableSelector;
use crate::termination::Indefinite;
use crate::BacktrackingSolver;
use crate::ConstraintGraph;

pub mod results {
    //! Contains the outputs of solving using the [`BacktrackingSolver`].
    //!
    //! A single solution is returned as a [`Solution`]; every solution of a graph can be
    //! retrieved lazily through a [`SolutionIterator`] or, without a termination condition,
    //! through [`Solutions`].
    #[cfg(doc)]
    use crate::BacktrackingSolver;

    pub use super::outputs::solution_iterator;
    pub use super::outputs::IteratedSolution;
    pub use super::outputs::SolutionIterator;
    pub use super::outputs::Solutions;
    pub use crate::basic_types::SearchCancelled;
    pub use crate::basic_types::Solution;
}

/// Returns the first solution of `graph` in search order, or [`None`] if it has none.
///
/// The search is exhaustive; use [`BacktrackingSolver::solve`] to bound it with a
/// [`TerminationCondition`](crate::termination::TerminationCondition).
///
/// # Example
/// ```rust
/// # use wattle_core::branching::variable_selection::InputOrder;
/// # use wattle_core::ConstraintGraph;
/// let graph = ConstraintGraph::from_instance(
///     [("A", vec![1, 2]), ("B", vec![1, 2])],
///     [("A", "B")],
/// )
/// .unwrap();
///
/// let solution = wattle_core::solve(&graph, InputOrder::default()).unwrap();
/// assert_eq!(solution.value_of(&"B"), Ok(&2));
/// ```
pub fn solve<'graph, Var, Value>(
    graph: &'graph ConstraintGraph<Var, Value>,
    mut selector: impl VariableSelector<Var, Value>,
) -> Option<Solution<'graph, Var, Value>>
where
    Var: Debug,
    Value: Clone + PartialEq + Debug,
{
    match BacktrackingSolver::new(graph).solve(&mut selector, &mut Indefinite) {
        Ok(solution) => solution,
        Err(SearchCancelled) => unreachable!("a search without a budget is never cancelled"),
    }
}

/// Returns a lazy iterator over every solution of `graph`, in search order.
pub fn solve_all<'graph, Var, Value, Selector>(
    graph: &'graph ConstraintGraph<Var, Value>,
    selector: Selector,
) -> results::Solutions<'graph, Var, Value, Selector>
where
    Var: Debug,
    Value: Clone + PartialEq + Debug,
    Selector: VariableSelector<Var, Value>,
{
    results::Solutions::new(graph, selector)
}

/// Counts the solutions of `graph` by enumerating all of them.
pub fn count_solutions<Var, Value>(graph: &ConstraintGraph<Var, Value>) -> usize
where
    Var: Debug,
    Value: Clone + PartialEq + Debug,
{
    solve_all(graph, InputOrder::default()).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::branching::variable_selection::MaxDegree;
    use crate::branching::variable_selection::RandomOrder;
    use crate::containers::HashSet;
    use crate::graph::Relation;
    use crate::Assignment;

    /// Enumerates every complete assignment and keeps those which satisfy the graph.
    fn brute_force(graph: &ConstraintGraph<u32, u32>) -> HashSet<Vec<u32>> {
        let mut result: HashSet<Vec<u32>> = HashSet::default();
        let mut values = vec![];
        brute_force_from(graph, &mut values, &mut result);
        result
    }

    fn brute_force_from(
        graph: &ConstraintGraph<u32, u32>,
        values: &mut Vec<u32>,
        result: &mut HashSet<Vec<u32>>,
    ) {
        let Some(variable) = graph.variable_ids().nth(values.len()) else {
            let mut assignment = Assignment::new(values.len());
            for (variable, value) in graph.variable_ids().zip(values.iter()) {
                let _ = assignment.assign(variable, *value);
            }
            if graph.is_satisfied_by(&assignment) {
                let _ = result.insert(values.clone());
            }
            return;
        };

        for value in graph.domain(variable) {
            values.push(*value);
            brute_force_from(graph, values, result);
            let _ = values.pop();
        }
    }

    /// A cycle over `n` variables with a chord; odd variables try their values in reverse.
    fn chorded_cycle(n: u32, colours: u32) -> ConstraintGraph<u32, u32> {
        let variables = (0..n).map(|v| {
            let mut domain = (0..colours).collect::<Vec<_>>();
            if v % 2 == 1 {
                domain.reverse();
            }
            (v, domain)
        });
        let conflicts = (0..n).map(|v| (v, (v + 1) % n)).chain([(0, n / 2)]);
        ConstraintGraph::from_instance(variables, conflicts).unwrap()
    }

    #[test]
    fn enumeration_matches_brute_force() {
        for (n, colours) in [(3, 3), (4, 2), (5, 3), (6, 3), (7, 2)] {
            let graph = chorded_cycle(n, colours);
            let expected = brute_force(&graph);

            let found = solve_all(&graph, InputOrder::default())
                .map(Solution::into_values)
                .collect::<Vec<_>>();

            assert_eq!(found.len(), expected.len(), "n = {n}, colours = {colours}");
            assert_eq!(found.into_iter().collect::<HashSet<_>>(), expected);
        }
    }

    #[test]
    fn every_selector_finds_the_same_solutions() {
        let graph = chorded_cycle(6, 3);
        let expected = brute_force(&graph);

        let by_degree = solve_all(&graph, MaxDegree)
            .map(Solution::into_values)
            .collect::<HashSet<_>>();
        let at_random = solve_all(&graph, RandomOrder::new(42))
            .map(Solution::into_values)
            .collect::<HashSet<_>>();

        assert_eq!(by_degree, expected);
        assert_eq!(at_random, expected);
    }

    #[test]
    fn solve_is_deterministic() {
        let graph = chorded_cycle(5, 3);

        let first = solve(&graph, InputOrder::default());
        let second = solve(&graph, InputOrder::default());

        assert!(first.is_some());
        assert_eq!(first, second);
    }

    #[test]
    fn graph_without_variables_is_solved_by_the_empty_assignment() {
        let graph = ConstraintGraph::<u32, u32>::new();

        let solution = solve(&graph, InputOrder::default()).unwrap();

        assert!(solution.is_empty());
        assert_eq!(count_solutions(&graph), 1);
    }

    #[test]
    fn single_value_shared_with_a_neighbour_is_unsatisfiable() {
        let graph = ConstraintGraph::from_instance([(0, vec![7]), (1, vec![7])], [(0, 1)]).unwrap();

        assert_eq!(solve(&graph, InputOrder::default()), None);
        assert_eq!(count_solutions(&graph), 0);
    }

    #[test]
    fn empty_domain_fails_without_searching() {
        let graph =
            ConstraintGraph::from_instance([(0, vec![1, 2]), (1, vec![])], [] as [(u32, u32); 0])
                .unwrap();

        let mut solutions = solve_all(&graph, InputOrder::default());

        assert!(solutions.next().is_none());
        assert_eq!(solutions.statistics().num_decisions, 0);
        assert_eq!(solve(&graph, InputOrder::default()), None);
    }

    #[test]
    fn relations_other_than_inequality_are_respected() {
        let mut graph = ConstraintGraph::new();
        let _ = graph.add_variable("small", 1..=4).unwrap();
        let _ = graph.add_variable("large", 1..=4).unwrap();
        let _ = graph
            .add_relation(&"small", &"large", Relation::predicate(|a: &i32, b: &i32| a * 2 <= *b))
            .unwrap();

        let solutions = solve_all(&graph, InputOrder::new(&[graph.id_of(&"large").unwrap()]))
            .map(Solution::into_values)
            .collect::<HashSet<_>>();

        let expected = [vec![1, 2], vec![1, 3], vec![1, 4], vec![2, 4]];
        assert_eq!(solutions, expected.into_iter().collect());
    }
}
