#[cfg(doc)]
use crate::branching::variable_selection::VariableSelector;
use crate::graph::VariableId;
use crate::Assignment;
use crate::ConstraintGraph;

/// The context provided to a [`VariableSelector`]; it gives read access to the graph being solved
/// and the partial assignment of the current search node.
#[derive(Debug)]
pub struct SelectionContext<'a, Var, Value> {
    graph: &'a ConstraintGraph<Var, Value>,
    assignment: &'a Assignment<Value>,
}

impl<'a, Var, Value> SelectionContext<'a, Var, Value> {
    pub fn new(graph: &'a ConstraintGraph<Var, Value>, assignment: &'a Assignment<Value>) -> Self {
        SelectionContext { graph, assignment }
    }

    pub fn graph(&self) -> &'a ConstraintGraph<Var, Value> {
        self.graph
    }

    pub fn assignment(&self) -> &'a Assignment<Value> {
        self.assignment
    }

    /// Determines whether the provided variable currently holds a value.
    pub fn is_assigned(&self, variable: VariableId) -> bool {
        self.assignment.is_assigned(variable)
    }

    /// Iterates over the variables without a value, in registration order.
    pub fn unassigned_variables(&self) -> impl Iterator<Item = VariableId> + 'a {
        let assignment = self.assignment;
        self.graph
            .variable_ids()
            .filter(move |&variable| !assignment.is_assigned(variable))
    }

    /// The number of neighbours of `variable` which do not hold a value yet.
    pub fn num_unassigned_neighbors(&self, variable: VariableId) -> usize {
        self.graph
            .neighbor_ids(variable)
            .iter()
            .filter(|&&neighbor| !self.assignment.is_assigned(neighbor))
            .count()
    }
}

/// Creates a path `x0 - x1 - ... - x(n-1)` over the domain `{0, 1}`, with an empty assignment.
#[cfg(test)]
pub(crate) fn create_path_for_testing(
    num_variables: usize,
) -> (ConstraintGraph<&'static str, u8>, Assignment<u8>) {
    const NAMES: [&str; 6] = ["x0", "x1", "x2", "x3", "x4", "x5"];
    let mut graph = ConstraintGraph::new();
    for name in NAMES.iter().take(num_variables) {
        let _ = graph.add_variable(*name, [0, 1]).unwrap();
    }
    for pair in NAMES[..num_variables].windows(2) {
        let _ = graph.add_constraint(&pair[0], &pair[1]).unwrap();
    }
    let assignment = Assignment::new(num_variables);
    (graph, assignment)
}
