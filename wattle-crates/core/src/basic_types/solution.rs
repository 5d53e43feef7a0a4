use std::fmt::Debug;
use std::fmt::Formatter;
use std::hash::Hash;

use crate::basic_types::ConstraintGraphError;
use crate::containers::KeyedVec;
use crate::graph::VariableId;
use crate::Assignment;
use crate::ConstraintGraph;

/// A complete assignment which satisfies every constraint of the graph it was found for.
///
/// The solution owns its values and borrows the [`ConstraintGraph`] to resolve variable names.
pub struct Solution<'graph, Var, Value> {
    graph: &'graph ConstraintGraph<Var, Value>,
    values: KeyedVec<VariableId, Value>,
}

impl<'graph, Var, Value: Clone> Solution<'graph, Var, Value> {
    /// Copies the values out of a complete `assignment`.
    pub(crate) fn from_assignment(
        graph: &'graph ConstraintGraph<Var, Value>,
        assignment: &Assignment<Value>,
    ) -> Self {
        crate::wattle_assert_simple!(
            assignment.is_complete() && assignment.num_variables() == graph.num_variables(),
            "A solution can only be created from a complete assignment"
        );

        Solution {
            graph,
            values: assignment
                .iter()
                .filter_map(|(_, value)| value.cloned())
                .collect(),
        }
    }

    /// Converts the solution back into an [`Assignment`], e.g. to check it against the graph.
    pub fn to_assignment(&self) -> Assignment<Value> {
        let mut assignment = Assignment::new(self.values.len());
        for (variable, value) in self.values.key_values() {
            let _ = assignment.assign(variable, value.clone());
        }
        assignment
    }
}

impl<'graph, Var, Value> Solution<'graph, Var, Value> {
    /// The graph which this solution solves.
    pub fn graph(&self) -> &'graph ConstraintGraph<Var, Value> {
        self.graph
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// A solution is only empty if the graph has no variables.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the value assigned to `variable`.
    ///
    /// # Panics
    /// If `variable` does not belong to the solved graph.
    pub fn value(&self, variable: VariableId) -> &Value {
        &self.values[variable]
    }

    /// Iterates over the values in registration order.
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.values.iter()
    }

    /// Iterates over `(variable, value)` pairs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&'graph Var, &Value)> {
        let graph = self.graph;
        self.values
            .key_values()
            .map(move |(variable, value)| (graph.name(variable), value))
    }

    /// Consumes the solution, returning the values in registration order.
    pub fn into_values(self) -> Vec<Value> {
        self.values.into_vec()
    }
}

impl<Var: Eq + Hash + Clone + Debug, Value> Solution<'_, Var, Value> {
    /// Returns the value assigned to the variable registered as `variable`.
    pub fn value_of(&self, variable: &Var) -> Result<&Value, ConstraintGraphError> {
        let id = self.graph.id_of(variable)?;
        Ok(self.value(id))
    }
}

impl<Var, Value: Clone> Clone for Solution<'_, Var, Value> {
    fn clone(&self) -> Self {
        Solution {
            graph: self.graph,
            values: self.values.clone(),
        }
    }
}

impl<Var, Value: PartialEq> PartialEq for Solution<'_, Var, Value> {
    fn eq(&self, other: &Self) -> bool {
        self.values == other.values
    }
}

impl<Var, Value: Eq> Eq for Solution<'_, Var, Value> {}

impl<Var: Debug, Value: Debug> Debug for Solution<'_, Var, Value> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
