use std::fmt::Debug;
use std::hash::Hash;

use log::debug;

use super::BinaryConstraint;
use super::ConstraintId;
use super::ConstraintView;
use super::Relation;
use super::VariableId;
use crate::basic_types::ConstraintGraphError;
use crate::containers::HashMap;
use crate::containers::KeyedVec;
use crate::Assignment;

/// Holds the variables of a problem, the ordered domain of each variable, and the binary
/// constraints between them.
///
/// Variables are stored in an arena indexed by [`VariableId`], in registration order; constraints
/// are stored as pairs of ids. The graph is built once from instance data and is only read by the
/// search, which keeps its tentative values in a separate [`Assignment`].
///
/// The adjacency relation is symmetric and irreflexive: a constraint between `a` and `b` makes `b`
/// a neighbour of `a` and vice versa, and a variable can never be constrained against itself.
///
/// # Example
/// ```rust
/// # use wattle_core::ConstraintGraph;
/// let mut graph = ConstraintGraph::new();
/// let _ = graph.add_variable("A", ["Red", "Green"]).unwrap();
/// let _ = graph.add_variable("B", ["Red", "Green"]).unwrap();
/// let _ = graph.add_constraint(&"A", &"B").unwrap();
///
/// assert_eq!(graph.neighbors(&"A").unwrap().collect::<Vec<_>>(), vec![&"B"]);
/// assert_eq!(graph.domain_of(&"B").unwrap(), &["Red", "Green"]);
/// ```
#[derive(Debug, Clone)]
pub struct ConstraintGraph<Var, Value> {
    variables: KeyedVec<VariableId, VariableRecord<Var, Value>>,
    constraints: KeyedVec<ConstraintId, BinaryConstraint<Value>>,
    ids: HashMap<Var, VariableId>,
}

#[derive(Debug, Clone)]
struct VariableRecord<Var, Value> {
    name: Var,
    domain: Vec<Value>,
    /// Distinct neighbours in the order in which they were first constrained against this
    /// variable
    neighbors: Vec<VariableId>,
    constraints: Vec<ConstraintId>,
}

impl<Var, Value> Default for ConstraintGraph<Var, Value> {
    fn default() -> Self {
        Self {
            variables: KeyedVec::default(),
            constraints: KeyedVec::default(),
            ids: HashMap::default(),
        }
    }
}

impl<Var, Value> ConstraintGraph<Var, Value> {
    pub fn num_variables(&self) -> usize {
        self.variables.len()
    }

    pub fn num_constraints(&self) -> usize {
        self.constraints.len()
    }

    /// Iterates over the registered variables in registration order.
    pub fn variables(&self) -> impl Iterator<Item = &Var> {
        self.variables.iter().map(|record| &record.name)
    }

    /// Iterates over the ids of the registered variables in registration order.
    pub fn variable_ids(&self) -> impl Iterator<Item = VariableId> {
        self.variables.keys()
    }

    /// Returns the name under which `variable` was registered.
    ///
    /// # Panics
    /// If `variable` was not handed out by this graph.
    pub fn name(&self, variable: VariableId) -> &Var {
        &self.variables[variable].name
    }

    /// Returns the ordered domain of `variable`.
    ///
    /// # Panics
    /// If `variable` was not handed out by this graph.
    pub fn domain(&self, variable: VariableId) -> &[Value] {
        &self.variables[variable].domain
    }

    /// Returns the distinct neighbours of `variable`.
    ///
    /// # Panics
    /// If `variable` was not handed out by this graph.
    pub fn neighbor_ids(&self, variable: VariableId) -> &[VariableId] {
        &self.variables[variable].neighbors
    }

    /// The number of distinct variables constrained against `variable`.
    pub fn degree(&self, variable: VariableId) -> usize {
        self.variables[variable].neighbors.len()
    }

    /// Returns `true` if some variable has no candidate values, in which case the problem has no
    /// solution.
    pub fn has_empty_domain(&self) -> bool {
        self.variables.iter().any(|record| record.domain.is_empty())
    }

    /// Iterates over the stored constraints in the order in which they were added.
    pub fn constraints(&self) -> impl Iterator<Item = ConstraintView<'_, Value>> {
        self.constraints
            .key_values()
            .map(|(id, constraint)| ConstraintView {
                id,
                scope: constraint.scope,
                relation: &constraint.relation,
            })
    }
}

impl<Var: Eq + Hash + Clone + Debug, Value> ConstraintGraph<Var, Value> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph from plain instance data: every variable with its domain, and the pairs
    /// of variables which must differ.
    ///
    /// The first construction error is returned; conflict pairs may repeat.
    pub fn from_instance<Domain: IntoIterator<Item = Value>>(
        variables: impl IntoIterator<Item = (Var, Domain)>,
        conflicts: impl IntoIterator<Item = (Var, Var)>,
    ) -> Result<Self, ConstraintGraphError> {
        let mut graph = Self::new();
        for (variable, domain) in variables {
            let _ = graph.add_variable(variable, domain)?;
        }
        for (a, b) in conflicts {
            let _ = graph.add_constraint(&a, &b)?;
        }

        debug!(
            "Built constraint graph with {} variables and {} constraints",
            graph.num_variables(),
            graph.num_constraints()
        );

        Ok(graph)
    }

    /// Registers `variable` with its ordered candidate values.
    pub fn add_variable(
        &mut self,
        variable: Var,
        domain: impl IntoIterator<Item = Value>,
    ) -> Result<VariableId, ConstraintGraphError> {
        if self.ids.contains_key(&variable) {
            return Err(ConstraintGraphError::duplicate_variable(&variable));
        }

        let id = self.variables.push(VariableRecord {
            name: variable.clone(),
            domain: domain.into_iter().collect(),
            neighbors: vec![],
            constraints: vec![],
        });
        let _ = self.ids.insert(variable, id);

        Ok(id)
    }

    /// Returns the id under which `variable` was registered.
    pub fn id_of(&self, variable: &Var) -> Result<VariableId, ConstraintGraphError> {
        self.ids
            .get(variable)
            .copied()
            .ok_or_else(|| ConstraintGraphError::unknown_variable(variable))
    }

    /// Returns the variables which are constrained against `variable`.
    pub fn neighbors(
        &self,
        variable: &Var,
    ) -> Result<impl Iterator<Item = &Var>, ConstraintGraphError> {
        let id = self.id_of(variable)?;
        Ok(self
            .neighbor_ids(id)
            .iter()
            .map(|&neighbor| self.name(neighbor)))
    }

    /// Returns the ordered candidate values of `variable`.
    pub fn domain_of(&self, variable: &Var) -> Result<&[Value], ConstraintGraphError> {
        let id = self.id_of(variable)?;
        Ok(self.domain(id))
    }

    /// Records that `a` and `b` must take different values.
    ///
    /// Adding the same constraint again (in either direction) has no effect and returns the id of
    /// the existing constraint.
    pub fn add_constraint(
        &mut self,
        a: &Var,
        b: &Var,
    ) -> Result<ConstraintId, ConstraintGraphError> {
        let (a_id, b_id) = self.scope_of(a, b)?;

        let existing = self.variables[a_id]
            .constraints
            .iter()
            .copied()
            .find(|&constraint| {
                let constraint = &self.constraints[constraint];
                constraint.relation.is_not_equal() && constraint.connects(a_id, b_id)
            });
        if let Some(existing) = existing {
            return Ok(existing);
        }

        Ok(self.insert_constraint(a_id, b_id, Relation::NotEqual))
    }

    /// Records an arbitrary binary relation between `a` and `b`; the relation is evaluated with
    /// the value of `a` as its first argument.
    ///
    /// Unlike [`ConstraintGraph::add_constraint`], relations are never merged: adding several
    /// relations over the same pair requires all of them to hold.
    pub fn add_relation(
        &mut self,
        a: &Var,
        b: &Var,
        relation: Relation<Value>,
    ) -> Result<ConstraintId, ConstraintGraphError> {
        let (a_id, b_id) = self.scope_of(a, b)?;
        Ok(self.insert_constraint(a_id, b_id, relation))
    }

    fn scope_of(
        &self,
        a: &Var,
        b: &Var,
    ) -> Result<(VariableId, VariableId), ConstraintGraphError> {
        let a_id = self.id_of(a)?;
        let b_id = self.id_of(b)?;
        if a_id == b_id {
            return Err(ConstraintGraphError::invalid_constraint(a));
        }
        Ok((a_id, b_id))
    }

    fn insert_constraint(
        &mut self,
        a: VariableId,
        b: VariableId,
        relation: Relation<Value>,
    ) -> ConstraintId {
        let id = self.constraints.push(BinaryConstraint {
            scope: (a, b),
            relation,
        });

        for (variable, neighbor) in [(a, b), (b, a)] {
            let record = &mut self.variables[variable];
            record.constraints.push(id);
            if !record.neighbors.contains(&neighbor) {
                record.neighbors.push(neighbor);
            }
        }

        id
    }
}

impl<Var, Value: PartialEq> ConstraintGraph<Var, Value> {
    /// Returns the first already-assigned neighbour whose value conflicts with `variable` taking
    /// `value`, if any.
    pub fn first_conflict(
        &self,
        variable: VariableId,
        value: &Value,
        assignment: &Assignment<Value>,
    ) -> Option<VariableId> {
        self.variables[variable]
            .constraints
            .iter()
            .map(|&constraint| &self.constraints[constraint])
            .find_map(|constraint| {
                let other = constraint.other(variable);
                let other_value = assignment.value(other)?;
                (!constraint.is_satisfied(variable, value, other_value)).then_some(other)
            })
    }

    /// Returns whether `variable` can take `value` without violating a constraint against one of
    /// its assigned neighbours. Unassigned neighbours are ignored.
    pub fn is_consistent(
        &self,
        variable: VariableId,
        value: &Value,
        assignment: &Assignment<Value>,
    ) -> bool {
        self.first_conflict(variable, value, assignment).is_none()
    }

    /// Returns whether `assignment` is a solution: every variable is assigned a value from its
    /// domain and every constraint holds.
    pub fn is_satisfied_by(&self, assignment: &Assignment<Value>) -> bool {
        if assignment.num_variables() != self.num_variables() || !assignment.is_complete() {
            return false;
        }

        let values_in_domain = self.variables.key_values().all(|(variable, record)| {
            assignment
                .value(variable)
                .is_some_and(|value| record.domain.contains(value))
        });

        values_in_domain
            && self.constraints.iter().all(|constraint| {
                let (a, b) = constraint.scope;
                match (assignment.value(a), assignment.value(b)) {
                    (Some(a_value), Some(b_value)) => {
                        constraint.is_satisfied(a, a_value, b_value)
                    }
                    _ => false,
                }
            })
    }
}
