use std::fmt::Debug;
use std::fmt::Formatter;
use std::sync::Arc;

use super::ConstraintId;
use super::VariableId;

/// The signature of a user-defined binary relation; it receives the value of the first variable
/// of the constraint followed by the value of the second.
pub type RelationFn<Value> = dyn Fn(&Value, &Value) -> bool + Send + Sync;

/// The relation which a binary constraint enforces between the values of its two variables.
pub enum Relation<Value> {
    /// The two variables must take different values; this is the relation of graph colouring.
    NotEqual,
    /// An arbitrary predicate over the pair of values.
    Predicate(Arc<RelationFn<Value>>),
}

impl<Value> Relation<Value> {
    /// Wraps a closure as a [`Relation::Predicate`].
    pub fn predicate(predicate: impl Fn(&Value, &Value) -> bool + Send + Sync + 'static) -> Self {
        Relation::Predicate(Arc::new(predicate))
    }

    pub fn is_not_equal(&self) -> bool {
        matches!(self, Relation::NotEqual)
    }
}

impl<Value: PartialEq> Relation<Value> {
    /// Returns whether the pair `(first, second)` is allowed by this relation.
    pub fn holds(&self, first: &Value, second: &Value) -> bool {
        match self {
            Relation::NotEqual => first != second,
            Relation::Predicate(predicate) => predicate(first, second),
        }
    }
}

impl<Value> Clone for Relation<Value> {
    fn clone(&self) -> Self {
        match self {
            Relation::NotEqual => Relation::NotEqual,
            Relation::Predicate(predicate) => Relation::Predicate(Arc::clone(predicate)),
        }
    }
}

impl<Value> Debug for Relation<Value> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Relation::NotEqual => write!(f, "NotEqual"),
            Relation::Predicate(_) => write!(f, "Predicate(<closure>)"),
        }
    }
}

/// A [`Relation`] together with the (ordered) pair of variables it constrains.
#[derive(Debug, Clone)]
pub(crate) struct BinaryConstraint<Value> {
    pub(crate) scope: (VariableId, VariableId),
    pub(crate) relation: Relation<Value>,
}

impl<Value> BinaryConstraint<Value> {
    pub(crate) fn other(&self, variable: VariableId) -> VariableId {
        if self.scope.0 == variable {
            self.scope.1
        } else {
            self.scope.0
        }
    }

    pub(crate) fn connects(&self, a: VariableId, b: VariableId) -> bool {
        self.scope == (a, b) || self.scope == (b, a)
    }
}

impl<Value: PartialEq> BinaryConstraint<Value> {
    /// Checks the constraint from the point of view of `variable`, which takes `value` while the
    /// other variable in the scope takes `other_value`.
    pub(crate) fn is_satisfied(
        &self,
        variable: VariableId,
        value: &Value,
        other_value: &Value,
    ) -> bool {
        if self.scope.0 == variable {
            self.relation.holds(value, other_value)
        } else {
            self.relation.holds(other_value, value)
        }
    }
}

/// Lightweight view of a stored constraint, returned by
/// [`ConstraintGraph::constraints`](crate::ConstraintGraph::constraints).
#[derive(Debug, Clone, Copy)]
pub struct ConstraintView<'graph, Value> {
    pub id: ConstraintId,
    pub scope: (VariableId, VariableId),
    pub relation: &'graph Relation<Value>,
}
