//! The immutable topology of a problem: variables, their domains and the binary constraints
//! between them.
mod constraint_graph;
mod relation;
mod variable_id;

pub use constraint_graph::ConstraintGraph;
pub(crate) use relation::BinaryConstraint;
pub use relation::ConstraintView;
pub use relation::Relation;
pub use relation::RelationFn;
pub use variable_id::ConstraintId;
pub use variable_id::VariableId;
