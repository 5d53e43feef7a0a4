mod constraint_graph_error;
mod search_cancelled;
mod solution;

pub use constraint_graph_error::ConstraintGraphError;
pub use search_cancelled::SearchCancelled;
pub use solution::Solution;
