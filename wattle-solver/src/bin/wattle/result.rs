use thiserror::Error;
use wattle_solver::edge_list::EdgeListError;
use wattle_solver::ConstraintGraphError;

pub(crate) type WattleResult<T> = Result<T, WattleError>;

#[derive(Error, Debug)]
pub(crate) enum WattleError {
    #[error("IO error, more details: {0}")]
    IOError(#[from] std::io::Error),
    #[error("The edge list was invalid, more details: {0}")]
    InvalidEdgeList(#[from] EdgeListError),
    #[error("Failed to build the constraint graph, more details: {0}")]
    Graph(#[from] ConstraintGraphError),
}
