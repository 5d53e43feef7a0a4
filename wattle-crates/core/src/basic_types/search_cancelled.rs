use thiserror::Error;

#[cfg(doc)]
use crate::termination::TerminationCondition;

/// Returned when the [`TerminationCondition`] of a search fired before the search space was
/// exhausted.
///
/// Not finding a solution is never an error; this only signals that the answer is unknown.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("The search was cancelled before it could complete")]
pub struct SearchCancelled;
