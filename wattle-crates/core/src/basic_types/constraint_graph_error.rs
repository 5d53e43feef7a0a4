use thiserror::Error;

#[cfg(doc)]
use crate::ConstraintGraph;

/// Errors related to building or querying a [`ConstraintGraph`].
///
/// These are raised while the instance data is being loaded and are always recoverable by
/// correcting that data; the payload is the [`Debug`] rendering of the offending variable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConstraintGraphError {
    /// A variable was registered twice.
    #[error("The variable {0} has already been registered")]
    DuplicateVariable(String),
    /// A variable was referenced which was never registered.
    #[error("The variable {0} is not registered in the constraint graph")]
    UnknownVariable(String),
    /// A constraint was attempted between a variable and itself.
    #[error("A constraint cannot relate the variable {0} to itself")]
    InvalidConstraint(String),
}

impl ConstraintGraphError {
    pub(crate) fn duplicate_variable(variable: impl std::fmt::Debug) -> Self {
        Self::DuplicateVariable(format!("{variable:?}"))
    }

    pub(crate) fn unknown_variable(variable: impl std::fmt::Debug) -> Self {
        Self::UnknownVariable(format!("{variable:?}"))
    }

    pub(crate) fn invalid_constraint(variable: impl std::fmt::Debug) -> Self {
        Self::InvalidConstraint(format!("{variable:?}"))
    }
}
