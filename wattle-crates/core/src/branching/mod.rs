//! Contains structures and traits which decide the order in which the search branches.
//!
//! The [`BacktrackingSolver`] always tries the values of a variable in domain order; the
//! [`variable_selection::VariableSelector`] passed to it decides which unassigned variable is
//! branched on next. Changing the selector never affects which solutions are found, only the order
//! in which they are produced and the amount of work needed to find them.
//!
//! The default is [`variable_selection::InputOrder`], which follows the registration order of the
//! [`ConstraintGraph`].

#[cfg(doc)]
use crate::BacktrackingSolver;
#[cfg(doc)]
use crate::ConstraintGraph;

mod selection_context;
pub mod variable_selection;

#[cfg(test)]
pub(crate) use selection_context::create_path_for_testing;
pub use selection_context::SelectionContext;
