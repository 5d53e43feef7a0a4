//! Provides the [`VariableSelector`] trait which is required for variable selectors to implement;
//! the main method of this trait is the [`VariableSelector::select_variable`] method.
//!
//! Furthermore, it defines several implementations of the [`VariableSelector`] trait. Any
//! [`VariableSelector`] should only select variables which are unassigned.
mod input_order;
mod max_degree;
mod random;
mod variable_ordering;
mod variable_selector;

pub use input_order::*;
pub use max_degree::*;
pub use random::*;
pub use variable_ordering::*;
pub use variable_selector::*;
