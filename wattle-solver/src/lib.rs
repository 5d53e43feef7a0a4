//! # Wattle solver
//! Map colouring on top of [`wattle_core`]: the built-in map of Australia, a reader for maps given
//! as edge lists, and the textual output used by the `wattle` binary.
//!
//! Everything exported by the core is available from this crate as well:
//! ```rust
//! # use wattle_solver::australia::australia_map;
//! # use wattle_solver::branching::variable_selection::InputOrder;
//! # use wattle_solver::render::render_solution;
//! let graph = australia_map(3).unwrap();
//! let solution = wattle_solver::solve(&graph, InputOrder::default()).unwrap();
//!
//! assert!(render_solution(&solution).starts_with("WA = Red\n"));
//! ```
pub mod australia;
pub mod edge_list;
pub mod render;

pub use wattle_core::*;
