//! # Wattle
//! Wattle solves small discrete constraint satisfaction problems by backtracking search.
//!
//! A problem is described by a [`ConstraintGraph`]: a set of variables, each with an ordered
//! finite domain, and binary constraints between pairs of variables. The classic example is map
//! colouring, where every region must receive a colour different from each of its neighbours.
//!
//! The [`BacktrackingSolver`] extends a partial [`Assignment`] one variable at a time, never
//! assigning a value which conflicts with an already assigned neighbour, and backtracks when a
//! variable has no consistent value left. It can return the first [`Solution`] or lazily iterate
//! over all of them.
//!
//! # Using Wattle
//! A graph is built by registering the variables with their domains and then the constraints:
//! ```rust
//! # use wattle_core::ConstraintGraph;
//! let mut graph = ConstraintGraph::new();
//! let _ = graph.add_variable("WA", ["Red", "Green", "Blue"]).unwrap();
//! let _ = graph.add_variable("NT", ["Red", "Green", "Blue"]).unwrap();
//! let _ = graph.add_variable("SA", ["Red", "Green", "Blue"]).unwrap();
//!
//! let _ = graph.add_constraint(&"WA", &"NT").unwrap();
//! let _ = graph.add_constraint(&"WA", &"SA").unwrap();
//! let _ = graph.add_constraint(&"NT", &"SA").unwrap();
//! ```
//!
//! The solver is then created for the graph and given a
//! [`VariableSelector`](branching::variable_selection::VariableSelector) and a
//! [`TerminationCondition`](termination::TerminationCondition):
//! ```rust
//! # use wattle_core::ConstraintGraph;
//! # use wattle_core::BacktrackingSolver;
//! # use wattle_core::branching::variable_selection::InputOrder;
//! # use wattle_core::termination::Indefinite;
//! # let graph = ConstraintGraph::from_instance(
//! #     ["WA", "NT", "SA"].map(|region| (region, ["Red", "Green", "Blue"])),
//! #     [("WA", "NT"), ("WA", "SA"), ("NT", "SA")],
//! # )
//! # .unwrap();
//! let mut solver = BacktrackingSolver::new(&graph);
//!
//! let solution = solver
//!     .solve(&mut InputOrder::default(), &mut Indefinite)
//!     .expect("no termination condition can fire")
//!     .expect("a triangle can be coloured with three colours");
//!
//! assert_eq!(solution.value_of(&"WA"), Ok(&"Red"));
//! assert_eq!(solution.value_of(&"NT"), Ok(&"Green"));
//! assert_eq!(solution.value_of(&"SA"), Ok(&"Blue"));
//! ```
//!
//! # Obtaining all solutions
//! [`BacktrackingSolver::solve_all`] returns a
//! [`SolutionIterator`](results::SolutionIterator) which resumes the search each time the next
//! solution is requested. When the termination condition fires, the iterator yields
//! [`SearchCancelled`] once and then ends.
//! ```rust
//! # use wattle_core::ConstraintGraph;
//! # use wattle_core::BacktrackingSolver;
//! # use wattle_core::branching::variable_selection::InputOrder;
//! # use wattle_core::termination::Indefinite;
//! let graph = ConstraintGraph::from_instance(
//!     [("A", ["Red", "Green"]), ("B", ["Red", "Green"])],
//!     [("A", "B")],
//! )
//! .unwrap();
//! let mut solver = BacktrackingSolver::new(&graph);
//!
//! let solutions = solver
//!     .solve_all(InputOrder::default(), Indefinite)
//!     .collect::<Result<Vec<_>, _>>()
//!     .unwrap();
//!
//! assert_eq!(solutions.len(), 2);
//! assert_eq!(solver.statistics().num_solutions, 2);
//! ```
pub(crate) mod basic_types;
pub mod containers;
pub(crate) mod engine;
pub(crate) mod graph;

#[doc(hidden)]
pub mod asserts;
pub mod branching;
pub mod statistics;
pub mod termination;

pub use convert_case;
pub use rand;

// We declare a private module with public use, so that all exports from API are exports directly
// from the crate.
//
// Example:
// `use wattle_core::solve_all;`
// vs.
// `use wattle_core::api::solve_all;`
mod api;

pub use api::*;

pub use crate::basic_types::ConstraintGraphError;
pub use crate::basic_types::SearchCancelled;
pub use crate::basic_types::Solution;
pub use crate::engine::Assignment;
pub use crate::engine::BacktrackingSolver;
pub use crate::engine::SolverStatistics;
pub use crate::graph::ConstraintGraph;
pub use crate::graph::ConstraintId;
pub use crate::graph::ConstraintView;
pub use crate::graph::Relation;
pub use crate::graph::RelationFn;
pub use crate::graph::VariableId;
