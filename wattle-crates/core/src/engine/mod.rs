mod assignment;
mod backtracking_solver;
mod search;
mod solver_statistics;

pub use assignment::Assignment;
pub use backtracking_solver::BacktrackingSolver;
pub(crate) use search::Search;
pub use solver_statistics::SolverStatistics;
