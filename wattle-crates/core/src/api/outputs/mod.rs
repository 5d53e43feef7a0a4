pub mod solution_iterator;
mod solutions;

pub use solution_iterator::IteratedSolution;
pub use solution_iterator::SolutionIterator;
pub use solutions::Solutions;
