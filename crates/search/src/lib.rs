//! Generic unvisited-frontier graph search.
//!
//! The engine in [`search`] knows nothing about people or movies: it works
//! over any [`SearchSpace`] whose adjacency function yields edge-labeled
//! neighbors. A FIFO frontier makes the search breadth-first and therefore
//! shortest-path; a LIFO frontier is provided as the depth-first variant of
//! the same interface.

pub mod error;
pub mod frontier;
pub mod node;
pub mod search;

pub use error::{EmptyFrontierError, SearchError};
pub use frontier::{Frontier, QueueFrontier, StackFrontier};
pub use node::{Node, NodeArena, NodeId};
pub use search::{
    depth_first_path, search, shortest_path, shortest_path_with, SearchPolicy, SearchSpace,
};
