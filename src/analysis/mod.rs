//! Read-only measurements of generated mazes

/// Passage-graph connectivity, acyclicity and dead-end statistics
pub mod topology;
