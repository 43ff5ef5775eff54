/// Seeded random source for reproducible generation
pub mod random;
/// Depth-first entrance to exit pathfinding
pub mod solver;
/// Wilson's algorithm spanning tree generation and gate placement
pub mod wilson;
