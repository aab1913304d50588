pub mod ants;
pub mod dijkstra;
pub mod heap;
pub mod records;
