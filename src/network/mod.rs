mod topology;

pub use topology::{EdgeIndex, Network, NodeIndex, Position};

pub type Path = Vec<EdgeIndex>;

pub const DEFAULT_PHEROMONE: f64 = 1.0;
