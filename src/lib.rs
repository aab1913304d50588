pub mod algorithm;
pub mod component;
pub mod dispatcher;
pub mod network;
pub mod utils;

pub use algorithm::{AStar, AntColony, Heuristic, HeuristicEnum};
pub use component::Itinerary;
pub use dispatcher::Dispatcher;
pub use network::{EdgeIndex, Network, NodeIndex, Path, Position};

/// An ant gives up after this many moves without reaching its goal.
pub const MAX_WALK_STEPS: u32 = 200;
/// Evaporation never drives an edge's trail below this.
pub const MIN_PHEROMONE: f64 = 0.01;
/// Stands in for zero distance when inverting distances into desirability.
pub const DISTANCE_EPSILON: f64 = 0.001;
