pub mod base;
mod aco;
mod astar;
mod heuristic;

pub use aco::AntColony;
pub use astar::AStar;
pub use heuristic::{Euclidean, Heuristic, HeuristicEnum, Manhattan, Uninformed};
