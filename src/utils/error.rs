use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to read {0}: {1}")]
    Io(String, #[source] io::Error),
    #[error("failed to parse yaml {0}: {1}")]
    Yaml(String, #[source] serde_yaml::Error),
    #[error("failed to parse json {0}: {1}")]
    Json(String, #[source] serde_json::Error),
    #[error("parameter `{0}` cannot be {1}")]
    InvalidParameter(&'static str, f64),
    #[error("unknown heuristic `{0}`")]
    UnknownHeuristic(String),
    #[error("waypoint #{0} does not exist among {1} waypoints")]
    UnknownWaypoint(usize, usize),
    #[error("connection ({0}, {1}) has negative cost {2}")]
    NegativeCost(usize, usize, f64),
    #[error("scale declares {0} waypoints but {1} are listed")]
    ScaleMismatch(usize, usize),
}
