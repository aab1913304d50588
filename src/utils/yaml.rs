use std::fs;

use serde::Deserialize;

use super::config::Config;
use super::error::Error;
use crate::network::{Network, NodeIndex};

#[derive(Deserialize)]
struct NetworkYaml {
    scale: NetworkScaleYaml,
    waypoints: Vec<WaypointYaml>,
    connections: Vec<ConnectionYaml>,
}

#[derive(Deserialize)]
struct NetworkScaleYaml {
    waypoints: usize,
}

#[derive(Deserialize)]
struct WaypointYaml {
    position: [f64; 3],
}

#[derive(Deserialize)]
struct ConnectionYaml {
    ends: [usize; 2],
    cost: Option<f64>,
}

#[derive(Deserialize)]
struct MissionYaml {
    origin: OriginYaml,
    goals: Vec<usize>,
}

/// Either a waypoint index or a free position snapped to the nearest waypoint.
#[derive(Deserialize)]
#[serde(untagged)]
enum OriginYaml {
    Waypoint(usize),
    Position([f64; 3]),
}

/// Where the courier starts, and the goals it visits in order.
#[derive(Clone, Debug, PartialEq)]
pub struct Mission {
    pub origin: NodeIndex,
    pub goals: Vec<NodeIndex>,
}

pub fn load_network(path: &str) -> Result<Network, Error> {
    let text = read(path)?;
    parse_network(&text).map_err(|err| match err {
        Error::Yaml(_, source) => Error::Yaml(path.to_owned(), source),
        err => err,
    })
}

pub fn parse_network(text: &str) -> Result<Network, Error> {
    let yaml: NetworkYaml = serde_yaml::from_str(text)
        .map_err(|err| Error::Yaml(String::from("<network>"), err))?;
    let count = yaml.waypoints.len();
    if yaml.scale.waypoints != count {
        return Err(Error::ScaleMismatch(yaml.scale.waypoints, count));
    }
    for conn in yaml.connections.iter() {
        check_waypoint(conn.ends[0], count)?;
        check_waypoint(conn.ends[1], count)?;
        if let Some(cost) = conn.cost.filter(|cost| !(*cost >= 0.0 && cost.is_finite())) {
            return Err(Error::NegativeCost(conn.ends[0], conn.ends[1], cost));
        }
    }
    let mut network = Network::default();
    network.add_waypoints(yaml.waypoints.into_iter().map(|w| w.position.into()).collect());
    for conn in yaml.connections {
        let [from, to] = conn.ends;
        match conn.cost {
            Some(cost) => network.add_edges(vec![(from, to, cost)]),
            None       => network.add_geometric_edges(vec![(from, to)]),
        }
    }
    Ok(network)
}

pub fn load_mission(path: &str, network: &Network) -> Result<Mission, Error> {
    let text = read(path)?;
    let yaml: MissionYaml = serde_yaml::from_str(&text)
        .map_err(|err| Error::Yaml(path.to_owned(), err))?;
    let count = network.node_count();
    let origin = match yaml.origin {
        OriginYaml::Waypoint(ix) => {
            check_waypoint(ix, count)?;
            NodeIndex::from(ix)
        }
        OriginYaml::Position(xyz) => network.nearest_waypoint(&xyz.into())
            .ok_or(Error::UnknownWaypoint(0, count))?,
    };
    for &goal in yaml.goals.iter() {
        check_waypoint(goal, count)?;
    }
    Ok(Mission {
        origin,
        goals: yaml.goals.into_iter().map(NodeIndex::from).collect(),
    })
}

pub fn load_config(path: &str) -> Result<Config, Error> {
    let text = read(path)?;
    let config: Config = serde_yaml::from_str(&text)
        .map_err(|err| Error::Yaml(path.to_owned(), err))?;
    config.validate()?;
    Ok(config)
}

pub(super) fn read(path: &str) -> Result<String, Error> {
    fs::read_to_string(path)
        .map_err(|err| Error::Io(path.to_owned(), err))
}

pub(super) fn check_waypoint(ix: usize, count: usize) -> Result<(), Error> {
    match ix < count {
        true  => Ok(()),
        false => Err(Error::UnknownWaypoint(ix, count)),
    }
}
