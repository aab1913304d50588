use serde::Deserialize;
use super::error::Error;
use super::yaml::{check_waypoint, read};
use crate::network::Network;


/// Compact form: bare positions and directed connections costed by distance.
#[derive(Deserialize)]
struct NetworkJson {
    waypoints: Vec<[f64; 3]>,
    connections: Vec<(usize, usize)>,
}


pub fn load_network(path: &str) -> Result<Network, Error> {
    let text = read(path)?;
    parse_network(&text).map_err(|err| match err {
        Error::Json(_, source) => Error::Json(path.to_owned(), source),
        err => err,
    })
}

pub fn parse_network(text: &str) -> Result<Network, Error> {
    let json: NetworkJson = serde_json::from_str(text)
        .map_err(|err| Error::Json(String::from("<network>"), err))?;
    let count = json.waypoints.len();
    for &(from, to) in json.connections.iter() {
        check_waypoint(from, count)?;
        check_waypoint(to, count)?;
    }
    let mut graph = Network::default();
    graph.add_waypoints(json.waypoints.into_iter().map(Into::into).collect());
    graph.add_geometric_edges(json.connections);
    Ok(graph)
}


#[cfg(test)]
mod test {
    use super::*;
    use crate::network::EdgeIndex;

    #[test]
    fn test_parse_network() {
        let text = r#"{
            "waypoints": [[0, 0, 0], [0, 6, 8], [0, 6, 0]],
            "connections": [[0, 1], [1, 2], [2, 0]]
        }"#;
        let graph = parse_network(text).unwrap();
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.cost(EdgeIndex::from(0)), 10.0);
        assert_eq!(graph.cost(EdgeIndex::from(1)), 8.0);
        assert_eq!(graph.cost(EdgeIndex::from(2)), 6.0);
        let broken = text.replace("[2, 0]]", "[2, 3]]");
        assert!(matches!(parse_network(&broken), Err(Error::UnknownWaypoint(3, 3))));
    }

    #[test]
    fn test_load_sample() {
        let graph = load_network("data/network/village.json").unwrap();
        assert!(graph.node_count() > 0);
        assert!(matches!(load_network("data/network/missing.json"), Err(Error::Io(_, _))));
    }
}
