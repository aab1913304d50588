use enum_dispatch::enum_dispatch;
use crate::network::{Network, NodeIndex};
use crate::utils::error::Error;


/// Estimated remaining cost from `node` to `goal`, never negative.
#[enum_dispatch]
pub trait Heuristic {
    fn estimate(&self, network: &Network, node: NodeIndex, goal: NodeIndex) -> f64;
}

#[enum_dispatch(Heuristic)]
#[derive(Clone, Debug)]
pub enum HeuristicEnum {
    Euclidean,
    Manhattan,
    Uninformed,
}

/// Straight-line distance; admissible whenever edge costs are distances.
#[derive(Clone, Copy, Debug, Default)]
pub struct Euclidean;

/// Sum of axis distances. Guides harder but may overestimate.
#[derive(Clone, Copy, Debug, Default)]
pub struct Manhattan;

#[derive(Clone, Copy, Debug, Default)]
pub struct Uninformed;

impl Heuristic for Euclidean {
    fn estimate(&self, network: &Network, node: NodeIndex, goal: NodeIndex) -> f64 {
        network.distance(node, goal)
    }
}

impl Heuristic for Manhattan {
    fn estimate(&self, network: &Network, node: NodeIndex, goal: NodeIndex) -> f64 {
        let (a, b) = (network.position(node), network.position(goal));
        (a.x - b.x).abs() + (a.y - b.y).abs() + (a.z - b.z).abs()
    }
}

impl Heuristic for Uninformed {
    fn estimate(&self, _network: &Network, _node: NodeIndex, _goal: NodeIndex) -> f64 {
        0.0
    }
}

impl<F> Heuristic for F
where
    F: Fn(&Network, NodeIndex, NodeIndex) -> f64,
{
    fn estimate(&self, network: &Network, node: NodeIndex, goal: NodeIndex) -> f64 {
        self(network, node, goal)
    }
}

impl HeuristicEnum {
    pub fn from_name(name: &str) -> Result<Self, Error> {
        match name {
            "euclidean"  => Ok(Euclidean.into()),
            "manhattan"  => Ok(Manhattan.into()),
            "uninformed" => Ok(Uninformed.into()),
            _            => Err(Error::UnknownHeuristic(name.to_owned())),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn pair() -> Network {
        let mut network = Network::default();
        network.add_waypoints(vec![[0.0, 0.0, 0.0].into(), [3.0, 4.0, 12.0].into()]);
        network
    }

    #[test]
    fn it_estimates_by_name() {
        let network = pair();
        let estimate = |name: &str| HeuristicEnum::from_name(name).unwrap()
            .estimate(&network, 0.into(), 1.into());
        assert_eq!(estimate("euclidean"), 13.0);
        assert_eq!(estimate("manhattan"), 19.0);
        assert_eq!(estimate("uninformed"), 0.0);
        assert!(HeuristicEnum::from_name("telepathy").is_err());
    }

    #[test]
    fn it_accepts_closures() {
        let network = pair();
        let doubled = |n: &Network, a: NodeIndex, b: NodeIndex| 2.0 * n.distance(a, b);
        assert_eq!(doubled.estimate(&network, 1.into(), 0.into()), 26.0);
    }
}
