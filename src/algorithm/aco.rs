use hashbrown::HashSet;
use log::{debug, trace, warn};
use rand::Rng;
use crate::DISTANCE_EPSILON;
use crate::network::{EdgeIndex, Network, NodeIndex};
use crate::utils::config::AcoParams;
use super::base::ants::{select_weighted, Ant};


/// Ant colony search guided by the pheromone stored on the network's edges.
///
/// Every ant deposits on each edge it picks while walking; evaporation runs
/// once after the whole batch. The trail therefore carries over from one call
/// to the next.
pub struct AntColony {
    params: AcoParams,
}


impl AntColony {
    pub fn new(params: AcoParams) -> Self {
        if let Err(err) = params.validate() {
            panic!("invalid ant colony parameters: {}", err);
        }
        AntColony { params }
    }
    /// Shortest trail found by a batch of ants, by travelled distance.
    pub fn find_path<R: Rng + ?Sized>(&self, network: &mut Network, start: NodeIndex, goal: NodeIndex, rng: &mut R)
        -> Option<Vec<NodeIndex>> {
        assert!(network.contains(start) && network.contains(goal),
                "ant colony between unknown waypoints {:?} and {:?}", start, goal);
        let mut best: Option<Ant> = None;
        let mut arrived = 0;
        for nth in 0..self.params.ants_per_search {
            match self.walk_once(network, start, goal, rng) {
                Some(ant) => {
                    trace!("ant #{} arrived with distance {:.3}", nth, ant.distance);
                    arrived += 1;
                    if ant.is_shorter_than(&best) {
                        best = Some(ant);
                    }
                }
                None => trace!("ant #{} got lost", nth),
            }
        }
        network.evaporate(self.params.evaporation_rate, self.params.min_pheromone);

        match best {
            Some(ant) => {
                debug!("{}/{} ants reached {:?} from {:?}, shortest distance {:.3}",
                       arrived, self.params.ants_per_search, goal, start, ant.distance);
                Some(ant.trail)
            }
            None => {
                warn!("none of {} ants reached {:?} from {:?}",
                      self.params.ants_per_search, goal, start);
                None
            }
        }
    }
    /// One loop-free random walk; `None` if the ant gets stuck or runs out of steps.
    pub fn walk_once<R: Rng + ?Sized>(&self, network: &mut Network, start: NodeIndex, goal: NodeIndex, rng: &mut R)
        -> Option<Ant> {
        if start == goal {
            return Some(Ant::new(vec![start], network));
        }
        let mut current = start;
        let mut visited = HashSet::new();
        let mut trail = vec![start];
        let mut steps = 0;

        while current != goal && steps < self.params.max_walk_steps {
            steps += 1;
            visited.insert(current);

            let (candidates, weights) = self.candidates(network, current, goal, &visited);
            let chosen = match select_weighted(&weights, rng) {
                Some(i) => candidates[i],
                None => break,
            };
            network.deposit(chosen, self.params.deposit);

            current = network.endpoints(chosen).1;
            trail.push(current);
        }

        match current == goal {
            true  => Some(Ant::new(trail, network)),
            false => None,
        }
    }
    fn candidates(&self, network: &Network, node: NodeIndex, goal: NodeIndex, visited: &HashSet<NodeIndex>)
        -> (Vec<EdgeIndex>, Vec<f64>) {
        let goal_position = network.position(goal);
        network.outgoings(node)
            .filter(|&e| !visited.contains(&network.endpoints(e).1))
            .map(|e| {
                let target = network.endpoints(e).1;
                let mut dist = network.position(target).distance(goal_position);
                if dist <= 0.0 {
                    dist = DISTANCE_EPSILON;
                }
                let pheromone = network.pheromone(e).powf(self.params.alpha);
                let visibility = (1.0 / dist).powf(self.params.beta);
                (e, pheromone * visibility)
            })
            .filter(|&(_, weight)| weight > 0.0)
            .unzip()
    }
}

impl Default for AntColony {
    fn default() -> Self {
        AntColony::new(AcoParams::default())
    }
}
