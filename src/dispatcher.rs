use crate::algorithm::{AStar, AntColony, HeuristicEnum};
use crate::algorithm::base::dijkstra::Dijkstra;
use crate::component::{Itinerary, Leg, LegKind};
use crate::network::{Network, NodeIndex};
use crate::utils::config::Config;
use crate::utils::error::Error;
use log::{info, warn};
use rand::SeedableRng;
use rand_chacha::ChaChaRng;
use std::time::Instant;


/// Drives one courier: ant colony routes out to each goal in turn, then a
/// single A* route back home.
pub struct Dispatcher {
    network: Network,
    pub colony: AntColony,
    pub heuristic: HeuristicEnum,
    pub config: Config,
    dijkstra: Dijkstra,
    rng: ChaChaRng,
}


impl Dispatcher {
    pub fn new(mut network: Network, config: Config) -> Result<Self, Error> {
        config.validate()?;
        let heuristic = HeuristicEnum::from_name(&config.heuristic)?;
        let colony = AntColony::new(config.parameters.clone());
        let rng = ChaChaRng::seed_from_u64(config.seed);
        network.reset_pheromone(config.initial_pheromone);
        let dijkstra = Dijkstra::default();
        Ok(Self { network, colony, heuristic, config, dijkstra, rng })
    }
    pub fn network(&self) -> &Network {
        &self.network
    }
    /// Mutable access to the network; forgets every cached shortest distance.
    pub fn network_mut(&mut self) -> &mut Network {
        self.dijkstra = Dijkstra::default();
        &mut self.network
    }
    pub fn deliver(&mut self, origin: NodeIndex, goals: &[NodeIndex]) -> Itinerary {
        let start = Instant::now();
        let mut itinerary = Itinerary::default();
        let mut current = origin;

        for (nth, &goal) in goals.iter().enumerate() {
            match self.outbound(current, goal) {
                Some(leg) => {
                    info!("goal #{} {:?} reached in {:.2} after {:?}",
                          nth + 1, goal, leg.distance, leg.kind);
                    itinerary.legs.push(leg);
                    itinerary.delivered.push(goal);
                    current = goal;
                }
                None => {
                    warn!("goal #{} {:?} is unreachable from {:?}, heading home",
                          nth + 1, goal, current);
                    itinerary.undelivered.extend_from_slice(&goals[nth..]);
                    break;
                }
            }
        }

        match self.homebound(current, origin) {
            Some(leg) => {
                info!("returned to {:?} in {:.2}", origin, leg.distance);
                itinerary.legs.push(leg);
                itinerary.returned = true;
            }
            None => warn!("no way back from {:?} to {:?}", current, origin),
        }
        itinerary.elapsed = start.elapsed().as_micros();
        info!("{}", itinerary.summary());
        itinerary
    }
    fn outbound(&mut self, from: NodeIndex, goal: NodeIndex) -> Option<Leg> {
        let attempts = self.config.retries + 1;
        for attempt in 1..=attempts {
            let found = self.colony.find_path(&mut self.network, from, goal, &mut self.rng);
            if let Some(route) = found {
                let distance = self.network.distance_along(&route);
                let optimal = self.shortest(from, goal);
                return Some(Leg::new(LegKind::Outbound(attempt), route, distance, optimal));
            }
        }
        None
    }
    fn homebound(&mut self, from: NodeIndex, origin: NodeIndex) -> Option<Leg> {
        let path = AStar::find_path(&self.network, from, origin, &self.heuristic)?;
        let distance = self.network.cost_along(&path);
        let route = match path.is_empty() {
            true  => vec![from],
            false => self.network.node_sequence(&path),
        };
        let optimal = self.shortest(from, origin);
        Some(Leg::new(LegKind::Return, route, distance, optimal))
    }
    fn shortest(&mut self, from: NodeIndex, to: NodeIndex) -> Option<f64> {
        self.dijkstra.compute_once(&self.network, from);
        self.dijkstra.distance(from, to)
    }
}
