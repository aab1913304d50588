use serde::Deserialize;
use argh::FromArgs;
use crate::{MAX_WALK_STEPS, MIN_PHEROMONE};
use crate::network::DEFAULT_PHEROMONE;
use super::error::Error;

/// Deliver parcels along ant colony routes and fly back along A*
#[derive(FromArgs)]
pub struct Arguments {
    /// path to the waypoint network (.yaml or .json)
    #[argh(positional)]
    pub network: String,
    /// path to the mission listing origin and goals
    #[argh(positional)]
    pub mission: String,
    /// path to configuration file
    #[argh(option, short='c', default="String::from(\"data/config/default.yaml\")")]
    pub config: String,
    /// override random seed for the ant colony
    #[argh(option, short='s')]
    pub seed: Option<u64>,
    /// override number of ants per search
    #[argh(option, short='a')]
    pub ants: Option<u32>,
    /// override evaporation rate, clamped into [0, 1]
    #[argh(option, short='r')]
    pub evaporation: Option<f64>,
    /// override heuristic used by A* on the way back
    #[argh(option, short='e')]
    pub heuristic: Option<String>,
    /// log level, one of error, warn, info, debug or trace
    #[argh(option, short='l', default="String::from(\"info\")")]
    pub log_level: String,
}

#[derive(Deserialize, Clone, Debug)]
pub struct Config {
    pub name: String,
    pub heuristic: String,
    pub seed: u64,
    #[serde(default = "default_retries")]
    pub retries: u32,
    #[serde(default = "default_pheromone")]
    pub initial_pheromone: f64,
    #[serde(default)]
    pub parameters: AcoParams,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct AcoParams {
    pub alpha: f64,
    pub beta: f64,
    pub deposit: f64,
    pub evaporation_rate: f64,
    pub ants_per_search: u32,
    pub min_pheromone: f64,
    pub max_walk_steps: u32,
}

fn default_retries() -> u32 {
    3
}

fn default_pheromone() -> f64 {
    DEFAULT_PHEROMONE
}

impl Default for AcoParams {
    fn default() -> Self {
        AcoParams {
            alpha: 1.0,
            beta: 0.0001,
            deposit: 0.0006,
            evaporation_rate: 0.1,
            ants_per_search: 50,
            min_pheromone: MIN_PHEROMONE,
            max_walk_steps: MAX_WALK_STEPS,
        }
    }
}

impl AcoParams {
    pub fn validate(&self) -> Result<(), Error> {
        let nonnegative = [
            ("alpha", self.alpha),
            ("beta", self.beta),
            ("deposit", self.deposit),
            ("min_pheromone", self.min_pheromone),
        ];
        for &(name, value) in nonnegative.iter() {
            if !(value >= 0.0 && value.is_finite()) {
                return Err(Error::InvalidParameter(name, value));
            }
        }
        if !(0.0..=1.0).contains(&self.evaporation_rate) {
            return Err(Error::InvalidParameter("evaporation_rate", self.evaporation_rate));
        }
        if self.ants_per_search == 0 {
            return Err(Error::InvalidParameter("ants_per_search", 0.0));
        }
        if self.max_walk_steps == 0 {
            return Err(Error::InvalidParameter("max_walk_steps", 0.0));
        }
        Ok(())
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), Error> {
        if !(self.initial_pheromone >= 0.0 && self.initial_pheromone.is_finite()) {
            return Err(Error::InvalidParameter("initial_pheromone", self.initial_pheromone));
        }
        self.parameters.validate()
    }
    pub fn override_from_args(&mut self, args: &Arguments) {
        if let Some(seed) = args.seed {
            self.seed = seed;
        }
        if let Some(ants) = args.ants {
            self.parameters.ants_per_search = ants;
        }
        if let Some(rate) = args.evaporation {
            self.parameters.evaporation_rate = num::clamp(rate, 0.0, 1.0);
        }
        if let Some(heuristic) = &args.heuristic {
            self.heuristic = heuristic.clone();
        }
    }
}
