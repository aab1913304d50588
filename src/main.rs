use ant_courier::Dispatcher;
use ant_courier::network::Network;
use ant_courier::utils::config::Arguments;
use ant_courier::utils::error::Error;
use ant_courier::utils::{json, logger, yaml};
use log::{error, info};

fn main() {
    let args: Arguments = argh::from_env();
    logger::init(logger::parse_level(&args.log_level));
    if let Err(err) = run(&args) {
        error!("{}", err);
        std::process::exit(1);
    }
}

fn run(args: &Arguments) -> Result<(), Error> {
    let mut config = yaml::load_config(&args.config)?;
    config.override_from_args(args);
    config.validate()?;
    info!("loaded config `{}` with seed {}", config.name, config.seed);

    let network = load_network(&args.network)?;
    let mission = yaml::load_mission(&args.mission, &network)?;
    info!("{} waypoints, {} connections, {} goals",
          network.node_count(), network.edge_count(), mission.goals.len());

    let mut dispatcher = Dispatcher::new(network, config)?;
    let itinerary = dispatcher.deliver(mission.origin, &mission.goals);
    println!("{}", itinerary.summary());
    Ok(())
}

fn load_network(path: &str) -> Result<Network, Error> {
    match path.ends_with(".json") {
        true  => json::load_network(path),
        false => yaml::load_network(path),
    }
}
