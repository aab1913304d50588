mod itinerary;

pub use itinerary::{Itinerary, Leg, LegKind};
