use std::fmt::Write;
use crate::network::NodeIndex;


#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LegKind {
    /// Ant colony route to a goal, found after this many searches.
    Outbound(u32),
    /// A* route back to the origin.
    Return,
}

#[derive(Clone, Debug)]
pub struct Leg {
    pub kind: LegKind,
    pub route: Vec<NodeIndex>,
    pub distance: f64,
    pub optimal: Option<f64>,
}

#[derive(Clone, Debug, Default)]
pub struct Itinerary {
    pub legs: Vec<Leg>,
    pub delivered: Vec<NodeIndex>,
    pub undelivered: Vec<NodeIndex>,
    pub returned: bool,
    pub elapsed: u128,
}


impl Leg {
    pub fn new(kind: LegKind, route: Vec<NodeIndex>, distance: f64, optimal: Option<f64>) -> Self {
        Leg { kind, route, distance, optimal }
    }
    pub fn is_outbound(&self) -> bool {
        matches!(self.kind, LegKind::Outbound(_))
    }
    /// How much longer than the shortest route this leg is, 1.0 being optimal.
    pub fn stretch(&self) -> Option<f64> {
        match self.optimal {
            Some(optimal) if optimal > 0.0 => Some(self.distance / optimal),
            _ => None,
        }
    }
}

impl Itinerary {
    pub fn total_distance(&self) -> f64 {
        self.legs.iter()
            .map(|leg| leg.distance)
            .sum()
    }
    pub fn is_complete(&self) -> bool {
        self.undelivered.is_empty() && self.returned
    }
    pub fn summary(&self) -> String {
        let mut msg = String::new();
        for (i, leg) in self.legs.iter().enumerate() {
            let kind = match leg.kind {
                LegKind::Outbound(attempts) => format!("outbound ({} searches)", attempts),
                LegKind::Return => String::from("return"),
            };
            let route: Vec<usize> = leg.route.iter().map(|n| n.index()).collect();
            let stretch = leg.stretch()
                .map(|s| format!("{:.0}%", s * 100.0))
                .unwrap_or_else(|| String::from("-"));
            writeln!(msg, "- leg #{:02} {} {:.2} ({} of shortest) {:?}",
                     i, kind, leg.distance, stretch, route).unwrap();
        }
        let undelivered: Vec<usize> = self.undelivered.iter().map(|n| n.index()).collect();
        writeln!(msg, "delivered {} of {} goals, undelivered {:?}, {}",
                 self.delivered.len(), self.delivered.len() + self.undelivered.len(),
                 undelivered, if self.returned { "returned" } else { "stranded" }).unwrap();
        write!(msg, "travelled {:.2} in total, computed in {} μs",
               self.total_distance(), self.elapsed).unwrap();
        msg
    }
}
