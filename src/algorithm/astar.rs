use log::{debug, trace};
use super::Heuristic;
use super::base::records::{RecordList, SearchRecord};
use crate::network::{Network, NodeIndex, Path};


/// Best-first search for the cheapest path over edge costs.
///
/// Closed nodes are reopened when a cheaper route to them shows up, so the
/// result stays optimal under any admissible heuristic. The search only reads
/// the network and keeps its records per call.
pub struct AStar;

impl AStar {
    pub fn find_path<H>(network: &Network, start: NodeIndex, goal: NodeIndex, heuristic: &H) -> Option<Path>
    where
        H: Heuristic + ?Sized,
    {
        assert!(network.contains(start) && network.contains(goal),
                "A* between unknown waypoints {:?} and {:?}", start, goal);
        let mut open = RecordList::new();
        let mut closed = RecordList::new();
        let estimate = heuristic.estimate(network, start, goal);
        open.insert(SearchRecord::new(start, None, 0.0, estimate));

        let mut expanded = 0;
        while let Some(&current) = open.smallest() {
            if current.node == goal {
                debug!("A* reached {:?} from {:?} after {} expansions", goal, start, expanded);
                return Self::reconstruct(network, start, current, &open, &closed);
            }
            expanded += 1;
            trace!("A* expands {:?} (cost {:.3}, estimate {:.3})",
                   current.node, current.cost_so_far, current.estimated_total);

            for edge in network.outgoings(current.node) {
                let end_node = network.endpoints(edge).1;
                let end_cost = current.cost_so_far + network.cost(edge);

                let remainder = if let Some(record) = closed.find(end_node) {
                    if record.cost_so_far <= end_cost { continue; }
                    let remainder = record.remainder();
                    closed.remove(end_node);
                    trace!("A* reopens {:?}", end_node);
                    remainder
                } else if let Some(record) = open.find(end_node) {
                    if record.cost_so_far <= end_cost { continue; }
                    record.remainder()
                } else {
                    heuristic.estimate(network, end_node, goal)
                };

                open.insert(SearchRecord::new(end_node, Some(edge), end_cost, end_cost + remainder));
            }

            open.remove(current.node);
            closed.insert(current);
        }
        debug!("A* found no path from {:?} to {:?} after {} expansions", start, goal, expanded);
        None
    }

    fn reconstruct(network: &Network, start: NodeIndex, goal: SearchRecord,
                   open: &RecordList, closed: &RecordList) -> Option<Path> {
        let mut path = vec![];
        let mut record = goal;
        while record.node != start {
            let edge = record.incoming?;
            path.push(edge);
            let from = network.endpoints(edge).0;
            record = *closed.find(from).or_else(|| open.find(from))?;
            debug_assert!(path.len() <= network.edge_count());
        }
        path.reverse();
        Some(path)
    }
}
