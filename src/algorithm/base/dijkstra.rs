use hashbrown::HashMap;
use std::f64::INFINITY as INF;

use super::heap::MyMinHeap;
use crate::network::{EdgeIndex, Network, NodeIndex, Path};


/// Single-source shortest distances over edge costs, cached per root.
#[derive(Default)]
pub struct Dijkstra {
    dist: HashMap<(NodeIndex, NodeIndex), f64>,
    pred: HashMap<(NodeIndex, NodeIndex), (NodeIndex, EdgeIndex)>,
}


impl Dijkstra {
    pub fn compute_once(&mut self, graph: &Network, r: NodeIndex) {
        if self.dist.contains_key(&(r, r)) { return }
        let mut heap = MyMinHeap::new();
        let mut seen = HashMap::new();

        seen.insert(r, 0.0);
        heap.push(r, 0.0.into());

        // settle in order of distance, then relax outgoing edges
        while let Some((v, rv_dist)) = heap.pop() {
            if self.dist.contains_key(&(r, v)) { continue; }
            let rv_dist: f64 = rv_dist.into();
            self.dist.insert((r, v), rv_dist);

            for e in graph.outgoings(v) {
                let u = graph.endpoints(e).1;
                let ru_dist = rv_dist + graph.cost(e);

                if self.dist.contains_key(&(r, u))
                    || ru_dist >= *seen.get(&u).unwrap_or(&INF) { continue; }

                self.pred.insert((r, u), (v, e));
                seen.insert(u, ru_dist);
                match heap.get(&u) {
                    Some(_) => { heap.change_priority(&u, ru_dist.into()); },
                    None    => { heap.push(u, ru_dist.into()); },
                }
            }
        }
    }
    pub fn distance(&self, src: NodeIndex, dst: NodeIndex) -> Option<f64> {
        self.dist.get(&(src, dst)).cloned()
    }
    pub fn shortest_path(&self, src: NodeIndex, dst: NodeIndex) -> Option<Path> {
        match self.dist.contains_key(&(src, dst)) {
            true  => Some(self.backtrace(src, dst)),
            false => None,
        }
    }
    fn backtrace(&self, src: NodeIndex, dst: NodeIndex) -> Path {
        if src == dst {
            vec![]
        } else {
            let &(pred, edge) = self.pred.get(&(src, dst))
                .expect("Error when backtrace path");
            let mut path = self.backtrace(src, pred);
            path.push(edge);
            path
        }
    }
}



#[cfg(test)]
mod test {
    use super::Dijkstra;
    use crate::network::Network;

    fn line(count: usize) -> Network {
        let mut graph = Network::default();
        let positions = (0..count)
            .map(|i| [i as f64, 0.0, 0.0].into())
            .collect();
        graph.add_waypoints(positions);
        graph
    }

    #[test]
    fn test_dijkstra_case1() {
        let mut graph = line(3);
        graph.add_edges(vec![
            (0, 1, 10.0), (0, 1, 10.0), (1, 2, 20.0), (0, 2, 02.0),
        ]);
        let mut dijkstra = Dijkstra::default();
        dijkstra.compute_once(&graph, 0.into());
        assert_eq!(dijkstra.shortest_path(0.into(), 2.into()), Some(vec![3.into()]));
        assert_eq!(dijkstra.distance(0.into(), 2.into()), Some(2.0));
    }
    #[test]
    fn test_dijkstra_case2() {
        let mut graph = line(6);
        graph.add_edges(vec![
            (0, 1, 10.0), (1, 2, 20.0), (0, 2, 02.0), (2, 1, 01.0),
            (1, 3, 10.0), (0, 3, 30.0), (3, 4, 03.0),
        ]);
        let mut dijkstra = Dijkstra::default();
        dijkstra.compute_once(&graph, 0.into());
        dijkstra.compute_once(&graph, 3.into());
        let path = dijkstra.shortest_path(0.into(), 4.into()).unwrap();
        let nodes: Vec<usize> = graph.node_sequence(&path)
            .into_iter()
            .map(|n| n.index())
            .collect();
        assert_eq!(nodes, vec![0, 2, 1, 3, 4]);
        assert_eq!(dijkstra.distance(0.into(), 4.into()), Some(16.0));
        assert_eq!(dijkstra.shortest_path(3.into(), 3.into()), Some(vec![]));
        assert_eq!(dijkstra.shortest_path(0.into(), 5.into()), None);
        assert_eq!(dijkstra.shortest_path(3.into(), 0.into()), None);
    }
}
