use std::iter;
use super::DEFAULT_PHEROMONE;

#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub struct NodeIndex(usize);

impl NodeIndex {
    fn new(ix: usize) -> Self {
        NodeIndex(ix)
    }
    pub fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for NodeIndex {
    fn from(ix: usize) -> Self {
        NodeIndex::new(ix)
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub struct EdgeIndex(usize);

impl EdgeIndex {
    fn new(ix: usize) -> Self {
        EdgeIndex(ix)
    }
    pub fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for EdgeIndex {
    fn from(ix: usize) -> Self {
        EdgeIndex::new(ix)
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Position {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Position { x, y, z }
    }
    pub fn distance(&self, other: &Position) -> f64 {
        let (dx, dy, dz) = (self.x - other.x, self.y - other.y, self.z - other.z);
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

impl From<[f64; 3]> for Position {
    fn from(xyz: [f64; 3]) -> Self {
        Position::new(xyz[0], xyz[1], xyz[2])
    }
}

#[derive(Clone, Debug)]
pub struct Node {
    edges: Vec<EdgeIndex>,
    position: Position,
}

/// A directed connection. The cost is fixed once created; only the pheromone
/// changes, and only through the owning [`Network`].
#[derive(Clone, Debug)]
pub struct Edge {
    ends: (NodeIndex, NodeIndex),
    cost: f64,
    pheromone: f64,
}

impl Node {
    pub fn new(position: Position) -> Self {
        Self { position, edges: vec![] }
    }
}
impl Edge {
    pub fn new(ends: (NodeIndex, NodeIndex), cost: f64) -> Self {
        Edge { ends, cost, pheromone: DEFAULT_PHEROMONE }
    }
    fn set_pheromone(&mut self, pheromone: f64) {
        self.pheromone = f64::max(pheromone, 0.0);
    }
}

#[derive(Clone, Debug, Default)]
pub struct Network {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
}

impl Network {
    pub fn new() -> Self {
        Self { ..Default::default() }
    }
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
    pub fn contains(&self, node: NodeIndex) -> bool {
        node.index() < self.nodes.len()
    }
    pub fn position(&self, node: NodeIndex) -> &Position {
        debug_assert!(node.index() < self.nodes.len());
        &self.nodes[node.index()].position
    }
    pub fn endpoints(&self, edge: EdgeIndex) -> &(NodeIndex, NodeIndex) {
        debug_assert!(edge.index() < self.edges.len());
        &self.edges[edge.index()].ends
    }
    pub fn cost(&self, edge: EdgeIndex) -> f64 {
        debug_assert!(edge.index() < self.edges.len());
        self.edges[edge.index()].cost
    }
    pub fn pheromone(&self, edge: EdgeIndex) -> f64 {
        debug_assert!(edge.index() < self.edges.len());
        self.edges[edge.index()].pheromone
    }
    /// Outgoing edges of `node` in insertion order; empty for a dead end.
    pub fn outgoings(&self, node: NodeIndex)
        -> impl Iterator<Item=EdgeIndex> + '_ {
        debug_assert!(node.index() < self.nodes.len());
        self.nodes[node.index()].edges.iter().cloned()
    }
    pub fn add_waypoints(&mut self, positions: Vec<Position>) {
        let waypoints = positions.into_iter().map(Node::new);
        self.nodes.extend(waypoints);
    }
    pub fn add_edge(&mut self, from: usize, to: usize, cost: f64) -> EdgeIndex {
        assert!(from < self.nodes.len() && to < self.nodes.len(),
                "edge ({}, {}) refers to an unknown waypoint", from, to);
        assert!(cost >= 0.0 && cost.is_finite(),
                "edge ({}, {}) has invalid cost {}", from, to, cost);
        let edge = EdgeIndex::new(self.edges.len());
        self.nodes[from].edges.push(edge);
        self.edges.push(Edge::new((from.into(), to.into()), cost));
        edge
    }
    pub fn add_edges(&mut self, edges: Vec<(usize, usize, f64)>) {
        for (from, to, cost) in edges {
            self.add_edge(from, to, cost);
        }
    }
    /// Adds directed edges costed by the Euclidean distance of their ends.
    pub fn add_geometric_edges(&mut self, edges: Vec<(usize, usize)>) {
        for (from, to) in edges {
            let cost = self.nodes[from].position.distance(&self.nodes[to].position);
            self.add_edge(from, to, cost);
        }
    }
    pub fn deposit(&mut self, edge: EdgeIndex, amount: f64) {
        debug_assert!(edge.index() < self.edges.len());
        let edge = &mut self.edges[edge.index()];
        let pheromone = edge.pheromone + amount;
        edge.set_pheromone(pheromone);
    }
    pub fn evaporate(&mut self, rate: f64, floor: f64) {
        debug_assert!((0.0..=1.0).contains(&rate));
        for edge in self.edges.iter_mut() {
            let pheromone = (1.0 - rate) * edge.pheromone;
            edge.set_pheromone(f64::max(pheromone, floor));
        }
    }
    pub fn reset_pheromone(&mut self, pheromone: f64) {
        for edge in self.edges.iter_mut() {
            edge.set_pheromone(pheromone);
        }
    }
    pub fn distance(&self, a: NodeIndex, b: NodeIndex) -> f64 {
        self.position(a).distance(self.position(b))
    }
    pub fn cost_along(&self, path: &[EdgeIndex]) -> f64 {
        path.iter()
            .map(|&e| self.cost(e))
            .sum()
    }
    pub fn distance_along(&self, nodes: &[NodeIndex]) -> f64 {
        nodes.windows(2)
            .map(|ends| self.distance(ends[0], ends[1]))
            .sum()
    }
    pub fn node_sequence(&self, path: &[EdgeIndex]) -> Vec<NodeIndex> {
        if path.is_empty() {
            return vec![];
        }
        let head = self.endpoints(path[0]).0;
        let tail = path.iter()
            .map(|&e| self.endpoints(e).1);
        iter::once(head).chain(tail).collect()
    }
    pub fn nearest_waypoint(&self, position: &Position) -> Option<NodeIndex> {
        self.nodes.iter()
            .map(|node| node.position.distance(position))
            .enumerate()
            .fold(None, |nearest: Option<(usize, f64)>, (ix, dist)| match nearest {
                Some((_, min)) if min <= dist => nearest,
                _ => Some((ix, dist)),
            })
            .map(|(ix, _)| NodeIndex::new(ix))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Network {
        let mut network = Network::default();
        network.add_waypoints(vec![
            [0.0, 0.0, 0.0].into(), [3.0, 0.0, 0.0].into(),
            [3.0, 4.0, 0.0].into(), [0.0, 4.0, 0.0].into(),
        ]);
        network
    }

    #[test]
    fn it_lookups_edge_ends() {
        let mut network = square();
        network.add_edges(vec![(0, 1, 10.0), (1, 2, 20.0), (0, 2, 02.0)]);
        assert_eq!(network.endpoints(0.into()), &(0.into(), 1.into()));
        assert_eq!(network.endpoints(1.into()), &(1.into(), 2.into()));
        assert_eq!(network.endpoints(2.into()), &(0.into(), 2.into()));
        let outgoings: Vec<EdgeIndex> = network.outgoings(0.into()).collect();
        assert_eq!(outgoings, vec![EdgeIndex(0), EdgeIndex(2)]);
        assert_eq!(network.outgoings(3.into()).count(), 0);
    }

    #[test]
    fn it_costs_geometric_edges() {
        let mut network = square();
        network.add_geometric_edges(vec![(0, 2), (2, 3)]);
        assert_eq!(network.cost(0.into()), 5.0);
        assert_eq!(network.cost(1.into()), 3.0);
        let path = vec![EdgeIndex(0), EdgeIndex(1)];
        assert_eq!(network.cost_along(&path), 8.0);
        let nodes = network.node_sequence(&path);
        assert_eq!(nodes, vec![NodeIndex(0), NodeIndex(2), NodeIndex(3)]);
        assert_eq!(network.distance_along(&nodes), 8.0);
        assert!(network.node_sequence(&[]).is_empty());
    }

    #[test]
    fn it_keeps_pheromone_nonnegative() {
        let mut network = square();
        network.add_geometric_edges(vec![(0, 1), (1, 2)]);
        assert_eq!(network.pheromone(0.into()), DEFAULT_PHEROMONE);
        network.deposit(0.into(), -5.0);
        assert_eq!(network.pheromone(0.into()), 0.0);
        network.deposit(1.into(), 0.5);
        network.evaporate(0.5, 0.01);
        assert_eq!(network.pheromone(0.into()), 0.01);
        assert_eq!(network.pheromone(1.into()), 0.75);
        network.reset_pheromone(-1.0);
        assert_eq!(network.pheromone(1.into()), 0.0);
    }

    #[test]
    fn it_finds_nearest_waypoint() {
        let network = square();
        let nearest = network.nearest_waypoint(&Position::new(2.9, 3.5, 1.0));
        assert_eq!(nearest, Some(2.into()));
        assert_eq!(Network::new().nearest_waypoint(&Position::default()), None);
    }

    #[test]
    #[should_panic]
    fn it_rejects_negative_cost() {
        let mut network = square();
        network.add_edge(0, 1, -1.0);
    }
}
