use itertools::Itertools;
use rand::Rng;
use crate::network::{Network, NodeIndex};


/// The trail of one ant that reached its goal.
#[derive(Clone, Debug)]
pub struct Ant {
    pub trail: Vec<NodeIndex>,
    pub distance: f64,
}

impl Ant {
    pub fn new(trail: Vec<NodeIndex>, network: &Network) -> Self {
        let distance = trail.iter()
            .tuple_windows()
            .map(|(&a, &b)| network.distance(a, b))
            .sum();
        Ant { trail, distance }
    }
    pub fn is_shorter_than(&self, other: &Option<Ant>) -> bool {
        match other {
            Some(best) => self.distance < best.distance,
            None => true,
        }
    }
}


/// Roulette-wheel selection over positive weights, in enumeration order.
///
/// Infinite weights win outright, uniformly among themselves. Finite weights
/// are scaled by their maximum first so the running sum cannot overflow.
/// Returns `None` when there is nothing to choose from.
pub fn select_weighted<R: Rng + ?Sized>(weights: &[f64], rng: &mut R) -> Option<usize> {
    let max = weights.iter()
        .cloned()
        .filter(|&weight| weight > 0.0)
        .fold(0.0, f64::max);
    if max <= 0.0 {
        return None;
    }
    if max.is_infinite() {
        let infinite: Vec<usize> = weights.iter()
            .positions(|&weight| weight == f64::INFINITY)
            .collect();
        return Some(infinite[rng.gen_range(0..infinite.len())]);
    }
    let scaled = |weight: f64| if weight > 0.0 { weight / max } else { 0.0 };
    let sum: f64 = weights.iter().map(|&weight| scaled(weight)).sum();
    let rand_f = rng.gen_range(0.0..sum);
    let mut accumulation = 0.0;
    for (i, &weight) in weights.iter().enumerate() {
        accumulation += scaled(weight);
        if weight > 0.0 && accumulation >= rand_f {
            return Some(i);
        }
    }
    weights.iter().rposition(|&weight| weight > 0.0)
}


#[cfg(test)]
mod tests {
    use super::{select_weighted, Ant};
    use crate::network::Network;
    use rand::SeedableRng;
    use rand_chacha::ChaChaRng;

    #[test]
    fn it_measures_trail_distance() {
        let mut network = Network::default();
        network.add_waypoints(vec![
            [0.0, 0.0, 0.0].into(), [0.0, 3.0, 0.0].into(), [4.0, 3.0, 0.0].into(),
        ]);
        let ant = Ant::new(vec![0.into(), 1.into(), 2.into()], &network);
        assert_eq!(ant.distance, 7.0);
        let lonely = Ant::new(vec![0.into()], &network);
        assert_eq!(lonely.distance, 0.0);
        assert!(lonely.is_shorter_than(&Some(ant.clone())));
        assert!(!ant.is_shorter_than(&Some(lonely)));
        assert!(ant.is_shorter_than(&None));
    }

    #[test]
    fn it_selects_nothing_without_weight() {
        let mut rng = ChaChaRng::seed_from_u64(0);
        assert_eq!(select_weighted(&[], &mut rng), None);
        assert_eq!(select_weighted(&[0.0, 0.0], &mut rng), None);
        assert_eq!(select_weighted(&[f64::NAN, -1.0], &mut rng), None);
        assert_eq!(select_weighted(&[0.0, 2.0], &mut rng), Some(1));
    }

    #[test]
    fn it_selects_among_overflowing_weights() {
        let mut rng = ChaChaRng::seed_from_u64(7);
        assert_eq!(select_weighted(&[f64::INFINITY], &mut rng), Some(0));
        for _ in 0..100 {
            let i = select_weighted(&[1.0, f64::INFINITY, 0.0, f64::INFINITY], &mut rng);
            assert!(i == Some(1) || i == Some(3), "{:?}", i);
        }
        // each weight is finite, their sum is not
        let mut counts = [0usize; 2];
        for _ in 0..2000 {
            counts[select_weighted(&[f64::MAX, f64::MAX], &mut rng).unwrap()] += 1;
        }
        assert!(counts[0] > 800 && counts[1] > 800, "{:?}", counts);
    }

    #[test]
    fn it_selects_proportionally() {
        let mut rng = ChaChaRng::seed_from_u64(420);
        let mut counts = [0usize; 3];
        for _ in 0..4000 {
            let i = select_weighted(&[1.0, 2.0, 1.0], &mut rng).unwrap();
            counts[i] += 1;
        }
        assert!(counts[1] > 1700 && counts[1] < 2300, "{:?}", counts);
        assert!(counts[0] > 800 && counts[0] < 1200, "{:?}", counts);
        assert!(counts[2] > 800 && counts[2] < 1200, "{:?}", counts);
    }
}
