use std::cmp::Reverse;
use ordered_float::OrderedFloat;
use priority_queue::PriorityQueue;


pub type MyMinHeap<I> = PriorityQueue<I, Priority>;


/// Smaller value pops first; among equal values, the smaller order does.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Priority (Reverse<(OrderedFloat<f64>, u64)>);

impl Priority {
    pub fn new(value: f64, order: u64) -> Self {
        Self (Reverse((OrderedFloat(value), order)))
    }
    pub fn value(&self) -> f64 {
        ((self.0).0).0.into_inner()
    }
    pub fn order(&self) -> u64 {
        ((self.0).0).1
    }
}

impl From<f64> for Priority {
    fn from(float: f64) -> Self {
        Self::new(float, 0)
    }
}

impl From<Priority> for f64 {
    fn from(priority: Priority) -> Self {
        priority.value()
    }
}
