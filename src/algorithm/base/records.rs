use hashbrown::HashMap;
use super::heap::{MyMinHeap, Priority};
use crate::network::{EdgeIndex, NodeIndex};


/// Best-known route to a node during one A* call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SearchRecord {
    pub node: NodeIndex,
    pub incoming: Option<EdgeIndex>,
    pub cost_so_far: f64,
    pub estimated_total: f64,
}

impl SearchRecord {
    pub fn new(node: NodeIndex, incoming: Option<EdgeIndex>, cost_so_far: f64, estimated_total: f64) -> Self {
        SearchRecord { node, incoming, cost_so_far, estimated_total }
    }
    pub fn remainder(&self) -> f64 {
        self.estimated_total - self.cost_so_far
    }
}


/// Records keyed by node, extracted by smallest estimated total.
///
/// Ties go to the record inserted first. Updating a record keeps its place in
/// that order; removing and inserting it again moves it to the back.
#[derive(Default)]
pub struct RecordList {
    records: HashMap<NodeIndex, SearchRecord>,
    heap: MyMinHeap<NodeIndex>,
    inserted: u64,
}

impl RecordList {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn len(&self) -> usize {
        self.records.len()
    }
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
    pub fn contains(&self, node: NodeIndex) -> bool {
        self.records.contains_key(&node)
    }
    pub fn find(&self, node: NodeIndex) -> Option<&SearchRecord> {
        self.records.get(&node)
    }
    pub fn smallest(&self) -> Option<&SearchRecord> {
        self.heap.peek()
            .and_then(|(node, _)| self.records.get(node))
    }
    /// Inserts a record, or updates it in place if its node is present.
    pub fn insert(&mut self, record: SearchRecord) {
        let node = record.node;
        match self.heap.get_priority(&node).map(Priority::order) {
            Some(order) => {
                self.heap.change_priority(&node, Priority::new(record.estimated_total, order));
            }
            None => {
                self.inserted += 1;
                self.heap.push(node, Priority::new(record.estimated_total, self.inserted));
            }
        }
        self.records.insert(node, record);
    }
    pub fn remove(&mut self, node: NodeIndex) -> Option<SearchRecord> {
        self.heap.remove(&node);
        self.records.remove(&node)
    }
    pub fn pop_smallest(&mut self) -> Option<SearchRecord> {
        let (node, _) = self.heap.pop()?;
        self.records.remove(&node)
    }
}


#[cfg(test)]
mod tests {
    use super::{RecordList, SearchRecord};

    fn record(node: usize, cost: f64, total: f64) -> SearchRecord {
        SearchRecord::new(node.into(), None, cost, total)
    }

    #[test]
    fn it_extracts_smallest_estimate() {
        let mut list = RecordList::new();
        list.insert(record(0, 0.0, 5.0));
        list.insert(record(1, 1.0, 3.0));
        list.insert(record(2, 2.0, 4.0));
        assert_eq!(list.len(), 3);
        assert_eq!(list.smallest().map(|r| r.node), Some(1.into()));
        assert_eq!(list.pop_smallest().map(|r| r.node), Some(1.into()));
        assert_eq!(list.pop_smallest().map(|r| r.node), Some(2.into()));
        assert_eq!(list.pop_smallest().map(|r| r.node), Some(0.into()));
        assert!(list.pop_smallest().is_none());
        assert!(list.is_empty());
    }

    #[test]
    fn it_prefers_first_inserted_on_tie() {
        let mut list = RecordList::new();
        list.insert(record(7, 0.0, 2.0));
        list.insert(record(3, 0.0, 2.0));
        list.insert(record(5, 0.0, 2.0));
        // updating keeps the place in insertion order
        list.insert(record(7, 0.0, 2.0));
        assert_eq!(list.pop_smallest().map(|r| r.node), Some(7.into()));
        // reinsertion after removal goes to the back
        list.remove(3.into());
        list.insert(record(3, 0.0, 2.0));
        assert_eq!(list.pop_smallest().map(|r| r.node), Some(5.into()));
        assert_eq!(list.pop_smallest().map(|r| r.node), Some(3.into()));
    }

    #[test]
    fn it_updates_in_place() {
        let mut list = RecordList::new();
        list.insert(record(0, 4.0, 9.0));
        list.insert(record(1, 1.0, 6.0));
        list.insert(SearchRecord::new(0.into(), Some(2.into()), 2.0, 5.0));
        assert!(list.contains(0.into()));
        assert_eq!(list.len(), 2);
        let found = list.find(0.into()).unwrap();
        assert_eq!(found.incoming, Some(2.into()));
        assert_eq!(found.remainder(), 3.0);
        assert_eq!(list.smallest().map(|r| r.node), Some(0.into()));
        assert_eq!(list.remove(0.into()).map(|r| r.cost_so_far), Some(2.0));
        assert!(!list.contains(0.into()));
        assert!(list.remove(0.into()).is_none());
    }
}
