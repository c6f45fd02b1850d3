use std::cmp::Ordering;
use std::collections::BinaryHeap;

use ordered_float::OrderedFloat;

use crate::QueueError;

#[derive(Debug, Clone, Copy)]
struct HeapElement<V> {
    priority: OrderedFloat<f64>,
    /// Insertion counter, the oldest element wins a tie.
    sequence: u64,
    vertex: V,
}

// The priority queue depends on the implementation of the Ord trait.
// By default std::BinaryHeap is a max heap.
// Explicitly implement the trait so the queue becomes a min heap.
impl<V> Ord for HeapElement<V> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .cmp(&self.priority)
            // breaking ties in a deterministic way
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl<V> PartialOrd for HeapElement<V> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Equality follows the ordering, the vertex is payload.
impl<V> PartialEq for HeapElement<V> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<V> Eq for HeapElement<V> {}

/// Minimum priority queue of vertices.
///
/// The same vertex can be inserted multiple times with different priorities, there is no
/// decrease-key operation: stale entries are expected to be skipped by the consumer.
#[derive(Debug, Clone)]
pub struct VertexPriorityQueue<V> {
    heap: BinaryHeap<HeapElement<V>>,
    sequence: u64,
}

impl<V> Default for VertexPriorityQueue<V> {
    fn default() -> Self {
        Self {
            heap: BinaryHeap::new(),
            sequence: 0,
        }
    }
}

impl<V> VertexPriorityQueue<V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, priority: f64, vertex: V) {
        self.heap.push(HeapElement {
            priority: OrderedFloat(priority),
            sequence: self.sequence,
            vertex,
        });
        self.sequence += 1;
    }

    /// Removes and returns the entry with the lowest priority.
    /// Entries with the same priority are returned in insertion order.
    pub fn remove_min(&mut self) -> Result<(f64, V), QueueError> {
        self.heap
            .pop()
            .map(|e| (e.priority.into_inner(), e.vertex))
            .ok_or(QueueError::EmptyQueue)
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    #[test]
    fn heap_element_001() {
        let element = |priority: f64, sequence, vertex| HeapElement {
            priority: OrderedFloat(priority),
            sequence,
            vertex,
        };

        assert_eq!(element(1.0, 3, "a"), element(1.0, 3, "b"));
        assert_eq!(element(1.0, 3, "a").cmp(&element(1.0, 3, "b")), Ordering::Equal);
        assert_ne!(element(1.0, 3, "a"), element(1.0, 4, "a"));
        assert_ne!(element(1.0, 3, "a"), element(2.0, 3, "a"));
        assert!(element(1.0, 3, "a") > element(2.0, 0, "a"));
        assert!(element(1.0, 3, "a") > element(1.0, 4, "a"));
    }

    #[test]
    fn vertex_priority_queue_001() {
        let mut queue: VertexPriorityQueue<&str> = VertexPriorityQueue::new();

        assert!(queue.is_empty());
        assert_eq!(queue.remove_min(), Err(QueueError::EmptyQueue));
    }

    #[test]
    fn vertex_priority_queue_002() {
        let mut queue = VertexPriorityQueue::new();
        queue.insert(3.0, "c");
        queue.insert(1.5, "a");
        queue.insert(2.0, "b");
        queue.insert(0.5, "a");

        assert_eq!(queue.len(), 4);
        assert_eq!(queue.remove_min(), Ok((0.5, "a")));
        assert_eq!(queue.remove_min(), Ok((1.5, "a")));
        assert_eq!(queue.remove_min(), Ok((2.0, "b")));
        assert_eq!(queue.remove_min(), Ok((3.0, "c")));
        assert!(queue.is_empty());
        assert_eq!(queue.remove_min(), Err(QueueError::EmptyQueue));
    }

    #[test]
    fn vertex_priority_queue_003() {
        let mut queue = VertexPriorityQueue::new();
        queue.insert(1.0, "x");
        queue.insert(1.0, "y");
        queue.insert(0.0, "w");
        queue.insert(1.0, "z");

        assert_eq!(queue.remove_min(), Ok((0.0, "w")));
        assert_eq!(queue.remove_min(), Ok((1.0, "x")));
        assert_eq!(queue.remove_min(), Ok((1.0, "y")));
        assert_eq!(queue.remove_min(), Ok((1.0, "z")));
    }

    #[test]
    fn vertex_priority_queue_004() {
        let mut queue = VertexPriorityQueue::new();
        queue.insert(5.0, 5);
        queue.insert(2.0, 2);

        assert_eq!(queue.remove_min(), Ok((2.0, 2)));

        queue.insert(1.0, 1);
        queue.insert(7.0, 7);
        queue.insert(-1.0, -1);

        assert_eq!(queue.remove_min(), Ok((-1.0, -1)));
        assert_eq!(queue.remove_min(), Ok((1.0, 1)));

        queue.insert(6.0, 6);

        assert_eq!(queue.remove_min(), Ok((5.0, 5)));
        assert_eq!(queue.remove_min(), Ok((6.0, 6)));
        assert_eq!(queue.remove_min(), Ok((7.0, 7)));
        assert!(queue.is_empty());
    }
}
