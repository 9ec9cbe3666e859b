//! Min-priority queue without decrease-key.
//!
//! Re-prioritising an item means pushing it again; the stale entry stays in
//! the heap and consumers skip it when it surfaces.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

struct Entry<T> {
	priority: f64,
	seq: u64,
	item: T,
}

impl<T> PartialEq for Entry<T> {
	fn eq(&self, other: &Self) -> bool {
		self.cmp(other) == Ordering::Equal
	}
}

impl<T> Eq for Entry<T> {}

impl<T> PartialOrd for Entry<T> {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl<T> Ord for Entry<T> {
	// Reversed so the max-heap pops the lowest priority, then the earliest push.
	fn cmp(&self, other: &Self) -> Ordering {
		other
			.priority
			.total_cmp(&self.priority)
			.then_with(|| other.seq.cmp(&self.seq))
	}
}

/// Lowest priority first, ties in insertion order.
pub struct PriorityQueue<T> {
	heap: BinaryHeap<Entry<T>>,
	seq: u64,
}

impl<T> Default for PriorityQueue<T> {
	fn default() -> Self {
		Self {
			heap: BinaryHeap::new(),
			seq: 0,
		}
	}
}

impl<T> PriorityQueue<T> {
	/// An empty queue.
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds `item`. The same item may be queued more than once.
	pub fn enqueue(&mut self, item: T, priority: f64) {
		self.heap.push(Entry {
			priority,
			seq: self.seq,
			item,
		});
		self.seq += 1;
	}

	/// Removes the entry with the lowest priority; equal priorities come out
	/// in insertion order. `None` when empty.
	pub fn dequeue(&mut self) -> Option<T> {
		self.heap.pop().map(|e| e.item)
	}

	/// Priority of the entry `dequeue` would return.
	pub fn peek_priority(&self) -> Option<f64> {
		self.heap.peek().map(|e| e.priority)
	}

	/// Whether nothing is queued, stale entries included.
	pub fn is_empty(&self) -> bool {
		self.heap.is_empty()
	}

	/// Entries held, stale ones included.
	pub fn len(&self) -> usize {
		self.heap.len()
	}
}
