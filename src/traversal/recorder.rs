use super::color::Color;
use super::graph::{Graph, NodeId};

/// State of one node at the moment a step was recorded.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NodeSnapshot {
	/// Which node.
	pub id: NodeId,
	/// Visited flag at capture time.
	pub visited: bool,
	/// Color at capture time.
	pub color: Color,
}

/// One recorded moment of an algorithm run. Holds copies, never references
/// into the live graph.
#[derive(Clone, Debug, PartialEq)]
pub struct Step {
	nodes: Vec<NodeSnapshot>,
	message: String,
	code_line: Option<usize>,
}

impl Step {
	/// Copies the state of every node in `graph`.
	pub fn capture(graph: &Graph, message: impl Into<String>, code_line: Option<usize>) -> Self {
		Self {
			nodes: graph
				.nodes()
				.iter()
				.map(|n| NodeSnapshot {
					id: n.id,
					visited: n.visited,
					color: n.color,
				})
				.collect(),
			message: message.into(),
			code_line,
		}
	}

	/// Snapshots in id order.
	pub fn nodes(&self) -> &[NodeSnapshot] {
		&self.nodes
	}

	/// Status text describing the step.
	pub fn message(&self) -> &str {
		&self.message
	}

	/// Pseudo-code line this step belongs to, `None` for no line.
	pub fn code_line(&self) -> Option<usize> {
		self.code_line
	}

	/// The captured state of `id`, if it existed at capture time.
	pub fn snapshot(&self, id: NodeId) -> Option<&NodeSnapshot> {
		// Captured in graph order, which is id order.
		self.nodes
			.binary_search_by_key(&id, |s| s.id)
			.ok()
			.map(|i| &self.nodes[i])
	}
}

/// Append-only log of steps for one run.
#[derive(Debug, Default)]
pub struct StepRecorder {
	steps: Vec<Step>,
}

impl StepRecorder {
	/// An empty log.
	pub fn new() -> Self {
		Self::default()
	}

	/// Captures the graph as it is now.
	pub fn record(&mut self, graph: &Graph, message: impl Into<String>, code_line: usize) {
		self.steps.push(Step::capture(graph, message, Some(code_line)));
	}

	/// Steps recorded so far.
	pub fn steps(&self) -> &[Step] {
		&self.steps
	}

	/// Number of steps recorded so far.
	pub fn len(&self) -> usize {
		self.steps.len()
	}

	/// Whether nothing has been recorded.
	pub fn is_empty(&self) -> bool {
		self.steps.is_empty()
	}

	/// The recorded steps, oldest first.
	pub fn finish(self) -> Vec<Step> {
		self.steps
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::traversal::graph::Vec3;

	#[test]
	fn steps_are_independent_of_later_edits() {
		let mut g = Graph::new();
		let a = g.add_node(Vec3::default());
		let mut rec = StepRecorder::new();
		rec.record(&g, "before", 0);

		g.set_visited(a, true);
		g.set_color(a, Color::GREEN);
		let b = g.add_node(Vec3::default());
		rec.record(&g, "after", 2);

		let steps = rec.finish();
		assert_eq!(steps.len(), 2);
		let first = &steps[0];
		assert_eq!(first.message(), "before");
		assert_eq!(first.code_line(), Some(0));
		assert_eq!(first.nodes().len(), 1);
		assert!(!first.snapshot(a).unwrap().visited);
		assert_eq!(first.snapshot(a).unwrap().color, Color::WHITE);
		assert!(first.snapshot(b).is_none());

		assert_eq!(steps[1].nodes().len(), 2);
		assert!(steps[1].snapshot(a).unwrap().visited);
	}
}
