//! Cursor over a recorded run that writes snapshots back onto the live graph.

use log::debug;

use super::graph::Graph;
use super::recorder::Step;
use super::scene::Scene;

/// Plays a recorded run forwards and backwards.
#[derive(Debug, Default)]
pub struct StepPlayer {
	steps: Vec<Step>,
	/// `None` until a step has been applied.
	current: Option<usize>,
}

impl StepPlayer {
	/// An empty player.
	pub fn new() -> Self {
		Self::default()
	}

	/// Replaces the recorded run and rewinds before the first step.
	pub fn load(&mut self, steps: Vec<Step>) {
		self.steps = steps;
		self.current = None;
	}

	/// Forgets the recorded run.
	pub fn clear(&mut self) {
		self.load(Vec::new());
	}

	/// The loaded run.
	pub fn steps(&self) -> &[Step] {
		&self.steps
	}

	/// Number of recorded steps.
	pub fn len(&self) -> usize {
		self.steps.len()
	}

	/// Whether a run is loaded.
	pub fn is_empty(&self) -> bool {
		self.steps.is_empty()
	}

	/// Index of the last applied step.
	pub fn current_index(&self) -> Option<usize> {
		self.current
	}

	/// The last applied step.
	pub fn current(&self) -> Option<&Step> {
		self.current.and_then(|i| self.steps.get(i))
	}

	/// Writes step `index` onto the graph. Live nodes missing from the
	/// snapshot and snapshot nodes missing from the graph are left alone.
	/// Out of range is a no-op; the cursor is not moved either way.
	pub fn apply_step(&self, index: usize, graph: &mut Graph, scene: &mut dyn Scene) -> Option<&Step> {
		let step = self.steps.get(index)?;
		let ids: Vec<_> = graph.nodes().iter().map(|n| n.id).collect();
		for id in ids {
			let Some(snapshot) = step.snapshot(id) else {
				continue;
			};
			graph.set_visited(id, snapshot.visited);
			graph.set_color(id, snapshot.color);
			scene.highlight(id, snapshot.color);
		}
		debug!("Applied step {} of {}: {}", index + 1, self.steps.len(), step.message());
		Some(step)
	}

	fn seek(&mut self, index: usize, graph: &mut Graph, scene: &mut dyn Scene) -> Option<&Step> {
		if index >= self.steps.len() {
			return None;
		}
		self.current = Some(index);
		self.apply_step(index, graph, scene)
	}

	/// Applies the following step. `None` when already at the end.
	pub fn next(&mut self, graph: &mut Graph, scene: &mut dyn Scene) -> Option<&Step> {
		let index = self.current.map_or(0, |i| i + 1);
		self.seek(index, graph, scene)
	}

	/// Stops at the first step; never rewinds to "before the first step".
	pub fn previous(&mut self, graph: &mut Graph, scene: &mut dyn Scene) -> Option<&Step> {
		let index = self.current?.checked_sub(1)?;
		self.seek(index, graph, scene)
	}

	/// Applies the final step. `None` when there is nothing to play or
	/// the final step is already showing.
	pub fn finish(&mut self, graph: &mut Graph, scene: &mut dyn Scene) -> Option<&Step> {
		let last = self.steps.len().checked_sub(1)?;
		if self.current == Some(last) {
			return None;
		}
		self.seek(last, graph, scene)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::traversal::algorithm::Algorithm;
	use crate::traversal::color::Color;
	use crate::traversal::engine::Engine;
	use crate::traversal::graph::{NodeId, Vec3};
	use crate::traversal::scene::Headless;
	use proptest::prelude::*;

	fn recorded(len: u32) -> (Graph, StepPlayer) {
		let mut g = Graph::new();
		let ids: Vec<_> = (0..len).map(|i| g.add_node(Vec3::new(f64::from(i), 0.0, 0.0))).collect();
		for w in ids.windows(2) {
			g.add_edge(w[0], w[1], 1.0).unwrap();
		}
		let (_, steps) = Engine::new(&mut g, &mut Headless).run(Algorithm::Bfs, ids[0], None);
		g.reset_traversal();
		let mut player = StepPlayer::new();
		player.load(steps);
		(g, player)
	}

	fn state(g: &Graph) -> Vec<(NodeId, bool, Color)> {
		g.nodes().iter().map(|n| (n.id, n.visited, n.color)).collect()
	}

	#[test]
	fn navigation_is_clamped() {
		let (mut g, mut p) = recorded(3);
		assert_eq!(p.current_index(), None);
		assert!(p.previous(&mut g, &mut Headless).is_none());
		assert_eq!(p.next(&mut g, &mut Headless).unwrap().message(), "Starting BFS from Node 0.");
		assert!(p.previous(&mut g, &mut Headless).is_none());
		assert_eq!(p.current_index(), Some(0));

		while p.next(&mut g, &mut Headless).is_some() {}
		assert_eq!(p.current_index(), Some(p.len() - 1));
		assert!(g.nodes().iter().all(|n| n.visited));
	}

	#[test]
	fn apply_out_of_range_is_a_no_op() {
		let (mut g, p) = recorded(2);
		let before = state(&g);
		assert!(p.apply_step(p.len(), &mut g, &mut Headless).is_none());
		assert_eq!(state(&g), before);
	}

	#[test]
	fn finish_jumps_to_the_last_step() {
		let (mut g, mut p) = recorded(4);
		p.next(&mut g, &mut Headless);
		let last = p.finish(&mut g, &mut Headless).unwrap().message().to_string();
		assert_eq!(last, "Visiting Node 3.");
		assert_eq!(p.current_index(), Some(p.len() - 1));
		assert!(p.finish(&mut g, &mut Headless).is_none());
	}

	#[test]
	fn snapshot_and_graph_mismatches_are_skipped() {
		let (mut g, p) = recorded(3);
		g.remove_node(NodeId(1)).unwrap();
		let late = g.add_node(Vec3::default());
		g.set_color(late, Color::RED);
		p.apply_step(p.len() - 1, &mut g, &mut Headless).unwrap();
		assert!(g.is_visited(NodeId(0)));
		assert!(g.is_visited(NodeId(2)));
		assert!(!g.is_visited(late));
		assert_eq!(g.node(late).unwrap().color, Color::RED);
	}

	#[test]
	fn empty_player_does_nothing() {
		let mut g = Graph::new();
		let mut p = StepPlayer::new();
		assert!(p.next(&mut g, &mut Headless).is_none());
		assert!(p.finish(&mut g, &mut Headless).is_none());
		assert_eq!(p.current_index(), None);
	}

	proptest! {
		#[test]
		fn previous_then_next_restores_state(len in 2u32..12, pick in 0usize..64) {
			let (mut g, mut p) = recorded(len);
			let target = 1 + pick % (p.len() - 1);
			for _ in 0..=target {
				p.next(&mut g, &mut Headless);
			}
			let before = state(&g);
			p.previous(&mut g, &mut Headless);
			p.next(&mut g, &mut Headless);
			prop_assert_eq!(state(&g), before);
			prop_assert_eq!(p.current_index(), Some(target));
		}

		#[test]
		fn applying_twice_is_deterministic(len in 1u32..12, pick in 0usize..64) {
			let (mut g, p) = recorded(len);
			let index = pick % p.len();
			p.apply_step(index, &mut g, &mut Headless);
			let once = state(&g);
			p.apply_step(index, &mut g, &mut Headless);
			prop_assert_eq!(state(&g), once);
		}
	}
}
