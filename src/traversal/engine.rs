//! Instrumented BFS, DFS, Dijkstra and A*.
//!
//! Each procedure runs to completion in one call and records a [`Step`]
//! after every state change, in the algorithm's logical order. Callers check
//! that the start (and end) node exist; the procedures assume it.
//! Weights are assumed non-negative and the A* heuristic (straight-line
//! distance) is only admissible when every edge is at least as long as the
//! gap between its endpoints.

use std::collections::{BTreeMap, VecDeque};

use log::debug;

use super::algorithm::Algorithm;
use super::color::Color;
use super::graph::{Graph, NodeId};
use super::queue::PriorityQueue;
use super::recorder::{Step, StepRecorder};
use super::scene::Scene;

/// A start-to-end route and its total weight.
#[derive(Clone, Debug, PartialEq)]
pub struct Path {
	/// Start first, end last.
	pub nodes: Vec<NodeId>,
	/// Sum of edge weights along `nodes`.
	pub cost: f64,
}

/// What a run found, alongside the recorded steps.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Outcome {
	/// Nodes in the order they were visited (dequeued / entered).
	pub visit_order: Vec<NodeId>,
	/// Best known cost per node; empty for BFS and DFS.
	pub distances: BTreeMap<NodeId, f64>,
	/// Route to the end node, when one was asked for and exists.
	pub path: Option<Path>,
}

impl Outcome {
	/// Best known cost to `id`; infinite when unreached.
	pub fn distance(&self, id: NodeId) -> f64 {
		self.distances.get(&id).copied().unwrap_or(f64::INFINITY)
	}
}

/// Runs one algorithm against a graph, painting through the scene and
/// recording a step after every change.
pub struct Engine<'a> {
	graph: &'a mut Graph,
	scene: &'a mut dyn Scene,
	recorder: StepRecorder,
}

impl<'a> Engine<'a> {
	/// An engine with an empty recorder.
	pub fn new(graph: &'a mut Graph, scene: &'a mut dyn Scene) -> Self {
		Self {
			graph,
			scene,
			recorder: StepRecorder::new(),
		}
	}

	/// Runs `algorithm` from `start`. `end` is the goal for A* (required) and
	/// the node whose path is traced after Dijkstra (optional).
	pub fn run(mut self, algorithm: Algorithm, start: NodeId, end: Option<NodeId>) -> (Outcome, Vec<Step>) {
		let outcome = match (algorithm, end) {
			(Algorithm::Bfs, _) => self.bfs(start),
			(Algorithm::Dfs, _) => self.dfs(start),
			(Algorithm::Dijkstra, end) => self.dijkstra(start, end),
			(Algorithm::AStar, Some(goal)) => self.a_star(start, goal),
			(Algorithm::AStar, None) => {
				debug!("A* needs a goal node; nothing recorded");
				Outcome::default()
			}
		};
		debug!("{} recorded {} steps", algorithm, self.recorder.len());
		(outcome, self.recorder.finish())
	}

	fn record(&mut self, message: String, code_line: usize) {
		self.recorder.record(self.graph, message, code_line);
	}

	fn paint(&mut self, id: NodeId, color: Color) {
		self.graph.set_color(id, color);
		self.scene.highlight(id, color);
	}

	fn neighbors(&self, id: NodeId) -> Vec<(NodeId, f64)> {
		self.graph.incident(id).map(|(e, n)| (n, e.weight)).collect()
	}

	/// Breadth-first from `start`, painting discovered nodes green.
	pub fn bfs(&mut self, start: NodeId) -> Outcome {
		let mut outcome = Outcome::default();
		let mut queue = VecDeque::new();
		queue.push_back(start);
		self.graph.set_visited(start, true);
		self.paint(start, Color::GREEN);
		self.record(format!("Starting BFS from Node {}.", start.0), 1);

		while let Some(current) = queue.pop_front() {
			outcome.visit_order.push(current);
			self.record(format!("Visiting Node {}.", current.0), 4);

			for (neighbor, _) in self.neighbors(current) {
				if !self.graph.is_visited(neighbor) {
					self.graph.set_visited(neighbor, true);
					self.paint(neighbor, Color::GREEN);
					queue.push_back(neighbor);
					self.record(
						format!("Discovered Node {} from Node {}.", neighbor.0, current.0),
						7,
					);
				}
			}
		}
		outcome
	}

	/// Recursive, so very deep graphs can exhaust the stack.
	pub fn dfs(&mut self, start: NodeId) -> Outcome {
		let mut outcome = Outcome::default();
		self.dfs_visit(start, &mut outcome.visit_order);
		outcome
	}

	fn dfs_visit(&mut self, node: NodeId, order: &mut Vec<NodeId>) {
		self.graph.set_visited(node, true);
		self.paint(node, Color::BLUE);
		order.push(node);
		self.record(format!("Visited Node {}.", node.0), 1);

		for (neighbor, _) in self.neighbors(node) {
			if !self.graph.is_visited(neighbor) {
				self.record(
					format!("Exploring neighbor Node {} of Node {}.", neighbor.0, node.0),
					3,
				);
				self.dfs_visit(neighbor, order);
			}
		}
	}

	fn reset_for_search(&mut self) -> BTreeMap<NodeId, f64> {
		let mut scores = BTreeMap::new();
		let ids: Vec<NodeId> = self.graph.nodes().iter().map(|n| n.id).collect();
		for id in ids {
			scores.insert(id, f64::INFINITY);
			self.graph.set_visited(id, false);
		}
		scores
	}

	/// Shortest distances from `start`. With an `end`, the path to it is
	/// traced in red afterwards.
	pub fn dijkstra(&mut self, start: NodeId, end: Option<NodeId>) -> Outcome {
		let mut outcome = Outcome::default();
		let mut distances = self.reset_for_search();
		let mut previous: BTreeMap<NodeId, NodeId> = BTreeMap::new();
		let mut queue = PriorityQueue::new();
		distances.insert(start, 0.0);
		queue.enqueue(start, 0.0);
		self.record("Initialized distances and priority queue.".to_string(), 1);

		while let Some(current) = queue.dequeue() {
			if self.graph.is_visited(current) {
				continue;
			}
			self.graph.set_visited(current, true);
			self.paint(current, Color::GREEN);
			outcome.visit_order.push(current);
			self.record(format!("Visiting Node {}.", current.0), 7);

			let base = distances[&current];
			for (neighbor, weight) in self.neighbors(current) {
				let alt = base + weight;
				if alt < distances.get(&neighbor).copied().unwrap_or(f64::INFINITY) {
					distances.insert(neighbor, alt);
					previous.insert(neighbor, current);
					queue.enqueue(neighbor, alt);
					self.record(
						format!(
							"Updated distance of Node {} to {} via Node {}.",
							neighbor.0, alt, current.0
						),
						11,
					);
				}
			}
		}

		if let Some(end) = end {
			self.trace_path(&previous, end, 13);
			outcome.path = build_path(&previous, start, end, distances.get(&end).copied());
		}
		outcome.distances = distances;
		outcome
	}

	/// A* from `start` to `goal`, stopping as soon as the goal is visited.
	pub fn a_star(&mut self, start: NodeId, goal: NodeId) -> Outcome {
		let mut outcome = Outcome::default();
		let mut g_score = self.reset_for_search();
		let mut f_score = g_score.clone();
		let mut came_from: BTreeMap<NodeId, NodeId> = BTreeMap::new();
		let mut open = PriorityQueue::new();

		let start_f = self.heuristic(start, goal);
		g_score.insert(start, 0.0);
		f_score.insert(start, start_f);
		open.enqueue(start, start_f);
		self.record("Initialized scores and open set.".to_string(), 1);

		while let Some(current) = open.dequeue() {
			if self.graph.is_visited(current) {
				continue;
			}
			self.graph.set_visited(current, true);
			self.paint(current, Color::GREEN);
			outcome.visit_order.push(current);
			self.record(format!("Visiting Node {}.", current.0), 7);

			if current == goal {
				self.record("Goal reached.".to_string(), 9);
				self.trace_path(&came_from, goal, 10);
				outcome.path = build_path(&came_from, start, goal, g_score.get(&goal).copied());
				outcome.distances = g_score;
				return outcome;
			}

			let base = g_score[&current];
			for (neighbor, weight) in self.neighbors(current) {
				let tentative = base + weight;
				if tentative < g_score.get(&neighbor).copied().unwrap_or(f64::INFINITY) {
					let f = tentative + self.heuristic(neighbor, goal);
					came_from.insert(neighbor, current);
					g_score.insert(neighbor, tentative);
					f_score.insert(neighbor, f);
					open.enqueue(neighbor, f);
					self.record(format!("Updated scores for Node {}.", neighbor.0), 13);
				}
			}
		}

		self.record(format!("No path found to Node {}.", goal.0), 19);
		outcome.distances = g_score;
		outcome
	}

	fn heuristic(&self, a: NodeId, b: NodeId) -> f64 {
		match (self.graph.node(a), self.graph.node(b)) {
			(Some(a), Some(b)) => a.position.distance_to(&b.position),
			_ => 0.0,
		}
	}

	/// Walks predecessors back from `end`, painting each node that has one.
	fn trace_path(&mut self, previous: &BTreeMap<NodeId, NodeId>, end: NodeId, code_line: usize) {
		let mut node = end;
		while let Some(&prev) = previous.get(&node) {
			self.paint(node, Color::RED);
			self.record(format!("Tracing back path via Node {}.", node.0), code_line);
			node = prev;
		}
	}
}

fn build_path(
	previous: &BTreeMap<NodeId, NodeId>,
	start: NodeId,
	end: NodeId,
	cost: Option<f64>,
) -> Option<Path> {
	let cost = cost.filter(|c| c.is_finite())?;
	let mut nodes = vec![end];
	let mut node = end;
	while let Some(&prev) = previous.get(&node) {
		nodes.push(prev);
		node = prev;
	}
	nodes.reverse();
	(nodes.first() == Some(&start)).then_some(Path { nodes, cost })
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::traversal::graph::Vec3;
	use crate::traversal::scene::testing::Recording;

	fn messages(steps: &[Step]) -> Vec<&str> {
		steps.iter().map(Step::message).collect()
	}

	/// A-B (1), B-C (2), A-C (4), laid out so straight-line distance never
	/// exceeds the edge weight.
	fn triangle() -> (Graph, [NodeId; 3]) {
		let mut g = Graph::new();
		let a = g.add_node(Vec3::new(0.0, 0.0, 0.0));
		let b = g.add_node(Vec3::new(1.0, 0.0, 0.0));
		let c = g.add_node(Vec3::new(2.0, 0.0, 0.0));
		g.add_edge(a, b, 1.0).unwrap();
		g.add_edge(b, c, 2.0).unwrap();
		g.add_edge(a, c, 4.0).unwrap();
		(g, [a, b, c])
	}

	fn chain(len: u32) -> (Graph, Vec<NodeId>) {
		let mut g = Graph::new();
		let ids: Vec<_> = (0..len).map(|i| g.add_node(Vec3::new(f64::from(i), 0.0, 0.0))).collect();
		for w in ids.windows(2) {
			g.add_edge(w[0], w[1], 1.0).unwrap();
		}
		(g, ids)
	}

	#[test]
	fn bfs_marks_exactly_the_reachable_set() {
		let (mut g, [a, b, c]) = triangle();
		let island = g.add_node(Vec3::default());
		let mut scene = Recording::default();
		let (outcome, steps) = Engine::new(&mut g, &mut scene).run(Algorithm::Bfs, a, None);

		assert_eq!(outcome.visit_order, vec![a, b, c]);
		let last = steps.last().unwrap();
		for id in [a, b, c] {
			assert!(last.snapshot(id).unwrap().visited);
		}
		assert!(!last.snapshot(island).unwrap().visited);
		assert_eq!(
			messages(&steps),
			vec![
				"Starting BFS from Node 0.",
				"Visiting Node 0.",
				"Discovered Node 1 from Node 0.",
				"Discovered Node 2 from Node 0.",
				"Visiting Node 1.",
				"Visiting Node 2.",
			]
		);
		assert_eq!(steps[0].code_line(), Some(1));
		assert_eq!(steps[2].code_line(), Some(7));
		assert!(scene.highlights.iter().all(|&(_, c)| c == Color::GREEN));
	}

	#[test]
	fn dfs_walks_a_chain_in_order() {
		let (mut g, ids) = chain(4);
		let (outcome, steps) = Engine::new(&mut g, &mut Recording::default()).run(Algorithm::Dfs, ids[0], None);
		assert_eq!(outcome.visit_order, ids);
		assert_eq!(
			messages(&steps),
			vec![
				"Visited Node 0.",
				"Exploring neighbor Node 1 of Node 0.",
				"Visited Node 1.",
				"Exploring neighbor Node 2 of Node 1.",
				"Visited Node 2.",
				"Exploring neighbor Node 3 of Node 2.",
				"Visited Node 3.",
			]
		);
		assert_eq!(g.node(ids[3]).unwrap().color, Color::BLUE);
	}

	#[test]
	fn dfs_follows_edge_insertion_order() {
		let mut g = Graph::new();
		let hub = g.add_node(Vec3::default());
		let later = g.add_node(Vec3::default());
		let earlier = g.add_node(Vec3::default());
		g.add_edge(hub, earlier, 1.0).unwrap();
		g.add_edge(hub, later, 1.0).unwrap();
		let (outcome, _) = Engine::new(&mut g, &mut Recording::default()).run(Algorithm::Dfs, hub, None);
		assert_eq!(outcome.visit_order, vec![hub, earlier, later]);
	}

	#[test]
	fn dijkstra_prefers_the_cheaper_detour() {
		let (mut g, [a, b, c]) = triangle();
		let (outcome, steps) = Engine::new(&mut g, &mut Recording::default()).run(Algorithm::Dijkstra, a, Some(c));

		assert_eq!(outcome.distance(c), 3.0);
		assert_eq!(outcome.distance(b), 1.0);
		assert_eq!(outcome.path, Some(Path { nodes: vec![a, b, c], cost: 3.0 }));
		assert_eq!(
			messages(&steps),
			vec![
				"Initialized distances and priority queue.",
				"Visiting Node 0.",
				"Updated distance of Node 1 to 1 via Node 0.",
				"Updated distance of Node 2 to 4 via Node 0.",
				"Visiting Node 1.",
				"Updated distance of Node 2 to 3 via Node 1.",
				"Visiting Node 2.",
				"Tracing back path via Node 2.",
				"Tracing back path via Node 1.",
			]
		);
		// The stale (C, 4) entry is skipped without a step.
		assert_eq!(steps.iter().filter(|s| s.message() == "Visiting Node 2.").count(), 1);
		assert_eq!(g.node(c).unwrap().color, Color::RED);
		assert_eq!(g.node(b).unwrap().color, Color::RED);
		assert_eq!(g.node(a).unwrap().color, Color::GREEN);
	}

	#[test]
	fn dijkstra_without_end_skips_the_trace() {
		let (mut g, [a, _, c]) = triangle();
		let (outcome, steps) = Engine::new(&mut g, &mut Recording::default()).run(Algorithm::Dijkstra, a, None);
		assert_eq!(outcome.distance(c), 3.0);
		assert!(outcome.path.is_none());
		assert!(steps.iter().all(|s| s.code_line() != Some(13)));
	}

	#[test]
	fn dijkstra_to_itself_traces_nothing() {
		let (mut g, [a, ..]) = triangle();
		let (outcome, steps) = Engine::new(&mut g, &mut Recording::default()).run(Algorithm::Dijkstra, a, Some(a));
		assert_eq!(outcome.path, Some(Path { nodes: vec![a], cost: 0.0 }));
		assert!(steps.iter().all(|s| !s.message().starts_with("Tracing")));
	}

	#[test]
	fn a_star_matches_dijkstra_cost() {
		let (mut g, [a, b, c]) = triangle();
		let (outcome, steps) = Engine::new(&mut g, &mut Recording::default()).run(Algorithm::AStar, a, Some(c));
		let path = outcome.path.unwrap();
		assert_eq!(path.cost, 3.0);
		assert_eq!(path.nodes, vec![a, b, c]);
		assert_eq!(steps[0].message(), "Initialized scores and open set.");
		let tail: Vec<_> = messages(&steps).into_iter().rev().take(3).collect();
		assert_eq!(
			tail,
			vec!["Tracing back path via Node 1.", "Tracing back path via Node 2.", "Goal reached."]
		);
	}

	#[test]
	fn a_star_skips_outdated_open_entries() {
		// All nodes share a position, so the heuristic is zero throughout.
		let mut g = Graph::new();
		let [s, x, y, goal, side] = [(); 5].map(|_| g.add_node(Vec3::default()));
		g.add_edge(s, x, 10.0).unwrap();
		g.add_edge(s, y, 1.0).unwrap();
		g.add_edge(y, x, 2.0).unwrap();
		g.add_edge(x, goal, 50.0).unwrap();
		g.add_edge(s, side, 20.0).unwrap();

		let (outcome, steps) = Engine::new(&mut g, &mut Recording::default()).run(Algorithm::AStar, s, Some(goal));

		// X is queued at 10, then again at 3; the entry at 10 comes out before the goal.
		assert_eq!(outcome.visit_order, vec![s, y, x, side, goal]);
		assert_eq!(steps.iter().filter(|st| st.message() == "Visiting Node 1.").count(), 1);
		assert_eq!(
			steps.iter().filter(|st| st.message() == "Updated scores for Node 1.").count(),
			2
		);
		let path = outcome.path.unwrap();
		assert_eq!(path.nodes, vec![s, y, x, goal]);
		assert_eq!(path.cost, 53.0);
	}

	#[test]
	fn a_star_without_goal_records_nothing() {
		let (mut g, [a, ..]) = triangle();
		let (outcome, steps) = Engine::new(&mut g, &mut Recording::default()).run(Algorithm::AStar, a, None);
		assert_eq!(outcome, Outcome::default());
		assert!(steps.is_empty());
	}

	#[test]
	fn a_star_stops_at_the_goal() {
		let (mut g, ids) = chain(5);
		let (outcome, _) = Engine::new(&mut g, &mut Recording::default()).run(Algorithm::AStar, ids[0], Some(ids[2]));
		assert_eq!(outcome.visit_order, ids[..3].to_vec());
		assert!(!g.is_visited(ids[3]));
	}

	#[test]
	fn a_star_reports_an_unreachable_goal() {
		let (mut g, [a, ..]) = triangle();
		let island = g.add_node(Vec3::new(5.0, 0.0, 0.0));
		let (outcome, steps) = Engine::new(&mut g, &mut Recording::default()).run(Algorithm::AStar, a, Some(island));
		assert!(outcome.path.is_none());
		let last = steps.last().unwrap();
		assert_eq!(last.message(), "No path found to Node 3.");
		assert_eq!(last.code_line(), Some(19));
	}
}
