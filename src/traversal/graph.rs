//! Undirected weighted graph edited by the user and walked by the engine.
//!
//! Node and edge ids come from per-graph counters and are never reused, so
//! both `nodes` and `edges` stay sorted by id and lookups are binary searches.

use log::{debug, warn};

use super::color::Color;
use super::error::GraphError;

/// Stable node identity, unique within one graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub u32);

/// Stable edge identity, unique within one graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeId(pub u32);

/// A point in scene space. `y` is height; the ground is `y = 0`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec3 {
	/// Horizontal.
	pub x: f64,
	/// Height.
	pub y: f64,
	/// Depth.
	pub z: f64,
}

impl Vec3 {
	/// A point from its coordinates.
	pub const fn new(x: f64, y: f64, z: f64) -> Self {
		Self { x, y, z }
	}

	/// Straight-line distance.
	pub fn distance_to(&self, other: &Vec3) -> f64 {
		let (dx, dy, dz) = (self.x - other.x, self.y - other.y, self.z - other.z);
		(dx * dx + dy * dy + dz * dz).sqrt()
	}
}

/// A graph vertex and its traversal marks.
#[derive(Clone, Debug)]
pub struct Node {
	/// Identity.
	pub id: NodeId,
	/// Where the node is drawn; also feeds the A* heuristic.
	pub position: Vec3,
	/// Set while an algorithm runs or a step is shown.
	pub visited: bool,
	/// Current display color.
	pub color: Color,
	edges: Vec<EdgeId>,
}

impl Node {
	/// Incident edges in the order they were added.
	pub fn edges(&self) -> &[EdgeId] {
		&self.edges
	}
}

/// An undirected weighted connection.
#[derive(Clone, Debug, PartialEq)]
pub struct Edge {
	/// Identity.
	pub id: EdgeId,
	/// One endpoint.
	pub a: NodeId,
	/// The other endpoint.
	pub b: NodeId,
	/// Finite and non-negative.
	pub weight: f64,
}

impl Edge {
	/// The endpoint that is not `from`.
	pub fn opposite(&self, from: NodeId) -> NodeId {
		if self.a == from { self.b } else { self.a }
	}

	/// Whether this edge joins `x` and `y`, in either orientation.
	pub fn connects(&self, x: NodeId, y: NodeId) -> bool {
		(self.a == x && self.b == y) || (self.a == y && self.b == x)
	}
}

/// Nodes and edges, kept sorted by id.
#[derive(Clone, Debug, Default)]
pub struct Graph {
	nodes: Vec<Node>,
	edges: Vec<Edge>,
	next_node: u32,
	next_edge: u32,
}

impl Graph {
	/// An empty graph.
	pub fn new() -> Self {
		Self::default()
	}

	/// All nodes in id order.
	pub fn nodes(&self) -> &[Node] {
		&self.nodes
	}

	/// All edges in id order.
	pub fn edges(&self) -> &[Edge] {
		&self.edges
	}

	/// Number of nodes.
	pub fn node_count(&self) -> usize {
		self.nodes.len()
	}

	/// Number of edges.
	pub fn edge_count(&self) -> usize {
		self.edges.len()
	}

	/// Whether `id` names a live node.
	pub fn contains(&self, id: NodeId) -> bool {
		self.node_index(id).is_some()
	}

	/// Looks up a node by id.
	pub fn node(&self, id: NodeId) -> Option<&Node> {
		self.node_index(id).map(|i| &self.nodes[i])
	}

	/// Looks up a node by id for editing.
	pub fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
		self.node_index(id).map(|i| &mut self.nodes[i])
	}

	/// Looks up an edge by id.
	pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
		self.edge_index(id).map(|i| &self.edges[i])
	}

	fn node_index(&self, id: NodeId) -> Option<usize> {
		self.nodes.binary_search_by_key(&id, |n| n.id).ok()
	}

	fn edge_index(&self, id: EdgeId) -> Option<usize> {
		self.edges.binary_search_by_key(&id, |e| e.id).ok()
	}

	/// Adds an unvisited white node at `position`.
	pub fn add_node(&mut self, position: Vec3) -> NodeId {
		let id = NodeId(self.next_node);
		self.next_node += 1;
		self.nodes.push(Node {
			id,
			position,
			visited: false,
			color: Color::WHITE,
			edges: Vec::new(),
		});
		debug!("Added Node {}", id.0);
		id
	}

	/// Connects `a` and `b`. An existing edge between the two (in either
	/// orientation) leaves the graph unchanged and yields `Ok(None)`.
	pub fn add_edge(&mut self, a: NodeId, b: NodeId, weight: f64) -> Result<Option<EdgeId>, GraphError> {
		for id in [a, b] {
			if !self.contains(id) {
				return Err(GraphError::NodeNotFound { id });
			}
		}
		if a == b {
			return Err(GraphError::SelfLoop { id: a });
		}
		if !weight.is_finite() || weight < 0.0 {
			return Err(GraphError::InvalidWeight { weight });
		}
		if self.edges.iter().any(|e| e.connects(a, b)) {
			debug!("Edge between Node {} and Node {} already exists", a.0, b.0);
			return Ok(None);
		}

		let id = EdgeId(self.next_edge);
		self.next_edge += 1;
		self.edges.push(Edge { id, a, b, weight });
		for end in [a, b] {
			if let Some(node) = self.node_mut(end) {
				node.edges.push(id);
			}
		}
		debug!("Added Edge {} ({} - {}, weight {})", id.0, a.0, b.0, weight);
		Ok(Some(id))
	}

	/// Removes the node and every edge incident to it, returning the removed
	/// edge ids.
	pub fn remove_node(&mut self, id: NodeId) -> Result<Vec<EdgeId>, GraphError> {
		let removed = self.remove_edges_of(id)?;
		if let Some(i) = self.node_index(id) {
			self.nodes.remove(i);
		}
		debug!("Removed Node {}", id.0);
		Ok(removed)
	}

	/// Removes one edge and returns it.
	pub fn remove_edge(&mut self, id: EdgeId) -> Result<Edge, GraphError> {
		let Some(i) = self.edge_index(id) else {
			warn!("Edge {} is not part of the graph", id.0);
			return Err(GraphError::EdgeNotFound { id });
		};
		let edge = self.edges.remove(i);
		for end in [edge.a, edge.b] {
			if let Some(node) = self.node_mut(end) {
				node.edges.retain(|&e| e != id);
			}
		}
		Ok(edge)
	}

	/// Removes every edge of `id`, keeping the node.
	pub fn remove_edges_of(&mut self, id: NodeId) -> Result<Vec<EdgeId>, GraphError> {
		let incident = self
			.node(id)
			.ok_or(GraphError::NodeNotFound { id })?
			.edges
			.clone();
		for &edge in &incident {
			self.remove_edge(edge)?;
		}
		Ok(incident)
	}

	/// `(edge, neighbor)` for every edge of `id` in insertion order. An
	/// unknown id yields nothing.
	pub fn incident(&self, id: NodeId) -> impl Iterator<Item = (&Edge, NodeId)> + '_ {
		self.node(id)
			.map(|n| n.edges.as_slice())
			.unwrap_or(&[])
			.iter()
			.filter_map(move |&e| self.edge(e).map(|edge| (edge, edge.opposite(id))))
	}

	/// Marks a node; unknown ids are ignored.
	pub fn set_visited(&mut self, id: NodeId, visited: bool) {
		if let Some(node) = self.node_mut(id) {
			node.visited = visited;
		}
	}

	/// `false` for unknown ids.
	pub fn is_visited(&self, id: NodeId) -> bool {
		self.node(id).is_some_and(|n| n.visited)
	}

	/// Recolors a node; unknown ids are ignored.
	pub fn set_color(&mut self, id: NodeId, color: Color) {
		if let Some(node) = self.node_mut(id) {
			node.color = color;
		}
	}

	/// Clears every traversal mark and restores the default color.
	pub fn reset_traversal(&mut self) {
		for node in &mut self.nodes {
			node.visited = false;
			node.color = Color::WHITE;
		}
	}

	/// Drops everything and restarts id assignment at 0.
	pub fn clear(&mut self) {
		*self = Self::default();
	}
}

/// Reads a user-entered weight; anything unparsable or zero falls back to 1.
pub fn parse_weight(text: &str) -> f64 {
	match text.trim().parse::<f64>() {
		Ok(w) if w != 0.0 && !w.is_nan() => w,
		_ => 1.0,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn triangle() -> (Graph, [NodeId; 3]) {
		let mut g = Graph::new();
		let a = g.add_node(Vec3::default());
		let b = g.add_node(Vec3::new(1.0, 0.0, 0.0));
		let c = g.add_node(Vec3::new(0.0, 1.0, 0.0));
		g.add_edge(a, b, 1.0).unwrap();
		g.add_edge(b, c, 2.0).unwrap();
		g.add_edge(a, c, 4.0).unwrap();
		(g, [a, b, c])
	}

	#[test]
	fn ids_are_not_reused_after_removal() {
		let mut g = Graph::new();
		let a = g.add_node(Vec3::default());
		let b = g.add_node(Vec3::default());
		g.remove_node(b).unwrap();
		let c = g.add_node(Vec3::default());
		assert_ne!(b, c);
		assert!(g.contains(a) && g.contains(c) && !g.contains(b));
	}

	#[test]
	fn duplicate_edges_are_ignored_in_either_orientation() {
		let (mut g, [a, b, _]) = triangle();
		assert_eq!(g.add_edge(b, a, 7.0), Ok(None));
		assert_eq!(g.edge_count(), 3);
	}

	#[test]
	fn rejects_bad_edges() {
		let (mut g, [a, b, _]) = triangle();
		assert_eq!(g.add_edge(a, a, 1.0), Err(GraphError::SelfLoop { id: a }));
		assert!(matches!(g.add_edge(a, b, -1.0), Err(GraphError::InvalidWeight { .. })));
		let ghost = NodeId(99);
		assert_eq!(g.add_edge(a, ghost, 1.0), Err(GraphError::NodeNotFound { id: ghost }));
	}

	#[test]
	fn incident_follows_insertion_order() {
		let (g, [a, b, c]) = triangle();
		let around_a: Vec<_> = g.incident(a).map(|(e, n)| (n, e.weight)).collect();
		assert_eq!(around_a, vec![(b, 1.0), (c, 4.0)]);
		let around_c: Vec<_> = g.incident(c).map(|(_, n)| n).collect();
		assert_eq!(around_c, vec![b, a]);
	}

	#[test]
	fn removing_a_node_drops_its_edges() {
		let (mut g, [a, b, c]) = triangle();
		let removed = g.remove_node(b).unwrap();
		assert_eq!(removed.len(), 2);
		assert_eq!(g.edge_count(), 1);
		assert_eq!(g.incident(a).map(|(_, n)| n).collect::<Vec<_>>(), vec![c]);
	}

	#[test]
	fn reset_traversal_restores_defaults() {
		let (mut g, [a, ..]) = triangle();
		g.set_visited(a, true);
		g.set_color(a, Color::RED);
		g.reset_traversal();
		assert!(!g.is_visited(a));
		assert_eq!(g.node(a).unwrap().color, Color::WHITE);
	}

	#[test]
	fn weight_prompt_parsing() {
		assert_eq!(parse_weight("2.5"), 2.5);
		assert_eq!(parse_weight(" 3 "), 3.0);
		assert_eq!(parse_weight(""), 1.0);
		assert_eq!(parse_weight("abc"), 1.0);
		assert_eq!(parse_weight("0"), 1.0);
	}
}
