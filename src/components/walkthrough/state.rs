use std::collections::HashSet;

use crate::traversal::{EdgeId, Graph, NodeId, Vec3};

pub const NODE_RADIUS: f64 = 7.0;
pub const HIT_RADIUS: f64 = 12.0;
pub const EDGE_HIT: f64 = 5.0;
/// Pointer travel below this is a click rather than a pan.
pub const CLICK_SLOP: f64 = 4.0;

/// Camera elevation above the ground plane, looking down at the origin.
const ELEVATION: f64 = 0.4636;

#[derive(Clone, Debug, Default)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	pub k: f64,
}

#[derive(Clone, Debug, Default)]
pub struct PanState {
	pub active: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub transform_start_x: f64,
	pub transform_start_y: f64,
	pub moved: bool,
}

#[derive(Clone, Debug, Default)]
pub struct HoverState {
	pub node: Option<NodeId>,
	pub neighbors: HashSet<NodeId>,
	pub highlight_t: f64,
	pub prev_node: Option<NodeId>,
	pub prev_neighbors: HashSet<NodeId>,
}

/// What a pointer position resolved to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Hit {
	Node(NodeId),
	Edge(EdgeId),
	Ground(Vec3),
}

pub struct ViewState {
	pub transform: ViewTransform,
	pub pan: PanState,
	pub hover: HoverState,
	pub width: f64,
	pub height: f64,
	pub show_grid: bool,
	pub show_weights: bool,
}

impl ViewState {
	pub fn new(width: f64, height: f64) -> Self {
		Self {
			transform: ViewTransform {
				x: width / 2.0,
				y: height / 2.0,
				k: 1.5,
			},
			pan: PanState::default(),
			hover: HoverState::default(),
			width,
			height,
			show_grid: true,
			show_weights: false,
		}
	}

	/// Oblique projection of a world position onto the drawing plane.
	pub fn project(&self, p: &Vec3) -> (f64, f64) {
		(p.x, p.z * ELEVATION.sin() - p.y * ELEVATION.cos())
	}

	/// Point on the ground plane (y = 0) under a drawing-plane position.
	pub fn unproject_ground(&self, gx: f64, gy: f64) -> Vec3 {
		Vec3::new(gx, 0.0, gy / ELEVATION.sin())
	}

	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		(
			(sx - self.transform.x) / self.transform.k,
			(sy - self.transform.y) / self.transform.k,
		)
	}

	pub fn node_at_position(&self, graph: &Graph, sx: f64, sy: f64) -> Option<NodeId> {
		let (gx, gy) = self.screen_to_graph(sx, sy);
		// Last drawn wins, matching paint order.
		self.draw_order(graph)
			.into_iter()
			.rev()
			.find(|&id| {
				graph.node(id).is_some_and(|n| {
					let (x, y) = self.project(&n.position);
					(x - gx).hypot(y - gy) < HIT_RADIUS
				})
			})
	}

	pub fn edge_at_position(&self, graph: &Graph, sx: f64, sy: f64) -> Option<EdgeId> {
		let (gx, gy) = self.screen_to_graph(sx, sy);
		graph
			.edges()
			.iter()
			.filter_map(|e| {
				let a = self.project(&graph.node(e.a)?.position);
				let b = self.project(&graph.node(e.b)?.position);
				Some((e.id, segment_distance((gx, gy), a, b)))
			})
			.filter(|&(_, d)| d < EDGE_HIT)
			.min_by(|x, y| x.1.total_cmp(&y.1))
			.map(|(id, _)| id)
	}

	pub fn hit(&self, graph: &Graph, sx: f64, sy: f64) -> Hit {
		if let Some(id) = self.node_at_position(graph, sx, sy) {
			return Hit::Node(id);
		}
		if let Some(id) = self.edge_at_position(graph, sx, sy) {
			return Hit::Edge(id);
		}
		let (gx, gy) = self.screen_to_graph(sx, sy);
		Hit::Ground(self.unproject_ground(gx, gy))
	}

	/// Nodes far from the camera first.
	pub fn draw_order(&self, graph: &Graph) -> Vec<NodeId> {
		let mut nodes: Vec<_> = graph.nodes().iter().map(|n| (n.id, n.position.z)).collect();
		nodes.sort_by(|a, b| a.1.total_cmp(&b.1));
		nodes.into_iter().map(|(id, _)| id).collect()
	}

	pub fn set_hover(&mut self, graph: &Graph, node: Option<NodeId>) {
		if self.hover.node == node {
			return;
		}
		let was_hovering = self.hover.node.is_some();

		// Keep the old neighbourhood around while it fades out.
		if was_hovering && node.is_none() {
			self.hover.prev_node = self.hover.node.take();
			self.hover.prev_neighbors = std::mem::take(&mut self.hover.neighbors);
		} else {
			self.hover.prev_node = None;
			self.hover.prev_neighbors.clear();
		}

		self.hover.node = node;
		self.hover.neighbors = node
			.map(|id| graph.incident(id).map(|(_, n)| n).collect())
			.unwrap_or_default();
	}

	pub fn is_highlighted(&self, id: NodeId) -> bool {
		self.hover.node == Some(id)
			|| self.hover.neighbors.contains(&id)
			|| self.hover.prev_node == Some(id)
			|| self.hover.prev_neighbors.contains(&id)
	}

	pub fn has_active_highlight(&self) -> bool {
		self.hover.node.is_some() || self.hover.prev_node.is_some()
	}

	pub fn tick(&mut self, dt: f64) {
		let (target, speed) = if self.hover.node.is_some() {
			(1.0, 6.0)
		} else {
			(0.0, 4.0)
		};
		self.hover.highlight_t += (target - self.hover.highlight_t) * (speed * dt).min(1.0);
		if self.hover.node.is_none() && self.hover.highlight_t < 0.01 {
			self.hover.highlight_t = 0.0;
			self.hover.prev_node = None;
			self.hover.prev_neighbors.clear();
		}
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}

	pub fn zoom_at(&mut self, sx: f64, sy: f64, zoom_in: bool) {
		let factor = if zoom_in { 1.1 } else { 0.9 };
		let new_k = (self.transform.k * factor).clamp(0.1, 10.0);
		let ratio = new_k / self.transform.k;
		self.transform.x = sx - (sx - self.transform.x) * ratio;
		self.transform.y = sy - (sy - self.transform.y) * ratio;
		self.transform.k = new_k;
	}
}

fn segment_distance(p: (f64, f64), a: (f64, f64), b: (f64, f64)) -> f64 {
	let (dx, dy) = (b.0 - a.0, b.1 - a.1);
	let len2 = dx * dx + dy * dy;
	let t = if len2 == 0.0 {
		0.0
	} else {
		(((p.0 - a.0) * dx + (p.1 - a.1) * dy) / len2).clamp(0.0, 1.0)
	};
	(p.0 - (a.0 + t * dx)).hypot(p.1 - (a.1 + t * dy))
}
