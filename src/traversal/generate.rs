//! Sample graphs: a random one and a weighted grid.

use log::warn;

use super::graph::{Graph, NodeId, Vec3};

/// Tunables for the sample graph generators.
#[derive(Clone, Debug, PartialEq)]
pub struct GeneratorConfig {
	/// Node count of the random graph.
	pub random_nodes: usize,
	/// Chance that any given pair of random nodes is connected.
	pub edge_probability: f64,
	/// Random node coordinates fall in `[-extent, extent)` on every axis.
	pub extent: f64,
	/// Generated weights are whole numbers in `1..=max_weight`.
	pub max_weight: u32,
	/// Cells per side; the grid has `(grid_size + 1)^2` nodes.
	pub grid_size: usize,
	/// Distance between neighbouring grid nodes.
	pub grid_spacing: f64,
}

impl Default for GeneratorConfig {
	fn default() -> Self {
		Self {
			random_nodes: 10,
			edge_probability: 0.3,
			extent: 100.0,
			max_weight: 10,
			grid_size: 4,
			grid_spacing: 30.0,
		}
	}
}

/// Deterministic pseudo-random numbers so generated graphs are reproducible.
#[derive(Clone, Debug)]
pub struct SimpleRng {
	state: u64,
}

impl SimpleRng {
	/// Seeds the generator; equal seeds give equal sequences.
	pub fn new(seed: u64) -> Self {
		Self { state: seed % 233280 }
	}

	/// Uniform in `[0, 1)`.
	pub fn next_f64(&mut self) -> f64 {
		self.state = (self.state * 9301 + 49297) % 233280;
		self.state as f64 / 233280.0
	}

	/// Uniform integer weight in `1..=max`.
	fn weight(&mut self, max: u32) -> f64 {
		(self.next_f64() * f64::from(max)).floor() + 1.0
	}
}

/// Adds a generated edge, logging a rejected one instead of aborting the
/// whole graph.
fn connect(graph: &mut Graph, a: NodeId, b: NodeId, weight: f64) -> bool {
	match graph.add_edge(a, b, weight) {
		Ok(added) => added.is_some(),
		Err(err) => {
			warn!("Generator skipped edge {} - {}: {}", a.0, b.0, err);
			false
		}
	}
}

impl GeneratorConfig {
	/// Replaces the graph's contents with scattered nodes joined at random.
	pub fn random(&self, graph: &mut Graph, rng: &mut SimpleRng) {
		graph.clear();
		let mut coord = || rng.next_f64() * 2.0 * self.extent - self.extent;
		let nodes: Vec<NodeId> = (0..self.random_nodes)
			.map(|_| {
				let position = Vec3::new(coord(), coord(), coord());
				graph.add_node(position)
			})
			.collect();

		for (i, &a) in nodes.iter().enumerate() {
			for &b in &nodes[i + 1..] {
				if rng.next_f64() < self.edge_probability {
					connect(graph, a, b, rng.weight(self.max_weight));
				}
			}
		}
	}

	/// Replaces the graph's contents with a flat grid in the x/z plane.
	pub fn grid(&self, graph: &mut Graph, rng: &mut SimpleRng) {
		graph.clear();
		let side = self.grid_size + 1;
		let origin = -(self.grid_size as f64) * self.grid_spacing / 2.0;
		let mut cells = Vec::with_capacity(side * side);
		for x in 0..side {
			for z in 0..side {
				let position = Vec3::new(
					origin + x as f64 * self.grid_spacing,
					0.0,
					origin + z as f64 * self.grid_spacing,
				);
				cells.push(graph.add_node(position));
			}
		}

		let at = |x: usize, z: usize| cells[x * side + z];
		for x in 0..side {
			for z in 0..side {
				if x < self.grid_size {
					connect(graph, at(x, z), at(x + 1, z), rng.weight(self.max_weight));
				}
				if z < self.grid_size {
					connect(graph, at(x, z), at(x, z + 1), rng.weight(self.max_weight));
				}
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn rng_is_reproducible_and_bounded() {
		let (mut a, mut b) = (SimpleRng::new(42), SimpleRng::new(42));
		for _ in 0..1000 {
			let x = a.next_f64();
			assert_eq!(x, b.next_f64());
			assert!((0.0..1.0).contains(&x));
		}
	}

	#[test]
	fn rejected_generated_edges_are_skipped() {
		let mut g = Graph::new();
		let a = g.add_node(Vec3::default());
		let b = g.add_node(Vec3::default());
		assert!(!connect(&mut g, a, a, 1.0));
		assert!(!connect(&mut g, a, b, f64::NAN));
		assert!(connect(&mut g, a, b, 2.0));
		assert!(!connect(&mut g, b, a, 3.0));
		assert_eq!(g.edge_count(), 1);
	}

	#[test]
	fn grid_has_the_expected_shape() {
		let mut g = Graph::new();
		GeneratorConfig::default().grid(&mut g, &mut SimpleRng::new(7));
		assert_eq!(g.node_count(), 25);
		// 2 * size * (size + 1) edges on a square grid.
		assert_eq!(g.edge_count(), 40);
		assert!(g.edges().iter().all(|e| (1.0..=10.0).contains(&e.weight)));
		let corner = g.nodes()[0].position;
		assert_eq!(corner, Vec3::new(-60.0, 0.0, -60.0));
	}

	#[test]
	fn random_replaces_previous_contents() {
		let config = GeneratorConfig::default();
		let mut g = Graph::new();
		config.grid(&mut g, &mut SimpleRng::new(1));
		config.random(&mut g, &mut SimpleRng::new(1));
		assert_eq!(g.node_count(), 10);
		assert_eq!(g.nodes()[0].id, NodeId(0));
		assert!(g.edge_count() <= 45);
		for n in g.nodes() {
			for v in [n.position.x, n.position.y, n.position.z] {
				assert!((-100.0..100.0).contains(&v));
			}
		}
	}
}
