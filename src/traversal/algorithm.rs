//! The four walkable algorithms and their pseudo-code listings.

use std::fmt;
use std::str::FromStr;

use super::error::UnknownAlgorithm;

const BFS_CODE: &[&str] = &[
	"function BFS(start):",
	"  create a queue Q",
	"  mark start as visited",
	"  enqueue start into Q",
	"  while Q is not empty:",
	"    node = dequeue Q",
	"    for each neighbor of node:",
	"      if neighbor is not visited:",
	"        mark neighbor as visited",
	"        enqueue neighbor into Q",
];

const DFS_CODE: &[&str] = &[
	"function DFS(node):",
	"  mark node as visited",
	"  for each neighbor of node:",
	"    if neighbor is not visited:",
	"      DFS(neighbor)",
];

const DIJKSTRA_CODE: &[&str] = &[
	"function Dijkstra(start):",
	"  for each node:",
	"    set distance to infinity",
	"    set previous node to null",
	"  distance[start] = 0",
	"  create a priority queue Q",
	"  enqueue start into Q with priority 0",
	"  while Q is not empty:",
	"    node = dequeue Q",
	"    for each neighbor of node:",
	"      alt = distance[node] + edge_weight(node, neighbor)",
	"      if alt < distance[neighbor]:",
	"        distance[neighbor] = alt",
	"        previous[neighbor] = node",
	"        enqueue neighbor into Q with priority alt",
	"  return distances, previous",
];

const ASTAR_CODE: &[&str] = &[
	"function A*(start, goal):",
	"  openSet = {start}",
	"  cameFrom = empty map",
	"  gScore[start] = 0",
	"  fScore[start] = heuristic(start, goal)",
	"  while openSet is not empty:",
	"    current = node in openSet with lowest fScore",
	"    if current == goal:",
	"      reconstruct path",
	"      return",
	"    remove current from openSet",
	"    for each neighbor of current:",
	"      tentative_gScore = gScore[current] + edge_weight(current, neighbor)",
	"      if tentative_gScore < gScore[neighbor]:",
	"        cameFrom[neighbor] = current",
	"        gScore[neighbor] = tentative_gScore",
	"        fScore[neighbor] = gScore[neighbor] + heuristic(neighbor, goal)",
	"        if neighbor not in openSet:",
	"          add neighbor to openSet",
	"  return failure",
];

/// A traversal the walkthrough can record and replay.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Algorithm {
	/// Breadth-first search.
	#[default]
	Bfs,
	/// Depth-first search.
	Dfs,
	/// Dijkstra shortest paths.
	Dijkstra,
	/// A* toward the end node.
	AStar,
}

impl Algorithm {
	/// Every algorithm, in selector order.
	pub const ALL: [Algorithm; 4] = [Algorithm::Bfs, Algorithm::Dfs, Algorithm::Dijkstra, Algorithm::AStar];

	/// Key used by the algorithm selector.
	pub fn key(self) -> &'static str {
		match self {
			Algorithm::Bfs => "bfs",
			Algorithm::Dfs => "dfs",
			Algorithm::Dijkstra => "dijkstra",
			Algorithm::AStar => "astar",
		}
	}

	/// Display name.
	pub fn label(self) -> &'static str {
		match self {
			Algorithm::Bfs => "Breadth-First Search",
			Algorithm::Dfs => "Depth-First Search",
			Algorithm::Dijkstra => "Dijkstra's Algorithm",
			Algorithm::AStar => "A* Search",
		}
	}

	/// Status shown once a run has been recorded.
	pub fn completion_message(self) -> &'static str {
		match self {
			Algorithm::Bfs => "BFS completed.",
			Algorithm::Dfs => "DFS completed.",
			Algorithm::Dijkstra => "Dijkstra's Algorithm completed.",
			Algorithm::AStar => "A* Search completed.",
		}
	}

	/// Dijkstra and A* refuse to run without an end node.
	pub fn needs_end_node(self) -> bool {
		matches!(self, Algorithm::Dijkstra | Algorithm::AStar)
	}

	/// The pseudo-code listing; recorded steps index into it.
	pub fn code_lines(self) -> &'static [&'static str] {
		match self {
			Algorithm::Bfs => BFS_CODE,
			Algorithm::Dfs => DFS_CODE,
			Algorithm::Dijkstra => DIJKSTRA_CODE,
			Algorithm::AStar => ASTAR_CODE,
		}
	}
}

impl fmt::Display for Algorithm {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.label())
	}
}

impl FromStr for Algorithm {
	type Err = UnknownAlgorithm;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Algorithm::ALL
			.into_iter()
			.find(|a| a.key() == s)
			.ok_or_else(|| UnknownAlgorithm(s.to_string()))
	}
}

/// Pseudo-code for a selector key; unknown keys have no listing.
pub fn algorithm_code_lines(key: &str) -> &'static [&'static str] {
	key.parse::<Algorithm>().map(Algorithm::code_lines).unwrap_or(&[])
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn keys_round_trip() {
		for a in Algorithm::ALL {
			assert_eq!(a.key().parse::<Algorithm>(), Ok(a));
		}
		assert!("kruskal".parse::<Algorithm>().is_err());
	}

	#[test]
	fn unknown_key_names_itself() {
		let err = "kruskal".parse::<Algorithm>().unwrap_err();
		assert_eq!(err, UnknownAlgorithm("kruskal".to_string()));
		assert_eq!(err.to_string(), "Algorithm not implemented: kruskal");
	}

	#[test]
	fn listings_by_key() {
		assert_eq!(algorithm_code_lines("bfs").len(), 10);
		assert_eq!(algorithm_code_lines("dfs").len(), 5);
		assert_eq!(algorithm_code_lines("dijkstra").len(), 16);
		assert_eq!(algorithm_code_lines("astar").len(), 20);
		assert!(algorithm_code_lines("prim").is_empty());
		assert_eq!(algorithm_code_lines("astar")[19], "  return failure");
	}
}
