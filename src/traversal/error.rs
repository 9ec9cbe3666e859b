//! Error types at the boundary of the traversal core.

use thiserror::Error;

use super::graph::{EdgeId, NodeId};

/// Rejected graph edits.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
	/// A node id that is not (or no longer) part of the graph.
	#[error("node not found: Node {id}", id = id.0)]
	NodeNotFound {
		/// The missing node.
		id: NodeId,
	},

	/// An edge id that is not (or no longer) part of the graph.
	#[error("edge not found: Edge {id}", id = id.0)]
	EdgeNotFound {
		/// The missing edge.
		id: EdgeId,
	},

	/// Both endpoints are the same node.
	#[error("cannot connect Node {id} to itself", id = id.0)]
	SelfLoop {
		/// The node picked twice.
		id: NodeId,
	},

	/// Weights must be finite and non-negative.
	#[error("invalid edge weight: {weight}")]
	InvalidWeight {
		/// The rejected weight.
		weight: f64,
	},
}

/// Precondition failures reported before an algorithm is started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RunError {
	/// No start node is selected.
	#[error("Please select a start node.")]
	MissingStart,

	/// The algorithm needs an end node and none is selected.
	#[error("Please select an end node.")]
	MissingEnd,
}

/// A selector key that names none of the walkable algorithms.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Algorithm not implemented: {0}")]
pub struct UnknownAlgorithm(pub String);
