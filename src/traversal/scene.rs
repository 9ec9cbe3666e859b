//! Seams between the traversal core and whatever draws it.

use super::color::Color;
use super::graph::{EdgeId, NodeId};
use super::session::Mode;

/// Something drawn for a graph element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Visual {
	/// A node sphere.
	Node(NodeId),
	/// An edge line.
	Edge(EdgeId),
}

/// Rendering collaborator.
pub trait Scene {
	/// Shows `node` in `color`.
	fn highlight(&mut self, node: NodeId, color: Color);
	/// A graph element was added.
	fn create_visual(&mut self, visual: Visual);
	/// A graph element was removed.
	fn remove_visual(&mut self, visual: Visual);
}

/// Passive text views: status line, help text, mode, selection and the
/// pseudo-code listing.
pub trait Panel {
	/// Replaces the status line.
	fn show_status(&mut self, message: &str);
	/// Replaces the help text.
	fn show_help(&mut self, message: &str);
	/// Shows the active mode.
	fn show_mode(&mut self, mode: Mode);
	/// Current start and end nodes.
	fn show_selection(&mut self, start: Option<NodeId>, end: Option<NodeId>);
	/// Shows a new listing with nothing highlighted.
	fn load_code(&mut self, lines: &'static [&'static str]);
	/// Highlights one listing line, or none.
	fn highlight_code_line(&mut self, line: Option<usize>);
}

/// Discards everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct Headless;

impl Scene for Headless {
	fn highlight(&mut self, _: NodeId, _: Color) {}
	fn create_visual(&mut self, _: Visual) {}
	fn remove_visual(&mut self, _: Visual) {}
}

impl Panel for Headless {
	fn show_status(&mut self, _: &str) {}
	fn show_help(&mut self, _: &str) {}
	fn show_mode(&mut self, _: Mode) {}
	fn show_selection(&mut self, _: Option<NodeId>, _: Option<NodeId>) {}
	fn load_code(&mut self, _: &'static [&'static str]) {}
	fn highlight_code_line(&mut self, _: Option<usize>) {}
}
