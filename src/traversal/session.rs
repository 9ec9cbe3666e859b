//! One editing-and-playback session: the graph, the selections, the
//! recorded run and both cursors, plus the collaborators that show them.

use log::{debug, info};

use super::algorithm::Algorithm;
use super::code_cursor::CodeCursor;
use super::color::Color;
use super::engine::{Engine, Outcome};
use super::error::{GraphError, RunError};
use super::generate::{GeneratorConfig, SimpleRng};
use super::graph::{EdgeId, Graph, NodeId, Vec3, parse_weight};
use super::player::StepPlayer;
use super::recorder::Step;
use super::scene::{Panel, Scene, Visual};

/// What a click on the scene does.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mode {
	/// Clicks do nothing.
	#[default]
	None,
	/// Clicking empty ground adds a node.
	AddNode,
	/// Two node clicks add an edge.
	AddEdge,
	/// Clicking a node removes it.
	RemoveNode,
	/// Clicking an edge (or a node) removes edges.
	RemoveEdge,
	/// Clicking a node makes it the start.
	SelectStartNode,
	/// Clicking a node makes it the end.
	SelectEndNode,
}

impl Mode {
	/// Every mode, in toolbar order.
	pub const ALL: [Mode; 7] = [
		Mode::None,
		Mode::AddNode,
		Mode::AddEdge,
		Mode::RemoveNode,
		Mode::RemoveEdge,
		Mode::SelectStartNode,
		Mode::SelectEndNode,
	];

	/// Name shown in the mode display.
	pub fn label(self) -> &'static str {
		match self {
			Mode::None => "None",
			Mode::AddNode => "AddNode",
			Mode::AddEdge => "AddEdge",
			Mode::RemoveNode => "RemoveNode",
			Mode::RemoveEdge => "RemoveEdge",
			Mode::SelectStartNode => "SelectStartNode",
			Mode::SelectEndNode => "SelectEndNode",
		}
	}

	/// Hint shown when the mode is entered.
	pub fn help_text(self) -> &'static str {
		match self {
			Mode::None => "Select a mode to begin.",
			Mode::AddNode => "Click on the scene to add a node.",
			Mode::AddEdge => "Select two nodes to add an edge between them.",
			Mode::RemoveNode => "Select a node to remove it.",
			Mode::RemoveEdge => "Select an edge to remove it.",
			Mode::SelectStartNode => "Select a node to set as the start node.",
			Mode::SelectEndNode => "Select a node to set as the end node.",
		}
	}
}

/// Playback commands, typically bound to keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
	/// Forward one step.
	NextStep,
	/// Back one step.
	PreviousStep,
	/// Move the code highlight down.
	NextCodeLine,
	/// Move the code highlight up.
	PreviousCodeLine,
	/// Next step and next code line together.
	ExecuteCodeLine,
	/// Jump to the last step.
	Finish,
	/// Discard the run and clear traversal marks.
	ResetTraversal,
}

impl Command {
	/// Maps a `KeyboardEvent.key` value.
	pub fn from_key(key: &str) -> Option<Command> {
		Some(match key {
			"ArrowRight" => Command::NextStep,
			"ArrowLeft" => Command::PreviousStep,
			"ArrowUp" => Command::PreviousCodeLine,
			"ArrowDown" => Command::NextCodeLine,
			" " => Command::ExecuteCodeLine,
			"Enter" => Command::Finish,
			"r" | "R" => Command::ResetTraversal,
			_ => return None,
		})
	}
}

/// Everything one user is editing and playing back, with the
/// collaborators that display it.
pub struct Session<S: Scene, P: Panel> {
	graph: Graph,
	scene: S,
	panel: P,
	mode: Mode,
	algorithm: Algorithm,
	/// First endpoint picked in [`Mode::AddEdge`].
	pending_edge: Option<NodeId>,
	start: Option<NodeId>,
	end: Option<NodeId>,
	player: StepPlayer,
	code: CodeCursor,
	generator: GeneratorConfig,
}

impl<S: Scene, P: Panel> Session<S, P> {
	/// An empty session with the default generators.
	pub fn new(scene: S, panel: P) -> Self {
		Self::with_generator(scene, panel, GeneratorConfig::default())
	}

	/// An empty session generating sample graphs with `generator`.
	pub fn with_generator(scene: S, mut panel: P, generator: GeneratorConfig) -> Self {
		let algorithm = Algorithm::default();
		panel.show_mode(Mode::None);
		panel.show_help(Mode::None.help_text());
		panel.show_selection(None, None);
		panel.load_code(algorithm.code_lines());
		Self {
			graph: Graph::new(),
			scene,
			panel,
			mode: Mode::None,
			algorithm,
			pending_edge: None,
			start: None,
			end: None,
			player: StepPlayer::new(),
			code: CodeCursor::new(algorithm.code_lines()),
			generator,
		}
	}

	/// The graph being edited.
	pub fn graph(&self) -> &Graph {
		&self.graph
	}

	/// The rendering collaborator.
	pub fn scene(&self) -> &S {
		&self.scene
	}

	/// The rendering collaborator, for per-frame animation.
	pub fn scene_mut(&mut self) -> &mut S {
		&mut self.scene
	}

	/// The text views.
	pub fn panel(&self) -> &P {
		&self.panel
	}

	/// Current click mode.
	pub fn mode(&self) -> Mode {
		self.mode
	}

	/// The algorithm `run` will use.
	pub fn algorithm(&self) -> Algorithm {
		self.algorithm
	}

	/// Selected start node.
	pub fn start(&self) -> Option<NodeId> {
		self.start
	}

	/// Selected end node.
	pub fn end(&self) -> Option<NodeId> {
		self.end
	}

	/// First endpoint of an edge being added.
	pub fn pending_edge(&self) -> Option<NodeId> {
		self.pending_edge
	}

	/// Playback state of the recorded run.
	pub fn player(&self) -> &StepPlayer {
		&self.player
	}

	/// Highlighted pseudo-code line.
	pub fn code(&self) -> &CodeCursor {
		&self.code
	}

	/// Switches mode and shows its hint. Drops a half-picked edge.
	pub fn change_mode(&mut self, mode: Mode) {
		debug!("Mode changed to {}", mode.label());
		self.mode = mode;
		self.panel.show_mode(mode);
		self.panel.show_help(mode.help_text());
	}

	/// Picks the algorithm to run next. Switching discards the recorded run
	/// because its code lines refer to the old listing.
	pub fn select_algorithm(&mut self, algorithm: Algorithm) {
		if algorithm == self.algorithm {
			return;
		}
		self.algorithm = algorithm;
		self.reset_traversal();
		self.load_code(algorithm);
	}

	fn load_code(&mut self, algorithm: Algorithm) {
		self.code.load(algorithm.code_lines());
		self.panel.load_code(algorithm.code_lines());
	}

	// Graph edits

	/// Adds a node and its visual.
	pub fn add_node(&mut self, position: Vec3) -> NodeId {
		let id = self.graph.add_node(position);
		self.scene.create_visual(Visual::Node(id));
		id
	}

	/// Adds an edge; `Ok(None)` when the two are already connected.
	pub fn add_edge(&mut self, a: NodeId, b: NodeId, weight: f64) -> Result<Option<EdgeId>, GraphError> {
		let added = self.graph.add_edge(a, b, weight)?;
		if let Some(id) = added {
			self.scene.create_visual(Visual::Edge(id));
		}
		Ok(added)
	}

	/// Removes a node with its edges, clearing it from the selection.
	pub fn remove_node(&mut self, id: NodeId) -> Result<(), GraphError> {
		let edges = self.graph.remove_node(id)?;
		for edge in edges {
			self.scene.remove_visual(Visual::Edge(edge));
		}
		self.scene.remove_visual(Visual::Node(id));
		if self.start == Some(id) {
			self.start = None;
		}
		if self.end == Some(id) {
			self.end = None;
		}
		if self.pending_edge == Some(id) {
			self.pending_edge = None;
		}
		self.panel.show_selection(self.start, self.end);
		Ok(())
	}

	/// Removes one edge and its visual.
	pub fn remove_edge(&mut self, id: EdgeId) -> Result<(), GraphError> {
		self.graph.remove_edge(id)?;
		self.scene.remove_visual(Visual::Edge(id));
		Ok(())
	}

	/// Removes every edge of a node, keeping the node.
	pub fn remove_edges_of(&mut self, id: NodeId) -> Result<(), GraphError> {
		for edge in self.graph.remove_edges_of(id)? {
			self.scene.remove_visual(Visual::Edge(edge));
		}
		Ok(())
	}

	fn paint(&mut self, id: NodeId, color: Color) {
		self.graph.set_color(id, color);
		self.scene.highlight(id, color);
	}

	/// Makes `id` the start node; the previous start goes back to white.
	pub fn select_start(&mut self, id: NodeId) -> Result<(), GraphError> {
		if !self.graph.contains(id) {
			return Err(GraphError::NodeNotFound { id });
		}
		if let Some(previous) = self.start {
			self.paint(previous, Color::WHITE);
		}
		self.start = Some(id);
		self.paint(id, Color::GREEN);
		self.panel.show_selection(self.start, self.end);
		Ok(())
	}

	/// Makes `id` the end node; the previous end goes back to white.
	pub fn select_end(&mut self, id: NodeId) -> Result<(), GraphError> {
		if !self.graph.contains(id) {
			return Err(GraphError::NodeNotFound { id });
		}
		if let Some(previous) = self.end {
			self.paint(previous, Color::WHITE);
		}
		self.end = Some(id);
		self.paint(id, Color::RED);
		self.panel.show_selection(self.start, self.end);
		Ok(())
	}

	// Resolved input

	/// A click that hit no node or edge.
	pub fn click_empty(&mut self, position: Vec3) -> Option<NodeId> {
		(self.mode == Mode::AddNode).then(|| self.add_node(position))
	}

	/// A click on a node, interpreted by the current mode. `ask_weight` is
	/// only called when an edge is about to be added; `None` or unparsable
	/// input means weight 1.
	pub fn click_node(&mut self, id: NodeId, ask_weight: impl FnOnce() -> Option<String>) -> Result<(), GraphError> {
		match self.mode {
			Mode::AddEdge => match self.pending_edge {
				Some(first) if first != id => {
					let weight = parse_weight(ask_weight().as_deref().unwrap_or(""));
					self.pending_edge = None;
					self.add_edge(first, id, weight)?;
					self.panel.show_help("Edge added.");
				}
				_ => {
					self.pending_edge = Some(id);
					self.panel.show_help("Select the second node to connect.");
				}
			},
			Mode::RemoveNode => {
				self.remove_node(id)?;
				self.panel.show_help(&format!(
					"Node {} removed. Select another node to remove or change mode.",
					id.0
				));
			}
			Mode::SelectStartNode => {
				self.select_start(id)?;
				self.panel.show_help(&format!(
					"Start node set to Node {}. Select another node to change or change mode.",
					id.0
				));
			}
			Mode::SelectEndNode => {
				self.select_end(id)?;
				self.panel.show_help(&format!(
					"End node set to Node {}. Select another node to change or change mode.",
					id.0
				));
			}
			Mode::RemoveEdge => {
				self.remove_edges_of(id)?;
				self.panel.show_help(&format!(
					"Edges connected to Node {} removed. Select another node or change mode.",
					id.0
				));
			}
			Mode::None | Mode::AddNode => {}
		}
		Ok(())
	}

	/// A click on an edge; only [`Mode::RemoveEdge`] acts on it.
	pub fn click_edge(&mut self, id: EdgeId) -> Result<(), GraphError> {
		if self.mode == Mode::RemoveEdge {
			self.remove_edge(id)?;
			self.panel.show_help("Edge removed. Select another edge to remove or change mode.");
		}
		Ok(())
	}

	// Runs

	/// Runs the selected algorithm to completion and loads its steps for
	/// playback. Both cursors end up before their first entry.
	pub fn run(&mut self) -> Result<Outcome, RunError> {
		self.run_algorithm(self.algorithm)
	}

	/// Selects `algorithm` and runs it.
	pub fn run_algorithm(&mut self, algorithm: Algorithm) -> Result<Outcome, RunError> {
		let start = self.start.ok_or(RunError::MissingStart)?;
		if algorithm.needs_end_node() && self.end.is_none() {
			return Err(RunError::MissingEnd);
		}

		self.algorithm = algorithm;
		self.reset_traversal();
		self.load_code(algorithm);
		let (outcome, steps) = Engine::new(&mut self.graph, &mut self.scene).run(algorithm, start, self.end);
		info!("{} from Node {} recorded {} steps", algorithm, start.0, steps.len());
		self.player.load(steps);
		self.panel.show_status(algorithm.completion_message());
		Ok(outcome)
	}

	/// Discards the recorded run and every traversal mark.
	pub fn reset_traversal(&mut self) {
		self.graph.reset_traversal();
		for id in self.graph.nodes().iter().map(|n| n.id) {
			self.scene.highlight(id, Color::WHITE);
		}
		self.player.clear();
		self.code.reset();
		self.panel.show_status("Traversal reset. Select a mode to continue.");
		self.panel.show_help(self.mode.help_text());
		self.panel.highlight_code_line(None);
		info!("Traversal reset");
	}

	/// Empties the graph and the selection.
	pub fn reset_graph(&mut self) {
		for edge in self.graph.edges() {
			self.scene.remove_visual(Visual::Edge(edge.id));
		}
		for node in self.graph.nodes() {
			self.scene.remove_visual(Visual::Node(node.id));
		}
		self.graph.clear();
		self.start = None;
		self.end = None;
		self.pending_edge = None;
		self.player.clear();
		self.code.reset();
		self.panel.show_selection(None, None);
		self.panel.show_help("Graph reset. Select a mode to begin.");
		self.panel.show_status("");
		self.panel.highlight_code_line(None);
		info!("Graph reset");
	}

	/// Replaces the graph with a random one.
	pub fn generate_random(&mut self, seed: u64) {
		self.reset_graph();
		self.generator.random(&mut self.graph, &mut SimpleRng::new(seed));
		self.create_all_visuals();
		self.panel.show_help("Random graph generated.");
	}

	/// Replaces the graph with a weighted grid.
	pub fn generate_grid(&mut self, seed: u64) {
		self.reset_graph();
		self.generator.grid(&mut self.graph, &mut SimpleRng::new(seed));
		self.create_all_visuals();
		self.panel.show_help("Grid graph generated.");
	}

	fn create_all_visuals(&mut self) {
		for node in self.graph.nodes() {
			self.scene.create_visual(Visual::Node(node.id));
		}
		for edge in self.graph.edges() {
			self.scene.create_visual(Visual::Edge(edge.id));
		}
		info!(
			"Generated {} nodes and {} edges",
			self.graph.node_count(),
			self.graph.edge_count()
		);
	}

	// Playback

	fn present(step: Option<&Step>, code: &mut CodeCursor, panel: &mut P) -> bool {
		let Some(step) = step else {
			return false;
		};
		panel.show_status(step.message());
		code.sync(step.code_line());
		panel.highlight_code_line(code.current());
		true
	}

	/// Applies step `index` without moving the step cursor.
	pub fn apply_step(&mut self, index: usize) -> bool {
		let step = self.player.apply_step(index, &mut self.graph, &mut self.scene);
		Self::present(step, &mut self.code, &mut self.panel)
	}

	/// Applies the next recorded step; `false` at the end.
	pub fn next_step(&mut self) -> bool {
		let step = self.player.next(&mut self.graph, &mut self.scene);
		Self::present(step, &mut self.code, &mut self.panel)
	}

	/// Applies the previous recorded step; `false` at the first.
	pub fn previous_step(&mut self) -> bool {
		let step = self.player.previous(&mut self.graph, &mut self.scene);
		Self::present(step, &mut self.code, &mut self.panel)
	}

	/// Moves the code highlight without touching the step.
	pub fn next_code_line(&mut self) -> bool {
		let moved = self.code.next();
		if moved {
			self.panel.highlight_code_line(self.code.current());
		}
		moved
	}

	/// Moves the code highlight up without touching the step.
	pub fn previous_code_line(&mut self) -> bool {
		let moved = self.code.previous();
		if moved {
			self.panel.highlight_code_line(self.code.current());
		}
		moved
	}

	/// Advances the step cursor and the code cursor by one each. The code
	/// cursor moves from where it was, not from the new step's line.
	pub fn execute_current_code_line(&mut self) {
		let line = self.code.current();
		self.next_step();
		self.code.sync(line);
		self.code.next();
		self.panel.highlight_code_line(self.code.current());
	}

	/// Jumps to the last step and the last line of the listing.
	pub fn finish_algorithm(&mut self) {
		let step = self.player.finish(&mut self.graph, &mut self.scene);
		Self::present(step, &mut self.code, &mut self.panel);
		self.code.finish();
		self.panel.highlight_code_line(self.code.current());
	}

	/// Runs a keyboard command.
	pub fn dispatch(&mut self, command: Command) {
		debug!("Dispatching {:?}", command);
		match command {
			Command::NextStep => {
				self.next_step();
			}
			Command::PreviousStep => {
				self.previous_step();
			}
			Command::NextCodeLine => {
				self.next_code_line();
			}
			Command::PreviousCodeLine => {
				self.previous_code_line();
			}
			Command::ExecuteCodeLine => self.execute_current_code_line(),
			Command::Finish => self.finish_algorithm(),
			Command::ResetTraversal => self.reset_traversal(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::traversal::scene::testing::Recording;

	type TestSession = Session<Recording, Recording>;

	fn session() -> TestSession {
		Session::new(Recording::default(), Recording::default())
	}

	/// A-B (1), B-C (2), A-C (4) with A as start and C as end.
	fn triangle() -> (TestSession, [NodeId; 3]) {
		let mut s = session();
		let a = s.add_node(Vec3::new(0.0, 0.0, 0.0));
		let b = s.add_node(Vec3::new(1.0, 0.0, 0.0));
		let c = s.add_node(Vec3::new(2.0, 0.0, 0.0));
		s.add_edge(a, b, 1.0).unwrap();
		s.add_edge(b, c, 2.0).unwrap();
		s.add_edge(a, c, 4.0).unwrap();
		s.select_start(a).unwrap();
		s.select_end(c).unwrap();
		(s, [a, b, c])
	}

	#[test]
	fn keys_map_to_commands() {
		assert_eq!(Command::from_key("ArrowRight"), Some(Command::NextStep));
		assert_eq!(Command::from_key(" "), Some(Command::ExecuteCodeLine));
		assert_eq!(Command::from_key("R"), Some(Command::ResetTraversal));
		assert_eq!(Command::from_key("x"), None);
	}

	#[test]
	fn preconditions_are_checked_before_running() {
		let mut s = session();
		assert_eq!(s.run_algorithm(Algorithm::Bfs), Err(RunError::MissingStart));
		let a = s.add_node(Vec3::default());
		s.select_start(a).unwrap();
		assert_eq!(s.run_algorithm(Algorithm::Dijkstra), Err(RunError::MissingEnd));
		assert_eq!(s.run_algorithm(Algorithm::AStar), Err(RunError::MissingEnd));
		assert!(s.run_algorithm(Algorithm::Dfs).is_ok());
		assert!(!s.player().is_empty());
	}

	#[test]
	fn run_leaves_both_cursors_rewound() {
		let (mut s, [_, _, c]) = triangle();
		let outcome = s.run_algorithm(Algorithm::Dijkstra).unwrap();
		assert_eq!(outcome.distance(c), 3.0);
		assert_eq!(s.player().current_index(), None);
		assert_eq!(s.code().current(), None);
		assert_eq!(s.panel().status, "Dijkstra's Algorithm completed.");
		assert_eq!(s.panel().code.len(), 16);
	}

	#[test]
	fn stepping_drives_status_and_code_line() {
		let (mut s, _) = triangle();
		s.run_algorithm(Algorithm::Bfs).unwrap();
		assert!(s.next_step());
		assert_eq!(s.panel().status, "Starting BFS from Node 0.");
		assert_eq!(s.panel().code_line, Some(1));
		assert!(s.next_step());
		assert_eq!(s.code().current(), Some(4));
		assert!(s.previous_step());
		assert_eq!(s.code().current(), Some(1));
	}

	#[test]
	fn finish_moves_both_cursors_to_the_end() {
		let (mut s, _) = triangle();
		s.run_algorithm(Algorithm::AStar).unwrap();
		s.next_step();
		s.finish_algorithm();
		assert_eq!(s.player().current_index(), Some(s.player().len() - 1));
		assert_eq!(s.code().current(), Some(Algorithm::AStar.code_lines().len() - 1));
		assert_eq!(s.panel().code_line, Some(19));
	}

	#[test]
	fn finish_from_any_cursor_lands_on_the_final_state() {
		let (mut s, [a, b, c]) = triangle();
		s.run_algorithm(Algorithm::Dijkstra).unwrap();
		let last = s.player().len() - 1;
		let final_message = s.player().steps()[last].message().to_string();

		s.finish_algorithm();
		assert_eq!(s.player().current_index(), Some(last));
		assert_eq!(s.panel().status, final_message);
		assert_eq!(s.panel().code_line, Some(Algorithm::Dijkstra.code_lines().len() - 1));
		let colors = [a, b, c].map(|id| s.graph().node(id).unwrap().color);
		assert_eq!(colors, [Color::GREEN, Color::RED, Color::RED]);

		s.finish_algorithm();
		assert_eq!(s.player().current_index(), Some(last));
		assert_eq!(s.panel().status, final_message);
		assert_eq!(s.code().current(), Some(Algorithm::Dijkstra.code_lines().len() - 1));
		assert_eq!([a, b, c].map(|id| s.graph().node(id).unwrap().color), colors);
		assert!([a, b, c].iter().all(|&id| s.graph().is_visited(id)));
	}

	#[test]
	fn reset_clears_steps_and_cursors() {
		let (mut s, [a, ..]) = triangle();
		s.run_algorithm(Algorithm::Bfs).unwrap();
		s.next_step();
		s.next_code_line();
		s.dispatch(Command::ResetTraversal);
		assert!(s.player().is_empty());
		assert_eq!(s.player().current_index(), None);
		assert_eq!(s.code().current(), None);
		assert!(!s.graph().is_visited(a));
		assert_eq!(s.panel().status, "Traversal reset. Select a mode to continue.");
	}

	#[test]
	fn execute_advances_step_and_line_together() {
		let (mut s, _) = triangle();
		s.run_algorithm(Algorithm::Bfs).unwrap();
		s.execute_current_code_line();
		assert_eq!(s.player().current_index(), Some(0));
		assert_eq!(s.code().current(), Some(0));
		s.execute_current_code_line();
		assert_eq!(s.player().current_index(), Some(1));
		assert_eq!(s.code().current(), Some(1));
	}

	#[test]
	fn code_line_navigation_is_manual_and_clamped() {
		let (mut s, _) = triangle();
		s.select_algorithm(Algorithm::Dfs);
		assert!(!s.previous_code_line());
		for _ in 0..8 {
			s.dispatch(Command::NextCodeLine);
		}
		assert_eq!(s.code().current(), Some(4));
		s.dispatch(Command::PreviousCodeLine);
		assert_eq!(s.panel().code_line, Some(3));
	}

	#[test]
	fn add_edge_mode_takes_two_clicks() {
		let mut s = session();
		let a = s.add_node(Vec3::default());
		let b = s.add_node(Vec3::default());
		s.change_mode(Mode::AddEdge);
		s.click_node(a, || panic!("no weight needed for the first node")).unwrap();
		assert_eq!(s.pending_edge(), Some(a));
		s.click_node(b, || Some("2.5".to_string())).unwrap();
		assert_eq!(s.pending_edge(), None);
		assert_eq!(s.graph().edges()[0].weight, 2.5);
		assert_eq!(s.panel().help, "Edge added.");
		assert_eq!(s.scene().visuals.len(), 3);
	}

	#[test]
	fn selecting_a_new_start_repaints_the_old_one() {
		let (mut s, [a, b, _]) = triangle();
		s.change_mode(Mode::SelectStartNode);
		s.click_node(b, || None).unwrap();
		assert_eq!(s.start(), Some(b));
		assert_eq!(s.graph().node(a).unwrap().color, Color::WHITE);
		assert_eq!(s.graph().node(b).unwrap().color, Color::GREEN);
		assert_eq!(s.panel().selection, (Some(b), s.end()));
	}

	#[test]
	fn removing_selected_nodes_clears_the_selection() {
		let (mut s, [a, _, c]) = triangle();
		s.change_mode(Mode::RemoveNode);
		s.click_node(c, || None).unwrap();
		assert_eq!(s.end(), None);
		assert_eq!(s.graph().edge_count(), 1);
		s.remove_node(a).unwrap();
		assert_eq!(s.start(), None);
		assert_eq!(s.run(), Err(RunError::MissingStart));
	}

	#[test]
	fn playback_survives_structural_edits() {
		let (mut s, [_, b, _]) = triangle();
		s.run_algorithm(Algorithm::Bfs).unwrap();
		s.remove_node(b).unwrap();
		let late = s.add_node(Vec3::default());
		s.finish_algorithm();
		assert!(!s.graph().is_visited(late));
		assert!(s.graph().nodes().iter().filter(|n| n.id != late).all(|n| n.visited));
	}

	#[test]
	fn click_empty_only_adds_in_add_node_mode() {
		let mut s = session();
		assert_eq!(s.click_empty(Vec3::default()), None);
		s.change_mode(Mode::AddNode);
		assert_eq!(s.click_empty(Vec3::default()), Some(NodeId(0)));
		assert_eq!(s.panel().mode, Mode::AddNode);
	}

	#[test]
	fn remove_edge_mode() {
		let (mut s, [a, ..]) = triangle();
		s.change_mode(Mode::RemoveEdge);
		let first = s.graph().edges()[0].id;
		s.click_edge(first).unwrap();
		assert_eq!(s.graph().edge_count(), 2);
		s.click_node(a, || None).unwrap();
		assert_eq!(s.graph().edge_count(), 1);
		assert_eq!(s.click_edge(first), Err(GraphError::EdgeNotFound { id: first }));
	}

	#[test]
	fn generators_replace_the_graph() {
		let (mut s, _) = triangle();
		s.generate_grid(3);
		assert_eq!(s.graph().node_count(), 25);
		assert_eq!(s.start(), None);
		assert_eq!(s.panel().help, "Grid graph generated.");
		assert_eq!(s.scene().visuals.len(), 25 + 40);
		s.reset_graph();
		assert_eq!(s.graph().node_count(), 0);
		assert!(s.scene().visuals.is_empty());
	}
}
