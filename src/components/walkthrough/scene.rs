use std::collections::HashMap;

use leptos::prelude::*;

use crate::traversal::{Color, Mode, NodeId, Panel, Scene, Visual};

/// Seconds a highlight pulse stays visible.
const PULSE_SECS: f64 = 0.6;
/// Seconds a newly created element takes to fade in.
const APPEAR_SECS: f64 = 0.25;

/// Canvas-side bookkeeping for the scene collaborator. Colors themselves
/// live on the graph nodes; this only tracks short animations.
#[derive(Debug, Default)]
pub struct CanvasScene {
	pulses: HashMap<NodeId, (Color, f64)>,
	appearing: HashMap<Visual, f64>,
}

impl CanvasScene {
	pub fn tick(&mut self, dt: f64) {
		self.pulses.retain(|_, (_, t)| {
			*t += dt;
			*t < PULSE_SECS
		});
		self.appearing.retain(|_, t| {
			*t += dt;
			*t < APPEAR_SECS
		});
	}

	/// Pulse color and strength in `(0, 1]`, if the node was just highlighted.
	pub fn pulse(&self, id: NodeId) -> Option<(Color, f64)> {
		self.pulses
			.get(&id)
			.map(|&(color, t)| (color, 1.0 - t / PULSE_SECS))
	}

	/// Opacity of an element that may still be fading in.
	pub fn opacity(&self, visual: Visual) -> f64 {
		self.appearing
			.get(&visual)
			.map_or(1.0, |t| (t / APPEAR_SECS).clamp(0.0, 1.0))
	}
}

impl Scene for CanvasScene {
	fn highlight(&mut self, node: NodeId, color: Color) {
		self.pulses.insert(node, (color, 0.0));
	}

	fn create_visual(&mut self, visual: Visual) {
		self.appearing.insert(visual, 0.0);
	}

	fn remove_visual(&mut self, visual: Visual) {
		self.appearing.remove(&visual);
		if let Visual::Node(id) = visual {
			self.pulses.remove(&id);
		}
	}
}

/// Text views backed by signals, so the DOM panels update reactively.
#[derive(Clone, Copy)]
pub struct SignalPanel {
	pub status: RwSignal<String>,
	pub help: RwSignal<String>,
	pub mode: RwSignal<Mode>,
	pub selection: RwSignal<(Option<NodeId>, Option<NodeId>)>,
	pub code: RwSignal<&'static [&'static str]>,
	pub code_line: RwSignal<Option<usize>>,
}

impl SignalPanel {
	pub fn new() -> Self {
		let no_code: &'static [&'static str] = &[];
		Self {
			status: RwSignal::new(String::new()),
			help: RwSignal::new(String::new()),
			mode: RwSignal::new(Mode::None),
			selection: RwSignal::new((None, None)),
			code: RwSignal::new(no_code),
			code_line: RwSignal::new(None),
		}
	}
}

impl Panel for SignalPanel {
	fn show_status(&mut self, message: &str) {
		self.status.set(message.to_string());
	}

	fn show_help(&mut self, message: &str) {
		self.help.set(message.to_string());
	}

	fn show_mode(&mut self, mode: Mode) {
		self.mode.set(mode);
	}

	fn show_selection(&mut self, start: Option<NodeId>, end: Option<NodeId>) {
		self.selection.set((start, end));
	}

	fn load_code(&mut self, lines: &'static [&'static str]) {
		self.code.set(lines);
		self.code_line.set(None);
	}

	fn highlight_code_line(&mut self, line: Option<usize>) {
		self.code_line.set(line);
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn pulses_fade_out() {
		let mut scene = CanvasScene::default();
		scene.highlight(NodeId(1), Color::GREEN);
		assert_eq!(scene.pulse(NodeId(1)), Some((Color::GREEN, 1.0)));
		scene.tick(PULSE_SECS / 2.0);
		let (_, strength) = scene.pulse(NodeId(1)).unwrap();
		assert!((strength - 0.5).abs() < 1e-9);
		scene.tick(PULSE_SECS);
		assert_eq!(scene.pulse(NodeId(1)), None);
	}

	#[test]
	fn new_visuals_fade_in() {
		let mut scene = CanvasScene::default();
		let v = Visual::Node(NodeId(0));
		scene.create_visual(v);
		assert_eq!(scene.opacity(v), 0.0);
		scene.tick(1.0);
		assert_eq!(scene.opacity(v), 1.0);
	}
}
