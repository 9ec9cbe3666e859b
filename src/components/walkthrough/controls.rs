use leptos::prelude::*;

use super::scene::SignalPanel;
use crate::traversal::NodeId;

fn describe(node: Option<NodeId>) -> String {
	node.map_or_else(|| "None".to_string(), |id| format!("Node {}", id.0))
}

/// Mode, selection, status and help lines.
#[component]
pub fn StatusPanel(panel: SignalPanel) -> impl IntoView {
	view! {
		<div class="status-panel">
			<div class="mode-display">{move || format!("Mode: {}", panel.mode.get().label())}</div>
			<div class="selection">
				"Start: "
				<span class="start-node">{move || describe(panel.selection.get().0)}</span>
				" End: "
				<span class="end-node">{move || describe(panel.selection.get().1)}</span>
			</div>
			<div class="status">{move || panel.status.get()}</div>
			<div class="help-text">{move || panel.help.get()}</div>
		</div>
	}
}

/// The pseudo-code listing with the current line highlighted.
#[component]
pub fn CodePanel(panel: SignalPanel, #[prop(into)] visible: Signal<bool>) -> impl IntoView {
	view! {
		<div class="algorithm-code" style:display=move || if visible.get() { "block" } else { "none" }>
			{move || {
				let current = panel.code_line.get();
				panel
					.code
					.get()
					.iter()
					.enumerate()
					.map(|(i, line)| {
						let class = if current == Some(i) { "code-line highlight" } else { "code-line" };
						view! { <pre class=class>{*line}</pre> }
					})
					.collect_view()
			}}
		</div>
	}
}

#[component]
pub fn KeyHelp() -> impl IntoView {
	view! {
		<ul class="key-help">
			<li>"→ / ← : next / previous step"</li>
			<li>"↓ / ↑ : next / previous code line"</li>
			<li>"Space : step and advance code line"</li>
			<li>"Enter : jump to the end"</li>
			<li>"R : reset traversal"</li>
		</ul>
	}
}
