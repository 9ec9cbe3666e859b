use leptos::prelude::*;

use crate::components::walkthrough::Walkthrough;

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<div class="fullscreen-graph">
				<Walkthrough fullscreen=true />
				<div class="graph-overlay">
					<h1>"Graph Traversal Walkthrough"</h1>
					<p class="subtitle">
						"Build a graph, pick start and end nodes, run an algorithm and step through it."
					</p>
				</div>
			</div>
		</ErrorBoundary>
	}
}
