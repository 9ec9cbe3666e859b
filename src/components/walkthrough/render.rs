use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::scene::CanvasScene;
use super::state::{NODE_RADIUS, ViewState};
use crate::traversal::{Graph, NodeId, Vec3, Visual};

const GRID_SIZE: f64 = 400.0;
const GRID_DIVISIONS: u32 = 20;

fn ease_out_cubic(t: f64) -> f64 {
	1.0 - (1.0 - t).powi(3)
}

pub fn render(view: &ViewState, graph: &Graph, scene: &CanvasScene, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str("#f0f0f0");
	ctx.fill_rect(0.0, 0.0, view.width, view.height);
	ctx.save();
	let _ = ctx.translate(view.transform.x, view.transform.y);
	let _ = ctx.scale(view.transform.k, view.transform.k);
	if view.show_grid {
		draw_grid(view, ctx);
	}
	draw_edges(view, graph, scene, ctx);
	draw_nodes(view, graph, scene, ctx);
	ctx.restore();
}

fn draw_grid(view: &ViewState, ctx: &CanvasRenderingContext2d) {
	let half = GRID_SIZE / 2.0;
	let step = GRID_SIZE / f64::from(GRID_DIVISIONS);
	ctx.set_stroke_style_str("rgba(0, 0, 0, 0.12)");
	ctx.set_line_width(1.0 / view.transform.k);
	ctx.begin_path();
	for i in 0..=GRID_DIVISIONS {
		let offset = -half + f64::from(i) * step;
		for (from, to) in [
			((offset, -half), (offset, half)),
			((-half, offset), (half, offset)),
		] {
			let (x1, y1) = view.project(&Vec3::new(from.0, 0.0, from.1));
			let (x2, y2) = view.project(&Vec3::new(to.0, 0.0, to.1));
			ctx.move_to(x1, y1);
			ctx.line_to(x2, y2);
		}
	}
	ctx.stroke();
}

fn draw_edges(view: &ViewState, graph: &Graph, scene: &CanvasScene, ctx: &CanvasRenderingContext2d) {
	let k = view.transform.k;
	let t = ease_out_cubic(view.hover.highlight_t);

	for edge in graph.edges() {
		let (Some(a), Some(b)) = (graph.node(edge.a), graph.node(edge.b)) else {
			continue;
		};
		let ((x1, y1), (x2, y2)) = (view.project(&a.position), view.project(&b.position));
		let walked = a.visited && b.visited;
		let is_highlighted = view.is_highlighted(a.id) && view.is_highlighted(b.id);

		// Hovering brightens the hovered neighbourhood and dims the rest.
		let base = if walked { 0.85 } else { 0.55 };
		let alpha = (if is_highlighted {
			base + (1.0 - base) * t
		} else {
			base - 0.4 * t
		}) * scene.opacity(Visual::Edge(edge.id));

		ctx.set_stroke_style_str(&format!("rgba(0, 0, 0, {})", alpha));
		ctx.set_line_width((if walked { 2.0 } else { 1.2 }) / k);
		if walked {
			let _ = ctx.set_line_dash(&js_sys::Array::new());
		} else {
			let _ = ctx.set_line_dash(&js_sys::Array::of2(
				&JsValue::from_f64(6.0 / k),
				&JsValue::from_f64(3.0 / k),
			));
		}
		ctx.begin_path();
		ctx.move_to(x1, y1);
		ctx.line_to(x2, y2);
		ctx.stroke();

		if view.show_weights {
			ctx.set_fill_style_str(&format!("rgba(0, 0, 0, {})", alpha.max(0.3)));
			ctx.set_font(&format!("bold {}px sans-serif", 11.0 / k.max(0.5)));
			let _ = ctx.fill_text(&edge.weight.to_string(), (x1 + x2) / 2.0 + 3.0, (y1 + y2) / 2.0 - 4.0);
		}
	}
	let _ = ctx.set_line_dash(&js_sys::Array::new());
}

fn draw_nodes(view: &ViewState, graph: &Graph, scene: &CanvasScene, ctx: &CanvasRenderingContext2d) {
	let (has_highlight, t, k) = (
		view.has_active_highlight(),
		ease_out_cubic(view.hover.highlight_t),
		view.transform.k,
	);

	for id in view.draw_order(graph) {
		let Some(node) = graph.node(id) else {
			continue;
		};
		let (x, y) = view.project(&node.position);
		let dimmed = has_highlight && !view.is_highlighted(id);
		let alpha = (if dimmed { 1.0 - 0.6 * t } else { 1.0 }) * scene.opacity(Visual::Node(id));
		let radius = if view.hover.node == Some(id) {
			NODE_RADIUS * (1.0 + 0.3 * t)
		} else {
			NODE_RADIUS
		};

		if let Some((color, strength)) = scene.pulse(id) {
			draw_pulse(ctx, x, y, radius, color.rgb(), strength);
		}

		ctx.set_global_alpha(alpha);
		ctx.begin_path();
		let _ = ctx.arc(x, y, radius, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(&node.color.css());
		ctx.fill();
		ctx.set_stroke_style_str("#333333");
		ctx.set_line_width(1.0 / k);
		ctx.stroke();

		draw_label(ctx, id, x, y, radius, k);
		ctx.set_global_alpha(1.0);
	}
}

fn draw_pulse(ctx: &CanvasRenderingContext2d, x: f64, y: f64, radius: f64, rgb: (u8, u8, u8), strength: f64) {
	let glow = radius * (1.4 + 1.2 * (1.0 - strength));
	let Ok(gradient) = ctx.create_radial_gradient(x, y, radius * 0.5, x, y, glow) else {
		return;
	};
	let (r, g, b) = rgb;
	let _ = gradient.add_color_stop(0.0, &format!("rgba({}, {}, {}, {})", r, g, b, 0.6 * strength));
	let _ = gradient.add_color_stop(1.0, &format!("rgba({}, {}, {}, 0)", r, g, b));
	ctx.begin_path();
	let _ = ctx.arc(x, y, glow, 0.0, 2.0 * PI);
	#[allow(deprecated)]
	ctx.set_fill_style(&gradient);
	ctx.fill();
}

fn draw_label(ctx: &CanvasRenderingContext2d, id: NodeId, x: f64, y: f64, radius: f64, k: f64) {
	ctx.set_fill_style_str("#000000");
	ctx.set_font(&format!("bold {}px sans-serif", 11.0 / k.max(0.5)));
	let _ = ctx.fill_text(&id.0.to_string(), x - 3.0 / k, y - radius - 3.0 / k);
}
