use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::warn;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent, MouseEvent, WheelEvent, Window};

use super::controls::{CodePanel, KeyHelp, StatusPanel};
use super::render;
use super::scene::{CanvasScene, SignalPanel};
use super::state::{CLICK_SLOP, Hit, ViewState};
use crate::traversal::{Algorithm, Command, Mode, Session};

pub type UiSession = Session<CanvasScene, SignalPanel>;

/// The blocking notice for rejected commands.
fn alert(message: &str) {
	warn!("{}", message);
	if let Some(window) = web_sys::window() {
		let _ = window.alert_with_message(message);
	}
}

fn prompt_weight() -> Option<String> {
	web_sys::window()?
		.prompt_with_message_and_default("Enter edge weight:", "1")
		.ok()
		.flatten()
}

fn handle_click(session: &mut UiSession, hit: Hit) {
	let result = match hit {
		Hit::Node(id) => session.click_node(id, prompt_weight),
		Hit::Edge(id) => session.click_edge(id),
		Hit::Ground(position) => {
			session.click_empty(position);
			Ok(())
		}
	};
	if let Err(err) = result {
		alert(&err.to_string());
	}
}

fn pointer(canvas_ref: NodeRef<leptos::html::Canvas>, ev: &MouseEvent) -> Option<(f64, f64)> {
	let canvas: HtmlCanvasElement = canvas_ref.get()?.into();
	let rect = canvas.get_bounding_client_rect();
	Some((
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	))
}

#[component]
pub fn Walkthrough(
	#[prop(default = true)] fullscreen: bool,
	#[prop(default = None)] width: Option<f64>,
	#[prop(default = None)] height: Option<f64>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let panel = SignalPanel::new();
	let show_code = RwSignal::new(true);
	let session: Rc<RefCell<UiSession>> =
		Rc::new(RefCell::new(Session::new(CanvasScene::default(), panel)));
	let view_state: Rc<RefCell<Option<ViewState>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let keydown_cb: Rc<RefCell<Option<Closure<dyn FnMut(KeyboardEvent)>>>> =
		Rc::new(RefCell::new(None));
	let (session_init, view_init, animate_init, resize_cb_init, keydown_cb_init) = (
		session.clone(),
		view_state.clone(),
		animate.clone(),
		resize_cb.clone(),
		keydown_cb.clone(),
	);

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			return;
		};
		let window_size = |win: &Window| {
			(
				win.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(800.0),
				win.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(600.0),
			)
		};

		let (w, h) = if fullscreen {
			window_size(&window)
		} else {
			(
				width.unwrap_or_else(|| {
					canvas
						.parent_element()
						.map(|p| p.client_width() as f64)
						.unwrap_or(800.0)
				}),
				height.unwrap_or_else(|| {
					canvas
						.parent_element()
						.map(|p| p.client_height() as f64)
						.unwrap_or(600.0)
				}),
			)
		};
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let Some(ctx) = canvas
			.get_context("2d")
			.ok()
			.flatten()
			.and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
		else {
			warn!("Canvas 2d context unavailable");
			return;
		};
		*view_init.borrow_mut() = Some(ViewState::new(w, h));

		if fullscreen {
			let (view_resize, canvas_resize) = (view_init.clone(), canvas.clone());
			*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
				let Some(win) = web_sys::window() else {
					return;
				};
				let (nw, nh) = window_size(&win);
				canvas_resize.set_width(nw as u32);
				canvas_resize.set_height(nh as u32);
				if let Some(ref mut v) = *view_resize.borrow_mut() {
					v.resize(nw, nh);
				}
			}));
			if let Some(ref cb) = *resize_cb_init.borrow() {
				let _ =
					window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
			}
		}

		let session_keys = session_init.clone();
		*keydown_cb_init.borrow_mut() = Some(Closure::new(move |ev: KeyboardEvent| {
			let Some(command) = Command::from_key(&ev.key()) else {
				return;
			};
			if command == Command::ExecuteCodeLine {
				ev.prevent_default();
			}
			session_keys.borrow_mut().dispatch(command);
		}));
		if let Some(ref cb) = *keydown_cb_init.borrow() {
			let _ = window.add_event_listener_with_callback("keydown", cb.as_ref().unchecked_ref());
		}

		let (session_anim, view_anim, animate_inner) =
			(session_init.clone(), view_init.clone(), animate_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			// Skip the frame if an input handler (e.g. a blocking prompt) holds the state.
			if let (Ok(mut v), Ok(mut s)) = (view_anim.try_borrow_mut(), session_anim.try_borrow_mut()) {
				if let Some(ref mut v) = *v {
					v.tick(0.016);
					s.scene_mut().tick(0.016);
					render::render(v, s.graph(), s.scene(), &ctx);
				}
			}
			if let (Some(cb), Some(win)) = (animate_inner.borrow().as_ref(), web_sys::window()) {
				let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	let view_md = view_state.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let Some((x, y)) = pointer(canvas_ref, &ev) else {
			return;
		};
		if let Some(ref mut v) = *view_md.borrow_mut() {
			v.pan.active = true;
			v.pan.moved = false;
			v.pan.start_x = x;
			v.pan.start_y = y;
			v.pan.transform_start_x = v.transform.x;
			v.pan.transform_start_y = v.transform.y;
		}
	};

	let (view_mm, session_mm) = (view_state.clone(), session.clone());
	let on_mousemove = move |ev: MouseEvent| {
		let Some((x, y)) = pointer(canvas_ref, &ev) else {
			return;
		};
		if let Some(ref mut v) = *view_mm.borrow_mut() {
			if v.pan.active {
				let (dx, dy) = (x - v.pan.start_x, y - v.pan.start_y);
				if dx.hypot(dy) > CLICK_SLOP {
					v.pan.moved = true;
				}
				if v.pan.moved {
					v.transform.x = v.pan.transform_start_x + dx;
					v.transform.y = v.pan.transform_start_y + dy;
				}
			} else {
				let s = session_mm.borrow();
				let hovered = v.node_at_position(s.graph(), x, y);
				v.set_hover(s.graph(), hovered);
			}
		}
	};

	let (view_mu, session_mu) = (view_state.clone(), session.clone());
	let on_mouseup = move |ev: MouseEvent| {
		let Some((x, y)) = pointer(canvas_ref, &ev) else {
			return;
		};
		let hit = match *view_mu.borrow_mut() {
			Some(ref mut v) => {
				let clicked = v.pan.active && !v.pan.moved;
				v.pan.active = false;
				clicked.then(|| v.hit(session_mu.borrow().graph(), x, y))
			}
			None => None,
		};
		// The weight prompt blocks, so no view borrow is held across it.
		if let Some(hit) = hit {
			handle_click(&mut session_mu.borrow_mut(), hit);
		}
	};

	let (view_ml, session_ml) = (view_state.clone(), session.clone());
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut v) = *view_ml.borrow_mut() {
			v.pan.active = false;
			v.set_hover(session_ml.borrow().graph(), None);
		}
	};

	let view_wh = view_state.clone();
	let on_wheel = move |ev: WheelEvent| {
		ev.prevent_default();
		let Some((x, y)) = pointer(canvas_ref, &ev) else {
			return;
		};
		if let Some(ref mut v) = *view_wh.borrow_mut() {
			v.zoom_at(x, y, ev.delta_y() <= 0.0);
		}
	};

	let act = {
		let session = session.clone();
		move |f: fn(&mut UiSession)| {
			let session = session.clone();
			move |_: MouseEvent| f(&mut session.borrow_mut())
		}
	};

	let mode_buttons = Mode::ALL
		.into_iter()
		.map(|mode| {
			let session = session.clone();
			view! {
				<button
					class:active=move || panel.mode.get() == mode
					on:click=move |_| session.borrow_mut().change_mode(mode)
				>
					{mode.label()}
				</button>
			}
		})
		.collect_view();

	let session_select = session.clone();
	let on_select = move |ev: web_sys::Event| match event_target_value(&ev).parse::<Algorithm>() {
		Ok(algorithm) => session_select.borrow_mut().select_algorithm(algorithm),
		Err(err) => alert(&err.to_string()),
	};

	let view_weights = view_state.clone();
	let on_weights = move |ev: web_sys::Event| {
		if let Some(ref mut v) = *view_weights.borrow_mut() {
			v.show_weights = event_target_checked(&ev);
		}
	};
	let view_grid = view_state.clone();
	let on_grid = move |ev: web_sys::Event| {
		if let Some(ref mut v) = *view_grid.borrow_mut() {
			v.show_grid = event_target_checked(&ev);
		}
	};

	view! {
		<div class="walkthrough">
			<canvas
				node_ref=canvas_ref
				class="walkthrough-canvas"
				on:mousedown=on_mousedown
				on:mousemove=on_mousemove
				on:mouseup=on_mouseup
				on:mouseleave=on_mouseleave
				on:wheel=on_wheel
				style:display="block"
				style:cursor=move || if panel.mode.get() == Mode::AddNode { "crosshair" } else { "pointer" }
			/>
			<div class="ui">
				<div class="modes">{mode_buttons}</div>
				<div class="generate">
					<button on:click=act(|s| s.generate_random(js_sys::Date::now() as u64))>"Random Graph"</button>
					<button on:click=act(|s| s.generate_grid(js_sys::Date::now() as u64))>"Grid Graph"</button>
					<button on:click=act(|s| s.reset_graph())>"Reset Graph"</button>
				</div>
				<div class="run">
					<select on:change=on_select>
						{Algorithm::ALL
							.into_iter()
							.map(|a| view! { <option value=a.key()>{a.label()}</option> })
							.collect_view()}
					</select>
					<button on:click=act(|s| {
						if let Err(err) = s.run() {
							alert(&err.to_string());
						}
					})>"Start"</button>
					<button on:click=act(|s| s.reset_traversal())>"Reset Traversal"</button>
				</div>
				<div class="playback">
					<button on:click=act(|s| {
						s.previous_step();
					})>"Previous"</button>
					<button on:click=act(|s| {
						s.next_step();
					})>"Next"</button>
					<button on:click=act(|s| s.execute_current_code_line())>"Execute Line"</button>
					<button on:click=act(|s| s.finish_algorithm())>"Finish"</button>
				</div>
				<div class="toggles">
					<label><input type="checkbox" on:change=on_weights />" Edge weights"</label>
					<label><input type="checkbox" prop:checked=true on:change=on_grid />" Grid"</label>
					<label>
						<input
							type="checkbox"
							prop:checked=true
							on:change=move |ev| show_code.set(event_target_checked(&ev))
						/>
						" Algorithm code"
					</label>
				</div>
				<StatusPanel panel=panel />
				<KeyHelp />
			</div>
			<CodePanel panel=panel visible=show_code />
		</div>
	}
}
