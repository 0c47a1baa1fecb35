//! Leptos component wrapping the particle backdrop canvas.
//!
//! The component creates a viewport-sized canvas pinned behind the page and
//! registers window listeners for resize and pointer movement. Frames run via
//! `requestAnimationFrame`; each frame asks the [`AnimationLoop`] to draw and
//! reschedules only while the loop is running.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{error, info, warn};
use rand::rngs::ThreadRng;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, Window};

use super::animation::AnimationLoop;
use super::types::CanvasDimensions;
use crate::error::{Error, Result};

type SharedLoop = Rc<RefCell<Option<AnimationLoop<ThreadRng>>>>;
type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Window listeners kept alive for as long as the component is mounted.
#[allow(
	dead_code,
	reason = "fields are only held so the JS callbacks are not dropped"
)]
struct Listeners {
	resize: Closure<dyn FnMut()>,
	pointer_move: Closure<dyn FnMut(MouseEvent)>,
	pointer_leave: Closure<dyn FnMut(MouseEvent)>,
	frame: FrameCallback,
}

/// Renders the animated particle field as a full-viewport page background.
///
/// The canvas ignores pointer events so page content stays interactive;
/// pointer tracking is done on the window instead.
#[component]
pub fn BackgroundCanvas(#[prop(default = "interactive-bg")] id: &'static str) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let animation: SharedLoop = Rc::new(RefCell::new(None));
	let listeners: Rc<RefCell<Option<Listeners>>> = Rc::new(RefCell::new(None));

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if listeners.borrow().is_some() {
			return;
		}

		match start(canvas, &animation) {
			Ok(l) => *listeners.borrow_mut() = Some(l),
			Err(e) => error!("particle-backdrop: failed to start animation: {}", e),
		}
	});

	view! {
		<canvas
			node_ref=canvas_ref
			id=id
			class="particle-backdrop-canvas"
			style="position: fixed; inset: 0; display: block; pointer-events: none; z-index: -1;"
		/>
	}
}

fn viewport_size(window: &Window) -> Result<CanvasDimensions> {
	let width = window.inner_width()?.as_f64().unwrap_or(0.0);
	let height = window.inner_height()?.as_f64().unwrap_or(0.0);
	Ok(CanvasDimensions::new(width, height))
}

fn fit_canvas(canvas: &HtmlCanvasElement, size: CanvasDimensions) {
	canvas.set_width(size.width as u32);
	canvas.set_height(size.height as u32);
}

fn request_frame(window: &Window, callback: &Closure<dyn FnMut()>) -> Result<()> {
	window.request_animation_frame(callback.as_ref().unchecked_ref::<js_sys::Function>())?;
	Ok(())
}

fn start(canvas: HtmlCanvasElement, animation: &SharedLoop) -> Result<Listeners> {
	let window = web_sys::window().ok_or(Error::NoWindow)?;
	let size = viewport_size(&window)?;
	fit_canvas(&canvas, size);

	let mut ctx: CanvasRenderingContext2d = canvas
		.get_context("2d")?
		.ok_or(Error::NoContext)?
		.dyn_into()
		.map_err(|_| Error::NoContext)?;

	*animation.borrow_mut() = Some(AnimationLoop::new(size, rand::thread_rng()));
	info!(
		"particle-backdrop: started on {}x{} canvas",
		size.width, size.height
	);

	let anim_resize = animation.clone();
	let resize = Closure::<dyn FnMut()>::new(move || {
		let Some(win) = web_sys::window() else {
			return;
		};
		match viewport_size(&win) {
			Ok(size) => {
				fit_canvas(&canvas, size);
				if let Some(ref mut a) = *anim_resize.borrow_mut() {
					a.on_resize(size);
				}
			}
			Err(e) => warn!("particle-backdrop: could not read viewport size: {}", e),
		}
	});
	window.add_event_listener_with_callback("resize", resize.as_ref().unchecked_ref())?;

	let anim_move = animation.clone();
	let pointer_move = Closure::<dyn FnMut(MouseEvent)>::new(move |ev: MouseEvent| {
		if let Some(ref mut a) = *anim_move.borrow_mut() {
			a.on_pointer_move(ev.client_x() as f64, ev.client_y() as f64);
		}
	});
	window.add_event_listener_with_callback("mousemove", pointer_move.as_ref().unchecked_ref())?;

	let anim_leave = animation.clone();
	let pointer_leave = Closure::<dyn FnMut(MouseEvent)>::new(move |_: MouseEvent| {
		if let Some(ref mut a) = *anim_leave.borrow_mut() {
			a.on_pointer_leave();
		}
	});
	window.add_event_listener_with_callback("mouseout", pointer_leave.as_ref().unchecked_ref())?;

	let frame: FrameCallback = Rc::new(RefCell::new(None));
	let (anim_frame, frame_inner) = (animation.clone(), frame.clone());
	*frame.borrow_mut() = Some(Closure::new(move || {
		let keep_going = match *anim_frame.borrow_mut() {
			Some(ref mut a) => a.tick(&mut ctx),
			None => false,
		};
		if !keep_going {
			info!("particle-backdrop: animation stopped");
			return;
		}
		let Some(win) = web_sys::window() else {
			return;
		};
		if let Some(ref cb) = *frame_inner.borrow() {
			if let Err(e) = request_frame(&win, cb) {
				error!("particle-backdrop: could not schedule frame: {}", e);
			}
		}
	}));
	if let Some(ref cb) = *frame.borrow() {
		request_frame(&window, cb)?;
	}

	Ok(Listeners {
		resize,
		pointer_move,
		pointer_leave,
		frame,
	})
}
