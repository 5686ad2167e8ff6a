use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::{debug, warn};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Window};

use super::error::CanvasError;
use super::painter::Painter;
use super::render;
use super::scene::Scene;
use super::surface::SurfaceSize;
use super::types::SceneKind;

/// One canvas's scene plus the bookkeeping to advance it frame by frame.
pub struct Animation {
	kind: SceneKind,
	scene: Scene,
	size: SurfaceSize,
	rng: SmallRng,
	delay: f64,
	first_frame: Option<f64>,
	running: bool,
}

impl Animation {
	/// `delay` is in seconds, counted from the first frame.
	pub fn new(kind: SceneKind, size: SurfaceSize, seed: u64, delay: f64) -> Self {
		let mut rng = SmallRng::seed_from_u64(seed);
		let scene = Scene::generate(kind, &size, &mut rng);
		Self {
			kind,
			scene,
			size,
			rng,
			delay: delay.max(0.0),
			first_frame: None,
			running: true,
		}
	}

	#[cfg(test)]
	pub fn scene(&self) -> &Scene {
		&self.scene
	}

	pub fn is_running(&self) -> bool {
		self.running
	}

	/// Draws and advances the scene at `now` seconds.
	///
	/// Returns whether another frame should be scheduled.
	pub fn frame(&mut self, painter: &mut impl Painter, now: f64) -> bool {
		if !self.running {
			return false;
		}
		let started = *self.first_frame.get_or_insert(now);
		if now - started < self.delay || self.size.is_empty() {
			return true;
		}

		painter.clear(&self.size);
		render::draw(&self.scene, painter, &self.size, now);
		self.scene.update(now, &self.size, &mut self.rng);
		true
	}

	/// Throws the scene away and lays it out again for the new surface.
	pub fn resize(&mut self, size: SurfaceSize) {
		debug!(
			"regenerating {:?} scene at {}x{}",
			self.kind, size.width, size.height
		);
		self.size = size;
		self.scene = Scene::generate(self.kind, &size, &mut self.rng);
	}

	pub fn stop(&mut self) {
		self.running = false;
	}
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Drives an [`Animation`] from `requestAnimationFrame` until stopped or dropped.
pub struct RenderLoop {
	window: Window,
	animation: Rc<RefCell<Animation>>,
	request_id: Rc<Cell<Option<i32>>>,
	callback: FrameCallback,
}

impl RenderLoop {
	pub fn start(
		animation: Rc<RefCell<Animation>>,
		mut ctx: CanvasRenderingContext2d,
	) -> Result<Self, CanvasError> {
		let window = web_sys::window().ok_or(CanvasError::WindowUnavailable)?;
		let callback: FrameCallback = Rc::new(RefCell::new(None));
		let request_id = Rc::new(Cell::new(None));

		let (anim, id, next, win) = (
			animation.clone(),
			request_id.clone(),
			callback.clone(),
			window.clone(),
		);
		*callback.borrow_mut() = Some(Closure::new(move |timestamp: f64| {
			id.set(None);
			let Ok(mut animation) = anim.try_borrow_mut() else {
				return;
			};
			if !animation.frame(&mut ctx, timestamp / 1000.0) {
				return;
			}
			drop(animation);
			match schedule(&win, &next) {
				Ok(handle) => id.set(Some(handle)),
				Err(err) => warn!("{err}"),
			}
		}));

		let first = schedule(&window, &callback);
		request_id.set(Some(release_on_error(first, &callback)?));
		Ok(Self {
			window,
			animation,
			request_id,
			callback,
		})
	}

	/// Whether a frame request is currently pending.
	pub fn is_scheduled(&self) -> bool {
		self.request_id.get().is_some()
	}

	/// Cancels the pending frame and releases the callback. Safe to call repeatedly.
	pub fn stop(&self) {
		if let Ok(mut animation) = self.animation.try_borrow_mut() {
			if animation.is_running() {
				animation.stop();
			}
		}
		if let Some(handle) = self.request_id.take() {
			let _ = self.window.cancel_animation_frame(handle);
		}
		if let Ok(mut callback) = self.callback.try_borrow_mut() {
			if callback.take().is_some() {
				debug!("render loop stopped");
			}
		}
	}
}

impl Drop for RenderLoop {
	fn drop(&mut self) {
		self.stop();
	}
}

fn schedule(window: &Window, callback: &FrameCallback) -> Result<i32, CanvasError> {
	let callback = callback.borrow();
	let Some(cb) = callback.as_ref() else {
		return Err(CanvasError::RequestFailed("callback released".into()));
	};
	window
		.request_animation_frame(cb.as_ref().unchecked_ref())
		.map_err(|e| CanvasError::RequestFailed(format!("{e:?}")))
}

/// Drops the frame closure when `result` failed, breaking its reference back to `callback`.
fn release_on_error<T>(
	result: Result<T, CanvasError>,
	callback: &FrameCallback,
) -> Result<T, CanvasError> {
	if result.is_err() {
		callback.borrow_mut().take();
	}
	result
}
