use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use super::error::CanvasError;

/// Drawing surface extent in CSS pixels plus the device pixel ratio.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceSize {
	pub width: f64,
	pub height: f64,
	pub pixel_ratio: f64,
}

impl SurfaceSize {
	pub fn new(width: f64, height: f64, pixel_ratio: f64) -> Self {
		let extent = |v: f64| if v.is_finite() && v > 0.0 { v } else { 0.0 };
		Self {
			width: extent(width),
			height: extent(height),
			pixel_ratio: if pixel_ratio.is_finite() && pixel_ratio > 0.0 {
				pixel_ratio
			} else {
				1.0
			},
		}
	}

	pub fn backing_width(&self) -> u32 {
		(self.width * self.pixel_ratio).ceil() as u32
	}

	pub fn backing_height(&self) -> u32 {
		(self.height * self.pixel_ratio).ceil() as u32
	}

	pub fn is_empty(&self) -> bool {
		self.width == 0.0 || self.height == 0.0
	}
}

/// How tall a canvas is laid out.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum SurfaceHeight {
	/// Whatever height CSS gives the canvas.
	#[default]
	Container,
	Fixed(f64),
}

/// Reads the canvas's laid-out size and the window's pixel ratio.
pub fn measure(canvas: &HtmlCanvasElement, height: SurfaceHeight) -> SurfaceSize {
	let ratio = web_sys::window()
		.map(|w| w.device_pixel_ratio())
		.unwrap_or(1.0);
	let h = match height {
		SurfaceHeight::Container => canvas.offset_height() as f64,
		SurfaceHeight::Fixed(px) => px,
	};
	SurfaceSize::new(canvas.offset_width() as f64, h, ratio)
}

/// Sizes the backing store so one CSS pixel maps to `pixel_ratio` device pixels.
pub fn apply(canvas: &HtmlCanvasElement, size: &SurfaceSize) {
	canvas.set_width(size.backing_width());
	canvas.set_height(size.backing_height());
}

pub fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, CanvasError> {
	canvas
		.get_context("2d")
		.map_err(|e| CanvasError::ContextUnavailable(format!("{e:?}")))?
		.ok_or_else(|| CanvasError::ContextUnavailable("no 2d context".into()))?
		.dyn_into::<CanvasRenderingContext2d>()
		.map_err(|_| CanvasError::ContextUnavailable("unexpected context type".into()))
}

/// A window `resize` listener that is removed again on drop.
pub struct ResizeListener {
	window: Window,
	callback: Closure<dyn FnMut()>,
}

impl ResizeListener {
	pub fn attach(on_resize: impl FnMut() + 'static) -> Result<Self, CanvasError> {
		let window = web_sys::window().ok_or(CanvasError::WindowUnavailable)?;
		let callback = Closure::<dyn FnMut()>::new(on_resize);
		window
			.add_event_listener_with_callback("resize", callback.as_ref().unchecked_ref())
			.map_err(|e| CanvasError::ListenerFailed(format!("{e:?}")))?;
		Ok(Self { window, callback })
	}
}

impl Drop for ResizeListener {
	fn drop(&mut self) {
		let _ = self
			.window
			.remove_event_listener_with_callback("resize", self.callback.as_ref().unchecked_ref());
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn backing_store_scales_with_ratio() {
		let size = SurfaceSize::new(300.5, 120.0, 2.0);
		assert_eq!(size.backing_width(), 601);
		assert_eq!(size.backing_height(), 240);
	}

	#[test]
	fn invalid_extents_are_sanitised() {
		let size = SurfaceSize::new(f64::NAN, -4.0, 0.0);
		assert_eq!(size, SurfaceSize::new(0.0, 0.0, 1.0));
		assert!(size.is_empty());
		assert_eq!(size.backing_width(), 0);
	}
}

#[cfg(test)]
#[cfg(target_arch = "wasm32")]
mod browser_tests {
	use std::cell::Cell;
	use std::rc::Rc;

	use wasm_bindgen_test::*;
	use web_sys::Event;

	use super::*;

	wasm_bindgen_test_configure!(run_in_browser);

	fn fire_resize() -> Result<(), JsValue> {
		let window = web_sys::window().ok_or("no window")?;
		window.dispatch_event(&Event::new("resize")?)?;
		Ok(())
	}

	#[wasm_bindgen_test]
	fn listener_fires_until_dropped() -> Result<(), JsValue> {
		let hits = Rc::new(Cell::new(0));
		let counter = hits.clone();
		let listener = ResizeListener::attach(move || counter.set(counter.get() + 1))
			.map_err(|e| e.to_string())?;

		fire_resize()?;
		assert_eq!(hits.get(), 1);

		drop(listener);
		fire_resize()?;
		assert_eq!(hits.get(), 1);
		Ok(())
	}
}
