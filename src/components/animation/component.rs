use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{debug, warn};
use web_sys::HtmlCanvasElement;

use super::driver::{Animation, RenderLoop};
use super::error::CanvasError;
use super::surface::{self, ResizeListener, SurfaceHeight};
use super::types::SceneKind;

/// Everything a mounted canvas keeps alive; dropping it stops the loop and detaches the listener.
struct MountedCanvas {
	render_loop: RenderLoop,
	_resize: ResizeListener,
}

impl MountedCanvas {
	fn mount(
		canvas: HtmlCanvasElement,
		kind: SceneKind,
		height: SurfaceHeight,
		delay_ms: u32,
	) -> Result<Self, CanvasError> {
		let ctx = surface::context_2d(&canvas)?;
		let size = surface::measure(&canvas, height);
		surface::apply(&canvas, &size);

		let seed = (js_sys::Math::random() * u64::MAX as f64) as u64;
		let animation = Rc::new(RefCell::new(Animation::new(
			kind,
			size,
			seed,
			f64::from(delay_ms) / 1000.0,
		)));

		let (anim_resize, canvas_resize) = (animation.clone(), canvas.clone());
		let resize = ResizeListener::attach(move || {
			let size = surface::measure(&canvas_resize, height);
			surface::apply(&canvas_resize, &size);
			if let Ok(mut animation) = anim_resize.try_borrow_mut() {
				animation.resize(size);
			}
		})?;

		let render_loop = RenderLoop::start(animation, ctx)?;
		debug!(
			"{kind:?} animation mounted at {}x{} (ratio {})",
			size.width, size.height, size.pixel_ratio
		);
		Ok(Self {
			render_loop,
			_resize: resize,
		})
	}
}

/// A `<canvas>` running one of the decorative scenes for as long as it is mounted.
///
/// Without a 2D context the canvas simply stays blank.
#[component]
pub fn AnimatedCanvas(
	kind: SceneKind,
	#[prop(default = SurfaceHeight::Container)] height: SurfaceHeight,
	/// Milliseconds between the first frame and the first drawing.
	#[prop(default = 0)]
	delay_ms: u32,
	#[prop(into, default = String::new())] class: String,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let mounted = StoredValue::new_local(None::<MountedCanvas>);

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		mounted.update_value(|slot| drop(slot.take()));

		match MountedCanvas::mount(canvas, kind, height, delay_ms) {
			Ok(m) => mounted.set_value(Some(m)),
			Err(err) => warn!("{kind:?} animation disabled: {err}"),
		}
	});

	on_cleanup(move || {
		mounted.update_value(|slot| {
			if let Some(m) = slot.take() {
				debug!(
					"{kind:?} animation torn down (frame pending: {})",
					m.render_loop.is_scheduled()
				);
				m.render_loop.stop();
			}
		});
	});

	let style = match height {
		SurfaceHeight::Container => "display: block; width: 100%; height: 100%;".to_string(),
		SurfaceHeight::Fixed(px) => format!("display: block; width: 100%; height: {px}px;"),
	};

	view! { <canvas node_ref=canvas_ref class=class style=style /> }
}
