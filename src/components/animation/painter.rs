use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::surface::SurfaceSize;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAlign {
	Left,
	Center,
}

impl TextAlign {
	fn as_str(self) -> &'static str {
		match self {
			TextAlign::Left => "left",
			TextAlign::Center => "center",
		}
	}
}

/// The drawing operations the scenes need from a 2D surface.
///
/// Coordinates are CSS pixels; implementations handle the device pixel ratio in [`Painter::clear`].
pub trait Painter {
	fn clear(&mut self, size: &SurfaceSize);
	fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: &str);
	fn stroke_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: &str, line_width: f64);
	fn line(&mut self, from: (f64, f64), to: (f64, f64), color: &str, line_width: f64);
	fn fill_circle(&mut self, center: (f64, f64), radius: f64, color: &str);
	fn stroke_circle(&mut self, center: (f64, f64), radius: f64, color: &str, line_width: f64);
	/// Circle filled with a radial gradient from `inner` at the centre to `outer` at the rim.
	fn gradient_circle(&mut self, center: (f64, f64), radius: f64, inner: &str, outer: &str);
	fn text(&mut self, text: &str, at: (f64, f64), font: &str, color: &str, align: TextAlign);
	fn text_width(&mut self, text: &str, font: &str) -> f64;
}

impl Painter for CanvasRenderingContext2d {
	fn clear(&mut self, size: &SurfaceSize) {
		let ratio = size.pixel_ratio;
		let _ = self.set_transform(ratio, 0.0, 0.0, ratio, 0.0, 0.0);
		self.clear_rect(0.0, 0.0, size.width, size.height);
	}

	fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: &str) {
		self.set_fill_style_str(color);
		CanvasRenderingContext2d::fill_rect(self, x, y, w, h);
	}

	fn stroke_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: &str, line_width: f64) {
		self.set_stroke_style_str(color);
		self.set_line_width(line_width);
		CanvasRenderingContext2d::stroke_rect(self, x, y, w, h);
	}

	fn line(&mut self, from: (f64, f64), to: (f64, f64), color: &str, line_width: f64) {
		self.begin_path();
		self.move_to(from.0, from.1);
		self.line_to(to.0, to.1);
		self.set_stroke_style_str(color);
		self.set_line_width(line_width);
		self.stroke();
	}

	fn fill_circle(&mut self, center: (f64, f64), radius: f64, color: &str) {
		self.begin_path();
		let _ = self.arc(center.0, center.1, radius, 0.0, 2.0 * PI);
		self.set_fill_style_str(color);
		self.fill();
	}

	fn stroke_circle(&mut self, center: (f64, f64), radius: f64, color: &str, line_width: f64) {
		self.begin_path();
		let _ = self.arc(center.0, center.1, radius, 0.0, 2.0 * PI);
		self.set_stroke_style_str(color);
		self.set_line_width(line_width);
		self.stroke();
	}

	fn gradient_circle(&mut self, center: (f64, f64), radius: f64, inner: &str, outer: &str) {
		let (x, y) = center;
		let Ok(gradient) = self.create_radial_gradient(x, y, 0.0, x, y, radius) else {
			Painter::fill_circle(self, center, radius, outer);
			return;
		};
		let _ = gradient.add_color_stop(0.0, inner);
		let _ = gradient.add_color_stop(1.0, outer);
		self.begin_path();
		let _ = self.arc(x, y, radius, 0.0, 2.0 * PI);
		#[allow(deprecated)]
		self.set_fill_style(&gradient);
		self.fill();
	}

	fn text(&mut self, text: &str, at: (f64, f64), font: &str, color: &str, align: TextAlign) {
		self.set_font(font);
		self.set_text_align(align.as_str());
		self.set_fill_style_str(color);
		let _ = self.fill_text(text, at.0, at.1);
	}

	fn text_width(&mut self, text: &str, font: &str) -> f64 {
		self.set_font(font);
		self.measure_text(text).map(|m| m.width()).unwrap_or(0.0)
	}
}

#[cfg(test)]
pub(crate) mod recording {
	use super::*;

	/// One recorded drawing operation, reduced to what the tests inspect.
	#[derive(Clone, Debug, PartialEq)]
	pub enum DrawCall {
		Clear,
		Rect { color: String },
		Line { color: String },
		Circle { color: String },
		Text { text: String, color: String },
	}

	/// Painter that records calls instead of drawing; every glyph is 7px wide.
	#[derive(Default)]
	pub struct RecordingPainter {
		pub calls: Vec<DrawCall>,
	}

	impl RecordingPainter {
		pub fn texts(&self) -> Vec<(String, String)> {
			self.calls
				.iter()
				.filter_map(|call| match call {
					DrawCall::Text { text, color } => Some((text.clone(), color.clone())),
					_ => None,
				})
				.collect()
		}
	}

	impl Painter for RecordingPainter {
		fn clear(&mut self, _: &SurfaceSize) {
			self.calls.push(DrawCall::Clear);
		}

		fn fill_rect(&mut self, _: f64, _: f64, _: f64, _: f64, color: &str) {
			self.calls.push(DrawCall::Rect { color: color.into() });
		}

		fn stroke_rect(&mut self, _: f64, _: f64, _: f64, _: f64, color: &str, _: f64) {
			self.calls.push(DrawCall::Rect { color: color.into() });
		}

		fn line(&mut self, _: (f64, f64), _: (f64, f64), color: &str, _: f64) {
			self.calls.push(DrawCall::Line { color: color.into() });
		}

		fn fill_circle(&mut self, _: (f64, f64), _: f64, color: &str) {
			self.calls.push(DrawCall::Circle { color: color.into() });
		}

		fn stroke_circle(&mut self, _: (f64, f64), _: f64, color: &str, _: f64) {
			self.calls.push(DrawCall::Circle { color: color.into() });
		}

		fn gradient_circle(&mut self, _: (f64, f64), _: f64, _: &str, outer: &str) {
			self.calls.push(DrawCall::Circle { color: outer.into() });
		}

		fn text(&mut self, text: &str, _: (f64, f64), _: &str, color: &str, _: TextAlign) {
			self.calls.push(DrawCall::Text {
				text: text.into(),
				color: color.into(),
			});
		}

		fn text_width(&mut self, text: &str, _: &str) -> f64 {
			text.chars().count() as f64 * 7.0
		}
	}
}
