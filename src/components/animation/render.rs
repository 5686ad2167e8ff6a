use super::painter::{Painter, TextAlign};
use super::scene::{BlockScene, ClusterScene, NetworkScene, NetworkStyle, Scene};
use super::surface::SurfaceSize;
use super::typewriter::{self, TEXT_X, TypewriterFrame, TypewriterScene};

const NODE_FILL: &str = "#9b87f5";
const NODE_RING: &str = "#8B5CF6";
const PULSE_DOT: &str = "#7E69AB";
const ACCENT: &str = "#33C3F0";
const LABEL: &str = "#6E59A5";
const HERO_WASH: &str = "rgba(255, 255, 255, 0.02)";
const CODE_FONT: &str = "12px monospace";
const LABEL_FONT: &str = "10px Arial";

fn lerp(a: (f64, f64), b: (f64, f64), t: f64) -> (f64, f64) {
	(a.0 + (b.0 - a.0) * t, a.1 + (b.1 - a.1) * t)
}

fn violet(alpha: f64) -> String {
	format!("rgba(155, 135, 245, {})", alpha.clamp(0.0, 1.0))
}

/// Shimmer shared by the card connections: `base + 0.2·sin(2t + 10u)`.
fn shimmer(base: f64, now: f64, offset: f64) -> f64 {
	base + 0.2 * (now * 2.0 + offset * 10.0).sin()
}

/// Draws `scene` as it looks at `now` seconds. The caller clears the surface.
pub fn draw(scene: &Scene, painter: &mut impl Painter, size: &SurfaceSize, now: f64) {
	match scene {
		Scene::Network(net) => match net.style {
			NetworkStyle::Hero => draw_hero(net, painter, size, now),
			NetworkStyle::Card => draw_card_network(net, painter, now),
		},
		Scene::Clusters(clusters) => draw_clusters(clusters, painter),
		Scene::Blocks(blocks) => draw_blocks(blocks, painter, size, now),
		Scene::Typewriter(code) => draw_code(code, painter, now),
	}
}

fn draw_hero(net: &NetworkScene, painter: &mut impl Painter, size: &SurfaceSize, now: f64) {
	painter.fill_rect(0.0, 0.0, size.width, size.height, HERO_WASH);

	for conn in &net.connections {
		let (from, to) = (&net.nodes[conn.from], &net.nodes[conn.to]);
		let (a, b) = ((from.x, from.y), (to.x, to.y));

		// Only excitatory connections carry a travelling pulse.
		if conn.weight > 0.0 {
			let offset = (from.index as f64 * 0.1 + from.layer as f64 * 0.2) % 1.0;
			let phase = (now * 0.5 + offset).rem_euclid(1.0);
			painter.fill_circle(lerp(a, b, phase), 2.0, PULSE_DOT);
		}

		let strength = conn.weight.abs();
		let alpha = strength * 0.5 + 0.1;
		let color = if conn.weight > 0.0 {
			violet(alpha)
		} else {
			format!("rgba(51, 195, 240, {})", alpha)
		};
		painter.line(a, b, &color, strength * 2.0);
	}

	for node in &net.nodes {
		let center = (node.x, node.y);
		painter.gradient_circle(center, node.radius, NODE_FILL, NODE_RING);

		let period = 2.0 + node.index as f64 * 0.2 + node.layer as f64 * 0.5;
		let phase = now.rem_euclid(period) / period;
		if phase < 0.2 {
			let fade = 1.0 - phase / 0.2;
			let halo = node.radius + fade * node.radius * 2.0;
			let alpha = 0.1 * fade * (0.5 + 0.5 * node.activation);
			painter.fill_circle(center, halo, &violet(alpha));
		}
	}
}

fn draw_card_network(net: &NetworkScene, painter: &mut impl Painter, now: f64) {
	for conn in &net.connections {
		let (from, to) = (&net.nodes[conn.from], &net.nodes[conn.to]);
		let (a, b) = ((from.x, from.y), (to.x, to.y));
		let offset = (conn.from as f64 * 0.1 + to.y * 0.01) % 1.0;

		painter.line(a, b, &violet(shimmer(0.1, now, offset)), 1.0);

		let pulse = (now + offset).rem_euclid(1.0);
		if pulse < 0.3 {
			painter.fill_circle(lerp(a, b, pulse / 0.3), 2.0, NODE_RING);
		}
	}

	for node in &net.nodes {
		painter.fill_circle((node.x, node.y), node.radius, NODE_FILL);
		painter.stroke_circle((node.x, node.y), node.radius, NODE_RING, 1.0);
	}
}

fn draw_clusters(scene: &ClusterScene, painter: &mut impl Painter) {
	for point in &scene.points {
		painter.fill_circle((point.x, point.y), 3.0, scene.clusters[point.cluster].color);
	}
	for cluster in &scene.clusters {
		painter.fill_circle((cluster.x, cluster.y), 6.0, cluster.color);
		painter.stroke_circle((cluster.x, cluster.y), 6.0, "#fff", 2.0);
	}
}

const BLOCK_LINKS: usize = 5;

fn draw_blocks(scene: &BlockScene, painter: &mut impl Painter, size: &SurfaceSize, now: f64) {
	let height = size.height;
	for (i, block) in scene.blocks.iter().enumerate() {
		let y = (height - block.height) / 2.0;
		painter.fill_rect(block.x, y, block.width, block.height, &violet(0.2 + i as f64 * 0.1));
		painter.stroke_rect(block.x, y, block.width, block.height, NODE_RING, 1.0);
		painter.text(
			block.name,
			(block.x + block.width / 2.0, height - 5.0),
			LABEL_FONT,
			LABEL,
			TextAlign::Center,
		);

		let Some(next) = scene.blocks.get(i + 1) else {
			continue;
		};
		let next_y = (height - next.height) / 2.0;
		for link in 0..BLOCK_LINKS {
			let ratio = link as f64 / (BLOCK_LINKS - 1) as f64;
			let start = (block.x + block.width, y + block.height * ratio);
			let end = (next.x, next_y + next.height * ratio);
			let offset = (i as f64 * 0.1 + link as f64 * 0.05) % 1.0;

			painter.line(start, end, &violet(shimmer(0.2, now, offset)), 0.5);

			let pulse = (now + offset).rem_euclid(1.0);
			if pulse < 0.5 {
				painter.fill_circle(lerp(start, end, pulse / 0.5), 1.5, ACCENT);
			}
		}
	}
}

fn draw_code(scene: &TypewriterScene, painter: &mut impl Painter, now: f64) {
	match scene.frame_at(now) {
		TypewriterFrame::Typing {
			visible_chars,
			cursor_on,
		} => {
			let lines = scene.visible_lines(visible_chars);
			for (i, line) in lines.iter().enumerate() {
				painter.text(line, (TEXT_X, scene.line_y(i)), CODE_FONT, LABEL, TextAlign::Left);
			}
			if let (true, Some(last)) = (cursor_on, lines.last()) {
				let row = lines.len() - 1;
				let x = TEXT_X + painter.text_width(last, CODE_FONT);
				let y = scene.line_y(row) - typewriter::FONT_SIZE;
				painter.fill_rect(x, y, 2.0, typewriter::FONT_SIZE, NODE_RING);
			}
		}
		TypewriterFrame::Complete => {
			for (i, line) in scene.lines.iter().enumerate() {
				let mut x = TEXT_X;
				for span in typewriter::highlight(line) {
					painter.text(
						span.text,
						(x, scene.line_y(i)),
						CODE_FONT,
						span.class.color(),
						TextAlign::Left,
					);
					x += painter.text_width(span.text, CODE_FONT);
				}
			}
		}
	}
}
