use rand::Rng;

use super::types::{Connection, Node, clamp_within};

/// Horizontal inset of the outermost layers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Inset {
	Pixels(f64),
	Fraction(f64),
}

impl Inset {
	fn resolve(self, extent: f64) -> f64 {
		match self {
			Inset::Pixels(px) => px,
			Inset::Fraction(f) => extent * f,
		}
	}
}

/// Shape of a layered network, shared by the hero banner and the skill card.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NetworkLayout {
	pub layers: &'static [usize],
	pub inset_x: Inset,
	/// Vertical space kept free around the tallest column.
	pub margin_y: f64,
	/// Upper bound on the distance between two nodes of a column.
	pub node_pitch: f64,
	pub radius: f64,
}

pub const HERO_LAYOUT: NetworkLayout = NetworkLayout {
	layers: &[4, 6, 6, 2],
	inset_x: Inset::Pixels(80.0),
	margin_y: 100.0,
	node_pitch: 50.0,
	radius: 8.0,
};

pub const CARD_LAYOUT: NetworkLayout = NetworkLayout {
	layers: &[4, 6, 2],
	inset_x: Inset::Fraction(0.2),
	margin_y: 20.0,
	node_pitch: 24.0,
	radius: 5.0,
};

impl NetworkLayout {
	pub fn node_count(&self) -> usize {
		self.layers.iter().sum()
	}

	pub fn connection_count(&self) -> usize {
		self.layers.windows(2).map(|pair| pair[0] * pair[1]).sum()
	}

	/// Horizontal position of a layer; layers are spread evenly between the insets.
	pub fn layer_x(&self, layer: usize, width: f64) -> f64 {
		let count = self.layers.len();
		if count <= 1 {
			return width / 2.0;
		}
		let inset = self.inset_x.resolve(width);
		let step = (width - inset * 2.0) / (count - 1) as f64;
		clamp_within(inset + layer as f64 * step, 0.0, width)
	}

	/// Vertical position of node `index` in a column of `count` nodes.
	pub fn column_y(&self, count: usize, index: usize, height: f64) -> f64 {
		if count <= 1 {
			return height / 2.0;
		}
		let available = (height - self.margin_y)
			.min(count as f64 * self.node_pitch)
			.max(0.0);
		let start = (height - available) / 2.0;
		let spacing = available / (count - 1) as f64;
		clamp_within(start + index as f64 * spacing, 0.0, height)
	}

	/// Lays out every node and connects each pair of adjacent layers completely.
	pub fn build<R: Rng>(
		&self,
		width: f64,
		height: f64,
		rng: &mut R,
	) -> (Vec<Node>, Vec<Connection>) {
		let mut nodes = Vec::with_capacity(self.node_count());
		let mut starts = Vec::with_capacity(self.layers.len());

		for (layer, &count) in self.layers.iter().enumerate() {
			starts.push(nodes.len());
			let x = self.layer_x(layer, width);
			for index in 0..count {
				nodes.push(Node {
					x,
					y: self.column_y(count, index, height),
					radius: self.radius,
					activation: rng.r#gen::<f64>(),
					layer,
					index,
				});
			}
		}

		let mut connections = Vec::with_capacity(self.connection_count());
		for (layer, pair) in self.layers.windows(2).enumerate() {
			let (from_start, to_start) = (starts[layer], starts[layer + 1]);
			for from in from_start..from_start + pair[0] {
				for to in to_start..to_start + pair[1] {
					connections.push(Connection {
						from,
						to,
						weight: rng.gen_range(-1.0..=1.0),
					});
				}
			}
		}

		(nodes, connections)
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::SmallRng;

	use super::*;

	#[test]
	fn columns_are_evenly_spaced() {
		for count in 2..=8 {
			let ys: Vec<f64> = (0..count)
				.map(|i| HERO_LAYOUT.column_y(count, i, 600.0))
				.collect();
			let step = ys[1] - ys[0];
			assert!(step >= 0.0);
			for pair in ys.windows(2) {
				assert!(pair[1] >= pair[0]);
				assert!((pair[1] - pair[0] - step).abs() < 1e-9);
			}
		}
	}

	#[test]
	fn single_node_column_is_centered() {
		assert_eq!(HERO_LAYOUT.column_y(1, 0, 600.0), 300.0);
		assert_eq!(CARD_LAYOUT.column_y(1, 0, 120.0), 60.0);
	}

	#[test]
	fn column_is_centered_on_the_surface() {
		let top = HERO_LAYOUT.column_y(4, 0, 600.0);
		let bottom = HERO_LAYOUT.column_y(4, 3, 600.0);
		assert!(((top + bottom) / 2.0 - 300.0).abs() < 1e-9);
		assert!((bottom - top - 200.0).abs() < 1e-9);
	}

	#[test]
	fn short_surface_collapses_column() {
		for i in 0..6 {
			assert_eq!(HERO_LAYOUT.column_y(6, i, 80.0), 40.0);
		}
	}

	#[test]
	fn layers_span_between_insets() {
		assert_eq!(HERO_LAYOUT.layer_x(0, 880.0), 80.0);
		assert_eq!(HERO_LAYOUT.layer_x(3, 880.0), 800.0);
		assert!((CARD_LAYOUT.layer_x(1, 300.0) - 150.0).abs() < 1e-9);
		assert!((CARD_LAYOUT.layer_x(2, 300.0) - 240.0).abs() < 1e-9);
	}

	#[test]
	fn adjacent_layers_are_fully_connected() {
		let mut rng = SmallRng::seed_from_u64(7);
		for layout in [HERO_LAYOUT, CARD_LAYOUT] {
			let (nodes, connections) = layout.build(640.0, 480.0, &mut rng);
			assert_eq!(nodes.len(), layout.node_count());
			assert_eq!(connections.len(), layout.connection_count());

			for pair in 0..layout.layers.len() - 1 {
				let between = connections
					.iter()
					.filter(|c| nodes[c.from].layer == pair && nodes[c.to].layer == pair + 1)
					.count();
				assert_eq!(between, layout.layers[pair] * layout.layers[pair + 1]);
			}
			for c in &connections {
				assert_eq!(nodes[c.to].layer, nodes[c.from].layer + 1);
				assert!((-1.0..=1.0).contains(&c.weight));
			}
		}
	}

	#[test]
	fn nodes_stay_on_tiny_surfaces() {
		let mut rng = SmallRng::seed_from_u64(1);
		let (nodes, _) = HERO_LAYOUT.build(50.0, 30.0, &mut rng);
		for node in &nodes {
			assert!((0.0..=50.0).contains(&node.x));
			assert!((0.0..=30.0).contains(&node.y));
			assert!((0.0..=1.0).contains(&node.activation));
		}
	}
}
