/// Which scene an animated canvas hosts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SceneKind {
	/// Full-size layered network behind the hero banner.
	Hero,
	/// Centroids drifting over their scattered points.
	Clusters,
	/// Compact three-layer network for a skill card.
	Network,
	/// Block diagram of a convolutional stack.
	Blocks,
	/// Code snippet typed out and then highlighted.
	Typewriter,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Node {
	pub x: f64,
	pub y: f64,
	pub radius: f64,
	/// Always kept within `[0, 1]`.
	pub activation: f64,
	pub layer: usize,
	pub index: usize,
}

/// Edge between two nodes of adjacent layers, by position in the scene's node list.
#[derive(Clone, Debug, PartialEq)]
pub struct Connection {
	pub from: usize,
	pub to: usize,
	pub weight: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Cluster {
	pub x: f64,
	pub y: f64,
	pub color: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Point {
	pub x: f64,
	pub y: f64,
	pub cluster: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LayerBlock {
	pub name: &'static str,
	pub x: f64,
	pub width: f64,
	pub height: f64,
}

/// Clamps `value` into `[lo, hi]`, collapsing to the midpoint when the range is empty.
pub fn clamp_within(value: f64, lo: f64, hi: f64) -> f64 {
	if lo > hi {
		return (lo + hi) / 2.0;
	}
	value.max(lo).min(hi)
}
