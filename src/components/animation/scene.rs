use rand::Rng;

use super::layout::{CARD_LAYOUT, HERO_LAYOUT, NetworkLayout};
use super::surface::SurfaceSize;
use super::typewriter::TypewriterScene;
use super::types::{Cluster, Connection, LayerBlock, Node, Point, SceneKind, clamp_within};

const CLUSTER_SEEDS: &[(f64, f64, &str)] = &[
	(0.3, 0.5, "#8B5CF6"),
	(0.7, 0.3, "#33C3F0"),
	(0.6, 0.7, "#6E59A5"),
];
const CLUSTER_POINTS: usize = 30;
/// Points scatter this share of the surface around their centroid.
const CLUSTER_SPREAD: f64 = 0.3;
const CENTROID_STEP: f64 = 0.5;
const CENTROID_MARGIN: f64 = 20.0;

/// (name, x, width, height) as fractions of the surface.
const BLOCKS: &[(&str, f64, f64, f64)] = &[
	("Input", 0.10, 0.12, 0.7),
	("Conv", 0.28, 0.12, 0.6),
	("Pool", 0.46, 0.10, 0.5),
	("FC", 0.62, 0.08, 0.4),
	("Output", 0.76, 0.06, 0.3),
];

const ACTIVATION_WAVE: f64 = 0.001;
const ACTIVATION_JITTER: f64 = 0.002;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NetworkStyle {
	Hero,
	Card,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NetworkScene {
	pub style: NetworkStyle,
	pub nodes: Vec<Node>,
	pub connections: Vec<Connection>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ClusterScene {
	pub clusters: Vec<Cluster>,
	pub points: Vec<Point>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BlockScene {
	pub blocks: Vec<LayerBlock>,
}

/// Everything one canvas draws, rebuilt from scratch whenever the surface changes size.
#[derive(Clone, Debug, PartialEq)]
pub enum Scene {
	Network(NetworkScene),
	Clusters(ClusterScene),
	Blocks(BlockScene),
	Typewriter(TypewriterScene),
}

impl Scene {
	pub fn generate<R: Rng>(kind: SceneKind, size: &SurfaceSize, rng: &mut R) -> Self {
		let (w, h) = (size.width, size.height);
		match kind {
			SceneKind::Hero => Scene::Network(NetworkScene::new(
				NetworkStyle::Hero,
				&HERO_LAYOUT,
				w,
				h,
				rng,
			)),
			SceneKind::Network => Scene::Network(NetworkScene::new(
				NetworkStyle::Card,
				&CARD_LAYOUT,
				w,
				h,
				rng,
			)),
			SceneKind::Clusters => Scene::Clusters(ClusterScene::new(w, h, rng)),
			SceneKind::Blocks => Scene::Blocks(BlockScene::new(w, h)),
			SceneKind::Typewriter => Scene::Typewriter(TypewriterScene::new(h)),
		}
	}

	/// Per-frame drift of the mutable parts of the scene.
	pub fn update<R: Rng>(&mut self, now: f64, size: &SurfaceSize, rng: &mut R) {
		match self {
			Scene::Network(net) => net.drift(now, rng),
			Scene::Clusters(clusters) => clusters.drift(size.width, size.height, rng),
			Scene::Blocks(_) | Scene::Typewriter(_) => {}
		}
	}
}

impl NetworkScene {
	fn new<R: Rng>(
		style: NetworkStyle,
		layout: &NetworkLayout,
		width: f64,
		height: f64,
		rng: &mut R,
	) -> Self {
		let (nodes, connections) = layout.build(width, height, rng);
		Self {
			style,
			nodes,
			connections,
		}
	}

	fn drift<R: Rng>(&mut self, now: f64, rng: &mut R) {
		for node in &mut self.nodes {
			let wave = (now + node.index as f64 * 5.0).sin() * ACTIVATION_WAVE;
			let jitter = rng.gen_range(-ACTIVATION_JITTER..=ACTIVATION_JITTER);
			node.activation = (node.activation + wave + jitter).clamp(0.0, 1.0);
		}
	}
}

impl ClusterScene {
	fn new<R: Rng>(width: f64, height: f64, rng: &mut R) -> Self {
		let clusters: Vec<Cluster> = CLUSTER_SEEDS
			.iter()
			.map(|&(fx, fy, color)| Cluster {
				x: width * fx,
				y: height * fy,
				color,
			})
			.collect();

		let points = (0..CLUSTER_POINTS)
			.map(|_| {
				let cluster = rng.gen_range(0..clusters.len());
				let (cx, cy) = (clusters[cluster].x, clusters[cluster].y);
				let dx = (rng.r#gen::<f64>() - 0.5) * width * CLUSTER_SPREAD;
				let dy = (rng.r#gen::<f64>() - 0.5) * height * CLUSTER_SPREAD;
				Point {
					x: clamp_within(cx + dx, 0.0, width),
					y: clamp_within(cy + dy, 0.0, height),
					cluster,
				}
			})
			.collect();

		Self { clusters, points }
	}

	fn drift<R: Rng>(&mut self, width: f64, height: f64, rng: &mut R) {
		for cluster in &mut self.clusters {
			cluster.x += (rng.r#gen::<f64>() - 0.5) * CENTROID_STEP;
			cluster.y += (rng.r#gen::<f64>() - 0.5) * CENTROID_STEP;
			cluster.x = clamp_within(cluster.x, CENTROID_MARGIN, width - CENTROID_MARGIN);
			cluster.y = clamp_within(cluster.y, CENTROID_MARGIN, height - CENTROID_MARGIN);
		}
	}
}

impl BlockScene {
	fn new(width: f64, height: f64) -> Self {
		let blocks = BLOCKS
			.iter()
			.map(|&(name, x, w, h)| LayerBlock {
				name,
				x: width * x,
				width: width * w,
				height: height * h,
			})
			.collect();
		Self { blocks }
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::SmallRng;

	use super::*;

	fn size(w: f64, h: f64) -> SurfaceSize {
		SurfaceSize::new(w, h, 1.0)
	}

	#[test]
	fn activations_stay_normalised() {
		let mut rng = SmallRng::seed_from_u64(3);
		let surface = size(900.0, 700.0);
		let mut scene = Scene::generate(SceneKind::Hero, &surface, &mut rng);
		for frame in 0..5_000 {
			scene.update(frame as f64 / 60.0, &surface, &mut rng);
		}
		let Scene::Network(net) = &scene else {
			panic!("hero should be a network");
		};
		assert!(
			net.nodes
				.iter()
				.all(|n| (0.0..=1.0).contains(&n.activation))
		);
	}

	#[test]
	fn centroids_stay_on_the_surface() {
		let mut rng = SmallRng::seed_from_u64(11);
		let surface = size(320.0, 120.0);
		let mut scene = Scene::generate(SceneKind::Clusters, &surface, &mut rng);
		for frame in 0..20_000 {
			scene.update(frame as f64 / 60.0, &surface, &mut rng);
		}
		let Scene::Clusters(clusters) = &scene else {
			panic!("expected clusters");
		};
		for c in &clusters.clusters {
			assert!((20.0..=300.0).contains(&c.x), "x = {}", c.x);
			assert!((20.0..=100.0).contains(&c.y), "y = {}", c.y);
		}
	}

	#[test]
	fn cluster_points_start_on_the_surface() {
		let mut rng = SmallRng::seed_from_u64(5);
		let surface = size(200.0, 120.0);
		let Scene::Clusters(clusters) = Scene::generate(SceneKind::Clusters, &surface, &mut rng)
		else {
			panic!("expected clusters");
		};
		assert_eq!(clusters.points.len(), CLUSTER_POINTS);
		for p in &clusters.points {
			assert!(p.cluster < clusters.clusters.len());
			assert!((0.0..=200.0).contains(&p.x));
			assert!((0.0..=120.0).contains(&p.y));
		}
	}

	#[test]
	fn tiny_surface_pins_centroids_to_centre() {
		let mut rng = SmallRng::seed_from_u64(2);
		let surface = size(30.0, 30.0);
		let mut scene = Scene::generate(SceneKind::Clusters, &surface, &mut rng);
		scene.update(0.0, &surface, &mut rng);
		let Scene::Clusters(clusters) = &scene else {
			panic!("expected clusters");
		};
		for c in &clusters.clusters {
			assert_eq!((c.x, c.y), (15.0, 15.0));
		}
	}

	#[test]
	fn regeneration_ignores_previous_scene() {
		let mut rng = SmallRng::seed_from_u64(9);
		let first = Scene::generate(SceneKind::Network, &size(300.0, 120.0), &mut rng);
		let resized = Scene::generate(SceneKind::Network, &size(520.0, 120.0), &mut rng);
		for scene in [&first, &resized] {
			let Scene::Network(net) = scene else {
				panic!("expected a network");
			};
			assert_eq!(net.style, NetworkStyle::Card);
			assert_eq!(net.nodes.len(), CARD_LAYOUT.node_count());
			assert_eq!(net.connections.len(), CARD_LAYOUT.connection_count());
		}
		assert_ne!(first, resized);
	}

	#[test]
	fn blocks_follow_surface_fractions() {
		let mut rng = SmallRng::seed_from_u64(0);
		let Scene::Blocks(scene) = Scene::generate(SceneKind::Blocks, &size(400.0, 120.0), &mut rng)
		else {
			panic!("expected blocks");
		};
		let names: Vec<&str> = scene.blocks.iter().map(|b| b.name).collect();
		assert_eq!(names, ["Input", "Conv", "Pool", "FC", "Output"]);
		assert!((scene.blocks[0].x - 40.0).abs() < 1e-9);
		assert!((scene.blocks[4].height - 36.0).abs() < 1e-9);
	}
}
