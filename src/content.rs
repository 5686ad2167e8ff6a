//! The portfolio's text: who, what they do, and where to find them.

use crate::components::animation::SceneKind;

pub struct Profile {
	pub name: &'static str,
	pub tagline: &'static str,
	pub email: &'static str,
	pub resume_url: &'static str,
}

pub const PROFILE: Profile = Profile {
	name: "Kotresha Chavadihindal",
	tagline: "Machine Learning Enthusiast & Tech Innovator",
	email: "your-email@example.com",
	resume_url: "#",
};

pub struct Skill {
	pub title: &'static str,
	pub glyph: &'static str,
	pub description: &'static str,
	pub scene: SceneKind,
	/// Milliseconds before the card fades in and its animation starts.
	pub delay_ms: u32,
}

pub const SKILLS: &[Skill] = &[
	Skill {
		title: "Machine Learning",
		glyph: "🧠",
		description: "Experience with various ML algorithms including classification, regression, and clustering.",
		scene: SceneKind::Clusters,
		delay_ms: 100,
	},
	Skill {
		title: "Neural Networks",
		glyph: "🕸️",
		description: "Designing and implementing neural network architectures for complex problems.",
		scene: SceneKind::Network,
		delay_ms: 300,
	},
	Skill {
		title: "Deep Learning",
		glyph: "🗄️",
		description: "Working with CNN, RNN, and Transformer models for advanced AI applications.",
		scene: SceneKind::Blocks,
		delay_ms: 500,
	},
	Skill {
		title: "Coding Knowledge",
		glyph: "💻",
		description: "Proficient in Python, TensorFlow, PyTorch, and other ML frameworks.",
		scene: SceneKind::Typewriter,
		delay_ms: 700,
	},
];

pub struct Achievement {
	pub id: u32,
	pub title: &'static str,
	pub description: &'static str,
	pub glyph: &'static str,
	pub year: &'static str,
}

pub const ACHIEVEMENTS: &[Achievement] = &[
	Achievement {
		id: 1,
		title: "Hackathon Winner",
		description: "Won at Utkarsh, demonstrating innovation and technical prowess.",
		glyph: "🏆",
		year: "2023",
	},
	Achievement {
		id: 2,
		title: "Tech & Global Summit Attendee",
		description: "Gained exposure to cutting-edge industry trends and networking opportunities.",
		glyph: "📖",
		year: "2022",
	},
	Achievement {
		id: 3,
		title: "Strong Communication Skills",
		description: "Presented research and projects at multiple academic and professional events.",
		glyph: "💬",
		year: "2022",
	},
	Achievement {
		id: 4,
		title: "Machine Learning Project Experience",
		description: "Completed internship at Subbaiah Medical College, applying ML to healthcare data.",
		glyph: "💼",
		year: "2021",
	},
	Achievement {
		id: 5,
		title: "Startup Pitch Experience",
		description: "Pitched innovative tech solution at Subjit College, Bangalore.",
		glyph: "🚀",
		year: "2020",
	},
];

pub struct SocialLink {
	pub name: &'static str,
	pub label: &'static str,
	pub url: &'static str,
	/// CSS `background` value for the button.
	pub background: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
	SocialLink {
		name: "LinkedIn",
		label: "in",
		url: "#",
		background: "#0077B5",
	},
	SocialLink {
		name: "GitHub",
		label: "GH",
		url: "#",
		background: "#333",
	},
	SocialLink {
		name: "Twitter",
		label: "X",
		url: "#",
		background: "#1DA1F2",
	},
	SocialLink {
		name: "Instagram",
		label: "IG",
		url: "#",
		background: "linear-gradient(to right, #833AB4, #FD1D1D, #FCAF45)",
	},
];
