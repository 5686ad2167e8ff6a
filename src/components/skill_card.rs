use leptos::prelude::*;

use super::animation::{AnimatedCanvas, SurfaceHeight};
use crate::content::Skill;

const CANVAS_HEIGHT: f64 = 120.0;

#[component]
pub fn SkillCard(skill: &'static Skill) -> impl IntoView {
	let style = format!(
		"opacity: 0; animation: fade-in 0.5s {}ms forwards;",
		skill.delay_ms
	);

	view! {
		<div class="skill-card" style=style>
			<div class="skill-card-heading">
				<span class="skill-glyph" aria-hidden="true">{skill.glyph}</span>
				<h3>{skill.title}</h3>
			</div>
			<p class="skill-description">{skill.description}</p>
			<AnimatedCanvas
				kind=skill.scene
				height=SurfaceHeight::Fixed(CANVAS_HEIGHT)
				delay_ms=skill.delay_ms
				class="skill-canvas"
			/>
		</div>
	}
}
