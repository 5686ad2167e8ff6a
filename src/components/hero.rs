use leptos::prelude::*;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use super::animation::{AnimatedCanvas, SceneKind};
use crate::content::PROFILE;

/// Smoothly scrolls the element with `id` into view, if there is one.
pub fn scroll_to(id: &str) {
	let Some(element) = web_sys::window()
		.and_then(|w| w.document())
		.and_then(|d| d.get_element_by_id(id))
	else {
		return;
	};
	let options = ScrollIntoViewOptions::new();
	options.set_behavior(ScrollBehavior::Smooth);
	element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Full-screen banner over the network animation.
#[component]
pub fn Hero() -> impl IntoView {
	view! {
		<header class="hero">
			<div class="hero-backdrop">
				<AnimatedCanvas kind=SceneKind::Hero />
			</div>
			<div class="hero-content animate-fade-in">
				<h1>"Hi, I'm " <span class="gradient-text">{PROFILE.name}</span></h1>
				<p class="hero-tagline">{PROFILE.tagline}</p>
				<div class="hero-actions">
					<button class="button button-primary" on:click=move |_| scroll_to("skills")>
						"View My Skills"
					</button>
					<a class="button button-outline" href=PROFILE.resume_url download="">
						"⬇ Download Resume"
					</a>
				</div>
				<div class="scroll-hint animate-float" on:click=move |_| scroll_to("skills")>
					"↓"
				</div>
			</div>
		</header>
	}
}
