use leptos::prelude::*;

use crate::components::footer::Footer;
use crate::components::hero::Hero;
use crate::components::skill_card::SkillCard;
use crate::components::social_links::SocialLinks;
use crate::components::timeline::AchievementTimeline;
use crate::content::SKILLS;

/// Dark gradient backdrop applied to `<body>` while the portfolio is shown.
const BODY_CLASS: &str = "portfolio-body";

fn set_body_class(enabled: bool) {
	let Some(body) = web_sys::window()
		.and_then(|w| w.document())
		.and_then(|d| d.body())
	else {
		return;
	};
	let classes = body.class_list();
	let _ = if enabled {
		classes.add_1(BODY_CLASS)
	} else {
		classes.remove_1(BODY_CLASS)
	};
}

/// The portfolio: hero, skills, achievements, contact and footer.
#[component]
pub fn Home() -> impl IntoView {
	Effect::new(move |_| set_body_class(true));
	on_cleanup(|| set_body_class(false));

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<div class="portfolio">
				<Hero />

				<section id="skills" class="section">
					<div class="section-inner">
						<div class="section-heading">
							<h2 class="gradient-text">"My Skills"</h2>
							<p>"Specialized in machine learning and artificial intelligence"</p>
						</div>
						<div class="skills-grid">
							{SKILLS
								.iter()
								.map(|skill| view! { <SkillCard skill=skill /> })
								.collect_view()}
						</div>
					</div>
				</section>

				<section id="achievements" class="section section-light">
					<div class="section-inner">
						<div class="section-heading">
							<h2 class="gradient-text">"Achievements"</h2>
							<p>"Key milestones on my journey"</p>
						</div>
						<AchievementTimeline />
					</div>
				</section>

				<SocialLinks />
				<Footer />
			</div>
		</ErrorBoundary>
	}
}
