use leptos::prelude::*;
use log::debug;
use wasm_bindgen::JsCast;
use web_sys::Element;

use super::reveal::{HIDDEN_CLASS, ScrollReveal};
use crate::content::ACHIEVEMENTS;

const ITEM_CLASS: &str = "timeline-item";

fn timeline_items(root: &Element) -> Vec<Element> {
	let Ok(nodes) = root.query_selector_all(&format!(".{ITEM_CLASS}")) else {
		return Vec::new();
	};
	(0..nodes.length())
		.filter_map(|i| nodes.get(i))
		.filter_map(|node| node.dyn_into::<Element>().ok())
		.collect()
}

/// Vertical list of achievements, each fading in the first time it scrolls into view.
#[component]
pub fn AchievementTimeline() -> impl IntoView {
	let timeline_ref = NodeRef::<leptos::html::Div>::new();
	let reveal = StoredValue::new_local(None::<ScrollReveal>);

	Effect::new(move |_| {
		let Some(root) = timeline_ref.get() else {
			return;
		};
		let items = timeline_items(&root);
		reveal.set_value(Some(ScrollReveal::attach(items)));
	});

	on_cleanup(move || {
		reveal.update_value(|slot| {
			if let Some(mut r) = slot.take() {
				debug!("timeline torn down with {} items unrevealed", r.pending());
				r.disconnect();
			}
		});
	});

	view! {
		<div class="timeline" node_ref=timeline_ref>
			<div class="timeline-track">
				{ACHIEVEMENTS
					.iter()
					.map(|achievement| {
						view! {
							<div
								class=format!("{ITEM_CLASS} {HIDDEN_CLASS}")
								data-achievement=achievement.id.to_string()
							>
								<div class="timeline-marker">
									<span>{achievement.glyph}</span>
								</div>
								<div class="timeline-card">
									<div class="timeline-card-heading">
										<h3>{achievement.title}</h3>
										<span class="year-badge">{achievement.year}</span>
									</div>
									<p>{achievement.description}</p>
								</div>
							</div>
						}
					})
					.collect_view()}
			</div>
		</div>
	}
}
