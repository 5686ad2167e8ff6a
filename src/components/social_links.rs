use leptos::prelude::*;
use log::warn;

use crate::content::{PROFILE, SOCIAL_LINKS};

fn open_in_new_tab(url: &str) {
	let Some(window) = web_sys::window() else {
		return;
	};
	if let Err(err) = window.open_with_url_and_target_and_features(url, "_blank", "noopener,noreferrer") {
		warn!("could not open {url}: {err:?}");
	}
}

fn send_mail(address: &str) {
	let Some(window) = web_sys::window() else {
		return;
	};
	let _ = window.location().set_href(&format!("mailto:{address}"));
}

#[component]
pub fn SocialLinks() -> impl IntoView {
	view! {
		<section class="social">
			<div class="section-inner">
				<div class="section-heading">
					<h2 class="gradient-text">"Let's Connect"</h2>
					<p>"Feel free to reach out for collaborations or just a friendly chat"</p>
				</div>
				<div class="social-icons">
					{SOCIAL_LINKS
						.iter()
						.map(|link| {
							view! {
								<button
									class="social-icon"
									style=format!("background: {};", link.background)
									aria-label=format!("Visit {}", link.name)
									on:click=move |_| open_in_new_tab(link.url)
								>
									<span aria-hidden="true">{link.label}</span>
									<span class="sr-only">{link.name}</span>
								</button>
							}
						})
						.collect_view()}
				</div>
				<div class="contact">
					<button class="button button-gradient" on:click=move |_| send_mail(PROFILE.email)>
						"✉ Contact Me"
					</button>
					<p class="contact-address">{PROFILE.email}</p>
				</div>
			</div>
		</section>
	}
}
