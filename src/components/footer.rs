use leptos::prelude::*;

use crate::content::PROFILE;

#[component]
pub fn Footer() -> impl IntoView {
	let year = js_sys::Date::new_0().get_full_year();

	view! {
		<footer class="footer">
			<div class="section-inner footer-row">
				<p>{format!("© {year} {}. All rights reserved.", PROFILE.name)}</p>
				<p>"Created with ❤️ and Leptos"</p>
			</div>
		</footer>
	}
}
