use leptos::prelude::*;

/// 404 - Not Found
#[component]
pub fn NotFound() -> impl IntoView {
	view! {
		<div class="not-found">
			<h1>"Page not found"</h1>
			<p>"There is nothing at this address."</p>
			<a class="button button-primary" href="/">
				"Back to the portfolio"
			</a>
		</div>
	}
}
