//! WASM entry point: Trunk builds this binary and it mounts the app onto `<body>`.

use leptos::prelude::*;
use neural_portfolio::{App, init_logging};

fn main() {
	init_logging();
	mount_to_body(|| {
		view! { <App /> }
	})
}
