#![cfg(target_arch = "wasm32")]

use leptos::prelude::*;
use neural_portfolio::Home;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn portfolio_mounts_every_canvas() {
	let document = web_sys::window()
		.and_then(|w| w.document())
		.expect("document available");
	let host = document.create_element("div").expect("host element");
	document
		.body()
		.expect("body available")
		.append_child(&host)
		.expect("host attached");

	let _handle = mount_to(host.clone().unchecked_into(), || view! { <Home /> });

	// One hero canvas plus one per skill card.
	let canvases = host.query_selector_all("canvas").expect("query canvases");
	assert_eq!(canvases.length(), 5);

	let items = host
		.query_selector_all(".timeline-item")
		.expect("query timeline");
	assert_eq!(items.length(), 5);
	assert!(document.get_element_by_id("skills").is_some());
}
