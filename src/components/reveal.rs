//! Fire-once reveal of elements as they scroll into view.

use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
	Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

/// Class every tracked item starts with.
pub const HIDDEN_CLASS: &str = "opacity-0";
/// Class that plays the fade-in.
pub const REVEALED_CLASS: &str = "animate-fade-in";
/// Extra delay per position in the list.
pub const STAGGER_MS: u32 = 200;

const THRESHOLD: f64 = 0.1;
const ROOT_MARGIN: &str = "0px 0px -100px 0px";

#[derive(Debug, thiserror::Error)]
pub enum RevealError {
	#[error("intersection observer unavailable: {0}")]
	ObserverUnavailable(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealState {
	Unobserved,
	Pending,
	Revealed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reveal {
	pub index: usize,
	pub delay_ms: u32,
}

/// Animation delay for the item at `index`.
pub fn stagger_delay(index: usize) -> u32 {
	index as u32 * STAGGER_MS
}

/// Per-item reveal bookkeeping, independent of the browser.
#[derive(Clone, Debug)]
pub struct RevealTracker {
	states: Vec<RevealState>,
}

impl RevealTracker {
	pub fn new(count: usize) -> Self {
		Self {
			states: vec![RevealState::Unobserved; count],
		}
	}

	#[cfg(test)]
	pub fn state(&self, index: usize) -> Option<RevealState> {
		self.states.get(index).copied()
	}

	pub fn pending(&self) -> usize {
		self.states
			.iter()
			.filter(|s| **s == RevealState::Pending)
			.count()
	}

	/// Starts watching every item that is neither watched nor revealed; returns their indices.
	pub fn observe_all(&mut self) -> Vec<usize> {
		self.states
			.iter_mut()
			.enumerate()
			.filter(|(_, s)| **s == RevealState::Unobserved)
			.map(|(i, s)| {
				*s = RevealState::Pending;
				i
			})
			.collect()
	}

	/// Records an intersection notification; yields a reveal only on the first entry.
	pub fn intersect(&mut self, index: usize, is_intersecting: bool) -> Option<Reveal> {
		let state = self.states.get_mut(index)?;
		if !is_intersecting || *state != RevealState::Pending {
			return None;
		}
		*state = RevealState::Revealed;
		Some(Reveal {
			index,
			delay_ms: stagger_delay(index),
		})
	}

	/// Reveals everything not yet revealed, for when no observer can be had.
	pub fn reveal_all(&mut self) -> Vec<Reveal> {
		self.states
			.iter_mut()
			.enumerate()
			.filter(|(_, s)| **s != RevealState::Revealed)
			.map(|(index, s)| {
				*s = RevealState::Revealed;
				Reveal {
					index,
					delay_ms: stagger_delay(index),
				}
			})
			.collect()
	}

	/// Stops watching; items that were still waiting go back to unobserved.
	pub fn disconnect(&mut self) {
		for state in &mut self.states {
			if *state == RevealState::Pending {
				*state = RevealState::Unobserved;
			}
		}
	}
}

/// Starts the fade-in; the hidden class stays until the delayed animation takes over.
fn show(element: &Element, reveal: Reveal) {
	if let Some(el) = element.dyn_ref::<HtmlElement>() {
		let _ = el
			.style()
			.set_property("animation-delay", &format!("{}ms", reveal.delay_ms));
	}
	let _ = element.class_list().add_1(REVEALED_CLASS);
}

/// Reveals `target` if it is one of `targets` and still waiting; returns whether it was.
fn reveal_target(
	targets: &[Element],
	tracker: &RefCell<RevealTracker>,
	target: &Element,
	is_intersecting: bool,
) -> bool {
	let Some(index) = targets.iter().position(|el| el == target) else {
		return false;
	};
	let reveal = tracker.borrow_mut().intersect(index, is_intersecting);
	match reveal {
		Some(reveal) => {
			show(target, reveal);
			true
		}
		None => false,
	}
}

fn reveal_everything(elements: &[Element], tracker: &RefCell<RevealTracker>) {
	let reveals = tracker.borrow_mut().reveal_all();
	for reveal in reveals {
		if let Some(element) = elements.get(reveal.index) {
			show(element, reveal);
		}
	}
}

type EntryCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Watches a list of elements and reveals each one once; disconnects on drop.
pub struct ScrollReveal {
	observer: Option<IntersectionObserver>,
	_callback: Option<EntryCallback>,
	tracker: Rc<RefCell<RevealTracker>>,
}

impl ScrollReveal {
	/// Hides and observes `elements`; if the browser has no observer, shows them all at once.
	pub fn attach(elements: Vec<Element>) -> Self {
		let tracker = Rc::new(RefCell::new(RevealTracker::new(elements.len())));
		for element in &elements {
			let classes = element.class_list();
			let _ = classes.remove_1(REVEALED_CLASS);
			let _ = classes.add_1(HIDDEN_CLASS);
		}

		match Self::observe(&elements, tracker.clone()) {
			Ok((observer, callback)) => {
				debug!("watching {} reveal targets", elements.len());
				Self {
					observer: Some(observer),
					_callback: Some(callback),
					tracker,
				}
			}
			Err(err) => {
				warn!("{err}; showing everything");
				reveal_everything(&elements, &tracker);
				Self {
					observer: None,
					_callback: None,
					tracker,
				}
			}
		}
	}

	fn observe(
		elements: &[Element],
		tracker: Rc<RefCell<RevealTracker>>,
	) -> Result<(IntersectionObserver, EntryCallback), RevealError> {
		let targets = elements.to_vec();
		let watched = tracker.clone();
		let callback: EntryCallback = Closure::new(
			move |entries: js_sys::Array, observer: IntersectionObserver| {
				for entry in entries.iter() {
					let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
						continue;
					};
					let target = entry.target();
					if reveal_target(&targets, &watched, &target, entry.is_intersecting()) {
						observer.unobserve(&target);
					}
				}
			},
		);

		let options = IntersectionObserverInit::new();
		options.set_threshold(&JsValue::from_f64(THRESHOLD));
		options.set_root_margin(ROOT_MARGIN);
		let observer =
			IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
				.map_err(|e| RevealError::ObserverUnavailable(format!("{e:?}")))?;

		for index in tracker.borrow_mut().observe_all() {
			if let Some(element) = elements.get(index) {
				observer.observe(element);
			}
		}
		Ok((observer, callback))
	}

	/// Number of elements still waiting to scroll into view.
	pub fn pending(&self) -> usize {
		self.tracker.borrow().pending()
	}

	pub fn disconnect(&mut self) {
		if let Some(observer) = self.observer.take() {
			observer.disconnect();
			self.tracker.borrow_mut().disconnect();
		}
	}
}

impl Drop for ScrollReveal {
	fn drop(&mut self) {
		self.disconnect();
	}
}


#[cfg(test)]
#[cfg(target_arch = "wasm32")]
mod browser_tests {
	use wasm_bindgen_test::*;

	use super::*;

	wasm_bindgen_test_configure!(run_in_browser);

	fn items(count: usize) -> Result<Vec<Element>, JsValue> {
		let document = web_sys::window()
			.and_then(|w| w.document())
			.ok_or("no document")?;
		(0..count)
			.map(|_| document.create_element("div"))
			.collect()
	}

	#[wasm_bindgen_test]
	fn attach_hides_and_watches_every_item() -> Result<(), JsValue> {
		let elements = items(3)?;
		let mut reveal = ScrollReveal::attach(elements.clone());
		assert_eq!(reveal.pending(), 3);
		for el in &elements {
			assert!(el.class_list().contains(HIDDEN_CLASS));
			assert!(!el.class_list().contains(REVEALED_CLASS));
		}

		reveal.disconnect();
		assert_eq!(reveal.pending(), 0);
		reveal.disconnect();
		Ok(())
	}

	fn delay_of(element: &Element) -> Result<String, JsValue> {
		let el = element.dyn_ref::<HtmlElement>().ok_or("not an html element")?;
		el.style().get_property_value("animation-delay")
	}

	#[wasm_bindgen_test]
	fn intersection_reveals_the_matching_item_once() -> Result<(), JsValue> {
		let elements = items(3)?;
		for el in &elements {
			el.class_list().add_1(HIDDEN_CLASS)?;
		}
		let tracker = RefCell::new(RevealTracker::new(3));
		tracker.borrow_mut().observe_all();

		assert!(!reveal_target(&elements, &tracker, &elements[1], false));
		assert!(reveal_target(&elements, &tracker, &elements[1], true));
		let classes = elements[1].class_list();
		assert!(classes.contains(REVEALED_CLASS));
		assert!(classes.contains(HIDDEN_CLASS));
		assert_eq!(delay_of(&elements[1])?, "200ms");
		assert!(!elements[0].class_list().contains(REVEALED_CLASS));

		assert!(!reveal_target(&elements, &tracker, &elements[1], true));
		let stranger = items(1)?.remove(0);
		assert!(!reveal_target(&elements, &tracker, &stranger, true));
		assert_eq!(tracker.borrow().pending(), 2);
		Ok(())
	}

	#[wasm_bindgen_test]
	fn fallback_shows_every_item_with_stagger() -> Result<(), JsValue> {
		let elements = items(3)?;
		let tracker = RefCell::new(RevealTracker::new(3));
		reveal_everything(&elements, &tracker);

		for (el, delay) in elements.iter().zip(["0ms", "200ms", "400ms"]) {
			assert!(el.class_list().contains(REVEALED_CLASS));
			assert_eq!(delay_of(el)?, delay);
		}
		assert_eq!(tracker.borrow().pending(), 0);
		Ok(())
	}
}
