//! Typed-out code snippet with a resting, highlighted phase.

pub const CODE_LINES: &[&str] = &[
	"function train(data) {",
	"  const model = new Model();",
	"  model.compile({",
	"    optimizer: \"adam\",",
	"    loss: \"categorical\"",
	"  });",
	"  return model.fit(data);",
	"}",
];

/// Seconds per type-then-rest cycle.
pub const CYCLE_SECS: f64 = 5.0;
/// Share of the cycle spent typing.
pub const TYPING_FRACTION: f64 = 0.7;
pub const FONT_SIZE: f64 = 12.0;
pub const LINE_HEIGHT: f64 = FONT_SIZE * 1.2;
pub const TEXT_X: f64 = 10.0;

const CONTROL_KEYWORDS: &[&str] = &["function", "return"];
const CALL_KEYWORDS: &[&str] = &["new", "compile", "fit"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenClass {
	Plain,
	Control,
	Call,
}

impl TokenClass {
	pub fn color(self) -> &'static str {
		match self {
			TokenClass::Plain => "#6E59A5",
			TokenClass::Control => "#33C3F0",
			TokenClass::Call => "#C084FC",
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Span<'a> {
	pub text: &'a str,
	pub class: TokenClass,
}

/// What the snippet looks like at a given moment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypewriterFrame {
	Typing {
		visible_chars: usize,
		cursor_on: bool,
	},
	Complete,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TypewriterScene {
	pub lines: &'static [&'static str],
	pub total_chars: usize,
	/// Baseline of the first line.
	pub start_y: f64,
}

impl TypewriterScene {
	pub fn new(height: f64) -> Self {
		Self {
			lines: CODE_LINES,
			total_chars: CODE_LINES.iter().map(|l| l.chars().count()).sum(),
			start_y: (height - CODE_LINES.len() as f64 * LINE_HEIGHT) / 2.0,
		}
	}

	/// Normalised position within the current cycle, in `[0, 1)`.
	pub fn phase_at(now: f64) -> f64 {
		now.rem_euclid(CYCLE_SECS) / CYCLE_SECS
	}

	pub fn frame_at(&self, now: f64) -> TypewriterFrame {
		let cursor_on = ((now * 2.0).floor() as i64).rem_euclid(2) == 0;
		self.frame_at_phase(Self::phase_at(now), cursor_on)
	}

	pub fn frame_at_phase(&self, phase: f64, cursor_on: bool) -> TypewriterFrame {
		if phase >= TYPING_FRACTION {
			return TypewriterFrame::Complete;
		}
		let completion = phase / TYPING_FRACTION;
		TypewriterFrame::Typing {
			visible_chars: (completion * self.total_chars as f64).floor() as usize,
			cursor_on,
		}
	}

	pub fn line_y(&self, line: usize) -> f64 {
		self.start_y + line as f64 * LINE_HEIGHT
	}

	/// Splits the revealed prefix into per-line slices.
	///
	/// The last entry is the line being typed and carries the cursor.
	pub fn visible_lines(&self, visible_chars: usize) -> Vec<&'static str> {
		let mut shown = Vec::new();
		let mut count = 0;
		for &line in self.lines {
			let len = line.chars().count();
			if count + len < visible_chars {
				shown.push(line);
				count += len;
			} else {
				shown.push(char_prefix(line, visible_chars - count));
				break;
			}
		}
		shown
	}
}

fn char_prefix(text: &str, chars: usize) -> &str {
	match text.char_indices().nth(chars) {
		Some((at, _)) => &text[..at],
		None => text,
	}
}

/// Splits a line into keyword and plain runs.
///
/// A line mentioning a control keyword highlights only those; otherwise call keywords are
/// highlighted.
pub fn highlight(line: &str) -> Vec<Span<'_>> {
	let mentions = |words: &[&str]| words.iter().any(|w| line.contains(w));
	let (words, class) = if mentions(CONTROL_KEYWORDS) {
		(CONTROL_KEYWORDS, TokenClass::Control)
	} else if mentions(CALL_KEYWORDS) {
		(CALL_KEYWORDS, TokenClass::Call)
	} else if line.is_empty() {
		return Vec::new();
	} else {
		return vec![Span {
			text: line,
			class: TokenClass::Plain,
		}];
	};

	let mut spans = Vec::new();
	let mut rest = line;
	while !rest.is_empty() {
		let next = words
			.iter()
			.filter_map(|&word| rest.find(word).map(|at| (at, word)))
			.min_by_key(|&(at, word)| (at, std::cmp::Reverse(word.len())));
		let Some((at, word)) = next else {
			spans.push(Span {
				text: rest,
				class: TokenClass::Plain,
			});
			break;
		};
		if at > 0 {
			spans.push(Span {
				text: &rest[..at],
				class: TokenClass::Plain,
			});
		}
		spans.push(Span { text: word, class });
		rest = &rest[at + word.len()..];
	}
	spans
}
