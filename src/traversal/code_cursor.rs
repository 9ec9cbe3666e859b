/// Highlighted line in the pseudo-code listing of the active algorithm.
#[derive(Clone, Debug, Default)]
pub struct CodeCursor {
	lines: &'static [&'static str],
	current: Option<usize>,
}

impl CodeCursor {
	/// A cursor over `lines` with nothing highlighted.
	pub fn new(lines: &'static [&'static str]) -> Self {
		Self { lines, current: None }
	}

	/// Swaps the listing and clears the highlight.
	pub fn load(&mut self, lines: &'static [&'static str]) {
		*self = Self::new(lines);
	}

	/// The loaded listing.
	pub fn lines(&self) -> &'static [&'static str] {
		self.lines
	}

	/// Index of the highlighted line, if any.
	pub fn current(&self) -> Option<usize> {
		self.current
	}

	/// Text of the highlighted line.
	pub fn current_line(&self) -> Option<&'static str> {
		self.current.and_then(|i| self.lines.get(i).copied())
	}

	/// Clears the highlight.
	pub fn reset(&mut self) {
		self.current = None;
	}

	/// Follows a step's recorded line. Lines outside the listing clear the
	/// highlight.
	pub fn sync(&mut self, line: Option<usize>) {
		self.current = line.filter(|&i| i < self.lines.len());
	}

	/// Moves down one line; `false` at the last line.
	pub fn next(&mut self) -> bool {
		let index = self.current.map_or(0, |i| i + 1);
		if index >= self.lines.len() {
			return false;
		}
		self.current = Some(index);
		true
	}

	/// Stops at the first line.
	pub fn previous(&mut self) -> bool {
		match self.current {
			Some(i) if i > 0 => {
				self.current = Some(i - 1);
				true
			}
			_ => false,
		}
	}

	/// Highlights the last line.
	pub fn finish(&mut self) {
		self.current = self.lines.len().checked_sub(1);
	}
}
