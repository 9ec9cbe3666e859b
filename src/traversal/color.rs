use std::fmt;

/// An opaque 24-bit RGB display color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color(pub u32);

impl Color {
	/// Unvisited.
	pub const WHITE: Color = Color(0xffffff);
	/// Visited / start selection.
	pub const GREEN: Color = Color(0x00ff00);
	/// Depth-first visitation.
	pub const BLUE: Color = Color(0x0000ff);
	/// Traced path / end selection.
	pub const RED: Color = Color(0xff0000);

	/// Red, green and blue channels.
	pub fn rgb(self) -> (u8, u8, u8) {
		(
			((self.0 >> 16) & 0xff) as u8,
			((self.0 >> 8) & 0xff) as u8,
			(self.0 & 0xff) as u8,
		)
	}

	/// CSS hex notation, e.g. `#00ff00`.
	pub fn css(self) -> String {
		format!("#{:06x}", self.0 & 0xffffff)
	}
}

impl Default for Color {
	fn default() -> Self {
		Color::WHITE
	}
}

impl fmt::Display for Color {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "0x{:06x}", self.0)
	}
}
