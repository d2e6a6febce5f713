//! Styled character surface - the buffer a view renders into.
//!
//! A `Surface` is a grid of styled characters kept per row, which is also the
//! unit the terminal flusher diffs on. Writes outside the bounds are ignored.

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Minimal per-character styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
    pub dim: bool,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        }
    }
}

/// One styled character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub ch: char,
    pub style: Style,
}

impl Default for Glyph {
    fn default() -> Self {
        Self {
            ch: ' ',
            style: Style::default(),
        }
    }
}

/// Row-major grid of styled characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Surface {
    width: u16,
    height: u16,
    rows: Vec<Vec<Glyph>>,
}

impl Surface {
    pub fn new(width: u16, height: u16) -> Self {
        let rows = (0..height)
            .map(|_| vec![Glyph::default(); width as usize])
            .collect();
        Self {
            width,
            height,
            rows,
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize, keeping row allocations where possible.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.rows
            .resize_with(height as usize, || vec![Glyph::default(); width as usize]);
        if self.width != width {
            for row in &mut self.rows {
                row.resize(width as usize, Glyph::default());
            }
        }
        self.width = width;
        self.height = height;
    }

    /// Reset every cell to a blank glyph in the given style.
    pub fn clear(&mut self, style: Style) {
        let blank = Glyph { ch: ' ', style };
        for row in &mut self.rows {
            row.fill(blank);
        }
    }

    pub fn row(&self, y: u16) -> Option<&[Glyph]> {
        self.rows.get(y as usize).map(Vec::as_slice)
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Glyph> {
        self.rows
            .get(y as usize)
            .and_then(|row| row.get(x as usize))
            .copied()
    }

    pub fn put_char(&mut self, x: u16, y: u16, ch: char, style: Style) {
        if let Some(glyph) = self
            .rows
            .get_mut(y as usize)
            .and_then(|row| row.get_mut(x as usize))
        {
            *glyph = Glyph { ch, style };
        }
    }

    /// Write a string left to right, clipped at the right edge.
    pub fn put_str(&mut self, x: u16, y: u16, s: &str, style: Style) {
        for (i, ch) in s.chars().enumerate() {
            let cx = x.saturating_add(i as u16);
            if cx >= self.width {
                break;
            }
            self.put_char(cx, y, ch, style);
        }
    }

    pub fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, ch: char, style: Style) {
        for dy in 0..h {
            for dx in 0..w {
                self.put_char(x.saturating_add(dx), y.saturating_add(dy), ch, style);
            }
        }
    }

    /// The characters of one row as a string (styles dropped).
    ///
    /// Mostly useful to assert on rendered content in tests.
    pub fn row_text(&self, y: u16) -> String {
        match self.row(y) {
            Some(row) => row.iter().map(|glyph| glyph.ch).collect(),
            None => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_str_clips_at_the_edge() {
        let mut surface = Surface::new(5, 2);
        surface.put_str(3, 0, "abcdef", Style::default());
        assert_eq!(surface.row_text(0), "   ab");
    }

    #[test]
    fn test_out_of_bounds_writes_are_ignored() {
        let mut surface = Surface::new(3, 3);
        surface.put_char(10, 10, 'x', Style::default());
        surface.put_str(0, 9, "nope", Style::default());
        for y in 0..3 {
            assert_eq!(surface.row_text(y), "   ");
        }
    }

    #[test]
    fn test_fill_rect() {
        let mut surface = Surface::new(4, 3);
        let style = Style {
            bold: true,
            ..Style::default()
        };
        surface.fill_rect(1, 1, 2, 2, '#', style);
        assert_eq!(surface.row_text(0), "    ");
        assert_eq!(surface.row_text(1), " ## ");
        assert_eq!(surface.row_text(2), " ## ");

        assert_eq!(surface.get(1, 1).map(|glyph| glyph.style), Some(style));
        assert_eq!(surface.get(0, 0).map(|glyph| glyph.ch), Some(' '));
        assert_eq!(surface.get(9, 0), None);
    }

    #[test]
    fn test_resize_preserves_dimensions_invariant() {
        let mut surface = Surface::new(4, 2);
        surface.put_char(0, 0, 'x', Style::default());

        surface.resize(2, 3);
        assert_eq!(surface.width(), 2);
        assert_eq!(surface.height(), 3);
        assert_eq!(surface.row(2).map(<[Glyph]>::len), Some(2));

        surface.resize(6, 1);
        assert_eq!(surface.row_text(0).len(), 6);
    }
}
