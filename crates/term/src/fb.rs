//! Framebuffer and style types for the counter screen.

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const TEXT: Rgb = Rgb::new(220, 220, 220);
    pub const RED: Rgb = Rgb::new(220, 80, 80);
    pub const BLUE: Rgb = Rgb::new(80, 120, 220);
    pub const GOLD: Rgb = Rgb::new(240, 220, 80);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Foreground/background plus the two attributes the view uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
    pub dim: bool,
}

impl CellStyle {
    pub const fn fg(fg: Rgb) -> Self {
        Self {
            fg,
            bg: Rgb::BLACK,
            bold: false,
            dim: false,
        }
    }

    pub const fn bold(self) -> Self {
        Self { bold: true, ..self }
    }

    pub const fn dim(self) -> Self {
        Self { dim: true, ..self }
    }

    pub const fn on(self, bg: Rgb) -> Self {
        Self { bg, ..self }
    }
}

impl Default for CellStyle {
    fn default() -> Self {
        Self::fg(Rgb::TEXT)
    }
}

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            style: CellStyle::default(),
        }
    }
}

/// Row-major grid of styled cells. Out-of-bounds writes are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize in place, keeping the allocation when it is large enough.
    pub fn resize(&mut self, width: u16, height: u16) {
        if (self.width, self.height) != (width, height) {
            self.width = width;
            self.height = height;
            self.cells
                .resize(width as usize * height as usize, Cell::default());
        }
    }

    #[inline]
    fn index(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| y as usize * self.width as usize + x as usize)
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.index(x, y).map(|i| self.cells[i])
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = cell;
        }
    }

    /// Blank every cell with the default style.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }

    #[inline]
    pub fn put_char(&mut self, x: u16, y: u16, ch: char, style: CellStyle) {
        self.set(x, y, Cell { ch, style });
    }

    pub fn put_str(&mut self, x: u16, y: u16, s: &str, style: CellStyle) {
        for (i, ch) in s.chars().enumerate() {
            let cx = x as usize + i;
            if cx >= self.width as usize {
                break;
            }
            self.put_char(cx as u16, y, ch, style);
        }
    }

    /// Write `s` centered within `[x, x + w)`.
    pub fn put_str_centered(&mut self, x: u16, y: u16, w: u16, s: &str, style: CellStyle) {
        let len = s.chars().count() as u16;
        self.put_str(x.saturating_add(w.saturating_sub(len) / 2), y, s, style);
    }

    /// Single-line box border. Boxes smaller than 2x2 are skipped.
    pub fn draw_box(&mut self, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }
        let (right, bottom) = (x + w - 1, y + h - 1);

        for cx in x + 1..right {
            self.put_char(cx, y, '─', style);
            self.put_char(cx, bottom, '─', style);
        }
        for cy in y + 1..bottom {
            self.put_char(x, cy, '│', style);
            self.put_char(right, cy, '│', style);
        }
        self.put_char(x, y, '┌', style);
        self.put_char(right, y, '┐', style);
        self.put_char(x, bottom, '└', style);
        self.put_char(right, bottom, '┘', style);
    }

    /// Write a signed integer without allocating.
    ///
    /// Returns the number of columns used.
    pub fn put_i32(&mut self, x: u16, y: u16, value: i32, style: CellStyle) -> u16 {
        let mut digits = [0u8; 10];
        let mut n = value.unsigned_abs();
        let mut len = 0;
        loop {
            digits[len] = b'0' + (n % 10) as u8;
            len += 1;
            n /= 10;
            if n == 0 {
                break;
            }
        }

        let mut cx = x;
        if value < 0 {
            self.put_char(cx, y, '-', style);
            cx = cx.saturating_add(1);
        }
        for &d in digits[..len].iter().rev() {
            self.put_char(cx, y, d as char, style);
            cx = cx.saturating_add(1);
        }
        cx - x
    }

    /// Width in columns `put_i32` would use for `value`.
    pub fn i32_width(value: i32) -> u16 {
        let mut n = value.unsigned_abs();
        let mut w = if value < 0 { 2 } else { 1 };
        while n >= 10 {
            n /= 10;
            w += 1;
        }
        w
    }

    /// Collect one row as plain text (styles dropped).
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.get(x, y))
            .map(|c| c.ch)
            .collect()
    }

    /// Fill a rectangle with `ch`; cells past the edge are dropped.
    pub fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, ch: char, style: CellStyle) {
        for dy in 0..h {
            for dx in 0..w {
                self.put_char(x.saturating_add(dx), y.saturating_add(dy), ch, style);
            }
        }
    }
}
