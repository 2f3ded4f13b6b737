use colored::Colorize;
use unicode_width::UnicodeWidthStr;

/// One rendered terminal line plus its width in terminal cells (ANSI codes
/// excluded, wide characters counted twice).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line {
    pub text: String,
    pub width: usize,
}

impl Line {
    pub fn plain(text: impl Into<String>) -> Self {
        let text = text.into();
        let width = text.width();
        Self { text, width }
    }

    pub const fn styled(text: String, width: usize) -> Self {
        Self { text, width }
    }
}

/// A rectangle of lines that can be placed next to other blocks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Block {
    pub lines: Vec<Line>,
}

impl Block {
    pub fn new(lines: Vec<Line>) -> Self {
        Self { lines }
    }

    pub fn width(&self) -> usize {
        self.lines.iter().map(|l| l.width).max().unwrap_or(0)
    }

    pub fn height(&self) -> usize {
        self.lines.len()
    }
}

impl std::fmt::Display for Block {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let width = self.width();
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{}{}", line.text, " ".repeat(width - line.width))?;
        }
        Ok(())
    }
}

/// Solid-background box with padding and a bottom margin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoxStyle {
    pub background: (u8, u8, u8),
    pub foreground: (u8, u8, u8),
    pub bold: bool,
    pub padding_x: usize,
    pub padding_y: usize,
    pub margin_bottom: usize,
}

impl Default for BoxStyle {
    fn default() -> Self {
        Self {
            background: (0xa7, 0xe2, 0xa2),
            foreground: (0x00, 0x00, 0x00),
            bold: true,
            padding_x: 1,
            padding_y: 1,
            margin_bottom: 1,
        }
    }
}

impl BoxStyle {
    /// Lay `text` out inside the box. With `ansi` off the box keeps its
    /// geometry but carries no escape codes.
    pub fn render(&self, text: &str, ansi: bool) -> Block {
        let content: Vec<&str> = text.lines().collect();
        let inner = content.iter().map(|l| l.width()).max().unwrap_or(0);
        let width = inner + 2 * self.padding_x;

        let blank = " ".repeat(width);
        let mut lines = Vec::with_capacity(content.len() + 2 * self.padding_y + self.margin_bottom);
        for _ in 0..self.padding_y {
            lines.push(Line::styled(self.paint(&blank, ansi), width));
        }
        for row in &content {
            let pad = " ".repeat(self.padding_x);
            let fill = " ".repeat(inner - row.width());
            let padded = format!("{pad}{row}{fill}{pad}");
            lines.push(Line::styled(self.paint(&padded, ansi), width));
        }
        for _ in 0..self.padding_y {
            lines.push(Line::styled(self.paint(&blank, ansi), width));
        }
        for _ in 0..self.margin_bottom {
            lines.push(Line::plain(""));
        }
        Block::new(lines)
    }

    fn paint(&self, text: &str, ansi: bool) -> String {
        if !ansi {
            return text.to_string();
        }
        let (br, bg, bb) = self.background;
        let (fr, fg, fb) = self.foreground;
        let styled = text.on_truecolor(br, bg, bb).truecolor(fr, fg, fb);
        if self.bold {
            styled.bold().to_string()
        } else {
            styled.to_string()
        }
    }
}

/// Place blocks side by side, top-aligned. Shorter blocks are padded with
/// blank lines and every line is padded to its block's width.
pub fn join_horizontal(blocks: &[Block]) -> String {
    let height = blocks.iter().map(Block::height).max().unwrap_or(0);
    let widths: Vec<usize> = blocks.iter().map(Block::width).collect();

    let mut rows = Vec::with_capacity(height);
    for y in 0..height {
        let mut row = String::new();
        for (block, width) in blocks.iter().zip(&widths) {
            match block.lines.get(y) {
                Some(line) => {
                    row.push_str(&line.text);
                    row.push_str(&" ".repeat(width - line.width));
                }
                None => row.push_str(&" ".repeat(*width)),
            }
        }
        rows.push(row);
    }
    rows.join("\n")
}
