//! # Caption renderer
//!
//! Draws a short caption onto a fixed 600×400 dark canvas and encodes it as PNG.
//! Text is word-wrapped to 30 characters per line; the block is centered vertically and every line
//! is centered horizontally using its measured width. A missing or broken font never fails a render:
//! [`CaptionFont`] falls back to a built-in bitmap font.

mod error;
mod font;

use image::{ImageFormat, Rgb, RgbImage};
use std::io::Cursor;
use std::path::Path;
use tracing::{debug, instrument};

pub use error::RenderError;
pub use font::{CaptionFont, FONT_SIZE};

pub const WIDTH: u32 = 600;
pub const HEIGHT: u32 = 400;
pub const BACKGROUND: Rgb<u8> = Rgb([10, 10, 10]);
pub const TEXT_COLOR: Rgb<u8> = Rgb([255, 255, 255]);
/// Max characters per wrapped line.
pub const WRAP_WIDTH: usize = 30;
/// Vertical gap between lines, in pixels.
pub const LINE_GAP: i32 = 10;
pub const FILE_NAME: &str = "sad.png";

/// A PNG ready to upload.
#[derive(Debug, Clone)]
pub struct RenderedImage {
    pub bytes: Vec<u8>,
    pub file_name: &'static str,
    pub width: u32,
    pub height: u32,
}

impl RenderedImage {
    /// Reader positioned at the start of the encoded stream.
    pub fn reader(&self) -> Cursor<&[u8]> {
        Cursor::new(self.bytes.as_slice())
    }
}

/// Where one wrapped line lands on the canvas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinePlacement {
    pub text: String,
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

/// Wraps `text` into lines of at most [`WRAP_WIDTH`] characters. Blank input yields no lines.
pub fn wrap_lines(text: &str) -> Vec<String> {
    textwrap::wrap(text, WRAP_WIDTH)
        .into_iter()
        .map(|line| line.trim().to_string())
        .filter(|line| !line.is_empty())
        .collect()
}

/// Positions measured lines: block centered on the canvas, each line centered horizontally.
pub fn layout(lines: &[(String, (u32, u32))]) -> Vec<LinePlacement> {
    let gaps = LINE_GAP * (lines.len() as i32 - 1).max(0);
    let block_height: i32 = lines.iter().map(|(_, (_, h))| *h as i32).sum::<i32>() + gaps;

    let mut y = HEIGHT as i32 / 2 - block_height / 2;
    let mut placements = Vec::with_capacity(lines.len());
    for (text, (width, height)) in lines {
        placements.push(LinePlacement {
            text: text.clone(),
            x: (WIDTH as i32 - *width as i32) / 2,
            y,
            width: *width,
            height: *height,
        });
        y += *height as i32 + LINE_GAP;
    }
    placements
}

pub struct CaptionRenderer {
    font: CaptionFont,
}

impl CaptionRenderer {
    /// Uses `font_path` if it loads, otherwise a system font, otherwise the bundled font.
    pub fn new(font_path: Option<&Path>) -> Self {
        Self {
            font: CaptionFont::load(font_path),
        }
    }

    /// Renderer that always uses the built-in bitmap font.
    pub fn builtin() -> Self {
        Self {
            font: CaptionFont::Builtin,
        }
    }

    pub fn font(&self) -> &CaptionFont {
        &self.font
    }

    /// Computes line placements for `text` with this renderer's font.
    pub fn placements(&self, text: &str) -> Vec<LinePlacement> {
        let measured: Vec<(String, (u32, u32))> = wrap_lines(text)
            .into_iter()
            .map(|line| {
                let size = self.font.measure(&line);
                (line, size)
            })
            .collect();
        layout(&measured)
    }

    /// Draws the caption onto a fresh canvas.
    pub fn render(&self, text: &str) -> RgbImage {
        let mut canvas = RgbImage::from_pixel(WIDTH, HEIGHT, BACKGROUND);
        for line in self.placements(text) {
            self.font
                .draw(&mut canvas, line.x, line.y, &line.text, TEXT_COLOR);
        }
        canvas
    }

    /// Renders and PNG-encodes the caption.
    #[instrument(skip(self, text))]
    pub fn render_png(&self, text: &str) -> Result<RenderedImage, RenderError> {
        let canvas = self.render(text);
        let mut bytes = Cursor::new(Vec::new());
        canvas.write_to(&mut bytes, ImageFormat::Png)?;
        let bytes = bytes.into_inner();

        debug!(
            size = bytes.len(),
            builtin_font = self.font.is_builtin(),
            "Caption rendered"
        );

        Ok(RenderedImage {
            bytes,
            file_name: FILE_NAME,
            width: WIDTH,
            height: HEIGHT,
        })
    }
}
