//! Downscale images into terminal half-block cells
//!
//! Each text cell renders a `▀` with the foreground carrying the upper
//! pixel and the background the lower one, packing two pixel rows into
//! every terminal row.

use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView, Rgba};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

/// The two pixel colors behind one terminal cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellColor {
    pub top: (u8, u8, u8),
    pub bottom: (u8, u8, u8),
}

/// An image downscaled to a grid of terminal cells, row-major
#[derive(Debug, Clone)]
pub struct CellImage {
    cols: u16,
    rows: u16,
    cells: Vec<CellColor>,
}

impl CellImage {
    /// Fit an image within a cell budget, preserving aspect ratio.
    /// Images already inside the budget are not upscaled.
    pub fn fit(image: &DynamicImage, max_cols: u16, max_rows: u16) -> Self {
        let (width, height) = image.dimensions();
        let max_cols = max_cols.max(1);
        let max_rows = max_rows.max(1);

        // A text row is two pixel rows tall
        let scale = (max_cols as f64 / width as f64)
            .min(max_rows as f64 * 2.0 / height as f64)
            .min(1.0);
        let cols = ((width as f64 * scale).round() as u32).clamp(1, max_cols as u32);
        let pixel_rows = ((height as f64 * scale).round() as u32).max(1);
        let rows = ((pixel_rows + 1) / 2).clamp(1, max_rows as u32);

        Self::exact(image, cols as u16, rows as u16)
    }

    /// Resample to an exact cell grid, ignoring aspect ratio
    pub fn exact(image: &DynamicImage, cols: u16, rows: u16) -> Self {
        let cols = cols.max(1);
        let rows = rows.max(1);
        // Nearest keeps it fast; these are casual thumbnails
        let resized = image
            .resize_exact(cols as u32, rows as u32 * 2, FilterType::Nearest)
            .to_rgba8();

        let mut cells = Vec::with_capacity(cols as usize * rows as usize);
        for row in 0..rows as u32 {
            for col in 0..cols as u32 {
                cells.push(CellColor {
                    top: over_black(resized.get_pixel(col, row * 2)),
                    bottom: over_black(resized.get_pixel(col, row * 2 + 1)),
                });
            }
        }

        Self { cols, rows, cells }
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn cell(&self, col: u16, row: u16) -> CellColor {
        self.cells[row as usize * self.cols as usize + col as usize]
    }

    /// Render the whole image as styled text lines
    pub fn to_lines(&self) -> Vec<Line<'static>> {
        (0..self.rows)
            .map(|row| {
                let spans: Vec<Span<'static>> = (0..self.cols)
                    .map(|col| span_for(self.cell(col, row), Style::default()))
                    .collect();
                Line::from(spans)
            })
            .collect()
    }
}

/// A single half-block span for one cell, with extra styling applied
pub fn span_for(cell: CellColor, base: Style) -> Span<'static> {
    let (tr, tg, tb) = cell.top;
    let (br, bg, bb) = cell.bottom;
    Span::styled(
        "▀",
        base.fg(Color::Rgb(tr, tg, tb)).bg(Color::Rgb(br, bg, bb)),
    )
}

/// Blend a cell's colors toward a highlight tone
pub fn tint(cell: CellColor, toward: (u8, u8, u8), amount: f32) -> CellColor {
    CellColor {
        top: blend(cell.top, toward, amount),
        bottom: blend(cell.bottom, toward, amount),
    }
}

fn blend(from: (u8, u8, u8), to: (u8, u8, u8), amount: f32) -> (u8, u8, u8) {
    let amount = amount.clamp(0.0, 1.0);
    let channel = |f: u8, t: u8| (f as f32 + (t as f32 - f as f32) * amount).round() as u8;
    (
        channel(from.0, to.0),
        channel(from.1, to.1),
        channel(from.2, to.2),
    )
}

fn over_black(pixel: &Rgba<u8>) -> (u8, u8, u8) {
    let alpha = pixel[3] as u16;
    let channel = |c: u8| ((c as u16 * alpha) / 255) as u8;
    (channel(pixel[0]), channel(pixel[1]), channel(pixel[2]))
}
