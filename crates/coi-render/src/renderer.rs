/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use coi::CoiImage;
use coi_core::surface::Surface;
use log::{trace, warn};

/// Paints decoded COI images onto a surface
///
/// Every token becomes a `cell_size x cell_size` block of its color.
/// Token index `x` in row `y` paints at surface position
/// `(x * cell_size, y * cell_size)`.
#[derive(Copy, Clone, Debug)]
pub struct CoiRenderer {
    cell_size: usize
}

impl Default for CoiRenderer {
    /// A renderer with a cell size of one, a token per surface pixel
    fn default() -> Self {
        CoiRenderer { cell_size: 1 }
    }
}

impl CoiRenderer {
    /// Create a renderer with the given cell size
    ///
    /// A cell size of zero is treated as one.
    pub fn new(cell_size: usize) -> CoiRenderer {
        CoiRenderer {
            cell_size: cell_size.max(1)
        }
    }

    /// Get the configured cell size
    pub const fn get_cell_size(&self) -> usize {
        self.cell_size
    }

    /// Render `image` onto `surface`
    ///
    /// Pixel smoothing is disabled on the surface before painting so
    /// every cell stays a sharp rectangle.
    ///
    /// Each row paints at most `surface.width() / cell_size` tokens;
    /// the token at exactly that index, and everything after it, is not
    /// painted. There is no such bound on rows, a row below the bottom
    /// of the surface paints nothing because the surface clips it.
    ///
    /// Tokens that do not interpret as colors are skipped with a
    /// warning, leaving their cell untouched.
    ///
    /// Rendering mutates only the surface; painting the same image onto
    /// a cleared surface repeatedly produces identical pixels.
    pub fn render(&self, image: &CoiImage, surface: &mut dyn Surface) {
        surface.set_pixel_smoothing(false);

        let max_row_length = surface.width() / self.cell_size;

        for (y, row) in image.rows().iter().enumerate() {
            for (x, token) in row.iter().enumerate() {
                if x >= max_row_length {
                    break;
                }
                match token.to_rgba() {
                    Some(color) => {
                        surface.fill_rect(
                            x * self.cell_size,
                            y * self.cell_size,
                            self.cell_size,
                            self.cell_size,
                            color
                        );
                    }
                    None => {
                        warn!(
                            "Skipping token `{}` at row {}, column {}, not valid hex",
                            String::from_utf8_lossy(token.as_bytes()),
                            y,
                            x
                        );
                    }
                }
            }
        }
        trace!("Rendered {} rows", image.rows().len());
    }
}
