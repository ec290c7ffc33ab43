/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use alloc::string::String;

use coi_core::color::Rgba;
use coi_core::options::EncoderOptions;

use crate::constants::{ROW_SEPARATOR, TOKEN_LENGTH};
use crate::errors::CoiEncodeErrors;

/// An instance of a COI encoder
///
/// Turns an interleaved RGBA pixel buffer into COI text, one uppercase
/// `RRGGBBAA` token per pixel, rows joined by `|`.
///
/// Encoding then decoding reproduces the pixel values exactly, COI
/// stores every channel verbatim.
pub struct CoiEncoder<'a> {
    pixels:  &'a [u8],
    options: EncoderOptions
}

impl<'a> CoiEncoder<'a> {
    /// Create a new COI encoder
    ///
    /// # Arguments
    /// - pixels: Interleaved RGBA pixel data, 4 bytes per pixel
    /// - options: Dimensions of the pixel buffer
    ///
    /// # Example
    /// ```
    /// use coi::CoiEncoder;
    /// use coi_core::options::EncoderOptions;
    ///
    /// let pixels = [255, 0, 0, 255, 0, 255, 0, 255];
    /// let encoder = CoiEncoder::new(&pixels, EncoderOptions::new(2, 1));
    ///
    /// assert_eq!(encoder.encode().unwrap(), "FF0000FF00FF00FF");
    /// ```
    pub fn new(pixels: &'a [u8], options: EncoderOptions) -> CoiEncoder<'a> {
        CoiEncoder { pixels, options }
    }

    /// Encode the pixel buffer into a COI blob
    ///
    /// # Returns
    /// - `Ok(text)`: The encoded blob
    /// - `Err`: The buffer length disagrees with
    ///    `width * height * 4`
    pub fn encode(&self) -> Result<String, CoiEncodeErrors> {
        let width = self.options.get_width();
        let height = self.options.get_height();

        let expected = width * height * 4;

        if expected != self.pixels.len() {
            return Err(CoiEncodeErrors::WrongPixelCount(expected, self.pixels.len()));
        }

        if width == 0 {
            // rows without tokens are just their separators
            let mut output = String::new();

            for _ in 1..height {
                output.push(ROW_SEPARATOR);
            }
            return Ok(output);
        }

        let mut output =
            String::with_capacity(width * height * TOKEN_LENGTH + height.saturating_sub(1));

        for (y, row) in self.pixels.chunks_exact(width * 4).enumerate() {
            if y > 0 {
                output.push(ROW_SEPARATOR);
            }

            for pixel in row.chunks_exact(4) {
                let color = Rgba::new(pixel[0], pixel[1], pixel[2], pixel[3]);

                for byte in color.to_token() {
                    output.push(char::from(byte));
                }
            }
        }
        Ok(output)
    }
}
