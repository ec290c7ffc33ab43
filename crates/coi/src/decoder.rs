/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use alloc::vec::Vec;

use coi_core::options::DecoderOptions;
use log::{trace, warn};

use crate::constants::{ROW_SEPARATOR, TOKEN_LENGTH};
use crate::errors::CoiErrors;
use crate::image::{CoiImage, ColorToken, Row};

/// An instance of a COI decoder
///
/// The decoder splits its input on `|` into rows and walks each row in
/// fixed strides of 8 characters, producing one token per full stride.
/// A trailing fragment shorter than 8 characters is dropped, it is
/// neither padded nor an error.
///
/// Decoding never fails for structural reasons. With default options
/// the result is always `Ok`, and an empty input produces an image with
/// a single empty row.
pub struct CoiDecoder<'a> {
    input:   &'a str,
    options: DecoderOptions
}

impl<'a> CoiDecoder<'a> {
    /// Create a new COI decoder with default options
    ///
    /// # Arguments
    /// - input: COI encoded text
    ///
    /// # Example
    /// ```
    /// use coi::CoiDecoder;
    ///
    /// let image = CoiDecoder::new("FF0000FF00FF00FF|0000FFFF").decode().unwrap();
    ///
    /// assert_eq!(image.height(), 2);
    /// ```
    pub fn new(input: &'a str) -> CoiDecoder<'a> {
        CoiDecoder::new_with_options(DecoderOptions::default(), input)
    }

    /// Create a new COI decoder with the specified options
    ///
    /// # Arguments
    /// - options: Modified options for the decoder
    /// - input: COI encoded text
    ///
    /// # Example
    /// ```
    /// use coi::CoiDecoder;
    /// use coi_core::options::DecoderOptions;
    ///
    /// let options = DecoderOptions::default().set_strict_mode(true);
    /// let decoder = CoiDecoder::new_with_options(options, "NOTHEXXX");
    ///
    /// assert!(decoder.decode().is_err());
    /// ```
    pub fn new_with_options(options: DecoderOptions, input: &'a str) -> CoiDecoder<'a> {
        CoiDecoder { input, options }
    }

    /// Get the options this decoder runs with
    pub const fn get_options(&self) -> DecoderOptions {
        self.options
    }

    /// Decode the input into an image
    ///
    /// The number of rows produced is always the number of `|`
    /// separators plus one, capped by
    /// [`max_height`](DecoderOptions::set_max_height). Rows and tokens
    /// past the configured caps are dropped with a warning rather than
    /// failing the decode.
    ///
    /// # Returns
    /// - `Ok(image)`: The decoded image. With default options this is
    ///    the only outcome.
    /// - `Err`: Strict mode was enabled and a token did not interpret
    ///    as a color.
    pub fn decode(&self) -> Result<CoiImage, CoiErrors> {
        let separators = self.input.bytes().filter(|x| *x == b'|').count();
        let mut rows: Vec<Row> = Vec::with_capacity(separators + 1);

        for (y, raw_row) in self.input.split(ROW_SEPARATOR).enumerate() {
            if y == self.options.get_max_height() {
                warn!(
                    "Row limit {} reached, dropping the remaining rows",
                    self.options.get_max_height()
                );
                break;
            }
            let mut row: Row = Vec::with_capacity(raw_row.len() / TOKEN_LENGTH);

            // strides are byte based; a row with multi byte characters
            // cannot form valid hex tokens in the first place
            for (x, stride) in raw_row.as_bytes().chunks_exact(TOKEN_LENGTH).enumerate() {
                if x == self.options.get_max_width() {
                    warn!(
                        "Token limit {} reached in row {}, dropping the rest of the row",
                        self.options.get_max_width(),
                        y
                    );
                    break;
                }
                let mut raw = [0_u8; TOKEN_LENGTH];
                raw.copy_from_slice(stride);

                let token = ColorToken::new(raw);

                if self.options.get_strict_mode() && token.to_rgba().is_none() {
                    return Err(CoiErrors::InvalidHexToken(y, x, *token.as_bytes()));
                }
                row.push(token);
            }
            rows.push(row);
        }
        trace!("Decoded {} rows", rows.len());

        Ok(CoiImage::new(rows))
    }
}
