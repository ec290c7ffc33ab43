/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Global decoder options

/// Decoder options
///
/// The same options struct is shared by everything that drives a decode,
/// from direct `CoiDecoder` use to the render pipeline.
#[derive(Debug, Copy, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DecoderOptions {
    /// Maximum number of tokens the decoder will keep per row.
    ///
    /// Tokens past this index are dropped with a warning, decoding
    /// does not fail.
    ///
    /// - Default value: 131072 (`1 << 17`)
    max_width:   usize,
    /// Maximum number of rows the decoder will keep.
    ///
    /// Rows past this index are dropped with a warning, decoding
    /// does not fail.
    ///
    /// - Default value: 131072 (`1 << 17`)
    max_height:  usize,
    /// Treat malformed tokens as errors
    ///
    /// When set to false, tokens whose characters are not hex digits
    /// survive decoding untouched and the renderer later skips them
    /// with a warning.
    ///
    /// When set to true, the decoder returns an `Err` on the first
    /// token that does not interpret as a color.
    ///
    /// - Default value: false
    strict_mode: bool
}

impl Default for DecoderOptions {
    fn default() -> Self {
        Self {
            max_width:   1 << 17,
            max_height:  1 << 17,
            strict_mode: false
        }
    }
}

/// Getters
impl DecoderOptions {
    /// Get the maximum number of tokens kept per row
    pub const fn get_max_width(&self) -> usize {
        self.max_width
    }

    /// Get the maximum number of rows kept per image
    pub const fn get_max_height(&self) -> usize {
        self.max_height
    }

    /// Get whether malformed tokens abort decoding
    pub const fn get_strict_mode(&self) -> bool {
        self.strict_mode
    }
}

/// Setters
impl DecoderOptions {
    /// Set the maximum number of tokens kept per row
    ///
    /// # Example
    /// ```
    /// use coi_core::options::DecoderOptions;
    ///
    /// let options = DecoderOptions::default().set_max_width(80);
    /// assert_eq!(options.get_max_width(), 80);
    /// ```
    pub fn set_max_width(mut self, width: usize) -> Self {
        self.max_width = width;
        self
    }

    /// Set the maximum number of rows kept per image
    pub fn set_max_height(mut self, height: usize) -> Self {
        self.max_height = height;
        self
    }

    /// Set whether malformed tokens abort decoding
    pub fn set_strict_mode(mut self, yes: bool) -> Self {
        self.strict_mode = yes;
        self
    }
}
