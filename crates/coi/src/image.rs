/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! The decoded image representation
//!
//! A decoded COI image is rows of tokens, nothing more. Tokens keep
//! their raw characters; interpretation into colors happens when a
//! consumer asks for it, so that a permissive decode can carry
//! malformed tokens through untouched.

use alloc::vec::Vec;

use coi_core::color::Rgba;

/// A single color token, the raw 8 characters of one pixel
///
/// A token is only ever constructed from exactly 8 characters, shorter
/// trailing fragments of a row never become tokens.
///
/// The characters are not guaranteed to be valid hex, see
/// [`ColorToken::to_rgba`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct ColorToken([u8; 8]);

impl ColorToken {
    pub(crate) const fn new(raw: [u8; 8]) -> ColorToken {
        ColorToken(raw)
    }

    /// Get the raw characters of this token
    pub const fn as_bytes(&self) -> &[u8; 8] {
        &self.0
    }

    /// Interpret this token as an RGBA color
    ///
    /// # Returns
    /// - `Some(color)`: The token is 8 hex digits
    /// - `None`: The token contains at least one non hex character
    pub fn to_rgba(&self) -> Option<Rgba> {
        Rgba::from_token(&self.0)
    }
}

/// A row of an image, tokens ordered left to right
pub type Row = Vec<ColorToken>;

/// A decoded COI image
///
/// Rows are ordered top to bottom; the row index is the vertical pixel
/// position and the token index within a row is the horizontal one.
///
/// An image is a transient value: it is produced by one decode call,
/// handed to a renderer and dropped. Nothing mutates it after
/// construction.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CoiImage {
    rows: Vec<Row>
}

impl CoiImage {
    pub(crate) fn new(rows: Vec<Row>) -> CoiImage {
        CoiImage { rows }
    }

    /// Get all rows of the image
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Number of rows in the image
    ///
    /// Never zero: even an empty blob decodes to one empty row.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Number of tokens in the widest row
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }
}
