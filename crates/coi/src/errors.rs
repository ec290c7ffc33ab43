/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Errors possible during decoding and encoding

use alloc::string::String;
use core::fmt::{Debug, Display, Formatter};

/// Possible errors that may occur during decoding
///
/// Decoding a COI blob cannot fail for structural reasons, so with
/// default options a decode always succeeds. The variants below only
/// surface in strict mode or from callers mapping their own failures.
pub enum CoiErrors {
    /// Strict mode found a token that does not interpret as a color
    ///
    /// # Arguments
    /// - 1st argument is the row index of the token
    /// - 2nd argument is the token index within the row
    /// - 3rd argument is the raw token
    InvalidHexToken(usize, usize, [u8; 8]),
    /// Generic message
    Generic(String),
    /// Generic message that does not need heap allocation
    GenericStatic(&'static str)
}

impl Debug for CoiErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            CoiErrors::InvalidHexToken(row, column, token) => {
                writeln!(
                    f,
                    "Token `{}` at row {row}, column {column} is not valid hex",
                    String::from_utf8_lossy(token)
                )
            }
            CoiErrors::Generic(val) => {
                writeln!(f, "{val}")
            }
            CoiErrors::GenericStatic(val) => {
                writeln!(f, "{val}")
            }
        }
    }
}

impl Display for CoiErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

impl From<&'static str> for CoiErrors {
    fn from(r: &'static str) -> Self {
        Self::GenericStatic(r)
    }
}

/// Errors encountered during encoding
pub enum CoiEncodeErrors {
    /// The pixel buffer does not match the configured dimensions
    ///
    /// # Arguments
    /// - 1st argument is the number of bytes the dimensions require
    /// - 2nd argument is the number of bytes actually present
    WrongPixelCount(usize, usize),

    Generic(&'static str)
}

impl Debug for CoiEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            CoiEncodeErrors::WrongPixelCount(expected, found) => {
                writeln!(
                    f,
                    "Wrong pixel buffer size, dimensions require {expected} bytes but found {found}"
                )
            }
            CoiEncodeErrors::Generic(val) => {
                writeln!(f, "{val}")
            }
        }
    }
}

impl Display for CoiEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

impl From<&'static str> for CoiEncodeErrors {
    fn from(r: &'static str) -> Self {
        Self::Generic(r)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CoiErrors {}

#[cfg(feature = "std")]
impl std::error::Error for CoiEncodeErrors {}
