/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Decoding and encoding of the Color-Over-Interchange text image format
//!
//! COI is a plain text pixel format. An image is a single UTF-8/ASCII
//! blob whose rows are separated by `|`; each row is a concatenation of
//! 8 character `RRGGBBAA` hex tokens with no delimiter between tokens.
//! There is no header, no magic bytes, no length prefix and no checksum.
//!
//! A trailing fragment shorter than 8 characters at the end of a row is
//! not a token and is silently dropped.
//!
//! ```text
//! FF0000FF00FF00FF|0000FFFF
//! ^ row 0: red, green        ^ row 1: blue
//! ```
//!
//! # Decoding
//! ```
//! use coi::CoiDecoder;
//!
//! let image = CoiDecoder::new("FF0000FF00FF00FF|0000FFFF").decode().unwrap();
//!
//! assert_eq!(image.height(), 2);
//! assert_eq!(image.rows()[0].len(), 2);
//! ```
//!
//! # Features
//! - `std`: Implements `std::error::Error` for the error types. On by
//!    default, disable for `no_std` use.
#![cfg_attr(not(feature = "std"), no_std)]
extern crate alloc;

pub use coi_core;
pub use decoder::CoiDecoder;
pub use encoder::CoiEncoder;
pub use errors::{CoiEncodeErrors, CoiErrors};
pub use image::{CoiImage, ColorToken, Row};

mod constants;
mod decoder;
mod encoder;
mod errors;
mod image;
