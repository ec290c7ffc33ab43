/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Conformance tests for the coi family of crates
//!
//! These exercise the documented behavior of the decoder, renderer and
//! pipeline across crate boundaries; per-crate unit tests live next to
//! the code they cover.

#![allow(unused_imports, unused)]

use xxhash_rust::xxh3::xxh3_128;

mod decode;
mod encode;
mod pipeline;

/// The reference scenario: a red and a green token on row zero, one
/// blue token on row one
pub const SCENARIO: &str = "FF0000FF00FF00FF|0000FFFF";

pub fn hash(contents: &[u8]) -> u128 {
    xxh3_128(contents)
}
