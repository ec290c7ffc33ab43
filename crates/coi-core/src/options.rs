/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Decoder and encoder options
//!
//! This module exposes the structs through which callers influence
//! decoding and encoding without touching decoder internals.

mod decoder;
mod encoder;

pub use decoder::DecoderOptions;
pub use encoder::EncoderOptions;
