/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Rendering of decoded COI images and acquisition of COI resources
//!
//! This crate sits on top of the `coi` format crate and adds the two
//! collaborators a decoder needs to become a display pipeline
//!
//! - [`CoiRenderer`]: paints a decoded image onto anything implementing
//!   the [`Surface`](coi_core::surface::Surface) trait, including the
//!   headless [`PixelSurface`] provided here
//! - [`CoiSource`]: resolves a resource identifier to COI text, with
//!   file backed and in memory implementations
//!
//! The [`pipeline`] module composes the two with the decoder.
//!
//! ```
//! use coi_render::{pipeline, CoiRenderer, MemorySource, PixelSurface};
//! use coi_core::color::Rgba;
//! use coi_core::options::DecoderOptions;
//!
//! let mut source = MemorySource::new();
//! source.insert("image.coi", "FF0000FF00FF00FF|0000FFFF");
//!
//! let mut surface = PixelSurface::new(4, 4);
//! let renderer = CoiRenderer::default();
//!
//! pipeline::run(
//!     &source,
//!     "image.coi",
//!     &renderer,
//!     &mut surface,
//!     DecoderOptions::default()
//! )
//! .unwrap();
//!
//! assert_eq!(surface.get_pixel(0, 0), Some(Rgba::new(255, 0, 0, 255)));
//! ```

pub use errors::{PipelineErrors, RetrievalError};
pub use renderer::CoiRenderer;
pub use source::{CoiSource, FileSource, MemorySource};
pub use surface::PixelSurface;

mod errors;
pub mod pipeline;
mod renderer;
mod source;
mod surface;
