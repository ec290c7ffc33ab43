/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! The fetch, decode, render pipeline
//!
//! Acquisition is the only stage that can block or fail on the outside
//! world; decode and render run to completion once the text is in hand.
//! [`run`] propagates every failure as a value, [`draw`] reports it and
//! aborts, which is what a display loop wants.

use coi::CoiDecoder;
use coi_core::options::DecoderOptions;
use coi_core::surface::Surface;
use log::{error, trace};

use crate::errors::PipelineErrors;
use crate::renderer::CoiRenderer;
use crate::source::CoiSource;

/// Fetch `resource` from `source`, decode it and render it onto `surface`
///
/// # Returns
/// - `Ok(())`: The resource was rendered
/// - `Err`: Retrieval failed, or strict mode rejected a token
pub fn run(
    source: &dyn CoiSource, resource: &str, renderer: &CoiRenderer, surface: &mut dyn Surface,
    options: DecoderOptions
) -> Result<(), PipelineErrors> {
    let text = source.fetch(resource)?;
    let image = CoiDecoder::new_with_options(options, &text).decode()?;

    renderer.render(&image, surface);

    Ok(())
}

/// Render `resource` onto `surface`, reporting failures without panicking
///
/// A failure is logged and the pipeline aborts, leaving the surface as
/// it was. Runs with default decoder options, so only retrieval can
/// actually fail.
pub fn draw(
    source: &dyn CoiSource, resource: &str, renderer: &CoiRenderer, surface: &mut dyn Surface
) {
    match run(source, resource, renderer, surface, DecoderOptions::default()) {
        Ok(()) => trace!("Rendered `{resource}`"),
        Err(err) => error!("Could not render `{resource}`: {err:?}")
    }
}
