/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use coi_core::color::Rgba;
use coi_core::options::DecoderOptions;
use coi_render::{pipeline, CoiRenderer, CoiSource, FileSource, MemorySource, PixelSurface};

use crate::SCENARIO;

#[test]
fn fetch_decode_render_end_to_end() {
    let mut source = MemorySource::new();
    source.insert("image.coi", SCENARIO);

    let mut surface = PixelSurface::new(4, 4);

    pipeline::run(
        &source,
        "image.coi",
        &CoiRenderer::default(),
        &mut surface,
        DecoderOptions::default()
    )
    .unwrap();

    assert_eq!(surface.get_pixel(0, 0), Some(Rgba::new(255, 0, 0, 255)));
    assert!(!surface.get_smoothing());
}

#[test]
fn missing_file_resources_fail_retrieval() {
    let source = FileSource::new(env!("CARGO_MANIFEST_DIR"));

    assert!(source.fetch("does-not-exist.coi").is_err());
}

/// The display entry point reports failures instead of panicking
#[test]
fn draw_survives_a_dead_source() {
    let source = MemorySource::new();
    let mut surface = PixelSurface::new(2, 2);

    pipeline::draw(&source, "gone.coi", &CoiRenderer::default(), &mut surface);

    assert!(surface.get_pixels().iter().all(|x| *x == 0));
}
