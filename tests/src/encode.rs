/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use coi::{CoiDecoder, CoiEncoder};
use coi_core::options::EncoderOptions;

use crate::SCENARIO;

/// Encoding decoded pixels reproduces canonical uppercase input
#[test]
fn encode_round_trips_canonical_text() {
    let image = CoiDecoder::new(SCENARIO).decode().unwrap();

    // flatten row zero and row one into an RGBA buffer; the second row
    // is padded to the image width so the buffer stays rectangular
    let width = image.width();
    let mut pixels = Vec::new();

    for row in image.rows() {
        for token in row {
            let color = token.to_rgba().unwrap();
            pixels.extend_from_slice(&[color.r, color.g, color.b, color.a]);
        }
        for _ in row.len()..width {
            pixels.extend_from_slice(&[0, 0, 0, 0]);
        }
    }

    let encoded = CoiEncoder::new(&pixels, EncoderOptions::new(width, image.height()))
        .encode()
        .unwrap();

    assert_eq!(encoded, "FF0000FF00FF00FF|0000FFFF00000000");

    // and the encoded form decodes back to the same pixel values
    let reparsed = CoiDecoder::new(&encoded).decode().unwrap();
    assert_eq!(reparsed.rows()[0], CoiDecoder::new(SCENARIO).decode().unwrap().rows()[0]);
}

#[test]
fn encode_rejects_short_buffers() {
    let pixels = [0_u8; 4];

    assert!(CoiEncoder::new(&pixels, EncoderOptions::new(2, 1))
        .encode()
        .is_err());
}
