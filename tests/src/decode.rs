/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use coi::CoiDecoder;
use coi_core::options::DecoderOptions;

use crate::SCENARIO;

fn decode(input: &str) -> coi::CoiImage {
    CoiDecoder::new(input).decode().unwrap()
}

/// A row of length `8n` decodes to `n` tokens and a row of length
/// `8n + r` with `0 < r < 8` decodes to the same `n` tokens
#[test]
fn token_count_per_row() {
    let token = "00FF00FF";

    for n in 0..4 {
        let row = token.repeat(n);

        assert_eq!(decode(&row).rows()[0].len(), n);

        for r in 1..8 {
            let mut padded = row.clone();
            padded.push_str(&"A".repeat(r));

            assert_eq!(decode(&padded).rows()[0].len(), n, "remainder {r} not dropped");
        }
    }
}

/// Any input decodes to `count('|') + 1` rows
#[test]
fn row_count_is_separator_count_plus_one() {
    let inputs = [
        "",
        "|",
        "||",
        "FF0000FF",
        "FF0000FF|",
        SCENARIO,
        "junk|more junk|",
    ];

    for input in inputs {
        let separators = input.matches('|').count();
        let image = decode(input);

        assert_eq!(
            image.height(),
            separators + 1,
            "wrong row count for {input:?}"
        );
    }
}

#[test]
fn empty_input_is_one_empty_row() {
    let image = decode("");

    assert_eq!(image.height(), 1);
    assert_eq!(image.width(), 0);
    assert!(image.rows()[0].is_empty());
}

/// Decoding is a pure function of its input
#[test]
fn decode_is_deterministic() {
    let first = decode(SCENARIO);
    let second = decode(SCENARIO);

    assert_eq!(first, second);
}

/// The reference scenario decodes to the documented rows
#[test]
fn scenario_rows() {
    let image = decode(SCENARIO);

    assert_eq!(image.height(), 2);

    let row_0: Vec<&[u8; 8]> = image.rows()[0].iter().map(|t| t.as_bytes()).collect();
    let row_1: Vec<&[u8; 8]> = image.rows()[1].iter().map(|t| t.as_bytes()).collect();

    assert_eq!(row_0, [b"FF0000FF", b"00FF00FF"]);
    assert_eq!(row_1, [b"0000FFFF"]);
}

/// `"FF0000FFAB"` is one token, the trailing `AB` produces nothing
#[test]
fn malformed_trailing_fragment() {
    let image = decode("FF0000FFAB");

    assert_eq!(image.rows()[0].len(), 1);
    assert_eq!(image.rows()[0][0].as_bytes(), b"FF0000FF");
}

/// Hex validity is not checked by default, only strict mode rejects
#[test]
fn validation_policies() {
    let input = "XYZXYZXY";

    assert!(CoiDecoder::new(input).decode().is_ok());

    let strict = DecoderOptions::default().set_strict_mode(true);
    assert!(CoiDecoder::new_with_options(strict, input).decode().is_err());
}
