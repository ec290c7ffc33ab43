/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Core routines shared by the coi family of crates
//!
//! This crate provides the primitives shared by the COI decoder,
//! encoder and renderer
//!
//! It currently contains
//!
//! - The `Rgba` pixel value and hex token interpretation
//! - Decoder and encoder options
//! - The `Surface` render target trait implemented by anything
//!   COI images can be painted onto
//!
//! This library is `#[no_std]`, none of its types allocate.
//!
//! # Features
//!  - `std`: Enables std facilities in dependent crates. On by default.
//!
//!  - `serde`: Enables serializing of some of the data structures
//!     present in the crate
#![cfg_attr(not(feature = "std"), no_std)]

pub mod color;
pub mod options;
pub mod surface;
