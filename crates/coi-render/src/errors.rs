/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Errors possible while fetching and rendering resources

use std::fmt::{Debug, Display, Formatter};

use coi::CoiErrors;

/// Possible errors that may occur while retrieving a COI resource
///
/// Retrieval is the only part of the pipeline that talks to the outside
/// world, so it is the only part that can fail for reasons other than
/// the input text itself.
pub enum RetrievalError {
    /// The resource does not exist
    NotFound(String),
    /// The resource exists but could not be served
    ///
    /// # Arguments
    /// - 1st argument is the resource identifier
    /// - 2nd argument is an HTTP like status code describing the failure
    Unavailable(String, u16),
    /// Reading the resource failed mid transfer
    Io(std::io::Error)
}

impl Debug for RetrievalError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            RetrievalError::NotFound(resource) => {
                writeln!(f, "Resource `{resource}` was not found")
            }
            RetrievalError::Unavailable(resource, status) => {
                writeln!(f, "Failed to fetch `{resource}`, status {status}")
            }
            RetrievalError::Io(err) => {
                writeln!(f, "I/O error {:?}", err)
            }
        }
    }
}

impl Display for RetrievalError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

impl From<std::io::Error> for RetrievalError {
    fn from(err: std::io::Error) -> Self {
        RetrievalError::Io(err)
    }
}

impl std::error::Error for RetrievalError {}

/// Errors surfaced by the fetch, decode, render pipeline
pub enum PipelineErrors {
    /// Fetching the resource failed
    Retrieval(RetrievalError),
    /// Decoding the fetched text failed, only possible in strict mode
    Decode(CoiErrors)
}

impl Debug for PipelineErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PipelineErrors::Retrieval(err) => {
                writeln!(f, "Retrieval failed: {:?}", err)
            }
            PipelineErrors::Decode(err) => {
                writeln!(f, "Decoding failed: {:?}", err)
            }
        }
    }
}

impl Display for PipelineErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

impl From<RetrievalError> for PipelineErrors {
    fn from(err: RetrievalError) -> Self {
        PipelineErrors::Retrieval(err)
    }
}

impl From<CoiErrors> for PipelineErrors {
    fn from(err: CoiErrors) -> Self {
        PipelineErrors::Decode(err)
    }
}

impl std::error::Error for PipelineErrors {}
