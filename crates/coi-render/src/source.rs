/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Acquisition of COI resources
//!
//! Retrieval is a collaborator of the pipeline, not part of the format:
//! the decoder only ever sees the string a source produced. Anything
//! that can resolve a resource identifier to text can implement
//! [`CoiSource`], the two implementations here cover files on disk and
//! text already in memory.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::trace;

use crate::errors::RetrievalError;

/// Anything a COI blob can be fetched from
pub trait CoiSource {
    /// Fetch the full text of `resource`
    ///
    /// # Returns
    /// - `Ok(text)`: The complete COI blob
    /// - `Err`: The resource is unreachable or could not be served,
    ///    see [`RetrievalError`]
    fn fetch(&self, resource: &str) -> Result<String, RetrievalError>;
}

/// A source reading resources from files under a root directory
pub struct FileSource {
    root: PathBuf
}

impl FileSource {
    /// Create a source resolving resources relative to `root`
    pub fn new<P: AsRef<Path>>(root: P) -> FileSource {
        FileSource {
            root: root.as_ref().to_owned()
        }
    }
}

impl CoiSource for FileSource {
    fn fetch(&self, resource: &str) -> Result<String, RetrievalError> {
        let path = self.root.join(resource);

        trace!("Fetching {}", path.display());

        fs::read_to_string(&path).map_err(|err| match err.kind() {
            ErrorKind::NotFound => RetrievalError::NotFound(resource.into()),
            _ => RetrievalError::Io(err)
        })
    }
}

/// A source serving resources inserted up front
///
/// Useful for tests and for callers that already hold the text.
#[derive(Default)]
pub struct MemorySource {
    resources: HashMap<String, String>
}

impl MemorySource {
    /// Create an empty source
    pub fn new() -> MemorySource {
        MemorySource::default()
    }

    /// Register `text` under `resource`, replacing any previous entry
    pub fn insert(&mut self, resource: &str, text: &str) {
        self.resources.insert(resource.into(), text.into());
    }
}

impl CoiSource for MemorySource {
    fn fetch(&self, resource: &str) -> Result<String, RetrievalError> {
        self.resources
            .get(resource)
            .cloned()
            .ok_or_else(|| RetrievalError::NotFound(resource.into()))
    }
}
