// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Error types shared by the collection, catalog and navigation layers.

use std::path::PathBuf;
use thiserror::Error;

/// Failures raised while reading, deleting or navigating frames.
#[derive(Debug, Error)]
pub enum BrowserError {
    /// An index outside `[0, len)` reached a collection or catalog.
    #[error("index {index} out of range (length {len})")]
    OutOfRange { index: usize, len: usize },

    /// A file could not be read, listed or removed.
    #[error("I/O failure on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A video with no matched (image, annotation) pairs.
    #[error("video '{video}' has no frames")]
    EmptyCollection { video: String },

    /// No video in the catalog has at least one frame.
    #[error("no video with a readable frame under {}", root.display())]
    NoVideos { root: PathBuf },

    /// An image file could not be decoded.
    #[error("failed to decode image {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// A landmark file does not follow the point-file layout.
    #[error("malformed landmark file {} at line {line}: {reason}", path.display())]
    MalformedPoints {
        path: PathBuf,
        line: usize,
        reason: String,
    },
}

impl BrowserError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl BrowserError {
    /// Whether a video failing with this error is passed over while
    /// searching for one to show.
    pub fn skips_video(&self) -> bool {
        matches!(
            self,
            Self::EmptyCollection { .. }
                | Self::Io { .. }
                | Self::Decode { .. }
                | Self::MalformedPoints { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, BrowserError>;
