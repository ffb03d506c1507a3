// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Frame sources.
//!
//! A frame source is an ordered, index-addressable sequence of frames with
//! no gaps: after a deletion every later frame shifts down by one.

mod filesystem;
#[cfg(test)]
pub mod memory;

pub use filesystem::FrameCollection;

use crate::error::Result;
use crate::models::frame::Frame;
use std::path::Path;

/// An ordered sequence of frames that supports removal.
pub trait FrameSource {
    /// Number of surviving frames.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Decode the frame at `index`.
    fn get(&self, index: usize) -> Result<Frame>;

    /// Permanently remove the frame at `index`.
    fn delete(&mut self, index: usize) -> Result<()>;

    /// Backing (annotation, image) paths of a frame, if it has any.
    fn path_pair(&self, _index: usize) -> Option<(&Path, &Path)> {
        None
    }
}
