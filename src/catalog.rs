// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Video catalog.
//!
//! The catalog lists the videos under a root folder once, at startup. Frame
//! collections are only built when a video is loaded.

use crate::collection::{FrameCollection, FrameSource};
use crate::error::{BrowserError, Result};
use crate::models::config::BrowserConfig;
use std::path::{Path, PathBuf};

/// An ordered set of videos that can each be loaded as a frame source.
pub trait VideoSource {
    type Frames: FrameSource;

    /// Location the videos were listed from.
    fn root(&self) -> &Path;

    /// Number of videos.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Display name of the video at `index`.
    fn name(&self, index: usize) -> Result<&str>;

    /// Build a fresh frame source for the video at `index`.
    ///
    /// An empty source is a valid result; callers decide how to handle it.
    fn load(&self, index: usize) -> Result<Self::Frames>;
}

/// Videos stored as sub-folders of a root folder, sorted by name.
#[derive(Debug, Clone)]
pub struct VideoCatalog {
    root: PathBuf,
    videos: Vec<String>,
    config: BrowserConfig,
}

impl VideoCatalog {
    /// List the sub-folders of `root`.
    pub fn open(root: &Path, config: BrowserConfig) -> Result<Self> {
        let entries = std::fs::read_dir(root).map_err(|e| BrowserError::io(root, e))?;

        let mut videos = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| BrowserError::io(root, e))?;
            if !entry.path().is_dir() {
                continue;
            }
            match entry.file_name().into_string() {
                Ok(name) => videos.push(name),
                Err(name) => log::warn!("Skipping non UTF-8 folder {:?}", name),
            }
        }
        videos.sort();

        log::info!("Found {} videos under {}", videos.len(), root.display());
        Ok(Self {
            root: root.to_path_buf(),
            videos,
            config,
        })
    }
}

impl VideoSource for VideoCatalog {
    type Frames = FrameCollection;

    fn root(&self) -> &Path {
        &self.root
    }

    fn len(&self) -> usize {
        self.videos.len()
    }

    fn name(&self, index: usize) -> Result<&str> {
        self.videos
            .get(index)
            .map(String::as_str)
            .ok_or(BrowserError::OutOfRange {
                index,
                len: self.videos.len(),
            })
    }

    fn load(&self, index: usize) -> Result<FrameCollection> {
        let name = self.name(index)?;
        let collection = FrameCollection::open(&self.root.join(name), &self.config)?;
        log::info!(
            "Loaded video {} ({} frames) from {}",
            name,
            collection.len(),
            collection.folder().display()
        );
        Ok(collection)
    }
}
