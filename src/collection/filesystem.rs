// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Frame collection backed by a folder of image and landmark files.

use super::FrameSource;
use crate::error::{BrowserError, Result};
use crate::io::{media, points};
use crate::models::config::BrowserConfig;
use crate::models::frame::Frame;
use std::path::{Path, PathBuf};

/// Matched file pair for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
struct FramePaths {
    shape: PathBuf,
    image: PathBuf,
}

/// The frames of one video folder.
///
/// Only images whose sibling landmark file (same stem, shape extension)
/// exists are kept, sorted by file name. Frames are decoded on every `get`.
#[derive(Debug)]
pub struct FrameCollection {
    folder: PathBuf,
    frames: Vec<FramePaths>,
    to_gray: bool,
}

impl FrameCollection {
    /// Scan `folder` for frame pairs.
    pub fn open(folder: &Path, config: &BrowserConfig) -> Result<Self> {
        let entries = std::fs::read_dir(folder).map_err(|e| BrowserError::io(folder, e))?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| BrowserError::io(folder, e))?;
            let Ok(name) = entry.file_name().into_string() else {
                log::warn!("Skipping non UTF-8 file name in {}", folder.display());
                continue;
            };
            if name.ends_with(&config.image_ext) && entry.path().is_file() {
                names.push(name);
            }
        }
        names.sort();

        let mut frames = Vec::with_capacity(names.len());
        for name in names {
            let stem = &name[..name.len() - config.image_ext.len()];
            let shape = folder.join(format!("{}{}", stem, config.shape_ext));
            if shape.is_file() {
                frames.push(FramePaths {
                    shape,
                    image: folder.join(&name),
                });
            } else {
                log::warn!("No landmark file for {}, skipping", folder.join(&name).display());
            }
        }

        if frames.is_empty() {
            log::warn!("Empty video: {}", folder.display());
        }

        Ok(Self {
            folder: folder.to_path_buf(),
            frames,
            to_gray: config.to_gray,
        })
    }

    pub fn folder(&self) -> &Path {
        &self.folder
    }

    fn check(&self, index: usize) -> Result<&FramePaths> {
        self.frames.get(index).ok_or(BrowserError::OutOfRange {
            index,
            len: self.frames.len(),
        })
    }
}

impl FrameSource for FrameCollection {
    fn len(&self) -> usize {
        self.frames.len()
    }

    fn get(&self, index: usize) -> Result<Frame> {
        let paths = self.check(index)?;
        let points = points::load_points(&paths.shape)?;
        let image = media::load_image(&paths.image, self.to_gray)?;
        Ok(Frame { points, image })
    }

    /// Remove both files of a frame, then drop it from the sequence.
    ///
    /// The landmark file is removed first. If the image cannot be removed
    /// afterwards, the landmark file is written back so disk and memory
    /// still agree, and the error is returned.
    fn delete(&mut self, index: usize) -> Result<()> {
        let paths = self.check(index)?.clone();

        let shape_bytes =
            std::fs::read(&paths.shape).map_err(|e| BrowserError::io(&paths.shape, e))?;
        std::fs::remove_file(&paths.shape).map_err(|e| BrowserError::io(&paths.shape, e))?;

        if let Err(e) = std::fs::remove_file(&paths.image) {
            if let Err(restore) = std::fs::write(&paths.shape, &shape_bytes) {
                log::error!(
                    "Failed to restore {} after aborted delete: {}",
                    paths.shape.display(),
                    restore
                );
            }
            return Err(BrowserError::io(&paths.image, e));
        }

        self.frames.remove(index);
        log::info!("Deleted frame {} ({})", index, paths.image.display());
        Ok(())
    }

    fn path_pair(&self, index: usize) -> Option<(&Path, &Path)> {
        self.frames
            .get(index)
            .map(|p| (p.shape.as_path(), p.image.as_path()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::write_frame;

    fn five_frames() -> (tempfile::TempDir, FrameCollection) {
        let dir = tempfile::tempdir().unwrap();
        for i in 0..5u8 {
            write_frame(dir.path(), &format!("f{i}"), i * 10);
        }
        let collection = FrameCollection::open(dir.path(), &BrowserConfig::default()).unwrap();
        (dir, collection)
    }

    #[test]
    fn test_scan_sorts_and_matches_pairs() {
        let (dir, collection) = five_frames();
        assert_eq!(collection.len(), 5);
        assert_eq!(collection.folder(), dir.path());

        let (shape, image) = collection.path_pair(3).unwrap();
        assert_eq!(shape, dir.path().join("f3.pts"));
        assert_eq!(image, dir.path().join("f3.png"));
        assert!(collection.path_pair(5).is_none());
    }

    #[test]
    fn test_image_without_landmarks_is_excluded() {
        let dir = tempfile::tempdir().unwrap();
        write_frame(dir.path(), "a", 1);
        write_frame(dir.path(), "c", 3);
        image::GrayImage::new(2, 2)
            .save(dir.path().join("b.png"))
            .unwrap();
        std::fs::write(dir.path().join("orphan.pts"), "x").unwrap();

        let collection = FrameCollection::open(dir.path(), &BrowserConfig::default()).unwrap();
        assert_eq!(collection.len(), 2);
        assert_eq!(collection.get(1).unwrap().points[0].x, 3.0);
    }

    #[test]
    fn test_configured_extensions() {
        let dir = tempfile::tempdir().unwrap();
        write_frame(dir.path(), "a", 1);
        std::fs::rename(dir.path().join("a.pts"), dir.path().join("a.land")).unwrap();

        let config = BrowserConfig {
            shape_ext: ".land".to_string(),
            ..BrowserConfig::default()
        };
        assert_eq!(FrameCollection::open(dir.path(), &config).unwrap().len(), 1);
        assert_eq!(
            FrameCollection::open(dir.path(), &BrowserConfig::default())
                .unwrap()
                .len(),
            0
        );
    }

    #[test]
    fn test_get_is_idempotent() {
        let (_dir, collection) = five_frames();
        let first = collection.get(2).unwrap();
        let second = collection.get(2).unwrap();

        assert_eq!(first, second);
        assert_eq!(first.points.len(), 2);
        assert_eq!(first.image.pixels, vec![20; 12]);
    }

    #[test]
    fn test_get_out_of_range() {
        let (_dir, collection) = five_frames();
        assert!(matches!(
            collection.get(5),
            Err(BrowserError::OutOfRange { index: 5, len: 5 })
        ));
    }

    #[test]
    fn test_delete_shifts_later_frames() {
        let (dir, mut collection) = five_frames();
        let f3 = collection.get(3).unwrap();

        collection.delete(2).unwrap();

        assert_eq!(collection.len(), 4);
        assert_eq!(collection.get(2).unwrap(), f3);
        assert!(!dir.path().join("f2.png").exists());
        assert!(!dir.path().join("f2.pts").exists());
        for stem in ["f0", "f1", "f3", "f4"] {
            assert!(dir.path().join(format!("{stem}.png")).exists());
            assert!(dir.path().join(format!("{stem}.pts")).exists());
        }
        let order: Vec<_> = (0..4)
            .map(|i| collection.get(i).unwrap().image.pixels[0])
            .collect();
        assert_eq!(order, vec![0, 10, 30, 40]);
    }

    #[test]
    fn test_delete_out_of_range_keeps_files() {
        let (dir, mut collection) = five_frames();
        assert!(matches!(
            collection.delete(7),
            Err(BrowserError::OutOfRange { .. })
        ));
        assert_eq!(collection.len(), 5);
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 10);
    }

    #[test]
    fn test_failed_image_removal_restores_landmarks() {
        let (dir, mut collection) = five_frames();
        let image = dir.path().join("f1.png");
        // A directory in place of the image makes remove_file fail.
        std::fs::remove_file(&image).unwrap();
        std::fs::create_dir(&image).unwrap();
        let before = std::fs::read(dir.path().join("f1.pts")).unwrap();

        assert!(matches!(collection.delete(1), Err(BrowserError::Io { .. })));

        assert_eq!(collection.len(), 5);
        assert_eq!(std::fs::read(dir.path().join("f1.pts")).unwrap(), before);
    }

    #[test]
    fn test_missing_folder_is_io_failure() {
        let dir = tempfile::tempdir().unwrap();
        let result = FrameCollection::open(&dir.path().join("nope"), &BrowserConfig::default());
        assert!(matches!(result, Err(BrowserError::Io { .. })));
    }
}
