// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Frame and video navigation.
//!
//! [`Navigator`] owns the current video, its frame source and the current
//! frame index, and applies the browsing commands. After every change it
//! pushes the new frame and control positions to a [`FrameView`].
//!
//! Invariants kept by every command:
//! - the loaded frame source is never empty;
//! - `frame_index < frame_count()`;
//! - when a read, load or delete fails, the indices are left unchanged.

use crate::catalog::VideoSource;
use crate::collection::FrameSource;
use crate::error::{BrowserError, Result};
use crate::models::frame::{Frame, FrameImage, Point};
use crate::util::geometry::{frame_to_position, position_to_frame};
use std::path::Path;
use std::time::Duration;

/// Display surface driven by the navigator.
pub trait FrameView {
    fn set_image(&mut self, image: &FrameImage);
    fn set_points(&mut self, points: &[Point]);
    fn set_title(&mut self, title: &str);
    /// Move the frame slider to a normalized position.
    fn set_frame_position(&mut self, position: f64, frame_count: usize);
    /// Move the video slider to `index`.
    fn set_video_position(&mut self, index: usize, video_count: usize);
    fn request_redraw(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Forward,
    Backward,
}

/// Browsing state over a video source.
///
/// Commands return `Ok(true)` when the state changed and `Ok(false)` when
/// they were a no-op at a boundary.
pub struct Navigator<V: VideoSource> {
    catalog: V,
    video_index: usize,
    frame_index: usize,
    collection: V::Frames,
}

impl<V: VideoSource> Navigator<V> {
    /// Start on the first video whose first frame can be shown.
    pub fn open(catalog: V, view: &mut impl FrameView) -> Result<Self> {
        for index in 0..catalog.len() {
            let (collection, frame) = match load_first(&catalog, index) {
                Ok(loaded) => loaded,
                Err(e) if e.skips_video() => {
                    log::warn!("Skipping video {}: {}", index, e);
                    continue;
                }
                Err(e) => return Err(e),
            };
            let navigator = Self {
                catalog,
                video_index: index,
                frame_index: 0,
                collection,
            };
            navigator.present(&frame, view);
            navigator.sync_sliders(view);
            view.set_title(&navigator.title());
            view.request_redraw();
            return Ok(navigator);
        }
        Err(BrowserError::NoVideos {
            root: catalog.root().to_path_buf(),
        })
    }

    pub fn video_index(&self) -> usize {
        self.video_index
    }

    pub fn frame_index(&self) -> usize {
        self.frame_index
    }

    pub fn frame_count(&self) -> usize {
        self.collection.len()
    }

    pub fn video_count(&self) -> usize {
        self.catalog.len()
    }

    pub fn video_name(&self) -> &str {
        self.catalog.name(self.video_index).unwrap_or_default()
    }

    /// Backing (annotation, image) files of the current frame.
    pub fn current_paths(&self) -> Option<(&Path, &Path)> {
        self.collection.path_pair(self.frame_index)
    }

    pub fn next_frame(&mut self, view: &mut impl FrameView) -> Result<bool> {
        if self.frame_index + 1 >= self.collection.len() {
            return Ok(false);
        }
        self.goto_frame(self.frame_index + 1, view, true)?;
        Ok(true)
    }

    pub fn prev_frame(&mut self, view: &mut impl FrameView) -> Result<bool> {
        if self.frame_index == 0 {
            return Ok(false);
        }
        self.goto_frame(self.frame_index - 1, view, true)?;
        Ok(true)
    }

    /// Move to the next video with frames, starting at its first frame.
    pub fn next_video(&mut self, view: &mut impl FrameView) -> Result<bool> {
        self.step_video(Direction::Forward, view)
    }

    /// Move to the previous video with frames, starting at its first frame.
    pub fn prev_video(&mut self, view: &mut impl FrameView) -> Result<bool> {
        self.step_video(Direction::Backward, view)
    }

    /// Jump to the frame at a normalized slider position.
    ///
    /// The slider already shows `position`, so it is not written back.
    pub fn set_frame(&mut self, position: f64, view: &mut impl FrameView) -> Result<bool> {
        let target = position_to_frame(position, self.collection.len());
        if target == self.frame_index {
            return Ok(false);
        }
        self.goto_frame(target, view, false)?;
        Ok(true)
    }

    /// Load the video at a slider position, rounded to the nearest index.
    ///
    /// The video slider already shows `position`, so only the frame slider
    /// is reset. An empty target video is refused with `EmptyCollection`.
    pub fn set_video(&mut self, position: f64, view: &mut impl FrameView) -> Result<bool> {
        if !position.is_finite() {
            return Ok(false);
        }
        let last = self.catalog.len().saturating_sub(1);
        let target = (position.round().max(0.0) as usize).min(last);
        self.enter_video(target, view, false)?;
        Ok(true)
    }

    /// Play the current video from the current frame to its last frame,
    /// waiting `delay` between frames. Blocks until the last frame is shown.
    pub fn play(&mut self, view: &mut impl FrameView, delay: Duration) -> Result<()> {
        self.goto_frame(self.frame_index, view, true)?;
        while self.frame_index + 1 < self.collection.len() {
            if !delay.is_zero() {
                std::thread::sleep(delay);
            }
            self.play_step(view)?;
        }
        Ok(())
    }

    /// Advance playback by one frame. Returns `false` once the last frame
    /// is reached, at which point playback is over.
    pub fn play_step(&mut self, view: &mut impl FrameView) -> Result<bool> {
        self.next_frame(view)
    }

    /// Delete the current frame's files and show the frame that takes its
    /// place, or the new last frame when the last one was deleted.
    ///
    /// The only frame of a video is never deleted. The replacement frame
    /// is decoded first, so nothing is removed when it cannot be shown.
    pub fn delete_current_frame(&mut self, view: &mut impl FrameView) -> Result<bool> {
        let len = self.collection.len();
        if len <= 1 {
            return Err(BrowserError::EmptyCollection {
                video: self.video_name().to_string(),
            });
        }
        let deleting_last = self.frame_index + 1 == len;
        let successor = if deleting_last {
            self.frame_index - 1
        } else {
            self.frame_index + 1
        };
        let frame = self.collection.get(successor)?;

        self.collection.delete(self.frame_index)?;
        if deleting_last {
            self.frame_index -= 1;
        }

        self.present(&frame, view);
        view.set_frame_position(
            frame_to_position(self.frame_index, self.collection.len()),
            self.collection.len(),
        );
        view.request_redraw();
        Ok(true)
    }

    /// Write the current positions back to both sliders.
    pub fn sync_sliders(&self, view: &mut impl FrameView) {
        view.set_video_position(self.video_index, self.catalog.len());
        view.set_frame_position(
            frame_to_position(self.frame_index, self.collection.len()),
            self.collection.len(),
        );
    }

    fn title(&self) -> String {
        format!("Video: {}", self.video_name())
    }

    fn present(&self, frame: &Frame, view: &mut impl FrameView) {
        view.set_image(&frame.image);
        view.set_points(&frame.points);
    }

    fn goto_frame(
        &mut self,
        target: usize,
        view: &mut impl FrameView,
        sync_slider: bool,
    ) -> Result<()> {
        let frame = self.collection.get(target)?;
        self.frame_index = target;
        log::debug!("Showing frame {} of video {}", target, self.video_index);

        self.present(&frame, view);
        if sync_slider {
            view.set_frame_position(
                frame_to_position(target, self.collection.len()),
                self.collection.len(),
            );
        }
        view.request_redraw();
        Ok(())
    }

    fn enter_video(
        &mut self,
        target: usize,
        view: &mut impl FrameView,
        sync_video_slider: bool,
    ) -> Result<()> {
        let (collection, frame) = load_first(&self.catalog, target)?;

        self.video_index = target;
        self.frame_index = 0;
        self.collection = collection;

        self.present(&frame, view);
        view.set_title(&self.title());
        view.set_frame_position(0.0, self.collection.len());
        if sync_video_slider {
            view.set_video_position(target, self.catalog.len());
        }
        view.request_redraw();
        Ok(())
    }

    fn step_video(&mut self, direction: Direction, view: &mut impl FrameView) -> Result<bool> {
        let candidates: Box<dyn Iterator<Item = usize>> = match direction {
            Direction::Forward => Box::new(self.video_index + 1..self.catalog.len()),
            Direction::Backward => Box::new((0..self.video_index).rev()),
        };
        for target in candidates {
            match self.enter_video(target, view, true) {
                Ok(()) => return Ok(true),
                Err(e) if e.skips_video() => {
                    log::warn!("Skipping video {}: {}", target, e);
                }
                Err(e) => return Err(e),
            }
        }
        Ok(false)
    }
}

/// Load a video and decode its first frame. An empty video is an
/// `EmptyCollection` error.
fn load_first<V: VideoSource>(catalog: &V, index: usize) -> Result<(V::Frames, Frame)> {
    let collection = catalog.load(index)?;
    if collection.is_empty() {
        return Err(BrowserError::EmptyCollection {
            video: catalog.name(index)?.to_string(),
        });
    }
    let frame = collection.get(0)?;
    Ok((collection, frame))
}
