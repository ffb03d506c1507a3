// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Landmark Browser library.
//!
//! The browsing core (frame sources, the video catalog and the navigator)
//! is independent of egui; `app` and `ui` wire it to an eframe window.

pub mod app;
pub mod catalog;
pub mod collection;
pub mod error;
pub mod io;
pub mod models;
pub mod navigation;
pub mod ui;
pub mod util;

#[cfg(test)]
mod test_support;
