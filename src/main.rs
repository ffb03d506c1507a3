// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Landmark Browser
//!
//! A desktop tool for stepping through folders of video frames with their
//! facial landmark annotations overlaid, playing them back, and deleting
//! mislabeled frames.

use anyhow::Result;
use clap::Parser;
use landmark_browser::app::BrowserApp;
use landmark_browser::io;
use landmark_browser::models::config::BrowserConfig;
use std::path::PathBuf;

/// Browse video frame folders with their landmark annotations.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Root folder holding one sub-folder per video
    #[arg(default_value = "./videos/")]
    root: PathBuf,

    /// Settings file (YAML or JSON)
    #[arg(long, env = "LANDMARK_BROWSER_CONFIG")]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let args = Args::parse();
    let config = match args.config {
        Some(ref path) => io::serialization::load_config(path)?,
        None => BrowserConfig::default(),
    };
    log::debug!("Settings: {:?}", config);

    // Configure egui options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1024.0, 860.0])
            .with_min_inner_size([640.0, 480.0])
            .with_title("Landmark Browser"),
        ..Default::default()
    };

    // Run the application
    let root = args.root;
    eframe::run_native(
        "Landmark Browser",
        options,
        Box::new(move |_cc| Ok(Box::new(BrowserApp::new(&root, config)))),
    )
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
