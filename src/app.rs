// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Main application state and egui App implementation.
//!
//! `BrowserApp` is the presentation shell: it owns the navigator, turns
//! widget and keyboard input into navigation commands, and draws whatever
//! the navigator last pushed into its `ShellView`.

use crate::catalog::VideoCatalog;
use crate::error::BrowserError;
use crate::models::{
    config::BrowserConfig,
    frame::{FrameImage, Point},
};
use crate::navigation::{FrameView, Navigator};
use crate::ui::{
    canvas,
    controls::{self, ControlAction, ControlState},
};
use std::path::Path;
use std::time::Instant;

/// Display state written by the navigator.
///
/// Images arrive as CPU buffers and are uploaded to a texture on the next
/// `update`, since the navigator has no access to the egui context.
#[derive(Default)]
pub struct ShellView {
    pending_image: Option<FrameImage>,
    texture: Option<egui::TextureHandle>,
    image_size: Option<(u32, u32)>,
    points: Vec<Point>,
    pending_title: Option<String>,
    controls: ControlState,
    redraw: bool,
}

impl FrameView for ShellView {
    fn set_image(&mut self, image: &FrameImage) {
        self.pending_image = Some(image.clone());
    }

    fn set_points(&mut self, points: &[Point]) {
        self.points = points.to_vec();
    }

    fn set_title(&mut self, title: &str) {
        self.pending_title = Some(title.to_string());
    }

    fn set_frame_position(&mut self, position: f64, frame_count: usize) {
        self.controls.frame_position = position;
        self.controls.frame_count = frame_count;
    }

    fn set_video_position(&mut self, index: usize, video_count: usize) {
        self.controls.video_position = index as f64;
        self.controls.video_count = video_count;
    }

    fn request_redraw(&mut self) {
        self.redraw = true;
    }
}

impl ShellView {
    /// Push pending image and title changes to egui.
    fn flush(&mut self, ctx: &egui::Context) {
        if let Some(image) = self.pending_image.take() {
            let size = [image.width as usize, image.height as usize];
            let color_image = egui::ColorImage::from_rgba_unmultiplied(size, &image.to_rgba());
            if let Some(texture) = self.texture.as_mut() {
                texture.set(color_image, egui::TextureOptions::LINEAR);
            } else {
                self.texture = Some(ctx.load_texture(
                    "frame",
                    color_image,
                    egui::TextureOptions::LINEAR,
                ));
            }
            self.image_size = Some((image.width, image.height));
        }

        if let Some(title) = self.pending_title.take() {
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(title));
        }

        if std::mem::take(&mut self.redraw) {
            ctx.request_repaint();
        }
    }

    fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Main application state.
pub struct BrowserApp {
    config: BrowserConfig,

    /// Navigation over the opened root folder, if it has any frames
    navigator: Option<Navigator<VideoCatalog>>,

    view: ShellView,

    /// When the next playback step is due, while playing
    playing: Option<Instant>,

    /// Last error shown in the status line
    status: Option<String>,
}

impl BrowserApp {
    /// Create the application and open `root`.
    pub fn new(root: &Path, config: BrowserConfig) -> Self {
        let mut app = Self {
            config,
            navigator: None,
            view: ShellView::default(),
            playing: None,
            status: None,
        };
        app.open_root(root);
        if app.config.autoplay && app.navigator.is_some() {
            // Leave the first frame on screen for one delay before stepping.
            app.playing = Some(Instant::now() + app.config.play_delay());
        }
        app
    }

    /// Replace the catalog with the videos under `root`.
    fn open_root(&mut self, root: &Path) {
        self.playing = None;
        self.navigator = None;
        self.view.clear();

        let result = VideoCatalog::open(root, self.config.clone())
            .and_then(|catalog| Navigator::open(catalog, &mut self.view));
        match result {
            Ok(navigator) => {
                log::info!(
                    "Browsing {} videos under {}",
                    navigator.video_count(),
                    root.display()
                );
                self.navigator = Some(navigator);
                self.status = None;
            }
            Err(e) => {
                self.view.clear();
                self.report(&e);
            }
        }
    }

    fn report(&mut self, error: &BrowserError) {
        log::error!("{}", error);
        self.status = Some(error.to_string());
    }

    /// Apply one command from the controls or the keyboard.
    fn apply(&mut self, action: ControlAction) {
        let Some(navigator) = self.navigator.as_mut() else {
            return;
        };
        let view = &mut self.view;

        let result = match action {
            ControlAction::None => return,
            ControlAction::NextFrame => navigator.next_frame(view),
            ControlAction::PrevFrame => navigator.prev_frame(view),
            ControlAction::NextVideo => navigator.next_video(view),
            ControlAction::PrevVideo => navigator.prev_video(view),
            ControlAction::SetFrame(position) => navigator.set_frame(position, view),
            ControlAction::SetVideo(position) => navigator.set_video(position, view),
            ControlAction::Delete => navigator.delete_current_frame(view),
            ControlAction::Play => {
                log::info!("Playing video {}", navigator.video_name());
                self.playing = Some(Instant::now());
                view.request_redraw();
                Ok(true)
            }
        };

        match result {
            Ok(_) => self.status = None,
            Err(e) => {
                // Sliders may show a position the navigator refused.
                navigator.sync_sliders(view);
                self.report(&e);
            }
        }
    }

    /// Run the playback step that is due, if any.
    fn tick_playback(&mut self, ctx: &egui::Context) {
        let Some(due) = self.playing else {
            return;
        };
        let now = Instant::now();
        if now < due {
            ctx.request_repaint_after(due - now);
            return;
        }
        let Some(navigator) = self.navigator.as_mut() else {
            self.playing = None;
            return;
        };

        match navigator.play_step(&mut self.view) {
            Ok(true) => {
                let delay = self.config.play_delay();
                self.playing = Some(now + delay);
                ctx.request_repaint_after(delay);
            }
            Ok(false) => {
                self.playing = None;
                log::info!("Playback finished at frame {}", navigator.frame_index());
            }
            Err(e) => {
                self.playing = None;
                self.report(&e);
            }
        }
    }

    fn keyboard_action(&self, ctx: &egui::Context) -> ControlAction {
        if ctx.wants_keyboard_input() || self.playing.is_some() {
            return ControlAction::None;
        }
        ctx.input(|i| {
            if i.key_pressed(egui::Key::ArrowRight) {
                ControlAction::NextFrame
            } else if i.key_pressed(egui::Key::ArrowLeft) {
                ControlAction::PrevFrame
            } else if i.key_pressed(egui::Key::ArrowDown) {
                ControlAction::NextVideo
            } else if i.key_pressed(egui::Key::ArrowUp) {
                ControlAction::PrevVideo
            } else if i.key_pressed(egui::Key::Space) {
                ControlAction::Play
            } else if i.key_pressed(egui::Key::Delete) {
                ControlAction::Delete
            } else {
                ControlAction::None
            }
        })
    }

    fn status_line(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            match self.navigator {
                Some(ref navigator) => {
                    ui.label(format!(
                        "Video {}/{}: {}",
                        navigator.video_index() + 1,
                        navigator.video_count(),
                        navigator.video_name()
                    ));
                    ui.separator();
                    ui.label(format!(
                        "Frame {}/{}",
                        navigator.frame_index() + 1,
                        navigator.frame_count()
                    ));
                    if let Some((_, image)) = navigator.current_paths() {
                        if let Some(name) = image.file_name() {
                            ui.separator();
                            ui.label(name.to_string_lossy().into_owned());
                        }
                    }
                    ui.separator();
                    ui.label(format!("{} landmarks", self.view.points.len()));
                }
                None => {
                    ui.label("No folder loaded");
                }
            }
            if self.playing.is_some() {
                ui.separator();
                ui.label("Playing");
            }
            if let Some(ref status) = self.status {
                ui.separator();
                ui.label(egui::RichText::new(status).color(egui::Color32::LIGHT_RED));
            }
        });
    }
}

impl eframe::App for BrowserApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.tick_playback(ctx);

        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Open Folder...").clicked() {
                        if let Some(path) = rfd::FileDialog::new().pick_folder() {
                            self.open_root(&path);
                        }
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
            });
        });

        let enabled = self.navigator.is_some() && self.playing.is_none();

        let control_action = egui::TopBottomPanel::bottom("controls")
            .show(ctx, |ui| {
                ui.add_space(4.0);
                let action = controls::show(ui, &mut self.view.controls, enabled);
                ui.separator();
                self.status_line(ui);
                action
            })
            .inner;

        self.apply(control_action);
        let key_action = self.keyboard_action(ctx);
        self.apply(key_action);

        self.view.flush(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            let content = canvas::CanvasContent {
                texture: self.view.texture.as_ref(),
                image_size: self.view.image_size,
                points: &self.view.points,
                point_radius: self.config.point_radius,
            };
            canvas::show(ui, &content, self.status.as_deref());
        });
    }
}
