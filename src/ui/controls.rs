// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Navigation controls.
//!
//! This module provides the frame and video sliders and the row of
//! navigation buttons shown under the canvas.

use crate::util::geometry::position_to_frame;

/// Slider values as last written by the navigator or dragged by the user.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ControlState {
    /// Normalized frame position in [0, 1].
    pub frame_position: f64,
    pub frame_count: usize,
    /// Video index, kept as a float for the slider.
    pub video_position: f64,
    pub video_count: usize,
}

/// Command emitted by the controls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControlAction {
    None,
    NextFrame,
    PrevFrame,
    NextVideo,
    PrevVideo,
    Play,
    Delete,
    SetFrame(f64),
    SetVideo(f64),
}

/// Display the sliders and buttons. Everything is greyed out when
/// `enabled` is false.
pub fn show(ui: &mut egui::Ui, state: &mut ControlState, enabled: bool) -> ControlAction {
    let mut action = ControlAction::None;
    let slider_width = (ui.available_width() - 160.0).max(120.0);

    ui.add_enabled_ui(enabled && state.frame_count > 0, |ui| {
        ui.spacing_mut().slider_width = slider_width;

        let frame_label = format!(
            "Frame {}/{}",
            position_to_frame(state.frame_position, state.frame_count) + 1,
            state.frame_count
        );
        let frame = ui.add(
            egui::Slider::new(&mut state.frame_position, 0.0..=1.0)
                .show_value(false)
                .text(frame_label),
        );
        if frame.changed() {
            action = ControlAction::SetFrame(state.frame_position);
        }

        let last_video = state.video_count.saturating_sub(1) as f64;
        let video = ui.add(
            egui::Slider::new(&mut state.video_position, 0.0..=last_video)
                .integer()
                .text("Video"),
        );
        if video.changed() {
            action = ControlAction::SetVideo(state.video_position);
        }
    });

    ui.add_space(4.0);

    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;
        let buttons = [
            ("Previous video", ControlAction::PrevVideo),
            ("Previous frame", ControlAction::PrevFrame),
            ("DELETE FRAME", ControlAction::Delete),
            ("Next frame", ControlAction::NextFrame),
            ("Next video", ControlAction::NextVideo),
            ("▶ PLAY", ControlAction::Play),
        ];
        for (label, command) in buttons {
            let text = if command == ControlAction::Delete {
                egui::RichText::new(label).color(egui::Color32::from_rgb(220, 80, 80))
            } else {
                egui::RichText::new(label)
            };
            if ui.add_enabled(enabled, egui::Button::new(text)).clicked() {
                action = command;
            }
        }
    });

    action
}
