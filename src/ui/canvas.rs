// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Frame display canvas.
//!
//! This module draws the current frame image fitted into the central area
//! with its landmark points scattered on top.

use crate::models::frame::Point;
use crate::util::geometry::{fit_image, image_to_screen};

const POINT_COLOR: egui::Color32 = egui::Color32::from_rgb(31, 119, 180);

/// What the canvas needs to draw one frame.
pub struct CanvasContent<'a> {
    pub texture: Option<&'a egui::TextureHandle>,
    pub image_size: Option<(u32, u32)>,
    pub points: &'a [Point],
    pub point_radius: f32,
}

/// Display the canvas. `message` replaces the image when nothing is loaded.
pub fn show(ui: &mut egui::Ui, content: &CanvasContent<'_>, message: Option<&str>) {
    ui.style_mut().visuals.extreme_bg_color = egui::Color32::from_gray(40);

    let available_size = ui.available_size();

    egui::Frame::canvas(ui.style()).show(ui, |ui| {
        ui.set_min_size(available_size);

        let (Some(texture), Some(image_size)) = (content.texture, content.image_size) else {
            ui.centered_and_justified(|ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(20.0);
                    ui.heading(
                        egui::RichText::new("Landmark Browser")
                            .size(32.0)
                            .color(egui::Color32::from_gray(200)),
                    );
                    ui.add_space(20.0);
                    ui.label(
                        egui::RichText::new(message.unwrap_or("Open a folder of videos to begin"))
                            .color(egui::Color32::from_gray(180)),
                    );
                    ui.add_space(10.0);
                    ui.label(
                        egui::RichText::new("File → Open Folder...")
                            .weak()
                            .color(egui::Color32::from_gray(130)),
                    );
                });
            });
            return;
        };

        let area = ui.min_rect();
        let available = ui.available_size();
        let fit = fit_image(image_size, (available.x, available.y));
        let origin = area.min;

        let image_rect = egui::Rect::from_min_size(
            origin + egui::vec2(fit.offset.0, fit.offset.1),
            egui::vec2(fit.size.0, fit.size.1),
        );

        let painter = ui.painter();
        painter.image(
            texture.id(),
            image_rect,
            egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
            egui::Color32::WHITE,
        );

        for point in content.points {
            let (x, y) = image_to_screen(point, &fit);
            painter.circle_filled(origin + egui::vec2(x, y), content.point_radius, POINT_COLOR);
        }
    });
}
