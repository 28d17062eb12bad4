// src/ui.rs
use egui;

pub fn build_ui(ctx: &egui::Context, orbit_enabled: bool) {
    egui::Window::new("Controls")
        .anchor(egui::Align2::LEFT_BOTTOM, egui::vec2(20.0, -20.0))
        .resizable(false)
        .collapsible(false)
        .title_bar(false)
        .show(ctx, |ui| {
            ui.vertical(|ui| {
                ui.heading("Controls:");
                ui.label("O - Toggle orbit camera");
                ui.separator();
                ui.label(format!("Orbit: {}", if orbit_enabled { "on" } else { "off" }));
                if orbit_enabled {
                    ui.label("   Left drag: Rotate");
                    ui.label("   Right drag: Pan");
                    ui.label("   Wheel: Zoom");
                    ui.label("   Arrow Keys: Rotate");
                }
            });
        });
}
