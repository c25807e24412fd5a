use egui::color_picker::{Alpha, color_edit_button_srgba};

use crate::canvas::Canvas;
use crate::command::Command;
use crate::components::ToolButton;
use crate::stroke::StrokeWidth;
use crate::tool::ToolKind;

/// Left side panel with tools and paint options. Returns the commands the
/// user triggered this frame; the caller executes them.
pub fn tools_panel(canvas: &Canvas, ctx: &egui::Context) -> Vec<Command> {
    let mut commands = Vec::new();

    egui::SidePanel::left("tools_panel")
        .resizable(false)
        .default_width(180.0)
        .show(ctx, |ui| {
            ui.heading("Tools");

            let active = canvas.active_tool().kind();
            ui.horizontal_wrapped(|ui| {
                for kind in ToolKind::ALL {
                    if ToolButton::new(kind, kind == active).show(ui).clicked() && kind != active {
                        log::info!("Tool selected from UI: {}", kind.name());
                        commands.push(Command::SelectTool(kind));
                    }
                }
            });
            ui.label(format!("Active: {}", canvas.active_tool_name()));
            ui.separator();

            let mut width = canvas.stroke_width().get();
            let slider = egui::Slider::new(&mut width, StrokeWidth::MIN..=StrokeWidth::MAX).text("Thickness");
            if ui.add(slider).changed() {
                commands.push(Command::SetStrokeWidth(width));
            }

            let mut fill = canvas.is_fill_enabled();
            if ui.checkbox(&mut fill, "Fill Shapes").changed() {
                commands.push(Command::SetFillEnabled(fill));
            }

            let mut erase = canvas.is_erase_override();
            if ui.checkbox(&mut erase, "Paint with background").changed() {
                commands.push(Command::SetEraseOverride(erase));
            }
            ui.separator();

            egui::Grid::new("colors_grid")
                .num_columns(2)
                .spacing([20.0, 4.0])
                .show(ui, |ui| {
                    let mut color_row = |ui: &mut egui::Ui, label: &str, color: egui::Color32, make: fn(egui::Color32) -> Command| {
                        ui.label(label);
                        let mut edited = color;
                        if color_edit_button_srgba(ui, &mut edited, Alpha::Opaque).changed() {
                            commands.push(make(edited));
                        }
                        ui.end_row();
                    };
                    color_row(ui, "Primary", canvas.primary_color(), Command::SetPrimaryColor);
                    color_row(ui, "Secondary", canvas.secondary_color(), Command::SetSecondaryColor);
                    color_row(ui, "Fill", canvas.fill_color(), Command::SetFillColor);
                    color_row(ui, "Background", canvas.background_color(), Command::SetBackgroundColor);
                });
            ui.separator();

            ui.horizontal(|ui| {
                if ui.add_enabled(canvas.can_undo(), egui::Button::new("Undo")).clicked() {
                    commands.push(Command::Undo);
                }
                if ui.add_enabled(canvas.can_redo(), egui::Button::new("Redo")).clicked() {
                    commands.push(Command::Redo);
                }
            });

            let history = canvas.history();
            ui.label(format!("Strokes: {}", history.len()));
            ui.label(format!("Redo stack size: {}", history.redo_stack().len()));
        });

    commands
}
