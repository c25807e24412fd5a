use egui::{Key, KeyboardShortcut, Modifiers};

use crate::canvas::Canvas;
use crate::command::Command;
use crate::input::InputHandler;
use crate::panels::{central_panel, tools_panel};
use crate::persistence;
use crate::renderer::Renderer;
use crate::state::PaintSettings;

const UNDO_SHORTCUT: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::Z);
const REDO_SHORTCUT: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::Y);
const SAVE_SHORTCUT: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::S);

pub struct PaintApp {
    canvas: Canvas,
    input: InputHandler,
    renderer: Renderer,
    /// Path shown in the File menu, used by save and load
    path: String,
    /// Last save/load outcome, shown in the status bar
    status: String,
    show_clear_confirm: bool,
    show_about: bool,
}

impl Default for PaintApp {
    fn default() -> Self {
        Self::with_settings(PaintSettings::default())
    }
}

impl PaintApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // Restore settings from the previous run, if any
        let settings = cc
            .storage
            .and_then(|storage| eframe::get_value::<PaintSettings>(storage, eframe::APP_KEY))
            .unwrap_or_default();
        Self::with_settings(settings)
    }

    pub fn with_settings(settings: PaintSettings) -> Self {
        let path = settings.last_path.clone();
        Self {
            canvas: Canvas::new(settings),
            input: InputHandler::new(egui::Rect::NOTHING),
            renderer: Renderer::new(),
            path,
            status: String::new(),
            show_clear_confirm: false,
            show_about: false,
        }
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn execute_command(&mut self, command: Command) {
        log::debug!("Executing {command:?}");
        if let Err(err) = command.execute(&mut self.canvas) {
            log::warn!("Command failed: {err}");
            self.status = err.to_string();
        }
    }

    fn save_drawing(&mut self) {
        match persistence::save_to_path(&self.path, self.canvas.history().strokes()) {
            Ok(()) => {
                self.canvas.set_last_path(self.path.clone());
                self.status = format!("Saved {}", self.path);
            }
            Err(err) => {
                log::error!("Could not save file {}: {err}", self.path);
                self.status = format!("Could not save file \"{}\": {err}", self.path);
            }
        }
    }

    fn load_drawing(&mut self) {
        match persistence::load_from_path(&self.path) {
            Ok(strokes) => {
                let count = strokes.len();
                self.execute_command(Command::Import(strokes));
                self.canvas.set_last_path(self.path.clone());
                self.status = format!("Loaded {count} strokes from {}", self.path);
            }
            Err(err) => {
                log::error!("Could not load file {}: {err}", self.path);
                self.status = format!("Could not load file \"{}\": {err}", self.path);
            }
        }
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        if ctx.input_mut(|i| i.consume_shortcut(&UNDO_SHORTCUT)) {
            self.execute_command(Command::Undo);
        }
        if ctx.input_mut(|i| i.consume_shortcut(&REDO_SHORTCUT)) {
            self.execute_command(Command::Redo);
        }
        if ctx.input_mut(|i| i.consume_shortcut(&SAVE_SHORTCUT)) {
            self.save_drawing();
        }
    }

    fn menu_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    ui.horizontal(|ui| {
                        ui.label("Path:");
                        ui.text_edit_singleline(&mut self.path);
                    });
                    let save = egui::Button::new("Save").shortcut_text(ctx.format_shortcut(&SAVE_SHORTCUT));
                    if ui.add(save).clicked() {
                        self.save_drawing();
                        ui.close_menu();
                    }
                    if ui.button("Load").clicked() {
                        self.load_drawing();
                        ui.close_menu();
                    }
                });

                ui.menu_button("Edit", |ui| {
                    let undo = egui::Button::new("Undo").shortcut_text(ctx.format_shortcut(&UNDO_SHORTCUT));
                    if ui.add_enabled(self.canvas.can_undo(), undo).clicked() {
                        self.execute_command(Command::Undo);
                        ui.close_menu();
                    }
                    ui.separator();
                    let redo = egui::Button::new("Redo").shortcut_text(ctx.format_shortcut(&REDO_SHORTCUT));
                    if ui.add_enabled(self.canvas.can_redo(), redo).clicked() {
                        self.execute_command(Command::Redo);
                        ui.close_menu();
                    }
                });

                ui.menu_button("Options", |ui| {
                    if ui.add_enabled(self.canvas.can_undo(), egui::Button::new("Clear")).clicked() {
                        self.show_clear_confirm = true;
                        ui.close_menu();
                    }
                });

                ui.menu_button("Help", |ui| {
                    if ui.button("About...").clicked() {
                        self.show_about = true;
                        ui.close_menu();
                    }
                });
            });
        });
    }

    fn dialogs(&mut self, ctx: &egui::Context) {
        if self.show_clear_confirm {
            egui::Window::new("Clear")
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| {
                    ui.label("This clears the drawing and its undo history. Continue?");
                    ui.horizontal(|ui| {
                        if ui.button("Yes").clicked() {
                            self.execute_command(Command::Clear);
                            self.show_clear_confirm = false;
                        }
                        if ui.button("No").clicked() {
                            self.show_clear_confirm = false;
                        }
                    });
                });
        }

        if self.show_about {
            egui::Window::new("About")
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| {
                    ui.label(format!("Vector Paint {}", env!("CARGO_PKG_VERSION")));
                    if ui.button("Close").clicked() {
                        self.show_about = false;
                    }
                });
        }
    }
}

impl eframe::App for PaintApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self.canvas.settings());
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_shortcuts(ctx);
        self.menu_bar(ctx);

        for command in tools_panel(&self.canvas, ctx) {
            self.execute_command(command);
        }

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(format!("{} | {}", self.canvas.active_tool_name(), self.canvas.state().name()));
                if !self.status.is_empty() {
                    ui.separator();
                    ui.label(&self.status);
                }
            });
        });

        central_panel(&mut self.canvas, &mut self.input, &self.renderer, ctx);
        self.dialogs(ctx);
    }
}
