use std::path::Path;

use pinmap_core::annotation::AnnotationAction;
use pinmap_core::config::PinmapConfig;
use pinmap_core::ocr::TesseractCli;

use crate::convert::rgb_to_color_image;
use crate::panels;
use crate::states::{Document, EditorKind, UIState, ViewportState};

pub struct PinmapApp {
    pub config: PinmapConfig,
    pub recognizer: TesseractCli,
    pub ui_state: UIState,
    pub viewport: ViewportState,
    pub document: Option<Document>,
}

impl PinmapApp {
    pub fn new(config: PinmapConfig, editor: EditorKind) -> Self {
        let mut app = Self {
            recognizer: TesseractCli::new(config.ocr.tesseract.clone()),
            viewport: ViewportState::new(config.view.zoom_step),
            ui_state: UIState::default(),
            document: None,
            config,
        };
        app.ui_state.editor = editor;
        app
    }

    pub fn open_image(&mut self, path: &Path) {
        match Document::open(path, self.config.eraser.clone()) {
            Ok(doc) => {
                let (w, h) = doc.image.dimensions();
                self.ui_state
                    .add_log(format!("Opened: {} ({w}x{h})", path.display()));
                self.document = Some(doc);
                self.viewport.view.reset();
                self.ui_state.texture_dirty = true;
            }
            Err(e) => {
                self.ui_state
                    .add_log(format!("ERROR: Failed to open {}: {e}", path.display()));
            }
        }
    }

    pub fn set_editor(&mut self, editor: EditorKind) {
        if self.ui_state.editor == editor {
            return;
        }
        self.ui_state.editor = editor;
        self.viewport.view.reset();
        self.ui_state.texture_dirty = true;
        self.ui_state.add_log(format!("Switched to {editor}"));
    }

    pub fn undo(&mut self) {
        let Some(doc) = self.document.as_mut() else {
            return;
        };

        let message = match self.ui_state.editor {
            EditorKind::PinMapper => match doc.pins.undo() {
                Some(action) => format!("Undid {}", describe(&action)),
                None => "Nothing to undo".to_string(),
            },
            EditorKind::Eraser => {
                if doc.eraser.undo() {
                    self.ui_state.texture_dirty = true;
                    "Undid last eraser action".to_string()
                } else {
                    "Nothing to undo".to_string()
                }
            }
        };
        self.ui_state.add_log(message);
    }

    /// Save pending pins and hold the window open if eraser work would be lost.
    fn handle_close_request(&mut self, ctx: &egui::Context) {
        if self.ui_state.allow_close {
            return;
        }
        let Some(doc) = self.document.as_mut() else {
            return;
        };

        if doc.pins.should_save_on_exit() {
            let path = doc.exit_pins_path();
            match doc.pins.save_pins(&path) {
                Ok(()) => {
                    doc.pins_path = Some(path);
                }
                Err(e) => {
                    tracing::error!("Failed to save pins to {}: {e}", path.display());
                    ctx.send_viewport_cmd(egui::ViewportCommand::CancelClose);
                    self.ui_state
                        .add_log(format!("ERROR: Failed to save {}: {e}", path.display()));
                    return;
                }
            }
        }

        if doc.eraser.has_unsaved_changes() {
            ctx.send_viewport_cmd(egui::ViewportCommand::CancelClose);
            self.ui_state.confirm_close = true;
        }
    }

    fn show_close_confirmation(&mut self, ctx: &egui::Context) {
        if !self.ui_state.confirm_close {
            return;
        }
        egui::Window::new("Unsaved Changes")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label("The erased background has not been saved.");
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button("Discard and Quit").clicked() {
                        self.ui_state.confirm_close = false;
                        self.ui_state.allow_close = true;
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                    if ui.button("Cancel").clicked() {
                        self.ui_state.confirm_close = false;
                    }
                });
            });
    }

    /// Re-upload the active raster if it changed since the last frame.
    fn refresh_texture(&mut self, ctx: &egui::Context) {
        if !self.ui_state.texture_dirty {
            return;
        }
        self.ui_state.texture_dirty = false;

        let Some(doc) = self.document.as_ref() else {
            self.viewport.texture = None;
            self.viewport.image_size = None;
            return;
        };

        let image = match self.ui_state.editor {
            EditorKind::PinMapper => rgb_to_color_image(&doc.image),
            EditorKind::Eraser => rgb_to_color_image(&doc.eraser.preview()),
        };
        let size = image.size;
        let texture = ctx.load_texture("viewport", image, egui::TextureOptions::NEAREST);
        self.viewport.texture = Some(texture);
        self.viewport.image_size = Some(size);
    }
}

fn describe(action: &AnnotationAction) -> String {
    match action {
        AnnotationAction::Pin(pin) => format!("pin {}", pin.pin_number),
        AnnotationAction::Label(label) => format!("label '{}'", label.text),
        AnnotationAction::Link(link) => format!("link {} -> '{}'", link.pin_number, link.text),
        AnnotationAction::Crop { .. } => "crop".to_string(),
    }
}

impl eframe::App for PinmapApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.refresh_texture(ctx);

        panels::menu_bar::show(ctx, self);
        panels::status::show(ctx, self);
        panels::viewport::show(ctx, self);
        panels::device_dialog::show(ctx, self);

        if ctx.input(|i| i.viewport().close_requested()) {
            self.handle_close_request(ctx);
        }
        self.show_close_confirmation(ctx);

        if self.ui_state.show_about {
            egui::Window::new("About Pinmap")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("Pinmap");
                        ui.label("Board artwork pin mapping");
                        ui.add_space(8.0);
                        ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                        ui.add_space(8.0);
                        if ui.button("Close").clicked() {
                            self.ui_state.show_about = false;
                        }
                    });
                });
        }
    }
}
