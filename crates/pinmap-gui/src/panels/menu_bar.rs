use pinmap_core::io::{read_json, PinsDocument};

use crate::app::PinmapApp;
use crate::states::EditorKind;

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp", "tif", "tiff", "webp"];

pub fn show(ctx: &egui::Context, app: &mut PinmapApp) {
    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                let open_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O);
                if ui.add(egui::Button::new("Open Image...").shortcut_text(ctx.format_shortcut(&open_shortcut))).clicked() {
                    ui.close();
                    open_image(app);
                }

                ui.separator();

                if ui.button("Load Pins...").clicked() {
                    ui.close();
                    load_pins(app);
                }

                let save_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::S);
                if ui.add(egui::Button::new("Save Pins...").shortcut_text(ctx.format_shortcut(&save_shortcut))).clicked() {
                    ui.close();
                    save_pins(app);
                }

                if ui.button("Save Device...").clicked() {
                    ui.close();
                    app.ui_state.device_form.open = true;
                }

                if ui.button("Save Transparent PNG...").clicked() {
                    ui.close();
                    save_rgba(app);
                }

                ui.separator();

                if ui.button("Export Settings...").clicked() {
                    ui.close();
                    export_settings(app);
                }

                ui.separator();

                let quit_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q);
                if ui.add(egui::Button::new("Quit").shortcut_text(ctx.format_shortcut(&quit_shortcut))).clicked() {
                    ui.close();
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("Edit", |ui| {
                let undo_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Z);
                if ui.add(egui::Button::new("Undo").shortcut_text(ctx.format_shortcut(&undo_shortcut))).clicked() {
                    ui.close();
                    app.undo();
                }
            });

            ui.menu_button("Editor", |ui| {
                let mut editor = app.ui_state.editor;
                ui.radio_value(&mut editor, EditorKind::PinMapper, "Pin Mapper");
                ui.radio_value(&mut editor, EditorKind::Eraser, "Background Eraser");
                if editor != app.ui_state.editor {
                    ui.close();
                    app.set_editor(editor);
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    ui.close();
                    app.ui_state.show_about = true;
                }
            });
        });

        // Keyboard shortcuts (consumed outside menus)
        if ctx.input_mut(|i| i.consume_shortcut(&egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O))) {
            open_image(app);
        }
        if ctx.input_mut(|i| i.consume_shortcut(&egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::S))) {
            save_pins(app);
        }
        if ctx.input_mut(|i| i.consume_shortcut(&egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Z))) {
            app.undo();
        }
        if ctx.input_mut(|i| i.consume_shortcut(&egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q))) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    });
}

fn open_image(app: &mut PinmapApp) {
    if let Some(path) = rfd::FileDialog::new()
        .add_filter("Images", IMAGE_EXTENSIONS)
        .add_filter("All files", &["*"])
        .pick_file()
    {
        app.open_image(&path);
    }
}

fn load_pins(app: &mut PinmapApp) {
    let Some(doc) = app.document.as_mut() else {
        app.ui_state.add_log("Open an image first".into());
        return;
    };
    let Some(path) = rfd::FileDialog::new()
        .add_filter("JSON", &["json"])
        .pick_file()
    else {
        return;
    };

    match read_json::<PinsDocument>(&path) {
        Ok(pins) => {
            let count = pins.pins.len();
            doc.pins.load_pins(pins);
            doc.pins_path = Some(path.clone());
            app.ui_state
                .add_log(format!("Loaded {count} pins from {}", path.display()));
        }
        Err(e) => app
            .ui_state
            .add_log(format!("ERROR: Failed to load {}: {e}", path.display())),
    }
}

fn save_pins(app: &mut PinmapApp) {
    let Some(doc) = app.document.as_mut() else {
        return;
    };
    let Some(path) = rfd::FileDialog::new()
        .add_filter("JSON", &["json"])
        .set_file_name(format!("{}.json", doc.file_stem()))
        .save_file()
    else {
        return;
    };

    let message = match doc.pins.save_pins(&path) {
        Ok(()) => {
            let message = format!("Pin locations saved to {}", path.display());
            doc.pins_path = Some(path);
            message
        }
        Err(e) => format!("ERROR: Failed to save {}: {e}", path.display()),
    };
    app.ui_state.add_log(message);
}

fn save_rgba(app: &mut PinmapApp) {
    let Some(doc) = app.document.as_mut() else {
        return;
    };
    let Some(path) = rfd::FileDialog::new()
        .add_filter("PNG", &["png"])
        .set_file_name(format!("{}.png", doc.file_stem()))
        .save_file()
    else {
        return;
    };

    let message = match doc.eraser.save(&path) {
        Ok(()) => format!("Image saved to {}", path.display()),
        Err(e) => format!("ERROR: Failed to save {}: {e}", path.display()),
    };
    app.ui_state.add_log(message);
}

fn export_settings(app: &mut PinmapApp) {
    let Some(path) = rfd::FileDialog::new()
        .add_filter("TOML", &["toml"])
        .set_file_name("pinmap.toml")
        .save_file()
    else {
        return;
    };

    let result = toml::to_string_pretty(&app.config)
        .map_err(|e| e.to_string())
        .and_then(|content| std::fs::write(&path, content).map_err(|e| e.to_string()));
    let message = match result {
        Ok(()) => format!("Settings saved to {}", path.display()),
        Err(e) => format!("ERROR: Failed to save {}: {e}", path.display()),
    };
    app.ui_state.add_log(message);
}
