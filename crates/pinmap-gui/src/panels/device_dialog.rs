use pinmap_core::io::write_json;

use crate::app::PinmapApp;

/// Collect name, type and specs, then write the device record.
pub fn show(ctx: &egui::Context, app: &mut PinmapApp) {
    if !app.ui_state.device_form.open {
        return;
    }

    let mut open = true;
    let mut save = false;
    egui::Window::new("Save Device")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            let form = &mut app.ui_state.device_form;
            egui::Grid::new("device_form").num_columns(2).show(ui, |ui| {
                ui.label("Name");
                ui.text_edit_singleline(&mut form.name);
                ui.end_row();
                ui.label("Type");
                ui.text_edit_singleline(&mut form.kind);
                ui.end_row();
                ui.label("Processor");
                ui.text_edit_singleline(&mut form.processor);
                ui.end_row();
                ui.label("Clock speed");
                ui.text_edit_singleline(&mut form.clock_speed);
                ui.end_row();
                ui.label("Voltage");
                ui.text_edit_singleline(&mut form.voltage);
                ui.end_row();
            });

            ui.add_space(8.0);
            let links = app.document.as_ref().map_or(0, |d| d.pins.links().len());
            ui.label(format!("{links} linked pins will be written"));
            ui.add_space(4.0);
            ui.add_enabled_ui(!form.name.trim().is_empty(), |ui| {
                if ui.button("Save...").clicked() {
                    save = true;
                }
            });
        });

    if save {
        save_device(app);
        open = false;
    }
    app.ui_state.device_form.open = open;
}

fn save_device(app: &mut PinmapApp) {
    let Some(doc) = app.document.as_ref() else {
        app.ui_state.add_log("Open an image first".into());
        return;
    };
    let meta = app.ui_state.device_form.to_meta();
    let Some(path) = rfd::FileDialog::new()
        .add_filter("JSON", &["json"])
        .set_file_name(format!("{}.json", meta.name))
        .save_file()
    else {
        return;
    };

    let record = doc.pins.device_record(meta);
    let message = match write_json(&path, &record) {
        Ok(()) => format!(
            "Device saved to {} ({} pins)",
            path.display(),
            record.digital_pins.id.len()
        ),
        Err(e) => format!("ERROR: Failed to save {}: {e}", path.display()),
    };
    app.ui_state.add_log(message);
}
