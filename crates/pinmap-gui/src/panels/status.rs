use crate::app::PinmapApp;
use crate::states::EditorKind;

pub fn show(ctx: &egui::Context, app: &mut PinmapApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.add_space(2.0);

        // Log area, fixed height for 4 lines, scrollable.
        let line_height = ui.text_style_height(&egui::TextStyle::Body);
        let spacing = ui.spacing().item_spacing.y;
        let log_height = line_height * 4.0 + spacing * 3.0;

        egui::ScrollArea::vertical()
            .max_height(log_height)
            .min_scrolled_height(log_height)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                if app.ui_state.log_messages.is_empty() {
                    // Reserve space for 4 empty lines to prevent layout jump.
                    for _ in 0..4 {
                        ui.label("");
                    }
                } else {
                    for msg in &app.ui_state.log_messages {
                        ui.label(msg);
                    }
                }
            });

        // Status line
        ui.horizontal(|ui| {
            ui.label(app.ui_state.editor.to_string());
            ui.separator();
            if let Some(ref size) = app.viewport.image_size {
                ui.label(format!("{}x{}", size[0], size[1]));
                ui.separator();
            }
            ui.label(format!("Zoom: {:.0}%", app.viewport.view.zoom * 100.0));

            if let Some(ref doc) = app.document {
                ui.separator();
                match app.ui_state.editor {
                    EditorKind::PinMapper => {
                        ui.label(format!(
                            "Pins: {}  Labels: {}  Links: {}",
                            doc.pins.pins().len(),
                            doc.pins.labels().len(),
                            doc.pins.links().len()
                        ));
                    }
                    EditorKind::Eraser => {
                        ui.label(format!(
                            "Erased: {} px  Tolerance: {}",
                            doc.eraser.mask().cleared_count(),
                            doc.eraser.config().tolerance
                        ));
                    }
                }
            }
        });

        ui.add_space(2.0);
    });
}
