use pinmap_core::annotation::PinRejection;
use pinmap_core::geometry::ScreenPoint;
use pinmap_core::interaction::{
    EraseCommand, InteractionMode, Modifiers, PinCommand, PointerButton, PointerEvent, ViewCommand,
};
use pinmap_core::view::{Extent, ViewTransform, ZoomDirection};

use crate::app::PinmapApp;
use crate::panels::overlay;
use crate::states::EditorKind;

pub fn show(ctx: &egui::Context, app: &mut PinmapApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let rect = ui.available_rect_before_wrap();
        paint_background(ui, rect);

        let texture_id = app.viewport.texture.as_ref().map(|t| t.id());
        let Some(texture_id) = texture_id else {
            show_placeholder(ui);
            return;
        };
        if app.document.is_none() {
            show_placeholder(ui);
            return;
        }

        let response = ui.allocate_rect(rect, egui::Sense::click_and_drag());
        let viewport = Extent::new(rect.width() as f64, rect.height() as f64);

        for event in collect_events(ui, &response, rect, app) {
            dispatch(app, event, viewport);
        }

        let Some(image) = app.document.as_ref().map(|d| d.extent(app.ui_state.editor)) else {
            return;
        };
        app.viewport.view.clamp(image, viewport);
        draw_image(ui, app, texture_id, rect, image, viewport);
        overlay::draw(ui, app, rect);
    });
}

fn paint_background(ui: &egui::Ui, rect: egui::Rect) {
    ui.painter()
        .rect_filled(rect, 0.0, egui::Color32::from_gray(30));
}

fn show_placeholder(ui: &mut egui::Ui) {
    ui.centered_and_justified(|ui| {
        ui.label(
            egui::RichText::new("Open an image to begin")
                .size(18.0)
                .color(egui::Color32::from_gray(100)),
        );
    });
}

fn current_mode(app: &PinmapApp) -> InteractionMode {
    match (app.document.as_ref(), app.ui_state.editor) {
        (Some(doc), EditorKind::PinMapper) => doc.pin_input.mode,
        (Some(doc), EditorKind::Eraser) => doc.eraser_input.mode,
        (None, _) => InteractionMode::Idle,
    }
}

fn to_screen(pos: egui::Pos2, rect: egui::Rect) -> ScreenPoint {
    ScreenPoint::new((pos.x - rect.left()) as f64, (pos.y - rect.top()) as f64)
}

fn to_modifiers(m: egui::Modifiers) -> Modifiers {
    Modifiers {
        shift: m.shift,
        ctrl: m.command,
        alt: m.alt,
    }
}

fn to_button(button: egui::PointerButton) -> Option<PointerButton> {
    match button {
        egui::PointerButton::Primary => Some(PointerButton::Primary),
        egui::PointerButton::Secondary => Some(PointerButton::Secondary),
        egui::PointerButton::Middle => Some(PointerButton::Middle),
        _ => None,
    }
}

/// Translate this frame's raw egui input into pointer events for the viewport.
///
/// Presses and wheel turns count only over the viewport; moves and releases
/// are forwarded while a gesture is in progress.
fn collect_events(
    ui: &egui::Ui,
    response: &egui::Response,
    rect: egui::Rect,
    app: &PinmapApp,
) -> Vec<PointerEvent> {
    let hovered = response.hovered();
    let mut busy = current_mode(app) != InteractionMode::Idle;
    let raw = ui.input(|i| i.events.clone());

    let mut events = Vec::new();
    for event in raw {
        match event {
            egui::Event::PointerButton {
                pos,
                button,
                pressed,
                modifiers,
                ..
            } => {
                let Some(button) = to_button(button) else {
                    continue;
                };
                if pressed && rect.contains(pos) {
                    busy = true;
                    events.push(PointerEvent::Press {
                        button,
                        pos: to_screen(pos, rect),
                        modifiers: to_modifiers(modifiers),
                    });
                } else if !pressed && busy {
                    events.push(PointerEvent::Release {
                        button,
                        pos: to_screen(pos, rect),
                    });
                }
            }
            egui::Event::PointerMoved(pos) if busy || rect.contains(pos) => {
                events.push(PointerEvent::Move {
                    pos: to_screen(pos, rect),
                });
            }
            egui::Event::MouseWheel { delta, .. } if hovered && delta.y != 0.0 => {
                if let Some(pos) = response.hover_pos() {
                    let direction = if delta.y > 0.0 {
                        ZoomDirection::In
                    } else {
                        ZoomDirection::Out
                    };
                    events.push(PointerEvent::Scroll {
                        pos: to_screen(pos, rect),
                        direction,
                    });
                }
            }
            _ => {}
        }
    }
    events
}

fn apply_view(view: &mut ViewTransform, cmd: ViewCommand, image: Extent, viewport: Extent) {
    match cmd {
        ViewCommand::Pan { dx, dy } => view.pan(dx, dy, image, viewport),
        ViewCommand::Zoom { cursor, direction } => view.zoom_at(cursor, direction, image, viewport),
    }
}

fn dispatch(app: &mut PinmapApp, event: PointerEvent, viewport: Extent) {
    match app.ui_state.editor {
        EditorKind::PinMapper => dispatch_pin(app, event, viewport),
        EditorKind::Eraser => dispatch_erase(app, event, viewport),
    }
}

fn dispatch_pin(app: &mut PinmapApp, event: PointerEvent, viewport: Extent) {
    let Some(doc) = app.document.as_mut() else {
        return;
    };
    let image = doc.extent(EditorKind::PinMapper);
    let Some(cmd) = doc.pin_input.handle(event, &app.viewport.view) else {
        return;
    };

    let log = match cmd {
        PinCommand::View(view_cmd) => {
            apply_view(&mut app.viewport.view, view_cmd, image, viewport);
            None
        }
        PinCommand::PlacePin(point) => match doc.pins.place_pin(point) {
            Ok(pin) => Some(format!("Added pin {} at ({}, {})", pin.pin_number, pin.x, pin.y)),
            Err(PinRejection::OutsideCrop) => Some("Pin is outside the crop area".to_string()),
            Err(PinRejection::OutsideImage) => None,
        },
        PinCommand::RecognizeLabel(rect) => {
            match doc
                .pins
                .recognize_label(&doc.image, rect, &app.recognizer, &app.config.ocr)
            {
                Some(label) => Some(format!("Added label {} '{}'", label.label_id, label.text)),
                None => Some("Label recognition failed".to_string()),
            }
        }
        PinCommand::Link(rect) => match doc.pins.process_linking_rectangle(rect) {
            Ok(link) => Some(format!("Linked pin {} to '{}'", link.pin_number, link.text)),
            Err(e) => Some(format!("Link ignored: {e}")),
        },
        PinCommand::Crop(rect) => match doc.pins.set_crop(rect) {
            Some(crop) => Some(format!("Crop set to {}x{}", crop.width(), crop.height())),
            None => Some("Crop ignored: empty rectangle".to_string()),
        },
        PinCommand::Ambiguous(_) => Some("Ignored: hold only one modifier key".to_string()),
    };

    if let Some(msg) = log {
        app.ui_state.add_log(msg);
    }
}

fn dispatch_erase(app: &mut PinmapApp, event: PointerEvent, viewport: Extent) {
    let Some(doc) = app.document.as_mut() else {
        return;
    };
    let image = doc.extent(EditorKind::Eraser);
    let Some(cmd) = doc.eraser_input.handle(event, &app.viewport.view) else {
        return;
    };

    let mut log = None;
    match cmd {
        EraseCommand::View(view_cmd) => {
            apply_view(&mut app.viewport.view, view_cmd, image, viewport);
        }
        EraseCommand::BeginStroke(point) => {
            doc.eraser.begin_stroke(point);
            app.ui_state.texture_dirty = true;
        }
        EraseCommand::StrokeTo(point) => {
            doc.eraser.stroke_to(point);
            app.ui_state.texture_dirty = true;
        }
        EraseCommand::EndStroke => doc.eraser.end_stroke(),
        EraseCommand::EraseSimilar(point) => {
            log = Some(match doc.eraser.erase_similar(point) {
                Ok(count) => format!("Removed {count} similar pixels"),
                Err(e) => format!("Erase ignored: {e}"),
            });
            app.ui_state.texture_dirty = true;
        }
        EraseCommand::Crop(rect) => {
            log = Some(match doc.eraser.crop(rect) {
                Ok(()) => {
                    app.viewport.view.reset();
                    let (w, h) = doc.eraser.dimensions();
                    format!("Cropped to {w}x{h}")
                }
                Err(e) => format!("Crop ignored: {e}"),
            });
            app.ui_state.texture_dirty = true;
        }
        EraseCommand::Ambiguous(_) => {
            log = Some("Ignored: hold only one modifier key".to_string());
        }
    }

    if let Some(msg) = log {
        app.ui_state.add_log(msg);
    }
}

/// Paint the visible part of the image. A transform that cannot produce a
/// valid copy is reset to identity.
fn draw_image(
    ui: &egui::Ui,
    app: &mut PinmapApp,
    texture_id: egui::TextureId,
    rect: egui::Rect,
    image: Extent,
    viewport: Extent,
) {
    let region = match app.viewport.view.visible_region(image, viewport) {
        Some(region) => region,
        None => {
            tracing::warn!("Inconsistent view transform, resetting");
            app.viewport.view.reset();
            match app.viewport.view.visible_region(image, viewport) {
                Some(region) => region,
                None => return,
            }
        }
    };

    let scaled = app.viewport.view.scaled_size(image);
    let uv = egui::Rect::from_min_max(
        egui::pos2(
            (region.src_x / scaled.width) as f32,
            (region.src_y / scaled.height) as f32,
        ),
        egui::pos2(
            ((region.src_x + region.width) / scaled.width) as f32,
            ((region.src_y + region.height) / scaled.height) as f32,
        ),
    );
    let dst = egui::Rect::from_min_size(
        rect.left_top() + egui::vec2(region.dst_x as f32, region.dst_y as f32),
        egui::vec2(region.width as f32, region.height as f32),
    );

    ui.painter().image(texture_id, dst, uv, egui::Color32::WHITE);
}
