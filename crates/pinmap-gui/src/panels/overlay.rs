use pinmap_core::consts::PIN_MARKER_RADIUS;
use pinmap_core::geometry::ImageRect;
use pinmap_core::interaction::RectKind;
use pinmap_core::view::ViewTransform;

use crate::app::PinmapApp;
use crate::states::EditorKind;

const PIN_COLOR: egui::Color32 = egui::Color32::from_rgb(255, 0, 0);
const LINKED_PIN_COLOR: egui::Color32 = egui::Color32::from_rgb(0, 200, 255);
const LABEL_COLOR: egui::Color32 = egui::Color32::from_rgb(0, 255, 0);
const LINK_COLOR: egui::Color32 = egui::Color32::from_rgb(0, 200, 255);
const CROP_COLOR: egui::Color32 = egui::Color32::from_rgb(255, 255, 0);

fn to_screen(view: &ViewTransform, rect: egui::Rect, x: f64, y: f64) -> egui::Pos2 {
    let p = view.image_to_screen(x, y);
    rect.left_top() + egui::vec2(p.x as f32, p.y as f32)
}

fn rect_to_screen(view: &ViewTransform, rect: egui::Rect, r: &ImageRect) -> egui::Rect {
    egui::Rect::from_min_max(
        to_screen(view, rect, r.x1 as f64, r.y1 as f64),
        to_screen(view, rect, r.x2 as f64, r.y2 as f64),
    )
}

fn kind_color(kind: RectKind) -> egui::Color32 {
    match kind {
        RectKind::Ocr => LABEL_COLOR,
        RectKind::Link => LINK_COLOR,
        RectKind::Crop => CROP_COLOR,
    }
}

/// Draw annotations and the rectangle being dragged on top of the image.
pub fn draw(ui: &egui::Ui, app: &PinmapApp, rect: egui::Rect) {
    let Some(doc) = app.document.as_ref() else {
        return;
    };
    let view = &app.viewport.view;
    let painter = ui.painter_at(rect);

    let pending = match app.ui_state.editor {
        EditorKind::PinMapper => doc.pin_input.mode.pending_rect(),
        EditorKind::Eraser => doc.eraser_input.mode.pending_rect(),
    };

    if app.ui_state.editor == EditorKind::PinMapper {
        let session = &doc.pins;

        if let Some(crop) = session.crop() {
            let (w, h) = session.dimensions();
            let full = ImageRect { x1: 0, y1: 0, x2: w as i32, y2: h as i32 };
            draw_dim_regions(
                &painter,
                rect_to_screen(view, rect, &full),
                rect_to_screen(view, rect, &crop),
            );
            painter.rect_stroke(
                rect_to_screen(view, rect, &crop),
                0.0,
                egui::Stroke::new(1.5, CROP_COLOR),
                egui::epaint::StrokeKind::Outside,
            );
        }

        for label in session.labels() {
            let r = rect_to_screen(view, rect, &label.bbox);
            painter.rect_stroke(
                r,
                0.0,
                egui::Stroke::new(1.0, LABEL_COLOR),
                egui::epaint::StrokeKind::Outside,
            );
            painter.text(
                r.left_top() - egui::vec2(0.0, 2.0),
                egui::Align2::LEFT_BOTTOM,
                &label.text,
                egui::FontId::proportional(12.0),
                LABEL_COLOR,
            );
        }

        for link in session.links() {
            let from = to_screen(view, rect, link.x as f64, link.y as f64);
            let to = rect_to_screen(view, rect, &link.bbox).center();
            painter.line_segment([from, to], egui::Stroke::new(1.0, LINK_COLOR));
        }

        for pin in session.pins() {
            let center = to_screen(view, rect, pin.x as f64, pin.y as f64);
            let color = if session.is_linked(pin.pin_number) {
                LINKED_PIN_COLOR
            } else {
                PIN_COLOR
            };
            painter.circle_filled(center, PIN_MARKER_RADIUS, color);
            painter.text(
                center + egui::vec2(5.0, -5.0),
                egui::Align2::LEFT_BOTTOM,
                pin.pin_number.to_string(),
                egui::FontId::proportional(11.0),
                color,
            );
        }
    }

    if let Some((kind, pending_rect)) = pending {
        painter.rect_stroke(
            rect_to_screen(view, rect, &pending_rect),
            0.0,
            egui::Stroke::new(1.5, kind_color(kind)),
            egui::epaint::StrokeKind::Outside,
        );
    }
}

fn draw_dim_regions(painter: &egui::Painter, img_rect: egui::Rect, crop_screen: egui::Rect) {
    let dim_color = egui::Color32::from_black_alpha(140);

    // Top
    painter.rect_filled(
        egui::Rect::from_min_max(img_rect.left_top(), egui::pos2(img_rect.right(), crop_screen.top())),
        0.0,
        dim_color,
    );
    // Bottom
    painter.rect_filled(
        egui::Rect::from_min_max(egui::pos2(img_rect.left(), crop_screen.bottom()), img_rect.right_bottom()),
        0.0,
        dim_color,
    );
    // Left (between top and bottom)
    painter.rect_filled(
        egui::Rect::from_min_max(
            egui::pos2(img_rect.left(), crop_screen.top()),
            egui::pos2(crop_screen.left(), crop_screen.bottom()),
        ),
        0.0,
        dim_color,
    );
    // Right (between top and bottom)
    painter.rect_filled(
        egui::Rect::from_min_max(
            egui::pos2(crop_screen.right(), crop_screen.top()),
            egui::pos2(img_rect.right(), crop_screen.bottom()),
        ),
        0.0,
        dim_color,
    );
}
