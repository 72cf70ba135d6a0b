use pinmap_core::geometry::{ImagePoint, ImageRect, ScreenPoint};
use pinmap_core::interaction::{
    EraseCommand, EraserInput, InteractionMode, Modifiers, PinCommand, PinMapperInput,
    PointerButton, PointerEvent, RectKind, ViewCommand,
};
use pinmap_core::view::{ViewTransform, ZoomDirection};

fn press(x: f64, y: f64, modifiers: Modifiers) -> PointerEvent {
    PointerEvent::Press {
        button: PointerButton::Primary,
        pos: ScreenPoint::new(x, y),
        modifiers,
    }
}

fn moved(x: f64, y: f64) -> PointerEvent {
    PointerEvent::Move {
        pos: ScreenPoint::new(x, y),
    }
}

fn release(x: f64, y: f64) -> PointerEvent {
    PointerEvent::Release {
        button: PointerButton::Primary,
        pos: ScreenPoint::new(x, y),
    }
}

// ---------------------------------------------------------------------------
// Pin mapper
// ---------------------------------------------------------------------------

#[test]
fn test_plain_click_places_pin_in_image_space() {
    let mut view = ViewTransform::default();
    view.zoom = 2.0;
    view.offset_x = -10.0;

    let mut input = PinMapperInput::default();
    let cmd = input.handle(press(30.0, 40.0, Modifiers::NONE), &view);
    assert_eq!(cmd, Some(PinCommand::PlacePin(ImagePoint::new(20, 20))));
    assert_eq!(input.mode, InteractionMode::Idle);
}

#[test]
fn test_shift_drag_draws_ocr_rect() {
    let view = ViewTransform::default();
    let mut input = PinMapperInput::default();

    assert_eq!(input.handle(press(50.0, 40.0, Modifiers::SHIFT), &view), None);
    assert_eq!(input.handle(moved(20.0, 10.0), &view), None);
    assert_eq!(
        input.mode.pending_rect(),
        Some((RectKind::Ocr, ImageRect { x1: 20, y1: 10, x2: 50, y2: 40 }))
    );

    let cmd = input.handle(release(10.0, 5.0), &view);
    assert_eq!(
        cmd,
        Some(PinCommand::RecognizeLabel(ImageRect { x1: 10, y1: 5, x2: 50, y2: 40 }))
    );
    assert_eq!(input.mode, InteractionMode::Idle);
}

#[test]
fn test_ctrl_and_alt_drags() {
    let view = ViewTransform::default();
    let mut input = PinMapperInput::default();

    input.handle(press(0.0, 0.0, Modifiers::CTRL), &view);
    assert_eq!(
        input.handle(release(5.0, 5.0), &view),
        Some(PinCommand::Link(ImageRect { x1: 0, y1: 0, x2: 5, y2: 5 }))
    );

    input.handle(press(1.0, 2.0, Modifiers::ALT), &view);
    assert_eq!(
        input.handle(release(8.0, 9.0), &view),
        Some(PinCommand::Crop(ImageRect { x1: 1, y1: 2, x2: 8, y2: 9 }))
    );
}

#[test]
fn test_multiple_modifiers_are_ambiguous() {
    let view = ViewTransform::default();
    let mut input = PinMapperInput::default();
    let both = Modifiers {
        shift: true,
        ctrl: true,
        alt: false,
    };

    assert_eq!(
        input.handle(press(5.0, 5.0, both), &view),
        Some(PinCommand::Ambiguous(both))
    );
    assert_eq!(input.mode, InteractionMode::Idle);
    assert_eq!(input.handle(release(9.0, 9.0), &view), None);
}

#[test]
fn test_secondary_drag_pans() {
    let view = ViewTransform::default();
    let mut input = PinMapperInput::default();

    input.handle(
        PointerEvent::Press {
            button: PointerButton::Secondary,
            pos: ScreenPoint::new(100.0, 100.0),
            modifiers: Modifiers::NONE,
        },
        &view,
    );
    assert_eq!(
        input.handle(moved(90.0, 120.0), &view),
        Some(PinCommand::View(ViewCommand::Pan { dx: -10.0, dy: 20.0 }))
    );
    assert_eq!(
        input.handle(moved(80.0, 120.0), &view),
        Some(PinCommand::View(ViewCommand::Pan { dx: -10.0, dy: 0.0 }))
    );
    input.handle(
        PointerEvent::Release {
            button: PointerButton::Secondary,
            pos: ScreenPoint::new(80.0, 120.0),
        },
        &view,
    );
    assert_eq!(input.mode, InteractionMode::Idle);
}

#[test]
fn test_wheel_zooms_at_cursor() {
    let view = ViewTransform::default();
    let mut input = PinMapperInput::default();
    let cmd = input.handle(
        PointerEvent::Scroll {
            pos: ScreenPoint::new(3.0, 4.0),
            direction: ZoomDirection::Out,
        },
        &view,
    );
    assert_eq!(
        cmd,
        Some(PinCommand::View(ViewCommand::Zoom {
            cursor: ScreenPoint::new(3.0, 4.0),
            direction: ZoomDirection::Out,
        }))
    );
}

// ---------------------------------------------------------------------------
// Eraser
// ---------------------------------------------------------------------------

#[test]
fn test_eraser_stroke_lifecycle() {
    let view = ViewTransform::default();
    let mut input = EraserInput::default();

    assert_eq!(
        input.handle(press(4.0, 4.0, Modifiers::NONE), &view),
        Some(EraseCommand::BeginStroke(ImagePoint::new(4, 4)))
    );
    assert_eq!(input.mode, InteractionMode::Erasing);
    assert_eq!(
        input.handle(moved(6.0, 7.0), &view),
        Some(EraseCommand::StrokeTo(ImagePoint::new(6, 7)))
    );
    assert_eq!(input.handle(release(6.0, 7.0), &view), Some(EraseCommand::EndStroke));
    assert_eq!(input.handle(moved(9.0, 9.0), &view), None);
}

#[test]
fn test_eraser_shift_click_and_alt_crop() {
    let view = ViewTransform::default();
    let mut input = EraserInput::default();

    assert_eq!(
        input.handle(press(12.0, 3.0, Modifiers::SHIFT), &view),
        Some(EraseCommand::EraseSimilar(ImagePoint::new(12, 3)))
    );
    assert_eq!(input.mode, InteractionMode::Idle);

    input.handle(press(20.0, 20.0, Modifiers::ALT), &view);
    input.handle(moved(5.0, 25.0), &view);
    assert_eq!(
        input.handle(release(2.0, 30.0), &view),
        Some(EraseCommand::Crop(ImageRect { x1: 2, y1: 20, x2: 20, y2: 30 }))
    );
}

#[test]
fn test_eraser_ambiguous_modifiers() {
    let view = ViewTransform::default();
    let mut input = EraserInput::default();
    let all = Modifiers {
        shift: true,
        ctrl: true,
        alt: true,
    };
    assert_eq!(
        input.handle(press(1.0, 1.0, all), &view),
        Some(EraseCommand::Ambiguous(all))
    );
    assert_eq!(input.mode, InteractionMode::Idle);
}
