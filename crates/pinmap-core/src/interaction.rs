//! Pointer input as an explicit state machine.
//!
//! Front ends translate raw window events into [`PointerEvent`]s and apply the
//! commands the controllers return. Nothing here touches a display.

use crate::geometry::{ImagePoint, ImageRect, ScreenPoint};
use crate::view::{ViewTransform, ZoomDirection};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub const NONE: Self = Self {
        shift: false,
        ctrl: false,
        alt: false,
    };
    pub const SHIFT: Self = Self {
        shift: true,
        ctrl: false,
        alt: false,
    };
    pub const CTRL: Self = Self {
        shift: false,
        ctrl: true,
        alt: false,
    };
    pub const ALT: Self = Self {
        shift: false,
        ctrl: false,
        alt: true,
    };

    fn count(&self) -> usize {
        [self.shift, self.ctrl, self.alt].iter().filter(|&&m| m).count()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    Press {
        button: PointerButton,
        pos: ScreenPoint,
        modifiers: Modifiers,
    },
    Move {
        pos: ScreenPoint,
    },
    Release {
        button: PointerButton,
        pos: ScreenPoint,
    },
    Scroll {
        pos: ScreenPoint,
        direction: ZoomDirection,
    },
}

/// What the pointer is currently doing.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum InteractionMode {
    #[default]
    Idle,
    DrawingOcrRect {
        start: ImagePoint,
        current: ImagePoint,
    },
    DrawingLinkRect {
        start: ImagePoint,
        current: ImagePoint,
    },
    DrawingCropRect {
        start: ImagePoint,
        current: ImagePoint,
    },
    Panning {
        last: ScreenPoint,
    },
    Erasing,
}

/// Which rectangle is being dragged, for overlay styling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RectKind {
    Ocr,
    Link,
    Crop,
}

impl InteractionMode {
    /// The rectangle under construction, if any.
    pub fn pending_rect(&self) -> Option<(RectKind, ImageRect)> {
        match *self {
            Self::DrawingOcrRect { start, current } => {
                Some((RectKind::Ocr, ImageRect::from_corners(start, current)))
            }
            Self::DrawingLinkRect { start, current } => {
                Some((RectKind::Link, ImageRect::from_corners(start, current)))
            }
            Self::DrawingCropRect { start, current } => {
                Some((RectKind::Crop, ImageRect::from_corners(start, current)))
            }
            _ => None,
        }
    }

    fn with_current(self, p: ImagePoint) -> Self {
        match self {
            Self::DrawingOcrRect { start, .. } => Self::DrawingOcrRect { start, current: p },
            Self::DrawingLinkRect { start, .. } => Self::DrawingLinkRect { start, current: p },
            Self::DrawingCropRect { start, .. } => Self::DrawingCropRect { start, current: p },
            other => other,
        }
    }
}

/// Actions shared by both editors.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ViewCommand {
    Pan { dx: f64, dy: f64 },
    Zoom { cursor: ScreenPoint, direction: ZoomDirection },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PinCommand {
    PlacePin(ImagePoint),
    RecognizeLabel(ImageRect),
    Link(ImageRect),
    Crop(ImageRect),
    View(ViewCommand),
    /// More than one modifier was held on press; nothing was started.
    Ambiguous(Modifiers),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EraseCommand {
    BeginStroke(ImagePoint),
    StrokeTo(ImagePoint),
    EndStroke,
    EraseSimilar(ImagePoint),
    Crop(ImageRect),
    View(ViewCommand),
    Ambiguous(Modifiers),
}

/// Shared handling of secondary-button panning and wheel zoom.
fn view_event(mode: &mut InteractionMode, event: &PointerEvent) -> Option<ViewCommand> {
    match (*mode, *event) {
        (
            InteractionMode::Idle,
            PointerEvent::Press {
                button: PointerButton::Secondary,
                pos,
                ..
            },
        ) => {
            *mode = InteractionMode::Panning { last: pos };
            None
        }
        (InteractionMode::Panning { last }, PointerEvent::Move { pos }) => {
            *mode = InteractionMode::Panning { last: pos };
            Some(ViewCommand::Pan {
                dx: pos.x - last.x,
                dy: pos.y - last.y,
            })
        }
        (
            InteractionMode::Panning { .. },
            PointerEvent::Release {
                button: PointerButton::Secondary,
                ..
            },
        ) => {
            *mode = InteractionMode::Idle;
            None
        }
        (_, PointerEvent::Scroll { pos, direction }) => Some(ViewCommand::Zoom {
            cursor: pos,
            direction,
        }),
        _ => None,
    }
}

/// Input handling for the pin mapper.
///
/// Primary click places a pin; Shift, Ctrl and Alt with a primary drag draw
/// the OCR, link and crop rectangles respectively.
#[derive(Clone, Debug, Default)]
pub struct PinMapperInput {
    pub mode: InteractionMode,
}

impl PinMapperInput {
    pub fn handle(&mut self, event: PointerEvent, view: &ViewTransform) -> Option<PinCommand> {
        if let Some(cmd) = view_event(&mut self.mode, &event) {
            return Some(PinCommand::View(cmd));
        }

        match (self.mode, event) {
            (
                InteractionMode::Idle,
                PointerEvent::Press {
                    button: PointerButton::Primary,
                    pos,
                    modifiers,
                },
            ) => {
                let p = view.screen_to_image(pos);
                if modifiers.count() > 1 {
                    return Some(PinCommand::Ambiguous(modifiers));
                }
                if modifiers.shift {
                    self.mode = InteractionMode::DrawingOcrRect { start: p, current: p };
                    None
                } else if modifiers.ctrl {
                    self.mode = InteractionMode::DrawingLinkRect { start: p, current: p };
                    None
                } else if modifiers.alt {
                    self.mode = InteractionMode::DrawingCropRect { start: p, current: p };
                    None
                } else {
                    Some(PinCommand::PlacePin(p))
                }
            }
            (mode, PointerEvent::Move { pos }) if mode.pending_rect().is_some() => {
                self.mode = mode.with_current(view.screen_to_image(pos));
                None
            }
            (
                mode,
                PointerEvent::Release {
                    button: PointerButton::Primary,
                    pos,
                },
            ) => {
                let (kind, rect) = mode.with_current(view.screen_to_image(pos)).pending_rect()?;
                self.mode = InteractionMode::Idle;
                Some(match kind {
                    RectKind::Ocr => PinCommand::RecognizeLabel(rect),
                    RectKind::Link => PinCommand::Link(rect),
                    RectKind::Crop => PinCommand::Crop(rect),
                })
            }
            _ => None,
        }
    }
}

/// Input handling for background removal.
///
/// Primary drag erases with the brush, Shift+click erases similar colors,
/// Alt+drag crops.
#[derive(Clone, Debug, Default)]
pub struct EraserInput {
    pub mode: InteractionMode,
}

impl EraserInput {
    pub fn handle(&mut self, event: PointerEvent, view: &ViewTransform) -> Option<EraseCommand> {
        if let Some(cmd) = view_event(&mut self.mode, &event) {
            return Some(EraseCommand::View(cmd));
        }

        match (self.mode, event) {
            (
                InteractionMode::Idle,
                PointerEvent::Press {
                    button: PointerButton::Primary,
                    pos,
                    modifiers,
                },
            ) => {
                let p = view.screen_to_image(pos);
                if modifiers.count() > 1 {
                    Some(EraseCommand::Ambiguous(modifiers))
                } else if modifiers.shift {
                    Some(EraseCommand::EraseSimilar(p))
                } else if modifiers.alt {
                    self.mode = InteractionMode::DrawingCropRect { start: p, current: p };
                    None
                } else if modifiers.ctrl {
                    None
                } else {
                    self.mode = InteractionMode::Erasing;
                    Some(EraseCommand::BeginStroke(p))
                }
            }
            (InteractionMode::Erasing, PointerEvent::Move { pos }) => {
                Some(EraseCommand::StrokeTo(view.screen_to_image(pos)))
            }
            (InteractionMode::Erasing, PointerEvent::Release { button: PointerButton::Primary, .. }) => {
                self.mode = InteractionMode::Idle;
                Some(EraseCommand::EndStroke)
            }
            (mode @ InteractionMode::DrawingCropRect { .. }, PointerEvent::Move { pos }) => {
                self.mode = mode.with_current(view.screen_to_image(pos));
                None
            }
            (
                mode @ InteractionMode::DrawingCropRect { .. },
                PointerEvent::Release {
                    button: PointerButton::Primary,
                    pos,
                },
            ) => {
                self.mode = InteractionMode::Idle;
                let (_, rect) = mode.with_current(view.screen_to_image(pos)).pending_rect()?;
                Some(EraseCommand::Crop(rect))
            }
            _ => None,
        }
    }
}
