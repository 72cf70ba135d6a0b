mod common;

use common::{half_split_image, StubRecognizer};
use pinmap_core::annotation::PinSession;
use pinmap_core::config::OcrConfig;
use pinmap_core::consts::OCR_WHITELIST;
use pinmap_core::geometry::ImageRect;
use pinmap_core::ocr::{prepare_region, read_label, sanitize_label};
use tempfile::tempdir;

fn config_in(dir: &std::path::Path) -> OcrConfig {
    OcrConfig {
        debug_path: dir.join("ocr_debug.png"),
        ..OcrConfig::default()
    }
}

#[test]
fn test_prepare_region_upscales_and_binarizes() {
    let image = half_split_image(40, 20, 20);
    let rect = ImageRect { x1: 10, y1: 0, x2: 30, y2: 10 };

    let bitmap = prepare_region(&image, &rect, 2).expect("bitmap");
    assert_eq!(bitmap.dimensions(), (40, 20));
    assert!(bitmap.pixels().all(|p| p[0] == 0 || p[0] == 255));
    assert_eq!(bitmap.get_pixel(0, 0)[0], 255);
    assert_eq!(bitmap.get_pixel(39, 19)[0], 0);
}

#[test]
fn test_prepare_region_clips_to_image() {
    let image = half_split_image(10, 10, 5);
    let rect = ImageRect { x1: -5, y1: -5, x2: 4, y2: 4 };
    let bitmap = prepare_region(&image, &rect, 2).expect("bitmap");
    assert_eq!(bitmap.dimensions(), (8, 8));

    let outside = ImageRect { x1: 20, y1: 20, x2: 30, y2: 30 };
    assert!(prepare_region(&image, &outside, 2).is_none());
}

#[test]
fn test_sanitize_keeps_whitelist_only() {
    assert_eq!(sanitize_label(" GPIO-4\n", OCR_WHITELIST, "UNKNOWN"), "GPIO4");
    assert_eq!(sanitize_label("I2C_SDA/A4", OCR_WHITELIST, "UNKNOWN"), "I2C_SDA/A4");
    assert_eq!(sanitize_label("vcc", OCR_WHITELIST, "UNKNOWN"), "UNKNOWN");
    assert_eq!(sanitize_label("", OCR_WHITELIST, "UNKNOWN"), "UNKNOWN");
}

#[test]
fn test_read_label_passes_charset() {
    let dir = tempdir().unwrap();
    let config = config_in(dir.path());
    let stub = StubRecognizer::ok("D13\n");
    let image = half_split_image(30, 30, 15);

    let text = read_label(&stub, &image, &ImageRect { x1: 0, y1: 0, x2: 30, y2: 10 }, &config);
    assert_eq!(text.as_deref(), Some("D13"));

    let seen = stub.seen.borrow();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0], (60, 20, OCR_WHITELIST.to_string()));
    assert!(!config.debug_path.exists());
}

#[test]
fn test_read_label_placeholder_for_garbage() {
    let dir = tempdir().unwrap();
    let config = config_in(dir.path());
    let stub = StubRecognizer::ok("~~");
    let image = half_split_image(30, 30, 15);

    let text = read_label(&stub, &image, &ImageRect { x1: 0, y1: 0, x2: 30, y2: 10 }, &config);
    assert_eq!(text.as_deref(), Some("UNKNOWN"));
}

#[test]
fn test_recognition_failure_dumps_region() {
    let dir = tempdir().unwrap();
    let config = config_in(dir.path());
    let stub = StubRecognizer::failing("engine missing");
    let image = half_split_image(30, 30, 15);

    let text = read_label(&stub, &image, &ImageRect { x1: 5, y1: 5, x2: 25, y2: 15 }, &config);
    assert!(text.is_none());
    assert!(config.debug_path.exists());

    let dumped = image::open(&config.debug_path).unwrap();
    assert_eq!((dumped.width(), dumped.height()), (40, 20));
}

#[test]
fn test_session_adds_recognized_label() {
    let dir = tempdir().unwrap();
    let config = config_in(dir.path());
    let image = half_split_image(50, 50, 25);
    let mut session = PinSession::new(50, 50);

    let stub = StubRecognizer::ok("A0");
    let label = session
        .recognize_label(&image, ImageRect { x1: 10, y1: 10, x2: 40, y2: 20 }, &stub, &config)
        .expect("label")
        .clone();
    assert_eq!(label.label_id, 0);
    assert_eq!(label.text, "A0");
    assert_eq!(label.bbox, ImageRect { x1: 10, y1: 10, x2: 40, y2: 20 });

    let failing = StubRecognizer::failing("no text");
    assert!(session
        .recognize_label(&image, ImageRect { x1: 0, y1: 0, x2: 10, y2: 10 }, &failing, &config)
        .is_none());
    assert_eq!(session.labels().len(), 1);
    assert_eq!(session.history().len(), 1);
}
