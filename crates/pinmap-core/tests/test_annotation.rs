use pinmap_core::annotation::{AnnotationAction, LinkRejection, PinRejection, PinSession};
use pinmap_core::geometry::{ImagePoint, ImageRect};
use pinmap_core::io::{read_json, to_json_pretty, DeviceMeta, DeviceSpecs, PinsDocument};

fn rect(x1: i32, y1: i32, x2: i32, y2: i32) -> ImageRect {
    ImageRect { x1, y1, x2, y2 }
}

#[test]
fn test_pins_are_numbered_sequentially() {
    let mut session = PinSession::new(100, 100);
    assert_eq!(session.place_pin(ImagePoint::new(10, 10)).unwrap().pin_number, 0);
    assert_eq!(session.place_pin(ImagePoint::new(20, 10)).unwrap().pin_number, 1);
    assert_eq!(session.pins().len(), 2);
    assert_eq!(session.history().len(), 2);
}

#[test]
fn test_pin_outside_image_rejected() {
    let mut session = PinSession::new(100, 50);
    assert_eq!(
        session.place_pin(ImagePoint::new(100, 10)),
        Err(PinRejection::OutsideImage)
    );
    assert_eq!(
        session.place_pin(ImagePoint::new(-1, 10)),
        Err(PinRejection::OutsideImage)
    );
    assert!(session.pins().is_empty());
    assert!(session.history().is_empty());
}

#[test]
fn test_crop_restricts_pin_placement() {
    let mut session = PinSession::new(100, 100);
    session.set_crop(rect(20, 20, 60, 60)).expect("crop");

    assert_eq!(
        session.place_pin(ImagePoint::new(10, 10)),
        Err(PinRejection::OutsideCrop)
    );
    assert!(session.place_pin(ImagePoint::new(60, 60)).is_ok());
}

#[test]
fn test_link_single_pin_and_label() {
    let mut session = PinSession::new(200, 200);
    session.place_pin(ImagePoint::new(50, 50)).unwrap();
    session.add_label("GPIO4".into(), rect(60, 40, 90, 55));

    let link = session
        .process_linking_rectangle(rect(45, 35, 95, 60))
        .expect("link");
    assert_eq!(link.pin_number, 0);
    assert_eq!((link.x, link.y), (50, 50));
    assert_eq!(link.text, "GPIO4");
    assert_eq!(session.links().len(), 1);
}

#[test]
fn test_link_bounds_are_inclusive() {
    let mut session = PinSession::new(200, 200);
    session.place_pin(ImagePoint::new(10, 10)).unwrap();
    session.add_label("A0".into(), rect(20, 10, 40, 30));

    assert!(session.process_linking_rectangle(rect(10, 10, 40, 30)).is_ok());
}

#[test]
fn test_link_rejects_label_partially_outside() {
    let mut session = PinSession::new(200, 200);
    session.place_pin(ImagePoint::new(10, 10)).unwrap();
    session.add_label("A0".into(), rect(20, 10, 41, 30));

    let err = session
        .process_linking_rectangle(rect(0, 0, 40, 30))
        .unwrap_err();
    assert_eq!(err, LinkRejection { pins: 1, labels: 0 });
    assert!(session.links().is_empty());
}

#[test]
fn test_link_rejects_two_pins() {
    let mut session = PinSession::new(200, 200);
    session.place_pin(ImagePoint::new(10, 10)).unwrap();
    session.place_pin(ImagePoint::new(15, 10)).unwrap();
    session.add_label("VCC".into(), rect(20, 5, 30, 15));
    let history_before = session.history().len();

    let err = session
        .process_linking_rectangle(rect(0, 0, 50, 50))
        .unwrap_err();
    assert_eq!(err.pins, 2);
    assert_eq!(err.labels, 1);
    assert!(session.links().is_empty());
    assert_eq!(session.history().len(), history_before);
}

#[test]
fn test_link_rejects_empty_and_multi_label_selection() {
    let mut session = PinSession::new(200, 200);
    session.place_pin(ImagePoint::new(10, 10)).unwrap();
    session.add_label("A".into(), rect(20, 5, 30, 15));
    session.add_label("B".into(), rect(31, 5, 40, 15));

    assert!(session.process_linking_rectangle(rect(100, 100, 150, 150)).is_err());
    let err = session
        .process_linking_rectangle(rect(0, 0, 50, 50))
        .unwrap_err();
    assert_eq!(err.labels, 2);
    assert!(session.links().is_empty());
}

#[test]
fn test_linked_pin_is_not_selected_again() {
    let mut session = PinSession::new(200, 200);
    session.place_pin(ImagePoint::new(10, 10)).unwrap();
    session.add_label("TX".into(), rect(20, 5, 30, 15));
    session.process_linking_rectangle(rect(0, 0, 35, 20)).unwrap();
    assert!(session.is_linked(0));

    let err = session
        .process_linking_rectangle(rect(0, 0, 35, 20))
        .unwrap_err();
    assert_eq!(err.pins, 0);
}

#[test]
fn test_undo_is_lifo() {
    let mut session = PinSession::new(200, 200);
    session.place_pin(ImagePoint::new(10, 10)).unwrap();
    session.add_label("RX".into(), rect(20, 5, 30, 15));
    session.process_linking_rectangle(rect(0, 0, 35, 20)).unwrap();

    assert!(matches!(session.undo(), Some(AnnotationAction::Link(_))));
    assert_eq!(session.links().len(), 0);
    assert_eq!(session.labels().len(), 1);

    assert!(matches!(session.undo(), Some(AnnotationAction::Label(_))));
    assert_eq!(session.labels().len(), 0);
    assert_eq!(session.pins().len(), 1);

    assert!(matches!(session.undo(), Some(AnnotationAction::Pin(_))));
    assert!(session.pins().is_empty());
    assert!(session.history().is_empty());
    assert_eq!(session.undo(), None);
}

#[test]
fn test_undo_pin_reuses_number() {
    let mut session = PinSession::new(50, 50);
    session.place_pin(ImagePoint::new(1, 1)).unwrap();
    session.place_pin(ImagePoint::new(2, 2)).unwrap();
    session.undo();
    assert_eq!(session.next_pin_number(), 1);
    assert_eq!(session.place_pin(ImagePoint::new(3, 3)).unwrap().pin_number, 1);
}

#[test]
fn test_undo_crop_restores_previous() {
    let mut session = PinSession::new(100, 100);
    session.set_crop(rect(0, 0, 50, 50));
    session.set_crop(rect(10, 10, 20, 20));
    session.undo();
    assert_eq!(session.crop(), Some(rect(0, 0, 50, 50)));
    session.undo();
    assert_eq!(session.crop(), None);
}

#[test]
fn test_device_record_relative_to_crop() {
    let mut session = PinSession::new(300, 300);
    session.set_crop(rect(100, 50, 250, 250));
    session.place_pin(ImagePoint::new(120, 80)).unwrap();
    session.add_label("D2".into(), rect(130, 70, 150, 90));
    session.process_linking_rectangle(rect(110, 60, 160, 95)).unwrap();

    let record = session.device_record(DeviceMeta {
        name: "Arduino-UNO".into(),
        kind: "microcontroller".into(),
        specs: DeviceSpecs {
            processor: "ATmega328P".into(),
            clock_speed: "16 MHz".into(),
            voltage: "5V".into(),
        },
    });

    assert_eq!(record.digital_pins.id, vec!["D2".to_string()]);
    assert_eq!(record.digital_pins.reloc[0].id, "D2");
    assert_eq!(record.digital_pins.reloc[0].points, [20, 30]);

    let json: serde_json::Value =
        serde_json::from_str(&to_json_pretty(&record).unwrap()).unwrap();
    assert_eq!(json["type"], "microcontroller");
    assert_eq!(json["digital-pins"]["reloc"][0]["points"][1], 30);
    assert_eq!(json["specs"]["clockSpeed"], "16 MHz");
}

#[test]
fn test_pins_document_shape_and_reload() {
    let mut session = PinSession::new(100, 100);
    session.place_pin(ImagePoint::new(4, 5)).unwrap();
    session.place_pin(ImagePoint::new(6, 7)).unwrap();

    let text = to_json_pretty(&session.pins_document()).unwrap();
    assert!(text.contains("    \"pins\""), "four-space indent expected:\n{text}");
    let json: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(json["pins"][1]["pin_number"], 1);
    assert_eq!(json["pins"][1]["x"], 6);

    let doc: PinsDocument = serde_json::from_str(&text).unwrap();
    let mut reloaded = PinSession::new(100, 100);
    reloaded.load_pins(doc);
    assert_eq!(reloaded.pins().len(), 2);
    assert_eq!(reloaded.next_pin_number(), 2);
    assert!(reloaded.history().is_empty());
}

#[test]
fn test_unsaved_changes_tracking() {
    let mut session = PinSession::new(100, 100);
    assert!(!session.has_unsaved_changes());
    assert!(!session.should_save_on_exit());

    session.set_crop(ImageRect { x1: 0, y1: 0, x2: 50, y2: 50 }).unwrap();
    assert!(session.has_unsaved_changes());
    // A crop alone leaves nothing to write.
    assert!(!session.should_save_on_exit());

    session.place_pin(ImagePoint::new(10, 10)).unwrap();
    assert!(session.should_save_on_exit());

    session.mark_saved();
    assert!(!session.has_unsaved_changes());

    session.undo().unwrap();
    assert!(session.has_unsaved_changes());
}

#[test]
fn test_save_pins_writes_file_and_clears_dirty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("board.json");

    let mut session = PinSession::new(100, 100);
    session.place_pin(ImagePoint::new(4, 5)).unwrap();
    assert!(session.should_save_on_exit());

    session.save_pins(&path).unwrap();
    assert!(!session.has_unsaved_changes());
    assert!(!session.should_save_on_exit());

    let doc: PinsDocument = read_json(&path).unwrap();
    assert_eq!(doc.pins.len(), 1);
    assert_eq!(doc.pins[0].x, 4);

    let mut reloaded = PinSession::new(100, 100);
    reloaded.load_pins(doc);
    assert!(!reloaded.has_unsaved_changes());
}

#[test]
fn test_rejected_actions_do_not_mark_dirty() {
    let mut session = PinSession::new(100, 100);
    assert!(session.place_pin(ImagePoint::new(200, 10)).is_err());
    assert!(session
        .process_linking_rectangle(ImageRect { x1: 0, y1: 0, x2: 10, y2: 10 })
        .is_err());
    assert!(session.undo().is_none());
    assert!(!session.has_unsaved_changes());
}
