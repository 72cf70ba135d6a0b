mod common;

use approx::assert_relative_eq;
use common::write_png;
use image::{DynamicImage, RgbaImage};
use pinmap_core::batch::{
    discover_devices, grid_overlay, process_device, scale_coordinates, scale_image, scale_pair, scaled_size,
    DeviceOutcome,
};
use pinmap_core::catalog::Catalog;
use serde_json::{json, Value};
use tempfile::tempdir;

#[test]
fn test_scaled_size_rounds_and_floors_at_one() {
    assert_eq!(scaled_size(200, 100, 0.5), (100, 50));
    assert_eq!(scaled_size(101, 33, 0.5), (51, 17));
    assert_eq!(scaled_size(10, 3, 0.01), (1, 1));
}

#[test]
fn test_scale_image_keeps_alpha() {
    let rgba = DynamicImage::ImageRgba8(RgbaImage::from_pixel(40, 20, image::Rgba([1, 2, 3, 0])));
    let scaled = scale_image(&rgba, 1.5).expect("scale");
    assert_eq!((scaled.width(), scaled.height()), (60, 30));
    assert!(scaled.color().has_alpha());

    assert!(scale_image(&rgba, 0.0).is_err());
    assert!(scale_image(&rgba, f64::NAN).is_err());
}

#[test]
fn test_scale_coordinates_truncates() {
    let mut doc = json!({
        "name": "Board",
        "digital-pins": {
            "id": ["D1", "D2"],
            "reloc": [
                {"id": "D1", "points": [10, 15]},
                {"id": "D2", "points": [7, 3]}
            ]
        }
    });

    let pairs = scale_coordinates(&mut doc, 0.5);
    assert_eq!(pairs, 2);
    assert_eq!(doc["digital-pins"]["reloc"][0]["points"], json!([5, 7]));
    assert_eq!(doc["digital-pins"]["reloc"][1]["points"], json!([3, 1]));
    assert_eq!(doc["name"], "Board");
    assert_eq!(doc["digital-pins"]["id"], json!(["D1", "D2"]));
}

#[test]
fn test_scale_coordinates_handles_pins_documents() {
    let mut doc = json!({"pins": [{"pin_number": 0, "x": 9, "y": 20}]});
    assert_eq!(scale_coordinates(&mut doc, 1.5), 1);
    assert_eq!(doc["pins"][0]["x"], 13);
    assert_eq!(doc["pins"][0]["y"], 30);
    assert_eq!(doc["pins"][0]["pin_number"], 0);
}

#[test]
fn test_scale_coordinates_ignores_unrelated_documents() {
    let mut doc = json!({"components": [{"x": 1}]});
    let before = doc.clone();
    assert_eq!(scale_coordinates(&mut doc, 3.0), 0);
    assert_eq!(doc, before);
}

#[test]
fn test_round_trip_within_one_pixel() {
    let points: Vec<[i64; 2]> = vec![[0, 0], [1, 1], [17, 250], [333, 4], [1023, 767]];
    let reloc: Vec<Value> = points
        .iter()
        .map(|p| json!({"id": "P", "points": [p[0], p[1]]}))
        .collect();
    let mut doc = json!({"digital-pins": {"id": [], "reloc": reloc}});

    scale_coordinates(&mut doc, 2.0);
    scale_coordinates(&mut doc, 0.5);

    for (i, p) in points.iter().enumerate() {
        let back = &doc["digital-pins"]["reloc"][i]["points"];
        let x = back[0].as_i64().unwrap();
        let y = back[1].as_i64().unwrap();
        assert!((x - p[0]).abs() <= 1, "x {x} vs {}", p[0]);
        assert!((y - p[1]).abs() <= 1, "y {y} vs {}", p[1]);
    }
}

#[test]
fn test_round_trip_uneven_ratios_within_one_pixel() {
    for r in [1.37, 1.5, 3.3] {
        let pins: Vec<Value> = (0..500)
            .map(|x| json!({"pin_number": x, "x": x, "y": 499 - x}))
            .collect();
        let mut doc = json!({ "pins": pins });

        assert_eq!(scale_coordinates(&mut doc, r), 500);
        scale_coordinates(&mut doc, 1.0 / r);

        for x in 0..500i64 {
            let back = &doc["pins"][x as usize];
            let bx = back["x"].as_i64().unwrap();
            let by = back["y"].as_i64().unwrap();
            assert!((bx - x).abs() <= 1, "r {r}: x {bx} vs {x}");
            assert!((by - (499 - x)).abs() <= 1, "r {r}: y {by} vs {}", 499 - x);
        }
    }
}

#[test]
fn test_round_trip_shrinking_first_can_drift_past_one_pixel() {
    // Truncating after a downscale throws away more than one source pixel.
    let mut doc = json!({"pins": [{"pin_number": 1, "x": 3, "y": 0}]});
    scale_coordinates(&mut doc, 0.3);
    scale_coordinates(&mut doc, 1.0 / 0.3);
    assert_eq!(doc["pins"][0]["x"], 0);
}

#[test]
fn test_scale_pair_writes_outputs() {
    let dir = tempdir().unwrap();
    let img = dir.path().join("board.png");
    let doc = dir.path().join("board.json");
    write_png(&img, 100, 60);
    std::fs::write(
        &doc,
        r#"{"name": "board", "digital-pins": {"id": ["A"], "reloc": [{"id": "A", "points": [50, 30]}]}}"#,
    )
    .unwrap();

    let out_img = dir.path().join("out.png");
    let out_json = dir.path().join("out.json");
    let report = scale_pair(&img, &doc, 0.5, &out_img, &out_json).expect("scale pair");

    assert_eq!(report.original_size, (100, 60));
    assert_eq!(report.scaled_size, (50, 30));
    assert_eq!(report.pairs_scaled, 1);
    assert_eq!(image::image_dimensions(&out_img).unwrap(), (50, 30));

    let text = std::fs::read_to_string(&out_json).unwrap();
    assert!(text.contains("\n    \""), "four-space indent expected:\n{text}");
    let written: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(written["digital-pins"]["reloc"][0]["points"], json!([25, 15]));
}

#[test]
fn test_scale_pair_rejects_bad_ratio() {
    let dir = tempdir().unwrap();
    let img = dir.path().join("board.png");
    let doc = dir.path().join("board.json");
    write_png(&img, 10, 10);
    std::fs::write(&doc, "{}").unwrap();

    let out = dir.path().join("o.png");
    assert!(scale_pair(&img, &doc, -1.0, &out, &dir.path().join("o.json")).is_err());
    assert!(!out.exists());
}

#[test]
fn test_process_device_matches_catalog_size() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("dev-boards");
    write_png(&dir.path().join("DHT22.png"), 250, 100);
    std::fs::write(
        dir.path().join("DHT22.json"),
        r#"{"digital-pins": {"id": ["DATA"], "reloc": [{"id": "DATA", "points": [100, 40]}]}}"#,
    )
    .unwrap();

    let outcome = process_device("DHT22", dir.path(), &Catalog::builtin(), 10.0, &out).unwrap();
    let DeviceOutcome::Scaled(report) = outcome else {
        panic!("expected DHT22 to be scaled");
    };
    // 50 mm at 10 px/mm over a 250 px long side.
    assert_relative_eq!(report.ratio, 2.0);
    assert_eq!(image::image_dimensions(out.join("DHT22.png")).unwrap(), (500, 200));

    let written: Value =
        serde_json::from_str(&std::fs::read_to_string(out.join("DHT22.json")).unwrap()).unwrap();
    assert_eq!(written["digital-pins"]["reloc"][0]["points"], json!([200, 80]));
}

#[test]
fn test_process_device_skips_unknown_component() {
    let dir = tempdir().unwrap();
    write_png(&dir.path().join("Mystery.png"), 20, 20);
    std::fs::write(dir.path().join("Mystery.json"), "{}").unwrap();

    let out = dir.path().join("out");
    let outcome = process_device("Mystery", dir.path(), &Catalog::builtin(), 10.0, &out).unwrap();
    assert!(matches!(outcome, DeviceOutcome::Skipped { .. }));
    assert!(!out.exists());
}

#[test]
fn test_discover_devices_needs_both_files() {
    let dir = tempdir().unwrap();
    write_png(&dir.path().join("b.png"), 2, 2);
    std::fs::write(dir.path().join("b.json"), "{}").unwrap();
    write_png(&dir.path().join("a.png"), 2, 2);
    std::fs::write(dir.path().join("a.json"), "{}").unwrap();
    write_png(&dir.path().join("lonely.png"), 2, 2);
    std::fs::write(dir.path().join("orphan.json"), "{}").unwrap();
    std::fs::write(dir.path().join("notes.txt"), "x").unwrap();

    let devices = discover_devices(dir.path()).unwrap();
    assert_eq!(devices, vec!["a".to_string(), "b".to_string()]);
}

#[test]
fn test_grid_overlay_draws_lines_at_divisions() {
    let image = DynamicImage::ImageRgba8(RgbaImage::from_pixel(100, 60, image::Rgba([10, 20, 30, 128])));
    let grid = grid_overlay(&image, 4).unwrap();

    assert_eq!(grid.dimensions(), (100, 60));
    let red = image::Rgba([255, 0, 0, 255]);
    // Steps are 25 px across and 15 px down.
    assert_eq!(*grid.get_pixel(0, 7), red);
    assert_eq!(*grid.get_pixel(25, 7), red);
    assert_eq!(*grid.get_pixel(75, 7), red);
    assert_eq!(*grid.get_pixel(12, 45), red);
    assert_eq!(*grid.get_pixel(26, 7), image::Rgba([10, 20, 30, 128]));
    assert_eq!(*grid.get_pixel(99, 59), image::Rgba([10, 20, 30, 128]));
}

#[test]
fn test_grid_overlay_rejects_zero_divisions() {
    let image = DynamicImage::ImageRgba8(RgbaImage::new(10, 10));
    assert!(grid_overlay(&image, 0).is_err());
}

#[test]
fn test_grid_overlay_more_divisions_than_pixels() {
    let image = DynamicImage::ImageRgba8(RgbaImage::new(3, 3));
    let grid = grid_overlay(&image, 10).unwrap();
    assert!(grid.pixels().all(|p| p.0 == [255, 0, 0, 255]));
}
