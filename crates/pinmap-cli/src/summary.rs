use std::path::Path;

use console::Style;
use pinmap_core::batch::{DeviceOutcome, ScaleReport};
use pinmap_core::catalog::Dimensions;

struct Styles {
    title: Style,
    label: Style,
    value: Style,
    ok: Style,
    skipped: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            ok: Style::new().green(),
            skipped: Style::new().dim().yellow(),
            path: Style::new().underlined(),
        }
    }
}

fn rule(s: &Styles, width: usize) {
    println!("  {}", s.title.apply_to("\u{2550}".repeat(width)));
}

pub fn print_scale_report(report: &ScaleReport) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Scale"));
    rule(&s, 5);
    println!(
        "  {:<14}{}",
        s.label.apply_to("Ratio"),
        s.value.apply_to(format!("{:.4}", report.ratio))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Size"),
        s.value.apply_to(format!(
            "{}x{} -> {}x{}",
            report.original_size.0,
            report.original_size.1,
            report.scaled_size.0,
            report.scaled_size.1
        ))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Pins scaled"),
        s.value.apply_to(report.pairs_scaled)
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Image"),
        s.path.apply_to(report.image_path.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("JSON"),
        s.path.apply_to(report.json_path.display())
    );
    println!();
}

pub fn print_auto_scale_summary(outcomes: &[DeviceOutcome], px_per_mm: f64, output_dir: &Path) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Auto Scale"));
    rule(&s, 10);
    println!(
        "  {:<14}{}",
        s.label.apply_to("Resolution"),
        s.value.apply_to(format!("{px_per_mm} px/mm"))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Output"),
        s.path.apply_to(output_dir.display())
    );
    println!();

    let mut scaled = 0;
    for outcome in outcomes {
        match outcome {
            DeviceOutcome::Scaled(report) => {
                scaled += 1;
                let name = report
                    .image_path
                    .file_stem()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();
                println!(
                    "    {:<40}{}",
                    s.ok.apply_to(name),
                    s.value.apply_to(format!(
                        "{:.2}x  {}x{}",
                        report.ratio, report.scaled_size.0, report.scaled_size.1
                    ))
                );
            }
            DeviceOutcome::Skipped { device, reason } => {
                println!(
                    "    {:<40}{}",
                    s.skipped.apply_to(device),
                    s.skipped.apply_to(format!("skipped ({reason})"))
                );
            }
        }
    }

    println!();
    println!(
        "  {:<14}{}",
        s.label.apply_to("Scaled"),
        s.value.apply_to(format!("{scaled} of {}", outcomes.len()))
    );
    println!();
}

pub fn print_catalog(entries: &[(&String, &Dimensions)], px_per_mm: f64) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Component Catalog"));
    rule(&s, 17);
    for (name, dims) in entries {
        println!(
            "  {:<52}{}  {}",
            s.value.apply_to(name),
            s.label.apply_to(format!(
                "{} x {} x {} mm",
                dims.length, dims.width, dims.height
            )),
            s.ok.apply_to(format!("{:.0} px", dims.long_side() * px_per_mm))
        );
    }
    println!();
    println!(
        "  {:<14}{}",
        s.label.apply_to("Entries"),
        s.value.apply_to(entries.len())
    );
    println!();
}
