//! # VigApp CLI
//!
//! Terminal front end for the beam design engine. Prompts for the envelope
//! moments, section geometry and shear demand, then runs the full pipeline:
//! moment correction, flexural steel design and stirrup layout.
//!
//! Pass `--json` to also dump the inputs and results as JSON.

use std::env;
use std::io::{self, BufRead, Write};

use viga_core::calculations::flexure::{self, FlexureInput, RebarRow, SectionLocation};
use viga_core::calculations::moment_correction::{correct_moments, MomentSet, StructuralSystem};
use viga_core::calculations::shear::{self, ShearInput};
use viga_core::calculations::CalculationItem;
use viga_core::materials::BarSize;
use viga_core::report::{flexure_rows, moment_rows, shear_rows};
use viga_core::section::BeamSection;

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn prompt_moments(sign: &str, defaults: [f64; 3]) -> [f64; 3] {
    let labels = ["left face", "midspan", "right face"];
    let mut values = defaults;
    for (i, label) in labels.iter().enumerate() {
        values[i] = prompt_f64(
            &format!("Mu{} at {} (T·m) [{}]: ", sign, label, defaults[i]),
            defaults[i],
        );
    }
    values
}

fn print_rows(title: &str, rows: &[viga_core::report::ReportValue]) {
    println!("─── {} ───", title);
    for row in rows {
        if row.unit.is_empty() {
            println!("  {:<28} {}", row.label, row.value);
        } else {
            println!("  {:<28} {} {}", row.label, row.value, row.unit);
        }
    }
    println!();
}

fn main() {
    let dump_json = env::args().any(|a| a == "--json");

    println!("VigApp CLI - Reinforced-Concrete Beam Design (NTP E.060)");
    println!("=========================================================");
    println!();

    // === Moments ===
    let negative = prompt_moments("-", [-10.0, -20.0, -15.0]);
    let positive = prompt_moments("+", [5.0, 2.0, 3.0]);
    let system_raw = prompt_f64("Structural system (1 = Dual 1, 2 = Dual 2) [2]: ", 2.0);
    let system = if system_raw == 1.0 {
        StructuralSystem::Dual1
    } else {
        StructuralSystem::Dual2
    };

    let raw = MomentSet::new(negative, positive);
    let corrected = correct_moments(&raw, system);
    println!();
    print_rows("Momentos corregidos", &moment_rows(&raw, &corrected));

    // === Section ===
    let b = prompt_f64("Section width b (cm) [30]: ", 30.0);
    let h = prompt_f64("Section height h (cm) [60]: ", 60.0);
    let cover = prompt_f64("Clear cover r (cm) [4]: ", 4.0);
    let fc = prompt_f64("f'c (kg/cm²) [210]: ", 210.0);
    let fy = prompt_f64("fy (kg/cm²) [4200]: ", 4200.0);
    let section = BeamSection::new(b, h, cover, fc, fy);

    // Demo layout: 2 x 5/8" in one layer, top and bottom, every section
    let rows: Vec<RebarRow> = (0..3u8)
        .flat_map(|i| {
            [
                RebarRow::new(2, BarSize::In5_8, 1, SectionLocation::top(i)),
                RebarRow::new(2, BarSize::In5_8, 1, SectionLocation::bottom(i)),
            ]
        })
        .collect();

    let flexure_input = FlexureInput {
        label: "CLI-Demo".to_string(),
        section,
        phi: 0.9,
        stirrup: BarSize::In3_8,
        default_bar: BarSize::In5_8,
        rows,
        moments: corrected,
    };

    let flexure_result = match flexure::calculate(&flexure_input) {
        Ok(result) => result,
        Err(error) => {
            eprintln!("Flexure calculation failed: {}", error);
            std::process::exit(1);
        }
    };
    println!();
    print_rows("Diseño por flexión", &flexure_rows(&flexure_result));

    // === Shear ===
    let vu = prompt_f64("Factored shear Vu (T) [30]: ", 30.0);
    let ln = prompt_f64("Clear span Ln (m) [6]: ", 6.0);

    let shear_input = ShearInput::new("CLI-Demo", vu, ln, flexure_result.effective_depth_cm, b, h, fc)
        .with_long_bar_diam(BarSize::In5_8.diameter_cm())
        .with_system(system);

    let shear_result = match shear::calculate(&shear_input) {
        Ok(result) => result,
        Err(error) => {
            eprintln!("Shear calculation failed: {}", error);
            std::process::exit(1);
        }
    };
    println!();
    print_rows("Diseño por corte", &shear_rows(&shear_result));

    if shear_result.ok && flexure_result.all_adequate() {
        println!("Result: section OK");
    } else {
        println!("Result: section NOT adequate, revise steel or geometry");
    }

    if dump_json {
        let items = vec![
            CalculationItem::Flexure(flexure_input),
            CalculationItem::Shear(shear_input),
        ];
        match serde_json::to_string_pretty(&items) {
            Ok(json) => {
                println!();
                println!("{}", json);
            }
            Err(error) => eprintln!("JSON dump failed: {}", error),
        }
    }
}
