//! # Tank Inspection CLI
//!
//! Terminal front-end for shell thickness calculations. Prompts for the
//! tank and bottom-course data, runs the engine, and prints both a
//! formatted results block and the raw JSON payload.

use std::io::{self, BufRead, Write};

use tank_core::calculations::shell::{
    calculate, FluidColumn, ShellCourse, ShellInput, TankGeometry,
};
use tank_core::config::CalcConfig;

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

fn main() {
    println!("Tank Inspection CLI - Shell Thickness Calculator");
    println!("================================================");
    println!();

    let diameter_ft = prompt_f64("Tank diameter (ft) [120.0]: ", 120.0);
    let fill_height_ft = prompt_f64("Max fill height (ft) [40.0]: ", 40.0);
    let specific_gravity = prompt_f64("Specific gravity [1.0]: ", 1.0);
    let original_in = prompt_f64("Course 1 original thickness (in) [0.500]: ", 0.500);
    let actual_in = prompt_f64("Course 1 actual thickness (in) [0.485]: ", 0.485);
    let age_years = prompt_f64("Years since original thickness [10.0]: ", 10.0);

    println!();
    println!("Calculating bottom course (E=0.85, S=26,700 psi)...");
    println!();

    let input = ShellInput {
        label: "CLI-Demo".to_string(),
        geometry: TankGeometry {
            diameter_ft,
            shell_height_ft: None,
        },
        fluid: FluidColumn {
            fill_height_ft,
            specific_gravity,
        },
        courses: vec![ShellCourse {
            course_number: 1,
            course_height_ft: 8.0,
            joint_efficiency: 0.85,
            allowable_stress_psi: 26700.0,
            original_thickness_in: original_in,
            actual_thickness_in: actual_in,
            age_years,
        }],
    };

    let config = CalcConfig::default();

    match calculate(&input, &config) {
        Ok(result) => {
            let course = &result.courses[0];

            println!("═══════════════════════════════════════");
            println!("  SHELL COURSE 1 RESULTS");
            println!("═══════════════════════════════════════");
            println!();
            println!("Input:");
            println!("  Diameter:     {:.1} ft", diameter_ft);
            println!("  Fill height:  {:.1} ft (SG {:.2})", fill_height_ft, specific_gravity);
            println!("  Thickness:    {:.3}\" -> {:.3}\" over {:.1} yr", original_in, actual_in, age_years);
            println!();
            println!("Derived:");
            println!("  Liquid head:  {:.1} ft", course.liquid_head_ft);
            println!("  Pressure:     {:.2} psi", course.hydrostatic_pressure_psi);
            println!("  t-required:   {:.3}\"", course.required_thickness_in);
            println!("  t-minimum:    {:.3}\"", course.minimum_thickness_in);
            println!();
            println!("Condition:");
            println!("  Corrosion rate: {:.2} mpy", course.corrosion_rate_mpy);
            match course.remaining_life_years {
                Some(years) => println!("  Remaining life: {:.1} yr", years),
                None => println!("  Remaining life: n/a (no measurable corrosion)"),
            }
            println!();
            println!("═══════════════════════════════════════");
            println!("  RESULT: {}",
                if course.meets_minimum(actual_in) { "MEETS MINIMUM" } else { "BELOW MINIMUM" }
            );
            println!("═══════════════════════════════════════");

            println!();
            println!("JSON Output (for API use):");
            if let Ok(json) = serde_json::to_string_pretty(&result) {
                println!("{}", json);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
        }
    }
}
