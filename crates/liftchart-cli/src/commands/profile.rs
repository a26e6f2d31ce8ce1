use liftchart_core::error::LiftchartError;
use liftchart_core::profile::builtin;
use std::path::Path;

pub fn list() -> Result<(), LiftchartError> {
    println!("Available extraction profiles:\n");
    for name in builtin::PRESETS {
        let p = builtin::load_preset(name)?;
        println!("  {:<10} {} (v{})", name, p.name, p.version);
        if let Some(ref desc) = p.description {
            println!("             {}", desc);
        }
        println!();
    }
    Ok(())
}

pub fn show(preset: &str) -> Result<(), LiftchartError> {
    let p = builtin::load_preset(preset)?;
    println!("{}", serde_json::to_string_pretty(&p)?);
    Ok(())
}

pub fn validate(file: &Path) -> Result<(), LiftchartError> {
    let p = liftchart_core::profile::load_profile(file)?;

    println!("Profile '{}' (v{}) is valid.", p.name, p.version);
    println!("  Configuration hints: {}", p.config_hints.join(", "));
    println!(
        "  Stop codes: {}",
        p.stop_codes.iter().cloned().collect::<Vec<_>>().join(", ")
    );
    println!(
        "  Boom {}..{} m, radius {}..{} m, capacity {}..{} t",
        p.limits.boom_length_m.min,
        p.limits.boom_length_m.max,
        p.limits.radius_m.min,
        p.limits.radius_m.max,
        p.limits.capacity_t.min,
        p.limits.capacity_t.max
    );

    // Warnings, not errors
    let mut warnings = Vec::new();
    for code in &p.stop_codes {
        if code.chars().any(|c| !c.is_ascii_uppercase() && c != '-') {
            warnings.push(format!(
                "stop code '{}' can never match a configuration code",
                code
            ));
        }
    }

    if !warnings.is_empty() {
        println!("\nWarnings:");
        for w in &warnings {
            println!("  - {}", w);
        }
    }

    Ok(())
}
