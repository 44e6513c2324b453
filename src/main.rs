// ./src/main.rs
//! Headless-Demo-Treiber: baut das Feld aus der Default-Konfiguration auf,
//! setzt die Anfangsbedingung des ursprünglichen Demos (3x3-Block in der
//! Mitte) und schreibt periodisch SVG-Schnappschüsse.

use std::path::PathBuf;

use tracing::{info, warn};

use wave_sim::debug::visualization::svg::write_field_svg;
use wave_sim::physics::wave::{Field, FieldConfig, ScalarGrid};

/// Frame-Zeit des Treibers; wird von `advance` in Teilschritte zerlegt.
const DT: f64 = 0.05;
const MAX_SUBSTEP: f64 = 0.02;
const STEPS: usize = 400;
const SNAPSHOT_EVERY: usize = 50;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("wave_sim=info".parse()?),
        )
        .init();

    let config = FieldConfig::default();
    config.validate()?;

    let mut field = Field::from_config(&config)?;
    info!(
        "field initialized: {}x{} nodes over {}",
        field.nx(),
        field.ny(),
        field.bounds()
    );

    let (cx, cy) = (field.nx() / 2, field.ny() / 2);
    let initial = ScalarGrid::from_fn(field.nx(), field.ny(), |i, j| {
        if i.abs_diff(cx) <= 1 && j.abs_diff(cy) <= 1 {
            1.0
        } else {
            0.0
        }
    });
    field.set_field(initial)?;

    if !field.is_stable(MAX_SUBSTEP) {
        warn!(
            "substep {MAX_SUBSTEP} violates the stability bound (courant {:.3}), expect blow-up",
            field.courant_number(MAX_SUBSTEP)
        );
    }

    let out_dir = PathBuf::from("target/field-snapshots");
    std::fs::create_dir_all(&out_dir)?;

    for step in 1..=STEPS {
        field.advance(DT, MAX_SUBSTEP);
        if step % SNAPSHOT_EVERY == 0 {
            info!("step {step}: max amplitude {:.4}", field.max_amplitude());
            write_field_svg(&field, 1.0, &out_dir.join(format!("field_{step:04}.svg")))?;
        }
    }

    info!("done, snapshots in {}", out_dir.display());
    Ok(())
}
