//! Build the reference envelope in a fresh in-memory document and print what was created.
//!
//! Usage:
//!   cargo run --bin create_model                  (reference settings)
//!   cargo run --bin create_model -- <config.toml> (settings from file)
//!
//! Set RUST_LOG=bim_envelope=debug to follow each step.

use anyhow::{bail, Context};
use bim_envelope::units::{self, Unit};
use bim_envelope::{
    BimDocument, Category, CommandOutcome, CreateModelCommand, CreationConfig, FamilySymbol,
    Length, Level,
};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args: Vec<String> = std::env::args().collect();
    let config = match args.get(1) {
        Some(path) => CreationConfig::from_file(path)
            .with_context(|| format!("reading settings from {path}"))?,
        None => CreationConfig::default(),
    };

    let mut doc = seed_document(&config)?;
    let result = CreateModelCommand::new(config).execute(&mut doc);

    match result.outcome {
        CommandOutcome::Succeeded => {
            for wall in doc.walls() {
                let base = doc
                    .level(wall.base_level())
                    .map(|level| level.name.as_str())
                    .unwrap_or("?");
                println!(
                    "wall   {:>5}  {} -> {}  ({:.0} mm, on {base})",
                    wall.common.id,
                    wall.location.start,
                    wall.location.end,
                    units::from_internal(Length::from_internal(wall.location.length()), Unit::Millimeters)?
                );
            }
            for fi in doc.family_instances() {
                println!(
                    "{:<6} {:>5}  host {:>5}  at {}  sill {:.0} mm",
                    fi.category.to_string(),
                    fi.common.id,
                    fi.host_id,
                    fi.location,
                    units::from_internal(fi.sill_height(), Unit::Millimeters)?
                );
            }
            if let Some(report) = &result.report {
                for note in &report.notifications {
                    println!("{note}");
                }
            }
            Ok(())
        }
        CommandOutcome::Cancelled => {
            println!("cancelled");
            Ok(())
        }
        CommandOutcome::Failed => match result.error {
            Some(err) => Err(err).context(format!("create model failed in state {}", result.state)),
            None => bail!("create model failed in state {}", result.state),
        },
    }
}

/// A document holding the levels and types the settings refer to
fn seed_document(config: &CreationConfig) -> anyhow::Result<BimDocument> {
    let mut doc = BimDocument::with_title("Envelope");
    doc.add_level(Level::new(config.base_level.clone(), Length::ZERO))?;
    doc.add_level(Level::new(
        config.top_level.clone(),
        units::to_internal(4000.0, Unit::Millimeters)?,
    ))?;
    doc.add_symbol(FamilySymbol::new(
        Category::Door,
        config.door.family.clone(),
        config.door.type_name.clone(),
    ))?;
    doc.add_symbol(FamilySymbol::new(
        Category::Window,
        config.window.family.clone(),
        config.window.type_name.clone(),
    ))?;
    Ok(doc)
}
