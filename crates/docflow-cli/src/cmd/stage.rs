use crate::output::print_json;
use anyhow::{anyhow, Result};
use docflow_core::catalog::Catalog;

pub fn run(id: &str, json: bool) -> Result<()> {
    let catalog = Catalog::builtin();
    let stage = catalog.stage(id).map_err(|e| anyhow!("{e}"))?;

    if json {
        return print_json(stage);
    }

    let phase = catalog
        .phase_of(id)
        .map(|p| p.name.as_str())
        .unwrap_or("unknown");

    println!("{} — {}", stage.id, stage.name);
    println!("Phase: {phase}");
    println!("Owner: {}", stage.owner);

    if !stage.inputs.is_empty() {
        println!("\nInputs:");
        for input in &stage.inputs {
            match &input.source {
                Some(src) => println!("  {} ({}) [from {}]", input.name, input.location, src),
                None => println!("  {} ({})", input.name, input.location),
            }
        }
    }

    if !stage.outputs.is_empty() {
        println!("\nOutputs:");
        for output in &stage.outputs {
            println!(
                "  {} ({}) [{}]",
                output.name, output.location, output.doc_type
            );
        }
    }

    if !stage.dependencies.is_empty() {
        println!("\nDepends on: {}", stage.dependencies.join(", "));
    }

    if !stage.internal_docs.is_empty() {
        println!("\nInternal docs: {}", stage.internal_docs.join(", "));
    }
    if !stage.external_docs.is_empty() {
        println!("External docs: {}", stage.external_docs.join(", "));
    }

    if let Some(note) = &stage.note {
        println!("\nNote: {note}");
    }

    Ok(())
}
