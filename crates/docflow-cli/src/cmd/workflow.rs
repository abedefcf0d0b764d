use crate::output::{print_json, print_table};
use anyhow::Result;
use docflow_core::catalog::Catalog;
use docflow_core::types::DocFilter;

pub fn run(filter: DocFilter, json: bool) -> Result<()> {
    let catalog = Catalog::builtin().filtered(filter);

    if json {
        return print_json(&catalog);
    }

    if catalog.phases.is_empty() {
        println!("No stages produce {filter} documentation.");
        return Ok(());
    }

    for phase in &catalog.phases {
        println!(
            "\nPhase: {} ({} stage{})",
            phase.name,
            phase.stages.len(),
            if phase.stages.len() == 1 { "" } else { "s" }
        );

        let rows: Vec<Vec<String>> = phase
            .stages
            .iter()
            .map(|s| {
                vec![
                    s.id.clone(),
                    s.name.clone(),
                    s.owner.clone(),
                    doc_marker(s.creates_internal_docs(), s.creates_external_docs()),
                ]
            })
            .collect();
        print_table(&["ID", "STAGE", "OWNER", "DOCS"], rows);
    }

    Ok(())
}

fn doc_marker(internal: bool, external: bool) -> String {
    match (internal, external) {
        (true, true) => "internal+external".to_string(),
        (true, false) => "internal".to_string(),
        (false, true) => "external".to_string(),
        (false, false) => String::new(),
    }
}
