use crate::output::{print_json, print_table};
use anyhow::Result;
use docflow_core::structure;

pub fn run(templates: bool, practices: bool, schedule: bool, json: bool) -> Result<()> {
    if templates {
        return run_templates(json);
    }
    if practices {
        return run_practices(json);
    }
    if schedule {
        return run_schedule(json);
    }
    run_categories(json)
}

fn run_categories(json: bool) -> Result<()> {
    let categories = structure::categories();
    if json {
        return print_json(&categories);
    }

    for cat in categories {
        println!("\n{}", cat.category);
        println!("Location: {}", cat.location);
        for sec in &cat.sections {
            println!("  {}", sec.title);
            for item in &sec.content {
                println!("    - {item}");
            }
        }
    }
    Ok(())
}

fn run_templates(json: bool) -> Result<()> {
    let templates = structure::templates();
    if json {
        return print_json(&templates);
    }

    for (i, t) in templates.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("=== {} ===", t.name);
        println!("{}", t.body);
    }
    Ok(())
}

fn run_practices(json: bool) -> Result<()> {
    let practices = structure::best_practices();
    if json {
        return print_json(&practices);
    }

    for p in practices {
        println!("\n{}", p.practice);
        println!("  {}", p.description);
        println!("  Why: {}", p.why);
    }
    Ok(())
}

fn run_schedule(json: bool) -> Result<()> {
    let schedule = structure::maintenance_schedule();
    if json {
        return print_json(&schedule);
    }

    let rows: Vec<Vec<String>> = schedule
        .iter()
        .map(|w| vec![w.cadence.to_string(), w.task.clone()])
        .collect();
    print_table(&["CADENCE", "TASK"], rows);
    Ok(())
}
