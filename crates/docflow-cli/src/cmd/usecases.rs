use crate::output::{print_json, print_table};
use anyhow::{anyhow, Result};
use docflow_core::usecase::{self, UseCase};

pub fn run(category: Option<&str>, json: bool) -> Result<()> {
    match category {
        Some(name) => {
            let case = usecase::find(name)
                .ok_or_else(|| anyhow!("no use case named '{name}'"))?;
            if json {
                print_json(case)
            } else {
                print_case(case);
                Ok(())
            }
        }
        None => {
            let cases = usecase::all();
            if json {
                return print_json(&cases);
            }

            let rows: Vec<Vec<String>> = cases
                .iter()
                .map(|c| {
                    vec![
                        c.category.clone(),
                        c.description.clone(),
                        c.required_docs.len().to_string(),
                    ]
                })
                .collect();
            print_table(&["CATEGORY", "DESCRIPTION", "DOCS"], rows);
            Ok(())
        }
    }
}

fn print_case(case: &UseCase) {
    println!("{}", case.category);
    println!("{}", case.description);

    println!("\nActivities:");
    for activity in &case.activities {
        println!("  - {activity}");
    }

    println!("\nRequired documentation:");
    for doc in &case.required_docs {
        println!("  - {} (stage {})", doc.name, doc.stage);
    }

    println!("\n{}", case.consequence);

    if let Some(tool) = &case.tool_link {
        println!("\nTool: {} — {} ({})", tool.name, tool.description, tool.url);
    }
}
