use crate::output::{print_json, print_table};
use anyhow::Result;
use docflow_core::catalog::Catalog;
use docflow_core::graph::Graph;

pub fn run(edges_only: bool, json: bool) -> Result<()> {
    let graph = Graph::derive(Catalog::builtin());

    if json {
        if edges_only {
            return print_json(&graph.edges);
        }
        return print_json(&graph);
    }

    if !edges_only {
        let rows: Vec<Vec<String>> = graph
            .nodes
            .iter()
            .map(|n| {
                vec![
                    n.id.clone(),
                    n.name.clone(),
                    n.phase.clone(),
                    graph.fan_in(&n.id).to_string(),
                    graph.fan_out(&n.id).to_string(),
                ]
            })
            .collect();
        print_table(&["ID", "STAGE", "PHASE", "IN", "OUT"], rows);
        println!();
    }

    // List edges grouped by originating stage, in catalog order.
    let rows: Vec<Vec<String>> = graph
        .nodes
        .iter()
        .flat_map(|n| graph.edges_from(&n.id))
        .map(|e| {
            vec![
                e.from.clone(),
                e.to.clone(),
                e.kind.to_string(),
                e.label.clone().unwrap_or_default(),
            ]
        })
        .collect();
    print_table(&["FROM", "TO", "TYPE", "LABEL"], rows);

    Ok(())
}
