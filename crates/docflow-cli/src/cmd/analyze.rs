use crate::output::{print_json, print_table};
use anyhow::Result;
use docflow_core::catalog::Catalog;
use docflow_core::graph::{Graph, Risk};

pub fn run(json: bool) -> Result<()> {
    let graph = Graph::derive(Catalog::builtin());
    let summary = graph.summary();
    let high_risk = graph.high_risk();
    let bottlenecks = graph.doc_bottlenecks();

    if json {
        #[derive(serde::Serialize)]
        struct Analysis<'a> {
            summary: docflow_core::graph::Summary,
            high_risk: &'a [Risk<'a>],
            doc_bottlenecks: &'a [Risk<'a>],
        }
        return print_json(&Analysis {
            summary,
            high_risk: &high_risk,
            doc_bottlenecks: &bottlenecks,
        });
    }

    println!(
        "Stages: {}  Edges: {}  Internal doc creators: {}  External doc creators: {}",
        summary.stages, summary.edges, summary.internal_doc_creators, summary.external_doc_creators
    );

    println!("\nHigh-risk stages (fan-out >= 3):");
    print_risks(&high_risk);

    println!("\nDocumentation bottlenecks (doc producers with fan-out >= 2):");
    print_risks(&bottlenecks);

    Ok(())
}

fn print_risks(risks: &[Risk<'_>]) {
    if risks.is_empty() {
        println!("  (none)");
        return;
    }
    let rows: Vec<Vec<String>> = risks
        .iter()
        .map(|r| {
            vec![
                r.node.id.clone(),
                r.node.name.clone(),
                r.node.phase.clone(),
                r.fan_out.to_string(),
            ]
        })
        .collect();
    print_table(&["ID", "STAGE", "PHASE", "FAN-OUT"], rows);
}
