use crate::catalog::Catalog;
use crate::types::EdgeKind;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

// ---------------------------------------------------------------------------
// Node / Edge
// ---------------------------------------------------------------------------

/// A stage projected into the dependency graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    pub name: String,
    pub phase: String,
    pub owner: String,
    pub creates_internal_docs: bool,
    pub creates_external_docs: bool,
    pub input_count: usize,
    pub output_count: usize,
}

/// A directed edge between two stages. Dataflow edges carry the name of the
/// input that induced them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub from: String,
    pub to: String,
    #[serde(rename = "type")]
    pub kind: EdgeKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

// ---------------------------------------------------------------------------
// Graph
// ---------------------------------------------------------------------------

/// Fan-out at or above this marks a stage high-risk: failure there blocks
/// several downstream stages.
pub const HIGH_RISK_FAN_OUT: usize = 3;

/// Fan-out at or above this, combined with produced documentation, marks a
/// stage a documentation bottleneck.
pub const BOTTLENECK_FAN_OUT: usize = 2;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Graph {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl Graph {
    /// Derive the graph from a catalog: one node per stage in catalog order,
    /// then per stage one dependency edge per resolvable declared dependency
    /// followed by one dataflow edge per input whose source names a known
    /// stage. References to ids absent from the catalog are dropped without
    /// comment; the builder never fails.
    pub fn derive(catalog: &Catalog) -> Graph {
        let known: HashSet<&str> = catalog.stages().map(|s| s.id.as_str()).collect();

        let mut nodes = Vec::with_capacity(catalog.stage_count());
        for phase in &catalog.phases {
            for stage in &phase.stages {
                nodes.push(Node {
                    id: stage.id.clone(),
                    name: stage.name.clone(),
                    phase: phase.name.clone(),
                    owner: stage.owner.clone(),
                    creates_internal_docs: stage.creates_internal_docs(),
                    creates_external_docs: stage.creates_external_docs(),
                    input_count: stage.inputs.len(),
                    output_count: stage.outputs.len(),
                });
            }
        }

        let mut edges = Vec::new();
        for stage in catalog.stages() {
            for dep in &stage.dependencies {
                if known.contains(dep.as_str()) {
                    edges.push(Edge {
                        from: dep.clone(),
                        to: stage.id.clone(),
                        kind: EdgeKind::Dependency,
                        label: None,
                    });
                }
            }
            for inp in &stage.inputs {
                if let Some(src) = inp.source.as_ref().and_then(|s| s.stage_id()) {
                    if known.contains(src) {
                        edges.push(Edge {
                            from: src.to_string(),
                            to: stage.id.clone(),
                            kind: EdgeKind::Dataflow,
                            label: Some(inp.name.clone()),
                        });
                    }
                }
            }
        }

        Graph { nodes, edges }
    }

    /// Number of outgoing edges from the given node.
    pub fn fan_out(&self, id: &str) -> usize {
        self.edges_from(id).count()
    }

    pub fn fan_in(&self, id: &str) -> usize {
        self.edges.iter().filter(|e| e.to == id).count()
    }

    /// Outgoing edges of the given node, in derivation order.
    pub fn edges_from<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a Edge> + 'a {
        self.edges.iter().filter(move |e| e.from == id)
    }

    /// Nodes many others depend on (fan-out >= 3).
    pub fn high_risk(&self) -> Vec<Risk<'_>> {
        self.nodes
            .iter()
            .filter_map(|n| {
                let fan_out = self.fan_out(&n.id);
                (fan_out >= HIGH_RISK_FAN_OUT).then_some(Risk { node: n, fan_out })
            })
            .collect()
    }

    /// Doc-producing nodes with fan-out >= 2: documentation the rest of the
    /// workflow queues up behind.
    pub fn doc_bottlenecks(&self) -> Vec<Risk<'_>> {
        self.nodes
            .iter()
            .filter_map(|n| {
                let fan_out = self.fan_out(&n.id);
                let produces_docs = n.creates_internal_docs || n.creates_external_docs;
                (produces_docs && fan_out >= BOTTLENECK_FAN_OUT).then_some(Risk { node: n, fan_out })
            })
            .collect()
    }

    pub fn summary(&self) -> Summary {
        Summary {
            stages: self.nodes.len(),
            edges: self.edges.len(),
            internal_doc_creators: self.nodes.iter().filter(|n| n.creates_internal_docs).count(),
            external_doc_creators: self.nodes.iter().filter(|n| n.creates_external_docs).count(),
        }
    }
}

/// A node flagged by one of the fan-out analyses, with the fan-out that
/// triggered the flag.
#[derive(Debug, Clone, Serialize)]
pub struct Risk<'a> {
    pub node: &'a Node,
    pub fan_out: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub stages: usize,
    pub edges: usize,
    pub internal_doc_creators: usize,
    pub external_doc_creators: usize,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, Input, Output, Phase, Stage};
    use crate::types::{DocType, InputSource};

    fn stage(id: &str, deps: &[&str], inputs: Vec<Input>) -> Stage {
        Stage {
            id: id.to_string(),
            name: format!("Stage {id}"),
            owner: "Owner".to_string(),
            inputs,
            outputs: vec![],
            dependencies: deps.iter().map(|s| s.to_string()).collect(),
            internal_docs: vec![],
            external_docs: vec![],
            note: None,
        }
    }

    fn sourced_input(name: &str, source: &str) -> Input {
        Input {
            name: name.to_string(),
            location: format!("From {source}"),
            source: Some(InputSource::from(source.to_string())),
        }
    }

    fn catalog_of(stages: Vec<Stage>) -> Catalog {
        Catalog {
            phases: vec![Phase {
                name: "1. Test".to_string(),
                accent: "blue".to_string(),
                icon: "users".to_string(),
                stages,
            }],
        }
    }

    #[test]
    fn two_stage_scenario() {
        // A catalog of 1a and 1b, where 1b depends on 1a and also consumes
        // an input sourced from 1a, yields exactly two nodes and two edges.
        let catalog = catalog_of(vec![
            stage("1a", &[], vec![]),
            stage(
                "1b",
                &["1a"],
                vec![sourced_input("Feature request log", "1a")],
            ),
        ]);
        let graph = Graph::derive(&catalog);

        assert_eq!(graph.nodes.len(), 2);
        assert_eq!(graph.edges.len(), 2);
        assert_eq!(
            graph.edges[0],
            Edge {
                from: "1a".into(),
                to: "1b".into(),
                kind: EdgeKind::Dependency,
                label: None,
            }
        );
        assert_eq!(
            graph.edges[1],
            Edge {
                from: "1a".into(),
                to: "1b".into(),
                kind: EdgeKind::Dataflow,
                label: Some("Feature request log".into()),
            }
        );
    }

    #[test]
    fn dangling_references_are_dropped() {
        let catalog = catalog_of(vec![
            stage("1a", &[], vec![]),
            stage("1b", &["9z"], vec![sourced_input("Ghost input", "8y")]),
        ]);
        let graph = Graph::derive(&catalog);

        assert_eq!(graph.nodes.len(), 2, "no phantom node for missing ids");
        assert!(graph.edges.is_empty());
    }

    #[test]
    fn internal_external_tokens_make_no_edges() {
        let catalog = catalog_of(vec![stage(
            "1a",
            &[],
            vec![
                sourced_input("Wiki pages", "internal"),
                sourced_input("Vendor docs", "external"),
            ],
        )]);
        let graph = Graph::derive(&catalog);
        assert!(graph.edges.is_empty());
    }

    #[test]
    fn dependency_edges_precede_dataflow_within_a_stage() {
        let catalog = catalog_of(vec![
            stage("1a", &[], vec![]),
            stage("1b", &[], vec![]),
            stage(
                "1c",
                &["1b"],
                vec![sourced_input("Notes", "1a"), sourced_input("Log", "1b")],
            ),
        ]);
        let graph = Graph::derive(&catalog);
        let kinds: Vec<EdgeKind> = graph.edges.iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            vec![EdgeKind::Dependency, EdgeKind::Dataflow, EdgeKind::Dataflow]
        );
        assert_eq!(graph.edges[1].from, "1a");
        assert_eq!(graph.edges[2].from, "1b");
    }

    #[test]
    fn edges_from_yields_only_outgoing_edges() {
        let catalog = catalog_of(vec![
            stage("1a", &[], vec![]),
            stage("1b", &["1a"], vec![sourced_input("Notes", "1a")]),
            stage("1c", &["1b"], vec![]),
        ]);
        let graph = Graph::derive(&catalog);

        let from_1a: Vec<(&str, EdgeKind)> = graph
            .edges_from("1a")
            .map(|e| (e.to.as_str(), e.kind))
            .collect();
        assert_eq!(
            from_1a,
            vec![("1b", EdgeKind::Dependency), ("1b", EdgeKind::Dataflow)]
        );
        assert_eq!(graph.edges_from("1c").count(), 0);
    }

    #[test]
    fn fan_out_classification_boundaries() {
        let mut doc_stage = stage("1a", &[], vec![]);
        doc_stage.outputs = vec![Output {
            name: "Runbook".into(),
            location: "Wiki".into(),
            doc_type: DocType::Internal,
        }];
        doc_stage.internal_docs = vec!["Runbook".into()];

        // 1a → 3 consumers (high-risk and, since it produces docs, bottleneck)
        // 1b → 1 consumer (neither)
        let catalog = catalog_of(vec![
            doc_stage,
            stage("1b", &["1a"], vec![]),
            stage("1c", &["1a"], vec![]),
            stage("1d", &["1a", "1b"], vec![]),
        ]);
        let graph = Graph::derive(&catalog);

        assert_eq!(graph.fan_out("1a"), 3);
        assert_eq!(graph.fan_out("1b"), 1);

        let high_risk: Vec<&str> = graph.high_risk().iter().map(|r| r.node.id.as_str()).collect();
        assert_eq!(high_risk, vec!["1a"]);

        let bottlenecks: Vec<&str> = graph
            .doc_bottlenecks()
            .iter()
            .map(|r| r.node.id.as_str())
            .collect();
        assert_eq!(bottlenecks, vec!["1a"]);
    }

    #[test]
    fn bottleneck_requires_docs_at_fan_out_two() {
        let mut doc_stage = stage("1a", &[], vec![]);
        doc_stage.external_docs = vec!["User guide".into()];
        doc_stage.outputs = vec![Output {
            name: "User guide".into(),
            location: "Help site".into(),
            doc_type: DocType::External,
        }];
        let catalog = catalog_of(vec![
            doc_stage,
            stage("1b", &[], vec![]), // no docs
            stage("1c", &["1a", "1b"], vec![]),
            stage("1d", &["1a", "1b"], vec![]),
        ]);
        let graph = Graph::derive(&catalog);

        assert_eq!(graph.fan_out("1a"), 2);
        assert_eq!(graph.fan_out("1b"), 2);
        // Neither reaches high-risk at exactly two.
        assert!(graph.high_risk().is_empty());
        // Only the doc producer is a bottleneck.
        let bottlenecks: Vec<&str> = graph
            .doc_bottlenecks()
            .iter()
            .map(|r| r.node.id.as_str())
            .collect();
        assert_eq!(bottlenecks, vec!["1a"]);
    }

    #[test]
    fn builtin_graph_is_deterministic_and_resolves_fully() {
        let catalog = Catalog::builtin();
        let a = Graph::derive(catalog);
        let b = Graph::derive(catalog);
        assert_eq!(a, b);

        // The builtin table has no dangling references, so every declared
        // dependency contributes exactly one dependency edge.
        let declared: usize = catalog.stages().map(|s| s.dependencies.len()).sum();
        let dependency_edges = a
            .edges
            .iter()
            .filter(|e| e.kind == EdgeKind::Dependency)
            .count();
        assert_eq!(declared, dependency_edges);

        let sourced: usize = catalog
            .stages()
            .flat_map(|s| s.inputs.iter())
            .filter(|i| i.source.as_ref().and_then(|s| s.stage_id()).is_some())
            .count();
        let dataflow_edges = a
            .edges
            .iter()
            .filter(|e| e.kind == EdgeKind::Dataflow)
            .count();
        assert_eq!(sourced, dataflow_edges);
    }

    #[test]
    fn builtin_summary_counts() {
        let graph = Graph::derive(Catalog::builtin());
        let summary = graph.summary();
        assert_eq!(summary.stages, 23);
        assert_eq!(summary.edges, graph.edges.len());
        // 2a, 3b, 4b, 5a, 5c, 6a, 6b, 6c, 7a, 7b create internal docs.
        assert_eq!(summary.internal_doc_creators, 10);
        // 5b and 6c create external docs.
        assert_eq!(summary.external_doc_creators, 2);
    }

    #[test]
    fn builtin_design_review_is_high_risk() {
        // 2a feeds most of the build: its technical design doc flows into
        // 2b, 2c, 3a, 3b, 3c, and 5a.
        let graph = Graph::derive(Catalog::builtin());
        assert!(graph.fan_out("2a") >= HIGH_RISK_FAN_OUT);
        assert!(graph.high_risk().iter().any(|r| r.node.id == "2a"));
        assert!(graph.doc_bottlenecks().iter().any(|r| r.node.id == "2a"));
    }

    #[test]
    fn every_dataflow_edge_carries_its_input_name() {
        let graph = Graph::derive(Catalog::builtin());
        for edge in &graph.edges {
            match edge.kind {
                EdgeKind::Dataflow => assert!(edge.label.is_some()),
                EdgeKind::Dependency => assert!(edge.label.is_none()),
            }
        }
    }
}
