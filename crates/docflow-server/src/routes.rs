use axum::extract::{Path, Query};
use axum::Json;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::AppError;
use docflow_core::catalog::{Catalog, Stage};
use docflow_core::graph::{Graph, Risk, Summary};
use docflow_core::structure::{self, BestPractice, DocCategory, DocTemplate, MaintenanceWindow};
use docflow_core::types::DocFilter;
use docflow_core::usecase::{self, UseCase};

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
pub struct CatalogQuery {
    filter: Option<String>,
}

pub async fn get_catalog(Query(q): Query<CatalogQuery>) -> Result<Json<Catalog>, AppError> {
    let filter = match q.filter.as_deref() {
        Some(s) => DocFilter::from_str(s)?,
        None => DocFilter::All,
    };
    Ok(Json(Catalog::builtin().filtered(filter)))
}

#[derive(Serialize)]
pub struct StageDetail<'a> {
    #[serde(flatten)]
    pub stage: &'a Stage,
    pub phase: &'a str,
}

pub async fn get_stage(Path(id): Path<String>) -> Result<Json<StageDetail<'static>>, AppError> {
    let catalog = Catalog::builtin();
    let stage = catalog.stage(&id)?;
    let phase = catalog
        .phase_of(&id)
        .map(|p| p.name.as_str())
        .unwrap_or_default();
    Ok(Json(StageDetail { stage, phase }))
}

// ---------------------------------------------------------------------------
// Graph and analysis
// ---------------------------------------------------------------------------

pub async fn get_graph() -> Json<Graph> {
    Json(Graph::derive(Catalog::builtin()))
}

#[derive(Serialize)]
pub struct Analysis {
    pub summary: Summary,
    pub high_risk: Vec<OwnedRisk>,
    pub doc_bottlenecks: Vec<OwnedRisk>,
}

/// Risk rows detached from the graph they were computed against, so the
/// response type owns its data.
#[derive(Serialize)]
pub struct OwnedRisk {
    pub id: String,
    pub name: String,
    pub phase: String,
    pub fan_out: usize,
}

impl From<Risk<'_>> for OwnedRisk {
    fn from(r: Risk<'_>) -> Self {
        OwnedRisk {
            id: r.node.id.clone(),
            name: r.node.name.clone(),
            phase: r.node.phase.clone(),
            fan_out: r.fan_out,
        }
    }
}

pub async fn get_analysis() -> Json<Analysis> {
    let graph = Graph::derive(Catalog::builtin());
    Json(Analysis {
        summary: graph.summary(),
        high_risk: graph.high_risk().into_iter().map(Into::into).collect(),
        doc_bottlenecks: graph.doc_bottlenecks().into_iter().map(Into::into).collect(),
    })
}

// ---------------------------------------------------------------------------
// Use cases and structure guide
// ---------------------------------------------------------------------------

pub async fn get_usecases() -> Json<&'static [UseCase]> {
    Json(usecase::all())
}

#[derive(Serialize)]
pub struct StructureGuide {
    pub categories: &'static [DocCategory],
    pub best_practices: &'static [BestPractice],
    pub maintenance_schedule: &'static [MaintenanceWindow],
    pub templates: &'static [DocTemplate],
}

pub async fn get_structure() -> Json<StructureGuide> {
    Json(StructureGuide {
        categories: structure::categories(),
        best_practices: structure::best_practices(),
        maintenance_schedule: structure::maintenance_schedule(),
        templates: structure::templates(),
    })
}
