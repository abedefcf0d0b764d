use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::catalog::Catalog;
use crate::error::Result;
use crate::types::{DocFilter, ViewMode};

// ---------------------------------------------------------------------------
// ViewState
// ---------------------------------------------------------------------------

/// The complete interaction state of the viewer: which top-level view is
/// active, the workflow doc filter, which phases are expanded, and the stage
/// whose detail panel is open. All transitions are pure and total apart from
/// stage selection, which validates the id against the catalog.
///
/// This is the canonical model of the state the embedded web page keeps
/// client-side (its JS `state` object holds the same four fields under the
/// same names). A native or scripted front end drives this record directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    pub view: ViewMode,
    pub filter: DocFilter,
    pub expanded: BTreeSet<String>,
    pub selected: Option<String>,
}

impl Default for ViewState {
    fn default() -> Self {
        ViewState {
            view: ViewMode::Workflow,
            filter: DocFilter::All,
            expanded: BTreeSet::new(),
            selected: None,
        }
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch the active view. Filter, expansion, and selection survive the
    /// switch so returning to the workflow view restores what was on screen.
    pub fn set_view(&mut self, view: ViewMode) {
        self.view = view;
    }

    pub fn set_filter(&mut self, filter: DocFilter) {
        self.filter = filter;
    }

    /// Expand a collapsed phase or collapse an expanded one.
    pub fn toggle_phase(&mut self, phase: &str) {
        if !self.expanded.remove(phase) {
            self.expanded.insert(phase.to_string());
        }
    }

    pub fn is_expanded(&self, phase: &str) -> bool {
        self.expanded.contains(phase)
    }

    /// Open the detail panel for a stage. Unknown ids are rejected rather
    /// than leaving the panel pointing at nothing.
    pub fn select_stage(&mut self, catalog: &Catalog, id: &str) -> Result<()> {
        let stage = catalog.stage(id)?;
        self.selected = Some(stage.id.clone());
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
