use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// DocType
// ---------------------------------------------------------------------------

/// Classification of a stage output: engineering-facing documentation,
/// user-facing documentation, or not documentation at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocType {
    Internal,
    External,
    Neither,
}

impl DocType {
    pub fn as_str(self) -> &'static str {
        match self {
            DocType::Internal => "internal",
            DocType::External => "external",
            DocType::Neither => "neither",
        }
    }

    pub fn is_doc(self) -> bool {
        !matches!(self, DocType::Neither)
    }
}

impl fmt::Display for DocType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for DocType {
    type Err = crate::error::DocflowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "internal" => Ok(DocType::Internal),
            "external" => Ok(DocType::External),
            "neither" => Ok(DocType::Neither),
            _ => Err(crate::error::DocflowError::InvalidDocType(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// InputSource
// ---------------------------------------------------------------------------

/// Declared provenance of a stage input. The literal tokens `internal` and
/// `external` mark material that exists outside the workflow; any other token
/// names a stage and denotes a data-flow edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum InputSource {
    Internal,
    External,
    Stage(String),
}

impl InputSource {
    /// The stage id this source refers to, if any.
    pub fn stage_id(&self) -> Option<&str> {
        match self {
            InputSource::Stage(id) => Some(id),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            InputSource::Internal => "internal",
            InputSource::External => "external",
            InputSource::Stage(id) => id,
        }
    }
}

impl From<String> for InputSource {
    fn from(s: String) -> Self {
        match s.as_str() {
            "internal" => InputSource::Internal,
            "external" => InputSource::External,
            _ => InputSource::Stage(s),
        }
    }
}

impl From<InputSource> for String {
    fn from(s: InputSource) -> Self {
        s.as_str().to_string()
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// EdgeKind
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeKind {
    Dependency,
    Dataflow,
}

impl EdgeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EdgeKind::Dependency => "dependency",
            EdgeKind::Dataflow => "dataflow",
        }
    }
}

impl fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ViewMode
// ---------------------------------------------------------------------------

/// The four mutually exclusive top-level views of the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    Workflow,
    Usecases,
    Structure,
    Dependencies,
}

impl ViewMode {
    pub fn all() -> &'static [ViewMode] {
        &[
            ViewMode::Workflow,
            ViewMode::Usecases,
            ViewMode::Structure,
            ViewMode::Dependencies,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ViewMode::Workflow => "workflow",
            ViewMode::Usecases => "usecases",
            ViewMode::Structure => "structure",
            ViewMode::Dependencies => "dependencies",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ViewMode {
    type Err = crate::error::DocflowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "workflow" => Ok(ViewMode::Workflow),
            "usecases" => Ok(ViewMode::Usecases),
            "structure" => Ok(ViewMode::Structure),
            "dependencies" => Ok(ViewMode::Dependencies),
            _ => Err(crate::error::DocflowError::InvalidView(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// DocFilter
// ---------------------------------------------------------------------------

/// Workflow-view filter: all stages, or only stages producing internal or
/// external documentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocFilter {
    All,
    Internal,
    External,
}

impl DocFilter {
    pub fn as_str(self) -> &'static str {
        match self {
            DocFilter::All => "all",
            DocFilter::Internal => "internal",
            DocFilter::External => "external",
        }
    }
}

impl fmt::Display for DocFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for DocFilter {
    type Err = crate::error::DocflowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(DocFilter::All),
            "internal" => Ok(DocFilter::Internal),
            "external" => Ok(DocFilter::External),
            _ => Err(crate::error::DocflowError::InvalidDocFilter(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn doc_type_roundtrip() {
        for dt in [DocType::Internal, DocType::External, DocType::Neither] {
            assert_eq!(DocType::from_str(dt.as_str()).unwrap(), dt);
        }
        assert!(DocType::from_str("bogus").is_err());
    }

    #[test]
    fn doc_type_is_doc() {
        assert!(DocType::Internal.is_doc());
        assert!(DocType::External.is_doc());
        assert!(!DocType::Neither.is_doc());
    }

    #[test]
    fn input_source_from_tokens() {
        assert_eq!(InputSource::from("internal".to_string()), InputSource::Internal);
        assert_eq!(InputSource::from("external".to_string()), InputSource::External);
        assert_eq!(
            InputSource::from("2a".to_string()),
            InputSource::Stage("2a".to_string())
        );
    }

    #[test]
    fn input_source_stage_id() {
        assert_eq!(InputSource::Stage("1a".into()).stage_id(), Some("1a"));
        assert_eq!(InputSource::Internal.stage_id(), None);
        assert_eq!(InputSource::External.stage_id(), None);
    }

    #[test]
    fn input_source_serde_is_plain_string() {
        let s = InputSource::Stage("3b".into());
        assert_eq!(serde_json::to_string(&s).unwrap(), "\"3b\"");
        let parsed: InputSource = serde_json::from_str("\"internal\"").unwrap();
        assert_eq!(parsed, InputSource::Internal);
    }

    #[test]
    fn view_mode_roundtrip() {
        for v in ViewMode::all() {
            assert_eq!(ViewMode::from_str(v.as_str()).unwrap(), *v);
        }
        assert!(ViewMode::from_str("modal").is_err());
    }

    #[test]
    fn doc_filter_roundtrip() {
        for f in [DocFilter::All, DocFilter::Internal, DocFilter::External] {
            assert_eq!(DocFilter::from_str(f.as_str()).unwrap(), f);
        }
        assert!(DocFilter::from_str("none").is_err());
    }

    #[test]
    fn edge_kind_serde() {
        assert_eq!(
            serde_json::to_string(&EdgeKind::Dataflow).unwrap(),
            "\"dataflow\""
        );
    }
}
