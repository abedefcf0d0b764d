use crate::error::{DocflowError, Result};
use crate::types::{DocFilter, DocType, InputSource};
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

// ---------------------------------------------------------------------------
// Input / Output
// ---------------------------------------------------------------------------

/// Material a stage consumes: what it is, where it lives, and optionally
/// where it comes from. A stage-id source is what turns into a dataflow edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Input {
    pub name: String,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<InputSource>,
}

/// Material a stage produces, tagged with its documentation classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Output {
    pub name: String,
    pub location: String,
    pub doc_type: DocType,
}

// ---------------------------------------------------------------------------
// Stage
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stage {
    /// Phase-number + letter token, unique across the catalog (e.g. "2a").
    pub id: String,
    pub name: String,
    pub owner: String,
    pub inputs: Vec<Input>,
    pub outputs: Vec<Output>,
    /// Ids of prerequisite stages. Narrative back-links ("loops back") live
    /// in `note`, never here.
    pub dependencies: Vec<String>,
    /// Names of internal docs among `outputs` (subset annotation).
    pub internal_docs: Vec<String>,
    /// Names of external docs among `outputs` (subset annotation).
    pub external_docs: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Stage {
    pub fn creates_internal_docs(&self) -> bool {
        !self.internal_docs.is_empty()
    }

    pub fn creates_external_docs(&self) -> bool {
        !self.external_docs.is_empty()
    }

    pub fn creates_docs(&self) -> bool {
        self.creates_internal_docs() || self.creates_external_docs()
    }

    /// True if this stage survives the given workflow filter.
    pub fn matches(&self, filter: DocFilter) -> bool {
        match filter {
            DocFilter::All => true,
            DocFilter::Internal => self.creates_internal_docs(),
            DocFilter::External => self.creates_external_docs(),
        }
    }
}

// ---------------------------------------------------------------------------
// Phase
// ---------------------------------------------------------------------------

/// An ordered grouping of stages sharing a lifecycle theme. Purely
/// organizational: nothing references a phase by identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Phase {
    pub name: String,
    /// Display accent token consumed by the viewer (e.g. "blue").
    pub accent: String,
    /// Icon token consumed by the viewer (e.g. "users").
    pub icon: String,
    pub stages: Vec<Stage>,
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub phases: Vec<Phase>,
}

impl Catalog {
    /// The embedded lifecycle model. Built once, never mutated.
    pub fn builtin() -> &'static Catalog {
        static CATALOG: OnceLock<Catalog> = OnceLock::new();
        CATALOG.get_or_init(build_catalog)
    }

    /// All stages in catalog order (phase order, then stage order).
    pub fn stages(&self) -> impl Iterator<Item = &Stage> {
        self.phases.iter().flat_map(|p| p.stages.iter())
    }

    pub fn stage_count(&self) -> usize {
        self.phases.iter().map(|p| p.stages.len()).sum()
    }

    pub fn find_stage(&self, id: &str) -> Option<&Stage> {
        self.stages().find(|s| s.id == id)
    }

    pub fn stage(&self, id: &str) -> Result<&Stage> {
        self.find_stage(id)
            .ok_or_else(|| DocflowError::StageNotFound(id.to_string()))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.find_stage(id).is_some()
    }

    /// The phase a stage belongs to, if the id is known.
    pub fn phase_of(&self, id: &str) -> Option<&Phase> {
        self.phases
            .iter()
            .find(|p| p.stages.iter().any(|s| s.id == id))
    }

    /// Apply a workflow filter: keep stages matching the filter, drop phases
    /// left empty. `DocFilter::All` returns the catalog unchanged.
    pub fn filtered(&self, filter: DocFilter) -> Catalog {
        if filter == DocFilter::All {
            return self.clone();
        }
        let phases = self
            .phases
            .iter()
            .map(|p| Phase {
                name: p.name.clone(),
                accent: p.accent.clone(),
                icon: p.icon.clone(),
                stages: p
                    .stages
                    .iter()
                    .filter(|s| s.matches(filter))
                    .cloned()
                    .collect(),
            })
            .filter(|p| !p.stages.is_empty())
            .collect();
        Catalog { phases }
    }
}

// ---------------------------------------------------------------------------
// Table construction helpers
// ---------------------------------------------------------------------------

fn input(name: &str, location: &str) -> Input {
    Input {
        name: name.to_string(),
        location: location.to_string(),
        source: None,
    }
}

fn input_from(name: &str, location: &str, source: &str) -> Input {
    Input {
        name: name.to_string(),
        location: location.to_string(),
        source: Some(InputSource::from(source.to_string())),
    }
}

fn output(name: &str, location: &str, doc_type: DocType) -> Output {
    Output {
        name: name.to_string(),
        location: location.to_string(),
        doc_type,
    }
}

fn ids(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

// ---------------------------------------------------------------------------
// The embedded lifecycle table
// ---------------------------------------------------------------------------

fn build_catalog() -> Catalog {
    use DocType::{External, Internal, Neither};

    Catalog {
        phases: vec![
            Phase {
                name: "1. Discovery".to_string(),
                accent: "blue".to_string(),
                icon: "users".to_string(),
                stages: vec![
                    Stage {
                        id: "1a".into(),
                        name: "Request".into(),
                        owner: "Customer Support / Stakeholder".into(),
                        inputs: vec![
                            input("Support tickets", "Zendesk/Intercom"),
                            input("Customer conversations", "CRM/Slack"),
                            input("Usage analytics", "Analytics platform"),
                        ],
                        outputs: vec![
                            output("Feature request log", "Project management tool", Neither),
                            output("Problem statement", "Project management tool", Neither),
                            output("User impact assessment", "Spreadsheet/Doc", Neither),
                        ],
                        dependencies: vec![],
                        internal_docs: vec![],
                        external_docs: vec![],
                        note: None,
                    },
                    Stage {
                        id: "1b".into(),
                        name: "Triage".into(),
                        owner: "Product Manager".into(),
                        inputs: vec![
                            input_from("Feature request log", "From 1a", "1a"),
                            input_from("Problem statement", "From 1a", "1a"),
                            input("Business strategy docs", "Confluence/Notion"),
                            input("Technical feasibility input", "Eng Lead feedback"),
                        ],
                        outputs: vec![
                            output("Triage notes", "Confluence/Notion", Neither),
                            output("Priority assignment", "JIRA/Linear", Neither),
                            output("Go/no-go decision", "Confluence/Notion", Neither),
                        ],
                        dependencies: ids(&["1a"]),
                        internal_docs: vec![],
                        external_docs: vec![],
                        note: None,
                    },
                    Stage {
                        id: "1c".into(),
                        name: "Requirements Gathering".into(),
                        owner: "Product Manager".into(),
                        inputs: vec![
                            input_from("Triage notes", "From 1b", "1b"),
                            input_from("Priority assignment", "From 1b", "1b"),
                            input("User research", "Research docs"),
                            input("Analytics data", "Analytics platform"),
                        ],
                        outputs: vec![
                            output("User stories", "JIRA/Linear", Neither),
                            output("Acceptance criteria", "JIRA/Linear", Neither),
                            output("Success metrics", "Confluence/Notion", Neither),
                            output("User flows", "Figma/Miro", Neither),
                        ],
                        dependencies: ids(&["1b"]),
                        internal_docs: vec![],
                        external_docs: vec![],
                        note: None,
                    },
                    Stage {
                        id: "1d".into(),
                        name: "PRD Creation".into(),
                        owner: "Product Manager".into(),
                        inputs: vec![
                            input_from("User stories", "From 1c", "1c"),
                            input_from("Acceptance criteria", "From 1c", "1c"),
                            input_from("Success metrics", "From 1c", "1c"),
                            input("Design mockups", "Figma"),
                        ],
                        outputs: vec![
                            output("PRD", "Confluence/Notion/Google Docs", Neither),
                            output("Success criteria", "PRD document", Neither),
                            output("Risks & dependencies", "PRD document", Neither),
                        ],
                        dependencies: ids(&["1c"]),
                        internal_docs: vec![],
                        external_docs: vec![],
                        note: None,
                    },
                ],
            },
            Phase {
                name: "2. Planning".to_string(),
                accent: "purple".to_string(),
                icon: "file-text".to_string(),
                stages: vec![
                    Stage {
                        id: "2a".into(),
                        name: "Technical Design Review".into(),
                        owner: "Engineering Lead / Architect".into(),
                        inputs: vec![
                            input_from("PRD", "From 1d", "1d"),
                            input_from("Existing system diagrams", "Confluence/Wiki", "internal"),
                            input_from("Existing DB schemas", "Confluence/Wiki", "internal"),
                            input_from("Existing API docs", "Confluence/Wiki", "internal"),
                        ],
                        outputs: vec![
                            output("Technical design doc", "Confluence/Wiki", Internal),
                            output(
                                "ADRs (Architecture Decision Records)",
                                "Confluence/Wiki/GitHub",
                                Internal,
                            ),
                            output("API specifications", "Confluence/Swagger", Internal),
                            output("Database schema changes", "Confluence/Wiki", Internal),
                            output("System diagrams (updated)", "Confluence/Miro", Internal),
                        ],
                        dependencies: ids(&["1d"]),
                        internal_docs: ids(&[
                            "Technical design doc",
                            "ADRs",
                            "API specifications",
                            "Database schema changes",
                            "System diagrams",
                        ]),
                        external_docs: vec![],
                        note: None,
                    },
                    Stage {
                        id: "2b".into(),
                        name: "Task Breakdown".into(),
                        owner: "Engineering Lead + Team".into(),
                        inputs: vec![
                            input_from("Technical design doc", "From 2a", "2a"),
                            input_from("ADRs", "From 2a", "2a"),
                            input("Team velocity data", "JIRA/Linear"),
                        ],
                        outputs: vec![
                            output("Work breakdown structure", "JIRA/Linear", Neither),
                            output("Story point estimates", "JIRA/Linear", Neither),
                            output("Sprint plan", "JIRA/Linear", Neither),
                        ],
                        dependencies: ids(&["2a"]),
                        internal_docs: vec![],
                        external_docs: vec![],
                        note: None,
                    },
                    Stage {
                        id: "2c".into(),
                        name: "Ticket Creation".into(),
                        owner: "PM / Engineering Lead".into(),
                        inputs: vec![
                            input_from("Work breakdown", "From 2b", "2b"),
                            input_from("Technical design doc", "From 2a", "2a"),
                            input_from("Acceptance criteria", "From 1c", "1c"),
                        ],
                        outputs: vec![
                            output("JIRA/Linear tickets", "JIRA/Linear", Neither),
                            output("Ticket descriptions", "JIRA/Linear", Neither),
                            output("Definition of Done", "JIRA/Linear", Neither),
                        ],
                        dependencies: ids(&["2b", "2a", "1c"]),
                        internal_docs: vec![],
                        external_docs: vec![],
                        note: None,
                    },
                ],
            },
            Phase {
                name: "3. Building".to_string(),
                accent: "green".to_string(),
                icon: "code".to_string(),
                stages: vec![
                    Stage {
                        id: "3a".into(),
                        name: "Codebase Understanding".into(),
                        owner: "Software Engineer".into(),
                        inputs: vec![
                            input_from("Ticket", "From 2c", "2c"),
                            input_from("Technical design doc", "From 2a", "2a"),
                            input_from("Internal wiki", "Confluence/Wiki", "internal"),
                            input_from("READMEs", "GitHub/GitLab", "internal"),
                            input_from("Architecture diagrams", "From 2a", "2a"),
                        ],
                        outputs: vec![
                            output("Personal notes", "Engineer's notes", Neither),
                            output("Question log", "Doc/Notion", Neither),
                            output("Slack questions", "Slack", Neither),
                            output("Implementation plan", "Doc/Ticket", Neither),
                        ],
                        dependencies: ids(&["2c", "2a"]),
                        internal_docs: vec![],
                        external_docs: vec![],
                        note: None,
                    },
                    Stage {
                        id: "3b".into(),
                        name: "Implementation".into(),
                        owner: "Software Engineer".into(),
                        inputs: vec![
                            input_from("Ticket", "From 2c", "2c"),
                            input_from("Technical design doc", "From 2a", "2a"),
                            input_from("API specs", "From 2a", "2a"),
                            input_from("Implementation plan", "From 3a", "3a"),
                            input_from("Coding standards", "Wiki/GitHub", "internal"),
                        ],
                        outputs: vec![
                            output("New code", "GitHub/GitLab", Neither),
                            output("Unit tests", "GitHub/GitLab", Neither),
                            output("Git commits", "GitHub/GitLab", Neither),
                            output("Updated READMEs", "GitHub/GitLab", Internal),
                            output("Code comments", "GitHub/GitLab", Internal),
                            output("Migration scripts", "GitHub/GitLab", Internal),
                        ],
                        dependencies: ids(&["2c", "2a", "3a"]),
                        internal_docs: ids(&[
                            "Updated READMEs",
                            "Code comments",
                            "Migration scripts",
                        ]),
                        external_docs: vec![],
                        note: None,
                    },
                    Stage {
                        id: "3c".into(),
                        name: "Code Review".into(),
                        owner: "Senior Engineer / Tech Lead".into(),
                        inputs: vec![
                            input_from("New code", "From 3b", "3b"),
                            input_from("Updated READMEs", "From 3b", "3b"),
                            input_from("Unit tests", "From 3b", "3b"),
                            input_from("Technical design doc", "From 2a", "2a"),
                        ],
                        outputs: vec![
                            output("Pull Request", "GitHub/GitLab", Neither),
                            output("PR comments", "GitHub/GitLab", Neither),
                            output("Approval", "GitHub/GitLab", Neither),
                            output("Code quality metrics", "SonarQube/CodeClimate", Neither),
                        ],
                        dependencies: ids(&["3b", "2a"]),
                        internal_docs: vec![],
                        external_docs: vec![],
                        note: None,
                    },
                ],
            },
            Phase {
                name: "4. Testing".to_string(),
                accent: "orange".to_string(),
                icon: "alert-circle".to_string(),
                stages: vec![
                    Stage {
                        id: "4a".into(),
                        name: "Automated Testing".into(),
                        owner: "Software Engineer / QA".into(),
                        inputs: vec![
                            input_from("Approved PR", "From 3c", "3c"),
                            input_from("New code", "From 3b", "3b"),
                            input_from("Unit tests", "From 3b", "3b"),
                        ],
                        outputs: vec![
                            output("Test results", "CI/CD platform", Neither),
                            output("Code coverage reports", "CI/CD platform", Neither),
                            output("CI/CD pipeline logs", "Jenkins/GitHub Actions", Neither),
                        ],
                        dependencies: ids(&["3c", "3b"]),
                        internal_docs: vec![],
                        external_docs: vec![],
                        note: None,
                    },
                    Stage {
                        id: "4b".into(),
                        name: "Manual QA Testing".into(),
                        owner: "QA Engineer".into(),
                        inputs: vec![
                            input_from("Deployed code (staging)", "From 4a", "4a"),
                            input_from("PRD", "From 1d", "1d"),
                            input_from("Acceptance criteria", "From 1c", "1c"),
                            input_from("Updated READMEs", "From 3b", "3b"),
                        ],
                        outputs: vec![
                            output("Test execution report", "TestRail/JIRA", Neither),
                            output("Bug tickets", "JIRA/Linear", Neither),
                            output("Test cases", "TestRail/Confluence", Internal),
                            output("QA sign-off", "JIRA/Confluence", Neither),
                        ],
                        dependencies: ids(&["4a", "1d", "1c", "3b"]),
                        internal_docs: ids(&["Test cases"]),
                        external_docs: vec![],
                        note: None,
                    },
                    Stage {
                        id: "4c".into(),
                        name: "Bug Resolution".into(),
                        owner: "Software Engineer".into(),
                        inputs: vec![
                            input_from("Bug tickets", "From 4b", "4b"),
                            input_from("Test execution report", "From 4b", "4b"),
                        ],
                        outputs: vec![
                            output("Bug fixes", "GitHub/GitLab", Neither),
                            output("Updated tests", "GitHub/GitLab", Neither),
                            output("Bug resolution notes", "JIRA/Linear", Neither),
                        ],
                        dependencies: ids(&["4b"]),
                        internal_docs: vec![],
                        external_docs: vec![],
                        note: Some("Loops back to 3c for review".into()),
                    },
                    Stage {
                        id: "4d".into(),
                        name: "User Acceptance Testing".into(),
                        owner: "Product Manager + Stakeholders".into(),
                        inputs: vec![
                            input_from("QA sign-off", "From 4b", "4b"),
                            input("Working feature (staging)", "Staging environment"),
                            input_from("PRD", "From 1d", "1d"),
                            input_from("Success criteria", "From 1d", "1d"),
                        ],
                        outputs: vec![
                            output("UAT plan", "Confluence/Notion", Neither),
                            output("UAT feedback", "Confluence/Notion", Neither),
                            output("Demo recording", "Loom/YouTube (internal)", Neither),
                            output("UAT sign-off", "Confluence/Notion", Neither),
                        ],
                        dependencies: ids(&["4b", "1d"]),
                        internal_docs: vec![],
                        external_docs: vec![],
                        note: None,
                    },
                ],
            },
            Phase {
                name: "5. Documentation".to_string(),
                accent: "yellow".to_string(),
                icon: "book-open".to_string(),
                stages: vec![
                    Stage {
                        id: "5a".into(),
                        name: "Technical Documentation (Internal)".into(),
                        owner: "Software Engineer / Tech Writer".into(),
                        inputs: vec![
                            input_from("New code", "From 3b", "3b"),
                            input_from("Technical design doc", "From 2a", "2a"),
                            input_from("ADRs", "From 2a", "2a"),
                            input_from("API specs", "From 2a", "2a"),
                            input_from("Updated READMEs", "From 3b", "3b"),
                        ],
                        outputs: vec![
                            output("README updates", "GitHub/GitLab", Internal),
                            output("API documentation", "Swagger/Confluence", Internal),
                            output("Architecture docs", "Confluence/Wiki", Internal),
                            output("Runbooks", "Confluence/PagerDuty", Internal),
                            output("Troubleshooting guides", "Confluence/Wiki", Internal),
                            output("Configuration guides", "Confluence/Wiki", Internal),
                            output("How-it-works docs", "Confluence/Wiki", Internal),
                        ],
                        dependencies: ids(&["3b", "2a"]),
                        internal_docs: ids(&[
                            "README updates",
                            "API documentation",
                            "Architecture docs",
                            "Runbooks",
                            "Troubleshooting guides",
                            "Configuration guides",
                            "How-it-works docs",
                        ]),
                        external_docs: vec![],
                        note: None,
                    },
                    Stage {
                        id: "5b".into(),
                        name: "End-User Documentation (External)".into(),
                        owner: "Technical Writer / PM".into(),
                        inputs: vec![
                            input_from("PRD", "From 1d", "1d"),
                            input_from("User stories", "From 1c", "1c"),
                            input_from("UAT demo", "From 4d", "4d"),
                            input("Screenshots/videos", "From testing"),
                        ],
                        outputs: vec![
                            output("Help center articles", "Zendesk/Intercom/Help site", External),
                            output("User guides", "Help site/Docs site", External),
                            output("Tutorial videos", "YouTube/Help site", External),
                            output("Release notes", "Help site/Blog", External),
                            output("FAQ updates", "Help site", External),
                        ],
                        dependencies: ids(&["1d", "1c", "4d"]),
                        internal_docs: vec![],
                        external_docs: ids(&[
                            "Help center articles",
                            "User guides",
                            "Tutorial videos",
                            "Release notes",
                            "FAQ updates",
                        ]),
                        note: None,
                    },
                    Stage {
                        id: "5c".into(),
                        name: "Knowledge Base Updates".into(),
                        owner: "Engineering Team / PM".into(),
                        inputs: vec![
                            input_from("Technical docs", "From 5a", "5a"),
                            input_from("User docs", "From 5b", "5b"),
                            input_from("Bug resolution notes", "From 4c", "4c"),
                            input_from("Question log", "From 3a", "3a"),
                        ],
                        outputs: vec![
                            output("Internal wiki updates", "Confluence/Notion", Internal),
                            output("Known issues doc", "Confluence/Wiki", Internal),
                            output("Workarounds", "Confluence/Wiki", Internal),
                            output("Lessons learned", "Confluence/Wiki", Internal),
                        ],
                        dependencies: ids(&["5a", "5b", "4c", "3a"]),
                        internal_docs: ids(&[
                            "Internal wiki updates",
                            "Known issues doc",
                            "Workarounds",
                            "Lessons learned",
                        ]),
                        external_docs: vec![],
                        note: None,
                    },
                ],
            },
            Phase {
                name: "6. Deployment".to_string(),
                accent: "indigo".to_string(),
                icon: "wrench".to_string(),
                stages: vec![
                    Stage {
                        id: "6a".into(),
                        name: "Pre-Deployment Prep".into(),
                        owner: "DevOps / SRE".into(),
                        inputs: vec![
                            input_from("UAT sign-off", "From 4d", "4d"),
                            input_from("QA sign-off", "From 4b", "4b"),
                            input_from("Runbooks", "From 5a", "5a"),
                        ],
                        outputs: vec![
                            output("Deployment plan", "Confluence/Wiki", Internal),
                            output("Rollback procedures", "Confluence/PagerDuty", Internal),
                            output("Deployment runbook", "Confluence/PagerDuty", Internal),
                            output("Monitoring setup", "Grafana/Datadog", Internal),
                        ],
                        dependencies: ids(&["4d", "4b", "5a"]),
                        internal_docs: ids(&[
                            "Deployment plan",
                            "Rollback procedures",
                            "Deployment runbook",
                            "Monitoring setup",
                        ]),
                        external_docs: vec![],
                        note: None,
                    },
                    Stage {
                        id: "6b".into(),
                        name: "Deployment Execution".into(),
                        owner: "DevOps / SRE / Engineer".into(),
                        inputs: vec![
                            input_from("Deployment plan", "From 6a", "6a"),
                            input_from("Deployment runbook", "From 6a", "6a"),
                            input_from("CI/CD pipeline", "From 4a", "4a"),
                        ],
                        outputs: vec![
                            output("Deployment logs", "Jenkins/GitHub Actions", Internal),
                            output("Production release", "Production environment", Neither),
                            output("Deployment report", "Confluence/Slack", Internal),
                        ],
                        dependencies: ids(&["6a", "4a"]),
                        internal_docs: ids(&["Deployment logs", "Deployment report"]),
                        external_docs: vec![],
                        note: None,
                    },
                    Stage {
                        id: "6c".into(),
                        name: "Launch Communications".into(),
                        owner: "PM / Product Marketing".into(),
                        inputs: vec![
                            input_from("Successful deployment", "From 6b", "6b"),
                            input_from("Release notes", "From 5b", "5b"),
                            input_from("User guides", "From 5b", "5b"),
                            input_from("Demo recording", "From 4d", "4d"),
                        ],
                        outputs: vec![
                            output("Release announcement", "Email/Blog/In-app", External),
                            output("Changelog", "Help site/GitHub", External),
                            output("Internal announcement", "Slack/Email", Neither),
                            output("Demo scripts", "Confluence/Notion", Internal),
                            output("Training guides", "Confluence/Notion", Internal),
                        ],
                        dependencies: ids(&["6b", "5b", "4d"]),
                        internal_docs: ids(&["Demo scripts", "Training guides"]),
                        external_docs: ids(&["Release announcement", "Changelog"]),
                        note: None,
                    },
                ],
            },
            Phase {
                name: "7. Post-Launch".to_string(),
                accent: "red".to_string(),
                icon: "database".to_string(),
                stages: vec![
                    Stage {
                        id: "7a".into(),
                        name: "Monitoring & Observability".into(),
                        owner: "SRE / DevOps / Engineering".into(),
                        inputs: vec![
                            input_from("Deployment logs", "From 6b", "6b"),
                            input_from("Monitoring setup", "From 6a", "6a"),
                        ],
                        outputs: vec![
                            output("Monitoring dashboards", "Grafana/Datadog", Internal),
                            output("Alert definitions", "PagerDuty/Grafana", Internal),
                            output("Performance reports", "Confluence/Dashboard", Internal),
                            output("Error logs", "Splunk/ELK", Internal),
                        ],
                        dependencies: ids(&["6b", "6a"]),
                        internal_docs: ids(&[
                            "Monitoring dashboards",
                            "Alert definitions",
                            "Performance reports",
                        ]),
                        external_docs: vec![],
                        note: None,
                    },
                    Stage {
                        id: "7b".into(),
                        name: "Support Enablement".into(),
                        owner: "Customer Support / Success".into(),
                        inputs: vec![
                            input_from("User guides", "From 5b", "5b"),
                            input_from("Demo scripts", "From 6c", "6c"),
                            input_from("Training guides", "From 6c", "6c"),
                            input_from("Known issues", "From 5c", "5c"),
                            input_from("FAQ", "From 5b", "5b"),
                        ],
                        outputs: vec![
                            output("Support KB (internal)", "Confluence/Zendesk", Internal),
                            output("Support macros", "Zendesk/Intercom", Internal),
                            output("Escalation procedures", "Confluence/Wiki", Internal),
                        ],
                        dependencies: ids(&["5b", "6c", "5c"]),
                        internal_docs: ids(&[
                            "Support KB (internal)",
                            "Support macros",
                            "Escalation procedures",
                        ]),
                        external_docs: vec![],
                        note: None,
                    },
                    Stage {
                        id: "7c".into(),
                        name: "Feedback Collection".into(),
                        owner: "PM / Customer Success".into(),
                        inputs: vec![
                            input_from("Usage analytics", "From 7a", "7a"),
                            input("Customer feedback", "Support/Surveys"),
                            input("Support ticket patterns", "Zendesk/Intercom"),
                        ],
                        outputs: vec![
                            output("Feature performance report", "Confluence/Notion", Neither),
                            output("User feedback summary", "Confluence/Notion", Neither),
                            output("Improvement backlog", "JIRA/Linear", Neither),
                            output("Bug reports", "JIRA/Linear", Neither),
                        ],
                        dependencies: ids(&["7a"]),
                        internal_docs: vec![],
                        external_docs: vec![],
                        note: Some("Feeds back to 1a (Discovery)".into()),
                    },
                ],
            },
        ],
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn builtin_shape() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.phases.len(), 7);
        assert_eq!(catalog.stage_count(), 23);
    }

    #[test]
    fn stage_ids_unique() {
        let catalog = Catalog::builtin();
        let mut seen = HashSet::new();
        for stage in catalog.stages() {
            assert!(seen.insert(stage.id.clone()), "duplicate id {}", stage.id);
        }
    }

    #[test]
    fn dependencies_resolve_and_point_backward() {
        let catalog = Catalog::builtin();
        let order: Vec<&str> = catalog.stages().map(|s| s.id.as_str()).collect();
        for stage in catalog.stages() {
            let pos = order.iter().position(|id| *id == stage.id).unwrap();
            for dep in &stage.dependencies {
                let dep_pos = order
                    .iter()
                    .position(|id| id == dep)
                    .unwrap_or_else(|| panic!("{} depends on unknown {}", stage.id, dep));
                assert!(
                    dep_pos < pos,
                    "{} depends on {} which is not earlier in catalog order",
                    stage.id,
                    dep
                );
            }
        }
    }

    #[test]
    fn input_stage_sources_resolve() {
        let catalog = Catalog::builtin();
        for stage in catalog.stages() {
            for inp in &stage.inputs {
                if let Some(id) = inp.source.as_ref().and_then(|s| s.stage_id()) {
                    assert!(
                        catalog.contains(id),
                        "{} input '{}' names unknown source {}",
                        stage.id,
                        inp.name,
                        id
                    );
                }
            }
        }
    }

    #[test]
    fn doc_lists_are_output_subsets_by_count() {
        // internal/external doc lists annotate outputs; a stage never claims
        // more docs than it has outputs of that type. (Not equality: 7a tags
        // four internal outputs but only annotates three.)
        let catalog = Catalog::builtin();
        for stage in catalog.stages() {
            let internal_outputs = stage
                .outputs
                .iter()
                .filter(|o| o.doc_type == DocType::Internal)
                .count();
            let external_outputs = stage
                .outputs
                .iter()
                .filter(|o| o.doc_type == DocType::External)
                .count();
            assert!(
                stage.internal_docs.len() <= internal_outputs,
                "{}: more internal doc annotations than internal outputs",
                stage.id
            );
            assert!(
                stage.external_docs.len() <= external_outputs,
                "{}: more external doc annotations than external outputs",
                stage.id
            );
            // A stage flagged as a doc creator must actually have such outputs.
            if stage.creates_internal_docs() {
                assert!(internal_outputs > 0, "{}", stage.id);
            }
            if stage.creates_external_docs() {
                assert!(external_outputs > 0, "{}", stage.id);
            }
        }
    }

    #[test]
    fn narrative_notes_are_not_structural() {
        let catalog = Catalog::builtin();
        // 4c loops back to 3c, 7c feeds back to 1a; neither appears as a
        // forward dependency.
        let bug_resolution = catalog.stage("4c").unwrap();
        assert!(bug_resolution.note.is_some());
        assert!(!bug_resolution.dependencies.contains(&"3c".to_string()));
        let feedback = catalog.stage("7c").unwrap();
        assert!(feedback.note.is_some());
        assert!(!feedback.dependencies.contains(&"1a".to_string()));
    }

    #[test]
    fn stage_lookup() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.stage("2a").unwrap().name, "Technical Design Review");
        assert!(matches!(
            catalog.stage("9z"),
            Err(DocflowError::StageNotFound(_))
        ));
    }

    #[test]
    fn filter_all_is_identity() {
        let catalog = Catalog::builtin();
        assert_eq!(&catalog.filtered(DocFilter::All), catalog);
    }

    #[test]
    fn filter_internal_keeps_only_internal_doc_stages() {
        let catalog = Catalog::builtin();
        let filtered = catalog.filtered(DocFilter::Internal);
        assert!(filtered.stage_count() > 0);
        for stage in filtered.stages() {
            assert!(stage.creates_internal_docs());
        }
        for phase in &filtered.phases {
            assert!(!phase.stages.is_empty());
        }
        // Discovery produces no documentation at all; the phase drops out.
        assert!(!filtered.phases.iter().any(|p| p.name.contains("Discovery")));
    }

    #[test]
    fn filter_external_keeps_only_external_doc_stages() {
        let catalog = Catalog::builtin();
        let filtered = catalog.filtered(DocFilter::External);
        let ids: Vec<&str> = filtered.stages().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["5b", "6c"]);
    }

    #[test]
    fn phase_of_maps_stage_to_phase() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.phase_of("4b").unwrap().name, "4. Testing");
        assert!(catalog.phase_of("9z").is_none());
    }
}
