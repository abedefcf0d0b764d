use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

// ---------------------------------------------------------------------------
// UseCase
// ---------------------------------------------------------------------------

/// A documentation-needed-here scenario: what people are trying to do, which
/// documents they reach for, and what it costs when those are missing.
/// Entirely static reference material; the `stage` references are prose, not
/// validated stage identities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UseCase {
    pub category: String,
    pub icon: String,
    pub description: String,
    pub activities: Vec<String>,
    pub required_docs: Vec<RequiredDoc>,
    pub consequence: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_link: Option<ToolLink>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequiredDoc {
    pub name: String,
    /// Free-text pointer at the producing stage(s), e.g. "2a, 5a".
    pub stage: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolLink {
    pub name: String,
    pub url: String,
    pub description: String,
}

/// All use-case records, in display order.
pub fn all() -> &'static [UseCase] {
    static USE_CASES: OnceLock<Vec<UseCase>> = OnceLock::new();
    USE_CASES.get_or_init(build_use_cases)
}

/// Case-insensitive lookup by category name.
pub fn find(category: &str) -> Option<&'static UseCase> {
    all()
        .iter()
        .find(|u| u.category.eq_ignore_ascii_case(category))
}

// ---------------------------------------------------------------------------
// Table construction helpers
// ---------------------------------------------------------------------------

fn texts(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn doc(name: &str, stage: &str) -> RequiredDoc {
    RequiredDoc {
        name: name.to_string(),
        stage: stage.to_string(),
    }
}

fn tool(name: &str, url: &str, description: &str) -> Option<ToolLink> {
    Some(ToolLink {
        name: name.to_string(),
        url: url.to_string(),
        description: description.to_string(),
    })
}

// ---------------------------------------------------------------------------
// The embedded use-case table
// ---------------------------------------------------------------------------

fn build_use_cases() -> Vec<UseCase> {
    vec![
        UseCase {
            category: "New Engineer Onboarding".into(),
            icon: "users".into(),
            description: "Getting a new engineer productive quickly".into(),
            activities: texts(&[
                "Understanding system architecture",
                "Setting up local development environment",
                "Learning coding standards and practices",
                "Understanding deployment process",
            ]),
            required_docs: vec![
                doc("Architecture docs", "2a, 5a"),
                doc("System diagrams", "2a"),
                doc("README files", "3b, 5a"),
                doc("Getting started guide", "5a"),
                doc("Coding standards", "3b"),
                doc("Development setup docs", "5a"),
                doc("Deployment runbooks", "6a"),
            ],
            consequence: "Without these: 2-4 week ramp-up becomes 2-3 months".into(),
            tool_link: None,
        },
        UseCase {
            category: "Incident Response".into(),
            icon: "alert-circle".into(),
            description: "Responding to production incidents quickly".into(),
            activities: texts(&[
                "Understanding what broke and why",
                "Following runbooks to resolve issues",
                "Identifying system dependencies",
                "Rolling back if necessary",
            ]),
            required_docs: vec![
                doc("Runbooks", "5a, 6a"),
                doc("Architecture diagrams", "2a, 5a"),
                doc("Monitoring dashboards", "7a"),
                doc("Alert definitions", "7a"),
                doc("Rollback procedures", "6a"),
                doc("Troubleshooting guides", "5a"),
                doc("Known issues doc", "5c"),
            ],
            consequence: "Without these: Minutes of downtime become hours".into(),
            tool_link: tool("Rootly", "https://rootly.com", "Incident management platform"),
        },
        UseCase {
            category: "Feature Development".into(),
            icon: "code".into(),
            description: "Building new features or modifying existing ones".into(),
            activities: texts(&[
                "Understanding existing codebase",
                "Following API contracts",
                "Making architectural decisions",
                "Ensuring consistency with existing patterns",
            ]),
            required_docs: vec![
                doc("Technical design docs", "2a"),
                doc("API documentation", "2a, 5a"),
                doc("ADRs", "2a"),
                doc("Database schemas", "2a"),
                doc("Code comments", "3b"),
                doc("READMEs", "3b, 5a"),
                doc("Architecture docs", "2a, 5a"),
            ],
            consequence: "Without these: Duplicate work, broken integrations, tech debt".into(),
            tool_link: tool(
                "Greptile",
                "https://www.greptile.com/",
                "AI-powered code review and codebase understanding",
            ),
        },
        UseCase {
            category: "Debugging & Troubleshooting".into(),
            icon: "wrench".into(),
            description: "Diagnosing and fixing bugs".into(),
            activities: texts(&[
                "Understanding expected behavior",
                "Tracing through system flow",
                "Checking logs and metrics",
                "Identifying root cause",
            ]),
            required_docs: vec![
                doc("How-it-works docs", "5a"),
                doc("Architecture diagrams", "2a, 5a"),
                doc("API specs", "2a, 5a"),
                doc("Troubleshooting guides", "5a"),
                doc("Error logs", "7a"),
                doc("Monitoring dashboards", "7a"),
                doc("Code comments", "3b"),
            ],
            consequence: "Without these: Days of investigation instead of hours".into(),
            tool_link: tool(
                "CodeRabbit",
                "https://www.coderabbit.ai/",
                "AI-powered code review and debugging",
            ),
        },
        UseCase {
            category: "API Integration".into(),
            icon: "external-link".into(),
            description: "Integrating with internal or external systems".into(),
            activities: texts(&[
                "Understanding API contracts",
                "Following authentication patterns",
                "Handling errors correctly",
                "Testing integration scenarios",
            ]),
            required_docs: vec![
                doc("API documentation", "2a, 5a"),
                doc("API specs", "2a"),
                doc("Authentication guides", "5a"),
                doc("Integration examples", "5a"),
                doc("Error handling docs", "5a"),
            ],
            consequence: "Without these: Broken integrations, security issues, wasted time".into(),
            tool_link: None,
        },
        UseCase {
            category: "Testing & QA".into(),
            icon: "alert-circle".into(),
            description: "Creating test plans and validating features".into(),
            activities: texts(&[
                "Understanding expected behavior",
                "Creating comprehensive test cases",
                "Validating edge cases",
                "Regression testing",
            ]),
            required_docs: vec![
                doc("PRD", "1d"),
                doc("Acceptance criteria", "1c"),
                doc("Technical design doc", "2a"),
                doc("Test cases", "4b"),
                doc("Known issues", "5c"),
                doc("API specs", "2a, 5a"),
            ],
            consequence: "Without these: Incomplete testing, bugs in production".into(),
            tool_link: tool(
                "Autonama",
                "https://www.getautonama.com/",
                "Automated testing platform",
            ),
        },
        UseCase {
            category: "Customer Support".into(),
            icon: "users".into(),
            description: "Helping customers resolve issues".into(),
            activities: texts(&[
                "Answering product questions",
                "Troubleshooting customer issues",
                "Creating workarounds",
                "Escalating to engineering when needed",
            ]),
            required_docs: vec![
                doc("User guides", "5b"),
                doc("Help center articles", "5b"),
                doc("FAQ", "5b"),
                doc("Support KB", "7b"),
                doc("Known issues", "5c"),
                doc("Workarounds", "5c"),
                doc("Escalation procedures", "7b"),
            ],
            consequence: "Without these: Poor customer experience, ticket backlog".into(),
            tool_link: None,
        },
        UseCase {
            category: "System Operations".into(),
            icon: "database".into(),
            description: "Day-to-day operational tasks".into(),
            activities: texts(&[
                "Deploying code changes",
                "Monitoring system health",
                "Performing maintenance tasks",
                "Managing configurations",
            ]),
            required_docs: vec![
                doc("Deployment runbooks", "6a"),
                doc("Rollback procedures", "6a"),
                doc("Monitoring dashboards", "7a"),
                doc("Alert definitions", "7a"),
                doc("Configuration guides", "5a"),
                doc("Troubleshooting guides", "5a"),
            ],
            consequence: "Without these: Risky deployments, system instability".into(),
            tool_link: None,
        },
        UseCase {
            category: "Product Planning".into(),
            icon: "file-text".into(),
            description: "Planning future features and improvements".into(),
            activities: texts(&[
                "Understanding current capabilities",
                "Identifying technical constraints",
                "Estimating effort",
                "Planning integrations",
            ]),
            required_docs: vec![
                doc("Architecture docs", "2a, 5a"),
                doc("Technical design docs", "2a"),
                doc("ADRs", "2a"),
                doc("API documentation", "2a, 5a"),
                doc("Known limitations", "5c"),
                doc("Performance reports", "7a"),
            ],
            consequence: "Without these: Unrealistic plans, scope creep, tech debt".into(),
            tool_link: None,
        },
        UseCase {
            category: "Security & Compliance".into(),
            icon: "alert-circle".into(),
            description: "Ensuring security and meeting compliance requirements".into(),
            activities: texts(&[
                "Understanding security architecture",
                "Conducting security reviews",
                "Responding to security incidents",
                "Audit preparation",
            ]),
            required_docs: vec![
                doc("Architecture docs", "2a, 5a"),
                doc("Security documentation", "2a, 5a"),
                doc("Access control docs", "5a"),
                doc("Audit logs", "7a"),
                doc("Incident response procedures", "5a"),
            ],
            consequence: "Without these: Security vulnerabilities, compliance failures".into(),
            tool_link: None,
        },
    ]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ten_categories_in_order() {
        let cases = all();
        assert_eq!(cases.len(), 10);
        assert_eq!(cases[0].category, "New Engineer Onboarding");
        assert_eq!(cases[9].category, "Security & Compliance");
    }

    #[test]
    fn find_is_case_insensitive() {
        assert!(find("incident response").is_some());
        assert!(find("Incident Response").is_some());
        assert!(find("time travel").is_none());
    }

    #[test]
    fn every_case_is_complete() {
        for case in all() {
            assert!(!case.activities.is_empty(), "{}", case.category);
            assert!(!case.required_docs.is_empty(), "{}", case.category);
            assert!(!case.consequence.is_empty(), "{}", case.category);
        }
    }

    #[test]
    fn tool_links_where_present_have_urls() {
        let with_tools: Vec<&UseCase> =
            all().iter().filter(|u| u.tool_link.is_some()).collect();
        assert_eq!(with_tools.len(), 4);
        for case in with_tools {
            let link = case.tool_link.as_ref().unwrap();
            assert!(link.url.starts_with("https://"), "{}", case.category);
        }
    }
}
