use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

// ---------------------------------------------------------------------------
// DocCategory / DocSection
// ---------------------------------------------------------------------------

/// One category of the documentation-structure guide: where this class of
/// documentation lives and which sections it must contain. Static prose.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocCategory {
    pub category: String,
    pub location: String,
    pub sections: Vec<DocSection>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocSection {
    pub title: String,
    pub required: bool,
    pub content: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
}

// ---------------------------------------------------------------------------
// BestPractice / MaintenanceWindow / DocTemplate
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BestPractice {
    pub practice: String,
    pub description: String,
    pub why: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cadence {
    Daily,
    Weekly,
    Monthly,
    Quarterly,
}

impl Cadence {
    pub fn as_str(self) -> &'static str {
        match self {
            Cadence::Daily => "daily",
            Cadence::Weekly => "weekly",
            Cadence::Monthly => "monthly",
            Cadence::Quarterly => "quarterly",
        }
    }
}

impl fmt::Display for Cadence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceWindow {
    pub cadence: Cadence,
    pub task: String,
}

/// A fill-in-the-blanks document template (README, ADR, runbook, API doc).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocTemplate {
    pub name: String,
    pub body: String,
}

// ---------------------------------------------------------------------------
// Accessors
// ---------------------------------------------------------------------------

pub fn categories() -> &'static [DocCategory] {
    static CATEGORIES: OnceLock<Vec<DocCategory>> = OnceLock::new();
    CATEGORIES.get_or_init(build_categories)
}

pub fn best_practices() -> &'static [BestPractice] {
    static PRACTICES: OnceLock<Vec<BestPractice>> = OnceLock::new();
    PRACTICES.get_or_init(build_best_practices)
}

pub fn maintenance_schedule() -> &'static [MaintenanceWindow] {
    static SCHEDULE: OnceLock<Vec<MaintenanceWindow>> = OnceLock::new();
    SCHEDULE.get_or_init(build_schedule)
}

pub fn templates() -> &'static [DocTemplate] {
    static TEMPLATES: OnceLock<Vec<DocTemplate>> = OnceLock::new();
    TEMPLATES.get_or_init(build_templates)
}

// ---------------------------------------------------------------------------
// Table construction helpers
// ---------------------------------------------------------------------------

fn texts(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn section(title: &str, content: &[&str]) -> DocSection {
    DocSection {
        title: title.to_string(),
        required: true,
        content: texts(content),
        example: None,
    }
}

fn section_with_example(title: &str, content: &[&str], example: &str) -> DocSection {
    DocSection {
        title: title.to_string(),
        required: true,
        content: texts(content),
        example: Some(example.to_string()),
    }
}

fn practice(practice: &str, description: &str, why: &str) -> BestPractice {
    BestPractice {
        practice: practice.to_string(),
        description: description.to_string(),
        why: why.to_string(),
    }
}

// ---------------------------------------------------------------------------
// The embedded documentation-structure guide
// ---------------------------------------------------------------------------

fn build_categories() -> Vec<DocCategory> {
    vec![
        DocCategory {
            category: "Repository-Level Documentation".into(),
            location: "In each code repository (GitHub/GitLab)".into(),
            sections: vec![
                section_with_example(
                    "README.md (Root)",
                    &[
                        "Project name and one-line description",
                        "What this service/component does (purpose)",
                        "Prerequisites (languages, tools, versions)",
                        "Quick start guide (getting it running locally)",
                        "Environment variables table",
                        "How to run tests",
                        "How to build/deploy",
                        "Links to more detailed docs",
                        "Troubleshooting common issues",
                        "Contributing guidelines",
                    ],
                    r#"# Payment Service
A microservice handling payment processing via Stripe

## Prerequisites
- Node.js 18+
- PostgreSQL 14+
- Redis 6+

## Quick Start
```bash
npm install
cp .env.example .env
npm run dev
```

## Environment Variables
| Variable | Description | Example |
|----------|-------------|---------|
| DATABASE_URL | Postgres connection | postgres://... |
| STRIPE_KEY | Stripe API key | sk_test_... |"#,
                ),
                section(
                    "/docs folder",
                    &[
                        "Architecture.md - System design and component interaction",
                        "API.md - Endpoint specifications and examples",
                        "Database.md - Schema, migrations, indexing strategy",
                        "Development.md - Local setup, debugging tips",
                        "Deployment.md - How to deploy, rollback procedures",
                        "Testing.md - Test strategy, how to write tests",
                    ],
                ),
                section(
                    "Code Comments",
                    &[
                        "Complex business logic explanations",
                        "Why a certain approach was taken (not what it does)",
                        "Known limitations or edge cases",
                        "TODO/FIXME with context and priority",
                        "Function/class documentation (JSDoc, docstrings, etc.)",
                    ],
                ),
            ],
        },
        DocCategory {
            category: "Architecture Documentation".into(),
            location: "Central wiki (Confluence, Notion, etc.)".into(),
            sections: vec![
                section(
                    "System Overview",
                    &[
                        "High-level architecture diagram (all services)",
                        "Technology stack (languages, frameworks, databases)",
                        "Service boundaries and responsibilities",
                        "Data flow between services",
                        "External dependencies (third-party APIs)",
                        "Deployment architecture (cloud resources)",
                    ],
                ),
                section(
                    "Component Deep Dives",
                    &[
                        "Per-service architecture diagrams",
                        "How components interact within a service",
                        "Database schema with relationships (ERD)",
                        "Message queue topics and consumers",
                        "Caching strategy",
                        "Authentication/authorization flow",
                    ],
                ),
                section_with_example(
                    "Architecture Decision Records (ADRs)",
                    &[
                        "Title: Short noun phrase",
                        "Status: Proposed/Accepted/Deprecated/Superseded",
                        "Context: The issue motivating this decision",
                        "Decision: The change we're proposing or have agreed to",
                        "Consequences: What becomes easier or harder",
                        "Date and author",
                    ],
                    r#"# ADR-015: Use PostgreSQL for Analytics Data

**Status:** Accepted
**Date:** 2024-10-15
**Author:** Engineering Team

## Context
We need to store and query large amounts of analytics data...

## Decision
We will use PostgreSQL with TimescaleDB extension...

## Consequences
+ Better SQL query support
+ Easier for analysts
- More expensive than NoSQL"#,
                ),
            ],
        },
        DocCategory {
            category: "API Documentation".into(),
            location: "Swagger/OpenAPI spec + Wiki".into(),
            sections: vec![
                section(
                    "API Reference",
                    &[
                        "Base URL and versioning strategy",
                        "Authentication methods (API keys, OAuth, JWT)",
                        "Common headers and their purpose",
                        "Rate limiting rules",
                        "Pagination strategy",
                        "Error response format and codes",
                        "Per-endpoint documentation with examples",
                    ],
                ),
                section(
                    "Per Endpoint",
                    &[
                        "HTTP method and path",
                        "Purpose/description",
                        "Authentication requirements",
                        "Request parameters (path, query, body)",
                        "Request body schema with field descriptions",
                        "Response schema with field descriptions",
                        "Example request (curl, code snippets)",
                        "Example responses (success and error cases)",
                        "Status codes and their meanings",
                    ],
                ),
            ],
        },
        DocCategory {
            category: "Database Documentation".into(),
            location: "Wiki + dbdocs or similar".into(),
            sections: vec![
                section(
                    "Schema Documentation",
                    &[
                        "Entity Relationship Diagram (ERD)",
                        "Table purposes and relationships",
                        "Per-table column descriptions",
                        "Data types and constraints",
                        "Indexes and their purpose",
                        "Foreign key relationships",
                        "Triggers and stored procedures",
                    ],
                ),
                section(
                    "Migration Strategy",
                    &[
                        "How to create migrations",
                        "Migration naming conventions",
                        "Rollback procedures",
                        "Data migration patterns",
                        "Zero-downtime migration strategies",
                    ],
                ),
                section(
                    "Performance",
                    &[
                        "Query optimization tips",
                        "Index usage guidelines",
                        "Slow query log and monitoring",
                        "Partitioning strategy (if applicable)",
                        "Backup and restore procedures",
                    ],
                ),
            ],
        },
        DocCategory {
            category: "Operational Documentation".into(),
            location: "Wiki + Runbook platform (PagerDuty, etc.)".into(),
            sections: vec![
                section_with_example(
                    "Runbooks",
                    &[
                        "Title: Clear description of the procedure",
                        "When to use this runbook",
                        "Prerequisites and permissions needed",
                        "Step-by-step instructions (numbered)",
                        "Expected outcomes at each step",
                        "How to verify success",
                        "Rollback procedure",
                        "Who to contact if issues arise",
                    ],
                    r#"# Runbook: Deploy Payment Service

## When to Use
When deploying a new version of payment-service to production

## Prerequisites
- kubectl access to prod cluster
- GitHub release created

## Steps
1. Verify staging deployment succeeded
   - Check: https://staging.example.com/health
   - Expected: {"status": "ok"}

2. Create deployment in prod..."#,
                ),
                section(
                    "Deployment Procedures",
                    &[
                        "Pre-deployment checklist",
                        "Deployment steps (automated and manual)",
                        "Health check procedures",
                        "Rollback procedures",
                        "Post-deployment verification",
                        "Communication plan (who to notify)",
                    ],
                ),
                section(
                    "Monitoring & Alerts",
                    &[
                        "What metrics we monitor and why",
                        "Alert thresholds and their rationale",
                        "Dashboard locations and purposes",
                        "Log aggregation setup",
                        "How to interpret alerts",
                        "SLIs/SLOs/SLAs definitions",
                    ],
                ),
            ],
        },
        DocCategory {
            category: "Troubleshooting Documentation".into(),
            location: "Wiki".into(),
            sections: vec![
                section_with_example(
                    "Common Issues & Solutions",
                    &[
                        "Symptom: What the user/system sees",
                        "Cause: Why this happens",
                        "Solution: Step-by-step fix",
                        "Prevention: How to avoid in the future",
                        "Related issues and docs",
                    ],
                    r#"## Database Connection Timeouts

**Symptom:** Application logs show "connection timeout" errors

**Cause:** Connection pool exhausted due to long-running queries

**Solution:**
1. Identify long-running queries: `SELECT * FROM pg_stat_activity...`
2. Kill problematic queries: `SELECT pg_terminate_backend(pid)...`
3. Increase connection pool size in config.yaml

**Prevention:** Add query timeout limits in application code"#,
                ),
                section(
                    "Debug Guides",
                    &[
                        "How to access logs (where, what tools)",
                        "How to trace requests through the system",
                        "Common debugging tools and techniques",
                        "How to reproduce issues locally",
                        "Performance profiling procedures",
                    ],
                ),
                section(
                    "Known Issues & Limitations",
                    &[
                        "Current system limitations",
                        "Known bugs and workarounds",
                        "Browser/platform compatibility issues",
                        "Scale limitations (max users, requests, etc.)",
                        "Planned fixes and timeline",
                    ],
                ),
            ],
        },
        DocCategory {
            category: "Onboarding Documentation".into(),
            location: "Wiki".into(),
            sections: vec![
                section(
                    "New Engineer Onboarding",
                    &[
                        "Company tech stack overview",
                        "How to get access to tools and systems",
                        "Development environment setup (detailed)",
                        "Architecture overview (start here)",
                        "Code organization and conventions",
                        "Git workflow and PR process",
                        "Testing philosophy and practices",
                        "Deployment process overview",
                        "Who to ask for help (team contacts)",
                    ],
                ),
                section(
                    "Getting Started Guides",
                    &[
                        "Your first week checklist",
                        "How to pick up your first ticket",
                        "How to run the system locally",
                        "How to make your first contribution",
                        "Common beginner mistakes to avoid",
                    ],
                ),
            ],
        },
        DocCategory {
            category: "Security Documentation".into(),
            location: "Secure wiki (restricted access)".into(),
            sections: vec![
                section(
                    "Security Architecture",
                    &[
                        "Authentication mechanisms",
                        "Authorization model (roles, permissions)",
                        "Data encryption (at rest and in transit)",
                        "Secret management (where, how to rotate)",
                        "Network security (VPCs, firewalls)",
                        "Third-party security integrations",
                    ],
                ),
                section(
                    "Security Procedures",
                    &[
                        "How to report a security issue",
                        "Incident response playbook",
                        "How to rotate secrets/credentials",
                        "Security review checklist for PRs",
                        "Compliance requirements (SOC2, GDPR, etc.)",
                    ],
                ),
            ],
        },
        DocCategory {
            category: "Process Documentation".into(),
            location: "Wiki".into(),
            sections: vec![
                section(
                    "Development Workflows",
                    &[
                        "Git branching strategy (gitflow, trunk-based, etc.)",
                        "PR review process and standards",
                        "Code review checklist",
                        "Testing requirements before merge",
                        "CI/CD pipeline documentation",
                    ],
                ),
                section(
                    "Release Process",
                    &[
                        "Release cadence (weekly, bi-weekly, etc.)",
                        "How to create a release",
                        "Release checklist",
                        "Hotfix procedures",
                        "Communication process for releases",
                    ],
                ),
                section(
                    "Incident Management",
                    &[
                        "Severity definitions (P0, P1, P2, etc.)",
                        "On-call rotation and responsibilities",
                        "Incident response process",
                        "Post-incident review (postmortem) template",
                        "Escalation procedures",
                    ],
                ),
            ],
        },
    ]
}

fn build_best_practices() -> Vec<BestPractice> {
    vec![
        practice(
            "Keep it Close to Code",
            "READMEs and code-level docs should live in the repository, not a separate wiki",
            "Developers see docs when they see code, docs stay in sync with code changes",
        ),
        practice(
            "Document the 'Why', Not Just the 'What'",
            "Code shows what it does, documentation should explain why decisions were made",
            "Future developers need context to make good decisions",
        ),
        practice(
            "Use Templates",
            "Create templates for ADRs, runbooks, postmortems, API docs, etc.",
            "Consistency makes docs easier to find and use, reduces cognitive load",
        ),
        practice(
            "Make Documentation Discoverable",
            "Clear hierarchy, good search, prominent links from multiple entry points",
            "Documentation that can't be found might as well not exist",
        ),
        practice(
            "Treat Docs as Code",
            "Review documentation changes, version control, update with code changes",
            "Outdated documentation is worse than no documentation",
        ),
        practice(
            "Include Examples Everywhere",
            "API calls, configuration files, command outputs, error messages",
            "Examples are often the fastest way to understand something",
        ),
        practice(
            "Document What's NOT Supported",
            "Known limitations, edge cases, intentional design decisions",
            "Prevents confusion and repeated questions about why X doesn't work",
        ),
        practice(
            "Maintain a Single Source of Truth",
            "Don't duplicate information across multiple docs",
            "Duplicates get out of sync and create confusion about which is correct",
        ),
        practice(
            "Update Docs in the Same PR",
            "Code changes and documentation changes should happen together",
            "Prevents docs from falling behind, makes doc updates part of the culture",
        ),
        practice(
            "Regular Documentation Audits",
            "Quarterly review to find outdated, missing, or unclear documentation",
            "Documentation naturally decays without active maintenance",
        ),
    ]
}

fn build_schedule() -> Vec<MaintenanceWindow> {
    vec![
        MaintenanceWindow {
            cadence: Cadence::Daily,
            task: "Update docs when making code changes (README, code comments, API docs)".into(),
        },
        MaintenanceWindow {
            cadence: Cadence::Weekly,
            task: "Update runbooks based on incidents, review and close outdated tickets".into(),
        },
        MaintenanceWindow {
            cadence: Cadence::Monthly,
            task: "Review and update architecture diagrams, check for broken links".into(),
        },
        MaintenanceWindow {
            cadence: Cadence::Quarterly,
            task: "Full documentation audit, identify gaps, sunset outdated docs, gather feedback"
                .into(),
        },
    ]
}

fn build_templates() -> Vec<DocTemplate> {
    vec![
        DocTemplate {
            name: "README.md".into(),
            body: r#"# [Service Name]
Brief one-line description of what this service does

## Overview
- **Purpose**: What problem this solves
- **Owner**: Team responsible
- **Status**: Production/Beta/Deprecated

## Quick Start
```bash
# Prerequisites
npm install
cp .env.example .env

# Run locally
npm run dev
```

## Architecture
- **Tech Stack**: Node.js, PostgreSQL, Redis
- **Dependencies**: [List key services]
- **Deployment**: Docker + Kubernetes

## Environment Variables
| Variable | Description | Required | Example |
|----------|-------------|----------|---------|
| DATABASE_URL | Postgres connection | Yes | postgres://... |
| API_KEY | External service key | Yes | abc123... |

## Development
- **Setup**: See /docs/development.md
- **Testing**: `npm test`
- **Debugging**: See /docs/debugging.md

## Deployment
- **Staging**: Automatic on merge to main
- **Production**: Manual via GitHub Actions
- **Rollback**: See /docs/deployment.md

## Support
- **On-call**: @team-backend
- **Runbooks**: /docs/runbooks/
- **Monitoring**: [Dashboard Link]"#
                .into(),
        },
        DocTemplate {
            name: "ADR".into(),
            body: r#"# ADR-XXX: [Short Decision Title]

**Status:** Proposed | Accepted | Deprecated | Superseded
**Date:** YYYY-MM-DD
**Author:** [Name]
**Reviewers:** [Names]

## Context
What is the issue that we're seeing that is motivating this decision or change?

## Decision
What is the change that we're proposing or have agreed to implement?

## Consequences
What becomes easier or more difficult to do and any risks introduced by this change?

### Positive
- Benefit 1
- Benefit 2

### Negative
- Drawback 1
- Risk 2

## Alternatives Considered
What other options were evaluated?

## Implementation Notes
Any specific implementation details or migration steps.

## References
- [Link to related discussions]
- [Link to research/benchmarks]"#
                .into(),
        },
        DocTemplate {
            name: "Runbook".into(),
            body: r#"# Runbook: [Procedure Name]

## Overview
**Purpose**: What this runbook accomplishes
**Frequency**: When this is typically run
**Duration**: Expected time to complete
**Risk Level**: Low/Medium/High

## Prerequisites
- [ ] Access to production systems
- [ ] VPN connection established
- [ ] Backup completed (if applicable)

## Steps

### 1. Pre-checks
- [ ] Verify system health: [monitoring link]
- [ ] Check for ongoing incidents
- [ ] Notify team in #ops-channel

### 2. Main Procedure
```bash
# Step 2.1: Command description
kubectl get pods -n production
```

### 3. Verification
- [ ] Check logs: `kubectl logs -f deployment/service`
- [ ] Verify metrics: [dashboard link]
- [ ] Test key functionality: [test endpoint]

## Rollback Procedure
If something goes wrong:
1. Stop current operation
2. Run rollback commands:
   ```bash
   kubectl rollout undo deployment/service
   ```
3. Verify rollback successful
4. Escalate to on-call engineer

## Contacts
- **Primary**: @engineer-name
- **Escalation**: @team-lead
- **Emergency**: @on-call"#
                .into(),
        },
        DocTemplate {
            name: "API Documentation".into(),
            body: r#"# API Documentation: [Service Name]

## Base Information
- **Base URL**: https://api.example.com/v1
- **Authentication**: Bearer token
- **Rate Limiting**: 1000 requests/hour
- **Versioning**: URL path versioning

## Authentication
```bash
curl -H "Authorization: Bearer YOUR_TOKEN" \
     https://api.example.com/v1/endpoint
```

## Endpoints

### GET /users/{id}
**Purpose**: Retrieve user information

**Parameters**:
- `id` (path, required): User ID (integer)
- `include` (query, optional): Related data to include

**Response (200 OK)**:
```json
{
  "id": 123,
  "name": "John Doe",
  "email": "john@example.com"
}
```

**Error Responses**:
- `404`: User not found
- `401`: Invalid or missing token
- `429`: Rate limit exceeded

## Error Handling
All errors follow this format:
```json
{
  "error": {
    "code": "VALIDATION_ERROR",
    "message": "Invalid email format"
  }
}
```"#
                .into(),
        },
    ]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
