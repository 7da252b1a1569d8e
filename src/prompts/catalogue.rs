use super::{PromptArgument as Arg, PromptCategory, PromptTemplate};
use crate::models::DocumentType;

pub static CATEGORIES: &[PromptCategory] = &[
    PromptCategory {
        key: "core",
        title: "Core Functions",
        description: "Essential project management functions",
    },
    PromptCategory {
        key: "role",
        title: "Role-based Functions",
        description: "Specialized functions for different development roles",
    },
    PromptCategory {
        key: "task",
        title: "Task Management",
        description: "Advanced task management and breakdown functions",
    },
    PromptCategory {
        key: "requirements",
        title: "Requirements Analysis",
        description: "Requirements analysis and management functions",
    },
    PromptCategory {
        key: "design",
        title: "Design Functions",
        description: "UI, architecture, API and data design functions",
    },
    PromptCategory {
        key: "development",
        title: "Development Functions",
        description: "Code implementation and development functions",
    },
    PromptCategory {
        key: "testing",
        title: "Testing Functions",
        description: "Testing and quality assurance functions",
    },
    PromptCategory {
        key: "release",
        title: "Release Management",
        description: "Complete release and deployment lifecycle management",
    },
    PromptCategory {
        key: "docs",
        title: "Document Templates",
        description: "Starting points for the project documents",
    },
];

const PRIORITIES: &[&str] = &["high", "medium", "low"];

const TASK_CATEGORIES: &[&str] = &[
    "frontend",
    "backend",
    "testing",
    "documentation",
    "deployment",
    "general",
];

const LANGUAGES: &[&str] = &[
    "JavaScript",
    "TypeScript",
    "Python",
    "Java",
    "C++",
    "C#",
    "Go",
    "Rust",
    "PHP",
    "Ruby",
    "Swift",
    "Kotlin",
];

const ENVIRONMENTS: &[&str] = &["development", "staging", "production", "testing", "local"];

const SEVERITIES: &[&str] = &["low", "medium", "high", "critical"];

const PRIORITY_METHODS: &[&str] = &["MoSCoW", "Kano", "RICE", "Value vs Effort"];

const COMMIT_TYPES: &[&str] = &["feat", "fix", "docs", "style", "refactor", "test", "chore"];

const RELEASE_TYPES: &[&str] = &["major", "minor", "patch"];

const TEST_TYPES: &[&str] = &["unit", "integration", "e2e", "performance", "All"];

pub static PROMPTS: &[PromptTemplate] = &[
    // core
    PromptTemplate {
        name: "init-project",
        category: "core",
        title: "Project Initialization",
        description: "Initialize project documentation structure and create basic document templates",
        arguments: &[],
        template: r#"# Project Initialization

1. Call `init` with the absolute project root to create `.soloflow/` and the editor rule file:
   { "tool": "init", "args": { "projectRoot": "/path/to/your/project" } }
2. Call `list` to see which documents already exist.
3. For each missing document, write a first version with `update`. Start with:
   - `overview` - what the project is and who it is for
   - `requirements` - functional and non-functional requirements
   - `tasks` - a checklist of the first pieces of work
4. Start every document with a `# Title` line.

Initialized on {date}.
"#,
    },
    PromptTemplate {
        name: "check-project-status",
        category: "core",
        title: "Check Project Status",
        description: "Analyze project documentation completeness and task completion progress",
        arguments: &[],
        template: r#"# Project Status Check ({date})

1. Call `list` and note which of the eight document types are missing:
   overview, requirements, system_architecture, test_strategy, ui_design, tasks, deployment, notes.
2. Call `read` with `type` = `tasks` and count `- [x]` against `- [ ]` items.
3. Read `requirements` and check every requirement has at least one task.
4. Report:
   - documentation completeness (present / 8)
   - task progress (done / total, percentage)
   - requirements without tasks
   - the next three tasks to pick up
"#,
    },
    PromptTemplate {
        name: "generate-docs",
        category: "core",
        title: "Generate Documentation",
        description: "Write documentation for an existing implementation",
        arguments: &[
            Arg::optional("docType", "Kind of documentation", "Implementation"),
            Arg::optional("component", "Component to document", "Current Implementation"),
        ],
        template: r#"# Generate {docType} Documentation: {component}

1. Read `system_architecture` and `notes` for existing context.
2. Inspect the code of {component} and describe its purpose, public interface and dependencies.
3. Add the result as a `## {component}` section of `system_architecture` with `update`, keeping every other section.
4. Log `{date}: documented {component}` in `notes`.
"#,
    },
    PromptTemplate {
        name: "setup-workspace",
        category: "core",
        title: "Setup Workspace",
        description: "Record the technology stack and set up the development workspace",
        arguments: &[
            Arg::optional("frontend", "Frontend technology", "NA"),
            Arg::optional("backend", "Backend technology", "NA"),
            Arg::optional("testing", "Testing tools", "NA"),
            Arg::optional("deployment", "Deployment platform", "NA"),
            Arg::optional("database", "Database", "NA"),
        ],
        template: r#"# Workspace Setup

| Layer | Choice |
|---|---|
| Frontend | {frontend} |
| Backend | {backend} |
| Testing | {testing} |
| Deployment | {deployment} |
| Database | {database} |

1. Call `init` if `.soloflow/` does not exist yet.
2. Write the table above into a `## Technology Stack` section of `system_architecture`.
3. Add one setup task per layer that is not `NA` to `tasks`.
4. Note the setup date ({date}) in `notes`.
"#,
    },
    // role
    PromptTemplate {
        name: "analyst-mode",
        category: "role",
        title: "Analyst Mode",
        description: "Act as a business analyst focused on requirements",
        arguments: &[],
        template: r#"# Analyst Mode

You are the project's business analyst.
- Read `overview` and `requirements` before answering.
- Turn every request into clear, testable requirements with acceptance criteria.
- Flag ambiguities and conflicts instead of guessing.
- Save agreed changes to `requirements` with `update`.
"#,
    },
    PromptTemplate {
        name: "architect-mode",
        category: "role",
        title: "Architect Mode",
        description: "Act as a system architect focused on structure and trade-offs",
        arguments: &[],
        template: r#"# Architect Mode

You are the project's system architect.
- Read `requirements` and `system_architecture` before answering.
- Propose components, interfaces and data flows, and state the trade-offs.
- Keep decisions consistent with the existing architecture or record why they change.
- Save decisions to `system_architecture` with `update`.
"#,
    },
    PromptTemplate {
        name: "developer-mode",
        category: "role",
        title: "Developer Mode",
        description: "Act as a developer implementing planned tasks",
        arguments: &[],
        template: r#"# Developer Mode

You are a developer on this project.
- Read `tasks` and pick the highest-priority unchecked item.
- Follow `system_architecture` for structure and naming.
- Write tests alongside the code as described in `test_strategy`.
- Check the task off in `tasks` when it is done.
"#,
    },
    PromptTemplate {
        name: "tester-mode",
        category: "role",
        title: "Tester Mode",
        description: "Act as a QA engineer focused on test coverage",
        arguments: &[],
        template: r#"# Tester Mode

You are the project's QA engineer.
- Read `requirements` and `test_strategy` before answering.
- Derive test cases for each requirement, including edge cases and failure paths.
- Report gaps between requirements and tests.
- Keep `test_strategy` current with `update`.
"#,
    },
    PromptTemplate {
        name: "project-manager-mode",
        category: "role",
        title: "Project Manager Mode",
        description: "Act as a project manager tracking scope and progress",
        arguments: &[],
        template: r#"# Project Manager Mode

You are the project manager.
- Read `overview`, `requirements` and `tasks` before answering.
- Track progress, risks and scope changes.
- Keep priorities in `tasks` aligned with the requirements.
- Summarize status changes in `notes` with the date.
"#,
    },
    // task
    PromptTemplate {
        name: "add-task",
        category: "task",
        title: "Add Task",
        description: "Add a new task to the project task list",
        arguments: &[
            Arg::optional("taskTitle", "Task title", "New task"),
            Arg::optional("priority", "Task priority", "medium").suggest(PRIORITIES),
            Arg::optional("category", "Task category", "general").suggest(TASK_CATEGORIES),
            Arg::optional(
                "estimatedTime",
                "Estimated completion time, e.g. '1h', '2d', '1w'",
                "unestimated",
            ),
        ],
        template: r#"# Add Task

- Title: {taskTitle}
- Priority: {priority}
- Category: {category}
- Estimate: {estimatedTime}
- Created: {date}

1. Call `read` with `type` = `tasks`.
2. Add `- [ ] {taskTitle} ({category}, {estimatedTime})` under the `## {priority} priority` heading, creating the heading if needed.
3. Keep every existing task unchanged and send the whole document back with `update`.
"#,
    },
    PromptTemplate {
        name: "breakdown-requirements",
        category: "task",
        title: "Break Down Requirements",
        description: "Turn requirements into implementable tasks",
        arguments: &[],
        template: r#"# Break Down Requirements

1. Read `requirements` and `tasks`.
2. For each requirement without tasks, list the smallest independently deliverable steps.
3. Tag each task with a priority and a category, and reference its requirement.
4. Append the new tasks to `tasks` with `update`.
"#,
    },
    PromptTemplate {
        name: "breakdown-architecture",
        category: "task",
        title: "Break Down Architecture",
        description: "Turn architecture components into implementation tasks",
        arguments: &[],
        template: r#"# Break Down Architecture

1. Read `system_architecture` and `tasks`.
2. For each component, list the tasks needed to build, integrate and test it.
3. Order them by dependency so foundations come first.
4. Append the tasks to `tasks` with `update`.
"#,
    },
    PromptTemplate {
        name: "create-epic",
        category: "task",
        title: "Create Epic",
        description: "Group related work into an epic",
        arguments: &[],
        template: r#"# Create Epic

1. Read `requirements` and `tasks`.
2. Name the epic, state its goal and the requirements it covers.
3. List the stories that make it up and the definition of done.
4. Add it as a `## Epic: <name>` section of `tasks` with `update`.
"#,
    },
    PromptTemplate {
        name: "create-story",
        category: "task",
        title: "Create User Story",
        description: "Write a user story with acceptance criteria",
        arguments: &[],
        template: r#"# Create User Story

1. Read `requirements` for the relevant feature.
2. Write the story as "As a <role>, I want <goal> so that <benefit>".
3. Add acceptance criteria as a checklist.
4. Add the story and its tasks to `tasks` with `update`.
"#,
    },
    PromptTemplate {
        name: "estimate-tasks",
        category: "task",
        title: "Estimate Tasks",
        description: "Estimate the effort of open tasks",
        arguments: &[],
        template: r#"# Estimate Tasks

1. Read `tasks` and `system_architecture`.
2. For every unchecked task without an estimate, add one (`1h`, `2d`, `1w`).
3. Call out tasks that are too large to estimate and split them.
4. Save the estimates to `tasks` with `update` and note the total in `notes`.
"#,
    },
    // requirements
    PromptTemplate {
        name: "analyze-requirements",
        category: "requirements",
        title: "Analyze Requirements",
        description: "Analyze and structure the project requirements",
        arguments: &[
            Arg::optional("domain", "Business domain", "General"),
            Arg::optional("scope", "Analysis scope", "Full System"),
        ],
        template: r#"# Requirements Analysis: {domain} ({scope})

1. Read `overview` and `requirements`.
2. Identify stakeholders, functional requirements and non-functional requirements for {scope}.
3. Give each requirement an ID, a description and acceptance criteria.
4. Save the structured result to `requirements` with `update` and add `{date}: analyzed` to its history.
"#,
    },
    PromptTemplate {
        name: "validate-requirements",
        category: "requirements",
        title: "Validate Requirements",
        description: "Check requirements for completeness and consistency",
        arguments: &[Arg::optional("validationType", "Kind of validation", "Comprehensive")],
        template: r#"# {validationType} Requirements Validation

1. Read `requirements`.
2. Check each requirement is clear, testable, feasible and free of conflicts with the others.
3. List problems with the requirement ID and a suggested fix.
4. Record the findings in `notes` dated {date}.
"#,
    },
    PromptTemplate {
        name: "prioritize-requirements",
        category: "requirements",
        title: "Prioritize Requirements",
        description: "Rank requirements with a prioritization method",
        arguments: &[Arg::optional("priorityMethod", "Prioritization method", "MoSCoW")
            .suggest(PRIORITY_METHODS)],
        template: r#"# Prioritize Requirements ({priorityMethod})

1. Read `requirements`.
2. Rank every requirement using {priorityMethod} and give a one-line reason.
3. Update `requirements` with the ranking and reorder `tasks` to match.
"#,
    },
    // design
    PromptTemplate {
        name: "create-ui",
        category: "design",
        title: "Create UI Design",
        description: "Design a user interface component or page",
        arguments: &[
            Arg::optional("component", "UI component", "Main Interface"),
            Arg::optional("page", "Page", "Home Page"),
            Arg::optional("designType", "Kind of design", "User Interface"),
        ],
        template: r#"# {designType}: {component} on {page}

1. Read `requirements` and `ui_design`.
2. Describe the layout, states and interactions of {component} on {page}.
3. Note accessibility and responsive behaviour.
4. Add the design as a section of `ui_design` with `update`.
"#,
    },
    PromptTemplate {
        name: "system-architecture",
        category: "design",
        title: "Design System Architecture",
        description: "Design the overall system architecture",
        arguments: &[
            Arg::optional("systemType", "Kind of system", "Web Application"),
            Arg::optional("scale", "Expected scale", "Medium Scale"),
        ],
        template: r#"# System Architecture: {systemType} ({scale})

1. Read `requirements`.
2. Define components, their responsibilities and how they communicate.
3. Choose storage, deployment topology and scaling approach for {scale}.
4. Save the design to `system_architecture` with `update`.
"#,
    },
    PromptTemplate {
        name: "api-interface",
        category: "design",
        title: "Design API Interface",
        description: "Design an API and its contracts",
        arguments: &[
            Arg::optional("apiType", "Kind of API", "REST API"),
            Arg::optional("version", "API version", "v1"),
        ],
        template: r#"# {apiType} Design ({version})

1. Read `requirements` and `system_architecture`.
2. List endpoints or operations with inputs, outputs and error cases.
3. Describe authentication, versioning and pagination rules.
4. Add an `## API {version}` section to `system_architecture` with `update`.
"#,
    },
    PromptTemplate {
        name: "database-schema",
        category: "design",
        title: "Design Database Schema",
        description: "Design the data model and schema",
        arguments: &[
            Arg::optional("databaseType", "Kind of database", "Relational"),
            Arg::optional("schemaType", "Schema style", "Normalized"),
        ],
        template: r#"# {databaseType} Schema ({schemaType})

1. Read `requirements` and `system_architecture`.
2. Define entities, fields, keys and relationships.
3. Note indexes and migration strategy.
4. Add a `## Data Model` section to `system_architecture` with `update`.
"#,
    },
    PromptTemplate {
        name: "review-design",
        category: "design",
        title: "Review Design",
        description: "Review designs against the requirements",
        arguments: &[
            Arg::optional("reviewType", "Kind of review", "Comprehensive"),
            Arg::optional("designType", "Designs to review", "All Designs"),
        ],
        template: r#"# {reviewType} Design Review: {designType}

1. Read `requirements`, `system_architecture` and `ui_design`.
2. Check every requirement is covered and the designs agree with each other.
3. List risks and gaps with suggested changes.
4. Record the review in `notes` dated {date}.
"#,
    },
    // development
    PromptTemplate {
        name: "code-review-checklist",
        category: "development",
        title: "Code Review Checklist",
        description: "Provide a standard checklist for code review",
        arguments: &[
            Arg::optional("codeLanguage", "Programming language (optional)", "any language")
                .suggest(LANGUAGES),
        ],
        template: r#"# Code Review Checklist ({codeLanguage})

- [ ] The change matches a task in `tasks` and a requirement in `requirements`
- [ ] Naming and structure follow the conventions in `system_architecture`
- [ ] Errors are handled and reported, not swallowed
- [ ] Inputs from outside the process are validated
- [ ] New behaviour is covered by tests described in `test_strategy`
- [ ] No secrets, debug output or commented-out code
- [ ] Idiomatic {codeLanguage}: lint and formatter pass

Record notable findings in `notes` with the date {date}.
"#,
    },
    PromptTemplate {
        name: "write-code",
        category: "development",
        title: "Write Code",
        description: "Implement a feature from the task list",
        arguments: &[
            Arg::optional("feature", "Feature to implement", "New Feature"),
            Arg::optional("language", "Programming language", "TypeScript").suggest(LANGUAGES),
            Arg::optional("framework", "Framework", "no specific framework"),
        ],
        template: r#"# Implement {feature}

Language: {language}, framework: {framework}.

1. Read `requirements`, `system_architecture` and `tasks` for {feature}.
2. Implement it following the existing structure, with tests.
3. Check off the matching tasks in `tasks` with `update`.
"#,
    },
    PromptTemplate {
        name: "fix-bug",
        category: "development",
        title: "Fix Bug",
        description: "Diagnose and fix a bug",
        arguments: &[
            Arg::optional("bugDescription", "What goes wrong", "Bug Description"),
            Arg::optional("severity", "Severity", "medium").suggest(SEVERITIES),
            Arg::optional("component", "Affected component", "Unknown"),
        ],
        template: r#"# Fix Bug ({severity}): {bugDescription}

Component: {component}

1. Reproduce the bug and write a failing test.
2. Find the root cause and fix it.
3. Confirm the test passes and nothing else regressed.
4. Log `{date}: fixed {bugDescription}` in `notes`.
"#,
    },
    PromptTemplate {
        name: "refactor-code",
        category: "development",
        title: "Refactor Code",
        description: "Restructure code without changing behaviour",
        arguments: &[
            Arg::optional("component", "Component to refactor", "Component"),
            Arg::optional("reason", "Why it needs refactoring", "Improve code quality"),
        ],
        template: r#"# Refactor {component}

Reason: {reason}

1. Make sure {component} is covered by tests before changing it.
2. Refactor in small steps, running the tests after each.
3. Update `system_architecture` if the structure changed.
"#,
    },
    // testing
    PromptTemplate {
        name: "create-test-plan",
        category: "testing",
        title: "Create Test Plan",
        description: "Plan the tests for a feature",
        arguments: &[
            Arg::optional("feature", "Feature under test", "Feature"),
            Arg::optional("testType", "Kind of testing", "Comprehensive"),
        ],
        template: r#"# {testType} Test Plan: {feature}

1. Read `requirements` and `test_strategy`.
2. List test cases for {feature}: happy paths, edge cases and failures.
3. Assign each case a level (unit, integration, e2e).
4. Add the plan to `test_strategy` with `update`.
"#,
    },
    PromptTemplate {
        name: "write-unit-tests",
        category: "testing",
        title: "Write Unit Tests",
        description: "Write unit tests for a component",
        arguments: &[
            Arg::optional("component", "Component under test", "Component"),
            Arg::optional("language", "Programming language", "TypeScript").suggest(LANGUAGES),
            Arg::optional("framework", "Test framework", "Jest"),
        ],
        template: r#"# Unit Tests for {component} ({language}, {framework})

1. Read `test_strategy` for conventions.
2. Cover every public function of {component}, including error paths.
3. Keep tests independent and fast.
4. Check off the matching tasks in `tasks`.
"#,
    },
    PromptTemplate {
        name: "run-tests",
        category: "testing",
        title: "Run Tests",
        description: "Run the test suite and triage failures",
        arguments: &[
            Arg::optional("testType", "Tests to run", "All").suggest(TEST_TYPES),
            Arg::optional("environment", "Environment", "Development"),
        ],
        template: r#"# Run {testType} Tests ({environment})

1. Run the {testType} tests in {environment}.
2. For each failure, note the test, the error and a likely cause.
3. Add a task to `tasks` for every failure that is not fixed immediately.
"#,
    },
    PromptTemplate {
        name: "test-report",
        category: "testing",
        title: "Test Report",
        description: "Summarize a test run",
        arguments: &[
            Arg::optional("testRun", "Test run", "Test Run"),
            Arg::optional("environment", "Environment", "Development"),
        ],
        template: r#"# Test Report: {testRun} ({environment})

- Date: {date}
- Passed / failed / skipped
- Failures with causes
- Coverage changes

Append the report to `test_strategy` under `## Test Reports` with `update`.
"#,
    },
    PromptTemplate {
        name: "performance-test",
        category: "testing",
        title: "Performance Test",
        description: "Plan and evaluate a performance test",
        arguments: &[
            Arg::optional("component", "Component under test", "Application"),
            Arg::optional("loadType", "Kind of load", "Load Testing"),
        ],
        template: r#"# Performance Test: {component} ({loadType})

1. Read `requirements` for performance targets.
2. Define the scenario, load profile and metrics to collect.
3. Compare results with the targets and list bottlenecks.
4. Record the results in `test_strategy` dated {date}.
"#,
    },
    // release
    PromptTemplate {
        name: "deployment-checklist",
        category: "release",
        title: "Deployment Checklist",
        description: "Provide a standard checklist for deployment preparation",
        arguments: &[
            Arg::optional("environment", "Target environment (optional)", "production")
                .suggest(ENVIRONMENTS),
        ],
        template: r#"# Deployment Checklist: {environment}

1. Call `read` with `type` = `deployment` for the current procedure.
2. Before deploying to {environment}:
   - [ ] all tasks planned for this release are checked off in `tasks`
   - [ ] the test suite passes
   - [ ] configuration and secrets for {environment} are in place
   - [ ] a rollback plan exists
3. After deploying:
   - [ ] smoke tests pass
   - [ ] monitoring shows no new errors
4. Append `{date}: deployed to {environment}` to the history section of `deployment` with `update`.
"#,
    },
    PromptTemplate {
        name: "commit-changes",
        category: "release",
        title: "Commit Changes",
        description: "Write a conventional commit for the current changes",
        arguments: &[
            Arg::optional("commitType", "Commit type", "feat").suggest(COMMIT_TYPES),
            Arg::optional("scope", "Commit scope", "general"),
        ],
        template: r#"# Commit Changes

1. Review the staged changes and the tasks they complete.
2. Write the message as `{commitType}({scope}): <summary>` with a short body.
3. Check off the completed tasks in `tasks`.
"#,
    },
    PromptTemplate {
        name: "create-release",
        category: "release",
        title: "Create Release",
        description: "Prepare a versioned release",
        arguments: &[
            Arg::optional("version", "Release version", "1.0.0"),
            Arg::optional("releaseType", "Release type", "minor").suggest(RELEASE_TYPES),
        ],
        template: r#"# Release {version} ({releaseType})

1. Read `tasks` and collect what was completed since the last release.
2. Write release notes grouped by features, fixes and breaking changes.
3. Follow the procedure in `deployment`.
4. Append `{date}: released {version}` to `deployment` with `update`.
"#,
    },
    PromptTemplate {
        name: "rollback-plan",
        category: "release",
        title: "Rollback Plan",
        description: "Plan a rollback of a release",
        arguments: &[
            Arg::optional("version", "Version to roll back", "Current Version"),
            Arg::optional("reason", "Reason for the rollback", "Issues detected"),
        ],
        template: r#"# Rollback Plan: {version}

Reason: {reason}

1. Identify the last known good version and the data changes since.
2. List the rollback steps and how to verify each.
3. Record the plan in `deployment` and the incident in `notes` dated {date}.
"#,
    },
    PromptTemplate {
        name: "monitor-deployment",
        category: "release",
        title: "Monitor Deployment",
        description: "Monitor a deployment after release",
        arguments: &[
            Arg::optional("environment", "Environment", "Production").suggest(ENVIRONMENTS),
            Arg::optional("duration", "Monitoring window", "24 hours"),
        ],
        template: r#"# Monitor Deployment: {environment} ({duration})

1. Watch error rates, latency and resource usage in {environment} for {duration}.
2. Compare them with the baseline before the release.
3. Record observations in `deployment` and open tasks for any regressions.
"#,
    },
    // docs
    PromptTemplate {
        name: "create-doc-template",
        category: "docs",
        title: "Create Document Template",
        description: "Create a standard template for a specific document type",
        arguments: &[Arg::required("docType", "Document type").suggest(&DocumentType::NAMES)],
        template: r#"# Create `{docType}` Template

1. Call `read` with `type` = `{docType}`. If it already has content, stop and suggest edits instead.
2. Draft a markdown template for `{docType}`:
   - first line `# <Project name> - {docType}`
   - a short purpose paragraph
   - the sections this kind of document usually needs, each with placeholder bullets
   - an `## Update History` section starting with `{date}: created`
3. Save it:
   { "tool": "update", "args": { "projectRoot": "/path/to/your/project", "type": "{docType}", "content": "<template>" } }
"#,
    },
];
