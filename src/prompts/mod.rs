//! Prompt catalogue
//!
//! Prompts are plain static data: a name, a category, argument metadata and a
//! template body. Rendering substitutes `{argName}` placeholders (plus the
//! built-in `{date}`) and leaves every other brace untouched, so templates can
//! embed JSON examples verbatim.

mod catalogue;

pub use catalogue::{CATEGORIES, PROMPTS};

use std::collections::HashMap;

/// Prefix clients may put in front of `<category>/<name>` prompt paths
const PATH_PREFIX: &str = "soloflow-mcp/";

#[derive(Debug)]
pub struct PromptArgument {
    pub name: &'static str,
    pub description: &'static str,
    pub required: bool,
    /// Substituted when an optional argument is not supplied
    pub default: &'static str,
    /// Values offered for completion
    pub suggestions: &'static [&'static str],
}

impl PromptArgument {
    pub const fn required(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            description,
            required: true,
            default: "",
            suggestions: &[],
        }
    }

    pub const fn optional(
        name: &'static str,
        description: &'static str,
        default: &'static str,
    ) -> Self {
        Self {
            name,
            description,
            required: false,
            default,
            suggestions: &[],
        }
    }

    pub const fn suggest(self, suggestions: &'static [&'static str]) -> Self {
        Self {
            name: self.name,
            description: self.description,
            required: self.required,
            default: self.default,
            suggestions,
        }
    }
}

/// Group of related prompts; `key` is the first segment of a prompt path
#[derive(Debug)]
pub struct PromptCategory {
    pub key: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug)]
pub struct PromptTemplate {
    pub name: &'static str,
    pub category: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub arguments: &'static [PromptArgument],
    pub template: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PromptError {
    #[error("Unknown prompt: {0}")]
    UnknownPrompt(String),

    #[error("Prompt '{prompt}' requires argument '{argument}'")]
    MissingArgument {
        prompt: &'static str,
        argument: &'static str,
    },
}

impl PromptTemplate {
    /// User-facing path, e.g. `task/add-task`
    pub fn path(&self) -> String {
        format!("{}/{}", self.category, self.name)
    }

    pub fn argument(&self, name: &str) -> Option<&'static PromptArgument> {
        self.arguments.iter().find(|a| a.name == name)
    }

    /// Render the template with the supplied arguments
    pub fn render(&self, args: &HashMap<String, String>) -> Result<String, PromptError> {
        let mut values: HashMap<&str, String> = HashMap::new();
        for arg in self.arguments {
            let supplied = args
                .get(arg.name)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty());
            match supplied {
                Some(value) => {
                    values.insert(arg.name, value.to_string());
                }
                None if arg.required => {
                    return Err(PromptError::MissingArgument {
                        prompt: self.name,
                        argument: arg.name,
                    })
                }
                None => {
                    values.insert(arg.name, arg.default.to_string());
                }
            }
        }
        values.insert("date", chrono::Local::now().format("%Y-%m-%d").to_string());

        Ok(substitute(self.template, |key| values.get(key).cloned()))
    }

    /// Completion candidates for `argument` starting with `prefix` (case-insensitive)
    pub fn complete(&self, argument: &str, prefix: &str) -> Vec<&'static str> {
        let prefix = prefix.to_lowercase();
        self.argument(argument)
            .map(|arg| {
                arg.suggestions
                    .iter()
                    .copied()
                    .filter(|s| s.to_lowercase().starts_with(&prefix))
                    .collect()
            })
            .unwrap_or_default()
    }
}

pub fn category(key: &str) -> Option<&'static PromptCategory> {
    CATEGORIES.iter().find(|c| c.key == key)
}

/// Prompts of one category, in catalogue order
pub fn in_category(key: &str) -> impl Iterator<Item = &'static PromptTemplate> + '_ {
    PROMPTS.iter().filter(move |p| p.category == key)
}

/// Look up a prompt by name or by `[/soloflow-mcp/]<category>/<name>` path
pub fn find(name_or_path: &str) -> Option<&'static PromptTemplate> {
    let trimmed = name_or_path.trim_start_matches('/');
    let trimmed = trimmed.strip_prefix(PATH_PREFIX).unwrap_or(trimmed);

    match trimmed.split_once('/') {
        Some((category, name)) => PROMPTS
            .iter()
            .find(|p| p.category == category && p.name == name),
        None => PROMPTS.iter().find(|p| p.name == trimmed),
    }
}

/// Replace `{key}` where `lookup` knows the key; leave other braces alone
fn substitute(template: &str, lookup: impl Fn(&str) -> Option<String>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];

        let replacement = after.find('}').and_then(|end| {
            let key = &after[..end];
            let is_key = !key.is_empty()
                && key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
            if is_key {
                lookup(key).map(|value| (value, end))
            } else {
                None
            }
        });

        match replacement {
            Some((value, end)) => {
                out.push_str(&value);
                rest = &after[end + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DocumentType;

    fn args(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_names_are_unique() {
        let mut names: Vec<_> = PROMPTS.iter().map(|p| p.name).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), PROMPTS.len());
    }

    #[test]
    fn test_every_prompt_has_a_known_category() {
        for prompt in PROMPTS {
            assert!(
                category(prompt.category).is_some(),
                "{} has unknown category {}",
                prompt.name,
                prompt.category
            );
        }
        for c in CATEGORIES {
            assert!(in_category(c.key).next().is_some(), "{} is empty", c.key);
        }
    }

    #[test]
    fn test_catalogue_paths_resolve() {
        for path in [
            "core/generate-docs",
            "core/setup-workspace",
            "role/analyst-mode",
            "role/project-manager-mode",
            "task/breakdown-requirements",
            "task/estimate-tasks",
            "requirements/prioritize-requirements",
            "design/create-ui",
            "design/database-schema",
            "development/fix-bug",
            "testing/performance-test",
            "release/monitor-deployment",
            "docs/create-doc-template",
        ] {
            let prompt = find(path).unwrap_or_else(|| panic!("{} not found", path));
            assert_eq!(prompt.path(), path);
        }
        assert_eq!(in_category("role").count(), 5);
        assert_eq!(in_category("release").count(), 5);
    }

    #[test]
    fn test_placeholders_are_declared_arguments() {
        for prompt in PROMPTS {
            let unknown = std::cell::RefCell::new(Vec::new());
            substitute(prompt.template, |key| {
                if key != "date" && prompt.argument(key).is_none() {
                    unknown.borrow_mut().push(key.to_string());
                }
                None
            });
            assert!(unknown.borrow().is_empty(), "{}: {:?}", prompt.name, unknown.borrow());
        }
    }

    #[test]
    fn test_every_optional_prompt_renders_without_arguments() {
        for prompt in PROMPTS.iter().filter(|p| p.arguments.iter().all(|a| !a.required)) {
            let text = prompt.render(&HashMap::new()).unwrap();
            assert!(!text.contains("{date}"), "{}", prompt.name);
        }

        let text = find("prioritize-requirements")
            .unwrap()
            .render(&HashMap::new())
            .unwrap();
        assert!(text.contains("MoSCoW"));

        let text = find("setup-workspace")
            .unwrap()
            .render(&args(&[("backend", "Rust + axum")]))
            .unwrap();
        assert!(text.contains("| Backend | Rust + axum |"));
        assert!(text.contains("| Frontend | NA |"));
    }

    #[test]
    fn test_find_by_name_and_path() {
        assert_eq!(find("add-task").unwrap().name, "add-task");
        assert_eq!(find("task/add-task").unwrap().name, "add-task");
        assert_eq!(find("/soloflow-mcp/task/add-task").unwrap().name, "add-task");
        assert!(find("core/add-task").is_none());
        assert!(find("nope").is_none());
    }

    #[test]
    fn test_substitute_leaves_json_alone() {
        let out = substitute(r#"{ "a": "{x}" } {y} {}"#, |k| {
            (k == "x").then(|| "X".to_string())
        });
        assert_eq!(out, r#"{ "a": "X" } {y} {}"#);
    }

    #[test]
    fn test_render_substitutes_arguments() {
        let prompt = find("add-task").unwrap();
        let text = prompt
            .render(&args(&[("taskTitle", "Write docs"), ("priority", "high")]))
            .unwrap();
        assert!(text.contains("Write docs"));
        assert!(text.contains("high"));
        assert!(!text.contains("{taskTitle}"));
        assert!(!text.contains("{priority}"));
        assert!(!text.contains("{date}"));
    }

    #[test]
    fn test_render_uses_defaults() {
        let prompt = find("deployment-checklist").unwrap();
        let text = prompt.render(&HashMap::new()).unwrap();
        assert!(text.contains("production"));
    }

    #[test]
    fn test_render_requires_doc_type() {
        let prompt = find("create-doc-template").unwrap();
        let err = prompt.render(&HashMap::new()).unwrap_err();
        assert_eq!(
            err,
            PromptError::MissingArgument {
                prompt: "create-doc-template",
                argument: "docType"
            }
        );

        let text = prompt.render(&args(&[("docType", "ui_design")])).unwrap();
        assert!(text.contains("ui_design"));
    }

    #[test]
    fn test_doc_type_suggestions_match_document_types() {
        let prompt = find("create-doc-template").unwrap();
        let all = prompt.complete("docType", "");
        let expected: Vec<&str> = DocumentType::ALL.iter().map(|t| t.as_str()).collect();
        assert_eq!(all, expected);
    }

    #[test]
    fn test_complete() {
        let prompt = find("code-review-checklist").unwrap();
        assert_eq!(prompt.complete("codeLanguage", "ty"), vec!["TypeScript"]);
        assert!(prompt.complete("unknown", "").is_empty());

        let prompt = find("add-task").unwrap();
        assert_eq!(prompt.complete("priority", "h"), vec!["high"]);

        let prompt = find("commit-changes").unwrap();
        assert_eq!(prompt.complete("commitType", "f"), vec!["feat", "fix"]);
    }
}
