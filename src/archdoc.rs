//! Architecture document parsing.
//!
//! Two independent scans over the normalized document text: a delimited YAML
//! rule block, and line-by-line component declarations. A missing rule block
//! is normal (empty rule set); a present but unparseable one is the single
//! hard failure of the parsing layer, since rule evaluation cannot proceed
//! meaningfully without it.

use crate::core::{ArchitectureModel, CatalogEntry, Rule};
use crate::errors::{ArchmapError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

/// Tokens that qualify a `key: value` line as a component declaration.
const ROLE_TOKENS: [&str; 4] = ["Controller", "Service", "Repository", "Entity"];

static RULE_BLOCK_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)---(.*?)---").unwrap());

#[derive(Debug, Default, Deserialize)]
struct RuleBlock {
    #[serde(default)]
    rules: Vec<Rule>,
}

/// Parse the architecture document text into a normalized model.
///
/// Fails only with [`ArchmapError::MalformedRuleBlock`]; callers that want
/// mapping results regardless can recover with [`ArchitectureModel::empty`]
/// rules via [`parse_architecture_doc_lenient`].
pub fn parse_architecture_doc(text: &str) -> Result<ArchitectureModel> {
    Ok(ArchitectureModel {
        components: scan_components(text),
        rules: parse_rule_block(text)?,
        raw_text: text.to_string(),
    })
}

/// Like [`parse_architecture_doc`] but degrades a malformed rule block to an
/// empty rule set, reporting whether it did so.
pub fn parse_architecture_doc_lenient(text: &str) -> (ArchitectureModel, bool) {
    match parse_architecture_doc(text) {
        Ok(model) => (model, false),
        Err(_) => (
            ArchitectureModel {
                components: scan_components(text),
                rules: Vec::new(),
                raw_text: text.to_string(),
            },
            true,
        ),
    }
}

fn parse_rule_block(text: &str) -> Result<Vec<Rule>> {
    let Some(captures) = RULE_BLOCK_RE.captures(text) else {
        return Ok(Vec::new());
    };
    let block: RuleBlock = serde_yaml::from_str(&captures[1])
        .map_err(|e| ArchmapError::MalformedRuleBlock(e.to_string()))?;
    Ok(block.rules)
}

/// Catalog semantics are those of an insertion-ordered map: a duplicate key
/// keeps its first position but takes the later description. Every line of
/// the document is scanned, rule-block lines included.
fn scan_components(text: &str) -> Vec<CatalogEntry> {
    let mut components: Vec<CatalogEntry> = Vec::new();
    for entry in text.lines().filter_map(parse_component_line) {
        match components.iter_mut().find(|c| c.name == entry.name) {
            Some(existing) => existing.description = entry.description,
            None => components.push(entry),
        }
    }
    components
}

fn parse_component_line(line: &str) -> Option<CatalogEntry> {
    if !ROLE_TOKENS.iter().any(|token| line.contains(token)) {
        return None;
    }
    let (name, description) = line.split_once(':')?;
    Some(CatalogEntry {
        name: name.trim().to_string(),
        description: description.trim().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    #[test]
    fn parses_catalog_and_rules() {
        let doc = indoc! {"
            Shopping Cart Architecture

            UserController: handles HTTP requests, a Controller
            UserService: business logic, a Service layer
            UserRepository: persistence, a Repository

            ---
            rules:
              - component: UserService
                must_depend_on: UserRepository
              - component: UserController
                must_depend_on: UserService
            ---
        "};

        let model = parse_architecture_doc(doc).unwrap();
        // Three declared components plus the rule-block lines that also look
        // like declarations ("- component", "must_depend_on").
        assert_eq!(model.components.len(), 5);
        assert_eq!(model.components[0].name, "UserController");
        assert_eq!(
            model.components[0].description,
            "handles HTTP requests, a Controller"
        );
        assert_eq!(model.rules.len(), 2);
        assert_eq!(model.rules[0].component, "UserService");
        assert_eq!(model.rules[0].must_depend_on.as_deref(), Some("UserRepository"));
        assert_eq!(model.raw_text, doc);
    }

    #[test]
    fn missing_rule_block_is_not_an_error() {
        let model = parse_architecture_doc("UserService: a Service\n").unwrap();
        assert!(model.rules.is_empty());
        assert_eq!(model.components.len(), 1);
    }

    #[test]
    fn malformed_rule_block_is_a_hard_failure() {
        let doc = "---\nrules: [unclosed\n---\n";
        let err = parse_architecture_doc(doc).unwrap_err();
        assert!(matches!(err, crate::errors::ArchmapError::MalformedRuleBlock(_)));
    }

    #[test]
    fn lenient_parse_recovers_with_empty_rules() {
        let doc = "UserService: a Service\n---\nrules: [unclosed\n---\n";
        let (model, degraded) = parse_architecture_doc_lenient(doc);
        assert!(degraded);
        assert!(model.rules.is_empty());
        assert_eq!(model.components.len(), 1);
    }

    #[test]
    fn lines_without_role_tokens_are_ignored() {
        let doc = "Introduction: general prose\nDate: 2024-01-01\n";
        let model = parse_architecture_doc(doc).unwrap();
        assert!(model.components.is_empty());
    }

    #[test]
    fn lines_without_separator_are_ignored() {
        let model = parse_architecture_doc("The Service layer calls repositories\n").unwrap();
        assert!(model.components.is_empty());
    }

    #[test]
    fn catalog_order_follows_document_order() {
        let doc = "B: a Service\nA: a Controller\n";
        let model = parse_architecture_doc(doc).unwrap();
        let names: Vec<_> = model.components.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["B", "A"]);
    }

    #[test]
    fn duplicate_component_keys_keep_first_position_last_description() {
        let doc = "A: a Service\nB: a Controller\nA: a Repository\n";
        let model = parse_architecture_doc(doc).unwrap();
        assert_eq!(model.components.len(), 2);
        assert_eq!(model.components[0].name, "A");
        assert_eq!(model.components[0].description, "a Repository");
        assert_eq!(model.components[1].name, "B");
    }

    #[test]
    fn rule_without_constraint_deserializes() {
        let doc = "---\nrules:\n  - component: UserService\n---\n";
        let model = parse_architecture_doc(doc).unwrap();
        assert_eq!(model.rules[0].must_depend_on, None);
    }

    #[test]
    fn rule_block_may_omit_rules_key() {
        let doc = "---\nnotes: informal\n---\n";
        let model = parse_architecture_doc(doc).unwrap();
        assert!(model.rules.is_empty());
    }
}
