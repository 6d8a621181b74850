use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// One analyzable source unit, typically one class per file.
///
/// Extraction never fails: a file without a recognizable declaration yields an
/// `Entity` with `identity: None`, which downstream stages skip for any
/// identity-keyed computation (mapping, gap set) without aborting the run.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Entity {
    /// Declared type name, absent when no declaration was found.
    pub identity: Option<String>,
    /// Role markers found in the unit, deduplicated, first-occurrence order.
    pub markers: Vec<Marker>,
    /// Method names in declaration order.
    pub methods: Vec<String>,
    /// Field names in declaration order.
    pub fields: Vec<String>,
    /// Raw text of the unit, kept for relationship checks and excerpting.
    pub body: String,
    /// Source location, used for diagnostics and duplicate detection.
    pub origin: PathBuf,
}

impl Entity {
    pub fn has_markers(&self) -> bool {
        !self.markers.is_empty()
    }
}

/// Closed vocabulary of role markers recognized in source text.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Marker {
    RestController,
    Controller,
    Service,
    Repository,
    Entity,
    Component,
}

impl Marker {
    /// The annotation token exactly as it appears in source, without the `@`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Marker::RestController => "RestController",
            Marker::Controller => "Controller",
            Marker::Service => "Service",
            Marker::Repository => "Repository",
            Marker::Entity => "Entity",
            Marker::Component => "Component",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "RestController" => Some(Marker::RestController),
            "Controller" => Some(Marker::Controller),
            "Service" => Some(Marker::Service),
            "Repository" => Some(Marker::Repository),
            "Entity" => Some(Marker::Entity),
            "Component" => Some(Marker::Component),
            _ => None,
        }
    }

    /// Tokens this marker matches against catalog text. A rest controller is
    /// a controller role, so it also matches the plain `Controller` token.
    pub fn match_tokens(&self) -> &'static [&'static str] {
        match self {
            Marker::RestController => &["RestController", "Controller"],
            Marker::Controller => &["Controller"],
            Marker::Service => &["Service"],
            Marker::Repository => &["Repository"],
            Marker::Entity => &["Entity"],
            Marker::Component => &["Component"],
        }
    }

    pub fn is_controller_role(&self) -> bool {
        matches!(self, Marker::RestController | Marker::Controller)
    }

    pub fn is_service_role(&self) -> bool {
        matches!(self, Marker::Service)
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One named component declared by the architecture document.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogEntry {
    pub name: String,
    pub description: String,
}

/// A formal dependency rule from the document's rule block.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Rule {
    /// Matched against catalog keys by substring containment.
    pub component: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub must_depend_on: Option<String>,
}

/// Normalized architecture description: component catalog, rule set, and the
/// full document text retained for excerpting.
///
/// Catalog order follows the document; it is the only valid set of mapping
/// targets. A rule naming a component absent from the catalog simply yields
/// no verdicts.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ArchitectureModel {
    pub components: Vec<CatalogEntry>,
    pub rules: Vec<Rule>,
    pub raw_text: String,
}

impl ArchitectureModel {
    pub fn empty() -> Self {
        Self {
            components: Vec::new(),
            rules: Vec::new(),
            raw_text: String::new(),
        }
    }
}

/// One row of the entity-to-architecture mapping.
///
/// The mapping is a multimap: an entity carrying several markers, or matching
/// several catalog entries, produces several rows. Duplicates are preserved;
/// coverage math downstream counts distinct identities, not rows.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct MappedComponent {
    pub identity: String,
    pub marker: Marker,
    pub arch_component: String,
    pub methods: Vec<String>,
    pub fields: Vec<String>,
    pub origin: PathBuf,
}

/// Which architectural layer a chain edge points into.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ChainLayer {
    Service,
    Repository,
}

impl fmt::Display for ChainLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChainLayer::Service => f.write_str("Service"),
            ChainLayer::Repository => f.write_str("Repository"),
        }
    }
}

/// Observed layering adjacency: `from` textually references `layer`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChainEdge {
    pub from: String,
    pub layer: ChainLayer,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Outcome {
    Pass,
    Fail,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Pass => f.write_str("Pass"),
            Outcome::Fail => f.write_str("Fail"),
        }
    }
}

/// Verdict of one rule against one mapped component.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RuleVerdict {
    pub rule: Rule,
    pub component: String,
    pub outcome: Outcome,
}

/// Coverage statistics over distinct identities.
///
/// `percent` is `None` when nothing was extracted, so an empty input reports
/// "no data" instead of dividing by zero.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Coverage {
    pub total_entities: usize,
    pub mapped_entities: usize,
    pub percent: Option<f64>,
}

/// The consolidated report payload.
///
/// Pure data: writers serialize it, nothing recomputes or overrides an
/// upstream verdict here.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ConformanceReport {
    pub verdicts: Vec<RuleVerdict>,
    pub mapping: Vec<MappedComponent>,
    pub chains: Vec<ChainEdge>,
    /// Identities extracted from source but absent from the mapping, sorted.
    pub gaps: Vec<String>,
    pub coverage: Coverage,
    /// Leading portion of the first mapped entity's body, if any was mapped.
    pub code_excerpt: Option<String>,
    /// Leading portion of the architecture document text.
    pub doc_excerpt: String,
}
