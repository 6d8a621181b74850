//! Entity extraction: one source file in, one structural `Entity` out.
//!
//! Marker detection and member detection are independent passes over the full
//! text. Constructs the patterns do not recognize are omitted, never reported;
//! extraction cannot fail on malformed input.

use crate::core::{Entity, Marker};
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;

static MARKER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"@(RestController|Controller|Service|Repository|Entity|Component)\b").unwrap()
});

static CLASS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(public|private|protected)?\s*class\s+(\w+)").unwrap());

static METHOD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(public|private|protected)\s+[\w<>\[\]]+\s+(\w+)\s*\(").unwrap());

static FIELD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(public|private|protected)\s+[\w<>\[\]]+\s+(\w+);").unwrap());

/// Extract the structural facts of one source unit.
pub fn extract_entity(content: &str, origin: &Path) -> Entity {
    Entity {
        identity: find_declaration(content),
        markers: find_markers(content),
        methods: capture_names(&METHOD_RE, content),
        fields: capture_names(&FIELD_RE, content),
        body: content.to_string(),
        origin: origin.to_path_buf(),
    }
}

/// All recognized role markers, deduplicated in first-occurrence order.
fn find_markers(content: &str) -> Vec<Marker> {
    let mut markers = Vec::new();
    for captures in MARKER_RE.captures_iter(content) {
        if let Some(marker) = Marker::from_token(&captures[1]) {
            if !markers.contains(&marker) {
                markers.push(marker);
            }
        }
    }
    markers
}

/// The first type declaration's name, if any.
fn find_declaration(content: &str) -> Option<String> {
    CLASS_RE
        .captures(content)
        .map(|captures| captures[2].to_string())
}

fn capture_names(pattern: &Regex, content: &str) -> Vec<String> {
    pattern
        .captures_iter(content)
        .map(|captures| captures[2].to_string())
        .collect()
}
