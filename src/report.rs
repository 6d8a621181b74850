//! Report synthesis: pure aggregation of the pipeline's outputs.
//!
//! Nothing here recomputes or overrides an upstream result; this stage only
//! assembles the payload and derives the gap set and coverage statistics.
//! Ordering is deterministic, so identical inputs give identical payloads.

use crate::core::{ArchitectureModel, ChainEdge, ConformanceReport, Coverage, Entity,
    MappedComponent, RuleVerdict};
use std::collections::BTreeSet;

pub const DEFAULT_EXCERPT_LENGTH: usize = 500;

pub fn synthesize_report(
    entities: &[Entity],
    model: &ArchitectureModel,
    mapped: &[MappedComponent],
    chains: &[ChainEdge],
    verdicts: &[RuleVerdict],
    excerpt_length: usize,
) -> ConformanceReport {
    let extracted: BTreeSet<&str> = entities
        .iter()
        .filter_map(|e| e.identity.as_deref())
        .collect();
    let mapped_identities: BTreeSet<&str> =
        mapped.iter().map(|row| row.identity.as_str()).collect();

    let gaps: Vec<String> = extracted
        .difference(&mapped_identities)
        .map(|identity| identity.to_string())
        .collect();

    ConformanceReport {
        verdicts: verdicts.to_vec(),
        mapping: mapped.to_vec(),
        chains: chains.to_vec(),
        gaps,
        coverage: coverage(extracted.len(), mapped_identities.len()),
        code_excerpt: first_mapped_body(mapped, entities)
            .map(|body| excerpt(body, excerpt_length)),
        doc_excerpt: excerpt(&model.raw_text, excerpt_length),
    }
}

/// Distinct mapped identities over distinct extracted identities. Zero
/// extracted entities is "no data", not a division fault.
fn coverage(total: usize, mapped: usize) -> Coverage {
    Coverage {
        total_entities: total,
        mapped_entities: mapped,
        percent: (total > 0).then(|| mapped as f64 / total as f64 * 100.0),
    }
}

fn first_mapped_body<'a>(mapped: &[MappedComponent], entities: &'a [Entity]) -> Option<&'a str> {
    let first = mapped.first()?;
    entities
        .iter()
        .find(|entity| entity.origin == first.origin)
        .map(|entity| entity.body.as_str())
}

/// Leading portion of `text`, truncated on a char boundary.
fn excerpt(text: &str, length: usize) -> String {
    text.chars().take(length).collect()
}
