//! Layering chain validation.
//!
//! Checks pairwise adjacency only: controllers referencing the service layer,
//! services referencing the repository layer. No end-to-end chain is ever
//! confirmed; the scan is coarse file-level text containment, and the
//! controller check intentionally fires once per method, so duplicate edges
//! are expected output.

use crate::core::{ChainEdge, ChainLayer, Entity, MappedComponent};

/// Validate layering adjacencies over the mapped components.
///
/// `entities` provides the bodies; rows are tied back to their entity by
/// origin, so two entities sharing an identity keep their own bodies.
pub fn validate_chains(mapped: &[MappedComponent], entities: &[Entity]) -> Vec<ChainEdge> {
    let mut edges = Vec::new();
    for row in mapped {
        let Some(body) = body_for(row, entities) else {
            continue;
        };
        if row.marker.is_controller_role() {
            // One probe per method; the body-level answer is identical for
            // every method of the entity, and the duplicates are kept.
            for _method in &row.methods {
                if contains_ignore_case(body, "service") {
                    edges.push(ChainEdge {
                        from: row.identity.clone(),
                        layer: ChainLayer::Service,
                    });
                }
            }
        }
        if row.marker.is_service_role() && contains_ignore_case(body, "repository") {
            edges.push(ChainEdge {
                from: row.identity.clone(),
                layer: ChainLayer::Repository,
            });
        }
    }
    edges
}

fn body_for<'a>(row: &MappedComponent, entities: &'a [Entity]) -> Option<&'a str> {
    entities
        .iter()
        .find(|entity| entity.origin == row.origin)
        .map(|entity| entity.body.as_str())
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}
