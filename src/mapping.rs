//! Entity-to-architecture mapping.
//!
//! The mapping is deliberately a multimap: every (entity, marker, catalog
//! entry) match produces its own row, with no best-match selection and no
//! conflict resolution. Downstream coverage math counts distinct identities,
//! so preserving raw rows loses nothing and keeps ambiguity visible.

use crate::core::{CatalogEntry, Entity, MappedComponent, Marker};

/// Match every entity against every catalog entry through every marker it
/// carries. A marker matches when its token is a case-sensitive substring of
/// the entry's key or description.
///
/// Entities with no markers, or with no identity, contribute nothing.
pub fn map_components(entities: &[Entity], catalog: &[CatalogEntry]) -> Vec<MappedComponent> {
    let mut mapped = Vec::new();
    for entity in entities {
        let Some(identity) = &entity.identity else {
            continue;
        };
        for marker in &entity.markers {
            for entry in catalog {
                if matches_entry(*marker, entry) {
                    mapped.push(MappedComponent {
                        identity: identity.clone(),
                        marker: *marker,
                        arch_component: entry.name.clone(),
                        methods: entity.methods.clone(),
                        fields: entity.fields.clone(),
                        origin: entity.origin.clone(),
                    });
                }
            }
        }
    }
    mapped
}

fn matches_entry(marker: Marker, entry: &CatalogEntry) -> bool {
    marker
        .match_tokens()
        .iter()
        .any(|token| entry.name.contains(token) || entry.description.contains(token))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Marker;
    use std::path::PathBuf;

    fn entity(identity: Option<&str>, markers: Vec<Marker>) -> Entity {
        Entity {
            identity: identity.map(String::from),
            markers,
            methods: vec!["doWork".into()],
            fields: vec!["dep".into()],
            body: String::new(),
            origin: PathBuf::from("Test.java"),
        }
    }

    fn catalog(entries: &[(&str, &str)]) -> Vec<CatalogEntry> {
        entries
            .iter()
            .map(|(name, description)| CatalogEntry {
                name: name.to_string(),
                description: description.to_string(),
            })
            .collect()
    }

    #[test]
    fn marker_matches_key_substring() {
        let entities = vec![entity(Some("UserService"), vec![Marker::Service])];
        let cat = catalog(&[("UserService", "business logic")]);
        let mapped = map_components(&entities, &cat);
        assert_eq!(mapped.len(), 1);
        assert_eq!(mapped[0].identity, "UserService");
        assert_eq!(mapped[0].arch_component, "UserService");
        assert_eq!(mapped[0].marker, Marker::Service);
    }

    #[test]
    fn marker_matches_description_substring() {
        let entities = vec![entity(Some("Billing"), vec![Marker::Service])];
        let cat = catalog(&[("Billing", "this is a Service layer")]);
        assert_eq!(map_components(&entities, &cat).len(), 1);
    }

    #[test]
    fn rest_controller_matches_controller_token() {
        let entities = vec![entity(Some("UserController"), vec![Marker::RestController])];
        let cat = catalog(&[("UserController", "handles HTTP, a Controller")]);
        let mapped = map_components(&entities, &cat);
        assert_eq!(mapped.len(), 1);
        assert_eq!(mapped[0].marker, Marker::RestController);
        assert_eq!(mapped[0].arch_component, "UserController");
    }

    #[test]
    fn zero_markers_yield_zero_rows() {
        let entities = vec![entity(Some("Plain"), vec![])];
        let cat = catalog(&[("Plain", "a Service")]);
        assert!(map_components(&entities, &cat).is_empty());
    }

    #[test]
    fn absent_identity_is_skipped() {
        let entities = vec![entity(None, vec![Marker::Service])];
        let cat = catalog(&[("UserService", "logic")]);
        assert!(map_components(&entities, &cat).is_empty());
    }

    #[test]
    fn matching_is_case_sensitive() {
        let entities = vec![entity(Some("X"), vec![Marker::Service])];
        let cat = catalog(&[("userservice", "lowercase only")]);
        assert!(map_components(&entities, &cat).is_empty());
    }

    #[test]
    fn multi_marker_multi_entry_produces_all_rows() {
        let entities = vec![entity(
            Some("Hybrid"),
            vec![Marker::Service, Marker::Repository],
        )];
        let cat = catalog(&[
            ("OrderService", "orders"),
            ("OrderRepository", "a Repository for a Service"),
        ]);
        let mapped = map_components(&entities, &cat);
        // Service matches both entries (key of the first, description of the
        // second); Repository matches the second entry only.
        assert_eq!(mapped.len(), 3);
    }

    #[test]
    fn duplicate_rows_are_not_collapsed() {
        let entities = vec![
            entity(Some("A"), vec![Marker::Service]),
            entity(Some("A"), vec![Marker::Service]),
        ];
        let cat = catalog(&[("AService", "x")]);
        assert_eq!(map_components(&entities, &cat).len(), 2);
    }

    #[test]
    fn every_row_references_a_catalog_key() {
        let entities = vec![entity(Some("A"), vec![Marker::Service, Marker::Entity])];
        let cat = catalog(&[("SomeService", "x"), ("Unrelated", "y")]);
        for row in map_components(&entities, &cat) {
            assert!(cat.iter().any(|entry| entry.name == row.arch_component));
        }
    }
}
