//! Formal rule evaluation against the mapping.
//!
//! A rule fires once per mapped row whose architecture component contains the
//! rule's target as a substring. The only recognized constraint is
//! `must_depend_on`; rules without one are skipped, which keeps unknown
//! constraint kinds forward-compatible. A rule matching nothing produces no
//! verdicts: the absence of a target component is not itself a violation here.

use crate::core::{MappedComponent, Outcome, Rule, RuleVerdict};

pub fn evaluate_rules(mapped: &[MappedComponent], rules: &[Rule]) -> Vec<RuleVerdict> {
    let mut verdicts = Vec::new();
    for rule in rules {
        for row in mapped {
            if !row.arch_component.contains(&rule.component) {
                continue;
            }
            let Some(dependency) = &rule.must_depend_on else {
                continue;
            };
            let outcome = if dependency_satisfied(mapped, &row.identity, dependency) {
                Outcome::Pass
            } else {
                Outcome::Fail
            };
            verdicts.push(RuleVerdict {
                rule: rule.clone(),
                component: row.identity.clone(),
                outcome,
            });
        }
    }
    verdicts
}

/// Some other entity (different identity) must be mapped to a component
/// containing the dependency string.
fn dependency_satisfied(mapped: &[MappedComponent], identity: &str, dependency: &str) -> bool {
    mapped
        .iter()
        .any(|other| other.identity != identity && other.arch_component.contains(dependency))
}
