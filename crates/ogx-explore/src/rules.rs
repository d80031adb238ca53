//! Which relations lead from a category to its children.
//!
//! The read API does not name child edges consistently, so a relation counts
//! as a child edge when its name is in an exact-match set or contains one of
//! a few marker substrings. Among child edges, `OUTGOING` ones are preferred;
//! `INCOMING` ones are only followed when a node has no outgoing child edge,
//! for schema variants that point from child to parent.

use ogx_core::{Direction, RelationResult};

/// Relation names that always denote a child edge.
pub const CHILD_RELATION_NAMES: [&str; 4] =
    ["IS_ATTRIBUTE", "HAS_CHILD", "CHILD_CATEGORY", "AS_CATEGORY"];

/// Substrings that mark any other relation name as a child edge.
pub const CHILD_RELATION_MARKERS: [&str; 2] = ["CHILD", "ATTRIBUTE"];

/// Exact-match set plus substring markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChildRelationRules {
    pub exact: Vec<String>,
    pub markers: Vec<String>,
}

impl Default for ChildRelationRules {
    fn default() -> Self {
        Self {
            exact: CHILD_RELATION_NAMES.iter().map(ToString::to_string).collect(),
            markers: CHILD_RELATION_MARKERS.iter().map(ToString::to_string).collect(),
        }
    }
}

impl ChildRelationRules {
    #[must_use]
    pub fn is_child_relation(&self, name: &str) -> bool {
        self.exact.iter().any(|exact| exact == name)
            || self.markers.iter().any(|marker| name.contains(marker.as_str()))
    }

    /// Child edges to follow, in the order the read API returned them.
    #[must_use]
    pub fn select<'r>(&self, relations: &'r [RelationResult]) -> Vec<&'r RelationResult> {
        let children: Vec<&RelationResult> = relations
            .iter()
            .filter(|rel| self.is_child_relation(&rel.name))
            .collect();

        let outgoing = with_direction(&children, Direction::Outgoing);
        if !outgoing.is_empty() {
            return outgoing;
        }
        with_direction(&children, Direction::Incoming)
    }
}

fn with_direction<'r>(
    relations: &[&'r RelationResult],
    direction: Direction,
) -> Vec<&'r RelationResult> {
    relations
        .iter()
        .copied()
        .filter(|rel| rel.direction == direction)
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn rel(name: &str, direction: Direction, target: &str) -> RelationResult {
        RelationResult {
            id: format!("{name}-{target}"),
            name: name.to_string(),
            direction,
            related_entity_id: target.to_string(),
            start_time: None,
            end_time: None,
        }
    }

    #[rstest]
    #[case("IS_ATTRIBUTE", true)]
    #[case("HAS_CHILD", true)]
    #[case("CHILD_CATEGORY", true)]
    #[case("AS_CATEGORY", true)]
    #[case("HAS_CHILD_DEPARTMENT", true)]
    #[case("STATISTICAL_ATTRIBUTE", true)]
    #[case("AS_MINISTER", false)]
    #[case("has_child", false)]
    #[case("", false)]
    fn child_relation_names(#[case] name: &str, #[case] expected: bool) {
        assert_eq!(ChildRelationRules::default().is_child_relation(name), expected);
    }

    #[test]
    fn outgoing_wins_over_incoming() {
        let relations = vec![
            rel("HAS_CHILD", Direction::Incoming, "a"),
            rel("HAS_CHILD", Direction::Outgoing, "b"),
            rel("AS_MINISTER", Direction::Outgoing, "c"),
            rel("IS_ATTRIBUTE", Direction::Outgoing, "d"),
        ];
        let targets: Vec<&str> = ChildRelationRules::default()
            .select(&relations)
            .into_iter()
            .map(|r| r.related_entity_id.as_str())
            .collect();
        assert_eq!(targets, vec!["b", "d"]);
    }

    #[test]
    fn incoming_used_when_no_outgoing() {
        let relations = vec![
            rel("AS_MINISTER", Direction::Outgoing, "x"),
            rel("HAS_CHILD", Direction::Incoming, "a"),
            rel("CHILD_CATEGORY", Direction::Incoming, "b"),
            rel("HAS_CHILD", Direction::Unknown, "c"),
        ];
        let targets: Vec<&str> = ChildRelationRules::default()
            .select(&relations)
            .into_iter()
            .map(|r| r.related_entity_id.as_str())
            .collect();
        assert_eq!(targets, vec!["a", "b"]);
    }

    #[test]
    fn custom_rules() {
        let rules = ChildRelationRules {
            exact: vec!["CONTAINS".to_string()],
            markers: Vec::new(),
        };
        assert!(rules.is_child_relation("CONTAINS"));
        assert!(!rules.is_child_relation("HAS_CHILD"));
    }
}
