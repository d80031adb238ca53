//! Request bodies for the read API.

use serde::{Deserialize, Serialize};

use crate::errors::CoreError;
use crate::relation::Direction;

/// Kind constraint of an entity search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KindFilter {
    pub major: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minor: Option<String>,
}

/// Body of `POST /search`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySearchRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<KindFilter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl EntitySearchRequest {
    /// Search for a single entity by id.
    #[must_use]
    pub fn by_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }

    /// Build a search from loose CLI-style inputs. Empty strings count as
    /// absent, and a minor kind is only sent alongside a major kind.
    #[must_use]
    pub fn from_parts(
        id: Option<&str>,
        kind_major: Option<&str>,
        kind_minor: Option<&str>,
        name: Option<&str>,
    ) -> Self {
        let present = |v: Option<&str>| v.filter(|s| !s.is_empty()).map(str::to_string);
        Self {
            id: present(id),
            kind: present(kind_major).map(|major| KindFilter {
                major,
                minor: present(kind_minor),
            }),
            name: present(name),
        }
    }

    /// A search needs at least one criterion.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] when id, kind and name are all absent.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.id.is_none() && self.kind.is_none() && self.name.is_none() {
            return Err(CoreError::Validation(
                "At least one search criteria is required (Entity ID, Kind, or Name)".to_string(),
            ));
        }
        Ok(())
    }
}

/// Body of `POST /{entityId}/relations`. All fields are optional; an empty
/// body lists every relation of the entity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationsRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_entity_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<Direction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
}

impl RelationsRequest {
    /// Only relations with the given name.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// User-facing relation filter. [`RelationFilter::to_request`] applies the
/// precedence rules of the read API: a relation id excludes every other
/// field, and `active_at` excludes the start/end window.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelationFilter {
    pub relation_id: Option<String>,
    pub related_entity_id: Option<String>,
    pub name: Option<String>,
    pub direction: Option<Direction>,
    pub active_at: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
}

impl RelationFilter {
    #[must_use]
    pub fn to_request(&self) -> RelationsRequest {
        if let Some(id) = &self.relation_id {
            return RelationsRequest {
                id: Some(id.clone()),
                ..RelationsRequest::default()
            };
        }

        let (start_time, end_time) = if self.active_at.is_some() {
            (None, None)
        } else {
            (self.start_time.clone(), self.end_time.clone())
        };

        RelationsRequest {
            id: None,
            related_entity_id: self.related_entity_id.clone(),
            name: self.name.clone(),
            direction: self.direction,
            active_at: self.active_at.clone(),
            start_time,
            end_time,
        }
    }
}

/// Query string of `GET /{entityId}/attributes/{attrName}`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeQuery {
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub fields: Vec<String>,
}

impl AttributeQuery {
    /// Query pairs in wire order; `fields` repeats once per entry.
    #[must_use]
    pub fn pairs(&self) -> Vec<(&'static str, &str)> {
        let mut pairs = Vec::new();
        if let Some(start) = self.start_time.as_deref().filter(|s| !s.is_empty()) {
            pairs.push(("startTime", start));
        }
        if let Some(end) = self.end_time.as_deref().filter(|s| !s.is_empty()) {
            pairs.push(("endTime", end));
        }
        for field in &self.fields {
            pairs.push(("fields", field.as_str()));
        }
        pairs
    }
}

/// Reject an empty entity id (and, for attributes, an empty attribute name).
///
/// # Errors
///
/// Returns [`CoreError::Validation`] naming the missing input.
pub fn require_entity_id(entity_id: &str) -> Result<(), CoreError> {
    if entity_id.trim().is_empty() {
        return Err(CoreError::Validation("Entity ID is required".to_string()));
    }
    Ok(())
}

/// See [`require_entity_id`].
///
/// # Errors
///
/// Returns [`CoreError::Validation`] naming the missing input.
pub fn require_attribute(entity_id: &str, attribute: &str) -> Result<(), CoreError> {
    require_entity_id(entity_id)?;
    if attribute.trim().is_empty() {
        return Err(CoreError::Validation("Attribute name is required".to_string()));
    }
    Ok(())
}
