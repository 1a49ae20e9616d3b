//! Core identifier newtypes with smart constructors.
//!
//! Identifiers validate non-empty strings at construction time.
//! Raw constructors are never exported - use smart constructors only.

use std::fmt;

/// Identifier of a dashboard widget placed in the grid.
///
/// The grid's position map is keyed by this type, so it must be cheap to
/// clone and hash.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WidgetId(String);

impl WidgetId {
    /// Smart constructor: validates non-empty, whitespace-free widget id
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidWidgetId> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(InvalidWidgetId::Empty);
        }
        if raw.chars().any(char::is_whitespace) {
            return Err(InvalidWidgetId::ContainsWhitespace(raw));
        }
        Ok(Self(raw))
    }

    /// Borrow the raw identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ===== Error Types =====

/// Rejection reasons for [`WidgetId::new`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidWidgetId {
    /// The id was the empty string.
    #[error("Widget ID cannot be empty")]
    Empty,

    /// The id contained whitespace.
    #[error("Widget ID cannot contain whitespace: {0:?}")]
    ContainsWhitespace(String),
}

// ===== Tests =====

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widget_id_accepts_simple_name() {
        let id = WidgetId::new("balance");
        assert!(id.is_ok(), "Simple name should be accepted");
    }

    #[test]
    fn widget_id_rejects_empty_string() {
        assert!(
            matches!(WidgetId::new(""), Err(InvalidWidgetId::Empty)),
            "Empty string should return InvalidWidgetId::Empty"
        );
    }

    #[test]
    fn widget_id_rejects_whitespace() {
        let result = WidgetId::new("my widget");
        assert_eq!(
            result,
            Err(InvalidWidgetId::ContainsWhitespace("my widget".to_string()))
        );
    }

    #[test]
    fn widget_id_as_str_returns_original() {
        let id = WidgetId::new("cards").unwrap();
        assert_eq!(id.as_str(), "cards");
    }

    #[test]
    fn widget_id_display_matches_as_str() {
        let id = WidgetId::new("spending").unwrap();
        assert_eq!(format!("{}", id), "spending");
    }

    #[test]
    fn widget_ids_order_lexicographically() {
        let a = WidgetId::new("a").unwrap();
        let b = WidgetId::new("b").unwrap();
        assert!(a < b);
    }
}
