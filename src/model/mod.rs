//! Domain model types (pure).
//!
//! All types in this module are pure data with smart constructors.

pub mod error;
pub mod identifiers;
pub mod widget;

// Re-export for convenience
pub use error::{AppError, AuthError, GridError, SignUpError};
pub use identifiers::{InvalidWidgetId, WidgetId};
pub use widget::{default_widget_ids, WidgetKind};
