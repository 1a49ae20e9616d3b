//! Error types for findeck.
//!
//! Errors are defined with `thiserror` and compose via `?` and `From`.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level error returned from `main`
//!   - [`ConfigError`] - Config file read/parse failures
//!   - [`LoggingError`] - Tracing subscriber setup failures
//!   - [`TuiError`] - Terminal failures
//!   - [`GridError`] - Invalid grid layout in configuration
//! - [`AuthError`] - Failures reported by the auth collaborator
//! - [`SignUpError`] - What the sign-up screen shows the user
//!
//! # Recovery Strategy
//!
//! Grid errors during a gesture are logged and the gesture ignored; the
//! engine never leaves its invariants. Sign-up failures of any kind collapse
//! into one generic user-facing message with no retry.

use super::identifiers::WidgetId;
use crate::config::ConfigError;
use crate::logging::LoggingError;
use crate::view::TuiError;
use thiserror::Error;

/// Top-level application error.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Logging could not be initialized.
    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),

    /// The terminal UI failed.
    #[error("Terminal error: {0}")]
    Tui(#[from] TuiError),

    /// The configured grid layout is invalid.
    #[error("Grid error: {0}")]
    Grid(#[from] GridError),
}

/// Failures of the grid reorder engine and its layout types.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridError {
    /// The widget is not placed in the grid.
    #[error("Unknown widget: {0}")]
    UnknownWidget(WidgetId),

    /// The same widget was placed twice.
    #[error("Widget placed more than once: {0}")]
    DuplicateWidget(WidgetId),

    /// Slot assignments do not form a permutation of `0..len`.
    #[error("Slot {slot} breaks the slot permutation for {len} widgets")]
    NotAPermutation {
        /// Offending slot.
        slot: usize,
        /// Number of widgets.
        len: usize,
    },

    /// A drag is already in progress.
    #[error("Widget {0} is already being dragged")]
    DragInProgress(WidgetId),

    /// Geometry with no columns or a non-positive item size.
    #[error("Grid needs at least one column and a positive item size (columns={columns}, item={width}x{height})")]
    EmptyLayout {
        /// Configured columns.
        columns: usize,
        /// Configured item width.
        width: f64,
        /// Configured item height.
        height: f64,
    },
}

/// Failures reported by an [`AuthClient`](crate::signup::AuthClient).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The backend rejected the phone number.
    #[error("Phone number rejected: {0}")]
    Rejected(String),

    /// Verification was requested before a sign-up was created.
    #[error("No sign-up in progress")]
    NoSignUp,

    /// The backend could not be reached.
    #[error("Auth backend unavailable: {0}")]
    Unavailable(String),
}

/// Sign-up failure as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignUpError {
    /// Any failure from the auth collaborator. The cause is kept for logs
    /// but never shown.
    #[error("There was an error signing up.")]
    Failed(#[source] AuthError),
}
