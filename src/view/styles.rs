//! Shared styles for the sign-up screen and the dashboard.

use ratatui::style::{Color, Modifier, Style};

/// Border of a widget at rest.
pub const WIDGET_BORDER: Style = Style::new().fg(Color::Gray);

/// Border of a widget at rest while edit mode is on.
pub const EDITABLE_BORDER: Style = Style::new().fg(Color::Cyan);

/// Border of the widget being dragged or settling.
pub const ELEVATED_BORDER: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);

/// Widget title.
pub const WIDGET_TITLE: Style = Style::new().add_modifier(Modifier::BOLD);

/// Hints and secondary text.
pub const MUTED_TEXT: Style = Style::new().fg(Color::DarkGray);

/// Error messages.
pub const ERROR_TEXT: Style = Style::new().fg(Color::Red);

/// Confirmation messages.
pub const SUCCESS_TEXT: Style = Style::new().fg(Color::Green);

/// Input field with keyboard focus.
pub const FOCUSED_INPUT: Style = Style::new()
    .fg(Color::Black)
    .bg(Color::Cyan)
    .add_modifier(Modifier::BOLD);

/// Header bar indicator while edit mode is on.
pub const EDIT_MODE_BADGE: Style = Style::new()
    .fg(Color::Black)
    .bg(Color::Yellow)
    .add_modifier(Modifier::BOLD);
