//! Sign-up screen.
//!
//! A centered dialog with the country code and phone number inputs, a submit
//! hint and the last sign-up result.

use super::constants::{SIGNUP_DIALOG_HEIGHT, SIGNUP_DIALOG_WIDTH};
use super::styles::{FOCUSED_INPUT, MUTED_TEXT, WIDGET_TITLE};
use super::StatusMessage;
use crate::signup::{SignUpField, SignUpForm};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

/// Render the sign-up dialog centered in the frame.
pub fn render_signup(frame: &mut Frame, form: &SignUpForm, status: Option<&StatusMessage>) {
    let area = centered_rect(SIGNUP_DIALOG_WIDTH, SIGNUP_DIALOG_HEIGHT, frame.area());
    frame.render_widget(Clear, area);

    let submit_style = if form.can_submit() {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        MUTED_TEXT
    };

    let mut lines = vec![
        Line::from(Span::styled("Enter your phone number", WIDGET_TITLE)),
        Line::default(),
        input_line("Country code", form.country_code(), form.focused() == SignUpField::CountryCode),
        input_line("Phone number", form.phone_number(), form.focused() == SignUpField::PhoneNumber),
        Line::default(),
        Line::from(Span::styled("[ Enter: send code ]", submit_style)),
        Line::default(),
    ];
    match status {
        Some(message) => lines.push(Line::from(Span::styled(
            message.text.clone(),
            message.kind.style(),
        ))),
        None => lines.push(Line::from(Span::styled(
            "Tab: switch field | Esc: skip | q: quit",
            MUTED_TEXT,
        ))),
    }

    let dialog = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Sign up ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(dialog, area);
}

fn input_line(label: &'static str, value: &str, focused: bool) -> Line<'static> {
    let shown = if focused {
        format!(" {value}_ ")
    } else {
        format!(" {value} ")
    };
    let value_style = if focused { FOCUSED_INPUT } else { Style::default() };
    Line::from(vec![
        Span::styled(format!("{label}: "), MUTED_TEXT),
        Span::styled(shown, value_style),
    ])
}

/// Fixed-size rect centered in `area`, shrunk to fit.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
