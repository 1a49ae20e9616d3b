//! TUI rendering and terminal management (impure shell)

pub mod constants;
pub mod dashboard;
pub mod signup;
mod styles;

use crate::config::ResolvedConfig;
use crate::grid::{
    GestureTracker, GridEvent, GridGeometry, Point, PositionMap, ReorderEngine,
};
use crate::model::{AppError, GridError};
use crate::signup::{submit, AuthClient, LocalAuthClient, SignUpForm, SignUpOutcome};
use constants::{FRAME_INTERVAL, IDLE_INTERVAL, SCROLL_STEP};
use crossterm::{
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
        MouseEventKind,
    },
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::Rect,
    style::Style,
    Terminal,
};
use std::io::{self, Stdout};
use std::sync::mpsc::Receiver;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),

    /// Grid engine rejected an operation
    #[error("Grid error: {0}")]
    Grid(#[from] GridError),
}

/// Which screen is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Phone-number sign-up.
    SignUp,
    /// Widget grid.
    Dashboard,
}

/// Tone of a status line message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    /// Confirmation or progress.
    Info,
    /// Something went wrong.
    Error,
}

impl StatusKind {
    pub(crate) fn style(self) -> Style {
        match self {
            StatusKind::Info => styles::SUCCESS_TEXT,
            StatusKind::Error => styles::ERROR_TEXT,
        }
    }
}

/// One-line message shown in place of the key hints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    /// Message text.
    pub text: String,
    /// Tone.
    pub kind: StatusKind,
}

impl StatusMessage {
    fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: StatusKind::Info,
        }
    }

    fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: StatusKind::Error,
        }
    }
}

/// Build the dashboard's reorder engine from resolved settings.
///
/// # Errors
///
/// Unknown widget ids, duplicate widgets and degenerate grid sizes.
pub fn build_engine(config: &ResolvedConfig) -> Result<ReorderEngine, AppError> {
    let ids = config.widget_ids()?;
    let geometry = GridGeometry::new(config.columns, config.item_size()?)?;
    let positions = PositionMap::from_order(ids)?;
    Ok(ReorderEngine::new(geometry, positions, 0.0).with_settle_duration(config.settle_duration()))
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: Backend,
{
    terminal: Terminal<B>,
    screen: Screen,
    form: SignUpForm,
    auth: Box<dyn AuthClient>,
    engine: ReorderEngine,
    grid_events: Receiver<GridEvent>,
    gesture: GestureTracker,
    status: Option<StatusMessage>,
    /// Last rendered grid area (for mouse hit testing)
    last_grid_area: Option<Rect>,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen and mouse capture
    pub fn new(config: &ResolvedConfig, edit: bool) -> Result<Self, AppError> {
        let mut engine = build_engine(config)?;
        engine.set_editing(edit);

        enable_raw_mode().map_err(TuiError::from)?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen).map_err(TuiError::from)?;
        stdout
            .execute(crossterm::event::EnableMouseCapture)
            .map_err(TuiError::from)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout)).map_err(TuiError::from)?;

        let screen = if config.skip_signup {
            Screen::Dashboard
        } else {
            Screen::SignUp
        };
        Ok(Self::with_terminal(
            terminal,
            engine,
            SignUpForm::new(config.country_code.clone()),
            Box::new(LocalAuthClient::new()),
            screen,
        ))
    }

    /// Run the main event loop
    ///
    /// Returns when user quits (q or Ctrl+C). Polls at frame rate while
    /// widgets animate and at a slow idle rate otherwise.
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.draw()?;
        let mut last_frame = Instant::now();

        loop {
            let timeout = if self.engine.is_animating() {
                FRAME_INTERVAL
            } else {
                IDLE_INTERVAL
            };

            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key) if key.kind != KeyEventKind::Release => {
                        if self.handle_key(key) {
                            return Ok(());
                        }
                    }
                    Event::Mouse(mouse) => self.handle_mouse(mouse),
                    _ => {}
                }
            }

            let now = Instant::now();
            self.advance(now.duration_since(last_frame));
            last_frame = now;
            self.draw()?;
        }
    }
}

impl<B> TuiApp<B>
where
    B: Backend,
{
    /// Assemble an app around an existing terminal.
    pub fn with_terminal(
        terminal: Terminal<B>,
        mut engine: ReorderEngine,
        form: SignUpForm,
        auth: Box<dyn AuthClient>,
        screen: Screen,
    ) -> Self {
        let grid_events = engine.subscribe();
        Self {
            terminal,
            screen,
            form,
            auth,
            engine,
            grid_events,
            gesture: GestureTracker::new(),
            status: None,
            last_grid_area: None,
        }
    }

    /// Screen currently shown.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// The dashboard's reorder engine.
    pub fn engine(&self) -> &ReorderEngine {
        &self.engine
    }

    /// Message in the status line, if any.
    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    /// Sign-up form state.
    pub fn form(&self) -> &SignUpForm {
        &self.form
    }

    /// Backend the app draws to.
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        match self.screen {
            Screen::SignUp => self.handle_signup_key(key),
            Screen::Dashboard => self.handle_dashboard_key(key),
        }
    }

    fn handle_signup_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('q') => return true,
            KeyCode::Esc => self.show_dashboard(),
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                self.form.focus_next();
            }
            KeyCode::Backspace => self.form.backspace(),
            KeyCode::Enter => self.submit_signup(),
            KeyCode::Char(c) => {
                if !self.form.push_char(c) {
                    debug!(%c, "Ignoring non-numeric input");
                }
            }
            _ => {}
        }
        false
    }

    fn submit_signup(&mut self) {
        match submit(&self.form, self.auth.as_mut()) {
            Ok(SignUpOutcome::VerificationSent(pending)) => {
                self.show_dashboard();
                self.status = Some(StatusMessage::info(format!(
                    "Verification code sent to {}",
                    pending.phone_number()
                )));
            }
            Ok(SignUpOutcome::NotReady) => {
                debug!("Auth client not loaded, ignoring submit");
            }
            Err(err) => {
                self.status = Some(StatusMessage::error(err.to_string()));
            }
        }
    }

    fn show_dashboard(&mut self) {
        info!("Showing dashboard");
        self.screen = Screen::Dashboard;
        self.status = None;
    }

    fn handle_dashboard_key(&mut self, key: KeyEvent) -> bool {
        let page = self.engine.scroll().viewport_height().max(SCROLL_STEP);
        match key.code {
            KeyCode::Char('q') => return true,
            KeyCode::Char('e') => {
                let editing = !self.engine.is_editing();
                self.set_editing(editing);
            }
            KeyCode::Esc => self.set_editing(false),
            KeyCode::Up | KeyCode::Char('k') => {
                self.engine.scroll_by(-SCROLL_STEP);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.engine.scroll_by(SCROLL_STEP);
            }
            KeyCode::PageUp => {
                self.engine.scroll_by(-page);
            }
            KeyCode::PageDown => {
                self.engine.scroll_by(page);
            }
            KeyCode::Home => {
                let offset = self.engine.scroll().offset();
                self.engine.scroll_by(-offset);
            }
            KeyCode::End => {
                let remaining = self.engine.scroll().max_offset() - self.engine.scroll().offset();
                self.engine.scroll_by(remaining);
            }
            _ => {}
        }
        false
    }

    fn set_editing(&mut self, editing: bool) {
        if self.engine.set_editing(editing).is_some() {
            // Forced end: the pointer is still down but no longer drags anything
            self.gesture.release();
        }
        self.status = None;
    }

    /// Handle a single mouse event
    ///
    /// Left button press/drag/release drive the reorder gesture; the wheel
    /// scrolls the grid.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if self.screen != Screen::Dashboard {
            return;
        }
        let screen_point = Point::new(f64::from(mouse.column), f64::from(mouse.row));

        match mouse.kind {
            MouseEventKind::ScrollUp => {
                self.engine.scroll_by(-SCROLL_STEP);
            }
            MouseEventKind::ScrollDown => {
                self.engine.scroll_by(SCROLL_STEP);
            }
            MouseEventKind::Down(MouseButton::Left) => self.press(mouse.column, mouse.row),
            MouseEventKind::Drag(MouseButton::Left) => {
                let Some(translation) = self.gesture.drag(screen_point) else {
                    return;
                };
                if let Err(err) = self.engine.update_drag(translation) {
                    warn!(error = %err, "Drag update rejected");
                    self.status = Some(StatusMessage::error(err.to_string()));
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                if self.gesture.release() {
                    self.engine.end_drag();
                }
            }
            _ => {}
        }
    }

    fn press(&mut self, column: u16, row: u16) {
        // An open gesture means its release was never delivered
        if self.gesture.release() {
            debug!("Press without release, ending previous drag");
            self.engine.end_drag();
        }
        if !self.engine.is_editing() {
            return;
        }
        let Some(grid) = self.last_grid_area else {
            return;
        };
        let offset = self.engine.scroll().offset();
        let Some(id) = dashboard::content_point(grid, offset, column, row)
            .and_then(|point| self.engine.hit_test(point))
        else {
            return;
        };

        match self.engine.start_drag(&id) {
            Ok(true) => {
                self.gesture
                    .press(Point::new(f64::from(column), f64::from(row)));
            }
            Ok(false) => {}
            Err(err) => {
                warn!(error = %err, "Drag start rejected");
                self.status = Some(StatusMessage::error(err.to_string()));
            }
        }
    }

    /// Advance animations by `dt` and drain grid events.
    pub fn advance(&mut self, dt: Duration) {
        self.engine.tick(dt);
        while let Ok(event) = self.grid_events.try_recv() {
            match event {
                GridEvent::DragEnded { id, slot } => {
                    self.status = Some(StatusMessage::info(format!(
                        "Moved {id} to position {}",
                        slot.get() + 1
                    )));
                }
                GridEvent::DragStarted(_) => self.status = None,
                other => debug!(event = ?other, "Grid event"),
            }
        }
    }

    /// Render the current frame
    pub fn draw(&mut self) -> Result<(), TuiError> {
        let size = self.terminal.size()?;
        let frame_area = Rect::new(0, 0, size.width, size.height);

        match self.screen {
            Screen::SignUp => {
                self.last_grid_area = None;
                let form = &self.form;
                let status = self.status.as_ref();
                self.terminal
                    .draw(|frame| signup::render_signup(frame, form, status))?;
            }
            Screen::Dashboard => {
                let grid = dashboard::calculate_areas(frame_area).grid;
                self.last_grid_area = Some(grid);
                self.engine.set_viewport_height(f64::from(grid.height));

                let engine = &self.engine;
                let status = self.status.as_ref();
                self.terminal
                    .draw(|frame| dashboard::render_dashboard(frame, engine, status))?;
            }
        }
        Ok(())
    }
}

/// Initialize and run the TUI application
///
/// Handles terminal setup, runs the event loop, and ensures cleanup on exit.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run_with_config(config: &ResolvedConfig, edit: bool) -> Result<(), AppError> {
    let mut app = TuiApp::new(config, edit)?;

    // Run the app and ensure cleanup happens even on error
    let result = app.run();
    restore_terminal()?;

    result.map_err(AppError::from)
}

/// Restore terminal to normal state
///
/// Disables raw mode, mouse capture, and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(crossterm::event::DisableMouseCapture)?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;
