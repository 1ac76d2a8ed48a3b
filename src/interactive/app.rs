//! TUI application state and logic

use super::geometry::BoardGeometry;
use crate::core::{CELLS_PER_ROW, COLUMN_COUNT, CellPos, ROW_COUNT, brackets};
use crate::output::MessageLog;
use crate::session::{GameSession, Instruction, SessionPhase};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
        MouseButton, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::Rng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::debug;

/// Cursor movement requested from the keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Application state
pub struct App<'a, R: Rng> {
    pub session: GameSession<'a, R>,
    pub messages: MessageLog,
    /// Cell currently under the pointer or keyboard cursor
    pub hovered: Option<CellPos>,
    pub cursor: CellPos,
    pub geometry: BoardGeometry,
    pub should_quit: bool,
}

impl<'a, R: Rng> App<'a, R> {
    #[must_use]
    pub fn new(session: GameSession<'a, R>) -> Self {
        Self {
            session,
            messages: MessageLog::default(),
            hovered: None,
            cursor: CellPos::new(0, 0),
            geometry: BoardGeometry::default(),
            should_quit: false,
        }
    }

    /// Feed a batch of session instructions to the front end
    ///
    /// Highlights are read back from the session when drawing, so only the
    /// notifications need keeping here.
    pub fn apply(&mut self, instructions: &[Instruction]) {
        self.messages.record(instructions);
    }

    /// Pointer moved to `cell`, or off the board when `None`
    pub fn pointer_moved(&mut self, cell: Option<CellPos>) {
        if cell == self.hovered {
            return;
        }
        self.hovered = cell;

        let instructions = match cell {
            // Sliding inside a hovered bracket span keeps the span lit
            Some(cell)
                if self.session.highlights().is_transient(cell)
                    && !self.session.board().get(cell).is_some_and(brackets::is_bracket) =>
            {
                return;
            }
            Some(cell) => self.session.hover(cell),
            None => self.session.unhover(),
        };
        self.apply(&instructions);
    }

    /// Pointer clicked at `cell`
    pub fn pointer_clicked(&mut self, cell: CellPos) {
        debug!(row = cell.row, pos = cell.pos, "click");
        let instructions = self.session.click(cell);
        self.apply(&instructions);
        if !instructions.is_empty() {
            // The board may have changed under the pointer
            self.rehover();
        }
    }

    /// Move the keyboard cursor one cell, clamped to the board, and hover it
    pub fn move_cursor(&mut self, direction: Direction) {
        let CellPos { row, pos } = self.cursor;
        let last_pos = CELLS_PER_ROW * COLUMN_COUNT - 1;
        self.cursor = match direction {
            Direction::Up => CellPos::new(row.saturating_sub(1), pos),
            Direction::Down => CellPos::new((row + 1).min(ROW_COUNT - 1), pos),
            Direction::Left => CellPos::new(row, pos.saturating_sub(1)),
            Direction::Right => CellPos::new(row, (pos + 1).min(last_pos)),
        };
        self.pointer_moved(Some(self.cursor));
    }

    pub fn click_cursor(&mut self) {
        self.pointer_clicked(self.cursor);
    }

    pub fn give_up(&mut self) {
        let instructions = self.session.give_up();
        self.apply(&instructions);
    }

    pub fn regenerate(&mut self) {
        let instructions = self.session.regenerate();
        self.apply(&instructions);
        self.rehover();
    }

    /// Byte shown in the status line
    #[must_use]
    pub fn memory_value(&self) -> Option<u8> {
        self.hovered.and_then(|cell| self.session.memory_value(cell))
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.session.phase() == SessionPhase::SecretFound
    }

    fn rehover(&mut self) {
        if let Some(cell) = self.hovered {
            let instructions = self.session.hover(cell);
            self.apply(&instructions);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<R: Rng>(app: App<'_, R>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend, R: Rng>(
    terminal: &mut Terminal<B>,
    mut app: App<'_, R>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &mut app))?;

        match event::read()? {
            Event::Key(key) => {
                // Only process key press events (fixes Windows double-input bug)
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('q') | KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('r') => app.regenerate(),
                    KeyCode::Char('g') => app.give_up(),
                    KeyCode::Up => app.move_cursor(Direction::Up),
                    KeyCode::Down => app.move_cursor(Direction::Down),
                    KeyCode::Left => app.move_cursor(Direction::Left),
                    KeyCode::Right => app.move_cursor(Direction::Right),
                    KeyCode::Enter | KeyCode::Char(' ') => app.click_cursor(),
                    _ => {}
                }
            }
            Event::Mouse(mouse) => {
                let cell = app.geometry.cell_at(mouse.column, mouse.row);
                match mouse.kind {
                    MouseEventKind::Moved => app.pointer_moved(cell),
                    MouseEventKind::Down(MouseButton::Left) => {
                        if let Some(cell) = cell {
                            app.cursor = cell;
                            app.pointer_moved(Some(cell));
                            app.pointer_clicked(cell);
                        }
                    }
                    _ => {}
                }
            }
            _ => {}
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
