//! Keyboard handling for the scoreboard.

use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::tui::app::{App, Screen};

#[derive(Debug, Clone)]
pub enum TuiEvent {
    Tick,
    Key(KeyEvent),
    Resize(u16, u16),
}

pub struct EventHandler {
    tick_rate: Duration,
    last_tick: Instant,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        Self {
            tick_rate,
            last_tick: Instant::now(),
        }
    }

    /// Polls for the next event
    pub fn next_event(&mut self) -> anyhow::Result<Option<TuiEvent>> {
        let timeout = self.tick_rate.saturating_sub(self.last_tick.elapsed());

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => Ok(Some(TuiEvent::Key(key))),
                Event::Resize(w, h) => Ok(Some(TuiEvent::Resize(w, h))),
                _ => Ok(None),
            }
        } else {
            self.last_tick = Instant::now();
            Ok(Some(TuiEvent::Tick))
        }
    }
}

pub fn handle_event(app: &mut App, event: TuiEvent) -> anyhow::Result<()> {
    match event {
        TuiEvent::Tick => app.expire_status(),
        TuiEvent::Key(key) => handle_key_event(app, key)?,
        TuiEvent::Resize(_, _) => {
            // Terminal will automatically handle resize
        }
    }
    Ok(())
}

fn handle_key_event(app: &mut App, key: KeyEvent) -> anyhow::Result<()> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return Ok(());
    }
    if app.editing_name.is_some() {
        return handle_name_keys(app, key);
    }
    match app.current_screen {
        Screen::Sheet => handle_sheet_keys(app, key),
        Screen::Standings => handle_normal_keys(app, key),
    }
}

/// Keys while a player name is being typed
fn handle_name_keys(app: &mut App, key: KeyEvent) -> anyhow::Result<()> {
    match key.code {
        KeyCode::Enter | KeyCode::Esc | KeyCode::Tab => app.finish_name_edit(),
        KeyCode::Backspace => app.name_pop(),
        KeyCode::Char(c) => app.name_push(c),
        _ => {}
    }
    Ok(())
}

/// Entry keys on the sheet; everything else falls through to normal keys
fn handle_sheet_keys(app: &mut App, key: KeyEvent) -> anyhow::Result<()> {
    match key.code {
        KeyCode::Char(c) if c.is_ascii_digit() => app.type_char(c),
        KeyCode::Backspace => app.backspace(),
        KeyCode::Char('+') | KeyCode::Char('=') => app.step(1),
        KeyCode::Char('-') => app.step(-1),
        KeyCode::Char('x') | KeyCode::Delete => app.clear_cell(),
        KeyCode::Char('n') => app.begin_name_edit(),
        KeyCode::Char('R') => app.reset(),
        KeyCode::Up => app.move_up(),
        KeyCode::Down => app.move_down(),
        KeyCode::Left => app.move_left(),
        KeyCode::Right => app.move_right(),
        _ => handle_normal_keys(app, key)?,
    }
    Ok(())
}

fn handle_normal_keys(app: &mut App, key: KeyEvent) -> anyhow::Result<()> {
    match key.code {
        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.prev_screen();
            } else {
                app.next_screen();
            }
        }
        KeyCode::BackTab => app.prev_screen(),

        KeyCode::Char('c') | KeyCode::Char('C') | KeyCode::Enter => {
            app.calculate();
        }

        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),

        _ => {}
    }

    Ok(())
}
