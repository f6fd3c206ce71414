//! Host event loop: reads terminal events, feeds them to the grid, draws
//! frames and executes the commands the grid returns.

use std::io::{self, Write};
use std::ops::ControlFlow;
use std::time::Duration;

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self, DisableBracketedPaste, EnableBracketedPaste, Event};
use crossterm::style::Print;
use crossterm::terminal::{
    self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{execute, queue};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;

use panes_common::{PanesError, Size};
use panes_grid::{Cmd, GridManager, Msg};
use panes_input::KeyCombo;

/// Rows at the bottom of the screen reserved for the key help line.
const STATUS_LINES: u16 = 1;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Puts the terminal into raw alternate-screen mode and restores it when
/// dropped, including on error paths.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self, PanesError> {
        terminal::enable_raw_mode()
            .map_err(|e| PanesError::Terminal(format!("failed to enable raw mode: {e}")))?;
        let guard = Self;
        execute!(io::stdout(), EnterAlternateScreen, EnableBracketedPaste, Hide)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), Show, DisableBracketedPaste, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

/// Area the grid lays out in, leaving room for the status line.
fn grid_size(columns: u16, rows: u16) -> Size {
    Size::new(columns, rows.saturating_sub(STATUS_LINES))
}

/// Convert a terminal event into a grid message. Mouse and focus events
/// are dropped.
fn translate(event: Event) -> Option<Msg> {
    match event {
        Event::Key(key) => KeyCombo::from_crossterm(&key).map(Msg::Key),
        Event::Resize(columns, rows) => Some(Msg::Resize(grid_size(columns, rows))),
        Event::Paste(text) => Some(Msg::Paste(text)),
        _ => None,
    }
}

/// Blocking reader loop. Exits when the receiver is gone or the terminal
/// stops producing events.
fn read_events(tx: UnboundedSender<Msg>) {
    while !tx.is_closed() {
        match event::poll(POLL_INTERVAL) {
            Ok(false) => continue,
            Ok(true) => {}
            Err(e) => {
                tracing::error!("terminal event poll failed: {e}");
                break;
            }
        }
        match event::read() {
            Ok(event) => {
                if let Some(msg) = translate(event) {
                    if tx.send(msg).is_err() {
                        break;
                    }
                }
            }
            Err(e) => {
                tracing::error!("terminal event read failed: {e}");
                break;
            }
        }
    }
    tracing::debug!("event reader stopped");
}

/// Execute `cmd`. `Perform` work runs on the blocking pool and its message
/// comes back through `tx`.
fn run_cmd(cmd: Cmd, tx: &UnboundedSender<Msg>) -> ControlFlow<()> {
    match cmd {
        Cmd::Quit => ControlFlow::Break(()),
        Cmd::Batch(cmds) => {
            for cmd in cmds {
                run_cmd(cmd, tx)?;
            }
            ControlFlow::Continue(())
        }
        Cmd::Perform(work) => {
            let tx = tx.clone();
            tokio::task::spawn_blocking(move || {
                // The loop may already have exited.
                let _ = tx.send(work());
            });
            ControlFlow::Continue(())
        }
    }
}

/// Next message for the grid, or `None` once the event reader has stopped.
/// The loop keeps its own sender for `Perform` results, so the channel
/// alone never reports the end of input. Queued messages win over the
/// reader's exit.
async fn next_msg(rx: &mut UnboundedReceiver<Msg>, reader: &mut JoinHandle<()>) -> Option<Msg> {
    tokio::select! {
        biased;
        msg = rx.recv() => msg,
        joined = reader => {
            if let Err(e) = joined {
                tracing::warn!("event reader task failed: {e}");
            }
            tracing::info!("input ended");
            None
        }
    }
}

/// Draw `frame` from the top-left corner with `status` on the last row.
fn draw(out: &mut impl Write, frame: &str, status: &str, rows: u16) -> io::Result<()> {
    queue!(out, Clear(ClearType::All))?;
    for (index, line) in frame.lines().enumerate() {
        let Ok(y) = u16::try_from(index) else { break };
        if y >= rows.saturating_sub(STATUS_LINES) {
            break;
        }
        queue!(out, MoveTo(0, y), Print(line))?;
    }
    if rows > 0 {
        queue!(out, MoveTo(0, rows - 1), Print(status))?;
    }
    out.flush()
}

/// Run `grid` on the terminal until a quit command or the input ends.
pub async fn run(mut grid: GridManager) -> Result<(), PanesError> {
    let _guard = TerminalGuard::enter()?;
    let (tx, mut rx) = mpsc::unbounded_channel();

    let mut reader = tokio::task::spawn_blocking({
        let tx = tx.clone();
        move || read_events(tx)
    });

    let (columns, mut rows) = terminal::size()?;
    let mut pending: Vec<Cmd> = grid.start().into_iter().collect();
    if let Some(cmd) = grid.dispatch(Msg::Resize(grid_size(columns, rows))) {
        pending.push(cmd);
    }

    let mut stdout = io::stdout();
    let status = grid.keymap.help_line();
    tracing::info!(shape = ?grid.shape(), "entering event loop");

    let mut reader_done = false;
    'events: loop {
        for cmd in pending.drain(..) {
            if run_cmd(cmd, &tx).is_break() {
                tracing::info!("quit");
                break 'events;
            }
        }

        draw(&mut stdout, &grid.compose(), &status, rows)?;

        let Some(msg) = next_msg(&mut rx, &mut reader).await else {
            reader_done = true;
            break;
        };
        if let Msg::Resize(size) = &msg {
            rows = size.height.saturating_add(STATUS_LINES);
        }
        pending.extend(grid.dispatch(msg));
    }

    drop(rx);
    if !reader_done {
        if let Err(e) = reader.await {
            tracing::warn!("event reader task failed: {e}");
        }
    }
    Ok(())
}
