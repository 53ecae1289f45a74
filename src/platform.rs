//! crossterm-backed platform: the terminal is the window.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event};
use crossterm::terminal;
use tracing::{debug, info, warn};

use tui_tictactoe::engine::Platform;
use tui_tictactoe::input::map_event;
use tui_tictactoe::term::{BoardView, Canvas, Filter, FrameBuffer, InitError, TerminalRenderer, Viewport};
use tui_tictactoe::types::{GameEvent, SCREEN_HEIGHT, SCREEN_WIDTH};

/// Owns the terminal while the game runs. Dropping it restores the terminal,
/// including after a partially failed `new`.
pub struct TerminalPlatform {
    renderer: TerminalRenderer,
    view: BoardView,
    viewport: Viewport,
    fb: FrameBuffer,
}

impl TerminalPlatform {
    pub fn new(filter: Filter) -> Result<Self, InitError> {
        let (width, height) = terminal::size()?;
        let mut platform = Self {
            renderer: TerminalRenderer::new(),
            view: BoardView::new(filter),
            viewport: Viewport::new(width, height),
            fb: FrameBuffer::new(width, height),
        };
        platform.renderer.enter()?;
        info!(width, height, filter = ?platform.view.filter(), "terminal surface ready");
        Ok(platform)
    }
}

impl Platform for TerminalPlatform {
    fn poll_event(&mut self) -> Result<Option<GameEvent>> {
        while event::poll(Duration::ZERO)? {
            let raw = event::read()?;
            if let Event::Resize(width, height) = raw {
                debug!(width, height, "terminal resized");
                self.viewport = Viewport::new(width, height);
                self.renderer.invalidate();
                continue;
            }

            let (view, viewport) = (self.view, self.viewport);
            let mapped = map_event(raw, |column, row| {
                view.to_logical(SCREEN_WIDTH, SCREEN_HEIGHT, viewport, column, row)
            });
            if mapped.is_some() {
                return Ok(mapped);
            }
        }
        Ok(None)
    }

    fn present(&mut self, frame: &Canvas) -> Result<()> {
        self.view.render_into(frame, self.viewport, &mut self.fb);
        self.renderer.draw_swap(&mut self.fb)
    }
}

impl Drop for TerminalPlatform {
    fn drop(&mut self) {
        match self.renderer.exit() {
            Ok(()) => debug!("terminal restored"),
            Err(err) => warn!(error = %err, "failed to restore terminal"),
        }
    }
}
