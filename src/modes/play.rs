use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use rand::Rng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use tokio::time::{Instant, sleep};

use crate::game::{GameLoop, TickOutcome};
use crate::input::{Command, InputHandler};
use crate::render::{Renderer, TerminalCanvas};

/// Whether the tick timer needs re-arming after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Schedule {
    Keep,
    Restart,
}

pub struct PlayMode<R: Rng> {
    game: GameLoop<R>,
    canvas: TerminalCanvas,
    renderer: Renderer,
    input_handler: InputHandler,
    should_quit: bool,
}

impl<R: Rng> PlayMode<R> {
    pub fn new(game: GameLoop<R>) -> Self {
        let canvas = TerminalCanvas::new(game.config().grid);

        Self {
            game,
            canvas,
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        self.game.start();
        self.game.redraw(&mut self.canvas);
        self.draw(terminal)?;

        // One-shot timer re-armed after every tick, so a new difficulty
        // applies from the next tick on
        let tick_timer = sleep(self.game.tick_interval());
        tokio::pin!(tick_timer);
        let mut ticking = true;

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => {
                            if self.handle_event(event) == Schedule::Restart {
                                let delay = self.game.tick_interval();
                                tick_timer.as_mut().reset(Instant::now() + delay);
                                ticking = true;
                            }
                            self.draw(terminal)?;
                        }
                        Some(Err(err)) => {
                            tracing::warn!(error = %err, "Failed to read terminal event");
                        }
                        None => self.should_quit = true,
                    }
                }

                // Game logic tick
                _ = &mut tick_timer, if ticking => {
                    match self.game.tick(&mut self.canvas) {
                        TickOutcome::Reschedule(delay) => {
                            tick_timer.as_mut().reset(Instant::now() + delay);
                        }
                        TickOutcome::Stopped => {
                            ticking = false;
                        }
                    }
                    self.draw(terminal)?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        let hud = self.game.hud();
        tracing::info!(score = hud.score, high_score = hud.high_score, "Quit");
        Ok(())
    }

    fn handle_event(&mut self, event: Event) -> Schedule {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return Schedule::Keep;
            }

            let command = self.input_handler.handle_key_event(key);
            return self.apply_command(command);
        }

        Schedule::Keep
    }

    /// Apply one player command between ticks
    fn apply_command(&mut self, command: Command) -> Schedule {
        match command {
            Command::Key(key) => {
                self.game.on_key(key);
                Schedule::Keep
            }
            Command::Reset => {
                self.game.reset();
                self.game.redraw(&mut self.canvas);
                Schedule::Restart
            }
            Command::SelectDifficulty(difficulty) => {
                self.game.set_difficulty(difficulty);
                self.game.redraw(&mut self.canvas);
                Schedule::Restart
            }
            Command::ToggleTheme => {
                let theme = self.game.theme().toggled();
                self.game.set_theme(theme.is_dark(), &mut self.canvas);
                Schedule::Keep
            }
            Command::Quit => {
                self.should_quit = true;
                Schedule::Keep
            }
            Command::None => Schedule::Keep,
        }
    }

    fn draw(&self, terminal: &mut Terminal<CrosstermBackend<Stderr>>) -> Result<()> {
        let hud = self.game.hud();
        terminal
            .draw(|frame| {
                self.renderer.render(frame, &self.canvas, &hud);
            })
            .context("Failed to draw frame")?;
        Ok(())
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}
