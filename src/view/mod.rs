//! TUI rendering and terminal management (impure shell).

mod article;
pub mod constants;
mod layout;
mod styles;
mod text_input;

pub use article::{article_lines, is_heading};
pub use layout::render_layout;
pub use text_input::TextInputWidget;

use crate::client::{BrowserLauncher, HttpWikiClient, RequestWorker, SystemBrowser, WikiApi};
use crate::config::ResolvedConfig;
use crate::model::AppError;
use crate::state::{update, AppEvent, AppState, Effect};
use crossterm::{
    event::{self, Event},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use tracing::{debug, warn};

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    state: AppState,
    worker: RequestWorker,
    launcher: Box<dyn BrowserLauncher>,
    /// Completions posted by the worker threads
    completions: Receiver<AppEvent>,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen
    pub fn new(api: Arc<dyn WikiApi>) -> Result<Self, AppError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Self::with_terminal(terminal, api, Box::new(SystemBrowser))
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Assemble an application around an existing terminal.
    ///
    /// The state starts on the wiki selection screen, sized to the terminal.
    pub fn with_terminal(
        terminal: Terminal<B>,
        api: Arc<dyn WikiApi>,
        launcher: Box<dyn BrowserLauncher>,
    ) -> Result<Self, AppError> {
        let (tx, rx) = mpsc::channel();
        let size = terminal.size()?;

        let mut app = Self {
            terminal,
            state: AppState::default(),
            worker: RequestWorker::new(api, tx),
            launcher,
            completions: rx,
        };
        app.handle_event(AppEvent::Resize {
            width: size.width,
            height: size.height,
        });
        Ok(app)
    }

    /// Run the main event loop
    ///
    /// Returns when a transition asks to quit. Redraws only after terminal
    /// input or a request completion.
    pub fn run(&mut self) -> Result<(), AppError> {
        self.draw()?;

        loop {
            let mut dirty = false;

            if event::poll(constants::EVENT_POLL_INTERVAL)? {
                let quit = match event::read()? {
                    Event::Key(key) => self.handle_event(AppEvent::Key(key)),
                    Event::Resize(width, height) => {
                        self.handle_event(AppEvent::Resize { width, height })
                    }
                    _ => false,
                };
                if quit {
                    return Ok(());
                }
                dirty = true;
            }

            if self.drain_completions() {
                dirty = true;
            }

            if dirty {
                self.draw()?;
            }
        }
    }

    /// Feed one event through the state machine and perform its effects.
    ///
    /// Returns true when the application should exit.
    pub fn handle_event(&mut self, event: AppEvent) -> bool {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, event);
        self.state = state;
        self.perform(effects)
    }

    fn perform(&mut self, effects: Vec<Effect>) -> bool {
        let mut quit = false;
        for effect in effects {
            match effect {
                Effect::Search { id, term, source } => self.worker.search(id, term, source),
                Effect::FetchArticle { id, title, source } => {
                    self.worker.fetch_article(id, title, source)
                }
                Effect::OpenInBrowser { url } => {
                    if let Err(err) = self.launcher.open(&url) {
                        warn!(error = %err, "Could not open browser");
                    }
                }
                Effect::Quit => {
                    debug!("Quit requested");
                    quit = true;
                }
            }
        }
        quit
    }

    /// Apply every completion that has arrived. Returns true if there were any.
    fn drain_completions(&mut self) -> bool {
        let mut any = false;
        while let Ok(event) = self.completions.try_recv() {
            self.handle_event(event);
            any = true;
        }
        any
    }

    /// Render the current frame
    pub fn draw(&mut self) -> Result<(), AppError> {
        let state = &self.state;
        self.terminal.draw(|frame| render_layout(frame, state))?;
        Ok(())
    }

    /// Current application state.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// The terminal backend, for inspecting rendered output in tests.
    pub fn backend(&self) -> &B {
        self.terminal.backend()
    }

    /// Block until one request completion arrives (or `timeout` passes) and apply it.
    ///
    /// Returns false on timeout.
    #[cfg(test)]
    pub(crate) fn wait_for_completion(&mut self, timeout: std::time::Duration) -> bool {
        match self.completions.recv_timeout(timeout) {
            Ok(event) => {
                self.handle_event(event);
                true
            }
            Err(_) => false,
        }
    }
}

/// Initialize and run the TUI application
///
/// Handles terminal setup, runs the event loop, and restores the terminal on
/// exit, including when setup or the loop fails.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run(config: &ResolvedConfig) -> Result<(), AppError> {
    let api: Arc<dyn WikiApi> = Arc::new(HttpWikiClient::new(config).map_err(AppError::Client)?);

    let result = TuiApp::new(api).and_then(|mut app| app.run());

    // Always restore terminal state
    restore_terminal()?;

    result
}

/// Restore terminal to normal state
///
/// Disables raw mode and leaves alternate screen
fn restore_terminal() -> Result<(), AppError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}
