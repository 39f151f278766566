//! TUI application state and logic

use crate::core::Scale;
use crate::session::{Mode, Narration, Outcome, Phase, SolverConfig, SolverSession};
use crate::solver::Universe;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;

/// Chat log length kept on screen
const MAX_MESSAGES: usize = 200;

/// Application state
pub struct App {
    pub session: SolverSession,
    pub scale: Scale,
    pub mode: Mode,
    pub secret: Option<String>,
    pub universe_size: usize,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub input_mode: InputMode,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// The session waits for a guess or feedback
    Typing,
    /// The engine is computing; only Esc is read
    Thinking,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub speaker: Speaker,
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    Engine,
    Player,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub total_turns: usize,
}

impl Statistics {
    #[must_use]
    pub fn average_turns(&self) -> Option<f64> {
        (self.games_won > 0).then(|| self.total_turns as f64 / self.games_won as f64)
    }
}

impl App {
    #[must_use]
    pub fn new(scale: Scale, mode: Mode, secret: Option<String>, config: SolverConfig) -> Self {
        let session = SolverSession::with_config(scale, mode, secret.as_deref(), config);

        let mut app = Self {
            session,
            scale,
            mode,
            secret,
            universe_size: Universe::size_for(scale),
            input_buffer: String::new(),
            messages: Vec::new(),
            stats: Statistics::default(),
            input_mode: InputMode::Thinking,
            should_quit: false,
        };
        app.add_message(Speaker::Engine, app.welcome(), MessageStyle::Info);
        app
    }

    fn welcome(&self) -> String {
        match self.mode {
            Mode::Attack => "Welcome! Guess my code. Type 'stop' to give up.".to_string(),
            Mode::Defense => format!(
                "Welcome! Think of a {}-digit code with no repeated digits, I'll find it.",
                self.scale
            ),
            Mode::Autoplay => "Welcome! Watch me play against myself.".to_string(),
        }
    }

    pub fn new_game(&mut self) {
        let config = *self.session.config();
        self.session =
            SolverSession::with_config(self.scale, self.mode, self.secret.as_deref(), config);
        self.input_buffer.clear();
        self.messages.clear();
        self.input_mode = InputMode::Thinking;
        self.add_message(Speaker::Engine, "New game started!", MessageStyle::Info);
    }

    /// Record one narration from the session
    pub fn push_narration(&mut self, narration: Narration) {
        let style = match &narration.outcome {
            None => MessageStyle::Info,
            Some(Outcome::Solved { .. }) => MessageStyle::Success,
            Some(Outcome::Invalid(_)) => MessageStyle::Error,
            Some(_) => MessageStyle::Warning,
        };

        if let Some(outcome) = &narration.outcome {
            self.record(outcome);
        }
        self.add_message(Speaker::Engine, narration.text, style);
    }

    fn record(&mut self, outcome: &Outcome) {
        if matches!(outcome, Outcome::Invalid(_)) {
            return;
        }
        self.stats.total_games += 1;
        if let Outcome::Solved { turns, .. } = outcome {
            self.stats.games_won += 1;
            self.stats.total_turns += turns;
        }
    }

    /// Submit the input line: `stop`, a guess (Attack) or feedback (Defense)
    pub fn submit_input(&mut self) {
        let input = self.input_buffer.trim().to_string();
        self.input_buffer.clear();
        if input.is_empty() {
            return;
        }
        self.add_message(Speaker::Player, input.clone(), MessageStyle::Info);

        let reply = if input.eq_ignore_ascii_case("stop") {
            self.session.cancel()
        } else if self.mode == Mode::Defense {
            self.session.submit_feedback_text(&input)
        } else {
            self.session.submit_guess(&input)
        };

        match reply {
            Ok(narration) => self.push_narration(narration),
            Err(err) => self.add_message(Speaker::Engine, format!("❌ {err}"), MessageStyle::Error),
        }
        self.input_mode = InputMode::Thinking;
    }

    /// Settle the input mode once the session has paused or finished
    pub fn sync_input_mode(&mut self) {
        self.input_mode = match self.session.phase() {
            Phase::Finished => InputMode::GameOver,
            Phase::AwaitingFeedback | Phase::AwaitingAttackGuess => InputMode::Typing,
            _ => InputMode::Thinking,
        };
        if self.input_mode == InputMode::GameOver
            && let Some(secret) = self.session.revealed_secret()
            && self.mode != Mode::Defense
        {
            self.add_message(
                Speaker::Engine,
                format!("The secret was {secret}. Press 'n' for a new game or 'q' to quit."),
                MessageStyle::Info,
            );
        } else if self.input_mode == InputMode::GameOver {
            self.add_message(
                Speaker::Engine,
                "Press 'n' for a new game or 'q' to quit.",
                MessageStyle::Info,
            );
        }
    }

    pub fn add_message(&mut self, speaker: Speaker, text: impl Into<String>, style: MessageStyle) {
        self.messages.push(Message {
            speaker,
            text: text.into(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    #[must_use]
    pub fn input_hint(&self) -> &'static str {
        match (self.input_mode, self.mode) {
            (InputMode::Thinking, _) => " Thinking... | Esc to stop ",
            (InputMode::GameOver, _) => " Game over | 'n' new game, 'q' quit ",
            (InputMode::Typing, Mode::Defense) => " Feedback like '1s 2b' | 'stop' to end ",
            (InputMode::Typing, _) => " Your guess | 'stop' to give up ",
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

/// True when Esc or Ctrl-C is waiting in the event queue
///
/// Other keys pressed while the engine thinks are discarded.
fn stop_requested() -> bool {
    while event::poll(Duration::ZERO).unwrap_or(false) {
        if let Ok(Event::Key(key)) = event::read()
            && key.kind == KeyEventKind::Press
            && (key.code == KeyCode::Esc || is_ctrl_c(&key))
        {
            return true;
        }
    }
    false
}

fn is_ctrl_c(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

/// Pull narration one message at a time, redrawing after each
fn drive<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    app.input_mode = InputMode::Thinking;
    terminal.draw(|f| super::rendering::ui(f, app))?;

    loop {
        // One step per call so the session borrow ends before redrawing
        let next = app.session.run(stop_requested).next();
        let Some(narration) = next else { break };
        app.push_narration(narration);
        terminal.draw(|f| super::rendering::ui(f, app))?;
    }

    app.sync_input_mode();
    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    drive(terminal, &mut app)?;

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if is_ctrl_c(&key) {
                app.should_quit = true;
            }

            match app.input_mode {
                InputMode::GameOver => match key.code {
                    KeyCode::Char('q') => app.should_quit = true,
                    KeyCode::Char('n') => {
                        app.new_game();
                        drive(terminal, &mut app)?;
                    }
                    _ => {}
                },
                InputMode::Typing => match key.code {
                    KeyCode::Char('q') => app.should_quit = true,
                    KeyCode::Char(c) if c.is_ascii_alphanumeric() || c == ' ' => {
                        app.input_buffer.push(c);
                    }
                    KeyCode::Backspace => {
                        app.input_buffer.pop();
                    }
                    KeyCode::Esc => app.input_buffer.clear(),
                    KeyCode::Enter => {
                        app.submit_input();
                        drive(terminal, &mut app)?;
                    }
                    _ => {}
                },
                // Keys only arrive here between computations
                InputMode::Thinking => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
