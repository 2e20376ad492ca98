pub mod classify;
pub mod config;
pub mod matcher;
pub mod runtime;
pub mod score;
pub mod session;
pub mod timer;
pub mod ui;
pub mod words;

use clap::{error::ErrorKind, CommandFactory, Parser};
use crossterm::{
    event::{KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::{
    error::Error,
    io::{self, stdin},
    sync::mpsc::{Receiver, Sender},
};

use crate::config::{Config, ConfigStore, FileConfigStore};
use crate::runtime::{event_channel, spawn_input_reader, Event};
use crate::session::{KeyStroke, Session, Status};
use crate::timer::ThreadScheduler;
use crate::words::SourceKind;

/// fixed-time korean typing drill for the terminal
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "A fixed-time typing drill: hit enter, type the displayed words before the countdown runs out, and see how many you got right. Target words come from swappable generators: random hangul pseudo-phrases, a korean noun list, or an english word list."
)]
pub struct Cli {
    /// number of target words per session (overrides the config file)
    #[clap(short = 'w', long)]
    number_of_words: Option<usize>,

    /// session length in seconds (overrides the config file)
    #[clap(short = 's', long)]
    number_of_secs: Option<u64>,

    /// word generator feeding the target list (overrides the config file)
    #[clap(short = 'g', long, value_enum)]
    source: Option<SourceKind>,
}

/// Effective settings after layering CLI flags over the stored config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub number_of_words: usize,
    pub number_of_secs: u64,
    pub source: SourceKind,
}

impl Settings {
    pub fn resolve(cli: &Cli, config: &Config) -> Self {
        Self {
            number_of_words: cli.number_of_words.unwrap_or(config.number_of_words),
            number_of_secs: cli.number_of_secs.unwrap_or(config.number_of_secs),
            source: cli.source.unwrap_or_else(|| config.source_kind()),
        }
    }
}

pub struct App {
    pub session: Session,
    /// The raw input capture. It owns the in-progress text the way a text
    /// field would and mirrors every edit into the session, which keeps its
    /// own copy as the authoritative commit buffer.
    pub field: String,
}

impl App {
    pub fn new(settings: &Settings, tx: Sender<Event>) -> Self {
        let source = settings.source.as_source();
        let scheduler = ThreadScheduler::per_second(tx);
        Self::with_session(Session::new(
            source,
            Box::new(scheduler),
            settings.number_of_words,
            settings.number_of_secs,
        ))
    }

    pub fn with_session(session: Session) -> Self {
        Self {
            session,
            field: String::new(),
        }
    }

    /// The start button: begins from `Waiting`, restarts from `Finished`,
    /// does nothing mid-session. The capture field only empties on an
    /// actual (re)start, never under a running session.
    pub fn press_enter(&mut self) {
        let was_started = self.session.status() == Status::Started;
        self.session.start();
        if !was_started {
            self.field.clear();
        }
    }

    /// Space commits the word as currently captured, then the field resets
    /// for the next one. The key-down reaches the session first, exactly
    /// like a keydown handler running before the field edit lands.
    pub fn press_space(&mut self) {
        self.session.handle_key(KeyStroke::Space);
        self.field.clear();
    }

    pub fn press_backspace(&mut self) {
        if self.session.status() != Status::Started {
            return;
        }
        self.session.handle_key(KeyStroke::Backspace);
        self.field.pop();
        self.session.sync_input(&self.field);
    }

    pub fn type_char(&mut self, c: char) {
        if self.session.status() != Status::Started {
            return;
        }
        self.session.handle_key(KeyStroke::Char(c));
        self.field.push(c);
        self.session.sync_input(&self.field);
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    let config = FileConfigStore::new().load();
    let settings = Settings::resolve(&cli, &config);

    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let (tx, rx) = event_channel();
    spawn_input_reader(tx.clone());

    let mut app = App::new(&settings, tx);
    let res = run_app(&mut terminal, &mut app, &rx);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    rx: &Receiver<Event>,
) -> Result<(), Box<dyn Error>> {
    loop {
        terminal.draw(|f| f.render_widget(&*app, f.area()))?;

        match rx.recv()? {
            Event::Tick => app.session.tick(),
            Event::Resize => {}
            Event::Key(key) => {
                if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c')
                {
                    break;
                }

                match key.code {
                    KeyCode::Esc => break,
                    KeyCode::Enter => app.press_enter(),
                    KeyCode::Backspace => app.press_backspace(),
                    KeyCode::Char(' ') => app.press_space(),
                    KeyCode::Char(c) => app.type_char(c),
                    KeyCode::Modifier(_) => app.session.handle_key(KeyStroke::Modifier),
                    _ => {}
                }
            }
        }
    }

    Ok(())
}
