use clap::{error::ErrorKind, CommandFactory, Parser, ValueEnum};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::Rect,
    Terminal,
};
use std::{
    error::Error,
    io::{self, stdin},
    time::{Duration, Instant},
};

use brainmark::{
    flow::GameFlow,
    games::GameKind,
    input::FrameInput,
    layout::Regions,
    runtime::{AppEvent, CrosstermEventSource, EventSource, FixedTicker, Runner, Ticker},
    ui,
};

const TICK_RATE_MS: u64 = 33;

/// reflex and memory mini games for the terminal
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "A collection of reflex and memory mini games: reaction time, aim trainer, and number memory, with per-game best scores for the session."
)]
pub struct Cli {
    /// seed for deterministic wait times, target positions, and digit sequences
    #[clap(long)]
    seed: Option<u64>,

    /// open this game's start screen directly instead of the menu
    #[clap(short, long, value_enum)]
    game: Option<GameArg>,
}

#[derive(Debug, Copy, Clone, ValueEnum)]
enum GameArg {
    Reaction,
    Aim,
    Number,
    Sequence,
}

impl GameArg {
    fn as_kind(self) -> GameKind {
        match self {
            GameArg::Reaction => GameKind::Reaction,
            GameArg::Aim => GameKind::Aim,
            GameArg::Number => GameKind::Number,
            GameArg::Sequence => GameKind::Sequence,
        }
    }
}

impl Cli {
    fn build_flow(&self) -> GameFlow {
        let mut flow = match self.seed {
            Some(seed) => GameFlow::with_seed(seed),
            None => GameFlow::new(),
        };

        if let Some(game) = self.game {
            flow.open_pregame(game.as_kind());
        }

        flow
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let runner = Runner::new(
        CrosstermEventSource::new(),
        FixedTicker::new(Duration::from_millis(TICK_RATE_MS)),
    );
    let result = run(&mut terminal, &runner, cli.build_flow());

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run<B: Backend, E: EventSource, T: Ticker>(
    terminal: &mut Terminal<B>,
    runner: &Runner<E, T>,
    mut flow: GameFlow,
) -> Result<(), Box<dyn Error>> {
    let mut pointer = (0u16, 0u16);
    let mut last_step = Instant::now();

    loop {
        terminal.draw(|f| ui::draw(&flow, pointer, f))?;

        let event = runner.step();
        let delta_ms = last_step.elapsed().as_secs_f64() * 1000.0;
        last_step = Instant::now();

        let input = match event {
            AppEvent::Tick => FrameInput::idle(pointer),
            AppEvent::Resize => continue,
            AppEvent::Key(key) => match key.code {
                KeyCode::Esc => break,
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => break,
                _ => FrameInput::from_key(&key, pointer),
            },
            AppEvent::Mouse(mouse) => {
                let input = FrameInput::from_mouse(&mouse);
                pointer = input.pointer;
                input
            }
        };

        let size = terminal.size()?;
        let regions = Regions::compute(Rect::new(0, 0, size.width, size.height));
        flow.update(delta_ms, &input, &regions);
    }

    Ok(())
}
