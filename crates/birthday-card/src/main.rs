use ratatui::{
    backend::CrosstermBackend,
    crossterm::{
        event::{self, Event as TerminalEvent, KeyEventKind},
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    },
    Terminal,
};
use std::io;
use std::time::{Duration, Instant};

mod actions;
mod command_id;
mod controls;
mod dispatcher;
mod domain_models;
mod keybindings;
mod keymap;
mod logger;
mod middleware;
mod reducers;
mod state;
mod store;
mod utils;
mod views;
mod widgets;

use actions::{Action, GlobalAction};
use birthday_card_config::AppConfig;
use middleware::{
    countdown_timer_middleware::CountdownTimerMiddleware,
    keyboard_middleware::KeyboardMiddleware, logging::LoggingMiddleware,
    media_middleware::MediaMiddleware,
};
use state::AppState;
use store::Store;

fn main() -> anyhow::Result<()> {
    let log_file = logger::init()?;

    log::info!("Starting birthday-card, logging to {}", log_file.display());

    let config = AppConfig::load();
    let animation_tick = Duration::from_millis(config.animation_tick_ms.max(1));
    let countdown_tick = Duration::from_millis(config.countdown_tick_ms.max(1));

    // Runtime for the countdown timer and the music player
    let runtime = tokio::runtime::Runtime::new()?;

    // Initialize store with middleware
    let mut store = Store::new(AppState::new(config.clone()));

    // Add middleware in order (they execute in this order)
    store.add_middleware(Box::new(LoggingMiddleware::new()));
    store.add_middleware(Box::new(KeyboardMiddleware::new()));
    store.add_middleware(Box::new(CountdownTimerMiddleware::new(
        runtime.handle().clone(),
        countdown_tick,
    )));
    store.add_middleware(Box::new(MediaMiddleware::new(
        runtime.handle().clone(),
        config.audio,
    )));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    store.start();

    // Main event loop
    let result = run_app(&mut terminal, &mut store, animation_tick);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Middleware owns tasks on the runtime, drop it first
    drop(store);
    drop(runtime);

    if let Err(err) = result {
        log::error!("Event loop failed: {}", err);
        eprintln!("Error: {}", err);
    }

    log::info!("Exiting birthday-card");
    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    store: &mut Store,
    animation_tick: Duration,
) -> io::Result<()> {
    let mut last_tick = Instant::now();

    loop {
        // Render
        terminal.draw(|frame| {
            let area = frame.area();
            views::render(store.state(), area, frame);
        })?;

        // Check if we should quit
        if !store.state().running {
            break;
        }

        // Handle events until the next animation frame is due
        let timeout = animation_tick.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let TerminalEvent::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press {
                    store.dispatch(Action::Global(GlobalAction::KeyPressed(key)));
                }
            }
        }

        // Actions queued by the countdown timer
        store.drain_pending();

        if last_tick.elapsed() >= animation_tick {
            store.dispatch(Action::Global(GlobalAction::Tick));
            last_tick = Instant::now();
        }
    }

    Ok(())
}
