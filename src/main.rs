// ghanet - Ghana Digital Network
// Interactive terminal map of the OHCS civil-service network

mod app;
mod metrics;
mod registry;
mod theme;
mod ui;

use anyhow::{Context, Result};
use app::{
    event::{handle_key_event, handle_mouse_event},
    AppState,
};
use crossterm::{
    event::{
        self, DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture,
        Event,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use registry::LocationRegistry;
use std::io;

fn main() -> Result<()> {
    // Validate the registry before touching the terminal so a bad
    // configuration is reported on the normal screen
    let registry = LocationRegistry::ghana().context("invalid location registry")?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableFocusChange
    )?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, registry);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableFocusChange
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = %err, "Application loop failed");
        println!("Error: {:?}", err);
    }
    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    registry: LocationRegistry,
) -> Result<()> {
    let mut app = AppState::new(registry);
    let result = event_loop(terminal, &mut app);
    app.map.unmount();
    result
}

fn event_loop<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppState,
) -> Result<()> {
    loop {
        app.on_tick();
        terminal.draw(|f| ui::draw(f, app))?;

        if !app.running {
            return Ok(());
        }

        if event::poll(app.refresh_config.ui_interval())? {
            match event::read()? {
                Event::Key(key) => {
                    handle_key_event(app, key.code);
                }
                Event::Mouse(mouse) => handle_mouse_event(app, mouse),
                Event::FocusLost => app.pointer_left(),
                _ => {}
            }
        }
    }
}
