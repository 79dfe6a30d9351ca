use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use crossterm::event::{Event as CrosstermEvent, EventStream};
use futures_util::StreamExt;
use log::{debug, error, info};

use folio::app::App;
use folio::config::DeckSettings;
use folio::event::Event;
use folio::logging;
use folio::tui::{self, Tui};
use folio::ui::render;

#[tokio::main]
async fn main() -> Result<()> {
    let root = match env::args_os().nth(1) {
        Some(arg) => PathBuf::from(arg),
        None => env::current_dir().context("failed to resolve working directory")?,
    };
    let settings = DeckSettings::load(&root)?;
    logging::init(&root, &settings)?;

    // Bundles are validated before the terminal is touched, so a broken
    // translation file is reported on a normal screen.
    let mut app = match App::from_settings(settings) {
        Ok(app) => app,
        Err(err) => {
            error!("failed to start deck: {err:#}");
            return Err(err);
        }
    };
    info!(
        "Starting deck at {} in {}",
        root.display(),
        app.active_language()
    );

    let mut terminal = tui::init()?;
    let result = run(&mut terminal, &mut app).await;
    tui::restore()?;
    if let Err(err) = &result {
        error!("deck loop failed: {err:#}");
    }
    info!("Deck closed");
    result
}

async fn run(terminal: &mut Tui, app: &mut App) -> Result<()> {
    let mut stream = EventStream::new();
    let mut interval = tokio::time::interval(app.tick_rate());

    while !app.should_quit {
        terminal.draw(|frame| render(frame, app))?;

        let event = tokio::select! {
            _ = interval.tick() => Event::Tick,
            maybe_event = stream.next() => {
                match maybe_event {
                    Some(Ok(CrosstermEvent::Key(key))) => Event::Key(key),
                    Some(Ok(CrosstermEvent::Mouse(mouse))) => Event::Mouse(mouse),
                    Some(Ok(CrosstermEvent::Resize(width, height))) => Event::Resize(width, height),
                    Some(Ok(_)) => continue,
                    Some(Err(err)) => return Err(err).context("failed to read terminal event"),
                    None => break,
                }
            }
        };

        match event {
            Event::Tick => app.on_tick(),
            Event::Key(key) => app.handle_key(key),
            Event::Mouse(mouse) => app.handle_mouse(mouse),
            Event::Resize(width, height) => {
                debug!("terminal resized to {width}x{height}");
            }
        }
    }
    Ok(())
}
