mod buffer;
mod paint;
mod terminal;

use std::fs::{self, File};
use std::io;
use std::time::Duration;

use crossterm::event::{Event, KeyCode, KeyEventKind, MouseButton, MouseEventKind};
use morphmenu::{Animate, Color, ConfigError, FrameClock, MenuConfig, MenuRoot};
use simplelog::{Config, LevelFilter, WriteLogger};

use crate::terminal::Terminal;

const LABELS: [&str; 4] = ["DASHBOARD", "HISTORY", "STATISTICS", "SETTINGS"];
const DEFAULT_BACKGROUND: &str = "#533557";
const FRAME: Duration = Duration::from_millis(16);

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> io::Result<()> {
    let log_file = File::create("morphmenu-tui.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file).map_err(io::Error::other)?;

    let config = load_config()?;
    let background = load_background().map_err(io::Error::other)?;
    let accent = config.accent;
    log::info!("starting with background {background}, accent {accent}");

    let mut root = MenuRoot::new(config, LABELS, false);
    let mut term = Terminal::new(background)?;
    let mut clock = FrameClock::new();

    loop {
        root.tick(clock.frame());
        let hits = term.draw(&root.render(), accent)?;

        let timeout = if root.is_animating() {
            Some(FRAME)
        } else {
            None
        };
        let events = term.poll(timeout)?;
        if timeout.is_none() {
            // Idle time must not count as animation time.
            clock.reset();
        }

        for event in events {
            match event {
                Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => {
                        log::info!("quit");
                        return Ok(());
                    }
                    KeyCode::Char(' ') | KeyCode::Enter => {
                        let target = root.menu().active_tap_target();
                        root.request_tap(target);
                    }
                    _ => {}
                },
                Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                    match hits.hit(mouse.column, mouse.row) {
                        Some(id) => {
                            root.request_tap(id);
                        }
                        None => log::trace!("click at {},{} hit nothing", mouse.column, mouse.row),
                    }
                }
                _ => {}
            }
        }
        // Everything requested during this batch lands as one intent change.
        root.flush();
    }
}

/// Optional first argument: path to a JSON config.
fn load_config() -> io::Result<MenuConfig> {
    let Some(path) = std::env::args().nth(1) else {
        return Ok(MenuConfig::default());
    };
    log::debug!("loading config from {path}");
    let text = fs::read_to_string(&path)?;
    MenuConfig::from_json(&text).map_err(io::Error::other)
}

fn load_background() -> Result<Color, ConfigError> {
    let hex = std::env::var("MORPHMENU_BACKGROUND").unwrap_or_else(|_| DEFAULT_BACKGROUND.into());
    Ok(Color::from_hex(&hex)?)
}
