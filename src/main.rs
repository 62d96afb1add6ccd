//! moodmate - terminal mood check-in client
//!
//! Pick a mood, cross-fade to the persona picker, confirm a chat persona.
//! Light/dark theme toggles at runtime.

mod config;
mod core;
mod data;
mod frontend;
mod theme;
mod ui;

use crate::core::{route_key, AppAction, AppCore};
use anyhow::{Context, Result};
use clap::{Parser as ClapParser, Subcommand};
use crossterm::event::{MouseButton, MouseEventKind};
use frontend::{Frontend, FrontendEvent, TuiFrontend};
use std::path::PathBuf;
use std::time::Instant;

#[derive(ClapParser)]
#[command(name = "moodmate")]
#[command(about = "Terminal mood check-in and chat persona picker", long_about = None)]
struct Cli {
    /// Starting theme, overriding the configured one
    #[arg(long, value_enum)]
    theme: Option<ThemeArg>,

    /// Custom data directory (default: ~/.moodmate)
    /// Can also be set via MOODMATE_DIR environment variable
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum ThemeArg {
    Light,
    Dark,
}

impl ThemeArg {
    fn mode(self) -> theme::ThemeMode {
        match self {
            ThemeArg::Light => theme::ThemeMode::Light,
            ThemeArg::Dark => theme::ThemeMode::Dark,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Load the configuration, check it, and exit
    ValidateConfig,
}

fn main() -> Result<()> {
    // Initialize logging to file (use RUST_LOG env var to control level)
    // TUI apps can't log to stdout, so we write to a file
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open("moodmate.log")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Mutex::new(log_file))
        .with_ansi(false) // No color codes in log file
        .init();

    let cli = Cli::parse();

    if let Some(Commands::ValidateConfig) = cli.command {
        return validate_config(cli.data_dir);
    }

    let mut config = config::Config::load(cli.data_dir).context("Failed to load configuration")?;
    if let Some(theme_arg) = cli.theme {
        config.appearance.theme = theme_arg.mode().id().to_string();
    }

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async_run_tui(config))
}

/// Load and check the configuration, printing a summary
fn validate_config(data_dir: Option<PathBuf>) -> Result<()> {
    let base = config::Config::base_dir(data_dir.clone())?;
    println!("Validating configuration in {:?}", base);

    match config::Config::load(data_dir).and_then(|c| {
        c.validate()?;
        Ok(c)
    }) {
        Ok(config) => {
            println!("✓ Configuration loaded successfully");
            println!("  {} moods defined", config.moods.len());
            println!("  {} roles defined", config.roles.len());
            println!("  theme: {}", config.appearance.theme);
            println!("  fade stage: {}ms", config.transition.fade_ms);
            Ok(())
        }
        Err(e) => {
            eprintln!("✗ Configuration is invalid: {:#}", e);
            std::process::exit(1);
        }
    }
}

async fn async_run_tui(config: config::Config) -> Result<()> {
    let mut app_core = AppCore::new(config)?;
    let mut frontend = TuiFrontend::new()?;
    let clock = Instant::now();

    // Main event loop
    let result = run_loop(&mut app_core, &mut frontend, clock);

    frontend.cleanup()?;
    result
}

fn run_loop(core: &mut AppCore, frontend: &mut TuiFrontend, clock: Instant) -> Result<()> {
    while core.running {
        let events = frontend.poll_events()?;
        let now_ms = clock.elapsed().as_millis() as u64;

        for event in events {
            match event {
                FrontendEvent::Key { code, modifiers } => {
                    let key = crossterm::event::KeyEvent::new(code, modifiers);
                    let action = route_key(key, core.ui_state.input_mode);
                    apply_action(core, action, now_ms);
                }
                FrontendEvent::Mouse { kind, x, y } => {
                    if kind == MouseEventKind::Down(MouseButton::Left) {
                        handle_click(core, frontend, x, y, now_ms);
                    }
                }
                FrontendEvent::Resize { .. } => {
                    core.needs_render = true;
                }
                FrontendEvent::Quit => core.quit(),
            }
        }

        core.tick(clock.elapsed().as_millis() as u64);

        if core.needs_render {
            frontend.render(core)?;
            core.needs_render = false;
        }
    }

    Ok(())
}

/// Apply a routed key action to the core
fn apply_action(core: &mut AppCore, action: AppAction, now_ms: u64) {
    match action {
        AppAction::HighlightNext => move_highlight(core, 1),
        AppAction::HighlightPrev => move_highlight(core, -1),
        AppAction::PickHighlighted => {
            let idx = match core.transitions.active_panel() {
                Some(data::Panel::Mood) => core.ui_state.highlighted_mood,
                Some(data::Panel::Role) => core.ui_state.highlighted_role,
                None => return,
            };
            pick_index(core, idx, now_ms);
        }
        AppAction::PickIndex(idx) => pick_index(core, idx, now_ms),
        AppAction::Back => core.go_back(now_ms),
        AppAction::ToggleTheme => core.toggle_theme(),
        AppAction::Acknowledge => core.acknowledge_role(),
        AppAction::Quit => core.quit(),
        AppAction::None => {}
    }
}

/// Move the keyboard highlight on whichever panel is settled
fn move_highlight(core: &mut AppCore, delta: isize) {
    match core.transitions.active_panel() {
        Some(data::Panel::Mood) => {
            let count = core.config.moods.len();
            core.ui_state.highlight_mood(delta, count);
            core.needs_render = true;
        }
        Some(data::Panel::Role) => {
            let count = core.config.roles.len();
            core.ui_state.highlight_role(delta, count);
            core.needs_render = true;
        }
        None => {}
    }
}

/// Pick the n-th item on the settled panel
fn pick_index(core: &mut AppCore, idx: usize, now_ms: u64) {
    match core.transitions.active_panel() {
        Some(data::Panel::Mood) => {
            if let Some(mood) = core.config.moods.get(idx) {
                let id = mood.id.clone();
                core.select_mood(now_ms, &id);
            }
        }
        Some(data::Panel::Role) => {
            if let Some(role) = core.config.roles.get(idx) {
                let id = role.id.clone();
                core.select_role(&id);
            }
        }
        None => {}
    }
}

/// Resolve a left click against the last rendered frame
fn handle_click(core: &mut AppCore, frontend: &TuiFrontend, x: u16, y: u16, now_ms: u64) {
    use ui::HitTarget;

    let Some(target) = frontend.hit_test(x, y) else {
        return;
    };

    // The confirmation dialog is modal: clicks only land on it
    if core.ui_state.input_mode == data::InputMode::ConfirmRole {
        if target == HitTarget::Dialog {
            core.acknowledge_role();
        }
        return;
    }

    match target {
        HitTarget::Mood(idx) | HitTarget::Role(idx) => pick_index(core, idx, now_ms),
        HitTarget::Back => core.go_back(now_ms),
        HitTarget::ThemeToggle => core.toggle_theme(),
        HitTarget::Dialog => {}
    }
}
