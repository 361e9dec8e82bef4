//! Terminal star field (default binary).
//!
//! Uses crossterm for input and a custom framebuffer-based renderer.

use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use log::info;

use star_cartographer::app;
use star_cartographer::cli::Cli;
use star_cartographer::core::Simulation;
use star_cartographer::input::TerminalInput;
use star_cartographer::logging;
use star_cartographer::term::{TerminalDisplay, TerminalRenderer};

// How long an idle poll waits for a key before checking again.
const IDLE_POLL: Duration = Duration::from_millis(10);

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log_file.as_deref())?;

    let config = cli.resolve_config()?;
    info!("starting with {:?}", config);
    let mut sim = Simulation::new(&config)?.with_overdraw(cli.overdraw());

    let mut display = TerminalDisplay::new(TerminalRenderer::new());
    display.renderer_mut().enter()?;

    let mut input = TerminalInput::new().with_wait(IDLE_POLL);
    let result = app::run(&mut sim, &mut input, &mut display, cli.frame_delay());

    // Always try to restore terminal state.
    let _ = display.renderer_mut().exit();
    result.map(|_| ())
}
