//! Run loop tying the simulation to an input source and a display.

use std::thread;
use std::time::Duration;

use anyhow::Result;
use log::info;

use crate::core::{DisplaySink, InputSource, Simulation};

/// Drive `sim` until the input source asks to quit.
///
/// Presents the first frame before polling, then sleeps `frame_delay` after
/// every presented frame. Returns the number of frames presented.
pub fn run(
    sim: &mut Simulation,
    input: &mut dyn InputSource,
    display: &mut dyn DisplaySink,
    frame_delay: Duration,
) -> Result<u64> {
    sim.start(display)?;
    let mut presented = 1u64;

    while !input.quit_requested() {
        if sim.pump(input, display)? {
            presented += 1;
            if !frame_delay.is_zero() {
                thread::sleep(frame_delay);
            }
        }
    }

    info!("quit after {} frames", presented);
    Ok(presented)
}
