#![warn(clippy::all, rust_2018_idioms)]

use anyhow::Context;
use dppx_core::prelude::*;
use env_logger::Env;
use log::{debug, info, warn};
use std::env;
use std::io::{self, BufWriter};

fn main() -> anyhow::Result<()> {
    // Diagnostics go to stderr; stdout carries nothing but CSS
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let extra: Vec<String> = env::args().skip(1).collect();
    if !extra.is_empty() {
        warn!("dppx-css takes no arguments, ignoring: {}", extra.join(" "));
    }

    let breakpoints = &*STANDARD_BREAKPOINTS;
    info!(
        "Generating {} {} rules",
        breakpoints.len(),
        CANVAS_WRAPPER_SELECTOR
    );

    let stdout = io::stdout();
    let mut emitter = Emitter::new(BufWriter::new(stdout.lock()));
    let written = emitter
        .emit_all(breakpoints)
        .context("Failed to write stylesheet to stdout")?;
    emitter.flush().context("Failed to flush stdout")?;

    debug!("Wrote {written} media rules");
    Ok(())
}
