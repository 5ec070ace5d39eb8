//! Replay command handler
//!
//! Feeds a recorded event script through a session, exactly as a host
//! would forward pointer events, then reports the resulting dots.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use mapdots_core::{DotPersistence, DotStore, InteractionEvent, Mode, Session};

use crate::output::Output;

/// Apply every event in `path` to the store
pub fn run<P: DotPersistence>(
    store: DotStore<P>,
    path: &Path,
    mode: Mode,
    output: &Output,
) -> Result<()> {
    let script =
        fs::read_to_string(path).with_context(|| format!("Failed to read events from {:?}", path))?;
    let events = parse_events(&script).with_context(|| format!("Invalid events in {:?}", path))?;

    let session = replay(store, mode, events);

    output.message(&format!(
        "Replayed session ends in {:?} mode",
        session.mode()
    ));
    output.print_dots(session.store().dots());
    Ok(())
}

fn parse_events(script: &str) -> Result<Vec<InteractionEvent>> {
    Ok(serde_json::from_str(script)?)
}

fn replay<P: DotPersistence>(
    store: DotStore<P>,
    mode: Mode,
    events: Vec<InteractionEvent>,
) -> Session<P> {
    let mut session = Session::new(store);
    session.set_mode(mode);
    for (index, event) in events.into_iter().enumerate() {
        debug!(index, ?event, "Applying event");
        session.apply(event);
    }
    session
}
