//! Feeds a JSON-lines event log through a controller.

use std::io::BufRead;

use crate::kernel::services::bus::event_bus;
use crate::kernel::{WorkspaceController, WorkspaceEvent};

#[derive(Debug, thiserror::Error)]
pub enum ReplayError {
    #[error("failed to read events: {0}")]
    Read(#[from] std::io::Error),
    #[error("line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error("event bus closed")]
    BusClosed,
}

/// One event per line. Blank lines and `#` comments are skipped.
pub fn parse_events<R: BufRead>(reader: R) -> Result<Vec<WorkspaceEvent>, ReplayError> {
    let mut events = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let event = serde_json::from_str(trimmed).map_err(|source| ReplayError::Parse {
            line: idx + 1,
            source,
        })?;
        events.push(event);
    }
    Ok(events)
}

/// Parses the whole input first, so a malformed line leaves the controller untouched.
pub fn replay<R: BufRead>(
    reader: R,
    controller: &mut WorkspaceController,
) -> Result<usize, ReplayError> {
    let events = parse_events(reader)?;
    let (tx, mut rx) = event_bus();
    for event in events {
        tx.send(event).map_err(|_| ReplayError::BusClosed)?;
    }
    drop(tx);

    let handled = controller.drain(&mut rx);
    tracing::info!(handled, "replay finished");
    Ok(handled)
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/replay.rs"]
mod tests;
