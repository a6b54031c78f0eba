//! Replay a recorded list of actions against a store.
//!
//! The file format is a JSON array of [`Action`]s:
//!
//! ```json
//! [
//!   { "slice": "auth", "action": { "type": "loginStart" } },
//!   { "slice": "products", "action": { "type": "sortProducts", "payload": "price-asc" } }
//! ]
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::store::{Action, Store};

/// Errors that can occur when loading an action file.
#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("Failed to read action file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse actions: {source}")]
    Parse {
        #[source]
        source: serde_json::Error,
    },
}

/// Counts collected while replaying.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReplaySummary {
    /// Actions dispatched.
    pub dispatched: usize,
    /// Actions that changed some slice state.
    pub changed: usize,
}

/// Parse a JSON array of actions.
pub fn parse_actions(json: &str) -> Result<Vec<Action>, ReplayError> {
    serde_json::from_str(json).map_err(|source| ReplayError::Parse { source })
}

/// Read and parse an action file.
pub fn load_actions(path: &Path) -> Result<Vec<Action>, ReplayError> {
    let content = fs::read_to_string(path).map_err(|source| ReplayError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_actions(&content)
}

/// Dispatch `actions` in order.
pub fn replay<I>(store: &mut Store, actions: I) -> ReplaySummary
where
    I: IntoIterator<Item = Action>,
{
    let mut summary = ReplaySummary::default();
    for action in actions {
        summary.dispatched += 1;
        if store.dispatch(action) {
            summary.changed += 1;
        }
    }
    summary
}
