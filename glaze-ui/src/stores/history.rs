//! History of generated results

use glaze_common::{ImageResponse, ReadyResponse, RetryParams};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Number of display slots shown by default
pub const DEFAULT_LIMIT: usize = 4;

/// Extra entries retained beyond the display limit, so older images can
/// scroll back into view after a delete
pub const SCROLLBACK: usize = 2;

/// One generated result plus everything needed to run it again
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryItem {
    pub image: ImageResponse,
    /// Completion status; unset until the server reports it
    pub ready: Option<ReadyResponse>,
    pub retry: RetryParams,
}

/// Ordered history of generated results, newest first
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryState {
    pub items: Vec<HistoryItem>,
    /// Display limit; [`SCROLLBACK`] entries are retained beyond it
    pub limit: usize,
}

impl Default for HistoryState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            limit: DEFAULT_LIMIT,
        }
    }
}

impl HistoryState {
    /// Prepend a new pending entry, dropping the oldest entries beyond
    /// `limit + SCROLLBACK`.
    pub fn push(&mut self, image: ImageResponse, retry: RetryParams) {
        self.items.insert(
            0,
            HistoryItem {
                image,
                ready: None,
                retry,
            },
        );
        self.items.truncate(self.limit + SCROLLBACK);
    }

    /// Remove every entry generated by the given response.
    pub fn remove(&mut self, image: &ImageResponse) {
        self.items.retain(|it| it.image.key() != image.key());
    }

    /// Record completion status for a pending entry. An unknown key leaves
    /// the history unchanged.
    pub fn set_ready(&mut self, image: &ImageResponse, ready: ReadyResponse) {
        match self.items.iter_mut().find(|it| it.image.key() == image.key()) {
            Some(item) => item.ready = Some(ready),
            None => warn!(key = ?image.key(), "ready status for unknown history entry"),
        }
    }

    /// Change the display limit. Existing entries are only trimmed on the
    /// next push.
    pub fn set_limit(&mut self, limit: usize) {
        self.limit = limit;
    }
}
