use std::time::Duration;

use tokio::time::Instant;

/// Collapses keystroke-level search input. The latest text is released
/// once a quiet interval elapses; every newer keystroke cancels the
/// pending one; an explicit submit releases immediately. Only the most
/// recent text survives, intermediate keystrokes are dropped.
pub struct Debouncer {
    delay: Duration,
    pending: Option<String>,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
            deadline: None,
        }
    }

    /// Record a keystroke, restarting the quiet interval.
    pub fn offer(&mut self, text: String) {
        self.pending = Some(text);
        self.deadline = Some(Instant::now() + self.delay);
    }

    /// Take the pending text immediately (explicit submit). Returns
    /// `None` when nothing is buffered.
    pub fn flush(&mut self) -> Option<String> {
        self.deadline = None;
        self.pending.take()
    }

    /// Resolve once the quiet interval elapses, yielding the pending
    /// text. Pends forever while nothing is buffered, which makes it
    /// safe as a `select!` arm.
    pub async fn released(&mut self) -> String {
        match self.deadline {
            Some(deadline) => {
                tokio::time::sleep_until(deadline).await;
                self.deadline = None;
                self.pending.take().unwrap_or_default()
            }
            None => std::future::pending().await,
        }
    }
}
