//! Accessibility sink publishing on a watch channel

use tokio::sync::watch;
use tracing::debug;

use crate::ports::AccessibilitySink;

/// Publishes the latest announced text; readers only ever see the newest.
#[derive(Debug)]
pub struct AnnounceChannel {
    tx: watch::Sender<String>,
}

impl AnnounceChannel {
    pub fn new() -> (Self, watch::Receiver<String>) {
        let (tx, rx) = watch::channel(String::new());
        (Self { tx }, rx)
    }
}

impl AccessibilitySink for AnnounceChannel {
    fn announce(&mut self, text: &str) {
        let changed = self.tx.send_if_modified(|current| {
            if current == text {
                false
            } else {
                current.clear();
                current.push_str(text);
                true
            }
        });
        if changed {
            debug!("Announced: {}", text);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_latest_announcement() {
        let (mut sink, mut rx) = AnnounceChannel::new();
        sink.announce("3");
        sink.announce("2");
        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow_and_update(), "2");

        sink.announce("2");
        assert!(!rx.has_changed().unwrap());
    }
}
