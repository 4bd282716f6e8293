//! Tick scheduling on the tokio runtime

use std::{collections::HashMap, time::Duration};

use tokio::{
    sync::mpsc,
    task::JoinHandle,
    time::{interval_at, Instant, MissedTickBehavior},
};
use tracing::debug;

use crate::ports::{Scheduler, TickToken};

/// Scheduler that spawns one interval task per armed chain. Each tick is
/// delivered as its `TickToken` on an unbounded channel; the owner of the
/// countdown forwards only tokens that are still armed.
///
/// Must be used from within a tokio runtime.
#[derive(Debug)]
pub struct TokioScheduler {
    origin: Instant,
    next_id: u64,
    tick_tx: mpsc::UnboundedSender<TickToken>,
    tasks: HashMap<TickToken, JoinHandle<()>>,
}

impl TokioScheduler {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<TickToken>) {
        let (tick_tx, tick_rx) = mpsc::unbounded_channel();
        let scheduler = Self {
            origin: Instant::now(),
            next_id: 0,
            tick_tx,
            tasks: HashMap::new(),
        };
        (scheduler, tick_rx)
    }

    /// Number of interval tasks still alive
    pub fn active_chains(&self) -> usize {
        self.tasks.len()
    }
}

impl Scheduler for TokioScheduler {
    fn now_ms(&self) -> i64 {
        i64::try_from(self.origin.elapsed().as_millis()).unwrap_or(i64::MAX)
    }

    fn schedule_repeating(&mut self, period: Duration) -> TickToken {
        self.next_id += 1;
        let token = TickToken(self.next_id);
        let tick_tx = self.tick_tx.clone();
        // The first tick fires one period after arming.
        let first = Instant::now() + period;

        let handle = tokio::spawn(async move {
            let mut interval = interval_at(first, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                interval.tick().await;
                if tick_tx.send(token).is_err() {
                    debug!("Tick receiver closed, ending chain {:?}", token);
                    break;
                }
            }
        });

        self.tasks.insert(token, handle);
        token
    }

    fn cancel(&mut self, token: TickToken) {
        if let Some(handle) = self.tasks.remove(&token) {
            handle.abort();
            debug!("Cancelled tick chain {:?}", token);
        }
    }
}

impl Drop for TokioScheduler {
    fn drop(&mut self) {
        for (_, handle) in self.tasks.drain() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn ticks_every_period_after_the_first() {
        let (mut scheduler, mut ticks) = TokioScheduler::new();
        let token = scheduler.schedule_repeating(Duration::from_millis(1000));

        tokio::time::sleep(Duration::from_millis(999)).await;
        assert!(ticks.try_recv().is_err());

        assert_eq!(ticks.recv().await, Some(token));
        assert_eq!(scheduler.now_ms(), 1000);
        assert_eq!(ticks.recv().await, Some(token));
        assert_eq!(scheduler.now_ms(), 2000);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_ends_the_chain() {
        let (mut scheduler, mut ticks) = TokioScheduler::new();
        let first = scheduler.schedule_repeating(Duration::from_millis(100));
        let second = scheduler.schedule_repeating(Duration::from_millis(100));
        assert_ne!(first, second);

        scheduler.cancel(first);
        scheduler.cancel(TickToken(999));
        assert_eq!(scheduler.active_chains(), 1);

        for _ in 0..3 {
            assert_eq!(ticks.recv().await, Some(second));
        }
    }
}
