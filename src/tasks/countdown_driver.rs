//! Countdown driver background task
//!
//! The driver is the only owner of the `Countdown`. Ticks and control
//! commands are serialized through one `select!` loop, so the countdown
//! itself never needs a lock.

use tokio::{
    sync::{mpsc, watch},
    task::JoinHandle,
};
use tracing::{debug, info, warn};

use crate::{
    config::CountdownConfig,
    countdown::Countdown,
    host::TokioScheduler,
    ports::{AccessibilitySink, Renderer, TickToken},
    state::{Command, CommandOutcome, Control, TimerSnapshot},
};

/// Capacity of the control channel
const CONTROL_BUFFER: usize = 32;

/// Handles to a spawned driver
#[derive(Debug)]
pub struct DriverHandle {
    pub controls: mpsc::Sender<Control>,
    pub snapshots: watch::Receiver<TimerSnapshot>,
    pub task: JoinHandle<()>,
}

/// Build a countdown on the tokio scheduler and spawn its driver.
///
/// Must be called from within a tokio runtime; an autostarted countdown
/// arms its first tick during construction.
pub fn spawn_countdown_driver<R, A, F>(
    config: CountdownConfig,
    renderer: R,
    sink: A,
    on_complete: F,
) -> DriverHandle
where
    R: Renderer + Send + 'static,
    A: AccessibilitySink + Send + 'static,
    F: FnMut(&mut Countdown<R, A, TokioScheduler>) + Send + 'static,
{
    let (scheduler, ticks) = TokioScheduler::new();
    let mut countdown = Countdown::new(config, renderer, sink, scheduler);
    countdown.set_on_complete(on_complete);

    let (controls, control_rx) = mpsc::channel(CONTROL_BUFFER);
    let (snapshot_tx, snapshots) = watch::channel(TimerSnapshot::capture(&countdown));

    let task = tokio::spawn(countdown_driver_task(countdown, ticks, control_rx, snapshot_tx));

    DriverHandle {
        controls,
        snapshots,
        task,
    }
}

/// Background task that owns the countdown until the control channel closes
pub async fn countdown_driver_task<R, A>(
    mut countdown: Countdown<R, A, TokioScheduler>,
    mut ticks: mpsc::UnboundedReceiver<TickToken>,
    mut controls: mpsc::Receiver<Control>,
    snapshot_tx: watch::Sender<TimerSnapshot>,
) where
    R: Renderer,
    A: AccessibilitySink,
{
    info!("Starting countdown driver task");

    loop {
        tokio::select! {
            Some(token) = ticks.recv() => {
                if !countdown.is_armed_with(token) {
                    debug!("Dropping stale tick {:?}", token);
                    continue;
                }
                countdown.tick();
                snapshot_tx.send_replace(TimerSnapshot::capture(&countdown));
            }

            control = controls.recv() => {
                let Some(Control { command, reply }) = control else {
                    info!("Control channel closed, stopping countdown driver");
                    break;
                };

                let applied = apply(&mut countdown, &command);
                debug!("Applied {:?}: {}", command, applied);

                // Publish before replying so the caller never reads a stale snapshot.
                let snapshot = TimerSnapshot::capture(&countdown);
                snapshot_tx.send_replace(snapshot.clone());
                if reply.send(CommandOutcome { applied, snapshot }).is_err() {
                    warn!("Caller went away before {} completed", command.action());
                }
            }
        }
    }

    countdown.stop();
}

/// Apply one command, reporting whether it changed anything
fn apply<R, A>(countdown: &mut Countdown<R, A, TokioScheduler>, command: &Command) -> bool
where
    R: Renderer,
    A: AccessibilitySink,
{
    match *command {
        Command::Start => {
            countdown.start();
            true
        }
        Command::Stop => countdown.stop(),
        Command::Pause => {
            let before = countdown.status();
            countdown.pause();
            countdown.status() != before
        }
        Command::Resume => {
            let before = countdown.status();
            countdown.resume();
            countdown.status() != before
        }
        Command::AddSeconds(units) => countdown.add_seconds(units),
        Command::ExtendTimer(units) => countdown.extend_timer(units),
        Command::SetRadius(radius) => countdown.set_radius(radius),
    }
}
