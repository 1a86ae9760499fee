//! Progress log: many producers emit human-readable lines, one observer drains them on a timer.

use crossbeam_channel::{Receiver, Sender, TryRecvError, unbounded};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Producer side. Cheap to clone; hand one to every component that reports progress.
#[derive(Clone, Debug)]
pub struct ProgressLog {
    tx: Sender<String>,
}

/// Consumer side. Exactly one per log.
#[derive(Debug)]
pub struct LogDrain {
    rx: Receiver<String>,
}

/// Receives rendered log lines in emission order.
pub trait Observer: Send {
    fn on_message(&mut self, message: &str);
}

impl<F> Observer for F
where
    F: FnMut(&str) + Send,
{
    fn on_message(&mut self, message: &str) {
        self(message)
    }
}

/// New unbounded log. The queue closes once every [`ProgressLog`] clone is dropped.
pub fn progress_log() -> (ProgressLog, LogDrain) {
    let (tx, rx) = unbounded();
    (ProgressLog { tx }, LogDrain { rx })
}

impl ProgressLog {
    /// Enqueue a line. Never blocks; a line emitted after the drain is gone is dropped silently.
    pub fn emit(&self, message: impl Into<String>) {
        let _ = self.tx.send(message.into());
    }
}

impl LogDrain {
    /// Everything queued right now, oldest first. Non-blocking.
    pub fn drain_all(&self) -> Vec<String> {
        self.rx.try_iter().collect()
    }

    /// Hand every queued line to `observer`. Returns false once all producers are gone and the
    /// queue is empty.
    pub fn pump(&self, observer: &mut dyn Observer) -> bool {
        loop {
            match self.rx.try_recv() {
                Ok(message) => observer.on_message(&message),
                Err(TryRecvError::Empty) => return true,
                Err(TryRecvError::Disconnected) => return false,
            }
        }
    }
}

/// Run `observer` on its own thread, pumping the log every `interval` until it closes.
/// Workers never wait on the observer.
pub fn spawn_observer<O>(drain: LogDrain, interval: Duration, mut observer: O) -> JoinHandle<()>
where
    O: Observer + 'static,
{
    thread::spawn(move || {
        while drain.pump(&mut observer) {
            thread::sleep(interval);
        }
    })
}
