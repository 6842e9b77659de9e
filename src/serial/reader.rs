use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crate::dispatch::Dispatcher;

use super::{ByteSource, Detector, Result};

/// Default polling cadence. Event latency is bounded by one interval.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Shared stop request observed by the run loop.
///
/// Cloned into the signal handler at wiring time. A stop request latches:
/// one that lands before `start` still terminates the loop after zero or
/// more complete iterations.
#[derive(Debug, Clone, Default)]
pub struct ShutdownHandle {
    stop: Arc<AtomicBool>,
}

impl ShutdownHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request the run loop to exit at the next iteration boundary. An
    /// in-flight `update` always completes first.
    pub fn stop(&self) {
        self.stop.store(true, Ordering::SeqCst);
    }

    pub fn is_stopped(&self) -> bool {
        self.stop.load(Ordering::SeqCst)
    }
}

/// Polling run loop: drains the channel on a fixed cadence, feeds each
/// batch to the detector and dispatches resulting events inline.
pub struct EventReader<C: ByteSource> {
    channel: C,
    detector: Detector,
    dispatcher: Dispatcher,
    shutdown: ShutdownHandle,
    interval: Duration,
}

impl<C: ByteSource> EventReader<C> {
    pub fn new(
        channel: C,
        detector: Detector,
        dispatcher: Dispatcher,
        shutdown: ShutdownHandle,
    ) -> Self {
        Self {
            channel,
            detector,
            dispatcher,
            shutdown,
            interval: DEFAULT_POLL_INTERVAL,
        }
    }

    pub fn set_poll_interval(&mut self, interval: Duration) {
        self.interval = interval;
    }

    pub fn shutdown_handle(&self) -> ShutdownHandle {
        self.shutdown.clone()
    }

    /// Open the channel, poll until a stop is requested or an I/O error
    /// surfaces, then close the channel on every path.
    pub fn run(&mut self) -> Result<()> {
        let result = self.channel.open().and_then(|()| self.start());
        self.channel.close();
        result
    }

    /// Synchronous run loop; blocks the calling thread until stopped.
    pub fn start(&mut self) -> Result<()> {
        log::info!("reader: start");
        while !self.shutdown.is_stopped() {
            self.update()?;
            thread::sleep(self.interval);
        }
        log::info!("reader: stop");
        Ok(())
    }

    /// One poll tick: drain whatever the device has buffered and scan it
    /// for events. A tick with nothing buffered is a no-op.
    pub fn update(&mut self) -> Result<()> {
        let available = self.channel.bytes_available()?;
        if available == 0 {
            return Ok(());
        }

        let batch = self.channel.drain(available)?;
        log::debug!("serial: {:?}", batch);
        for event in self.detector.recv(&batch) {
            self.dispatcher.dispatch(event);
        }
        Ok(())
    }
}
