use parking_lot::{Condvar, Mutex};
use std::io;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};
use tracing::{debug, warn};

const THREAD_NAME: &str = "cache-sweeper";

/// Background worker that runs a sweep routine on a fixed cadence until stopped.
///
/// Dropping the sweeper stops it and joins its thread.
#[derive(Debug)]
pub(crate) struct Sweeper {
    signal: Arc<StopSignal>,
    handle: Option<JoinHandle<()>>,
}

impl Sweeper {
    pub(crate) fn spawn<F>(interval: Duration, sweep: F) -> io::Result<Self>
    where
        F: FnMut() + Send + 'static,
    {
        let signal = Arc::new(StopSignal::default());
        let worker_signal = Arc::clone(&signal);

        let handle = thread::Builder::new()
            .name(THREAD_NAME.to_string())
            .spawn(move || run(interval, &worker_signal, sweep))?;

        debug!(?interval, "cache sweeper started");

        Ok(Self {
            signal,
            handle: Some(handle),
        })
    }

    pub(crate) fn is_running(&self) -> bool {
        self.handle
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    pub(crate) fn stop(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        let Some(handle) = self.handle.take() else {
            return;
        };

        self.signal.fire();

        if handle.join().is_err() {
            warn!("cache sweeper panicked");
        }
    }
}

impl Drop for Sweeper {
    fn drop(&mut self) {
        self.shutdown();
    }
}

fn run<F>(interval: Duration, signal: &StopSignal, mut sweep: F)
where
    F: FnMut(),
{
    let mut next_tick = Instant::now().checked_add(interval);

    while signal.wait_until(next_tick) {
        sweep();

        let now = Instant::now();
        next_tick = next_tick
            .and_then(|tick| tick.checked_add(interval))
            .map(|tick| {
                if tick <= now {
                    // overran at least one tick, don't burst to catch up
                    now.checked_add(interval).unwrap_or(tick)
                } else {
                    tick
                }
            });
    }

    debug!("cache sweeper stopped");
}

/// One-shot stop flag that a sleeping worker can be woken by.
#[derive(Debug, Default)]
struct StopSignal {
    stopped: Mutex<bool>,
    condvar: Condvar,
}

impl StopSignal {
    fn fire(&self) {
        let mut stopped = self.stopped.lock();
        *stopped = true;
        self.condvar.notify_all();
    }

    /// Blocks until `deadline` passes or the signal fires.
    ///
    /// Returns `true` if the deadline was reached, `false` once stopped. A `None` deadline waits
    /// for the signal only.
    fn wait_until(&self, deadline: Option<Instant>) -> bool {
        let mut stopped = self.stopped.lock();

        while !*stopped {
            match deadline {
                Some(deadline) => {
                    if Instant::now() >= deadline {
                        return true;
                    }
                    self.condvar.wait_until(&mut stopped, deadline);
                }
                None => self.condvar.wait(&mut stopped),
            }
        }

        false
    }
}
