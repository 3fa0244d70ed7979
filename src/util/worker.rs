// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Owned background worker threads.
//!
//! A [`Worker`] pairs a command channel with the thread consuming it. The
//! thread must exit once its receiver reports the channel as disconnected.
//! Dropping the handle closes the channel and joins the thread, so nothing
//! the worker does can be observed after the handle is gone.

use std::{
    sync::mpsc::{self, Receiver, Sender},
    thread::{self, JoinHandle},
};

use anyhow::{Context, Result, anyhow};

pub(crate) struct Worker<C> {
    command_tx: Option<Sender<C>>,
    handle: Option<JoinHandle<()>>,
}

impl<C: Send + 'static> Worker<C> {
    /// Spawns a named thread running `body` with the receiving end of a new
    /// command channel.
    ///
    /// # Errors
    ///
    /// Returns an error if the operating system refuses to create the thread.
    pub(crate) fn spawn<F>(name: &str, body: F) -> Result<Self>
    where
        F: FnOnce(Receiver<C>) + Send + 'static,
    {
        let (command_tx, command_rx) = mpsc::channel::<C>();

        let handle = thread::Builder::new()
            .name(name.to_string())
            .spawn(move || body(command_rx))
            .with_context(|| format!("Failed to spawn {} thread", name))?;

        Ok(Self {
            command_tx: Some(command_tx),
            handle: Some(handle),
        })
    }
}

impl<C> Worker<C> {
    /// Sends a command to the worker thread.
    pub(crate) fn send(&self, command: C) -> Result<()> {
        let tx = self
            .command_tx
            .as_ref()
            .ok_or_else(|| anyhow!("Worker has been shut down"))?;
        tx.send(command)
            .map_err(|_| anyhow!("Worker thread is no longer running"))
    }

    /// Closes the command channel and waits for the thread to finish.
    ///
    /// Calling this more than once is harmless.
    pub(crate) fn shutdown(&mut self) {
        self.command_tx.take();

        if let Some(handle) = self.handle.take() {
            let name = handle.thread().name().unwrap_or("worker").to_string();
            if handle.join().is_err() {
                tracing::error!(thread = %name, "worker thread panicked");
            } else {
                tracing::debug!(thread = %name, "worker thread stopped");
            }
        }
    }
}

impl<C> Drop for Worker<C> {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use std::{
        sync::mpsc::{RecvTimeoutError, TryRecvError},
        time::Duration,
    };

    use super::*;

    // Emits a number every few milliseconds until its channel is closed.
    fn spawn_counter(out: Sender<u32>) -> Worker<()> {
        Worker::spawn("counter", move |rx: Receiver<()>| {
            let mut n = 0;
            loop {
                match rx.recv_timeout(Duration::from_millis(2)) {
                    Err(RecvTimeoutError::Timeout) => {
                        n += 1;
                        if out.send(n).is_err() {
                            break;
                        }
                    }
                    Ok(()) => {}
                    Err(RecvTimeoutError::Disconnected) => break,
                }
            }
        })
        .unwrap()
    }

    #[test]
    fn nothing_is_delivered_after_drop() {
        let (tx, rx) = mpsc::channel();
        let worker = spawn_counter(tx);

        assert!(rx.recv_timeout(Duration::from_secs(1)).is_ok());
        drop(worker);

        while rx.try_recv().is_ok() {}
        thread::sleep(Duration::from_millis(20));
        assert_eq!(rx.try_recv(), Err(TryRecvError::Disconnected));
    }

    #[test]
    fn send_fails_after_shutdown() {
        let (tx, _rx) = mpsc::channel();
        let mut worker = spawn_counter(tx);

        assert!(worker.send(()).is_ok());
        worker.shutdown();
        worker.shutdown();
        assert!(worker.send(()).is_err());
    }
}
