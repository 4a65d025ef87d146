use std::io::Read;
use std::process::{Command, Stdio};
use std::sync::mpsc::{channel, Receiver, Sender};
use std::thread;

/// Lifecycle of the child process as seen by the launcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    NotRunning,
    Starting,
    Running,
}

/// Notification delivered from the worker threads to the UI loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessEvent {
    /// Raw stdout bytes, one chunk per read. Partial lines are expected.
    Stdout(Vec<u8>),
    /// Raw stderr bytes.
    Stderr(Vec<u8>),
    StateChanged(RunState),
    /// The process is gone, whether it ran to completion or never spawned.
    Exited,
}

/// Build the platform interpreter invocation for `script`.
#[cfg(windows)]
pub fn interpreter_command(script: &str) -> (&'static str, Vec<String>) {
    ("cmd", vec!["/C".into(), script.into()])
}

#[cfg(not(windows))]
pub fn interpreter_command(script: &str) -> (&'static str, Vec<String>) {
    ("sh", vec![script.into()])
}

/// Runs at most one child process and queues its output and lifecycle
/// notifications for the UI thread to drain via [`ProcessRunner::poll`].
pub struct ProcessRunner {
    tx: Sender<ProcessEvent>,
    rx: Receiver<ProcessEvent>,
    active: bool,
}

impl Default for ProcessRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessRunner {
    pub fn new() -> Self {
        let (tx, rx) = channel();
        Self {
            tx,
            rx,
            active: false,
        }
    }

    /// Whether a process is attached to this runner. Cleared once [`poll`]
    /// observes the exit notification.
    ///
    /// [`poll`]: ProcessRunner::poll
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Launch `program` with `args`, piping both output streams.
    ///
    /// Ignored while a process is already attached: no queueing, no
    /// replacement. A spawn failure is logged and surfaces only as the exit
    /// notification, like any other termination.
    pub fn start(&mut self, program: &str, args: &[String]) {
        if self.active {
            tracing::debug!(program, "process already attached, ignoring start");
            return;
        }
        self.active = true;
        let _ = self.tx.send(ProcessEvent::StateChanged(RunState::Starting));

        let spawned = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn();
        let mut child = match spawned {
            Ok(child) => child,
            Err(e) => {
                tracing::error!(program, error = %e, "failed to spawn process");
                let _ = self.tx.send(ProcessEvent::Exited);
                return;
            }
        };
        let _ = self.tx.send(ProcessEvent::StateChanged(RunState::Running));

        let stdout = child
            .stdout
            .take()
            .map(|stream| spawn_reader(stream, self.tx.clone(), ProcessEvent::Stdout));
        let stderr = child
            .stderr
            .take()
            .map(|stream| spawn_reader(stream, self.tx.clone(), ProcessEvent::Stderr));

        let tx = self.tx.clone();
        thread::spawn(move || {
            match child.wait() {
                Ok(status) => tracing::debug!(%status, "process exited"),
                Err(e) => tracing::error!(error = %e, "failed to wait on process"),
            }
            // Drain both streams fully so every chunk is queued ahead of the
            // exit notification.
            for reader in [stdout, stderr].into_iter().flatten() {
                let _ = reader.join();
            }
            let _ = tx.send(ProcessEvent::Exited);
        });
    }

    /// Drain all pending notifications. Observing [`ProcessEvent::Exited`]
    /// detaches the process so the runner could be started again.
    pub fn poll(&mut self) -> Vec<ProcessEvent> {
        let events: Vec<ProcessEvent> = self.rx.try_iter().collect();
        if events.iter().any(|e| matches!(e, ProcessEvent::Exited)) {
            self.active = false;
        }
        events
    }
}

fn spawn_reader<R>(
    mut stream: R,
    tx: Sender<ProcessEvent>,
    wrap: fn(Vec<u8>) -> ProcessEvent,
) -> thread::JoinHandle<()>
where
    R: Read + Send + 'static,
{
    thread::spawn(move || {
        let mut buf = [0u8; 4096];
        loop {
            match stream.read(&mut buf) {
                Ok(0) | Err(_) => break,
                Ok(n) => {
                    if tx.send(wrap(buf[..n].to_vec())).is_err() {
                        break;
                    }
                }
            }
        }
    })
}
