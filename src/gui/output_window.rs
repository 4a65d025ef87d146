use crate::process::{self, ProcessEvent, ProcessRunner, RunState};
use crate::scripts::ScriptEntry;
use crate::settings::{WindowSettings, DEFAULT_WINDOW_POS, DEFAULT_WINDOW_SIZE};
use eframe::egui;

/// Lifecycle of an output window. There is no way back to `Running`: once
/// finished, the window is a static report viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunPhase {
    Idle,
    Running,
    Finished,
}

/// One per launched script: owns the process runner and shows the script's
/// console output in a scrollable read-only text area.
pub struct OutputWindow {
    pub open: bool,
    name: String,
    title: String,
    id: egui::Id,
    phase: RunPhase,
    runner: Option<ProcessRunner>,
    output: String,
    size: (f32, f32),
    pos: (f32, f32),
    saved: bool,
}

impl OutputWindow {
    /// Create the window and immediately start the script. `seq` keeps the
    /// egui id unique when the same script is launched more than once.
    pub fn new(entry: &ScriptEntry, seq: u64, settings: &WindowSettings) -> Self {
        let size = settings.window_size(&entry.name, DEFAULT_WINDOW_SIZE);
        let pos = settings.window_pos(&entry.name, DEFAULT_WINDOW_POS);

        let mut window = Self {
            open: true,
            name: entry.name.clone(),
            title: entry.name.clone(),
            id: egui::Id::new(("output", entry.name.clone(), seq)),
            phase: RunPhase::Idle,
            runner: Some(ProcessRunner::new()),
            output: String::new(),
            size,
            pos,
            saved: false,
        };
        window.launch(&entry.file);
        window
    }

    fn launch(&mut self, file: &str) {
        let (program, args) = process::interpreter_command(file);
        if let Some(runner) = self.runner.as_mut() {
            runner.start(program, &args);
            self.phase = RunPhase::Running;
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// The accumulated transcript, stdout and stderr interleaved in delivery
    /// order.
    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn is_running(&self) -> bool {
        self.phase == RunPhase::Running
    }

    pub fn is_finished(&self) -> bool {
        self.phase == RunPhase::Finished
    }

    /// Drain pending process notifications and apply them to the window
    /// state. Called once per frame, and directly from tests.
    pub fn pump(&mut self) {
        let events = match self.runner.as_mut() {
            Some(runner) => runner.poll(),
            None => return,
        };
        for event in events {
            match event {
                ProcessEvent::Stdout(bytes) | ProcessEvent::Stderr(bytes) => {
                    self.output.push_str(&String::from_utf8_lossy(&bytes));
                }
                ProcessEvent::StateChanged(RunState::Running) => {
                    self.title = format!("{} running", self.name);
                }
                // Starting and NotRunning are not surfaced.
                ProcessEvent::StateChanged(_) => {}
                ProcessEvent::Exited => {
                    self.phase = RunPhase::Finished;
                    self.title = format!("{} finished", self.name);
                }
            }
        }
        if self.phase == RunPhase::Finished {
            self.runner = None;
        }
    }

    /// Record the current geometry under the script name. Happens at most
    /// once per window.
    pub fn remember(&mut self, settings: &mut WindowSettings) {
        if self.saved {
            return;
        }
        self.saved = true;
        settings.remember_window(&self.name, self.size, self.pos);
    }

    pub fn ui(&mut self, ctx: &egui::Context, settings: &mut WindowSettings) {
        self.pump();
        if !self.open {
            return;
        }
        let mut open = self.open;
        let response = egui::Window::new(self.title.clone())
            .id(self.id)
            .open(&mut open)
            .resizable(true)
            .default_size(self.size)
            .default_pos(self.pos)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .stick_to_bottom(true)
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        ui.add(
                            egui::TextEdit::multiline(&mut self.output.as_str())
                                .font(egui::TextStyle::Monospace)
                                .desired_width(f32::INFINITY),
                        );
                    });
            });
        if let Some(inner) = response {
            let rect = inner.response.rect;
            self.size = (rect.width(), rect.height());
            self.pos = (rect.min.x, rect.min.y);
        }
        self.open = open;
        if !self.open {
            self.remember(settings);
            if let Err(e) = settings.save() {
                tracing::error!(error = %e, "failed to save window settings");
            }
        }
    }
}
