//! Application state and update loop.
//!
//! All model mutation happens here, synchronously inside `update`; the
//! view is a pure projection of this state. The periodic tick
//! subscription only exists while the clock runs.

use std::time::Duration;

use iced::{time, Element, Subscription, Task, Theme};

use stg_core::clock::Clock;
use stg_core::config::Settings;
use stg_core::export::{serialize, ExportFormat};
use stg_core::timeline::{AdvanceOutcome, Timeline};

use crate::clipboard;
use crate::pages;

/// UI messages handled by the iced update loop.
#[derive(Debug, Clone)]
pub enum Message {
    /// Periodic timer refresh while the clock runs.
    Tick,
    /// Single start/pause toggle control.
    StartPause,
    /// Close out the active shot and highlight the next one.
    NextShot,
    /// Clear all recorded timings, keep cue texts.
    ResetTimes,
    /// Drop every shot.
    ResetAll,
    /// Merge clipboard text into the shot list.
    PasteTexts,
    /// Export the shot list to the clipboard in the given format.
    Copy(ExportFormat),
}

/// Root application state.
pub struct App {
    pub clock: Clock,
    pub timeline: Timeline,
    pub status: String,
    /// Timer display refresh cadence.
    tick_interval: Duration,
    /// Pause the clock when the last shot is recorded.
    stop_on_exhaust: bool,
}

impl App {
    /// Boot the application from loaded settings.
    pub fn boot(settings: &Settings) -> (Self, Task<Message>) {
        (
            Self {
                clock: Clock::new(),
                timeline: Timeline::new(),
                status: String::from("Paste cue texts to begin."),
                tick_interval: Duration::from_millis(settings.timer.tick_interval_ms.max(10)),
                stop_on_exhaust: settings.timer.stop_on_exhaust,
            },
            Task::none(),
        )
    }

    /// Handle one UI message.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Tick => {
                self.clock.sample();
            }
            Message::StartPause => {
                if self.clock.toggle() {
                    self.timeline.activate_first(self.clock.elapsed());
                    self.status = String::from("Recording.");
                } else {
                    self.status = String::from("Paused.");
                }
            }
            Message::NextShot => {
                let elapsed = self.clock.sample();
                match self.timeline.advance(elapsed) {
                    Ok(AdvanceOutcome::Moved { entered, .. }) => {
                        self.status = format!("Now on shot {}.", entered + 1);
                    }
                    Ok(AdvanceOutcome::AllRecorded) => {
                        self.status = String::from("No more shots - all recorded!");
                        if self.stop_on_exhaust {
                            self.clock.pause();
                        }
                    }
                    Err(e) => {
                        tracing::warn!("advance rejected: {e}");
                        self.status = e.to_string();
                    }
                }
            }
            Message::ResetTimes => {
                self.clock.reset();
                self.timeline.reset_times();
                self.status = String::from("Times reset.");
            }
            Message::ResetAll => {
                self.clock.reset();
                self.timeline.clear();
                self.status = String::from("All shots cleared.");
            }
            Message::PasteTexts => match clipboard::read_text() {
                Ok(raw) => match self.timeline.merge_text(&raw) {
                    Ok(report) => {
                        self.status = format!(
                            "Pasted {} text items. Created or updated {} shots.",
                            report.parsed, report.filled
                        );
                    }
                    Err(e) => {
                        tracing::warn!("paste rejected: {e}");
                        self.status = e.to_string();
                    }
                },
                Err(e) => {
                    tracing::warn!("clipboard read failed: {e}");
                    self.status = String::from("Failed to read from clipboard.");
                }
            },
            Message::Copy(format) => {
                let text = serialize(self.timeline.shots(), format);
                match clipboard::write_text(&text) {
                    Ok(()) => {
                        self.status = match format {
                            ExportFormat::Column => String::from("Copied as column!"),
                            ExportFormat::Row => String::from("Copied as row!"),
                            ExportFormat::Paired => String::from("Copied for audio!"),
                        };
                    }
                    Err(e) => {
                        tracing::warn!("clipboard write failed: {e}");
                        self.status = String::from("Copy failed.");
                    }
                }
            }
        }

        Task::none()
    }

    /// Build the window contents.
    pub fn view(&self) -> Element<'_, Message> {
        pages::main_window::view(self)
    }

    /// Tick the timer display while the clock runs.
    pub fn subscription(&self) -> Subscription<Message> {
        if self.clock.is_running() {
            time::every(self.tick_interval).map(|_| Message::Tick)
        } else {
            Subscription::none()
        }
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }
}
