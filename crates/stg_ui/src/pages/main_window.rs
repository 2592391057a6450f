//! Main window view.
//!
//! Timer readout, transport controls, rolling cue preview, the shot
//! list, and the clipboard row. Pure projection of the app state; every
//! interaction is a [`Message`].

use iced::widget::{button, column, container, row, scrollable, space, text};
use iced::{Alignment, Element, Length};

use stg_core::export::{format_clock, ExportFormat};
use stg_core::timeline::ShotRow;

use crate::app::{App, Message};
use crate::theme::{colors, font, spacing};

/// Build the main window view.
pub fn view(app: &App) -> Element<'_, Message> {
    let content = column![
        timer_readout(app),
        control_row(app),
        cue_preview(app),
        shot_list(app),
        clipboard_row(app),
        text(&app.status).size(font::SM).color(colors::dim()),
    ]
    .spacing(spacing::MD)
    .padding(spacing::LG);

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Large mm:ss readout with a running/paused marker.
fn timer_readout(app: &App) -> Element<'_, Message> {
    let running = app.clock.is_running();
    let color = if running {
        colors::running()
    } else {
        colors::paused()
    };

    column![
        text(format_clock(app.clock.elapsed()))
            .size(font::TIMER)
            .color(color),
        text(if running { "Recording" } else { "Paused" })
            .size(font::SM)
            .color(colors::dim()),
    ]
    .align_x(Alignment::Center)
    .width(Length::Fill)
    .into()
}

/// Start/pause toggle, next-shot, and the two reset buttons.
fn control_row(app: &App) -> Element<'_, Message> {
    let running = app.clock.is_running();

    row![
        button(text(if running { "Pause" } else { "Start" }).size(font::NORMAL))
            .on_press(Message::StartPause),
        // Next Shot only makes sense while the clock is counting.
        button(text("Next Shot").size(font::NORMAL))
            .on_press_maybe(running.then_some(Message::NextShot)),
        space::horizontal(),
        button(text("Reset Times").size(font::SM)).on_press(Message::ResetTimes),
        button(text("Reset All").size(font::SM)).on_press(Message::ResetAll),
    ]
    .spacing(spacing::SM)
    .align_y(Alignment::Center)
    .into()
}

/// Rolling display of the current and upcoming cue.
fn cue_preview(app: &App) -> Element<'_, Message> {
    column![
        cue_line("Now:", app.timeline.current_text()),
        cue_line("Next:", app.timeline.next_text()),
    ]
    .spacing(spacing::XS)
    .into()
}

fn cue_line<'a>(label: &'a str, cue: Option<&'a str>) -> Element<'a, Message> {
    row![
        text(label)
            .size(font::SM)
            .color(colors::dim())
            .width(Length::Fixed(48.0)),
        text(cue.unwrap_or("-")).size(font::LG),
    ]
    .spacing(spacing::SM)
    .align_y(Alignment::Center)
    .into()
}

/// Scrollable shot list with the active row highlighted.
fn shot_list(app: &App) -> Element<'_, Message> {
    if app.timeline.is_empty() {
        return container(
            text("No shots yet. Paste cue texts from the clipboard.")
                .size(font::NORMAL)
                .color(colors::dim()),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::MD)
        .into();
    }

    let mut list = column![].spacing(spacing::XS);
    for shot in app.timeline.rows() {
        list = list.push(shot_row(shot));
    }

    scrollable(list)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn shot_row(shot: ShotRow) -> Element<'static, Message> {
    let is_active = shot.is_active;

    let content = row![
        text(shot.label)
            .size(font::SM)
            .color(colors::dim())
            .width(Length::Fixed(64.0)),
        text(shot.interval)
            .size(font::SM)
            .width(Length::Fixed(128.0)),
        text(shot.text).size(font::NORMAL).width(Length::Fill),
    ]
    .spacing(spacing::SM)
    .align_y(Alignment::Center);

    let cell = container(content).padding(spacing::XS).width(Length::Fill);
    if is_active {
        cell.style(container::bordered_box).into()
    } else {
        cell.into()
    }
}

/// Paste and the three copy exports.
fn clipboard_row(app: &App) -> Element<'_, Message> {
    let has_shots = !app.timeline.is_empty();
    let copy = |label: &'static str, format: ExportFormat| {
        button(text(label).size(font::SM))
            .on_press_maybe(has_shots.then_some(Message::Copy(format)))
    };

    row![
        button(text("Paste Texts").size(font::SM)).on_press(Message::PasteTexts),
        space::horizontal(),
        copy("Copy as Column", ExportFormat::Column),
        copy("Copy as Row", ExportFormat::Row),
        copy("Copy for Audio", ExportFormat::Paired),
    ]
    .spacing(spacing::SM)
    .align_y(Alignment::Center)
    .into()
}
