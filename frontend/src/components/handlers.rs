use super::super::{Model, Msg, SelectedImage};
use super::utils::first_file;
use crate::api;
use crate::config;
use crate::error::AnalyzeError;
use crate::state::{Action, Effect};
use gloo_file::File as GlooFile;
use gloo_timers::callback::Interval;
use shared::AnalyzeResponse;
use wasm_bindgen_futures::spawn_local;
use web_sys::{AbortController, ClipboardEvent, DragEvent};
use yew::prelude::*;

pub fn handle_file_chosen(model: &mut Model, ctx: &Context<Model>, file: GlooFile) -> bool {
    dispatch(model, ctx, Action::Select(SelectedImage::new(file)))
}

pub fn handle_cancel(model: &mut Model, ctx: &Context<Model>) -> bool {
    dispatch(model, ctx, Action::Cancel)
}

pub fn handle_analyze(model: &mut Model, ctx: &Context<Model>) -> bool {
    dispatch(model, ctx, Action::Submit)
}

pub fn handle_settled(
    model: &mut Model,
    ctx: &Context<Model>,
    generation: u64,
    outcome: Result<AnalyzeResponse, AnalyzeError>,
) -> bool {
    if generation == model.state.generation() {
        model.in_flight = None;
    }
    dispatch(model, ctx, Action::Settled { generation, outcome })
}

pub fn handle_tick(model: &mut Model, ctx: &Context<Model>, generation: u64) -> bool {
    let before = model.state.displayed();
    dispatch(model, ctx, Action::Tick { generation });
    model.state.displayed() != before
}

pub fn handle_dragging(model: &mut Model, ctx: &Context<Model>, is_dragging: bool) -> bool {
    if model.state.is_drag_active() == is_dragging {
        return false;
    }
    let action = if is_dragging {
        Action::DragOver
    } else {
        Action::DragLeave
    };
    dispatch(model, ctx, action)
}

pub fn handle_drop(model: &mut Model, ctx: &Context<Model>, event: DragEvent) -> bool {
    event.prevent_default();

    let file = event
        .data_transfer()
        .and_then(|data_transfer| data_transfer.files())
        .and_then(|file_list| first_file(&file_list));

    dispatch(model, ctx, Action::Drop(file.map(SelectedImage::new)))
}

pub fn handle_paste(model: &mut Model, ctx: &Context<Model>, event: ClipboardEvent) -> bool {
    let file = event
        .clipboard_data()
        .and_then(|data_transfer| data_transfer.files())
        .and_then(|file_list| first_file(&file_list));

    match file {
        Some(file) => {
            event.prevent_default();
            dispatch(model, ctx, Action::Select(SelectedImage::new(file)))
        }
        None => false,
    }
}

/// Drops the animation timer and aborts the request in flight, if any.
pub fn release_resources(model: &mut Model) {
    model.animation = None;
    if let Some(controller) = model.in_flight.take() {
        controller.abort();
    }
}

fn dispatch(model: &mut Model, ctx: &Context<Model>, action: Action<SelectedImage>) -> bool {
    let (state, effect) = std::mem::take(&mut model.state).reduce(action);
    model.state = state;

    if let Some(effect) = effect {
        apply_effect(model, ctx, effect);
    }

    true
}

fn apply_effect(model: &mut Model, ctx: &Context<Model>, effect: Effect<SelectedImage>) {
    match effect {
        Effect::Upload {
            generation,
            selection,
        } => send_analysis_request(model, ctx, generation, selection.file),
        Effect::StartAnimation { generation } => {
            let link = ctx.link().clone();
            let interval = Interval::new(config::TICK_INTERVAL_MS, move || {
                link.send_message(Msg::Tick(generation));
            });
            model.animation = Some(interval);
        }
        Effect::StopAnimation => model.animation = None,
        Effect::Reset => release_resources(model),
        Effect::NotifyFailure => notify_failure(),
    }
}

fn send_analysis_request(
    model: &mut Model,
    ctx: &Context<Model>,
    generation: u64,
    file: GlooFile,
) {
    release_resources(model);

    let controller = match AbortController::new() {
        Ok(controller) => Some(controller),
        Err(e) => {
            log::warn!("AbortController unavailable, request cannot be aborted: {:?}", e);
            None
        }
    };
    let signal = controller.as_ref().map(AbortController::signal);
    model.in_flight = controller;

    log::info!("Analyzing {} ({} bytes)", file.name(), file.size());

    let link = ctx.link().clone();
    spawn_local(async move {
        let outcome = api::analyze(&file, signal.as_ref()).await;
        link.send_message(Msg::Settled(generation, outcome));
    });
}

fn notify_failure() {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = window.alert_with_message(config::FAILURE_MESSAGE) {
        log::error!("Failed to show failure alert: {:?}", e);
    }
}
