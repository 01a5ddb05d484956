mod api;
mod components;
mod config;
mod error;
mod state;

use components::handlers;
use components::header::render_header;
use components::info_tooltip::render_info_tooltip;
use components::preview_area::render_preview_area;
use components::results::render_results;
use components::upload_section::render_upload_section;
use error::AnalyzeError;
use gloo_events::EventListener;
use gloo_file::{File as GlooFile, ObjectUrl};
use gloo_timers::callback::Interval;
use shared::AnalyzeResponse;
use state::UploadState;
use wasm_bindgen::JsCast;
use web_sys::{AbortController, ClipboardEvent, DragEvent};
use yew::prelude::*;

// Models
#[derive(Clone)]
pub struct SelectedImage {
    file: GlooFile,
    preview_url: ObjectUrl,
}

impl SelectedImage {
    fn new(file: GlooFile) -> Self {
        let preview_url = ObjectUrl::from(file.clone());
        Self { file, preview_url }
    }
}

// Yew msg components
pub enum Msg {
    // File operations
    FileChosen(GlooFile),
    Cancel,

    // Analysis operations
    Analyze,
    Settled(u64, Result<AnalyzeResponse, AnalyzeError>),
    Tick(u64),

    // UI states
    SetDragging(bool),

    // Input events
    HandleDrop(DragEvent),
    HandlePaste(ClipboardEvent),
}

// Main component
pub struct Model {
    state: UploadState<SelectedImage>,
    animation: Option<Interval>,
    in_flight: Option<AbortController>,
    _paste_listener: Option<EventListener>,
}

impl Component for Model {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        let paste_listener = web_sys::window().map(|window| {
            EventListener::new(&window, "paste", move |event| {
                if let Some(clipboard_event) = event.dyn_ref::<ClipboardEvent>() {
                    link.send_message(Msg::HandlePaste(clipboard_event.clone()));
                }
            })
        });

        Self {
            state: UploadState::default(),
            animation: None,
            in_flight: None,
            _paste_listener: paste_listener,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            // File operations
            Msg::FileChosen(file) => handlers::handle_file_chosen(self, ctx, file),
            Msg::Cancel => handlers::handle_cancel(self, ctx),

            // Analysis operations
            Msg::Analyze => handlers::handle_analyze(self, ctx),
            Msg::Settled(generation, outcome) => {
                handlers::handle_settled(self, ctx, generation, outcome)
            }
            Msg::Tick(generation) => handlers::handle_tick(self, ctx, generation),

            // UI states
            Msg::SetDragging(is_dragging) => handlers::handle_dragging(self, ctx, is_dragging),

            // Input events
            Msg::HandleDrop(event) => handlers::handle_drop(self, ctx, event),
            Msg::HandlePaste(event) => handlers::handle_paste(self, ctx, event),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="container">
                { render_info_tooltip() }
                { render_header() }

                <main class="main-content">
                    { render_preview_area(self) }
                    { render_results(self) }
                    { render_upload_section(self, ctx) }
                </main>
            </div>
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        handlers::release_resources(self);
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Deepfake analyzer starting...");
    yew::Renderer::<Model>::new().render();
}
