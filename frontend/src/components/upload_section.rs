use super::super::Model;
use super::super::Msg;
use super::utils::{FILE_INPUT_ID, debounce, first_file, open_file_picker};
use web_sys::{DragEvent, HtmlInputElement};
use yew::prelude::*;

/// Drop zone while nothing is selected, Analyze/Cancel once a file is.
pub fn render_upload_section(model: &Model, ctx: &Context<Model>) -> Html {
    html! {
        <div class="upload-section">
            {
                if model.state.selection().is_none() {
                    render_file_input_area(model, ctx)
                } else {
                    render_action_buttons(model, ctx)
                }
            }
        </div>
    }
}

fn render_file_input_area(model: &Model, ctx: &Context<Model>) -> Html {
    let link = ctx.link();
    let handle_change = link.batch_callback(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let file = input.files().as_ref().and_then(first_file);

        input.set_value("");

        file.map(Msg::FileChosen)
    });

    let handle_drag_over = link.callback(|e: DragEvent| {
        e.prevent_default();
        Msg::SetDragging(true)
    });

    let handle_drag_leave = link.callback(|e: DragEvent| {
        e.prevent_default();
        Msg::SetDragging(false)
    });

    let handle_drop = link.callback(Msg::HandleDrop);

    html! {
        <>
            <input
                type="file"
                id={FILE_INPUT_ID}
                accept="image/*"
                style="display: none;"
                onchange={handle_change}
            />

            <div
                id="drop-zone"
                class={classes!("upload-area", model.state.is_drag_active().then_some("drag-over"))}
                ondragover={handle_drag_over}
                ondragleave={handle_drag_leave}
                ondrop={handle_drop}
                onclick={debounce(300, open_file_picker)}
            >
                <div class="upload-placeholder">
                    <i class="fa-solid fa-cloud-arrow-up"></i>
                    <p>{"Drag & Drop Image or Click to Upload"}</p>
                    <p class="file-types">{"Files supported: JPG, PNG"}</p>
                </div>
            </div>
        </>
    }
}

fn render_action_buttons(model: &Model, ctx: &Context<Model>) -> Html {
    let link = ctx.link();
    let submitting = model.state.is_submitting();

    html! {
        <div class="button-container">
            <button
                id="analyze-btn"
                class="analyze-btn"
                onclick={link.callback(|_| Msg::Analyze)}
                disabled={submitting}
            >
                {
                    if submitting {
                        html! { <><i class="fa-solid fa-spinner fa-spin"></i>{" Analyzing..."}</> }
                    } else {
                        html! { <><i class="fa-solid fa-magnifying-glass"></i>{" Analyze"}</> }
                    }
                }
            </button>
            <button
                id="cancel-btn"
                class="analyze-btn cancel-btn"
                onclick={link.callback(|_| Msg::Cancel)}
            >
                <i class="fa-solid fa-xmark"></i>{" Cancel"}
            </button>
        </div>
    }
}
