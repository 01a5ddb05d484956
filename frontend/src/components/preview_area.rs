use super::super::Model;
use yew::prelude::*;

pub fn render_preview_area(model: &Model) -> Html {
    let Some(selected) = model.state.selection() else {
        return html! {};
    };
    let submitting = model.state.is_submitting();

    html! {
        <div id="preview-container" class="preview-frame">
            <img
                id="actual-image-preview"
                src={selected.preview_url.to_string()}
                title={selected.file.name()}
                alt="preview"
                class={classes!("preview-image", submitting.then_some("preview-busy"))}
            />
            {
                if submitting {
                    html! {
                        <div class="preview-overlay">
                            <i class="fa-solid fa-spinner fa-spin fa-2x"></i>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
