use crate::config::{MODEL_BLURB, MODEL_NAME};
use yew::prelude::*;

pub fn render_info_tooltip() -> Html {
    html! {
        <div class="top-right info-anchor">
            <i class="fa-solid fa-circle-info info-icon"></i>
            <div class="info-tooltip">
                <strong>{"Model:"}</strong>{" "}{ MODEL_NAME }
                <br />
                <strong>{"How it works:"}</strong>
                <br />
                { MODEL_BLURB }
            </div>
        </div>
    }
}
