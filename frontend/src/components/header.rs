use yew::prelude::*;

/// Renders the application header
pub fn render_header() -> Html {
    html! {
        <header class="app-header">
            <h1>
                <span class="headline-accent">{"Deepfake"}</span>
                {" Image Analyzer"}
            </h1>
            <p class="subtitle">{"Upload. Analyze. Reveal the Truth."}</p>
        </header>
    }
}
