use super::super::Model;
use crate::state::Analysis;
use yew::prelude::*;

/// Bar style for a result: one colour for "Fake", another for anything else.
pub fn bar_class(analysis: &Analysis) -> &'static str {
    if analysis.is_fake() { "fake" } else { "real" }
}

pub fn render_results(model: &Model) -> Html {
    let Some(analysis) = model.state.analysis() else {
        return html! {};
    };
    if model.state.is_submitting() {
        return html! {};
    }

    let displayed = model.state.displayed();

    html! {
        <div class={classes!("results-container", bar_class(analysis))}>
            <h3 class="result-label">{ format!("Result: {}", analysis.label()) }</h3>
            <div class="meter">
                <div
                    class={classes!("meter-fill", bar_class(analysis))}
                    style={format!("width: {}%", displayed)}
                >
                    { format!("{}%", displayed) }
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{AnalyzeResponse, Confidence};

    fn analysis(result: &str, confidence: u8) -> Analysis {
        Analysis::from(AnalyzeResponse {
            result: result.into(),
            confidence: Confidence::new(confidence).unwrap(),
        })
    }

    #[test]
    fn test_bar_class() {
        assert_eq!(bar_class(&analysis("Fake", 73)), "fake");
        assert_eq!(bar_class(&analysis("FAKE", 10)), "fake");
        assert_eq!(bar_class(&analysis("Real", 91)), "real");
        assert_eq!(bar_class(&analysis("Inconclusive", 50)), "real");
    }
}
