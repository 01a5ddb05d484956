//! Upload controller state.
//!
//! The whole page is driven by one [`UploadState`] value. Every user gesture
//! and every async settlement becomes an [`Action`]; [`UploadState::reduce`]
//! turns the current state and the action into the next state plus at most one
//! [`Effect`] for the component to carry out. Nothing in here touches the
//! browser, so the transitions run under plain `cargo test`.

use crate::error::AnalyzeError;
use shared::{AnalyzeResponse, Confidence, Verdict};

/// A successful classification. Label and target only ever exist together.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    label: String,
    verdict: Option<Verdict>,
    target: Confidence,
}

impl Analysis {
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn target(&self) -> u8 {
        self.target.percent()
    }

    pub fn is_fake(&self) -> bool {
        self.verdict == Some(Verdict::Fake)
    }
}

impl From<AnalyzeResponse> for Analysis {
    fn from(response: AnalyzeResponse) -> Self {
        let verdict = response.verdict();
        Self {
            label: response.result,
            verdict,
            target: response.confidence,
        }
    }
}

#[derive(Debug)]
pub enum Action<S> {
    /// A file was picked or pasted.
    Select(S),
    Cancel,
    Submit,
    /// The request started under `generation` has settled.
    Settled {
        generation: u64,
        outcome: Result<AnalyzeResponse, AnalyzeError>,
    },
    /// One step of the counter animation started under `generation`.
    Tick { generation: u64 },
    DragOver,
    DragLeave,
    /// A drop landed on the drop zone, carrying its first file if any.
    Drop(Option<S>),
}

#[derive(Debug, PartialEq)]
pub enum Effect<S> {
    /// Send `selection` for analysis, tagging the settlement with `generation`.
    /// Any running animation is dropped first.
    Upload { generation: u64, selection: S },
    /// Start the counter, tagging its ticks with `generation`.
    StartAnimation { generation: u64 },
    StopAnimation,
    /// Drop the animation timer and abort any request still in flight.
    Reset,
    /// Show the generic failure alert.
    NotifyFailure,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UploadState<S> {
    selection: Option<S>,
    analysis: Option<Analysis>,
    displayed: u8,
    submitting: bool,
    drag_active: bool,
    generation: u64,
}

impl<S> Default for UploadState<S> {
    fn default() -> Self {
        Self {
            selection: None,
            analysis: None,
            displayed: 0,
            submitting: false,
            drag_active: false,
            generation: 0,
        }
    }
}

impl<S: Clone> UploadState<S> {
    pub fn reduce(self, action: Action<S>) -> (Self, Option<Effect<S>>) {
        match action {
            Action::Select(selection) => self.select(selection),
            Action::Cancel => self.cancel(),
            Action::Submit => self.submit(),
            Action::Settled {
                generation,
                outcome,
            } => self.settle(generation, outcome),
            Action::Tick { generation } => self.tick(generation),
            Action::DragOver => (
                Self {
                    drag_active: true,
                    ..self
                },
                None,
            ),
            Action::DragLeave | Action::Drop(None) => (
                Self {
                    drag_active: false,
                    ..self
                },
                None,
            ),
            Action::Drop(Some(selection)) => Self {
                drag_active: false,
                ..self
            }
            .select(selection),
        }
    }

    fn select(self, selection: S) -> (Self, Option<Effect<S>>) {
        let next = Self {
            selection: Some(selection),
            analysis: None,
            displayed: 0,
            submitting: false,
            drag_active: self.drag_active,
            generation: self.generation + 1,
        };
        (next, Some(Effect::Reset))
    }

    fn cancel(self) -> (Self, Option<Effect<S>>) {
        let next = Self {
            drag_active: self.drag_active,
            generation: self.generation + 1,
            ..Self::default()
        };
        (next, Some(Effect::Reset))
    }

    fn submit(self) -> (Self, Option<Effect<S>>) {
        if self.submitting {
            log::debug!("Analysis already in flight, ignoring submit");
            return (self, None);
        }
        let Some(selection) = self.selection.clone() else {
            log::debug!("No file selected, nothing to analyze");
            return (self, None);
        };

        let generation = self.generation + 1;
        let next = Self {
            analysis: None,
            displayed: 0,
            submitting: true,
            generation,
            ..self
        };
        (
            next,
            Some(Effect::Upload {
                generation,
                selection,
            }),
        )
    }

    fn settle(
        self,
        generation: u64,
        outcome: Result<AnalyzeResponse, AnalyzeError>,
    ) -> (Self, Option<Effect<S>>) {
        if generation != self.generation {
            log::debug!(
                "Dropping stale analysis result (generation {}, current {})",
                generation,
                self.generation
            );
            return (self, None);
        }

        match outcome {
            Ok(response) => {
                let analysis = Analysis::from(response);
                log::info!("Analysis result: {} ({})", analysis.label, analysis.target);
                let effect =
                    (analysis.target() > 0).then_some(Effect::StartAnimation { generation });
                let next = Self {
                    analysis: Some(analysis),
                    displayed: 0,
                    submitting: false,
                    ..self
                };
                (next, effect)
            }
            Err(err) => {
                log::error!("Analysis failed: {}", err);
                let next = Self {
                    submitting: false,
                    ..self
                };
                (next, Some(Effect::NotifyFailure))
            }
        }
    }

    fn tick(self, generation: u64) -> (Self, Option<Effect<S>>) {
        if generation != self.generation {
            return (self, None);
        }
        let Some(target) = self.analysis.as_ref().map(Analysis::target) else {
            return (self, Some(Effect::StopAnimation));
        };

        let displayed = if self.displayed < target {
            self.displayed + 1
        } else {
            self.displayed
        };
        let effect = (displayed >= target).then_some(Effect::StopAnimation);
        (Self { displayed, ..self }, effect)
    }
}

impl<S> UploadState<S> {
    pub fn selection(&self) -> Option<&S> {
        self.selection.as_ref()
    }

    pub fn analysis(&self) -> Option<&Analysis> {
        self.analysis.as_ref()
    }

    pub fn displayed(&self) -> u8 {
        self.displayed
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn is_drag_active(&self) -> bool {
        self.drag_active
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}
