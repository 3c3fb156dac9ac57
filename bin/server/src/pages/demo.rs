//! Scripted analysis demo.
//!
//! Shows a sample document as uploaded, fakes an analysis delay, then reveals
//! a canned analysis and Q&A exchange. Stage delays come from the server.

use crate::components::{Brand, Icon, IconKind, ThemeToggle};
use crate::preferences::get_demo_timings;
use crate::theme::use_theme;
use leptos::prelude::*;
use lexilingua_core::{DemoSequence, DemoStage, SAMPLE_ANALYSIS, StageTimings};

fn step_marker_class(current: DemoStage, step: DemoStage) -> &'static str {
    if current.has_reached(step) {
        "bg-amber-600 border-amber-600 text-white"
    } else {
        "bg-gray-200 border-gray-300 text-gray-500"
    }
}

fn step_connector_class(current: DemoStage, step: DemoStage) -> &'static str {
    if current.has_passed(step) {
        "bg-amber-600"
    } else {
        "bg-gray-300"
    }
}

/// The demo page component.
#[component]
pub fn DemoPage() -> impl IntoView {
    let theme = use_theme();
    let timings = Resource::new(|| (), |_| get_demo_timings());

    view! {
        <div class=move || format!("min-h-screen {} transition-colors duration-300", theme.classes().main_bg)>
            <header class=move || {
                let c = theme.classes();
                format!("{} shadow-sm border-b {} sticky top-0 z-50", c.card_bg, c.border)
            }>
                <div class="max-w-7xl mx-auto px-6 py-4">
                    <div class="flex items-center justify-between">
                        <Brand tagline="AI-Powered Legal Document Analyzer"/>
                        <div class="flex items-center space-x-4">
                            <div class=move || {
                                let c = theme.classes();
                                format!("px-4 py-2 rounded-lg {} {} border", c.card_bg, c.border)
                            }>
                                <span class=move || format!("text-sm font-medium {}", theme.classes().secondary_text)>
                                    "Demo Mode"
                                </span>
                            </div>
                            <ThemeToggle/>
                        </div>
                    </div>
                </div>
            </header>

            <Suspense fallback=move || view! { <p class="text-center py-8">"Loading..."</p> }>
                {move || {
                    timings.get().map(|result| {
                        let timings = result.unwrap_or_else(|e| {
                            leptos::logging::warn!("using default demo timings: {e}");
                            StageTimings::default()
                        });
                        view! { <Walkthrough timings=timings/> }
                    })
                }}
            </Suspense>
        </div>
    }
}

/// Runs one pass of the reveal sequence.
#[component]
fn Walkthrough(timings: StageTimings) -> impl IntoView {
    let sequence = RwSignal::new(DemoSequence::new(timings));
    let stage = Memo::new(move |_| sequence.with(DemoSequence::stage));

    // One timer per stage. A re-run or disposal clears the armed one.
    Effect::new(move |_| {
        let Some(delay) = sequence.with(DemoSequence::pending_delay) else {
            return;
        };
        match set_timeout_with_handle(
            move || {
                sequence.update(|sequence| {
                    sequence.advance();
                });
            },
            delay,
        ) {
            Ok(handle) => on_cleanup(move || handle.clear()),
            Err(e) => leptos::logging::warn!("failed to arm demo timer: {e:?}"),
        }
    });

    view! {
        <div class="max-w-7xl mx-auto px-6 py-8">
            <ProgressSteps stage=stage/>
            <UploadedCard/>
            <Show when=move || stage.get().is_analyzing()>
                <AnalyzingCard/>
            </Show>
            <Show when=move || stage.get().shows_results()>
                <Results/>
            </Show>
        </div>
    }
}

#[component]
fn ProgressSteps(stage: Memo<DemoStage>) -> impl IntoView {
    let theme = use_theme();

    view! {
        <div class="mb-8">
            <div class="flex items-center justify-between max-w-3xl mx-auto">
                {DemoStage::ALL
                    .into_iter()
                    .map(|step| view! {
                        <div class="flex items-center">
                            <div class=move || {
                                format!(
                                    "w-10 h-10 rounded-full flex items-center justify-center border-2 transition-all duration-500 {}",
                                    step_marker_class(stage.get(), step),
                                )
                            }>
                                {step.ordinal() + 1}
                            </div>
                            <span class=move || {
                                let c = theme.classes();
                                let text = if stage.get().has_reached(step) { c.primary_text } else { c.muted_text };
                                format!("ml-3 font-medium {text}")
                            }>
                                {step.label()}
                            </span>
                            {(!step.is_terminal()).then(|| view! {
                                <div class=move || {
                                    format!(
                                        "w-20 h-0.5 mx-4 transition-all duration-500 {}",
                                        step_connector_class(stage.get(), step),
                                    )
                                }></div>
                            })}
                        </div>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn UploadedCard() -> impl IntoView {
    let theme = use_theme();
    let document = SAMPLE_ANALYSIS.document;
    let card = move || {
        let c = theme.classes();
        format!("{} rounded-xl shadow-lg p-6 mb-8 {} border", c.card_bg, c.border)
    };
    let icon_button = move || format!("p-2 rounded-lg {} border transition-colors", theme.classes().border);

    view! {
        <div class=card>
            <div class=move || format!("flex items-center mb-4 {}", theme.classes().primary_text)>
                <Icon kind=IconKind::Upload class="w-6 h-6 mr-3"/>
                <h2 class="text-xl font-bold">"Document Upload Complete"</h2>
                <span class="ml-3 text-green-600">
                    <Icon kind=IconKind::CheckCircle class="w-5 h-5"/>
                </span>
            </div>
            <div class=move || format!("p-4 rounded-lg {} border border-dashed", theme.classes().border)>
                <div class="flex items-center justify-between">
                    <div class="flex items-center">
                        <span class=move || format!("mr-3 {}", theme.classes().secondary_text)>
                            <Icon kind=IconKind::FileText class="w-8 h-8"/>
                        </span>
                        <div>
                            <p class=move || format!("font-medium {}", theme.classes().primary_text)>{document.file_name}</p>
                            <p class=move || format!("text-sm {}", theme.classes().muted_text)>
                                {format!("{} • Uploaded successfully", document.size_label)}
                            </p>
                        </div>
                    </div>
                    <div class=move || format!("flex space-x-2 {}", theme.classes().secondary_text)>
                        <button class=icon_button aria-label="Preview">
                            <Icon kind=IconKind::Eye class="w-4 h-4"/>
                        </button>
                        <button class=icon_button aria-label="Download">
                            <Icon kind=IconKind::Download class="w-4 h-4"/>
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn AnalyzingCard() -> impl IntoView {
    let theme = use_theme();

    view! {
        <div class=move || {
            let c = theme.classes();
            format!("{} rounded-xl shadow-lg p-6 mb-8 {} border", c.card_bg, c.border)
        }>
            <div class="text-center py-8">
                <div class="w-16 h-16 mx-auto mb-4 bg-blue-100 rounded-full flex items-center justify-center text-blue-600">
                    <Icon kind=IconKind::Bot class="w-8 h-8 animate-pulse"/>
                </div>
                <h3 class=move || format!("text-xl font-bold {} mb-2", theme.classes().primary_text)>
                    "AI Analysis in Progress"
                </h3>
                <p class=move || format!("{} mb-4", theme.classes().muted_text)>
                    "Analyzing document content, identifying risks, and preparing insights..."
                </p>
                <div class="max-w-md mx-auto bg-gray-200 rounded-full h-2">
                    <div class="bg-blue-600 h-2 rounded-full animate-pulse w-3/4"></div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn Results() -> impl IntoView {
    let theme = use_theme();
    let analysis = &SAMPLE_ANALYSIS;
    let risk = analysis.risk.tone();
    let card = move || {
        let c = theme.classes();
        format!("{} rounded-xl shadow-lg p-6 mb-8 {} border", c.card_bg, c.border)
    };
    let heading = move || format!("flex items-center mb-6 {}", theme.classes().primary_text);
    let subheading = move || format!("text-lg font-semibold {} mb-4", theme.classes().primary_text);

    view! {
        <div class=card>
            <div class="flex items-center justify-between mb-4">
                <h2 class=move || format!("text-xl font-bold {} flex items-center", theme.classes().primary_text)>
                    <Icon kind=IconKind::FileText class="w-6 h-6 mr-3"/>
                    "Extracted Text"
                </h2>
                <button class=move || {
                    let c = theme.classes();
                    format!("px-4 py-2 rounded-lg {} border transition-colors flex items-center {}", c.border, c.secondary_text)
                }>
                    <Icon kind=IconKind::Copy class="w-4 h-4 mr-2"/>
                    <span class="text-sm">"Copy"</span>
                </button>
            </div>
            <div class=move || {
                let c = theme.classes();
                format!("p-4 rounded-lg {} {} border max-h-64 overflow-y-auto", c.inset_bg, c.border)
            }>
                <pre class=move || format!("text-sm {} whitespace-pre-wrap font-mono", theme.classes().secondary_text)>
                    {analysis.document.extracted_text}
                </pre>
            </div>
        </div>

        <div class=card>
            <div class=heading>
                <Icon kind=IconKind::Bot class="w-6 h-6 mr-3"/>
                <h2 class="text-xl font-bold">"AI Analysis"</h2>
            </div>

            <div class=format!("p-4 rounded-lg {} border {} mb-6", risk.background, risk.border)>
                <div class=format!("flex items-center {}", risk.text)>
                    <Icon kind=IconKind::AlertTriangle class="w-6 h-6 mr-3"/>
                    <div>
                        <h3 class="font-bold">{format!("Risk Level: {}", analysis.risk.label())}</h3>
                        <p class="text-orange-700 text-sm">{analysis.summary}</p>
                    </div>
                </div>
            </div>

            <div class="mb-6">
                <h3 class=subheading>"Key Findings"</h3>
                <div class="space-y-3">
                    {analysis
                        .findings
                        .iter()
                        .map(|finding| {
                            let tone = finding.severity.tone();
                            view! {
                                <div class=format!("p-3 rounded-lg {} border", tone.background)>
                                    <div class=format!("flex items-start {}", tone.text)>
                                        <span class="font-medium mr-3">{finding.severity.label()}</span>
                                        <p class="text-sm">{finding.detail}</p>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <div>
                <h3 class=subheading>"Recommendations"</h3>
                <div class="space-y-2">
                    {analysis
                        .recommendations
                        .iter()
                        .map(|recommendation| view! {
                            <div class="flex items-start">
                                <span class="text-blue-600 mr-3 mt-0.5 flex-shrink-0">
                                    <Icon kind=IconKind::CheckCircle class="w-5 h-5"/>
                                </span>
                                <p class=move || format!("text-sm {}", theme.classes().secondary_text)>{*recommendation}</p>
                            </div>
                        })
                        .collect_view()}
                </div>
            </div>
        </div>

        <QaPanel/>

        <div class="mt-8 flex items-center justify-center space-x-4">
            <button class=move || {
                format!("{} text-white px-8 py-3 rounded-lg font-semibold transition-colors flex items-center", theme.classes().primary_btn)
            }>
                <Icon kind=IconKind::Download class="w-5 h-5 mr-2"/>
                "Download Report"
            </button>
            <button class=move || {
                let c = theme.classes();
                format!("px-8 py-3 rounded-lg border-2 {} {} transition-colors flex items-center", c.border, c.primary_text)
            }>
                <Icon kind=IconKind::Share class="w-5 h-5 mr-2"/>
                "Share Analysis"
            </button>
        </div>
    }
}

/// The canned exchange plus a question box that submits nowhere.
#[component]
fn QaPanel() -> impl IntoView {
    let theme = use_theme();
    let exchange = SAMPLE_ANALYSIS.exchange;
    let (draft, set_draft) = signal(String::new());

    view! {
        <div class=move || {
            let c = theme.classes();
            format!("{} rounded-xl shadow-lg p-6 {} border", c.card_bg, c.border)
        }>
            <div class=move || format!("flex items-center mb-6 {}", theme.classes().primary_text)>
                <Icon kind=IconKind::MessageSquare class="w-6 h-6 mr-3"/>
                <h2 class="text-xl font-bold">"Interactive Q&A"</h2>
            </div>

            <div class="mb-4">
                <div class="flex items-start mb-3">
                    <div class="w-8 h-8 bg-blue-600 rounded-full flex items-center justify-center mr-3 text-white">
                        <Icon kind=IconKind::User class="w-4 h-4"/>
                    </div>
                    <div class="flex-1">
                        <div class="p-3 rounded-lg bg-blue-50 border border-blue-200">
                            <p class="text-sm text-gray-900">{exchange.question}</p>
                        </div>
                    </div>
                </div>
            </div>

            <div class="mb-4">
                <div class="flex items-start">
                    <div class="w-8 h-8 bg-amber-600 rounded-full flex items-center justify-center mr-3 text-white">
                        <Icon kind=IconKind::Bot class="w-4 h-4"/>
                    </div>
                    <div class="flex-1">
                        <div class="p-4 rounded-lg bg-amber-50 border border-amber-200">
                            <p class="text-sm text-gray-700 leading-relaxed">{exchange.answer}</p>
                        </div>
                    </div>
                </div>
            </div>

            <div class="mt-6 p-4 rounded-lg bg-gray-50 border-2 border-dashed border-gray-300">
                <div class="flex items-center">
                    <input
                        type="text"
                        placeholder="Ask another question about your document..."
                        class="flex-1 p-3 rounded-lg border border-gray-300 focus:ring-2 focus:ring-blue-500 focus:border-transparent"
                        prop:value=move || draft.get()
                        on:input=move |ev| set_draft.set(event_target_value(&ev))
                    />
                    <button
                        type="button"
                        class=move || format!("ml-3 {} text-white px-6 py-3 rounded-lg font-medium transition-colors", theme.classes().primary_btn)
                    >
                        "Ask"
                    </button>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markers_fill_up_to_current_stage() {
        let current = DemoStage::Analyzing;
        assert!(step_marker_class(current, DemoStage::Uploaded).contains("bg-amber-600"));
        assert!(step_marker_class(current, DemoStage::Analyzing).contains("bg-amber-600"));
        assert!(step_marker_class(current, DemoStage::Results).contains("bg-gray-200"));
    }

    #[test]
    fn connectors_fill_only_behind_current_stage() {
        let current = DemoStage::Analyzing;
        assert_eq!(step_connector_class(current, DemoStage::Uploaded), "bg-amber-600");
        assert_eq!(step_connector_class(current, DemoStage::Analyzing), "bg-gray-300");
    }

    #[test]
    fn all_markers_filled_at_results() {
        for step in DemoStage::ALL {
            assert!(step_marker_class(DemoStage::Results, step).contains("bg-amber-600"));
        }
    }
}
