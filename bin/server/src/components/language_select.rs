//! Document and analysis language selectors.
//!
//! The choice lives in the caller's signal and goes nowhere else.

use crate::theme::use_theme;
use leptos::prelude::*;
use lexilingua_core::{Language, LanguageChoice, SourceLanguage};

#[component]
pub fn LanguageSelectors(
    choice: RwSignal<LanguageChoice>,
    /// Text of the badge under the document language selector.
    detection_badge: &'static str,
    /// Padding class for the selects.
    #[prop(default = "p-3")]
    padding: &'static str,
) -> impl IntoView {
    let theme = use_theme();

    let label_class = move || format!("block text-sm font-medium {} mb-2", theme.classes().primary_text);
    let select_class = move |ring: &'static str| {
        let c = theme.classes();
        format!(
            "w-full {padding} border {} rounded-lg {} {} focus:ring-2 {ring} focus:border-transparent",
            c.border, c.card_bg, c.primary_text,
        )
    };
    let badge_class = move || {
        format!(
            "p-3 {} border rounded-lg text-sm text-center font-medium",
            theme.classes().badge_summary
        )
    };

    let on_source_change = move |ev: leptos::ev::Event| {
        if let Ok(source) = event_target_value(&ev).parse::<SourceLanguage>() {
            choice.update(|c| c.source = source);
        }
    };
    let on_target_change = move |ev: leptos::ev::Event| {
        if let Ok(target) = event_target_value(&ev).parse::<Language>() {
            choice.update(|c| c.target = target);
        }
    };

    view! {
        <div class="grid md:grid-cols-2 gap-6 mb-6">
            <div>
                <label class=label_class>"1. What language is your document in?"</label>
                <div class="space-y-3">
                    <select
                        class=move || select_class("focus:ring-blue-500")
                        prop:value=move || choice.get().source.code()
                        on:change=on_source_change
                    >
                        {SourceLanguage::options()
                            .into_iter()
                            .map(|source| {
                                view! { <option value=source.code()>{source.option_label()}</option> }
                            })
                            .collect_view()}
                    </select>
                    <div class=badge_class>{detection_badge}</div>
                </div>
            </div>

            <div>
                <label class=label_class>"2. Which language would you like the analysis in?"</label>
                <select
                    class=move || select_class("focus:ring-green-500")
                    prop:value=move || choice.get().target.code()
                    on:change=on_target_change
                >
                    {Language::ALL
                        .into_iter()
                        .map(|language| {
                            view! { <option value=language.code()>{language.option_label()}</option> }
                        })
                        .collect_view()}
                </select>
            </div>
        </div>
    }
}
