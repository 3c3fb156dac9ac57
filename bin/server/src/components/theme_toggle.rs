//! Light/dark switch shown in every view's navigation.

use crate::components::icons::{Icon, IconKind};
use crate::theme::use_theme;
use leptos::prelude::*;

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = use_theme();

    view! {
        <button
            class=move || {
                let c = theme.classes();
                format!(
                    "p-2 rounded-lg {} {} {} border hover:scale-105 transition-all",
                    c.card_bg, c.border, c.primary_text,
                )
            }
            aria-label="Toggle theme"
            on:click=move |_| theme.toggle_and_persist()
        >
            {move || {
                // Offer the theme you would switch to.
                if theme.get().is_dark() {
                    view! { <Icon kind=IconKind::Sun class="w-5 h-5"/> }.into_any()
                } else {
                    view! { <Icon kind=IconKind::Moon class="w-5 h-5"/> }.into_any()
                }
            }}
        </button>
    }
}
