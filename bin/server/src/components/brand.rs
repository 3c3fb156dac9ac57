use crate::components::icons::{Icon, IconKind};
use crate::theme::use_theme;
use leptos::prelude::*;

/// Logo tile and product name, linking home.
#[component]
pub fn Brand(
    /// Optional line under the product name.
    #[prop(optional, into)]
    tagline: Option<&'static str>,
) -> impl IntoView {
    let theme = use_theme();

    view! {
        <a href="/" class="flex items-center space-x-3">
            <div class=move || {
                format!("w-10 h-10 {} rounded-lg flex items-center justify-center text-white", theme.classes().icon_bg)
            }>
                <Icon kind=IconKind::FileText class="w-6 h-6"/>
            </div>
            <div>
                <div class=move || format!("text-2xl font-bold {}", theme.classes().primary_text)>
                    "LexiLingua"
                </div>
                {tagline.map(|text| view! {
                    <p class=move || format!("text-sm {}", theme.classes().muted_text)>{text}</p>
                })}
            </div>
        </a>
    }
}
