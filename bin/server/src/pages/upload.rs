//! Document upload page.
//!
//! Takes one file by drag-and-drop or the file picker, then hands off to the
//! demo. Nothing is sent anywhere.

use crate::components::{Brand, Icon, IconKind, LanguageSelectors, ThemeToggle};
use crate::theme::use_theme;
use leptos::html;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use lexilingua_core::intake::ACCEPTED_EXTENSIONS;
use lexilingua_core::{
    AppRoute, FileIntake, LanguageChoice, SelectedFile, ThemeClasses, advertised_limit_label,
};
use web_sys::{FileList, HtmlInputElement};

const FILE_INPUT_ID: &str = "file-upload";

const SECURITY_NOTES: [(IconKind, &str, &str); 3] = [
    (IconKind::Shield, "Bank-Grade Encryption", "256-bit SSL"),
    (IconKind::Lock, "GDPR Compliant", "EU Privacy Standards"),
    (IconKind::Zap, "Auto-Delete", "Files removed after 24h"),
];

/// Converts a browser file list into intake selections, in list order.
fn selected_files(list: Option<FileList>) -> Vec<SelectedFile> {
    let Some(list) = list else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|index| list.get(index))
        .map(|file| SelectedFile::new(file.name(), file.size() as u64))
        .collect()
}

fn continue_label(can_continue: bool) -> &'static str {
    if can_continue {
        "Analyze with Gemini AI"
    } else {
        "Select a file to continue"
    }
}

fn drop_zone_class(intake: &FileIntake, c: &ThemeClasses) -> String {
    let state = if intake.is_highlighted() {
        format!("{} scale-[1.02]", c.upload_border)
    } else {
        format!("{} {}", c.border, c.border_hover)
    };
    format!("border-2 border-dashed rounded-xl p-12 mb-6 transition-all duration-300 {state}")
}

/// The upload page component.
#[component]
pub fn UploadPage() -> impl IntoView {
    let theme = use_theme();
    let navigate = use_navigate();

    let intake = RwSignal::new(FileIntake::new());
    let languages = RwSignal::new(LanguageChoice::default());
    let file_input = NodeRef::<html::Input>::new();

    let on_drag_enter = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        intake.update(FileIntake::drag_enter);
    };
    let on_drag_over = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        intake.update(FileIntake::drag_enter);
    };
    let on_drag_leave = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        intake.update(FileIntake::drag_leave);
    };
    let on_drop = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        let files = selected_files(ev.data_transfer().and_then(|data| data.files()));
        intake.update(|intake| {
            intake.drop_files(files);
        });
    };
    let on_pick = move |ev: leptos::ev::Event| {
        let files = selected_files(event_target::<HtmlInputElement>(&ev).files());
        intake.update(|intake| {
            intake.pick_files(files);
        });
    };
    let on_clear = move |_: leptos::ev::MouseEvent| {
        intake.update(FileIntake::clear);
        // Lets the picker report the same file again.
        if let Some(input) = file_input.get() {
            input.set_value("");
        }
    };
    let on_continue = move |_: leptos::ev::MouseEvent| {
        if let Some(route) = intake.with(FileIntake::continue_target) {
            navigate(route.path(), Default::default());
        }
    };

    let can_continue = move || intake.with(FileIntake::can_continue);

    view! {
        <div class=move || format!("min-h-screen {} transition-colors duration-300", theme.classes().main_bg)>
            <nav class=move || format!("{} shadow-sm border-b transition-colors duration-300", theme.classes().nav_bg)>
                <div class="max-w-full mx-auto px-8 py-4">
                    <div class="flex items-center justify-between">
                        <div class="flex items-center space-x-4">
                            <a
                                href=AppRoute::Home.path()
                                class=move || format!("flex items-center gap-2 {} transition-colors", theme.classes().muted_text)
                            >
                                <Icon kind=IconKind::ArrowLeft class="w-5 h-5"/>
                                "Back to Home"
                            </a>
                            <Brand/>
                        </div>
                        <div class="flex items-center space-x-4">
                            <a
                                href=AppRoute::Demo.path()
                                class=move || {
                                    let c = theme.classes();
                                    format!("{} {} border px-4 py-2 rounded-lg text-sm font-medium transition-colors", c.card_bg, c.secondary_text)
                                }
                            >
                                "View Demo"
                            </a>
                            <ThemeToggle/>
                        </div>
                    </div>
                </div>
            </nav>

            <div class="max-w-4xl mx-auto px-8 py-16">
                <div class="text-center mb-12">
                    <h1 class=move || format!("text-4xl font-bold {} mb-4", theme.classes().primary_text)>
                        "Upload Your Legal Document"
                    </h1>
                    <p class=move || format!("text-xl {}", theme.classes().muted_text)>
                        "Get instant AI-powered analysis in your preferred language"
                    </p>
                </div>

                <div class=move || {
                    let c = theme.classes();
                    format!("{} {} border rounded-2xl p-8 shadow-lg", c.card_bg, c.border)
                }>
                    <LanguageSelectors choice=languages detection_badge="✨ Gemini AI-Powered Detection" padding="p-4"/>

                    <div
                        class=move || intake.with(|intake| drop_zone_class(intake, theme.classes()))
                        on:dragenter=on_drag_enter
                        on:dragover=on_drag_over
                        on:dragleave=on_drag_leave
                        on:drop=on_drop
                        on:mouseenter=move |_| intake.update(|intake| intake.set_hovering(true))
                        on:mouseleave=move |_| intake.update(|intake| intake.set_hovering(false))
                    >
                        <input
                            node_ref=file_input
                            type="file"
                            id=FILE_INPUT_ID
                            class="hidden"
                            accept=ACCEPTED_EXTENSIONS
                            on:change=on_pick
                        />
                        {move || match intake.with(|intake| intake.selected().cloned()) {
                            Some(file) => view! {
                                <div class="text-center">
                                    <div class=move || format!("flex justify-center mb-4 {}", theme.classes().secondary_text)>
                                        <Icon kind=IconKind::CheckCircle class="w-16 h-16"/>
                                    </div>
                                    <p class=move || format!("{} font-semibold text-lg mb-2", theme.classes().primary_text)>
                                        {file.name().to_string()}
                                    </p>
                                    <p class=move || format!("{} text-sm mb-4", theme.classes().muted_text)>
                                        {file.display_size()}
                                    </p>
                                    <button
                                        class=move || format!("{} text-sm font-medium underline", theme.classes().secondary_text)
                                        on:click=on_clear
                                    >
                                        "Choose different file"
                                    </button>
                                </div>
                            }
                            .into_any(),
                            None => view! {
                                <label for=FILE_INPUT_ID class="cursor-pointer block text-center">
                                    <div class=move || format!("flex justify-center mb-4 {}", theme.classes().muted_text)>
                                        <Icon kind=IconKind::Upload class="w-16 h-16"/>
                                    </div>
                                    <p class=move || format!("{} font-semibold text-lg mb-2", theme.classes().primary_text)>
                                        "Drop your file here or click to browse"
                                    </p>
                                    <p class=move || format!("{} text-sm", theme.classes().muted_text)>
                                        {format!("Supports: PDF, DOC, DOCX, JPG, PNG, TXT (Max {})", advertised_limit_label())}
                                    </p>
                                </label>
                            }
                            .into_any(),
                        }}
                    </div>

                    <div class="grid grid-cols-3 gap-3 mb-8">
                        <div class=move || format!("{} border px-4 py-3 rounded-lg text-sm font-medium text-center", theme.classes().badge_risk)>
                            "✓ Risk Analysis"
                        </div>
                        <div class=move || format!("{} border px-4 py-3 rounded-lg text-sm font-medium text-center", theme.classes().badge_summary)>
                            "✓ Plain Summary"
                        </div>
                        <div class=move || format!("{} border px-4 py-3 rounded-lg text-sm font-medium text-center", theme.classes().badge_steps)>
                            "✓ Next Steps"
                        </div>
                    </div>

                    <button
                        class=move || {
                            let c = theme.classes();
                            let state = if can_continue() {
                                format!("{} text-white shadow-lg", c.primary_btn)
                            } else {
                                format!("{} {} cursor-not-allowed", c.inset_bg, c.muted_text)
                            };
                            format!("w-full py-4 rounded-lg font-semibold text-lg transition-colors flex items-center justify-center gap-2 {state}")
                        }
                        disabled=move || !can_continue()
                        on:click=on_continue
                    >
                        {move || continue_label(can_continue())}
                        <Show when=can_continue>
                            <Icon kind=IconKind::ArrowRight class="w-5 h-5"/>
                        </Show>
                    </button>
                </div>

                <div class="mt-8 grid md:grid-cols-3 gap-4 text-center">
                    {SECURITY_NOTES
                        .into_iter()
                        .map(|(icon, title, detail)| view! {
                            <div class=move || {
                                let c = theme.classes();
                                format!("{} {} border rounded-lg p-4", c.card_bg, c.border)
                            }>
                                <div class=move || format!("flex justify-center mb-2 {}", theme.classes().secondary_text)>
                                    <Icon kind=icon class="w-6 h-6"/>
                                </div>
                                <p class=move || format!("text-sm font-medium {}", theme.classes().primary_text)>{title}</p>
                                <p class=move || format!("text-xs {}", theme.classes().muted_text)>{detail}</p>
                            </div>
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexilingua_core::Theme;

    #[test]
    fn continue_label_follows_selection() {
        assert_eq!(continue_label(false), "Select a file to continue");
        assert_eq!(continue_label(true), "Analyze with Gemini AI");
    }

    #[test]
    fn drop_zone_highlights_while_dragging() {
        let classes = Theme::Light.classes();
        let mut intake = FileIntake::new();
        assert!(!drop_zone_class(&intake, classes).contains("scale-[1.02]"));

        intake.drag_enter();
        assert!(drop_zone_class(&intake, classes).contains(classes.upload_border));

        intake.drag_leave();
        assert!(!drop_zone_class(&intake, classes).contains("scale-[1.02]"));
    }

    #[test]
    fn drop_zone_highlights_on_hover() {
        let classes = Theme::Dark.classes();
        let mut intake = FileIntake::new();
        intake.set_hovering(true);
        assert!(drop_zone_class(&intake, classes).contains("scale-[1.02]"));
    }

    #[test]
    fn missing_file_list_selects_nothing() {
        assert!(selected_files(None).is_empty());
    }
}
