//! Marketing homepage.

use crate::components::{Brand, Icon, IconKind, LanguageSelectors, ThemeToggle};
use crate::theme::use_theme;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use lexilingua_core::{AppRoute, LanguageChoice};

struct Feature {
    icon: IconKind,
    title: &'static str,
    description: &'static str,
    light_accent: &'static str,
    dark_accent: &'static str,
}

static FEATURES: [Feature; 4] = [
    Feature {
        icon: IconKind::FileText,
        title: "Processes Handwritten Documents",
        description: "Our cutting-edge OCR is designed to read scanned handwritten text correctly, a huge hurdle where the majority of digital tools don't stand a chance.",
        light_accent: "bg-blue-700",
        dark_accent: "bg-blue-600",
    },
    Feature {
        icon: IconKind::Globe,
        title: "Better Cross-Language Analysis",
        description: "Contrary to simple translators that lack legal subtlety, our AI is trained to interpret legal meaning and intent, not simply words.",
        light_accent: "bg-green-700",
        dark_accent: "bg-green-600",
    },
    Feature {
        icon: IconKind::Shield,
        title: "Law-Specific Legal Insights",
        description: "We offer targeted risk analysis and clause deconstruction, far beyond generic AI summarizers that lack legal context understanding.",
        light_accent: "bg-red-700",
        dark_accent: "bg-red-600",
    },
    Feature {
        icon: IconKind::Zap,
        title: "Instant & Accessible",
        description: "We provide an instant, low-cost initial review, avoiding the expense and wait involved with conventional legal advice.",
        light_accent: "bg-indigo-700",
        dark_accent: "bg-indigo-600",
    },
];

struct Pillar {
    icon: IconKind,
    title: &'static str,
    description: &'static str,
}

static PILLARS: [Pillar; 3] = [
    Pillar {
        icon: IconKind::Eye,
        title: "Analyze the \"Impossible\" Document",
        description: "The only platform engineered to handle complex handwritten notes and foreign language contracts. If you can scan it, we can interpret its legal intent.",
    },
    Pillar {
        icon: IconKind::MessageSquare,
        title: "Go Beyond Static Summaries",
        description: "Our interactive Q&A allows you to \"talk\" to your document, providing deep contextual understanding of legal nuances.",
    },
    Pillar {
        icon: IconKind::CheckCircle,
        title: "Deliver an Actionable Plan",
        description: "Get a clear \"Next Steps\" checklist after analysis, bridging the gap between understanding and action.",
    },
];

const BENEFITS: [&str; 4] = [
    "Empowers you by breaking down complex legal language into plain, simple words",
    "Demolishes language barriers by examining documents in any language and returning insights in your preferred language",
    "Identifies hidden risks and predatory clauses prior to signing, serving as a vital security net",
    "Creates a clear 'Next Steps' checklist to lead users from confusion to completion",
];

const TRUST_INDICATORS: [(IconKind, &str); 3] = [
    (IconKind::Lock, "Bank-Grade Security"),
    (IconKind::Award, "Certified Legal AI"),
    (IconKind::Scale, "Compliance Ready"),
];

const ANALYSIS_STEPS: [&str; 3] = [
    "Upload any document format",
    "Get instant professional analysis",
    "Receive clear action steps",
];

const FOOTER_COLUMNS: [(&str, [&str; 4]); 3] = [
    ("Product", ["Features", "Pricing", "API Access", "Enterprise"]),
    ("Support", ["Help Center", "Contact Support", "Privacy Policy", "Terms of Service"]),
    ("Company", ["About Us", "Blog", "Careers", "Press Kit"]),
];

/// The homepage component.
#[component]
pub fn HomePage() -> impl IntoView {
    let theme = use_theme();
    let navigate = use_navigate();

    let go_upload = {
        let navigate = navigate.clone();
        move |_: leptos::ev::MouseEvent| navigate(AppRoute::Upload.path(), Default::default())
    };
    let go_demo = move |_: leptos::ev::MouseEvent| navigate(AppRoute::Demo.path(), Default::default());

    view! {
        <div class=move || format!("min-h-screen {} transition-colors duration-300", theme.classes().main_bg)>
            <HomeNav/>
            <Hero on_upload=go_upload.clone() on_demo=go_demo.clone()/>
            <FeaturesSection/>
            <PillarsSection/>
            <BenefitsSection on_begin=go_upload.clone()/>
            <CallToAction on_upload=go_upload on_demo=go_demo/>
            <Footer/>
        </div>
    }
}

#[component]
fn HomeNav() -> impl IntoView {
    let theme = use_theme();
    let navigate = use_navigate();

    view! {
        <nav class=move || format!("{} shadow-sm border-b transition-colors duration-300", theme.classes().nav_bg)>
            <div class="max-w-full mx-auto px-8 py-4">
                <div class="flex items-center justify-between">
                    <Brand/>
                    <div class=move || format!("hidden md:flex space-x-8 {}", theme.classes().muted_text)>
                        <a href="#features" class="transition-colors font-medium">"Features"</a>
                        <a href="#how-it-works" class="transition-colors font-medium">"How It Works"</a>
                        <a href="#pricing" class="transition-colors font-medium">"Pricing"</a>
                    </div>
                    <div class="flex items-center space-x-4">
                        <ThemeToggle/>
                        <button
                            class=move || format!("{} text-white px-6 py-2 rounded-lg transition-colors font-medium", theme.classes().primary_btn)
                            on:click=move |_: leptos::ev::MouseEvent| navigate(AppRoute::Upload.path(), Default::default())
                        >
                            "Get Started"
                        </button>
                    </div>
                </div>
            </div>
        </nav>
    }
}

#[component]
fn Hero<U, D>(on_upload: U, on_demo: D) -> impl IntoView
where
    U: Fn(leptos::ev::MouseEvent) + 'static,
    D: Fn(leptos::ev::MouseEvent) + 'static,
{
    let theme = use_theme();

    view! {
        <section class=move || format!("{} px-8 py-12 transition-colors duration-300", theme.classes().card_bg)>
            <div class="max-w-full mx-auto px-4">
                <div class="text-center lg:text-left max-w-6xl mx-auto">
                    <h1 class=move || format!("text-3xl lg:text-4xl font-bold {} mb-3 leading-tight", theme.classes().primary_text)>
                        "Transform Complex Legal Documents"
                        <span class=move || format!("block {} text-xl lg:text-2xl font-medium mt-1", theme.classes().secondary_text)>
                            "Professional Analysis & Verification"
                        </span>
                    </h1>
                    <p class=move || format!("text-lg {} mb-4 leading-relaxed", theme.classes().muted_text)>
                        "LexiLingua is an artificial intelligence platform that simplifies complex legal documents into clear, actionable information in your preferred language. Created for ordinary citizens, freelancers, and small business owners who need legal clarity without expensive lawyers."
                    </p>
                    <div class=move || format!("{} rounded-lg p-3 mb-4", theme.classes().callout_bg)>
                        <p class=move || format!("text-base {} font-medium", theme.classes().primary_text)>
                            "✨ Get instant detailed reports with summary, risk rating, and interactive Q&A to make confident decisions with full information."
                        </p>
                    </div>

                    <div class="flex flex-wrap gap-4 justify-center items-center mb-6">
                        {TRUST_INDICATORS
                            .into_iter()
                            .map(|(icon, text)| view! {
                                <div class=move || format!("flex items-center gap-2 {}", theme.classes().muted_text)>
                                    <span class=move || theme.classes().secondary_text>
                                        <Icon kind=icon class="w-6 h-6"/>
                                    </span>
                                    <span class="font-medium">{text}</span>
                                </div>
                            })
                            .collect_view()}
                    </div>

                    <div class="flex flex-col sm:flex-row gap-3 justify-center items-center mb-8">
                        <button
                            class=move || format!("{} text-white px-6 py-3 rounded-lg font-semibold transition-colors shadow-lg text-base", theme.classes().primary_btn)
                            on:click=on_upload
                        >
                            "Upload Document Now"
                        </button>
                        <button
                            class=move || format!("border-2 {} px-6 py-3 rounded-lg font-semibold transition-colors text-base", theme.classes().secondary_btn)
                            on:click=on_demo
                        >
                            "See How It Works"
                        </button>
                    </div>
                </div>

                <UploadPreview/>
            </div>
        </section>
    }
}

/// The homepage's upload look-alike. Only the hover highlight is live.
#[component]
fn UploadPreview() -> impl IntoView {
    let theme = use_theme();
    let (hover, set_hover) = signal(false);
    let languages = RwSignal::new(LanguageChoice::default());

    let chip = "border px-4 py-3 rounded-lg text-sm font-medium text-center";

    view! {
        <div class="max-w-6xl mx-auto mt-8">
            <div
                class=move || {
                    let c = theme.classes();
                    let edge = if hover.get() {
                        format!("{} shadow-xl", c.upload_border)
                    } else {
                        c.border.to_string()
                    };
                    format!(
                        "relative {} border-2 border-dashed rounded-2xl p-8 transition-all duration-300 shadow-lg {}",
                        c.upload_bg, edge,
                    )
                }
                on:mouseenter=move |_| set_hover.set(true)
                on:mouseleave=move |_| set_hover.set(false)
            >
                <div class="text-center mb-6">
                    <div class=move || {
                        let c = theme.classes();
                        format!("w-16 h-16 {} {} rounded-full flex items-center justify-center mx-auto mb-4", c.chip_bg, c.secondary_text)
                    }>
                        <Icon kind=IconKind::Upload class="w-8 h-8"/>
                    </div>
                    <h3 class=move || format!("text-xl font-semibold {} mb-2", theme.classes().primary_text)>
                        "Upload Your Legal Document"
                    </h3>
                    <p class=move || format!("{} mb-4", theme.classes().muted_text)>
                        "PDF, Image, Handwritten - All formats supported"
                    </p>
                </div>

                <LanguageSelectors choice=languages detection_badge="✨ AI-Powered Detection"/>

                <div class=move || {
                    let c = theme.classes();
                    format!("border-2 border-dashed {} rounded-xl p-8 mb-6 {} transition-colors cursor-pointer", c.border, c.border_hover)
                }>
                    <div class="text-center">
                        <div class=move || format!("flex justify-center mb-3 {}", theme.classes().muted_text)>
                            <Icon kind=IconKind::FileText class="w-16 h-16"/>
                        </div>
                        <p class=move || format!("{} font-medium mb-2 text-lg", theme.classes().primary_text)>
                            "Drop your file here or click to browse"
                        </p>
                        <p class=move || format!("{} text-sm", theme.classes().muted_text)>
                            "Supports: PDF, DOC, JPG, PNG, Handwritten documents"
                        </p>
                    </div>
                </div>

                <div class="grid grid-cols-3 gap-3">
                    <div class=move || format!("{} {chip}", theme.classes().badge_risk)>"✓ Risk Analysis"</div>
                    <div class=move || format!("{} {chip}", theme.classes().badge_summary)>"✓ Plain Summary"</div>
                    <div class=move || format!("{} {chip}", theme.classes().badge_steps)>"✓ Next Steps"</div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn FeaturesSection() -> impl IntoView {
    let theme = use_theme();

    view! {
        <section id="features" class=move || format!("px-8 py-20 {} transition-colors duration-300", theme.classes().section_bg)>
            <div class="max-w-full mx-auto px-4">
                <div class="text-center mb-16">
                    <h2 class=move || format!("text-4xl font-bold {} mb-6", theme.classes().primary_text)>
                        "What Makes LexiLingua Different"
                    </h2>
                    <p class=move || format!("text-xl {} max-w-5xl mx-auto", theme.classes().muted_text)>
                        "Unlike simple translators that lack legal subtlety or generic AI summarizers without legal context, our platform provides comprehensive legal understanding"
                    </p>
                </div>

                <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-8">
                    {FEATURES
                        .iter()
                        .map(|feature| view! {
                            <div class="group">
                                <div class=move || {
                                    let c = theme.classes();
                                    format!(
                                        "{} {} border rounded-xl p-6 h-full hover:shadow-lg transition-all duration-300 {}",
                                        c.card_bg, c.border, c.border_hover,
                                    )
                                }>
                                    <div class=move || {
                                        format!(
                                            "w-16 h-16 {} rounded-lg flex items-center justify-center mb-4 text-white group-hover:scale-105 transition-transform",
                                            theme.get().pick(feature.light_accent, feature.dark_accent),
                                        )
                                    }>
                                        <Icon kind=feature.icon class="w-8 h-8"/>
                                    </div>
                                    <h3 class=move || format!("text-xl font-semibold {} mb-3", theme.classes().primary_text)>
                                        {feature.title}
                                    </h3>
                                    <p class=move || format!("{} leading-relaxed", theme.classes().muted_text)>
                                        {feature.description}
                                    </p>
                                </div>
                            </div>
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn PillarsSection() -> impl IntoView {
    let theme = use_theme();

    view! {
        <section id="how-it-works" class=move || format!("px-8 py-20 {} transition-colors duration-300", theme.classes().card_bg)>
            <div class="max-w-full mx-auto px-4">
                <div class="text-center mb-16">
                    <h2 class=move || format!("text-4xl font-bold {} mb-6", theme.classes().primary_text)>
                        "Complete Document Understanding"
                    </h2>
                    <p class=move || format!("text-xl {} max-w-3xl mx-auto", theme.classes().muted_text)>
                        "Our comprehensive approach delivers insights that basic document scanners and translators cannot match"
                    </p>
                </div>

                <div class="space-y-12">
                    {PILLARS
                        .iter()
                        .map(|pillar| view! {
                            <div class="group">
                                <div class=move || {
                                    let c = theme.classes();
                                    format!("{} {} border rounded-2xl p-8 hover:shadow-lg transition-all duration-300", c.section_bg, c.border)
                                }>
                                    <div class="flex flex-col md:flex-row items-center gap-8">
                                        <div class="flex-shrink-0">
                                            <div class=move || {
                                                format!(
                                                    "w-24 h-24 {} rounded-full flex items-center justify-center text-white group-hover:scale-105 transition-transform",
                                                    theme.classes().icon_bg,
                                                )
                                            }>
                                                <Icon kind=pillar.icon class="w-12 h-12"/>
                                            </div>
                                        </div>
                                        <div class="flex-1 text-center md:text-left">
                                            <h3 class=move || format!("text-2xl font-bold {} mb-4", theme.classes().primary_text)>
                                                {pillar.title}
                                            </h3>
                                            <p class=move || format!("text-lg {} leading-relaxed", theme.classes().muted_text)>
                                                {pillar.description}
                                            </p>
                                        </div>
                                    </div>
                                </div>
                            </div>
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn BenefitsSection<B>(on_begin: B) -> impl IntoView
where
    B: Fn(leptos::ev::MouseEvent) + 'static,
{
    let theme = use_theme();

    view! {
        <section class=move || format!("px-8 py-20 {} transition-colors duration-300", theme.classes().section_bg)>
            <div class="max-w-full mx-auto px-4">
                <div class="grid lg:grid-cols-2 gap-12 items-center">
                    <div>
                        <h2 class=move || format!("text-4xl font-bold {} mb-8", theme.classes().primary_text)>
                            "How We Solve Your Legal Document Challenges"
                        </h2>
                        <div class="space-y-6">
                            {BENEFITS
                                .into_iter()
                                .map(|benefit| view! {
                                    <div class="flex items-start gap-4 group">
                                        <div class=move || {
                                            format!(
                                                "flex-shrink-0 w-8 h-8 {} rounded-full flex items-center justify-center text-white group-hover:scale-110 transition-transform",
                                                theme.classes().check_bg,
                                            )
                                        }>
                                            <Icon kind=IconKind::CheckCircle class="w-5 h-5"/>
                                        </div>
                                        <p class=move || format!("text-lg {} leading-relaxed", theme.classes().secondary_text)>
                                            {benefit}
                                        </p>
                                    </div>
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div class="relative">
                        <div class=move || {
                            let c = theme.classes();
                            format!("{} {} border rounded-2xl p-8 shadow-lg", c.card_bg, c.border)
                        }>
                            <h3 class=move || format!("text-2xl font-bold {} mb-6", theme.classes().primary_text)>
                                "Start Your Document Analysis"
                            </h3>
                            <p class=move || format!("{} mb-6", theme.classes().muted_text)>
                                "Join thousands of professionals who trust LexiLingua for accurate legal document analysis and verification."
                            </p>
                            <div class="space-y-4">
                                {ANALYSIS_STEPS
                                    .into_iter()
                                    .map(|step| view! {
                                        <div class=move || format!("flex items-center gap-3 {}", theme.classes().muted_text)>
                                            <div class=move || {
                                                format!("w-6 h-6 {} rounded-full flex items-center justify-center", theme.classes().bullet_ring)
                                            }>
                                                <div class=move || format!("w-2 h-2 {} rounded-full", theme.classes().bullet_dot)></div>
                                            </div>
                                            <span>{step}</span>
                                        </div>
                                    })
                                    .collect_view()}
                            </div>
                            <button
                                class=move || {
                                    format!(
                                        "w-full {} text-white py-4 rounded-lg font-semibold transition-colors shadow-lg flex items-center justify-center gap-2 mt-6",
                                        theme.classes().primary_btn,
                                    )
                                }
                                on:click=on_begin
                            >
                                "Begin Analysis"
                                <Icon kind=IconKind::ArrowRight class="w-5 h-5"/>
                            </button>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn CallToAction<U, D>(on_upload: U, on_demo: D) -> impl IntoView
where
    U: Fn(leptos::ev::MouseEvent) + 'static,
    D: Fn(leptos::ev::MouseEvent) + 'static,
{
    let theme = use_theme();

    view! {
        <section id="pricing" class=move || format!("px-8 py-20 {} transition-colors duration-300", theme.classes().icon_bg)>
            <div class="max-w-5xl mx-auto text-center">
                <h2 class="text-4xl font-bold text-white mb-6">
                    "Professional Legal Document Analysis Made Simple"
                </h2>
                <p class=move || format!("text-xl {} mb-8", theme.classes().cta_text)>
                    "Don't let complex legal language create risks for your business. Get professional-grade analysis in minutes, not days."
                </p>
                <div class="flex flex-col sm:flex-row gap-4 justify-center">
                    <button
                        class=move || format!("{} px-12 py-4 rounded-lg font-semibold transition-colors shadow-lg text-lg", theme.classes().cta_primary_btn)
                        on:click=on_upload
                    >
                        "Upload Your Document"
                    </button>
                    <button
                        class=move || format!("border-2 {} px-12 py-4 rounded-lg font-semibold transition-colors text-lg", theme.classes().cta_secondary_btn)
                        on:click=on_demo
                    >
                        "Schedule Demo"
                    </button>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Footer() -> impl IntoView {
    let theme = use_theme();

    view! {
        <footer class=move || format!("px-8 py-12 {} border-t transition-colors duration-300", theme.classes().footer_bg)>
            <div class="max-w-full mx-auto px-4">
                <div class="grid md:grid-cols-4 gap-8">
                    <div>
                        <div class="flex items-center space-x-3 mb-4">
                            <div class=move || {
                                format!("w-8 h-8 {} rounded-lg flex items-center justify-center text-white", theme.classes().footer_logo_bg)
                            }>
                                <Icon kind=IconKind::FileText class="w-5 h-5"/>
                            </div>
                            <div class=move || format!("text-xl font-bold {}", theme.classes().footer_heading)>"LexiLingua"</div>
                        </div>
                        <p class=move || theme.classes().footer_text>
                            "Professional legal document analysis for businesses and individuals worldwide."
                        </p>
                    </div>
                    {FOOTER_COLUMNS
                        .into_iter()
                        .map(|(heading, links)| view! {
                            <div>
                                <h4 class=move || format!("font-semibold {} mb-4", theme.classes().footer_heading)>{heading}</h4>
                                <div class=move || format!("space-y-2 {}", theme.classes().footer_text)>
                                    {links
                                        .into_iter()
                                        .map(|link| view! {
                                            <div class=move || format!("{} cursor-pointer", theme.classes().footer_link_hover)>{link}</div>
                                        })
                                        .collect_view()}
                                </div>
                            </div>
                        })
                        .collect_view()}
                </div>
                <div class=move || {
                    let c = theme.classes();
                    format!("border-t {} mt-12 pt-8 text-center {}", c.footer_divider, c.footer_text)
                }>
                    <p>"© 2025 LexiLingua. All rights reserved. Professional legal document analysis platform."</p>
                </div>
            </div>
        </footer>
    }
}
