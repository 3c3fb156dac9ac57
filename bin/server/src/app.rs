//! Root component and routing.
//!
//! Screen selection goes through [`AppRoute::from_path`] so only the exact
//! paths `/upload` and `/demo` leave the homepage.

use crate::pages::{DemoPage, HomePage, UploadPage};
use crate::theme::ThemeContext;
use leptos::prelude::*;
use leptos_meta::{MetaTags, Title, provide_meta_context};
use leptos_router::{
    components::{Route, Router, Routes},
    hooks::use_location,
    path,
};
use lexilingua_core::AppRoute;

/// HTML document wrapping the application.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <link rel="stylesheet" href="/pkg/lexilingua.css"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    let theme = ThemeContext::provide();
    theme.restore_preference();

    view! {
        <Router>
            <main class=move || format!("{} transition-colors duration-300", theme.classes().main_bg)>
                <Routes fallback=CurrentScreen>
                    <Route path=path!("/") view=CurrentScreen/>
                    <Route path=path!("/*any") view=CurrentScreen/>
                </Routes>
            </main>
        </Router>
    }
}

/// Renders the screen for the current location, with its title.
#[component]
fn CurrentScreen() -> impl IntoView {
    let location = use_location();
    let route = Memo::new(move |_| location.pathname.with(|path| AppRoute::from_path(path)));

    view! {
        <Title text=move || route.get().title()/>
        {move || match route.get() {
            AppRoute::Home => view! { <HomePage/> }.into_any(),
            AppRoute::Upload => view! { <UploadPage/> }.into_any(),
            AppRoute::Demo => view! { <DemoPage/> }.into_any(),
        }}
    }
}
