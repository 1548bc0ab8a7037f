//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::notifications::ToastHost;
use crate::fixtures::landing::BRAND;
use crate::pages::{dashboard::DashboardPage, landing::LandingPage};
use crate::state::config::DashboardConfig;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="tr">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
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

/// Root application component.
///
/// Provides the dashboard config and the shared notification queue, then
/// routes between the landing page and the dashboard.
///
/// Both start from the defaults so server and hydrated markup agree; the
/// browser override lands once the client effect runs.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = RwSignal::new(DashboardConfig::default());
    let notices = RwSignal::new(DashboardConfig::default().notification_queue());
    provide_context(config);
    provide_context(notices);

    Effect::new(move |_| {
        if let Some(loaded) = DashboardConfig::load_override() {
            config.set(loaded);
            notices.set(loaded.notification_queue());
        }
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/tesora.css"/>
        <Title text=BRAND/>

        <Router>
            <Routes fallback=|| "Sayfa bulunamadı.".into_view()>
                <Route path=StaticSegment("") view=LandingPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
            </Routes>
        </Router>
        <ToastHost/>
    }
}
