//! Marketing landing page at `/`.

use leptos::prelude::*;

use crate::components::landing::benefits::Benefits;
use crate::components::landing::demo_section::DemoSection;
use crate::components::landing::features::Features;
use crate::components::landing::footer::Footer;
use crate::components::landing::header::LandingHeader;
use crate::components::landing::hero::Hero;
use crate::state::landing::DemoRequestState;

/// Landing page. Owns the demo-request flow so the header, hero, and demo
/// section share one form state.
#[component]
pub fn LandingPage() -> impl IntoView {
    provide_context(RwSignal::new(DemoRequestState::default()));

    view! {
        <div class="landing">
            <LandingHeader/>
            <main>
                <Hero/>
                <Features/>
                <Benefits/>
                <DemoSection/>
            </main>
            <Footer/>
        </div>
    }
}
