//! Hero banner with the primary call to action.

use leptos::prelude::*;

use super::demo_section::open_demo;
use crate::fixtures::landing::{HERO, HERO_STATS};
use crate::state::landing::DemoRequestState;

#[component]
pub fn Hero() -> impl IntoView {
    let demo = expect_context::<RwSignal<DemoRequestState>>();

    view! {
        <section class="hero">
            <span class="hero__badge">{HERO.badge}</span>
            <h1 class="hero__title">{HERO.title}</h1>
            <p class="hero__subtitle">{HERO.subtitle}</p>
            <p class="hero__description">{HERO.description}</p>
            <div class="hero__actions">
                <button class="btn btn--primary btn--large" on:click=move |_| open_demo(demo)>
                    {HERO.cta}
                </button>
                <a href="/dashboard" class="btn btn--outline btn--large">"Demo Paneli Gör"</a>
            </div>
            <div class="hero__stats">
                {HERO_STATS
                    .iter()
                    .map(|s| {
                        view! {
                            <div class="stat">
                                <div class="stat__value">{s.value}</div>
                                <div class="stat__label">{s.label}</div>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}
