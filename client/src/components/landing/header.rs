//! Sticky landing header with anchor navigation and a mobile menu.

use leptos::prelude::*;

use super::demo_section::open_demo;
use crate::fixtures::landing::{BRAND, HEADER_LINKS};
use crate::state::landing::{DemoRequestState, HeaderState};
#[cfg(feature = "hydrate")]
use crate::util::dom;

#[component]
pub fn LandingHeader() -> impl IntoView {
    let demo = expect_context::<RwSignal<DemoRequestState>>();
    let header = RwSignal::new(HeaderState::default());

    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::scroll, move |_| {
            let y = dom::scroll_y();
            header.maybe_update(|h| h.on_scroll(y));
        });
        on_cleanup(move || handle.remove());
    }

    let menu_open = move || header.with(|h| h.menu_open);

    view! {
        <header class="landing-header" class:landing-header--scrolled=move || header.with(|h| h.scrolled)>
            <div class="landing-header__bar">
                <a href="/" class="landing-header__brand">
                    <span class="brand-mark">"T"</span>
                    <span class="landing-header__name">{BRAND}</span>
                </a>
                <nav class="landing-header__nav">
                    {HEADER_LINKS
                        .iter()
                        .map(|link| view! { <a href=link.href>{link.name}</a> })
                        .collect::<Vec<_>>()}
                </nav>
                <div class="landing-header__actions">
                    <a href="/dashboard" class="btn btn--ghost">"Dashboard"</a>
                    <button class="btn btn--primary" on:click=move |_| open_demo(demo)>
                        "Demo Talep Et"
                    </button>
                </div>
                <button
                    class="landing-header__toggle"
                    title="Menü"
                    aria-expanded=move || menu_open().to_string()
                    on:click=move |_| header.update(HeaderState::toggle_menu)
                >
                    {move || if menu_open() { "✕" } else { "☰" }}
                </button>
            </div>
            <Show when=menu_open>
                <nav class="landing-header__mobile">
                    {HEADER_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <a href=link.href on:click=move |_| header.update(HeaderState::close_menu)>
                                    {link.name}
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()}
                    <button
                        class="btn btn--primary"
                        on:click=move |_| {
                            open_demo(demo);
                            header.update(HeaderState::close_menu);
                        }
                    >
                        "Demo Talep Et"
                    </button>
                </nav>
            </Show>
        </header>
    }
}
