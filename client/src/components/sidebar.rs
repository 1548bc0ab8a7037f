//! Dashboard sidebar: brand, view menu, and signed-in user card.

use leptos::prelude::*;

use crate::fixtures::dashboard;
use crate::fixtures::landing::BRAND;
use crate::state::nav::ShellState;

/// Persistent left menu. Clicking an entry switches the active view.
#[component]
pub fn Sidebar(shell: RwSignal<ShellState>) -> impl IntoView {
    let user = dashboard::user();

    view! {
        <aside class="sidebar">
            <a href="/" class="sidebar__brand">
                <span class="brand-mark">"T"</span>
                <span class="sidebar__brand-name">{BRAND}</span>
            </a>

            <nav class="sidebar__nav">
                {dashboard::navigation()
                    .into_iter()
                    .map(|item| {
                        let key = item.key;
                        let id = key.id();
                        let class = move || {
                            if shell.get().is_active(key) {
                                "sidebar__item sidebar__item--active"
                            } else {
                                "sidebar__item"
                            }
                        };
                        view! {
                            <button
                                class=class
                                data-href=item.href
                                on:click=move |_| {
                                    shell.update(|s| {
                                        s.navigate(id);
                                    });
                                }
                            >
                                <span class="sidebar__icon">{item.icon}</span>
                                <span>{item.name}</span>
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </nav>

            <div class="sidebar__user">
                <span class="avatar">{user.avatar}</span>
                <div class="sidebar__user-meta">
                    <strong>{user.name}</strong>
                    <span>{user.role}</span>
                    <span class="sidebar__company">{user.company}</span>
                </div>
            </div>
        </aside>
    }
}
