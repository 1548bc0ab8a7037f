//! Toast overlay backed by the shared notification queue.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` provides one `RwSignal<NotificationQueue>`; views publish into it
//! through `NoticeSink`. Every publish schedules an expiry sweep, and a sweep
//! that finds live entries schedules the next one, so toasts leave on their
//! own after the queue's TTL even when a timer fires early.

use leptos::prelude::*;

use crate::state::notify::{Notice, NoticeSink, NotificationQueue};
use crate::util::{clock, dom};

impl NoticeSink for RwSignal<NotificationQueue> {
    fn publish(&self, notice: Notice) {
        log::debug!("notice [{}] {}", notice.level.css_modifier(), notice.title);
        let queue = *self;
        let now = clock::now_ms();
        let delay = queue.try_update(|q| {
            q.push(notice, now);
            q.next_sweep_delay_ms(now)
        });
        if let Some(delay) = delay.flatten() {
            schedule_sweep(queue, delay);
        }
    }
}

fn schedule_sweep(queue: RwSignal<NotificationQueue>, delay_ms: u32) {
    dom::after(delay_ms, move || {
        let next = queue.try_update(|q| {
            let now = clock::now_ms();
            q.expire(now);
            q.next_sweep_delay_ms(now)
        });
        if let Some(delay) = next.flatten() {
            schedule_sweep(queue, delay);
        }
    });
}

/// Fixed-position stack of live notifications.
#[component]
pub fn ToastHost() -> impl IntoView {
    let notices = expect_context::<RwSignal<NotificationQueue>>();

    view! {
        <div class="toast-host" role="status" aria-live="polite">
            <For
                each=move || { notices.with(|q| q.iter().cloned().collect::<Vec<_>>()) }
                key=|n| n.id
                children=move |n| {
                    let id = n.id;
                    view! {
                        <div class=format!("toast toast--{}", n.notice.level.css_modifier())>
                            <div class="toast__body">
                                <strong class="toast__title">{n.notice.title}</strong>
                                <p class="toast__description">{n.notice.description}</p>
                            </div>
                            <button
                                class="toast__close"
                                title="Kapat"
                                on:click=move |_| {
                                    notices.update(|q| {
                                        q.dismiss(id);
                                    });
                                }
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
