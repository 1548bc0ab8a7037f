//! Benefit metrics and the ROI band.

use leptos::prelude::*;

use crate::fixtures::landing::{BENEFITS, ROI_STATS};

#[component]
pub fn Benefits() -> impl IntoView {
    view! {
        <section id="benefits" class="section section--muted">
            <h2 class="section__title">"Avantajlar"</h2>
            <div class="card-grid card-grid--4">
                {BENEFITS
                    .iter()
                    .map(|b| {
                        view! {
                            <article class="card benefit-card">
                                <span class="benefit-card__icon">{b.icon}</span>
                                <div class="benefit-card__value">{b.value}</div>
                                <h3>{b.title}</h3>
                                <p>{b.description}</p>
                            </article>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
            <div class="roi">
                <h3 class="roi__title">"Yatırım Getirisi (ROI)"</h3>
                <div class="roi__stats">
                    {ROI_STATS
                        .iter()
                        .map(|s| {
                            view! {
                                <div class="stat stat--inverse">
                                    <div class="stat__value">{s.value}</div>
                                    <div class="stat__label">{s.label}</div>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
