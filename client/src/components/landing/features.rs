//! Feature grid.

use leptos::prelude::*;

use crate::fixtures::landing::FEATURES;

#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section id="features" class="section">
            <h2 class="section__title">"Özellikler"</h2>
            <p class="section__lead">"Satın alma sürecinin her adımı için tek platform"</p>
            <div class="card-grid card-grid--4">
                {FEATURES
                    .iter()
                    .map(|f| {
                        view! {
                            <article class="card feature-card">
                                <span class="feature-card__icon">{f.icon}</span>
                                <h3>{f.title}</h3>
                                <p>{f.description}</p>
                            </article>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}
