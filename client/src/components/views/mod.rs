//! The six dashboard views swapped in by the shell.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each view builds its own state signal from fresh fixtures when mounted,
//! so edits live only as long as the view is on screen.

pub mod bom_upload;
pub mod erp_export;
pub mod overview;
pub mod quote_matrix;
pub mod rfq_management;
pub mod supplier_discovery;

use leptos::prelude::*;

use crate::state::overview::Insight;

/// Side panel of advisory cards. Action buttons are inert.
#[component]
fn InsightPanel(title: &'static str, insights: Vec<Insight>) -> impl IntoView {
    view! {
        <aside class="card insights">
            <h2 class="card__title">{title}</h2>
            {insights
                .into_iter()
                .map(|insight| {
                    view! {
                        <div class="insights__item">
                            <strong>{insight.title}</strong>
                            <p>{insight.body}</p>
                            {insight.action.map(|label| view! { <button class="btn btn--ghost btn--accent">{label}</button> })}
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
        </aside>
    }
}
