//! Overview: KPI cards, quick actions, and recent activity.

use leptos::prelude::*;

use crate::fixtures::dashboard;
use crate::state::config::DashboardConfig;
use crate::state::nav::ShellState;
use crate::state::overview::overview_kpis;

#[component]
pub fn OverviewView(shell: RwSignal<ShellState>) -> impl IntoView {
    let config = expect_context::<RwSignal<DashboardConfig>>();
    let kpis = Memo::new(move |_| {
        config.with(|c| overview_kpis(&dashboard::kpis(), &dashboard::rfq_projects(), c.use_computed_aggregates))
    });

    view! {
        <div class="view">
            <header class="view__header">
                <h1>"Dashboard"</h1>
                <p>"Tedarik süreçlerinizi yönetin ve analiz edin"</p>
            </header>

            <div class="card-grid card-grid--4">
                {move || {
                    kpis.get()
                        .into_iter()
                        .map(|kpi| {
                            view! {
                                <article class="card kpi">
                                    <div class="kpi__head">
                                        <span class="kpi__title">{kpi.title}</span>
                                        <span class="kpi__icon">{kpi.icon}</span>
                                    </div>
                                    <div class="kpi__value">{kpi.value}</div>
                                    <div class="kpi__foot">
                                        <span class=format!("kpi__change kpi__change--{}", kpi.change_kind.css_modifier())>
                                            {kpi.change}
                                        </span>
                                        <span class="kpi__description">{kpi.description}</span>
                                    </div>
                                </article>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>

            <section class="card">
                <h2 class="card__title">"Hızlı İşlemler"</h2>
                <div class="card-grid card-grid--4">
                    {dashboard::quick_actions()
                        .into_iter()
                        .map(|action| {
                            let target = action.target.id();
                            view! {
                                <button
                                    class="quick-action"
                                    on:click=move |_| {
                                        shell.update(|s| {
                                            s.navigate(target);
                                        });
                                    }
                                >
                                    <span class="quick-action__icon">{action.icon}</span>
                                    <strong>{action.title}</strong>
                                    <span>{action.description}</span>
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </section>

            <section class="card">
                <h2 class="card__title">"Son Aktiviteler"</h2>
                <ul class="activity-list">
                    {dashboard::activities()
                        .into_iter()
                        .map(|a| {
                            view! {
                                <li class=format!("activity activity--{}", a.tone.css_modifier())>
                                    <span class="activity__icon">{a.kind.icon()}</span>
                                    <div class="activity__body">
                                        <p class="activity__title">{a.title}</p>
                                        <p class="activity__description">{a.description}</p>
                                    </div>
                                    <span class="activity__time">{a.timestamp}</span>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()}
                </ul>
            </section>
        </div>
    }
}
