//! Quote comparison matrix for one part number at a time.

use leptos::prelude::*;

use super::InsightPanel;
use crate::engine::mock::FixtureScoring;
use crate::fixtures::dashboard;
use crate::state::quotes::{Criterion, QuoteMatrixState, RankBadge};
use crate::util::format::price_try;

fn badge_class(badge: RankBadge) -> &'static str {
    match badge {
        RankBadge::First => "rank rank--gold",
        RankBadge::Second => "rank rank--silver",
        RankBadge::Third => "rank rank--bronze",
    }
}

#[component]
pub fn QuoteMatrixView() -> impl IntoView {
    let matrix = RwSignal::new(QuoteMatrixState::new(dashboard::quotes()));
    let parts = matrix.with_untracked(|m| m.part_numbers().into_iter().map(str::to_owned).collect::<Vec<_>>());

    let rows = move || {
        matrix.with(|m| {
            m.ranked(&FixtureScoring)
                .into_iter()
                .enumerate()
                .map(|(index, row)| {
                    let quote = row.quote;
                    view! {
                        <tr class:table__row--top={index == 0}>
                            <td>{row.badge.map(|b| view! { <span class=badge_class(b)>{b.label()}</span> })}</td>
                            <td><strong>{quote.supplier.clone()}</strong></td>
                            <td>{price_try(quote.price)}</td>
                            <td>{format!("{} gün", quote.lead_time_days)}</td>
                            <td>{quote.capacity.clone()}</td>
                            <td>{quote.quality.clone()}</td>
                            {Criterion::ALL
                                .into_iter()
                                .map(|c| view! { <td class="table__num">{quote.sub_score(c)}</td> })
                                .collect::<Vec<_>>()}
                            <td>
                                <span class=format!("score score--{}", row.band().css_modifier())>{row.score}</span>
                            </td>
                            <td>
                                <button class={if index == 0 { "btn btn--primary" } else { "btn btn--outline" }}>
                                    {if index == 0 { "Seç" } else { "Değerlendir" }}
                                </button>
                            </td>
                        </tr>
                    }
                })
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class="view">
            <header class="view__header">
                <h1>"Teklif Matrisi"</h1>
                <p>"Gelen teklifleri çok kriterli skorlama ile karşılaştırın"</p>
            </header>

            <section class="card">
                <div class="card__toolbar">
                    <span class="field__label">"Parça No"</span>
                    <div class="chip-row">
                        {parts
                            .into_iter()
                            .map(|part| {
                                let label = part.clone();
                                let active = part.clone();
                                view! {
                                    <button
                                        class="chip"
                                        class:chip--active=move || matrix.with(|m| m.selected_part == active)
                                        on:click=move |_| matrix.update(|m| m.select_part(&part))
                                    >
                                        {label}
                                    </button>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </div>
                <div class="weights">
                    {Criterion::ALL
                        .into_iter()
                        .map(|c| {
                            view! {
                                <div class="weights__item">
                                    <span class="weights__value">{format!("%{}", c.weight_percent())}</span>
                                    <span>{c.label()}</span>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </section>

            <div class="split">
                <section class="card split__main">
                    <table class="table">
                        <thead>
                            <tr>
                                <th>"Sıra"</th>
                                <th>"Tedarikçi"</th>
                                <th>"Fiyat"</th>
                                <th>"Teslimat"</th>
                                <th>"Kapasite"</th>
                                <th>"Kalite"</th>
                                {Criterion::ALL.into_iter().map(|c| view! { <th>{c.label()}</th> }).collect::<Vec<_>>()}
                                <th>"Toplam"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>{rows}</tbody>
                    </table>
                </section>
                <InsightPanel title="AI Önerileri" insights=dashboard::quote_insights()/>
            </div>
        </div>
    }
}
