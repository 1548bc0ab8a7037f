//! Supplier discovery: search, category chips, sorting, and bulk RFQ send.

use leptos::prelude::*;

use super::InsightPanel;
use crate::fixtures::dashboard;
use crate::state::discovery::{ALL_CATEGORIES, CATEGORIES, DiscoveryState, Supplier, SupplierSort};
use crate::state::notify::NotificationQueue;

fn category_label(category: &'static str) -> &'static str {
    if category == ALL_CATEGORIES { "Tümü" } else { category }
}

fn sort_value(sort: SupplierSort) -> &'static str {
    match sort {
        SupplierSort::MatchScore => "match",
        SupplierSort::Rating => "rating",
        SupplierSort::ResponseTime => "response",
        SupplierSort::Name => "name",
    }
}

#[component]
pub fn SupplierDiscoveryView() -> impl IntoView {
    let notices = expect_context::<RwSignal<NotificationQueue>>();
    let discovery = RwSignal::new(DiscoveryState::new(dashboard::suppliers()));

    let rows = move || discovery.with(|s| s.visible().into_iter().cloned().collect::<Vec<_>>());
    let selected_count = move || discovery.with(|s| s.selected.len());

    let on_bulk_send = move |_| {
        discovery.update(|s| {
            if let Err(e) = s.bulk_send_rfq(&notices) {
                log::debug!("bulk rfq refused: {e}");
            }
        });
    };

    view! {
        <div class="view">
            <header class="view__header">
                <h1>"Tedarikçi Keşfi"</h1>
                <p>"Parçalarınız için en uygun tedarikçileri bulun"</p>
            </header>

            <section class="card">
                <div class="card__toolbar">
                    <input
                        class="input"
                        type="search"
                        placeholder="Tedarikçi, lokasyon veya uzmanlık ara..."
                        prop:value=move || discovery.with(|s| s.search.clone())
                        on:input=move |ev| {
                            let term = event_target_value(&ev);
                            discovery.update(|s| s.search(&term));
                        }
                    />
                    <select
                        class="input"
                        aria-label="Sıralama"
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            if let Some(sort) = SupplierSort::ALL.into_iter().find(|s| sort_value(*s) == value) {
                                discovery.update(|s| s.sort_by(sort));
                            }
                        }
                    >
                        {SupplierSort::ALL
                            .into_iter()
                            .map(|sort| {
                                view! {
                                    <option
                                        value=sort_value(sort)
                                        selected=move || discovery.with(|s| s.sort == sort)
                                    >
                                        {sort.label()}
                                    </option>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </select>
                    <button class="btn btn--primary" on:click=on_bulk_send>
                        {move || format!("Toplu RFQ Gönder ({})", selected_count())}
                    </button>
                </div>
                <div class="chip-row">
                    {CATEGORIES
                        .into_iter()
                        .map(|category| {
                            view! {
                                <button
                                    class="chip"
                                    class:chip--active=move || discovery.with(|s| s.category == category)
                                    on:click=move |_| discovery.update(|s| s.filter_by_category(category))
                                >
                                    {category_label(category)}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </section>

            <div class="split">
                <div class="split__main">
                    <Show
                        when=move || !rows().is_empty()
                        fallback=|| view! { <p class="empty-state">"Kriterlere uyan tedarikçi bulunamadı."</p> }
                    >
                        <div class="card-grid card-grid--2">
                            <For each=rows key=|s| s.id let:supplier>
                                <SupplierCard discovery=discovery supplier=supplier/>
                            </For>
                        </div>
                    </Show>
                </div>
                <InsightPanel title="AI Önerileri" insights=dashboard::supplier_insights()/>
            </div>
        </div>
    }
}

#[component]
fn SupplierCard(discovery: RwSignal<DiscoveryState>, supplier: Supplier) -> impl IntoView {
    let notices = expect_context::<RwSignal<NotificationQueue>>();
    let id = supplier.id;
    let stars = supplier.full_stars();
    let band = supplier.score_band();

    let favorite = move || discovery.with(|s| s.is_favorite(id));
    let contacted = move || discovery.with(|s| s.is_contacted(id));
    let selected = move || discovery.with(|s| s.is_selected(id));

    view! {
        <article class="card supplier" class:supplier--selected=selected>
            <div class="supplier__head">
                <label class="supplier__select">
                    <input
                        type="checkbox"
                        prop:checked=selected
                        on:change=move |_| {
                            discovery.update(|s| {
                                s.toggle_selected(id);
                            });
                        }
                    />
                    <h3>{supplier.name.clone()}</h3>
                </label>
                <button
                    class="btn btn--ghost"
                    class:supplier__favorite--on=favorite
                    title="Favori"
                    on:click=move |_| {
                        discovery.update(|s| {
                            s.toggle_favorite(id);
                        });
                    }
                >
                    {move || if favorite() { "♥" } else { "♡" }}
                </button>
            </div>
            <p class="supplier__location">"📍 "{supplier.location.clone()}</p>
            <div class="supplier__rating">
                <span class="stars">
                    {(0..5)
                        .map(|i| view! { <span class:stars__on={i < stars}>"★"</span> })
                        .collect::<Vec<_>>()}
                </span>
                <span>{format!("{:.1}", supplier.rating)}</span>
                <span class=format!("score score--{}", band.css_modifier())>
                    {format!("%{} eşleşme", supplier.match_score)}
                </span>
            </div>
            <div class="tag-row">
                {supplier.specialties.iter().map(|s| view! { <span class="tag">{s.clone()}</span> }).collect::<Vec<_>>()}
            </div>
            <div class="tag-row">
                {supplier
                    .certifications
                    .iter()
                    .map(|c| view! { <span class="tag tag--outline">{c.clone()}</span> })
                    .collect::<Vec<_>>()}
            </div>
            <dl class="supplier__facts">
                <dt>"Yanıt süresi"</dt>
                <dd>{format!("{} saat", supplier.response_time_hours)}</dd>
                <dt>"İletişim"</dt>
                <dd>{supplier.contact_person.clone()}</dd>
            </dl>
            <button
                class="btn btn--outline btn--block"
                prop:disabled=contacted
                on:click=move |_| discovery.update(|s| s.mark_contacted(id, &notices))
            >
                {move || if contacted() { "İletişime Geçildi" } else { "İletişime Geç" }}
            </button>
        </article>
    }
}
