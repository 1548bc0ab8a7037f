//! BOM/CAD upload view: simulated upload, part table, matching.

use leptos::prelude::*;

use crate::components::editable_cell::EditableCell;
use crate::engine::mock::{MockFileParser, MockMatchEngine};
use crate::fixtures::dashboard;
use crate::state::bom::{BomField, BomState, BomStatus, StatusFilter, accept_attribute};
use crate::state::config::DashboardConfig;
use crate::state::notify::NotificationQueue;
use crate::util::{clock, dom};

const PARSER_SALT: u64 = 0x0b0d;
const MATCHER_SALT: u64 = 0x3a7c;

#[component]
pub fn BomUploadView() -> impl IntoView {
    let notices = expect_context::<RwSignal<NotificationQueue>>();
    let config = expect_context::<RwSignal<DashboardConfig>>();
    let bom = RwSignal::new(BomState::new(dashboard::bom_items()));
    let parser = StoredValue::new(MockFileParser::seeded(clock::seed(PARSER_SALT)));
    let matcher = StoredValue::new(MockMatchEngine::seeded(clock::seed(MATCHER_SALT)));

    let on_file = move |ev: leptos::ev::Event| {
        let Some(file) = dom::picked_file(&ev) else {
            return;
        };
        let started = bom.try_update(|s| s.begin_upload(file, &notices).is_ok()).unwrap_or(false);
        if !started {
            return;
        }
        let delay = config.with_untracked(|c| c.upload_delay_ms);
        dom::after(delay, move || {
            parser.try_update_value(|p| {
                bom.try_update(|s| {
                    s.finish_upload(p, &notices);
                });
            });
        });
    };

    let on_bulk_match = move |_| {
        matcher.update_value(|m| {
            bom.update(|s| {
                s.bulk_match(m, &notices);
            });
        });
    };

    let rows = move || bom.with(|s| s.visible().iter().map(|i| i.id).collect::<Vec<_>>());
    let total = move || bom.with(|s| s.items.len());
    let uploading = move || bom.with(BomState::is_uploading);
    let pending_name = move || bom.with(|s| s.pending_upload.as_ref().map(|f| f.name.clone()).unwrap_or_default());

    view! {
        <div class="view">
            <header class="view__header">
                <h1>"BOM/CAD Yükleme"</h1>
                <p>"Parça listelerinizi yükleyin ve tedarikçi eşleştirmesi yapın"</p>
            </header>

            <section class="card">
                <h2 class="card__title">"Dosya Yükleme"</h2>
                <div class="dropzone">
                    <span class="dropzone__icon">"⇧"</span>
                    <p class="dropzone__title">"BOM/CAD dosyanızı seçin"</p>
                    <p class="dropzone__hint">"Desteklenen formatlar: CSV, PDF, XLSX, XLS (max 10MB)"</p>
                    <label class="btn btn--outline" class:btn--disabled=uploading>
                        {move || if uploading() { "Yükleniyor..." } else { "Dosya Seç" }}
                        <input
                            class="visually-hidden"
                            type="file"
                            accept=accept_attribute()
                            prop:disabled=uploading
                            on:change=on_file
                        />
                    </label>
                    <Show when=uploading>
                        <p class="dropzone__progress">{move || format!("{} işleniyor...", pending_name())}</p>
                    </Show>
                </div>
            </section>

            <section class="card">
                <div class="card__toolbar">
                    <h2 class="card__title">{move || format!("Yüklenen Parçalar ({})", total())}</h2>
                    <input
                        class="input"
                        type="search"
                        placeholder="Parça no veya açıklama ara..."
                        prop:value=move || bom.with(|s| s.search.clone())
                        on:input=move |ev| {
                            let term = event_target_value(&ev);
                            bom.update(|s| s.search = term);
                        }
                    />
                    <div class="chip-row">
                        {StatusFilter::ALL
                            .into_iter()
                            .map(|filter| {
                                view! {
                                    <button
                                        class="chip"
                                        class:chip--active=move || bom.with(|s| s.status_filter == filter)
                                        on:click=move |_| bom.update(|s| s.status_filter = filter)
                                    >
                                        {filter.label()}
                                    </button>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                    <button class="btn btn--primary" on:click=on_bulk_match>"Toplu Eşleştir"</button>
                    <button class="btn btn--outline" title="Yakında">"Şablon İndir"</button>
                </div>

                <Show
                    when=move || !rows().is_empty()
                    fallback=|| view! { <p class="empty-state">"Aramanızla eşleşen parça bulunamadı."</p> }
                >
                    <table class="table">
                        <thead>
                            <tr>
                                <th>{BomField::PartNumber.label()}</th>
                                <th>{BomField::Description.label()}</th>
                                <th>{BomField::Quantity.label()}</th>
                                <th>{BomField::Unit.label()}</th>
                                <th>{BomField::Category.label()}</th>
                                <th>"Durum"</th>
                                <th>"Tedarikçi"</th>
                                <th>"İşlemler"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For each=rows key=|id| *id let:id>
                                <BomRow bom=bom item_id=id matcher=matcher/>
                            </For>
                        </tbody>
                    </table>
                </Show>
            </section>
        </div>
    }
}

#[component]
fn BomRow(bom: RwSignal<BomState>, item_id: u32, matcher: StoredValue<MockMatchEngine>) -> impl IntoView {
    let notices = expect_context::<RwSignal<NotificationQueue>>();

    let status = move || bom.with(|s| s.get(item_id).map(|i| i.status).unwrap_or_default());
    let suppliers = move || {
        let count = bom.with(|s| s.get(item_id).map_or(0, |i| i.suppliers));
        if count > 0 { format!("{count} tedarikçi") } else { "Henüz yok".to_owned() }
    };

    let on_match = move |_| {
        matcher.update_value(|m| {
            bom.update(|s| {
                s.match_supplier(item_id, m, &notices);
            });
        });
    };

    view! {
        <tr>
            {BomField::ALL
                .into_iter()
                .map(|field| view! { <td><EditableCell bom=bom item_id=item_id field=field/></td> })
                .collect::<Vec<_>>()}
            <td>
                <span class=move || {
                    match status() {
                        BomStatus::Mapped => "badge badge--success",
                        BomStatus::Pending => "badge badge--warning",
                    }
                }>{move || status().label()}</span>
            </td>
            <td>{suppliers}</td>
            <td class="table__actions">
                <Show when=move || status() == BomStatus::Pending>
                    <button class="btn btn--ghost btn--accent" on:click=on_match>"Eşleştir"</button>
                </Show>
                <button
                    class="btn btn--ghost btn--danger"
                    title="Sil"
                    on:click=move |_| {
                        bom.update(|s| {
                            s.delete_item(item_id);
                        });
                    }
                >
                    "🗑"
                </button>
            </td>
        </tr>
    }
}
