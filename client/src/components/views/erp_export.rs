//! ERP export: format choice, field selection, simulated export, history.

use leptos::prelude::*;

use crate::engine::mock::MockExportEncoder;
use crate::fixtures::dashboard;
use crate::state::config::DashboardConfig;
use crate::state::erp::{ErpFormat, ErpState, ExportField};
use crate::state::notify::NotificationQueue;
use crate::util::format::{datetime_tr, size_mb};
use crate::util::{clock, dom};

const ENCODER_SALT: u64 = 0xe4b0;

#[component]
pub fn ErpExportView() -> impl IntoView {
    let notices = expect_context::<RwSignal<NotificationQueue>>();
    let config = expect_context::<RwSignal<DashboardConfig>>();
    let erp = RwSignal::new(ErpState::new(dashboard::erp_exports()));
    let encoder = StoredValue::new(MockExportEncoder::seeded(clock::seed(ENCODER_SALT)));

    let exporting = move || erp.with(ErpState::is_exporting);

    let on_export = move |_| {
        let started = erp.try_update(|s| s.begin_export(&notices).is_ok()).unwrap_or(false);
        if !started {
            return;
        }
        let delay = config.with_untracked(|c| c.export_delay_ms);
        dom::after(delay, move || {
            encoder.try_update_value(|enc| {
                erp.try_update(|s| {
                    s.finish_export(enc, clock::now(), &notices);
                });
            });
        });
    };

    view! {
        <div class="view">
            <header class="view__header">
                <h1>"ERP Export"</h1>
                <p>"Verilerinizi ERP sisteminize aktarın"</p>
            </header>

            <section class="card">
                <h2 class="card__title">"ERP Formatı Seçin"</h2>
                <div class="card-grid card-grid--4">
                    {ErpFormat::ALL
                        .into_iter()
                        .map(|format| {
                            view! {
                                <button
                                    class="format-card"
                                    class:format-card--active=move || erp.with(|s| s.selected_format == Some(format))
                                    on:click=move |_| erp.update(|s| s.select_format(format))
                                >
                                    <span class="format-card__icon">{format.icon()}</span>
                                    <strong>{format.label()}</strong>
                                    <span class="format-card__description">{format.description()}</span>
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </section>

            <section class="card">
                <h2 class="card__title">"Export Alanları"</h2>
                <div class="checkbox-grid">
                    {ExportField::ALL
                        .into_iter()
                        .map(|field| {
                            view! {
                                <label class="checkbox">
                                    <input
                                        type="checkbox"
                                        prop:checked=move || erp.with(|s| s.is_field_checked(field))
                                        prop:disabled=field.required()
                                        on:change=move |_| erp.update(|s| s.toggle_field(field))
                                    />
                                    <span>{field.label()}</span>
                                    {field.required().then(|| view! { <span class="checkbox__required">"Zorunlu"</span> })}
                                </label>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
                <button class="btn btn--primary" prop:disabled=exporting on:click=on_export>
                    {move || if exporting() { "Export Ediliyor..." } else { "Export Başlat" }}
                </button>
                <Show when=exporting>
                    <p class="export__progress">
                        {move || {
                            erp.with(|s| {
                                s.pending
                                    .as_ref()
                                    .map(|r| format!("{} formatında {} alan hazırlanıyor...", r.format.code(), r.fields.len()))
                                    .unwrap_or_default()
                            })
                        }}
                    </p>
                </Show>
            </section>

            <section class="card">
                <h2 class="card__title">"Export Geçmişi"</h2>
                <table class="table">
                    <thead>
                        <tr>
                            <th>"Ad"</th>
                            <th>"Format"</th>
                            <th>"Kayıt"</th>
                            <th>"Boyut"</th>
                            <th>"Tarih"</th>
                            <th>"Durum"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        <For each=move || erp.get().exports key=|e| e.id let:export>
                            <tr>
                                <td>{export.name.clone()}</td>
                                <td>{export.format.code()}</td>
                                <td>{export.records}</td>
                                <td>{size_mb(export.size_mb)}</td>
                                <td>{datetime_tr(export.created_at)}</td>
                                <td>
                                    <span class=format!("badge badge--{}", export.status.css_modifier())>
                                        {export.status.label()}
                                    </span>
                                </td>
                                <td>
                                    <button class="btn btn--ghost" title="İndir" prop:disabled={!export.downloadable()}>
                                        "⬇"
                                    </button>
                                </td>
                            </tr>
                        </For>
                    </tbody>
                </table>
            </section>
        </div>
    }
}
