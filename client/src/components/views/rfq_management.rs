//! RFQ management: stats, create form, project table, templates.

use leptos::prelude::*;
use time::Date;

use crate::fixtures::dashboard;
use crate::state::config::DashboardConfig;
use crate::state::notify::NotificationQueue;
use crate::state::rfq::{RfqProject, RfqState, RfqStatus, default_deadline, parse_item_count};
use crate::util::clock;
use crate::util::format::{date_iso, date_tr, parse_date_iso, percent_tr};

fn status_badge(status: RfqStatus) -> &'static str {
    match status {
        RfqStatus::Draft => "badge badge--muted",
        RfqStatus::Active => "badge badge--info",
        RfqStatus::Completed => "badge badge--success",
    }
}

#[component]
pub fn RfqManagementView() -> impl IntoView {
    let notices = expect_context::<RwSignal<NotificationQueue>>();
    let config = expect_context::<RwSignal<DashboardConfig>>();
    let rfq = RwSignal::new(RfqState::new(dashboard::rfq_projects()));
    let today = clock::today();

    let name = RwSignal::new(String::new());
    let total_items = RwSignal::new(String::new());
    let deadline = RwSignal::new(date_iso(default_deadline(today)));

    let stats = move || {
        let computed = config.with(|c| c.use_computed_aggregates);
        rfq.with(|s| s.stats(computed))
    };

    let on_create = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let items = total_items.with_untracked(|t| parse_item_count(t));
        let due = deadline.with_untracked(|d| parse_date_iso(d)).unwrap_or_else(|| default_deadline(today));
        let created = rfq
            .try_update(|s| name.with_untracked(|n| s.create(n, items, due, today, &notices)))
            .is_some_and(|r| r.is_ok());
        if created {
            name.set(String::new());
            total_items.set(String::new());
            deadline.set(date_iso(default_deadline(today)));
        }
    };

    view! {
        <div class="view">
            <header class="view__header">
                <h1>"RFQ Yönetimi"</h1>
                <p>"Teklif taleplerinizi oluşturun ve takip edin"</p>
            </header>

            <div class="card-grid card-grid--4">
                <article class="card stat">
                    <span class="stat__label">"Toplam RFQ"</span>
                    <span class="stat__value">{move || stats().total}</span>
                </article>
                <article class="card stat">
                    <span class="stat__label">"Aktif"</span>
                    <span class="stat__value">{move || stats().active}</span>
                </article>
                <article class="card stat">
                    <span class="stat__label">"Tamamlanan"</span>
                    <span class="stat__value">{move || stats().completed}</span>
                </article>
                <article class="card stat">
                    <span class="stat__label">"Ort. Tasarruf"</span>
                    <span class="stat__value">{move || percent_tr(Some(stats().average_savings))}</span>
                </article>
            </div>

            <div class="split">
                <div class="split__main">
                    <form class="card rfq-form" on:submit=on_create>
                        <h2 class="card__title">"Yeni RFQ Oluştur"</h2>
                        <div class="rfq-form__grid">
                            <label class="field">
                                <span class="field__label">"Proje Adı"</span>
                                <input
                                    class="input"
                                    type="text"
                                    placeholder="Örn. Q2 Metal Parçalar"
                                    prop:value=move || name.get()
                                    on:input=move |ev| name.set(event_target_value(&ev))
                                />
                            </label>
                            <label class="field">
                                <span class="field__label">"Parça Sayısı"</span>
                                <input
                                    class="input"
                                    type="number"
                                    min="0"
                                    prop:value=move || total_items.get()
                                    on:input=move |ev| total_items.set(event_target_value(&ev))
                                />
                                {move || {
                                    total_items.with(|raw| {
                                        let count = parse_item_count(raw);
                                        (!raw.trim().is_empty() && raw.trim() != count.to_string())
                                            .then(|| view! { <span class="field__hint">{format!("{count} parça olarak kaydedilecek")}</span> })
                                    })
                                }}
                            </label>
                            <label class="field">
                                <span class="field__label">"Son Tarih"</span>
                                <input
                                    class="input"
                                    type="date"
                                    prop:value=move || deadline.get()
                                    on:input=move |ev| deadline.set(event_target_value(&ev))
                                />
                            </label>
                        </div>
                        <button type="submit" class="btn btn--primary">"RFQ Oluştur"</button>
                    </form>

                    <section class="card">
                        <h2 class="card__title">"RFQ Projeleri"</h2>
                        <Show
                            when=move || rfq.with(|s| !s.projects.is_empty())
                            fallback=|| view! { <p class="empty-state">"Henüz RFQ projesi yok."</p> }
                        >
                            <table class="table">
                                <thead>
                                    <tr>
                                        <th>"Proje"</th>
                                        <th>"Durum"</th>
                                        <th>"Parça"</th>
                                        <th>"Teklif"</th>
                                        <th>"İlerleme"</th>
                                        <th>"Son Tarih"</th>
                                        <th>"Tasarruf"</th>
                                        <th>"İşlemler"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    <For
                                        each=move || rfq.get().projects
                                        key=|p| (p.id, p.status)
                                        let:project
                                    >
                                        <RfqRow rfq=rfq project=project today=today/>
                                    </For>
                                </tbody>
                            </table>
                        </Show>
                    </section>
                </div>

                <aside class="card templates">
                    <h2 class="card__title">"RFQ Şablonları"</h2>
                    {dashboard::rfq_templates()
                        .into_iter()
                        .map(|template| {
                            view! {
                                <div class="templates__item">
                                    <strong>{template.name}</strong>
                                    <p>{template.description}</p>
                                    <button
                                        class="btn btn--outline"
                                        on:click=move |_| name.set(template.name.to_owned())
                                    >
                                        "Kullan"
                                    </button>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </aside>
            </div>
        </div>
    }
}

#[component]
fn RfqRow(rfq: RwSignal<RfqState>, project: RfqProject, today: Date) -> impl IntoView {
    let notices = expect_context::<RwSignal<NotificationQueue>>();
    let id = project.id;
    let status = project.status;
    let progress = project.progress_percent();
    let overdue = project.is_overdue(today);

    let on_advance = move |_| {
        rfq.update(|s| {
            let result = match status {
                RfqStatus::Draft => s.send(id, &notices),
                _ => s.complete(id, &notices),
            };
            if let Err(e) = result {
                log::warn!("rfq action rejected: {e}");
            }
        });
    };

    view! {
        <tr class:table__row--alert=overdue>
            <td>{project.project_name}</td>
            <td><span class=status_badge(status)>{status.label()}</span></td>
            <td>{project.total_items}</td>
            <td>{format!("{}/{}", project.quotes_received, project.suppliers_contacted)}</td>
            <td>
                <div class="progress" title=format!("%{progress}")>
                    <div class="progress__bar" style=format!("width: {progress}%")></div>
                </div>
            </td>
            <td>
                {date_tr(project.deadline)}
                {overdue.then(|| view! { <span class="badge badge--danger">"Gecikti"</span> })}
            </td>
            <td>{percent_tr(project.estimated_savings)}</td>
            <td class="table__actions">
                {match status {
                    RfqStatus::Draft => Some(view! { <button class="btn btn--ghost btn--accent" on:click=on_advance>"Gönder"</button> }),
                    RfqStatus::Active => Some(view! { <button class="btn btn--ghost btn--accent" on:click=on_advance>"Tamamla"</button> }),
                    RfqStatus::Completed => None,
                }}
                <button
                    class="btn btn--ghost btn--danger"
                    title="Sil"
                    on:click=move |_| {
                        rfq.update(|s| {
                            s.delete(id);
                        });
                    }
                >
                    "🗑"
                </button>
            </td>
        </tr>
    }
}
