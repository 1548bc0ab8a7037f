//! Click-to-edit table cell for BOM rows.

use leptos::prelude::*;

use crate::state::bom::{BomField, BomState};
use crate::state::notify::NotificationQueue;

/// Shows one field of a BOM row and swaps to a text input while that cell
/// owns the view's editor. Enter or blur saves, Escape cancels.
#[component]
pub fn EditableCell(bom: RwSignal<BomState>, item_id: u32, field: BomField) -> impl IntoView {
    let notices = expect_context::<RwSignal<NotificationQueue>>();

    let is_editing = move || {
        bom.with(|s| s.cell_editor.as_ref().is_some_and(|c| c.item_id == item_id && c.field == field))
    };
    let value = move || bom.with(|s| s.get(item_id).map(|i| i.field(field).to_owned()).unwrap_or_default());
    let draft = move || {
        bom.with(|s| s.cell_editor.as_ref().and_then(|c| c.editor.draft().map(str::to_owned)).unwrap_or_default())
    };

    let commit = move || {
        bom.update(|s| {
            if let Err(e) = s.commit_edit(&notices) {
                log::warn!("bom cell edit rejected: {e}");
            }
        });
    };

    view! {
        <Show
            when=is_editing
            fallback=move || {
                view! {
                    <span
                        class="editable-cell"
                        title="Düzenlemek için tıklayın"
                        on:click=move |_| bom.update(|s| s.start_edit(item_id, field))
                    >
                        {value}
                    </span>
                }
            }
        >
            <input
                class="editable-cell__input"
                type="text"
                aria-label=field.label()
                prop:value=draft
                on:input=move |ev| {
                    let text = event_target_value(&ev);
                    bom.update(|s| s.edit_draft(&text));
                }
                on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                    match ev.key().as_str() {
                        "Enter" => {
                            ev.prevent_default();
                            commit();
                        }
                        "Escape" => bom.update(BomState::cancel_edit),
                        _ => {}
                    }
                }
                on:blur=move |_| {
                    if is_editing() {
                        commit();
                    }
                }
            />
        </Show>
    }
}
