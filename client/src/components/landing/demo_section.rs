//! Target audience cards and the demo-request form.
//!
//! The section is always present as the `#demo` scroll target. Its body is
//! one of three things: a call to action, the form, or the thank-you panel
//! after a submit.

use leptos::prelude::*;

use crate::fixtures::landing::{AUDIENCES, DEMO_PROMISES, DEMO_TEXT_FIELDS, HERO};
use crate::state::landing::{DemoField, DemoRequestState, EmployeeRange};
use crate::state::notify::NotificationQueue;
use crate::util::dom;

pub const DEMO_ANCHOR: &str = "demo";

/// Reveal the form and bring it on screen.
pub fn open_demo(demo: RwSignal<DemoRequestState>) {
    demo.update(DemoRequestState::request_demo);
    dom::scroll_to(DEMO_ANCHOR);
}

#[component]
pub fn DemoSection() -> impl IntoView {
    let demo = expect_context::<RwSignal<DemoRequestState>>();
    // Typing must not rebuild the form, so only the body choice is tracked.
    let body = Memo::new(move |_| demo.with(|s| (s.is_form_shown(), s.show_thank_you())));

    view! {
        <section id=DEMO_ANCHOR class="section demo">
            <h2 class="section__title">"Kimler İçin?"</h2>
            <div class="card-grid card-grid--3">
                {AUDIENCES
                    .iter()
                    .map(|a| {
                        view! {
                            <article class="card audience-card">
                                <span class="audience-card__icon">{a.icon}</span>
                                <h3>{a.title}</h3>
                                <p>{a.description}</p>
                            </article>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>

            {move || match body.get() {
                (true, _) => view! { <DemoForm/> }.into_any(),
                (false, true) => view! { <ThankYou/> }.into_any(),
                (false, false) => {
                    view! {
                        <div class="demo__cta">
                            <button class="btn btn--primary btn--large" on:click=move |_| open_demo(demo)>
                                {HERO.cta}
                            </button>
                        </div>
                    }
                        .into_any()
                }
            }}
        </section>
    }
}

#[component]
fn DemoForm() -> impl IntoView {
    let demo = expect_context::<RwSignal<DemoRequestState>>();
    let notices = expect_context::<RwSignal<NotificationQueue>>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        demo.update(|s| {
            s.submit(&notices);
        });
    };

    view! {
        <form class="card demo-form" on:submit=on_submit>
            <h3 class="demo-form__title">"Demo Formu"</h3>
            <div class="demo-form__grid">
                {DEMO_TEXT_FIELDS
                    .iter()
                    .map(|f| {
                        let field = f.field;
                        view! {
                            <label class="field" for=f.id>
                                <span class="field__label">{f.label}" *"</span>
                                <input
                                    id=f.id
                                    name=f.id
                                    type=f.input_type
                                    required=true
                                    prop:value=move || demo.with(|s| s.form.value(field))
                                    on:input=move |ev| {
                                        let text = event_target_value(&ev);
                                        demo.update(|s| s.set_field(field, &text));
                                    }
                                />
                            </label>
                        }
                    })
                    .collect::<Vec<_>>()}
                <label class="field" for="employeeCount">
                    <span class="field__label">"Çalışan Sayısı *"</span>
                    <select
                        id="employeeCount"
                        name="employeeCount"
                        required=true
                        prop:value=move || demo.with(|s| s.form.value(DemoField::EmployeeCount))
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            demo.update(|s| s.set_field(DemoField::EmployeeCount, &value));
                        }
                    >
                        <option value="">"Seçiniz"</option>
                        {EmployeeRange::ALL
                            .into_iter()
                            .map(|r| view! { <option value=r.value()>{r.label()}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
            </div>
            <button type="submit" class="btn btn--primary btn--block">"Demo Talebini Gönder"</button>
            <div class="demo-form__promises">
                {DEMO_PROMISES
                    .iter()
                    .map(|p| {
                        view! {
                            <div>
                                <div class="demo-form__promise-value">{p.value}</div>
                                <div>{p.label}</div>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </form>
    }
}

#[component]
fn ThankYou() -> impl IntoView {
    view! {
        <div class="card thank-you">
            <span class="thank-you__icon">"✔"</span>
            <h3>"Demo Talebiniz Alındı!"</h3>
            <p>"Ekibimiz 24 saat içinde sizinle iletişime geçerek demo randevusu planlayacak."</p>
        </div>
    }
}
