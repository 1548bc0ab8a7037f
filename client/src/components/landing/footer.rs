//! Page footer with company blurb and link groups.

use leptos::prelude::*;

use crate::fixtures::landing::{BRAND, BRAND_TAGLINE, CONTACT_CITY, CONTACT_EMAIL, FOOTER_GROUPS};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer id="contact" class="footer">
            <div class="footer__company">
                <div class="footer__brand">
                    <span class="brand-mark">"T"</span>
                    <span>{BRAND}</span>
                </div>
                <p>{BRAND_TAGLINE}</p>
                <p>{CONTACT_EMAIL}</p>
                <p>{CONTACT_CITY}</p>
            </div>
            {FOOTER_GROUPS
                .iter()
                .map(|group| {
                    view! {
                        <div class="footer__group">
                            <h3>{group.title}</h3>
                            <ul>
                                {group
                                    .links
                                    .iter()
                                    .map(|l| view! { <li><a href=l.href>{l.name}</a></li> })
                                    .collect::<Vec<_>>()}
                            </ul>
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
        </footer>
    }
}
