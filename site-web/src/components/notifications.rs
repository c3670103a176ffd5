//! Notification host component
//!
//! Renders the transient notification stack in the top-right corner. The
//! timing lives in [`crate::state::notify`]; this component only mirrors the
//! queue into the DOM.

use leptos::prelude::*;

use crate::state::notify::use_notify_context;

#[component]
pub fn Notifications() -> impl IntoView {
    let notify = use_notify_context();

    view! {
        <div class="notifications">
            {move || {
                notify
                    .queue
                    .get()
                    .items()
                    .iter()
                    .map(|n| {
                        let class = format!(
                            "notification {}{}",
                            n.severity.css_class(),
                            if n.fading { " fading" } else { "" },
                        );
                        view! {
                            <div class=class>{n.message.clone()}</div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
