//! Toast Stack Component
//!
//! Renders transient notices; each one can be dismissed by hand and goes
//! away on its own after a few seconds.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::notify::dismiss_notice;
use crate::store::{use_app_store, AppStateStoreFields};

const AUTO_DISMISS_MS: u32 = 4000;

#[component]
pub fn ToastStack() -> impl IntoView {
    let store = use_app_store();

    let notices = Memo::new(move |_| store.notices().get());

    view! {
        <div class="toast-stack">
            <For
                each=move || notices.get()
                key=|notice| notice.id
                children=move |notice| {
                    let id = notice.id;
                    // One timer per notice; dismissal of an already-gone id
                    // is a no-op
                    spawn_local(async move {
                        TimeoutFuture::new(AUTO_DISMISS_MS).await;
                        dismiss_notice(&store, id);
                    });
                    view! {
                        <div class="toast">
                            <span class="toast-message">{notice.message.clone()}</span>
                            <button
                                class="toast-dismiss"
                                on:click=move |_| dismiss_notice(&store, id)
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
