pub mod footer;
pub mod header;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

/// Общая обёртка страниц: шапка скрыта на стартовой странице `/`
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    let location = use_location();
    let show_header = move || location.pathname.get() != "/";

    view! {
        <div class="app-layout">
            <Show when=show_header>
                <header::Header />
            </Show>
            <main class="app-main">{children()}</main>
        </div>
    }
}
