use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <A href="/" attr:class="header__logo">
                "L"<span class="header__accent">"O"</span>"G"<span class="header__accent">"O"</span>
            </A>
            <nav class="header__nav">
                <A href="/home" attr:class="header__link">"HOME"</A>
                <A href="/contact" attr:class="header__link header__link--outlined">"CONTACT"</A>
                <A href="/update" attr:class="header__link">"ADMIN"</A>
            </nav>
        </header>
    }
}
