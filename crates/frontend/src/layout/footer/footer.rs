use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <p>"© 2024 World Vision Lanka. All rights reserved."</p>
            <p>
                <a href="https://example.com" class="footer__link">"Privacy Policy"</a>
                " | "
                <a href="https://example.com" class="footer__link">"Terms of Service"</a>
            </p>
        </footer>
    }
}
