use crate::layout::Shell;
use crate::system::pages::admin::AdminPage;
use crate::system::pages::home::HomePage;
use crate::system::pages::landing::LandingPage;
use crate::usecases::u501_send_contact_message::ContactForm;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <p class="not-found">"Page not found."</p> }>
                    <Route path=path!("/") view=LandingPage />
                    <Route path=path!("/home") view=HomePage />
                    <Route path=path!("/contact") view=ContactForm />
                    <Route path=path!("/update") view=AdminPage />
                </Routes>
            </Shell>
        </Router>
    }
}
