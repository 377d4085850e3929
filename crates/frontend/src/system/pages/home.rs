use crate::domain::a001_project_record::ui::explorer::ProjectExplorer;
use crate::domain::a002_gallery_image::ui::gallery::PhotoGallery;
use crate::layout::footer::Footer;
use crate::usecases::u501_send_contact_message::ContactForm;
use contracts::domain::a001_project_record::ProjectCategory;
use leptos::prelude::*;

/// Страница `/home`: баннер, вкладки категорий, галерея, контакты
#[component]
pub fn HomePage() -> impl IntoView {
    // None: вкладка не выбрана, показываются карточки категорий
    let active = RwSignal::new(Option::<ProjectCategory>::None);
    let category = Signal::derive(move || active.get().unwrap_or_default());

    let tabs = ProjectCategory::ALL
        .into_iter()
        .map(|c| {
            view! {
                <button
                    class=move || if active.get() == Some(c) { "home__tab home__tab--active" } else { "home__tab" }
                    on:click=move |_| active.set(Some(c))
                >
                    {c.label()}
                </button>
            }
        })
        .collect_view();

    let overview = || {
        view! {
            <div class="home__overview">
                {ProjectCategory::ALL
                    .into_iter()
                    .map(|c| view! {
                        <div class="home__overview-card">
                            <h2>{format!("{} - {}", c.label(), c.title())}</h2>
                            <p>{c.summary()}</p>
                        </div>
                    })
                    .collect_view()}
            </div>
        }
    };

    view! {
        <div class="home">
            <div class="home__banner">
                <div class="home__banner-text">
                    <div class="home__banner-title">"World Vision Lanka"</div>
                    <div class="home__banner-subtitle">"Rideegama Area Programme"</div>
                </div>
            </div>

            <div class="home__tabs">{tabs}</div>

            <Show when=move || active.get().is_some() fallback=overview>
                <ProjectExplorer category=category />
            </Show>

            <PhotoGallery />

            <ContactForm />

            <Footer />
        </div>
    }
}
