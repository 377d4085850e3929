use super::state::Lightbox;
use crate::domain::a002_gallery_image::api;
use crate::shared::config::AppConfig;
use crate::shared::icons::icon;
use crate::shared::state::remote_list::RemoteList;
use contracts::domain::a002_gallery_image::GalleryImage;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn PhotoGallery() -> impl IntoView {
    let config = use_context::<AppConfig>().expect("AppConfig context not found");
    let list = RemoteList::<(), GalleryImage>::new();
    let items = list.items();
    let is_loading = list.is_loading();
    let load_error = list.error();
    let lightbox = RwSignal::new(Lightbox::default());

    list.load((), move |_| async move { api::fetch_images(&config).await });

    Effect::new(move |_| {
        let len = items.with(|i| i.len());
        lightbox.update(|l| l.clamp(len));
    });

    let len = move || items.with_untracked(|i| i.len());
    let current = move || {
        lightbox
            .get()
            .current()
            .and_then(|index| items.with(|i| i.get(index).cloned()))
    };

    let grid = move || {
        if is_loading.get() {
            return view! { <div class="gallery__status"><Spinner label="Loading gallery..." /></div> }.into_any();
        }
        if let Some(message) = load_error.get() {
            return view! {
                <div class="gallery__status gallery__status--error">"Failed to load images: " {message}</div>
            }
            .into_any();
        }
        let images = items.get();
        if images.is_empty() {
            return view! {
                <div class="gallery__status">
                    <span class="gallery__status-mark">"!"</span>
                    <span>"No data available"</span>
                </div>
            }
            .into_any();
        }
        view! {
            <div class="gallery__grid">
                {images
                    .into_iter()
                    .enumerate()
                    .map(|(index, image)| {
                        let count = len();
                        view! {
                            <div class="gallery__tile">
                                <img
                                    src=image.image.unwrap_or_default()
                                    alt=image.title
                                    on:click=move |_| lightbox.update(|l| l.open(index, count))
                                />
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        }
        .into_any()
    };

    view! {
        <section class="gallery">
            <div class="gallery__header">
                <h1>"Gallery"</h1>
                <p>"Click on an image to view it in full size"</p>
            </div>

            {grid}

            {move || current().map(|image| view! {
                <div class="lightbox" on:click=move |_| lightbox.update(|l| l.close())>
                    <div class="lightbox__content" on:click=|ev| ev.stop_propagation()>
                        <button class="lightbox__nav lightbox__nav--prev" title="Previous"
                            on:click=move |_| lightbox.update(|l| l.prev(len()))
                        >
                            {icon("chevron-left")}
                        </button>
                        <figure>
                            <img src=image.image.unwrap_or_default() alt=image.title.clone() />
                            <figcaption>
                                <strong>{image.title}</strong>
                                <p>{image.description}</p>
                            </figcaption>
                        </figure>
                        <button class="lightbox__nav lightbox__nav--next" title="Next"
                            on:click=move |_| lightbox.update(|l| l.next(len()))
                        >
                            {icon("chevron-right")}
                        </button>
                        <button class="lightbox__close" title="Close"
                            on:click=move |_| lightbox.update(|l| l.close())
                        >
                            {icon("x")}
                        </button>
                    </div>
                </div>
            })}
        </section>
    }
}
