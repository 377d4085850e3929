use super::state::{AdminShellState, UploadMode};
use crate::domain::a001_project_record::api as records_api;
use crate::domain::a001_project_record::ui::details::{self as record_details, ProjectRecordForm};
use crate::domain::a001_project_record::ui::list::ProjectRecordTable;
use crate::domain::a002_gallery_image::api as gallery_api;
use crate::domain::a002_gallery_image::ui::details::{self as image_details, GalleryImageForm};
use crate::domain::a002_gallery_image::ui::list::GalleryImageTable;
use crate::shared::config::AppConfig;
use crate::shared::icons::icon;
use crate::system::auth::context::{do_logout, use_auth};
use crate::system::auth::guard::RequireAuth;
use contracts::domain::a001_project_record::{ProjectCategory, ProjectRecord};
use contracts::domain::a002_gallery_image::GalleryImage;
use contracts::domain::common::RecordId;
use leptos::prelude::*;
use thaw::*;

/// Страница `/update`
#[component]
pub fn AdminPage() -> impl IntoView {
    view! {
        <RequireAuth>
            <AdminShell />
        </RequireAuth>
    }
}

#[component]
fn AdminShell() -> impl IntoView {
    let config = use_context::<AppConfig>().expect("AppConfig context not found");
    let (auth_state, set_auth_state) = use_auth();

    let header = view! {
        <div class="admin__header">
            <h1>"Admin Panel"</h1>
            <div class="admin__user">
                <span>{move || auth_state.get().username.unwrap_or_default()}</span>
                <Button
                    appearance=ButtonAppearance::Secondary
                    size=ButtonSize::Small
                    on_click=move |_| do_logout(set_auth_state)
                >
                    {icon("logout")}
                    " Logout"
                </Button>
            </div>
        </div>
    };

    let urls = records_api::collection_url(&config, ProjectCategory::default())
        .and_then(|records| gallery_api::collection_url(&config).map(|images| (records, images)));

    let body = match urls {
        Ok((records_url, images_url)) => {
            view! { <AdminWorkspace config=config records_url=records_url images_url=images_url /> }
                .into_any()
        }
        Err(e) => {
            log::error!("admin: {}", e);
            view! { <div class="notice notice--error admin__fatal">{e.to_string()}</div> }
                .into_any()
        }
    };

    view! {
        <section class="admin">
            {header}
            {body}
        </section>
    }
}

#[component]
fn AdminWorkspace(config: AppConfig, records_url: String, images_url: String) -> impl IntoView {
    let shell = RwSignal::new(AdminShellState::default());
    let record_form = record_details::create_view_model(records_url);
    let image_form = image_details::create_view_model(images_url);

    let mode = Signal::derive(move || shell.with(|s| s.mode));
    let category = Signal::derive(move || shell.with(|s| s.category));
    let refresh = Signal::derive(move || shell.with(|s| s.refresh));

    let config = StoredValue::new(config);
    let select_category = move |slug: String| {
        let Some(next) = ProjectCategory::from_slug(&slug) else {
            log::warn!("admin: unknown category '{}'", slug);
            return;
        };
        let changed = shell
            .try_update(|s| s.select_category(next))
            .unwrap_or(false);
        if !changed {
            return;
        }
        match config.with_value(|c| records_api::collection_url(c, next)) {
            Ok(url) => record_form.switch_collection(url),
            Err(e) => log::error!("admin: {}", e),
        }
    };

    let on_saved = Callback::new(move |_| shell.update(|s| s.bump_refresh()));

    let tab = move |target: UploadMode| {
        view! {
            <button
                class=move || if mode.get() == target { "admin__tab admin__tab--active" } else { "admin__tab" }
                on:click=move |_| shell.update(|s| s.select_mode(target))
            >
                {target.label()}
            </button>
        }
    };

    view! {
        <div class="admin__tabs">
            {tab(UploadMode::Data)}
            {tab(UploadMode::Image)}
        </div>

        <Show
            when=move || mode.get() == UploadMode::Data
            fallback=move || view! {
                <div class="admin__workspace">
                    <GalleryImageForm
                        vm=image_form
                        on_saved=on_saved
                        on_cancel=Callback::new(move |_| image_form.cancel())
                    />
                    <GalleryImageTable
                        refresh=refresh
                        on_edit=Callback::new(move |image: GalleryImage| image_form.seed(Some(&image)))
                        on_deleted=Callback::new(move |id: RecordId| image_form.forget(&id))
                    />
                </div>
            }
        >
            <div class="admin__category">
                <label for="admin-category">"Select a Tab"</label>
                <select
                    id="admin-category"
                    prop:value=move || category.get().slug()
                    on:change=move |ev| select_category(event_target_value(&ev))
                >
                    {ProjectCategory::ALL
                        .iter()
                        .map(|c| view! { <option value=c.slug()>{c.label()}</option> })
                        .collect_view()}
                </select>
            </div>

            <div class="admin__workspace">
                <ProjectRecordForm
                    vm=record_form
                    on_saved=on_saved
                    on_cancel=Callback::new(move |_| record_form.cancel())
                />
                <ProjectRecordTable
                    category=category
                    refresh=refresh
                    on_edit=Callback::new(move |record: ProjectRecord| record_form.seed(Some(&record)))
                    on_deleted=Callback::new(move |id: RecordId| record_form.forget(&id))
                />
            </div>
        </Show>
    }
}
