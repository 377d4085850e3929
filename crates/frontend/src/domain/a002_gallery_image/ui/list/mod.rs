//! Таблица изображений галереи в админке

use crate::domain::a002_gallery_image::api;
use crate::shared::components::NoticeBar;
use crate::shared::config::AppConfig;
use crate::shared::icons::icon;
use crate::shared::list_utils::{confirm_action, delete_prompt};
use crate::shared::state::remote_list::RemoteList;
use contracts::domain::a002_gallery_image::GalleryImage;
use contracts::domain::common::RecordId;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn GalleryImageTable(
    #[prop(into)] refresh: Signal<u32>,
    on_edit: Callback<GalleryImage>,
    on_deleted: Callback<RecordId>,
) -> impl IntoView {
    let config = StoredValue::new(use_context::<AppConfig>().expect("AppConfig context not found"));
    let list = RemoteList::<(), GalleryImage>::new();
    let items = list.items();
    let is_loading = list.is_loading();
    let is_empty = list.is_empty_result();
    let load_error = list.error();

    let fetch = move |_: ()| {
        let config = config.get_value();
        async move { api::fetch_images(&config).await }
    };

    Effect::new(move |_| {
        refresh.track();
        list.load((), fetch);
    });

    let delete = move |image: GalleryImage| {
        let confirmed = confirm_action(&delete_prompt(&image));
        let remove = move |_: (), id: RecordId| {
            let config = config.get_value();
            async move { api::delete_image(&config, &id).await }
        };
        list.delete(&image.id, confirmed, remove, fetch, on_deleted);
    };

    view! {
        <div class="data-table">
            <h2 class="data-table__title">"Gallery images"</h2>

            <NoticeBar
                notice=list.notice
                on_dismiss=Callback::new(move |_| list.notice.set(None))
            />

            {move || load_error.get().map(|message| view! {
                <div class="notice notice--error">{message}</div>
            })}

            <Show
                when=move || !(is_loading.get() && items.with(|i| i.is_empty()))
                fallback=|| view! { <Spinner label="Loading images..." /> }
            >
                <Show
                    when=move || !is_empty.get()
                    fallback=|| view! { <p class="table-empty">"No images found."</p> }
                >
                    <Table>
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell min_width=120.0>"Image"</TableHeaderCell>
                                <TableHeaderCell min_width=160.0>"Title"</TableHeaderCell>
                                <TableHeaderCell min_width=240.0>"Description"</TableHeaderCell>
                                <TableHeaderCell min_width=160.0>"Actions"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || {
                                items
                                    .get()
                                    .into_iter()
                                    .map(|image| {
                                        let for_edit = image.clone();
                                        let for_delete = image.clone();
                                        let alt = image.title.clone();
                                        view! {
                                            <TableRow>
                                                <TableCell>
                                                    {image.image.map(|src| view! {
                                                        <img class="table-thumb" src=src alt=alt />
                                                    })}
                                                </TableCell>
                                                <TableCell><TableCellLayout>{image.title}</TableCellLayout></TableCell>
                                                <TableCell><TableCellLayout>{image.description}</TableCellLayout></TableCell>
                                                <TableCell>
                                                    <Space>
                                                        <Button
                                                            size=ButtonSize::Small
                                                            on_click=move |_| on_edit.run(for_edit.clone())
                                                        >
                                                            {icon("edit")}
                                                            " Edit"
                                                        </Button>
                                                        <Button
                                                            size=ButtonSize::Small
                                                            on_click=move |_| delete(for_delete.clone())
                                                        >
                                                            {icon("trash")}
                                                            " Delete"
                                                        </Button>
                                                    </Space>
                                                </TableCell>
                                            </TableRow>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </TableBody>
                    </Table>
                </Show>
            </Show>
        </div>
    }
}
