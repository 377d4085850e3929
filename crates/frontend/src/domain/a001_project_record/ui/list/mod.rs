//! Таблица записей выбранной категории в админке

use crate::domain::a001_project_record::api;
use crate::shared::components::NoticeBar;
use crate::shared::config::AppConfig;
use crate::shared::icons::icon;
use crate::shared::list_utils::{confirm_action, delete_prompt};
use crate::shared::state::remote_list::RemoteList;
use contracts::domain::a001_project_record::{ProjectCategory, ProjectRecord};
use contracts::domain::common::RecordId;
use leptos::prelude::*;
use thaw::*;

fn photo_cell(url: Option<String>, alt: &'static str) -> AnyView {
    match url.filter(|u| !u.trim().is_empty()) {
        Some(src) => view! { <img class="table-thumb" src=src alt=alt /> }.into_any(),
        None => view! { <span class="table-muted">"No image"</span> }.into_any(),
    }
}

#[component]
pub fn ProjectRecordTable(
    #[prop(into)] category: Signal<ProjectCategory>,
    /// Счётчик внешнего обновления: любое изменение перечитывает список
    #[prop(into)]
    refresh: Signal<u32>,
    on_edit: Callback<ProjectRecord>,
    on_deleted: Callback<RecordId>,
) -> impl IntoView {
    let config = StoredValue::new(use_context::<AppConfig>().expect("AppConfig context not found"));
    let list = RemoteList::<ProjectCategory, ProjectRecord>::new();
    let items = list.items();
    let is_loading = list.is_loading();
    let is_empty = list.is_empty_result();
    let load_error = list.error();

    let fetch = move |category: ProjectCategory| {
        let config = config.get_value();
        async move { api::fetch_records(&config, category).await }
    };

    Effect::new(move |_| {
        let category = category.get();
        refresh.track();
        list.load(category, fetch);
    });

    let delete = move |record: ProjectRecord| {
        let confirmed = confirm_action(&delete_prompt(&record));
        let remove = move |category: ProjectCategory, id: RecordId| {
            let config = config.get_value();
            async move { api::delete_record(&config, category, &id).await }
        };
        list.delete(&record.id, confirmed, remove, fetch, on_deleted);
    };

    view! {
        <div class="data-table">
            <h2 class="data-table__title">
                {move || format!("{} records", category.get().label())}
            </h2>

            <NoticeBar
                notice=list.notice
                on_dismiss=Callback::new(move |_| list.notice.set(None))
            />

            {move || load_error.get().map(|message| view! {
                <div class="notice notice--error">{message}</div>
            })}

            <Show
                when=move || !(is_loading.get() && items.with(|i| i.is_empty()))
                fallback=|| view! { <Spinner label="Loading data..." /> }
            >
                <Show
                    when=move || !is_empty.get()
                    fallback=|| view! { <p class="table-empty">"No records found."</p> }
                >
                    <Table>
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell min_width=110.0>"National ID"</TableHeaderCell>
                                <TableHeaderCell min_width=150.0>"Name"</TableHeaderCell>
                                <TableHeaderCell min_width=100.0>"Project"</TableHeaderCell>
                                <TableHeaderCell min_width=120.0>"GS Division"</TableHeaderCell>
                                <TableHeaderCell min_width=150.0>"Address"</TableHeaderCell>
                                <TableHeaderCell min_width=200.0>"Description"</TableHeaderCell>
                                <TableHeaderCell min_width=80.0>"Latitude"</TableHeaderCell>
                                <TableHeaderCell min_width=80.0>"Longitude"</TableHeaderCell>
                                <TableHeaderCell min_width=90.0>"Before"</TableHeaderCell>
                                <TableHeaderCell min_width=90.0>"After"</TableHeaderCell>
                                <TableHeaderCell min_width=160.0>"Actions"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || {
                                items
                                    .get()
                                    .into_iter()
                                    .map(|record| {
                                        let for_edit = record.clone();
                                        let for_delete = record.clone();
                                        view! {
                                            <TableRow>
                                                <TableCell><TableCellLayout>{record.national_id}</TableCellLayout></TableCell>
                                                <TableCell><TableCellLayout>{record.name}</TableCellLayout></TableCell>
                                                <TableCell><TableCellLayout>{record.project}</TableCellLayout></TableCell>
                                                <TableCell><TableCellLayout>{record.gs_division}</TableCellLayout></TableCell>
                                                <TableCell><TableCellLayout>{record.address}</TableCellLayout></TableCell>
                                                <TableCell><TableCellLayout>{record.description}</TableCellLayout></TableCell>
                                                <TableCell><TableCellLayout>{record.lat}</TableCellLayout></TableCell>
                                                <TableCell><TableCellLayout>{record.lng}</TableCellLayout></TableCell>
                                                <TableCell>{photo_cell(record.before_photo, "Before")}</TableCell>
                                                <TableCell>{photo_cell(record.after_photo, "After")}</TableCell>
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
