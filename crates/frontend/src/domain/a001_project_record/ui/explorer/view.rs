use super::view_model::{cards_placeholder, CardsPlaceholder, ExplorerViewModel};
use crate::shared::components::SelectField;
use crate::shared::config::AppConfig;
use crate::shared::list_utils::{highlight_matches, SearchInput};
use crate::shared::map::ProjectMap;
use contracts::domain::a001_project_record::{ProjectCategory, ProjectRecord};
use contracts::shared::filter::{GS_DIVISIONS, PROJECT_TYPES};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn ProjectExplorer(#[prop(into)] category: Signal<ProjectCategory>) -> impl IntoView {
    let config = use_context::<AppConfig>().expect("AppConfig context not found");
    let vm = ExplorerViewModel::new(category.get_untracked(), config);
    vm.load();

    Effect::new(move |_| vm.switch_category(category.get()));

    let visible = vm.visible();
    let search_text = vm.search_text();
    let is_loading = vm.list.is_loading();
    let load_error = vm.list.error();

    let error_banner = move || {
        load_error.get().map(|message| {
            view! {
                <div class="explorer__status explorer__status--error">
                    "Failed to load projects: " {message}
                </div>
            }
        })
    };

    let cards = move || {
        let records = visible.get();
        let placeholder =
            cards_placeholder(is_loading.get(), load_error.with(Option::is_some), records.len());
        match placeholder {
            Some(CardsPlaceholder::Loading) => {
                return view! {
                    <div class="explorer__status"><Spinner label="Loading..." /></div>
                }
                .into_any();
            }
            Some(CardsPlaceholder::Empty) => {
                return view! {
                    <div class="explorer__status">
                        <span class="explorer__status-mark">"!"</span>
                        <span>"No data available"</span>
                    </div>
                }
                .into_any();
            }
            None => {}
        }
        records
            .into_iter()
            .map(|record| {
                let id = record.id.clone();
                let expanded_id = record.id.clone();
                view! {
                    <ProjectCard
                        record=record
                        search_text=search_text
                        expanded=Signal::derive(move || vm.is_expanded(&expanded_id))
                        on_click=Callback::new(move |_| vm.select_card(id.clone()))
                    />
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <section class="explorer">
            <h1 class="explorer__title">{move || category.get().title()}</h1>
            <p class="explorer__summary">{move || category.get().summary()}</p>

            <div class="explorer__layout">
                <div class="explorer__list">
                    <h2>{move || format!("List of {} Projects", category.get().label())}</h2>

                    <SearchInput
                        value=search_text
                        on_change=Callback::new(move |text| vm.set_search_text(text))
                        placeholder="Search..."
                    />

                    <div class="explorer__filters">
                        <SelectField
                            label="Project Type"
                            value=vm.project_type()
                            on_change=Callback::new(move |value| vm.set_project_type(value))
                            options=&PROJECT_TYPES
                            disabled=false
                            empty_label="All Project Types"
                        />
                        <SelectField
                            label="GS Division"
                            value=vm.gs_division()
                            on_change=Callback::new(move |value| vm.set_gs_division(value))
                            options=&GS_DIVISIONS
                            disabled=false
                            empty_label="All GS Divisions"
                        />
                        <Button appearance=ButtonAppearance::Primary on_click=move |_| vm.reset_filters()>
                            "Reset Filters"
                        </Button>
                    </div>

                    {error_banner}
                    <div class="explorer__cards">{cards}</div>
                </div>

                <div class="explorer__map">
                    <ProjectMap
                        markers=vm.markers()
                        camera=vm.camera
                        on_marker_click=Callback::new(move |id| vm.select_marker(id))
                    />
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(
    record: ProjectRecord,
    search_text: Signal<String>,
    #[prop(into)] expanded: Signal<bool>,
    on_click: Callback<()>,
) -> impl IntoView {
    let name = record.name.clone();
    let details = record.clone();

    view! {
        <div
            class=move || if expanded.get() { "project-card project-card--expanded" } else { "project-card" }
            on:click=move |_| on_click.run(())
        >
            <div class="project-card__header">
                <div>
                    <h3 class="project-card__name">
                        {move || highlight_matches(&name, &search_text.get())}
                    </h3>
                    <p class="project-card__project">{record.project.clone()}</p>
                </div>
                <p class="project-card__division">{record.gs_division.clone()}</p>
            </div>

            <Show when=move || expanded.get()>
                <div class="project-card__details">
                    <p><strong>"ID: "</strong>{details.national_id.clone()}</p>
                    <p><strong>"Address: "</strong>{details.address.clone()}</p>
                    <p><strong>"Description: "</strong>{details.description.clone()}</p>
                    <p>
                        <strong>"Before: "</strong>
                        {details.before_photo.clone().map(|src| view! {
                            <img class="project-card__photo" src=src alt="Before" />
                        })}
                    </p>
                    <p>
                        <strong>"After: "</strong>
                        {details.after_photo.clone().map(|src| view! {
                            <img class="project-card__photo" src=src alt="After" />
                        })}
                    </p>
                </div>
            </Show>
        </div>
    }
}
