use super::view_model::ProjectFormViewModel;
use crate::domain::a001_project_record::draft::{
    ADDRESS, AFTER_PHOTO, BEFORE_PHOTO, DESCRIPTION, GS_DIVISION, LAT, LNG, NAME, NATIONAL_ID,
    PROJECT,
};
use crate::shared::components::{FileField, NoticeBar, SelectField, TextAreaField, TextField};
use contracts::shared::filter::{GS_DIVISIONS, PROJECT_TYPES};
use leptos::prelude::*;
use thaw::*;
use web_sys::File;

#[component]
pub fn ProjectRecordForm(
    vm: ProjectFormViewModel,
    /// Вызывается после успешного сохранения (перечитать таблицу)
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let is_submitting = vm.is_submitting();
    let is_editing = vm.is_editing();
    let generation = vm.file_inputs_generation();

    let input = move |name: &'static str| Callback::new(move |value: String| vm.set_field(name, value));
    let file = move |name: &'static str| Callback::new(move |file: File| vm.set_file(name, file));

    view! {
        <div class="upload-form">
            <h2 class="upload-form__title">
                {move || if is_editing.get() { "Edit Data" } else { "Upload Data" }}
            </h2>

            <NoticeBar notice=vm.notice on_dismiss=Callback::new(move |_| vm.dismiss_notice()) />

            <form on:submit=move |ev| {
                ev.prevent_default();
                vm.submit(on_saved);
            }>
                <div class="upload-form__grid">
                    <TextField
                        label="National ID"
                        value=vm.field(|d| &d.national_id)
                        on_input=input(NATIONAL_ID)
                        disabled=is_submitting
                    />
                    <TextField
                        label="Name"
                        value=vm.field(|d| &d.name)
                        on_input=input(NAME)
                        disabled=is_submitting
                    />
                    <SelectField
                        label="Project"
                        value=vm.field(|d| &d.project)
                        on_change=input(PROJECT)
                        options=&PROJECT_TYPES
                        disabled=is_submitting
                        empty_label="Select a project"
                    />
                    <SelectField
                        label="GS Division"
                        value=vm.field(|d| &d.gs_division)
                        on_change=input(GS_DIVISION)
                        options=&GS_DIVISIONS
                        disabled=is_submitting
                        empty_label="Select a GS division"
                    />
                    <TextField
                        label="Address"
                        value=vm.field(|d| &d.address)
                        on_input=input(ADDRESS)
                        disabled=is_submitting
                    />
                    <TextAreaField
                        label="Description"
                        value=vm.field(|d| &d.description)
                        on_input=input(DESCRIPTION)
                        disabled=is_submitting
                    />
                    <TextField
                        label="Latitude"
                        value=vm.field(|d| &d.lat)
                        on_input=input(LAT)
                        disabled=is_submitting
                        placeholder="7.54542"
                    />
                    <TextField
                        label="Longitude"
                        value=vm.field(|d| &d.lng)
                        on_input=input(LNG)
                        disabled=is_submitting
                        placeholder="80.489297"
                    />
                    <FileField
                        label="Before Photo"
                        existing_url=vm.existing_photo(|d| &d.before_photo)
                        generation=generation
                        disabled=is_submitting
                        on_file=file(BEFORE_PHOTO)
                    />
                    <FileField
                        label="After Photo"
                        existing_url=vm.existing_photo(|d| &d.after_photo)
                        generation=generation
                        disabled=is_submitting
                        on_file=file(AFTER_PHOTO)
                    />
                </div>

                <Space>
                    <Button
                        appearance=ButtonAppearance::Primary
                        button_type=ButtonType::Submit
                        disabled=is_submitting
                        loading=is_submitting
                    >
                        {move || match (is_submitting.get(), is_editing.get()) {
                            (true, _) => "Saving...",
                            (false, true) => "Update",
                            (false, false) => "Upload",
                        }}
                    </Button>
                    <Show when=move || is_editing.get()>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            disabled=is_submitting
                            on_click=move |_| {
                                vm.cancel();
                                on_cancel.run(());
                            }
                        >
                            "Cancel"
                        </Button>
                    </Show>
                </Space>
            </form>
        </div>
    }
}
