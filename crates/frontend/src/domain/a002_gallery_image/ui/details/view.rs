use super::view_model::GalleryFormViewModel;
use crate::domain::a002_gallery_image::draft::{DESCRIPTION, IMAGE, TITLE};
use crate::shared::components::{FileField, NoticeBar, TextAreaField, TextField};
use leptos::prelude::*;
use thaw::*;
use web_sys::File;

#[component]
pub fn GalleryImageForm(
    vm: GalleryFormViewModel,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let is_submitting = vm.is_submitting();
    let is_editing = vm.is_editing();

    view! {
        <div class="upload-form">
            <h2 class="upload-form__title">
                {move || if is_editing.get() { "Edit Image" } else { "Upload Image" }}
            </h2>

            <NoticeBar notice=vm.notice on_dismiss=Callback::new(move |_| vm.dismiss_notice()) />

            <form on:submit=move |ev| {
                ev.prevent_default();
                vm.submit(on_saved);
            }>
                <TextField
                    label="Title"
                    value=vm.field(|d| &d.title)
                    on_input=Callback::new(move |value| vm.set_field(TITLE, value))
                    disabled=is_submitting
                />
                <TextAreaField
                    label="Description"
                    value=vm.field(|d| &d.description)
                    on_input=Callback::new(move |value| vm.set_field(DESCRIPTION, value))
                    disabled=is_submitting
                />
                <FileField
                    label="Image"
                    existing_url=vm.existing_photo(|d| &d.image)
                    generation=vm.file_inputs_generation()
                    disabled=is_submitting
                    on_file=Callback::new(move |file: File| vm.set_file(IMAGE, file))
                />

                <Space>
                    <Button
                        appearance=ButtonAppearance::Primary
                        button_type=ButtonType::Submit
                        disabled=is_submitting
                        loading=is_submitting
                    >
                        {move || match (is_submitting.get(), is_editing.get()) {
                            (true, _) => "Uploading...",
                            (false, true) => "Update Image",
                            (false, false) => "Upload Image",
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
