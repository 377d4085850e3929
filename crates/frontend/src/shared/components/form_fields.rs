use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{File, HtmlInputElement};

/// Text input with label
#[component]
pub fn TextField(
    label: &'static str,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(into)] disabled: Signal<bool>,
    /// Input type: "text" (default), "password", "email", etc.
    #[prop(optional)]
    input_type: Option<&'static str>,
    #[prop(optional)] placeholder: &'static str,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label">{label}</label>
            <input
                class="form__input"
                type=input_type.unwrap_or("text")
                placeholder=placeholder
                prop:value=move || value.get()
                disabled=move || disabled.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}

#[component]
pub fn TextAreaField(
    label: &'static str,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(into)] disabled: Signal<bool>,
    #[prop(optional)] rows: Option<u32>,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label">{label}</label>
            <textarea
                class="form__textarea"
                rows=rows.unwrap_or(3)
                prop:value=move || value.get()
                disabled=move || disabled.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            ></textarea>
        </div>
    }
}

/// Select with a leading empty option
#[component]
pub fn SelectField(
    label: &'static str,
    #[prop(into)] value: Signal<String>,
    on_change: Callback<String>,
    options: &'static [&'static str],
    #[prop(into)] disabled: Signal<bool>,
    /// Text of the empty option ("" value)
    empty_label: &'static str,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label">{label}</label>
            <select
                class="form__select"
                prop:value=move || value.get()
                disabled=move || disabled.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                <option value="" selected=move || value.get().is_empty()>{empty_label}</option>
                {move || unlisted_value(options, &value.get()).map(|current| view! {
                    <option value=current.clone() selected=true>{current.clone()}</option>
                })}
                {options
                    .iter()
                    .map(|option| {
                        let option = *option;
                        view! {
                            <option value=option selected=move || value.get() == option>
                                {option}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}

/// Значение записи, которого нет среди вариантов (старые данные бэкенда):
/// показывается отдельной опцией, чтобы select не выглядел пустым
pub fn unlisted_value(options: &[&str], value: &str) -> Option<String> {
    if value.is_empty() || options.contains(&value) {
        return None;
    }
    Some(value.to_string())
}

/// Поле выбора изображения с превью.
///
/// Нативный input пересоздаётся при каждом изменении `generation`,
/// иначе браузер продолжает показывать ранее выбранный файл.
#[component]
pub fn FileField(
    label: &'static str,
    /// Уже сохранённое изображение записи
    #[prop(into)]
    existing_url: Signal<Option<String>>,
    #[prop(into)] generation: Signal<u32>,
    #[prop(into)] disabled: Signal<bool>,
    on_file: Callback<File>,
) -> impl IntoView {
    let local_preview = RwSignal::new(None::<String>);

    Effect::new(move |_| {
        generation.track();
        revoke(local_preview.get_untracked());
        local_preview.set(None);
    });

    let on_change = move |ev: leptos::ev::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
        else {
            return;
        };
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        match web_sys::Url::create_object_url_with_blob(&file) {
            Ok(url) => {
                revoke(local_preview.get_untracked());
                local_preview.set(Some(url));
            }
            Err(e) => log::warn!("file preview unavailable: {:?}", e),
        }
        on_file.run(file);
    };

    let preview = move || local_preview.get().or_else(|| existing_url.get());

    view! {
        <div class="form__group">
            <label class="form__label">{label}</label>
            {move || {
                generation.track();
                view! {
                    <input
                        class="form__file"
                        type="file"
                        accept="image/*"
                        disabled=move || disabled.get()
                        on:change=on_change
                    />
                }
            }}
            {move || preview().map(|src| view! {
                <img class="form__preview" src=src alt=label />
            })}
        </div>
    }
}

fn revoke(url: Option<String>) {
    if let Some(url) = url {
        let _ = web_sys::Url::revoke_object_url(&url);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DIVISIONS: [&str; 2] = ["Gallawa", "Korossa"];

    #[test]
    fn test_listed_and_empty_values_need_no_extra_option() {
        assert_eq!(unlisted_value(&DIVISIONS, "Korossa"), None);
        assert_eq!(unlisted_value(&DIVISIONS, ""), None);
    }

    #[test]
    fn test_seeded_value_outside_the_list_is_kept() {
        assert_eq!(
            unlisted_value(&DIVISIONS, "Old Division"),
            Some("Old Division".to_string())
        );
    }
}
