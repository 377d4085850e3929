use crate::shared::error::{Notice, NoticeKind};
use leptos::prelude::*;

/// Строка уведомления о результате операции
#[component]
pub fn NoticeBar(
    #[prop(into)] notice: Signal<Option<Notice>>,
    on_dismiss: Callback<()>,
) -> impl IntoView {
    move || {
        notice.get().map(|n| {
            let class = match n.kind {
                NoticeKind::Success => "notice notice--success",
                NoticeKind::Error => "notice notice--error",
            };
            view! {
                <div class=class role="status">
                    <span>{n.text}</span>
                    <button class="notice__close" title="Close" on:click=move |_| on_dismiss.run(())>
                        {crate::shared::icons::icon("x")}
                    </button>
                </div>
            }
        })
    }
}
