use leptos::prelude::*;

/// Input with the native datetime picker.
///
/// Values move in and out in `yyyy-mm-ddThh:mm` form; see
/// `shared::date_utils::parse_datetime_local` for parsing.
#[component]
pub fn DateTimeInput(
    #[prop(into)] label: Signal<String>,
    #[prop(into)] value: Signal<String>,
    on_change: impl Fn(String) + 'static,
) -> impl IntoView {
    view! {
        <label class="datetime-input">
            <span class="datetime-input__label">{move || label.get()}</span>
            <input
                type="datetime-local"
                prop:value=value
                on:input=move |ev| {
                    on_change(event_target_value(&ev));
                }
            />
        </label>
    }
}
