use crate::api::{ApiError, CODE_REQUEST_FAILED, CODE_UNKNOWN, CODE_VALIDATION_ERROR};
use leptos::*;

/// Form-level error. `fallback` replaces transport errors and HTTP errors
/// that carried no server message.
#[component]
pub fn InlineErrorMessage(
    error: Signal<Option<ApiError>>,
    #[prop(optional, into)] fallback: Option<String>,
) -> impl IntoView {
    let fallback = fallback.unwrap_or_else(|| "Something went wrong. Please try again.".to_string());
    view! {
        <Show when=move || error.get().is_some() fallback=|| ()>
            <div class="p-3 bg-red-100 text-red-700 rounded-md text-sm space-y-1" role="alert">
                <div class="font-medium">
                    {
                        let fallback = fallback.clone();
                        move || error.get().map(|e| e.message_or(&fallback)).unwrap_or_default()
                    }
                </div>
                {move || error.get().map(|e| {
                    let errors: Vec<String> = if e.code == CODE_VALIDATION_ERROR {
                        e.details
                            .as_ref()
                            .and_then(|details| details.get("errors"))
                            .and_then(|v| v.as_array())
                            .map(|items| {
                                items
                                    .iter()
                                    .filter_map(|item| item.as_str().map(str::to_string))
                                    .collect()
                            })
                            .unwrap_or_default()
                    } else {
                        Vec::new()
                    };
                    if errors.len() > 1 {
                        view! {
                            <ul class="list-disc list-inside text-xs">
                                {errors.into_iter().map(|err| view! { <li>{err}</li> }).collect_view()}
                            </ul>
                        }.into_view()
                    } else {
                        ().into_view()
                    }
                })}
            </div>
        </Show>
    }
}

/// Retryable banner for a failed initial load.
#[component]
pub fn LoadErrorBanner(
    error: ApiError,
    #[prop(into)] what: String,
    on_retry: Callback<()>,
) -> impl IntoView {
    let detail = match error.code.as_str() {
        CODE_REQUEST_FAILED => "The server could not be reached.".to_string(),
        CODE_UNKNOWN => error.to_string(),
        _ => error.message_or(&error.to_string()),
    };
    view! {
        <div class="bg-red-50 border border-red-200 text-red-800 px-4 py-3 rounded-lg" role="alert">
            <div class="flex flex-col gap-3 sm:flex-row sm:items-center sm:justify-between">
                <div>
                    <p class="font-semibold">{format!("Failed to load {}.", what)}</p>
                    <p class="text-sm mt-1">{detail}</p>
                </div>
                <button
                    type="button"
                    class="inline-flex items-center justify-center px-4 py-2 border border-red-300 text-sm font-medium rounded-md hover:bg-red-100"
                    on:click=move |_| on_retry.call(())
                >
                    {"Retry"}
                </button>
            </div>
        </div>
    }
}
