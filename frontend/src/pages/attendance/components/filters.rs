use leptos::*;

#[component]
pub fn AttendanceFilters(
    search_term: RwSignal<String>,
    filter_date: RwSignal<String>,
    on_clear_date: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="bg-white p-4 rounded-lg shadow-sm border border-gray-200 flex flex-col md:flex-row gap-4 items-center">
            <div class="relative flex-1 w-full">
                <input
                    type="text"
                    class="block w-full border border-gray-300 rounded-md p-2 sm:text-sm focus:ring-indigo-500 focus:border-indigo-500"
                    placeholder="Search by employee name or ID..."
                    prop:value=move || search_term.get()
                    on:input=move |ev| search_term.set(event_target_value(&ev))
                />
            </div>
            <div class="flex items-center gap-2 w-full md:w-auto">
                <span class="text-sm text-gray-500 whitespace-nowrap">{"Filter Date:"}</span>
                <input
                    type="date"
                    class="block w-full border border-gray-300 rounded-md p-2 sm:text-sm focus:ring-indigo-500 focus:border-indigo-500"
                    prop:value=move || filter_date.get()
                    on:input=move |ev| filter_date.set(event_target_value(&ev))
                />
                <Show when=move || !filter_date.get().is_empty()>
                    <button
                        type="button"
                        class="p-2 text-gray-400 hover:text-gray-600"
                        title="Clear Date Filter"
                        on:click=move |_| on_clear_date.call(())
                    >
                        {"✕"}
                    </button>
                </Show>
            </div>
        </div>
    }
}
