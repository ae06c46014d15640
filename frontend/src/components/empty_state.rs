use leptos::*;

#[component]
pub fn EmptyState(
    #[prop(into)] title: String,
    #[prop(optional, into)] description: Option<String>,
    #[prop(optional)] icon: Option<View>,
) -> impl IntoView {
    view! {
        <div class="text-center py-8 px-4 text-gray-500">
            <div class="mx-auto h-12 w-12 text-gray-300 mb-3">
                {icon.unwrap_or_else(|| view! {
                    <svg class="mx-auto h-12 w-12" fill="none" viewBox="0 0 24 24" stroke="currentColor" aria-hidden="true">
                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M8 2v4M16 2v4M3 10h18M5 4h14a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z" />
                    </svg>
                }.into_view())}
            </div>
            <p>{title}</p>
            {description.map(|desc| view! {
                <p class="mt-1 text-sm text-gray-400">{desc}</p>
            })}
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn empty_state_renders_title_and_description() {
        let html = render_to_string(move || {
            view! { <EmptyState title="No employees found" description="Add one to get started." /> }
        });
        assert!(html.contains("No employees found"));
        assert!(html.contains("Add one to get started."));
    }
}
