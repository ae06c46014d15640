use crate::components::toast::ToastHost;
use leptos::*;
use leptos_router::RouterContext;

pub const APP_NAME: &str = "HRMS Lite";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavIcon {
    Dashboard,
    Employees,
    Attendance,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub path: &'static str,
    pub label: &'static str,
    pub icon: NavIcon,
}

pub const NAV_ITEMS: [NavItem; 3] = [
    NavItem {
        path: "/dashboard",
        label: "Dashboard",
        icon: NavIcon::Dashboard,
    },
    NavItem {
        path: "/employees",
        label: "Employees",
        icon: NavIcon::Employees,
    },
    NavItem {
        path: "/attendance",
        label: "Attendance",
        icon: NavIcon::Attendance,
    },
];

/// A link is active for its own route and anything nested below it.
pub fn is_active(item_path: &str, current_path: &str) -> bool {
    current_path == item_path
        || current_path
            .strip_prefix(item_path)
            .is_some_and(|rest| rest.starts_with('/'))
}

fn current_path() -> Signal<String> {
    match use_context::<RouterContext>() {
        Some(router) => router.pathname().into(),
        None => Signal::derive(String::new),
    }
}

#[component]
fn NavGlyph(icon: NavIcon, #[prop(into)] class: String) -> impl IntoView {
    let path = match icon {
        NavIcon::Dashboard => "M3 3h7v9H3zM14 3h7v5h-7zM14 12h7v9h-7zM3 16h7v5H3z",
        NavIcon::Employees => "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2M9 11a4 4 0 1 0 0-8 4 4 0 0 0 0 8zM22 21v-2a4 4 0 0 0-3-3.87M16 3.13a4 4 0 0 1 0 7.75",
        NavIcon::Attendance => "M8 2v4M16 2v4M3 10h18M5 4h14a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2zM9 16l2 2 4-4",
    };
    view! {
        <svg class=class fill="none" viewBox="0 0 24 24" stroke="currentColor" stroke-width="2" aria-hidden="true">
            <path stroke-linecap="round" stroke-linejoin="round" d=path />
        </svg>
    }
}

#[component]
pub fn Sidebar(current_path: Signal<String>) -> impl IntoView {
    view! {
        <aside class="w-64 bg-white border-r border-gray-200 hidden md:block">
            <div class="h-16 flex items-center px-6 border-b border-gray-200">
                <span class="text-xl font-bold text-indigo-600">{APP_NAME}</span>
            </div>
            <nav class="p-4 space-y-1">
                {NAV_ITEMS
                    .iter()
                    .map(|item| {
                        let item = *item;
                        let active = move || is_active(item.path, &current_path.get());
                        view! {
                            <a
                                href=item.path
                                aria-current=move || if active() { Some("page") } else { None }
                                class=move || {
                                    if active() {
                                        "flex items-center px-4 py-3 text-sm font-medium rounded-lg transition-colors bg-indigo-50 text-indigo-700"
                                    } else {
                                        "flex items-center px-4 py-3 text-sm font-medium rounded-lg transition-colors text-gray-700 hover:bg-gray-100"
                                    }
                                }
                            >
                                {move || {
                                    let class = if active() {
                                        "w-5 h-5 mr-3 text-indigo-700"
                                    } else {
                                        "w-5 h-5 mr-3 text-gray-400"
                                    };
                                    view! { <NavGlyph icon=item.icon class=class /> }
                                }}
                                {item.label}
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>
        </aside>
    }
}

#[component]
pub fn MobileHeader() -> impl IntoView {
    view! {
        <header class="md:hidden bg-white border-b border-gray-200 h-16 flex items-center px-4">
            <span class="text-xl font-bold text-indigo-600">{APP_NAME}</span>
            <nav class="ml-auto flex space-x-4">
                {NAV_ITEMS
                    .iter()
                    .map(|item| {
                        view! {
                            <a href=item.path class="text-gray-600" aria-label=item.label>
                                <NavGlyph icon=item.icon class="w-6 h-6" />
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>
        </header>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    let path = current_path();
    view! {
        <div class="min-h-screen bg-gray-50 flex">
            <Sidebar current_path=path />
            <div class="flex-1 flex flex-col min-w-0 overflow-hidden">
                <MobileHeader />
                <main class="flex-1 overflow-y-auto p-4 sm:p-6 lg:p-8">
                    {children()}
                </main>
            </div>
            <ToastHost />
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-indigo-600"></div>
        </div>
    }
}

#[component]
pub fn ErrorMessage(message: String) -> impl IntoView {
    view! {
        <div class="p-3 bg-red-100 text-red-700 rounded-md text-sm" role="alert">
            {message}
        </div>
    }
}
