use crate::{
    state::notification::{use_notifications, Notification, NotificationCenter, NotificationKind},
    utils::lifecycle::MountGuard,
};
use leptos::*;

#[component]
pub fn ToastHost() -> impl IntoView {
    let center = use_notifications();
    let current = center.current();
    let guard = MountGuard::new();

    create_effect(move |_| {
        if let Some(Notification {
            id,
            auto_dismiss_ms: Some(ms),
            ..
        }) = current.get()
        {
            schedule_dismiss(center, guard.clone(), id, ms);
        }
    });

    view! {
        {move || current.get().map(|notification| {
            let (panel_class, icon) = match notification.kind {
                NotificationKind::Success => ("border-green-200 bg-green-50 text-green-800", "✓"),
                NotificationKind::Error => ("border-red-200 bg-red-50 text-red-800", "!"),
            };
            view! {
                <div class="fixed top-4 right-4 z-[80] w-full max-w-sm" role="status" aria-live="polite">
                    <div class=format!("flex items-start gap-3 rounded-lg border shadow-lg p-4 {}", panel_class)>
                        <span class="font-bold">{icon}</span>
                        <div class="flex-1">
                            <p class="text-sm font-semibold">{notification.title.clone()}</p>
                            <p class="text-sm">{notification.message.clone()}</p>
                        </div>
                        <button
                            type="button"
                            aria-label="Dismiss"
                            class="text-sm opacity-70 hover:opacity-100"
                            on:click=move |_| center.dismiss()
                        >
                            {"✕"}
                        </button>
                    </div>
                </div>
            }
        })}
    }
}

#[cfg(target_arch = "wasm32")]
fn schedule_dismiss(center: NotificationCenter, guard: MountGuard, id: u64, ms: u32) {
    spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(ms).await;
        guard.apply(|| {
            center.dismiss_if_current(id);
        });
    });
}

// Timers need a browser event loop; host renders keep the toast until dismissed.
#[cfg(not(target_arch = "wasm32"))]
fn schedule_dismiss(_center: NotificationCenter, _guard: MountGuard, _id: u64, _ms: u32) {}
