use crate::layout::global_context::AppGlobalContext;
use crate::layout::notification_service::{NotificationHost, NotificationService};
use crate::layout::Shell;
use crate::shared::config::provide_settings;
use crate::shared::viewport::provide_viewport;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Settings first: notification duration is read from them.
    let settings = provide_settings();
    provide_context(NotificationService::new(
        settings.with_untracked(|s| s.notification_duration_ms),
    ));
    provide_viewport();

    // Provide the AppGlobalContext store to the whole app via context.
    let ctx = AppGlobalContext::new();
    provide_context(ctx);
    ctx.init_router_integration();

    view! {
        <Shell />
        <NotificationHost />
    }
}
