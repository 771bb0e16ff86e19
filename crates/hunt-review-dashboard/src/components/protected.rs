//! Route guard component

use crate::app::Session;
use hunt_review_core::guard::{self, GuardDecision};
use leptos::*;
use leptos_router::*;

/// Renders its children only while a session is stored.
///
/// The check runs as an effect on mount and on every navigation, so the
/// first pass renders nothing and an anonymous visitor is sent to the
/// login page.
#[component]
pub fn Protected(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<Session>();
    let navigate = use_navigate();
    let location = use_location();
    let (allowed, set_allowed) = create_signal(false);

    create_effect(move |_| {
        let _ = location.pathname.get();
        match guard::check(&session) {
            GuardDecision::Render => set_allowed.set(true),
            GuardDecision::Redirect(path) => {
                set_allowed.set(false);
                tracing::debug!("No session, redirecting to {}", path);
                navigate(path, Default::default());
            }
        }
    });

    move || allowed.get().then(|| children())
}
