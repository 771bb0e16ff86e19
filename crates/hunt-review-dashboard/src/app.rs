//! Main application component

use crate::browser::BrowserStorage;
use crate::components::*;
use crate::pages::*;
use hunt_review_core::{routes, ClientConfig, HttpReviewApi, SessionStore};
use leptos::*;
use leptos_router::*;
use std::rc::Rc;

/// Session backed by `localStorage`
pub type Session = SessionStore<BrowserStorage>;

/// Shared API client, provided as context
pub type Api = Rc<HttpReviewApi<BrowserStorage>>;

#[component]
pub fn App() -> impl IntoView {
    let config = ClientConfig::default();
    tracing::info!("Using API at {}", config.api_base_url);

    let session = SessionStore::new(BrowserStorage);
    let api: Api = Rc::new(HttpReviewApi::new(config, session.clone()));
    provide_context(session);
    provide_context(api);

    view! {
        <Router>
            <div class="min-h-screen bg-gray-100">
                <Routes>
                    <Route path=routes::LOGIN view=LoginPage/>
                    <Route
                        path=routes::DASHBOARD
                        view=|| view! { <ReviewerShell><DashboardPage/></ReviewerShell> }
                    />
                    <Route
                        path=routes::HUNT_DETAIL
                        view=|| view! { <ReviewerShell><HuntDetailPage/></ReviewerShell> }
                    />
                    <Route path=routes::DIAGNOSTIC view=DiagnosticPage/>
                    <Route path="/*any" view=NotFound/>
                </Routes>
            </div>
        </Router>
    }
}

/// Guarded page with the navigation header
#[component]
fn ReviewerShell(children: ChildrenFn) -> impl IntoView {
    view! {
        <Protected>
            <Nav/>
            <main>{children()}</main>
        </Protected>
    }
}
