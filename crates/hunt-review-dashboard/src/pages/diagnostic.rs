//! Unprotected diagnostic page and the not-found fallback

use crate::app::{Api, Session};
use crate::components::{CodeViewer, MapWidget};
use hunt_review_core::routes;
use leptos::*;

const SAMPLE_CODE: &str = "def reverse(s):\n    return s[::-1]\n\nprint(reverse(\"treasure\"))\n";

#[component]
pub fn DiagnosticPage() -> impl IntoView {
    let api = expect_context::<Api>();
    let session = expect_context::<Session>();

    let base_url = api.config().api_base_url.clone();
    let session_label = if session.is_authenticated() {
        "Access token stored"
    } else {
        "No session"
    };

    view! {
        <div class="container mx-auto px-4 py-8 space-y-6">
            <h1 class="text-3xl font-bold text-gray-900">"Diagnostics"</h1>

            <div class="bg-white rounded-lg shadow p-6">
                <dl class="space-y-3">
                    <div class="flex justify-between">
                        <dt class="text-gray-500">"API base URL"</dt>
                        <dd class="font-medium">{base_url}</dd>
                    </div>
                    <div class="flex justify-between">
                        <dt class="text-gray-500">"Session"</dt>
                        <dd class="font-medium">{session_label}</dd>
                    </div>
                    <div class="flex justify-between">
                        <dt class="text-gray-500">"Version"</dt>
                        <dd class="font-medium">{env!("CARGO_PKG_VERSION")}</dd>
                    </div>
                </dl>
            </div>

            <div class="bg-white rounded-lg shadow p-6">
                <h2 class="text-xl font-semibold mb-4">"Code viewer"</h2>
                <CodeViewer code=SAMPLE_CODE language="Python" height="200px"/>
            </div>

            <div class="bg-white rounded-lg shadow p-6">
                <h2 class="text-xl font-semibold mb-4">"Map"</h2>
                <MapWidget latitude=59.913868 longitude=10.752245/>
            </div>
        </div>
    }
}

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="container mx-auto px-4 py-8">
            <h1 class="text-3xl font-bold text-gray-900">"Page not found"</h1>
            <a href=routes::DASHBOARD class="text-indigo-600 hover:underline">"← Back to Dashboard"</a>
        </div>
    }
}
