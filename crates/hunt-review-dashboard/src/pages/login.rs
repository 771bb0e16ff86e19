//! Login page

use crate::app::Api;
use hunt_review_core::auth::{self, LOGIN_FALLBACK_MESSAGE};
use hunt_review_core::models::Credentials;
use hunt_review_core::routes;
use leptos::*;
use leptos_router::*;

#[component]
pub fn LoginPage() -> impl IntoView {
    let api = expect_context::<Api>();
    let navigate = use_navigate();

    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (error, set_error) = create_signal(None::<String>);
    let (pending, set_pending) = create_signal(false);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }

        let credentials = Credentials {
            email: email.get_untracked(),
            password: password.get_untracked(),
        };
        let api = api.clone();
        let navigate = navigate.clone();

        set_pending.set(true);
        set_error.set(None);
        spawn_local(async move {
            match auth::login(&*api, api.session(), &credentials).await {
                Ok(_) => navigate(routes::DASHBOARD, Default::default()),
                Err(e) => set_error.set(Some(e.user_message(LOGIN_FALLBACK_MESSAGE))),
            }
            set_pending.set(false);
        });
    };

    view! {
        <div class="min-h-screen flex items-center justify-center">
            <form class="bg-white rounded-lg shadow p-8 w-full max-w-md space-y-4" on:submit=on_submit>
                <h1 class="text-2xl font-bold text-gray-900">"Reviewer Login"</h1>

                {move || error.get().map(|message| view! {
                    <div class="p-3 text-sm text-white bg-red-600 rounded">{message}</div>
                })}

                <div>
                    <label class="block text-sm font-medium text-gray-700">"Email"</label>
                    <input
                        type="email"
                        required=true
                        class="mt-1 block w-full px-3 py-2 border rounded-md"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                </div>
                <div>
                    <label class="block text-sm font-medium text-gray-700">"Password"</label>
                    <input
                        type="password"
                        required=true
                        class="mt-1 block w-full px-3 py-2 border rounded-md"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                </div>

                <button
                    type="submit"
                    class="w-full bg-indigo-600 text-white px-4 py-2 rounded-lg hover:bg-indigo-700 disabled:opacity-50"
                    disabled=move || pending.get()
                >
                    {move || if pending.get() { "Signing in..." } else { "Sign in" }}
                </button>
            </form>
        </div>
    }
}
