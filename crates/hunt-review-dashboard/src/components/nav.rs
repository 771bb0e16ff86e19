//! Navigation header

use crate::app::Session;
use hunt_review_core::routes;
use leptos::*;
use leptos_router::*;

#[component]
pub fn Nav() -> impl IntoView {
    let session = expect_context::<Session>();
    let navigate = use_navigate();
    let (menu_open, set_menu_open) = create_signal(false);

    let logout = move |_: ev::MouseEvent| {
        if let Err(e) = session.logout() {
            tracing::error!("Logout error: {}", e);
        }
        set_menu_open.set(false);
        navigate(routes::LOGIN, Default::default());
    };
    let logout_mobile = logout.clone();

    view! {
        <header class="bg-indigo-700 text-white shadow">
            <div class="container mx-auto px-4">
                <div class="flex justify-between items-center h-20">
                    <a href=routes::DASHBOARD class="flex items-center space-x-3">
                        <img src="/logo.png" alt="Website logo" class="h-12 w-auto"/>
                        <span class="text-2xl font-medium">"Reviewer Dashboard"</span>
                    </a>

                    // Desktop
                    <nav class="hidden lg:flex items-center">
                        <button
                            class="px-4 py-2 text-sm font-medium rounded-md hover:bg-indigo-600"
                            on:click=logout
                        >
                            "Logout"
                        </button>
                    </nav>

                    // Mobile menu button
                    <button
                        class="lg:hidden p-2 rounded-md hover:bg-indigo-600"
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        <span class="sr-only">"Toggle navigation menu"</span>
                        <svg class="h-6 w-6" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 6h16M4 12h16M4 18h16"/>
                        </svg>
                    </button>
                </div>
            </div>

            <Show when=move || menu_open.get()>
                <div class="lg:hidden border-t border-indigo-600 px-4 py-4">
                    <button
                        class="block w-full text-left py-2 text-lg font-semibold"
                        on:click=logout_mobile.clone()
                    >
                        "Logout"
                    </button>
                </div>
            </Show>
        </header>
    }
}
