//! Hunt card component

use hunt_review_core::{routes, Hunt, HuntId};
use leptos::*;
use leptos_router::*;

/// Summary card for the dashboard columns.
///
/// Only the explicit details button navigates; clicking the card does not.
#[component]
pub fn HuntCard(hunt: Hunt, show_details: bool, on_assign: Callback<HuntId>) -> impl IntoView {
    let navigate = use_navigate();
    let unassigned = hunt.is_unassigned();
    let reviewer = hunt.reviewer_label();
    let location = hunt.location.map(|l| l.label());
    let Hunt {
        id: hunt_id,
        title,
        status,
        description,
        ..
    } = hunt;

    view! {
        <div class="bg-white rounded-lg shadow p-4 mb-4 hover:shadow-md transition-shadow relative">
            {unassigned.then(|| view! {
                <div class="absolute right-0 top-0 mt-2 mr-2">
                    <button
                        class="bg-indigo-600 text-white text-sm px-3 py-1 rounded-lg hover:bg-indigo-700"
                        on:click=move |_| on_assign.call(hunt_id)
                    >
                        "Assign me"
                    </button>
                </div>
            })}

            <h3 class="font-medium text-gray-900 pr-24">{title}</h3>
            <div class="mt-1 text-sm text-gray-500">
                <p>"Status: " {status}</p>
                <p>{reviewer}</p>
            </div>

            <p class="mt-3 text-sm text-gray-600 line-clamp-2">{description}</p>
            {location.map(|label| view! {
                <p class="text-xs text-gray-500 mt-2">"Location: " {label}</p>
            })}

            {show_details.then(|| view! {
                <button
                    class="mt-4 w-full border border-gray-300 rounded-lg py-2 font-bold hover:bg-gray-50"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        navigate(&routes::hunt_detail(hunt_id), Default::default());
                    }
                >
                    "REVIEW DETAILS"
                </button>
            })}
        </div>
    }
}
