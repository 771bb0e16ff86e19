//! Reviewer dashboard: available and assigned hunts side by side

use crate::app::Api;
use crate::browser::alert;
use crate::components::HuntCard;
use hunt_review_core::assignment::{toggle_assignment, AssignmentOutcome, REJECTED_MESSAGE};
use hunt_review_core::dashboard::{load_dashboard, DashboardData, FETCH_FAILED_MESSAGE};
use hunt_review_core::{FetchGeneration, Hunt, HuntId, LoadState};
use leptos::*;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Column {
    Available,
    Assigned,
}

impl Column {
    fn title(&self) -> &'static str {
        match self {
            Column::Available => "Available",
            Column::Assigned => "Assigned",
        }
    }

    fn hunts(self, data: &DashboardData) -> &[Hunt] {
        match self {
            Column::Available => &data.available,
            Column::Assigned => &data.assigned,
        }
    }

    fn empty_message(&self) -> &'static str {
        match self {
            Column::Available => "No available hunts found.",
            Column::Assigned => "No assigned hunts found.",
        }
    }

    /// Only assigned hunts can be opened for review
    fn show_details(&self) -> bool {
        matches!(self, Column::Assigned)
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let api = expect_context::<Api>();
    let state = create_rw_signal(LoadState::<DashboardData>::Loading);
    let generation = FetchGeneration::new();

    let reload: Rc<dyn Fn()> = {
        let api = api.clone();
        let generation = generation.clone();
        Rc::new(move || {
            let ticket = generation.begin();
            state.set(LoadState::Loading);

            let api = api.clone();
            spawn_local(async move {
                let result = load_dashboard(&*api).await;
                if let Some(result) = ticket.accept(result) {
                    state.set(LoadState::from_result(result, FETCH_FAILED_MESSAGE));
                }
            });
        })
    };

    // A successful toggle re-runs the whole cycle instead of patching lists
    let on_assign = Callback::new({
        let reload = Rc::clone(&reload);
        let generation = generation.clone();
        move |hunt_id: HuntId| {
            let api = api.clone();
            let reload = Rc::clone(&reload);
            let generation = generation.clone();
            spawn_local(async move {
                let outcome = toggle_assignment(&*api, hunt_id).await;
                if !generation.is_open() {
                    return;
                }
                match outcome {
                    Ok(AssignmentOutcome::Toggled) => reload(),
                    Ok(AssignmentOutcome::Rejected { .. }) => alert(REJECTED_MESSAGE),
                    Err(e) => {
                        tracing::error!(hunt_id, "Error assigning hunt: {}", e);
                        alert(&e.user_message(REJECTED_MESSAGE));
                    }
                }
            });
        }
    });

    reload();
    on_cleanup(move || generation.close());

    view! {
        <div class="container mx-auto px-4 py-8">
            {move || state.with(|s| s.error().map(|message| {
                let message = message.to_string();
                view! {
                    <div class="mb-6 p-4 text-white bg-red-600 rounded-lg">{message}</div>
                }
            }))}

            <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
                <HuntColumn column=Column::Available state=state on_assign=on_assign/>
                <HuntColumn column=Column::Assigned state=state on_assign=on_assign/>
            </div>
        </div>
    }
}

#[component]
fn HuntColumn(
    column: Column,
    state: RwSignal<LoadState<DashboardData>>,
    on_assign: Callback<HuntId>,
) -> impl IntoView {
    let body = move || {
        state.with(|s| match s {
            LoadState::Loading => view! {
                <p class="text-gray-500">"Loading hunts..."</p>
            }
            .into_view(),
            // the page-level banner carries the message
            LoadState::Failed(_) => ().into_view(),
            LoadState::Loaded(data) => {
                let hunts = column.hunts(data);
                if hunts.is_empty() {
                    view! { <p class="text-gray-500">{column.empty_message()}</p> }.into_view()
                } else {
                    hunts
                        .iter()
                        .cloned()
                        .map(|hunt| view! {
                            <HuntCard hunt=hunt show_details=column.show_details() on_assign=on_assign/>
                        })
                        .collect_view()
                }
            }
        })
    };

    view! {
        <section>
            <h2 class="text-2xl font-bold text-gray-900 mb-4">{column.title()}</h2>
            <div class="bg-gray-50 rounded-lg p-4 min-h-[200px]">{body}</div>
        </section>
    }
}
