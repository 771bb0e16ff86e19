//! Hunt review page: header, challenges and the comment thread

use crate::app::Api;
use crate::browser::alert;
use crate::components::{CodeViewer, MapWidget};
use hunt_review_core::assignment::{
    toggle_assignment, AssignmentAction, AssignmentOutcome, FollowUp, REJECTED_MESSAGE,
};
use hunt_review_core::hunt_detail::{
    load_hunt_detail, resolve_comment, submit_comment, CommentThread, HuntDetail,
    FETCH_FAILED_MESSAGE, NOT_FOUND_MESSAGE,
};
use hunt_review_core::models::{Challenge, TestCase};
use hunt_review_core::{routes, FetchGeneration, Hunt, HuntId, LoadState, User};
use leptos::*;
use leptos_router::*;
use std::rc::Rc;

#[component]
pub fn HuntDetailPage() -> impl IntoView {
    let api = expect_context::<Api>();
    let navigate = use_navigate();
    let params = use_params_map();

    let hunt_id = create_memo(move |_| {
        params.with(|p| {
            p.get(routes::HUNT_ID_PARAM)
                .and_then(|raw| routes::parse_hunt_id(raw))
        })
    });

    let detail = create_rw_signal(LoadState::<HuntDetail>::Loading);
    let comments = create_rw_signal(CommentThread::default());
    let draft = create_rw_signal(String::new());
    let generation = FetchGeneration::new();

    let load: Rc<dyn Fn(HuntId)> = {
        let api = api.clone();
        let generation = generation.clone();
        Rc::new(move |id| {
            let ticket = generation.begin();
            detail.set(LoadState::Loading);

            let api = api.clone();
            spawn_local(async move {
                let result = load_hunt_detail(&*api, id).await;
                let Some(result) = ticket.accept(result) else {
                    return;
                };

                // the thread lives in its own signal so comment edits
                // do not re-render the rest of the page
                let mut state = LoadState::from_result(result, FETCH_FAILED_MESSAGE);
                let thread = state
                    .loaded_mut()
                    .map(|d| std::mem::take(&mut d.comments))
                    .unwrap_or_default();
                comments.set(thread);
                detail.set(state);
            });
        })
    };

    create_effect({
        let load = Rc::clone(&load);
        let generation = generation.clone();
        move |_| match hunt_id.get() {
            Some(id) => load(id),
            None => {
                generation.begin();
                detail.set(LoadState::Failed(NOT_FOUND_MESSAGE.to_string()));
            }
        }
    });

    let on_toggle = Callback::new({
        let api = api.clone();
        let generation = generation.clone();
        let navigate = navigate.clone();
        move |(hunt_id, action): (HuntId, AssignmentAction)| {
            let api = api.clone();
            let load = Rc::clone(&load);
            let generation = generation.clone();
            let navigate = navigate.clone();
            spawn_local(async move {
                let outcome = toggle_assignment(&*api, hunt_id).await;
                if !generation.is_open() {
                    return;
                }
                match outcome {
                    Ok(AssignmentOutcome::Toggled) => match action.follow_up() {
                        FollowUp::Reload => load(hunt_id),
                        FollowUp::ReturnToDashboard => {
                            navigate(routes::DASHBOARD, Default::default())
                        }
                    },
                    Ok(AssignmentOutcome::Rejected { .. }) => alert(REJECTED_MESSAGE),
                    Err(e) => {
                        tracing::error!(hunt_id, "Error toggling assignment: {}", e);
                        alert(&e.user_message(REJECTED_MESSAGE));
                    }
                }
            });
        }
    });

    let on_submit = Callback::new({
        let api = api.clone();
        let generation = generation.clone();
        move |hunt_id: HuntId| {
            let text = draft.get_untracked();
            let ticket = generation.ticket();
            let api = api.clone();
            spawn_local(async move {
                // failures are logged by submit_comment and otherwise ignored
                if let Ok(Some(comment)) = submit_comment(&*api, hunt_id, &text).await {
                    if ticket.is_current() {
                        comments.update(|thread| thread.append(comment));
                        draft.set(String::new());
                    }
                }
            });
        }
    });

    let on_resolve = Callback::new({
        let generation = generation.clone();
        move |comment_id: i64| {
            let ticket = generation.ticket();
            let api = api.clone();
            spawn_local(async move {
                if resolve_comment(&*api, comment_id).await.is_ok() && ticket.is_current() {
                    comments.update(|thread| {
                        thread.resolve(comment_id);
                    });
                }
            });
        }
    });

    on_cleanup(move || generation.close());

    let back = move |_: ev::MouseEvent| navigate(routes::DASHBOARD, Default::default());

    view! {
        <div class="container mx-auto px-4 py-8">
            {move || detail.with(|state| match state {
                LoadState::Loading => view! {
                    <p class="text-gray-500">"Loading hunt details..."</p>
                }
                .into_view(),
                LoadState::Failed(message) => {
                    let message = message.clone();
                    let back = back.clone();
                    view! {
                        <div class="space-y-4">
                            <div class="p-4 text-white bg-red-600 rounded-lg">{message}</div>
                            <button
                                class="bg-indigo-600 text-white px-4 py-2 rounded-lg hover:bg-indigo-700"
                                on:click=back
                            >
                                "Back to Dashboard"
                            </button>
                        </div>
                    }
                    .into_view()
                }
                LoadState::Loaded(d) => {
                    let hunt_id = d.hunt.id;
                    view! {
                        <div class="space-y-8">
                            <HuntHeader hunt=d.hunt.clone() organizer=d.organizer.clone() on_toggle=on_toggle/>
                            <ChallengeList challenges=d.challenges.clone()/>
                            <CommentSection
                                hunt_id=hunt_id
                                comments=comments
                                draft=draft
                                on_submit=on_submit
                                on_resolve=on_resolve
                            />
                        </div>
                    }
                    .into_view()
                }
            })}
        </div>
    }
}

#[component]
fn HuntHeader(
    hunt: Hunt,
    organizer: User,
    on_toggle: Callback<(HuntId, AssignmentAction)>,
) -> impl IntoView {
    let api = expect_context::<Api>();
    let navigate = use_navigate();

    let action = AssignmentAction::for_hunt(&hunt);
    let background = api.background_image_url(hunt.id);
    let dates = (hunt.start_label().to_string(), hunt.end_label().to_string());
    let Hunt {
        id: hunt_id,
        title,
        description,
        status,
        location,
        ..
    } = hunt;

    view! {
        <div class="bg-white rounded-lg shadow overflow-hidden">
            <div class="relative h-48 bg-gray-200">
                <img src=background alt="" class="w-full h-full object-cover"/>
                <div class="absolute top-0 left-0 right-0 flex justify-between p-4">
                    <button
                        class="bg-white text-gray-800 px-4 py-2 rounded-lg shadow hover:bg-gray-50"
                        on:click=move |_| navigate(routes::DASHBOARD, Default::default())
                    >
                        "← Back"
                    </button>
                    <button
                        class="bg-indigo-600 text-white px-4 py-2 rounded-lg shadow hover:bg-indigo-700"
                        on:click=move |_| on_toggle.call((hunt_id, action))
                    >
                        {action.label()}
                    </button>
                </div>
            </div>

            <div class="p-6 space-y-4">
                <div>
                    <h1 class="text-3xl font-bold text-gray-900">{title}</h1>
                    <p class="text-sm text-gray-500 mt-1">"Status: " {status}</p>
                </div>
                <p class="text-gray-700">{description}</p>

                <dl class="grid grid-cols-1 md:grid-cols-2 gap-3 text-sm">
                    <div class="flex justify-between">
                        <dt class="text-gray-500">"Organizer"</dt>
                        <dd class="font-medium">{organizer.email}</dd>
                    </div>
                    <div class="flex justify-between">
                        <dt class="text-gray-500">"Hunt ID"</dt>
                        <dd class="font-medium">{hunt_id}</dd>
                    </div>
                    <div class="flex justify-between">
                        <dt class="text-gray-500">"Start"</dt>
                        <dd class="font-medium">{dates.0}</dd>
                    </div>
                    <div class="flex justify-between">
                        <dt class="text-gray-500">"End"</dt>
                        <dd class="font-medium">{dates.1}</dd>
                    </div>
                </dl>

                {location.map(|l| view! {
                    <div>
                        <p class="text-sm text-gray-500">"Location: " {l.label()}</p>
                        <MapWidget latitude=l.latitude longitude=l.longitude/>
                    </div>
                })}
            </div>
        </div>
    }
}

#[component]
fn ChallengeList(challenges: Vec<Challenge>) -> impl IntoView {
    view! {
        <section>
            <h2 class="text-2xl font-bold text-gray-900 mb-4">"Challenges"</h2>
            {if challenges.is_empty() {
                view! { <p class="text-gray-500">"No challenges found for this hunt."</p> }.into_view()
            } else {
                challenges
                    .into_iter()
                    .map(|challenge| view! { <ChallengeCard challenge=challenge/> })
                    .collect_view()
            }}
        </section>
    }
}

#[component]
fn ChallengeCard(challenge: Challenge) -> impl IntoView {
    let summary = challenge.summary();
    let Challenge {
        title,
        description,
        external_game_uri,
        test_cases,
        optimal_solutions,
        challenge_codes,
        ..
    } = challenge;

    let code_blocks = challenge_codes
        .into_iter()
        .map(|c| (c.language, c.code))
        .collect::<Vec<_>>();
    let solution_blocks = optimal_solutions
        .into_iter()
        .map(|s| (s.language, s.code))
        .collect::<Vec<_>>();

    view! {
        <div class="bg-white rounded-lg shadow p-6 mb-6 space-y-4">
            <div>
                <h3 class="text-xl font-semibold">{title}</h3>
                <p class="text-sm text-gray-500">{summary}</p>
            </div>
            <p class="text-gray-700">{description}</p>

            {external_game_uri.map(|uri| view! {
                <a href=uri target="_blank" rel="noopener noreferrer" class="text-indigo-600 hover:underline">
                    "Open external game"
                </a>
            })}

            {(!test_cases.is_empty()).then(|| view! { <TestCaseGrid test_cases=test_cases/> })}
            <CodeBlocks title="Challenge Code" blocks=code_blocks/>
            <CodeBlocks title="Optimal Solutions" blocks=solution_blocks/>
        </div>
    }
}

/// Test cases in the order the backend sent them
#[component]
fn TestCaseGrid(test_cases: Vec<TestCase>) -> impl IntoView {
    view! {
        <div>
            <h4 class="font-medium mb-2">"Test Cases"</h4>
            <div class="grid grid-cols-1 md:grid-cols-3 gap-3">
                {test_cases.into_iter().map(|case| view! {
                    <div class="border rounded-lg p-3 text-sm font-mono">
                        <p>"Input: " {case.input}</p>
                        <p>"Expected Output: " {case.expected_output}</p>
                        <p>"Order: " {case.order}</p>
                    </div>
                }).collect_view()}
            </div>
        </div>
    }
}

#[component]
fn CodeBlocks(title: &'static str, blocks: Vec<(String, String)>) -> impl IntoView {
    (!blocks.is_empty()).then(|| {
        view! {
            <div class="space-y-3">
                <h4 class="font-medium">{title}</h4>
                {blocks.into_iter().map(|(language, code)| {
                    let label = format!("Language: {}", language);
                    view! {
                        <div>
                            <p class="text-xs text-gray-500 mb-1">{label}</p>
                            <CodeViewer code=code language=language height="500px"/>
                        </div>
                    }
                }).collect_view()}
            </div>
        }
    })
}

#[component]
fn CommentSection(
    hunt_id: HuntId,
    comments: RwSignal<CommentThread>,
    draft: RwSignal<String>,
    on_submit: Callback<HuntId>,
    on_resolve: Callback<i64>,
) -> impl IntoView {
    let submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        on_submit.call(hunt_id);
    };

    view! {
        <section class="bg-white rounded-lg shadow p-6 space-y-4">
            <form class="space-y-2" on:submit=submit>
                <textarea
                    class="w-full border rounded-lg p-3"
                    rows="4"
                    placeholder="Leave a comment for the organizer"
                    prop:value=move || draft.get()
                    on:input=move |ev| draft.set(event_target_value(&ev))
                ></textarea>
                <button
                    type="submit"
                    class="bg-indigo-600 text-white px-4 py-2 rounded-lg hover:bg-indigo-700"
                >
                    "Submit Comment"
                </button>
            </form>

            <h2 class="text-2xl font-bold text-gray-900">"Comments"</h2>
            {move || comments.with(|thread| {
                if thread.is_empty() {
                    view! { <p class="text-gray-500">"No comments yet."</p> }.into_view()
                } else {
                    thread.comments().iter().cloned().map(|comment| {
                        let id = comment.id;
                        view! {
                            <div class="flex justify-between items-start border-b py-3">
                                <p class="text-gray-700">{comment.content}</p>
                                <button
                                    class="text-sm text-indigo-600 hover:underline ml-4"
                                    on:click=move |_| on_resolve.call(id)
                                >
                                    "Resolve"
                                </button>
                            </div>
                        }
                    }).collect_view()
                }
            })}
        </section>
    }
}
