//! Dashboard Page
//!
//! Prompt submission for generating a new trip, plus the list of existing
//! trips.

use leptos::*;
use leptos_router::use_navigate;

use crate::api;
use crate::components::{CardSkeleton, VoiceInput};
use crate::model::{format_date, TripSummary};

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let (prompt, set_prompt) = create_signal(String::new());
    let (generating, set_generating) = create_signal(false);
    let (trips, set_trips) = create_signal(Vec::<TripSummary>::new());
    let (trips_loading, set_trips_loading) = create_signal(true);
    let (error, set_error) = create_signal(Option::<String>::None);

    // Fetch the trip list on mount
    create_effect(move |_| {
        spawn_local(async move {
            match api::fetch_trips().await {
                Ok(list) => set_trips.set(list),
                Err(e) => log::error!("failed to load trips: {}", e),
            }
            set_trips_loading.set(false);
        });
    });

    let navigate = use_navigate();
    let generate = move |_| {
        let text = prompt.get();
        if text.trim().is_empty() {
            set_error.set(Some("Describe your trip first".to_string()));
            return;
        }

        set_generating.set(true);
        set_error.set(None);

        let navigate = navigate.clone();
        spawn_local(async move {
            match api::plan_trip(&text).await {
                Ok(trip_id) => {
                    navigate(&format!("/trip/{}", trip_id), Default::default());
                }
                Err(e) => {
                    // Prompt is preserved; retry is manual.
                    set_error.set(Some(e));
                    set_generating.set(false);
                }
            }
        });
    };

    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold text-gray-900">"AI Trip Planner"</h1>
                <p class="text-gray-600 mt-2">
                    "Describe where you want to go and a full itinerary is generated for you."
                </p>
            </div>

            // Prompt entry
            <section class="bg-white rounded-lg shadow-md p-6">
                <h2 class="text-xl font-semibold text-gray-800 mb-4">"Plan a new trip"</h2>
                <div class="space-y-4">
                    <div class="flex gap-4">
                        <textarea
                            placeholder="e.g. Japan for 5 days, budget 10000, I love food and anime"
                            prop:value=move || prompt.get()
                            on:input=move |ev| set_prompt.set(event_target_value(&ev))
                            class="flex-1 min-h-[120px] px-4 py-3 border border-gray-300 rounded-lg resize-none
                                   focus:outline-none focus:ring-2 focus:ring-blue-500 focus:border-transparent"
                        />
                        <div class="flex items-start">
                            <VoiceInput
                                on_transcript=move |text: String| set_prompt.update(|p| p.push_str(&text))
                                disabled=generating
                            />
                        </div>
                    </div>

                    {move || error.get().map(|message| view! {
                        <div class="bg-red-100 border border-red-400 text-red-700 px-4 py-3 rounded">
                            {message}
                        </div>
                    })}

                    <button
                        on:click=generate
                        disabled=move || generating.get() || prompt.get().trim().is_empty()
                        class="w-full py-3 px-4 bg-blue-600 text-white rounded-lg hover:bg-blue-700
                               disabled:bg-gray-400 disabled:cursor-not-allowed transition-colors
                               flex items-center justify-center space-x-2"
                    >
                        {move || if generating.get() {
                            view! {
                                <div class="loading-spinner w-5 h-5" />
                                <span>"Generating itinerary..."</span>
                            }.into_view()
                        } else {
                            view! { <span>"Generate trip"</span> }.into_view()
                        }}
                    </button>
                </div>
            </section>

            // Existing trips
            <section class="bg-white rounded-lg shadow-md p-6">
                <h2 class="text-xl font-semibold text-gray-800 mb-4">"All trips"</h2>
                {move || {
                    if trips_loading.get() {
                        view! {
                            <div class="grid gap-4 md:grid-cols-2 lg:grid-cols-3">
                                <CardSkeleton />
                                <CardSkeleton />
                                <CardSkeleton />
                            </div>
                        }.into_view()
                    } else {
                        let list = trips.get();
                        if list.is_empty() {
                            view! {
                                <p class="text-gray-500 text-center py-8">
                                    "No trips yet. Plan one to get started!"
                                </p>
                            }.into_view()
                        } else {
                            view! {
                                <div class="grid gap-4 md:grid-cols-2 lg:grid-cols-3">
                                    {list.into_iter().map(|trip| view! {
                                        <TripCard trip=trip />
                                    }).collect_view()}
                                </div>
                            }.into_view()
                        }
                    }
                }}
            </section>
        </div>
    }
}

/// One entry of the trip list
#[component]
fn TripCard(trip: TripSummary) -> impl IntoView {
    use leptos_router::A;

    view! {
        <A
            href=format!("/trip/{}", trip.id)
            class="block border border-gray-200 rounded-lg p-4 hover:shadow-lg transition-shadow"
        >
            <h3 class="text-lg font-semibold text-gray-800 mb-2">{trip.destination.clone()}</h3>
            <div class="text-sm text-gray-600 space-y-1">
                {match (trip.start_date.clone(), trip.end_date.clone()) {
                    (Some(start), Some(end)) => Some(view! {
                        <p>{format!("{} - {}", start, end)}</p>
                    }),
                    _ => None,
                }}
                {trip.budget.map(|budget| view! {
                    <p>{format!("Budget: ¥{:.0}", budget)}</p>
                })}
                <p class="text-gray-400">{format_date(&trip.created_at)}</p>
            </div>
        </A>
    }
}
