//! Trip Detail Page
//!
//! Fetches one trip and renders the itinerary timeline next to the map view,
//! with the expense log underneath. The highlighted activity is lifted state
//! owned here and shared by both children: hover previews on top of the
//! sticky click selection.

use leptos::*;
use leptos_router::{use_params_map, A};

use crate::api;
use crate::components::{ExpenseLog, ItineraryTimeline, Loading, MapView};
use crate::model::{mappable, Activity, Trip};

/// Trip detail page component
#[component]
pub fn TripDetail() -> impl IntoView {
    let params = use_params_map();
    let trip_id = create_memo(move |_| params.with(|p| p.get("id").cloned().unwrap_or_default()));

    let (trip, set_trip) = create_signal(Option::<Trip>::None);
    let (loading, set_loading) = create_signal(true);
    let (error, set_error) = create_signal(Option::<String>::None);

    let (hovered, set_hovered) = create_signal(Option::<Activity>::None);
    let (selected, set_selected) = create_signal(Option::<Activity>::None);
    let highlighted = Signal::derive(move || hovered.get().or_else(|| selected.get()));

    let load_trip = move |id: String| {
        spawn_local(async move {
            match api::fetch_trip(&id).await {
                Ok(fetched) => {
                    set_trip.set(Some(fetched));
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
            set_loading.set(false);
        });
    };

    // Fetch on mount and whenever the route id changes
    create_effect(move |_| {
        load_trip(trip_id.get());
    });

    // All activities across days, in itinerary order
    let activities = create_memo(move |_| {
        trip.get()
            .map(|t| {
                t.daily_plan
                    .iter()
                    .flat_map(|day| day.activities.clone())
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default()
    });
    let expenses = create_memo(move |_| trip.get().map(|t| t.expenses).unwrap_or_default());

    let on_hover: Callback<Option<Activity>> = Callback::from(move |activity| set_hovered.set(activity));
    let on_select: Callback<Activity> = Callback::from(move |activity| set_selected.set(Some(activity)));
    let on_logged: Callback<()> = Callback::from(move |_| load_trip(trip_id.get_untracked()));

    view! {
        <div>
            <div class="mb-6">
                <A
                    href="/dashboard"
                    class="text-blue-600 hover:text-blue-800 mb-2 inline-flex items-center gap-2"
                >
                    "← Back"
                </A>
                <h1 class="text-3xl font-bold text-gray-900">
                    {move || trip.get().map(|t| t.destination)}
                </h1>
                {move || trip.get().and_then(|t| t.budget_analysis).map(|analysis| view! {
                    <p class="text-gray-600 mt-2">{analysis}</p>
                })}
            </div>

            {move || error.get().map(|message| view! {
                <div class="bg-red-100 border border-red-400 text-red-700 px-4 py-3 rounded mb-4">
                    {message}
                </div>
            })}

            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6 mb-8">
                // Itinerary timeline
                <div class="bg-white rounded-lg shadow-md p-6 overflow-y-auto max-h-[800px]">
                    <h2 class="text-xl font-semibold text-gray-800 mb-4">"Itinerary"</h2>
                    {move || {
                        if loading.get() {
                            view! { <Loading /> }.into_view()
                        } else {
                            match trip.get() {
                                Some(t) if !t.daily_plan.is_empty() => view! {
                                    <ItineraryTimeline
                                        days=t.daily_plan
                                        highlighted=highlighted
                                        on_hover=on_hover
                                        on_select=on_select
                                    />
                                }.into_view(),
                                Some(_) => view! {
                                    <p class="text-gray-500">"No itinerary yet"</p>
                                }.into_view(),
                                None => view! {
                                    <p class="text-gray-500">"Trip could not be loaded"</p>
                                }.into_view(),
                            }
                        }
                    }}
                </div>

                // Map
                <div class="bg-white rounded-lg shadow-md p-6">
                    <h2 class="text-xl font-semibold text-gray-800 mb-4">"Map"</h2>
                    {move || {
                        if loading.get() {
                            view! { <Loading /> }.into_view()
                        } else if mappable(&activities.get()).is_empty() {
                            view! {
                                <div class="flex items-center justify-center h-[500px] bg-gray-100 rounded-lg">
                                    <p class="text-gray-500">
                                        "No activities with location data to show"
                                    </p>
                                </div>
                            }.into_view()
                        } else {
                            view! {
                                <MapView
                                    activities=activities
                                    highlighted=highlighted
                                    on_select=on_select
                                />
                            }.into_view()
                        }
                    }}
                </div>
            </div>

            // Expenses
            <div class="bg-white rounded-lg shadow-md p-6">
                <h2 class="text-xl font-semibold text-gray-800 mb-4">"Expenses"</h2>
                <ExpenseLog trip_id=trip_id expenses=expenses on_logged=on_logged />
            </div>
        </div>
    }
}
