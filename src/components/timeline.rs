//! Itinerary Timeline Component
//!
//! Day-by-day activity cards. Hover and click are reported upward through
//! separate callbacks; the parent owns the resulting selection, so a click
//! stays sticky while hover acts as a preview on top of it.

use leptos::*;

use crate::model::{same_activity, Activity, DailyPlan};

/// Timeline of daily plans with hover/click selection
#[component]
pub fn ItineraryTimeline(
    days: Vec<DailyPlan>,
    #[prop(into)] highlighted: Signal<Option<Activity>>,
    #[prop(into)] on_hover: Callback<Option<Activity>>,
    #[prop(into)] on_select: Callback<Activity>,
) -> impl IntoView {
    view! {
        <div class="space-y-8">
            {days
                .into_iter()
                .map(|day| view! {
                    <DayBlock day=day highlighted=highlighted on_hover=on_hover on_select=on_select />
                })
                .collect_view()}
        </div>
    }
}

/// One day: header plus its activity cards
#[component]
fn DayBlock(
    day: DailyPlan,
    highlighted: Signal<Option<Activity>>,
    on_hover: Callback<Option<Activity>>,
    on_select: Callback<Activity>,
) -> impl IntoView {
    view! {
        <div class="relative">
            // Vertical timeline rule
            <div class="absolute left-4 top-0 bottom-0 w-0.5 bg-blue-200" />

            <div class="relative flex items-center mb-4">
                <div class="absolute left-0 w-8 h-8 bg-blue-500 rounded-full border-4 border-white shadow-lg flex items-center justify-center">
                    <span class="text-white text-sm font-bold">{day.day}</span>
                </div>
                <div class="ml-12">
                    <h3 class="text-xl font-bold text-gray-800">{day.title}</h3>
                    {(!day.summary.is_empty()).then(|| view! {
                        <p class="text-gray-600 text-sm mt-1">{day.summary.clone()}</p>
                    })}
                    {day.daily_budget.map(|budget| view! {
                        <p class="text-green-600 text-sm font-medium mt-1">
                            {format!("Daily budget: ¥{:.0}", budget)}
                        </p>
                    })}
                </div>
            </div>

            <div class="ml-12 space-y-4">
                {day.activities
                    .into_iter()
                    .map(|activity| view! {
                        <ActivityCard activity=activity highlighted=highlighted on_hover=on_hover on_select=on_select />
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

/// A single activity card
#[component]
fn ActivityCard(
    activity: Activity,
    highlighted: Signal<Option<Activity>>,
    on_hover: Callback<Option<Activity>>,
    on_select: Callback<Activity>,
) -> impl IntoView {
    let for_match = activity.clone();
    let is_active = create_memo(move |_| {
        highlighted
            .get()
            .map(|h| same_activity(&h, &for_match))
            .unwrap_or(false)
    });

    let for_enter = activity.clone();
    let for_click = activity.clone();
    let has_coordinate = activity.coordinate().is_some();

    view! {
        <div
            class=move || {
                let base = "bg-white rounded-lg shadow-md p-4 border-l-4 transition-all cursor-pointer hover:bg-blue-50";
                if is_active.get() {
                    format!("{} border-blue-500 shadow-lg", base)
                } else {
                    format!("{} border-gray-300", base)
                }
            }
            on:mouseenter=move |_| on_hover.call(Some(for_enter.clone()))
            on:mouseleave=move |_| on_hover.call(None)
            on:click=move |_| on_select.call(for_click.clone())
        >
            <div class="flex items-start justify-between">
                <div class="flex-1">
                    <div class="flex items-center gap-2 mb-2">
                        <span class="text-blue-600 font-semibold">{activity.time.clone()}</span>
                        <span class="text-gray-800 font-medium">{activity.name.clone()}</span>
                    </div>

                    {activity.description.clone().map(|description| view! {
                        <p class="text-gray-600 text-sm mb-2">{description}</p>
                    })}

                    <p class="text-gray-500 text-sm">"📍 " {activity.location_name.clone()}</p>

                    {activity.estimated_cost.map(|cost| view! {
                        <p class="text-green-600 text-sm font-medium mt-1">
                            {format!("Estimated: ¥{:.2}", cost)}
                        </p>
                    })}
                </div>

                {has_coordinate.then(|| view! {
                    <span class="ml-2 text-green-500" title="Shown on the map">"🗺"</span>
                })}
            </div>
        </div>
    }
}
