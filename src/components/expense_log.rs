//! Expense Log Component
//!
//! Free-text expense form plus the list of recorded expenses. The backend
//! parses the amount and category out of the description; the client only
//! checks that the input is non-empty.

use leptos::*;

use crate::api;
use crate::components::VoiceInput;
use crate::model::{format_date, Expense};

/// Expense entry form and list for one trip
#[component]
pub fn ExpenseLog(
    #[prop(into)] trip_id: Signal<String>,
    #[prop(into)] expenses: Signal<Vec<Expense>>,
    #[prop(into)] on_logged: Callback<()>,
) -> impl IntoView {
    let (description, set_description) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);
    let (error, set_error) = create_signal(Option::<String>::None);
    let (logged, set_logged) = create_signal(Option::<String>::None);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let text = description.get();
        if text.trim().is_empty() {
            return;
        }
        let id = trip_id.get();

        set_submitting.set(true);
        set_error.set(None);

        spawn_local(async move {
            match api::log_expense(&id, &text).await {
                Ok(expense) => {
                    set_description.set(String::new());
                    set_logged.set(Some(format!("Recorded ¥{:.2}", expense.amount)));
                    gloo_timers::callback::Timeout::new(3000, move || {
                        set_logged.set(None);
                    })
                    .forget();
                    on_logged.call(());
                }
                Err(e) => {
                    // Input stays put for a manual retry.
                    set_error.set(Some(e));
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div>
            <form on:submit=on_submit class="flex gap-4 mb-4">
                <div class="flex-1 flex gap-2">
                    <input
                        type="text"
                        placeholder="e.g. Ramen 50"
                        prop:value=move || description.get()
                        on:input=move |ev| set_description.set(event_target_value(&ev))
                        class="flex-1 px-4 py-2 border border-gray-300 rounded-lg
                               focus:outline-none focus:ring-2 focus:ring-blue-500 focus:border-transparent"
                    />
                    <VoiceInput
                        on_transcript=move |text: String| set_description.update(|d| d.push_str(&text))
                        disabled=submitting
                    />
                </div>
                <button
                    type="submit"
                    disabled=move || submitting.get() || description.get().trim().is_empty()
                    class="px-6 py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700
                           disabled:bg-gray-400 disabled:cursor-not-allowed transition-colors"
                >
                    {move || if submitting.get() { "Recording..." } else { "Log it" }}
                </button>
            </form>

            {move || error.get().map(|message| view! {
                <div class="bg-red-100 border border-red-400 text-red-700 px-4 py-3 rounded mb-4">
                    {message}
                </div>
            })}

            {move || logged.get().map(|message| view! {
                <div class="bg-green-100 border border-green-400 text-green-700 px-4 py-3 rounded mb-4">
                    {message}
                </div>
            })}

            <div class="mt-4">
                {move || {
                    let items = expenses.get();
                    if items.is_empty() {
                        view! {
                            <p class="text-gray-500 text-center py-4">"No expenses recorded yet"</p>
                        }.into_view()
                    } else {
                        items.into_iter().map(|expense| view! {
                            <ExpenseRow expense=expense />
                        }).collect_view()
                    }
                }}
            </div>
        </div>
    }
}

/// One recorded expense
#[component]
fn ExpenseRow(expense: Expense) -> impl IntoView {
    view! {
        <div class="flex items-center justify-between p-3 bg-gray-50 rounded-lg mb-2">
            <div>
                <p class="font-medium text-gray-800">{expense.description.clone()}</p>
                {expense.category.clone().map(|category| view! {
                    <p class="text-sm text-gray-500">{category}</p>
                })}
            </div>
            <div class="text-right">
                <p class="font-semibold text-gray-900">{format!("¥{:.2}", expense.amount)}</p>
                <p class="text-xs text-gray-400">{format_date(&expense.created_at)}</p>
            </div>
        </div>
    }
}
