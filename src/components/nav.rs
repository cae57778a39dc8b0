//! Navigation Component
//!
//! Header bar with the brand link.

use leptos::*;
use leptos_router::*;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav class="bg-blue-600 text-white shadow-lg">
            <div class="container mx-auto px-4 py-3">
                <div class="flex items-center justify-between">
                    <A href="/dashboard" class="flex items-center space-x-2 text-xl font-bold">
                        <span>"🧭"</span>
                        <span>"Wayfarer"</span>
                    </A>
                    <div class="text-sm text-blue-100">
                        "Public access - trips are shared by everyone"
                    </div>
                </div>
            </div>
        </nav>
    }
}
