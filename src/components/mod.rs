//! UI Components
//!
//! Reusable Leptos components for the travel planner.

pub mod expense_log;
pub mod loading;
pub mod map_view;
pub mod nav;
pub mod timeline;
pub mod voice_input;

pub use expense_log::ExpenseLog;
pub use loading::{CardSkeleton, Loading};
pub use map_view::MapView;
pub use nav::Nav;
pub use timeline::ItineraryTimeline;
pub use voice_input::VoiceInput;
