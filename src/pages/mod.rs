//! Pages
//!
//! Top-level page components for each route.

pub mod dashboard;
pub mod trip_detail;

pub use dashboard::Dashboard;
pub use trip_detail::TripDetail;
