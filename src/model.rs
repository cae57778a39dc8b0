//! Trip Data Model
//!
//! Shared types for trips, daily plans, activities, and expenses, plus the
//! pure selection logic the timeline and map both rely on. Field names follow
//! the backend JSON.

use serde::{Deserialize, Serialize};

/// One entry of the `GET /trips` listing
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct TripSummary {
    pub id: String,
    pub destination: String,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub budget: Option<f64>,
    pub created_at: String,
}

/// Full trip as returned by `GET /trips/:id`
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Trip {
    pub id: String,
    pub destination: String,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub budget: Option<f64>,
    #[serde(default)]
    pub budget_analysis: Option<String>,
    pub created_at: String,
    #[serde(default)]
    pub daily_plan: Vec<DailyPlan>,
    #[serde(default)]
    pub expenses: Vec<Expense>,
}

/// One day of the itinerary
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct DailyPlan {
    pub day: u32,
    pub title: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub daily_budget: Option<f64>,
    #[serde(default)]
    pub activities: Vec<Activity>,
}

/// A single scheduled item within a day, optionally geo-located
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Activity {
    #[serde(default)]
    pub id: Option<String>,
    pub time: String,
    #[serde(rename = "activity")]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub location_name: String,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lng: Option<f64>,
    #[serde(default)]
    pub estimated_cost: Option<f64>,
}

/// An expense parsed server-side from a free-text description
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Expense {
    pub id: String,
    pub description: String,
    #[serde(default)]
    pub category: Option<String>,
    pub amount: f64,
    pub created_at: String,
}

impl Activity {
    /// The activity's position, if both coordinates are present and finite.
    pub fn coordinate(&self) -> Option<(f64, f64)> {
        match (self.lat, self.lng) {
            (Some(lat), Some(lng)) if lat.is_finite() && lng.is_finite() => Some((lat, lng)),
            _ => None,
        }
    }
}

/// Activities that can be placed on the map. Anything without a usable
/// coordinate is dropped silently, never reported as an error.
pub fn mappable(activities: &[Activity]) -> Vec<Activity> {
    activities
        .iter()
        .filter(|a| a.coordinate().is_some())
        .cloned()
        .collect()
}

/// Whether two activity values refer to the same scheduled item.
///
/// Stable ids win when both sides carry one. Otherwise fall back to exact
/// coordinate plus location-name equality, which requires a usable coordinate
/// on both sides.
pub fn same_activity(a: &Activity, b: &Activity) -> bool {
    if let (Some(x), Some(y)) = (&a.id, &b.id) {
        return x == y;
    }
    a.coordinate().is_some()
        && a.coordinate() == b.coordinate()
        && a.location_name == b.location_name
}

/// Render an RFC 3339 timestamp as a short human date, falling back to the
/// raw string when the backend sends something unexpected.
pub fn format_date(raw: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.format("%b %d, %Y").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn activity(id: Option<&str>, lat: Option<f64>, lng: Option<f64>, location: &str) -> Activity {
        Activity {
            id: id.map(str::to_string),
            time: "09:00".to_string(),
            name: "Visit".to_string(),
            description: None,
            location_name: location.to_string(),
            lat,
            lng,
            estimated_cost: None,
        }
    }

    #[test]
    fn mappable_keeps_only_finite_coordinates() {
        let activities = vec![
            activity(Some("1"), Some(35.0), Some(139.0), "Tokyo Tower"),
            activity(Some("2"), None, None, "Unknown"),
            activity(Some("3"), Some(f64::NAN), Some(139.0), "Bad"),
            activity(Some("4"), Some(35.0), None, "Half"),
        ];

        let on_map = mappable(&activities);
        assert_eq!(on_map.len(), 1);
        assert_eq!(on_map[0].id.as_deref(), Some("1"));
    }

    #[test]
    fn same_activity_prefers_stable_ids() {
        // Same id, different coordinates: still the same item.
        let a = activity(Some("7"), Some(35.0), Some(139.0), "Shrine");
        let b = activity(Some("7"), Some(36.0), Some(140.0), "Shrine (moved)");
        assert!(same_activity(&a, &b));

        let c = activity(Some("8"), Some(35.0), Some(139.0), "Shrine");
        assert!(!same_activity(&a, &c));
    }

    #[test]
    fn same_activity_falls_back_to_coordinate_and_name() {
        let a = activity(None, Some(35.0), Some(139.0), "Shrine");
        let b = activity(None, Some(35.0), Some(139.0), "Shrine");
        let other_name = activity(None, Some(35.0), Some(139.0), "Temple");
        let no_coords = activity(None, None, None, "Shrine");

        assert!(same_activity(&a, &b));
        assert!(!same_activity(&a, &other_name));
        assert!(!same_activity(&a, &no_coords));
        assert!(!same_activity(&no_coords, &no_coords));
    }

    #[test]
    fn stale_highlight_matches_nothing() {
        let list = vec![
            activity(Some("1"), Some(35.0), Some(139.0), "Tower"),
            activity(Some("2"), Some(34.7), Some(135.5), "Castle"),
        ];
        let stale = activity(Some("99"), Some(35.0), Some(139.0), "Tower");

        // Id comparison wins over coordinate equality, so a highlight from a
        // previous fetch finds no marker and the map falls back to no
        // highlight.
        assert!(list.iter().position(|a| same_activity(a, &stale)).is_none());
    }

    #[test]
    fn shared_coordinates_disambiguated_by_id() {
        let list = vec![
            activity(Some("1"), Some(35.0), Some(139.0), "Plaza"),
            activity(Some("2"), Some(35.0), Some(139.0), "Plaza"),
        ];
        let pick = activity(Some("2"), Some(35.0), Some(139.0), "Plaza");

        assert_eq!(list.iter().position(|a| same_activity(a, &pick)), Some(1));
    }

    #[test]
    fn trip_deserializes_with_missing_optionals() {
        let json = r#"{
            "id": "t-1",
            "destination": "Tokyo",
            "created_at": "2024-05-01T12:00:00+00:00",
            "daily_plan": [
                {
                    "day": 1,
                    "title": "Arrival",
                    "summary": "Land and settle in",
                    "activities": [
                        {"time": "09:00", "activity": "Akihabara", "location_name": "Akihabara", "lat": 35.7, "lng": 139.77},
                        {"time": "14:00", "activity": "Check in", "location_name": "Hotel", "lat": null, "lng": null}
                    ]
                }
            ]
        }"#;

        let trip: Trip = serde_json::from_str(json).expect("trip should parse");
        assert_eq!(trip.destination, "Tokyo");
        assert!(trip.budget.is_none());
        assert!(trip.expenses.is_empty());
        assert_eq!(trip.daily_plan[0].activities.len(), 2);

        let on_map = mappable(&trip.daily_plan[0].activities);
        assert_eq!(on_map.len(), 1);
        assert_eq!(on_map[0].name, "Akihabara");
    }

    #[test]
    fn expense_deserializes_backend_shape() {
        let json = r#"{
            "id": "e-1",
            "trip_id": "t-1",
            "description": "Ramen 50",
            "amount": 50.0,
            "category": "food",
            "created_at": "2024-05-02T08:30:00+00:00"
        }"#;

        let expense: Expense = serde_json::from_str(json).expect("expense should parse");
        assert_eq!(expense.amount, 50.0);
        assert_eq!(expense.category.as_deref(), Some("food"));
    }

    #[test]
    fn format_date_handles_bad_input() {
        assert_eq!(format_date("2024-05-01T12:00:00+00:00"), "May 01, 2024");
        assert_eq!(format_date("not a date"), "not a date");
    }
}
