use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TripTheme {
    Heritage,
    Adventure,
    Nightlife,
    Cultural,
    Relaxation,
    Family,
    Business,
    Romantic,
    Foodie,
    Shopping,
}

impl TripTheme {
    pub const ALL: [TripTheme; 10] = [
        TripTheme::Heritage,
        TripTheme::Adventure,
        TripTheme::Nightlife,
        TripTheme::Cultural,
        TripTheme::Relaxation,
        TripTheme::Family,
        TripTheme::Business,
        TripTheme::Romantic,
        TripTheme::Foodie,
        TripTheme::Shopping,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TripTheme::Heritage => "heritage",
            TripTheme::Adventure => "adventure",
            TripTheme::Nightlife => "nightlife",
            TripTheme::Cultural => "cultural",
            TripTheme::Relaxation => "relaxation",
            TripTheme::Family => "family",
            TripTheme::Business => "business",
            TripTheme::Romantic => "romantic",
            TripTheme::Foodie => "foodie",
            TripTheme::Shopping => "shopping",
        }
    }
}

/// Body of `POST /api/trips/plan`. Only `origin` and `destination` are required.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct TripRequest {
    pub origin: String,
    pub destination: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub travelers: Option<u32>,
    /// Total budget for the whole party and the whole trip.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<f64>,
    #[serde(default)]
    pub themes: Vec<TripTheme>,
}

impl TripRequest {
    pub fn new(origin: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Activity {
    pub time_slot: String,
    pub name: String,
    pub description: String,
    pub duration_hours: f64,
    pub cost_per_person: f64,
    pub category: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct DayPlan {
    pub day: u32,
    pub date: NaiveDate,
    pub title: String,
    pub description: String,
    pub activities: Vec<Activity>,
    pub day_total_cost: f64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct WeatherForecast {
    pub date: NaiveDate,
    pub min_temp_c: i32,
    pub max_temp_c: i32,
    pub condition: String,
    pub precipitation_chance: u8,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct EmergencyContacts {
    pub police: String,
    pub ambulance: String,
    pub tourist_helpline: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TripPlan {
    pub trip_id: String,
    pub origin: String,
    pub destination: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub duration_days: u32,
    pub travelers: u32,
    pub currency: String,
    pub total_estimated_cost: f64,
    pub budget_adjusted: bool,
    pub themes: Vec<TripTheme>,
    pub itinerary: Vec<DayPlan>,
    pub weather_forecast: Vec<WeatherForecast>,
    pub local_tips: Vec<String>,
    pub emergency_contacts: EmergencyContacts,
    pub mock: bool,
    pub created_at: DateTime<Utc>,
}
