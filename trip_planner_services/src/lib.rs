use chrono::NaiveDate;
use thiserror::Error;

pub mod chat;
pub mod itinerary;
pub mod payment;
pub mod suggestions;
mod planner;

pub use planner::*;

pub const DEFAULT_TRIP_DAYS: u32 = 3;
pub const MAX_TRIP_DAYS: u32 = 30;
/// Per traveler, per day, in the service currency.
pub const DEFAULT_DAILY_BUDGET: f64 = 5000.0;
pub const DEFAULT_CURRENCY: &str = "INR";
/// Largest accepted trip budget. Costs derived from it stay finite after rounding to cents.
pub const MAX_BUDGET: f64 = 1e12;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum PlannerError {
    #[error("end date {end} must be after start date {start}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },
    #[error("trip dates are outside the supported calendar range")]
    DateOutOfRange,
    #[error("trip lasts {days} days, the maximum is {max}")]
    TripTooLong { days: i64, max: u32 },
    #[error("budget must be a positive number no larger than 1e12, got {0}")]
    InvalidBudget(f64),
    #[error("message must not be empty")]
    EmptyMessage,
    #[error("location must not be empty")]
    EmptyLocation,
    #[error("currency must be a three letter ISO 4217 code, got {0:?}")]
    InvalidCurrency(String),
}
