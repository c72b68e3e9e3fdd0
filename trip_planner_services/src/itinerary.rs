use chrono::{Days, NaiveDate, Utc};
use trip_planner_lib::trip::{Activity, DayPlan, EmergencyContacts, TripPlan, TripRequest, TripTheme, WeatherForecast};

use crate::{PlannerError, DEFAULT_DAILY_BUDGET, DEFAULT_TRIP_DAYS, MAX_BUDGET, MAX_TRIP_DAYS};

const MORNING_SHARE: f64 = 0.20;
const AFTERNOON_SHARE: f64 = 0.15;
const EVENING_SHARE: f64 = 0.10;
/// Fixed per-person cost of getting from the origin to the destination.
const TRAVEL_COST_PER_PERSON: f64 = 3500.0;

#[derive(Debug, Clone)]
pub struct ItineraryPlanner {
    currency: String,
}

impl ItineraryPlanner {
    pub fn new(currency: String) -> Self {
        Self { currency }
    }

    /// Builds a template itinerary. `today` anchors trips that come without dates.
    pub fn plan(&self, request: &TripRequest, today: NaiveDate) -> Result<TripPlan, PlannerError> {
        let (start_date, end_date, duration_days) = resolve_dates(request.start_date, request.end_date, today)?;
        let travelers = request.travelers.unwrap_or(1).max(1);

        let daily_budget = match request.budget {
            Some(budget) if !(budget > 0.0 && budget <= MAX_BUDGET) => return Err(PlannerError::InvalidBudget(budget)),
            Some(budget) => budget / (duration_days as f64 * travelers as f64),
            None => DEFAULT_DAILY_BUDGET,
        };

        let mut itinerary = Vec::with_capacity(duration_days as usize);
        for day in 1..=duration_days {
            // Stays within start..=end, both of which are representable.
            let date = start_date
                .checked_add_days(Days::new(u64::from(day - 1)))
                .ok_or(PlannerError::DateOutOfRange)?;
            itinerary.push(self.plan_day(request, day, duration_days, date, daily_budget, travelers));
        }

        let mut total_estimated_cost: f64 = itinerary.iter().map(|day| day.day_total_cost).sum();
        let mut budget_adjusted = false;

        if let Some(budget) = request.budget {
            if total_estimated_cost > budget {
                let ratio = budget / total_estimated_cost;
                for day in itinerary.iter_mut() {
                    for activity in day.activities.iter_mut() {
                        activity.cost_per_person = round_cents(activity.cost_per_person * ratio);
                    }
                    day.day_total_cost = round_cents(day.day_total_cost * ratio);
                }

                tracing::debug!(original = total_estimated_cost, adjusted = budget, "Scaled itinerary down to budget");
                total_estimated_cost = budget;
                budget_adjusted = true;
            }
        }

        let weather_forecast = itinerary.iter().map(|day| mock_forecast(day.date)).collect();

        Ok(TripPlan {
            trip_id: uuid::Uuid::new_v4().to_string(),
            origin: request.origin.clone(),
            destination: request.destination.clone(),
            start_date,
            end_date,
            duration_days,
            travelers,
            currency: self.currency.clone(),
            total_estimated_cost: round_cents(total_estimated_cost),
            budget_adjusted,
            themes: request.themes.clone(),
            itinerary,
            weather_forecast,
            local_tips: local_tips(&request.destination),
            emergency_contacts: emergency_contacts(),
            mock: true,
            created_at: Utc::now(),
        })
    }

    fn plan_day(&self, request: &TripRequest, day: u32, duration_days: u32, date: NaiveDate, daily_budget: f64, travelers: u32) -> DayPlan {
        let destination = &request.destination;
        let mut activities = Vec::new();

        let (title, day_description) = if day == 1 {
            activities.push(Activity {
                time_slot: "06:00-09:00".into(),
                name: format!("Travel from {}", request.origin),
                description: format!("Journey from {} to {} and check in.", request.origin, destination),
                duration_hours: 3.0,
                cost_per_person: TRAVEL_COST_PER_PERSON,
                category: "transport".into(),
            });
            (
                format!("Arrival in {destination}"),
                format!("Travel from {} to {destination} and settle in.", request.origin),
            )
        } else if day == duration_days {
            (
                format!("Departure from {destination}"),
                format!("Final sights in {destination} before heading back to {}.", request.origin),
            )
        } else {
            (
                format!("Exploring {destination}"),
                format!("A full day to discover {destination}."),
            )
        };

        activities.push(Activity {
            time_slot: "09:00-12:00".into(),
            name: "Morning Sightseeing".into(),
            description: format!("Explore popular attractions around {destination}."),
            duration_hours: 3.0,
            cost_per_person: round_cents(daily_budget * MORNING_SHARE),
            category: "sightseeing".into(),
        });

        let theme = (!request.themes.is_empty()).then(|| request.themes[(day as usize - 1) % request.themes.len()]);
        let (name, description, category) = afternoon_for(theme);
        activities.push(Activity {
            time_slot: "14:00-17:00".into(),
            name: name.into(),
            description: description.into(),
            duration_hours: 3.0,
            cost_per_person: round_cents(daily_budget * AFTERNOON_SHARE),
            category: category.into(),
        });

        if let Some((name, description, category)) = evening_for(&request.themes) {
            activities.push(Activity {
                time_slot: "19:00-21:00".into(),
                name: name.into(),
                description: description.into(),
                duration_hours: 2.0,
                cost_per_person: round_cents(daily_budget * EVENING_SHARE),
                category: category.into(),
            });
        }

        let per_person: f64 = activities.iter().map(|activity| activity.cost_per_person).sum();

        DayPlan {
            day,
            date,
            title,
            description: day_description,
            activities,
            day_total_cost: round_cents(per_person * travelers as f64),
        }
    }
}

fn resolve_dates(start: Option<NaiveDate>, end: Option<NaiveDate>, today: NaiveDate) -> Result<(NaiveDate, NaiveDate, u32), PlannerError> {
    let default_span = Days::new(u64::from(DEFAULT_TRIP_DAYS - 1));

    let (start, end) = match (start, end) {
        (Some(start), Some(end)) if start >= end => return Err(PlannerError::InvalidDateRange { start, end }),
        (Some(start), Some(end)) => (start, end),
        (Some(start), None) => (start, start.checked_add_days(default_span).ok_or(PlannerError::DateOutOfRange)?),
        (None, Some(end)) => (end.checked_sub_days(default_span).ok_or(PlannerError::DateOutOfRange)?, end),
        (None, None) => (today, today.checked_add_days(default_span).ok_or(PlannerError::DateOutOfRange)?),
    };

    let days = (end - start).num_days() + 1;
    if days > i64::from(MAX_TRIP_DAYS) {
        return Err(PlannerError::TripTooLong { days, max: MAX_TRIP_DAYS });
    }

    Ok((start, end, days as u32))
}

fn afternoon_for(theme: Option<TripTheme>) -> (&'static str, &'static str, &'static str) {
    match theme {
        Some(TripTheme::Heritage) => ("Heritage Walk", "Guided walk through historic monuments and old quarters.", "heritage"),
        Some(TripTheme::Adventure) => ("Outdoor Adventure", "Trekking, rafting or zip-lining, depending on the season.", "adventure"),
        Some(TripTheme::Nightlife) => ("Rooftop Preview", "Scout the evening venues and grab an early table.", "nightlife"),
        Some(TripTheme::Relaxation) => ("Spa Afternoon", "Unwind with a massage or a slow afternoon by the water.", "relaxation"),
        Some(TripTheme::Family) => ("Family Park Visit", "Gardens, zoo or an amusement park suitable for all ages.", "family"),
        Some(TripTheme::Business) => ("Business District Tour", "Visit the commercial centre and convention venues.", "business"),
        Some(TripTheme::Romantic) => ("Sunset Viewpoint", "A quiet viewpoint for the golden hour.", "romantic"),
        Some(TripTheme::Foodie) => ("Street Food Tasting", "Taste local specialities at well-known food stalls.", "food"),
        Some(TripTheme::Shopping) => ("Market Browsing", "Local markets for handicrafts and souvenirs.", "shopping"),
        Some(TripTheme::Cultural) | None => ("Cultural Experience", "Immerse in local culture and traditions.", "cultural"),
    }
}

fn evening_for(themes: &[TripTheme]) -> Option<(&'static str, &'static str, &'static str)> {
    if themes.contains(&TripTheme::Nightlife) {
        Some(("Night Out", "Live music and the liveliest bars in town.", "nightlife"))
    } else if themes.contains(&TripTheme::Foodie) {
        Some(("Dinner Trail", "A guided dinner across three local restaurants.", "food"))
    } else {
        None
    }
}

fn mock_forecast(date: NaiveDate) -> WeatherForecast {
    WeatherForecast {
        date,
        min_temp_c: 20,
        max_temp_c: 30,
        condition: "Partly Cloudy".into(),
        precipitation_chance: 20,
    }
}

fn local_tips(destination: &str) -> Vec<String> {
    vec![
        format!("Keep digital and printed copies of your {destination} bookings."),
        "Carry small change for local transport and street vendors.".into(),
        "Check opening hours and weekly closures before visiting attractions.".into(),
        "Drink bottled or filtered water.".into(),
    ]
}

pub(crate) fn emergency_contacts() -> EmergencyContacts {
    EmergencyContacts {
        police: "100".into(),
        ambulance: "108".into(),
        tourist_helpline: "1363".into(),
    }
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn planner() -> ItineraryPlanner {
        ItineraryPlanner::new("INR".into())
    }

    #[test]
    fn echoes_origin_and_destination_verbatim() {
        for (origin, destination) in [("NYC", "LA"), ("", ""), ("  Zürich ", "東京"), ("a\nb", "LA")] {
            let plan = planner().plan(&TripRequest::new(origin, destination), date(2025, 1, 1)).unwrap();
            assert_eq!(plan.origin, origin);
            assert_eq!(plan.destination, destination);
        }
    }

    #[test]
    fn trip_without_dates_starts_today_with_default_length() {
        let plan = planner().plan(&TripRequest::new("NYC", "LA"), date(2025, 6, 10)).unwrap();

        assert_eq!(plan.start_date, date(2025, 6, 10));
        assert_eq!(plan.end_date, date(2025, 6, 12));
        assert_eq!(plan.duration_days, DEFAULT_TRIP_DAYS);
        assert_eq!(plan.itinerary.len(), 3);
        assert_eq!(plan.weather_forecast.len(), 3);
        assert_eq!(plan.itinerary[0].title, "Arrival in LA");
        assert_eq!(plan.itinerary[1].title, "Exploring LA");
        assert_eq!(plan.itinerary[2].title, "Departure from LA");
        assert_eq!(plan.itinerary[0].activities[0].name, "Travel from NYC");
        assert!(plan.mock);
    }

    #[test]
    fn only_end_date_counts_backwards() {
        let mut request = TripRequest::new("NYC", "LA");
        request.end_date = Some(date(2025, 3, 5));
        let plan = planner().plan(&request, date(2025, 1, 1)).unwrap();

        assert_eq!(plan.start_date, date(2025, 3, 3));
        assert_eq!(plan.itinerary.last().unwrap().date, date(2025, 3, 5));
    }

    #[test]
    fn explicit_range_is_inclusive() {
        let mut request = TripRequest::new("Delhi", "Jaipur");
        request.start_date = Some(date(2025, 2, 27));
        request.end_date = Some(date(2025, 3, 3));
        let plan = planner().plan(&request, date(2025, 1, 1)).unwrap();

        assert_eq!(plan.duration_days, 5);
        let days: Vec<u32> = plan.itinerary.iter().map(|day| day.day).collect();
        assert_eq!(days, vec![1, 2, 3, 4, 5]);
        assert_eq!(plan.itinerary[2].date, date(2025, 3, 1));
    }

    #[test]
    fn rejects_reversed_and_equal_dates() {
        let mut request = TripRequest::new("a", "b");
        request.start_date = Some(date(2025, 5, 2));
        request.end_date = Some(date(2025, 5, 2));
        assert!(matches!(planner().plan(&request, date(2025, 1, 1)), Err(PlannerError::InvalidDateRange { .. })));

        request.end_date = Some(date(2025, 5, 1));
        assert!(matches!(planner().plan(&request, date(2025, 1, 1)), Err(PlannerError::InvalidDateRange { .. })));
    }

    #[test]
    fn rejects_trips_longer_than_the_maximum() {
        let mut request = TripRequest::new("a", "b");
        request.start_date = Some(date(2025, 1, 1));
        request.end_date = Some(date(2025, 1, 31));

        assert_eq!(
            planner().plan(&request, date(2025, 1, 1)).unwrap_err(),
            PlannerError::TripTooLong { days: 31, max: MAX_TRIP_DAYS }
        );

        request.end_date = Some(date(2025, 1, 30));
        assert_eq!(planner().plan(&request, date(2025, 1, 1)).unwrap().duration_days, 30);
    }

    #[test]
    fn small_budget_scales_costs_down() {
        let mut request = TripRequest::new("Mumbai", "Goa");
        request.budget = Some(3000.0);
        request.travelers = Some(2);
        let plan = planner().plan(&request, date(2025, 1, 1)).unwrap();

        assert!(plan.budget_adjusted);
        assert_eq!(plan.total_estimated_cost, 3000.0);
        let day_sum: f64 = plan.itinerary.iter().map(|day| day.day_total_cost).sum();
        assert!((day_sum - 3000.0).abs() < 0.05, "{day_sum}");
    }

    #[test]
    fn default_budget_is_not_adjusted() {
        let mut request = TripRequest::new("Mumbai", "Goa");
        request.travelers = Some(0);
        let plan = planner().plan(&request, date(2025, 1, 1)).unwrap();

        assert_eq!(plan.travelers, 1);
        assert!(!plan.budget_adjusted);
        // travel + 3 days of morning and afternoon activities
        assert_eq!(plan.total_estimated_cost, 3500.0 + 3.0 * (1000.0 + 750.0));
    }

    #[test]
    fn rejects_non_positive_budget() {
        let mut request = TripRequest::new("a", "b");
        request.budget = Some(0.0);
        assert_eq!(planner().plan(&request, date(2025, 1, 1)).unwrap_err(), PlannerError::InvalidBudget(0.0));
    }

    #[test]
    fn rejects_budgets_beyond_the_cap() {
        let mut request = TripRequest::new("NYC", "LA");
        request.budget = Some(1e307);
        assert_eq!(planner().plan(&request, date(2025, 1, 1)).unwrap_err(), PlannerError::InvalidBudget(1e307));

        request.budget = Some(f64::NAN);
        assert!(matches!(planner().plan(&request, date(2025, 1, 1)), Err(PlannerError::InvalidBudget(_))));
    }

    #[test]
    fn largest_budget_keeps_every_cost_finite() {
        let mut request = TripRequest::new("NYC", "LA");
        request.budget = Some(MAX_BUDGET);
        request.themes = vec![TripTheme::Nightlife];
        let plan = planner().plan(&request, date(2025, 1, 1)).unwrap();

        assert!(plan.total_estimated_cost.is_finite());
        for day in &plan.itinerary {
            assert!(day.day_total_cost.is_finite());
            assert!(day.activities.iter().all(|activity| activity.cost_per_person.is_finite()));
        }
    }

    #[test]
    fn day_plans_carry_their_own_description() {
        let plan = planner().plan(&TripRequest::new("Pune", "Goa"), date(2025, 1, 1)).unwrap();

        assert_eq!(plan.itinerary[0].description, "Travel from Pune to Goa and settle in.");
        assert_eq!(plan.itinerary[1].description, "A full day to discover Goa.");
    }

    #[test]
    fn trip_may_end_on_the_last_calendar_day() {
        let mut request = TripRequest::new("a", "b");
        request.start_date = NaiveDate::MAX.checked_sub_days(Days::new(2));
        request.end_date = Some(NaiveDate::MAX);
        let plan = planner().plan(&request, date(2025, 1, 1)).unwrap();

        assert_eq!(plan.duration_days, 3);
        assert_eq!(plan.itinerary.last().unwrap().date, NaiveDate::MAX);
    }

    #[test]
    fn themes_rotate_through_afternoons_and_add_evenings() {
        let mut request = TripRequest::new("Paris", "Lyon");
        request.themes = vec![TripTheme::Heritage, TripTheme::Foodie];
        let plan = planner().plan(&request, date(2025, 1, 1)).unwrap();

        let afternoons: Vec<&str> = plan
            .itinerary
            .iter()
            .map(|day| day.activities.iter().find(|a| a.time_slot == "14:00-17:00").unwrap().name.as_str())
            .collect();
        assert_eq!(afternoons, vec!["Heritage Walk", "Street Food Tasting", "Heritage Walk"]);
        assert!(plan.itinerary.iter().all(|day| day.activities.iter().any(|a| a.name == "Dinner Trail")));
    }

    #[test]
    fn shortest_trip_has_arrival_and_departure() {
        let mut request = TripRequest::new("a", "b");
        request.start_date = Some(date(2025, 1, 1));
        request.end_date = Some(date(2025, 1, 2));
        let plan = planner().plan(&request, date(2025, 1, 1)).unwrap();

        assert_eq!(plan.duration_days, 2);
        assert_eq!(plan.itinerary[0].title, "Arrival in b");
        assert_eq!(plan.itinerary[1].title, "Departure from b");
    }
}
