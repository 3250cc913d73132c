use crate::models::{Destination, Itinerary, ItineraryDay};

/// Longest layout the builder will produce
pub const MAX_TRIP_DAYS: u32 = 365;

/// Lay the selected destinations out over consecutive trip days
///
/// Days start at 1 and follow selection order. Each destination takes
/// `duration` days; a zero duration still takes one. Days past
/// [`MAX_TRIP_DAYS`] are dropped, totals still cover every destination.
pub fn build_itinerary(destinations: &[Destination]) -> Itinerary {
    let mut days = Vec::new();
    let mut day: u32 = 0;

    'layout: for destination in destinations {
        for _ in 0..destination.duration.max(1) {
            if day == MAX_TRIP_DAYS {
                tracing::warn!("Itinerary truncated at {} days", MAX_TRIP_DAYS);
                break 'layout;
            }
            day += 1;
            days.push(ItineraryDay {
                day,
                destination_id: destination.id.clone(),
                destination_name: destination.name.clone(),
            });
        }
    }

    Itinerary {
        total_days: day,
        destination_count: destinations.len(),
        total_cost: destinations.iter().map(|d| d.cost as u64).sum(),
        days,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_destination(id: &str, cost: u32, duration: u32) -> Destination {
        Destination {
            id: id.to_string(),
            name: format!("Destination {}", id),
            cost,
            season: "Raya".to_string(),
            category: vec![],
            description: String::new(),
            duration,
            image: None,
        }
    }

    #[test]
    fn test_days_are_contiguous() {
        let itinerary = build_itinerary(&[
            create_destination("a", 600, 1),
            create_destination("b", 800, 2),
        ]);

        let days: Vec<_> = itinerary
            .days
            .iter()
            .map(|d| (d.day, d.destination_id.as_str()))
            .collect();
        assert_eq!(days, vec![(1, "a"), (2, "b"), (3, "b")]);
        assert_eq!(itinerary.total_days, 3);
        assert_eq!(itinerary.destination_count, 2);
        assert_eq!(itinerary.total_cost, 1400);
    }

    #[test]
    fn test_zero_duration_takes_a_day() {
        let itinerary = build_itinerary(&[create_destination("a", 100, 0)]);
        assert_eq!(itinerary.total_days, 1);
    }

    #[test]
    fn test_oversized_duration_is_capped() {
        let itinerary = build_itinerary(&[
            create_destination("a", 100, u32::MAX),
            create_destination("b", 200, u32::MAX),
        ]);

        assert_eq!(itinerary.total_days, MAX_TRIP_DAYS);
        assert_eq!(itinerary.days.len(), MAX_TRIP_DAYS as usize);
        assert!(itinerary.days.iter().all(|d| d.destination_id == "a"));
        assert_eq!(itinerary.days.last().map(|d| d.day), Some(MAX_TRIP_DAYS));
        assert_eq!(itinerary.destination_count, 2);
        assert_eq!(itinerary.total_cost, 300);
    }

    #[test]
    fn test_cap_applies_across_destinations() {
        let itinerary = build_itinerary(&[
            create_destination("a", 100, 300),
            create_destination("b", 100, 100),
        ]);

        assert_eq!(itinerary.total_days, MAX_TRIP_DAYS);
        let b_days = itinerary.days.iter().filter(|d| d.destination_id == "b").count();
        assert_eq!(b_days, 65);
    }

    #[test]
    fn test_empty_selection() {
        assert_eq!(build_itinerary(&[]), Itinerary::default());
    }
}
