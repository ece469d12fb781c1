//! Great-circle distance and proximity ordering

use crate::config::EARTH_RADIUS_KM;
use crate::events::{Coordinates, EventRecord, NearbyEvent};

/// Haversine distance between two points, in kilometres
pub fn haversine_km(from: Coordinates, to: Coordinates) -> f64 {
    let d_lat = (to.latitude - from.latitude).to_radians();
    let d_lon = (to.longitude - from.longitude).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + from.latitude.to_radians().cos()
            * to.latitude.to_radians().cos()
            * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Attach each event's distance from `user` and order nearest first.
///
/// Ties keep their stored order.
pub fn sort_by_distance(events: Vec<EventRecord>, user: Coordinates) -> Vec<NearbyEvent> {
    let mut nearby: Vec<NearbyEvent> = events
        .into_iter()
        .map(|event| {
            let distance = haversine_km(user, event.location_data);
            NearbyEvent { event, distance }
        })
        .collect();

    nearby.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    nearby
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::Ratings;

    const ZURICH: Coordinates = Coordinates {
        latitude: 47.3769,
        longitude: 8.5417,
    };
    const BERN: Coordinates = Coordinates {
        latitude: 46.9480,
        longitude: 7.4474,
    };
    const AARAU: Coordinates = Coordinates {
        latitude: 47.3925,
        longitude: 8.0442,
    };

    fn event_at(id: u32, location: Coordinates) -> EventRecord {
        EventRecord {
            id,
            name: format!("Event {}", id),
            date: "1/1/2024".to_string(),
            time: "12:00:00 PM".to_string(),
            location_name: String::new(),
            location_data: location,
            ratings: Ratings::default(),
        }
    }

    #[test]
    fn test_distance_to_self_is_zero() {
        assert_eq!(haversine_km(ZURICH, ZURICH), 0.0);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let pairs = [(ZURICH, BERN), (BERN, AARAU), (Coordinates::new(-33.9, 151.2), ZURICH)];

        for (a, b) in pairs {
            assert!((haversine_km(a, b) - haversine_km(b, a)).abs() < 1e-9);
        }
    }

    #[test]
    fn test_known_distance() {
        // Zurich to Bern is roughly 95 km as the crow flies
        let d = haversine_km(ZURICH, BERN);
        assert!((d - 95.5).abs() < 1.5, "got {}", d);

        // A quarter of the way round the equator
        let quarter = haversine_km(Coordinates::new(0.0, 0.0), Coordinates::new(0.0, 90.0));
        assert!((quarter - std::f64::consts::PI * EARTH_RADIUS_KM / 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_sort_nearest_first() {
        let events = vec![event_at(1, BERN), event_at(2, ZURICH), event_at(3, AARAU)];

        let sorted = sort_by_distance(events, Coordinates::new(47.37, 8.54));

        let ids: Vec<u32> = sorted.iter().map(|n| n.event.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
        assert!(sorted.windows(2).all(|w| w[0].distance <= w[1].distance));
    }

    #[test]
    fn test_sort_keeps_order_of_ties() {
        let events = vec![event_at(1, BERN), event_at(2, BERN), event_at(3, ZURICH)];

        let sorted = sort_by_distance(events, ZURICH);

        let ids: Vec<u32> = sorted.iter().map(|n| n.event.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_sort_empty() {
        assert!(sort_by_distance(Vec::new(), ZURICH).is_empty());
    }
}
