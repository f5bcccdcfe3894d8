use serde::{Deserialize, Serialize};

use crate::entities::destination::Destination;
use crate::entities::hotel::Hotel;
use crate::entities::room::Room;

mod seed;

pub const MAX_GUESTS: u32 = 10;
pub const MAX_ROOMS: u32 = 5;

pub const PAGE_SIZE: usize = 10;

pub const PRICE_RANGE_MIN: f64 = 0.0;
pub const PRICE_RANGE_MAX: f64 = 1000.0;

/// The entire data layer of the demo. Built once at startup from static
/// arrays; nothing is persisted and every restart starts from the same state.
pub struct Catalog {
    destinations: Vec<Destination>,
    hotels: Vec<Hotel>,
}

impl Catalog {
    /// Build the catalog, attaching rooms and reviews to their hotels by
    /// foreign key in a one-time join.
    pub fn load() -> Self {
        let destinations = seed::destinations();
        let mut hotels = seed::hotels();
        let rooms = seed::rooms();
        let reviews = seed::reviews();

        for hotel in &mut hotels {
            hotel.rooms = rooms
                .iter()
                .filter(|r| r.hotel_id == hotel.id)
                .cloned()
                .collect();
            hotel.reviews = reviews
                .iter()
                .filter(|r| r.hotel_id == hotel.id)
                .cloned()
                .collect();
        }

        Self {
            destinations,
            hotels,
        }
    }

    pub fn destinations(&self) -> &[Destination] {
        &self.destinations
    }

    /// Case-insensitive autocomplete over destination names and countries.
    pub fn search_destinations(&self, query: &str) -> Vec<&Destination> {
        let needle = query.to_lowercase();
        self.destinations
            .iter()
            .filter(|d| {
                d.name.to_lowercase().contains(&needle)
                    || d.country
                        .as_deref()
                        .is_some_and(|c| c.to_lowercase().contains(&needle))
            })
            .collect()
    }

    pub fn hotels(&self) -> &[Hotel] {
        &self.hotels
    }

    pub fn hotels_in(&self, destination_id: &str) -> Vec<Hotel> {
        self.hotels
            .iter()
            .filter(|h| h.destination_id == destination_id)
            .cloned()
            .collect()
    }

    pub fn hotel(&self, hotel_id: &str) -> Option<&Hotel> {
        self.hotels.iter().find(|h| h.id == hotel_id)
    }

    pub fn room(&self, hotel_id: &str, room_id: &str) -> Option<&Room> {
        self.hotel(hotel_id)?.rooms.iter().find(|r| r.id == room_id)
    }
}

/// Independent predicate conjunctions over the hotel list. An empty star set
/// means no star filter.
#[derive(Clone, Debug, Default)]
pub struct HotelFilters {
    pub star_ratings: Vec<u8>,
    pub guest_rating_min: f64,
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
}

impl HotelFilters {
    pub fn matches(&self, hotel: &Hotel) -> bool {
        if !self.star_ratings.is_empty() && !self.star_ratings.contains(&hotel.star_rating) {
            return false;
        }
        if hotel.guest_rating.unwrap_or(0.0) < self.guest_rating_min {
            return false;
        }
        if let Some(min) = self.price_min {
            if hotel.cheapest_room_price.unwrap_or(0.0) < min {
                return false;
            }
        }
        if let Some(max) = self.price_max {
            // A hotel without a listed price never satisfies an upper bound.
            if hotel.cheapest_room_price.unwrap_or(f64::INFINITY) > max {
                return false;
            }
        }
        true
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortBy {
    #[default]
    Price,
    StarRating,
    GuestRating,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

/// Single-key sort; ties keep whatever order the input had.
pub fn sort_hotels(hotels: &mut [Hotel], sort_by: SortBy, sort_order: SortOrder) {
    hotels.sort_by(|a, b| {
        let (val_a, val_b) = match sort_by {
            SortBy::Price => (
                a.cheapest_room_price.unwrap_or(0.0),
                b.cheapest_room_price.unwrap_or(0.0),
            ),
            SortBy::StarRating => (f64::from(a.star_rating), f64::from(b.star_rating)),
            SortBy::GuestRating => (a.guest_rating.unwrap_or(0.0), b.guest_rating.unwrap_or(0.0)),
        };
        match sort_order {
            SortOrder::Asc => val_a.total_cmp(&val_b),
            SortOrder::Desc => val_b.total_cmp(&val_a),
        }
    });
}

/// Slice out one fixed-size page. Returns the page items and the total page
/// count for the whole set.
pub fn paginate(hotels: Vec<Hotel>, page: usize) -> (Vec<Hotel>, usize) {
    let total_pages = hotels.len().div_ceil(PAGE_SIZE);
    let start = (page.max(1) - 1) * PAGE_SIZE;
    let items = hotels.into_iter().skip(start).take(PAGE_SIZE).collect();
    (items, total_pages)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_hotel(id: &str, stars: u8, guest_rating: f64, price: f64) -> Hotel {
        Hotel {
            id: id.to_string(),
            name: format!("Hotel {id}"),
            destination_id: "paris".to_string(),
            destination_name: None,
            description: String::new(),
            address: String::new(),
            latitude: 0.0,
            longitude: 0.0,
            star_rating: stars,
            guest_rating: Some(guest_rating),
            amenities: Vec::new(),
            images: Vec::new(),
            cheapest_room_price: Some(price),
            rooms: Vec::new(),
            reviews: Vec::new(),
            policies: None,
            contact: None,
        }
    }

    #[test]
    fn load_joins_rooms_and_reviews_by_foreign_key() {
        let catalog = Catalog::load();
        let hotel = catalog.hotel("hotel-paris-1").unwrap();
        assert!(!hotel.rooms.is_empty());
        assert!(hotel.rooms.iter().all(|r| r.hotel_id == "hotel-paris-1"));
        assert!(!hotel.reviews.is_empty());
        assert!(hotel.reviews.iter().all(|r| r.hotel_id == "hotel-paris-1"));
    }

    #[test]
    fn star_filter_is_membership() {
        let hotels = vec![test_hotel("a", 4, 8.0, 100.0), test_hotel("b", 5, 9.0, 200.0)];

        let filters = HotelFilters {
            star_ratings: vec![5],
            ..Default::default()
        };
        let kept: Vec<_> = hotels.iter().filter(|h| filters.matches(h)).collect();
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].star_rating, 5);

        // No star filter returns the full input set unchanged.
        let no_filter = HotelFilters::default();
        assert_eq!(hotels.iter().filter(|h| no_filter.matches(h)).count(), 2);
    }

    #[test]
    fn guest_rating_and_price_filters() {
        let hotels = vec![
            test_hotel("a", 4, 8.5, 180.0),
            test_hotel("b", 5, 9.2, 350.0),
            test_hotel("c", 3, 7.0, 90.0),
        ];

        let filters = HotelFilters {
            guest_rating_min: 8.0,
            price_min: Some(100.0),
            price_max: Some(300.0),
            ..Default::default()
        };
        let kept: Vec<_> = hotels.iter().filter(|h| filters.matches(h)).collect();
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id, "a");
    }

    #[test]
    fn missing_price_fails_an_upper_bound() {
        let mut hotel = test_hotel("a", 4, 8.0, 0.0);
        hotel.cheapest_room_price = None;

        let capped = HotelFilters {
            price_max: Some(1000.0),
            ..Default::default()
        };
        assert!(!capped.matches(&hotel));

        let uncapped = HotelFilters::default();
        assert!(uncapped.matches(&hotel));
    }

    #[test]
    fn sort_by_price_asc_and_desc() {
        let mut hotels = vec![
            test_hotel("a", 5, 9.0, 350.0),
            test_hotel("b", 4, 8.0, 180.0),
            test_hotel("c", 5, 9.5, 500.0),
        ];

        sort_hotels(&mut hotels, SortBy::Price, SortOrder::Asc);
        let prices: Vec<_> = hotels
            .iter()
            .map(|h| h.cheapest_room_price.unwrap())
            .collect();
        assert_eq!(prices, vec![180.0, 350.0, 500.0]);

        sort_hotels(&mut hotels, SortBy::Price, SortOrder::Desc);
        let prices: Vec<_> = hotels
            .iter()
            .map(|h| h.cheapest_room_price.unwrap())
            .collect();
        assert_eq!(prices, vec![500.0, 350.0, 180.0]);
    }

    #[test]
    fn pagination_is_fixed_size() {
        let hotels: Vec<_> = (0..23)
            .map(|i| test_hotel(&format!("h{i}"), 4, 8.0, 100.0 + i as f64))
            .collect();

        let (page1, total_pages) = paginate(hotels.clone(), 1);
        assert_eq!(page1.len(), PAGE_SIZE);
        assert_eq!(total_pages, 3);

        let (page3, _) = paginate(hotels.clone(), 3);
        assert_eq!(page3.len(), 3);

        let (beyond, _) = paginate(hotels, 4);
        assert!(beyond.is_empty());
    }
}
