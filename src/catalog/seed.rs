//! Static mock data for the demo catalog.

use chrono::{DateTime, TimeZone, Utc};

use crate::entities::destination::Destination;
use crate::entities::hotel::{Hotel, HotelContact, HotelPolicies};
use crate::entities::review::HotelReview;
use crate::entities::room::{BedConfiguration, Room, RoomCapacity};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn timestamp(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, 0)
        .single()
        .expect("valid seed timestamp")
}

fn destination(id: &str, name: &str, country: &str, description: &str) -> Destination {
    Destination {
        id: id.to_string(),
        name: name.to_string(),
        country: Some(country.to_string()),
        description: Some(description.to_string()),
    }
}

pub fn destinations() -> Vec<Destination> {
    vec![
        destination("paris", "Paris", "France", "The city of lights and romance."),
        destination("tokyo", "Tokyo", "Japan", "A bustling metropolis with a rich culture."),
        destination("new-york", "New York", "USA", "The city that never sleeps."),
        destination("london", "London", "UK", "Historic city with iconic landmarks."),
        destination("rome", "Rome", "Italy", "Ancient ruins and delicious cuisine."),
        destination("barcelona", "Barcelona", "Spain", "Art, architecture, and beaches."),
        destination("singapore", "Singapore", "Singapore", "A vibrant garden city."),
        destination("bali", "Bali", "Indonesia", "Tropical paradise with stunning beaches."),
        destination("sydney", "Sydney", "Australia", "Famous for its opera house and harbor."),
        destination("amsterdam", "Amsterdam", "Netherlands", "Canals, bicycles, and art."),
    ]
}

pub fn hotels() -> Vec<Hotel> {
    vec![
        Hotel {
            id: "hotel-paris-1".to_string(),
            name: "Grand Parisian Hotel".to_string(),
            destination_id: "paris".to_string(),
            destination_name: Some("Paris".to_string()),
            description: "A luxurious hotel in the heart of Paris, offering stunning views of the Eiffel Tower.".to_string(),
            address: "1 Champs-Élysées, 75008 Paris, France".to_string(),
            latitude: 48.8699,
            longitude: 2.3073,
            star_rating: 5,
            guest_rating: Some(9.2),
            amenities: strings(&["Free WiFi", "Swimming Pool", "Restaurant", "Gym", "Spa"]),
            images: strings(&[
                "https://placehold.co/600x400.png?text=Grand+Parisian+Hotel+Exterior",
                "https://placehold.co/600x400.png?text=Grand+Parisian+Hotel+Lobby",
                "https://placehold.co/600x400.png?text=Grand+Parisian+Hotel+Room",
            ]),
            cheapest_room_price: Some(350.0),
            rooms: Vec::new(),
            reviews: Vec::new(),
            policies: Some(HotelPolicies {
                check_in: "15:00".to_string(),
                check_out: "12:00".to_string(),
            }),
            contact: Some(HotelContact {
                phone: "+33 1 23 45 67 89".to_string(),
                email: "info@grandparisian.fr".to_string(),
            }),
        },
        Hotel {
            id: "hotel-paris-2".to_string(),
            name: "Chic Montmartre Boutique".to_string(),
            destination_id: "paris".to_string(),
            destination_name: Some("Paris".to_string()),
            description: "A charming boutique hotel located in the artistic Montmartre district.".to_string(),
            address: "10 Rue Lepic, 75018 Paris, France".to_string(),
            latitude: 48.8867,
            longitude: 2.3394,
            star_rating: 4,
            guest_rating: Some(8.8),
            amenities: strings(&["Free WiFi", "Bar", "Pet-friendly", "Air Conditioning"]),
            images: strings(&[
                "https://placehold.co/600x400.png?text=Chic+Montmartre+Exterior",
                "https://placehold.co/600x400.png?text=Chic+Montmartre+Room",
            ]),
            cheapest_room_price: Some(180.0),
            rooms: Vec::new(),
            reviews: Vec::new(),
            policies: Some(HotelPolicies {
                check_in: "14:00".to_string(),
                check_out: "11:00".to_string(),
            }),
            contact: Some(HotelContact {
                phone: "+33 1 98 76 54 32".to_string(),
                email: "contact@chicmontmartre.fr".to_string(),
            }),
        },
        Hotel {
            id: "hotel-tokyo-1".to_string(),
            name: "Tokyo Imperial Palace View".to_string(),
            destination_id: "tokyo".to_string(),
            destination_name: Some("Tokyo".to_string()),
            description: "Elegant hotel with breathtaking views of the Imperial Palace gardens.".to_string(),
            address: "1-1 Chiyoda, Chiyoda City, Tokyo 100-0001, Japan".to_string(),
            latitude: 35.6852,
            longitude: 139.7528,
            star_rating: 5,
            guest_rating: Some(9.5),
            amenities: strings(&["Free WiFi", "Fine Dining", "Indoor Pool", "Fitness Center", "Concierge"]),
            images: strings(&[
                "https://placehold.co/600x400.png?text=Tokyo+Imperial+Hotel",
                "https://placehold.co/600x400.png?text=Tokyo+Imperial+View",
            ]),
            cheapest_room_price: Some(500.0),
            rooms: Vec::new(),
            reviews: Vec::new(),
            policies: Some(HotelPolicies {
                check_in: "15:00".to_string(),
                check_out: "12:00".to_string(),
            }),
            contact: Some(HotelContact {
                phone: "+81 3-1234-5678".to_string(),
                email: "reservations@tokyoimperial.jp".to_string(),
            }),
        },
        Hotel {
            id: "hotel-tokyo-2".to_string(),
            name: "Shinjuku Modern Stay".to_string(),
            destination_id: "tokyo".to_string(),
            destination_name: Some("Tokyo".to_string()),
            description: "Sleek and contemporary hotel in the vibrant Shinjuku area, close to transport and entertainment.".to_string(),
            address: "2-2-1 Nishi-Shinjuku, Shinjuku City, Tokyo 160-0023, Japan".to_string(),
            latitude: 35.6895,
            longitude: 139.6917,
            star_rating: 4,
            guest_rating: Some(8.5),
            amenities: strings(&["Free WiFi", "Restaurant", "Bar", "Laundry Service"]),
            images: strings(&[
                "https://placehold.co/600x400.png?text=Shinjuku+Modern+Exterior",
                "https://placehold.co/600x400.png?text=Shinjuku+Modern+Room",
            ]),
            cheapest_room_price: Some(220.0),
            rooms: Vec::new(),
            reviews: Vec::new(),
            policies: Some(HotelPolicies {
                check_in: "15:00".to_string(),
                check_out: "11:00".to_string(),
            }),
            contact: Some(HotelContact {
                phone: "+81 3-8765-4321".to_string(),
                email: "stay@shinjukumodern.jp".to_string(),
            }),
        },
        Hotel {
            id: "hotel-singapore-1".to_string(),
            name: "Marina Bay Sands".to_string(),
            destination_id: "singapore".to_string(),
            destination_name: Some("Singapore".to_string()),
            description: "Iconic hotel with a stunning rooftop infinity pool and panoramic city views.".to_string(),
            address: "10 Bayfront Ave, Singapore 018956".to_string(),
            latitude: 1.2839,
            longitude: 103.8606,
            star_rating: 5,
            guest_rating: Some(9.1),
            amenities: strings(&["Rooftop Pool", "Casino", "Multiple Restaurants", "Shopping Mall", "Museum"]),
            images: strings(&[
                "https://placehold.co/600x400.png?text=Marina+Bay+Sands+Exterior",
                "https://placehold.co/600x400.png?text=Marina+Bay+Sands+Pool",
            ]),
            cheapest_room_price: Some(600.0),
            rooms: Vec::new(),
            reviews: Vec::new(),
            policies: Some(HotelPolicies {
                check_in: "15:00".to_string(),
                check_out: "11:00".to_string(),
            }),
            contact: Some(HotelContact {
                phone: "+65 6688 8888".to_string(),
                email: "room.reservations@marinabaysands.com".to_string(),
            }),
        },
        Hotel {
            id: "hotel-singapore-2".to_string(),
            name: "The Fullerton Hotel Singapore".to_string(),
            destination_id: "singapore".to_string(),
            destination_name: Some("Singapore".to_string()),
            description: "A grand heritage hotel located in a beautifully restored neoclassical building by the Singapore River.".to_string(),
            address: "1 Fullerton Square, Singapore 049178".to_string(),
            latitude: 1.2862,
            longitude: 103.8538,
            star_rating: 5,
            guest_rating: Some(9.3),
            amenities: strings(&["Free WiFi", "Outdoor Pool", "Heritage Tours", "Spa", "Fine Dining"]),
            images: strings(&[
                "https://placehold.co/600x400.png?text=Fullerton+Hotel+Exterior",
                "https://placehold.co/600x400.png?text=Fullerton+Hotel+Lobby",
            ]),
            cheapest_room_price: Some(450.0),
            rooms: Vec::new(),
            reviews: Vec::new(),
            policies: Some(HotelPolicies {
                check_in: "15:00".to_string(),
                check_out: "12:00".to_string(),
            }),
            contact: Some(HotelContact {
                phone: "+65 6733 8388".to_string(),
                email: "tfs.reservations@fullertonhotels.com".to_string(),
            }),
        },
    ]
}

pub fn rooms() -> Vec<Room> {
    vec![
        Room {
            id: "room-paris-1-std".to_string(),
            hotel_id: "hotel-paris-1".to_string(),
            name: "Standard Double Room".to_string(),
            description: "A comfortable room with a queen-sized bed, perfect for couples.".to_string(),
            capacity: RoomCapacity { adults: 2, children: 0 },
            beds: BedConfiguration { bed_type: "Queen".to_string(), count: 1 },
            amenities: strings(&["Ensuite Bathroom", "TV", "Mini-fridge", "City View"]),
            price_per_night: 350.0,
            images: strings(&[
                "https://placehold.co/400x300.png?text=Standard+Double+Room",
                "https://placehold.co/400x300.png?text=Standard+Room+View",
            ]),
            availability: Some(5),
        },
        Room {
            id: "room-paris-1-deluxe".to_string(),
            hotel_id: "hotel-paris-1".to_string(),
            name: "Deluxe Suite with Eiffel Tower View".to_string(),
            description: "Spacious suite with a separate living area and a balcony overlooking the Eiffel Tower.".to_string(),
            capacity: RoomCapacity { adults: 2, children: 1 },
            beds: BedConfiguration { bed_type: "King".to_string(), count: 1 },
            amenities: strings(&["Ensuite Bathroom", "Jacuzzi Tub", "TV", "Nespresso Machine", "Balcony"]),
            price_per_night: 700.0,
            images: strings(&[
                "https://placehold.co/400x300.png?text=Deluxe+Suite",
                "https://placehold.co/400x300.png?text=Eiffel+Tower+View",
            ]),
            availability: Some(2),
        },
        Room {
            id: "room-paris-2-cozy".to_string(),
            hotel_id: "hotel-paris-2".to_string(),
            name: "Cozy Single Room".to_string(),
            description: "A small, charming room ideal for solo travelers.".to_string(),
            capacity: RoomCapacity { adults: 1, children: 0 },
            beds: BedConfiguration { bed_type: "Single".to_string(), count: 1 },
            amenities: strings(&["Ensuite Bathroom", "TV", "Desk"]),
            price_per_night: 180.0,
            images: strings(&["https://placehold.co/400x300.png?text=Cozy+Single+Room"]),
            availability: Some(3),
        },
        Room {
            id: "room-paris-2-artistic".to_string(),
            hotel_id: "hotel-paris-2".to_string(),
            name: "Artistic Double Room".to_string(),
            description: "Uniquely decorated double room with local art.".to_string(),
            capacity: RoomCapacity { adults: 2, children: 0 },
            beds: BedConfiguration { bed_type: "Double".to_string(), count: 1 },
            amenities: strings(&["Ensuite Bathroom", "TV", "Air Conditioning", "Unique Decor"]),
            price_per_night: 250.0,
            images: strings(&["https://placehold.co/400x300.png?text=Artistic+Double+Room"]),
            availability: Some(4),
        },
        Room {
            id: "room-tokyo-1-garden".to_string(),
            hotel_id: "hotel-tokyo-1".to_string(),
            name: "Garden View Twin Room".to_string(),
            description: "Elegant twin room with serene views of the Imperial Palace gardens.".to_string(),
            capacity: RoomCapacity { adults: 2, children: 0 },
            beds: BedConfiguration { bed_type: "Twin".to_string(), count: 2 },
            amenities: strings(&["Ensuite Bathroom", "TV", "Seating Area", "Minibar"]),
            price_per_night: 500.0,
            images: strings(&[
                "https://placehold.co/400x300.png?text=Garden+View+Twin",
                "https://placehold.co/400x300.png?text=Imperial+Garden+View",
            ]),
            availability: Some(6),
        },
        Room {
            id: "room-tokyo-2-city".to_string(),
            hotel_id: "hotel-tokyo-2".to_string(),
            name: "City View Queen Room".to_string(),
            description: "Modern queen room with expansive views of the Shinjuku cityscape.".to_string(),
            capacity: RoomCapacity { adults: 2, children: 0 },
            beds: BedConfiguration { bed_type: "Queen".to_string(), count: 1 },
            amenities: strings(&["Ensuite Bathroom", "TV", "Work Desk", "High-speed Internet"]),
            price_per_night: 220.0,
            images: strings(&[
                "https://placehold.co/400x300.png?text=City+View+Queen",
                "https://placehold.co/400x300.png?text=Shinjuku+Cityscape",
            ]),
            availability: Some(8),
        },
        Room {
            id: "room-singapore-1-deluxe".to_string(),
            hotel_id: "hotel-singapore-1".to_string(),
            name: "Deluxe Room City View".to_string(),
            description: "Luxurious room offering stunning views of the Singapore skyline.".to_string(),
            capacity: RoomCapacity { adults: 2, children: 1 },
            beds: BedConfiguration { bed_type: "King".to_string(), count: 1 },
            amenities: strings(&["Ensuite Bathroom", "Large TV", "Minibar", "Floor-to-ceiling windows"]),
            price_per_night: 600.0,
            images: strings(&[
                "https://placehold.co/400x300.png?text=MBS+Deluxe+Room",
                "https://placehold.co/400x300.png?text=MBS+City+View",
            ]),
            availability: Some(10),
        },
        Room {
            id: "room-singapore-2-heritage".to_string(),
            hotel_id: "hotel-singapore-2".to_string(),
            name: "Heritage Courtyard Room".to_string(),
            description: "Elegantly appointed room overlooking the hotel's sunlit atrium courtyard.".to_string(),
            capacity: RoomCapacity { adults: 2, children: 0 },
            beds: BedConfiguration { bed_type: "Queen".to_string(), count: 1 },
            amenities: strings(&["Ensuite Bathroom", "TV", "Heritage decor", "Complimentary snacks"]),
            price_per_night: 450.0,
            images: strings(&["https://placehold.co/400x300.png?text=Fullerton+Courtyard+Room"]),
            availability: Some(7),
        },
    ]
}

pub fn reviews() -> Vec<HotelReview> {
    vec![
        HotelReview {
            id: "review-paris-1-1".to_string(),
            hotel_id: "hotel-paris-1".to_string(),
            author: "John Doe".to_string(),
            rating: 5,
            title: Some("Absolutely magnificent!".to_string()),
            comment: "The views were breathtaking and the service was top-notch. Worth every penny.".to_string(),
            date: timestamp(2023, 10, 15, 10, 0),
        },
        HotelReview {
            id: "review-paris-1-2".to_string(),
            hotel_id: "hotel-paris-1".to_string(),
            author: "Jane Smith".to_string(),
            rating: 4,
            title: Some("Wonderful stay".to_string()),
            comment: "Loved the location and the amenities. The pool was fantastic. Room was a bit smaller than expected for the price.".to_string(),
            date: timestamp(2023, 9, 20, 14, 30),
        },
        HotelReview {
            id: "review-paris-2-1".to_string(),
            hotel_id: "hotel-paris-2".to_string(),
            author: "Alice Brown".to_string(),
            rating: 5,
            title: Some("Charming and perfectly located".to_string()),
            comment: "Fell in love with this hotel and the Montmartre area. Staff were incredibly friendly.".to_string(),
            date: timestamp(2023, 11, 1, 9, 15),
        },
        HotelReview {
            id: "review-tokyo-1-1".to_string(),
            hotel_id: "hotel-tokyo-1".to_string(),
            author: "Ken Tanaka".to_string(),
            rating: 5,
            title: Some("Unforgettable Experience".to_string()),
            comment: "The service and views are unparalleled. Truly a 5-star experience in Tokyo.".to_string(),
            date: timestamp(2023, 8, 5, 12, 0),
        },
    ]
}
