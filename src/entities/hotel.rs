use serde::{Deserialize, Serialize};

use super::review::HotelReview;
use super::room::Room;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hotel {
    pub id: String,
    pub name: String,
    pub destination_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_name: Option<String>,
    pub description: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub star_rating: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guest_rating: Option<f64>,
    pub amenities: Vec<String>,
    pub images: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cheapest_room_price: Option<f64>,
    /// Attached by the one-time join at catalog load.
    #[serde(default)]
    pub rooms: Vec<Room>,
    #[serde(default)]
    pub reviews: Vec<HotelReview>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policies: Option<HotelPolicies>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<HotelContact>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelPolicies {
    pub check_in: String,
    pub check_out: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelContact {
    pub phone: String,
    pub email: String,
}
