use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: String,
    pub hotel_id: String,
    pub name: String,
    pub description: String,
    pub capacity: RoomCapacity,
    pub beds: BedConfiguration,
    pub amenities: Vec<String>,
    pub price_per_night: f64,
    pub images: Vec<String>,
    /// Number of such rooms available.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability: Option<u32>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomCapacity {
    pub adults: u32,
    pub children: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BedConfiguration {
    #[serde(rename = "type")]
    pub bed_type: String,
    pub count: u32,
}
