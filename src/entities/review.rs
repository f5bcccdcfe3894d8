use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelReview {
    pub id: String,
    /// Reviews belong to hotels by explicit foreign key.
    pub hotel_id: String,
    pub author: String,
    /// 1-5
    pub rating: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub comment: String,
    pub date: DateTime<Utc>,
}
