use chrono::{DateTime, Local, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M";

/// A bookable offering from the static catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: u32,
    pub name: String,
    #[serde(rename = "duration")]
    pub duration_minutes: u32,
    pub price: f64,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Confirmed,
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service_id: u32,
    pub service_name: String,
    pub date: NaiveDate,
    #[serde(with = "slot_time")]
    pub time: NaiveTime,
    pub notes: String,
    pub status: AppointmentStatus,
    pub created_at: DateTime<Local>,
}

/// Booking payload as the client sends it. Every field is optional so that
/// missing ones can be reported by name instead of failing deserialization;
/// date and time stay raw strings until the validation sequence parses them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookingRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub service_id: Option<u32>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub notes: Option<String>,
}

/// Serde adapter rendering appointment times as zero-padded `HH:MM`.
pub mod slot_time {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::TIME_FORMAT;

    pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&time.format(TIME_FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&raw, TIME_FORMAT).map_err(serde::de::Error::custom)
    }
}
