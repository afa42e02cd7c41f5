//! Wire shapes for every resource family.
//!
//! All structs default every field so partial or null-heavy payloads still
//! decode; see [`crate::decode`].
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub mod fixtures;
pub mod leagues;
pub mod people;
pub mod players;
pub mod search;
pub mod standings;
pub mod teams;

/// Envelope wrapped around every response body.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ApiResponse<T> {
    pub get: String,
    pub parameters: Value,
    pub errors: Value,
    pub results: i64,
    pub paging: Paging,
    pub response: T,
}

impl<T> ApiResponse<T> {
    /// True when the upstream `errors` member is non-empty. The API reports
    /// quota and parameter problems here with a 200 status.
    pub fn has_errors(&self) -> bool {
        match &self.errors {
            Value::Null => false,
            Value::Array(items) => !items.is_empty(),
            Value::Object(map) => !map.is_empty(),
            Value::String(s) => !s.is_empty(),
            Value::Bool(b) => *b,
            Value::Number(_) => true,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Paging {
    pub current: i64,
    pub total: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct TeamRef {
    pub id: i64,
    pub name: String,
    pub logo: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct PersonRef {
    pub id: i64,
    pub name: String,
    pub photo: String,
}

/// League as embedded in fixtures, injuries and statistics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LeagueRef {
    pub id: i64,
    pub name: String,
    pub country: String,
    pub logo: String,
    pub flag: String,
    pub season: i64,
    pub round: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Birth {
    pub date: String,
    pub place: String,
    pub country: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct HomeAway<T> {
    pub home: T,
    pub away: T,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct HomeAwayTotal<T = i64> {
    pub home: T,
    pub away: T,
    pub total: T,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct MinuteStat {
    pub total: i64,
    pub percentage: String,
}

/// Counts split into fifteen-minute windows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct MinuteBreakdown {
    #[serde(rename = "0-15")]
    pub m0_15: MinuteStat,
    #[serde(rename = "16-30")]
    pub m16_30: MinuteStat,
    #[serde(rename = "31-45")]
    pub m31_45: MinuteStat,
    #[serde(rename = "46-60")]
    pub m46_60: MinuteStat,
    #[serde(rename = "61-75")]
    pub m61_75: MinuteStat,
    #[serde(rename = "76-90")]
    pub m76_90: MinuteStat,
    #[serde(rename = "91-105")]
    pub m91_105: MinuteStat,
    #[serde(rename = "106-120")]
    pub m106_120: MinuteStat,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::decode;

    #[test]
    fn envelope_decodes_counts_and_paging() {
        let body = br#"{
            "get": "teams",
            "parameters": {"league": "39"},
            "errors": [],
            "results": 20,
            "paging": {"current": 1, "total": 3},
            "response": []
        }"#;
        let resp: ApiResponse<Vec<TeamRef>> = decode(body).unwrap();
        assert_eq!(resp.get, "teams");
        assert_eq!(resp.results, 20);
        assert_eq!(resp.paging, Paging { current: 1, total: 3 });
        assert!(!resp.has_errors());
    }

    #[test]
    fn upstream_errors_are_reported_not_raised() {
        let body = br#"{"errors": {"token": "Error/Missing application key."}, "results": 0}"#;
        let resp: ApiResponse<Vec<TeamRef>> = decode(body).unwrap();
        assert!(resp.has_errors());
        assert!(resp.response.is_empty());
    }

    #[test]
    fn minute_windows_map_by_label() {
        let body = br#"{"0-15": {"total": 4, "percentage": "10.5%"}, "106-120": {"total": null}}"#;
        let minutes: MinuteBreakdown = decode(body).unwrap();
        assert_eq!(minutes.m0_15.total, 4);
        assert_eq!(minutes.m0_15.percentage, "10.5%");
        assert_eq!(minutes.m106_120, MinuteStat::default());
    }
}
