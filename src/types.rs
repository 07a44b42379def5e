//! Wire model for the `/dashboardNew` endpoint.
//!
//! Field names follow the JSON contract exactly; only `statusCode` and
//! `startTime` need explicit renames. Every field except
//! `support_whatsapp_number` is required, so an incomplete payload fails to
//! decode instead of producing a partially defaulted snapshot.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// Top-level dashboard payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardResponse {
    pub status: bool,
    #[serde(rename = "statusCode")]
    pub status_code: i64,
    pub message: String,
    #[serde(default)]
    pub support_whatsapp_number: Option<String>,
    pub extra_income: f64,
    pub total_links: i64,
    pub total_clicks: i64,
    pub today_clicks: i64,
    pub top_source: String,
    pub top_location: String,
    #[serde(rename = "startTime")]
    pub start_time: String,
    pub links_created_today: i64,
    pub applied_campaign: i64,
    pub data: DashboardData,
}

/// Link lists and the click chart nested under `data`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardData {
    pub recent_links: Vec<Link>,
    pub top_links: Vec<Link>,
    /// Click counts keyed by chart label (usually a date), in key order.
    pub overall_url_chart: BTreeMap<String, i64>,
    pub today_clicks: i64,
}

/// Identity assigned to a [`Link`] when it is decoded.
///
/// Only meaningful within one snapshot (list rendering). It is not part of the
/// wire format and two decodes of the same payload produce different ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LinkId(Uuid);

impl LinkId {
    pub fn fresh() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for LinkId {
    fn default() -> Self {
        Self::fresh()
    }
}

/// One shortened link.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Link {
    #[serde(skip)]
    pub id: LinkId,
    pub url_id: i64,
    pub web_link: String,
    pub smart_link: String,
    pub title: String,
    pub times_ago: String,
    pub created_at: String,
    pub total_clicks: i64,
    pub original_image: String,
    pub thumbnail: String,
    pub times: String,
    pub url_prefix: String,
    pub url_suffix: String,
    pub app: String,
}

// `id` is local identity only, so equality covers the wire fields.
impl PartialEq for Link {
    fn eq(&self, other: &Self) -> bool {
        self.url_id == other.url_id
            && self.web_link == other.web_link
            && self.smart_link == other.smart_link
            && self.title == other.title
            && self.times_ago == other.times_ago
            && self.created_at == other.created_at
            && self.total_clicks == other.total_clicks
            && self.original_image == other.original_image
            && self.thumbnail == other.thumbnail
            && self.times == other.times
            && self.url_prefix == other.url_prefix
            && self.url_suffix == other.url_suffix
            && self.app == other.app
    }
}

impl DashboardData {
    /// Largest chart value, or zero for an empty chart.
    pub fn chart_peak(&self) -> i64 {
        self.overall_url_chart.values().copied().max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testsupport::sample_dashboard_json;

    #[test]
    fn decodes_sample_payload() {
        let parsed: DashboardResponse =
            serde_json::from_str(&sample_dashboard_json()).expect("decode");
        assert!(parsed.status);
        assert_eq!(parsed.status_code, 200);
        assert_eq!(parsed.total_links, 42);
        assert_eq!(parsed.top_source, "Instagram");
        assert_eq!(parsed.start_time, "09:00");
        assert_eq!(parsed.support_whatsapp_number, None);
        assert_eq!(parsed.data.top_links.len(), 2);
        assert_eq!(parsed.data.recent_links.len(), 1);
        assert_eq!(parsed.data.top_links[0].title, "Spring sale");
        assert_eq!(parsed.data.overall_url_chart.get("2024-01-02"), Some(&7));
        assert_eq!(parsed.data.chart_peak(), 12);
    }

    #[test]
    fn round_trip_preserves_wire_fields_and_regenerates_ids() {
        let first: DashboardResponse =
            serde_json::from_str(&sample_dashboard_json()).expect("decode");
        let encoded = serde_json::to_string(&first).expect("encode");
        assert!(!encoded.contains("\"id\""), "local id leaked: {encoded}");
        assert!(encoded.contains("\"statusCode\""));
        assert!(encoded.contains("\"startTime\""));

        let second: DashboardResponse = serde_json::from_str(&encoded).expect("decode again");
        assert_eq!(first, second);
        assert_ne!(first.data.top_links[0].id, second.data.top_links[0].id);
    }

    #[test]
    fn links_in_one_snapshot_get_distinct_ids() {
        let parsed: DashboardResponse =
            serde_json::from_str(&sample_dashboard_json()).expect("decode");
        let top = &parsed.data.top_links;
        assert_ne!(top[0].id, top[1].id);
        assert_ne!(top[0].id, parsed.data.recent_links[0].id);
    }

    #[test]
    fn missing_required_field_is_rejected() {
        let mut value: serde_json::Value =
            serde_json::from_str(&sample_dashboard_json()).expect("json");
        value
            .as_object_mut()
            .expect("object")
            .remove("total_links");
        let err = serde_json::from_value::<DashboardResponse>(value).expect_err("must fail");
        assert!(err.to_string().contains("total_links"), "got: {err}");
    }

    #[test]
    fn type_mismatch_in_nested_link_is_rejected() {
        let mut value: serde_json::Value =
            serde_json::from_str(&sample_dashboard_json()).expect("json");
        value["data"]["top_links"][0]["total_clicks"] = serde_json::json!("many");
        assert!(serde_json::from_value::<DashboardResponse>(value).is_err());
    }

    #[test]
    fn whatsapp_number_accepts_null_and_string() {
        let mut value: serde_json::Value =
            serde_json::from_str(&sample_dashboard_json()).expect("json");
        value["support_whatsapp_number"] = serde_json::Value::Null;
        let parsed: DashboardResponse = serde_json::from_value(value.clone()).expect("null");
        assert_eq!(parsed.support_whatsapp_number, None);

        value["support_whatsapp_number"] = serde_json::json!("+910000000000");
        let parsed: DashboardResponse = serde_json::from_value(value).expect("string");
        assert_eq!(
            parsed.support_whatsapp_number.as_deref(),
            Some("+910000000000")
        );
    }

    #[test]
    fn integer_extra_income_decodes_as_float() {
        let mut value: serde_json::Value =
            serde_json::from_str(&sample_dashboard_json()).expect("json");
        value["extra_income"] = serde_json::json!(3);
        let parsed: DashboardResponse = serde_json::from_value(value).expect("decode");
        assert!((parsed.extra_income - 3.0).abs() < f64::EPSILON);
    }
}
