use anyhow::{Context, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use tracing::warn;

const PLACEHOLDER_MESSAGE: &str = "Item details unavailable";

/// Item record returned by the catalog service.
///
/// The catalog owns the shape of these records; this service only passes them
/// through, so everything beyond the identifier stays an open attribute map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDetail {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(flatten)]
    pub attributes: serde_json::Map<String, Value>,
}

impl ItemDetail {
    /// Sentinel returned when enrichment is unavailable. Distinct from "the
    /// catalog has no such item": placeholders carry no id at all.
    pub fn placeholder() -> Self {
        let mut attributes = serde_json::Map::new();
        attributes.insert(
            "message".to_string(),
            Value::String(PLACEHOLDER_MESSAGE.to_string()),
        );
        Self {
            id: None,
            attributes,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.id.is_none()
            && self
                .attributes
                .get("message")
                .and_then(Value::as_str)
                .map(|msg| msg == PLACEHOLDER_MESSAGE)
                .unwrap_or(false)
    }
}

/// Client for the external catalog service.
///
/// Lookups are batched into one GET with a comma-joined id list. Failures
/// degrade instead of propagating: the caller always gets a list back, with a
/// single placeholder element when the catalog could not answer. Cart and
/// wishlist membership stays authoritative from the store either way.
#[derive(Clone)]
pub struct CatalogClient {
    client: Client,
    base_url: String,
}

impl CatalogClient {
    /// Build a client with a bounded request timeout. A hung catalog call
    /// expires into the same degrade path as a failed one.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("failed to construct reqwest client for catalog service")?;

        Ok(Self::with_client(base_url, client))
    }

    /// Build a client from an existing reqwest client (useful for testing).
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Fetches details for a non-empty set of item ids. Callers skip the call
    /// entirely when the owning collection is empty.
    pub async fn fetch_details(&self, item_ids: &[i64]) -> Vec<ItemDetail> {
        let joined = join_ids(item_ids);
        let url = format!("{}/items/by-ids", self.base_url);

        let response = match self
            .client
            .get(&url)
            .query(&[("itemIds", joined.as_str())])
            .send()
            .await
        {
            Ok(response) => response,
            Err(err) => {
                warn!(error = %err, item_ids = %joined, "catalog request failed");
                return vec![ItemDetail::placeholder()];
            }
        };

        if !response.status().is_success() {
            warn!(
                status = %response.status(),
                item_ids = %joined,
                "catalog returned non-success status"
            );
            return vec![ItemDetail::placeholder()];
        }

        match response.json::<Vec<ItemDetail>>().await {
            Ok(details) => details,
            Err(err) => {
                warn!(error = %err, item_ids = %joined, "catalog response could not be decoded");
                vec![ItemDetail::placeholder()]
            }
        }
    }
}

fn join_ids(item_ids: &[i64]) -> String {
    item_ids
        .iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_ids_with_commas() {
        assert_eq!(join_ids(&[101, 102, 205]), "101,102,205");
        assert_eq!(join_ids(&[7]), "7");
    }

    #[test]
    fn placeholder_is_recognizable() {
        let placeholder = ItemDetail::placeholder();
        assert!(placeholder.is_placeholder());
        assert!(placeholder.id.is_none());
    }

    #[test]
    fn real_record_is_not_a_placeholder() {
        let detail: ItemDetail = serde_json::from_value(serde_json::json!({
            "id": 101,
            "title": "The Rust Programming Language",
            "price": 39.99
        }))
        .unwrap();

        assert!(!detail.is_placeholder());
        assert_eq!(detail.id, Some(101));
        assert_eq!(
            detail.attributes.get("title").and_then(Value::as_str),
            Some("The Rust Programming Language")
        );
    }

    #[test]
    fn record_without_id_but_with_other_message_is_not_a_placeholder() {
        let detail: ItemDetail = serde_json::from_value(serde_json::json!({
            "message": "out of print"
        }))
        .unwrap();

        assert!(!detail.is_placeholder());
    }

    #[test]
    fn placeholder_round_trips_through_json() {
        let placeholder = ItemDetail::placeholder();
        let json = serde_json::to_value(&placeholder).unwrap();
        assert_eq!(json, serde_json::json!({ "message": PLACEHOLDER_MESSAGE }));

        let back: ItemDetail = serde_json::from_value(json).unwrap();
        assert!(back.is_placeholder());
    }
}
