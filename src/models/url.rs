use crate::utils::UrlOperation;
use serde::{Deserialize, Deserializer};

#[derive(Debug, Serialize, Deserialize)]
pub struct ProcessUrlV1 {
    pub url: String,
    #[serde(default, deserialize_with = "deserialize_operation")]
    pub operation: UrlOperation,
}

/// An explicit `null` operation is treated the same as a missing one.
fn deserialize_operation<'de, D>(deserializer: D) -> Result<UrlOperation, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<UrlOperation>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ProcessedUrlV1 {
    #[serde(rename = "processedURL")]
    pub processed_url: String,
}

json_responder!(ProcessedUrlV1);
