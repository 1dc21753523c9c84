use serde::Deserialize;
use thiserror::Error;

/// Standard GraphQL response envelope.
#[derive(Debug, Deserialize)]
pub struct GraphqlEnvelope<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphqlErrorEntry>,
}

#[derive(Debug, Deserialize)]
pub struct GraphqlErrorEntry {
    pub message: String,
}

#[derive(Debug, Error, PartialEq)]
pub enum EnvelopeError {
    #[error("graphql error: {0}")]
    Graphql(String),
    #[error("graphql response carried no data")]
    MissingData,
}

impl<T> GraphqlEnvelope<T> {
    /// Errors win over partial data; a response with neither is malformed.
    pub fn into_data(self) -> Result<T, EnvelopeError> {
        if let Some(first) = self.errors.into_iter().next() {
            return Err(EnvelopeError::Graphql(first.message));
        }
        self.data.ok_or(EnvelopeError::MissingData)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::ZoneCheck;

    #[derive(Debug, Deserialize)]
    struct ZoneData {
        #[serde(rename = "zoneCheck")]
        zone_check: ZoneCheck,
    }

    #[test]
    fn unwraps_data() {
        let raw = r#"{"data":{"zoneCheck":{"selectedZone":"zone-1","fallbackZone":null}}}"#;
        let envelope: GraphqlEnvelope<ZoneData> = serde_json::from_str(raw).unwrap();
        let data = envelope.into_data().unwrap();
        assert_eq!(data.zone_check.selected_zone.as_deref(), Some("zone-1"));
        assert_eq!(data.zone_check.fallback_zone, None);
    }

    #[test]
    fn errors_take_precedence() {
        let raw = r#"{"data":null,"errors":[{"message":"unauthorized"}]}"#;
        let envelope: GraphqlEnvelope<ZoneData> = serde_json::from_str(raw).unwrap();
        assert_eq!(
            envelope.into_data().unwrap_err(),
            EnvelopeError::Graphql("unauthorized".into())
        );
    }

    #[test]
    fn missing_data_is_an_error() {
        let raw = r#"{}"#;
        let envelope: GraphqlEnvelope<ZoneData> = serde_json::from_str(raw).unwrap();
        assert_eq!(envelope.into_data().unwrap_err(), EnvelopeError::MissingData);
    }
}
