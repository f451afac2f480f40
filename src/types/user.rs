//! User profile records.

use super::OptionMap;
use serde::{Serialize, Serializer};

/// Body of `POST /latest/user/{email}`: the caller's attributes at the top
/// level plus a `properties` object.
#[derive(Debug, Clone, PartialEq)]
pub struct UserRecord {
    attributes: OptionMap,
    properties: OptionMap,
}

impl UserRecord {
    /// Build a record from attribute and property maps.
    ///
    /// Both maps are copied; a `properties` entry in `attributes` is
    /// replaced by `properties`.
    pub fn new(attributes: &OptionMap, properties: Option<&OptionMap>) -> Self {
        Self {
            attributes: attributes.clone(),
            properties: properties.cloned().unwrap_or_default(),
        }
    }

    /// Flattened JSON object sent to the API.
    pub fn to_body(&self) -> OptionMap {
        let mut body = self.attributes.clone();
        body.insert(
            "properties".to_string(),
            serde_json::Value::Object(self.properties.clone()),
        );
        body
    }
}

impl Serialize for UserRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_body().serialize(serializer)
    }
}
