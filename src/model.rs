//! Typed wire contract for the location API.
//!
//! Each response shape gets its own record so tests decode with serde
//! instead of walking untyped maps.

use serde::{Deserialize, Serialize};

/// Location codes in the order the list-all endpoint returns them.
pub const LOCATION_CODES: [&str; 4] = ["LON", "MAN", "CAM", "LCS"];

/// Fixed endpoint paths served by the stub set.
pub mod paths {
    /// `GET`/`POST` target listing every location.
    pub const LIST_ALL: &str = "/location/get/all";

    /// `GET` target for a single location code.
    pub fn location(code: &str) -> String {
        format!("/location/get/{code}")
    }
}

/// Response body of `GET /location/get/all`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationList {
    pub items: Vec<LocationEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationEntry {
    pub location: String,
}

impl LocationList {
    /// The `location` field of every item, preserving response order.
    pub fn location_codes(&self) -> Vec<&str> {
        self.items.iter().map(|item| item.location.as_str()).collect()
    }
}

/// Response body of `GET /location/get/{code}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationDetails {
    pub items: Vec<LocationDetail>,
}

/// One priced location item. Field order mirrors the fixture files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationDetail {
    pub cost: String,
    pub location: String,
    pub id: String,
}

impl LocationDetail {
    /// Field values in fixture order: cost, location, id.
    pub fn values(&self) -> [&str; 3] {
        [&self.cost, &self.location, &self.id]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_list_decodes_and_preserves_order() {
        let body = r#"{"items":[{"location":"LON"},{"location":"MAN"},{"location":"CAM"},{"location":"LCS"}]}"#;
        let list: LocationList = serde_json::from_str(body).unwrap();
        assert_eq!(list.location_codes(), LOCATION_CODES);
    }

    #[test]
    fn test_location_detail_values_order() {
        let body = r#"{"items":[{"cost":"9.99","location":"LON","id":"ID1"}]}"#;
        let details: LocationDetails = serde_json::from_str(body).unwrap();
        assert_eq!(details.items.len(), 1);
        assert_eq!(details.items[0].values(), ["9.99", "LON", "ID1"]);
    }

    #[test]
    fn test_location_path_substitution() {
        assert_eq!(paths::location("CAM"), "/location/get/CAM");
    }
}
