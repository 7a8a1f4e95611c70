use serde::{Deserialize, Serialize};

/// A hotel as listed by the API. Every text field may come back as `null`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Hotel {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
}

impl Hotel {
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    pub fn city(&self) -> &str {
        self.city.as_deref().unwrap_or_default()
    }

    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or_default()
    }
}

/// Query string accepted by the hotel list page.
#[derive(Debug, Default, Deserialize)]
pub struct HotelSearch {
    pub city: Option<String>,
    pub name: Option<String>,
}

impl HotelSearch {
    /// The city filter, if one was entered. Blank input means "all hotels".
    pub fn city(&self) -> Option<&str> {
        non_blank(&self.city)
    }

    pub fn name(&self) -> Option<&str> {
        non_blank(&self.name)
    }

    pub fn is_empty(&self) -> bool {
        self.city().is_none() && self.name().is_none()
    }

    /// Filters to forward to `/api/hotels/search`.
    pub fn query(&self) -> Vec<(&'static str, &str)> {
        let mut query = Vec::new();
        if let Some(city) = self.city() {
            query.push(("city", city));
        }
        if let Some(name) = self.name() {
            query.push(("name", name));
        }
        query
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn null_text_fields_read_as_empty() {
        let hotel: Hotel = serde_json::from_str(
            r#"{"id":1,"name":"Aurora","city":null,"description":null,"rating":null,"totalRooms":20}"#,
        )
        .unwrap();
        assert_eq!(hotel.name(), "Aurora");
        assert_eq!(hotel.city(), "");
        assert_eq!(hotel.description(), "");
    }

    #[test]
    fn blank_filters_are_dropped() {
        let search = HotelSearch {
            city: Some("  ".into()),
            name: Some(" Aurora ".into()),
        };
        assert!(!search.is_empty());
        assert_eq!(search.query(), vec![("name", "Aurora")]);
        assert!(HotelSearch::default().is_empty());
    }
}
