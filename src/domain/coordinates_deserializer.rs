use crate::domain::Coordinates;
use crate::domain::coordinates::validate;
use serde::de::Error;
use serde::{Deserialize, Deserializer};

impl<'de> Deserialize<'de> for Coordinates {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Debug, Deserialize)]
        pub struct Inner {
            latitude: f64,
            longitude: f64,
        }

        let inner = Inner::deserialize(deserializer)?;
        validate(inner.latitude, inner.longitude).map_err(Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn deserializes_valid_coordinates() -> Result<(), serde_json::Error> {
        let coordinates: Coordinates = serde_json::from_str(r#"{"latitude": 12.345678, "longitude": 77.123456}"#)?;

        assert_eq!(
            coordinates,
            Coordinates {
                latitude: 12.345678,
                longitude: 77.123456
            }
        );

        Ok(())
    }

    #[test]
    fn rejects_an_out_of_range_latitude() {
        let result = serde_json::from_str::<Coordinates>(r#"{"latitude": 123.4, "longitude": 77.1}"#);

        let error = result.unwrap_err().to_string();
        assert!(error.contains("invalid latitude: 123.4"), "{}", error);
    }

    #[test]
    fn rejects_string_components() {
        let result = serde_json::from_str::<Coordinates>(r#"{"latitude": "12.3", "longitude": 77.1}"#);

        assert!(result.is_err());
    }
}
