use serde::{Deserialize, Serialize};

/// A Brazilian postal address as collected from the customer.
///
/// `complement` and `neighborhood` are optional; everything else must be
/// present before the address can be geocoded. The country is not stored
/// here because it is fixed per deployment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub complement: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub neighborhood: Option<String>,
    pub city: String,
    pub state: String,
}

/// Address fields that must be non-empty before resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequiredField {
    Street,
    Number,
    City,
    State,
}

impl std::fmt::Display for RequiredField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RequiredField::Street => write!(f, "street"),
            RequiredField::Number => write!(f, "number"),
            RequiredField::City => write!(f, "city"),
            RequiredField::State => write!(f, "state"),
        }
    }
}

impl Address {
    /// Required fields that are empty or whitespace-only, in form order.
    #[must_use]
    pub fn missing_required_fields(&self) -> Vec<RequiredField> {
        [
            (RequiredField::Street, &self.street),
            (RequiredField::Number, &self.number),
            (RequiredField::City, &self.city),
            (RequiredField::State, &self.state),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.missing_required_fields().is_empty()
    }

    /// Free-text form sent to the geocoder.
    ///
    /// Joins `"{street}, {number}"`, complement, neighborhood,
    /// `"{city}, {state}"` and `country` with `", "`, skipping optional parts
    /// that are absent or blank.
    #[must_use]
    pub fn full_text(&self, country: &str) -> String {
        let street_line = format!("{}, {}", self.street.trim(), self.number.trim());
        let city_line = format!("{}, {}", self.city.trim(), self.state.trim());

        [
            Some(street_line.as_str()),
            self.complement.as_deref().map(str::trim),
            self.neighborhood.as_deref().map(str::trim),
            Some(city_line.as_str()),
            Some(country.trim()),
        ]
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Address {
        Address {
            street: "Rua Arcílio Federzoni".to_string(),
            number: "971".to_string(),
            complement: None,
            neighborhood: Some("Jardim Silva".to_string()),
            city: "Francisco Morato".to_string(),
            state: "SP".to_string(),
        }
    }

    #[test]
    fn full_text_joins_fields_with_country_suffix() {
        assert_eq!(
            sample().full_text("Brasil"),
            "Rua Arcílio Federzoni, 971, Jardim Silva, Francisco Morato, SP, Brasil"
        );
    }

    #[test]
    fn full_text_includes_complement_before_neighborhood() {
        let mut address = sample();
        address.complement = Some("Apto 12".to_string());
        assert_eq!(
            address.full_text("Brasil"),
            "Rua Arcílio Federzoni, 971, Apto 12, Jardim Silva, Francisco Morato, SP, Brasil"
        );
    }

    #[test]
    fn full_text_skips_blank_optional_fields() {
        let mut address = sample();
        address.complement = Some("   ".to_string());
        address.neighborhood = Some(String::new());
        assert_eq!(
            address.full_text("Brasil"),
            "Rua Arcílio Federzoni, 971, Francisco Morato, SP, Brasil"
        );
    }

    #[test]
    fn complete_address_has_no_missing_fields() {
        assert!(sample().missing_required_fields().is_empty());
        assert!(sample().is_complete());
    }

    #[test]
    fn missing_number_is_reported() {
        let mut address = sample();
        address.number = " ".to_string();
        assert_eq!(
            address.missing_required_fields(),
            vec![RequiredField::Number]
        );
    }

    #[test]
    fn missing_fields_are_reported_in_form_order() {
        let address = Address {
            neighborhood: Some("Centro".to_string()),
            ..Address::default()
        };
        assert_eq!(
            address.missing_required_fields(),
            vec![
                RequiredField::Street,
                RequiredField::Number,
                RequiredField::City,
                RequiredField::State,
            ]
        );
    }

    #[test]
    fn optional_fields_are_omitted_from_json() {
        let json = serde_json::to_value(sample()).expect("serialize");
        assert!(json.get("complement").is_none());
        assert_eq!(json["neighborhood"], "Jardim Silva");
    }
}
