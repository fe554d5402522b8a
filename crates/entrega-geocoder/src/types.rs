//! Raw response types for the upstream lookup services.
//!
//! These mirror the JSON shapes on the wire; the clients convert them into
//! domain types before handing them out.

use serde::Deserialize;

// ---------------------------------------------------------------------------
// Nominatim /search (format=jsonv2)
// ---------------------------------------------------------------------------

/// One candidate place from a `/search` response.
///
/// Nominatim sends `lat` and `lon` as decimal strings.
#[derive(Debug, Deserialize)]
pub struct NominatimPlace {
    pub lat: String,
    pub lon: String,
    #[serde(default)]
    pub display_name: String,
}

// ---------------------------------------------------------------------------
// ViaCEP /ws/{cep}/json/
// ---------------------------------------------------------------------------

/// ViaCEP lookup result.
///
/// Unknown CEPs come back as HTTP 200 with `{"erro": true}`; older
/// deployments send the string `"true"` instead of a boolean.
#[derive(Debug, Deserialize)]
pub struct ViaCepResponse {
    #[serde(default)]
    pub erro: Option<serde_json::Value>,
    #[serde(default)]
    pub cep: String,
    #[serde(default)]
    pub logradouro: String,
    #[serde(default)]
    pub complemento: String,
    #[serde(default)]
    pub bairro: String,
    #[serde(default)]
    pub localidade: String,
    #[serde(default)]
    pub uf: String,
}

impl ViaCepResponse {
    #[must_use]
    pub fn is_error(&self) -> bool {
        match &self.erro {
            Some(serde_json::Value::Bool(flag)) => *flag,
            Some(serde_json::Value::String(flag)) => flag.eq_ignore_ascii_case("true"),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viacep_error_flag_accepts_bool_and_string() {
        let as_bool: ViaCepResponse = serde_json::from_str(r#"{"erro": true}"#).unwrap();
        let as_str: ViaCepResponse = serde_json::from_str(r#"{"erro": "true"}"#).unwrap();
        assert!(as_bool.is_error());
        assert!(as_str.is_error());
    }

    #[test]
    fn viacep_success_has_no_error_flag() {
        let body = r#"{
            "cep": "07908-000",
            "logradouro": "Rua Arcílio Federzoni",
            "complemento": "",
            "bairro": "Jardim Silva",
            "localidade": "Francisco Morato",
            "uf": "SP",
            "ibge": "3516309"
        }"#;
        let parsed: ViaCepResponse = serde_json::from_str(body).unwrap();
        assert!(!parsed.is_error());
        assert_eq!(parsed.localidade, "Francisco Morato");
    }

    #[test]
    fn nominatim_place_keeps_string_coordinates() {
        let body = r#"[{"lat": "-23.47", "lon": "-46.34", "display_name": "Centro"}]"#;
        let places: Vec<NominatimPlace> = serde_json::from_str(body).unwrap();
        assert_eq!(places[0].lat, "-23.47");
        assert_eq!(places[0].display_name, "Centro");
    }
}
