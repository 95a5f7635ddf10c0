//! # Perfil do Usuário
//!
//! O [`UserProfile`] é a entrada de todas as operações de raciocínio.
//! O motor **nunca o modifica**: é recebido por referência a cada chamada.
//!
//! A validação (tipo de pele obrigatório) acontece na fronteira HTTP;
//! aqui listas vazias significam apenas "sem restrição".

use std::fmt;

use serde::{Deserialize, Serialize};

/// Sensibilidade declarada pelo usuário.
///
/// As cinco conhecidas têm marcadores e penalidades fixas; qualquer outro
/// texto vira [`SensitivityTag::Other`] e é usado literalmente como marcador.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SensitivityTag {
    Fragrance,
    Alcohol,
    Silicone,
    Sulfate,
    Paraben,
    Other(String),
}

impl SensitivityTag {
    pub fn as_str(&self) -> &str {
        match self {
            SensitivityTag::Fragrance => "fragrance",
            SensitivityTag::Alcohol => "alcohol",
            SensitivityTag::Silicone => "silicone",
            SensitivityTag::Sulfate => "sulfate",
            SensitivityTag::Paraben => "paraben",
            SensitivityTag::Other(s) => s.as_str(),
        }
    }
}

impl From<&str> for SensitivityTag {
    fn from(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "fragrance" => SensitivityTag::Fragrance,
            "alcohol" => SensitivityTag::Alcohol,
            "silicone" => SensitivityTag::Silicone,
            "sulfate" => SensitivityTag::Sulfate,
            "paraben" => SensitivityTag::Paraben,
            other => SensitivityTag::Other(other.to_string()),
        }
    }
}

impl From<String> for SensitivityTag {
    fn from(value: String) -> Self {
        SensitivityTag::from(value.as_str())
    }
}

impl From<SensitivityTag> for String {
    fn from(tag: SensitivityTag) -> Self {
        tag.as_str().to_string()
    }
}

impl fmt::Display for SensitivityTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Perfil de pele informado pelo usuário.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub skin_type: String,
    #[serde(default)]
    pub skin_concerns: Vec<String>,
    #[serde(default)]
    pub known_sensitivities: Vec<SensitivityTag>,
}

impl UserProfile {
    pub fn new(skin_type: impl Into<String>) -> Self {
        Self {
            skin_type: skin_type.into(),
            ..Self::default()
        }
    }

    pub fn with_concerns<I, S>(mut self, concerns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.skin_concerns = concerns.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_sensitivities<I, S>(mut self, sensitivities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SensitivityTag>,
    {
        self.known_sensitivities = sensitivities.into_iter().map(Into::into).collect();
        self
    }

    /// Tipo de pele normalizado (minúsculas, sem espaços nas bordas).
    pub fn skin_type_key(&self) -> String {
        self.skin_type.trim().to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sensitivity_tags_parse_case_insensitively() {
        assert_eq!(SensitivityTag::from("Fragrance"), SensitivityTag::Fragrance);
        assert_eq!(SensitivityTag::from(" PARABEN "), SensitivityTag::Paraben);
        assert_eq!(
            SensitivityTag::from("Lanolin"),
            SensitivityTag::Other("lanolin".into())
        );
    }

    #[test]
    fn profile_deserializes_from_camel_case_json() {
        let json = r#"{"skinType":"Oily","skinConcerns":["acne"],"knownSensitivities":["alcohol","nickel"]}"#;
        let profile: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.skin_type_key(), "oily");
        assert_eq!(profile.skin_concerns, vec!["acne"]);
        assert_eq!(
            profile.known_sensitivities,
            vec![SensitivityTag::Alcohol, SensitivityTag::Other("nickel".into())]
        );
    }

    #[test]
    fn missing_lists_default_to_empty() {
        let profile: UserProfile = serde_json::from_str(r#"{"skinType":"dry"}"#).unwrap();
        assert!(profile.skin_concerns.is_empty());
        assert!(profile.known_sensitivities.is_empty());
    }
}
