use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("{0}")]
    Parse(#[from] serde_json::Error),

    #[error("Expected key {key} not in JSON\n{body}")]
    MissingKey { key: &'static str, body: String },
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct FeatureRecord {
    pub age: Option<Value>,
    pub income: Option<Value>,
}

impl FeatureRecord {
    /// Valide le corps brut d'une requête et le transforme en enregistrement.
    ///
    /// Seule la présence des clés est vérifiée, jamais leur type: une valeur
    /// non numérique passe la validation et échoue plus tard, côté modèle.
    pub fn parse(raw: &[u8]) -> Result<Self, FormatError> {
        let record: FeatureRecord = serde_json::from_slice(raw)?;

        // La première clé manquante interrompt la vérification
        for (key, value) in [("age", &record.age), ("income", &record.income)] {
            if value.is_none() {
                return Err(FormatError::MissingKey {
                    key,
                    body: String::from_utf8_lossy(raw).into_owned(),
                });
            }
        }

        Ok(record)
    }
}

#[derive(Debug, Serialize)]
pub struct ResultPayload {
    pub result: serde_json::Number,
}

#[derive(Debug, Serialize)]
pub struct FormatErrorPayload {
    #[serde(rename = "Incorrect JSON format:\n")]
    pub detail: String,
}

#[derive(Debug, Serialize)]
pub struct ServerErrorPayload {
    #[serde(rename = "Server Error:\n")]
    pub detail: String,
}
