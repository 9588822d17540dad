use serde::{Deserialize, Serialize};

/// Badge shown when the backend has not assigned a status yet.
pub const DEFAULT_STATUS: &str = "ABERTA";

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct IncidentRecord {
    pub id: i64,
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "localizacao")]
    pub location: String,
    #[serde(rename = "descricao")]
    pub description: String,
    #[serde(default)]
    pub status: Option<String>,
}

impl IncidentRecord {
    pub fn status_label(&self) -> &str {
        match self.status.as_deref() {
            Some(status) if !status.is_empty() => status,
            _ => DEFAULT_STATUS,
        }
    }
}

/// Creation payload; the backend assigns `id` and `status`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NewIncident {
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "localizacao")]
    pub location: String,
    #[serde(rename = "descricao")]
    pub description: String,
}
