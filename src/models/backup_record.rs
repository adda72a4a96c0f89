use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// One backup artifact as described by the metadata catalog.
///
/// Field names on the wire follow the catalog's descriptor format.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct BackupRecord {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "tamanho_bytes")]
    pub size_bytes: u64,
    #[serde(rename = "data_criacao")]
    pub created_at: DateTime<FixedOffset>,
    #[serde(rename = "ultima_modificacao")]
    pub modified_at: DateTime<FixedOffset>,
}
