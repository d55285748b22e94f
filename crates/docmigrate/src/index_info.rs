/// An entry of the store's index catalog.
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct IndexInfo {
    pub name: String,

    /// Namespace the index belongs to
    #[serde(rename = "keyspace_id")]
    pub namespace: String,

    /// Indexed expressions, as the store prints them
    #[serde(default)]
    pub index_key: Vec<String>,

    /// Partial index condition
    #[serde(default)]
    pub condition: Option<String>,

    /// `online`, `deferred`, `pending`, ...
    #[serde(default)]
    pub state: String,
}

impl IndexInfo {
    pub fn is_online(&self) -> bool {
        self.state == "online"
    }
}
