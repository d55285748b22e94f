/// Settings used when creating a namespace.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NamespaceOptions {
    /// Memory reserved for the namespace, in megabytes.
    pub ram_quota_mb: u32,

    pub replica_number: u32,

    pub flush_enabled: bool,
}

impl Default for NamespaceOptions {
    fn default() -> Self {
        NamespaceOptions {
            ram_quota_mb: 100,
            replica_number: 0,
            flush_enabled: false,
        }
    }
}
