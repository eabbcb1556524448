use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Decode a field, treating an explicit JSON `null` like an absent value.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Identity and timestamp fields shared by every stored record.
///
/// Flattened into the owning record on the wire, so clients see plain `id`,
/// `created_at` and `updated_at` keys. All three default when absent or
/// `null` in a request body; the store overwrites them anyway.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecordMeta {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: DateTime<Utc>,
    #[serde(deserialize_with = "null_as_default")]
    pub updated_at: DateTime<Utc>,
}

/// Capability required from any shape kept in a keyed store.
pub trait Record: Clone + Send + Sync + 'static {
    /// Singular name of the collection entry, used in logs and error messages.
    const KIND: &'static str;

    fn meta(&self) -> &RecordMeta;

    fn meta_mut(&mut self) -> &mut RecordMeta;

    fn id(&self) -> &str {
        &self.meta().id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.meta().created_at
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.meta().updated_at
    }
}
