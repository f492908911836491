use serde::de::DeserializeOwned;
use serde::Serialize;

/// Trait for records kept in the local store
///
/// Maps a record type to its entity collection. The identifier is assigned
/// by the caller at creation time; the store never generates or rewrites it.
pub trait StoredRecord: Serialize + DeserializeOwned + Clone + 'static {
    /// Entity name of the collection (e.g. `orders`)
    const ENTITY: &'static str;

    /// Caller-assigned identifier, unique within the collection
    fn record_id(&self) -> &str;

    /// Persistence key for the whole collection
    fn storage_key() -> String {
        format!("qinv_{}", Self::ENTITY)
    }
}
