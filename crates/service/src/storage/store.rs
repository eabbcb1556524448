use models::Record;

use crate::errors::ServiceError;

/// Keyed CRUD contract over one record shape.
///
/// Implementations assign identity and timestamps themselves; callers hand
/// in decoded records and never pick ids.
pub trait Store<T: Record>: Send + Sync {
    fn list_all(&self) -> Vec<T>;
    fn get_by_id(&self, id: &str) -> Option<T>;
    fn create(&self, raw: T) -> T;
    fn update(&self, id: &str, raw: T) -> Result<T, ServiceError>;
    fn delete_by_id(&self, id: &str) -> bool;
}
