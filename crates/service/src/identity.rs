//! Identity and timestamp assignment for stored records.
//!
//! Works on any [`Record`] through its [`RecordMeta`](models::RecordMeta), so
//! adding a record shape never touches this module.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use models::Record;
use uuid::Uuid;

/// Source of the current time.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

impl<C: Clock + ?Sized> Clock for Arc<C> {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}

/// Assigns ids on create and refreshes timestamps on update.
#[derive(Clone, Debug, Default)]
pub struct IdentityPolicy<C = SystemClock> {
    clock: C,
}

impl IdentityPolicy<SystemClock> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: Clock> IdentityPolicy<C> {
    pub fn with_clock(clock: C) -> Self {
        Self { clock }
    }

    /// Overwrite `raw`'s id with a fresh v4 UUID and stamp both timestamps
    /// with the same instant. Whatever the caller put there is discarded.
    pub fn assign_on_create<T: Record>(&self, mut raw: T) -> T {
        let now = self.clock.now();
        let meta = raw.meta_mut();
        meta.id = Uuid::new_v4().to_string();
        meta.created_at = now;
        meta.updated_at = now;
        raw
    }

    /// Carry `previous`'s id and creation time onto `raw` and refresh the
    /// modification time. All other fields come from `raw` unchanged.
    ///
    /// `updated_at` never moves backwards, even if the clock does.
    pub fn assign_on_update<T: Record>(&self, mut raw: T, previous: &T) -> T {
        let prev = previous.meta();
        let now = self.clock.now().max(prev.updated_at);
        let meta = raw.meta_mut();
        meta.id = prev.id.clone();
        meta.created_at = prev.created_at;
        meta.updated_at = now;
        raw
    }
}

#[cfg(test)]
pub(crate) mod test_clock {
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use parking_lot::Mutex;

    use super::Clock;

    /// Manually driven clock for deterministic timestamp tests.
    #[derive(Debug)]
    pub struct ManualClock(Mutex<DateTime<Utc>>);

    impl ManualClock {
        pub fn at(secs: i64) -> Self {
            Self(Mutex::new(Utc.timestamp_opt(secs, 0).unwrap()))
        }

        pub fn advance(&self, secs: i64) {
            *self.0.lock() += Duration::seconds(secs);
        }
    }

    impl Clock for ManualClock {
        fn now(&self) -> DateTime<Utc> {
            *self.0.lock()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_clock::ManualClock;
    use super::*;
    use models::{Client, Item, RecordMeta};

    #[test]
    fn create_overrides_caller_identity() {
        let policy = IdentityPolicy::with_clock(ManualClock::at(1_000));
        let mut raw = Item::named("Laptop");
        raw.meta = RecordMeta {
            id: "caller-chosen".into(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let stored = policy.assign_on_create(raw);
        assert_ne!(stored.id(), "caller-chosen");
        assert!(Uuid::parse_str(stored.id()).is_ok());
        assert_eq!(stored.created_at().timestamp(), 1_000);
        assert_eq!(stored.created_at(), stored.updated_at());
        assert_eq!(stored.name, "Laptop");
    }

    #[test]
    fn create_ids_differ_per_call() {
        let policy = IdentityPolicy::new();
        let a = policy.assign_on_create(Client::default());
        let b = policy.assign_on_create(Client::default());
        assert!(!a.id().is_empty());
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn update_keeps_id_and_creation_time() {
        let clock = Arc::new(ManualClock::at(1_000));
        let policy = IdentityPolicy::with_clock(clock.clone());
        let prev = policy.assign_on_create(Item::named("Laptop"));

        clock.advance(5);
        let mut raw = Item::named("Laptop Pro");
        raw.meta.id = "other".into();
        let next = policy.assign_on_update(raw, &prev);

        assert_eq!(next.id(), prev.id());
        assert_eq!(next.created_at(), prev.created_at());
        assert_eq!(next.updated_at().timestamp(), 1_005);
        assert_eq!(next.name, "Laptop Pro");
    }

    #[test]
    fn update_time_never_goes_backwards() {
        let clock = Arc::new(ManualClock::at(2_000));
        let policy = IdentityPolicy::with_clock(clock.clone());
        let prev = policy.assign_on_create(Item::named("Desk"));

        clock.advance(-60);
        let next = policy.assign_on_update(Item::named("Desk"), &prev);
        assert_eq!(next.updated_at(), prev.updated_at());
    }

    #[test]
    fn update_is_full_replacement() {
        let policy = IdentityPolicy::new();
        let mut chair = Item::named("Chair");
        chair.description = Some("oak".into());
        chair.quantity = 4;
        let prev = policy.assign_on_create(chair);

        let next = policy.assign_on_update(Item::named("Chair"), &prev);
        assert_eq!(next.description, None);
        assert_eq!(next.quantity, 0);
    }
}
