//! Event factory for creating test event entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test events with a customizable time window.
pub struct EventFactory<'a> {
    db: &'a DatabaseConnection,
    division_id: i32,
    name: String,
    starts_at: DateTime<Utc>,
    ends_at: DateTime<Utc>,
    active: bool,
}

impl<'a> EventFactory<'a> {
    /// Creates a new EventFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Event {id}"`
    /// - starts_at: one day ago
    /// - ends_at: one day from now
    /// - active: `true`
    pub fn new(db: &'a DatabaseConnection, division_id: i32) -> Self {
        let now = Utc::now();
        Self {
            db,
            division_id,
            name: format!("Event {}", next_id()),
            starts_at: now - Duration::days(1),
            ends_at: now + Duration::days(1),
            active: true,
        }
    }

    /// Sets the time window of the event.
    pub fn window(mut self, starts_at: DateTime<Utc>, ends_at: DateTime<Utc>) -> Self {
        self.starts_at = starts_at;
        self.ends_at = ends_at;
        self
    }

    /// Sets whether the event is active.
    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Builds and inserts the event entity into the database.
    pub async fn build(self) -> Result<entity::event::Model, DbErr> {
        entity::event::ActiveModel {
            division_id: ActiveValue::Set(self.division_id),
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(None),
            starts_at: ActiveValue::Set(self.starts_at),
            ends_at: ActiveValue::Set(self.ends_at),
            active: ActiveValue::Set(self.active),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active event in the division, open from one day ago until one day from now.
pub async fn create_event(
    db: &DatabaseConnection,
    division_id: i32,
) -> Result<entity::event::Model, DbErr> {
    EventFactory::new(db, division_id).build().await
}
