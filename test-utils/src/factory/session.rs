//! Session factory for creating test session entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test sessions with a customizable time window.
///
/// The default window is open now and lies inside the default window of
/// [`EventFactory`](crate::factory::event::EventFactory).
pub struct SessionFactory<'a> {
    db: &'a DatabaseConnection,
    event_id: i32,
    name: String,
    starts_at: DateTime<Utc>,
    ends_at: DateTime<Utc>,
    active: bool,
}

impl<'a> SessionFactory<'a> {
    /// Creates a new SessionFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Session {id}"`
    /// - starts_at: one hour ago
    /// - ends_at: one hour from now
    /// - active: `true`
    pub fn new(db: &'a DatabaseConnection, event_id: i32) -> Self {
        let now = Utc::now();
        Self {
            db,
            event_id,
            name: format!("Session {}", next_id()),
            starts_at: now - Duration::hours(1),
            ends_at: now + Duration::hours(1),
            active: true,
        }
    }

    /// Sets the time window of the session.
    pub fn window(mut self, starts_at: DateTime<Utc>, ends_at: DateTime<Utc>) -> Self {
        self.starts_at = starts_at;
        self.ends_at = ends_at;
        self
    }

    /// Sets whether the session is active.
    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Builds and inserts the session entity into the database.
    pub async fn build(self) -> Result<entity::session::Model, DbErr> {
        entity::session::ActiveModel {
            event_id: ActiveValue::Set(self.event_id),
            name: ActiveValue::Set(self.name),
            starts_at: ActiveValue::Set(self.starts_at),
            ends_at: ActiveValue::Set(self.ends_at),
            active: ActiveValue::Set(self.active),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active session of the event, open from one hour ago until one hour from now.
pub async fn create_session(
    db: &DatabaseConnection,
    event_id: i32,
) -> Result<entity::session::Model, DbErr> {
    SessionFactory::new(db, event_id).build().await
}
