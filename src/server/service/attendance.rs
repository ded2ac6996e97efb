use async_trait::async_trait;
use chrono::{DateTime, Utc};
use entity::{access_point, attendance, card, event, session};
use sea_orm::{ActiveValue::Set, ColumnTrait, Condition, DatabaseConnection};

use crate::{
    model::attendance::{AttendancePayload, RegisterAttendanceDto},
    server::{
        data::{attendance::AttendanceRepository, Repository},
        error::AppError,
        service::{crud::not_found, validation::Checks, EntityPayload},
    },
};

#[async_trait]
impl EntityPayload<attendance::Entity> for AttendancePayload {
    async fn validate(&self, db: &DatabaseConnection, id: Option<i32>) -> Result<(), AppError> {
        let checks = Checks::new(db);

        checks.reference::<card::Entity>(self.card_id).await?;
        checks.reference::<session::Entity>(self.session_id).await?;
        checks
            .reference::<access_point::Entity>(self.access_point_id)
            .await?;
        checks
            .unique::<attendance::Entity>(
                Condition::all()
                    .add(attendance::Column::CardId.eq(self.card_id))
                    .add(attendance::Column::SessionId.eq(self.session_id)),
                id,
                "Card is already registered for this session",
            )
            .await
    }

    fn apply(self, model: &mut attendance::ActiveModel) {
        model.card_id = Set(self.card_id);
        model.session_id = Set(self.session_id);
        model.access_point_id = Set(self.access_point_id);
        model.registered_at = Set(self.registered_at);
        model.active = Set(self.active);
    }
}

/// Registers card swipes against open sessions.
pub struct AttendanceService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AttendanceService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers an attendance for the card at the current time.
    pub async fn register(
        &self,
        payload: RegisterAttendanceDto,
    ) -> Result<attendance::Model, AppError> {
        self.register_at(payload, Utc::now()).await
    }

    /// Registers an attendance for the card at the provided time.
    ///
    /// The card must be active and unexpired, the session active and open at `now`, its
    /// event active, and the access point active inside the event's division.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created attendance row
    /// - `Err(AppError::NotFound)` - Unknown card code, session or access point
    /// - `Err(AppError::BadRequest)` - Any of the above is inactive, expired or closed
    /// - `Err(AppError::Conflict)` - Card already registered for the session
    pub async fn register_at(
        &self,
        payload: RegisterAttendanceDto,
        now: DateTime<Utc>,
    ) -> Result<attendance::Model, AppError> {
        let repo = AttendanceRepository::new(self.db);
        let code = payload.card_code.trim();

        let card = repo
            .find_card_by_code(code)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Card '{}' not found", code)))?;

        if !card.active {
            return Err(AppError::BadRequest(format!("Card '{}' is inactive", code)));
        }
        if card.expires_at.is_some_and(|expires_at| expires_at <= now) {
            return Err(AppError::BadRequest(format!("Card '{}' has expired", code)));
        }

        let session = Repository::<session::Entity>::new(self.db)
            .get_by_id(payload.session_id)
            .await?
            .ok_or_else(|| not_found::<session::Entity>(payload.session_id))?;

        if !session.active {
            return Err(AppError::BadRequest(format!(
                "Session {} is inactive",
                session.id
            )));
        }
        if now < session.starts_at || now > session.ends_at {
            return Err(AppError::BadRequest(format!(
                "Session {} is not open",
                session.id
            )));
        }

        let event = Repository::<event::Entity>::new(self.db)
            .get_by_id(session.event_id)
            .await?
            .ok_or_else(|| {
                AppError::InternalError(format!(
                    "Session {} references missing event {}",
                    session.id, session.event_id
                ))
            })?;

        if !event.active {
            return Err(AppError::BadRequest(format!("Event {} is inactive", event.id)));
        }

        let access_point = Repository::<access_point::Entity>::new(self.db)
            .get_by_id(payload.access_point_id)
            .await?
            .ok_or_else(|| not_found::<access_point::Entity>(payload.access_point_id))?;

        if !access_point.active {
            return Err(AppError::BadRequest(format!(
                "Access point {} is inactive",
                access_point.id
            )));
        }
        if access_point.division_id != event.division_id {
            return Err(AppError::BadRequest(format!(
                "Access point {} does not belong to the division of event {}",
                access_point.id, event.id
            )));
        }

        if repo.exists_for_card_and_session(card.id, session.id).await? {
            return Err(AppError::Conflict(
                "Card is already registered for this session".to_string(),
            ));
        }

        let created = Repository::<attendance::Entity>::new(self.db)
            .create(attendance::ActiveModel {
                card_id: Set(card.id),
                session_id: Set(session.id),
                access_point_id: Set(access_point.id),
                registered_at: Set(now),
                active: Set(true),
                ..Default::default()
            })
            .await?;

        tracing::info!(
            "Registered card {} for session {} at access point {}",
            card.id,
            session.id,
            access_point.id
        );

        Ok(created)
    }

    /// Gets the active attendances of a session.
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)` - Attendances ordered by registration time
    /// - `Err(AppError::NotFound)` - Session does not exist
    pub async fn get_by_session(
        &self,
        session_id: i32,
    ) -> Result<Vec<attendance::Model>, AppError> {
        if Repository::<session::Entity>::new(self.db)
            .get_by_id(session_id)
            .await?
            .is_none()
        {
            return Err(not_found::<session::Entity>(session_id));
        }

        Ok(AttendanceRepository::new(self.db)
            .get_by_session_id(session_id)
            .await?)
    }
}
