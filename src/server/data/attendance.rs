use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

pub struct AttendanceRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AttendanceRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a card by its code regardless of its `active` flag.
    pub async fn find_card_by_code(
        &self,
        code: &str,
    ) -> Result<Option<entity::card::Model>, DbErr> {
        entity::prelude::Card::find()
            .filter(entity::card::Column::Code.eq(code))
            .one(self.db)
            .await
    }

    /// Checks whether the card already has an attendance row for the session.
    ///
    /// Inactive rows count too since the (card, session) pair is unique in the table.
    pub async fn exists_for_card_and_session(
        &self,
        card_id: i32,
        session_id: i32,
    ) -> Result<bool, DbErr> {
        let count = entity::prelude::Attendance::find()
            .filter(entity::attendance::Column::CardId.eq(card_id))
            .filter(entity::attendance::Column::SessionId.eq(session_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets the active attendance rows of a session ordered by registration time.
    pub async fn get_by_session_id(
        &self,
        session_id: i32,
    ) -> Result<Vec<entity::attendance::Model>, DbErr> {
        entity::prelude::Attendance::find()
            .filter(entity::attendance::Column::SessionId.eq(session_id))
            .filter(entity::attendance::Column::Active.eq(true))
            .order_by_asc(entity::attendance::Column::RegisteredAt)
            .order_by_asc(entity::attendance::Column::Id)
            .all(self.db)
            .await
    }
}
