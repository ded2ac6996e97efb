use async_trait::async_trait;
use entity::{role, user, user_role};
use sea_orm::{ActiveValue::Set, ColumnTrait, Condition, DatabaseConnection};

use crate::{
    model::user_role::UserRolePayload,
    server::{
        error::AppError,
        service::{validation::Checks, EntityPayload},
    },
};

#[async_trait]
impl EntityPayload<user_role::Entity> for UserRolePayload {
    async fn validate(&self, db: &DatabaseConnection, id: Option<i32>) -> Result<(), AppError> {
        let checks = Checks::new(db);

        checks.reference::<user::Entity>(self.user_id).await?;
        checks.reference::<role::Entity>(self.role_id).await?;
        checks
            .unique::<user_role::Entity>(
                Condition::all()
                    .add(user_role::Column::UserId.eq(self.user_id))
                    .add(user_role::Column::RoleId.eq(self.role_id)),
                id,
                "User already has this role",
            )
            .await
    }

    fn apply(self, model: &mut user_role::ActiveModel) {
        model.user_id = Set(self.user_id);
        model.role_id = Set(self.role_id);
        model.active = Set(self.active);
    }
}
