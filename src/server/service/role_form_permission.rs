use async_trait::async_trait;
use entity::{form, permission, role, role_form_permission};
use sea_orm::{ActiveValue::Set, ColumnTrait, Condition, DatabaseConnection};

use crate::{
    model::role_form_permission::RoleFormPermissionPayload,
    server::{
        error::AppError,
        service::{validation::Checks, EntityPayload},
    },
};

/// Grant of one permission on one form to a role.
#[async_trait]
impl EntityPayload<role_form_permission::Entity> for RoleFormPermissionPayload {
    async fn validate(&self, db: &DatabaseConnection, id: Option<i32>) -> Result<(), AppError> {
        let checks = Checks::new(db);

        checks.reference::<role::Entity>(self.role_id).await?;
        checks.reference::<form::Entity>(self.form_id).await?;
        checks
            .reference::<permission::Entity>(self.permission_id)
            .await?;
        checks
            .unique::<role_form_permission::Entity>(
                Condition::all()
                    .add(role_form_permission::Column::RoleId.eq(self.role_id))
                    .add(role_form_permission::Column::FormId.eq(self.form_id))
                    .add(role_form_permission::Column::PermissionId.eq(self.permission_id)),
                id,
                "Role already has this permission on this form",
            )
            .await
    }

    fn apply(self, model: &mut role_form_permission::ActiveModel) {
        model.role_id = Set(self.role_id);
        model.form_id = Set(self.form_id);
        model.permission_id = Set(self.permission_id);
        model.active = Set(self.active);
    }
}
