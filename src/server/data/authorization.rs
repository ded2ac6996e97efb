//! Queries resolving what a user may do through the association tables.
//!
//! Every query only considers active rows on both sides of an association, so a
//! logically deleted role, grant, form, permission or module drops out of the result.

use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};

pub struct AuthorizationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthorizationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the active roles assigned to a user through active user-role rows, ordered by name.
    pub async fn get_roles_for_user(
        &self,
        user_id: i32,
    ) -> Result<Vec<entity::role::Model>, DbErr> {
        let role_ids: Vec<i32> = entity::prelude::UserRole::find()
            .filter(entity::user_role::Column::UserId.eq(user_id))
            .filter(entity::user_role::Column::Active.eq(true))
            .all(self.db)
            .await?
            .into_iter()
            .map(|user_role| user_role.role_id)
            .collect();

        entity::prelude::Role::find()
            .filter(entity::role::Column::Id.is_in(role_ids))
            .filter(entity::role::Column::Active.eq(true))
            .order_by_asc(entity::role::Column::Name)
            .all(self.db)
            .await
    }

    /// Gets the active grants held by any of the given roles.
    pub async fn get_grants_for_roles(
        &self,
        role_ids: Vec<i32>,
    ) -> Result<Vec<entity::role_form_permission::Model>, DbErr> {
        entity::prelude::RoleFormPermission::find()
            .filter(entity::role_form_permission::Column::RoleId.is_in(role_ids))
            .filter(entity::role_form_permission::Column::Active.eq(true))
            .all(self.db)
            .await
    }

    /// Gets the active forms among the given IDs, ordered by name.
    pub async fn get_active_forms(&self, ids: Vec<i32>) -> Result<Vec<entity::form::Model>, DbErr> {
        entity::prelude::Form::find()
            .filter(entity::form::Column::Id.is_in(ids))
            .filter(entity::form::Column::Active.eq(true))
            .order_by_asc(entity::form::Column::Name)
            .all(self.db)
            .await
    }

    /// Gets the active permissions among the given IDs.
    pub async fn get_active_permissions(
        &self,
        ids: Vec<i32>,
    ) -> Result<Vec<entity::permission::Model>, DbErr> {
        entity::prelude::Permission::find()
            .filter(entity::permission::Column::Id.is_in(ids))
            .filter(entity::permission::Column::Active.eq(true))
            .all(self.db)
            .await
    }

    /// Gets `(form_id, module)` pairs for the given forms through active form-module rows.
    ///
    /// Only active modules are returned.
    pub async fn get_modules_for_forms(
        &self,
        form_ids: Vec<i32>,
    ) -> Result<Vec<(i32, entity::module::Model)>, DbErr> {
        let links = entity::prelude::FormModule::find()
            .filter(entity::form_module::Column::FormId.is_in(form_ids))
            .filter(entity::form_module::Column::Active.eq(true))
            .all(self.db)
            .await?;

        let module_ids: Vec<i32> = links.iter().map(|link| link.module_id).collect();
        let modules = entity::prelude::Module::find()
            .filter(entity::module::Column::Id.is_in(module_ids))
            .filter(entity::module::Column::Active.eq(true))
            .all(self.db)
            .await?;

        Ok(links
            .into_iter()
            .filter_map(|link| {
                modules
                    .iter()
                    .find(|module| module.id == link.module_id)
                    .map(|module| (link.form_id, module.clone()))
            })
            .collect())
    }

    /// Gets the active forms attached to a module through active form-module rows.
    pub async fn get_forms_for_module(
        &self,
        module_id: i32,
    ) -> Result<Vec<entity::form::Model>, DbErr> {
        let form_ids: Vec<i32> = entity::prelude::FormModule::find()
            .filter(entity::form_module::Column::ModuleId.eq(module_id))
            .filter(entity::form_module::Column::Active.eq(true))
            .all(self.db)
            .await?
            .into_iter()
            .map(|link| link.form_id)
            .collect();

        self.get_active_forms(form_ids).await
    }
}
