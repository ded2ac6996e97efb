use std::collections::{BTreeMap, BTreeSet, HashMap};

use entity::{form, module, role, user};
use sea_orm::DatabaseConnection;

use crate::{
    model::authorization::FormPermissionsDto,
    server::{
        data::{authorization::AuthorizationRepository, Repository},
        error::AppError,
        service::crud::not_found,
    },
};

/// Resolves effective access from user-role, role-form-permission and form-module rows.
pub struct AuthorizationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthorizationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the active roles assigned to a user.
    pub async fn roles_for_user(&self, user_id: i32) -> Result<Vec<role::Model>, AppError> {
        self.find_user(user_id).await?;

        Ok(AuthorizationRepository::new(self.db)
            .get_roles_for_user(user_id)
            .await?)
    }

    /// Gets every form a user may access along with the permissions granted on it.
    ///
    /// Forms are ordered by name; permission and module names are sorted. A form appears
    /// only if at least one active permission is granted on it. Inactive users resolve to
    /// an empty list.
    ///
    /// # Returns
    /// - `Ok(Vec<FormPermissionsDto>)` - Effective permissions per form
    /// - `Err(AppError::NotFound)` - User does not exist
    pub async fn permissions_for_user(
        &self,
        user_id: i32,
    ) -> Result<Vec<FormPermissionsDto>, AppError> {
        let user = self.find_user(user_id).await?;
        if !user.active {
            return Ok(Vec::new());
        }

        let repo = AuthorizationRepository::new(self.db);

        let role_ids = repo
            .get_roles_for_user(user_id)
            .await?
            .into_iter()
            .map(|role| role.id)
            .collect();
        let grants = repo.get_grants_for_roles(role_ids).await?;

        let permission_names: HashMap<i32, String> = repo
            .get_active_permissions(grants.iter().map(|g| g.permission_id).collect())
            .await?
            .into_iter()
            .map(|permission| (permission.id, permission.name))
            .collect();

        let mut granted: BTreeMap<i32, BTreeSet<String>> = BTreeMap::new();
        for grant in &grants {
            if let Some(name) = permission_names.get(&grant.permission_id) {
                granted
                    .entry(grant.form_id)
                    .or_default()
                    .insert(name.clone());
            }
        }

        let forms = repo
            .get_active_forms(granted.keys().copied().collect())
            .await?;

        let mut modules: BTreeMap<i32, BTreeSet<String>> = BTreeMap::new();
        for (form_id, module) in repo
            .get_modules_for_forms(forms.iter().map(|form| form.id).collect())
            .await?
        {
            modules.entry(form_id).or_default().insert(module.name);
        }

        Ok(forms
            .into_iter()
            .filter_map(|form| {
                let permissions = granted.remove(&form.id)?;
                Some(FormPermissionsDto {
                    form_id: form.id,
                    form_name: form.name,
                    route: form.route,
                    modules: modules
                        .remove(&form.id)
                        .unwrap_or_default()
                        .into_iter()
                        .collect(),
                    permissions: permissions.into_iter().collect(),
                })
            })
            .collect())
    }

    /// Checks whether a user holds the named permission on a form.
    pub async fn check(
        &self,
        user_id: i32,
        form_id: i32,
        permission: &str,
    ) -> Result<bool, AppError> {
        let permission = permission.trim();

        Ok(self
            .permissions_for_user(user_id)
            .await?
            .iter()
            .any(|entry| {
                entry.form_id == form_id && entry.permissions.iter().any(|p| p == permission)
            }))
    }

    /// Gets the active forms attached to a module.
    pub async fn forms_for_module(&self, module_id: i32) -> Result<Vec<form::Model>, AppError> {
        if Repository::<module::Entity>::new(self.db)
            .get_by_id(module_id)
            .await?
            .is_none()
        {
            return Err(not_found::<module::Entity>(module_id));
        }

        Ok(AuthorizationRepository::new(self.db)
            .get_forms_for_module(module_id)
            .await?)
    }

    async fn find_user(&self, user_id: i32) -> Result<user::Model, AppError> {
        Repository::<user::Entity>::new(self.db)
            .get_by_id(user_id)
            .await?
            .ok_or_else(|| not_found::<user::Entity>(user_id))
    }
}
