use sea_orm::entity::prelude::*;

/// Named action (e.g. "read", "update") that can be granted on a form.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "permission")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub description: Option<String>,
    pub active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::role_form_permission::Entity")]
    RoleFormPermission,
}

impl Related<super::role_form_permission::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RoleFormPermission.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
