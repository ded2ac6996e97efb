use sea_orm::entity::prelude::*;

/// A UI screen, addressed by its client-side route.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "form")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub route: String,
    pub active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::role_form_permission::Entity")]
    RoleFormPermission,
    #[sea_orm(has_many = "super::form_module::Entity")]
    FormModule,
}

impl Related<super::role_form_permission::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RoleFormPermission.def()
    }
}

impl Related<super::form_module::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FormModule.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
