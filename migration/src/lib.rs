pub use sea_orm_migration::prelude::*;

mod m20260901_000001_create_organization_table;
mod m20260901_000002_create_branch_table;
mod m20260901_000003_create_division_table;
mod m20260901_000004_create_person_table;
mod m20260901_000005_create_user_table;
mod m20260901_000006_create_role_table;
mod m20260901_000007_create_permission_table;
mod m20260901_000008_create_module_table;
mod m20260901_000009_create_form_table;
mod m20260902_000010_create_user_role_table;
mod m20260902_000011_create_role_form_permission_table;
mod m20260902_000012_create_form_module_table;
mod m20260903_000013_create_event_table;
mod m20260903_000014_create_session_table;
mod m20260903_000015_create_card_table;
mod m20260903_000016_create_access_point_table;
mod m20260903_000017_create_attendance_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260901_000001_create_organization_table::Migration),
            Box::new(m20260901_000002_create_branch_table::Migration),
            Box::new(m20260901_000003_create_division_table::Migration),
            Box::new(m20260901_000004_create_person_table::Migration),
            Box::new(m20260901_000005_create_user_table::Migration),
            Box::new(m20260901_000006_create_role_table::Migration),
            Box::new(m20260901_000007_create_permission_table::Migration),
            Box::new(m20260901_000008_create_module_table::Migration),
            Box::new(m20260901_000009_create_form_table::Migration),
            Box::new(m20260902_000010_create_user_role_table::Migration),
            Box::new(m20260902_000011_create_role_form_permission_table::Migration),
            Box::new(m20260902_000012_create_form_module_table::Migration),
            Box::new(m20260903_000013_create_event_table::Migration),
            Box::new(m20260903_000014_create_session_table::Migration),
            Box::new(m20260903_000015_create_card_table::Migration),
            Box::new(m20260903_000016_create_access_point_table::Migration),
            Box::new(m20260903_000017_create_attendance_table::Migration),
        ]
    }
}
