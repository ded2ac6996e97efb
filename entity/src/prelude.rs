pub use super::access_point::Entity as AccessPoint;
pub use super::attendance::Entity as Attendance;
pub use super::branch::Entity as Branch;
pub use super::card::Entity as Card;
pub use super::division::Entity as Division;
pub use super::event::Entity as Event;
pub use super::form::Entity as Form;
pub use super::form_module::Entity as FormModule;
pub use super::module::Entity as Module;
pub use super::organization::Entity as Organization;
pub use super::permission::Entity as Permission;
pub use super::person::Entity as Person;
pub use super::role::Entity as Role;
pub use super::role_form_permission::Entity as RoleFormPermission;
pub use super::session::Entity as Session;
pub use super::user::Entity as User;
pub use super::user_role::Entity as UserRole;
