pub use super::alliance::Entity as Alliance;
pub use super::alliance_member::Entity as AllianceMember;
pub use super::user::Entity as User;
