//! Database model type aliases for test utilities, matching those used in the roster crate.

/// Type alias for the user database model.
pub type UserModel = entity::user::Model;

/// Type alias for the alliance database model.
pub type AllianceModel = entity::alliance::Model;

/// Type alias for the alliance member database model.
pub type AllianceMemberModel = entity::alliance_member::Model;
