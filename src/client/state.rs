use crate::model::user::UserDto;

/// Signed in user shared with every route through context
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UserState {
    pub user: Option<UserDto>,
    /// Set once the first `/api/auth/user` request has finished, signed in or not
    pub fetched: bool,
}
