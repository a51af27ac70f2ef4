pub mod discord_login;
pub mod navbar;
pub mod page;
pub mod title;

pub use discord_login::DiscordLogin;
pub use navbar::Navbar;
pub use page::Page;
pub use title::RosterTitleButton;
