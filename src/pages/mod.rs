pub mod login;
pub mod not_found;
pub mod recent_files;
pub mod shared_files;
pub mod signup;
pub mod tags;
pub mod tool_page;

pub use login::LoginPage;
pub use not_found::NotFound;
pub use recent_files::RecentFilesPage;
pub use shared_files::SharedFilesPage;
pub use signup::SignupPage;
pub use tags::TagsPage;
pub use tool_page::ToolPage;
