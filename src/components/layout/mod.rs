pub mod app_shell;
pub mod header;
pub mod sidebar;

pub use app_shell::AppShell;
pub use header::Header;
pub use sidebar::Sidebar;
