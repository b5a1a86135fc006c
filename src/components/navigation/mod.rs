pub mod avatar_dropdown;

pub use avatar_dropdown::AvatarDropdown;
