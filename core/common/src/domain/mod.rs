//! ドメイン型

pub mod dirs;

pub use dirs::Dirs;
