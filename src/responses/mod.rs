pub mod auth;
pub mod home;
pub mod page;

pub use page::Page;
