//! Domain models shared across the Yami services
//!
//! - `account`: the record written to the user table at signup
//! - `role`: the three fixed directory groups and their role labels
//! - `directory_user`: a user as reported by the directory admin API

pub mod account;
pub mod directory_user;
pub mod role;

pub use account::AccountRecord;
pub use directory_user::DirectoryUser;
pub use role::Role;
