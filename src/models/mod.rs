pub mod user;

pub use user::{CreateUser, PatchUser, ReplaceUser, User};
