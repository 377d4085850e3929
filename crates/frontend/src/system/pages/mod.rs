pub mod admin;
pub mod home;
pub mod landing;
pub mod login;
