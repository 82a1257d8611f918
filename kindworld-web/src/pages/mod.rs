pub mod certificates;
pub mod dashboard;
pub mod landing;
pub mod missions;
pub mod not_found;
pub mod profile;
pub mod sign_in;
