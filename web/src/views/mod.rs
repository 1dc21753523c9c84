pub mod banners;
pub mod home;
pub mod locations;
pub mod not_found;
pub mod orders;
pub mod vendor;
