pub mod error;
pub mod geocode_search;
pub mod loading;
pub mod navbar;
pub mod toast;

pub use geocode_search::GeocodeSearchBox;
pub use navbar::Navbar;
