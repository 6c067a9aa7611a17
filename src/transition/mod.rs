pub mod controller;
pub mod motion;
pub mod params;
pub mod snapshot;
pub mod volume;
