pub mod group;
pub mod light;
pub mod profile;
