pub mod client;
pub mod lights;
pub mod response;
