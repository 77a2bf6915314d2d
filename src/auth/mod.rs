pub mod credentials;
pub mod pairing;
