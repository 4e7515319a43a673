pub mod distribution;
pub mod mapping;
pub mod msg;
