pub mod config;
pub mod data;
pub mod error;
pub mod layers;
pub mod math;
pub mod models;
pub mod optim;
pub mod rng;
pub mod training;
pub mod util;
