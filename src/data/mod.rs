pub mod mnist;
pub mod sampler;
pub mod standardize;

pub use mnist::{load_split, DataSplit};
pub use sampler::random_block;
pub use standardize::Standardizer;
