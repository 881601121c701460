pub mod autoencoder;

pub use autoencoder::DenoisingAutoencoder;
