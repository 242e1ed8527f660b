pub mod error;
pub mod activation;
pub mod network;
pub mod loss;
pub mod train;

// Convenience re-exports
pub use error::{NetworkError, Result};
pub use activation::activation::Activation;
pub use network::network::{GradientMode, Network};
pub use loss::mse::MseLoss;
pub use loss::residual::residual;
pub use train::dataset::Dataset;
pub use train::epoch_stats::EpochStats;
pub use train::train_config::TrainConfig;
pub use train::loop_fn::train_loop;
