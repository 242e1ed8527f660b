pub mod network;

pub use network::{GradientMode, Network};
