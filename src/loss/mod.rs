pub mod residual;
pub mod mse;

pub use residual::residual;
pub use mse::MseLoss;
