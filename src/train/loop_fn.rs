use std::time::Instant;

use crate::error::Result;
use crate::loss::mse::MseLoss;
use crate::loss::residual::residual;
use crate::network::network::Network;
use crate::train::dataset::Dataset;
use crate::train::epoch_stats::EpochStats;
use crate::train::train_config::TrainConfig;

/// Trains `network` for `config.epochs` full passes over `dataset` and
/// returns the mean training loss of the last epoch.
///
/// Samples are visited strictly in dataset order, one at a time: forward
/// pass, residual, backward pass. No shuffling, no batching.
///
/// # Panics
/// Panics if `dataset` is empty.
pub fn train_loop(
    network: &mut Network,
    dataset: &Dataset,
    config: &TrainConfig,
) -> Result<f64> {
    assert!(!dataset.is_empty(), "dataset must not be empty");

    let log_every = config.log_every.max(1);
    let mut last_train_loss = 0.0;

    for epoch in 1..=config.epochs {
        let t_start = Instant::now();
        let mut total_loss = 0.0;

        for (input, target) in dataset.iter() {
            let output = network.forward(input)?;
            total_loss += MseLoss::loss(&output, target);
            let error = residual(&output, target)?;
            network.backward(&error)?;
        }

        let train_loss = total_loss / dataset.len() as f64;
        last_train_loss = train_loss;

        if epoch % log_every == 0 || epoch == config.epochs {
            let stats = EpochStats {
                epoch,
                total_epochs: config.epochs,
                train_loss,
                elapsed_ms: t_start.elapsed().as_millis() as u64,
            };
            log::debug!(
                "epoch {}/{}: loss = {:.6} ({} ms)",
                stats.epoch, stats.total_epochs, stats.train_loss, stats.elapsed_ms
            );
        }
    }

    Ok(last_train_loss)
}
