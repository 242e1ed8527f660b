use serde::{Serialize, Deserialize};

fn default_log_every() -> usize {
    100
}

/// Configuration for a `train_loop` run.
///
/// # Fields
/// - `epochs`    — total number of full passes over the training data
/// - `log_every` — emit an `EpochStats` log line every this many epochs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainConfig {
    pub epochs: usize,
    #[serde(default = "default_log_every")]
    pub log_every: usize,
}

impl TrainConfig {
    pub fn new(epochs: usize) -> TrainConfig {
        TrainConfig {
            epochs,
            log_every: default_log_every(),
        }
    }

    /// Deserializes a `TrainConfig` from a JSON file.
    pub fn load_json(path: &str) -> std::io::Result<TrainConfig> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        serde_json::from_reader(reader)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }
}
