// TrainConfig JSON parsing.

use synapse_nn::TrainConfig;

#[test]
fn parses_full_config() {
    let config: TrainConfig = serde_json::from_str(r#"{"epochs": 500, "log_every": 25}"#).unwrap();
    assert_eq!(config.epochs, 500);
    assert_eq!(config.log_every, 25);
}

#[test]
fn log_every_defaults_when_omitted() {
    let config: TrainConfig = serde_json::from_str(r#"{"epochs": 1000}"#).unwrap();
    assert_eq!(config.epochs, 1000);
    assert_eq!(config.log_every, TrainConfig::new(0).log_every);
}

#[test]
fn missing_epochs_is_an_error() {
    let result: Result<TrainConfig, _> = serde_json::from_str(r#"{"log_every": 10}"#);
    assert!(result.is_err());
}

#[test]
fn load_json_reads_a_file() {
    let path = std::env::temp_dir().join("synapse_nn_train_config.json");
    std::fs::write(&path, r#"{"epochs": 42}"#).unwrap();

    let config = TrainConfig::load_json(path.to_str().unwrap()).unwrap();
    assert_eq!(config.epochs, 42);

    let _ = std::fs::remove_file(&path);
}
