// Construction: parameter shapes, deterministic initialization, and
// topology validation.

use synapse_nn::network::network::{INITIAL_WEIGHT, DEFAULT_LEARNING_RATE};
use synapse_nn::{Network, NetworkError};

#[test]
fn construction_allocates_expected_shapes() {
    let network = Network::new(vec![3, 4, 2], 0.1).unwrap();

    assert_eq!(network.topology(), &[3, 4, 2]);
    assert_eq!(network.weights().len(), 2);
    assert_eq!(network.biases().len(), 2);

    // Layer 1: 4 units, fan-in 3.
    assert_eq!(network.weights()[0].len(), 4);
    assert!(network.weights()[0].iter().all(|row| row.len() == 3));
    assert_eq!(network.biases()[0].len(), 4);

    // Layer 2: 2 units, fan-in 4.
    assert_eq!(network.weights()[1].len(), 2);
    assert!(network.weights()[1].iter().all(|row| row.len() == 4));
    assert_eq!(network.biases()[1].len(), 2);
}

#[test]
fn construction_uses_fixed_initial_values() {
    let network = Network::new(vec![2, 3, 1], 0.5).unwrap();

    for layer in network.weights() {
        for row in layer {
            assert!(row.iter().all(|&w| w == INITIAL_WEIGHT));
        }
    }
    for layer in network.biases() {
        assert!(layer.iter().all(|&b| b == 0.0));
    }
    assert_eq!(network.learning_rate(), 0.5);
}

#[test]
fn with_defaults_uses_default_learning_rate() {
    let network = Network::with_defaults(vec![2, 1]).unwrap();
    assert_eq!(network.learning_rate(), DEFAULT_LEARNING_RATE);
}

#[test]
fn topology_needs_at_least_two_layers() {
    assert!(matches!(
        Network::new(vec![], 0.1),
        Err(NetworkError::InvalidTopology(_))
    ));
    assert!(matches!(
        Network::new(vec![4], 0.1),
        Err(NetworkError::InvalidTopology(_))
    ));
}

#[test]
fn topology_rejects_zero_sized_layers() {
    assert!(matches!(
        Network::new(vec![2, 0, 1], 0.1),
        Err(NetworkError::InvalidTopology(_))
    ));
    assert!(matches!(
        Network::new(vec![0, 1], 0.1),
        Err(NetworkError::InvalidTopology(_))
    ));
}

#[test]
fn deep_topology_shapes_follow_adjacent_pairs() {
    let network = Network::new(vec![5, 3, 3, 2, 1], 0.01).unwrap();
    let expected = [(3, 5), (3, 3), (2, 3), (1, 2)];

    for (layer, &(units, fan_in)) in network.weights().iter().zip(expected.iter()) {
        assert_eq!(layer.len(), units);
        assert!(layer.iter().all(|row| row.len() == fan_in));
    }
}
