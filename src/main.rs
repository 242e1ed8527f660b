// XOR training driver. The network logic lives in the library; this binary
// wires a [2, 1, 1] network to the four exclusive-or pairs and prints the
// predictions after training.
//
// An optional argument names a TrainConfig JSON file, e.g.:
//   synapse-nn config.json

use synapse_nn::{train_loop, Dataset, Network, TrainConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => TrainConfig::load_json(&path)?,
        None => TrainConfig::new(1000),
    };

    let mut network = Network::new(vec![2, 1, 1], 0.001)?;
    let dataset = Dataset::xor();

    let loss = train_loop(&mut network, &dataset, &config)?;
    log::info!("trained {} epochs, final loss = {loss:.6}", config.epochs);

    for (input, _) in dataset.iter() {
        let output = network.forward(input)?;
        println!("Input: {:?}, Predicted Output: {}", input, output[0]);
    }

    Ok(())
}
