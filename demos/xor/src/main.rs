use log::error;
use tiny_nn::{
    matrix::Matrix2,
    neural::{config::TrainConfig, dataset::Dataset},
    prelude::*,
};

fn run() -> Result<()> {
    // optional JSON config path, otherwise the reference XOR run
    let config = match std::env::args().nth(1) {
        Some(path) => TrainConfig::from_path(path)?,
        None => TrainConfig::default(),
    };
    let data = Dataset::xor_gate();

    let mut net = config.build_net(&mut config.rng())?;
    let report = config.optimizer().train(&mut net, &data)?;

    println!("i-Cost = {}", report.initial_cost);
    println!("f-Cost = {}", report.final_cost);
    println!("{net}");

    for i in 0..2 {
        for j in 0..2 {
            let out = net.predict(&Matrix2::from_array([[i as f64, j as f64]]))?;
            println!("{i} ^ {j} = {:.6}", out[(0, 0)]);
        }
    }
    Ok(())
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        error!("{e}");
        std::process::exit(1);
    }
}
