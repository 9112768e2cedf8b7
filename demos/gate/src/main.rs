use log::{error, info};
use tiny_nn::{
    matrix::Matrix2,
    neural::{config::TrainConfig, dataset::Dataset},
    prelude::*,
};

fn dataset(gate: &str) -> Option<Dataset> {
    match gate {
        "or" => Some(Dataset::or_gate()),
        "and" => Some(Dataset::and_gate()),
        "nand" => Some(Dataset::nand_gate()),
        "xor" => Some(Dataset::xor_gate()),
        _ => None,
    }
}

fn run(gate: &str) -> Result<()> {
    let data = dataset(gate).ok_or_else(|| {
        Error::ConfigErr(format!(
            "unknown gate {gate:?}, expected or|and|nand|xor"
        ))
    })?;

    // a single sigmoid neuron: two weights and a bias
    let config = TrainConfig {
        architecture: vec![2, 1],
        init_low: 0.0,
        init_high: 1.0,
        ..Default::default()
    };
    config.validate()?;
    info!("fitting {gate} with {:?}", config);

    let mut net = config.build_net(&mut config.rng())?;
    let report = config.optimizer().train(&mut net, &data)?;

    println!("{net}");
    println!("Loss0 = {}, Loss = {}", report.initial_cost, report.final_cost);
    for i in 0..2 {
        for j in 0..2 {
            let out = net.predict(&Matrix2::from_array([[i as f64, j as f64]]))?;
            println!("{i} {gate} {j} = {:.6}", out[(0, 0)]);
        }
    }
    Ok(())
}

fn main() {
    env_logger::init();

    let gate = std::env::args().nth(1).unwrap_or_else(|| "or".to_string());
    if let Err(e) = run(&gate) {
        error!("{e}");
        std::process::exit(1);
    }
}
