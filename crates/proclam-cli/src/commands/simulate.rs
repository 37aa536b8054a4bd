use log::info;
use proclam_core::{Classifier, FromCm, SimulatorConfig};

pub struct SimulateCommandConfig<'a> {
    pub cm_path: &'a str,
    pub truth_path: &'a str,
    pub config_path: Option<&'a str>,
    pub scheme: Option<&'a str>,
    pub seed: Option<u64>,
    pub noise_std: Option<f64>,
    pub other: bool,
    pub format: &'a str,
    pub output_path: Option<&'a str>,
}

pub fn run(cfg: SimulateCommandConfig<'_>) {
    if let Err(e) = execute(&cfg) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn execute(cfg: &SimulateCommandConfig<'_>) -> Result<(), String> {
    let sim_config = resolve_config(cfg)?;
    let cm: Vec<Vec<f64>> = super::read_json(cfg.cm_path, "confusion matrix")?;
    let truth: Vec<usize> = super::read_json(cfg.truth_path, "truth labels")?;

    let mut sim = FromCm::from_config(&sim_config).map_err(|e| e.to_string())?;
    let prediction = sim
        .classify(&cm, &truth, cfg.other)
        .map_err(|e| e.to_string())?;
    info!(
        "scheme '{}' (seed {}): simulated {} prediction(s)",
        sim.scheme(),
        sim.seed(),
        prediction.len()
    );

    let rendered = super::format_predictions(&prediction, super::parse_format(cfg.format))?;
    match cfg.output_path {
        Some(path) => std::fs::write(path, rendered)
            .map_err(|e| format!("failed to write {path}: {e}"))?,
        None => print!("{rendered}"),
    }
    Ok(())
}

/// Merge the optional config file with command-line overrides.
fn resolve_config(cfg: &SimulateCommandConfig<'_>) -> Result<SimulatorConfig, String> {
    let mut sim_config = match cfg.config_path {
        Some(path) => {
            SimulatorConfig::load(std::path::Path::new(path)).map_err(|e| e.to_string())?
        }
        None => SimulatorConfig::default(),
    };
    if let Some(scheme) = cfg.scheme {
        sim_config.scheme = scheme.to_string();
    }
    if let Some(seed) = cfg.seed {
        sim_config.seed = seed;
    }
    if let Some(noise_std) = cfg.noise_std {
        sim_config.noise_std = noise_std;
    }
    Ok(sim_config)
}
