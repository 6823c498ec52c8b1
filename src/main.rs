use std::{env, error::Error, path::Path};

use chunk_heightfield_bench::{
    config::ExperimentConfig,
    experiment::{run_suite, seeds_for},
    presenters::{CubeWorldPresenter, TexturePresenter, WorldPresenter},
};
use env_logger::Env;
use log::info;

const DEFAULT_OUTPUT_DIR: &str = "heightfields";

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().skip(1).collect();
    let mut config = match flag_value(&args, &["--config", "-c"]) {
        Some(path) => ExperimentConfig::load(Path::new(path))?,
        None => ExperimentConfig::default(),
    };
    if let Some(count) = flag_value(&args, &["--seeds", "-s"]) {
        config.seeds_count = count.parse()?;
        config.validate()?;
    }
    let output_dir = flag_value(&args, &["--output", "-o"]).unwrap_or(DEFAULT_OUTPUT_DIR);

    let seeds = seeds_for(&config);
    info!("Seeds were generated!");

    let mut textures = TexturePresenter::new(Path::new(output_dir));
    let mut cube_worlds = CubeWorldPresenter::new(config.cube_unit);
    let mut presenters: [&mut dyn WorldPresenter; 2] = [&mut textures, &mut cube_worlds];
    let reports = run_suite(&config, &seeds, &mut presenters);

    for report in &reports {
        info!("{}: {}/{} buildable", report.name(), report.passed(), report.len());
    }

    if let Some(path) = flag_value(&args, &["--dump-cubes"]) {
        cube_worlds.write_json(Path::new(path))?;
    }
    Ok(())
}

/// Value following the first occurrence of any of `names`
fn flag_value<'a>(args: &'a [String], names: &[&str]) -> Option<&'a str> {
    args.iter()
        .position(|arg| names.contains(&arg.as_str()))
        .and_then(|i| args.get(i + 1))
        .map(String::as_str)
}
