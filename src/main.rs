use gravitron::GravitronConfig;
use gravitron::run_2d;
use gravitron::{bench_gravity, bench_tick};

use clap::Parser;
use anyhow::{Context, Result};

use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Settings file under `scenarios/`; built-in defaults when omitted
    #[arg(short, long)]
    file_name: Option<String>,

    /// Print gravity and tick timings instead of opening a window
    #[arg(long)]
    bench: bool,
}

// no file name means the stock settings
fn load_config(file_name: Option<&str>) -> Result<GravitronConfig> {
    let Some(file_name) = file_name else {
        return Ok(GravitronConfig::default());
    };

    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    let cfg = GravitronConfig::from_yaml_file(&config_path)
        .with_context(|| format!("failed to load {}", config_path.display()))?;

    Ok(cfg)
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.bench {
        bench_gravity();
        bench_tick();
        return Ok(());
    }

    let cfg = load_config(args.file_name.as_deref())?;
    run_2d(cfg);

    Ok(())
}
