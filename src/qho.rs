use std::{ fs, path::PathBuf };
use anyhow::Context;
use clap::Parser;
use log::{ info, warn };
use ndarray as nd;
use ndarray_npy::NpzWriter;
use qho::{ config::Config, eigen, interp, utils };

// sample the eigenfunction and probability density of a single oscillator
// level and write them to a .npz archive for plotting

#[derive(Parser)]
#[command(about = "Sample harmonic oscillator eigenfunctions for plotting")]
struct CommandLineArguments {
    /// Quantum number (overrides the config file).
    #[arg(long, short = 'n')]
    level: Option<usize>,
    /// TOML config file.
    #[arg(long, short)]
    config: Option<PathBuf>,
    /// Output archive.
    #[arg(long, short, default_value = "output/qho.npz")]
    output: PathBuf,
    /// Also write every level up to the requested one.
    #[arg(long)]
    all: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .format_timestamp_secs()
        .init();

    let args = CommandLineArguments::parse();
    let mut config
        = match args.config.as_ref() {
            Some(path) => Config::read_toml(path)?,
            None => Config::default(),
        };
    if let Some(level) = args.level {
        config.check_level(level)?;
        config.level = level;
    }
    let n = config.level;
    let params = config.params;

    let x: nd::Array1<f64> = config.grid.coords();
    let dx = config.grid.dx();
    let state = eigen::eigenstate(n, &params, &x)?;
    let density = state.density();

    if x.is_empty() {
        warn!("position grid is empty; writing empty arrays");
    } else {
        let xmin = x.iter().copied().fold(f64::INFINITY, f64::min);
        let xmax = x.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let turning = params.turning_point(n);
        if turning > xmax.abs().min(xmin.abs()) {
            warn!(
                "grid [{xmin}, {xmax}] does not contain the classical \
                turning points ±{turning:.3}; the plotted state is truncated"
            );
        }
        info!(
            "n = {n}: e = {:.6}, norm = {:.6}, nodes = {}",
            state.e,
            state.norm(dx),
            interp::count_nodes(&state.psi),
        );
    }

    let mut levels: Option<(nd::Array2<f64>, nd::Array1<f64>)> = None;
    if args.all {
        let wfs = eigen::psi_levels(n, &params, &x)?;
        let energies: nd::Array1<f64>
            = (0..=n).map(|k| params.energy(k)).collect();
        for (k, row) in wfs.rows().into_iter().enumerate() {
            info!("level {k}: norm = {:.6}", utils::wf_norm(&row, dx));
        }
        levels = Some((wfs, energies));
    }

    if let Some(dir) = args.output.parent() {
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir)
                .with_context(|| format!("creating {}", dir.display()))?;
        }
    }
    let file = fs::File::create(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;
    let mut npz = NpzWriter::new(file);
    npz.add_array("x", &x)?;
    npz.add_array("psi", &state.psi)?;
    npz.add_array("density", &density)?;
    npz.add_array("e", &nd::array![state.e])?;
    if let Some((wfs, energies)) = levels.as_ref() {
        npz.add_array("wf", wfs)?;
        npz.add_array("energies", energies)?;
    }
    npz.finish()?;
    info!("wrote {}", args.output.display());
    Ok(())
}
