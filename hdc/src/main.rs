use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use hdc::config::HdcConfig;
use hdc::derating::{self, BundleLoading};
use hdc::harness::Harness;
use hdc::io::cli::{Cli, Command};
use hdc::{calculator, estimate, io};
use log::{info, warn};
use wirepack::io::svg::bundle_to_svg;

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            HdcConfig::default()
        }
        Some(config_file) => io::read_config(&config_file)?,
    };

    info!("Successfully parsed HdcConfig: {config:?}");

    match args.command {
        Command::Diameter {
            input_file,
            solution_folder,
            margin,
        } => {
            let harness = io::read_harness(&input_file)?;
            let input_stem = input_file
                .file_stem()
                .and_then(|s| s.to_str())
                .context("input file has no valid name")?;
            main_diameter(&harness, margin, &config, input_stem, solution_folder)
        }
        Command::Estimate { input_file } => {
            let harness = io::read_harness(&input_file)?;
            let d = estimate::harness_quick_diameter(&harness, &config.catalogue, config.estimate_factor)?;
            info!("[MAIN] {:?}: {} wires, estimated diameter: {d:.3} mm", harness.name, harness.n_wires());
            println!("{d:.3}");
            Ok(())
        }
        Command::Current {
            wire_type,
            n_wires,
            loading,
            safety_factor,
        } => {
            let wire = config.catalogue.get(&wire_type)?;
            let loading = BundleLoading::try_from(loading)?;
            let limit = derating::current_limit(wire, n_wires, loading, safety_factor)?;
            info!(
                "[MAIN] {wire_type} in a bundle of {n_wires} at {}% loading: {limit:.3} A",
                loading.percentage()
            );
            println!("{limit:.3}");
            Ok(())
        }
    }
}

fn main_diameter(
    harness: &Harness,
    margin: Option<f64>,
    config: &HdcConfig,
    input_stem: &str,
    output_folder: PathBuf,
) -> Result<()> {
    if !output_folder.exists() {
        fs::create_dir_all(&output_folder)
            .with_context(|| format!("could not create solution folder: {output_folder:?}"))?;
    }

    let output = calculator::calculate(harness, margin, config)?;

    {
        let solution_path = output_folder.join(format!("sol_{input_stem}.json"));
        io::write_json(&output, Path::new(&solution_path))?;
    }

    {
        let svg_path = output_folder.join(format!("sol_{input_stem}.svg"));
        let svg = bundle_to_svg(&output.bundle, config.svg_draw_options, &harness.name);
        io::write_svg(&svg, Path::new(&svg_path))?;
    }

    println!("{:.3}", output.bundle.outer_diameter_with_margin);
    Ok(())
}
