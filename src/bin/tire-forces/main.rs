use std::{io, process::ExitCode};

use anyhow::{Context, anyhow};
use log::{debug, info};
use twine_tire_models::{
    models::vehicle::tire::wheel_load_four_wheels, support::constraint::NonNegative,
    support::sweep::slip_sweep,
};
use uom::si::{
    angle::degree,
    f64::{Angle, Mass},
    force::newton,
    mass::kilogram,
};

mod cli;
mod plot;
mod report;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report::print_error(&e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &cli::Cli) -> anyhow::Result<()> {
    let mu = NonNegative::new(cli.mu).context("invalid coefficient of friction")?;
    debug!(
        "coefficient of friction {} accepted; the Magic Formula tables do not use it",
        mu.into_inner()
    );

    let model = cli.tire_model().context("invalid tire configuration")?;

    let load = wheel_load_four_wheels(Mass::new::<kilogram>(cli.weight));
    let slip_angles = slip_sweep(Angle::new::<degree>(cli.slip), cli.samples);
    info!(
        "evaluating {} slip angles at {:.2} N per wheel",
        slip_angles.len(),
        load.get::<newton>()
    );

    let forces = model.forces(load, &slip_angles);

    if !cli.no_plot {
        plot::render(&cli.output, &forces)
            .map_err(|e| anyhow!("{e}"))
            .with_context(|| format!("failed to render chart to {}", cli.output.display()))?;
        info!("chart written to {}", cli.output.display());
    }

    report::write_summary(&mut io::stdout().lock(), cli.slip, cli.weight, &forces)
        .context("failed to write report")?;

    Ok(())
}
