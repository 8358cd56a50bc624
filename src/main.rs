use mohr_circle::{MohrCircle, Report, ReportOptions, compute};
use std::error::Error;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: mohr-circle <sigma_xx> <sigma_yy> <tau_xy>";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (sigma_xx, sigma_yy, tau_xy) = match parse_args(&args) {
        Ok(values) => values,
        Err(e) => {
            error!("{}", e);
            eprintln!("{}", USAGE);
            std::process::exit(2);
        }
    };

    match run(sigma_xx, sigma_yy, tau_xy) {
        Ok(circle) => {
            println!("{}", Report::new(&circle, ReportOptions::default()));
        }
        Err(e) => {
            error!("Mohr's circle computation failed: {}", e);
            std::process::exit(1);
        }
    }
}

/// Computes one circle and logs the headline results.
fn run(sigma_xx: f64, sigma_yy: f64, tau_xy: f64) -> Result<MohrCircle, Box<dyn Error>> {
    info!(
        "Computing Mohr's circle for σxx = {}, σyy = {}, τxy = {}",
        sigma_xx, sigma_yy, tau_xy
    );
    let circle = compute(sigma_xx, sigma_yy, tau_xy)?;

    debug!(
        "Center = ({}, {}), radius = {}",
        circle.center.sigma, circle.center.tau, circle.radius
    );
    if circle.is_degenerate() {
        info!("Circle collapses to a point: equal biaxial stress with no shear");
    }
    info!(
        "Principal stresses: σ1 = {:.4e}, σ2 = {:.4e}, θ = {:.4}°",
        circle.principal_1.sigma, circle.principal_2.sigma, circle.principal_angle_deg
    );
    Ok(circle)
}

fn parse_args(args: &[String]) -> Result<(f64, f64, f64), Box<dyn Error>> {
    if args.len() != 3 {
        return Err(format!("Expected 3 stress values, got {}", args.len()).into());
    }
    let mut values = [0.0; 3];
    for (slot, (arg, name)) in values
        .iter_mut()
        .zip(args.iter().zip(["sigma_xx", "sigma_yy", "tau_xy"]))
    {
        *slot = arg
            .trim()
            .parse::<f64>()
            .map_err(|e| format!("Could not read {} from {:?}: {}", name, arg, e))?;
    }
    Ok((values[0], values[1], values[2]))
}
