use clap::{Parser, Subcommand};
use env_logger::Env;
use log::{info, warn};
use nalgebra::Vector3;

use laue_ops::laue_ops::laue_ops;
use laue_ops::orientation::{euler_to_rodrigues, quat_xyzw, Euler};
use laue_ops::{LaueGroup, Result, VERSION};

#[derive(Parser)]
#[command(name = "laue-ops")]
#[command(about = "Crystal symmetry operations for EBSD orientation data")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Number of threads to use (default: all available cores)
    #[arg(short, long)]
    threads: Option<usize>,
}

#[derive(Subcommand)]
enum Commands {
    /// Describe a Laue class
    Info {
        /// Laue class, e.g. cubic-low, m-3 or 23
        #[arg(short, long)]
        group: LaueGroup,
    },
    /// Reduce Bunge Euler angles (degrees) to the fundamental zone
    #[command(allow_negative_numbers = true)]
    Reduce {
        #[arg(short, long)]
        group: LaueGroup,
        phi1: f64,
        phi: f64,
        phi2: f64,
    },
    /// Disorientation between two quaternions given as x,y,z,w
    Misorientation {
        #[arg(short, long)]
        group: LaueGroup,
        #[arg(value_parser = parse_components::<4>, allow_hyphen_values = true)]
        q1: [f64; 4],
        #[arg(value_parser = parse_components::<4>, allow_hyphen_values = true)]
        q2: [f64; 4],
    },
    /// Highest Schmid factor of a slip system under uniaxial load
    Schmid {
        #[arg(short, long)]
        group: LaueGroup,
        /// Load axis as x,y,z
        #[arg(long, value_parser = parse_components::<3>, allow_hyphen_values = true)]
        load: [f64; 3],
        /// Slip plane normal as h,k,l
        #[arg(long, value_parser = parse_components::<3>, allow_hyphen_values = true)]
        plane: [f64; 3],
        /// Slip direction as u,v,w
        #[arg(long, value_parser = parse_components::<3>, allow_hyphen_values = true)]
        direction: [f64; 3],
    },
}

// "1,-1,0" -> [1.0, -1.0, 0.0]
fn parse_components<const N: usize>(s: &str) -> std::result::Result<[f64; N], String> {
    let values = s
        .split(',')
        .map(|v| v.trim().parse::<f64>().map_err(|e| format!("'{}': {}", v, e)))
        .collect::<std::result::Result<Vec<f64>, String>>()?;
    <[f64; N]>::try_from(values)
        .map_err(|v| format!("expected {} comma-separated values, got {}", N, v.len()))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Set thread pool size if specified
    if let Some(threads) = cli.threads {
        #[cfg(feature = "parallel")]
        {
            rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build_global()
                .map_err(|e| format!("Failed to set thread pool size: {}", e))?;
            info!("Using {} threads", threads);
        }
        #[cfg(not(feature = "parallel"))]
        {
            warn!("Thread count {} specified but parallel feature not enabled. Ignoring.", threads);
        }
    }

    info!("Starting laue-ops v{}", VERSION);

    match cli.command {
        Commands::Info { group } => print_info(group),
        Commands::Reduce { group, phi1, phi, phi2 } => reduce(group, Euler::from_degrees(phi1, phi, phi2)),
        Commands::Misorientation { group, q1, q2 } => misorientation(group, q1, q2),
        Commands::Schmid {
            group,
            load,
            plane,
            direction,
        } => schmid(group, load, plane, direction),
    }
}

fn print_info(group: LaueGroup) -> Result<()> {
    let ops = laue_ops(group);
    ops.verify()?;
    println!("Laue class:          {}", ops.symmetry_name());
    println!("Rotation group:      {}", ops.rotation_point_group());
    println!("Crystal structure:   {}", group.crystal_structure_index());
    println!("Symmetry operators:  {}", ops.num_sym_ops());
    println!("ODF bins:            {:?} ({})", ops.odf_num_bins(), ops.odf_size());
    println!("MDF plot bins:       {}", ops.mdf_plot_bins());
    let names = ops.default_pole_figure_names();
    let sizes = ops.num_symmetry();
    for (name, size) in names.iter().zip(sizes) {
        println!("Pole figure {:<8} {} points per orientation", name, size);
    }
    Ok(())
}

fn reduce(group: LaueGroup, eu: Euler) -> Result<()> {
    let ops = laue_ops(group);
    let fz = ops.reduce_to_fundamental_zone(&euler_to_rodrigues(&eu));
    let v = fz.vector();
    println!("Rodrigues:  [{:.6}, {:.6}, {:.6}]", v.x, v.y, v.z);
    println!("Angle:      {:.4}°", fz.angle().to_degrees());
    println!("ODF bin:    {}", ops.odf_bin(&fz));
    Ok(())
}

fn misorientation(group: LaueGroup, q1: [f64; 4], q2: [f64; 4]) -> Result<()> {
    let ops = laue_ops(group);
    let [x, y, z, w] = q1;
    let q1 = quat_xyzw(x, y, z, w);
    let [x, y, z, w] = q2;
    let q2 = quat_xyzw(x, y, z, w);
    let m = ops.misorientation(&q1, &q2);
    println!("Angle:  {:.4}°", m.angle.to_degrees());
    println!("Axis:   [{:.6}, {:.6}, {:.6}]", m.axis.x, m.axis.y, m.axis.z);
    Ok(())
}

fn schmid(group: LaueGroup, load: [f64; 3], plane: [f64; 3], direction: [f64; 3]) -> Result<()> {
    let ops = laue_ops(group);
    let sf = ops.schmid_factor(
        &Vector3::from(load),
        &Vector3::from(plane),
        &Vector3::from(direction),
    );
    if sf.factor.is_nan() {
        warn!("Degenerate input, no Schmid factor");
    }
    println!("Schmid factor:  {:.6}", sf.factor);
    println!("Angles:         φ = {:.4}°, λ = {:.4}°", sf.angles[0].to_degrees(), sf.angles[1].to_degrees());
    println!("Operator:       {}", sf.op_index);
    Ok(())
}
