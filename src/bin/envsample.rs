use clap::*;

use envsample::core::prelude::*;

use log::*;
use std::env;
use std::path::PathBuf;
use std::process;

#[derive(Debug, Parser)]
#[clap(author, about, version)]
struct CommandOptions {
    /// Input image (HDR or LDR).
    #[arg(short, long, value_name = "filename")]
    pub infile: PathBuf,

    /// Prefix for the output images: <prefix>_preview.png, <prefix>_pdf.png,
    /// <prefix>_samples.png.
    #[arg(short, long, value_name = "prefix", default_value = "envsample")]
    pub outprefix: String,

    /// Number of samples to draw.
    #[arg(short = 'n', long, value_name = "num")]
    pub samples: Option<usize>,

    /// Seed for the sample generator.
    #[arg(short, long, value_name = "num")]
    pub seed: Option<u64>,

    /// Channel weights used to derive luminance from RGB.
    #[arg(short = 'w', long, value_delimiter = ',', value_name = "r,g,b")]
    pub weights: Option<Vec<Float>>,

    /// Read pipeline options from a JSON file.
    #[arg(short, long, value_name = "filename")]
    pub config: Option<PathBuf>,

    /// Suppress all text output other than error messages.
    #[clap(long, default_value = "false")]
    pub quiet: bool,

    /// Log messages at or above this level (0 -> INFO, 1 -> WARNING,
    /// 2 -> ERROR).
    #[arg(long, value_name = "num")]
    pub minloglevel: Option<i32>,
}

fn init_logger(opts: &CommandOptions) {
    if let Some(minloglevel) = opts.minloglevel {
        const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];
        let log_level = LOG_LEVELS[(minloglevel + 2).clamp(0, 4) as usize];
        env::set_var("RUST_LOG", log_level);
    } else {
        //default log level : warn
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_owned());
        env::set_var("RUST_LOG", log_level);
    }

    env_logger::Builder::from_default_env()
        .format_target(false)
        .format_module_path(false)
        .init();
}

fn make_options(opts: &CommandOptions) -> Result<SampleOptions, SampleError> {
    let mut options = match opts.config.as_ref() {
        Some(path) => {
            let path = path
                .to_str()
                .ok_or_else(|| SampleError::io("Invalid config path."))?;
            SampleOptions::from_file(path)?
        }
        None => SampleOptions::default(),
    };
    if let Some(n) = opts.samples {
        options.sample_count = n;
    }
    if let Some(seed) = opts.seed {
        options.rng_seed = Some(seed);
    }
    if let Some(w) = opts.weights.as_ref() {
        if w.len() != 3 {
            return Err(SampleError::invalid_input(
                "Expected three channel weights.",
            ));
        }
        options.channel_weights = [w[0], w[1], w[2]];
    }
    options.validate()?;
    return Ok(options);
}

fn run(opts: &CommandOptions) -> Result<(), SampleError> {
    let options = make_options(opts)?;
    let path = opts
        .infile
        .to_str()
        .ok_or_else(|| SampleError::io("Invalid input path."))?;

    let (pixels, resolution) = read_image(path)?;
    info!(
        "Loaded \"{}\": {}x{}",
        path, resolution.x, resolution.y
    );

    let grid = luminance_grid(&pixels, &resolution, &options.channel_weights)?;
    let dist = Distribution2D::new(&grid)?;

    let mut rng = match options.rng_seed {
        Some(seed) => RNG::new_sequence(seed),
        None => RNG::new(),
    };
    let sampler = ImportanceSampler::new(&dist);
    let n = options.sample_count;
    let mut samples = Vec::with_capacity(n);
    let mut reporter = if !opts.quiet {
        Some(ProgressReporter::new(n, "Sampling"))
    } else {
        None
    };
    for _ in 0..n {
        samples.push(sampler.sample(&mut rng)?);
        if let Some(r) = reporter.as_mut() {
            r.update(1);
        }
    }
    if let Some(r) = reporter.as_mut() {
        r.done();
    }

    let prefix = &opts.outprefix;
    write_image(&format!("{}_preview.png", prefix), &pixels, &resolution)?;
    write_heatmap(&format!("{}_pdf.png", prefix), dist.pdf_grid(), &resolution)?;
    write_overlay(
        &format!("{}_samples.png", prefix),
        &pixels,
        &resolution,
        &samples,
    )?;
    info!(
        "Wrote {} samples to \"{}_samples.png\"",
        samples.len(),
        prefix
    );
    return Ok(());
}

fn main() {
    let opts = CommandOptions::parse();
    init_logger(&opts);
    if !opts.quiet {
        let version = env!("CARGO_PKG_VERSION");
        println!("envsample version {}", version);
    }
    match run(&opts) {
        Ok(()) => {}
        Err(e) => {
            error!("{}", e);
            process::exit(1);
        }
    }
}
