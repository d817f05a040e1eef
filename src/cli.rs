use crate::{
    config::Config,
    detect::{Detector, EncodingVerdict},
    document::Document,
    pipeline::Pipeline,
    util::{ensure_dir, now_rfc3339, sha256_hex},
};
use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "bijoy2uni")]
#[command(about = "Deterministic Bijoy-to-Unicode normalizer for extracted legal case text")]
pub struct Args {
    #[command(subcommand)]
    pub cmd: Command,

    /// Path to config TOML. If omitted, uses ./bijoy2uni.toml if present.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Override log level (trace/debug/info/warn/error).
    #[arg(long)]
    pub log_level: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the document encoding profile and per-line verdict counts.
    Classify {
        #[arg(long)]
        input: PathBuf,
    },
    /// Normalize one file and print the result to stdout.
    Convert {
        #[arg(long)]
        input: PathBuf,
    },
    /// Print extracted case metadata as JSON.
    Metadata {
        #[arg(long)]
        input: PathBuf,
    },
    /// Full job: normalize, extract metadata, write a job directory.
    Run {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },
}

pub fn dispatch(args: Args) -> Result<()> {
    let cfg_path = resolve_config_path(args.config.as_deref())?;
    let cfg = Config::load(&cfg_path)?;

    match &args.cmd {
        Command::Classify { input } => {
            let log_path = resolve_log_path(&cfg, None);
            let _guard = init_logging(&args, &cfg, log_path.as_deref())?;
            classify(&cfg, input)
        }
        Command::Convert { input } => {
            let log_path = resolve_log_path(&cfg, None);
            let _guard = init_logging(&args, &cfg, log_path.as_deref())?;
            convert(&cfg, input)
        }
        Command::Metadata { input } => {
            let log_path = resolve_log_path(&cfg, None);
            let _guard = init_logging(&args, &cfg, log_path.as_deref())?;
            metadata(&cfg, input)
        }
        Command::Run { input, out_dir } => run(&args, &cfg, input, out_dir.as_deref()),
    }
}

fn resolve_config_path(user: Option<&Path>) -> Result<PathBuf> {
    if let Some(p) = user {
        return Ok(p.to_path_buf());
    }
    let default = PathBuf::from("bijoy2uni.toml");
    if default.exists() {
        Ok(default)
    } else {
        Ok(PathBuf::from("bijoy2uni.example.toml"))
    }
}

fn init_logging(args: &Args, cfg: &Config, file_path: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let level = args
        .log_level
        .as_deref()
        .unwrap_or(cfg.logging.level.as_str());

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let stdout_layer = if cfg.logging.json {
        tracing_subscriber::fmt::layer()
            .json()
            .with_target(true)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_target(true)
            .boxed()
    };

    let (file_layer, guard) = if let Some(path) = file_path {
        let parent = path.parent().unwrap_or_else(|| Path::new("."));
        ensure_dir(parent)?;
        let file = std::fs::File::create(path)
            .with_context(|| format!("create log file: {}", path.display()))?;
        let (non_blocking, guard) = tracing_appender::non_blocking(file);
        let layer = tracing_subscriber::fmt::layer()
            .with_writer(non_blocking)
            .with_ansi(false)
            .with_target(true)
            .boxed();
        (Some(layer), Some(guard))
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stdout_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| anyhow!("failed to init logging: {e}"))?;

    Ok(guard)
}

fn load_document(cfg: &Config, input: &Path) -> Result<Document> {
    validate_input(cfg, input)?;
    let raw = std::fs::read_to_string(input)
        .with_context(|| format!("reading input: {}", input.display()))?;
    let source = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("input")
        .to_string();
    Ok(Document::from_text(&source, &raw))
}

fn classify(cfg: &Config, input: &Path) -> Result<()> {
    let doc = load_document(cfg, input)?;
    let detector = Detector::new(&cfg.detection);

    let profile = detector.profile(&doc);
    let mut unicode = 0u64;
    let mut legacy = 0u64;
    let mut ambiguous = 0u64;
    for line in &doc.lines {
        match detector.classify(&line.content) {
            EncodingVerdict::Unicode => unicode += 1,
            EncodingVerdict::LegacyGlyphEncoded => legacy += 1,
            EncodingVerdict::Ambiguous => ambiguous += 1,
        }
    }

    println!(
        "{}",
        serde_json::to_string_pretty(&serde_json::json!({
            "input": input,
            "profile": profile,
            "verdicts": {
                "unicode": unicode,
                "legacy_glyph_encoded": legacy,
                "ambiguous": ambiguous,
            },
        }))?
    );
    Ok(())
}

fn convert(cfg: &Config, input: &Path) -> Result<()> {
    validate_input(cfg, input)?;
    let pipeline = Pipeline::new(cfg);
    let out = pipeline.run_job(input)?;
    println!("{}", out.text);
    Ok(())
}

fn metadata(cfg: &Config, input: &Path) -> Result<()> {
    validate_input(cfg, input)?;
    let pipeline = Pipeline::new(cfg);
    let out = pipeline.run_job(input)?;
    println!("{}", serde_json::to_string_pretty(&out.report.metadata)?);
    Ok(())
}

fn run(args: &Args, cfg: &Config, input: &Path, out_override: Option<&Path>) -> Result<()> {
    validate_input(cfg, input)?;

    let cfg_norm = cfg.normalized_for_hash();
    let cfg_hash = sha256_hex(cfg_norm.as_bytes());
    let input_hash = crate::util::hash_file(cfg, input)
        .with_context(|| format!("hashing input: {}", input.display()))?;
    let job_id = sha256_hex(format!("{}:{}", cfg_hash, input_hash).as_bytes());

    let out_root = out_override
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(&cfg.paths.out_dir));
    let job_dir = out_root.join(&job_id);

    if job_dir.exists() && !cfg.global.resume {
        return Err(anyhow!(
            "job_dir already exists and resume=false: {}",
            job_dir.display()
        ));
    }

    ensure_dir(&job_dir)?;
    ensure_dir(&job_dir.join("final"))?;
    ensure_dir(&job_dir.join("logs"))?;

    let log_path = resolve_log_path(cfg, Some(&job_dir));
    let _guard = init_logging(args, cfg, log_path.as_deref())?;

    info!("job_id={job_id} out={}", job_dir.display());

    if cfg.debug.dump_effective_config {
        let raw = toml::to_string(cfg).unwrap_or_default();
        std::fs::write(job_dir.join("effective-config.toml"), raw)?;
    }

    let pipeline = Pipeline::new(cfg);

    let started = now_rfc3339();
    let result = pipeline.run_job(input)?;

    if cfg.output.write_text {
        std::fs::write(
            job_dir.join("final").join(&cfg.output.text_filename),
            &result.text,
        )?;
    }

    if cfg.output.write_metadata_json {
        std::fs::write(
            job_dir.join("final").join(&cfg.output.metadata_filename),
            serde_json::to_string_pretty(&result.report.metadata)?,
        )?;
    }

    if cfg.output.write_report_json {
        std::fs::write(
            job_dir.join("final").join(&cfg.output.report_filename),
            serde_json::to_string_pretty(&result.report)?,
        )?;
    }

    if cfg.output.write_index_json {
        let index = serde_json::json!({
            "job_id": job_id,
            "started": started,
            "finished": now_rfc3339(),
            "final_text": format!("final/{}", cfg.output.text_filename),
            "metadata": format!("final/{}", cfg.output.metadata_filename),
            "report": format!("final/{}", cfg.output.report_filename),
        });
        std::fs::write(
            job_dir.join("index.json"),
            serde_json::to_string_pretty(&index)?,
        )?;
    }

    if cfg.global.print_summary {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "job_id": job_id,
                "job_dir": job_dir,
                "lines": result.report.lines,
                "status": "ok"
            }))?
        );
    }

    Ok(())
}

fn validate_input(cfg: &Config, input: &Path) -> Result<()> {
    let input_str = input.display().to_string();

    if cfg.security.reject_url_inputs && looks_like_url(&input_str) {
        return Err(anyhow!("URL inputs are disabled: {input_str}"));
    }

    if !input.exists() {
        return Err(anyhow!("input does not exist: {}", input.display()));
    }

    if let Some(ext) = input.extension().and_then(|s| s.to_str()) {
        let ext = ext.to_ascii_lowercase();
        if ext != "txt" && ext != "md" {
            return Err(anyhow!("input is not extracted text: {}", input.display()));
        }
    } else {
        warn!(
            "input has no extension; assuming extracted text: {}",
            input.display()
        );
    }

    Ok(())
}

fn looks_like_url(s: &str) -> bool {
    let s = s.to_ascii_lowercase();
    s.starts_with("http://") || s.starts_with("https://") || s.starts_with("file://")
}

fn resolve_log_path(cfg: &Config, job_dir: Option<&Path>) -> Option<PathBuf> {
    if !cfg.logging.write_to_file {
        return None;
    }

    if !cfg.logging.file_path.is_empty() {
        return Some(PathBuf::from(&cfg.logging.file_path));
    }

    if let Some(job_dir) = job_dir {
        return Some(job_dir.join("logs").join("bijoy2uni.log"));
    }

    Some(PathBuf::from(&cfg.paths.out_dir).join("bijoy2uni.log"))
}
