mod cli;

use trackforged::{
    config,
    processor::{SourceOutcome, SplitOptions, SplitProcessor},
    source::{self, Source},
};

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use std::path::{Path, PathBuf};
use trackforged_av::{actions::SegmentExtractor, tools::FFMPEG};
use trackforged_parser::{SourceMetadata, SplitMode};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "trackforged=trace,trackforged_av=trace,trackforged_parser=debug".to_string()
        } else {
            "trackforged=info,trackforged_av=info".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Split {
            input,
            title,
            duration,
            info,
            split,
            from_chapters,
            mode,
            outdir,
            dry_run,
        } => {
            let config = config::load_config_or_default(cli.config.as_deref())?;
            let sources = SourceArgs {
                input,
                title,
                duration,
                info,
            };
            let options = SplitArgs {
                split,
                from_chapters,
                mode,
                outdir,
                dry_run,
            };
            run_split(&config, sources, options)
        }
        Commands::CheckTools => check_tools(cli.config.as_deref()),
        Commands::Validate { file } => {
            let path = file.or(cli.config);
            validate_config(path.as_deref())
        }
        Commands::Version => {
            println!("trackforged {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

struct SourceArgs {
    input: Option<PathBuf>,
    title: Option<String>,
    duration: Option<f64>,
    info: Vec<PathBuf>,
}

struct SplitArgs {
    split: Option<String>,
    from_chapters: bool,
    mode: Option<String>,
    outdir: Option<PathBuf>,
    dry_run: bool,
}

fn run_split(config: &config::Config, sources: SourceArgs, args: SplitArgs) -> Result<()> {
    if args.split.is_none() && !args.from_chapters {
        anyhow::bail!("Nothing to do: pass --split or --from-chapters");
    }

    let output_dir = args
        .outdir
        .unwrap_or_else(|| config.split.output_dir.clone());
    let mode: SplitMode = args
        .mode
        .as_deref()
        .unwrap_or(config.split.mode.as_str())
        .parse()
        .map_err(anyhow::Error::msg)?;
    let settings = config
        .split
        .extract_settings()
        .map_err(anyhow::Error::msg)?;

    let sources = collect_sources(sources, &output_dir)?;
    if sources.is_empty() {
        anyhow::bail!("No sources to split");
    }

    let ffmpeg = if args.dry_run {
        config
            .tools
            .ffmpeg_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(FFMPEG))
    } else {
        std::fs::create_dir_all(&output_dir)
            .with_context(|| format!("Failed to create output directory: {:?}", output_dir))?;
        trackforged_av::get_tool_path(FFMPEG, config.tools.ffmpeg_path.as_deref())?
    };

    let processor = SplitProcessor::new(
        SegmentExtractor::new(ffmpeg).with_settings(settings),
        SplitOptions {
            spec: args.split,
            mode,
            from_chapters: args.from_chapters,
            output_dir,
            dry_run: args.dry_run,
        },
    );

    let mut productive = 0;
    for outcome in processor.run(&sources) {
        match outcome {
            SourceOutcome::Skipped { source, reason } => {
                eprintln!("Skipped {}: {}", source, reason);
            }
            SourceOutcome::Planned { source, cuts } => {
                productive += 1;
                println!("{}: {} segment(s)", source, cuts.len());
                for (i, cut) in cuts.iter().enumerate() {
                    println!("  {}. {}", i + 1, cut);
                }
            }
            SourceOutcome::Extracted { source, report } => {
                if !report.segments.is_empty() {
                    productive += 1;
                }
                for segment in &report.segments {
                    println!("[OK] Wrote {}", segment.path.display());
                }
                for failure in &report.failures {
                    eprintln!(
                        "[ERR] Failed to create segment {} ({}) of {}: {}",
                        failure.index + 1,
                        failure.label,
                        source,
                        failure.reencode
                    );
                }
                println!(
                    "{}: created {} of {} file(s)",
                    source,
                    report.segments.len(),
                    report.segments.len() + report.failures.len()
                );
            }
        }
    }

    if productive == 0 {
        anyhow::bail!("No segments were created");
    }

    Ok(())
}

fn collect_sources(args: SourceArgs, output_dir: &Path) -> Result<Vec<Source>> {
    if let Some(input) = args.input {
        if !input.exists() {
            anyhow::bail!("Input file does not exist: {:?}", input);
        }
        let title = args.title.or_else(|| {
            input
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
        });
        return Ok(vec![Source {
            audio: input,
            metadata: SourceMetadata {
                title,
                duration: args.duration,
                ..Default::default()
            },
        }]);
    }

    if args.info.is_empty() {
        anyhow::bail!("Either --input or --info is required");
    }

    let mut sources = Vec::with_capacity(args.info.len());
    for info in &args.info {
        match source::source_from_info(info, output_dir) {
            Ok(source) => sources.push(source),
            Err(e) => tracing::warn!("{}", e),
        }
    }
    Ok(sources)
}

fn check_tools(config_path: Option<&Path>) -> Result<()> {
    let config = config::load_config_or_default(config_path)?;
    println!("Checking external tools...\n");

    let tools = trackforged_av::check_tools(config.tools.ffmpeg_path.as_deref());
    let mut all_ok = true;

    for tool in &tools {
        let status = if tool.available {
            "✓"
        } else {
            all_ok = false;
            "✗"
        };

        print!("{} {}", status, tool.name);

        if let Some(ref version) = tool.version {
            print!(" ({})", version);
        }

        if let Some(ref path) = tool.path {
            print!(" - {}", path.display());
        }

        println!();
    }

    println!();
    if all_ok {
        println!("All required tools are available!");
    } else {
        println!("Some tools are missing. Install ffmpeg to enable splitting.");
    }

    Ok(())
}

fn validate_config(path: Option<&Path>) -> Result<()> {
    match path {
        Some(p) => {
            println!("Validating config: {:?}", p);
            let config = config::load_config(p)?;
            println!("✓ Configuration is valid");
            print_config(&config);
        }
        None => {
            println!("No config file specified, using defaults");
            print_config(&config::Config::default());
        }
    }

    Ok(())
}

fn print_config(config: &config::Config) {
    let split = &config.split;
    println!("  Output directory: {}", split.output_dir.display());
    println!("  Extension: {}", split.extension);
    println!("  Fallback codec: {} @ {}", split.codec, split.bitrate);
    println!("  Split mode: {}", split.mode);
    match config.tools.ffmpeg_path {
        Some(ref p) => println!("  ffmpeg: {}", p.display()),
        None => println!("  ffmpeg: (PATH)"),
    }
}
