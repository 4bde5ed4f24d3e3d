mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{CheckArgs, Cli, Commands, OutputArgs, ResponseArgs};
use sketchgrade::config::{self, Config};
use sketchgrade::core::report::{self, FinalReport, JsonReport};
use sketchgrade::core::scanner::{self, ExplicitSources};
use sketchgrade::generation;
use std::io::Read;
use std::path::{Path, PathBuf};

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            2
        }
    };

    std::process::exit(exit_code);
}

fn run() -> Result<i32> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check(args) => run_check(args),
        Commands::Response(args) => run_response(args),
        Commands::Init(args) => {
            if args.config.is_some() {
                eprintln!(
                    "warning: --config is ignored by `sketchgrade init`; writing ./{}",
                    config::CONFIG_FILE_NAME
                );
            }

            let path = std::env::current_dir()?.join(config::CONFIG_FILE_NAME);
            config::write_default_config(&path)?;
            println!("created {}", path.display());
            Ok(0)
        }
    }
}

fn run_check(args: CheckArgs) -> Result<i32> {
    let cwd = std::env::current_dir()?;
    let cfg = load(&args.output, &cwd)?;
    let root = resolve_path(&cwd, &args.path);
    let explicit = ExplicitSources {
        html: args.html.map(|path| resolve_path(&cwd, &path)),
        css: args.css.map(|path| resolve_path(&cwd, &path)),
        js: args.js.map(|path| resolve_path(&cwd, &path)),
    };

    let scanned = scanner::collect_artifact(&root, &explicit, &cfg)?;
    for kind in &scanned.missing {
        eprintln!(
            "warning: no {} files found under {}",
            kind.label(),
            root.display()
        );
    }

    let source = if scanned.files.is_empty() {
        root.display().to_string()
    } else {
        scanned.files.join(", ")
    };
    let report = sketchgrade::core::run_checks(&scanned.artifact, source, &cfg);
    emit(&report, &args.output, &cfg)
}

fn run_response(args: ResponseArgs) -> Result<i32> {
    let cwd = std::env::current_dir()?;
    let cfg = load(&args.output, &cwd)?;
    let text = read_reply(&cwd, &args.file)?;

    let parsed = generation::parse_model_response(&text);
    if parsed.used_fallback {
        eprintln!("warning: no usable JSON object in model reply; scoring the placeholder page");
    }

    let response = parsed.into_response();
    let report = sketchgrade::core::build_report(
        response.quality.clone(),
        args.file.display().to_string(),
        &cfg,
    );

    if args.output.json || cfg.general.json {
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(exit_code(&report));
    }

    report::print_human(&report);
    Ok(exit_code(&report))
}

fn load(output: &OutputArgs, cwd: &Path) -> Result<Config> {
    Ok(config::load_config(output.config.as_deref(), cwd)?.config)
}

fn emit(report: &FinalReport, output: &OutputArgs, cfg: &Config) -> Result<i32> {
    if output.json || cfg.general.json {
        let json_report = JsonReport::from(report);
        println!("{}", serde_json::to_string_pretty(&json_report)?);
    } else {
        report::print_human(report);
    }

    Ok(exit_code(report))
}

fn exit_code(report: &FinalReport) -> i32 {
    if report.exit.ok { 0 } else { 1 }
}

fn read_reply(cwd: &Path, file: &Path) -> Result<String> {
    if file == Path::new("-") {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("failed reading model reply from stdin")?;
        return Ok(text);
    }

    let path = resolve_path(cwd, file);
    let bytes = std::fs::read(&path)
        .with_context(|| format!("failed reading model reply {}", path.display()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn resolve_path(cwd: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}
