use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(name = "duelviz", version)]
struct Cli {
    /// Log filter (`error`, `warn`, `info`, `debug`, `trace` or an EnvFilter directive).
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the duel chart of a match to SVG or PNG.
    Render(RenderArgs),
    /// Print the chart data of a match as JSON.
    Dump(MatchArgs),
    /// Check a template and list its canvas and element ids.
    Template(TemplateArgs),
}

#[derive(Args, Debug)]
struct MatchArgs {
    /// Sofascore match id.
    match_id: u64,

    /// Directory holding `<MATCH_ID>/{event,lineups,statistics}.json`.
    #[arg(long, default_value = "data")]
    data_dir: PathBuf,

    /// Team to analyse; defaults to the configured team.
    #[arg(long)]
    team: Option<String>,

    /// Configuration JSON.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct RenderArgs {
    #[command(flatten)]
    source: MatchArgs,

    /// Output path; `.svg` or `.png`.
    #[arg(long, default_value = "duels_chart.png")]
    output: PathBuf,

    /// SVG template; the built-in one when omitted.
    #[arg(long)]
    template: Option<PathBuf>,

    /// Pixels per template unit for PNG output.
    #[arg(long, default_value_t = 2.0)]
    scale: f64,

    /// Extra font directory for PNG output.
    #[arg(long)]
    fonts_dir: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct TemplateArgs {
    /// SVG template; the built-in one when omitted.
    #[arg(long)]
    template: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    setup_logging(&cli.log_level);

    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Dump(args) => cmd_dump(args),
        Command::Template(args) => cmd_template(args),
    }
}

fn setup_logging(level: &str) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();
}

fn load_config(path: Option<&Path>) -> anyhow::Result<duelviz::Config> {
    match path {
        Some(p) => duelviz::Config::from_path(p)
            .with_context(|| format!("load config '{}'", p.display())),
        None => Ok(duelviz::Config::default()),
    }
}

fn load_template(path: Option<&Path>) -> anyhow::Result<duelviz::Template> {
    match path {
        Some(p) => duelviz::Template::from_path(p)
            .with_context(|| format!("load template '{}'", p.display())),
        None => Ok(duelviz::Template::builtin()?),
    }
}

fn chart_for(args: &MatchArgs, cfg: &duelviz::Config) -> anyhow::Result<duelviz::DuelChart> {
    let source = duelviz::DirSource::new(&args.data_dir);
    let team = args.team.as_deref().unwrap_or(&cfg.team);
    duelviz::build_chart(&source, args.match_id, team, cfg)
        .with_context(|| format!("build chart for match {}", args.match_id))
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let cfg = load_config(args.source.config.as_deref())?;
    let template = load_template(args.template.as_deref())?;
    let chart = chart_for(&args.source, &cfg)?;

    let raster = duelviz::RasterOptions {
        scale: args.scale,
        background: Some(cfg.palette.background),
        fonts_dir: args.fonts_dir,
        resources_dir: args
            .template
            .as_deref()
            .and_then(Path::parent)
            .map(Path::to_path_buf),
    };

    let doc = duelviz::bind(&template, &chart, &cfg)?;
    duelviz::write_output(&args.output, &doc, &raster)?;

    eprintln!("wrote {}", args.output.display());
    Ok(())
}

fn cmd_dump(args: MatchArgs) -> anyhow::Result<()> {
    let cfg = load_config(args.config.as_deref())?;
    let chart = chart_for(&args, &cfg)?;
    let json = serde_json::to_string_pretty(&chart).context("serialize chart")?;
    println!("{json}");
    Ok(())
}

fn cmd_template(args: TemplateArgs) -> anyhow::Result<()> {
    let template = load_template(args.template.as_deref())?;
    let canvas = template.canvas();
    println!("canvas {}x{}", canvas.width, canvas.height);
    for id in template.ids() {
        println!("{id}");
    }
    Ok(())
}
