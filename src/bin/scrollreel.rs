use std::{io, path::PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};

const DEFAULT_ANCHOR_SELECTOR: &str = "#next";

#[derive(Parser, Debug)]
#[command(name = "scrollreel", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the inline style table at one scroll offset.
    Sample(SampleArgs),
    /// Print one JSON line of progress and price per scroll step.
    Trace(TraceArgs),
}

#[derive(Args, Debug)]
struct PageArgs {
    /// Engine configuration JSON. Defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Viewport size as WIDTHxHEIGHT.
    #[arg(long, value_parser = parse_viewport, default_value = "1280x800")]
    viewport: scrollreel::Viewport,

    /// Document offset of the tracked section in pixels.
    #[arg(long, default_value_t = 0.0)]
    section_top: f64,

    /// Document offset of the tail-snap anchor in pixels.
    #[arg(long)]
    anchor_top: Option<f64>,

    /// Uniform glyph advance used to lay out the closing phrase.
    #[arg(long)]
    glyph_advance: Option<f64>,

    /// Cap on frames fired at each scroll offset. Without it the price counter settles fully.
    #[arg(long)]
    frames: Option<u32>,
}

#[derive(Args, Debug)]
struct SampleArgs {
    #[command(flatten)]
    page: PageArgs,

    /// Scroll offset in pixels.
    #[arg(long)]
    scroll: f64,
}

#[derive(Args, Debug)]
struct TraceArgs {
    #[command(flatten)]
    page: PageArgs,

    /// First scroll offset.
    #[arg(long, default_value_t = 0.0)]
    from: f64,

    /// Last scroll offset (inclusive).
    #[arg(long)]
    to: f64,

    /// Distance between scroll offsets.
    #[arg(long, default_value_t = 100.0)]
    step: f64,
}

type Engine = scrollreel::EngineInstance<scrollreel::HeadlessHost, scrollreel::InMemorySink>;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Sample(args) => cmd_sample(args),
        Command::Trace(args) => cmd_trace(args),
    }
}

fn parse_viewport(s: &str) -> Result<scrollreel::Viewport, String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{s}'"))?;
    let width: f64 = w.trim().parse().map_err(|e| format!("width: {e}"))?;
    let height: f64 = h.trim().parse().map_err(|e| format!("height: {e}"))?;
    if !(width > 0.0 && height > 0.0 && width.is_finite() && height.is_finite()) {
        return Err(format!("viewport must be positive, got '{s}'"));
    }
    Ok(scrollreel::Viewport::new(width, height))
}

fn build_engine(page: &PageArgs) -> anyhow::Result<Engine> {
    let mut config = match &page.config {
        Some(path) => scrollreel::EngineConfig::from_path(path)?,
        None => scrollreel::EngineConfig::default(),
    };

    let mut host = scrollreel::HeadlessHost::new(page.viewport, page.section_top);
    if let Some(anchor_top) = page.anchor_top {
        let selector = config
            .next_section_selector
            .get_or_insert_with(|| DEFAULT_ANCHOR_SELECTOR.to_owned())
            .clone();
        host = host.with_anchor(selector, anchor_top);
    }
    if let Some(advance) = page.glyph_advance {
        let count = config.content.phrase.chars().count();
        host = host.with_letter_advances(vec![advance; count]);
    }

    let engine = scrollreel::EngineInstance::new(&config, host, scrollreel::InMemorySink::new())
        .context("build engine")?;
    Ok(engine)
}

fn run_frames(engine: &mut Engine, scroll: f64, frames: Option<u32>) -> anyhow::Result<()> {
    let Some(limit) = frames else {
        engine.scroll_and_pump(scroll)?;
        return Ok(());
    };
    engine.host_mut().scroll_to(scroll);
    engine.on_scroll();
    for _ in 0..limit {
        let Some(token) = engine.host_mut().next_frame() else {
            break;
        };
        engine.on_frame(token)?;
    }
    Ok(())
}

fn cmd_sample(args: SampleArgs) -> anyhow::Result<()> {
    let mut engine = build_engine(&args.page)?;
    engine.host_mut().scroll_to(args.scroll);
    engine.start();
    run_frames(&mut engine, args.scroll, args.page.frames)?;

    let table = engine.sink().table();
    let json = serde_json::to_string_pretty(&table).context("serialize style table")?;
    println!("{json}");
    Ok(())
}

fn cmd_trace(args: TraceArgs) -> anyhow::Result<()> {
    if !(args.step > 0.0 && args.step.is_finite()) {
        anyhow::bail!("--step must be positive");
    }
    if args.to < args.from {
        anyhow::bail!("--to must not be smaller than --from");
    }

    let mut engine = build_engine(&args.page)?;
    engine.host_mut().scroll_to(args.from);
    engine.start();

    let steps = ((args.to - args.from) / args.step).floor() as u64;
    for i in 0..=steps {
        let scroll = args.from + args.step * i as f64;
        run_frames(&mut engine, scroll, args.page.frames)?;
        let Some(frame) = engine.last_frame() else {
            anyhow::bail!("no frame was evaluated at scroll {scroll}");
        };
        let line = serde_json::json!({
            "scroll": scroll,
            "raw": frame.raw,
            "scenes": frame.scenes,
            "targetPrice": frame.target_price,
            "price": frame.displayed_price(),
        });
        println!("{line}");
    }
    Ok(())
}
