use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use sha2::Digest as _;
use tessera::{
    AspectPreset, CpuBackend, GenerationRequest, PALETTES, ParamKind, ParamValue, RenderSettings,
    StyleId, compose, encode_png, export_file_name, render_batch, render_request,
};

const THREADS_ENV: &str = "TESSERA_THREADS";

#[derive(Parser, Debug)]
#[command(name = "tessera", version, about = "Seeded geometric artwork generator")]
struct Cli {
    /// Log pipeline events to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render one request to a PNG.
    Render(RenderArgs),
    /// Print the composed primitive list as JSON, or its fingerprint.
    Dump(DumpArgs),
    /// List registered styles and their parameters.
    Styles,
    /// List built-in palettes.
    Palettes,
    /// Render one request for several seeds in parallel.
    Batch(BatchArgs),
}

#[derive(Args, Debug)]
struct RequestArgs {
    /// Request JSON; flags below override its fields.
    #[arg(long = "in")]
    in_path: Option<PathBuf>,

    /// Style id, e.g. `isoCubes`.
    #[arg(long)]
    style: Option<String>,

    /// Palette index.
    #[arg(long)]
    palette: Option<usize>,

    /// Seed text.
    #[arg(long)]
    seed: Option<String>,

    /// Aspect preset: square, landscape or portrait.
    #[arg(long)]
    aspect: Option<AspectPreset>,

    /// Explicit width (requires --height).
    #[arg(long, requires = "height")]
    width: Option<u32>,

    /// Explicit height (requires --width).
    #[arg(long, requires = "width")]
    height: Option<u32>,

    /// Use solid fills only.
    #[arg(long)]
    no_gradient: bool,

    /// White background instead of palette color 0.
    #[arg(long)]
    light: bool,

    /// Darken the edges.
    #[arg(long)]
    vignette: bool,

    /// Style parameter, repeatable.
    #[arg(long = "param", value_name = "KEY=VALUE", value_parser = parse_param)]
    params: Vec<(String, ParamValue)>,
}

#[derive(Args, Debug)]
struct RenderArgs {
    #[command(flatten)]
    request: RequestArgs,

    /// Pixel density multiplier (1..=4).
    #[arg(long, default_value_t = 1)]
    scale: u32,

    /// Output PNG path.
    #[arg(long, conflicts_with = "out_dir")]
    out: Option<PathBuf>,

    /// Output directory; the file is named after style, aspect and seed.
    #[arg(long)]
    out_dir: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct DumpArgs {
    #[command(flatten)]
    request: RequestArgs,

    /// Print only the composition fingerprint.
    #[arg(long)]
    fingerprint: bool,
}

#[derive(Args, Debug)]
struct BatchArgs {
    #[command(flatten)]
    request: RequestArgs,

    /// Comma-separated seeds.
    #[arg(long, value_delimiter = ',', required = true)]
    seeds: Vec<String>,

    /// Output directory.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Worker threads; falls back to TESSERA_THREADS, then the rayon default.
    #[arg(long)]
    threads: Option<usize>,

    /// Pixel density multiplier (1..=4).
    #[arg(long, default_value_t = 1)]
    scale: u32,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Dump(args) => cmd_dump(args),
        Command::Styles => cmd_styles(),
        Command::Palettes => cmd_palettes(),
        Command::Batch(args) => cmd_batch(args),
    }
}

fn parse_param(s: &str) -> Result<(String, ParamValue), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{s}'"))?;
    let value = ParamValue::parse_literal(value)
        .ok_or_else(|| format!("'{value}' is neither a number nor true/false"))?;
    Ok((key.trim().to_string(), value))
}

impl RequestArgs {
    fn resolve(&self) -> anyhow::Result<GenerationRequest> {
        let mut req = match &self.in_path {
            Some(path) => GenerationRequest::from_path(path)
                .with_context(|| format!("load request '{}'", path.display()))?,
            None => {
                let style = self
                    .style
                    .as_deref()
                    .context("either --in or --style is required")?;
                GenerationRequest {
                    style: style.to_string(),
                    ..GenerationRequest::new(StyleId::Concentric, "")
                }
            }
        };

        if let Some(style) = &self.style {
            req.style = style.clone();
        }
        if let Some(palette) = self.palette {
            req.palette_index = palette;
        }
        if let Some(seed) = &self.seed {
            req.seed = seed.clone();
        }
        if let Some(aspect) = self.aspect {
            req.aspect = aspect;
        }
        if self.width.is_some() {
            req.width = self.width;
            req.height = self.height;
        }
        if self.no_gradient {
            req.use_gradient = false;
        }
        if self.light {
            req.dark_background = false;
        }
        if self.vignette {
            req.use_vignette = true;
        }
        for (key, value) in &self.params {
            req.style_params.insert(key.clone(), *value);
        }
        Ok(req)
    }
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let req = args.request.resolve()?;
    let settings = RenderSettings::with_scale(args.scale)?;
    let mut backend = CpuBackend::new(settings);
    let frame = render_request(&req, &mut backend)
        .with_context(|| format!("render style '{}' seed '{}'", req.style, req.seed))?;
    let png = encode_png(&frame)?;

    let out = match (args.out, args.out_dir) {
        (Some(path), _) => path,
        (None, Some(dir)) => dir.join(export_file_name(&req)),
        (None, None) => PathBuf::from(export_file_name(&req)),
    };
    write_png(&out, &png)
}

fn cmd_dump(args: DumpArgs) -> anyhow::Result<()> {
    let req = args.request.resolve()?;
    let comp = compose(&req)?;
    if args.fingerprint {
        println!("{}", comp.fingerprint());
    } else {
        println!("{}", comp.to_json_pretty()?);
    }
    Ok(())
}

fn cmd_styles() -> anyhow::Result<()> {
    for style in StyleId::ALL {
        println!("{}\t{}", style.id(), style.label());
        for spec in style.schema() {
            let range = match spec.kind {
                ParamKind::Int { min, max, default } => {
                    format!("int {min}..={max} (default {default})")
                }
                ParamKind::Float { min, max, default } => {
                    format!("float {min}..={max} (default {default})")
                }
                ParamKind::Bool { default } => format!("bool (default {default})"),
            };
            match spec.depends_on {
                Some((flag, value)) => {
                    println!("    {:<18} {range} when {flag}={value}", spec.name);
                }
                None => println!("    {:<18} {range}", spec.name),
            }
        }
    }
    Ok(())
}

fn cmd_palettes() -> anyhow::Result<()> {
    for (i, palette) in PALETTES.iter().enumerate() {
        println!("{i:>2}\t{:<10}\t{}", palette.name, palette.colors.join(" "));
    }
    Ok(())
}

fn cmd_batch(args: BatchArgs) -> anyhow::Result<()> {
    let base = args.request.resolve()?;
    let requests: Vec<GenerationRequest> = args
        .seeds
        .iter()
        .map(|seed| GenerationRequest {
            seed: seed.trim().to_string(),
            ..base.clone()
        })
        .collect();

    let threads = args.threads.or_else(|| {
        std::env::var(THREADS_ENV)
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .filter(|&n| n > 0)
    });
    let settings = RenderSettings::with_scale(args.scale)?;
    let frames = render_batch(&requests, &settings, threads)?;

    for (req, frame) in requests.iter().zip(&frames) {
        let png = encode_png(frame)?;
        write_png(&args.out_dir.join(export_file_name(req)), &png)?;
    }
    Ok(())
}

fn write_png(path: &Path, png: &[u8]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(path, png).with_context(|| format!("write png '{}'", path.display()))?;
    eprintln!("wrote {} (sha256 {})", path.display(), sha256_hex(png));
    Ok(())
}

fn sha256_hex(bytes: &[u8]) -> String {
    let digest = sha2::Sha256::digest(bytes);
    let mut out = String::with_capacity(digest.len() * 2);
    for b in digest {
        out.push_str(&format!("{:02x}", b));
    }
    out
}
