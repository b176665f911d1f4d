use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "pixfmt", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print channel count and byte layout of a pixel format.
    Describe(DescribeArgs),
    /// Encode one color and print the packed bytes as hex.
    Encode(EncodeArgs),
    /// Decode packed hex bytes and print one color per pixel.
    Decode(DecodeArgs),
    /// Pack an image file into a raw buffer.
    Pack(PackArgs),
    /// Turn a raw buffer back into a PNG.
    Unpack(UnpackArgs),
}

#[derive(Parser, Debug)]
struct DescribeArgs {
    /// Pixel format, e.g. `rgba`, `bgr+alpha+alpha_start`, `0x402`.
    #[arg(long)]
    format: pixfmt::PixelFormat,
}

#[derive(Parser, Debug)]
struct EncodeArgs {
    /// Pixel format.
    #[arg(long)]
    format: pixfmt::PixelFormat,

    /// Color as `r,g,b[,a]` in linear 0..1.
    #[arg(long)]
    color: pixfmt::Color,

    /// Uniform forward gamma exponent.
    #[arg(long)]
    gamma: Option<f32>,
}

#[derive(Parser, Debug)]
struct DecodeArgs {
    /// Pixel format.
    #[arg(long)]
    format: pixfmt::PixelFormat,

    /// Packed bytes as hex; whitespace is ignored.
    #[arg(long)]
    hex: String,
}

#[derive(Parser, Debug)]
struct PackArgs {
    /// Input image (PNG, or anything the `image` crate decodes).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output raw buffer.
    #[arg(long)]
    out: PathBuf,

    /// Pixel format; overrides the config.
    #[arg(long)]
    format: Option<pixfmt::PixelFormat>,

    /// Uniform forward gamma exponent; overrides the config.
    #[arg(long)]
    gamma: Option<f32>,

    /// Codec config JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Encode on the rayon pool.
    #[arg(long)]
    parallel: bool,
}

#[derive(Parser, Debug)]
struct UnpackArgs {
    /// Input raw buffer.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Width in pixels.
    #[arg(long)]
    width: u32,

    /// Height in pixels.
    #[arg(long)]
    height: u32,

    /// Pixel format the buffer was packed with.
    #[arg(long)]
    format: pixfmt::PixelFormat,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Describe(args) => cmd_describe(args),
        Command::Encode(args) => cmd_encode(args),
        Command::Decode(args) => cmd_decode(args),
        Command::Pack(args) => cmd_pack(args),
        Command::Unpack(args) => cmd_unpack(args),
    }
}

fn cmd_describe(args: DescribeArgs) -> anyhow::Result<()> {
    let format = args.format;
    println!("format:   {format}");
    println!("bits:     0x{:03x}", format.bits());
    println!("channels: {}", format.channel_count());
    println!("layout:   {}", format.layout());
    Ok(())
}

fn cmd_encode(args: EncodeArgs) -> anyhow::Result<()> {
    let gamma = uniform_gamma(args.gamma)?;
    let mut buf = vec![0u8; args.format.channel_count()];
    pixfmt::try_encode(&args.color, args.format, &gamma, &mut buf, 0)?;
    println!("{}", to_hex(&buf));
    Ok(())
}

fn cmd_decode(args: DecodeArgs) -> anyhow::Result<()> {
    let bytes = parse_hex(&args.hex)?;
    let colors = pixfmt::decode_colors(args.format, &bytes)
        .with_context(|| format!("decode {} bytes as '{}'", bytes.len(), args.format))?;
    for c in colors {
        println!("{:.6},{:.6},{:.6},{:.6}", c.r, c.g, c.b, c.a);
    }
    Ok(())
}

fn cmd_pack(args: PackArgs) -> anyhow::Result<()> {
    let mut cfg = match &args.config {
        Some(path) => pixfmt::CodecConfig::load(path)?,
        None => pixfmt::CodecConfig::default(),
    };
    if let Some(format) = args.format {
        cfg.format = format;
    }
    if args.gamma.is_some() {
        cfg.gamma = uniform_gamma(args.gamma)?;
    }
    if args.parallel {
        cfg.threading.parallel = true;
    }

    let raster = pixfmt::Raster::open(&args.in_path)?;
    let packed = raster.pack_with(cfg.format, &cfg.gamma, &cfg.threading)?;

    create_parent_dir(&args.out)?;
    std::fs::write(&args.out, &packed)
        .with_context(|| format!("write raw buffer '{}'", args.out.display()))?;

    eprintln!(
        "wrote {} ({}x{}, {}, {} bytes)",
        args.out.display(),
        raster.width,
        raster.height,
        cfg.format,
        packed.len()
    );
    Ok(())
}

fn cmd_unpack(args: UnpackArgs) -> anyhow::Result<()> {
    let bytes = std::fs::read(&args.in_path)
        .with_context(|| format!("read raw buffer '{}'", args.in_path.display()))?;
    let raster = pixfmt::Raster::unpack(args.width, args.height, args.format, &bytes)?;
    raster.save_png(&args.out)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn uniform_gamma(exponent: Option<f32>) -> anyhow::Result<pixfmt::Gamma> {
    match exponent {
        Some(e) => Ok(pixfmt::Gamma::uniform(e)?),
        None => Ok(pixfmt::Gamma::NONE),
    }
}

fn create_parent_dir(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}

fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

fn parse_hex(s: &str) -> anyhow::Result<Vec<u8>> {
    let digits: Vec<u8> = s.bytes().filter(|b| !b.is_ascii_whitespace()).collect();
    anyhow::ensure!(
        digits.len() % 2 == 0,
        "hex input has an odd number of digits ({})",
        digits.len()
    );
    digits
        .chunks_exact(2)
        .map(|pair| {
            let text = std::str::from_utf8(pair).context("hex input is not ASCII")?;
            u8::from_str_radix(text, 16).with_context(|| format!("invalid hex byte '{text}'"))
        })
        .collect()
}
