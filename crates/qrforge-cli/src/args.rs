use clap::{Args, Parser, Subcommand, ValueEnum};
use qrforge_types::{ContentType, ErrorCorrectionLevel, FrameStyle};
use std::fmt;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "qrforge")]
#[command(about = "Build QR code payloads and keep a replayable history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Data directory (default: $QRFORGE_PATH, then the XDG data dir)
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    /// Overridden by RUST_LOG when set
    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Encode content and record it in history")]
    Generate(GenerateArgs),

    #[command(about = "Inspect, replay or clear generation history")]
    History {
        #[command(subcommand)]
        command: HistoryCommand,
    },

    #[command(about = "Choose which content types are offered")]
    Types {
        #[command(subcommand)]
        command: TypesCommand,
    },

    #[command(about = "Show how free-form text is turned into a URL")]
    Normalize { text: String },
}

#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Content type (url, wifi, vcard, vevent, email, sms, geo, whatsapp, ...)
    pub content_type: ContentType,

    /// Field value, repeatable (e.g. --set ssid=Home --set encryption=WPA)
    #[arg(long = "set", value_name = "KEY=VALUE", value_parser = parse_key_value)]
    pub fields: Vec<(String, String)>,

    #[arg(long, value_name = "COLOR")]
    pub fg: Option<String>,

    #[arg(long, value_name = "COLOR")]
    pub bg: Option<String>,

    /// Pixel size, clamped to 50-1000
    #[arg(long)]
    pub size: Option<u32>,

    /// Error-correction level: L, M, Q or H
    #[arg(long)]
    pub ecl: Option<ErrorCorrectionLevel>,

    /// Quiet-zone modules, clamped to 0-40
    #[arg(long)]
    pub margin: Option<u32>,

    /// Logo image file (png, jpg, gif, webp, svg)
    #[arg(long, value_name = "PATH")]
    pub logo: Option<PathBuf>,

    #[arg(long, value_name = "RATIO", requires = "logo")]
    pub logo_ratio: Option<f32>,

    #[arg(long, requires = "logo")]
    pub logo_cutout: bool,

    #[arg(long, value_name = "PATH")]
    pub background_image: Option<PathBuf>,

    /// Frame style: none, square, rounded, banner, bubble
    #[arg(long, value_name = "STYLE")]
    pub frame: Option<FrameStyle>,

    #[arg(long, value_name = "TEXT", requires = "frame")]
    pub frame_caption: Option<String>,
}

#[derive(Subcommand)]
pub enum HistoryCommand {
    #[command(about = "List entries, newest first")]
    List,

    #[command(about = "Show one entry")]
    Show {
        /// Entry id or unique id prefix
        id: String,
    },

    #[command(about = "Restore an entry's settings and generate again")]
    Replay { id: String },

    #[command(about = "Delete all history")]
    Clear,
}

#[derive(Subcommand)]
pub enum TypesCommand {
    #[command(about = "List content types and their visibility")]
    List,

    #[command(about = "Make a content type visible")]
    Show { content_type: ContentType },

    #[command(about = "Hide a content type")]
    Hide { content_type: ContentType },

    #[command(about = "Restore the default visible types")]
    Reset,
}

fn parse_key_value(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{}'", s))?;
    if key.trim().is_empty() {
        return Err(format!("missing key in '{}'", s));
    }
    // Literal "\n" lets multi-line fields (menu items, descriptions) be passed inline.
    Ok((key.trim().to_string(), value.replace("\\n", "\n")))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    Plain,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Plain => write!(f, "plain"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Error => write!(f, "error"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Trace => write!(f, "trace"),
        }
    }
}
