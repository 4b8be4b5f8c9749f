//! Command line interface

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use crab_label::{
    BarcodeRequest, CommandLanguage, FileSink, LabelGeometry, LabelGeometryInput, LabelPreset,
    LabelSink, NetworkPrinter, Orientation, PrintJob, SUPPORTED_DPI, Symbology, render_labels,
};
use tracing::info;

use crate::config::Config;

/// crab-label - barcode label command generator (ZPL, EPL, ESC/POS)
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render barcode labels to a file, stdout, or a network printer
    Render(RenderArgs),
    /// List supported barcode symbologies
    Formats,
    /// List label size presets
    Presets,
}

#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Barcode data
    pub data: String,

    /// Barcode symbology (CODE128, EAN13, UPC, CODE39, ITF14, ...)
    #[arg(short, long, default_value = "CODE128")]
    pub symbology: String,

    /// Command language (zpl, epl, escpos)
    #[arg(short, long, default_value = "zpl")]
    pub language: String,

    /// Check data against the symbology's rules before encoding
    #[arg(long)]
    pub validate: bool,

    #[command(flatten)]
    pub geometry: GeometryArgs,

    /// Output directory (defaults to LABEL_OUTPUT_DIR or the current directory)
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Send to a raw TCP printer instead of writing a file (host[:port])
    #[arg(short, long, value_name = "ADDR")]
    pub printer: Option<String>,

    /// Write the command stream to stdout
    #[arg(long, conflicts_with = "printer")]
    pub stdout: bool,
}

#[derive(Args, Debug)]
pub struct GeometryArgs {
    /// JSON geometry file (camelCase fields, missing fields use defaults)
    #[arg(long, value_name = "FILE")]
    pub geometry: Option<PathBuf>,

    /// Label size preset (see `presets`)
    #[arg(long)]
    pub preset: Option<String>,

    /// Label width in mm
    #[arg(long)]
    pub width: Option<f64>,

    /// Label height in mm
    #[arg(long)]
    pub height: Option<f64>,

    /// Top margin in mm
    #[arg(long)]
    pub margin_top: Option<f64>,

    /// Left margin in mm
    #[arg(long)]
    pub margin_left: Option<f64>,

    /// Barcode X position in mm
    #[arg(long)]
    pub barcode_x: Option<f64>,

    /// Barcode Y position in mm
    #[arg(long)]
    pub barcode_y: Option<f64>,

    /// Barcode width in mm
    #[arg(long)]
    pub barcode_width: Option<f64>,

    /// Barcode height in mm
    #[arg(long)]
    pub barcode_height: Option<f64>,

    /// Printer resolution
    #[arg(long)]
    pub dpi: Option<u32>,

    /// Number of labels
    #[arg(short, long)]
    pub quantity: Option<u32>,

    /// Landscape orientation
    #[arg(long)]
    pub landscape: bool,
}

impl GeometryArgs {
    /// Merge file, preset and flags (in that order) over the defaults
    pub fn to_geometry(&self, config: &Config) -> Result<LabelGeometry> {
        let mut input = match &self.geometry {
            Some(path) => {
                let raw = std::fs::read_to_string(path)
                    .with_context(|| format!("reading {}", path.display()))?;
                serde_json::from_str::<LabelGeometryInput>(&raw)
                    .with_context(|| format!("parsing {}", path.display()))?
            }
            None => LabelGeometryInput::default(),
        };

        if let Some(name) = &self.preset {
            let Some(preset) = LabelPreset::find(name) else {
                bail!("Unknown label preset: {}", name);
            };
            input.width = Some(preset.width_mm);
            input.height = Some(preset.height_mm);
        }

        let overrides = [
            (&mut input.width, self.width),
            (&mut input.height, self.height),
            (&mut input.margin_top, self.margin_top),
            (&mut input.margin_left, self.margin_left),
            (&mut input.barcode_x, self.barcode_x),
            (&mut input.barcode_y, self.barcode_y),
            (&mut input.barcode_width, self.barcode_width),
            (&mut input.barcode_height, self.barcode_height),
        ];
        for (field, value) in overrides {
            if value.is_some() {
                *field = value;
            }
        }

        input.dpi = self.dpi.or(input.dpi).or(Some(config.default_dpi));
        if self.quantity.is_some() {
            input.quantity = self.quantity;
        }
        if self.landscape {
            input.orientation = Some(Orientation::Landscape);
        }

        Ok(input.into())
    }
}

/// Run the parsed command
pub async fn run(cli: Cli, config: Config) -> Result<()> {
    match cli.command {
        Command::Render(args) => render(args, &config).await,
        Command::Formats => {
            for sym in Symbology::ALL {
                println!("{:<12} {:<12} {}", sym.as_str(), sym.label(), sym.description());
            }
            Ok(())
        }
        Command::Presets => {
            for preset in LabelPreset::ALL {
                println!(
                    "{:<6} {:>6.1} x {:>6.1} mm",
                    preset.name, preset.width_mm, preset.height_mm
                );
            }
            println!("DPI: {:?}", SUPPORTED_DPI);
            Ok(())
        }
    }
}

async fn render(args: RenderArgs, config: &Config) -> Result<()> {
    let language: CommandLanguage = args.language.parse()?;
    let symbology: Symbology = args.symbology.parse()?;
    let request = BarcodeRequest::new(args.data.as_str(), symbology)?;
    if args.validate {
        request.validate()?;
    }

    let geometry = args.geometry.to_geometry(config)?;
    let job = render_labels(&request, &geometry, language)?;

    info!(
        %language,
        %symbology,
        labels = job.label_count(),
        bytes = job.as_bytes().len(),
        "Labels rendered"
    );

    if args.stdout {
        return write_stdout(&job);
    }

    if let Some(addr) = args.printer.as_ref().or(config.printer_addr.as_ref()) {
        let printer = NetworkPrinter::from_addr(addr)?.with_timeout(config.printer_timeout);
        printer.send(&job).await?;
        println!("Sent {} label(s) to {}", job.label_count(), printer.addr());
        return Ok(());
    }

    let dir = args.output_dir.unwrap_or_else(|| config.output_dir.clone());
    let path = FileSink::new(dir).write(&job).await?;
    println!("{}", path.display());
    Ok(())
}

fn write_stdout(job: &PrintJob) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(job.as_bytes())?;
    if job.as_text().is_some() {
        stdout.write_all(b"\n")?;
    }
    stdout.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> RenderArgs {
        let mut argv = vec!["crab-label", "render"];
        argv.extend_from_slice(args);
        match Cli::parse_from(argv).command {
            Command::Render(args) => args,
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_render_defaults() {
        let args = parse(&["123456789012"]);
        assert_eq!(args.symbology, "CODE128");
        assert_eq!(args.language, "zpl");

        let geometry = args.geometry.to_geometry(&Config::default()).unwrap();
        assert_eq!(geometry, LabelGeometry::default());
    }

    #[test]
    fn test_preset_and_flags() {
        let args = parse(&[
            "ABC",
            "--preset",
            "4x6",
            "--barcode-height",
            "30",
            "--dpi",
            "300",
            "-q",
            "5",
            "--landscape",
        ]);
        let geometry = args.geometry.to_geometry(&Config::default()).unwrap();
        assert_eq!(geometry.width_mm(), 101.6);
        assert_eq!(geometry.height_mm(), 152.4);
        assert_eq!(geometry.barcode_height_mm(), 30.0);
        assert_eq!(geometry.dpi(), 300);
        assert_eq!(geometry.quantity(), 5);
        assert_eq!(geometry.orientation(), Orientation::Landscape);
    }

    #[test]
    fn test_config_default_dpi() {
        let config = Config {
            default_dpi: 600,
            ..Config::default()
        };
        let args = parse(&["ABC"]);
        assert_eq!(args.geometry.to_geometry(&config).unwrap().dpi(), 600);
    }

    #[test]
    fn test_unknown_preset() {
        let args = parse(&["ABC", "--preset", "letter"]);
        assert!(args.geometry.to_geometry(&Config::default()).is_err());
    }

    #[test]
    fn test_geometry_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("geometry.json");
        std::fs::write(&path, r#"{"width": 76.2, "height": 50.8, "quantity": 4}"#).unwrap();

        let args = parse(&["ABC", "--geometry", path.to_str().unwrap(), "--height", "25.4"]);
        let geometry = args.geometry.to_geometry(&Config::default()).unwrap();
        assert_eq!(geometry.width_mm(), 76.2);
        assert_eq!(geometry.height_mm(), 25.4);
        assert_eq!(geometry.quantity(), 4);
    }

    #[tokio::test]
    async fn test_render_writes_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let args = parse(&[
            "123456789012",
            "-l",
            "epl",
            "-o",
            dir.path().to_str().unwrap(),
        ]);
        render(args, &Config::default()).await.unwrap();

        let text = std::fs::read_to_string(dir.path().join("barcode-labels-123456789012.epl"))
            .unwrap();
        assert!(text.starts_with("N\nO\nq406"));
    }

    #[tokio::test]
    async fn test_render_rejects_bad_language() {
        let args = parse(&["123", "-l", "dpl", "--stdout"]);
        let err = render(args, &Config::default()).await.unwrap_err();
        assert!(err.to_string().contains("Unsupported command language"));
    }

    #[tokio::test]
    async fn test_render_validate() {
        let args = parse(&["12345", "-s", "EAN13", "--validate", "--stdout"]);
        let err = render(args, &Config::default()).await.unwrap_err();
        assert!(err.to_string().contains("EAN-13"));
    }
}
