#![deny(unsafe_code)]
//! CLI binary for the logo-forge generator.
//!
//! Subcommands:
//! - `list`: print filter values and palette categories
//! - `generate <name>`: print a batch of configurations as JSON
//! - `render <name>`: generate one configuration, write PNG and/or SVG

mod error;

use clap::{Args, Parser, Subcommand, ValueEnum};
use error::CliError;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;
use tracing_subscriber::EnvFilter;

use logo_forge_core::filters::RANDOM;
use logo_forge_core::{
    export_filename, export_svg, generate_batch, generate_with, normalize_name, BatchSize, Choice,
    ClosedSet, Effect, ExportFormat, FilterSelection, FontStyle, Layout, LogoConfiguration,
    PaletteCategory, Pattern, Shape, Xorshift64,
};
use logo_forge_raster::snapshot::{write_png, DOWNLOAD_SIZE};
use logo_forge_raster::Rasterizer;
use logo_forge_scene::{render_preview, HeadlessBackend, RendererKind};

#[derive(Parser)]
#[command(name = "logo-forge", version, about = "Procedural logo generator CLI")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List filter values and palette categories.
    List,
    /// Generate a batch of logo configurations and print them as JSON.
    Generate {
        /// Brand name (1 to 50 characters after trimming).
        name: String,

        /// Number of configurations (0 means the default of 9; clamped to 1..=12).
        #[arg(short, long)]
        count: Option<i64>,

        #[command(flatten)]
        filters: FilterArgs,
    },
    /// Generate one configuration and write it as PNG and/or SVG.
    Render {
        /// Brand name (1 to 50 characters after trimming).
        name: String,

        #[command(flatten)]
        filters: FilterArgs,

        /// Logical canvas size in pixels.
        #[arg(short, long, default_value_t = DOWNLOAD_SIZE)]
        size: u32,

        /// Device pixel ratio; the PNG is `size * dpr` pixels wide.
        #[arg(long, default_value_t = 1.0)]
        dpr: f64,

        /// Output format.
        #[arg(short, long, value_enum, default_value_t = FormatArg::Png)]
        format: FormatArg,

        /// Renderer for the PNG.
        #[arg(short, long, value_enum, default_value_t = RendererArg::Flat)]
        renderer: RendererArg,

        /// Animation time in seconds for the scene renderer.
        #[arg(long, default_value_t = 0.0)]
        time: f32,

        /// Directory the files are written to.
        #[arg(short, long, default_value = ".")]
        out_dir: PathBuf,

        /// PRNG seed for a repeatable configuration.
        #[arg(long)]
        seed: Option<u64>,
    },
}

/// Style filters; each accepts a member name or "random".
#[derive(Args, Debug, Clone)]
struct FilterArgs {
    /// Palette category.
    #[arg(long, default_value = RANDOM)]
    palette: String,
    /// Shape style.
    #[arg(long, default_value = RANDOM)]
    shape: String,
    /// Font style.
    #[arg(long, default_value = RANDOM)]
    font: String,
    /// Effect.
    #[arg(long, default_value = RANDOM)]
    effect: String,
    /// Layout mode.
    #[arg(long, default_value = RANDOM)]
    layout: String,
    /// Background pattern.
    #[arg(long, default_value = RANDOM)]
    pattern: String,
}

impl FilterArgs {
    fn selection(&self) -> Result<FilterSelection, CliError> {
        Ok(FilterSelection {
            palette_category: parse_choice::<PaletteCategory>("palette", &self.palette)?,
            shape: parse_choice::<Shape>("shape", &self.shape)?,
            font: parse_choice::<FontStyle>("font", &self.font)?,
            effect: parse_choice::<Effect>("effect", &self.effect)?,
            layout: parse_choice::<Layout>("layout", &self.layout)?,
            pattern: parse_choice::<Pattern>("pattern", &self.pattern)?,
        })
    }
}

/// Unlike the HTTP API, an unknown value is an input error here.
fn parse_choice<T: ClosedSet>(flag: &str, value: &str) -> Result<Choice<T>, CliError> {
    if value == RANDOM {
        return Ok(Choice::Random);
    }
    T::from_name(value).map(Choice::Fixed).ok_or_else(|| {
        CliError::Input(format!(
            "unknown --{flag} '{value}', expected one of: {}, {RANDOM}",
            T::names().join(", ")
        ))
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    Png,
    Svg,
    Both,
}

impl FormatArg {
    fn formats(self) -> &'static [ExportFormat] {
        match self {
            FormatArg::Png => &[ExportFormat::Png],
            FormatArg::Svg => &[ExportFormat::Svg],
            FormatArg::Both => &[ExportFormat::Png, ExportFormat::Svg],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum RendererArg {
    Flat,
    Scene,
}

struct RenderRequest<'a> {
    size: u32,
    dpr: f64,
    format: FormatArg,
    renderer: RendererArg,
    time: f32,
    out_dir: &'a Path,
}

/// Written file paths plus the renderer that produced the PNG, if one was written.
struct RenderOutcome {
    files: Vec<PathBuf>,
    renderer: Option<RendererKind>,
}

fn write_outputs(
    config: &LogoConfiguration,
    request: &RenderRequest<'_>,
) -> Result<RenderOutcome, CliError> {
    fs::create_dir_all(request.out_dir).map_err(|e| {
        CliError::Io(format!(
            "cannot create {}: {e}",
            request.out_dir.display()
        ))
    })?;

    let mut outcome = RenderOutcome {
        files: Vec::new(),
        renderer: None,
    };
    for &format in request.format.formats() {
        let path = request.out_dir.join(export_filename(config.name(), format));
        match format {
            ExportFormat::Svg => {
                fs::write(&path, export_svg(config)).map_err(|e| {
                    CliError::Io(format!("cannot write {}: {e}", path.display()))
                })?;
            }
            ExportFormat::Png => {
                let rasterizer = Rasterizer::new();
                let (image, kind) = match request.renderer {
                    RendererArg::Flat => (
                        rasterizer.render(config, request.size, request.dpr)?,
                        RendererKind::Flat,
                    ),
                    RendererArg::Scene => {
                        let backend = HeadlessBackend::new(&rasterizer);
                        let preview = render_preview(
                            config,
                            &backend,
                            &rasterizer,
                            request.size,
                            request.dpr,
                            request.time,
                        )?;
                        (preview.image, preview.renderer)
                    }
                };
                write_png(&image, &path)?;
                outcome.renderer = Some(kind);
            }
        }
        outcome.files.push(path);
    }
    Ok(outcome)
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::List => {
            let info = serde_json::json!({
                "palettes": PaletteCategory::names(),
                "shapes": Shape::names(),
                "fonts": FontStyle::names(),
                "effects": Effect::names(),
                "layouts": Layout::names(),
                "patterns": Pattern::names(),
            });
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("Palettes:");
                for &category in PaletteCategory::ALL {
                    println!(
                        "  {:<10} {} ({} variants)",
                        category.as_str(),
                        category.label(),
                        category.variant_count()
                    );
                }
                println!("Shapes:   {}", Shape::names().join(", "));
                println!("Fonts:    {}", FontStyle::names().join(", "));
                println!("Effects:  {}", Effect::names().join(", "));
                println!("Layouts:  {}", Layout::names().join(", "));
                println!("Patterns: {}", Pattern::names().join(", "));
            }
        }
        Command::Generate {
            name,
            count,
            filters,
        } => {
            let name = normalize_name(&name);
            let logos = generate_batch(&name, BatchSize::resolve(count), &filters.selection()?)?;
            // configurations are JSON either way; --json only changes error output
            println!("{}", serde_json::to_string_pretty(&logos)?);
        }
        Command::Render {
            name,
            filters,
            size,
            dpr,
            format,
            renderer,
            time,
            out_dir,
            seed,
        } => {
            let selection = filters.selection()?;
            let mut rng = seed.map_or_else(Xorshift64::from_entropy, Xorshift64::new);
            let config = generate_with(&normalize_name(&name), &selection, &mut rng)?;

            let request = RenderRequest {
                size,
                dpr,
                format,
                renderer,
                time,
                out_dir: &out_dir,
            };
            let outcome = write_outputs(&config, &request)?;

            if cli.json {
                let info = serde_json::json!({
                    "configuration": config,
                    "renderer": outcome.renderer.map(RendererKind::as_str),
                    "files": outcome
                        .files
                        .iter()
                        .map(|p| p.display().to_string())
                        .collect::<Vec<_>>(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                for path in &outcome.files {
                    eprintln!(
                        "rendered {} ({}, {}, {}) -> {}",
                        config.name(),
                        config.shape().as_str(),
                        config.effect().as_str(),
                        config.palette().name,
                        path.display()
                    );
                }
                if renderer == RendererArg::Scene && outcome.renderer == Some(RendererKind::Flat) {
                    eprintln!("note: 3D rendering failed, PNG uses the flat renderer");
                }
            }
        }
    }

    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn config() -> LogoConfiguration {
        generate_with("Nexus Labs", &FilterSelection::random(), &mut Xorshift64::new(9)).unwrap()
    }

    fn request(dir: &Path, format: FormatArg, renderer: RendererArg) -> RenderRequest<'_> {
        RenderRequest {
            size: 64,
            dpr: 1.0,
            format,
            renderer,
            time: 0.0,
            out_dir: dir,
        }
    }

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_choice_accepts_names_and_random() {
        assert_eq!(parse_choice::<Shape>("shape", "star").ok(), Some(Choice::Fixed(Shape::Star)));
        assert_eq!(parse_choice::<Shape>("shape", "random").ok(), Some(Choice::Random));
    }

    #[test]
    fn parse_choice_rejects_unknown_as_input_error() {
        let err = parse_choice::<Effect>("effect", "sparkle").err().unwrap();
        assert_eq!(err.exit_code(), 12);
        assert!(err.to_string().contains("--effect"));
        assert!(err.to_string().contains("neon"));
    }

    #[test]
    fn filter_flags_parse_into_selection() {
        let cli = Cli::try_parse_from([
            "logo-forge", "generate", "Acme", "--shape", "arch", "--layout", "monogram",
        ])
        .unwrap();
        let Command::Generate { filters, .. } = cli.command else {
            panic!("expected generate");
        };
        let selection = filters.selection().ok().unwrap();
        assert_eq!(selection.shape, Choice::Fixed(Shape::Arch));
        assert_eq!(selection.layout, Choice::Fixed(Layout::Monogram));
        assert_eq!(selection.effect, Choice::Random);
    }

    #[test]
    fn render_defaults() {
        let cli = Cli::try_parse_from(["logo-forge", "render", "Acme"]).unwrap();
        let Command::Render {
            size,
            dpr,
            format,
            renderer,
            seed,
            ..
        } = cli.command
        else {
            panic!("expected render");
        };
        assert_eq!(size, 800);
        assert_eq!(dpr, 1.0);
        assert_eq!(format, FormatArg::Png);
        assert_eq!(renderer, RendererArg::Flat);
        assert_eq!(seed, None);
    }

    #[test]
    fn writes_svg_with_derived_filename() {
        let dir = tempfile::tempdir().unwrap();
        let outcome = write_outputs(&config(), &request(dir.path(), FormatArg::Svg, RendererArg::Flat))
            .ok()
            .unwrap();
        assert_eq!(outcome.files, vec![dir.path().join("nexus-labs-logo.svg")]);
        assert!(outcome.renderer.is_none());
        let svg = fs::read_to_string(&outcome.files[0]).unwrap();
        assert!(svg.contains("NEXUS LABS"));
    }

    #[test]
    fn writes_both_formats() {
        let dir = tempfile::tempdir().unwrap();
        let outcome = write_outputs(&config(), &request(dir.path(), FormatArg::Both, RendererArg::Flat))
            .ok()
            .unwrap();
        assert_eq!(outcome.files.len(), 2);
        assert_eq!(outcome.renderer, Some(RendererKind::Flat));
        for path in &outcome.files {
            assert!(path.exists(), "{}", path.display());
        }
    }

    #[test]
    fn scene_renderer_writes_png() {
        let dir = tempfile::tempdir().unwrap();
        let outcome = write_outputs(&config(), &request(dir.path(), FormatArg::Png, RendererArg::Scene))
            .ok()
            .unwrap();
        assert_eq!(outcome.renderer, Some(RendererKind::Scene));
        let bytes = fs::read(dir.path().join("nexus-labs-logo.png")).unwrap();
        assert_eq!(&bytes[1..4], b"PNG");
    }

    #[test]
    fn zero_size_is_rendering_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut req = request(dir.path(), FormatArg::Png, RendererArg::Flat);
        req.size = 0;
        let err = write_outputs(&config(), &req).err().unwrap();
        assert_eq!(err.exit_code(), 14);
    }

    #[test]
    fn render_truncates_long_names() {
        let dir = tempfile::tempdir().unwrap();
        let long = "x".repeat(60);
        let cli = Cli::try_parse_from([
            "logo-forge",
            "render",
            &long,
            "--format",
            "svg",
            "--out-dir",
            dir.path().to_str().unwrap(),
            "--seed",
            "3",
        ])
        .unwrap();
        assert!(run(cli).is_ok());
        let expected = dir.path().join(format!("{}-logo.svg", "x".repeat(50)));
        assert!(expected.exists(), "{}", expected.display());
    }

    #[test]
    fn generate_accepts_long_names() {
        let long = "y".repeat(60);
        let cli = Cli::try_parse_from(["logo-forge", "generate", &long, "--count", "1"]).unwrap();
        assert!(run(cli).is_ok());
    }

    #[test]
    fn blank_name_is_input_error() {
        for sub in ["generate", "render"] {
            let cli = Cli::try_parse_from(["logo-forge", sub, "   "]).unwrap();
            assert_eq!(run(cli).err().unwrap().exit_code(), 12, "{sub}");
        }
    }

    #[test]
    fn render_keeps_files_inside_out_dir() {
        let dir = tempfile::tempdir().unwrap();
        let cli = Cli::try_parse_from([
            "logo-forge",
            "render",
            "../../evil/name",
            "--format",
            "svg",
            "--out-dir",
            dir.path().to_str().unwrap(),
        ])
        .unwrap();
        assert!(run(cli).is_ok());
        assert!(dir.path().join("..-..-evil-name-logo.svg").exists());
    }

    #[test]
    fn seeded_generation_is_repeatable() {
        let a = generate_with("Acme", &FilterSelection::random(), &mut Xorshift64::new(42)).unwrap();
        let b = generate_with("Acme", &FilterSelection::random(), &mut Xorshift64::new(42)).unwrap();
        assert_eq!(a.shape(), b.shape());
        assert_eq!(a.palette(), b.palette());
        assert_eq!(a.params(), b.params());
    }
}
