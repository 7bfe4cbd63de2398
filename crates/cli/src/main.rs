mod report;

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, ValueEnum};

use skincare_core::annotation::infrastructure::overlay_annotator::OverlayAnnotator;
use skincare_core::detection::infrastructure::model_loader::ModelLoader;
use skincare_core::imaging::domain::image_writer::ImageWriter;
use skincare_core::imaging::infrastructure::image_decoder::read_image_bytes;
use skincare_core::imaging::infrastructure::image_file_writer::ImageFileWriter;
use skincare_core::pipeline::analyze_image_use_case::{AnalysisReport, AnalyzeImageUseCase};
use skincare_core::pipeline::frame_processor::FrameProcessor;
use skincare_core::shared::constants::{DEFAULT_CONFIDENCE, DEFAULT_MODEL_PATH, IMAGE_EXTENSIONS};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Skin condition detection and skincare advice for a face image.
#[derive(Parser)]
#[command(name = "skincare")]
struct Cli {
    /// Face image to analyze (jpg, jpeg, png or webp).
    input: PathBuf,

    /// Write the annotated image here [default: <INPUT stem>_annotated.<ext>].
    #[arg(long)]
    output: Option<PathBuf>,

    /// Write the decoded original image here.
    #[arg(long)]
    original: Option<PathBuf>,

    /// Detector weights (ONNX).
    #[arg(long, default_value = DEFAULT_MODEL_PATH)]
    model: PathBuf,

    /// Detection confidence threshold (0.0-1.0).
    #[arg(long, default_value_t = DEFAULT_CONFIDENCE)]
    confidence: f32,

    /// How to print the advice.
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,
}

fn main() {
    env_logger::init();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    validate(&cli)?;

    let loader = ModelLoader::onnx(&cli.model, cli.confidence);
    let processor = FrameProcessor::new(Box::new(OverlayAnnotator::new()?));
    let mut use_case = AnalyzeImageUseCase::new(loader, processor);

    let bytes = read_image_bytes(&cli.input)?;
    if cli.format == OutputFormat::Text {
        println!("Detecting skin conditions...");
    }
    let report = use_case.execute(&bytes)?;

    for notice in &report.notices {
        eprintln!("Error: {notice}");
    }

    write_images(&cli, &report)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match cli.format {
        OutputFormat::Text => report::write_text(&report, &mut out)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &report.summary())?;
            writeln!(out)?;
        }
    }
    Ok(())
}

fn write_images(cli: &Cli, report: &AnalysisReport) -> Result<(), Box<dyn std::error::Error>> {
    let writer: Box<dyn ImageWriter> = Box::new(ImageFileWriter::new());
    if let Some(path) = &cli.original {
        writer.write(path, &report.original)?;
        log::info!("Original image written to {}", path.display());
    }
    let annotated = cli.annotated_path();
    writer.write(&annotated, &report.annotated)?;
    log::info!("Annotated image written to {}", annotated.display());
    Ok(())
}

impl Cli {
    fn annotated_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| default_annotated_path(&self.input))
    }
}

/// `dir/face.jpg` becomes `dir/face_annotated.jpg`.
fn default_annotated_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = match input.extension() {
        Some(ext) => format!("{stem}_annotated.{}", ext.to_string_lossy()),
        None => format!("{stem}_annotated.png"),
    };
    input.with_file_name(name)
}

fn validate(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    if !cli.input.exists() {
        return Err(format!("Input file not found: {}", cli.input.display()).into());
    }
    if !is_supported_image(&cli.input) {
        return Err(format!(
            "Unsupported input '{}': expected one of {}",
            cli.input.display(),
            IMAGE_EXTENSIONS.join(", ")
        )
        .into());
    }
    if !(0.0..=1.0).contains(&cli.confidence) {
        return Err(format!(
            "Confidence must be between 0.0 and 1.0, got {}",
            cli.confidence
        )
        .into());
    }
    for path in [&cli.output, &cli.original].into_iter().flatten() {
        if !is_supported_image(path) {
            return Err(format!(
                "Cannot infer image format from '{}'; use a .png, .jpg or .webp extension",
                path.display()
            )
            .into());
        }
    }
    Ok(())
}

fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase)
}

fn is_supported_image(path: &Path) -> bool {
    extension(path)
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use skincare_core::imaging::infrastructure::image_decoder::decode_image;
    use skincare_core::shared::frame::Frame;

    fn cli(input: PathBuf) -> Cli {
        Cli {
            input,
            output: None,
            original: None,
            model: PathBuf::from(DEFAULT_MODEL_PATH),
            confidence: DEFAULT_CONFIDENCE,
            format: OutputFormat::Text,
        }
    }

    fn existing(dir: &tempfile::TempDir, name: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, b"x").unwrap();
        path
    }

    #[test]
    fn test_supported_extensions_ignore_case() {
        assert!(is_supported_image(Path::new("face.JPG")));
        assert!(is_supported_image(Path::new("face.webp")));
        assert!(!is_supported_image(Path::new("face.bmp")));
        assert!(!is_supported_image(Path::new("face")));
    }

    #[test]
    fn test_validate_missing_input() {
        assert!(validate(&cli(PathBuf::from("/nonexistent/face.jpg"))).is_err());
    }

    #[test]
    fn test_validate_accepts_defaults() {
        let dir = tempfile::tempdir().unwrap();
        assert!(validate(&cli(existing(&dir, "face.png"))).is_ok());
    }

    #[test]
    fn test_validate_rejects_confidence_out_of_range() {
        let dir = tempfile::tempdir().unwrap();
        let mut c = cli(existing(&dir, "face.png"));
        c.confidence = 1.5;
        assert!(validate(&c).is_err());
    }

    #[test]
    fn test_validate_rejects_unsupported_input() {
        let dir = tempfile::tempdir().unwrap();
        assert!(validate(&cli(existing(&dir, "face.gif"))).is_err());
    }

    #[test]
    fn test_validate_rejects_output_without_image_extension() {
        let dir = tempfile::tempdir().unwrap();
        let mut c = cli(existing(&dir, "face.png"));
        c.output = Some(dir.path().join("annotated.txt"));
        assert!(validate(&c).is_err());
    }

    #[test]
    fn test_default_annotated_path_sits_beside_input() {
        assert_eq!(
            default_annotated_path(Path::new("/tmp/in/face.JPG")),
            PathBuf::from("/tmp/in/face_annotated.JPG")
        );
        assert!(is_supported_image(&default_annotated_path(Path::new("selfie.webp"))));
    }

    #[test]
    fn test_explicit_output_overrides_default() {
        let mut c = cli(PathBuf::from("face.png"));
        c.output = Some(PathBuf::from("out/marked.jpg"));
        assert_eq!(c.annotated_path(), PathBuf::from("out/marked.jpg"));
    }

    #[test]
    fn test_run_writes_annotated_image_by_default() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("face.png");
        ImageFileWriter::new()
            .write(&input, &Frame::filled(64, 64, [120, 90, 70]))
            .unwrap();
        let mut c = cli(input);
        // No weights: the run still succeeds and renders the unmarked frame.
        c.model = dir.path().join("skincond.onnx");

        run(c).unwrap();

        let annotated = dir.path().join("face_annotated.png");
        assert!(annotated.is_file());
        let written = decode_image(&read_image_bytes(&annotated).unwrap()).unwrap();
        assert_eq!((written.width(), written.height()), (64, 64));
        assert!(!dir.path().join("skincond.onnx").exists());
    }

    #[test]
    fn test_cli_parses_defaults() {
        let c = Cli::try_parse_from(["skincare", "face.jpg"]).unwrap();
        assert_eq!(c.model, PathBuf::from("skincond.onnx"));
        assert_eq!(c.format, OutputFormat::Text);
        assert!((c.confidence - 0.25).abs() < f32::EPSILON);
    }

    #[test]
    fn test_cli_parses_json_format() {
        let c = Cli::try_parse_from(["skincare", "face.jpg", "--format", "json"]).unwrap();
        assert_eq!(c.format, OutputFormat::Json);
    }
}
