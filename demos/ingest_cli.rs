//! Command-line interface for woundscan
//!
//! Submits one scan against an in-memory store seeded with a demo dressing
//! and prints the ingestion summary as JSON.

use std::sync::Arc;
use std::{env, fs, path::PathBuf, process};

use tracing_subscriber::EnvFilter;
use woundscan::{
    DressingRecord, IngestionRequest, Ingestor, MemoryStore, PatientRecord, RecordKey,
    RgbSample, ScanConfig, ScanError, ScanStore,
};

const DEMO_DRESSING: &str = "BANDAGE-001";

struct Options {
    dressing: String,
    color: Option<String>,
    image: Option<PathBuf>,
    config: Option<PathBuf>,
    notes: Option<String>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    let options = parse_args(&args);

    let config = match &options.config {
        Some(path) => match ScanConfig::from_json_file(path) {
            Ok(config) => config,
            Err(error) => {
                eprintln!("Error: cannot load config '{}': {}", path.display(), error);
                process::exit(1);
            }
        },
        None => ScanConfig::default(),
    };

    let image = options.image.as_ref().map(|path| match fs::read(path) {
        Ok(bytes) => bytes,
        Err(error) => {
            eprintln!("Error: cannot read '{}': {}", path.display(), error);
            process::exit(1);
        }
    });

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime,
        Err(error) => {
            eprintln!("Error: cannot start runtime: {}", error);
            process::exit(1);
        }
    };

    if let Err(error) = runtime.block_on(run(options, config, image)) {
        eprintln!("Scan failed: {}", error);
        eprintln!("Suggestion: {}", error.user_message());
        process::exit(1);
    }
}

async fn run(options: Options, config: ScanConfig, image: Option<Vec<u8>>) -> Result<(), ScanError> {
    let store = Arc::new(MemoryStore::new());
    let patient = PatientRecord::new("PAT-001", "Demo Patient");
    let dressing = DressingRecord::new(DEMO_DRESSING, patient.key, "left forearm");
    store.insert_patient(patient).await;
    store.insert_dressing(dressing.clone()).await?;

    let ingestor = Ingestor::with_config(store.clone(), config);

    let mut request = IngestionRequest::new(options.dressing, RecordKey::new());
    if let Some(color) = options.color {
        request = request.with_manual_color(color);
    }
    if let Some(bytes) = image {
        request = request.with_image(bytes);
    }
    if let Some(path) = &options.image {
        request = request.with_image_ref(path.display().to_string());
    }
    if let Some(notes) = options.notes {
        request = request.with_notes(notes);
    }

    let summary = ingestor.ingest(request).await?;
    print_summary(&summary);

    let stored = store.observations_for_dressing(dressing.key).await?;
    if let Some(entry) = stored.iter().find(|entry| entry.id == summary.record_id) {
        let swatch = RgbSample::from(entry.observation.color().swatch());
        println!();
        println!("Level:     {}", summary.infection_level.label());
        println!("Swatch:    {}", swatch.hex());
        println!("Sample:    {}", entry.observation.rgb().hex());
        if summary.infection_level.needs_attention() {
            println!("Attention: dressing should be reviewed by a clinician");
        }
    }

    Ok(())
}

fn parse_args(args: &[String]) -> Options {
    let mut options = Options {
        dressing: DEMO_DRESSING.to_string(),
        color: None,
        image: None,
        config: None,
        notes: None,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_help(&args[0]);
                process::exit(0);
            }
            flag @ ("--dressing" | "--color" | "--image" | "--config" | "--notes") => {
                let Some(value) = args.get(i + 1) else {
                    eprintln!("Error: {} requires a value", flag);
                    process::exit(1);
                };
                match flag {
                    "--dressing" => options.dressing = value.clone(),
                    "--color" => options.color = Some(value.clone()),
                    "--image" => options.image = Some(PathBuf::from(value)),
                    "--config" => options.config = Some(PathBuf::from(value)),
                    _ => options.notes = Some(value.clone()),
                }
                i += 1;
            }
            other => {
                eprintln!("Unknown option: {}", other);
                eprintln!("Use --help for usage information");
                process::exit(1);
            }
        }
        i += 1;
    }

    if options.color.is_none() && options.image.is_none() {
        print_help(&args[0]);
        process::exit(1);
    }

    options
}

fn print_help(program_name: &str) {
    eprintln!("Usage: {} [OPTIONS]", program_name);
    eprintln!();
    eprintln!("Classify a wound-dressing indicator from a photo or a picked color.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --dressing CODE  Dressing code or record key (default: {})", DEMO_DRESSING);
    eprintln!("  --image PATH     JPEG, PNG or WebP photo of the indicator pad");
    eprintln!("  --color NAME     Yellow, Green, Blue or DarkBlue");
    eprintln!("  --config PATH    JSON sampler configuration");
    eprintln!("  --notes TEXT     Free-text notes stored with the scan");
    eprintln!("  --help, -h       Show this help message");
    eprintln!();
    eprintln!("Set RUST_LOG=debug for per-stage logging.");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} --color Green", program_name);
    eprintln!("  {} --image pad.jpg --color Blue", program_name);
}

fn print_summary(summary: &woundscan::IngestionSummary) {
    match serde_json::to_string_pretty(summary) {
        Ok(json) => println!("{}", json),
        Err(error) => eprintln!("Error serializing summary: {}", error),
    }
}
