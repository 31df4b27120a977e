use anyhow::{anyhow, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Mutex;
use transcriptor::{
    export, AppConfig, HttpBackend, Language, PipelineOrchestrator, SessionState, TranslationFlow,
};

#[derive(Parser)]
#[command(
    name = "transcriptor",
    about = "Transcribe, summarize and translate a YouTube video"
)]
struct Args {
    /// YouTube video URL to process
    url: String,

    /// Translate the transcript into this language code (e.g. "fr")
    #[arg(long, value_name = "CODE")]
    translate: Option<String>,

    /// Write transcription.txt, summary.txt and translation.txt here
    #[arg(long, value_name = "DIR")]
    out_dir: Option<PathBuf>,

    /// Print the result set as JSON instead of formatted text
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let config = AppConfig::from_env();

    let target = args
        .translate
        .as_deref()
        .map(|code| {
            Language::from_code(code).ok_or_else(|| anyhow!("Unsupported language code: {}", code))
        })
        .transpose()?;

    let backend = Arc::new(HttpBackend::new(&config));
    let session = Arc::new(Mutex::new(SessionState::with_language(
        config.default_language,
    )));

    let orchestrator = PipelineOrchestrator::new(backend.clone(), session.clone());
    let results = orchestrator.run(&args.url).await?;

    if let Some(language) = target {
        let flow = TranslationFlow::new(backend, session.clone());
        // A failed translation leaves the untranslated transcript in place;
        // the rest of the results are still worth printing.
        if let Err(e) = flow.translate(language).await {
            tracing::error!("{}", e);
        }
    }

    let guard = session.lock().await;
    let results = guard.results().unwrap_or(&results);

    if args.json {
        println!("{}", serde_json::to_string_pretty(results)?);
    } else {
        println!("{} ({})", results.video_title, results.video_duration);
        println!();
        for segment in &results.transcription {
            println!("[{}] {}", segment.timestamp, segment.text);
        }
        println!();
        println!("Summary:");
        println!("{}", results.summary);
        if let Some(language) = target {
            println!();
            println!("Translation ({}):", language.display_name());
            println!("{}", results.translation);
        }
    }

    if let Some(dir) = args.out_dir {
        let paths = export::save_artifacts(results, &dir)?;
        for path in paths {
            tracing::info!("Wrote {}", path.display());
        }
    }

    Ok(())
}
