use std::path::PathBuf;
use std::sync::Arc;

use screenlens::analyzer::Analyzer;
use screenlens::config::AnalyzerConfig;
use screenlens::ocr::TesseractCli;
use screenlens::record::SavedItem;
use screenlens::vision::{GeminiVision, VisionClassifier};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let image_path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .ok_or_else(|| anyhow::anyhow!("usage: screenlens <image-path>"))?;

    let config = AnalyzerConfig::from_env()?;

    eprintln!("🔍 ScreenLens v{}", env!("CARGO_PKG_VERSION"));
    match &config.vision {
        Some(vc) => eprintln!("   Vision: {} (timeout {:?})", vc.model, vc.timeout),
        None => eprintln!("   Vision: disabled — set GEMINI_API_KEY to enable"),
    }

    let vision = match &config.vision {
        Some(vc) => Some(VisionClassifier::new(Arc::new(GeminiVision::new(vc)?))),
        None => None,
    };

    let mut analyzer = Analyzer::new(vision, Arc::new(TesseractCli::new()));
    if let Some(vc) = &config.vision {
        analyzer = analyzer.with_vision_timeout(vc.timeout);
    }

    let result = analyzer.analyze(&image_path).await;
    let item = SavedItem::from_result(result);
    println!("{}", serde_json::to_string_pretty(&item)?);

    Ok(())
}
