//! Image and audio processing from files on disk.
//!
//!   RORAIMA_API_KEY=sk-... cargo run --example multimodal -- photo.jpg clip.mp3

use roraima_ai::types::ProcessResponse;
use roraima_ai::{Error, RoraimaClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let Ok(api_key) = std::env::var("RORAIMA_API_KEY") else {
        eprintln!("Set RORAIMA_API_KEY to run this example.");
        return Ok(());
    };
    let client = RoraimaClient::new(api_key)?;

    let mut args = std::env::args().skip(1);
    let image = args.next().unwrap_or_else(|| "test.jpg".to_string());
    let audio = args.next();

    match client
        .process_image("Briefly describe what you see in this image", image.as_str())
        .await
    {
        Ok(raw) => {
            let resp: ProcessResponse = serde_json::from_value(raw).unwrap_or_default();
            println!("Description: {}", resp.content.unwrap_or_default());
            if let Some(detections) = resp.detections.filter(|d| !d.is_empty()) {
                println!("Detected objects: {}", detections.len());
            }
        }
        Err(Error::NotFound { path, .. }) => {
            println!("Put an image at {} to try image processing", path.display());
        }
        Err(e) => eprintln!("Error: {}", e),
    }

    if let Some(audio) = audio {
        let raw = client.process_audio("Transcribe this audio", audio).await?;
        let resp: ProcessResponse = serde_json::from_value(raw).unwrap_or_default();
        println!("Transcript: {}", resp.content.unwrap_or_default());
        if let Some(secs) = resp.metrics.and_then(|m| m.audio_duration_seconds) {
            println!("Audio duration: {:.1}s", secs);
        }
    }
    Ok(())
}
