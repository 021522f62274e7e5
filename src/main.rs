use resistance_guide::run_guide;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // On Windows, set the console output codepage to UTF-8
    #[cfg(windows)]
    {
        if !std::process::Command::new("chcp")
            .arg("65001")
            .status()
            .map_or(false, |s| s.success())
        {
            eprintln!("Warning: Failed to set console codepage to UTF-8. Some characters may not display correctly.");
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("resistance_guide=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run_guide().await {
        eprintln!("Fatal error: {}", e);
        std::process::exit(1);
    }
}
