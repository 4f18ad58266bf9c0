use supplier_sheet_report::{config, error, report};
use config::ReportConfig;
use error::Result;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    // stdoutはレポート専用、ログはstderrへ
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .init();

    let config = ReportConfig::default();
    let stdout = std::io::stdout();
    report::run(&config, &mut stdout.lock())
}
