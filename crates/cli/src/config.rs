use std::path::PathBuf;

use clap::Parser;
use voicepick_observability::LogFormat;

/// Voice-picking warehouse assistant (text mode).
#[derive(Debug, Clone, Parser)]
#[command(name = "voicepick", version, about)]
pub struct AppConfig {
    /// CSV export of the warehouse sheet. A missing file starts an empty table.
    #[arg(long, env = "VOICEPICK_INVENTORY", default_value = "inventory.csv")]
    pub inventory: PathBuf,

    /// JSON credential store; created on first registration.
    #[arg(long, env = "VOICEPICK_USERS", default_value = "users.json")]
    pub users: PathBuf,

    /// Log output format (json or pretty). Logs go to stderr.
    #[arg(long, env = "VOICEPICK_LOG_FORMAT", default_value_t = LogFormat::Json)]
    pub log_format: LogFormat,

    /// bcrypt work factor for new registrations.
    #[arg(long, env = "VOICEPICK_BCRYPT_COST", default_value_t = voicepick_auth::DEFAULT_COST)]
    pub bcrypt_cost: u32,

    /// Transcript feed from an external speech-to-text process (file or
    /// named pipe, one utterance per line). Enables `:listen`.
    #[arg(long, env = "VOICEPICK_TRANSCRIPTS")]
    pub transcripts: Option<PathBuf>,

    /// Also hand every response to the speech sink.
    #[arg(long)]
    pub speak: bool,
}
