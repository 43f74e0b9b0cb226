mod api;
mod render;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use content::endpoints::DEFAULT_API_BASE;
use content::validate::{CoverPhoto, validate_comment, validate_draft};
use content::{ApiError, DraftError};
use mime_sniffer::MimeTypeSniffer;
use tokio::io::AsyncReadExt;

use crate::api::{ContentClient, CoverUpload};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("{0}")]
    Invalid(#[from] DraftError),
    #[error("{0}")]
    BlankComment(&'static str),
    #[error("cannot read {path}: {source}")]
    Io { path: PathBuf, source: std::io::Error },
    #[error("not signed in; pass --session-token or set NYAYA_SESSION_TOKEN")]
    Unauthorized,
    #[error("{0}")]
    Request(String),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

impl CliError {
    /// Classify a failed request, using `message` for everything but 401.
    fn from_api(err: &ApiError, message: impl FnOnce(&ApiError) -> String) -> Self {
        if err.is_unauthorized() { Self::Unauthorized } else { Self::Request(message(err)) }
    }
}

#[derive(Parser, Debug)]
#[command(name = "nyaya-cli", about = "NyayaSahayak blog service CLI")]
struct Cli {
    #[arg(long, env = "NYAYA_API_URL", default_value = DEFAULT_API_BASE)]
    base_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every post.
    List {
        #[arg(long)]
        json: bool,
    },
    /// Show one post with its comments.
    Show {
        id: String,
        #[arg(long)]
        json: bool,
    },
    /// Publish a post with a cover photo.
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        body: String,
        #[arg(long)]
        cover: PathBuf,
        #[arg(long, env = "NYAYA_SESSION_TOKEN")]
        session_token: Option<String>,
    },
    /// Comment on a post.
    Comment {
        id: String,
        #[arg(long)]
        body: String,
        #[arg(long, env = "NYAYA_SESSION_TOKEN")]
        session_token: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();

    match cli.command {
        Command::List { json } => run_list(&cli.base_url, json).await,
        Command::Show { id, json } => run_show(&cli.base_url, &id, json).await,
        Command::Create { title, body, cover, session_token } => {
            run_create(&cli.base_url, session_token, &title, &body, &cover).await
        }
        Command::Comment { id, body, session_token } => run_comment(&cli.base_url, session_token, &id, &body).await,
    }
}

async fn run_list(base_url: &str, json: bool) -> Result<(), CliError> {
    let client = ContentClient::new(base_url, None);
    let posts = client
        .list_blogs()
        .await
        .map_err(|e| CliError::from_api(&e, ToString::to_string))?;
    if json {
        println!("{}", serde_json::to_string_pretty(&posts)?);
    } else {
        print!("{}", render::render_list(&posts));
    }
    Ok(())
}

async fn run_show(base_url: &str, id: &str, json: bool) -> Result<(), CliError> {
    let client = ContentClient::new(base_url, None);
    let post = client
        .get_blog(id)
        .await
        .map_err(|e| CliError::from_api(&e, |e| e.load_message().to_owned()))?;
    if json {
        println!("{}", serde_json::to_string_pretty(&post)?);
    } else {
        print!("{}", render::render_post(&post));
    }
    Ok(())
}

async fn run_create(
    base_url: &str,
    session_token: Option<String>,
    title: &str,
    body: &str,
    cover: &Path,
) -> Result<(), CliError> {
    let upload = load_cover(title, body, cover).await?;

    let client = ContentClient::new(base_url, session_token);
    let post = client
        .create_blog(title, body, upload)
        .await
        .map_err(|e| CliError::from_api(&e, ApiError::create_message))?;
    println!("{}", post.id);
    Ok(())
}

async fn run_comment(base_url: &str, session_token: Option<String>, id: &str, body: &str) -> Result<(), CliError> {
    let body = validate_comment(body).map_err(CliError::BlankComment)?;

    let client = ContentClient::new(base_url, session_token);
    let comment = client
        .add_comment(id, body)
        .await
        .map_err(|e| CliError::from_api(&e, ApiError::comment_message))?;
    println!("{}", comment.id.as_deref().unwrap_or("comment added"));
    Ok(())
}

/// Leading bytes read to sniff the cover's type.
const SNIFF_LEN: u64 = 512;

/// Validate the draft against the cover's on-disk size and sniffed type, then
/// read the file. Oversized or unsupported files are never buffered.
async fn load_cover(title: &str, body: &str, cover: &Path) -> Result<CoverUpload, CliError> {
    let io_err = |source| CliError::Io { path: cover.to_path_buf(), source };

    let size = tokio::fs::metadata(cover).await.map_err(io_err)?.len();
    let mut head = Vec::new();
    tokio::fs::File::open(cover)
        .await
        .map_err(io_err)?
        .take(SNIFF_LEN)
        .read_to_end(&mut head)
        .await
        .map_err(io_err)?;
    let mime_type = sniff_cover_type(&head);
    validate_draft(title, body, Some(&CoverPhoto::new(mime_type.clone(), size)))?;

    let bytes = tokio::fs::read(cover).await.map_err(io_err)?;
    let file_name = cover
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("cover")
        .to_owned();
    Ok(CoverUpload { file_name, mime_type, bytes })
}

/// MIME type sniffed from file content; the file extension is never trusted.
fn sniff_cover_type(head: &[u8]) -> String {
    head.sniff_mime_type().unwrap_or("application/octet-stream").to_owned()
}
