use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use lesson_core::model::LessonContent;
use tracing::info;
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    UnknownArg(String),
    InvalidProgressBar { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidProgressBar { raw } => {
                write!(f, "invalid LESSON_PROGRESS_BAR value: {raw}")
            }
        }
    }
}

impl std::error::Error for ArgsError {}

struct DesktopApp {
    content: Arc<LessonContent>,
    progress_bar: bool,
}

impl UiApp for DesktopApp {
    fn lesson_content(&self) -> Arc<LessonContent> {
        Arc::clone(&self.content)
    }

    fn progress_bar_enabled(&self) -> bool {
        self.progress_bar
    }
}

struct Args {
    progress_bar: bool,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--progress-bar | --no-progress-bar]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --no-progress-bar");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  LESSON_PROGRESS_BAR=true|false");
}

impl Args {
    fn parse(args: impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut progress_bar = match std::env::var("LESSON_PROGRESS_BAR") {
            Ok(value) => match value.trim() {
                "" | "0" | "false" => false,
                "1" | "true" => true,
                _ => return Err(ArgsError::InvalidProgressBar { raw: value }),
            },
            Err(_) => false,
        };

        for arg in args {
            match arg.as_str() {
                "--progress-bar" => progress_bar = true,
                "--no-progress-bar" => progress_bar = false,
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self { progress_bar })
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let parsed = Args::parse(std::env::args().skip(1)).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    // Assemble (and thereby validate) the lesson content before any window
    // exists, so a bad embed URL fails at the prompt instead of on screen.
    let content = Arc::new(LessonContent::smoke_filled_room()?);
    info!(
        video = %content.video.url(),
        progress_bar = parsed.progress_bar,
        "lesson content ready"
    );

    let app = DesktopApp {
        content,
        progress_bar: parsed.progress_bar,
    };
    let app: Arc<dyn UiApp> = Arc::new(app);
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    // Explicitly disable it so the app doesn't behave like a modal window.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Thinking Unit")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
