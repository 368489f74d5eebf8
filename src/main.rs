use std::{io};
use io::{Write};

use fplay::{Lesson, Settings};
use tracing_subscriber::{EnvFilter};

// ----------------------------------------------------------------------------

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let lesson = Lesson::new(Settings::from_env());
    tracing::info!(settings = ?lesson.settings(), "Starting lesson");
    let mut output = io::stdout().lock();
    lesson.run(&mut output)?;
    output.flush()
}
