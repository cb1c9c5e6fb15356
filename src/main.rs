mod app;
mod data;
mod error;
mod state;
mod stats;
mod ui;

use std::io;

use app::{Session, SessionConfig};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock(), SessionConfig::default());
    session.run()
}
