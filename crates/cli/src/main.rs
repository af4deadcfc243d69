//! Command-line interface for the `oficio` application.
//!
//! This crate serves as the main entry point for the executable, delegating
//! its core functionality to the `oficio-server` crate.

fn main() -> anyhow::Result<()> {
    oficio_server::run()
}
