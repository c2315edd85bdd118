//! Console for managing student records.
//!
//! Connection settings come from `STUDENT_DB_*` environment variables (or a
//! `.env` file); see [`roster::config`].

mod controller;
mod output;
mod prompt;

use std::io;
use std::process;

use owo_colors::Stream;
use roster::{Db, DbConfig, StudentStore, schema};

use crate::controller::Controller;
use crate::output::{Banner, failure_on, success};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so they never interleave with the menu on stdout
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    println!();
    print!("{}", Banner("Welcome to Student Management System"));

    let config = match DbConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            let message = format!("Invalid configuration: {e}");
            eprintln!("{}", failure_on(Stream::Stderr, &message));
            process::exit(1);
        }
    };

    let db = match Db::connect(&config).await {
        Ok(db) => db,
        Err(e) => {
            let message = format!("Error connecting to PostgreSQL database at {config}: {e}");
            eprintln!("{}", failure_on(Stream::Stderr, &message));
            eprintln!("Failed to connect to database. Please check your connection parameters.");
            process::exit(1);
        }
    };
    println!("{}", success("Successfully connected to PostgreSQL database"));

    if config.bootstrap {
        match schema::bootstrap(&db).await {
            Ok(true) => println!("{}", success("Created and seeded the students table")),
            Ok(false) => {}
            Err(e) => {
                let message = format!("Error preparing the students table: {e}");
                eprintln!("{}", failure_on(Stream::Stderr, &message));
                db.close().await;
                process::exit(1);
            }
        }
    }

    let result = {
        let store = StudentStore::new(&db);
        let mut controller = Controller::new(&store, io::stdin().lock(), io::stdout().lock());
        controller.run().await
    };

    db.close().await;
    println!("{}", success("Database connection closed"));

    result?;
    Ok(())
}
