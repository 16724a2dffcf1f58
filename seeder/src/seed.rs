use colored::*;
use futures::FutureExt;
use sea_orm::{DatabaseConnection, DbErr};
use std::future::Future;
use std::io::{self, Write};
use std::pin::Pin;
use std::time::Instant;

const STATUS_COLUMN: usize = 80;

pub type SeedFuture<'a> = Pin<Box<dyn Future<Output = Result<bool, DbErr>> + Send + 'a>>;

/// One seeding step. Resolves to `true` when it changed the store.
pub trait Seeder {
    fn seed<'a>(&'a self, db: &'a DatabaseConnection) -> SeedFuture<'a>;
}

pub async fn run_seeder<S: Seeder + ?Sized>(seeder: &S, name: &str, db: &DatabaseConnection) {
    let base_msg = format!("Seeding {}", name.bold());
    let dots = ".".repeat(STATUS_COLUMN.saturating_sub(base_msg.len()));
    print!("{}{} ", base_msg, dots);
    io::stdout().flush().ok();

    let start = Instant::now();
    let outcome = std::panic::AssertUnwindSafe(seeder.seed(db))
        .catch_unwind()
        .await;

    let time_str = format!("({:.2?})", start.elapsed()).dimmed();
    match outcome {
        Ok(Ok(true)) => println!("{} {}", "done".green(), time_str),
        Ok(Ok(false)) => println!("{} {}", "skipped".yellow(), time_str),
        Ok(Err(e)) => {
            println!("{}", "failed".red());
            eprintln!("{e}");
            std::process::exit(1);
        }
        Err(_) => {
            println!("{}", "failed".red());
            std::process::exit(1);
        }
    }
}
