use chrono::NaiveDate;
use sea_orm::DatabaseConnection;

use crate::seed::{SeedFuture, Seeder, run_seeder};

mod seed;

struct SchemaSeeder;

impl Seeder for SchemaSeeder {
    fn seed<'a>(&'a self, db: &'a DatabaseConnection) -> SeedFuture<'a> {
        Box::pin(async move { db::ensure_schema(db).await.map(|_| true) })
    }
}

/// Loads the demo people, rooms and lectures, dated on `day`.
struct FixtureSeeder {
    day: NaiveDate,
}

impl Seeder for FixtureSeeder {
    fn seed<'a>(&'a self, db: &'a DatabaseConnection) -> SeedFuture<'a> {
        Box::pin(db::seed_if_empty(db, self.day))
    }
}

#[tokio::main]
async fn main() {
    // Optional first argument: the date to schedule the demo lectures on
    let day = match std::env::args().nth(1) {
        Some(raw) => match NaiveDate::parse_from_str(&raw, "%Y-%m-%d") {
            Ok(day) => day,
            Err(_) => {
                eprintln!("Expected a date as YYYY-MM-DD, got {raw:?}");
                std::process::exit(2);
            }
        },
        None => util::time::today(),
    };

    let db = match db::connect().await {
        Ok(db) => db,
        Err(e) => {
            eprintln!("Failed to open {}: {e}", util::config::database_path());
            std::process::exit(1);
        }
    };

    for (seeder, name) in [
        (Box::new(SchemaSeeder) as Box<dyn Seeder + Send + Sync>, "Schema"),
        (Box::new(FixtureSeeder { day }), "Demo fixture"),
    ] {
        run_seeder(&*seeder, name, &db).await;
    }
}
