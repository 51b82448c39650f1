use std::io;

pub mod clients;
pub mod config;
pub mod error;
pub mod extractors;
pub mod fetchers;
pub mod logging;
pub mod model;
pub mod persisters;
pub mod visualizer;

use clients::douban_client::DoubanClient;
use config::RunConfig;
use error::AppError;
use fetchers::top_list_fetcher::TopListFetcher;
use logging::LogDiagnostics;
use model::movie::MovieRecord;
use persisters::{csv_writer::CsvWriter, sqlite_store::MovieStore};

/// Scrapes the ranking, then stores, exports and charts the records in that order.
/// A scrape failure returns before anything is stored.
pub async fn run(config: &RunConfig) -> Result<Vec<MovieRecord>, AppError> {
    let client = DoubanClient::new(&config.scrape.user_agent)?;
    let movies = TopListFetcher::new(&client, &LogDiagnostics)
        .get_all_movies(&config.scrape)
        .await?;
    log::info!("Scraped {} movies", movies.len());

    if let Some(db_path) = &config.db_path {
        let mut store = MovieStore::open(db_path)?;
        let affected = store.insert_movies(&movies)?;
        store.close()?;
        log::info!("Inserted {} records into {}", affected, db_path.display());
    }

    if let Some(csv_path) = &config.csv_path {
        CsvWriter::save_movies_to_csv(&movies, csv_path)?;
        log::info!("Successfully generated movies file: {}", csv_path.display());
    }

    if config.render_charts {
        visualizer::visualize(&movies, &mut io::stdout().lock(), config.chart_dir.as_deref())?;
    }

    Ok(movies)
}
