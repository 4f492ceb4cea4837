#![allow(dead_code)]

use cistern::{Client, Config, InsertOptions, QueryOptions, ResultSet, Row};
use std::collections::VecDeque;

pub fn init_logs() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init();
}

/// In-memory stand-in for a database client. Records every call and replays
/// scripted result sets in order. A few magic names trigger failures so the
/// wrapping of client errors can be observed: host `unreachable.example`
/// refuses to connect, database `locked` rejects every query (including the
/// connection check) and table `readonly` rejects inserts.
#[derive(Debug, Default)]
pub struct MockClient {
    pub config: Config,
    pub queries: Vec<(String, QueryOptions)>,
    pub inserts: Vec<(String, Vec<Row>, InsertOptions)>,
    pub results: VecDeque<ResultSet>,
    pub fail_queries: bool,
    pub fail_close: bool,
}

impl MockClient {
    pub fn push_rows(&mut self, rows: Vec<Row>) {
        self.results.push_back(ResultSet::new(rows));
    }
}

impl Client for MockClient {
    type Error = String;

    async fn connect(config: &Config) -> Result<Self, String> {
        if config.host == "unreachable.example" {
            return Err("connection refused".into());
        }
        Ok(Self {
            config: config.clone(),
            ..Default::default()
        })
    }

    async fn query(&mut self, sql: &str, options: &QueryOptions) -> Result<ResultSet, String> {
        if self.config.database == "locked" {
            return Err(format!("access denied for user `{}`", self.config.user));
        }
        if self.fail_queries {
            return Err("syntax error near FROM".into());
        }
        self.queries.push((sql.to_owned(), options.clone()));
        Ok(self.results.pop_front().unwrap_or_default())
    }

    async fn insert(
        &mut self,
        table: &str,
        rows: Vec<Row>,
        options: &InsertOptions,
    ) -> Result<(), String> {
        if table == "readonly" {
            return Err("table is in readonly mode".into());
        }
        self.inserts.push((table.to_owned(), rows, *options));
        Ok(())
    }

    async fn close(&mut self) -> Result<(), String> {
        if self.fail_close {
            return Err("connection already dropped".into());
        }
        Ok(())
    }
}
