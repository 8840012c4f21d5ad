use crate::robots::RobotsTxt;
use crate::source::loader_config::LoaderConfig;
use crate::source::robots_txt_source::RobotsTxtSource;
use crate::source::source_error::SourceError;
use crate::source::source_location::SourceLocation;
use futures::future::join_all;
use std::sync::Arc;
use tokio::select;
use tokio::task::JoinHandle;
use tracing::info;

pub struct LoadResult {
    pub location: SourceLocation,
    pub robots: Result<RobotsTxt, SourceError>,
}

/// Loads and parses several robots.txt files concurrently.
#[derive(Clone)]
pub struct MultiLoader {
    shutdown_notify: Arc<tokio::sync::Notify>,
    loader_config: LoaderConfig,
    locations: Vec<SourceLocation>,
}

impl MultiLoader {
    pub fn new(shutdown_notify: Arc<tokio::sync::Notify>, loader_config: LoaderConfig) -> Self {
        Self {
            shutdown_notify,
            loader_config,
            locations: Vec::new(),
        }
    }

    pub fn add_location(&mut self, location: SourceLocation) {
        self.locations.push(location);
    }

    /// Results come back in the order locations were added.
    pub async fn run(self) -> Result<Vec<LoadResult>, SourceError> {
        let MultiLoader {
            shutdown_notify,
            loader_config,
            locations,
        } = self;
        let handles = locations
            .iter()
            .cloned()
            .map(|location| {
                let loader_config = loader_config.clone();
                tokio::task::spawn(async move {
                    info!(%location, "loading robots.txt");
                    let source = RobotsTxtSource::load(&location, &loader_config).await?;
                    Ok::<RobotsTxt, SourceError>(source.parse(loader_config.parser_config()))
                })
            })
            .collect::<Vec<JoinHandle<Result<RobotsTxt, SourceError>>>>();

        let all_tasks = join_all(handles);
        select! {
            results = all_tasks => {
                Ok(locations
                    .into_iter()
                    .zip(results)
                    .map(|(location, task_result)| LoadResult {
                        location,
                        robots: task_result.map_err(SourceError::from).and_then(|res| res),
                    })
                    .collect())
            }
            _ = shutdown_notify.notified() => {
                Err(SourceError::Interrupted)
            }
        }
    }
}
