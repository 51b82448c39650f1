use crate::{
    clients::douban_client::PageFetcher, config::ScrapeConfig, error::ScrapeError,
    extractors::movie_extractor::MovieExtractor, logging::Diagnostics, model::movie::MovieRecord,
};

/// Walks the ranking one page at a time, in order.
pub struct TopListFetcher<'a, F, D: ?Sized> {
    page_fetcher: &'a F,
    diagnostics: &'a D,
}

impl<'a, F: PageFetcher, D: Diagnostics + ?Sized> TopListFetcher<'a, F, D> {
    pub fn new(page_fetcher: &'a F, diagnostics: &'a D) -> Self {
        TopListFetcher {
            page_fetcher,
            diagnostics,
        }
    }

    /// Any fetch or parse failure stops the walk; nothing gathered so far is returned.
    /// A partial last page is cut so the result never exceeds `config.total`.
    pub async fn get_all_movies(
        &self,
        config: &ScrapeConfig,
    ) -> Result<Vec<MovieRecord>, ScrapeError> {
        let page_urls = config.page_urls();
        log::info!(
            "Fetching {} records from {} in {} pages",
            config.total,
            config.base_url,
            page_urls.len()
        );

        let mut resp = vec![];
        for (page_num, url) in page_urls.iter().enumerate() {
            let mut page_movies = self.get_all_movies_for_page(url).await?;
            log::info!("Got {} movies for page {}", page_movies.len(), page_num + 1);
            resp.append(&mut page_movies);
        }

        resp.truncate(config.total);
        Ok(resp)
    }

    pub async fn get_all_movies_for_page(
        &self,
        url: &str,
    ) -> Result<Vec<MovieRecord>, ScrapeError> {
        let page_html = self.page_fetcher.get_html_from_url(url).await?;
        MovieExtractor::extract_movies_from_html(page_html.as_str(), self.diagnostics).map_err(
            |source| ScrapeError::Parse {
                url: url.to_string(),
                source,
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::HashMap;

    use super::*;
    use crate::logging::RecordingDiagnostics;

    struct InMemoryPages {
        pages: HashMap<String, String>,
        requested: RefCell<Vec<String>>,
    }

    impl PageFetcher for InMemoryPages {
        async fn get_html_from_url(&self, url: &str) -> Result<String, ScrapeError> {
            self.requested.borrow_mut().push(url.to_string());
            self.pages
                .get(url)
                .cloned()
                .ok_or_else(|| ScrapeError::Status {
                    url: url.to_string(),
                    status: reqwest::StatusCode::NOT_FOUND,
                })
        }
    }

    fn page_html(page: usize, items: usize) -> String {
        let items: String = (0..items)
            .map(|i| {
                format!(
                    r#"<div class="item"><div class="info">
                        <span class="title">p{page}-i{i}</span>
                        <div class="bd"><p>导演: 导演{i} 主演: 某人
                        {year} / 美国 / 剧情</p>
                        <span class="rating_num">8.{i}</span></div>
                    </div></div>"#,
                    year = 1990 + i
                )
            })
            .collect();
        format!("<html><body><ol>{}</ol></body></html>", items)
    }

    fn site(config: &ScrapeConfig, items_per_page: usize) -> InMemoryPages {
        let pages = config
            .page_urls()
            .into_iter()
            .enumerate()
            .map(|(page, url)| (url, page_html(page, items_per_page)))
            .collect();
        InMemoryPages {
            pages,
            requested: RefCell::new(vec![]),
        }
    }

    #[tokio::test]
    async fn four_pages_of_25_give_100_ordered_records() {
        let config = ScrapeConfig::default();
        let pages = site(&config, 25);
        let diagnostics = RecordingDiagnostics::new();

        let movies = TopListFetcher::new(&pages, &diagnostics)
            .get_all_movies(&config)
            .await
            .unwrap();

        assert_eq!(movies.len(), 100);
        let expected: Vec<String> = (0..4)
            .flat_map(|p| (0..25).map(move |i| format!("p{}-i{}", p, i)))
            .collect();
        let titles: Vec<String> = movies.iter().map(|m| m.title.clone()).collect();
        assert_eq!(titles, expected);
        assert_eq!(*pages.requested.borrow(), config.page_urls());
        assert!(diagnostics.warnings().is_empty());
    }

    #[tokio::test]
    async fn total_inside_a_page_cuts_the_last_page() {
        let config = ScrapeConfig {
            total: 30,
            ..ScrapeConfig::default()
        };
        let pages = site(&config, 25);

        let movies = TopListFetcher::new(&pages, &RecordingDiagnostics::new())
            .get_all_movies(&config)
            .await
            .unwrap();

        assert_eq!(pages.requested.borrow().len(), 2);
        assert_eq!(movies.len(), 30);
        assert_eq!(movies[29].title, "p1-i4");
    }

    #[tokio::test]
    async fn failed_page_aborts_the_walk() {
        let config = ScrapeConfig::default();
        let mut pages = site(&config, 25);
        pages.pages.remove(&config.page_urls()[2]);

        let err = TopListFetcher::new(&pages, &RecordingDiagnostics::new())
            .get_all_movies(&config)
            .await
            .unwrap_err();

        assert!(matches!(err, ScrapeError::Status { .. }));
        assert_eq!(pages.requested.borrow().len(), 3);
    }

    #[tokio::test]
    async fn broken_item_is_a_parse_failure() {
        let config = ScrapeConfig {
            total: 25,
            ..ScrapeConfig::default()
        };
        let url = config.page_urls()[0].clone();
        let pages = InMemoryPages {
            pages: HashMap::from([(
                url,
                r#"<div class="item"><span class="title">x</span></div>"#.to_string(),
            )]),
            requested: RefCell::new(vec![]),
        };

        let err = TopListFetcher::new(&pages, &RecordingDiagnostics::new())
            .get_all_movies(&config)
            .await
            .unwrap_err();

        assert!(matches!(err, ScrapeError::Parse { .. }));
    }
}
