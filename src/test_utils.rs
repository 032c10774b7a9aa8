#[cfg(test)]
pub mod test_helpers {
    use std::collections::HashMap;
    use std::sync::mpsc::{self, Sender};
    use std::sync::{Arc, Mutex};

    use futures::future::BoxFuture;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use tokio::sync::mpsc::UnboundedReceiver;
    use tokio::sync::oneshot;

    use crate::app::App;
    use crate::config::Config;
    use crate::movie::Movie;
    use crate::search::{MovieSource, SearchController, SearchError, SearchRequest, SearchResponse};

    type SearchResult = Result<Vec<Movie>, SearchError>;

    pub fn movie(title: &str) -> Movie {
        Movie {
            title: title.to_string(),
            ..Movie::default()
        }
    }

    pub fn movies(titles: &[&str]) -> Vec<Movie> {
        titles.iter().map(|t| movie(t)).collect()
    }

    /// Source that answers every query with the same result
    pub struct StaticSource {
        result: SearchResult,
    }

    impl StaticSource {
        pub fn ok(movies: Vec<Movie>) -> Self {
            Self { result: Ok(movies) }
        }

        pub fn err(error: SearchError) -> Self {
            Self { result: Err(error) }
        }
    }

    impl MovieSource for StaticSource {
        fn search<'a>(&'a self, _query: &'a str) -> BoxFuture<'a, SearchResult> {
            let result = self.result.clone();
            Box::pin(async move { result })
        }
    }

    /// Source whose answers are released by the test, one gate per query
    ///
    /// Queries without a gate answer with an empty list.
    #[derive(Default)]
    pub struct GatedSource {
        gates: Mutex<HashMap<String, oneshot::Receiver<SearchResult>>>,
    }

    impl GatedSource {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn gate(&self, query: &str) -> oneshot::Sender<SearchResult> {
            let (tx, rx) = oneshot::channel();
            self.gates.lock().unwrap().insert(query.to_string(), rx);
            tx
        }
    }

    impl MovieSource for GatedSource {
        fn search<'a>(&'a self, query: &'a str) -> BoxFuture<'a, SearchResult> {
            let gate = self.gates.lock().unwrap().remove(query);
            Box::pin(async move {
                match gate {
                    Some(rx) => rx.await.unwrap_or(Err(SearchError::WorkerUnavailable)),
                    None => Ok(Vec::new()),
                }
            })
        }
    }

    /// App with no worker behind it; searches fail as unavailable
    pub fn test_app() -> App {
        let config = Config::default();
        App::new(
            SearchController::new(config.search.default_query.clone()),
            &config,
        )
    }

    /// App wired to channels the test drives in place of a worker
    pub fn test_app_with_channels() -> (App, UnboundedReceiver<SearchRequest>, Sender<SearchResponse>)
    {
        test_app_with_config(&Config::default())
    }

    pub fn test_app_with_config(
        config: &Config,
    ) -> (App, UnboundedReceiver<SearchRequest>, Sender<SearchResponse>) {
        let (request_tx, request_rx) = tokio::sync::mpsc::unbounded_channel();
        let (response_tx, response_rx) = mpsc::channel();

        let mut search = SearchController::new(config.search.default_query.clone());
        search.set_channels(request_tx, response_rx);

        (App::new(search, config), request_rx, response_tx)
    }

    /// App searching `source` on a real worker thread
    pub fn test_app_with_source(source: impl MovieSource + 'static) -> App {
        App::with_source(&Config::default(), Arc::new(source))
    }

    pub fn render_to_string(app: &mut App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();
        terminal.backend().to_string()
    }

    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }
}
