use std::sync::Arc;

use axum::extract::{Path, State};
use axum::response::{IntoResponse, Redirect};
use axum::routing::get;
use axum::{Json, Router};
use axum_template::RenderHtml;
use snafu::ResultExt;
use tower_http::trace::TraceLayer;

use crate::model::SortKey;
use crate::page::Page;
use crate::view::View;

mod error;
mod state;

pub use error::*;
pub use state::*;

pub type Result<T, E = ApiError> = std::result::Result<T, E>;

pub fn create_router(app: App) -> Router {
    Router::new()
        .route("/", get(dashboard))
        .route("/sort/:key", get(sort))
        .route("/api/page", get(page))
        .layer(TraceLayer::new_for_http())
        .with_state(app)
}

async fn dashboard(engine: AppEngine, State(view): State<Arc<View>>) -> impl IntoResponse {
    RenderHtml(DASHBOARD_TEMPLATE, engine, view.page())
}

/// A header click: toggle the sort, then show the page again.
async fn sort(State(view): State<Arc<View>>, Path(key): Path<String>) -> Result<Redirect> {
    tracing::debug!(%key, "header clicked");
    let key: SortKey = key.parse().context(UnknownSortKeySnafu)?;
    view.sort_by(key);

    Ok(Redirect::to("/"))
}

async fn page(State(view): State<Arc<View>>) -> Json<Page> {
    Json(view.page())
}

#[cfg(test)]
mod tests {
    use axum::http::header::LOCATION;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::Value;

    use super::*;
    use crate::model::{ChannelSummary, VideoRecord};
    use crate::source::{ChannelData, FetchError, VideoSource};

    struct StaticSource(ChannelData);

    impl VideoSource for StaticSource {
        async fn fetch(&self) -> crate::source::Result<ChannelData> {
            Ok(self.0.clone())
        }
    }

    struct OfflineSource;

    impl VideoSource for OfflineSource {
        async fn fetch(&self) -> crate::source::Result<ChannelData> {
            Err(FetchError::Status {
                endpoint: "http://localhost:5000/api/videos".parse().unwrap(),
                status: StatusCode::BAD_GATEWAY,
                message: Some("upstream offline".to_string()),
            })
        }
    }

    fn video(title: &str, views: u64) -> VideoRecord {
        VideoRecord {
            title: title.to_string(),
            views,
            likes: views / 10,
            published_at: Some("2024-03-15".parse().unwrap()),
            thumbnail_url: format!("https://img.example/{views}.jpg"),
            external_url: format!("https://www.youtube.com/watch?v={views}"),
        }
    }

    fn channel() -> ChannelData {
        let summary = ChannelSummary {
            name: Some("Canal de Prueba".to_string()),
            subscriber_count: Some(12_345),
            channel_total_views: Some(1_000_000),
            video_count: 3,
            sum_of_views: Some(60),
        };

        ChannelData::new(
            vec![video("beta", 10), video("gamma", 30), video("alfa", 20)],
            summary,
        )
    }

    async fn server<S: VideoSource>(source: S) -> TestServer {
        let view = Arc::new(View::mount(source));
        view.settled().await;

        let app = App::new(create_engine().unwrap(), view);
        TestServer::new(create_router(app)).unwrap()
    }

    /// Titles in the order the rendered table lists them.
    fn rendered_order(body: &str, titles: &[&str]) -> Vec<String> {
        let mut found: Vec<(usize, String)> = titles
            .iter()
            .map(|title| {
                let cell = format!("<td class=\"left\">{title}</td>");
                let position = body.find(&cell).unwrap_or_else(|| panic!("{title} not rendered"));
                (position, title.to_string())
            })
            .collect();

        found.sort();
        found.into_iter().map(|(_, title)| title).collect()
    }

    const TITLES: [&str; 3] = ["alfa", "beta", "gamma"];

    #[tokio::test]
    async fn render_dashboard_most_viewed_first() {
        let server = server(StaticSource(channel())).await;

        let response = server.get("/").await;
        assert_eq!(response.status_code(), StatusCode::OK);

        let body = response.text();
        assert!(body.contains("Canal de Prueba"));
        assert!(body.contains("Estadísticas Generales"));
        assert!(body.contains("12.345"));
        assert!(body.contains("1.000.000"));
        assert!(body.contains("15 de marzo de 2024"));
        assert!(body.contains("Reproducir"));
        assert_eq!(rendered_order(&body, &TITLES), ["gamma", "alfa", "beta"]);
    }

    #[tokio::test]
    async fn header_clicks_toggle_sort() {
        let server = server(StaticSource(channel())).await;

        server.get("/sort/views").await;
        let body = server.get("/").await.text();
        assert_eq!(rendered_order(&body, &TITLES), ["beta", "alfa", "gamma"]);

        server.get("/sort/title").await;
        let body = server.get("/").await.text();
        assert_eq!(rendered_order(&body, &TITLES), ["alfa", "beta", "gamma"]);

        server.get("/sort/title").await;
        let body = server.get("/").await.text();
        assert_eq!(rendered_order(&body, &TITLES), ["gamma", "beta", "alfa"]);
    }

    #[tokio::test]
    async fn sort_redirects_back_to_the_page() {
        let server = server(StaticSource(channel())).await;

        let response = server.get("/sort/likes").await;
        assert_eq!(response.status_code(), StatusCode::SEE_OTHER);
        assert_eq!(response.header(LOCATION), "/");

        let page: Value = server.get("/api/page").await.json();
        assert_eq!(page["sort"]["key"], "likes");
        assert_eq!(page["sort"]["direction"], "ascending");
    }

    #[tokio::test]
    async fn unknown_sort_key_is_not_found() {
        let server = server(StaticSource(channel())).await;

        let response = server.get("/sort/duration").await;
        assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
        assert!(response.text().contains("unknown sort key `duration`"));

        let page: Value = server.get("/api/page").await.json();
        assert_eq!(page["sort"]["key"], "views", "state must not change");
    }

    #[tokio::test]
    async fn titles_are_escaped() {
        let data = ChannelData::new(
            vec![video("<script>alert(1)</script>", 1)],
            ChannelSummary::default(),
        );
        let server = server(StaticSource(data)).await;

        let body = server.get("/").await.text();
        assert!(!body.contains("<script>alert(1)</script>"));
        assert!(body.contains("&lt;script&gt;"));
    }

    #[tokio::test]
    async fn fetch_failure_renders_error_state() {
        let server = server(OfflineSource).await;

        let response = server.get("/").await;
        assert_eq!(response.status_code(), StatusCode::OK);

        let body = response.text();
        assert!(body.contains("No se pudieron cargar los datos"));
        assert!(body.contains("upstream offline"));
        assert!(!body.contains("<table>"));

        let page: Value = server.get("/api/page").await.json();
        assert_eq!(page["status"], "failed");

        // nothing to sort, but the click is not an error either
        server.get("/sort/views").await;
        let page: Value = server.get("/api/page").await.json();
        assert_eq!(page["status"], "failed");
    }
}
