use std::time::Duration;

use scraper::{Html, Selector};
use serde_json::json;
use tvmaze_core::{
    ClientConfig, Outcome, ShowWidget, TvMazeApi, TvMazeClient, TvMazeError, UiEvent,
};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PLACEHOLDER: &str = "placeholder.png";

fn widget_for(server: &MockServer) -> ShowWidget {
    let config = ClientConfig {
        base_url: server.uri(),
        requests_per_second: 100.0,
        timeout_secs: 5,
        max_retries: 0,
    };
    let api = TvMazeApi::with_client(TvMazeClient::with_config(config).unwrap())
        .with_placeholder_image(PLACEHOLDER);
    ShowWidget::new(api)
}

async fn mount_search(server: &MockServer, term: &str, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/search/shows"))
        .and(query_param("q", term))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

async fn mount_episodes(server: &MockServer, show_id: u32, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(format!("/shows/{}/episodes", show_id)))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(server)
        .await;
}

fn img_src(shows_html: &str) -> Vec<String> {
    let document = Html::parse_fragment(shows_html);
    let selector = Selector::parse(".Show img").unwrap();
    document
        .select(&selector)
        .filter_map(|el| el.value().attr("src").map(str::to_string))
        .collect()
}

#[tokio::test]
async fn test_search_renders_card_and_keeps_episodes_hidden() {
    let server = MockServer::start().await;
    mount_search(
        &server,
        "lost",
        json!([{"show": {"id": 1, "name": "Lost", "summary": "<p>Island</p>", "image": {"medium": "lost.jpg"}}}]),
    )
    .await;
    let widget = widget_for(&server);

    let outcome = widget
        .handle(UiEvent::SearchSubmitted { term: "lost".to_string() })
        .await
        .unwrap();
    assert_eq!(outcome, Outcome::Rendered);

    let snapshot = widget.snapshot().await;
    assert_eq!(snapshot.show_ids, vec![1]);
    assert_eq!(img_src(&snapshot.shows_html), vec!["lost.jpg"]);
    assert!(snapshot.shows_html.contains("data-show-id=\"1\""));
    assert!(snapshot.shows_html.contains("Lost"));
    assert!(!snapshot.episodes_visible);
}

#[tokio::test]
async fn test_search_without_image_uses_placeholder() {
    let server = MockServer::start().await;
    mount_search(
        &server,
        "nowhere",
        json!([{"show": {"id": 2, "name": "Nowhere", "summary": "x", "image": null}}]),
    )
    .await;
    let widget = widget_for(&server);

    widget.submit_search("nowhere").await.unwrap();

    let snapshot = widget.snapshot().await;
    assert_eq!(img_src(&snapshot.shows_html), vec![PLACEHOLDER]);
}

#[tokio::test]
async fn test_episodes_activation_reveals_area() {
    let server = MockServer::start().await;
    mount_search(
        &server,
        "lost",
        json!([{"show": {"id": 1, "name": "Lost", "summary": "", "image": null}}]),
    )
    .await;
    mount_episodes(
        &server,
        1,
        json!([{"id": 10, "name": "Pilot", "season": 1, "number": 1}]),
    )
    .await;
    let widget = widget_for(&server);

    widget.submit_search("lost").await.unwrap();
    let outcome = widget.activate_episodes(0).await.unwrap();
    assert_eq!(outcome, Outcome::Rendered);

    let texts = widget.with_view_ref(|view| view.episodes.entry_texts()).await;
    assert_eq!(texts, vec!["Pilot (season 1, ep. 1)"]);
    assert!(widget.snapshot().await.episodes_visible);
}

#[tokio::test]
async fn test_activation_uses_id_of_owning_card() {
    let server = MockServer::start().await;
    mount_search(
        &server,
        "many",
        json!([
            {"show": {"id": 7, "name": "Seven", "summary": "", "image": null}},
            {"show": {"id": 42, "name": "Answer", "summary": "", "image": null}},
            {"show": {"id": 8, "name": "Eight", "summary": "", "image": null}}
        ]),
    )
    .await;
    mount_episodes(
        &server,
        42,
        json!([{"id": 420, "name": "Question", "season": 1, "number": 1}]),
    )
    .await;
    let widget = widget_for(&server);

    widget.submit_search("many").await.unwrap();
    widget.activate_episodes(1).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    let episode_paths: Vec<String> = requests
        .iter()
        .map(|r| r.url.path().to_string())
        .filter(|p| p.starts_with("/shows/"))
        .collect();
    assert_eq!(episode_paths, vec!["/shows/42/episodes"]);
}

#[tokio::test]
async fn test_activation_without_card_is_ignored() {
    let server = MockServer::start().await;
    let widget = widget_for(&server);

    let outcome = widget.activate_episodes(3).await.unwrap();
    assert_eq!(outcome, Outcome::Ignored);
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_new_search_hides_episodes_area() {
    let server = MockServer::start().await;
    mount_search(
        &server,
        "lost",
        json!([{"show": {"id": 1, "name": "Lost", "summary": "", "image": null}}]),
    )
    .await;
    mount_search(
        &server,
        "other",
        json!([{"show": {"id": 5, "name": "Other", "summary": "", "image": null}}]),
    )
    .await;
    mount_episodes(
        &server,
        1,
        json!([{"id": 10, "name": "Pilot", "season": 1, "number": 1}]),
    )
    .await;
    let widget = widget_for(&server);

    widget.submit_search("lost").await.unwrap();
    widget.request_episodes(1).await.unwrap();
    assert!(widget.snapshot().await.episodes_visible);

    widget.submit_search("other").await.unwrap();
    let snapshot = widget.snapshot().await;
    assert!(!snapshot.episodes_visible);
    assert_eq!(snapshot.show_ids, vec![5]);
}

#[tokio::test]
async fn test_failed_search_keeps_previous_cards() {
    let server = MockServer::start().await;
    mount_search(
        &server,
        "lost",
        json!([{"show": {"id": 1, "name": "Lost", "summary": "", "image": null}}]),
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/search/shows"))
        .and(query_param("q", "broken"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    let widget = widget_for(&server);

    widget.submit_search("lost").await.unwrap();
    let result = widget.submit_search("broken").await;

    assert!(matches!(result, Err(TvMazeError::Status { status: 500, .. })));
    assert_eq!(widget.snapshot().await.show_ids, vec![1]);
}

#[tokio::test]
async fn test_failed_episodes_keeps_area_hidden() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/shows/3/episodes"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    let widget = widget_for(&server);

    let result = widget.request_episodes(3).await;

    assert!(matches!(result, Err(TvMazeError::NotFound(_))));
    assert!(!widget.snapshot().await.episodes_visible);
}

#[tokio::test]
async fn test_slow_older_search_does_not_overwrite_newer() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search/shows"))
        .and(query_param("q", "slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([{"show": {"id": 1, "name": "Slow", "summary": "", "image": null}}]))
                .set_delay(Duration::from_millis(400)),
        )
        .mount(&server)
        .await;
    mount_search(
        &server,
        "fast",
        json!([{"show": {"id": 2, "name": "Fast", "summary": "", "image": null}}]),
    )
    .await;
    let widget = widget_for(&server);

    let (slow, fast) = tokio::join!(widget.submit_search("slow"), widget.submit_search("fast"));

    assert_eq!(slow.unwrap(), Outcome::Stale);
    assert_eq!(fast.unwrap(), Outcome::Rendered);
    assert_eq!(widget.snapshot().await.show_ids, vec![2]);
}
