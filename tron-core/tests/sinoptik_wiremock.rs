//! Tests for the sinoptik provider against a mock sinoptik.bg.

use tron_core::{
    HttpConfig, LocationQuery, ProviderError, SinoptikConfig, SinoptikProvider, WeatherProvider,
    http::build_client,
};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{header, header_exists, method, path},
};

/// Mobile hourly page with `hours` forecast blocks.
fn hourly_page(hours: usize) -> String {
    let mut page = String::from("<html><body><div class=\"hourly\">");
    for i in 0..hours {
        page.push_str(&format!(
            "<div class=\"row\">\
               <span class=\"temp max-temp\">{}°</span>\
               <p>Вероятност за валежи: <b>{}%</b></p>\
               <p>Количество валежи: <b>0.{} mm</b></p>\
             </div>",
            i,
            i * 2,
            i % 10,
        ));
    }
    page.push_str("</div></body></html>");
    page
}

fn directory_page(entries: &[(&str, &str)]) -> String {
    let items: String = entries
        .iter()
        .map(|(name, id)| format!("<li><a href=\"http://sinoptik.bg/{id}\">{name}</a></li>"))
        .collect();
    format!("<div class=\"worldContent\"><div class=\"worldCol\"><ul>{items}</ul></div></div>")
}

fn provider(server: &MockServer) -> SinoptikProvider {
    let http_config = HttpConfig {
        timeout_secs: 5,
        max_retries: 2,
        initial_backoff_ms: 1,
        max_backoff_ms: 5,
        ..Default::default()
    };
    let config = SinoptikConfig {
        hourly_base_url: server.uri(),
        locations_base_url: server.uri(),
        letter_delay_ms: 0,
        letters: vec!["A".to_string(), "B".to_string()],
    };
    let client = build_client(http_config.timeout()).expect("client");
    SinoptikProvider::new(client, config, &http_config)
}

#[tokio::test]
async fn downloads_full_day_by_name() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/sofia-bulgaria-100727011/hourly"))
        .and(header_exists("User-Agent"))
        .respond_with(ResponseTemplate::new(200).set_body_string(hourly_page(24)))
        .expect(1)
        .mount(&server)
        .await;

    let forecast = provider(&server)
        .download_from_hour(LocationQuery::Name("София"), 20)
        .await
        .expect("forecast");

    assert_eq!(forecast.len(), 24);
    let hours: Vec<&str> = forecast.hours().collect();
    assert_eq!(&hours[..5], ["20:00", "21:00", "22:00", "23:00", "0:00"]);
    assert_eq!(hours[23], "19:00");
    assert_eq!(forecast.get("20:00").expect("first hour"), ["0°", "0%", "0.0 mm"]);
    assert_eq!(forecast.get("0:00").expect("midnight"), ["4°", "8%", "0.4 mm"]);
}

#[tokio::test]
async fn downloads_by_id_without_catalog_lookup() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/new-place-bulgaria-1/hourly"))
        .respond_with(ResponseTemplate::new(200).set_body_string(hourly_page(24)))
        .expect(1)
        .mount(&server)
        .await;

    let forecast = provider(&server)
        .download_from_hour(LocationQuery::Id("new-place-bulgaria-1"), 0)
        .await
        .expect("forecast");
    assert!(forecast.is_complete());
}

#[tokio::test]
async fn short_page_yields_short_forecast() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/sofia-bulgaria-100727011/hourly"))
        .respond_with(ResponseTemplate::new(200).set_body_string(hourly_page(6)))
        .mount(&server)
        .await;

    let forecast = provider(&server)
        .download_from_hour(LocationQuery::Name("София"), 9)
        .await
        .expect("forecast");

    let hours: Vec<&str> = forecast.hours().collect();
    assert_eq!(hours, ["9:00", "10:00", "11:00", "12:00", "13:00", "14:00"]);
}

#[tokio::test]
async fn not_found_is_not_retried() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
        .expect(1)
        .mount(&server)
        .await;

    let err = provider(&server)
        .download_from_hour(LocationQuery::Name("София"), 0)
        .await
        .unwrap_err();

    assert!(err.is_upstream());
    assert!(
        matches!(err, ProviderError::Status { status, .. } if status.as_u16() == 404),
        "unexpected error: {err:?}"
    );
}

#[tokio::test]
async fn server_error_is_retried() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(hourly_page(24)))
        .expect(1)
        .mount(&server)
        .await;

    let forecast = provider(&server)
        .download_from_hour(LocationQuery::Name("Велико Търново"), 0)
        .await
        .expect("forecast after retry");
    assert_eq!(forecast.len(), 24);
}

#[tokio::test]
async fn gives_up_after_max_retries() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .expect(3)
        .mount(&server)
        .await;

    let err = provider(&server)
        .download_from_hour(LocationQuery::Name("София"), 0)
        .await
        .unwrap_err();
    assert!(err.is_upstream());
}

#[tokio::test]
async fn refresh_replaces_catalog_with_directory_pages() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/A"))
        .and(header("X-Requested-With", "XMLHttpRequest"))
        .respond_with(ResponseTemplate::new(200).set_body_string(directory_page(&[
            ("Аврен", "avren-bulgaria-100733587"),
            ("Айтос", "aytos-bulgaria-100733579"),
        ])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/B"))
        .respond_with(ResponseTemplate::new(200).set_body_string(directory_page(&[
            ("Бяла", "byala-bulgaria-100732720"),
            ("Бяла", "byala-bulgaria-100732721"),
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let mut provider = provider(&server);
    let catalog = provider.refresh_locations().await.expect("refresh");

    assert_eq!(catalog.len(), 4);
    assert_eq!(catalog.id_for_name("Бяла"), Some("byala-bulgaria-100732720"));

    assert!(provider.covers(LocationQuery::Name("Айтос")));
    assert!(!provider.covers(LocationQuery::Name("София")));
}

#[tokio::test]
async fn failed_refresh_keeps_current_catalog() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/A"))
        .respond_with(ResponseTemplate::new(200).set_body_string(directory_page(&[(
            "Аврен",
            "avren-bulgaria-100733587",
        )])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/B"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let mut provider = provider(&server);
    let before = provider.locations().len();

    assert!(provider.refresh_locations().await.is_err());
    assert_eq!(provider.locations().len(), before);
}
