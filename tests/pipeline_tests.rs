//! End-to-end pipeline tests
//!
//! These tests use wiremock to stand in for the calendar platform and run
//! real crawler handles over mocked list and detail pages.

use civic_cal::config::{Config, CrawlConfig, OutputConfig, PlatformConfig, TenantEntry};
use civic_cal::model::{Classification, Status};
use civic_cal::crawler::Fetcher;
use civic_cal::Registry;
use tokio::sync::mpsc;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn tenant_entry(name: &str, token: &str) -> TenantEntry {
    TenantEntry {
        name: Some(name.to_string()),
        agency: Some(format!("{} agency", name)),
        filter_token: Some(token.to_string()),
        default_links: vec![],
        time_notes: String::new(),
    }
}

fn test_config(base_url: &str, tenants: Vec<TenantEntry>) -> Config {
    Config {
        crawler: CrawlConfig {
            max_concurrent_details: 4,
            request_timeout_secs: 5,
        },
        platform: PlatformConfig {
            base_url: base_url.to_string(),
            list_path: "/MeetingsList.aspx".to_string(),
        },
        output: OutputConfig {
            records_path: "./records.jsonl".to_string(),
        },
        tenants,
    }
}

/// The shared list document: two tenants' containers side by side
const LIST_PAGE: &str = r#"
    <html><body><table>
    <tbody id="899-0">
        <tr><td><a class="meeting-link" href="/detail/101">Dec 9</a></td></tr>
        <tr><td><a class="meeting-link" href="/detail/102">Dec 16</a></td></tr>
    </tbody>
    <tbody id="777-0">
        <tr><td><a class="meeting-link" href="/detail/201">Dec 10</a></td></tr>
    </tbody>
    </table></body></html>
"#;

fn detail_page(title: &str, date: &str, time: &str, note: &str) -> String {
    format!(
        r#"<html><body><div class="meeting-detail">
            <h2 class="meeting-title">{title}</h2>
            <span class="meeting-date">{date}</span>
            <span class="meeting-time">{time}</span>
            <span class="meeting-status">{note}</span>
            <div class="meeting-location">
                <span class="location-name">City Hall</span>
                <span class="location-city">Tulsa</span>
                <span class="location-state">OK</span>
                <span class="location-zip">74103</span>
            </div>
            <div class="meeting-documents">
                <a href="/files/agenda.pdf">Agenda</a>
            </div>
        </div></body></html>"#
    )
}

async fn mount_page(server: &MockServer, page_path: &str, body: String) {
    Mock::given(method("GET"))
        .and(path(page_path))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_full_pipeline_scoped_to_tenant() {
    let server = MockServer::start().await;

    mount_page(&server, "/MeetingsList.aspx", LIST_PAGE.to_string()).await;
    mount_page(
        &server,
        "/detail/101",
        detail_page(
            "Board of County Commissioners Regular Meeting",
            "12/09/2030",
            "9:00 AM - 11:00 AM",
            "Regular",
        ),
    )
    .await;
    mount_page(
        &server,
        "/detail/102",
        detail_page(
            "Board of County Commissioners Special Meeting",
            "12/16/2030",
            "9:00 AM",
            "Canceled",
        ),
    )
    .await;

    // The other tenant's detail page must never be fetched by this crawl
    Mock::given(method("GET"))
        .and(path("/detail/201"))
        .respond_with(ResponseTemplate::new(200).set_body_string(detail_page(
            "Other Meeting",
            "12/10/2030",
            "9:00 AM",
            "",
        )))
        .expect(0)
        .mount(&server)
        .await;

    let config = test_config(&server.uri(), vec![tenant_entry("tulok_bocc", "899")]);
    let registry = Registry::build(&config).expect("registry build failed");
    let handle = registry.get("tulok_bocc").expect("missing handle");
    let fetcher = Fetcher::new(&config.crawler).expect("client build failed");

    let (tx, mut rx) = mpsc::channel(16);
    let stats = handle.run(&fetcher, tx).await.expect("crawl failed");

    assert_eq!(stats.pages_visited, 2);
    assert_eq!(stats.records_emitted, 2);
    assert_eq!(stats.extraction_failures, 0);

    let mut records = Vec::new();
    while let Some(meeting) = rx.recv().await {
        records.push(meeting);
    }
    assert_eq!(records.len(), 2);

    // Emission order is not guaranteed; key by id
    records.sort_by(|a, b| a.id.cmp(&b.id));
    let regular = &records[0];
    assert_eq!(regular.id, "tulok_bocc/203012090900");
    assert_eq!(regular.classification, Classification::Board);
    assert_eq!(regular.status, Status::Tentative);
    assert_eq!(regular.location.address, "Tulsa, OK 74103");
    assert_eq!(regular.links.len(), 1);
    assert!(regular.links[0].href.ends_with("/files/agenda.pdf"));
    assert!(regular.source.ends_with("/detail/101"));

    let cancelled = &records[1];
    assert_eq!(cancelled.status, Status::Cancelled);
    assert_eq!(cancelled.end, None);
}

#[tokio::test]
async fn test_broken_page_does_not_abort_siblings() {
    let server = MockServer::start().await;

    mount_page(&server, "/MeetingsList.aspx", LIST_PAGE.to_string()).await;
    // A detail page with no title fails extraction for that page only
    mount_page(
        &server,
        "/detail/101",
        r#"<html><body><div class="meeting-detail">
            <span class="meeting-date">12/09/2030</span>
        </div></body></html>"#
            .to_string(),
    )
    .await;
    mount_page(
        &server,
        "/detail/102",
        detail_page("City Council Meeting", "12/16/2030", "5:00 PM", ""),
    )
    .await;

    let config = test_config(&server.uri(), vec![tenant_entry("tulok_bocc", "899")]);
    let registry = Registry::build(&config).expect("registry build failed");
    let handle = registry.get("tulok_bocc").expect("missing handle");
    let fetcher = Fetcher::new(&config.crawler).expect("client build failed");

    let (tx, mut rx) = mpsc::channel(16);
    let stats = handle.run(&fetcher, tx).await.expect("crawl failed");

    assert_eq!(stats.pages_visited, 2);
    assert_eq!(stats.records_emitted, 1);
    assert_eq!(stats.extraction_failures, 1);

    let meeting = rx.recv().await.expect("expected one record");
    assert_eq!(meeting.title, "City Council Meeting");
    assert_eq!(meeting.classification, Classification::CityCouncil);
    assert!(rx.recv().await.is_none());
}

#[tokio::test]
async fn test_failed_detail_fetch_skips_page() {
    let server = MockServer::start().await;

    mount_page(&server, "/MeetingsList.aspx", LIST_PAGE.to_string()).await;
    Mock::given(method("GET"))
        .and(path("/detail/101"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    mount_page(
        &server,
        "/detail/102",
        detail_page("Parks Board Meeting", "12/16/2030", "6:00 PM", ""),
    )
    .await;

    let config = test_config(&server.uri(), vec![tenant_entry("tulok_bocc", "899")]);
    let registry = Registry::build(&config).expect("registry build failed");
    let handle = registry.get("tulok_bocc").expect("missing handle");
    let fetcher = Fetcher::new(&config.crawler).expect("client build failed");

    let (tx, mut rx) = mpsc::channel(16);
    let stats = handle.run(&fetcher, tx).await.expect("crawl failed");

    assert_eq!(stats.pages_visited, 2);
    assert_eq!(stats.records_emitted, 1);

    let meeting = rx.recv().await.expect("expected one record");
    assert_eq!(meeting.title, "Parks Board Meeting");
}

#[tokio::test]
async fn test_list_fetch_failure_aborts_tenant_run() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/MeetingsList.aspx"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let config = test_config(&server.uri(), vec![tenant_entry("tulok_bocc", "899")]);
    let registry = Registry::build(&config).expect("registry build failed");
    let handle = registry.get("tulok_bocc").expect("missing handle");
    let fetcher = Fetcher::new(&config.crawler).expect("client build failed");

    let (tx, _rx) = mpsc::channel(16);
    let err = handle.run(&fetcher, tx).await.unwrap_err();
    assert!(matches!(
        err,
        civic_cal::ScrapeError::Status { code: 503, .. }
    ));
}

#[tokio::test]
async fn test_two_tenants_share_one_list_document() {
    let server = MockServer::start().await;

    mount_page(&server, "/MeetingsList.aspx", LIST_PAGE.to_string()).await;
    mount_page(
        &server,
        "/detail/101",
        detail_page("Board Meeting", "12/09/2030", "9:00 AM", ""),
    )
    .await;
    mount_page(
        &server,
        "/detail/102",
        detail_page("Board Meeting", "12/16/2030", "9:00 AM", ""),
    )
    .await;
    mount_page(
        &server,
        "/detail/201",
        detail_page("School Board Meeting", "12/10/2030", "7:00 PM", ""),
    )
    .await;

    let config = test_config(
        &server.uri(),
        vec![tenant_entry("tulok_bocc", "899"), tenant_entry("tulok_boed", "777")],
    );
    let registry = Registry::build(&config).expect("registry build failed");
    let fetcher = Fetcher::new(&config.crawler).expect("client build failed");

    let (tx, mut rx) = mpsc::channel(16);
    for handle in registry.handles() {
        let stats = handle.run(&fetcher, tx.clone()).await.expect("crawl failed");
        assert!(stats.records_emitted > 0);
    }
    drop(tx);

    let mut records = Vec::new();
    while let Some(meeting) = rx.recv().await {
        records.push(meeting);
    }
    assert_eq!(records.len(), 3);

    // Identity stays tenant-scoped even for meetings at the same instant
    let bocc: Vec<_> = records.iter().filter(|m| m.id.starts_with("tulok_bocc/")).collect();
    let boed: Vec<_> = records.iter().filter(|m| m.id.starts_with("tulok_boed/")).collect();
    assert_eq!(bocc.len(), 2);
    assert_eq!(boed.len(), 1);
}
