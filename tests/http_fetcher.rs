// tests/http_fetcher.rs
//
// HttpFetcher against a one-shot local HTTP server.
//
use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use cric_dash::config::options::ApiConfig;
use cric_dash::error::TransportReason;
use cric_dash::fetch::{Fetcher, HttpFetcher};
use cric_dash::query::{RankingFilter, RecordFilter, ResourceQuery, SeriesFilter};

/// Serve exactly one response; the handle yields the raw request head.
fn serve_once(status: &str, body: &str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());
    let response = format!(
        "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut head = Vec::new();
        let mut buf = [0u8; 1024];
        while !head.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = stream.read(&mut buf).unwrap();
            if n == 0 {
                break;
            }
            head.extend_from_slice(&buf[..n]);
        }
        stream.write_all(response.as_bytes()).unwrap();
        String::from_utf8_lossy(&head).into_owned()
    });
    (base, handle)
}

fn fetcher(base: &str) -> HttpFetcher {
    let cfg = ApiConfig::new("secret-key")
        .with_base_url(base)
        .with_timeout(Duration::from_secs(5));
    HttpFetcher::new(&cfg).unwrap()
}

#[test]
fn sends_credentials_path_and_query() {
    let (base, server) = serve_once("200 OK", r#"{"rank": []}"#);
    let query: ResourceQuery = RankingFilter {
        format_type: "odi".into(),
        is_women: "1".into(),
        category: "bowlers".into(),
    }
    .into();

    let payload = fetcher(&base).fetch(&query).unwrap();
    assert_eq!(payload["rank"].as_array().map(Vec::len), Some(0));

    let head = server.join().unwrap().to_ascii_lowercase();
    assert!(head.starts_with("get /stats/v1/rankings/bowlers?"), "{head}");
    assert!(head.contains("formattype=odi"));
    assert!(head.contains("iswomen=1"));
    assert!(head.contains("x-rapidapi-key: secret-key"));
    assert!(head.contains("x-rapidapi-host: cricbuzz-cricket.p.rapidapi.com"));
}

#[test]
fn men_rankings_omit_the_women_flag() {
    let (base, server) = serve_once("200 OK", r#"{"rank": []}"#);
    fetcher(&base)
        .fetch(&RankingFilter::default().into())
        .unwrap();
    let head = server.join().unwrap().to_ascii_lowercase();
    assert!(!head.contains("iswomen"), "{head}");
}

#[test]
fn non_success_status_keeps_code_and_body() {
    let (base, server) = serve_once("429 Too Many Requests", r#"{"message":"quota"}"#);
    let err = fetcher(&base)
        .fetch(&SeriesFilter::default().into())
        .unwrap_err();
    server.join().unwrap();

    assert_eq!(err.reason, TransportReason::Status);
    assert_eq!(err.status, Some(429));
    assert_eq!(err.raw_body, r#"{"message":"quota"}"#);
}

#[test]
fn success_with_non_json_body_is_unparseable() {
    let (base, server) = serve_once("200 OK", "<html>maintenance</html>");
    let err = fetcher(&base)
        .fetch(&RecordFilter::default().into())
        .unwrap_err();
    server.join().unwrap();

    assert_eq!(err.reason, TransportReason::UnparseableBody);
    assert_eq!(err.raw_body, "<html>maintenance</html>");
}

#[test]
fn unreachable_host_has_no_status() {
    // Bind then drop to get a port nothing listens on.
    let port = TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap().port();
    let err = fetcher(&format!("http://127.0.0.1:{port}"))
        .fetch(&SeriesFilter::default().into())
        .unwrap_err();

    assert_eq!(err.reason, TransportReason::Unreachable);
    assert_eq!(err.status, None);
}
