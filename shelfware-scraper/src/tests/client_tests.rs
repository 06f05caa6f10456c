use super::*;

use std::io::Read as _;
use std::net::TcpListener;
use std::thread;

/// Serve one canned HTTP response on an ephemeral localhost port and return
/// the base URL. The thread exits after the first connection.
fn serve_once(response: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            let mut buf = [0u8; 1024];
            let _ = stream.read(&mut buf);
            let _ = std::io::Write::write_all(&mut stream, response.as_bytes());
        }
    });
    format!("http://{addr}")
}

fn test_client() -> SteamClient {
    let config = FetchConfig {
        download_delay: std::time::Duration::ZERO,
        ..FetchConfig::default()
    };
    SteamClient::new(&config).unwrap()
}

#[test]
fn test_download_writes_body() {
    let base = serve_once(
        "HTTP/1.1 200 OK\r\nContent-Type: image/jpeg\r\nContent-Length: 9\r\nConnection: close\r\n\r\nfake-body",
    );
    let dir = tempfile::tempdir().unwrap();
    let dest = dir.path().join("header.jpg");

    let outcome = test_client().download_asset(&format!("{base}/header.jpg"), &dest);

    assert_eq!(outcome, DownloadOutcome::Saved);
    assert_eq!(std::fs::read(&dest).unwrap(), b"fake-body");
}

#[test]
fn test_download_empty_body_removes_file() {
    let base = serve_once(
        "HTTP/1.1 200 OK\r\nContent-Type: image/jpeg\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
    );
    let dir = tempfile::tempdir().unwrap();
    let dest = dir.path().join("empty.jpg");

    let outcome = test_client().download_asset(&format!("{base}/empty.jpg"), &dest);

    assert_eq!(outcome, DownloadOutcome::EmptyBody);
    assert!(!dest.exists(), "an empty download must not leave a file behind");
}

#[test]
fn test_download_non_2xx_is_failure() {
    let base = serve_once(
        "HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
    );
    let dir = tempfile::tempdir().unwrap();
    let dest = dir.path().join("missing.jpg");

    let outcome = test_client().download_asset(&format!("{base}/missing.jpg"), &dest);

    assert!(matches!(outcome, DownloadOutcome::Failed(_)));
    assert!(!dest.exists());
}

#[test]
fn test_download_rejects_non_http_url() {
    let dir = tempfile::tempdir().unwrap();
    let dest = dir.path().join("x.jpg");
    let client = test_client();

    assert_eq!(
        client.download_asset("ftp://example.com/x.jpg", &dest),
        DownloadOutcome::InvalidUrl
    );
    assert_eq!(
        client.download_asset("not a url", &dest),
        DownloadOutcome::InvalidUrl
    );
    assert!(!dest.exists());
}
