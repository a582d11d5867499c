//! Minimal HTTP/1.1 server for integration tests.
//!
//! Routes:
//! - `/article`  200 with a full article page
//! - `/no-title` 200 with an article page that carries no title anywhere
//! - `/empty`    200 with an empty body
//! - `/echo`     200 whose body is the raw request head
//! - `/latin1`   200 with an ISO-8859-1 body and matching Content-Type
//! - `/redirect` 302 to `/article`
//! - `/slow`     sleeps before answering (timeout tests)
//! - anything else 404

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::thread;
use std::time::Duration;

pub const ARTICLE_TITLE: &str = "How Lighthouses Work";

const PARAGRAPH: &str = "A lighthouse is a tower designed to emit light from a system of \
    lamps and lenses, serving as a navigational aid for maritime pilots at sea or on inland \
    waterways. Lighthouses mark dangerous coastlines, hazardous shoals, reefs, rocks and safe \
    entries to harbors, and they also assist in aerial navigation.";

pub fn article_html(with_title: bool) -> String {
    let head = if with_title {
        format!(
            r#"<title>{t} | Coastal Notes</title><meta property="og:title" content="{t}">"#,
            t = ARTICLE_TITLE
        )
    } else {
        String::new()
    };
    let paragraphs: String = (0..6)
        .map(|i| format!("<p>Section {} of the guide. {}</p>\n", i, PARAGRAPH))
        .collect();
    format!(
        r#"<!DOCTYPE html><html><head>{head}</head><body>
        <nav><a href="/">Home</a> <a href="/blog">Blog</a></nav>
        <article>{paragraphs}</article>
        <footer>Footer links</footer>
        </body></html>"#
    )
}

/// Starts a server in a background thread. Returns the base URL
/// (e.g. "http://127.0.0.1:12345"). The server runs until the process exits.
pub fn start() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            thread::spawn(move || handle(stream));
        }
    });
    format!("http://127.0.0.1:{}", port)
}

/// A URL on a port nothing listens on.
pub fn closed_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}/article", port)
}

fn handle(mut stream: TcpStream) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) | Err(_) => return,
        Ok(n) => n,
    };
    let request = String::from_utf8_lossy(&buf[..n]).into_owned();
    let path = request
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or("/")
        .to_string();

    let (status, extra, body): (&str, String, Vec<u8>) = match path.as_str() {
        "/article" => ("200 OK", String::new(), article_html(true).into_bytes()),
        "/no-title" => ("200 OK", String::new(), article_html(false).into_bytes()),
        "/empty" => ("200 OK", String::new(), Vec::new()),
        "/echo" => ("200 OK", String::new(), request.clone().into_bytes()),
        "/latin1" => (
            "200 OK",
            "Content-Type: text/html; charset=ISO-8859-1\r\n".to_string(),
            b"<html><body><p>Caf\xE9 cr\xE8me</p></body></html>".to_vec(),
        ),
        "/redirect" => (
            "302 Found",
            "Location: /article\r\n".to_string(),
            Vec::new(),
        ),
        "/slow" => {
            thread::sleep(Duration::from_millis(1500));
            ("200 OK", String::new(), b"late".to_vec())
        }
        _ => ("404 Not Found", String::new(), b"not found".to_vec()),
    };

    let content_type = if extra.starts_with("Content-Type:") {
        ""
    } else {
        "Content-Type: text/html; charset=utf-8\r\n"
    };
    let response = format!(
        "HTTP/1.1 {}\r\n{}Content-Length: {}\r\nConnection: close\r\n{}\r\n",
        status,
        content_type,
        body.len(),
        extra
    );
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.write_all(&body);
}
