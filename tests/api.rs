//! End-to-end tests: the real server on an ephemeral port, raw HTTP/1.1.

use std::collections::HashMap;
use std::net::SocketAddr;

use blog_api::{Config, blog, serve_listener};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::oneshot;

struct Reply {
    status: u16,
    headers: HashMap<String, String>,
    body: String,
}

struct TestServer {
    addr: SocketAddr,
    _shutdown: oneshot::Sender<()>,
}

impl TestServer {
    async fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = oneshot::channel::<()>();
        let app = blog::app(&Config::new(addr));
        tokio::spawn(serve_listener(listener, app, async move {
            let _ = rx.await;
        }));
        Self { addr, _shutdown: tx }
    }

    async fn send(&self, method: &str, path: &str) -> Reply {
        let mut stream = TcpStream::connect(self.addr).await.unwrap();
        let head = format!(
            "{method} {path} HTTP/1.1\r\nhost: localhost\r\ncontent-length: 0\r\nconnection: close\r\n\r\n"
        );
        stream.write_all(head.as_bytes()).await.unwrap();

        let mut raw = Vec::new();
        stream.read_to_end(&mut raw).await.unwrap();
        parse(&String::from_utf8(raw).unwrap())
    }
}

fn parse(raw: &str) -> Reply {
    let (head, body) = raw.split_once("\r\n\r\n").unwrap();
    let mut lines = head.split("\r\n");
    let status = lines.next().unwrap().split(' ').nth(1).unwrap().parse().unwrap();
    let headers = lines
        .filter_map(|l| l.split_once(": "))
        .map(|(k, v)| (k.to_ascii_lowercase(), v.to_owned()))
        .collect();
    Reply { status, headers, body: body.to_owned() }
}

fn created_id(reply: &Reply) -> String {
    let json: serde_json::Value = serde_json::from_str(&reply.body).unwrap();
    json["blog_id"].as_str().unwrap().to_owned()
}

#[tokio::test]
async fn welcome_returns_greeting() {
    let server = TestServer::start().await;

    let reply = server.send("GET", "/").await;

    assert_eq!(reply.status, 200);
    assert_eq!(reply.body, "Welcome to the blog API\n");
    assert_eq!(reply.headers["x-request-id"], "12345");
}

#[tokio::test]
async fn create_via_post_and_get_returns_blog_json() {
    let server = TestServer::start().await;

    for method in ["POST", "GET"] {
        let reply = server.send(method, "/blog").await;
        assert_eq!(reply.status, 200);
        assert_eq!(reply.headers["content-type"], "application/json");
        assert_eq!(reply.headers["access-control-allow-origin"], "*");

        let json: serde_json::Value = serde_json::from_str(&reply.body).unwrap();
        let blog_id = json["blog_id"].as_str().unwrap();
        let user_id = json["user"]["user_id"].as_str().unwrap();
        assert!(uuid::Uuid::parse_str(blog_id).is_ok());
        assert!(uuid::Uuid::parse_str(user_id).is_ok());
        assert_eq!(json["title"], "My First Blog");
        assert!(json["day_created"].as_str().unwrap().ends_with("day"));
    }
}

#[tokio::test]
async fn sequential_creates_yield_distinct_ids() {
    let server = TestServer::start().await;

    let first = created_id(&server.send("POST", "/blog").await);
    let second = created_id(&server.send("POST", "/blog").await);

    assert_ne!(first, second);
}

#[tokio::test]
async fn delete_removes_blog_and_second_delete_is_404() {
    let server = TestServer::start().await;
    let id = created_id(&server.send("POST", "/blog").await);

    let reply = server.send("GET", &format!("/blog/{id}")).await;
    assert_eq!(reply.status, 200);
    assert_eq!(created_id(&reply), id);

    let reply = server.send("DELETE", &format!("/blog/{id}")).await;
    assert_eq!(reply.status, 200);
    assert_eq!(reply.body, format!("Blog with ID {id} is deleted"));

    let reply = server.send("GET", &format!("/blog/{id}")).await;
    assert_eq!(reply.status, 404);

    let reply = server.send("DELETE", &format!("/blog/{id}")).await;
    assert_eq!(reply.status, 404);
    assert_eq!(reply.body, format!("Blog with ID {id} is not found"));
}

#[tokio::test]
async fn delete_unknown_id_is_404() {
    let server = TestServer::start().await;

    let reply = server.send("DELETE", "/blog/does-not-exist").await;

    assert_eq!(reply.status, 404);
    assert_eq!(reply.body, "Blog with ID does-not-exist is not found");
    assert_eq!(reply.headers["x-request-id"], "12345");
    assert_eq!(reply.headers["access-control-allow-origin"], "*");
    assert_eq!(reply.headers["access-control-allow-methods"], "DELETE");
}

#[tokio::test]
async fn unknown_method_on_unknown_path_is_405() {
    let server = TestServer::start().await;

    let reply = server.send("PURGE", "/missing").await;

    assert_eq!(reply.status, 405);
    assert!(!reply.headers.contains_key("allow"));
}

#[tokio::test]
async fn request_id_header_on_every_route() {
    let server = TestServer::start().await;

    for (method, path, status) in [
        ("GET", "/", 200),
        ("POST", "/blog", 200),
        ("GET", "/healthz", 200),
        ("GET", "/readyz", 200),
        ("GET", "/missing", 404),
        ("PUT", "/blog", 405),
    ] {
        let reply = server.send(method, path).await;
        assert_eq!(reply.status, status, "{method} {path}");
        assert_eq!(reply.headers["x-request-id"], "12345", "{method} {path}");
    }
}

#[tokio::test]
async fn wrong_method_lists_allowed_methods() {
    let server = TestServer::start().await;

    let reply = server.send("PUT", "/blog").await;

    assert_eq!(reply.status, 405);
    assert_eq!(reply.headers["allow"], "GET, POST");
}
