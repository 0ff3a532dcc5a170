use std::net::SocketAddr;

use axum::body::Bytes;
use axum::http::{Method, Uri};
use axum::Router;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// In-process HTTP server bound to an ephemeral port. Stops on drop.
struct TestServer {
    addr: SocketAddr,
    handle: JoinHandle<()>,
}

impl TestServer {
    async fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let router = Router::new().fallback(respond);
        let handle = tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        Self { addr, handle }
    }

    fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    async fn shutdown(mut self) {
        self.handle.abort();
        let _ = (&mut self.handle).await;
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn respond(method: Method, uri: Uri, body: Bytes) -> String {
    if uri.path() == "/test" {
        return "You hit the test endpoint!".into();
    }

    if method == Method::POST {
        return format!("You sent a POST request with body: {}", String::from_utf8_lossy(&body));
    }

    "OK".into()
}

async fn get(url: String) -> Result<(u16, String), ureq::Error> {
    tokio::task::spawn_blocking(move || {
        let mut response = ureq::get(&url).call()?;
        let status = response.status().as_u16();
        Ok((status, response.body_mut().read_to_string()?))
    })
    .await
    .unwrap()
}

async fn post_json(url: String, body: &'static str) -> (u16, String) {
    tokio::task::spawn_blocking(move || {
        let mut response = ureq::post(&url).header("Content-Type", "application/json").send(body).unwrap();
        let status = response.status().as_u16();
        (status, response.body_mut().read_to_string().unwrap())
    })
    .await
    .unwrap()
}

#[tokio::test]
async fn test_endpoint_greets() {
    let server = TestServer::start().await;

    let (status, body) = get(format!("{}/test", server.url())).await.unwrap();

    assert_eq!(status, 200);
    assert_eq!(body, "You hit the test endpoint!");
}

#[tokio::test]
async fn post_echoes_body() {
    let server = TestServer::start().await;

    let (status, body) = post_json(server.url(), r#"{"foo":"bar"}"#).await;

    assert_eq!(status, 200);
    assert_eq!(body, r#"You sent a POST request with body: {"foo":"bar"}"#);
}

#[tokio::test]
async fn other_requests_get_ok() {
    let server = TestServer::start().await;

    let (_, body) = get(format!("{}/anything/else", server.url())).await.unwrap();

    assert_eq!(body, "OK");
}

#[tokio::test]
async fn post_to_test_path_still_greets() {
    let server = TestServer::start().await;

    let (_, body) = post_json(format!("{}/test", server.url()), "ignored").await;

    assert_eq!(body, "You hit the test endpoint!");
}

#[tokio::test]
async fn server_is_gone_after_shutdown() {
    let server = TestServer::start().await;
    let url = format!("{}/test", server.url());
    assert!(get(url.clone()).await.is_ok());

    server.shutdown().await;

    assert!(get(url).await.is_err());
}
