// Server loop module
// Accepts connections until the shutdown future resolves

use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::net::TcpListener;

use super::connection::accept_connection;
use crate::config::AppState;
use crate::logger;

/// Accept loop
///
/// In-flight connections keep running on their own tasks after the listener
/// is dropped.
pub async fn serve<F>(listener: TcpListener, state: Arc<AppState>, shutdown: F)
where
    F: Future<Output = ()>,
{
    let active_connections = Arc::new(AtomicUsize::new(0));
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => {
                        accept_connection(stream, peer_addr, &state, &active_connections);
                    }
                    Err(e) => {
                        logger::log_error(&format!("Failed to accept connection: {e}"));
                    }
                }
            }

            () = &mut shutdown => break,
        }
    }

    drop(listener);
    logger::log_shutdown(active_connections.load(Ordering::SeqCst));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::server::create_listener;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpStream;
    use tokio::sync::oneshot;

    async fn get(addr: std::net::SocketAddr, path: &str) -> String {
        let mut stream = TcpStream::connect(addr).await.unwrap();
        let request = format!("GET {path} HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n");
        stream.write_all(request.as_bytes()).await.unwrap();
        let mut response = String::new();
        stream.read_to_string(&mut response).await.unwrap();
        response
    }

    #[tokio::test]
    async fn test_serves_until_shutdown() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("collected/css")).unwrap();
        std::fs::write(dir.path().join("collected/css/site.css"), b"body{}").unwrap();

        let mut config = Config::load_from("definitely-missing-config-file").unwrap();
        config.logging.access_log = false;
        config.assets.static_root = dir.path().join("collected");
        config.assets.base_dir = dir.path().join("project");
        let state = Arc::new(AppState::new(&config));

        let listener = create_listener("127.0.0.1:0".parse().unwrap()).unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = oneshot::channel::<()>();
        let server = tokio::spawn(serve(listener, state, async {
            let _ = rx.await;
        }));

        let ok = get(addr, "/api/static/css/site.css").await;
        assert!(ok.starts_with("HTTP/1.1 200 OK"), "{ok}");
        let lower = ok.to_ascii_lowercase();
        assert!(lower.contains("content-length: 6"));
        assert!(lower.contains("cache-control: public, max-age=31536000"));
        assert!(lower.contains("access-control-allow-origin: *"));
        assert!(ok.ends_with("body{}"));

        let missing = get(addr, "/static/css/missing.css").await;
        assert!(missing.starts_with("HTTP/1.1 404 Not Found"), "{missing}");

        tx.send(()).unwrap();
        server.await.unwrap();
    }
}
