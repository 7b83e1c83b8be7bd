//! MCP Server implementation.
//!
//! Two transports share one `Handlers` instance:
//! - stdio: newline-delimited JSON-RPC on stdin/stdout
//! - tcp: the same framing per connection, bounded by `max_connections`

use std::future::Future;
use std::net::SocketAddr;
use std::str::Utf8Error;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::{OwnedSemaphorePermit, Semaphore};
use tracing::{debug, error, info, warn};

use gillito_core::config::Config;
pub use gillito_core::config::TransportMode;
use gillito_core::ContentService;

use crate::handlers::Handlers;
use crate::protocol::{error_codes, JsonRpcRequest, JsonRpcResponse};

pub struct McpServer {
    config: Config,
    handlers: Handlers,
}

impl McpServer {
    /// Create a server over the builtin content with the thread-local RNG.
    pub fn new(config: Config) -> Result<Self> {
        let service = ContentService::with_defaults(config.content.clone());
        Self::with_service(config, service)
    }

    /// Create a server over an explicit content service.
    pub fn with_service(config: Config, service: ContentService) -> Result<Self> {
        let handlers = Handlers::new(service, config.server.clone())?;
        info!(name = %config.server.name, version = %config.server.version, "MCP Server initialized");
        Ok(Self { config, handlers })
    }

    /// Run the server, reading from stdin and writing to stdout.
    pub async fn run(&self) -> Result<()> {
        info!("Server ready, waiting for requests on stdio");
        let stdin = BufReader::new(tokio::io::stdin());
        let stdout = tokio::io::stdout();
        self.serve_lines(stdin, stdout).await?;
        info!("stdin closed, server shutting down");
        Ok(())
    }

    /// Serve newline-delimited requests from `reader` until EOF.
    ///
    /// Blank lines are skipped and notifications produce no output. A line
    /// that is not valid UTF-8 gets PARSE_ERROR and the session continues.
    pub async fn serve_lines<R, W>(&self, mut reader: R, mut writer: W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut frame = Vec::new();
        loop {
            frame.clear();
            let read = reader
                .read_until(b'\n', &mut frame)
                .await
                .context("Error reading request line")?;
            if read == 0 {
                return Ok(());
            }

            let response = match std::str::from_utf8(&frame) {
                Ok(line) if line.trim().is_empty() => continue,
                Ok(line) => {
                    debug!(request = %line.trim(), "Received");
                    self.handle_request(line.trim()).await
                }
                Err(e) => invalid_utf8(e),
            };
            write_response(&mut writer, &response).await?;
        }
    }

    /// Bind `bind_address:tcp_port` and serve until Ctrl-C.
    pub async fn run_tcp(self: Arc<Self>) -> Result<()> {
        let addr = format!("{}:{}", self.config.mcp.bind_address, self.config.mcp.tcp_port);
        let listener = TcpListener::bind(&addr).await.map_err(|e| {
            error!(
                code = error_codes::TCP_BIND_FAILED,
                address = %addr,
                error = %e,
                "FATAL: TCP bind failed"
            );
            anyhow::anyhow!("Failed to bind TCP listener on {}: {}", addr, e)
        })?;

        tokio::select! {
            result = Arc::clone(&self).serve_tcp(listener) => result,
            _ = tokio::signal::ctrl_c() => {
                info!("Ctrl-C received, TCP server shutting down");
                Ok(())
            }
        }
    }

    /// Accept connections on `listener` until the task is dropped.
    ///
    /// Connections beyond `max_connections` get a single
    /// TCP_MAX_CONNECTIONS_REACHED error line and are closed.
    pub async fn serve_tcp(self: Arc<Self>, listener: TcpListener) -> Result<()> {
        let limit = Arc::new(Semaphore::new(self.config.mcp.max_connections));
        let local = listener.local_addr().context("TCP listener has no local address")?;
        info!(address = %local, max_connections = self.config.mcp.max_connections, "TCP transport listening");

        loop {
            let (mut stream, peer) = match listener.accept().await {
                Ok(conn) => conn,
                Err(e) => {
                    warn!(code = error_codes::TCP_CONNECTION_ERROR, error = %e, "Accept failed");
                    continue;
                }
            };

            let permit = match Arc::clone(&limit).try_acquire_owned() {
                Ok(permit) => permit,
                Err(_) => {
                    warn!(peer = %peer, "Rejecting connection, at max_connections");
                    let response = JsonRpcResponse::error(
                        None,
                        error_codes::TCP_MAX_CONNECTIONS_REACHED,
                        format!(
                            "Maximum concurrent connections ({}) reached",
                            self.config.mcp.max_connections
                        ),
                    );
                    if let Err(e) = write_response(&mut stream, &response).await {
                        debug!(peer = %peer, error = %e, "Could not notify rejected client");
                    }
                    continue;
                }
            };

            let server = Arc::clone(&self);
            tokio::spawn(async move {
                server.handle_connection(stream, peer, permit).await;
            });
        }
    }

    async fn handle_connection(
        self: Arc<Self>,
        stream: TcpStream,
        peer: SocketAddr,
        _permit: OwnedSemaphorePermit,
    ) {
        debug!(peer = %peer, "Client connected");
        match self.serve_connection(stream).await {
            Ok(()) => debug!(peer = %peer, "Client disconnected"),
            Err(e) => warn!(
                code = error_codes::TCP_CONNECTION_ERROR,
                peer = %peer,
                error = %e,
                "Connection closed with error"
            ),
        }
    }

    async fn serve_connection(&self, stream: TcpStream) -> Result<()> {
        let max_payload = self.config.mcp.max_payload_size;
        let timeout = Duration::from_secs(self.config.mcp.request_timeout);
        let (read_half, mut write_half) = stream.into_split();
        let mut reader = BufReader::new(read_half);
        let mut frame = Vec::new();

        loop {
            frame.clear();
            // Frames are raw bytes: the size cut may land inside a UTF-8 sequence.
            let read = (&mut reader)
                .take(max_payload as u64 + 1)
                .read_until(b'\n', &mut frame)
                .await?;
            if read == 0 {
                return Ok(());
            }

            if frame.len() > max_payload && frame.last() != Some(&b'\n') {
                let response = JsonRpcResponse::error(
                    None,
                    error_codes::TCP_FRAME_ERROR,
                    format!("Message exceeds max_payload_size ({} bytes)", max_payload),
                );
                write_response(&mut write_half, &response).await?;
                discard_rest_of_line(&mut reader).await?;
                continue;
            }

            let line = match std::str::from_utf8(&frame) {
                Ok(line) => line,
                Err(e) => {
                    write_response(&mut write_half, &invalid_utf8(e)).await?;
                    continue;
                }
            };

            let request = line.trim();
            if request.is_empty() {
                continue;
            }

            let response = within_timeout(timeout, self.handle_request(request)).await;
            write_response(&mut write_half, &response).await?;
        }
    }

    /// Handle a single JSON-RPC request line.
    pub async fn handle_request(&self, input: &str) -> JsonRpcResponse {
        let request: JsonRpcRequest = match serde_json::from_str(input) {
            Ok(r) => r,
            Err(e) => {
                warn!(error = %e, "Failed to parse request");
                return JsonRpcResponse::error(
                    None,
                    error_codes::PARSE_ERROR,
                    format!("Parse error: {}", e),
                );
            }
        };

        if request.jsonrpc != "2.0" {
            return JsonRpcResponse::error(
                request.id,
                error_codes::INVALID_REQUEST,
                "Invalid JSON-RPC version",
            );
        }

        self.handlers.dispatch(request).await
    }
}

fn invalid_utf8(e: Utf8Error) -> JsonRpcResponse {
    warn!(error = %e, "Request line is not valid UTF-8");
    JsonRpcResponse::error(
        None,
        error_codes::PARSE_ERROR,
        format!("Parse error: invalid UTF-8: {}", e),
    )
}

/// Resolve `request`, or answer TCP_CLIENT_TIMEOUT once `timeout` elapses.
async fn within_timeout<F>(timeout: Duration, request: F) -> JsonRpcResponse
where
    F: Future<Output = JsonRpcResponse>,
{
    match tokio::time::timeout(timeout, request).await {
        Ok(response) => response,
        Err(_) => {
            warn!(timeout_secs = timeout.as_secs(), "Request timed out");
            JsonRpcResponse::error(
                None,
                error_codes::TCP_CLIENT_TIMEOUT,
                format!("Request exceeded request_timeout ({}s)", timeout.as_secs()),
            )
        }
    }
}

/// Consume input up to and including the next newline (or EOF).
async fn discard_rest_of_line<R>(reader: &mut R) -> Result<()>
where
    R: AsyncBufRead + Unpin,
{
    loop {
        let buf = reader.fill_buf().await?;
        if buf.is_empty() {
            return Ok(());
        }
        match buf.iter().position(|b| *b == b'\n') {
            Some(pos) => {
                reader.consume(pos + 1);
                return Ok(());
            }
            None => {
                let len = buf.len();
                reader.consume(len);
            }
        }
    }
}

/// Write one response line. Notifications write nothing.
async fn write_response<W>(writer: &mut W, response: &JsonRpcResponse) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    if response.is_no_reply() {
        debug!("Notification handled, no response needed");
        return Ok(());
    }

    let mut payload = serde_json::to_string(response)?;
    debug!(response = %payload, "Sending");
    payload.push('\n');
    writer.write_all(payload.as_bytes()).await?;
    writer.flush().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use gillito_core::config::ContentConfig;
    use gillito_core::random::RandomSource;
    use gillito_core::ContentTables;
    use serde_json::{json, Value};

    fn server_with(config: Config) -> McpServer {
        McpServer::new(config).expect("server")
    }

    async fn run_stdio(input: &[u8]) -> Vec<Value> {
        run_stdio_on(&server_with(Config::default()), input).await
    }

    async fn run_stdio_on(server: &McpServer, input: &[u8]) -> Vec<Value> {
        let mut output = Vec::new();
        server
            .serve_lines(BufReader::new(input), &mut output)
            .await
            .expect("serve");
        String::from_utf8(output)
            .expect("utf8")
            .lines()
            .map(|l| serde_json::from_str(l).expect("json line"))
            .collect()
    }

    #[tokio::test]
    async fn test_parse_error() {
        let server = server_with(Config::default());
        let response = server.handle_request("{not json").await;
        assert_eq!(response.error.map(|e| e.code), Some(error_codes::PARSE_ERROR));
        assert!(response.id.is_none());
    }

    #[tokio::test]
    async fn test_wrong_jsonrpc_version() {
        let server = server_with(Config::default());
        let response = server
            .handle_request(r#"{"jsonrpc":"1.0","id":9,"method":"ping"}"#)
            .await;
        assert_eq!(response.error.map(|e| e.code), Some(error_codes::INVALID_REQUEST));
    }

    #[tokio::test]
    async fn test_stdio_session_skips_notifications_and_blank_lines() {
        let input = concat!(
            r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{}}"#,
            "\n",
            r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#,
            "\n\n",
            r#"{"jsonrpc":"2.0","id":2,"method":"tools/call","params":{"name":"slang_lookup","arguments":{"term":"wepa"}}}"#,
            "\n",
        );
        let responses = run_stdio(input.as_bytes()).await;
        assert_eq!(responses.len(), 2);
        assert_eq!(responses[0]["id"], 1);
        assert_eq!(responses[1]["id"], 2);
        assert_eq!(responses[1]["result"]["isError"], false);
    }

    /// Counts how often the content service asks for randomness.
    struct CountingRandom(Arc<AtomicUsize>);

    impl RandomSource for CountingRandom {
        fn pick_index(&self, _len: usize) -> usize {
            self.0.fetch_add(1, Ordering::SeqCst);
            0
        }
    }

    #[tokio::test]
    async fn test_id_less_requests_are_not_answered_or_run() {
        let calls = Arc::new(AtomicUsize::new(0));
        let service = ContentService::new(
            ContentTables::builtin(),
            Arc::new(CountingRandom(Arc::clone(&calls))),
            ContentConfig::default(),
        );
        let server = McpServer::with_service(Config::default(), service).expect("server");

        let input = concat!(
            r#"{"jsonrpc":"2.0","method":"ping"}"#,
            "\n",
            r#"{"jsonrpc":"2.0","method":"tools/call","params":{"name":"random_fact"}}"#,
            "\n",
            r#"{"jsonrpc":"2.0","method":"shutdown"}"#,
            "\n",
            r#"{"jsonrpc":"2.0","id":3,"method":"ping"}"#,
            "\n",
        );
        let responses = run_stdio_on(&server, input.as_bytes()).await;

        assert_eq!(responses.len(), 1);
        assert_eq!(responses[0]["id"], 3);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_null_id_is_answered_with_null_id() {
        let responses = run_stdio(b"{\"jsonrpc\":\"2.0\",\"id\":null,\"method\":\"ping\"}\n").await;
        assert_eq!(responses.len(), 1);
        assert_eq!(responses[0].get("id"), Some(&Value::Null));
        assert_eq!(responses[0]["result"], json!({}));
    }

    #[tokio::test]
    async fn test_stdio_invalid_utf8_is_a_parse_error() {
        let responses = run_stdio(b"\xff\xfe\n{\"jsonrpc\":\"2.0\",\"id\":1,\"method\":\"ping\"}\n").await;
        assert_eq!(responses.len(), 2);
        assert_eq!(responses[0]["error"]["code"], error_codes::PARSE_ERROR);
        assert_eq!(responses[1]["id"], 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_request_answers_client_timeout() {
        let response = within_timeout(
            Duration::from_secs(30),
            std::future::pending::<JsonRpcResponse>(),
        )
        .await;
        let error = response.error.expect("timeout error");
        assert_eq!(error.code, error_codes::TCP_CLIENT_TIMEOUT);
        assert!(error.message.contains("30s"));

        let ready = within_timeout(Duration::from_secs(30), async {
            JsonRpcResponse::success(None, json!({}))
        })
        .await;
        assert!(ready.error.is_none());
    }

    async fn spawn_tcp(config: Config) -> SocketAddr {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("addr");
        let server = Arc::new(server_with(config));
        tokio::spawn(server.serve_tcp(listener));
        addr
    }

    async fn read_json_line<R: AsyncBufRead + Unpin>(reader: &mut R) -> Value {
        let mut line = String::new();
        reader.read_line(&mut line).await.expect("read");
        serde_json::from_str(&line).expect("json")
    }

    #[tokio::test]
    async fn test_tcp_round_trip() {
        let addr = spawn_tcp(Config::default()).await;
        let stream = TcpStream::connect(addr).await.expect("connect");
        let (read_half, mut write_half) = stream.into_split();
        let mut reader = BufReader::new(read_half);

        let request = json!({
            "jsonrpc": "2.0",
            "id": "a",
            "method": "tools/call",
            "params": {"name": "slang_listing", "arguments": {"tier": "advanced"}}
        });
        write_half
            .write_all(format!("{}\n", request).as_bytes())
            .await
            .expect("write");

        let response = read_json_line(&mut reader).await;
        assert_eq!(response["id"], "a");
        let text = response["result"]["content"][0]["text"].as_str().expect("text");
        assert!(text.ends_with("Total: 3 palabras"));
    }

    #[tokio::test]
    async fn test_tcp_oversized_frame() {
        let mut config = Config::default();
        config.mcp.max_payload_size = 64;
        let addr = spawn_tcp(config).await;
        let stream = TcpStream::connect(addr).await.expect("connect");
        let (read_half, mut write_half) = stream.into_split();
        let mut reader = BufReader::new(read_half);

        let oversized = format!("{}\n", "x".repeat(200));
        write_half.write_all(oversized.as_bytes()).await.expect("write");

        let response = read_json_line(&mut reader).await;
        assert_eq!(response["error"]["code"], error_codes::TCP_FRAME_ERROR);

        // The rest of the oversized line is skipped and the connection stays usable.
        write_half
            .write_all(b"{\"jsonrpc\":\"2.0\",\"id\":2,\"method\":\"ping\"}\n")
            .await
            .expect("write");
        let response = read_json_line(&mut reader).await;
        assert_eq!(response["id"], 2);
        assert_eq!(response["result"], json!({}));
    }

    #[tokio::test]
    async fn test_tcp_frame_limit_inside_multibyte_char() {
        let mut config = Config::default();
        config.mcp.max_payload_size = 64;
        let addr = spawn_tcp(config).await;
        let stream = TcpStream::connect(addr).await.expect("connect");
        let (read_half, mut write_half) = stream.into_split();
        let mut reader = BufReader::new(read_half);

        // Byte 65 is the first half of the two-byte "ñ".
        let oversized = format!("{}ñ{}\n", "x".repeat(64), "y".repeat(50));
        write_half.write_all(oversized.as_bytes()).await.expect("write");
        let response = read_json_line(&mut reader).await;
        assert_eq!(response["error"]["code"], error_codes::TCP_FRAME_ERROR);

        // Multibyte text under the limit is served normally.
        write_half
            .write_all("{\"jsonrpc\":\"2.0\",\"id\":\"ñ\",\"method\":\"ping\"}\n".as_bytes())
            .await
            .expect("write");
        let response = read_json_line(&mut reader).await;
        assert_eq!(response["id"], "ñ");
    }

    #[tokio::test]
    async fn test_tcp_invalid_utf8_keeps_connection() {
        let addr = spawn_tcp(Config::default()).await;
        let stream = TcpStream::connect(addr).await.expect("connect");
        let (read_half, mut write_half) = stream.into_split();
        let mut reader = BufReader::new(read_half);

        write_half.write_all(b"\xff\xfe\n").await.expect("write");
        let response = read_json_line(&mut reader).await;
        assert_eq!(response["error"]["code"], error_codes::PARSE_ERROR);

        write_half
            .write_all(b"{\"jsonrpc\":\"2.0\",\"id\":2,\"method\":\"ping\"}\n")
            .await
            .expect("write");
        assert_eq!(read_json_line(&mut reader).await["id"], 2);
    }

    #[tokio::test]
    async fn test_tcp_rejects_connections_over_limit() {
        let mut config = Config::default();
        config.mcp.max_connections = 1;
        let addr = spawn_tcp(config).await;

        // Hold the only slot and prove it is being served.
        let first = TcpStream::connect(addr).await.expect("connect");
        let (first_read, mut first_write) = first.into_split();
        let mut first_reader = BufReader::new(first_read);
        first_write
            .write_all(b"{\"jsonrpc\":\"2.0\",\"id\":1,\"method\":\"ping\"}\n")
            .await
            .expect("write");
        assert_eq!(read_json_line(&mut first_reader).await["id"], 1);

        let second = TcpStream::connect(addr).await.expect("connect");
        let mut second_reader = BufReader::new(second);
        let response = read_json_line(&mut second_reader).await;
        assert_eq!(
            response["error"]["code"],
            error_codes::TCP_MAX_CONNECTIONS_REACHED
        );
    }
}
