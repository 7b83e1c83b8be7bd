//! MCP protocol tests against the built `gillito-mcp` binary over stdio.
//!
//! The server runs in an empty temporary directory so the layered config
//! loader finds no files and falls back to defaults.

use std::io::{BufRead, BufReader, Write};
use std::process::{Child, ChildStdin, ChildStdout, Command, Stdio};

use serde_json::{json, Value};
use tempfile::TempDir;

/// MCP Server test harness
struct McpTestServer {
    process: Child,
    stdin: ChildStdin,
    stdout: BufReader<ChildStdout>,
    _workdir: TempDir,
}

impl McpTestServer {
    /// Spawn the MCP server process
    fn spawn() -> Self {
        let workdir = TempDir::new().expect("temp dir");
        let mut process = Command::new(env!("CARGO_BIN_EXE_gillito-mcp"))
            .current_dir(workdir.path())
            .env_remove("GILLITO_TRANSPORT")
            .env_remove("GILLITO_ENV")
            .env_remove("RUST_LOG")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .expect("Failed to spawn server");

        let stdin = process.stdin.take().expect("stdin");
        let stdout = BufReader::new(process.stdout.take().expect("stdout"));
        Self {
            process,
            stdin,
            stdout,
            _workdir: workdir,
        }
    }

    fn send_line(&mut self, line: &str) {
        writeln!(self.stdin, "{}", line).expect("write request");
        self.stdin.flush().expect("flush");
    }

    fn read_response(&mut self) -> Value {
        let mut line = String::new();
        let read = self.stdout.read_line(&mut line).expect("read response");
        assert!(read > 0, "server closed stdout");
        serde_json::from_str(&line).unwrap_or_else(|e| panic!("Parse error: {} for: {}", e, line))
    }

    fn request(&mut self, id: i64, method: &str, params: Value) -> Value {
        let request = json!({"jsonrpc": "2.0", "id": id, "method": method, "params": params});
        self.send_line(&request.to_string());
        let response = self.read_response();
        assert_eq!(response["id"], id, "response id mismatch: {}", response);
        response
    }

    fn call_tool(&mut self, id: i64, name: &str, arguments: Value) -> (String, bool) {
        let response = self.request(id, "tools/call", json!({"name": name, "arguments": arguments}));
        let result = &response["result"];
        (
            result["content"][0]["text"].as_str().expect("text").to_string(),
            result["isError"].as_bool().expect("isError"),
        )
    }
}

impl Drop for McpTestServer {
    fn drop(&mut self) {
        let _ = self.process.kill();
        // Reap the child so it does not linger as a zombie.
        let _ = self.process.wait();
    }
}

#[test]
fn initialize_handshake_then_tools_list() {
    let mut server = McpTestServer::spawn();

    let init = server.request(1, "initialize", json!({"protocolVersion": "2024-11-05"}));
    assert_eq!(init["result"]["protocolVersion"], "2024-11-05");
    assert_eq!(init["result"]["serverInfo"]["name"], "mi-pana-gillito");

    // Notification: no output line. The next line read must answer id 2.
    server.send_line(r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#);

    let list = server.request(2, "tools/list", json!({}));
    assert_eq!(list["result"]["tools"].as_array().map(Vec::len), Some(9));
}

#[test]
fn lookup_listing_and_substitution() {
    let mut server = McpTestServer::spawn();

    let (text, is_error) = server.call_tool(1, "slang_lookup", json!({"term": "  Wepa "}));
    assert!(!is_error);
    assert!(text.starts_with("🇵🇷 **wepa**"));

    let (text, is_error) = server.call_tool(2, "slang_lookup", json!({"term": "xyzzy"}));
    assert!(!is_error);
    assert!(text.starts_with("¡Ay bendito!"));

    let (text, _) = server.call_tool(3, "slang_listing", json!({"tier": "all"}));
    assert!(text.ends_with("Total: 24 palabras"));

    let (text, _) = server.call_tool(4, "traducir_a_boricua", json!({"texto": "QUÉ FIESTA"}));
    assert!(text.contains("\nqué jangueo\n"));
}

#[test]
fn random_tools_answer_from_tables() {
    let mut server = McpTestServer::spawn();

    let (phrase, _) = server.call_tool(1, "random_phrase", json!({}));
    assert!(phrase.starts_with("🎤 Gillito dice: \""));

    let (fact, _) = server.call_tool(2, "random_fact", json!({}));
    assert!(fact.starts_with("🏝️ ¿Sabías que...? "));

    let (topic, _) = server.call_tool(3, "random_topic", json!({}));
    assert!(topic.starts_with("🎭 Tema: "));

    let (opinion, _) = server.call_tool(4, "compose_opinion", json!({"topic": "el tapón"}));
    assert!(opinion.contains("el tapón"));
    assert!(opinion.contains("[...opinión de Gillito aquí...]"));
}

#[test]
fn protocol_errors_keep_the_session_alive() {
    let mut server = McpTestServer::spawn();

    server.send_line("{not json");
    let parse_error = server.read_response();
    assert_eq!(parse_error["error"]["code"], -32700);

    let unknown = server.request(1, "tools/call", json!({"name": "make_coffee"}));
    assert_eq!(unknown["error"]["code"], -32006);

    let ping = server.request(2, "ping", json!({}));
    assert_eq!(ping["result"], json!({}));
}
