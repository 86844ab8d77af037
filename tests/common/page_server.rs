//! Minimal HTTP/1.1 server for integration tests.
//!
//! Serves a fixed set of pages keyed by request path and answers 404 for
//! anything else. Records the `User-Agent` of every request it sees.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;

pub struct PageServer {
    pub base_url: String,
    user_agents: Arc<Mutex<Vec<String>>>,
    paths: Arc<Mutex<Vec<String>>>,
}

impl PageServer {
    pub fn user_agents(&self) -> Vec<String> {
        self.user_agents.lock().unwrap().clone()
    }

    pub fn requested_paths(&self) -> Vec<String> {
        self.paths.lock().unwrap().clone()
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path.trim_start_matches('/'))
    }
}

/// Starts a server in a background thread. The server runs until the process exits.
pub fn start(pages: &[(&str, &str)]) -> PageServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let pages: Arc<HashMap<String, String>> = Arc::new(
        pages
            .iter()
            .map(|(path, body)| (path.to_string(), body.to_string()))
            .collect(),
    );
    let user_agents = Arc::new(Mutex::new(Vec::new()));
    let paths = Arc::new(Mutex::new(Vec::new()));

    let (seen_agents, seen_paths) = (Arc::clone(&user_agents), Arc::clone(&paths));
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            handle(stream, &pages, &seen_agents, &seen_paths);
        }
    });

    PageServer {
        base_url: format!("http://127.0.0.1:{}/", port),
        user_agents,
        paths,
    }
}

fn handle(
    mut stream: TcpStream,
    pages: &HashMap<String, String>,
    user_agents: &Mutex<Vec<String>>,
    paths: &Mutex<Vec<String>>,
) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) => return,
        Ok(n) => n,
        Err(_) => return,
    };
    let request = String::from_utf8_lossy(&buf[..n]);
    let path = request
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or("/")
        .to_string();
    if let Some(agent) = request.lines().find_map(|line| {
        let (name, value) = line.split_once(':')?;
        name.eq_ignore_ascii_case("user-agent").then(|| value.trim().to_string())
    }) {
        user_agents.lock().unwrap().push(agent);
    }
    paths.lock().unwrap().push(path.clone());

    let response = match pages.get(&path) {
        Some(body) => format!(
            "HTTP/1.1 200 OK\r\nContent-Type: text/html\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            body.len(),
            body
        ),
        None => "HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n".to_string(),
    };
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.flush();
}
