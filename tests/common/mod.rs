//! Shared test fixtures for the heritage-check integration tests.
//!
//! Provides a scripted `PageSource` that replays canned search pages instead
//! of touching the network, plus helpers for card records and deck files.

#![allow(dead_code)]

use heritage_check::{CardRecord, HeritageError, PageSource, Result, SearchPage};
use std::collections::VecDeque;
use std::fs;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::path::{Path, PathBuf};
use std::thread::{self, JoinHandle};

/// Replays search pages in order and records every request it receives.
pub struct ScriptedSource {
    pages: VecDeque<SearchPage>,
    /// Requests seen so far: `search <url> q=<query>` or `next <url>`.
    pub requests: Vec<String>,
}

impl ScriptedSource {
    pub fn new(pages: Vec<SearchPage>) -> Self {
        Self {
            pages: pages.into(),
            requests: Vec::new(),
        }
    }

    fn pop(&mut self) -> Result<SearchPage> {
        self.pages
            .pop_front()
            .ok_or_else(|| HeritageError::Api("no scripted page left".to_string()))
    }
}

impl PageSource for ScriptedSource {
    fn search(&mut self, url: &str, query: &str) -> Result<SearchPage> {
        self.requests.push(format!("search {} q={}", url, query));
        self.pop()
    }

    fn next(&mut self, url: &str) -> Result<SearchPage> {
        self.requests.push(format!("next {}", url));
        self.pop()
    }
}

/// A card record shaped like a Scryfall card object.
pub fn card(name: &str) -> CardRecord {
    serde_json::from_value(serde_json::json!({
        "object": "card",
        "name": name,
        "lang": "en",
        "set_type": "expansion",
        "digital": false,
        "legalities": { "commander": "legal" }
    }))
    .unwrap()
}

pub fn cards(names: &[&str]) -> Vec<CardRecord> {
    names.iter().map(|n| card(n)).collect()
}

pub fn page(names: &[&str], next_page: Option<&str>, total_cards: u64) -> SearchPage {
    SearchPage {
        data: cards(names),
        has_more: next_page.is_some(),
        next_page: next_page.map(str::to_string),
        total_cards,
    }
}

/// Write a decklist into `dir` and return its path.
pub fn write_deck(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("deck.txt");
    fs::write(&path, content).unwrap();
    path
}

/// A plain HTTP/1.1 server on a local port that answers one canned response
/// per connection.
pub struct LocalServer {
    listener: TcpListener,
    pub base_url: String,
}

impl LocalServer {
    pub fn bind() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        Self { listener, base_url }
    }

    /// Answer `responses` (status, JSON body) in order, then hand back the
    /// raw request heads that were received.
    pub fn respond(self, responses: Vec<(u16, String)>) -> JoinHandle<Vec<String>> {
        thread::spawn(move || {
            let mut requests = Vec::new();
            for (status, body) in responses {
                let (mut stream, _) = self.listener.accept().unwrap();
                requests.push(read_request_head(&mut stream));
                let reason = if status == 200 { "OK" } else { "Error" };
                write!(
                    stream,
                    "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    reason,
                    body.len(),
                    body
                )
                .unwrap();
                stream.flush().unwrap();
            }
            requests
        })
    }
}

fn read_request_head(stream: &mut TcpStream) -> String {
    let mut head = Vec::new();
    let mut byte = [0u8; 1];
    while !head.ends_with(b"\r\n\r\n") {
        match stream.read(&mut byte) {
            Ok(1) => head.push(byte[0]),
            _ => break,
        }
    }
    String::from_utf8_lossy(&head).into_owned()
}

/// The first line of a raw request head, e.g. `GET /path HTTP/1.1`.
pub fn request_line(head: &str) -> &str {
    head.lines().next().unwrap_or("")
}

/// Serialize a search page as the API would send it.
pub fn page_body(page: &SearchPage) -> String {
    serde_json::to_string(page).unwrap()
}
