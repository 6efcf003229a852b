// tests/common/mod.rs
//
// Shared helpers: a one-shot local HTTP server and canned adapters.
#![allow(dead_code)]

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::Duration;

use subject_lookup::error::QueryFailure;
use subject_lookup::lookup::Lookup;
use subject_lookup::record::{Field, Source, SuggestionRecord};

/// Serve exactly one HTTP response on 127.0.0.1 and hand back the request line.
/// Returns the base URL and a receiver for the request head.
pub fn serve_once(status: &str, content_type: &str, body: &str) -> (String, Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = mpsc::channel();

    let response = format!(
        "HTTP/1.1 {status}\r\nContent-Type: {content_type}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );

    thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            let head = read_head(&mut stream);
            let _ = tx.send(head);
            let _ = stream.write_all(response.as_bytes());
            let _ = stream.flush();
        }
    });

    (format!("http://{addr}/suggest"), rx)
}

/// Accept one connection and never answer (until the test process ends).
pub fn serve_silence() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            let _ = read_head(&mut stream);
            thread::sleep(Duration::from_secs(30));
        }
    });
    format!("http://{addr}/suggest")
}

fn read_head(stream: &mut std::net::TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut chunk) {
            Ok(0) | Err(_) => break,
            Ok(n) => buf.extend_from_slice(&chunk[..n]),
        }
    }
    String::from_utf8_lossy(&buf).into_owned()
}

/* ---------------- Canned adapters ---------------- */

/// Adapter answering from a fixed table: `(term, labels)`; unknown terms fail.
pub struct Canned {
    pub source: Source,
    pub with_uri: bool,
    pub answers: Vec<(&'static str, Vec<&'static str>)>,
}

impl Canned {
    pub fn fast(answers: Vec<(&'static str, Vec<&'static str>)>) -> Self {
        Self { source: Source::Fast, with_uri: false, answers }
    }

    pub fn lcsh(answers: Vec<(&'static str, Vec<&'static str>)>) -> Self {
        Self { source: Source::Lcsh, with_uri: true, answers }
    }
}

impl Lookup for Canned {
    fn source(&self) -> Source {
        self.source
    }

    fn limit(&self) -> usize {
        3
    }

    fn slot_fields(&self) -> &'static [Field] {
        if self.with_uri {
            &[Field::Label, Field::Uri]
        } else {
            &[Field::Label]
        }
    }

    fn query(&self, term: &str) -> Result<Vec<SuggestionRecord>, QueryFailure> {
        let (_, labels) = self
            .answers
            .iter()
            .find(|(t, _)| *t == term)
            .ok_or_else(|| QueryFailure::Shape(format!("no canned answer for {term}")))?;

        Ok(labels
            .iter()
            .enumerate()
            .map(|(i, l)| {
                let r = SuggestionRecord::new(self.source, term).with_label(Some(l.to_string()));
                if self.with_uri {
                    r.with_uri(Some(format!("http://id.loc.gov/{term}/{i}")))
                        .with_kind(Some("LCSH".into()))
                } else {
                    r
                }
            })
            .collect())
    }
}

pub fn terms(list: &[&str]) -> Vec<String> {
    list.iter().map(|t| t.to_string()).collect()
}
