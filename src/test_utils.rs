use std::io::{BufRead, BufReader, Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

/// One-shot stand-in for the collector service. Accepts at most one HTTP
/// request, answers it with a fixed status and keeps the raw request text
/// for assertions.
pub struct StubCollector {
    pub url: String,
    hits: Arc<AtomicUsize>,
    handle: thread::JoinHandle<Option<String>>,
}

impl StubCollector {
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    /// Waits for the serving thread and returns the captured request text.
    pub fn finish(self) -> Option<String> {
        self.handle.join().expect("stub collector thread panicked")
    }
}

pub fn spawn_collector(status: u16, reason: &'static str) -> StubCollector {
    let listener = TcpListener::bind("127.0.0.1:0").expect("could not bind stub collector");
    let addr = listener
        .local_addr()
        .expect("stub collector has no local addr");
    let hits = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&hits);

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().ok()?;
        seen.fetch_add(1, Ordering::SeqCst);

        let request = read_request(&mut stream)?;
        let body = "OK";
        let response = format!(
            "HTTP/1.1 {status} {reason}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        stream.write_all(response.as_bytes()).ok()?;
        Some(request)
    });

    StubCollector {
        url: format!("http://{addr}"),
        hits,
        handle,
    }
}

fn read_request(stream: &mut TcpStream) -> Option<String> {
    let mut reader = BufReader::new(stream.try_clone().ok()?);

    let mut head = String::new();
    loop {
        let mut line = String::new();
        if reader.read_line(&mut line).ok()? == 0 {
            return Some(head);
        }
        let end_of_head = line == "\r\n";
        head.push_str(&line);
        if end_of_head {
            break;
        }
    }

    let mut content_length = 0;
    for line in head.lines() {
        if let Some((name, value)) = line.split_once(':') {
            if name.eq_ignore_ascii_case("content-length") {
                content_length = value.trim().parse().unwrap_or(0);
            }
        }
    }

    let mut body = vec![0u8; content_length];
    reader.read_exact(&mut body).ok()?;
    Some(format!("{head}{}", String::from_utf8_lossy(&body)))
}
