//! Scripted stand-in for the fritz box used by the unit tests.

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};

use crate::error::Result;
use crate::transport::Transport;

/// Replays canned bodies keyed by request. Keys are `login`, `login:response`,
/// `<switchcmd>` and `<switchcmd>:<ain>`. Every request is recorded as a full url.
#[derive(Default)]
pub(crate) struct FakeGateway {
    answers: RefCell<HashMap<String, VecDeque<String>>>,
    requests: RefCell<Vec<String>>,
}

impl FakeGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues `body` as the next answer for `key`. The last queued answer
    /// for a key is repeated once the queue would run dry.
    pub fn answer(self, key: &str, body: impl ToString) -> Self {
        self.answers
            .borrow_mut()
            .entry(key.to_string())
            .or_default()
            .push_back(body.to_string());
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }

    pub fn switch_commands(&self) -> Vec<String> {
        self.requests()
            .into_iter()
            .filter(|url| url.contains("homeautoswitch.lua"))
            .collect()
    }

    fn key(url: &str, query: &[(&str, &str)]) -> String {
        let param = |name: &str| query.iter().find(|(k, _)| *k == name).map(|(_, v)| *v);
        if url.ends_with("login_sid.lua") {
            return match param("response") {
                Some(_) => "login:response".to_string(),
                None => "login".to_string(),
            };
        }
        match (param("switchcmd"), param("ain")) {
            (Some(cmd), Some(ain)) => format!("{}:{}", cmd, ain),
            (Some(cmd), None) => cmd.to_string(),
            _ => url.to_string(),
        }
    }
}

impl Transport for FakeGateway {
    fn get(&self, url: &str, query: &[(&str, &str)]) -> Result<String> {
        let recorded = if query.is_empty() {
            url.to_string()
        } else {
            let params: Vec<String> = query.iter().map(|(k, v)| format!("{}={}", k, v)).collect();
            format!("{}?{}", url, params.join("&"))
        };
        self.requests.borrow_mut().push(recorded);

        let key = Self::key(url, query);
        let mut answers = self.answers.borrow_mut();
        let queue = match answers.get_mut(&key) {
            Some(queue) => queue,
            None => panic!("unexpected request: {}", key),
        };
        let body = if queue.len() > 1 {
            queue.pop_front()
        } else {
            queue.front().cloned()
        };
        Ok(body.unwrap_or_default())
    }
}

pub(crate) fn session_xml(sid: &str, challenge: Option<&str>) -> String {
    let challenge = challenge
        .map(|challenge| format!("<Challenge>{}</Challenge>", challenge))
        .unwrap_or_default();
    format!(
        r#"<?xml version="1.0" encoding="utf-8"?><SessionInfo><SID>{}</SID>{}<BlockTime>0</BlockTime><Rights></Rights></SessionInfo>"#,
        sid, challenge
    )
}
