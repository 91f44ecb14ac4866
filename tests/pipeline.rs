use anyhow::{bail, Result};
use assert_fs::{prelude::*, TempDir};
use blockmerge::fetch::{HttpGet, Response};
use blockmerge::report::Reporter;
use blockmerge::sources::Source;
use reqwest::StatusCode;
use std::cell::RefCell;

const EASYLIST: &str = "\
# Easylist, converted to hosts
#
# Updated: today
ads.shared.example
easy-and-w3.example
only-easy.example
";

const ADAWAY: &str = "\
# AdAway default blocklist
127.0.0.1 localhost
::1 localhost
127.0.0.1 ads.shared.example
127.0.0.1 ada-and-w3.example
0.0.0.0 wrong-address.example
";

const DISCONNECT: &str = "\
# Title: Disconnect simple ad list
# Expires: 1 day
#
w3-and-disco.example
ads.shared.example
ab.d
";

const W3KBL: &str = "\
# W3KBL
# maintained by hand
#
#
#
#
easy-and-w3.example   # since 2017
ada-and-w3.example
w3-and-disco.example\tsome note
ab.d
";

/// Serves the lists above, and records which URLs were requested
struct FakeUpstream {
    failing: Option<Source>,
    requested: RefCell<Vec<String>>,
}

impl FakeUpstream {
    fn new() -> Self {
        FakeUpstream { failing: None, requested: RefCell::new(Vec::new()) }
    }
    fn failing_at(source: Source) -> Self {
        FakeUpstream { failing: Some(source), ..FakeUpstream::new() }
    }
}

impl HttpGet for FakeUpstream {
    fn get(&self, url: &str) -> Result<Response> {
        self.requested.borrow_mut().push(url.to_string());
        let Some(source) = Source::ALL.into_iter().find(|s| s.url() == url) else {
            bail!("unexpected URL {url}");
        };
        if self.failing == Some(source) {
            return Ok(Response { status: StatusCode::SERVICE_UNAVAILABLE, body: Vec::new() });
        }
        let body = match source {
            Source::Easylist => EASYLIST,
            Source::Adaway => ADAWAY,
            Source::Disconnect => DISCONNECT,
            Source::W3kbl => W3KBL,
        };
        Ok(Response { status: StatusCode::OK, body: body.as_bytes().to_vec() })
    }
}

fn expected_output() -> String {
    let mut rules: Vec<&str> = blockmerge::combine::CUSTOM_RULES.to_vec();
    rules.extend([
        "ada-and-w3.example",
        "ads.shared.example",
        "easy-and-w3.example",
        "w3-and-disco.example",
    ]);
    rules.sort_unstable();
    let mut expected = String::from("# Generated by blockmerge\n");
    for rule in rules {
        expected.push_str(rule);
        expected.push('\n');
    }
    expected.push('\n');
    expected
}

#[test]
fn writes_the_combined_list_to_the_requested_path() {
    let temp = TempDir::new().unwrap();
    let target = temp.child("lists").child("bad_hosts.txt");
    temp.child("lists").create_dir_all().unwrap();
    let upstream = FakeUpstream::new();
    let mut report = Reporter::new(Vec::new());

    let written = blockmerge::update(&upstream, target.path(), &mut report).unwrap();

    target.assert(expected_output().as_str());
    temp.child("blocklist.txt").assert(predicates::path::missing());
    assert_eq!(written, blockmerge::combine::CUSTOM_RULES.len() + 4);
}

#[test]
fn sources_are_fetched_once_each_in_order() {
    let temp = TempDir::new().unwrap();
    let upstream = FakeUpstream::new();
    let mut report = Reporter::new(Vec::new());

    blockmerge::update(&upstream, temp.child("out.txt").path(), &mut report).unwrap();

    let expected: Vec<String> = Source::ALL.iter().map(|s| s.url().to_string()).collect();
    assert_eq!(*upstream.requested.borrow(), expected);
}

#[test]
fn progress_names_every_source_and_the_output() {
    let temp = TempDir::new().unwrap();
    let target = temp.child("out.txt");
    let mut report = Reporter::new(Vec::new());

    blockmerge::update(&FakeUpstream::new(), target.path(), &mut report).unwrap();

    let raw = String::from_utf8(report.into_inner()).unwrap();
    let text = anstream::adapter::strip_str(&raw).to_string();
    assert!(text.contains("200 OK https://v.firebog.net/hosts/Easylist.txt\n"), "{text}");
    assert!(text.contains("EASYLIST found hosts: 3\n"), "{text}");
    assert!(text.contains("ADAWAY found hosts: 3\n"), "{text}");
    assert!(text.contains("DISCONNECT found hosts: 3\n"), "{text}");
    assert!(text.contains("W3KBL found hosts: 4\n"), "{text}");
    let last = text.lines().last().unwrap();
    assert!(last.starts_with(&format!("Written {} hosts in ", 13)), "{last}");
    assert!(last.ends_with("out.txt"), "{last}");
}

#[test]
fn a_failing_source_leaves_the_output_untouched() {
    let temp = TempDir::new().unwrap();
    let target = temp.child("blocklist.txt");
    target.write_str("previous run\n").unwrap();
    let upstream = FakeUpstream::failing_at(Source::Disconnect);
    let mut report = Reporter::new(Vec::new());

    let err = blockmerge::update(&upstream, target.path(), &mut report).err().unwrap();

    assert!(err.to_string().contains("503"), "{err}");
    target.assert("previous run\n");
    assert_eq!(upstream.requested.borrow().len(), 3);
}
