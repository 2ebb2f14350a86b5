// tests/cli_output.rs
//
// CLI rendering end to end with a canned payload.
//
use clap::Parser;
use serde_json::{Value, json};

use cric_dash::cli::{Cli, run_with};
use cric_dash::error::TransportFailure;
use cric_dash::fetch::Fetcher;
use cric_dash::query::ResourceQuery;

struct Canned(Value);

impl Fetcher for Canned {
    fn fetch(&self, _query: &ResourceQuery) -> Result<Value, TransportFailure> {
        Ok(self.0.clone())
    }
}

fn records() -> Canned {
    Canned(json!({
        "headers": ["Player", "Runs"],
        "values": [ { "values": ["11", "Tendulkar, S", "15921"] } ]
    }))
}

fn run(args: &[&str], fetcher: &Canned) -> String {
    let cli = Cli::try_parse_from(args).unwrap();
    let mut out = Vec::new();
    run_with(fetcher, &cli, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn csv_output_quotes_and_ranks() {
    let out = run(&["cric-dash", "records", "--output", "csv"], &records());
    assert_eq!(out, "Rank,Player,Runs\n1,\"Tendulkar, S\",15921\n");
}

#[test]
fn tsv_without_headers() {
    let out = run(&["cric-dash", "--output", "tsv", "--no-headers", "records"], &records());
    assert_eq!(out, "1\tTendulkar, S\t15921\n");
}

#[test]
fn text_table_is_the_default() {
    let out = run(&["cric-dash", "records"], &records());
    assert!(out.contains("Tendulkar, S"));
    assert!(out.contains("Rank"));
}

#[test]
fn malformed_payload_surfaces_as_error() {
    let cli = Cli::try_parse_from(["cric-dash", "series"]).unwrap();
    let err = run_with(&Canned(json!({ "nope": [] })), &cli, Vec::new()).unwrap_err();
    assert!(err.to_string().contains("series"), "{err}");
}
