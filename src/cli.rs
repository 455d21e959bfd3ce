//! Command line handling.
//!
//! Thin wrapper over the models and processing layers: flag parsing, token
//! dispatch, filter mode and line printing live here. No address arithmetic
//! happens in this module.

use crate::models::{fmt_addr, parse_addr, reverse_bytes, Cidr, Notation, ParseError, Range};
use crate::output::{bracket_list, merge_result_json};
use crate::processing::{merge_all, range_to_cidrs};
use colored::Colorize;
use std::io::BufRead;
use std::str::FromStr;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const PKG_NAME: &str = env!("CARGO_PKG_NAME");

const HELP_STR: &str = r#"ipv4calc [-i | -x | -q] [-r] [<ip-address>...]
        Converts each <ip-address> to a different notation
        Options:
        --integer or -i
                Output as a decimal integer
        --hex or -x
                Output as a hexadecimal integer
        --ipv4 or -q
                Output as a dotted quad
        --reverse-bytes or -r
                Reverse the byte order

        If no ip-address arguments are given, input is read
        line by line from stdin and written to stdout (filter mode)

ipv4calc <ip-addr/prefix> | "<ip-start - ip-end>"
        An <ip-addr/prefix> subnet is converted to the address range
        it covers. A "start - end" range is converted to the minimal
        subnet which covers it; when that subnet over-covers, the
        exact block list is printed as well.

ipv4calc -m [--json] (<ip-addr/prefix> | <ip-range>)...
        Merges all the ranges/subnets and prints the minimal set of
        ranges and subnets that exactly covers them.

ipv4calc -h or ipv4calc --help
        displays this help

ipv4calc --version
        displays the program version"#;

/// Output selection and per-token behavior, built up by the flag loop.
#[derive(Debug, Copy, Clone, Default)]
pub struct Config {
    pub reverse_bytes: bool,
    pub filter_mode: bool,
    pub merge: bool,
    pub json: bool,
    pub output: Option<Notation>,
}

/// Entry point for the binary: interpret flags and tokens in order.
///
/// All failures are per-token and reported inline, so this never returns
/// an error; a batch with bad tokens still processes the good ones.
pub fn run<I: Iterator<Item = String>>(mut args: I) {
    args.next(); // Skip program name.
    let args: Vec<String> = args.collect();

    match args.first().map(String::as_str) {
        None => run_filter(Config::default()),
        Some("--version") => println!("{} - {}", PKG_NAME, VERSION),
        Some("--help") | Some("-h") => println!("{}", HELP_STR),
        Some(_) => process_args(&args),
    }
}

fn process_args(args: &[String]) {
    let mut config = Config::default();
    let mut pending: Vec<Range> = Vec::new();
    let mut saw_token = false;

    for a in args {
        match a.as_str() {
            "--reverse-bytes" | "-r" => config.reverse_bytes = true,
            "--integer" | "-i" => config.output = Some(Notation::Decimal),
            "--hex" | "-x" => config.output = Some(Notation::Hex),
            "--ipv4" | "-q" => config.output = Some(Notation::Quad),
            "--merge-ranges" | "-m" => config.merge = true,
            "--json" | "-j" => config.json = true,
            token => {
                saw_token = true;
                if config.merge {
                    if let Ok(range) = parse_span(token) {
                        pending.push(range);
                        continue;
                    }
                    // Not a range/subnet: summarize what was gathered so
                    // far, then fall back to plain conversion.
                    flush_merge(&mut pending, &config);
                }
                process_token(token, &config);
            }
        }
    }

    if !saw_token {
        run_filter(config);
        return;
    }
    if config.merge {
        flush_merge(&mut pending, &config);
    }
}

/// Filter mode: one token per stdin line, one output line per input line,
/// blank lines preserved.
fn run_filter(config: Config) {
    let config = Config {
        filter_mode: true,
        ..config
    };
    let input = std::io::stdin();
    for line in input.lock().lines() {
        match line {
            Ok(a) if a.is_empty() => println!(),
            Ok(a) => process_token(&a, &config),
            Err(_) => println!("Error reading input"),
        }
    }
}

/// Interpret a merge operand: `a/p` is a subnet (its host range), `a - b`
/// an explicit range.
fn parse_span(token: &str) -> Result<Range, ParseError> {
    if token.contains('/') {
        Ok(Cidr::from_str(token)?.host_range())
    } else if token.contains('-') {
        Range::from_str(token)
    } else {
        Err(ParseError::InvalidRange(token.to_string()))
    }
}

// Print the merged summary for the ranges gathered so far, then reset.
fn flush_merge(pending: &mut Vec<Range>, config: &Config) {
    if pending.is_empty() {
        return;
    }
    let result = merge_all(std::mem::take(pending));
    if config.json {
        match merge_result_json(&result) {
            Ok(doc) => println!("{}", doc),
            Err(e) => log::error!("JSON rendering failed: {}", e),
        }
    } else {
        println!("{}", bracket_list(&result.ranges));
        println!("{}", bracket_list(&result.cidrs));
    }
}

/// Convert one token and print its output line(s). Bad tokens are reported
/// and skipped; a batch never aborts.
pub fn process_token(token: &str, config: &Config) {
    if token.contains('/') {
        match Cidr::from_str(token) {
            Ok(cidr) => print_line(token, &cidr.host_range().to_string(), config),
            Err(e) => reject(token, &e),
        }
    } else if token.contains('-') {
        match Range::from_str(token) {
            Ok(range) => {
                let cidr = range.minimal_enclosing_cidr();
                print_line(token, &cidr.to_string(), config);
                if !range.is_exact_cidr() {
                    // The minimal subnet over-covers; show what it spans
                    // and the exact equivalent.
                    println!("# Note: {} covers {}", cidr, Range::from(&cidr));
                    println!("# exact: {}", bracket_list(&range_to_cidrs(&range)));
                }
            }
            Err(e) => reject(token, &e),
        }
    } else {
        match parse_addr(token) {
            Ok((addr, notation)) => {
                let addr = if config.reverse_bytes {
                    reverse_bytes(addr)
                } else {
                    addr
                };
                let output = fmt_addr(addr, output_notation(notation, config.output));
                print_line(token, &output, config);
            }
            Err(e) => reject(token, &e),
        }
    }
}

/// Pick the output notation: an explicit flag wins; otherwise dotted input
/// turns into hex and numeric input into dotted quad.
fn output_notation(input: Notation, selected: Option<Notation>) -> Notation {
    match selected {
        Some(notation) => notation,
        None => match input {
            Notation::Quad => Notation::Hex,
            _ => Notation::Quad,
        },
    }
}

fn print_line(input: &str, output: &str, config: &Config) {
    if config.filter_mode {
        println!("{}", output);
    } else {
        println!(
            "{}{} = {}",
            if config.reverse_bytes { "Reverse " } else { "" },
            input,
            output
        );
    }
}

fn reject(token: &str, err: &ParseError) {
    log::warn!(
        "{rejected} token {token}: {err}",
        rejected = "rejected".on_red(),
        token = token.on_blue(),
        err = err
    );
    // Historical message text, kept verbatim for output compatibility.
    println!("Invaid IP address: {}", token);
}
