//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! `*Params` mirror the clap surface (`--max-depth` as given, color as a
//! choice). The `From` impls resolve them into what the commands consume.

use std::path::PathBuf;

use clap::ArgMatches;
use curly_lib::DEFAULT_DEPTH_LIMIT;

use super::ColorChoice;
use crate::commands::ast::AstArgs;
use crate::commands::check::CheckArgs;
use crate::commands::fmt::FmtArgs;
use crate::commands::tokens::TokensArgs;

pub struct TokensParams {
    pub input: PathBuf,
    pub spans: bool,
    pub json: bool,
    pub color: ColorChoice,
}

impl TokensParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input: parse_input(m),
            spans: m.get_flag("spans"),
            json: m.get_flag("json"),
            color: parse_color(m),
        }
    }
}

impl From<TokensParams> for TokensArgs {
    fn from(p: TokensParams) -> Self {
        Self {
            input: p.input,
            spans: p.spans,
            json: p.json,
            color: p.color.should_colorize(),
        }
    }
}

pub struct AstParams {
    pub input: PathBuf,
    pub strict: bool,
    pub max_depth: Option<u32>,
    pub json: bool,
    pub color: ColorChoice,
}

impl AstParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input: parse_input(m),
            strict: m.get_flag("strict"),
            max_depth: m.get_one::<u32>("max_depth").copied(),
            json: m.get_flag("json"),
            color: parse_color(m),
        }
    }
}

impl From<AstParams> for AstArgs {
    fn from(p: AstParams) -> Self {
        Self {
            input: p.input,
            strict: p.strict,
            depth_limit: depth_limit(p.max_depth),
            json: p.json,
            color: p.color.should_colorize(),
        }
    }
}

pub struct FmtParams {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub strict: bool,
    pub max_depth: Option<u32>,
    pub color: ColorChoice,
}

impl FmtParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input: parse_input(m),
            output: m.get_one::<PathBuf>("output").cloned(),
            strict: m.get_flag("strict"),
            max_depth: m.get_one::<u32>("max_depth").copied(),
            color: parse_color(m),
        }
    }
}

impl From<FmtParams> for FmtArgs {
    fn from(p: FmtParams) -> Self {
        Self {
            input: p.input,
            output: p.output,
            strict: p.strict,
            depth_limit: depth_limit(p.max_depth),
            color: p.color.should_colorize(),
        }
    }
}

pub struct CheckParams {
    pub input: PathBuf,
    pub strict: bool,
    pub max_depth: Option<u32>,
    pub color: ColorChoice,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input: parse_input(m),
            strict: m.get_flag("strict"),
            max_depth: m.get_one::<u32>("max_depth").copied(),
            color: parse_color(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            input: p.input,
            strict: p.strict,
            depth_limit: depth_limit(p.max_depth),
            color: p.color.should_colorize(),
        }
    }
}

fn parse_input(m: &ArgMatches) -> PathBuf {
    m.get_one::<PathBuf>("input")
        .cloned()
        .unwrap_or_else(|| PathBuf::from("-"))
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}

/// `--max-depth 0` lifts the limit; no flag keeps the library default.
pub(super) fn depth_limit(max_depth: Option<u32>) -> Option<u32> {
    match max_depth {
        None => Some(DEFAULT_DEPTH_LIMIT),
        Some(0) => None,
        Some(n) => Some(n),
    }
}
