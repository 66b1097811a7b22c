// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use cb_core::{AiRealness, AiType, FilterCriteria, SentimentBucket};

use crate::help;

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

fn parse_ai_type(s: &str) -> Result<AiType, String> {
    s.parse().map_err(|e: cb_core::Error| e.to_string())
}

fn parse_realness(s: &str) -> Result<AiRealness, String> {
    s.parse().map_err(|e: cb_core::Error| e.to_string())
}

fn parse_bucket(s: &str) -> Result<SentimentBucket, String> {
    s.parse().map_err(|e: cb_core::Error| e.to_string())
}

#[derive(Parser)]
#[command(name = "cb")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "A shared corkboard of stories about AI at work")]
#[command(help_template = help::template())]
#[command(before_help = help::commands())]
#[command(styles = help::styles())]
pub struct Cli {
    /// Store server URL (overrides config.toml and CORKBOARD_URL)
    #[arg(long, global = true, value_name = "URL")]
    pub url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Board filters. Every filter given must match.
#[derive(Args, Clone, Debug, Default)]
pub struct FilterArgs {
    /// Only notes from this industry (exact match)
    #[arg(long)]
    pub industry: Option<String>,

    /// Only this kind of AI (generative, predictive, automation, conversational, unsure)
    #[arg(long = "ai-type", value_parser = parse_ai_type)]
    pub ai_type: Option<AiType>,

    /// Only this stage (using, possible, imagined)
    #[arg(long, value_parser = parse_realness)]
    pub realness: Option<AiRealness>,

    /// Only this mood (optimistic, neutral, pessimistic)
    #[arg(long, value_parser = parse_bucket)]
    pub sentiment: Option<SentimentBucket>,

    /// Case-insensitive text search over use case, author, industry and experience
    #[arg(long, short)]
    pub search: Option<String>,
}

impl FilterArgs {
    pub fn criteria(self) -> FilterCriteria {
        FilterCriteria {
            industry: self.industry,
            ai_type: self.ai_type,
            realness: self.realness,
            sentiment: self.sentiment,
            search: self.search,
        }
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// List notes on the board
    #[command(after_help = "\
Examples:
  cb list                          Every note, newest first
  cb list --industry Education     Notes from one industry
  cb list --sentiment optimistic   Only hopeful stories
  cb list -s invoices              Text search
  cb list --forest                 Oldest first, the way the forest grows")]
    List {
        #[command(flatten)]
        filters: FilterArgs,

        /// Order oldest first
        #[arg(long)]
        forest: bool,

        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Show a note with its comments
    Show {
        /// Note id or unique id prefix
        id: String,

        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Pin a new story to the board
    #[command(allow_negative_numbers = true)]
    New {
        /// How AI is (or could be) used
        use_case: String,

        /// Author name (defaults to your display name, then "Anonymous")
        #[arg(long, short)]
        author: Option<String>,

        #[arg(long)]
        profession: Option<String>,

        #[arg(long)]
        industry: Option<String>,

        #[arg(long)]
        region: Option<String>,

        /// What happened, in your words
        #[arg(long)]
        experience: Option<String>,

        /// Kind of AI (generative, predictive, automation, conversational, unsure)
        #[arg(long = "ai-type", value_parser = parse_ai_type)]
        ai_type: Option<AiType>,

        /// Stage (using, possible, imagined)
        #[arg(long, value_parser = parse_realness)]
        realness: Option<AiRealness>,

        /// How you feel about it, from -2 to 2
        #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(i32).range(-2..=2))]
        sentiment: i32,

        #[arg(long = "pain-points")]
        pain_points: Option<String>,

        /// Anything else
        #[arg(long)]
        thoughts: Option<String>,

        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Comment on a note
    Comment {
        /// Note id or unique id prefix
        id: String,

        /// Comment text
        text: String,

        /// Author name (defaults to your display name, then "Anonymous")
        #[arg(long, short)]
        author: Option<String>,
    },

    /// Drag a note by an offset in pixels
    #[command(allow_negative_numbers = true)]
    #[command(after_help = "\
Offsets smaller than the drag threshold (4px by default) on both axes count
as a click: the note is shown instead of moved.")]
    Move {
        /// Note id or unique id prefix
        id: String,

        /// Horizontal offset
        dx: f64,

        /// Vertical offset
        dy: f64,
    },

    /// Delete a note and its comments
    Delete {
        /// Note id or unique id prefix
        id: String,

        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },

    /// Follow the board, printing a summary for every snapshot
    Watch {
        /// Stop after this many snapshots
        #[arg(long)]
        count: Option<u64>,
    },

    /// Show board totals
    Stats {
        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Show or set your display name
    Name {
        /// New display name
        name: Option<String>,

        /// Forget the saved display name
        #[arg(long, conflicts_with = "name")]
        clear: bool,
    },

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
