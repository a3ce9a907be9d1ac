use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::sniff::ValueKind;

#[derive(Parser, Debug)]
#[command(name = "jsniff")]
#[command(about = "Sniff the kind of each value in a JSON/JSONL stream without parsing it")]
#[command(version)]
pub struct Cli {
    /// JSON or JSONL file path (reads from stdin if omitted)
    pub file: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub output: OutputFormat,

    /// Table style
    #[arg(long, value_enum, default_value = "rounded")]
    pub style: TableStyle,

    /// Only report these kinds (comma-separated: null,bool,number,string,array,object,unknown)
    #[arg(short, long, value_delimiter = ',')]
    pub kind: Option<Vec<ValueKind>>,

    /// Print per-kind counts instead of one row per value
    #[arg(long)]
    pub summary: bool,

    /// Treat the input as JSON lines even if it starts with '['
    #[arg(long)]
    pub lines: bool,

    /// Exit on unrecognized value (default: true)
    #[arg(long, default_value = "true", action = clap::ArgAction::Set)]
    pub strict: bool,

    /// Skip unrecognized values with warning
    #[arg(long)]
    pub lenient: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Table,
    Jsonl,
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TableStyle {
    Ascii,
    #[default]
    Rounded,
    Markdown,
    Plain,
}

impl Cli {
    pub fn is_strict(&self) -> bool {
        // Honor both flags: strict mode requires --strict=true (default) AND no --lenient
        self.strict && !self.lenient
    }

    pub fn wants(&self, kind: ValueKind) -> bool {
        self.kind.as_ref().map_or(true, |kinds| kinds.contains(&kind))
    }
}
