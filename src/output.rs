//! Output formatting for CLI results

use crate::index::build::{Library, LoadStats};
use crate::index::types::KeywordSet;
use serde::Serialize;
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// A fact together with the keyword set it was served from
#[derive(Debug, Clone, Serialize)]
pub struct FactAnswer<'a> {
    pub keywords: &'a KeywordSet,
    pub fact: &'a str,
    /// Where a keyword was found in free-text input
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched: Option<MatchedText<'a>>,
}

/// Search text with the byte range of the keyword that matched
#[derive(Debug, Clone, Copy, Serialize)]
pub struct MatchedText<'a> {
    pub text: &'a str,
    pub start: usize,
    pub end: usize,
}

/// One row of `facts list`
#[derive(Debug, Clone, Serialize)]
pub struct KeywordSummary<'a> {
    pub keywords: &'a KeywordSet,
    pub facts: usize,
}

fn stdout(color: bool) -> StandardStream {
    let choice = if color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    StandardStream::stdout(choice)
}

/// Print a single fact, prefixed by its keywords
pub fn print_answer(answer: &FactAnswer<'_>, color: bool) -> io::Result<()> {
    let mut out = stdout(color);
    write_answer(&mut out, answer)
}

fn write_answer<W: WriteColor>(out: &mut W, answer: &FactAnswer<'_>) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)).set_bold(true))?;
    write!(out, "[{}]", answer.keywords)?;
    out.reset()?;
    writeln!(out, " {}", answer.fact)?;

    if let Some(matched) = answer.matched {
        write!(out, "  matched: ")?;
        write_highlighted(out, matched)?;
    }
    Ok(())
}

/// Write the search text with the matched keyword highlighted
fn write_highlighted<W: WriteColor>(out: &mut W, matched: MatchedText<'_>) -> io::Result<()> {
    let text = matched.text;
    let start = matched.start.min(text.len());
    let end = matched.end.clamp(start, text.len());

    match (text.get(..start), text.get(start..end), text.get(end..)) {
        (Some(before), Some(hit), Some(after)) => {
            write!(out, "{}", before)?;
            out.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
            write!(out, "{}", hit)?;
            out.reset()?;
            writeln!(out, "{}", after)
        }
        // Span not on a char boundary
        _ => writeln!(out, "{}", text),
    }
}

/// Summaries for every keyword set in load order
pub fn keyword_summaries(library: &Library) -> Vec<KeywordSummary<'_>> {
    library
        .keyword_sets()
        .iter()
        .map(|keywords| KeywordSummary {
            keywords,
            facts: library.facts_for(keywords).map_or(0, |f| f.len()),
        })
        .collect()
}

/// Print every keyword set with its fact count
pub fn print_keyword_sets(summaries: &[KeywordSummary<'_>], color: bool) -> io::Result<()> {
    let mut out = stdout(color);
    for summary in summaries {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
        write!(out, "{:>4}", summary.facts)?;
        out.reset()?;
        writeln!(out, "  {}", summary.keywords)?;
    }
    Ok(())
}

/// Print load statistics
pub fn print_stats(library: &Library, stats: &LoadStats) -> io::Result<()> {
    let mut out = io::stdout().lock();
    writeln!(out, "Facts directory: {}", library.root().display())?;
    writeln!(out, "  Entries:        {}", stats.entries)?;
    writeln!(out, "  Files listed:   {}", stats.files_listed)?;
    writeln!(out, "  Files loaded:   {}", stats.files_loaded)?;
    writeln!(out, "  Files skipped:  {}", stats.files_skipped)?;
    writeln!(out, "  Distinct keys:  {}", stats.keys)?;
    Ok(())
}

/// Print any serializable value as pretty JSON
pub fn print_json<T: Serialize>(value: &T) -> io::Result<()> {
    let mut out = io::stdout().lock();
    serde_json::to_writer_pretty(&mut out, value)?;
    writeln!(out)
}
