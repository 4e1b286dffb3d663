//! Human-readable facet summary.

use std::io::{self, Write};

use chrono::{DateTime, Local, SecondsFormat, TimeZone};

use crate::search::{Facet, SearchResponse};

/// Facets included in the summary, in print order.
pub fn summary_facets(resp: &SearchResponse) -> [&Facet; 5] {
    let facets = &resp.facets;
    [
        &facets.session_type,
        &facets.level,
        &facets.format,
        &facets.products,
        &facets.learning_path,
    ]
}

/// Write the summary report stamped with the current local time.
pub fn print_summary<W: Write>(resp: &SearchResponse, out: &mut W) -> io::Result<()> {
    write_summary(resp, &Local::now(), out)
}

/// Write the summary report stamped with `ran_at`.
pub fn write_summary<W: Write, Tz: TimeZone>(
    resp: &SearchResponse,
    ran_at: &DateTime<Tz>,
    out: &mut W,
) -> io::Result<()>
where
    Tz::Offset: std::fmt::Display,
{
    writeln!(out, "# Search Results Summary")?;
    writeln!(
        out,
        "##### Ran at: {}",
        ran_at.to_rfc3339_opts(SecondsFormat::Secs, true)
    )?;
    writeln!(out, "-----------------------")?;
    writeln!(out, "#### Received {} results in total", resp.total)?;
    writeln!(out)?;

    for facet in summary_facets(resp) {
        write_facet(facet, out)?;
    }

    Ok(())
}

/// Write one facet block: title, rule, then one line per filter in server order.
pub fn write_facet<W: Write>(facet: &Facet, out: &mut W) -> io::Result<()> {
    let title = format!(
        "{}: {} Categories",
        facet.facet_name.to_uppercase(),
        facet.filters.len()
    );
    writeln!(out, "{}", title)?;
    writeln!(out, "{}", "-".repeat(title.chars().count()))?;

    for (i, filter) in facet.filters.iter().enumerate() {
        writeln!(out, "{}. {}: {}", i, filter.value, filter.count)?;
    }
    writeln!(out)
}
