// crates/engine/src/report.rs
use crate::Corpus;
use crate::config::Config;
use crate::error::Result;
use crate::stats::{Stats, Totals, Unit, View};
use corpus_count_shared_kernel::{Magnitude, UnitCount};
use std::io::Write;

/// Ranked entries of one view, truncated to `top` when `top > 0`.
pub fn rank(stats: &Stats, view: View, top: usize) -> Vec<Unit> {
    let mut units = stats.view(view).ranked();
    if top > 0 {
        units.truncate(top);
    }
    units
}

/// Writes one dimension as a pipe table, one column per view.
///
/// Percentages in each column are relative to that view's own total.
///
/// # Errors
/// Propagates write failures on `w`.
pub fn render<W: Write>(stats: &Stats, title: &str, top: usize, w: &mut W) -> Result<()> {
    let totals = stats.totals();
    let columns: Vec<Vec<Unit>> = View::ALL.iter().map(|&v| rank(stats, v, top)).collect();
    let longest = columns.iter().map(Vec::len).max().unwrap_or(0);

    writeln!(w, "{title}")?;
    writeln!(w, "{}", header_row(&totals))?;
    writeln!(w, "|---|---|---|---|---|")?;

    for i in 0..longest {
        let mut row = format!("| {i:2} ");
        for (view, column) in View::ALL.iter().zip(&columns) {
            row.push_str(&unit_cell(column.get(i), totals.of(*view)));
        }
        row.push('|');
        writeln!(w, "{row}")?;
    }

    Ok(())
}

fn header_row(totals: &Totals) -> String {
    let mut row = String::from("|  ");
    for view in View::ALL {
        row.push_str(&format!(
            "| {} ({}) ",
            view.label(),
            Magnitude::from(totals.of(view))
        ));
    }
    row.push('|');
    row
}

fn unit_cell(unit: Option<&Unit>, total: UnitCount) -> String {
    match unit {
        None => "|  ".to_string(),
        Some(u) => format!(
            "| {:>5} ({:>6}, {}) ",
            u.key,
            Magnitude::from(u.count),
            UnitCount::new(u.count).share_of(total)
        ),
    }
}

/// Renders the words dimension.
///
/// # Errors
/// Propagates write failures on `w`.
pub fn words<W: Write>(stats: &Stats, top: usize, w: &mut W) -> Result<()> {
    render(stats, "words", top, w)
}

/// Renders the letters dimension.
///
/// # Errors
/// Propagates write failures on `w`.
pub fn letters<W: Write>(stats: &Stats, top: usize, w: &mut W) -> Result<()> {
    render(stats, "letters", top, w)
}

/// Words then letters, separated by a spacer line.
///
/// # Errors
/// Propagates write failures on `w`.
pub fn write_report<W: Write>(corpus: &Corpus, config: &Config, w: &mut W) -> Result<()> {
    words(corpus.words(), config.top_words, w)?;
    writeln!(w, " ")?;
    letters(corpus.letters(), config.top_letters, w)?;
    w.flush()?;
    Ok(())
}
