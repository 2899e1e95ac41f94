use std::io::Write;

use anyhow::Result;
use colored::Colorize;

use crate::domain::{SimpleScore, Strength};
use crate::rating::RankedItem;

pub fn write_progress<W: Write>(out: &mut W, resolved: usize, total: usize) -> Result<()> {
    writeln!(out, "{}", format!("Progress: {} / {}", resolved.min(total), total).dimmed())?;
    Ok(())
}

pub fn write_simple_ranking<W: Write>(out: &mut W, ranked: &[RankedItem<SimpleScore>]) -> Result<()> {
    writeln!(out, "{}", "Ranking by simple score".bold())?;
    for (position, row) in ranked.iter().enumerate() {
        writeln!(out, "{:>3}. {} ({})", position + 1, row.name, row.value)?;
    }
    Ok(())
}

pub fn write_strength_ranking<W: Write>(
    out: &mut W,
    ranked: &[RankedItem<Strength>],
    scores: &[SimpleScore],
) -> Result<()> {
    writeln!(out, "{}", "Ranking by Bradley-Terry strength".bold())?;
    for (position, row) in ranked.iter().enumerate() {
        writeln!(
            out,
            "{:>3}. {} {} (simple: {})",
            position + 1,
            row.name,
            format!("{:.3}", row.value).cyan(),
            scores[row.index]
        )?;
    }
    Ok(())
}
