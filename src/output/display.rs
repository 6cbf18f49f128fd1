//! Display functions for command results

use super::formatters::{format_move, format_path, format_tiles, group_by_length};
use crate::commands::{AnagramReport, BitesReport, FilterReport, GridReport};
use crate::solver::Scored;
use colored::Colorize;

fn print_header(title: &str, subject: &str) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        title.bright_cyan().bold(),
        subject.bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());
}

fn print_totals(count: usize, total_score: u32) {
    println!(
        "\n{} words, {} points",
        count.to_string().bright_cyan().bold(),
        total_score.to_string().bright_yellow().bold()
    );
}

fn print_length_heading<T: Scored>(length: usize, words: &[&T]) {
    let points = words.first().map_or(0, |w| w.score());
    println!(
        "\n{}",
        format!("{length} letters ({points} pts each)").bright_cyan().bold()
    );
}

/// Print a solved Word Hunt grid
pub fn print_grid_report(report: &GridReport, verbose: bool) {
    print_header("WORD HUNT", report.shape.identifier());
    println!("{}", report.grid);

    for (length, words) in group_by_length(&report.words) {
        print_length_heading(length, &words);
        for word in words {
            if verbose {
                let padded = format!("{:<16}", word.word);
                println!("  {} {}", padded.bright_white(), format_path(&word.path));
            } else {
                println!("  {}", word.word.bright_white());
            }
        }
    }

    println!("\n{}", "Play order:".bright_cyan().bold());
    let order: Vec<&str> = report.words.iter().map(|w| w.word.as_str()).collect();
    println!("  {}", order.join(", "));
    print_totals(report.words.len(), report.total_score);
}

/// Print a solved anagram board
pub fn print_anagram_report(report: &AnagramReport, verbose: bool) {
    print_header("ANAGRAMS", &report.bag.to_string());

    for (length, words) in group_by_length(&report.words) {
        print_length_heading(length, &words);
        for word in words {
            if verbose {
                let padded = format!("{:<16}", word.word);
                println!("  {} tiles {}", padded.bright_white(), format_tiles(&word.tiles));
            } else {
                println!("  {}", word.word.bright_white());
            }
        }
    }

    print_totals(report.words.len(), report.total_score);
}

/// Print a solved Word Bites board and its drag plans
pub fn print_bites_report(report: &BitesReport, verbose: bool) {
    print_header(
        "WORD BITES",
        &format!("{}x{}", report.board.rows(), report.board.cols()),
    );
    println!("{}", report.board);

    for block in &report.rejected {
        println!("{} block {block} did not fit", "⚠".yellow());
    }

    for (i, planned) in report.moves.iter().enumerate() {
        println!(
            "\n{}. {} {} {}",
            (i + 1).to_string().bright_black(),
            planned.word.bright_white().bold(),
            planned.placement.to_string().bright_black(),
            format!("+{}", planned.score).green()
        );
        let drags: Vec<_> = planned.moves.iter().filter(|m| !m.is_noop()).collect();
        if drags.is_empty() {
            println!("   already in place");
        }
        for drag in drags {
            println!("   {}", format_move(drag));
        }
    }

    print_totals(report.moves.len(), report.total_score);
    if verbose {
        println!("Solved in {:.2}s", report.duration.as_secs_f64());
    }
}

/// Print word list filtering statistics
pub fn print_filter_report(report: &FilterReport) {
    print_header("FILTER", &report.input.display().to_string());

    let stats = &report.stats;
    println!("\n   Original words:   {}", stats.original);
    println!("   Too short:        {}", stats.too_short.to_string().yellow());
    println!("   Too long:         {}", stats.too_long.to_string().yellow());
    println!("   Removed:          {}", stats.removed());
    println!(
        "   Kept:             {}",
        stats.kept.to_string().green().bold()
    );
    println!("\n✅ Wrote {}", report.output.display());
}
