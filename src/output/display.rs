//! Display functions for command results

use super::formatters::{feedback_badge, partition_bar};
use crate::commands::{AnalysisResult, BenchmarkResult, SolveResult};
use crate::core::Scale;
use colored::Colorize;

/// Print the result of solving a code
pub fn print_solve_result(result: &SolveResult, scale: Scale, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Solving: {}", result.secret.bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        println!(
            "\nTurn {}: {} {}",
            i + 1,
            step.guess,
            feedback_badge(step.feedback, scale)
        );

        if verbose {
            if let Some((before, after)) = step.candidates {
                println!("  Candidates: {before} → {after}");
                if after > 0 {
                    println!(
                        "  Reduction:  {:.1}x",
                        before as f64 / after as f64
                    );
                }
            }
            match step.worst_case {
                Some(worst) => println!("  Worst case: {worst} candidates"),
                None => println!("  Worst case: fixed opening"),
            }
        }
    }

    println!();
    if result.success() {
        println!(
            "{}",
            format!(
                "✅ Solved in {} turns! ({:.2}s)",
                result.steps.len(),
                result.duration.as_secs_f64()
            )
            .green()
            .bold()
        );
    } else {
        println!("{}", format!("❌ Not solved: {}", result.outcome).red().bold());
    }
}

/// Print the result of probe analysis
pub fn print_analysis_result(result: &AnalysisResult, scale: Scale) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "PARTITION ANALYSIS:".bright_cyan().bold(),
        result.code.to_string().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 Against all {} possible codes:", result.total_candidates);
    for &(feedback, size) in &result.partitions {
        let bar = partition_bar(size, result.worst_case, 30);
        let line = format!("   {:<12} [{bar}] {size:6}", feedback_badge(feedback, scale));
        if size == result.worst_case {
            println!("{}", line.yellow());
        } else {
            println!("{line}");
        }
    }

    println!(
        "\n   Worst case:  {}",
        format!("{} candidates remain", result.worst_case).bright_yellow()
    );
    println!(
        "   Expected:    {:.1} candidates remain",
        result.expected_remaining
    );
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {}", result.total_games);
    if result.total_games > 0 {
        println!(
            "   Solved:           {} {}",
            result.solved,
            format!(
                "({:.1}%)",
                result.solved as f64 / result.total_games as f64 * 100.0
            )
            .green()
        );
    }
    println!(
        "   Average turns:    {}",
        format!("{:.3}", result.average_turns).bright_yellow().bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_turns).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_turns).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let max_count = result.distribution.values().copied().max().unwrap_or(1);
    for (&turns, &count) in &result.distribution {
        let pct = count as f64 / result.solved.max(1) as f64 * 100.0;
        let bar_len = (count * 40 / max_count).max(usize::from(count > 0));
        let bar = format!(
            "{}{}",
            "█".repeat(bar_len).green(),
            "░".repeat(40_usize.saturating_sub(bar_len)).bright_black()
        );
        println!("   {turns:2}: {bar} {count:5} ({pct:5.1}%)");
    }

    if !result.failures.is_empty() {
        println!("\n😰 {}", "Not solved".red().bold());
        for (secret, outcome) in result.failures.iter().take(10) {
            println!("   {} ({outcome})", secret.to_string().yellow());
        }
        if result.failures.len() > 10 {
            println!("   ... and {} more", result.failures.len() - 10);
        }
    }
}
