//! Display functions for command results

use super::formatters::{create_progress_bar, format_pair, format_sequence};
use crate::commands::{AnalysisResult, BenchResult, SolveResult, VerifyResult};
use colored::Colorize;

/// Print the result of solving a sequence
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Input:  {}",
        format_sequence(&result.input).bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    println!("\nSorted: {}", format_sequence(&result.sorted));

    println!("\nBalanced pairs:");
    for (i, &pair) in result.pairing.pairs().iter().enumerate() {
        let line = format_pair(pair);
        if pair.0 + pair.1 == result.max_sum {
            println!("  Pair {}: {}  {}", i + 1, line.yellow(), "← maximum".red());
        } else {
            println!("  Pair {}: {line}", i + 1);
        }
    }

    if verbose {
        let sums = result.pairing.pair_sums();
        let min_sum = sums.iter().copied().min().unwrap_or(0);
        println!("\n  Pairs:       {}", result.pairing.len());
        println!("  Sum range:   {} → {}", min_sum, result.max_sum);
        println!("  Spread:      {}", result.max_sum - min_sum);
    }

    println!();
    println!(
        "{}",
        format!("✅ Minimized maximum pair sum: {}", result.max_sum)
            .green()
            .bold()
    );
}

/// Print the result of sequence analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "PAIR SUM ANALYSIS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 Across {} balanced pairs:", result.total_pairs);
    println!(
        "   Maximum sum:  {}",
        result.balanced_max.to_string().bright_yellow().bold()
    );
    println!("   Minimum sum:  {}", result.balanced_min);
    println!("   Spread:       {}", result.spread);

    println!("\n📈 {}", "Sum distribution:".bright_cyan().bold());
    let mut sums: Vec<(i64, usize)> = result
        .sum_distribution
        .iter()
        .map(|(&sum, &count)| (sum, count))
        .collect();
    sums.sort_unstable();

    let max_count = sums.iter().map(|&(_, c)| c).max().unwrap_or(1);
    for (sum, count) in sums {
        let bar = create_progress_bar(count as f64, max_count as f64, 30);
        println!("   {sum:6}: {} {count}", bar.green());
    }

    println!("\n⚖️  {}", "Versus adjacent pairing:".bright_cyan().bold());
    println!("   Adjacent maximum:  {}", result.adjacent_max);
    let savings = format!("{} lower", result.savings);
    println!(
        "   Balanced saves:    {}",
        if result.savings > 0 {
            savings.green().bold()
        } else {
            "nothing (already level)".normal()
        }
    );
}

/// Print the result of a verification run
pub fn print_verify_result(result: &VerifyResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "VERIFICATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Trials:".bright_cyan().bold());
    println!("   Sequences checked: {}", result.trials);
    println!("   Time taken:        {:.2}s", result.duration.as_secs_f64());
    println!("   Trials/second:     {:.1}", result.trials_per_second);

    println!();
    if result.mismatches.is_empty() {
        println!(
            "{}",
            "✅ Greedy matched brute force on every trial"
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!(
                "❌ {} mismatch(es) between greedy and brute force",
                result.mismatches.len()
            )
            .red()
            .bold()
        );
        for mismatch in result.mismatches.iter().take(5) {
            println!(
                "   {}: greedy {} vs brute force {}",
                format_sequence(&mismatch.values),
                mismatch.greedy,
                mismatch.brute_force
            );
        }
    }
}

/// Print the result of a benchmark
pub fn print_bench_result(result: &BenchResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Sequence size:    {}", result.size);
    println!("   Rounds:           {}", result.rounds);
    println!(
        "   Average round:    {}",
        format!("{:.3}ms", result.average.as_secs_f64() * 1000.0)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Fastest round:    {}",
        format!("{:.3}ms", result.fastest.as_secs_f64() * 1000.0).green()
    );
    println!(
        "   Slowest round:    {}",
        format!("{:.3}ms", result.slowest.as_secs_f64() * 1000.0).yellow()
    );
    println!("   Total time:       {:.2}s", result.total.as_secs_f64());
    println!("   Elements/second:  {:.0}", result.elements_per_second);
}
