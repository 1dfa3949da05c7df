//! Formatting utilities used for CLI and export outputs.

pub fn fmt_ml(amount: i64) -> String {
    format!("{} ml", amount)
}

/// Progress toward the daily goal as a percentage, capped at 100.
pub fn progress_percent(total: i64, goal: i64) -> f64 {
    if goal <= 0 {
        return 0.0;
    }
    (total as f64 / goal as f64 * 100.0).min(100.0)
}

/// Render a textual progress bar of `width` cells, e.g. `[#####---------]`.
pub fn progress_bar(total: i64, goal: i64, width: usize) -> String {
    let pct = progress_percent(total, goal);
    let filled = ((pct / 100.0) * width as f64).round() as usize;
    let filled = filled.min(width);

    let mut bar = String::with_capacity(width + 2);
    bar.push('[');
    for _ in 0..filled {
        bar.push('#');
    }
    for _ in filled..width {
        bar.push('-');
    }
    bar.push(']');
    bar
}

pub fn pad_right(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}

pub fn pad_left(s: &str, width: usize) -> String {
    format!("{:>width$}", s, width = width)
}
