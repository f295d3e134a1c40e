use chrono::{DateTime, Local, Utc};
use colored::*;
use std::fmt::Write;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};
use wastewatch::api::{CmdMessage, MessageLevel};
use wastewatch::config::WastewatchConfig;
use wastewatch::model::Report;

const LINE_WIDTH: usize = 80;
const TIME_WIDTH: usize = 16;

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

/// Full detail view, used for confirmation and status lookups.
pub fn print_report_card(report: &Report, date_format: &str) {
    println!("{} {}", "Report ID:".bold(), report.report_id.yellow());
    println!("{} {}", "Name:".bold(), report.name);
    println!("{} {}", "Address:".bold(), report.address);
    println!("{} {}", "Issue:".bold(), report.issue);
    println!(
        "{} {}",
        "Date:".bold(),
        format_date(report.created_at, date_format)
    );
    println!("{} {}", "Status:".bold(), report.status.to_string().italic());
}

pub fn print_cards(reports: &[Report], config: &WastewatchConfig) {
    for (i, report) in reports.iter().enumerate() {
        if i > 0 {
            println!();
        }
        print_report_card(report, &config.date_format);
    }
}

pub fn print_history(reports: &[Report]) {
    for report in reports {
        let id = format!("{}  ", report.report_id);
        let time_ago = format_time_ago(report.created_at);
        let who = format!("{} • {}", report.name, report.address);

        let available = LINE_WIDTH.saturating_sub(id.width() + TIME_WIDTH);
        let who_display = truncate_to_width(&who, available);
        let padding = available.saturating_sub(who_display.width());

        println!(
            "{}{}{}{}",
            id.yellow(),
            who_display.bold(),
            " ".repeat(padding),
            time_ago.dimmed()
        );

        let issue = truncate_to_width(&report.issue, LINE_WIDTH.saturating_sub(20));
        println!(
            "         Issue: {}  Status: {}",
            issue,
            report.status.to_string().italic()
        );
    }
}

pub fn print_config(config: &WastewatchConfig) {
    println!("track-interval-ms = {}", config.track_interval_ms);
    println!("date-format = {}", config.date_format);
}

fn format_date(timestamp: DateTime<Utc>, date_format: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", timestamp.with_timezone(&Local).format(date_format)).is_err() {
        return timestamp.to_rfc3339();
    }
    out
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let formatter = timeago::Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
