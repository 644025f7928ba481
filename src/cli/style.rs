use crate::types::Urgency;
use std::env;
use std::io::IsTerminal;

const ANSI_RESET: &str = "\x1b[0m";

pub fn use_color() -> bool {
    if let Ok(force) = env::var("CLICOLOR_FORCE")
        && force != "0"
    {
        return true;
    }
    if env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if matches!(env::var("CLICOLOR").as_deref(), Ok("0")) {
        return false;
    }
    std::io::stdout().is_terminal()
}

pub fn heading(value: &str) -> String {
    paint(value, "1;36")
}

pub fn key(value: &str) -> String {
    paint(value, "36")
}

pub fn task_id(value: &str) -> String {
    paint(value, "1;94")
}

pub fn project(value: &str) -> String {
    paint(value, "1;35")
}

pub fn muted(value: &str) -> String {
    paint(value, "90")
}

pub fn urgency(value: &str, urgency: Urgency) -> String {
    let code = match urgency {
        Urgency::Overdue => "1;31",
        Urgency::DueToday => "1;33",
        Urgency::Upcoming => "33",
        Urgency::Terminal => "1;32",
    };
    paint(value, code)
}

fn paint(value: &str, code: &str) -> String {
    if !use_color() {
        return value.to_string();
    }
    format!("\x1b[{}m{}{}", code, value, ANSI_RESET)
}
