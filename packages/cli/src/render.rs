//! Terminal and JSON output.

use nu_ansi_term::{Color, Style};
use serde::Serialize;

use objdispatch_core::{Crumb, Options};

use crate::commands::{Resolution, Route};
use crate::error::Result;

/// Render any result as pretty-printed JSON.
pub fn json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

fn options(options: &Option<Options>) -> String {
    match options {
        Some(options) => options
            .iter()
            .map(|v| v.as_str())
            .collect::<Vec<_>>()
            .join(","),
        None => String::new(),
    }
}

fn marker(endpoint: bool) -> String {
    if endpoint {
        format!("{}", Color::Green.paint("endpoint"))
    } else {
        format!("{}", Color::DarkGray.paint("step    "))
    }
}

fn crumb_line(crumb: &Crumb) -> String {
    let path = crumb.path().unwrap_or("·");
    format!(
        "  {} {} {} {}",
        Color::Cyan.paint(format!("{:<16}", path)),
        marker(crumb.endpoint),
        crumb.handler,
        Color::Yellow.paint(options(&crumb.options))
    )
}

/// Render crumbs one per line.
pub fn crumbs(crumbs: &[Crumb]) -> String {
    let mut out = String::new();
    if let Some(first) = crumbs.first() {
        out.push_str(&format!(
            "{} {}\n",
            Style::new().bold().paint("root:"),
            first.root
        ));
    }
    for crumb in crumbs {
        out.push_str(&crumb_line(crumb));
        out.push('\n');
    }
    out
}

pub fn resolution(resolution: &Resolution) -> String {
    let mut out = crumbs(&resolution.crumbs);
    if !resolution.remaining.is_empty() {
        out.push_str(&format!(
            "{} /{}\n",
            Style::new().bold().paint("remaining:"),
            resolution.remaining.join("/")
        ));
    }
    if let Some(result) = &resolution.result {
        out.push_str(&format!(
            "{} {}\n",
            Style::new().bold().paint("result:"),
            Color::Green.paint(result.to_string())
        ));
    }
    out
}

pub fn routes(routes: &[Route]) -> String {
    let mut out = String::new();
    for route in routes {
        out.push_str(&format!(
            "{} {} {} {}\n",
            Color::Cyan.paint(format!("{:<24}", route.path)),
            marker(route.endpoint),
            route.handler,
            Color::Yellow.paint(options(&route.options))
        ));
    }
    out
}
