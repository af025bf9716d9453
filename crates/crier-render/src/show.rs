//! Formatted message rendering.
//!
//! Every function here is a pure formatter: structured data in, a `String`
//! of terminal text out. Callers decide where the text goes. Styling is
//! applied directly through [`Theme`] entries; there is no markup grammar
//! to parse.
//!
//! The shapes provided:
//!
//! - [`block`] - a `[LABEL] message` block with an optional named style,
//!   plus the conventional wrappers ([`info`], [`success`], [`error`], ...)
//! - [`title`] / [`section`] - underlined headings
//! - [`a_list`] / [`multi_list`] - aligned key/value listings
//! - [`panel`] - a bordered key/value box with a centered title
//! - [`table`] - a bordered table with emphasized headers

use console::Style;

use crate::style::Theme;
use crate::util::{display_width, pad, Align};

/// Default width for titles and sections when the caller has no better idea.
pub const DEFAULT_WIDTH: usize = 80;

/// Renders a message block: `[LABEL] first line` followed by further lines.
///
/// When `style` names an entry in `theme`, the whole block is rendered
/// through that style; unknown or absent style names leave the text plain.
pub fn block(messages: &[&str], label: Option<&str>, style: Option<&str>, theme: &Theme) -> String {
    if messages.is_empty() {
        return String::new();
    }
    let mut lines: Vec<String> = messages.iter().map(|m| m.to_string()).collect();
    if let Some(label) = label {
        lines[0] = format!("[{}] {}", label.to_uppercase(), lines[0]);
    }
    let text = lines.join("\n");
    match style.and_then(|name| theme.get(name)) {
        Some(style) => style.apply_to(&text).to_string(),
        None => text,
    }
}

/// `[IMPORTANT]` block in the `primary` style.
pub fn primary(message: &str, theme: &Theme) -> String {
    block(&[message], Some("IMPORTANT"), Some("primary"), theme)
}

/// `[INFO]` block in the `info` style.
pub fn info(message: &str, theme: &Theme) -> String {
    block(&[message], Some("INFO"), Some("info"), theme)
}

/// `[NOTICE]` block in the `notice` style.
pub fn notice(message: &str, theme: &Theme) -> String {
    block(&[message], Some("NOTICE"), Some("notice"), theme)
}

/// `[SUCCESS]` block in the `success` style.
pub fn success(message: &str, theme: &Theme) -> String {
    block(&[message], Some("SUCCESS"), Some("success"), theme)
}

/// `[WARNING]` block in the `warning` style.
pub fn warning(message: &str, theme: &Theme) -> String {
    block(&[message], Some("WARNING"), Some("warning"), theme)
}

/// `[DANGER]` block in the `danger` style.
pub fn danger(message: &str, theme: &Theme) -> String {
    block(&[message], Some("DANGER"), Some("danger"), theme)
}

/// `[ERROR]` block in the `error` style.
pub fn error(message: &str, theme: &Theme) -> String {
    block(&[message], Some("ERROR"), Some("error"), theme)
}

/// Renders a centered title with an `=` underline.
///
/// Widths of 10 or less fall back to [`DEFAULT_WIDTH`].
pub fn title(text: &str, width: usize) -> String {
    let text = crate::util::ucwords(text.trim());
    let width = if width > 10 { width } else { DEFAULT_WIDTH };
    let indent = (width / 2).saturating_sub(display_width(&text) / 2);
    format!(
        "  {}{}\n  {}\n",
        " ".repeat(indent),
        text,
        "=".repeat(width)
    )
}

/// Renders a section: title, `-` underline, and an indented body.
pub fn section(heading: &str, body: &str, width: usize) -> String {
    let width = if width > 10 { width } else { DEFAULT_WIDTH };
    let mut out = String::new();
    out.push_str(heading);
    out.push('\n');
    out.push_str(&"-".repeat(width.min(display_width(heading).max(10))));
    out.push('\n');
    for line in body.lines() {
        out.push_str("  ");
        out.push_str(line);
        out.push('\n');
    }
    out
}

/// Renders an aligned key/value list, optionally under a heading.
///
/// Keys are left-aligned to the widest key; rows are indented two columns.
pub fn a_list<K, V>(pairs: &[(K, V)], heading: Option<&str>) -> String
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let key_width = pairs
        .iter()
        .map(|(k, _)| display_width(k.as_ref()))
        .max()
        .unwrap_or(0);
    let mut out = String::new();
    if let Some(heading) = heading {
        out.push_str(heading);
        out.push('\n');
    }
    for (key, value) in pairs {
        let value = value.as_ref();
        if value.is_empty() {
            out.push_str(&format!("  {}\n", key.as_ref()));
        } else {
            out.push_str(&format!(
                "  {}  {}\n",
                pad(key.as_ref(), key_width, Align::Left),
                value
            ));
        }
    }
    out
}

/// Renders several titled aligned lists separated by blank lines.
pub fn multi_list<K, V>(sections: &[(&str, Vec<(K, V)>)]) -> String
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    sections
        .iter()
        .map(|(heading, pairs)| a_list(pairs, Some(*heading)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders a bordered key/value panel with the title centered in the top
/// border.
pub fn panel<K, V>(pairs: &[(K, V)], heading: &str, border: char) -> String
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let key_width = pairs
        .iter()
        .map(|(k, _)| display_width(k.as_ref()))
        .max()
        .unwrap_or(0);
    let rows: Vec<String> = pairs
        .iter()
        .map(|(key, value)| {
            format!(
                "  {}  {}",
                pad(key.as_ref(), key_width, Align::Left),
                value.as_ref()
            )
        })
        .collect();
    let inner = rows
        .iter()
        .map(|r| display_width(r))
        .max()
        .unwrap_or(0)
        .max(display_width(heading) + 4);

    let heading = format!(" {} ", heading.trim());
    let side = inner.saturating_sub(display_width(&heading));
    let left = side / 2;
    let top = format!(
        "{}{}{}",
        border.to_string().repeat(left),
        heading,
        border.to_string().repeat(side - left)
    );
    let bottom = border.to_string().repeat(display_width(&top));

    let mut out = String::new();
    out.push_str(&top);
    out.push('\n');
    for row in rows {
        out.push_str(&row);
        out.push('\n');
    }
    out.push_str(&bottom);
    out.push('\n');
    out
}

/// Renders a bordered table. Headers are emphasized; missing cells render
/// empty.
pub fn table(headers: &[&str], rows: &[Vec<String>], heading: Option<&str>) -> String {
    let columns = headers.len();
    let mut widths: Vec<usize> = headers.iter().map(|h| display_width(h)).collect();
    for row in rows {
        for (i, cell) in row.iter().take(columns).enumerate() {
            widths[i] = widths[i].max(display_width(cell));
        }
    }

    let rule = {
        let mut s = String::from("+");
        for w in &widths {
            s.push_str(&"-".repeat(w + 2));
            s.push('+');
        }
        s
    };
    let render_row = |cells: &[String], style: Option<&Style>| {
        let mut s = String::from("|");
        for (i, w) in widths.iter().enumerate() {
            let cell = cells.get(i).map(String::as_str).unwrap_or("");
            let padded = pad(cell, *w, Align::Left);
            match style {
                Some(style) => s.push_str(&format!(" {} |", style.apply_to(&padded))),
                None => s.push_str(&format!(" {} |", padded)),
            }
        }
        s
    };

    let head_style = Style::new().bold();
    let head_cells: Vec<String> = headers.iter().map(|h| h.to_string()).collect();

    let mut out = String::new();
    if let Some(heading) = heading {
        let total = display_width(&rule);
        out.push_str(&pad(heading, total, Align::Middle).trim_end().to_string());
        out.push('\n');
    }
    out.push_str(&rule);
    out.push('\n');
    out.push_str(&render_row(&head_cells, Some(&head_style)));
    out.push('\n');
    out.push_str(&rule);
    out.push('\n');
    for row in rows {
        out.push_str(&render_row(row, None));
        out.push('\n');
    }
    out.push_str(&rule);
    out.push('\n');
    out
}
