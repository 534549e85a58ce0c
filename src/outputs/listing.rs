//! Plain-text listing of articles for the terminal.

use crate::models::{BusinessNews, NewsList};
use std::fmt::Write;

/// Render the list as numbered entries, or its empty-state message.
///
/// # Arguments
///
/// * `list` - The list currently on screen
///
/// # Returns
///
/// One block per article: the number and title, then section, contributors
/// and date (blank parts omitted), then the URL. Numbers are right-aligned.
///
/// ```text
///  1. Markets rally as inflation cools
///     Business · by Jane Doe · 02-01-2020
///     https://www.theguardian.com/business/...
/// ```
pub fn render(list: &NewsList) -> String {
    if list.is_empty() {
        return format!("{}\n", list.empty_message());
    }

    let mut out = String::new();
    // Writing into a String cannot fail.
    write_entries(&mut out, list.articles()).map(|_| out).unwrap_or_default()
}

fn write_entries(out: &mut String, articles: &[BusinessNews]) -> std::fmt::Result {
    let width = articles.len().to_string().len();
    for (i, article) in articles.iter().enumerate() {
        write_entry(out, i + 1, width, article)?;
    }
    Ok(())
}

fn write_entry(
    out: &mut String,
    number: usize,
    width: usize,
    article: &BusinessNews,
) -> std::fmt::Result {
    writeln!(out, "{:>width$}. {}", number, article.title(), width = width)?;
    let indent = " ".repeat(width + 2);

    let mut meta = vec![article.section_name()];
    if let Some(author) = article.author() {
        meta.push(author);
    }
    meta.push(article.date());
    let meta: Vec<&str> = meta.into_iter().filter(|s| !s.is_empty()).collect();
    if !meta.is_empty() {
        writeln!(out, "{}{}", indent, meta.join(" · "))?;
    }

    writeln!(out, "{}{}", indent, article.url())?;
    Ok(())
}
