//! Markdown rendering of a fetched page.

use crate::models::{NO_NEWS_MESSAGE, NewsPage};
use crate::utils::upcase;
use std::fmt::Write;

/// Render a [`NewsPage`] as a Markdown document.
///
/// # Arguments
///
/// * `page` - The fetched page to render
///
/// # Returns
///
/// A document with a title line, the fetch time, and one linked `##`
/// heading per article followed by its section, contributors and date. An
/// empty page renders the "no news" message instead of headings.
///
/// # Examples
///
/// ```ignore
/// let md = render(&page);
/// assert!(md.starts_with("# Business news"));
/// ```
pub fn render(page: &NewsPage) -> String {
    let mut md = String::new();
    // Writing into a String cannot fail.
    write_page(&mut md, page).map(|_| md).unwrap_or_default()
}

fn write_page(md: &mut String, page: &NewsPage) -> std::fmt::Result {
    writeln!(md, "# {} news\n", upcase(&page.topic))?;
    writeln!(md, "_Fetched {} at {}_\n", page.local_date, page.local_time)?;

    if page.articles.is_empty() {
        writeln!(md, "{}", NO_NEWS_MESSAGE)?;
        return Ok(());
    }

    for article in &page.articles {
        writeln!(
            md,
            "## [{}]({})\n",
            escape_link_text(article.title()),
            article.url()
        )?;
        write!(md, "**{}**", article.section_name())?;
        if let Some(author) = article.author() {
            write!(md, " · {}", author)?;
        }
        writeln!(md, " · {}\n", article.date())?;
    }
    Ok(())
}

fn escape_link_text(text: &str) -> String {
    text.replace('[', "\\[").replace(']', "\\]")
}
