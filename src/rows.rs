//! Row selection and cell extraction over a parsed page.

use crate::error::ScrapeError;
use scraper::{ElementRef, Html, Selector};

/// Select every element matching `css`. No matches is an empty Vec, not an error.
pub fn select_rows<'a>(document: &'a Html, css: &str) -> Result<Vec<Row<'a>>, ScrapeError> {
    let selector = parse_selector(css)?;
    Ok(document.select(&selector).map(Row).collect())
}

fn parse_selector(css: &str) -> Result<Selector, ScrapeError> {
    Selector::parse(css).map_err(|e| ScrapeError::Selector {
        selector: css.to_string(),
        reason: e.to_string(),
    })
}

/// A table row (or any element treated as one)
#[derive(Debug, Clone, Copy)]
pub struct Row<'a>(ElementRef<'a>);

impl<'a> Row<'a> {
    /// The `index`-th `td` under this row
    pub fn cell(&self, index: usize) -> Option<Cell<'a>> {
        let td = Selector::parse("td").ok()?;
        self.0.select(&td).nth(index).map(Cell)
    }

    /// First descendant carrying `class`. Later matches in the same row are
    /// ignored rather than concatenated; calendar rows hold one cell per class.
    pub fn cell_by_class(&self, class: &str) -> Option<Cell<'a>> {
        let selector = Selector::parse(&format!(".{}", class)).ok()?;
        self.0.select(&selector).next().map(Cell)
    }

    /// Text of the `index`-th cell, empty if the row is short
    pub fn cell_text(&self, index: usize) -> String {
        self.cell(index).map(|c| c.text()).unwrap_or_default()
    }

    /// Text of the first `class` cell, empty if absent
    pub fn class_text(&self, class: &str) -> String {
        self.cell_by_class(class).map(|c| c.text()).unwrap_or_default()
    }
}

/// A single cell within a row
#[derive(Debug, Clone, Copy)]
pub struct Cell<'a>(ElementRef<'a>);

impl<'a> Cell<'a> {
    /// All descendant text, whitespace collapsed and trimmed
    pub fn text(&self) -> String {
        element_text(&self.0)
    }

    /// Text of the first link in the cell, if it has any
    pub fn link_text(&self) -> Option<String> {
        let a = Selector::parse("a").ok()?;
        self.0
            .select(&a)
            .next()
            .map(|link| element_text(&link))
            .filter(|t| !t.is_empty())
    }
}

fn element_text(element: &ElementRef) -> String {
    let raw = element.text().collect::<String>();
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}
