//! Declarative field extraction over a parsed page.
//!
//! A page shape is described as data: CSS selectors plus a per-field
//! `convert` transform. [`Field`] picks one value out of a scope element,
//! [`ListField`] collects the text of every matching element.

use scraper::{ElementRef, Html, Selector};

use super::text::clean;
use crate::error::{Result, ScrapeError};

pub fn compile(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| ScrapeError::Selector(format!("{css}: {e:?}")))
}

/// Whitespace-normalized text content of an element.
pub fn element_text(el: ElementRef) -> String {
    clean(&el.text().collect::<String>())
}

fn keep(value: &str) -> String {
    value.to_string()
}

#[derive(Clone, Copy)]
pub struct Field {
    pub selector: &'static str,
    pub eq: usize,
    pub attr: Option<&'static str>,
    pub convert: fn(&str) -> String,
}

impl Field {
    /// Text of the `eq`-th element matching `selector` inside the scope.
    pub const fn text(selector: &'static str, eq: usize) -> Self {
        Field {
            selector,
            eq,
            attr: None,
            convert: keep,
        }
    }

    /// Read an attribute instead of the text content.
    pub const fn attr(mut self, name: &'static str) -> Self {
        self.attr = Some(name);
        self
    }

    pub const fn convert(mut self, f: fn(&str) -> String) -> Self {
        self.convert = f;
        self
    }

    /// `Ok(None)` when nothing matches or the attribute is missing.
    pub fn extract(&self, scope: ElementRef) -> Result<Option<String>> {
        let selector = compile(self.selector)?;
        let Some(el) = scope.select(&selector).nth(self.eq) else {
            return Ok(None);
        };
        let raw = match self.attr {
            Some(name) => match el.value().attr(name) {
                Some(v) => v.trim().to_string(),
                None => return Ok(None),
            },
            None => element_text(el),
        };
        Ok(Some((self.convert)(&raw)))
    }
}

#[derive(Clone, Copy)]
pub struct ListField {
    pub item: &'static str,
}

impl ListField {
    pub const fn new(item: &'static str) -> Self {
        ListField { item }
    }

    pub fn elements<'a>(&self, doc: &'a Html) -> Result<Vec<ElementRef<'a>>> {
        let selector = compile(self.item)?;
        Ok(doc.select(&selector).collect())
    }

    /// Text of every match, in document order.
    pub fn extract(&self, doc: &Html) -> Result<Vec<String>> {
        Ok(self.elements(doc)?.into_iter().map(element_text).collect())
    }
}
