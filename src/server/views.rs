//! HTML views
//!
//! Templates are compiled into the binary and registered once at startup.

use handlebars::Handlebars;
use serde::Serialize;

use crate::Result;
use crate::chapter::Chapter;

const INDEX: &str = "index";
const CHAPTER: &str = "chapter";
const ERROR: &str = "error";

const INDEX_TEMPLATE: &str = include_str!("../../templates/index.hbs");
const CHAPTER_TEMPLATE: &str = include_str!("../../templates/chapter.hbs");
const ERROR_TEMPLATE: &str = include_str!("../../templates/error.hbs");

#[derive(Serialize)]
struct IndexContext<'a> {
    chapters: &'a [u32],
}

#[derive(Serialize)]
struct ErrorContext<'a> {
    status: u16,
    reason: &'a str,
    message: &'a str,
}

/// Renders the reader's pages
pub struct Views {
    hbs: Handlebars<'static>,
}

impl Views {
    pub fn new() -> Result<Self> {
        let mut hbs = Handlebars::new();
        hbs.register_template_string(INDEX, INDEX_TEMPLATE)?;
        hbs.register_template_string(CHAPTER, CHAPTER_TEMPLATE)?;
        hbs.register_template_string(ERROR, ERROR_TEMPLATE)?;
        Ok(Self { hbs })
    }

    pub fn index(&self, chapters: &[u32]) -> Result<String> {
        Ok(self.hbs.render(INDEX, &IndexContext { chapters })?)
    }

    pub fn chapter(&self, chapter: &Chapter) -> Result<String> {
        Ok(self.hbs.render(CHAPTER, chapter)?)
    }

    pub fn error(&self, status: u16, reason: &str, message: &str) -> Result<String> {
        Ok(self.hbs.render(
            ERROR,
            &ErrorContext {
                status,
                reason,
                message,
            },
        )?)
    }
}
