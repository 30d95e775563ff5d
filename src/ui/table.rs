use serde::Serialize;
use tabled::{Table, Tabled, settings::Style};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Tabled)]
pub struct ChapterRow {
    #[tabled(rename = "Chapter")]
    pub number: u32,
    #[tabled(rename = "Image", display_with = "display_image")]
    pub image_url: Option<String>,
}

fn display_image(image_url: &Option<String>) -> String {
    image_url.clone().unwrap_or_else(|| "-".to_string())
}

pub fn chapter_table(rows: &[ChapterRow]) -> String {
    if rows.is_empty() {
        return String::new();
    }

    Table::new(rows).with(Style::rounded()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chapter_table() {
        let rows = vec![
            ChapterRow { number: 1, image_url: Some("/static/chap1.png".to_string()) },
            ChapterRow { number: 2, image_url: None },
        ];
        let table = chapter_table(&rows);

        assert!(table.contains("Chapter"));
        assert!(table.contains("/static/chap1.png"));
        assert!(table.contains(" - "));
    }

    #[test]
    fn test_empty_table() {
        assert!(chapter_table(&[]).is_empty());
    }
}
