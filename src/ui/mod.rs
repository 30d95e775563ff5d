pub mod icons;
pub mod output;
pub mod table;
pub mod theme;

pub use icons::Icons;
pub use output::{dim, error, header, info, success, warn};
pub use table::{ChapterRow, chapter_table};
pub use theme::{Theme, theme};
