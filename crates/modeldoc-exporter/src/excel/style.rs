use std::sync::LazyLock;

use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern};

const FONT_NAME: &str = "微软雅黑";
const TITLE_FILL: u32 = 0x228B22;
const HEADER_FILL: u32 = 0xFFD700;

/// How a cell is decorated on top of the border and centering every cell gets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CellStyle {
    #[default]
    Body,
    /// Table name / display name row.
    Title,
    /// Column label row.
    Header,
}

static BODY_FORMAT: LazyLock<Format> = LazyLock::new(base_format);

static TITLE_FORMAT: LazyLock<Format> = LazyLock::new(|| {
    base_format()
        .set_background_color(Color::RGB(TITLE_FILL))
        .set_pattern(FormatPattern::Solid)
        .set_font_name(FONT_NAME)
        .set_font_size(13)
        .set_bold()
        .set_italic()
});

static HEADER_FORMAT: LazyLock<Format> = LazyLock::new(|| {
    base_format()
        .set_background_color(Color::RGB(HEADER_FILL))
        .set_pattern(FormatPattern::Solid)
        .set_font_name(FONT_NAME)
        .set_font_size(12)
        .set_bold()
});

fn base_format() -> Format {
    Format::new()
        .set_align(FormatAlign::Center)
        .set_border(FormatBorder::Thin)
        .set_border_color(Color::Black)
}

impl CellStyle {
    pub fn format(self) -> &'static Format {
        match self {
            CellStyle::Body => &BODY_FORMAT,
            CellStyle::Title => &TITLE_FORMAT,
            CellStyle::Header => &HEADER_FORMAT,
        }
    }
}
