use encoding_rs::GBK;

/// Padding added to the widest cell of a column.
pub const COLUMN_PADDING: usize = 2;

/// Display width of a cell value: its byte length in GBK, where CJK
/// characters take two bytes and ASCII one.
///
/// Characters GBK cannot represent count as two when non-ASCII.
pub fn gbk_width(text: &str) -> usize {
    let (bytes, _, unmappable) = GBK.encode(text);
    if !unmappable {
        return bytes.len();
    }
    text.chars().map(|c| if c.is_ascii() { 1 } else { 2 }).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", 0)]
    #[case("id", 2)]
    #[case("文章", 4)]
    #[case("字符最大长度", 12)]
    #[case("主键,外键", 9)]
    #[case("blog_post", 9)]
    #[case("😀a", 3)]
    fn test_gbk_width(#[case] text: &str, #[case] expected: usize) {
        assert_eq!(gbk_width(text), expected);
    }
}
