use std::borrow::Cow;

use chrono::NaiveDate;
use modeldoc_config::DocFormat;
use modeldoc_core::{AppModels, ExtractionError, ModelDef, extract_fields};
use tracing::debug;

use crate::doc::{COLUMN_LABELS, DocExporter};
use crate::error::ExportError;

/// Alignment row under the table header: nullable, default and key role centered.
const ALIGN_ROW: &str = "|-|-|-|:-:|:-:|:-:|-|-|-|";

pub struct MarkdownExporter {
    project_name: String,
    date: NaiveDate,
}

impl MarkdownExporter {
    pub fn new(project_name: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            project_name: project_name.into(),
            date,
        }
    }
}

impl DocExporter for MarkdownExporter {
    fn format(&self) -> DocFormat {
        DocFormat::Md
    }

    fn render(&self, apps: &[AppModels<'_>]) -> Result<Vec<u8>, ExportError> {
        let lines = render_markdown(apps, &self.project_name, self.date)?;
        Ok(lines.join("\n").into_bytes())
    }
}

/// Render the selected models as Markdown lines.
///
/// Output depends only on the inputs, so the same registry and date always
/// produce the same document.
pub fn render_markdown(
    apps: &[AppModels<'_>],
    project_name: &str,
    date: NaiveDate,
) -> Result<Vec<String>, ExtractionError> {
    let mut lines: Vec<String> = Vec::new();
    render_introduction(&mut lines, project_name, date);

    for app in apps {
        lines.push(format!("### {}", app.app));
        for model in app.models {
            render_model(&mut lines, model)?;
        }
    }

    Ok(lines)
}

fn render_introduction(lines: &mut Vec<String>, project_name: &str, date: NaiveDate) {
    lines.push(format!("# {project_name}数据库设计"));
    lines.push(format!("- 文档时间： {}", date.format("%Y-%m-%d")));
    lines.push("## 引言".into());
    lines.push("### 关于".into());
    lines.push(format!("  此文档主要介绍{project_name}数据库定义。"));
    lines.push("### 目标读者".into());
    lines.push("  此文档提供给软件开发人员和系统维护人员使用。".into());
    lines.push("### 术语定义".into());
    lines.push("### 参考资料".into());
    lines.push("## 数据库设计".into());
}

fn render_model(lines: &mut Vec<String>, model: &ModelDef) -> Result<(), ExtractionError> {
    let table = model.table_name()?;
    let records = extract_fields(model)?;
    debug!(table = %table, fields = records.len(), "rendering markdown table");

    lines.push(format!("#### {table}"));
    lines.push(format!("- 表名： {table}"));
    lines.push(format!("- 中文名： {}", model.display_name()?));
    lines.push(String::new());
    lines.push(table_row(COLUMN_LABELS.iter().copied()));
    lines.push(ALIGN_ROW.into());
    for record in records.values() {
        let cells = record.cells();
        lines.push(table_row(cells.iter().map(String::as_str)));
    }
    lines.push(String::new());
    Ok(())
}

fn table_row<'a>(cells: impl Iterator<Item = &'a str>) -> String {
    let cells: Vec<Cow<'a, str>> = cells.map(escape_cell).collect();
    format!("|{}|", cells.join("|"))
}

/// Keep a value inside its table cell: pipes are escaped and line breaks
/// become `<br>`.
fn escape_cell(value: &str) -> Cow<'_, str> {
    if !value.contains(['|', '\n', '\r']) {
        return Cow::Borrowed(value);
    }
    Cow::Owned(
        value
            .replace("\r\n", "<br>")
            .replace(['\n', '\r'], "<br>")
            .replace('|', "\\|"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;
    use modeldoc_core::{FieldDef, ModelRegistry};
    use rstest::rstest;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()
    }

    fn blog_registry() -> ModelRegistry {
        let post = ModelDef {
            verbose_name: Some("文章".into()),
            fields: vec![
                FieldDef {
                    primary_key: true,
                    ..FieldDef::new("id", "AutoField")
                },
                FieldDef {
                    verbose_name: Some("作者".into()),
                    to: Some("auth.User".into()),
                    ..FieldDef::new("author", "ForeignKey")
                },
            ],
            ..ModelDef::with_table("blog_post")
        };
        [("blog".to_string(), post)].into_iter().collect()
    }

    #[test]
    fn test_introduction_lines() {
        let lines = render_markdown(&[], "Repair", date()).unwrap();
        assert_snapshot!(lines.join("\n"), @r"
        # Repair数据库设计
        - 文档时间： 2024-03-09
        ## 引言
        ### 关于
          此文档主要介绍Repair数据库定义。
        ### 目标读者
          此文档提供给软件开发人员和系统维护人员使用。
        ### 术语定义
        ### 参考资料
        ## 数据库设计
        ");
    }

    #[test]
    fn test_blog_post_section() {
        let registry = blog_registry();
        let lines = render_markdown(&registry.enumerate(&["blog"]), "Repair", date()).unwrap();

        let section = lines[10..].to_vec();
        assert_eq!(
            section,
            vec![
                "### blog",
                "#### blog_post",
                "- 表名： blog_post",
                "- 中文名： 文章",
                "",
                "|字段|中文|字段类型|空|默认值|主/外键|枚举值|字符最大长度|备注|",
                ALIGN_ROW,
                "|id|id|AutoField|False||主键||||",
                "|author_id|作者|ForeignKey|False||外键||||",
                "",
            ]
        );
    }

    #[test]
    fn test_empty_registry_keeps_introduction_only() {
        let registry = ModelRegistry::new();
        let lines = render_markdown(&registry.enumerate::<&str>(&[]), "Repair", date()).unwrap();
        assert_eq!(lines.len(), 10);
        assert!(!lines.iter().any(|l| l.starts_with("####")));
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let registry = blog_registry();
        let exporter = MarkdownExporter::new("Repair", date());
        let apps = registry.enumerate::<&str>(&[]);
        assert_eq!(exporter.render(&apps).unwrap(), exporter.render(&apps).unwrap());
    }

    #[test]
    fn test_model_without_table_fails() {
        let registry: ModelRegistry = [(
            "blog".to_string(),
            ModelDef {
                table: None,
                ..ModelDef::with_table("x")
            },
        )]
        .into_iter()
        .collect();
        // `register` stamps the app, but there is still no class name.
        let err = render_markdown(&registry.enumerate::<&str>(&[]), "P", date()).unwrap_err();
        assert!(matches!(err, ExtractionError::MissingTableName(_)));
    }

    #[rstest]
    #[case("plain", "plain")]
    #[case("a|b", "a\\|b")]
    #[case("line1\nline2", "line1<br>line2")]
    #[case("crlf\r\nend", "crlf<br>end")]
    #[case("", "")]
    fn test_escape_cell(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(escape_cell(input), expected);
    }

    #[test]
    fn test_help_text_with_newline_stays_on_one_row() {
        let model = ModelDef {
            fields: vec![FieldDef {
                help_text: "first\nsecond".into(),
                ..FieldDef::new("note", "TextField")
            }],
            ..ModelDef::with_table("t")
        };
        let registry: ModelRegistry = [("app".to_string(), model)].into_iter().collect();
        let lines = render_markdown(&registry.enumerate::<&str>(&[]), "P", date()).unwrap();
        let rows: Vec<&String> = lines.iter().filter(|l| l.starts_with("|note|")).collect();
        assert_eq!(rows.len(), 1);
        assert!(rows[0].ends_with("|first<br>second|"));
    }
}
