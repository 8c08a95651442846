use super::SectionRenderer;
use crate::core::{User, VisibleItem};

/// CSV section renderer. Column labels and the trailing footer punctuation
/// are literal contract; fields are joined unquoted and unescaped.
pub struct CsvRenderer;

impl SectionRenderer for CsvRenderer {
    fn header(&self, _user: &User) -> String {
        "ID,NOME,VALOR,USUARIO\n".to_string()
    }

    fn body(&self, user: &User, items: &[VisibleItem]) -> String {
        if items.is_empty() {
            return String::new();
        }
        let rows: Vec<String> = items
            .iter()
            .map(|item| format!("{},{},{},{}", item.id, item.name, item.value, user.name))
            .collect();
        rows.join("\n") + "\n"
    }

    fn footer(&self, total: f64) -> String {
        format!("\nTotal,,\n{total},,\n")
    }
}
