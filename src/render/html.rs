use super::SectionRenderer;
use crate::core::{User, VisibleItem};

/// HTML section renderer. Priority rows differ from plain rows only in the
/// bold style attribute. Cell content is emitted verbatim, unescaped.
pub struct HtmlRenderer;

impl SectionRenderer for HtmlRenderer {
    fn header(&self, user: &User) -> String {
        format!(
            "<html><body>\n\
             <h1>Relatório</h1>\n\
             <h2>Usuário: {}</h2>\n\
             <table>\n\
             <tr><th>ID</th><th>Nome</th><th>Valor</th></tr>\n",
            user.name
        )
    }

    fn body(&self, _user: &User, items: &[VisibleItem]) -> String {
        items.iter().map(render_row).collect()
    }

    fn footer(&self, total: f64) -> String {
        format!("</table>\n<h3>Total: {total}</h3>\n</body></html>\n")
    }
}

fn render_row(item: &VisibleItem) -> String {
    if item.priority {
        format!(
            "<tr style=\"font-weight:bold;\"><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            item.id, item.name, item.value
        )
    } else {
        format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            item.id, item.name, item.value
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Item, Role};
    use pretty_assertions::assert_eq;

    fn alice() -> User {
        User::new("Alice", Role::Admin)
    }

    #[test]
    fn header_embeds_the_user_name() {
        let header = HtmlRenderer.header(&alice());
        assert!(header.starts_with("<html><body>\n"));
        assert!(header.contains("<h2>Usuário: Alice</h2>\n"));
        assert!(header.ends_with("<tr><th>ID</th><th>Nome</th><th>Valor</th></tr>\n"));
    }

    #[test]
    fn priority_rows_are_bold() {
        let item = VisibleItem::marked(&Item::new(1, "A", 1500.0), true);
        assert_eq!(
            render_row(&item),
            "<tr style=\"font-weight:bold;\"><td>1</td><td>A</td><td>1500</td></tr>\n"
        );
    }

    #[test]
    fn plain_rows_carry_no_style() {
        let item = VisibleItem::marked(&Item::new(2, "B", 300.0), false);
        assert_eq!(
            render_row(&item),
            "<tr><td>2</td><td>B</td><td>300</td></tr>\n"
        );
    }

    #[test]
    fn body_emits_one_row_per_item() {
        let items = vec![
            VisibleItem::marked(&Item::new(1, "A", 1500.0), true),
            VisibleItem::marked(&Item::new(2, "B", 300.0), false),
        ];
        let body = HtmlRenderer.body(&alice(), &items);
        assert_eq!(body.matches("<tr>").count() + body.matches("<tr style").count(), 2);
    }

    #[test]
    fn footer_closes_the_document() {
        assert_eq!(
            HtmlRenderer.footer(1800.0),
            "</table>\n<h3>Total: 1800</h3>\n</body></html>\n"
        );
    }
}
