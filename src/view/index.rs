use maud::{Markup, html};

use crate::HTMX_PATH;

pub const DEFAULT_INDEX_TITLE: &str = "Golf Journal";

#[must_use]
pub fn render_index_template(title: &str, content: &Markup) -> Markup {
    html! {
        (maud::DOCTYPE)
        head{
            meta charset="UTF-8";
            meta name="viewport" content="width=device-width, initial-scale=1.0";
            title { (title) }
            script src=(HTMX_PATH) defer {}
        }
        body {
            h1 {
                (title)
            }
            div id="rounds" {
                (content)
            }
        }
    }
}
