//! 把拉取状态投影成页面标记

use std::fmt::Write;

use super::state::FetchState;
use crate::app::catalog::Item;

pub const LOADING_INDICATOR: &str = "Loading...";

/// 渲染当前状态，三种状态互斥，不会混合输出
pub fn render(state: &FetchState) -> String {
    match state {
        FetchState::Loading => format!(r#"<div class="App">{}</div>"#, LOADING_INDICATOR),
        FetchState::Error(message) => {
            format!(r#"<div class="App">Error: {}</div>"#, escape_html(message))
        }
        FetchState::Success(items) => render_page(items),
    }
}

fn render_page(items: &[Item]) -> String {
    let mut html = String::new();
    html.push_str("<div class=\"App\">\n");
    html.push_str("  <header class=\"App-header\">\n");
    html.push_str("    <h1>Microservices Demo</h1>\n");
    html.push_str("    <p>Containerized Deployment Workflow for AWS</p>\n");
    html.push_str("  </header>\n");
    html.push_str("  <main>\n");
    html.push_str("    <h2>Items from API</h2>\n");
    html.push_str("    <ul class=\"items-list\">\n");
    for item in items {
        html.push_str(&render_item(item));
    }
    html.push_str("    </ul>\n");
    html.push_str("  </main>\n");
    html.push_str("  <footer>\n");
    html.push_str("    <p>&copy; 2023 Microservices Demo</p>\n");
    html.push_str("  </footer>\n");
    html.push_str("</div>\n");
    html
}

/// 单个条目卡片，`data-key` 即条目 id
pub fn render_item(item: &Item) -> String {
    let mut card = String::new();
    let _ = writeln!(
        card,
        r#"      <li data-key="{}" class="item-card"><h3>{}</h3><p>{}</p></li>"#,
        item.id,
        escape_html(&item.name),
        escape_html(&item.description)
    );
    card
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loading_renders_only_the_indicator() {
        let html = render(&FetchState::Loading);
        assert_eq!(html, r#"<div class="App">Loading...</div>"#);
    }

    #[test]
    fn error_renders_only_the_message() {
        let html = render(&FetchState::Error("HTTP error! status: 500".to_string()));
        assert_eq!(html, r#"<div class="App">Error: HTTP error! status: 500</div>"#);
        assert!(!html.contains("item-card"));
        assert!(!html.contains(LOADING_INDICATOR));
    }

    #[test]
    fn success_renders_items_in_order_with_keys() {
        let items = vec![Item::synthesize(3), Item::synthesize(1), Item::synthesize(2)];
        let html = render(&FetchState::Success(items));

        assert_eq!(html.matches("class=\"item-card\"").count(), 3);
        let first = html.find("data-key=\"3\"").unwrap();
        let second = html.find("data-key=\"1\"").unwrap();
        let third = html.find("data-key=\"2\"").unwrap();
        assert!(first < second && second < third);
        assert!(html.contains("<h3>Item 3</h3><p>Description for Item 3</p>"));
        assert!(!html.contains(LOADING_INDICATOR));
        assert!(!html.contains("Error:"));
    }

    #[test]
    fn empty_success_still_renders_the_page() {
        let html = render(&FetchState::Success(Vec::new()));
        assert!(html.contains("Items from API"));
        assert_eq!(html.matches("item-card").count(), 0);
    }

    #[test]
    fn text_is_escaped() {
        let item = Item {
            id: 9,
            name: "<b>Bold</b>".to_string(),
            description: "Tom & \"Jerry\"".to_string(),
        };
        let card = render_item(&item);
        assert!(card.contains("<h3>&lt;b&gt;Bold&lt;/b&gt;</h3>"));
        assert!(card.contains("<p>Tom &amp; &quot;Jerry&quot;</p>"));

        let html = render(&FetchState::Error("<script>".to_string()));
        assert_eq!(html, r#"<div class="App">Error: &lt;script&gt;</div>"#);
    }
}
