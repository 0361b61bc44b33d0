use std::fmt::Write;

use crate::{flash::FlashMessage, models::TodoItem};

const PAGE_HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Todo list</title>
  <style>
    body { font-family: sans-serif; max-width: 40rem; margin: 2rem auto; }
    .flash.error { color: #a00; border: 1px solid #a00; padding: .5rem; }
    li.done .title { text-decoration: line-through; color: #777; }
  </style>
</head>
<body>
  <h1>Todo list</h1>
"#;

const PAGE_TAIL: &str = "</body>\n</html>\n";

pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Full listing page: pending notices, the add form, then every item in order.
pub fn render_todo_page(items: &[TodoItem], flashes: &[FlashMessage]) -> String {
    let mut html = String::from(PAGE_HEAD);

    for flash in flashes {
        // Writing into a String cannot fail
        let _ = writeln!(
            html,
            r#"  <div class="flash {}">{}</div>"#,
            escape_html(&flash.category),
            escape_html(&flash.message)
        );
    }

    html.push_str(
        r#"  <form action="/add" method="post">
    <input type="text" name="title" placeholder="New task">
    <button type="submit">Add</button>
  </form>
  <ul>
"#,
    );

    for item in items {
        let (class, status) = if item.completed {
            ("done", "Completed")
        } else {
            ("open", "Not completed")
        };
        let _ = writeln!(
            html,
            r#"    <li class="{class}"><span class="title">{title}</span> <span class="status">{status}</span> <a href="/update/{id}">toggle</a> <a href="/delete/{id}">delete</a></li>"#,
            title = escape_html(&item.title),
            id = item.id,
        );
    }

    html.push_str("  </ul>\n");
    html.push_str(PAGE_TAIL);
    html
}
