use crate::shared::infrastructure::flash::FlashMessage;

pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Breadcrumb entry; the last one is rendered without a link.
pub struct Crumb<'a> {
    pub label: &'a str,
    pub href: Option<&'a str>,
}

/// `<option>` tags for `(value, label)` pairs, marking `selected` as chosen.
pub fn select_options<'a>(
    options: impl IntoIterator<Item = (&'a str, &'a str)>,
    selected: Option<&str>,
) -> String {
    options
        .into_iter()
        .map(|(value, label)| {
            let chosen = if Some(value) == selected {
                " selected"
            } else {
                ""
            };
            format!(
                "<option value='{}'{chosen}>{}</option>",
                escape_html(value),
                escape_html(label)
            )
        })
        .collect()
}

fn flash_banner(flash: Option<&FlashMessage>) -> String {
    match flash {
        Some(flash) => format!(
            "<div class='alert alert-{}' role='alert'>{}</div>",
            flash.level.as_str(),
            escape_html(&flash.message)
        ),
        None => String::new(),
    }
}

fn breadcrumb(crumbs: &[Crumb<'_>]) -> String {
    if crumbs.is_empty() {
        return String::new();
    }
    let items: String = crumbs
        .iter()
        .map(|crumb| match crumb.href {
            Some(href) => format!(
                "<li class='breadcrumb-item'><a href='{}'>{}</a></li>",
                escape_html(href),
                escape_html(crumb.label)
            ),
            None => format!(
                "<li class='breadcrumb-item active' aria-current='page'>{}</li>",
                escape_html(crumb.label)
            ),
        })
        .collect();
    format!("<nav aria-label='breadcrumb'><ol class='breadcrumb'>{items}</ol></nav>")
}

/// Full page around already-rendered `content`.
pub fn layout(
    title: &str,
    flash: Option<&FlashMessage>,
    crumbs: &[Crumb<'_>],
    content: &str,
) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang='en'>
<head>
    <meta charset='utf-8'>
    <meta name='viewport' content='width=device-width, initial-scale=1'>
    <title>{}</title>
    <link rel='stylesheet' href='https://cdn.datatables.net/2.0.8/css/dataTables.dataTables.min.css'>
</head>
<body>
    <main class='container'>
        {}
        {}
        {}
    </main>
</body>
</html>"#,
        escape_html(title),
        breadcrumb(crumbs),
        flash_banner(flash),
        content
    )
}
