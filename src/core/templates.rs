//! Template system for the generated HTML page.
//!
//! Pages are assembled from static templates containing `{placeholder}`
//! markers. Rendering is a single pass over the template with a pre-sized
//! output buffer: known placeholders are replaced from a [`TemplateContext`],
//! unknown ones (including CSS and JavaScript blocks) are copied verbatim.
//!
//! # Public API
//! - [`Templates`]: Template definitions for the page and its fragments
//! - [`TEMPLATES`]: Global template instance
//! - [`TemplateContext`]: Values substituted into a template
//! - [`render_template`]: Single-pass renderer
//! - [`escape_html`], [`escape_js_string`]: Escaping for values placed in markup
//!
//! Context values are inserted as-is; callers escape them first.

use std::fmt::Write;

/// Template definitions for the page and its fragments
pub struct Templates {
    pub page: &'static str,
    pub stylesheet_link: &'static str,
    pub column: &'static str,
    pub item: &'static str,
    pub item_unsupported: &'static str,
}

/// Global templates instance
pub static TEMPLATES: Templates = Templates {
    page: PAGE_TEMPLATE,
    stylesheet_link: r#"    <link href="{href}" rel="stylesheet" media="all" class="default" />"#,
    column: r#"    <div class="column" style="float:left; width:{width};">
        <ul>{items}
        </ul>
    </div>"#,
    item: r#"
            <li>
                <button onclick="copyCommand('{command_js}')" title="Click to copy command: {command}">Copy</button>
                <a href="{href}">{filename}</a>
            </li>"#,
    item_unsupported: r#"
            <li>
                <button onclick="alert('Unsupported file type!')" title="Unsupported file type">Copy</button>
                <a href="{href}">{filename}</a>
            </li>"#,
};

const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta http-equiv="Content-Type" content="text/html; charset=UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <meta content="{site_name}" property="og:site_name">
    <meta content="{tagline}" property="og:tagline" name="tagline">
    <meta content="{description}" property="og:description" name="description">
    <meta content="{author}" property="article:author">
    <meta property="og:image" content="{image_url}">
    <meta content="{heading}" property="og:title">
    <meta content="article" property="og:type">
    <meta content="{page_url}" property="og:url">
    <link rel="canonical" href="{page_url}">
    <title>{title}</title>
{stylesheets}
    <style>
        body {
            font-family: Arial, sans-serif;
        }
        h1 {
            text-align: center;
        }
        ul {
            list-style-type: none;
            padding: 0;
        }
        li {
            margin: 5px 0;
            display: flex;
            align-items: center;
        }
        a {
            margin-left: 10px;
            text-decoration: none;
            color: #007BFF;
        }
        a:hover {
            text-decoration: underline;
        }
        button {
            margin-left: 10px;
            padding: 5px 10px;
            cursor: pointer;
            background-color: #007BFF;
            color: #FFF;
            border: none;
            border-radius: 3px;
        }
        button:hover {
            background-color: #0056b3;
        }
        .copy-notification {
            position: fixed;
            top: 20em;
            left: 50%;
            transform: translateX(-50%);
            display: none;
            padding: 10px;
            background-color: #dff0d8;
            color: #3c763d;
            border: 1px solid #d6e9c6;
            border-radius: 4px;
            text-align: center;
            width: fit-content;
        }
    </style>
    <meta name="twitter:card" content="summary_large_image">
    <meta name="twitter:site" content="{twitter_handle}">
    <meta name="twitter:creator" content="{twitter_handle}">
    <meta name="twitter:title" content="{heading}">
    <meta name="twitter:description" content="{twitter_description}">
    <meta property="twitter:image" content="{image_url}">
</head>
<body>
    <h1>{heading}</h1>
    <div class="copy-notification" id="copyNotification">Command copied to clipboard!</div>
{columns}
    <script>
        function copyCommand(command) {
            navigator.clipboard.writeText(command).then(() => {
                const notification = document.getElementById('copyNotification');
                notification.style.display = 'block';
                setTimeout(() => {
                    notification.style.display = 'none';
                }, {notification_ms});
            }, (err) => {
                alert('Failed to copy!', err);
            });
        }
    </script>
</body>
</html>
"#;

/// Context for template rendering
#[derive(Debug, Default)]
pub struct TemplateContext<'a> {
    // Page head
    pub title: Option<&'a str>,
    pub heading: Option<&'a str>,
    pub site_name: Option<&'a str>,
    pub tagline: Option<&'a str>,
    pub description: Option<&'a str>,
    pub twitter_description: Option<&'a str>,
    pub author: Option<&'a str>,
    pub image_url: Option<&'a str>,
    pub page_url: Option<&'a str>,
    pub twitter_handle: Option<&'a str>,
    pub stylesheets: Option<&'a str>,

    // Page body
    pub columns: Option<&'a str>,
    pub notification_ms: Option<u64>,

    // Column and item fragments
    pub width: Option<&'a str>,
    pub items: Option<&'a str>,
    pub href: Option<&'a str>,
    pub filename: Option<&'a str>,
    pub command: Option<&'a str>,
    pub command_js: Option<&'a str>,
}

impl<'a> TemplateContext<'a> {
    fn lookup(&self, placeholder: &str) -> Option<Option<&'a str>> {
        let value = match placeholder {
            "title" => self.title,
            "heading" => self.heading,
            "site_name" => self.site_name,
            "tagline" => self.tagline,
            "description" => self.description,
            "twitter_description" => self.twitter_description,
            "author" => self.author,
            "image_url" => self.image_url,
            "page_url" => self.page_url,
            "twitter_handle" => self.twitter_handle,
            "stylesheets" => self.stylesheets,
            "columns" => self.columns,
            "width" => self.width,
            "items" => self.items,
            "href" => self.href,
            "filename" => self.filename,
            "command" => self.command,
            "command_js" => self.command_js,
            _ => return None,
        };
        Some(value)
    }

    fn estimated_len(&self) -> usize {
        [
            self.title,
            self.heading,
            self.site_name,
            self.tagline,
            self.description,
            self.twitter_description,
            self.author,
            self.image_url,
            self.page_url,
            self.twitter_handle,
            self.stylesheets,
            self.columns,
            self.width,
            self.items,
            self.href,
            self.filename,
            self.command,
            self.command_js,
        ]
        .iter()
        .map(|value| value.map_or(0, str::len))
        .sum()
    }
}

/// Render a template with context
pub fn render_template(template: &str, context: &TemplateContext) -> String {
    // Placeholders like {heading} and {page_url} appear twice in the page
    let estimated_capacity = template.len() + context.estimated_len() * 2 + 64;
    let mut result = String::with_capacity(estimated_capacity);

    render_template_single_pass(template, context, &mut result);

    result
}

/// Single-pass template renderer
fn render_template_single_pass(template: &str, context: &TemplateContext, output: &mut String) {
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        output.push_str(&rest[..open]);
        let after_open = &rest[open + 1..];

        let Some(close) = after_open.find('}') else {
            // No closing brace found, treat as literal
            output.push_str(&rest[open..]);
            return;
        };

        let placeholder = &after_open[..close];
        if placeholder == "notification_ms" {
            match context.notification_ms {
                Some(ms) => {
                    let _ = write!(output, "{ms}");
                }
                None => output.push_str(&rest[open..open + close + 2]),
            }
        } else {
            match context.lookup(placeholder) {
                Some(Some(value)) => output.push_str(value),
                Some(None) => {}
                None => {
                    // Unknown placeholder (CSS rule, JS block), keep as-is
                    output.push_str(&rest[open..open + close + 2]);
                }
            }
        }

        rest = &after_open[close + 1..];
    }

    output.push_str(rest);
}

/// Escape text for use in HTML content and double-quoted attributes
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Escape text for use inside a single-quoted JavaScript string literal
pub fn escape_js_string(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len() + 8);
    for ch in text.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '\'' => escaped.push_str("\\'"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_item_template() {
        let context = TemplateContext {
            href: Some("a.sh"),
            filename: Some("a.sh"),
            command: Some("curl -sSL 'https://x/a.sh' | bash"),
            command_js: Some("curl -sSL \\'https://x/a.sh\\' | bash"),
            ..Default::default()
        };
        let result = render_template(TEMPLATES.item, &context);
        assert!(result.contains(
            r#"onclick="copyCommand('curl -sSL \'https://x/a.sh\' | bash')""#
        ));
        assert!(result.contains("title=\"Click to copy command: curl -sSL 'https://x/a.sh' | bash\""));
        assert!(result.contains(r#"<a href="a.sh">a.sh</a>"#));
    }

    #[test]
    fn test_render_unsupported_item() {
        let context = TemplateContext {
            href: Some("odd.bin"),
            filename: Some("odd.bin"),
            ..Default::default()
        };
        let result = render_template(TEMPLATES.item_unsupported, &context);
        assert!(result.contains("alert('Unsupported file type!')"));
        assert!(result.contains(r#"title="Unsupported file type""#));
    }

    #[test]
    fn test_page_keeps_css_and_script_blocks() {
        let context = TemplateContext {
            title: Some("T"),
            columns: Some(""),
            notification_ms: Some(2000),
            ..Default::default()
        };
        let result = render_template(TEMPLATES.page, &context);
        assert!(result.contains("body {\n            font-family: Arial, sans-serif;\n        }"));
        assert!(result.contains("function copyCommand(command) {"));
        assert!(result.contains("}, 2000);"));
        assert!(result.contains("<title>T</title>"));
        assert!(result.ends_with("</html>\n"));
    }

    #[test]
    fn test_single_pass_renderer_unknown_placeholder() {
        let mut output = String::new();
        render_template_single_pass("Hello {unknown}!", &TemplateContext::default(), &mut output);
        assert_eq!(output, "Hello {unknown}!");
    }

    #[test]
    fn test_single_pass_renderer_missing_value_renders_empty() {
        let mut output = String::new();
        render_template_single_pass("[{filename}]", &TemplateContext::default(), &mut output);
        assert_eq!(output, "[]");
    }

    #[test]
    fn test_single_pass_renderer_malformed_placeholder() {
        let mut output = String::new();
        render_template_single_pass("Hello {incomplete", &TemplateContext::default(), &mut output);
        assert_eq!(output, "Hello {incomplete");
    }

    #[test]
    fn test_single_pass_renderer_nested_braces() {
        let mut output = String::new();
        let template = "f() { if (x) { y(); } }";
        render_template_single_pass(template, &TemplateContext::default(), &mut output);
        assert_eq!(output, template);
    }

    #[test]
    fn test_single_pass_renderer_multibyte_text() {
        let context = TemplateContext {
            heading: Some("Werkzeuge ✓"),
            ..Default::default()
        };
        let result = render_template("→ {heading} ←", &context);
        assert_eq!(result, "→ Werkzeuge ✓ ←");
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & Jerry</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&lt;/a&gt;"
        );
        assert_eq!(escape_html("plain-name.sh"), "plain-name.sh");
    }

    #[test]
    fn test_escape_js_string() {
        assert_eq!(escape_js_string("it's"), "it\\'s");
        assert_eq!(escape_js_string(r"C:\tools"), r"C:\\tools");
    }
}
