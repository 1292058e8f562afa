//! Shared HTML rendering
//!
//! Every route in this service is server-rendered. Pages are built from
//! format! templates around a common shell; values interpolated from
//! user input or external services pass through `escape_html`.

use chrono::{Datelike, Utc};

/// Shared stylesheet served inline with every page
const STYLES: &str = r#"
        * {
            margin: 0;
            padding: 0;
            box-sizing: border-box;
        }
        body {
            font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
            background-color: #1a1a1a;
            color: #e0e0e0;
            line-height: 1.6;
        }
        header {
            background-color: #2a2a2a;
            border-bottom: 1px solid #3a3a3a;
            padding: 20px;
            margin-bottom: 30px;
        }
        h1 {
            font-size: 26px;
            margin-bottom: 5px;
            color: #4a9eff;
        }
        .subtitle {
            color: #888;
            font-size: 16px;
        }
        nav a {
            color: #4a9eff;
            text-decoration: none;
            margin-right: 15px;
        }
        .container {
            padding: 0 20px 40px;
            max-width: 960px;
            margin: 0 auto;
        }
        .flash {
            background: #10b981;
            color: #fff;
            padding: 10px 15px;
            border-radius: 4px;
            margin-bottom: 20px;
        }
        .error-banner {
            background: #ef4444;
            color: #fff;
            padding: 10px 15px;
            border-radius: 4px;
            margin-bottom: 20px;
        }
        table {
            width: 100%;
            border-collapse: collapse;
            margin-bottom: 20px;
        }
        th, td {
            text-align: left;
            padding: 10px;
            border-bottom: 1px solid #3a3a3a;
        }
        td img {
            height: 60px;
            border-radius: 4px;
        }
        .button {
            display: inline-block;
            padding: 10px 20px;
            background: #4a9eff;
            color: white;
            text-decoration: none;
            border: none;
            border-radius: 4px;
            margin: 10px 5px 10px 0;
            font-weight: 600;
            cursor: pointer;
        }
        .button:hover {
            background: #3a8eef;
        }
        .button.danger {
            background: #ef4444;
        }
        .card-grid {
            display: grid;
            grid-template-columns: repeat(auto-fill, minmax(220px, 1fr));
            gap: 20px;
        }
        .card {
            background: #2a2a2a;
            border: 1px solid #3a3a3a;
            border-radius: 6px;
            padding: 15px;
        }
        .card img {
            width: 100%;
            border-radius: 4px;
            margin-bottom: 10px;
        }
        form label {
            display: block;
            margin: 15px 0 5px;
            color: #888;
            font-size: 14px;
        }
        input[type=text], textarea {
            width: 100%;
            padding: 8px;
            background: #2a2a2a;
            color: #e0e0e0;
            border: 1px solid #3a3a3a;
            border-radius: 4px;
        }
        input[type=range] {
            width: 100%;
        }
        footer {
            color: #555;
            text-align: center;
            padding: 20px;
            font-size: 13px;
        }
"#;

/// Escape text for interpolation into HTML bodies and attribute values
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

/// Wrap a page body in the common shell (header, nav, flash banner, footer)
pub fn layout(title: &str, subtitle: &str, flash: Option<&str>, body: &str) -> String {
    let flash_banner = match flash {
        Some(message) => format!(r#"<div class="flash">{}</div>"#, escape_html(message)),
        None => String::new(),
    };
    let year = Utc::now().year();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>{STYLES}</style>
</head>
<body>
    <header>
        <h1>{title}</h1>
        <p class="subtitle">{subtitle}</p>
        <nav>
            <a href="/">Home</a>
            <a href="/songs">Songs</a>
            <a href="/movies">Movies</a>
        </nav>
    </header>
    <div class="container">
        {flash_banner}
        {body}
    </div>
    <footer>topshelf &middot; {year}</footer>
</body>
</html>"#,
        title = escape_html(title),
        subtitle = escape_html(subtitle),
    )
}

/// Standalone error page used by ApiError responses
pub fn error_page(heading: &str, message: &str) -> String {
    let body = format!(
        r#"<p>{}</p>
        <a class="button" href="/">Back to menu</a>"#,
        escape_html(message)
    );
    layout(heading, "Something went wrong.", None, &body)
}

/// Rating column text: the numeric rating, or the prompt for unrated records
pub fn rating_display(rating: Option<f64>) -> String {
    match rating {
        Some(r) => format!("{:.1}", r),
        None => "Add your rating!".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_html_metacharacters() {
        assert_eq!(
            escape_html(r#"<b>"Tom & Jerry's"</b>"#),
            "&lt;b&gt;&quot;Tom &amp; Jerry&#39;s&quot;&lt;/b&gt;"
        );
    }

    #[test]
    fn layout_includes_flash_banner_when_present() {
        let page = layout("Title", "Sub", Some("Added!"), "<p>body</p>");
        assert!(page.contains(r#"<div class="flash">Added!</div>"#));
    }

    #[test]
    fn layout_omits_flash_banner_when_absent() {
        let page = layout("Title", "Sub", None, "<p>body</p>");
        assert!(!page.contains(r#"class="flash""#));
    }

    #[test]
    fn unrated_records_render_the_prompt() {
        assert_eq!(rating_display(None), "Add your rating!");
        assert_eq!(rating_display(Some(7.5)), "7.5");
    }
}
