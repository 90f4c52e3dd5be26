/// Page renderer for the studio.
///
/// One HTML template (`studio/assets/playground.html`) serves all three
/// demos. Global placeholders (demo slug, nav, fit state) are resolved here;
/// the caller's closure fills the rest, and anything left unfilled is
/// blanked so raw `{{TOKEN}}` strings never reach the browser.

use decision_canvas::Demo;

use crate::state::{FlashKind, FlashMessage};

const TEMPLATE: &str = include_str!("assets/playground.html");

pub fn render_page<F>(demo: Demo, fit_running: bool, fill: F) -> String
where
    F: FnOnce(String) -> String,
{
    let html = TEMPLATE
        .replace("{{TITLE}}", demo.title())
        .replace("{{DEMO}}", demo.slug())
        .replace("{{NAV}}", &build_nav(demo))
        .replace("{{FIT_RUNNING}}", if fit_running { "true" } else { "false" })
        .replace("{{LOCKED}}", if fit_running { "disabled" } else { "" });

    blank_remaining(fill(html))
}

fn build_nav(active: Demo) -> String {
    Demo::ALL.iter()
        .map(|&demo| {
            let class = if demo == active { "tab active" } else { "tab" };
            format!(r#"<a class="{class}" href="/{slug}">{title}</a>"#,
                slug = demo.slug(), title = demo.title())
        })
        .collect()
}

pub fn render_flash_html(flash: Option<&FlashMessage>) -> String {
    match flash {
        None    => String::new(),
        Some(f) => {
            let cls = match f.kind {
                FlashKind::Success => "flash-success",
                FlashKind::Error   => "flash-error",
            };
            format!(r#"<div class="flash {}">{}</div>"#, cls, html_escape(&f.text))
        }
    }
}

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
     .replace('<', "&lt;")
     .replace('>', "&gt;")
     .replace('"', "&quot;")
}

/// Replaces any `{{TOKEN}}` the caller did not substitute with nothing.
fn blank_remaining(mut html: String) -> String {
    let mut cursor = 0;
    while let Some(offset) = html[cursor..].find("{{") {
        let start = cursor + offset;
        match html[start..].find("}}") {
            Some(end) => html.replace_range(start..start + end + 2, ""),
            None => break,
        }
        cursor = start;
    }
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leftover_tokens_are_blanked() {
        assert_eq!(blank_remaining("a{{X}}b{{Y}}c".into()), "abc");
        assert_eq!(blank_remaining("open {{ only".into()), "open {{ only");
    }
}
