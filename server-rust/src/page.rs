//! Server-side rendering of the check-in page.

use html_escape::{encode_double_quoted_attribute, encode_text};
use symbio_sdk::{Mood, ViewState};

const STYLE: &str = r"
body { font-family: system-ui, sans-serif; max-width: 48rem; margin: 0 auto; padding: 2rem 1rem; color: #1e293b; background: #f8fafc; }
header { text-align: center; margin-bottom: 2rem; }
h1 { font-size: 3rem; margin: 0; color: #6366f1; }
.moods { display: flex; flex-wrap: wrap; gap: 0.5rem; justify-content: center; border: none; }
.moods label { padding: 0.5rem 1rem; border: 1px solid #cbd5e1; border-radius: 0.5rem; cursor: pointer; }
.moods input:checked + span { font-weight: bold; color: #6366f1; }
textarea { width: 100%; padding: 0.75rem; border-radius: 0.5rem; border: 1px solid #cbd5e1; }
button { margin-top: 1rem; padding: 0.75rem 2rem; border: none; border-radius: 0.5rem; background: #6366f1; color: white; font-weight: 600; cursor: pointer; }
.card { margin-top: 1.5rem; padding: 1.5rem; border-radius: 0.75rem; background: white; box-shadow: 0 1px 3px rgba(0,0,0,0.1); }
.error { color: #b91c1c; }
blockquote { font-style: italic; margin: 0; }
footer { text-align: center; font-size: 0.75rem; color: #64748b; margin-top: 3rem; }
";

#[must_use]
pub fn render(view: &ViewState) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str(
        "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>Symbio</title>\n",
    );
    html.push_str(&format!("<style>{STYLE}</style>\n</head>\n<body>\n"));
    html.push_str(
        "<header><h1>Symbio</h1><p>Your AI companion for mental wellbeing.</p></header>\n<main>\n",
    );

    render_form(&mut html, view);

    if let Some(error) = &view.error {
        html.push_str(&format!(
            "<section class=\"card error\" role=\"alert\">{}</section>\n",
            encode_text(error)
        ));
    }
    if let Some(advice) = &view.advice {
        html.push_str(&format!(
            "<section class=\"card advice\"><h2>A little advice</h2><p>{}</p>\n",
            encode_text(advice)
        ));
        if view.show_resources() {
            render_resources(&mut html, view);
        }
        html.push_str("</section>\n");
    }
    if let Some(quote) = &view.quote {
        html.push_str(&format!(
            "<section class=\"card quote\"><h2>Quote of the moment</h2><blockquote>{}</blockquote></section>\n",
            encode_text(quote)
        ));
    }

    html.push_str(
        "</main>\n<footer><p>Generated with AI. Not a substitute for professional medical advice.</p></footer>\n\
         </body>\n</html>\n",
    );
    html
}

fn render_form(html: &mut String, view: &ViewState) {
    html.push_str(
        "<form method=\"post\" action=\"/\">\n<h2>How are you feeling today?</h2>\n\
         <fieldset class=\"moods\">\n",
    );
    for mood in Mood::ALL {
        let checked = if view.selected_mood == Some(mood) {
            " checked"
        } else {
            ""
        };
        html.push_str(&format!(
            "<label><input type=\"radio\" name=\"mood\" value=\"{mood}\" required{checked}><span>{mood}</span></label>\n"
        ));
    }
    html.push_str("</fieldset>\n");
    html.push_str(&format!(
        "<label for=\"thoughts\">Share a little more about what's on your mind.</label>\n\
         <textarea id=\"thoughts\" name=\"thoughts\" rows=\"3\" \
         placeholder=\"e.g., I had a really tough day at work.\">{}</textarea>\n",
        encode_text(&view.thoughts)
    ));
    html.push_str("<button type=\"submit\">Get My Advice</button>\n</form>\n");
}

fn render_resources(html: &mut String, view: &ViewState) {
    html.push_str("<div class=\"resources\"><h3>Helpful Resources</h3><ul>\n");
    for resource in view.resources.iter().flatten() {
        html.push_str(&format!(
            "<li><a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a></li>\n",
            encode_double_quoted_attribute(&resource.search_url()),
            encode_text(&resource.title)
        ));
    }
    html.push_str(
        "</ul><p><small>These are search links. If you are in crisis, please call a local \
         emergency number immediately.</small></p></div>\n",
    );
}
