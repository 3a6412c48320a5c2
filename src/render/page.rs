use std::fmt::Write;

use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};

use super::{board::Board, card::Card};
use crate::error::Result;

const STYLE: &str = "\
body{font-family:system-ui,sans-serif;background:#111;color:#eee;margin:0;padding:1rem}
h2{margin:1.5rem 0 .5rem}
.cards{display:grid;grid-template-columns:repeat(auto-fill,minmax(18rem,1fr));gap:.75rem}
.card{background:#1c1c1c;border:1px solid #333;border-radius:.5rem;padding:.75rem;display:grid;grid-template-columns:1fr auto;gap:.25rem}
.card.open{border-color:#2e7d32}
.name{display:flex;gap:.5rem;align-items:center;font-weight:600}
.badge{font-size:.75rem;padding:0 .4rem;border-radius:.25rem}
.badge.open{background:#2e7d32}.badge.closed{background:#7d2e2e}
.meta,.hours{color:#aaa;font-size:.9rem}
.tags{grid-column:1/-1;display:flex;flex-wrap:wrap;gap:.25rem}
.tag{font-size:.75rem;padding:0 .4rem;border-radius:1rem;background:#b08d1a}
.tag.diet{background:#2e7d32}.tag.halal{background:#1a5fb0}
.btn{color:#9cf}
.error{color:#f99}
";

/// Full HTML page with the open list above the closed list.
///
/// When `failure` is set it is shown in place of the open list, the way the
/// page reports a data file that could not be loaded.
pub fn render_html(board: &Board, failure: Option<&str>) -> Result<String> {
    let mut page = String::new();
    writeln!(page, "<!doctype html>")?;
    writeln!(page, "<html lang=\"en\">")?;
    writeln!(page, "<head>")?;
    writeln!(page, "<meta charset=\"utf-8\">")?;
    writeln!(page, "<title>Dining: open now</title>")?;
    writeln!(page, "<style>\n{}</style>", STYLE)?;
    writeln!(page, "</head>")?;
    writeln!(page, "<body>")?;

    writeln!(page, "<h2>Open now</h2>")?;
    writeln!(page, "<section id=\"open-cards\" class=\"cards\">")?;
    if let Some(message) = failure {
        writeln!(page, "<pre class=\"error\">{}</pre>", text(message))?;
    }
    for card in &board.open {
        write_card(&mut page, card)?;
    }
    writeln!(page, "</section>")?;

    writeln!(page, "<h2>Closed</h2>")?;
    writeln!(page, "<section id=\"closed-cards\" class=\"cards\">")?;
    for card in &board.closed {
        write_card(&mut page, card)?;
    }
    writeln!(page, "</section>")?;

    writeln!(page, "</body>")?;
    writeln!(page, "</html>")?;
    Ok(page)
}

fn write_card(page: &mut String, card: &Card) -> std::fmt::Result {
    let (class, badge) = if card.is_open {
        ("card open", "<span class=\"badge open\">Open</span>")
    } else {
        ("card", "<span class=\"badge closed\">Closed</span>")
    };

    writeln!(page, "<article class=\"{}\">", class)?;
    writeln!(
        page,
        "<div class=\"name\"><span>{}</span>{}</div>",
        text(&card.name),
        badge
    )?;
    writeln!(
        page,
        "<a class=\"btn\" href=\"{}\" target=\"_blank\" rel=\"noopener\">Directions</a>",
        attr(&card.href)
    )?;
    writeln!(page, "<div class=\"meta\">{}</div>", text(&card.meta))?;
    writeln!(page, "<div class=\"hours\">{}</div>", text(&card.hours))?;
    write!(page, "<div class=\"tags\">")?;
    for tag in &card.tags {
        write!(
            page,
            "<span class=\"{}\">{}</span>",
            tag.class.css(),
            text(&tag.label)
        )?;
    }
    writeln!(page, "</div>")?;
    writeln!(page, "</article>")
}

/// Plain listing for terminals.
pub fn render_text(board: &Board) -> Result<String> {
    let mut out = String::new();
    for (heading, cards) in [("Open now", &board.open), ("Closed", &board.closed)] {
        writeln!(out, "{} ({})", heading, cards.len())?;
        for card in cards {
            writeln!(out, "  {:<32} {:<24} {}", card.name, card.hours, card.meta)?;
        }
    }
    Ok(out)
}

pub fn render_json(board: &Board) -> Result<String> {
    Ok(serde_json::to_string_pretty(board)?)
}
