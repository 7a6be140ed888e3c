//! Embedded link-markup resolver
//!
//! Stored text fields embed cross-references as `{text[:type[:tags]][@@extra]}`.
//! This module rewrites them into the target markup; the format selects
//! only the concrete markup emitted, never which rule applies.
//!
//! Rules, in priority order:
//! 1. `nolink` (tag or type): inert styled label
//! 2. `src` type: italics, no hyperlink
//! 3. `url` type: external hyperlink, address after `@@` (tag slot as a
//!    fallback for older data)
//! 4. any other type with an `@@` suffix: internal hyperlink whose query
//!    is the literal link text
//! 5. otherwise: internal hyperlink targeting the canonical name exactly,
//!    with homonym/POS qualifiers and superscript markers

use serde::{Deserialize, Serialize};

/// Markup dialect emitted by the resolver.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkFormat {
    Html,
    Markdown,
}

/// Rewrite every `{...}` descriptor in `text`. Text outside descriptors
/// passes through verbatim, with newlines converted to the format's line
/// break. An unterminated `{` is not an error: the remainder passes
/// through as-is.
pub fn resolve_links(text: &str, format: LinkFormat) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find('}') {
            Some(close) => {
                out.push_str(&render_link(&after[..close], format));
                rest = &after[close + 1..];
            }
            None => {
                out.push_str(&rest[open..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    match format {
        LinkFormat::Html => out.replace('\n', "<br>"),
        LinkFormat::Markdown => out.replace('\n', "  \n"),
    }
}

fn render_link(link: &str, format: LinkFormat) -> String {
    let (primary, extra) = match link.split_once("@@") {
        Some((primary, extra)) => (primary, Some(extra)),
        None => (link, None),
    };
    let mut fields = primary.splitn(3, ':');
    let text = fields.next().unwrap_or_default();
    let link_type = fields.next().unwrap_or_default();
    let tag_slot = fields.next().unwrap_or_default();
    let tags: Vec<&str> = if tag_slot.is_empty() {
        Vec::new()
    } else {
        tag_slot.split(',').collect()
    };

    // 1. inert label
    if tags.contains(&"nolink") || link_type == "nolink" {
        let style_type = if link_type == "nolink" { "" } else { link_type };
        let style = link_style(text, style_type);
        return match format {
            LinkFormat::Html => format!("<b class=\"pos-{style}\" okrand>{text}</b>"),
            LinkFormat::Markdown => format!("**{text}**"),
        };
    }

    // 2. source citation
    if link_type == "src" {
        return match format {
            LinkFormat::Html => format!("<i>{text}</i>"),
            LinkFormat::Markdown => format!("*{text}*"),
        };
    }

    // 3. external link
    if link_type == "url" {
        let addr = extra.unwrap_or(tag_slot);
        return match format {
            LinkFormat::Html => format!("<a target=_blank href=\"{addr}\">{text}</a>"),
            LinkFormat::Markdown => format!("[{text}]({addr})"),
        };
    }

    // 4. literal-text internal link
    if extra.is_some() {
        let style = if link_type.is_empty() { "sen" } else { link_type };
        let query = text.replace(' ', "+");
        return match format {
            LinkFormat::Html => {
                format!("<a href=\"?q={query}\" class=\"pos-{style}\" okrand>{text}</a>")
            }
            LinkFormat::Markdown => format!("[{text}](?q={query})"),
        };
    }

    // 5. exact cross-reference
    let hypothetical = tags.contains(&"hyp");
    let mut homonym = None;
    let mut homonym_filter = None;
    for digit in 1..=9u8 {
        if tags.contains(&digit.to_string().as_str()) {
            homonym = Some(digit);
            homonym_filter = Some(digit);
            break;
        }
        if tags.contains(&format!("{digit}h").as_str()) {
            // hidden homonym: filter without a visible marker
            homonym_filter = Some(digit);
            break;
        }
    }
    let pos_filter = if !link_type.is_empty() && link_type != "sen" {
        format!("+pos:{link_type}")
    } else {
        String::new()
    };
    let hom_filter = homonym_filter
        .map(|digit| format!("+pos:{digit}"))
        .unwrap_or_default();
    let style = link_style(text, link_type);
    let query = text.replace(' ', "+");

    match format {
        LinkFormat::Html => {
            let hyp_sup = if hypothetical { "<sup>?</sup>" } else { "" };
            let hom_sup = homonym
                .map(|digit| format!("<sup>{digit}</sup>"))
                .unwrap_or_default();
            format!(
                "<a href=\"?q=tlh:&quot;^{query}$&quot;{pos_filter}{hom_filter}\" \
                 class=\"pos-{style}\">{hyp_sup}<span okrand>{text}</span>{hom_sup}</a>"
            )
        }
        LinkFormat::Markdown => {
            let hyp_mark = if hypothetical { "?" } else { "" };
            let hom_mark = homonym.map(|digit| digit.to_string()).unwrap_or_default();
            format!("[{text}{hyp_mark}{hom_mark}](?q=tlh:\"^{query}$\"{pos_filter}{hom_filter})")
        }
    }
}

/// Style class: hyphenated link text reads as an affix, otherwise the link
/// type, otherwise the sentence style.
fn link_style<'a>(text: &str, link_type: &'a str) -> &'a str {
    if text.contains('-') {
        "affix"
    } else if !link_type.is_empty() {
        link_type
    } else {
        "sen"
    }
}
