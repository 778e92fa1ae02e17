//! Built-in `bluesky-post` template
//!
//! ```html
//! <figure>
//!   <blockquote data-key="record.text"></blockquote>
//!   <figcaption>
//!     <cite><a data-key="url" data-role="link">@<span data-key="username"></span></a></cite>
//!     <dl>
//!       <dt>Reposts</dt><dd data-key="repostCount"></dd>
//!       <dt>Replies</dt><dd data-key="replyCount"></dd>
//!       <dt>Likes</dt><dd data-key="likeCount"></dd>
//!     </dl>
//!   </figcaption>
//! </figure>
//! ```

use crate::dom::{Element, Fragment};
use crate::error::Result;
use crate::util::{ROLE_ATTRIBUTE, SLOT_ATTRIBUTE};

use super::registry::{Template, TemplateRegistry};

/// Tag name the post embed registers under by default
pub const DEFAULT_TAG: &str = "bluesky-post";

/// Id of the built-in template (`<tag>-template` for the default tag)
pub const DEFAULT_TEMPLATE_ID: &str = "bluesky-post-template";

fn slot(tag: &str, key: &str) -> Element {
    Element::new(tag).attr(SLOT_ATTRIBUTE, key)
}

fn count(label: &str, key: &str) -> [Element; 2] {
    [Element::new("dt").text(label), slot("dd", key)]
}

/// The built-in post template
pub fn bluesky_post_template() -> Template {
    let mut counts = Element::new("dl");
    for [dt, dd] in [
        count("Reposts", "repostCount"),
        count("Replies", "replyCount"),
        count("Likes", "likeCount"),
    ] {
        counts = counts.child(dt).child(dd);
    }

    let author = slot("a", "url")
        .attr(ROLE_ATTRIBUTE, "link")
        .text("@")
        .child(slot("span", "username"));

    let figure = Element::new("figure")
        .child(slot("blockquote", "record.text"))
        .child(
            Element::new("figcaption")
                .child(Element::new("cite").child(author))
                .child(counts),
        );

    Template::new(DEFAULT_TEMPLATE_ID, Fragment::new(vec![figure.into()]))
}

/// Register the built-in template unless the id is already taken
pub fn register_default(registry: &TemplateRegistry) -> Result<bool> {
    registry.register_once(bluesky_post_template())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::ToHtml;

    #[test]
    fn default_id_follows_tag_convention() {
        assert_eq!(DEFAULT_TEMPLATE_ID, format!("{DEFAULT_TAG}-template"));
    }

    #[test]
    fn template_declares_all_slots() {
        let template = bluesky_post_template();
        let keys: Vec<_> = template
            .content
            .find_marked(SLOT_ATTRIBUTE)
            .iter()
            .filter_map(|e| e.get_attr(SLOT_ATTRIBUTE))
            .collect();
        assert_eq!(
            keys,
            vec!["record.text", "url", "username", "repostCount", "replyCount", "likeCount"]
        );
    }

    #[test]
    fn template_markup() {
        let html = bluesky_post_template().content.to_html_string();
        assert!(html.starts_with("<figure><blockquote data-key=\"record.text\"></blockquote>"));
        assert!(html.contains("<a data-key=\"url\" data-role=\"link\">@<span data-key=\"username\"></span></a>"));
        assert!(html.contains("<dt>Likes</dt><dd data-key=\"likeCount\"></dd>"));
    }

    #[test]
    fn register_default_twice() {
        let registry = TemplateRegistry::new();
        assert!(register_default(&registry).unwrap());
        assert!(!register_default(&registry).unwrap());
    }
}
