//! HTML shell rendering module
//!
//! Emits the shared page shell (head, banner, navigation, content
//! region, analytics footer) around a fragment body. Rendering is a
//! pure function of the site config, the active entry, and the body.

use crate::config::SiteConfig;
use crate::site::nav::{self, NavEntry};

const LOGO_PATH: &str = "/static/twirssibird.svg";

/// Shown in the content region when the selected fragment cannot be read
const UNAVAILABLE_NOTICE: &str =
    "<div class=\"notice\">This page's content is currently unavailable. \
     Please try again later.</div>";

/// Render the full documentation page around a fragment body
pub fn render_page(site: &SiteConfig, active: &NavEntry, body: &str) -> String {
    let mut html = String::with_capacity(body.len() + 4096);

    html.push_str(&render_head(site));
    html.push_str(&render_banner(site));
    html.push_str(&render_nav(active));
    html.push_str("<div id=\"content\">\n<p>\n");
    html.push_str(body);
    html.push_str("\n</p>\n</div>\n\n");
    html.push_str(&render_analytics(&site.analytics_id));
    html.push_str("</body>\n</html>\n");

    html
}

/// Render the page with a visible placeholder instead of fragment content
pub fn render_unavailable(site: &SiteConfig, active: &NavEntry) -> String {
    render_page(site, active, UNAVAILABLE_NOTICE)
}

/// Document head with the embedded stylesheet
fn render_head(site: &SiteConfig) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}: {tagline}</title>
<link rel="icon" type="image/svg+xml" href="/favicon.svg">
<style>
body {{
    font: 0.8em arial, helvetica, sans-serif;
    background: #80a0ff;
    margin: 0;
    padding: 1em;
}}
code {{
    font-size: medium;
}}
#header ul {{
    list-style: none;
    padding: 0;
    margin: 0;
}}
#header li {{
    float: left;
    border: 1px solid white;
    border-left-width: 0;
    margin: 0;
    font-weight: bold;
    font-size: larger;
}}
#header a {{
    text-decoration: none;
    display: block;
    background: #70a0f0;
    padding: 0.24em 1em;
    color: white;
    width: 8em;
    text-align: center;
}}
#header a:visited {{
    color: white;
}}
#header a:hover {{
    background: #3c68e5;
}}
#header #selected a {{
    position: relative;
    background: white;
    color: black;
}}
#content {{
    clear: both;
    padding: 0.5em 1em;
    background: white;
}}
#content .notice {{
    padding: 1em;
    border: 1px solid #3c68e5;
    background: #eef2ff;
    font-weight: bold;
}}
h1 {{
    margin: 0;
    padding: 0 0 1em 0;
}}
</style>
</head>
<body>
"#,
        title = site.title,
        tagline = site.tagline,
    )
}

/// Logo and title banner
fn render_banner(site: &SiteConfig) -> String {
    format!(
        r#"<p id="title">
<a href="/"><img src="{LOGO_PATH}" alt="{title} logo" style="float:left;margin-right:5px" height="100"></a>
<span style="font-size:2.5em;color:white"><b>{title}</b></span>
<span style="display:block;text-indent:1em;font-size:1.5em;color:#3c68e5">{tagline}</span>
</p>

"#,
        title = site.title,
        tagline = site.tagline,
    )
}

/// Navigation bar listing every listed entry, flagging the active one
///
/// Unlisted entries stay reachable by query key but never appear here.
fn render_nav(active: &NavEntry) -> String {
    let mut items = String::new();

    for (position, entry) in nav::ENTRIES.iter().filter(|e| e.listed).enumerate() {
        let href = entry
            .query_key
            .map_or_else(|| "/".to_string(), |key| format!("?{key}"));
        let selected = if entry == active {
            " id=\"selected\""
        } else {
            ""
        };
        // The leftmost item restores the border collapsed away from the rest
        let style = if position == 0 {
            " style=\"border-left-width: 1px\""
        } else {
            ""
        };

        items.push_str(&format!(
            "\t<li{selected}{style}><a href=\"{href}\">{label}</a></li>\n",
            label = entry.label,
        ));
    }

    format!("<div id=\"header\">\n<ul>\n{items}</ul>\n</div>\n\n")
}

/// Fixed client-side analytics snippet, emitted on every page
fn render_analytics(analytics_id: &str) -> String {
    format!(
        r#"<script type="text/javascript">
var gaJsHost = (("https:" == document.location.protocol) ? "https://ssl." : "http://www.");
document.write(unescape("%3Cscript src='" + gaJsHost + "google-analytics.com/ga.js' type='text/javascript'%3E%3C/script%3E"));
</script>
<script type="text/javascript">
try {{
    var pageTracker = _gat._getTracker("{analytics_id}");
    pageTracker._trackPageview();
}} catch(err) {{}}
</script>
"#,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site::query::parse_keys;

    fn test_site() -> SiteConfig {
        SiteConfig {
            title: "Twirssi".to_string(),
            tagline: "a twitter script for irssi".to_string(),
            fragment_dir: "content".to_string(),
            asset_dir: "static".to_string(),
            analytics_id: "UA-190820-2".to_string(),
        }
    }

    fn active_for(query: Option<&str>) -> &'static NavEntry {
        nav::select_active(&parse_keys(query))
    }

    #[test]
    fn test_fragment_appears_verbatim() {
        let html = render_page(&test_site(), active_for(None), "<h1>About</h1><p>x & y</p>");
        assert!(html.contains("<h1>About</h1><p>x & y</p>"));
    }

    #[test]
    fn test_default_page_selects_about() {
        let html = render_page(&test_site(), active_for(None), "body");
        assert!(html.contains("<li id=\"selected\" style=\"border-left-width: 1px\"><a href=\"/\">About</a></li>"));
    }

    #[test]
    fn test_active_entry_is_flagged_once() {
        let html = render_page(&test_site(), active_for(Some("using")), "body");
        assert!(html.contains("<li id=\"selected\"><a href=\"?using\">Using</a></li>"));
        assert_eq!(html.matches("id=\"selected\"").count(), 1);
    }

    #[test]
    fn test_merch_never_listed_in_nav() {
        // Even when merch itself is the active entry
        let html = render_page(&test_site(), active_for(Some("merch")), "body");
        assert!(!html.contains("?merch"));
        assert!(!html.contains(">Merch<"));
        // ... and nothing else is flagged active in its place
        assert_eq!(html.matches("id=\"selected\"").count(), 0);
    }

    #[test]
    fn test_all_listed_entries_rendered() {
        let html = render_page(&test_site(), active_for(None), "body");
        for label in ["About", "Installing", "Using", "Version History", "Recent Tweets"] {
            assert!(html.contains(&format!(">{label}</a>")), "missing {label}");
        }
    }

    #[test]
    fn test_analytics_snippet_always_present() {
        let site = test_site();
        let html = render_page(&site, active_for(None), "body");
        assert!(html.contains("google-analytics.com/ga.js"));
        assert!(html.contains("_gat._getTracker(\"UA-190820-2\")"));

        // Present on the placeholder page too
        let html = render_unavailable(&site, active_for(Some("installing")));
        assert!(html.contains("google-analytics.com/ga.js"));
    }

    #[test]
    fn test_unavailable_page_has_visible_notice() {
        let html = render_unavailable(&test_site(), active_for(Some("installing")));
        assert!(html.contains("currently unavailable"));
        assert!(html.contains("<li id=\"selected\"><a href=\"?installing\">Installing</a></li>"));
    }

    #[test]
    fn test_shell_contains_title_and_logo() {
        let html = render_page(&test_site(), active_for(None), "body");
        assert!(html.contains("<title>Twirssi: a twitter script for irssi</title>"));
        assert!(html.contains(LOGO_PATH));
    }
}
