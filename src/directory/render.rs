//! Index page rendering.
//!
//! The page is a fixed template: a search box that filters a four-column
//! card grid client-side, plus a footer carrying the rendered member
//! count. Member-derived values are HTML-escaped on substitution, and
//! avatar sources are restricted to web URLs.

use std::fmt::{self, Write};

use crate::directory::model::{Member, MemberList};

const SLACK_ICON: &str = "https://a.slack-edge.com/436da/marketing/img/meta/favicon-32.png";
const SOURCE_LINK: &str = "https://github.com/tink-ab/facelist";

/// Static page head up to the opening grid tag.
const PAGE_HEAD: &str = r#"<!DOCTYPE html>
<html>
  <head>
    <meta charset="utf-8">
    <title>Facelist</title>
    <style>
        body {
            font-family: sans-serif;
        }
        #searchField {
          background-image: url('https://www.w3schools.com/css/searchicon.png');
          background-position: 10px 12px;
          background-repeat: no-repeat;
          width: 50%;
          font-size: 16px;
          padding: 12px 20px 12px 40px;
          border: 1px solid #ddd;
          margin-left: 10px;
          margin-bottom: 12px;
        }
        #container {
            display: grid;
            grid-template-columns: 1fr 1fr 1fr 1fr;
            grid-gap: 10px;
            background-color: #fff;
            color: #444;
        }
        .name {
            font-weight: bold;
        }
        .title {
            color: gray;
        }
        .user {
            padding: 10px;
        }
    </style>
    <script>
    window.onload = function() {
      document.getElementById("searchField").focus();
    };
    function search() {
      var filter = document.getElementById("searchField").value.toUpperCase();
      var users = document.getElementById("container").getElementsByClassName("user");
      for (var i = 0; i < users.length; i++) {
        var name = users[i].getElementsByClassName("name")[0];
        var text = name.textContent || name.innerText;
        users[i].style.display = text.toUpperCase().indexOf(filter) > -1 ? "" : "none";
      }
    }
    </script>
  </head>
  <body>
    <input type="text" id="searchField" onkeyup="search()" placeholder="Search by name...">
    <div id="container">
"#;

const PAGE_TAIL: &str = "  </body>\n</html>\n";

/// Render the full index page for an already filtered and sorted list.
pub fn index_page(list: &MemberList) -> Result<String, fmt::Error> {
    let mut page = String::with_capacity(PAGE_HEAD.len() + 512 * list.members.len() + 256);
    page.push_str(PAGE_HEAD);

    for member in &list.members {
        write_card(&mut page, member)?;
    }

    page.push_str("    </div>\n    <hr>\n");
    writeln!(
        page,
        "    {} faces served by <a href=\"{}\">{}</a>",
        list.members.len(),
        SOURCE_LINK,
        SOURCE_LINK
    )?;
    page.push_str(PAGE_TAIL);

    Ok(page)
}

/// One member card: bold name with a deep-link icon, gray title line,
/// and the avatar linking to the same deep link.
fn write_card(page: &mut String, member: &Member) -> fmt::Result {
    let name = escape_html(member.display_name());
    let first_name = escape_html(&member.profile.first_name);
    let title = escape_html(&member.profile.title);
    let image = escape_html(safe_image_url(&member.profile.image));
    let link = format!(
        "slack://user?team={}&id={}",
        escape_html(&member.team_id),
        escape_html(&member.id)
    );

    write!(
        page,
        r#"        <div class="user">
            <div class="name">{name}
            <a href="{link}">
                <img src="{SLACK_ICON}" title="Contact {first_name} on Slack" width="16" height="16"/>
            </a>
            </div>
            <div class="title">{title}&nbsp;</div>
            <a href="{link}">
                <img src="{image}" title="Contact {first_name} on Slack"/>
            </a>
        </div>
"#
    )
}

/// Allow only web URLs as image sources. Anything else the upstream
/// hands us (javascript:, data:, file:) is blanked so it cannot run.
fn safe_image_url(url: &str) -> &str {
    if url.starts_with("https://") || url.starts_with("http://") {
        url
    } else {
        ""
    }
}

/// Minimal HTML escape covering text and attribute contexts.
fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::model::Profile;

    fn member(id: &str, real_name: &str) -> Member {
        Member {
            name: format!("login-{}", id),
            id: id.to_string(),
            team_id: "T024BE7LD".to_string(),
            profile: Profile {
                first_name: "Jane".to_string(),
                real_name: real_name.to_string(),
                title: "Engineer".to_string(),
                image: format!("https://example.com/{}_192.jpg", id),
                ..Profile::default()
            },
            ..Member::default()
        }
    }

    fn list_of(members: Vec<Member>) -> MemberList {
        MemberList {
            team: "T024BE7LD".to_string(),
            members,
        }
    }

    #[test]
    fn test_cards_deep_link_to_the_member() {
        let page = index_page(&list_of(vec![member("U99", "Jane Doe")])).expect("render");
        assert!(page.contains("slack://user?team=T024BE7LD&id=U99"));
        assert!(page.contains("https://example.com/U99_192.jpg"));
        assert!(page.contains("Contact Jane on Slack"));
    }

    #[test]
    fn test_footer_counts_rendered_members() {
        let page = index_page(&list_of(vec![
            member("U1", "Jane Doe"),
            member("U2", "Joe Doe"),
        ]))
        .expect("render");
        assert!(page.contains("2 faces served by"));
    }

    #[test]
    fn test_empty_list_still_renders_the_page_shell() {
        let page = index_page(&list_of(Vec::new())).expect("render");
        assert!(page.contains("id=\"searchField\""));
        assert!(page.contains("0 faces served by"));
    }

    #[test]
    fn test_member_text_is_escaped() {
        let mut evil = member("U1", "Jane <script>alert(1)</script>");
        evil.profile.title = "Head of R&D".to_string();

        let page = index_page(&list_of(vec![evil])).expect("render");
        assert!(page.contains("Jane &lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(page.contains("Head of R&amp;D"));
        assert!(!page.contains("<script>alert"));
    }

    #[test]
    fn test_attribute_quotes_are_escaped() {
        let mut evil = member("U1", "Jane Doe");
        evil.profile.image = "https://example.com/x\" onerror=\"alert(1)".to_string();

        let page = index_page(&list_of(vec![evil])).expect("render");
        assert!(page.contains("https://example.com/x&quot; onerror=&quot;alert(1)"));
        assert!(!page.contains("onerror=\"alert"));
    }

    #[test]
    fn test_non_web_image_schemes_are_blanked() {
        let mut evil = member("U1", "Jane Doe");
        evil.profile.image = "javascript:alert(1)".to_string();
        let mut sneaky = member("U2", "Joe Doe");
        sneaky.profile.image = "data:text/html,<script>alert(1)</script>".to_string();

        let page = index_page(&list_of(vec![evil, sneaky])).expect("render");
        assert!(!page.contains("javascript:"));
        assert!(!page.contains("data:text/html"));
        assert!(page.contains("<img src=\"\" title=\"Contact Jane on Slack\"/>"));
    }

    #[test]
    fn test_web_image_urls_pass_through() {
        let page = index_page(&list_of(vec![member("U1", "Jane Doe")])).expect("render");
        assert!(page.contains("<img src=\"https://example.com/U1_192.jpg\""));
    }

    #[test]
    fn test_name_falls_back_to_account_name() {
        let mut anon = member("U1", "");
        anon.name = "jdoe".to_string();

        let page = index_page(&list_of(vec![anon])).expect("render");
        assert!(page.contains("<div class=\"name\">jdoe"));
    }

    #[test]
    fn test_empty_title_keeps_the_placeholder_space() {
        let mut untitled = member("U1", "Jane Doe");
        untitled.profile.title = String::new();

        let page = index_page(&list_of(vec![untitled])).expect("render");
        assert!(page.contains("<div class=\"title\">&nbsp;</div>"));
    }
}
