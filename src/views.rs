//! Server-side HTML pages
//!
//! Pure string rendering, no state. Every interpolated value goes through
//! [`escape_html`].

use crate::models::CustomObjectRecord;
use crate::routes;

pub const HOMEPAGE_TITLE: &str = "Custom Objects | Integrating With HubSpot I Practicum";
pub const UPDATE_FORM_TITLE: &str = "Update Custom Object Form | Integrating With HubSpot I Practicum";

/// Render the record table page
pub fn render_homepage(title: &str, records: &[CustomObjectRecord]) -> String {
    let mut body = String::new();

    body.push_str(&format!("<h1>{}</h1>\n", escape_html(title)));
    body.push_str(&format!(
        "<p><a href=\"{}\">Add a new custom object record</a></p>\n",
        routes::UPDATE_COBJ
    ));

    body.push_str("<table>\n<thead>\n<tr>");
    for heading in ["Name", "Species", "Bio", "Dog", "Created"] {
        body.push_str(&format!("<th>{}</th>", heading));
    }
    body.push_str("</tr>\n</thead>\n<tbody>\n");

    if records.is_empty() {
        body.push_str("<tr><td colspan=\"5\">No custom object records found.</td></tr>\n");
    }
    for record in records {
        body.push_str(&render_row(record));
    }

    body.push_str("</tbody>\n</table>\n");

    layout(title, &body)
}

/// Render the record creation form page
pub fn render_update_form(title: &str) -> String {
    let mut body = String::new();

    body.push_str(&format!("<h1>{}</h1>\n", escape_html(title)));
    body.push_str(&format!(
        "<form method=\"POST\" action=\"{}\">\n",
        routes::UPDATE_COBJ
    ));
    body.push_str(&text_input("name", "Name"));
    body.push_str(&text_input("species", "Species"));
    body.push_str("<label for=\"bio\">Bio</label>\n");
    body.push_str("<textarea id=\"bio\" name=\"bio\"></textarea>\n");
    body.push_str(&text_input("dog", "Dog"));
    body.push_str("<button type=\"submit\">Submit</button>\n");
    body.push_str("</form>\n");
    body.push_str(&format!(
        "<p><a href=\"{}\">Return to the homepage</a></p>\n",
        routes::HOME
    ));

    layout(title, &body)
}

fn render_row(record: &CustomObjectRecord) -> String {
    let props = &record.properties;
    let created = record
        .created_at
        .map(|ts| ts.format("%Y-%m-%d").to_string())
        .unwrap_or_default();

    let cells = [
        props.name.as_deref().unwrap_or_default(),
        props.species.as_deref().unwrap_or_default(),
        props.bio.as_deref().unwrap_or_default(),
        props.dog.as_deref().unwrap_or_default(),
        created.as_str(),
    ];

    let mut row = format!("<tr data-id=\"{}\">", escape_html(&record.id));
    for cell in cells {
        row.push_str(&format!("<td>{}</td>", escape_html(cell)));
    }
    row.push_str("</tr>\n");
    row
}

fn text_input(name: &str, label: &str) -> String {
    format!(
        "<label for=\"{name}\">{label}</label>\n<input type=\"text\" id=\"{name}\" name=\"{name}\">\n"
    )
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{}</title>\n<link rel=\"stylesheet\" href=\"/css/style.css\">\n</head>\n\
         <body>\n{}</body>\n</html>\n",
        escape_html(title),
        body
    )
}

/// Escape text for use in HTML element content and quoted attributes
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hubspot::stub::record;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_homepage_lists_every_record() {
        let records = vec![
            record("1", "Rex", "Dog", "Good boy", "yes"),
            record("2", "Tom", "Cat", "Chases mice", "no"),
        ];

        let html = render_homepage(HOMEPAGE_TITLE, &records);

        assert!(html.contains("<title>Custom Objects | Integrating With HubSpot I Practicum</title>"));
        for value in ["Rex", "Dog", "Good boy", "yes", "Tom", "Cat", "Chases mice", "no"] {
            assert!(html.contains(&format!("<td>{}</td>", value)), "missing {}", value);
        }
        assert!(!html.contains("No custom object records found."));
    }

    #[test]
    fn test_homepage_empty_state() {
        let html = render_homepage(HOMEPAGE_TITLE, &[]);

        assert!(html.contains("No custom object records found."));
        assert!(html.contains("href=\"/update-cobj\""));
    }

    #[test]
    fn test_missing_properties_render_empty_cells() {
        let mut rec = record("7", "Ghost", "", "", "");
        rec.properties.species = None;
        rec.properties.bio = None;
        rec.properties.dog = None;
        rec.created_at = Some(Utc.with_ymd_and_hms(2024, 5, 1, 10, 15, 0).unwrap());

        let html = render_homepage(HOMEPAGE_TITLE, &[rec]);

        assert!(html.contains(
            "<tr data-id=\"7\"><td>Ghost</td><td></td><td></td><td></td><td>2024-05-01</td></tr>"
        ));
    }

    #[test]
    fn test_record_values_are_escaped() {
        let records = vec![record("1", "<script>alert(1)</script>", "Dog", "Tom & \"Jerry\"", "yes")];

        let html = render_homepage(HOMEPAGE_TITLE, &records);

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(html.contains("Tom &amp; &quot;Jerry&quot;"));
    }

    #[test]
    fn test_update_form_has_all_inputs() {
        let html = render_update_form(UPDATE_FORM_TITLE);

        assert!(html.contains("<form method=\"POST\" action=\"/update-cobj\">"));
        for field in ["name", "species", "bio", "dog"] {
            assert!(html.contains(&format!("name=\"{}\"", field)), "missing {}", field);
        }
        assert!(html.contains("href=\"/\""));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a<b>&'c'"), "a&lt;b&gt;&amp;&#39;c&#39;");
        assert_eq!(escape_html("plain"), "plain");
    }
}
