use std::{fmt::Write, time::Duration};

use crate::profile::Profile;

/// Time the download button shows its busy label before the window opens.
pub const PREPARE_DELAY: Duration = Duration::from_millis(1000);
/// Delay between the print window reporting it has loaded and the print call.
pub const PRINT_DELAY: Duration = Duration::from_millis(500);
/// Print anyway if the window never reports that it loaded.
pub const PRINT_FALLBACK: Duration = Duration::from_millis(2500);

pub static WINDOW_FEATURES: &str = "width=900,height=700";

static STYLE: &str = r#"
* { margin: 0; padding: 0; box-sizing: border-box; }
body { font-family: 'Arial', 'Segoe UI', sans-serif; line-height: 1.6; color: #333; background: white; max-width: 800px; margin: 0 auto; padding: 40px 20px; }
.header { text-align: center; margin-bottom: 40px; border-bottom: 3px solid #8b5cf6; padding-bottom: 20px; }
.name { font-size: 2.5rem; font-weight: bold; color: #6b21a8; margin-bottom: 10px; }
.title { font-size: 1.2rem; color: #666; margin-bottom: 10px; font-weight: 500; }
.contact-info { font-size: 0.95rem; color: #666; line-height: 1.4; }
.section { margin-bottom: 30px; page-break-inside: avoid; }
.section-title { font-size: 1.4rem; font-weight: bold; color: #6b21a8; border-bottom: 2px solid #8b5cf6; padding-bottom: 5px; margin-bottom: 20px; }
.item { margin-bottom: 20px; }
.item-title { font-weight: bold; font-size: 1.1rem; color: #333; margin-bottom: 2px; }
.item-subtitle { color: #8b5cf6; font-weight: 600; margin-bottom: 2px; }
.item-date { color: #666; font-size: 0.9rem; margin-bottom: 8px; }
.item-note { margin-top: 8px; }
.skills-grid { display: grid; grid-template-columns: repeat(2, 1fr); gap: 20px; }
.skill-category { background: #f8f9ff; padding: 15px; border-radius: 8px; border-left: 4px solid #8b5cf6; }
.skill-category h4 { color: #6b21a8; margin-bottom: 10px; font-size: 1rem; }
.skill-list { list-style: none; padding: 0; }
.skill-list li { padding: 2px 0; color: #555; font-size: 0.9rem; }
.achievements { background: #f0f9ff; padding: 20px; border-radius: 8px; border-left: 4px solid #8b5cf6; }
.achievements ul { padding-left: 20px; }
.achievements li { margin-bottom: 5px; color: #555; }
.summary { background: #fefcff; padding: 20px; border-radius: 8px; border-left: 4px solid #8b5cf6; font-size: 1rem; line-height: 1.7; }
ul { margin-top: 10px; padding-left: 20px; }
ul li { margin-bottom: 3px; }
@media print {
  body { -webkit-print-color-adjust: exact !important; color-adjust: exact !important; padding: 20px; }
  .section { page-break-inside: avoid; }
  .skills-grid { grid-template-columns: repeat(2, 1fr); }
}
@media screen and (max-width: 768px) {
  .skills-grid { grid-template-columns: 1fr; }
  .name { font-size: 2rem; }
}
"#;

/// Escapes text for use in HTML element content and attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

fn joined(items: &[String]) -> String {
    escape(&items.join(" • "))
}

/// Renders the standalone, print-ready résumé document.
pub fn render_document(p: &Profile) -> String {
    let mut html = String::with_capacity(16 * 1024);
    // writing into a String cannot fail
    let _ = write_document(&mut html, p);
    html
}

fn write_document(out: &mut String, p: &Profile) -> std::fmt::Result {
    writeln!(out, "<!DOCTYPE html>")?;
    writeln!(out, r#"<html lang="en">"#)?;
    writeln!(out, "<head>")?;
    writeln!(out, r#"<meta charset="UTF-8">"#)?;
    writeln!(
        out,
        r#"<meta name="viewport" content="width=device-width, initial-scale=1.0">"#
    )?;
    writeln!(out, "<title>{} - Resume</title>", escape(&p.name))?;
    writeln!(out, "<style>{STYLE}</style>")?;
    writeln!(out, "</head>")?;
    writeln!(out, "<body>")?;
    writeln!(out, r#"<div class="resume-container">"#)?;

    writeln!(out, r#"<div class="header">"#)?;
    writeln!(out, r#"<div class="name">{}</div>"#, escape(&p.name))?;
    writeln!(out, r#"<div class="title">{}</div>"#, escape(&p.headline))?;
    writeln!(
        out,
        r#"<div class="contact-info">📍 {}<br>✉️ {}<br>💼 {}</div>"#,
        escape(&p.location),
        escape(&p.email),
        escape(&p.linkedin)
    )?;
    writeln!(out, "</div>")?;

    open_section(out, "Professional Summary")?;
    writeln!(out, r#"<div class="summary">{}</div>"#, escape(&p.summary))?;
    close_section(out)?;

    open_section(out, "Education")?;
    for e in &p.education {
        writeln!(out, r#"<div class="item">"#)?;
        item_title(out, &e.degree)?;
        writeln!(out, r#"<div class="item-subtitle">{}</div>"#, escape(&e.institution))?;
        writeln!(
            out,
            r#"<div class="item-date">{} | {}</div>"#,
            escape(&e.period),
            escape(&e.standing)
        )?;
        writeln!(out, "<div>Key Skills: {}</div>", escape(&e.skills.join(", ")))?;
        writeln!(out, "</div>")?;
    }
    close_section(out)?;

    open_section(out, "Professional Certifications")?;
    for c in &p.certifications {
        writeln!(out, r#"<div class="item">"#)?;
        item_title(out, &c.title)?;
        writeln!(
            out,
            r#"<div class="item-subtitle">{} - {}</div>"#,
            escape(&c.issuer),
            escape(&c.date)
        )?;
        writeln!(out, "<div>{}</div>", joined(&c.skills))?;
        writeln!(out, "</div>")?;
    }
    close_section(out)?;

    open_section(out, "Project Experience")?;
    for project in &p.projects {
        writeln!(out, r#"<div class="item">"#)?;
        item_title(out, &project.title)?;
        writeln!(
            out,
            r#"<div class="item-subtitle">{}</div>"#,
            escape(&project.organization)
        )?;
        writeln!(out, r#"<div class="item-date">{}</div>"#, escape(&project.role))?;
        writeln!(out, "<ul>")?;
        for h in &project.highlights {
            writeln!(out, "<li>{}</li>", escape(h))?;
        }
        writeln!(out, "</ul>")?;
        writeln!(
            out,
            r#"<div class="item-note"><strong>Skills:</strong> {}</div>"#,
            joined(&project.skills)
        )?;
        writeln!(out, "</div>")?;
    }
    close_section(out)?;

    open_section(out, "Core Competencies")?;
    writeln!(out, r#"<div class="skills-grid">"#)?;
    for group in &p.skills {
        writeln!(out, r#"<div class="skill-category">"#)?;
        writeln!(out, "<h4>{}</h4>", escape(&group.category))?;
        writeln!(out, r#"<ul class="skill-list">"#)?;
        for s in &group.skills {
            writeln!(out, "<li>{} ({}%)</li>", escape(&s.name), s.level.min(100))?;
        }
        writeln!(out, "</ul>")?;
        writeln!(out, "</div>")?;
    }
    writeln!(out, "</div>")?;
    close_section(out)?;

    open_section(out, "Key Achievements")?;
    writeln!(out, r#"<div class="achievements"><ul>"#)?;
    for a in &p.achievements {
        writeln!(out, "<li>{}</li>", escape(a))?;
    }
    writeln!(out, "</ul></div>")?;
    close_section(out)?;

    open_section(out, "Career Interests & Availability")?;
    let interests = &p.interests;
    writeln!(out, r#"<div class="item">"#)?;
    item_title(out, "Seeking Opportunities In:")?;
    writeln!(out, r#"<div class="item-note">{}</div>"#, joined(&interests.roles))?;
    writeln!(out, "</div>")?;
    writeln!(out, r#"<div class="item">"#)?;
    item_title(out, "Professional Traits:")?;
    writeln!(out, "<div>{}</div>", joined(&interests.traits))?;
    writeln!(out, "</div>")?;
    writeln!(out, r#"<div class="item">"#)?;
    item_title(out, "Availability:")?;
    writeln!(out, "<div>{}</div>", escape(&interests.availability))?;
    writeln!(out, "</div>")?;
    close_section(out)?;

    writeln!(out, "</div>")?;
    writeln!(out, "</body>")?;
    writeln!(out, "</html>")
}

fn open_section(out: &mut String, title: &str) -> std::fmt::Result {
    writeln!(out, r#"<div class="section">"#)?;
    writeln!(out, r#"<div class="section-title">{}</div>"#, escape(title))
}

fn close_section(out: &mut String) -> std::fmt::Result {
    writeln!(out, "</div>")
}

fn item_title(out: &mut String, title: &str) -> std::fmt::Result {
    writeln!(out, r#"<div class="item-title">{}</div>"#, escape(title))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::profile;

    #[test]
    fn escape_markup() {
        assert_eq!(
            escape(r#"<b>"Q&A"</b> it's"#),
            "&lt;b&gt;&quot;Q&amp;A&quot;&lt;/b&gt; it&#39;s"
        );
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn document_is_complete() {
        let html = render_document(profile());
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.trim_end().ends_with("</html>"));
        assert!(html.contains("<title>Priyansu Nag - Resume</title>"));
        for heading in [
            "Professional Summary",
            "Education",
            "Professional Certifications",
            "Project Experience",
            "Core Competencies",
            "Key Achievements",
            "Career Interests &amp; Availability",
        ] {
            assert!(
                html.contains(&format!(r#"<div class="section-title">{heading}</div>"#)),
                "missing {heading}"
            );
        }
    }

    #[test]
    fn every_skill_listed_with_level() {
        let p = profile();
        let html = render_document(p);
        for group in &p.skills {
            assert!(html.contains(&format!("<h4>{}</h4>", escape(&group.category))));
            for s in &group.skills {
                assert!(html.contains(&format!("<li>{} ({}%)</li>", escape(&s.name), s.level)));
            }
        }
    }

    #[test]
    fn content_is_escaped() {
        let mut p = profile().clone();
        p.summary = "<script>alert(1)</script>".to_string();
        let html = render_document(&p);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(html.contains("<h4>HR &amp; Governance</h4>"));
    }

    #[test]
    fn lists_are_bullet_joined() {
        let html = render_document(profile());
        assert!(html.contains("Curious • Reliable • Quick Learner"));
        assert!(html.contains("Key Skills: GST, Corporate Governance, Company Law"));
    }
}
