//! HTML layout and PDF export of the weekly bulletin.
//!
//! The bulletin is laid out as a self-contained HTML document and sent
//! to a headless-browser renderer service that returns PDF bytes.

use entity::sea_orm_active_enums::Language;

use crate::{
    error::Error,
    model::bulletin::{BulletinData, RosterEntryDto},
};

/// Localized labels for the printed bulletin.
pub struct UiText {
    pub bulletin_title: &'static str,
    pub verse: &'static str,
    pub verse_ref: &'static str,
    pub latest_news: &'static str,
    pub roster: &'static str,
    pub alternates: &'static str,
    pub celebrations: &'static str,
    pub birthday: &'static str,
    pub anniversary: &'static str,
    pub no_news: &'static str,
}

pub fn ui_text(language: &Language) -> UiText {
    match language {
        Language::Tamil => UiText {
            bulletin_title: "வார செய்திமடல்",
            verse: "உன் வசனம் என் கால்களுக்குத் தீபமும், என் பாதைக்கு வெளிச்சமுமாயிருக்கிறது.",
            verse_ref: "சங்கீதம் 119:105",
            latest_news: "அறிவிப்புகள்",
            roster: "ஆராதனை பொறுப்புகள்",
            alternates: "மாற்று",
            celebrations: "கொண்டாட்டங்கள்",
            birthday: "பிறந்தநாள்",
            anniversary: "திருமண நாள்",
            no_news: "இந்த வாரம் அறிவிப்புகள் இல்லை",
        },
        Language::Sinhala => UiText {
            bulletin_title: "සතිපතා පුවත් පත්‍රිකාව",
            verse: "ඔබගේ වචනය මාගේ පාදවලට පහනක්ද, මාගේ මාර්ගයට එළියක්ද වේ.",
            verse_ref: "ගීතාවලිය 119:105",
            latest_news: "නිවේදන",
            roster: "සේවා වගකීම්",
            alternates: "විකල්ප",
            celebrations: "සැමරුම්",
            birthday: "උපන්දිනය",
            anniversary: "සංවත්සරය",
            no_news: "මෙම සතියේ නිවේදන නොමැත",
        },
        Language::English => UiText {
            bulletin_title: "Weekly Bulletin",
            verse: "Your word is a lamp to my feet and a light to my path.",
            verse_ref: "Psalm 119:105",
            latest_news: "Announcements",
            roster: "Service Responsibilities",
            alternates: "Alternates",
            celebrations: "Celebrations",
            birthday: "Birthday",
            anniversary: "Anniversary",
            no_news: "No announcements this week",
        },
    }
}

/// Splits a stored assignment into individual names. Assignments may
/// carry several names separated by commas or slashes, and legacy rows
/// hold placeholder values that must not be printed.
pub fn split_assigned_names(assigned: &str) -> Vec<String> {
    assigned
        .split(|c| c == ',' || c == '/')
        .map(str::trim)
        .filter(|name| !name.is_empty() && *name != "0" && *name != "null")
        .map(str::to_string)
        .collect()
}

/// Separates roster entries into the main rotation and the alternates.
pub fn group_roster(entries: &[RosterEntryDto]) -> (Vec<&RosterEntryDto>, Vec<&RosterEntryDto>) {
    entries.iter().partition(|entry| !entry.is_alternative)
}

fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Renders the bulletin as a self-contained HTML document.
pub fn render_html(data: &BulletinData) -> String {
    let text = ui_text(&data.language);
    let mut html = String::with_capacity(8 * 1024);

    html.push_str("<!DOCTYPE html><html><head><meta charset=\"utf-8\">");
    html.push_str(
        "<style>\
         body{font-family:'Noto Sans',sans-serif;margin:24px;color:#1a1a1a}\
         h1{text-align:center;margin-bottom:0}\
         .range{text-align:center;color:#555;margin-top:4px}\
         .verse{text-align:center;font-style:italic;margin:16px 0}\
         h2{border-bottom:2px solid #2c5f8a;padding-bottom:4px;margin-top:28px}\
         table{width:100%;border-collapse:collapse}\
         td{padding:4px 8px;vertical-align:top;border-bottom:1px solid #ddd}\
         .role{font-weight:bold;width:40%}\
         ul{margin:4px 0 12px 20px}\
         .empty{color:#777;font-style:italic}\
         </style></head><body>",
    );

    html.push_str(&format!("<h1>{}</h1>", text.bulletin_title));
    html.push_str(&format!(
        "<p class=\"range\">{} ({})</p>",
        data.sunday.format("%d %B %Y"),
        escape_html(&data.week_range)
    ));
    html.push_str(&format!(
        "<p class=\"verse\">{} <br>{}</p>",
        text.verse, text.verse_ref
    ));

    html.push_str(&format!("<h2>{}</h2>", text.latest_news));
    if data.news.is_empty() {
        html.push_str(&format!("<p class=\"empty\">{}</p>", text.no_news));
    } else {
        for group in &data.news {
            html.push_str(&format!("<h3>{}</h3><ul>", escape_html(&group.title)));
            for item in &group.items {
                html.push_str(&format!("<li>{}</li>", escape_html(item)));
            }
            html.push_str("</ul>");
        }
    }

    if !data.roster.is_empty() {
        let (main, alternates) = group_roster(&data.roster);

        html.push_str(&format!("<h2>{}</h2><table>", text.roster));
        for entry in main {
            let names = split_assigned_names(&entry.assigned_person).join(", ");
            html.push_str(&format!(
                "<tr><td class=\"role\">{}</td><td>{}</td></tr>",
                escape_html(&entry.role_name),
                escape_html(&names)
            ));
        }
        html.push_str("</table>");

        if !alternates.is_empty() {
            html.push_str(&format!("<h3>{}</h3><table>", text.alternates));
            for entry in alternates {
                let names = split_assigned_names(&entry.assigned_person).join(", ");
                html.push_str(&format!(
                    "<tr><td class=\"role\">{}</td><td>{}</td></tr>",
                    escape_html(&entry.role_name),
                    escape_html(&names)
                ));
            }
            html.push_str("</table>");
        }
    }

    if !data.special_dates.is_empty() {
        html.push_str(&format!("<h2>{}</h2><table>", text.celebrations));
        for date in &data.special_dates {
            let label = match date.event_type {
                entity::sea_orm_active_enums::EventType::Birthday => text.birthday,
                entity::sea_orm_active_enums::EventType::Anniversary => text.anniversary,
            };
            html.push_str(&format!(
                "<tr><td class=\"role\">{} ({})</td><td>{}</td></tr>",
                escape_html(&date.person_name),
                label,
                date.event_date.format("%d %B")
            ));
        }
        html.push_str("</table>");
    }

    html.push_str("</body></html>");

    html
}

fn language_name(language: &Language) -> &'static str {
    match language {
        Language::English => "English",
        Language::Tamil => "Tamil",
        Language::Sinhala => "Sinhala",
    }
}

/// Suggested download filename for a rendered bulletin.
pub fn bulletin_filename(data: &BulletinData) -> String {
    format!(
        "Bulletin_{}_{}.pdf",
        data.sunday.format("%Y-%m-%d"),
        language_name(&data.language)
    )
}

/// Client for the headless-browser PDF renderer service.
#[derive(Clone)]
pub struct RendererClient {
    http: reqwest::Client,
    base_url: String,
}

#[derive(serde::Serialize)]
struct RenderRequest<'a> {
    html: &'a str,
}

impl RendererClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Sends HTML to the renderer and returns the PDF bytes.
    pub async fn render_pdf(&self, html: &str) -> Result<Vec<u8>, Error> {
        let response = self
            .http
            .post(format!("{}/pdf", self.base_url))
            .json(&RenderRequest { html })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Error::Renderer(format!(
                "renderer returned status {}",
                response.status()
            )));
        }

        let bytes = response.bytes().await?;

        Ok(bytes.to_vec())
    }
}
