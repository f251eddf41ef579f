//! # Maud Templates
//!
//! The API is consumed by a separate chat front end; the only HTML served
//! here is the landing page at `GET /`, which confirms the service is up
//! and documents the endpoints.
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │ 🌱 EcoBuddy API aktif                    │
//! ├──────────────────────────────────────────┤
//! │ Endpoints   (method, path, description)  │
//! │ Contoh pertanyaan   (sample questions)   │
//! │ curl example                             │
//! └──────────────────────────────────────────┘
//! ```

use maud::{html, Markup, DOCTYPE};

use crate::analyzer::SAMPLE_MESSAGES;

const ENDPOINTS: &[(&str, &str, &str)] = &[
    ("POST", "/api/chat", "Kirim {\"message\": \"...\"}, terima {\"response\": \"...\"}"),
    ("POST", "/api/classify", "Intent, confidence, dan status threshold"),
    ("GET", "/health", "Status layanan"),
];

const STYLE: &str = "body{font-family:system-ui,sans-serif;max-width:720px;margin:3rem auto;\
padding:0 1rem;color:#1f2d1f;background:#f4faf2}\
h1{color:#2e7d32}code,pre{background:#e3f1df;border-radius:4px;padding:.1rem .3rem}\
pre{padding:.8rem;overflow-x:auto}td{padding:.25rem .6rem}";

/// Landing page for `GET /`.
pub fn landing_page(threshold: f64) -> Markup {
    html! {
        (DOCTYPE)
        html lang="id" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { "EcoBuddy API" }
                style { (STYLE) }
            }
            body {
                h1 { "🌱 EcoBuddy API aktif" }
                p {
                    "Asisten edukatif tentang ekonomi sirkular dan sustainability. "
                    "Confidence threshold: " code { (format!("{threshold:.2}")) }
                }

                h2 { "Endpoints" }
                table {
                    @for (method, path, description) in ENDPOINTS {
                        tr {
                            td { code { (method) } }
                            td { code { (path) } }
                            td { (description) }
                        }
                    }
                }

                h2 { "Contoh pertanyaan" }
                ul {
                    @for question in SAMPLE_MESSAGES.iter().take(5) {
                        li { (question) }
                    }
                }

                h2 { "Contoh" }
                pre {
                    "curl -X POST http://localhost:5000/api/chat \\\n"
                    "  -H 'Content-Type: application/json' \\\n"
                    "  -d '{\"message\": \"Apa itu ekonomi sirkular?\"}'"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn landing_page_lists_endpoints() {
        let page = landing_page(0.3).into_string();
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("EcoBuddy API aktif"));
        assert!(page.contains("/api/chat"));
        assert!(page.contains("0.30"));
        // maud escapes the quotes in the curl snippet
        assert!(page.contains("&quot;message&quot;"));
    }
}
