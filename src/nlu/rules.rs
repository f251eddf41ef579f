//! # Rule Table
//!
//! Literal per-intent configuration: regex patterns, keyword phrases and a
//! weight. The table is declared in [`Intent`] declaration order and that
//! order is the tie-break order used by the classifier.
//!
//! ## How a rule contributes
//!
//! ```text
//! any pattern matches            → + 10.0 × weight   (once)
//! keyword phrase found verbatim  → + words × 2.0 × weight
//! otherwise, per phrase word
//!   equal to a message token     → + 0.5 × weight
//! ```
//!
//! Patterns are compiled case-insensitive with the `regex` crate, whose
//! matching time is linear in the input, so the unanchored `.+` alternations
//! below cannot backtrack catastrophically.

use super::intent::Intent;

/// Static (uncompiled) definition of one intent's evidence.
pub struct RuleSpec {
    pub intent: Intent,
    pub patterns: &'static [&'static str],
    pub keywords: &'static [&'static str],
    pub weight: f64,
}

/// The full rule table. `Intent::Unknown` deliberately has no entry.
pub const RULES: &[RuleSpec] = &[
    RuleSpec {
        intent: Intent::Greeting,
        patterns: &[
            r"\b(halo|hai|hello|hi|hey|hola|assalamualaikum)\b",
            r"\b(selamat pagi|selamat siang|selamat sore|selamat malam)\b",
            r"\b(good morning|good afternoon|good evening)\b",
        ],
        keywords: &[
            "halo", "hai", "hello", "hi", "hey", "selamat", "pagi", "siang", "sore", "malam",
        ],
        weight: 2.0,
    },
    RuleSpec {
        intent: Intent::Identity,
        patterns: &[
            r"\b(siapa|who).+(kamu|you|bot|kau)\b",
            r"\b(kamu|you|bot).+(siapa|who)\b",
            r"\b(nama|name).+(kamu|you|bot)\b",
            r"\bperkenalkan\b",
            r"\bapa itu ecobuddy\b",
        ],
        keywords: &["siapa", "kamu", "nama", "perkenalkan", "ecobuddy", "identitas"],
        weight: 1.8,
    },
    RuleSpec {
        intent: Intent::Capability,
        patterns: &[
            r"\b(bisa|dapat|bisa bantu).+(apa|what)\b",
            r"\b(apa|what).+(bisa|dapat|mampu)\b",
            r"\bkemampuan\b",
            r"\bfitur\b",
            r"\bbantu apa\b",
        ],
        keywords: &["bisa apa", "kemampuan", "fitur", "bantu apa", "apa yang bisa", "fungsi"],
        weight: 1.5,
    },
    RuleSpec {
        intent: Intent::Thanks,
        patterns: &[r"\b(terima kasih|thank you|thanks|makasih|thx|tengkyu)\b"],
        keywords: &["terima kasih", "thank", "thanks", "makasih", "thx"],
        weight: 2.0,
    },
    RuleSpec {
        intent: Intent::CeDefinition,
        patterns: &[
            r"\b(apa itu|what is|pengertian|definisi|arti|maksud).+(ekonomi sirkular|circular economy)\b",
            r"\b(jelaskan|explain|terangkan).+(ekonomi sirkular|circular economy)\b",
            r"\bekonomi sirkular.+(apa|what|pengertian|definisi)\b",
            r"\bcircular economy.+(definisi|definition|mean)\b",
        ],
        keywords: &[
            "ekonomi sirkular",
            "circular economy",
            "apa itu",
            "pengertian",
            "definisi",
            "arti",
            "jelaskan",
            "maksud",
        ],
        weight: 2.5,
    },
    RuleSpec {
        intent: Intent::CePrinciples,
        patterns: &[
            r"\b(prinsip|principle|pilar|dasar|konsep).+(ekonomi sirkular|circular economy|3r|5r)\b",
            r"\b(3r|5r|tiga r|lima r)\b",
            r"\b(reduce|reuse|recycle|refuse|rot)\b",
            r"\baturan.+(ekonomi sirkular)\b",
        ],
        keywords: &[
            "prinsip", "pilar", "dasar", "3r", "5r", "reduce", "reuse", "recycle", "refuse", "rot",
            "konsep utama",
        ],
        weight: 2.0,
    },
    RuleSpec {
        intent: Intent::CeExamples,
        patterns: &[
            r"\b(contoh|example|kasus|studi kasus).+(ekonomi sirkular|penerapan|implementasi)\b",
            r"\b(penerapan|implementasi|aplikasi|praktik).+(ekonomi sirkular)\b",
            r"\bbagaimana.+(diterapkan|menerapkan|implementasi)\b",
            r"\b(perusahaan|industri|bisnis).+(ekonomi sirkular)\b",
        ],
        keywords: &[
            "contoh",
            "penerapan",
            "implementasi",
            "praktik",
            "aplikasi",
            "studi kasus",
            "industri",
            "perusahaan",
        ],
        weight: 1.8,
    },
    RuleSpec {
        intent: Intent::CeBenefits,
        patterns: &[
            r"\b(manfaat|benefit|keuntungan|dampak positif).+(ekonomi sirkular)\b",
            r"\bmengapa.+(penting|perlu).+(ekonomi sirkular)\b",
            r"\bapa.+(untung|manfaat|keuntungan).+(ekonomi sirkular)\b",
            r"\bekonomi sirkular.+(penting|menguntungkan)\b",
        ],
        keywords: &[
            "manfaat",
            "keuntungan",
            "dampak positif",
            "mengapa penting",
            "untung",
            "benefit",
        ],
        weight: 1.8,
    },
    RuleSpec {
        intent: Intent::CeGeneral,
        patterns: &[r"\bekonomi sirkular\b", r"\bcircular economy\b", r"\bsirkular\b"],
        keywords: &["ekonomi sirkular", "circular economy", "sirkular"],
        weight: 1.0,
    },
    RuleSpec {
        intent: Intent::SustainabilityGeneral,
        patterns: &[
            r"\b(apa itu|pengertian|definisi).+(sustainability|keberlanjutan|berkelanjutan)\b",
            r"\bsustainability\b",
            r"\bkeberlanjutan\b",
            r"\bberkelanjutan\b",
        ],
        keywords: &["sustainability", "keberlanjutan", "berkelanjutan", "sustainable"],
        weight: 1.5,
    },
    RuleSpec {
        intent: Intent::PlasticWaste,
        patterns: &[
            r"\b(sampah|limbah|waste).+(plastik|plastic)\b",
            r"\bplastik.+(sampah|limbah|bahaya|masalah)\b",
            r"\bbahaya.+(plastik)\b",
        ],
        keywords: &[
            "sampah plastik",
            "limbah plastik",
            "plastik",
            "bahaya plastik",
            "masalah plastik",
        ],
        weight: 1.8,
    },
    RuleSpec {
        intent: Intent::RenewableEnergy,
        patterns: &[
            r"\b(energi|energy).+(terbarukan|renewable|hijau|green)\b",
            r"\b(solar|surya|angin|wind|hydro|panas bumi|geothermal)\b",
            r"\brendable.+(energy)\b",
        ],
        keywords: &[
            "energi terbarukan",
            "renewable energy",
            "energi hijau",
            "solar",
            "surya",
            "angin",
        ],
        weight: 1.5,
    },
    RuleSpec {
        intent: Intent::ClimateChange,
        patterns: &[
            r"\b(perubahan|change).+(iklim|climate)\b",
            r"\b(global warming|pemanasan global)\b",
            r"\biklim.+(berubah|perubahan)\b",
        ],
        keywords: &[
            "perubahan iklim",
            "climate change",
            "global warming",
            "pemanasan global",
        ],
        weight: 1.5,
    },
    RuleSpec {
        intent: Intent::Tips,
        patterns: &[
            r"\b(tips|saran|cara|bagaimana).+(mulai|memulai|menerapkan)\b",
            r"\b(bagaimana|how).+(hidup|gaya hidup|lifestyle).+(ramah lingkungan|eco)\b",
            r"\bmulai dari mana\b",
            r"\bapa yang (bisa|dapat).+(lakukan|dilakukan)\b",
        ],
        keywords: &[
            "tips",
            "saran",
            "cara",
            "bagaimana memulai",
            "mulai dari mana",
            "langkah",
        ],
        weight: 1.5,
    },
];
