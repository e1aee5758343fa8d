//! Category rules, the ordered registry, and keyword detection.

use tracing::debug;

use crate::template::Template;

/// One category: name, keyword list, rewrite template, and a short description.
#[derive(Debug, Clone)]
pub struct CategoryRule {
    pub name: String,
    pub keywords: Vec<String>,
    pub template: Template,
    pub description: String,
}

/// Result of keyword detection: the winning category and its template.
#[derive(Debug, Clone, Copy)]
pub struct Detection<'a> {
    pub category: &'a str,
    pub template: &'a Template,
}

/// Ordered, immutable set of category rules.
///
/// Detection iterates rules in declared order and each rule's keywords in
/// declared order; the first case-insensitive substring hit wins. Overlapping
/// keywords across categories are resolved purely by this order.
#[derive(Debug, Clone)]
pub struct CategoryRegistry {
    rules: Vec<CategoryRule>,
}

impl CategoryRegistry {
    pub fn new(rules: Vec<CategoryRule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[CategoryRule] {
        &self.rules
    }

    /// Looks up a rule by exact name (used for category overrides).
    pub fn rule(&self, name: &str) -> Option<&CategoryRule> {
        self.rules.iter().find(|r| r.name == name)
    }

    /// Detects the category of `text` by case-insensitive keyword containment.
    /// Blank text never matches. Pure over the text and this registry.
    pub fn detect(&self, text: &str) -> Option<Detection<'_>> {
        let lowered = text.trim().to_lowercase();
        if lowered.is_empty() {
            return None;
        }
        for rule in &self.rules {
            for keyword in &rule.keywords {
                // Keywords are lowercased too, so a registry built with
                // mixed-case keywords still matches.
                if lowered.contains(keyword.to_lowercase().as_str()) {
                    debug!(category = %rule.name, keyword = %keyword, "category detected");
                    return Some(Detection {
                        category: &rule.name,
                        template: &rule.template,
                    });
                }
            }
        }
        debug!("no category detected");
        None
    }

    /// Renders the one-time onboarding tip listing example categories as
    /// `` `english keyword` / `polish keyword` – description `` lines.
    /// Categories lacking either an English or a Polish keyword are skipped.
    pub fn onboarding_tip(&self) -> String {
        let mut examples = Vec::new();
        for rule in &self.rules {
            let en = rule.keywords.iter().find(|k| !has_polish_diacritics(k));
            let pl = rule.keywords.iter().find(|k| has_polish_diacritics(k));
            if let (Some(en), Some(pl)) = (en, pl) {
                examples.push(format!("`{en}` / `{pl}` – {}", rule.description));
            }
        }
        format!(
            "💡 You can use these categories to get better responses:\n\n{}\n\n\
             Just include one of these keywords in your question!",
            examples.join("\n")
        )
    }

    /// The built-in registry of ten categories with English and Polish keywords.
    pub fn builtin() -> Self {
        fn rule(
            name: &str,
            description: &str,
            template: &str,
            keywords: &[&str],
        ) -> CategoryRule {
            CategoryRule {
                name: name.to_string(),
                keywords: keywords.iter().map(|k| k.to_string()).collect(),
                template: Template::new(template).expect("builtin template"),
                description: description.to_string(),
            }
        }

        Self::new(vec![
            rule(
                "weather",
                "Returns the current weather in a given location.",
                "Get the current weather in {target}. Include temperature, humidity, and general conditions.",
                &["weather", "forecast", "pogoda", "prognoza", "temperatura", "deszcz", "śnieg"],
            ),
            rule(
                "person",
                "Returns a short biography for a person.",
                "Explain who {target} is. Provide a brief, relevant biography.",
                &["who is", "kto to", "kim jest", "czy znasz", "biografia", "życiorys"],
            ),
            rule(
                "compare",
                "Compares two items or concepts side-by-side.",
                "Compare {target} with a clear breakdown of features.",
                &["compare", "porównaj", "powownaj", "różnice", "podobieństwa"],
            ),
            rule(
                "define",
                "Defines or explains a term clearly.",
                "Give a concise definition of {target}.",
                &["define", "what is", "co to", "opisz", "wyjaśnij", "znaczenie"],
            ),
            rule(
                "summary",
                "Summarizes input up to 500 characters, max 600 token output.",
                "Summarize the following content: {target}. Use up to 600 tokens.",
                &["summarize", "skroc", "skróć", "streść", "stresc", "podsumuj"],
            ),
            rule(
                "timeline",
                "Answers when something is happening or happened.",
                "Tell when {target} is happening. Include name, date, and description if possible.",
                &["when", "termin", "data", "godzina"],
            ),
            rule(
                "location",
                "Detects if a place (city/country/state) is mentioned and gives facts.",
                "Provide useful facts and context about {target} as a place.",
                &["where is", "gdzie jest", "lokalizacja", "miasto", "kraj"],
            ),
            rule(
                "price",
                "Compares prices or provides cost information.",
                "Find and compare prices for {target}. Include current market rates if available.",
                &["price", "cost", "cena", "koszt", "ile kosztuje", "cennik"],
            ),
            rule(
                "contact",
                "Provides contact information or communication details.",
                "Find contact information for {target}. Include official channels if available.",
                &["contact", "email", "phone", "kontakt", "telefon", "adres"],
            ),
            rule(
                "event",
                "Provides information about events, schedules, or timetables.",
                "Find event details for {target}. Include date, time, and location if available.",
                &[
                    "event", "match", "concert", "game", "festival", "fight", "tournament",
                    "schedule", "wydarzenie", "mecz", "koncert", "turniej", "harmonogram",
                    "terminarz", "kiedy gra", "kiedy będzie", "kiedy",
                ],
            ),
        ])
    }
}

fn has_polish_diacritics(s: &str) -> bool {
    s.chars().any(|c| "ąćęłńóśźż".contains(c))
}
