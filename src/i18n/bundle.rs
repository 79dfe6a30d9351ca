//! Typed shape of a translation bundle.
//!
//! Every struct here denies unknown fields and has no defaults, so a bundle
//! that misses a key (or misspells one) fails to parse instead of rendering
//! blank text. [`TranslationBundle::missing_fields`] then catches values
//! that are present but empty.

use serde::Deserialize;

/// Number of points on the tech slide's trend chart. The `months` list of
/// every bundle must label exactly this many points.
pub const TREND_POINTS: usize = 5;

/// The collaboration slide draws two rows of four departments.
pub const MAX_DEPARTMENTS: usize = 8;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TranslationBundle {
    pub nav: NavText,
    pub intro: IntroText,
    pub engine: EngineText,
    pub collaboration: CollaborationText,
    pub challenges: ChallengesText,
    pub tech: TechText,
    pub workflows: WorkflowsText,
}

/// Sidebar chrome and the slide titles shown in it.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct NavText {
    pub portfolio_title: String,
    pub name: String,
    pub role: String,
    pub presentation_desc: String,
    pub intro: String,
    pub engine: String,
    pub collaboration: String,
    pub challenges: String,
    pub tech: String,
    pub workflows: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct IntroText {
    pub tag: String,
    pub description: String,
    pub industries_title: String,
    pub expertise_title: String,
    pub expertise_items: Vec<String>,
    pub stats: Vec<Stat>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EngineText {
    pub title: String,
    pub subtitle: String,
    pub steps: Vec<Card>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct CollaborationText {
    pub title: String,
    pub subtitle: String,
    pub departments: Vec<String>,
    pub bridge_text: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct ChallengesText {
    pub title: String,
    pub subtitle: String,
    pub items: Vec<Card>,
    pub innovation_items: Vec<Card>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct TechText {
    pub title: String,
    pub subtitle: String,
    pub chart_title: String,
    pub months: Vec<String>,
    pub ai_line: String,
    pub tech_line: String,
    pub no_tech_line: String,
    pub ai_tech_title: String,
    pub ai_tech_items: Vec<Card>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct WorkflowsText {
    pub title: String,
    pub subtitle: String,
    pub year1: Phase,
    pub year2: Phase,
    pub footer_quote: String,
}

/// One column of the workflows timeline.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Phase {
    pub tag: String,
    pub title: String,
    pub items: Vec<String>,
}

/// A titled card with a one-line description.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Card {
    pub title: String,
    pub desc: String,
}

impl TranslationBundle {
    /// Paths of every field that is empty or has the wrong number of items.
    pub fn missing_fields(&self) -> Vec<String> {
        let mut check = Checker::default();

        let nav = &self.nav;
        check.text("nav.portfolioTitle", &nav.portfolio_title);
        check.text("nav.name", &nav.name);
        check.text("nav.role", &nav.role);
        check.text("nav.presentationDesc", &nav.presentation_desc);
        check.text("nav.intro", &nav.intro);
        check.text("nav.engine", &nav.engine);
        check.text("nav.collaboration", &nav.collaboration);
        check.text("nav.challenges", &nav.challenges);
        check.text("nav.tech", &nav.tech);
        check.text("nav.workflows", &nav.workflows);

        let intro = &self.intro;
        check.text("intro.tag", &intro.tag);
        check.text("intro.description", &intro.description);
        check.text("intro.industriesTitle", &intro.industries_title);
        check.text("intro.expertiseTitle", &intro.expertise_title);
        check.texts("intro.expertiseItems", &intro.expertise_items);
        check.non_empty("intro.stats", intro.stats.len());
        for (idx, stat) in intro.stats.iter().enumerate() {
            check.text(&format!("intro.stats[{idx}].value"), &stat.value);
            check.text(&format!("intro.stats[{idx}].label"), &stat.label);
        }

        let engine = &self.engine;
        check.text("engine.title", &engine.title);
        check.text("engine.subtitle", &engine.subtitle);
        check.cards("engine.steps", &engine.steps);

        let collab = &self.collaboration;
        check.text("collaboration.title", &collab.title);
        check.text("collaboration.subtitle", &collab.subtitle);
        check.texts("collaboration.departments", &collab.departments);
        if collab.departments.len() > MAX_DEPARTMENTS {
            check.push(format!(
                "collaboration.departments (at most {MAX_DEPARTMENTS} entries, found {})",
                collab.departments.len()
            ));
        }
        check.text("collaboration.bridgeText", &collab.bridge_text);

        let challenges = &self.challenges;
        check.text("challenges.title", &challenges.title);
        check.text("challenges.subtitle", &challenges.subtitle);
        check.cards("challenges.items", &challenges.items);
        check.cards("challenges.innovationItems", &challenges.innovation_items);

        let tech = &self.tech;
        check.text("tech.title", &tech.title);
        check.text("tech.subtitle", &tech.subtitle);
        check.text("tech.chartTitle", &tech.chart_title);
        check.texts("tech.months", &tech.months);
        if !tech.months.is_empty() && tech.months.len() != TREND_POINTS {
            check.push(format!(
                "tech.months (expected {TREND_POINTS} entries, found {})",
                tech.months.len()
            ));
        }
        check.text("tech.aiLine", &tech.ai_line);
        check.text("tech.techLine", &tech.tech_line);
        check.text("tech.noTechLine", &tech.no_tech_line);
        check.text("tech.aiTechTitle", &tech.ai_tech_title);
        check.cards("tech.aiTechItems", &tech.ai_tech_items);

        let workflows = &self.workflows;
        check.text("workflows.title", &workflows.title);
        check.text("workflows.subtitle", &workflows.subtitle);
        for (key, phase) in [("year1", &workflows.year1), ("year2", &workflows.year2)] {
            check.text(&format!("workflows.{key}.tag"), &phase.tag);
            check.text(&format!("workflows.{key}.title"), &phase.title);
            check.texts(&format!("workflows.{key}.items"), &phase.items);
        }
        check.text("workflows.footerQuote", &workflows.footer_quote);

        check.issues
    }
}

#[derive(Default)]
struct Checker {
    issues: Vec<String>,
}

impl Checker {
    fn push(&mut self, issue: String) {
        self.issues.push(issue);
    }

    fn text(&mut self, path: &str, value: &str) {
        if value.trim().is_empty() {
            self.issues.push(path.to_string());
        }
    }

    fn non_empty(&mut self, path: &str, len: usize) {
        if len == 0 {
            self.issues.push(format!("{path} (empty list)"));
        }
    }

    fn texts(&mut self, path: &str, values: &[String]) {
        self.non_empty(path, values.len());
        for (idx, value) in values.iter().enumerate() {
            self.text(&format!("{path}[{idx}]"), value);
        }
    }

    fn cards(&mut self, path: &str, cards: &[Card]) {
        self.non_empty(path, cards.len());
        for (idx, card) in cards.iter().enumerate() {
            self.text(&format!("{path}[{idx}].title"), &card.title);
            self.text(&format!("{path}[{idx}].desc"), &card.desc);
        }
    }
}
