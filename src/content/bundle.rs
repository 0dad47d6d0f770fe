//! Typed schemas for the per-language per-section content documents.
//!
//! One JSON document exists per `(languageCode, sectionId)`. Unknown fields
//! in a document are ignored and missing optional fields resolve to their
//! defaults, never to an error; authoring mistakes surface through the
//! completeness report, not through deserialization failures.

use crate::content::assets;
use serde::Deserialize;
use std::fmt;

/// Identifier of a named page region with its own content schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Header,
    Home,
    Footer,
}

impl SectionId {
    /// Every section the site renders, in mount order.
    pub const ALL: [SectionId; 3] = [SectionId::Header, SectionId::Home, SectionId::Footer];

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionId::Header => "header",
            SectionId::Home => "home",
            SectionId::Footer => "footer",
        }
    }

    /// Parse a section id from a bundle file stem (e.g. "home" for home.json).
    pub fn from_file_stem(stem: &str) -> Option<SectionId> {
        SectionId::ALL.into_iter().find(|id| id.as_str() == stem)
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ==================== Shared records ====================

/// A call-to-action link.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Cta {
    pub text: String,
    pub to: String,
}

/// A titled item with a display date (news entries, resources).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DatedItem {
    pub title: String,
    pub date: String,
}

/// A named logo entry (implementers, partners).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Logo {
    pub name: String,
    pub logo: Option<String>,
    pub url: Option<String>,
}

// ==================== Header section ====================

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeaderContent {
    pub logo_alt: String,
    pub nav: NavLabels,
    pub language_selector: LanguageSelectorLabels,
    pub banner: BannerContent,
    pub main_content: HeaderMainContent,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NavLabels {
    pub home: String,
    pub find_data: String,
    pub people: String,
    pub library: String,
    pub news: String,
    pub project_catalog: String,
    pub about: String,
    pub contribute: String,
    pub login: String,
    pub signup: String,
    pub logout: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LanguageSelectorLabels {
    pub heading: String,
    pub change_language_label: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BannerContent {
    pub text: String,
    pub learn_more: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeaderMainContent {
    pub platform_text: String,
    pub learn_more: String,
    pub global_number: String,
    pub see_data: String,
    pub women_text: String,
    pub men_text: String,
    pub footnote: String,
    pub learn_more_link: String,
}

// ==================== Home section ====================

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HomeContent {
    pub page1: StatsPage,
    pub page2: SliderPage,
    pub page3: SearchPage,
    pub page4: NewsPage,
    pub page5: ResourcesPage,
    pub page6: ImplementersPage,
    pub page7: PartnersPage,
    pub page8: SubscribePage,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StatsPage {
    pub title: String,
    pub stats: Vec<Stat>,
    pub learn_more_link: Option<Cta>,
    pub data_source_note: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Stat {
    pub number: String,
    pub label: String,
    pub icon: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SliderPage {
    pub title: String,
    pub slides: Vec<Slide>,
}

/// One promotional slide in the home-page slider.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Slide {
    pub title: String,
    pub description: String,
    pub cta: Option<Cta>,
    pub image: Option<String>,
}

impl Slide {
    /// The slide image, or the named placeholder for its position.
    pub fn image_or_placeholder(&self, index: usize) -> &str {
        self.image
            .as_deref()
            .unwrap_or_else(|| assets::slide_placeholder(index))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchPage {
    pub title: String,
    pub placeholder: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewsPage {
    pub title: String,
    pub description: String,
    pub items: Vec<DatedItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResourcesPage {
    pub title: String,
    pub description: String,
    pub cta: Option<Cta>,
    pub resources: Vec<DatedItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImplementersPage {
    pub title: String,
    pub implementers: Vec<Logo>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PartnersPage {
    pub title: String,
    pub partners: Vec<Logo>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SubscribePage {
    pub title: String,
    pub placeholder: String,
    pub button_text: String,
}

// ==================== Footer section ====================

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FooterContent {
    pub disclaimer: Disclaimer,
    pub sections: Vec<LinkSection>,
    pub copyright: Copyright,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Disclaimer {
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LinkSection {
    pub title: String,
    pub links: Vec<FooterLink>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FooterLink {
    pub path: String,
    pub label: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Copyright {
    pub text: String,
}

// ==================== Resolved section content ====================

/// The resolved content of one section in one language.
#[derive(Debug, Clone, PartialEq)]
pub enum SectionContent {
    Header(HeaderContent),
    Home(HomeContent),
    Footer(FooterContent),
}

impl SectionContent {
    /// Deserialize a bundle document into the section's typed schema.
    pub(crate) fn from_value(
        section: SectionId,
        value: serde_json::Value,
    ) -> Result<SectionContent, serde_json::Error> {
        Ok(match section {
            SectionId::Header => SectionContent::Header(serde_json::from_value(value)?),
            SectionId::Home => SectionContent::Home(serde_json::from_value(value)?),
            SectionId::Footer => SectionContent::Footer(serde_json::from_value(value)?),
        })
    }

    /// The neutral empty bundle for a section: every field at its default.
    pub(crate) fn empty(section: SectionId) -> SectionContent {
        match section {
            SectionId::Header => SectionContent::Header(HeaderContent::default()),
            SectionId::Home => SectionContent::Home(HomeContent::default()),
            SectionId::Footer => SectionContent::Footer(FooterContent::default()),
        }
    }

    pub fn section_id(&self) -> SectionId {
        match self {
            SectionContent::Header(_) => SectionId::Header,
            SectionContent::Home(_) => SectionId::Home,
            SectionContent::Footer(_) => SectionId::Footer,
        }
    }

    pub fn as_header(&self) -> Option<&HeaderContent> {
        match self {
            SectionContent::Header(content) => Some(content),
            _ => None,
        }
    }

    pub fn as_home(&self) -> Option<&HomeContent> {
        match self {
            SectionContent::Home(content) => Some(content),
            _ => None,
        }
    }

    pub fn as_footer(&self) -> Option<&FooterContent> {
        match self {
            SectionContent::Footer(content) => Some(content),
            _ => None,
        }
    }
}
