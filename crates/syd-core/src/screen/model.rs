//! Screen graph domain models.
//!
//! A [`Screen`] is one node of the static content graph: a navigable view
//! with localized text, transition affordances ([`Action`]) and optional
//! type-specific payloads (presentation steps, pricing scenarios, ...).

use crate::language::LocalizedText;
use serde::{Deserialize, Serialize};

/// The closed set of screen kinds the renderer knows how to display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScreenType {
    Title,
    Presentation,
    Summary,
    Pricing,
    Ecosystem,
    Dashboard,
    Applications,
    Agenda,
    Tasks,
}

/// The kind of transition an [`Action`] performs.
///
/// Both kinds resolve through `target`; `Restart` only differs in how the
/// view layer styles the affordance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    Next,
    Restart,
}

/// Presentation-only accent for an action button. Never affects behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionColor {
    Primary,
    Secondary,
    Accent,
}

/// A labeled, localized transition affordance attached to a screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    /// Localized button label.
    pub label: LocalizedText,
    /// What the action does.
    pub action: ActionKind,
    /// Target screen id. Must resolve within the graph or navigation is a no-op.
    pub target: String,
    /// Optional styling accent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<ActionColor>,
}

/// One step of an auto-advancing presentation screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresentationStep {
    pub id: String,
    pub text: LocalizedText,
}

/// One service/cost row in a pricing scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingTier {
    pub service: LocalizedText,
    pub cost: LocalizedText,
}

/// A pricing scenario: a titled, described list of tiers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingScenario {
    pub id: String,
    pub title: LocalizedText,
    pub description: LocalizedText,
    pub tiers: Vec<PricingTier>,
}

/// One plan of the SYD Agent add-on module.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SydAgentPlan {
    pub plan: LocalizedText,
    pub price: LocalizedText,
    pub configuration: LocalizedText,
    pub company_size: LocalizedText,
    pub includes: LocalizedText,
}

/// One optional add-on service of the SYD Agent module.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SydAgentService {
    pub service: LocalizedText,
    pub when: LocalizedText,
    pub cost: LocalizedText,
}

/// The SYD Agent pricing block shown on the pricing screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SydAgentPricing {
    pub title: LocalizedText,
    pub subtitle: LocalizedText,
    pub plans: Vec<SydAgentPlan>,
    pub additional_services_title: LocalizedText,
    pub additional_services: Vec<SydAgentService>,
}

/// The Data Producer brief shown on the pricing screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataProducerInfo {
    pub title: LocalizedText,
    pub subtitle: LocalizedText,
    pub description_title: LocalizedText,
    pub description_points: Vec<LocalizedText>,
    pub benefit_title: LocalizedText,
    pub benefit_description: LocalizedText,
    pub benefit_checklist: Vec<LocalizedText>,
}

/// One third-party service shown in the ecosystem diagram.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EcosystemServiceItem {
    pub title: LocalizedText,
    pub description: LocalizedText,
}

/// The ecosystem screen payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EcosystemData {
    pub title: LocalizedText,
    pub subtitle: LocalizedText,
    pub gateway_title: LocalizedText,
    pub gateway_producer: LocalizedText,
    pub gateway_user: LocalizedText,
    pub services_title: LocalizedText,
    pub services: Vec<EcosystemServiceItem>,
}

/// An external tool link listed on the applications screen.
///
/// The literal `href` is also handed to the AI assistant so it can emit
/// valid `open_url` commands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExternalLink {
    pub label: LocalizedText,
    pub href: String,
}

/// A node in the static content graph; one navigable view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Screen {
    /// Unique string key within the graph.
    pub id: String,
    /// Which renderer handles this screen.
    #[serde(rename = "type")]
    pub screen_type: ScreenType,
    /// Localized display text (title/subtitle/slogan, newline separated).
    pub text: LocalizedText,
    /// Ordered transition affordances.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<Action>,
    /// Successor id for auto-advancing screen types.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    /// Presentation steps.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub steps: Vec<PresentationStep>,
    /// Pricing scenarios.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub scenarios: Vec<PricingScenario>,
    /// SYD Agent add-on pricing block.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub syd_agent: Option<SydAgentPricing>,
    /// Data Producer brief.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_producer: Option<DataProducerInfo>,
    /// Ecosystem diagram payload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ecosystem: Option<EcosystemData>,
    /// External tool links (applications screen).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<ExternalLink>,
}

impl Screen {
    /// Returns every screen id this screen can transition to.
    pub fn outgoing_targets(&self) -> impl Iterator<Item = &str> {
        self.actions
            .iter()
            .map(|a| a.target.as_str())
            .chain(self.next.as_deref())
    }
}
