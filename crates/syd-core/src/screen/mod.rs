//! Screen graph: models and the renderer props contract.

pub mod model;
pub mod props;

pub use model::{
    Action, ActionColor, ActionKind, DataProducerInfo, EcosystemData, EcosystemServiceItem,
    ExternalLink, PresentationStep, PricingScenario, PricingTier, Screen, ScreenType,
    SydAgentPlan, SydAgentPricing, SydAgentService,
};
pub use props::{OneShotProps, ScreenProps};
