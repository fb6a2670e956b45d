//! SPA / MPA route classification.

use nodeplan_core::{NodeFramework, OutputConfig, OutputRoute};

/// Frameworks that pre-render one document per route.
///
/// Everything not listed here is served as a single-page app.
pub const MPA_FRAMEWORKS: &[NodeFramework] = &[
    NodeFramework::Hexo,
    NodeFramework::Vitepress,
    NodeFramework::AstroStatic,
    NodeFramework::SolidStartStatic,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteStrategy {
    /// Every path rewrites to the root document.
    Spa,
    /// Paths map to files as-is.
    Mpa,
}

/// Classify a framework identifier. Unknown and empty ids are SPA.
pub fn classify(framework: &str) -> RouteStrategy {
    match NodeFramework::from_id(framework) {
        Some(f) if MPA_FRAMEWORKS.contains(&f) => RouteStrategy::Mpa,
        _ => RouteStrategy::Spa,
    }
}

impl RouteStrategy {
    /// Routing config for a static deployment using this strategy.
    pub fn output_config(&self) -> OutputConfig {
        let routes = match self {
            Self::Spa => vec![OutputRoute::catch_all()],
            Self::Mpa => Vec::new(),
        };
        OutputConfig {
            containerized: false,
            routes,
        }
    }
}
