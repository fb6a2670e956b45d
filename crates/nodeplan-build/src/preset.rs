//! Nitro server-target selection.
//!
//! Nitro-based frameworks pick their server adapter from `NITRO_PRESET`
//! at build and run time. Other frameworks never get a preset.

use nodeplan_core::NodeFramework;

/// Environment variable carrying the preset into the image.
pub const PRESET_ENV: &str = "NITRO_PRESET";

/// Function-entry target used for serverless deployments.
pub const PRESET_SERVERLESS: &str = "node";
/// Bun server target.
pub const PRESET_BUN: &str = "bun";
/// Long-running Node server target.
pub const PRESET_NODE_SERVER: &str = "node-server";

const NITRO_FRAMEWORKS: &[NodeFramework] = &[NodeFramework::NuxtJs, NodeFramework::Nitropack];

/// Whether `framework` selects its server target through `NITRO_PRESET`.
pub fn is_nitro_based(framework: &str) -> bool {
    NodeFramework::from_id(framework).is_some_and(|f| NITRO_FRAMEWORKS.contains(&f))
}

/// Resolve the Nitro preset for a framework, or `None` if it takes none.
///
/// Serverless wins over the runtime choice: it changes the execution
/// model, so the Bun flag is irrelevant once it is set.
pub fn resolve_preset(
    framework: &str,
    serverless: bool,
    alternate_runtime: bool,
) -> Option<&'static str> {
    if !is_nitro_based(framework) {
        return None;
    }

    let preset = if serverless {
        PRESET_SERVERLESS
    } else if alternate_runtime {
        PRESET_BUN
    } else {
        PRESET_NODE_SERVER
    };
    Some(preset)
}
