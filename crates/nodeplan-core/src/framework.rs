//! Catalogue of framework identifiers emitted by project detection.
//!
//! Identifiers are plain strings on the wire (`"next.js"`, `"hexo"`, ...).
//! Parsing is total: anything outside the catalogue maps to `None` and
//! callers treat it as "no special handling".

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeFramework {
    Angular,
    Astro,
    AstroStatic,
    AstroSsr,
    CreateReactApp,
    Docusaurus,
    Express,
    Hexo,
    Koa,
    NestJs,
    NextJs,
    Nitropack,
    NuxtJs,
    Qwik,
    Remix,
    SolidStart,
    SolidStartStatic,
    Svelte,
    SvelteKit,
    Umi,
    Vite,
    Vitepress,
    VueCliService,
}

impl NodeFramework {
    pub const ALL: &'static [NodeFramework] = &[
        Self::Angular,
        Self::Astro,
        Self::AstroStatic,
        Self::AstroSsr,
        Self::CreateReactApp,
        Self::Docusaurus,
        Self::Express,
        Self::Hexo,
        Self::Koa,
        Self::NestJs,
        Self::NextJs,
        Self::Nitropack,
        Self::NuxtJs,
        Self::Qwik,
        Self::Remix,
        Self::SolidStart,
        Self::SolidStartStatic,
        Self::Svelte,
        Self::SvelteKit,
        Self::Umi,
        Self::Vite,
        Self::Vitepress,
        Self::VueCliService,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Angular => "angular",
            Self::Astro => "astro",
            Self::AstroStatic => "astro-static",
            Self::AstroSsr => "astro-ssr",
            Self::CreateReactApp => "create-react-app",
            Self::Docusaurus => "docusaurus",
            Self::Express => "express",
            Self::Hexo => "hexo",
            Self::Koa => "koa",
            Self::NestJs => "nest.js",
            Self::NextJs => "next.js",
            Self::Nitropack => "nitropack",
            Self::NuxtJs => "nuxt.js",
            Self::Qwik => "qwik",
            Self::Remix => "remix",
            Self::SolidStart => "solid-start",
            Self::SolidStartStatic => "solid-start-static",
            Self::Svelte => "svelte",
            Self::SvelteKit => "sveltekit",
            Self::Umi => "umi",
            Self::Vite => "vite",
            Self::Vitepress => "vitepress",
            Self::VueCliService => "vue-cli-service",
        }
    }

    /// Look up a framework by its identifier. Matching is exact.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|f| f.as_str() == id)
    }
}

impl fmt::Display for NodeFramework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_id_roundtrips_every_variant() {
        for framework in NodeFramework::ALL {
            assert_eq!(NodeFramework::from_id(framework.as_str()), Some(*framework));
        }
    }

    #[test]
    fn from_id_unknown_is_none() {
        assert_eq!(NodeFramework::from_id(""), None);
        assert_eq!(NodeFramework::from_id("rails"), None);
        // case matters
        assert_eq!(NodeFramework::from_id("Next.js"), None);
    }

    #[test]
    fn display_matches_identifier() {
        assert_eq!(NodeFramework::NuxtJs.to_string(), "nuxt.js");
        assert_eq!(NodeFramework::SolidStartStatic.to_string(), "solid-start-static");
    }
}
