//! Color palettes — six semantic roles per palette, selected by index.
//!
//! The table is the compatibility contract: entries are appended, never
//! reordered or removed, or every deployed domain whose palette seed lands
//! past the edit silently re-skins on its next rebuild. Roles are semantic
//! (primary, text-on-primary, ...) so templates never hardcode a hex value.

use serde::Serialize;

/// Six semantic color roles plus a diagnostic name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Palette {
    /// Short diagnostic name ("federal-blue"). Never rendered to visitors.
    pub name: &'static str,
    /// Brand color: buttons, links, section accents.
    pub primary: &'static str,
    /// Supporting brand color: hover states, secondary buttons.
    pub secondary: &'static str,
    /// High-contrast highlight: badges, callouts, gradient stops.
    pub accent: &'static str,
    /// Page background.
    pub background: &'static str,
    /// Body text on `background`.
    pub text: &'static str,
    /// Text rendered on `primary` surfaces.
    pub text_on_primary: &'static str,
}

/// The palette table. Append-only.
pub static PALETTES: &[Palette] = &[
    Palette {
        name: "federal-blue",
        primary: "#1d4ed8",
        secondary: "#1e40af",
        accent: "#f59e0b",
        background: "#f8fafc",
        text: "#0f172a",
        text_on_primary: "#ffffff",
    },
    Palette {
        name: "evergreen",
        primary: "#047857",
        secondary: "#065f46",
        accent: "#d97706",
        background: "#f0fdf4",
        text: "#14532d",
        text_on_primary: "#ffffff",
    },
    Palette {
        name: "civic-teal",
        primary: "#0d9488",
        secondary: "#0f766e",
        accent: "#f43f5e",
        background: "#f0fdfa",
        text: "#134e4a",
        text_on_primary: "#ffffff",
    },
    Palette {
        name: "heartland-red",
        primary: "#b91c1c",
        secondary: "#991b1b",
        accent: "#fbbf24",
        background: "#fffbeb",
        text: "#1c1917",
        text_on_primary: "#ffffff",
    },
    Palette {
        name: "harbor",
        primary: "#0369a1",
        secondary: "#075985",
        accent: "#ea580c",
        background: "#f0f9ff",
        text: "#0c4a6e",
        text_on_primary: "#ffffff",
    },
    Palette {
        name: "amethyst",
        primary: "#7c3aed",
        secondary: "#6d28d9",
        accent: "#10b981",
        background: "#faf5ff",
        text: "#2e1065",
        text_on_primary: "#ffffff",
    },
    Palette {
        name: "slate-press",
        primary: "#334155",
        secondary: "#1e293b",
        accent: "#38bdf8",
        background: "#f8fafc",
        text: "#0f172a",
        text_on_primary: "#f1f5f9",
    },
    Palette {
        name: "copper",
        primary: "#c2410c",
        secondary: "#9a3412",
        accent: "#0891b2",
        background: "#fff7ed",
        text: "#431407",
        text_on_primary: "#ffffff",
    },
    Palette {
        name: "prairie-gold",
        primary: "#a16207",
        secondary: "#854d0e",
        accent: "#4f46e5",
        background: "#fefce8",
        text: "#422006",
        text_on_primary: "#ffffff",
    },
    Palette {
        name: "midnight",
        primary: "#1e3a8a",
        secondary: "#172554",
        accent: "#fb7185",
        background: "#eff6ff",
        text: "#1e1b4b",
        text_on_primary: "#ffffff",
    },
    Palette {
        name: "rosewood",
        primary: "#be123c",
        secondary: "#9f1239",
        accent: "#0ea5e9",
        background: "#fff1f2",
        text: "#4c0519",
        text_on_primary: "#ffffff",
    },
    Palette {
        name: "fern",
        primary: "#15803d",
        secondary: "#166534",
        accent: "#f97316",
        background: "#f7fee7",
        text: "#1a2e05",
        text_on_primary: "#ffffff",
    },
    Palette {
        name: "cobalt",
        primary: "#2563eb",
        secondary: "#1d4ed8",
        accent: "#facc15",
        background: "#eff6ff",
        text: "#172554",
        text_on_primary: "#ffffff",
    },
    Palette {
        name: "terracotta",
        primary: "#ea580c",
        secondary: "#c2410c",
        accent: "#14b8a6",
        background: "#fffbf5",
        text: "#431407",
        text_on_primary: "#ffffff",
    },
    Palette {
        name: "iris",
        primary: "#4f46e5",
        secondary: "#4338ca",
        accent: "#f59e0b",
        background: "#eef2ff",
        text: "#1e1b4b",
        text_on_primary: "#ffffff",
    },
    Palette {
        name: "pine-shadow",
        primary: "#065f46",
        secondary: "#064e3b",
        accent: "#e11d48",
        background: "#ecfdf5",
        text: "#022c22",
        text_on_primary: "#ffffff",
    },
    Palette {
        name: "ironstone",
        primary: "#44403c",
        secondary: "#292524",
        accent: "#f59e0b",
        background: "#fafaf9",
        text: "#1c1917",
        text_on_primary: "#fafaf9",
    },
    Palette {
        name: "lakefront",
        primary: "#0284c7",
        secondary: "#0369a1",
        accent: "#a3e635",
        background: "#f0f9ff",
        text: "#082f49",
        text_on_primary: "#ffffff",
    },
];

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
