use csrimpact_bridge::catalog::SectorIcon;
use csrimpact_bridge::session::UserRole;
use gpui::{Hsla, hsla};
use gpui_component::IconName;

pub mod card;
pub mod notification_stack;
pub mod segmented_bar;
pub mod status_badge;

/// Brand orange, used for everything on the corporate side.
pub(crate) fn brand_orange() -> Hsla {
    hsla(0.080, 1.0, 0.50, 1.0)
}

/// Accent blue, used for everything on the NGO side.
pub(crate) fn brand_blue() -> Hsla {
    hsla(0.590, 0.92, 0.68, 1.0)
}

pub(crate) fn success_green() -> Hsla {
    hsla(0.395, 0.69, 0.58, 1.0)
}

pub(crate) fn danger_red() -> Hsla {
    hsla(0.0, 0.91, 0.71, 1.0)
}

pub(crate) fn warning_yellow() -> Hsla {
    hsla(0.133, 0.96, 0.53, 1.0)
}

/// Teal used by the AI-analysis panel.
pub(crate) fn analysis_teal() -> Hsla {
    hsla(0.478, 0.66, 0.50, 1.0)
}

/// The same color at a different opacity, for washed-out backgrounds and
/// borders.
pub(crate) fn faded(color: Hsla, alpha: f32) -> Hsla {
    Hsla { a: alpha, ..color }
}

/// The accent color of a role.
pub(crate) fn role_accent(role: UserRole) -> Hsla {
    match role {
        UserRole::Company => brand_orange(),
        UserRole::Ngo => brand_blue(),
    }
}

/// Maps the closed set of sector glyph identifiers to concrete icons.
/// The match is exhaustive, so a sector can never render without one.
pub(crate) fn sector_icon(icon: SectorIcon) -> IconName {
    match icon {
        SectorIcon::BookOpen => IconName::BookOpen,
        SectorIcon::Wheat => IconName::Sun,
        SectorIcon::Heart => IconName::Heart,
        SectorIcon::Leaf => IconName::Globe,
        SectorIcon::Users => IconName::User,
        SectorIcon::Cpu => IconName::Bot,
    }
}
