//! Declarative entrance and micro-interaction parameters.
//!
//! Sections describe their motion with small value types (staggered
//! containers, spring-driven children, fixed-duration tweens) and this module
//! renders them to inline CSS custom properties. `style/main.css` owns the
//! keyframes and the hidden/visible transforms; nothing here touches the DOM.

#[cfg(test)]
#[path = "animation_test.rs"]
mod animation_test;

/// Delay before the skill percentage counters jump to their levels.
pub const SKILL_COUNT_DELAY_MS: u32 = 500;

/// Number of decorative particles floating behind the hero.
pub const HERO_PARTICLES: usize = 6;

// =============================================================================
// STAGGER
// =============================================================================

/// Parent container that delays each child by a fixed step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stagger {
    pub delay_children: f64,
    pub stagger_children: f64,
}

impl Stagger {
    #[must_use]
    pub const fn new(delay_children: f64, stagger_children: f64) -> Self {
        Self { delay_children, stagger_children }
    }

    /// Start delay in seconds for the child at `index`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn delay_for(&self, index: usize) -> f64 {
        self.delay_children + index as f64 * self.stagger_children
    }
}

// =============================================================================
// SPRING
// =============================================================================

/// Damped spring approximated by a CSS duration and cubic-bezier.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spring {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
}

const OVERSHOOT_EASING: &str = "cubic-bezier(0.34, 1.56, 0.64, 1)";
const SETTLE_EASING: &str = "cubic-bezier(0.22, 1, 0.36, 1)";

impl Spring {
    #[must_use]
    pub const fn new(stiffness: f64, damping: f64) -> Self {
        Self { stiffness, damping, mass: 1.0 }
    }

    /// `ζ = c / (2·√(k·m))`; below 1.0 the spring overshoots.
    #[must_use]
    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    /// Time for the envelope to decay to ~2%, i.e. `4 / (ζ·ω₀) = 8m / c`.
    #[must_use]
    pub fn settle_secs(&self) -> f64 {
        if self.damping <= 0.0 {
            return 0.0;
        }
        8.0 * self.mass / self.damping
    }

    #[must_use]
    pub fn css_easing(&self) -> &'static str {
        if self.damping_ratio() < 1.0 { OVERSHOOT_EASING } else { SETTLE_EASING }
    }

    #[must_use]
    pub fn tween(&self, delay: f64) -> Tween {
        Tween { delay, duration: self.settle_secs(), easing: self.css_easing() }
    }
}

// =============================================================================
// TWEEN
// =============================================================================

/// A concrete CSS timing: delay, duration, and easing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    pub delay: f64,
    pub duration: f64,
    pub easing: &'static str,
}

impl Tween {
    #[must_use]
    pub const fn ease_out(delay: f64, duration: f64) -> Self {
        Self { delay, duration, easing: "ease-out" }
    }

    /// Inline custom properties read by the `.reveal` rules in the stylesheet.
    #[must_use]
    pub fn style(&self) -> String {
        format!(
            "--reveal-delay: {:.2}s; --reveal-duration: {:.2}s; --reveal-easing: {};",
            self.delay, self.duration, self.easing
        )
    }
}

// =============================================================================
// ENTRANCES
// =============================================================================

/// Hidden-state pose a child animates from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Entrance {
    /// Rise from `offset` pixels below.
    FadeUp(u16),
    /// Drop in from `offset` pixels above.
    FadeDown(u16),
    /// Slide in from `offset` pixels to the left.
    FadeLeft(u16),
    /// Slide in from `offset` pixels to the right.
    SlideRight(u16),
    /// Grow from a reduced scale.
    ScaleIn,
    /// Grow vertically from the top edge (timeline rail).
    GrowDown,
}

impl Entrance {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::FadeUp(_) => "reveal reveal--up",
            Self::FadeDown(_) => "reveal reveal--down",
            Self::FadeLeft(_) => "reveal reveal--left",
            Self::SlideRight(_) => "reveal reveal--right",
            Self::ScaleIn => "reveal reveal--scale",
            Self::GrowDown => "reveal reveal--grow",
        }
    }

    fn offset_style(self) -> String {
        match self {
            Self::FadeUp(px) | Self::FadeDown(px) | Self::FadeLeft(px) | Self::SlideRight(px) => {
                format!("--reveal-offset: {px}px; ")
            }
            Self::ScaleIn | Self::GrowDown => String::new(),
        }
    }
}

/// One animated element: its entrance pose plus timing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Motion {
    pub entrance: Entrance,
    pub tween: Tween,
}

impl Motion {
    #[must_use]
    pub fn style(&self) -> String {
        format!("{}{}", self.entrance.offset_style(), self.tween.style())
    }

    /// Class list for the element given its section's reveal state.
    #[must_use]
    pub fn class(&self, revealed: bool) -> String {
        let state = if revealed { "is-visible" } else { "is-hidden" };
        format!("{} {state}", self.entrance.class())
    }
}

/// Motion for the `index`th child of a staggered, spring-driven container.
#[must_use]
pub fn staggered(entrance: Entrance, stagger: Stagger, spring: Spring, index: usize) -> Motion {
    Motion { entrance, tween: spring.tween(stagger.delay_for(index)) }
}

// =============================================================================
// SECTION PRESETS
// =============================================================================

/// Section heading: rise 30px over 0.8s as soon as the section is revealed.
pub const HEADING: Motion = Motion { entrance: Entrance::FadeUp(30), tween: Tween::ease_out(0.0, 0.8) };
/// Section subtitle paragraph.
pub const SUBTITLE: Motion = Motion { entrance: Entrance::FadeUp(0), tween: Tween::ease_out(0.3, 0.8) };

pub const HERO_STAGGER: Stagger = Stagger::new(0.3, 0.2);
pub const ABOUT_STAGGER: Stagger = Stagger::new(0.3, 0.2);
pub const SKILLS_STAGGER: Stagger = Stagger::new(0.2, 0.1);
pub const PROJECTS_STAGGER: Stagger = Stagger::new(0.3, 0.2);
pub const EXPERIENCE_STAGGER: Stagger = Stagger::new(0.3, 0.4);
pub const CONTACT_STAGGER: Stagger = Stagger::new(0.3, 0.2);

/// Critically damped card spring.
pub const CARD_SPRING: Spring = Spring::new(100.0, 20.0);
/// Bouncier spring used by the about/contact columns.
pub const SOFT_SPRING: Spring = Spring::new(100.0, 12.0);
/// Snappy spring behind hover and tap feedback.
pub const HOVER_SPRING: Spring = Spring::new(400.0, 10.0);

/// Navigation entrance: the bar drops in, then items follow 0.1s apart.
pub const NAV_BAR: Motion = Motion { entrance: Entrance::FadeDown(100), tween: Tween::ease_out(0.0, 0.8) };

#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn nav_item(index: usize) -> Motion {
    Motion { entrance: Entrance::FadeDown(20), tween: Tween::ease_out(index as f64 * 0.1, 0.5) }
}

/// Timing for one skill row: `(row, counter, bar)` tweens.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn skill_row(category_index: usize, skill_index: usize) -> (Tween, Tween, Tween) {
    let base = category_index as f64 * 0.2 + skill_index as f64 * 0.1;
    (
        Tween::ease_out(base, 0.5),
        Tween::ease_out(base + 0.5, 0.3),
        Tween::ease_out(base + 0.8, 1.5),
    )
}

/// Inline width of a skill bar: the level once revealed, empty before.
#[must_use]
pub fn skill_bar_width(level: u8, revealed: bool) -> String {
    let pct = if revealed { level.min(100) } else { 0 };
    format!("width: {pct}%;")
}

/// Counter text shown next to a skill; stays at zero until the count delay
/// has elapsed.
#[must_use]
pub fn skill_counter(level: u8, counted: bool) -> String {
    format!("{}%", if counted { level.min(100) } else { 0 })
}

/// Technology tags under the skill grid pop in after the cards.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn tech_tag(index: usize) -> Motion {
    Motion { entrance: Entrance::ScaleIn, tween: Tween::ease_out(1.2 + index as f64 * 0.1, 0.5) }
}

/// Certification list items in the about section.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn certification(index: usize) -> Motion {
    Motion { entrance: Entrance::FadeLeft(20), tween: Tween::ease_out(0.5 + index as f64 * 0.1, 0.5) }
}

/// Achievement bullet `achievement_index` of experience card `entry_index`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn achievement(entry_index: usize, achievement_index: usize) -> Motion {
    Motion {
        entrance: Entrance::FadeLeft(20),
        tween: Tween::ease_out(entry_index as f64 * 0.4 + achievement_index as f64 * 0.1 + 0.8, 0.5),
    }
}

/// Skill tag `skill_index` of experience card `entry_index`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn experience_tag(entry_index: usize, skill_index: usize) -> Motion {
    Motion {
        entrance: Entrance::ScaleIn,
        tween: Tween::ease_out(entry_index as f64 * 0.4 + skill_index as f64 * 0.1 + 1.2, 0.4),
    }
}

/// Timeline rail drawn behind the experience cards.
pub const TIMELINE: Motion = Motion { entrance: Entrance::GrowDown, tween: Tween::ease_out(0.0, 1.5) };

/// Closing block of a section (footer, "view all" button).
pub const TRAILER: Motion = Motion { entrance: Entrance::FadeUp(30), tween: Tween::ease_out(1.0, 0.8) };

// =============================================================================
// AMBIENT LOOPS
// =============================================================================

/// Position and loop timing of one floating hero particle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub left_pct: f64,
    pub top_pct: f64,
    pub period_secs: f64,
    pub delay_secs: f64,
}

impl Particle {
    #[must_use]
    pub fn style(&self) -> String {
        format!(
            "left: {}%; top: {}%; animation-duration: {}s; animation-delay: {}s;",
            self.left_pct, self.top_pct, self.period_secs, self.delay_secs
        )
    }
}

#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn hero_particles() -> Vec<Particle> {
    (0..HERO_PARTICLES)
        .map(|i| {
            let i = i as f64;
            Particle { left_pct: 20.0 + i * 15.0, top_pct: 30.0 + i * 10.0, period_secs: 4.0 + i, delay_secs: i * 0.5 }
        })
        .collect()
}
