use super::*;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

// =============================================================
// Stagger
// =============================================================

#[test]
fn stagger_delays_children_linearly() {
    let stagger = Stagger::new(0.3, 0.2);
    assert!(approx(stagger.delay_for(0), 0.3));
    assert!(approx(stagger.delay_for(1), 0.5));
    assert!(approx(stagger.delay_for(4), 1.1));
}

#[test]
fn experience_cards_are_spaced_further_apart() {
    let gap = EXPERIENCE_STAGGER.delay_for(1) - EXPERIENCE_STAGGER.delay_for(0);
    let card_gap = PROJECTS_STAGGER.delay_for(1) - PROJECTS_STAGGER.delay_for(0);
    assert!(gap > card_gap);
}

// =============================================================
// Spring
// =============================================================

#[test]
fn card_spring_is_critically_damped() {
    assert!(approx(CARD_SPRING.damping_ratio(), 1.0));
    assert_eq!(CARD_SPRING.css_easing(), SETTLE_EASING);
    assert!(approx(CARD_SPRING.settle_secs(), 0.4));
}

#[test]
fn soft_and_hover_springs_overshoot() {
    assert!(SOFT_SPRING.damping_ratio() < 1.0);
    assert!(HOVER_SPRING.damping_ratio() < 1.0);
    assert_eq!(SOFT_SPRING.css_easing(), OVERSHOOT_EASING);
}

#[test]
fn lower_damping_settles_slower() {
    assert!(SOFT_SPRING.settle_secs() > CARD_SPRING.settle_secs());
}

#[test]
fn undamped_spring_has_zero_settle_time() {
    assert!(approx(Spring::new(100.0, 0.0).settle_secs(), 0.0));
}

// =============================================================
// Motion rendering
// =============================================================

#[test]
fn staggered_motion_renders_offset_and_timing() {
    let motion = staggered(Entrance::FadeUp(20), HERO_STAGGER, CARD_SPRING, 2);
    assert_eq!(
        motion.style(),
        "--reveal-offset: 20px; --reveal-delay: 0.70s; --reveal-duration: 0.40s; \
         --reveal-easing: cubic-bezier(0.22, 1, 0.36, 1);"
    );
}

#[test]
fn scale_entrance_has_no_offset() {
    let style = tech_tag(0).style();
    assert!(style.starts_with("--reveal-delay: 1.20s;"));
}

#[test]
fn motion_class_reflects_reveal_state() {
    assert_eq!(HEADING.class(false), "reveal reveal--up is-hidden");
    assert_eq!(HEADING.class(true), "reveal reveal--up is-visible");
    assert_eq!(TIMELINE.class(true), "reveal reveal--grow is-visible");
}

#[test]
fn nav_items_follow_each_other_by_a_tenth() {
    assert!(approx(nav_item(0).tween.delay, 0.0));
    assert!(approx(nav_item(3).tween.delay, 0.3));
}

#[test]
fn nav_drops_in_from_above() {
    assert_eq!(NAV_BAR.entrance, Entrance::FadeDown(100));
    assert_eq!(NAV_BAR.class(false), "reveal reveal--down is-hidden");
    assert_eq!(nav_item(2).entrance, Entrance::FadeDown(20));
    assert!(nav_item(2).style().contains("--reveal-offset: 20px;"));
}

// =============================================================
// Skills
// =============================================================

#[test]
fn skill_row_timings_are_ordered() {
    let (row, counter, bar) = skill_row(1, 2);
    assert!(approx(row.delay, 0.4));
    assert!(approx(counter.delay, 0.9));
    assert!(approx(bar.delay, 1.2));
    assert!(approx(bar.duration, 1.5));
}

#[test]
fn skill_bar_is_empty_until_revealed() {
    assert_eq!(skill_bar_width(90, false), "width: 0%;");
    assert_eq!(skill_bar_width(90, true), "width: 90%;");
    assert_eq!(skill_bar_width(250, true), "width: 100%;");
}

#[test]
fn skill_counter_waits_for_count() {
    assert_eq!(skill_counter(85, false), "0%");
    assert_eq!(skill_counter(85, true), "85%");
}

// =============================================================
// Experience
// =============================================================

#[test]
fn achievements_follow_their_card() {
    assert!(approx(achievement(0, 0).tween.delay, 0.8));
    assert!(approx(achievement(1, 2).tween.delay, 1.4));
    assert!(approx(experience_tag(1, 0).tween.delay, 1.6));
}

// =============================================================
// Hero particles
// =============================================================

#[test]
fn hero_particles_spread_diagonally() {
    let particles = hero_particles();
    assert_eq!(particles.len(), HERO_PARTICLES);
    assert!(approx(particles[0].left_pct, 20.0));
    assert!(approx(particles[5].left_pct, 95.0));
    assert!(approx(particles[5].top_pct, 80.0));
    assert!(approx(particles[2].period_secs, 6.0));
    assert!(approx(particles[3].delay_secs, 1.5));
}

#[test]
fn particle_style_sets_position_and_timing() {
    let style = hero_particles()[1].style();
    assert_eq!(style, "left: 35%; top: 40%; animation-duration: 5s; animation-delay: 0.5s;");
}
