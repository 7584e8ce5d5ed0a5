use super::*;

#[test]
fn one_card_per_category_in_source_order() {
    let cards = skill_cards(&SKILL_CATEGORIES);
    assert_eq!(cards.len(), SKILL_CATEGORIES.len());
    let titles = cards.iter().map(|c| c.title).collect::<Vec<_>>();
    let expected = SKILL_CATEGORIES.iter().map(|c| c.title).collect::<Vec<_>>();
    assert_eq!(titles, expected);
}

#[test]
fn one_row_per_skill_in_source_order() {
    let cards = skill_cards(&SKILL_CATEGORIES);
    for (card, category) in cards.iter().zip(SKILL_CATEGORIES.iter()) {
        assert_eq!(card.rows.len(), category.skills.len());
        for (row, skill) in card.rows.iter().zip(category.skills) {
            assert_eq!(row.name, skill.name);
            assert_eq!(row.level, skill.level);
        }
    }
}

#[test]
fn cards_enter_in_order() {
    let cards = skill_cards(&SKILL_CATEGORIES);
    for pair in cards.windows(2) {
        assert!(pair[0].motion.tween.delay < pair[1].motion.tween.delay);
    }
}

#[test]
fn rows_within_a_card_enter_in_order() {
    let cards = skill_cards(&SKILL_CATEGORIES);
    let devops = &cards[3];
    assert_eq!(devops.rows.len(), 6);
    for pair in devops.rows.windows(2) {
        assert!(pair[0].row.delay < pair[1].row.delay);
    }
}

#[test]
fn empty_categories_render_nothing() {
    assert!(skill_cards(&[]).is_empty());
}
