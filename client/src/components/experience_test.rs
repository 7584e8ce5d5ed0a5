use super::*;

#[test]
fn one_card_per_entry_in_source_order() {
    let cards = experience_cards(&EXPERIENCE);
    assert_eq!(cards.len(), EXPERIENCE.len());
    let companies = cards.iter().map(|c| c.entry.company).collect::<Vec<_>>();
    assert_eq!(companies, ["IBM", "Daya Foundation"]);
}

#[test]
fn achievements_and_tags_preserve_order_and_count() {
    let cards = experience_cards(&EXPERIENCE);
    for (card, entry) in cards.iter().zip(EXPERIENCE.iter()) {
        let achievements = card.achievements.iter().map(|(t, _)| *t).collect::<Vec<_>>();
        assert_eq!(achievements, entry.achievements);
        let tags = card.tags.iter().map(|(t, _)| *t).collect::<Vec<_>>();
        assert_eq!(tags, entry.skills);
    }
}

#[test]
fn cards_alternate_sides() {
    let cards = experience_cards(&EXPERIENCE);
    assert!(cards[0].on_left);
    assert!(!cards[1].on_left);
    assert_eq!(cards[1].motion.entrance, Entrance::SlideRight(100));
}

#[test]
fn second_card_enters_after_first() {
    let cards = experience_cards(&EXPERIENCE);
    assert!(cards[1].motion.tween.delay > cards[0].motion.tween.delay);
}
