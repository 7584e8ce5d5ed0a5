use super::*;

#[test]
fn nav_items_cover_every_section_in_page_order() {
    assert_eq!(NAV_ITEMS, ["Home", "About", "Skills", "Projects", "Experience", "Contact"]);
}

#[test]
fn skill_levels_are_percentages() {
    for category in &SKILL_CATEGORIES {
        assert!(!category.skills.is_empty(), "{} has no skills", category.title);
        for skill in category.skills {
            assert!(skill.level <= 100, "{} level {} out of range", skill.name, skill.level);
        }
    }
}

#[test]
fn skill_names_are_unique_across_categories() {
    let mut names = SKILL_CATEGORIES
        .iter()
        .flat_map(|c| c.skills.iter().map(|s| s.name))
        .collect::<Vec<_>>();
    let total = names.len();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), total);
}

#[test]
fn exactly_one_project_is_featured() {
    assert_eq!(PROJECTS.iter().filter(|p| p.featured).count(), 1);
    assert!(PROJECTS[0].featured);
}

#[test]
fn project_monogram_is_first_title_char() {
    assert_eq!(PROJECTS[0].monogram(), 'R');
    assert_eq!(PROJECTS[2].monogram(), 'A');
}

#[test]
fn experience_entries_have_achievements_and_skills() {
    for entry in &EXPERIENCE {
        assert!(!entry.achievements.is_empty());
        assert!(!entry.skills.is_empty());
    }
    assert_eq!(EXPERIENCE[0].accent.class(), "accent-blue");
    assert_eq!(EXPERIENCE[1].accent.class(), "accent-green");
}

#[test]
fn contact_info_rows_link_only_the_email() {
    let rows = contact_info_rows(&PROFILE);
    let titles = rows.iter().map(|r| r.title).collect::<Vec<_>>();
    assert_eq!(titles, ["Email", "Phone", "Location"]);
    assert_eq!(rows[0].href.as_deref(), Some("mailto:"));
    assert!(rows[1].href.is_none());
    assert_eq!(rows[2].info, "Dehradun, India");
}

#[test]
fn external_profile_links_are_https() {
    assert!(PROFILE.linkedin_url.starts_with("https://"));
    assert!(PROFILE.github_url.starts_with("https://"));
}
