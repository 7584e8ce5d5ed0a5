//! Static page content.
//!
//! DESIGN
//! ======
//! Everything the sections display lives here as `'static` data so the
//! components stay pure layout. Nothing in this module is mutated at runtime.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

/// Owner details shared by the hero, navigation, and contact sections.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub initials: &'static str,
    pub headline: &'static str,
    pub tagline: &'static str,
    pub image_path: &'static str,
    pub resume_path: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub location: &'static str,
    pub linkedin_url: &'static str,
    pub github_url: &'static str,
    pub copyright: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "Shubham Swain",
    initials: "SS",
    headline: "BCA Data Science Student & Aspiring Data Scientist",
    tagline: "Passionate about transforming data into insights and building innovative solutions \
              with machine learning and web technologies.",
    image_path: "/profile.jpg",
    resume_path: "/resume.pdf",
    email: "",
    phone: "",
    location: "Dehradun, India",
    linkedin_url: "https://www.linkedin.com/in/shubham-swain-054296318/",
    github_url: "https://github.com/Shubham1489",
    copyright: "© 2024 Shubham Swain.",
};

// =============================================================================
// NAVIGATION
// =============================================================================

/// Navigation labels in display order.
pub const NAV_ITEMS: [&str; 6] = ["Home", "About", "Skills", "Projects", "Experience", "Contact"];

// =============================================================================
// ABOUT
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Education {
    pub degree: &'static str,
    pub institution: &'static str,
    pub grade: &'static str,
}

pub const ABOUT_INTRO: &str = "A dedicated BCA Data Science student with a passion for leveraging technology \
                               to solve real-world problems through data-driven insights and innovative solutions.";

pub const EDUCATION: Education =
    Education { degree: "BCA – Data Science", institution: "UPES Dehradun", grade: "CGPA: 7.45/10" };

pub const CERTIFICATIONS: [&str; 4] = [
    "Oracle Cloud Infrastructure DevOps Professional",
    "Python Programming",
    "Data Science with R",
    "Data Visualization",
];

pub const JOURNEY: [&str; 3] = [
    "As a BCA Data Science student at UPES Dehradun, I'm passionate about the intersection \
     of technology and data. My journey has been driven by curiosity and a desire to \
     create meaningful impact through innovative solutions.",
    "Through various internships and projects, I've gained hands-on experience in \
     building data-driven applications, from threat analysis dashboards to recommendation \
     systems. I believe in continuous learning and staying updated with the latest \
     technologies in the rapidly evolving field of data science.",
    "My goal is to leverage my technical skills and analytical mindset to contribute \
     to projects that make a positive difference in people's lives.",
];

// =============================================================================
// SKILLS
// =============================================================================

/// A named skill with a proficiency level in percent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub level: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkillCategory {
    pub title: &'static str,
    pub icon: &'static str,
    pub skills: &'static [Skill],
}

const fn skill(name: &'static str, level: u8) -> Skill {
    Skill { name, level }
}

pub const SKILLS_INTRO: &str =
    "A comprehensive toolkit spanning data science, web development, and cloud technologies";

pub const SKILL_CATEGORIES: [SkillCategory; 4] = [
    SkillCategory {
        title: "Programming Languages",
        icon: "💻",
        skills: &[skill("Python", 90), skill("JavaScript", 85), skill("Java", 80), skill("HTML/CSS", 88)],
    },
    SkillCategory {
        title: "Data Science & ML",
        icon: "📊",
        skills: &[skill("NumPy", 85), skill("Pandas", 88), skill("Scikit-learn", 82), skill("TensorFlow", 75)],
    },
    SkillCategory {
        title: "Web Development",
        icon: "🌐",
        skills: &[skill("Flask", 85), skill("Angular", 78), skill("Bootstrap", 90), skill("Power BI", 80)],
    },
    SkillCategory {
        title: "DevOps & Database",
        icon: "⚙️",
        skills: &[
            skill("AWS", 75),
            skill("Docker", 70),
            skill("Kubernetes", 65),
            skill("Git", 88),
            skill("MySQL", 82),
            skill("MongoDB", 78),
        ],
    },
];

pub const ADDITIONAL_TECHNOLOGIES: [&str; 8] = [
    "REST APIs",
    "JSON",
    "Data Visualization",
    "Statistical Analysis",
    "Machine Learning",
    "Cloud Computing",
    "Version Control",
    "Agile Methodology",
];

// =============================================================================
// PROJECTS
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tech_stack: &'static [&'static str],
    pub github_url: &'static str,
    /// `None` when the project has no hosted demo.
    pub demo_url: Option<&'static str>,
    pub featured: bool,
}

impl Project {
    /// First character of the title, shown as the card monogram.
    #[must_use]
    pub fn monogram(&self) -> char {
        self.title.chars().next().unwrap_or('?')
    }
}

pub const PROJECTS_INTRO: &str = "A showcase of my technical projects demonstrating skills in data science, \
                                  web development, and automation";

pub const PROJECTS: [Project; 3] = [
    Project {
        title: "Restaurant Recommendation System",
        description: "A Flask web application that provides personalized restaurant recommendations using \
                      machine learning algorithms. Features interactive visualizations and user preference \
                      analysis to deliver tailored dining suggestions.",
        tech_stack: &["Python", "Flask", "Machine Learning", "Pandas", "Scikit-learn", "HTML/CSS", "JavaScript"],
        github_url: "https://github.com/Shubham1489",
        demo_url: None,
        featured: true,
    },
    Project {
        title: "Weather Insight",
        description: "A Python console application that fetches and displays weekly weather forecasts using \
                      external APIs. Provides detailed weather analytics with data visualization and historical \
                      weather pattern analysis.",
        tech_stack: &["Python", "APIs", "Data Analysis", "JSON", "Requests", "Matplotlib"],
        github_url: "https://github.com/Shubham1489",
        demo_url: None,
        featured: false,
    },
    Project {
        title: "AutoMail Pro",
        description: "An automated email notification system built with Python that handles scheduling, \
                      attachments, and bulk email operations. Features template management and delivery \
                      tracking capabilities.",
        tech_stack: &["Python", "SMTP", "Email APIs", "Scheduling", "File Handling", "Automation"],
        github_url: "https://github.com/Shubham1489",
        demo_url: None,
        featured: false,
    },
];

// =============================================================================
// EXPERIENCE
// =============================================================================

/// Accent color family used by an experience card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Accent {
    Blue,
    Green,
}

impl Accent {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Blue => "accent-blue",
            Self::Green => "accent-green",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExperienceEntry {
    pub company: &'static str,
    pub role: &'static str,
    pub duration: &'static str,
    pub kind: &'static str,
    pub description: &'static str,
    pub achievements: &'static [&'static str],
    pub skills: &'static [&'static str],
    pub accent: Accent,
}

pub const EXPERIENCE_INTRO: &str =
    "Professional experiences that have shaped my technical skills and leadership abilities";

pub const EXPERIENCE: [ExperienceEntry; 2] = [
    ExperienceEntry {
        company: "IBM",
        role: "Project Intern",
        duration: "2024",
        kind: "Technical Internship",
        description: "Built a comprehensive Streamlit dashboard to analyze threat logs and visualize IP \
                      geolocations. Implemented data processing pipelines and created interactive \
                      visualizations for cybersecurity threat analysis.",
        achievements: &[
            "Developed interactive dashboard using Streamlit and Python",
            "Implemented IP geolocation mapping and threat visualization",
            "Processed and analyzed large-scale security log data",
            "Created automated reporting systems for threat intelligence",
        ],
        skills: &["Python", "Streamlit", "Data Analysis", "Cybersecurity", "Visualization"],
        accent: Accent::Blue,
    },
    ExperienceEntry {
        company: "Daya Foundation",
        role: "Social Intern",
        duration: "2023",
        kind: "Community Service",
        description: "Executed community initiatives and social programs reaching over 200+ participants. \
                      Focused on educational outreach, community development, and social impact measurement.",
        achievements: &[
            "Organized and executed community initiatives for 200+ participants",
            "Developed educational outreach programs",
            "Coordinated volunteer activities and resource management",
            "Measured and reported social impact metrics",
        ],
        skills: &["Project Management", "Community Outreach", "Leadership", "Communication"],
        accent: Accent::Green,
    },
];

// =============================================================================
// CONTACT
// =============================================================================

pub const CONTACT_INTRO: &str = "I'm always open to discussing new opportunities, collaborations, or just \
                                 having a chat about technology and data science.";

/// One row of the contact information card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactInfoRow {
    pub icon: &'static str,
    pub title: &'static str,
    pub info: &'static str,
    pub href: Option<String>,
}

/// Contact information rows in display order.
#[must_use]
pub fn contact_info_rows(profile: &Profile) -> Vec<ContactInfoRow> {
    vec![
        ContactInfoRow {
            icon: "✉",
            title: "Email",
            info: profile.email,
            href: Some(format!("mailto:{}", profile.email)),
        },
        ContactInfoRow { icon: "☎", title: "Phone", info: profile.phone, href: None },
        ContactInfoRow { icon: "⌖", title: "Location", info: profile.location, href: None },
    ]
}
