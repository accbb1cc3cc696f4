//! Resume content rendered by the page, plus the few values derived from it.

use chrono::{DateTime, Datelike};
use serde::Serialize;

use crate::error::ContentError;

pub struct Profile {
    pub name: &'static str,
    pub role: &'static str,
    pub tagline: &'static str,
    /// Follows "I am a passionate <role>" in the about section.
    pub summary: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub linkedin: &'static str,
    pub github: &'static str,
    pub image: &'static str,
}

pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub struct SkillGroup {
    pub category: &'static str,
    pub skills: &'static [&'static str],
}

pub struct EducationEntry {
    pub school: &'static str,
    pub program: &'static str,
    pub date: &'static str,
    pub desc: &'static str,
}

pub struct ExperienceEntry {
    pub company: &'static str,
    pub role: &'static str,
    pub date: &'static str,
    pub desc: &'static str,
}

pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub link: Option<&'static str>,
    /// Stagger for the card's fade-in, in milliseconds.
    pub delay_ms: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactLink {
    pub label: &'static str,
    pub icon: &'static str,
    pub href: String,
}

pub const PROFILE: Profile = Profile {
    name: "Dhaniyah Fadlisha",
    role: "Software Engineering Student",
    tagline: "Pixels that perform, code that connects.",
    summary: "with a strong foundation in computer science principles. With experience in both academic and practical software development, I build efficient, user-friendly solutions. I am eager to contribute my skills in full-stack development to create impactful digital experiences.",
    email: "fadlishadhaniyah@gmail.com",
    phone: "+60 13-713 8266",
    linkedin: "https://www.linkedin.com/in/dhaniyahfadlisha",
    github: "https://github.com/DFadlisha",
    image: "/profile.jpg",
};

pub const STATS: &[Stat] = &[
    Stat {
        value: "3+",
        label: "Years Learning",
    },
    Stat {
        value: "10+",
        label: "Projects Completed",
    },
];

pub const SKILLS: &[SkillGroup] = &[
    SkillGroup {
        category: "Front-end",
        skills: &[
            "React.js",
            "JavaScript",
            "HTML",
            "CSS",
            "Flutter",
            "Tailwind CSS",
            "Bootstrap",
        ],
    },
    SkillGroup {
        category: "Back-end",
        skills: &["Java", "Node.js", "PHP", "Python", "MySQL", "C++", "C#"],
    },
    SkillGroup {
        category: "Tools",
        skills: &["Git", "GitHub", "VS Code", "Figma"],
    },
];

pub const EDUCATION: &[EducationEntry] = &[
    EducationEntry {
        school: "Universiti Teknologi Malaysia (UTM)",
        program: "B.CompSc (Software Engineering) with Honours",
        date: "Expected Oct 2026",
        desc: "CGPA 3.17 • Core: Software Engineering, OOP, Data Structures",
    },
    EducationEntry {
        school: "Kolej Vokasional Datuk Seri Mohd Zin",
        program: "Diploma in Information Technology",
        date: "Graduated Sept 2021",
        desc: "CGPA 3.41 • Dean's List Awardee",
    },
];

pub const EXPERIENCE: &[ExperienceEntry] = &[
    ExperienceEntry {
        company: "Ishan Tech (M) Sdn Bhd",
        role: "Technical Support Intern",
        date: "Mar 2021 – Jul 2021",
        desc: "Provided technical support for ESET antivirus, troubleshot client issues, and collaborated with marketing teams.",
    },
    ExperienceEntry {
        company: "Self-Employed",
        role: "Freelance Developer",
        date: "2023 - Present",
        desc: "Developed web solutions and interactive applications for various academic and personal projects.",
    },
];

pub const PROJECTS: &[Project] = &[
    Project {
        title: "MI-NES Payroll System",
        description: "Comprehensive payroll management system built with PHP and Supabase. Features PDF generation, overtime calculation, and PCB tax integration.",
        tags: &["PHP", "Supabase", "MySQL", "TCPDF"],
        link: Some("https://github.com/DFadlisha/payroll-system"),
        delay_ms: 0,
    },
    Project {
        title: "Queue System",
        description: "Real-time queue tracking system using Vite and polling. Integrates with Upstash Redis for state syncing across devices without a custom backend.",
        tags: &["Vite", "React", "Redis", "Vercel"],
        link: Some("https://github.com/DFadlisha/Queue-System"),
        delay_ms: 150,
    },
    Project {
        title: "Sortmaster Mobile",
        description: "Mobile sorting application built with React, TypeScript, and Tailwind CSS. Features a modern UI using shadcn-ui and Lovable integration.",
        tags: &["React Native", "TypeScript", "Tailwind CSS", "Shadcn"],
        link: Some("https://github.com/DFadlisha/sortmaster-mobile"),
        delay_ms: 300,
    },
];

pub fn mailto_href(email: &str) -> String {
    format!("mailto:{email}")
}

/// `tel:` URI with all whitespace and hyphens removed.
pub fn tel_href(phone: &str) -> String {
    let digits = phone
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect::<String>();
    format!("tel:{digits}")
}

pub fn contact_links() -> Vec<ContactLink> {
    vec![
        ContactLink {
            label: "Email",
            icon: "📧",
            href: mailto_href(PROFILE.email),
        },
        ContactLink {
            label: "LinkedIn",
            icon: "💼",
            href: PROFILE.linkedin.to_string(),
        },
        ContactLink {
            label: "GitHub",
            icon: "🐙",
            href: PROFILE.github.to_string(),
        },
        ContactLink {
            label: "Phone",
            icon: "📞",
            href: tel_href(PROFILE.phone),
        },
    ]
}

impl ContactLink {
    /// Web links open in a new browsing context; mailto/tel stay in place.
    pub fn is_external(&self) -> bool {
        self.href.starts_with("https://") || self.href.starts_with("http://")
    }

    fn check(&self) -> Result<(), ContentError> {
        let malformed = || ContentError::MalformedHref {
            label: self.label.to_string(),
            href: self.href.clone(),
        };
        if let Some(addr) = self.href.strip_prefix("mailto:") {
            let (user, domain) = addr.split_once('@').ok_or_else(malformed)?;
            if user.is_empty() || !domain.contains('.') {
                return Err(malformed());
            }
        } else if let Some(number) = self.href.strip_prefix("tel:") {
            let mut chars = number.chars();
            let lead_ok = matches!(chars.next(), Some(c) if c == '+' || c.is_ascii_digit());
            if !lead_ok || !chars.all(|c| c.is_ascii_digit()) {
                return Err(malformed());
            }
        } else if !self.is_external() {
            return Err(malformed());
        }
        Ok(())
    }
}

/// Bar fill for a skill, in percent: a stable FNV-1a hash of the name mapped
/// into `[75, 95)`, so server and client render the same width.
pub fn skill_level(skill: &str) -> u8 {
    const FNV_OFFSET: u32 = 0x811c_9dc5;
    const FNV_PRIME: u32 = 0x0100_0193;
    let hash = skill.bytes().fold(FNV_OFFSET, |h, b| {
        (h ^ u32::from(b)).wrapping_mul(FNV_PRIME)
    });
    75 + (hash % 20) as u8
}

/// Year the site was built, used for the footer copyright line.
pub fn build_year() -> Option<i32> {
    DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .ok()
        .map(|t| t.year())
}

/// Checks every table for entries that would render broken markup.
pub fn validate() -> Result<(), ContentError> {
    for link in contact_links() {
        link.check()?;
    }
    for group in SKILLS {
        if group.skills.is_empty() {
            return Err(ContentError::EmptySkillGroup(group.category.to_string()));
        }
    }
    for project in PROJECTS {
        if project.tags.iter().any(|t| t.trim().is_empty()) {
            return Err(ContentError::EmptyTag(project.title.to_string()));
        }
    }
    Ok(())
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonSchema {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'static str,
    job_title: &'static str,
    description: &'static str,
    email: String,
    telephone: String,
    image: &'static str,
    same_as: Vec<String>,
    alumni_of: Vec<Organization>,
}

#[derive(Debug, Serialize)]
pub struct Organization {
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'static str,
}

impl PersonSchema {
    pub fn from_profile() -> Self {
        let same_as = contact_links()
            .into_iter()
            .filter(ContactLink::is_external)
            .map(|l| l.href)
            .collect();
        let alumni_of = EDUCATION
            .iter()
            .map(|e| Organization {
                kind: "EducationalOrganization",
                name: e.school,
            })
            .collect();
        Self {
            context: "https://schema.org",
            kind: "Person",
            name: PROFILE.name,
            job_title: PROFILE.role,
            description: PROFILE.tagline,
            email: mailto_href(PROFILE.email),
            telephone: tel_href(PROFILE.phone)
                .trim_start_matches("tel:")
                .to_string(),
            image: PROFILE.image,
            same_as,
            alumni_of,
        }
    }
}

/// `schema.org/Person` JSON-LD for the document head.
pub fn person_json_ld() -> serde_json::Result<String> {
    serde_json::to_string(&PersonSchema::from_profile())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_hrefs_well_formed() {
        let links = contact_links();
        let email = links.iter().find(|l| l.label == "Email").expect("email link");
        assert!(email.href.starts_with("mailto:"));
        let phone = links.iter().find(|l| l.label == "Phone").expect("phone link");
        assert!(phone.href.starts_with("tel:"));
        assert!(!phone.href.contains(' '));
        assert!(!phone.href.contains('-'));
        assert_eq!(phone.href, "tel:+60137138266");
    }

    #[test]
    fn test_tel_strips_all_whitespace() {
        assert_eq!(tel_href("+1 (555)\t123-45 67"), "tel:+1(555)1234567");
        assert_eq!(tel_href(""), "tel:");
    }

    #[test]
    fn test_content_validates() {
        assert_eq!(validate(), Ok(()));
    }

    #[test]
    fn test_malformed_links_rejected() {
        let bad = [
            ("Email", "mailto:nobody"),
            ("Phone", "tel:+60 13-713"),
            ("Phone", "tel:"),
            ("Site", "ftp://example.com"),
        ];
        for (label, href) in bad {
            let link = ContactLink {
                label,
                icon: "",
                href: href.to_string(),
            };
            assert_eq!(
                link.check(),
                Err(ContentError::MalformedHref {
                    label: label.to_string(),
                    href: href.to_string(),
                })
            );
        }
    }

    #[test]
    fn test_external_links() {
        let links = contact_links();
        let external = links
            .iter()
            .filter(|l| l.is_external())
            .map(|l| l.label)
            .collect::<Vec<_>>();
        assert_eq!(external, vec!["LinkedIn", "GitHub"]);
    }

    #[test]
    fn test_skill_level_is_stable_and_in_range() {
        for group in SKILLS {
            for skill in group.skills {
                let level = skill_level(skill);
                assert!((75..95).contains(&level), "{skill} -> {level}");
                assert_eq!(level, skill_level(skill));
            }
        }
        // FNV-1a of the empty string is the offset basis
        assert_eq!(skill_level(""), 75 + (0x811c_9dc5_u32 % 20) as u8);
    }

    #[test]
    fn test_build_year_recorded() {
        let year = build_year().expect("build.rs should stamp BUILD_TIME");
        assert!(year >= 2024);
    }

    #[test]
    fn test_project_delays_increase() {
        let delays = PROJECTS.iter().map(|p| p.delay_ms).collect::<Vec<_>>();
        assert!(delays.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_json_ld_person() {
        let ld: serde_json::Value =
            serde_json::from_str(&person_json_ld().expect("should serialize"))
                .expect("should be valid json");
        assert_eq!(ld["@context"], "https://schema.org");
        assert_eq!(ld["@type"], "Person");
        assert_eq!(ld["name"], PROFILE.name);
        assert_eq!(ld["telephone"], "+60137138266");
        assert_eq!(ld["jobTitle"], PROFILE.role);
        assert_eq!(
            ld["sameAs"],
            serde_json::json!([PROFILE.linkedin, PROFILE.github])
        );
        assert_eq!(ld["alumniOf"].as_array().map(Vec::len), Some(EDUCATION.len()));
    }

    #[test]
    fn test_linked_assets_are_shipped() {
        let public = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("public");
        for asset in [PROFILE.image, "/favicon.ico"] {
            let path = public.join(asset.trim_start_matches('/'));
            assert!(path.is_file(), "missing {}", path.display());
        }
    }
}
