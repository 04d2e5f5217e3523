use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Image {
    pub src: &'static str,
    pub alt: &'static str,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialKind {
    GitHub,
    LinkedIn,
    Email,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub kind: SocialKind,
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Profile {
    pub name: &'static str,
    pub initials: &'static str,
    pub headline: &'static str,
    pub tagline: &'static str,
    pub summary: &'static str,
    pub photo: Image,
    pub thumbnail: Image,
    pub resume_url: &'static str,
    pub links: &'static [SocialLink],
    pub copyright_year: u16,
}

impl Profile {
    pub fn link(&self, kind: SocialKind) -> Option<&'static SocialLink> {
        self.links.iter().find(|l| l.kind == kind)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ExperienceEntry {
    pub title: &'static str,
    pub organization: &'static str,
    pub period: &'static str,
    pub highlights: &'static [&'static str],
}

#[derive(Debug, Clone, Copy)]
pub struct ProjectEntry {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct EducationEntry {
    pub degree: &'static str,
    pub institution: &'static str,
    pub date: &'static str,
    pub honors: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillIcon {
    Database,
    LaptopCode,
    Cloud,
}

#[derive(Debug, Clone, Copy)]
pub struct SkillCategory {
    pub label: &'static str,
    pub icon: SkillIcon,
    pub skills: &'static [&'static str],
}

#[derive(Debug, Clone, Copy)]
pub struct AchievementGroup {
    pub title: &'static str,
    pub items: &'static [&'static str],
}

pub static PROFILE: Profile = Profile {
    name: "Nandini Saini",
    initials: "NS",
    headline: "Data Analyst & Developer",
    tagline: "Transforming complex data into actionable insights and innovative solutions",
    summary: "Data Analyst with over 3 years of experience in market research, analytics, and data-driven decision-making. Skilled in advanced analytics, data visualization, and process optimization, with a proven track record of translating complex datasets into actionable insights that enhance operational efficiency. Passionate about leveraging data to drive business growth and innovation.",
    photo: Image {
        src: "/images/profile.jpg",
        alt: "Nandini Saini",
        width: 192,
        height: 192,
    },
    thumbnail: Image {
        src: "/images/avatar.jpg",
        alt: "Nandini Saini",
        width: 48,
        height: 48,
    },
    resume_url: "https://drive.google.com/file/d/1p8j1jMKzjyf2Lw9QCk3dZVKJcAGKLgCb/view?usp=sharing",
    links: &[
        SocialLink {
            kind: SocialKind::GitHub,
            label: "GitHub",
            href: "https://github.com/nandinisaini",
        },
        SocialLink {
            kind: SocialKind::LinkedIn,
            label: "LinkedIn",
            href: "https://www.linkedin.com/in/nandinisaini/",
        },
        SocialLink {
            kind: SocialKind::Email,
            label: "Email",
            href: "mailto:nandinisaini@email.com",
        },
    ],
    copyright_year: 2024,
};

pub static EXPERIENCE: &[ExperienceEntry] = &[
    ExperienceEntry {
        title: "Data Analyst Consultant",
        organization: "7th Avenue Partners",
        period: "Jan 2024 – Present",
        highlights: &[
            "Led the lifecycle management of 100+ SaaS and IT products, identifying new product lines and using SAP to support strategic planning and enterprise resource management.",
            "Developed interactive dashboards and data models, contributing to a 40% increase in product stability by reducing pre-launch critical defects.",
            "Implemented automation for data integration workflows, reducing manual interventions and improving operational efficiency.",
            "Enhanced company processes, decreasing error rates from 12.7% to 1.2% and achieving a 98% on-time project delivery.",
        ],
    },
    ExperienceEntry {
        title: "Data Analytics Professional",
        organization: "Rowan University",
        period: "Sept 2022 – Dec 2023",
        highlights: &[
            "Streamlined data preprocessing tasks using Alteryx, reducing project time by 45%.",
            "Created and maintained dashboards in Tableau and Power BI, driving a 40% increase in engagement and a 30% rise in event participation.",
            "Analyzed complex datasets in Google Analytics, uncovering trends that boosted departmental efficiency by 33%.",
        ],
    },
    ExperienceEntry {
        title: "Data Analyst Intern",
        organization: "Blood Box",
        period: "Jun 2020 – Aug 2022",
        highlights: &[
            "Utilized Datorama and Tableau for market intelligence, analyzing survey data and identifying user behavior trends that improved retention by 25%.",
            "Developed data visualizations to streamline data insights, leading to a 20% increase in user satisfaction.",
        ],
    },
];

pub static PROJECTS: &[ProjectEntry] = &[
    ProjectEntry {
        title: "Sin-City Dataset Analysis",
        description: "Led a team to analyze large datasets using advanced statistical techniques, generating insights that informed strategic decisions and improved departmental operations.",
    },
    ProjectEntry {
        title: "Travel Website for Broke College Students",
        description: "Designed a budget-friendly travel website targeting college students, showcasing skills in UX/UI and content creation.",
    },
];

pub static EDUCATION: &[EducationEntry] = &[EducationEntry {
    degree: "Bachelor of Science in Computer Science",
    institution: "Rowan University",
    date: "Dec 2023",
    honors: &[
        "GPA: 4.0 (Summa Cum Laude)",
        "Awards: Gold & Brown Scholarship (Top 1% of applicants, awarded $15,000 for academic excellence and leadership)",
    ],
}];

pub static CERTIFICATIONS: &[&str] = &[
    "Google Data Analytics Professional, Google 2023",
    "Data Analyst Virtual Intern, Accenture 2023",
    "SAP Technical Consultant, SAP 2023",
];

pub static SKILLS: &[SkillCategory] = &[
    SkillCategory {
        label: "Data Analysis",
        icon: SkillIcon::Database,
        skills: &[
            "SQL",
            "Python",
            "Tableau",
            "Power BI",
            "Machine Learning",
            "A/B Testing",
            "Digital Marketing",
            "Data Mining",
        ],
    },
    SkillCategory {
        label: "Software & Platforms",
        icon: SkillIcon::LaptopCode,
        skills: &[
            "SAP",
            "VMWare",
            "AutoSys",
            "Oracle",
            "Figma",
            "Adobe XD",
            "Google Analytics",
            "MS Excel",
        ],
    },
    SkillCategory {
        label: "Cloud & DevOps",
        icon: SkillIcon::Cloud,
        skills: &[
            "Google Cloud",
            "Azure",
            "ServiceNow",
            "JIRA",
            "Confluence",
            "Visio",
            "Linux",
        ],
    },
];

pub static ACHIEVEMENTS: [AchievementGroup; 2] = [
    AchievementGroup {
        title: "Achievements",
        items: &[
            "Solved 200+ coding problems across various competitive programming platforms.",
            "Recipient of Dean's List Honors for 6 consecutive semesters for academic excellence.",
        ],
    },
    AchievementGroup {
        title: "Hobbies & Interests",
        items: &[
            "Cooking: Experimenting with international recipes",
            "Badminton & Basketball: Regularly play in community leagues",
            "Crafting: Enjoy upcycling and sustainable crafts",
        ],
    },
];

pub const CONTACT_BLURB: &str = "Feel free to reach out for collaborations or just a friendly hello. I'm always open to discussing new projects, creative ideas, or opportunities to be part of your visions.";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PersonSchema {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'static str,
    job_title: &'static str,
    description: &'static str,
    image: &'static str,
    email: Option<&'static str>,
    same_as: Vec<&'static str>,
    alumni_of: Vec<OrganizationSchema>,
    works_for: Option<OrganizationSchema>,
    knows_about: Vec<&'static str>,
}

#[derive(Serialize)]
struct OrganizationSchema {
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'static str,
}

impl OrganizationSchema {
    fn new(name: &'static str) -> Self {
        Self {
            kind: "Organization",
            name,
        }
    }
}

/// schema.org `Person` document describing the profile, for the page head.
pub fn person_schema() -> serde_json::Result<String> {
    let schema = PersonSchema {
        context: "https://schema.org",
        kind: "Person",
        name: PROFILE.name,
        job_title: PROFILE.headline,
        description: PROFILE.tagline,
        image: PROFILE.photo.src,
        email: PROFILE
            .link(SocialKind::Email)
            .map(|l| l.href.trim_start_matches("mailto:")),
        same_as: PROFILE
            .links
            .iter()
            .filter(|l| l.kind != SocialKind::Email)
            .map(|l| l.href)
            .collect(),
        alumni_of: EDUCATION
            .iter()
            .map(|e| OrganizationSchema::new(e.institution))
            .collect(),
        works_for: EXPERIENCE
            .first()
            .map(|e| OrganizationSchema::new(e.organization)),
        knows_about: SKILLS.iter().flat_map(|c| c.skills.iter().copied()).collect(),
    };
    serde_json::to_string(&schema)
}
