//! Static content of the site.

pub struct Profile {
    pub first_names: &'static str,
    pub last_names: &'static str,
    pub brand: &'static str,
    pub headline: &'static str,
    pub tagline: &'static str,
    pub photo: &'static str,
    pub cv_path: &'static str,
    pub cv_filename: &'static str,
    pub github: &'static str,
    pub linkedin: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub location: &'static str,
}

pub static PROFILE: Profile = Profile {
    first_names: "Yanuard Stevin",
    last_names: "Montialegre Bonilla",
    brand: "Yanuard Dev",
    headline: "Backend Developer • C# & .NET Specialist",
    tagline: "Specialized in the C# and .NET ecosystem, building robust, scalable and efficient backend solutions. Passionate about solving complex problems with clean code.",
    photo: "/profile.jpg",
    cv_path: "/document/cv.pdf",
    cv_filename: "Yanuard-Stevin-CV.pdf",
    github: "https://github.com/Y-S-500",
    linkedin: "https://www.linkedin.com/in/yanuard-082004-dev",
    email: "bonillayanuard@gmail.com",
    phone: "+57 315 724 9401",
    location: "Colombia",
};

impl Profile {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_names, self.last_names)
    }

    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    pub fn tel(&self) -> String {
        let digits: String = self
            .phone
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '+')
            .collect();
        format!("tel:{digits}")
    }
}

pub static ABOUT: [&str; 3] = [
    "I'm a backend developer with solid experience in the C# and .NET ecosystem, passionate about technology and driven by challenges. I enjoy situations that push me out of my comfort zone, learning new tools and methodologies, and continuously improving my skills.",
    "I like solving complex problems with clean, efficient and scalable solutions. My focus is on robust applications, RESTful APIs, database optimization and good software architecture practices.",
    "I'm committed to continuous improvement and to adding value to meaningful projects, keeping up to date with the latest backend trends and technologies.",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillTier {
    Strong,
    Solid,
    Working,
    Learning,
}

impl SkillTier {
    pub fn from_level(level: u8) -> Self {
        match level {
            80.. => SkillTier::Strong,
            70..=79 => SkillTier::Solid,
            60..=69 => SkillTier::Working,
            _ => SkillTier::Learning,
        }
    }

    /// Tailwind classes for the badge border and the progress fill.
    pub fn classes(&self) -> (&'static str, &'static str) {
        match self {
            SkillTier::Strong => ("border-green-200", "bg-green-500"),
            SkillTier::Solid => ("border-emerald-200", "bg-emerald-500"),
            SkillTier::Working => ("border-yellow-200", "bg-yellow-500"),
            SkillTier::Learning => ("border-orange-200", "bg-orange-500"),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Skill {
    pub name: &'static str,
    /// Self-assessed proficiency, 0-100.
    pub level: u8,
}

impl Skill {
    pub fn tier(&self) -> SkillTier {
        SkillTier::from_level(self.level)
    }

    pub fn percent(&self) -> u8 {
        self.level.min(100)
    }
}

pub struct SkillCategory {
    pub id: &'static str,
    pub label: &'static str,
    pub skills: &'static [Skill],
}

const fn skill(name: &'static str, level: u8) -> Skill {
    Skill { name, level }
}

pub static SKILL_CATEGORIES: [SkillCategory; 4] = [
    SkillCategory {
        id: "backend",
        label: "Backend",
        skills: &[
            skill("C#", 95),
            skill(".NET Framework", 90),
            skill(".NET Core", 88),
            skill("ASP.NET", 85),
            skill("Java", 80),
            skill("Spring Boot", 75),
            skill("RESTful APIs", 90),
            skill("Microservices", 80),
        ],
    },
    SkillCategory {
        id: "frontend",
        label: "Frontend",
        skills: &[
            skill("Angular", 85),
            skill("TypeScript", 80),
            skill("JavaScript", 85),
            skill("React", 75),
            skill("HTML5", 90),
            skill("CSS3", 85),
            skill("Bootstrap", 80),
        ],
    },
    SkillCategory {
        id: "database",
        label: "Databases",
        skills: &[
            skill("SQL Server", 90),
            skill("MySQL", 85),
            skill("PostgreSQL", 80),
            skill("Entity Framework", 85),
            skill("LINQ", 88),
            skill("Stored Procedures", 82),
        ],
    },
    SkillCategory {
        id: "tools",
        label: "Tools",
        skills: &[
            skill("Git", 90),
            skill("GitHub", 88),
            skill("GitHub Actions", 75),
            skill("Visual Studio", 95),
            skill("Azure", 80),
            skill("Docker", 70),
            skill("Postman", 85),
            skill("SCRUM", 80),
        ],
    },
];

pub fn skill_category(id: &str) -> Option<&'static SkillCategory> {
    SKILL_CATEGORIES.iter().find(|c| c.id == id)
}

pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub image: Option<&'static str>,
    pub tags: &'static [&'static str],
    pub demo_url: &'static str,
    pub repo_url: &'static str,
}

pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

impl Project {
    pub fn image_src(&self) -> &'static str {
        self.image.unwrap_or(PLACEHOLDER_IMAGE)
    }
}

pub static PROJECTS: [Project; 3] = [
    Project {
        title: "MatSystem",
        description: "RESTful API built on .NET Core with clean architecture, JWT authentication and SQL Server. Includes an Angular frontend that guides SENA apprentices through the full enrollment process.",
        image: Some("/project/matSystem.png"),
        tags: &["C#", ".NET Core", "SQL Server", "JWT", "Angular"],
        demo_url: "https://example.com",
        repo_url: "https://github.com/Y-S-500",
    },
    Project {
        title: "Gestion Sena",
        description: "Management of SENA apprentices' training processes, including activity tracking and support for the transition to the productive stage. Backend on .NET Core with clean architecture, JWT, Entity Framework Core and SQL Server; Angular frontend; Swagger, AutoMapper and CORS.",
        image: None,
        tags: &["Spring Boot", "C#", "Docker", "Azure"],
        demo_url: "https://example.com",
        repo_url: "https://github.com/Y-S-500",
    },
    Project {
        title: "Pwa",
        description: "Angular PWA for printing tickets in the cloud. It talks to a REST API that queues print jobs for configured printers, allowing remote control from any device.",
        image: None,
        tags: &["Angular", "TypeScript", ".NET", "APIs"],
        demo_url: "https://example.com",
        repo_url: "https://github.com/Y-S-500",
    },
];

pub struct Job {
    pub role: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub highlights: &'static [&'static str],
}

pub static EXPERIENCE: [Job; 1] = [Job {
    role: "Full Stack Developer",
    company: "Coder Team SAS",
    period: "2024 - 2025",
    highlights: &[
        "Supported and collaborated with the development team, contributing Angular and .NET (C#) expertise",
        "Helped design, build and ship efficient, scalable solutions in Angular and .NET",
        "Gave technical support to developers on system integration and code optimization",
        "Debugged and improved application performance for stability, efficiency and security",
        "Introduced design patterns and modern architectures to improve maintainability",
        "Trained teammates on framework best practices and agile methodologies",
        "Handled customer-facing technical incidents to keep the experience satisfactory",
    ],
}];

pub struct Education {
    pub title: &'static str,
    pub institution: &'static str,
    pub period: &'static str,
    pub summary: &'static str,
}

pub static EDUCATION: [Education; 3] = [
    Education {
        title: "Software Engineering",
        institution: "Universidad Iberoamericana de Colombia",
        period: "2025",
        summary: "Software engineering, systems architecture, development methodologies and technology project management.",
    },
    Education {
        title: "Software Development Technologist",
        institution: "SENA - Servicio Nacional de Aprendizaje",
        period: "2023 - 2025",
        summary: "Specialized program in software development, object-oriented programming, databases and agile methodologies.",
    },
    Education {
        title: "Software Analysis and Development Technician",
        institution: "SENA - Servicio Nacional de Aprendizaje",
        period: "2021 - 2022",
        summary: "Requirements analysis, software design, programming and application testing.",
    },
];

pub struct Certification {
    pub title: &'static str,
    pub issuer: &'static str,
    pub hours: u16,
    pub period: &'static str,
    pub summary: &'static str,
}

impl Certification {
    pub fn duration_line(&self) -> String {
        format!("{} hours • {}", self.hours, self.period)
    }
}

pub static CERTIFICATIONS: [Certification; 2] = [
    Certification {
        title: "Azure Cloud Fundamentals",
        issuer: "Universidad de los Andes",
        hours: 30,
        period: "August - September 2022",
        summary: "Cloud services, Azure architecture and cloud computing best practices.",
    },
    Certification {
        title: "Microsoft Security, Compliance and Identity",
        issuer: "Universidad de los Andes",
        hours: 18,
        period: "October 2022",
        summary: "Information security, identity management and regulatory compliance.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_tiers() {
        assert_eq!(SkillTier::from_level(95), SkillTier::Strong);
        assert_eq!(SkillTier::from_level(80), SkillTier::Strong);
        assert_eq!(SkillTier::from_level(79), SkillTier::Solid);
        assert_eq!(SkillTier::from_level(70), SkillTier::Solid);
        assert_eq!(SkillTier::from_level(60), SkillTier::Working);
        assert_eq!(SkillTier::from_level(59), SkillTier::Learning);
        assert_eq!(SkillTier::from_level(0), SkillTier::Learning);
    }

    #[test]
    fn test_skill_categories() {
        let ids: Vec<&str> = SKILL_CATEGORIES.iter().map(|c| c.id).collect();
        assert_eq!(ids, ["backend", "frontend", "database", "tools"]);
        assert!(skill_category("tools").is_some());
        assert!(skill_category("cooking").is_none());

        for category in &SKILL_CATEGORIES {
            assert!(!category.skills.is_empty());
            assert!(category.skills.iter().all(|s| s.percent() <= 100));
        }
    }

    #[test]
    fn test_profile_links() {
        assert_eq!(PROFILE.tel(), "tel:+573157249401");
        assert!(PROFILE.mailto().starts_with("mailto:"));
        assert_eq!(PROFILE.full_name(), "Yanuard Stevin Montialegre Bonilla");
    }

    #[test]
    fn test_project_images() {
        assert_eq!(PROJECTS[0].image_src(), "/project/matSystem.png");
        assert_eq!(PROJECTS[1].image_src(), PLACEHOLDER_IMAGE);
    }
}
