//! Static portfolio content.
//!
//! The controller only uses the role list; everything else is data for the
//! renderers.

use folio_protocol::SectionId;

pub const OWNER_NAME: &str = "Akshay Kalyan";
pub const OWNER_INITIALS: &str = "AK";
pub const TAGLINE: &str = "Passionate about creating innovative web solutions and exploring the intersection of technology and user experience.";

pub const ROLES: &[&str] = &[
    "MERN Stack Developer",
    "Problem Solver",
    "Open Source Enthusiast",
    "CSE Student",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub section: SectionId,
}

/// Entries shown in the top navigation bar. Hero and certifications are
/// reachable by scrolling only.
pub const NAV_ITEMS: &[NavItem] = &[
    NavItem {
        label: "About",
        section: SectionId::About,
    },
    NavItem {
        label: "Skills",
        section: SectionId::Skills,
    },
    NavItem {
        label: "Projects",
        section: SectionId::Projects,
    },
    NavItem {
        label: "Education",
        section: SectionId::Education,
    },
    NavItem {
        label: "Contact",
        section: SectionId::Contact,
    },
];

/// Hero call-to-action buttons.
pub const HERO_ACTIONS: &[NavItem] = &[
    NavItem {
        label: "View Projects",
        section: SectionId::Projects,
    },
    NavItem {
        label: "Contact Me",
        section: SectionId::Contact,
    },
];

pub const ABOUT: &[&str] = &[
    "I'm a passionate Computer Science Engineering student with a strong foundation in full-stack web development. My journey in technology is driven by curiosity and a desire to solve real-world problems through innovative solutions.",
    "With expertise in the MERN stack, I enjoy building scalable applications that provide exceptional user experiences. I'm particularly interested in AI, cloud computing, and open-source contributions.",
];

pub const CORE_STRENGTHS: &[&str] = &[
    "Problem Solving",
    "Team Collaboration",
    "Adaptability",
    "Continuous Learning",
    "Communication",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillCategory {
    pub name: &'static str,
    pub skills: &'static [&'static str],
}

pub const SKILLS: &[SkillCategory] = &[
    SkillCategory {
        name: "Programming",
        skills: &["Python", "Java", "C", "JavaScript", "TypeScript"],
    },
    SkillCategory {
        name: "Frontend",
        skills: &["React", "Tailwind CSS", "Bootstrap", "HTML5", "CSS3"],
    },
    SkillCategory {
        name: "Backend",
        skills: &["Node.js", "Express.js", "REST APIs", "GraphQL"],
    },
    SkillCategory {
        name: "Database",
        skills: &["MongoDB", "PostgreSQL", "MySQL", "Firebase"],
    },
    SkillCategory {
        name: "Tools",
        skills: &["Git", "GitHub", "AWS", "Vercel", "Netlify", "Docker"],
    },
    SkillCategory {
        name: "Core CS",
        skills: &["DSA", "OOP", "DBMS", "Operating Systems", "Networks"],
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub github: &'static str,
    pub demo: &'static str,
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "BookReuse Hub",
        description: "A comprehensive platform for buying and selling used books with user authentication, search functionality, and secure payment integration.",
        tech: &["React", "Node.js", "MongoDB", "AWS", "Express.js"],
        github: "https://github.com/akshaykalyan/bookreuse-hub",
        demo: "https://bookreuse-hub.vercel.app",
    },
    Project {
        title: "Expense Tracker App",
        description: "Modern expense tracking application with data visualization, budget management, and real-time analytics.",
        tech: &["React", "Chart.js", "Local Storage", "Tailwind CSS"],
        github: "https://github.com/akshaykalyan/expense-tracker",
        demo: "https://expense-tracker-ak.vercel.app",
    },
    Project {
        title: "Smart Farmer Assistant",
        description: "AI-powered agricultural decision-making app providing crop recommendations, weather insights, and farming tips.",
        tech: &["React", "Python", "Machine Learning", "Weather API"],
        github: "https://github.com/akshaykalyan/smart-farmer",
        demo: "https://smart-farmer-assistant.vercel.app",
    },
    Project {
        title: "Travel Hub Platform",
        description: "Travel planning platform for remote areas with offline maps, local guides, and community features.",
        tech: &["React", "Node.js", "MongoDB", "Maps API", "PWA"],
        github: "https://github.com/akshaykalyan/travel-hub",
        demo: "https://travel-hub-platform.vercel.app",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Education {
    pub degree: &'static str,
    pub institution: &'static str,
    pub graduation: &'static str,
    pub coursework: &'static str,
}

pub const EDUCATION: Education = Education {
    degree: "Bachelor of Technology in Computer Science Engineering",
    institution: "University Name",
    graduation: "Expected Graduation: 2025",
    coursework: "Relevant Coursework: Data Structures & Algorithms, Database Management Systems, Object-Oriented Programming, Computer Networks, Operating Systems, Software Engineering",
};

pub const CERTIFICATIONS: &[&str] = &[
    "NPTEL - Programming, Data Structures and Algorithms using Python",
    "NPTEL - Database Management System",
    "AWS Cloud Practitioner Essentials",
    "Google Cloud Digital Leader",
    "HackerRank Problem Solving (Gold Badge)",
    "Coding Ninjas - Full Stack Web Development",
];

pub const RESUME_PATH: &str = "/resume.pdf";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const CONTACT_BLURB: &str = "I'm always open to discussing new opportunities, collaborations, or just having a chat about technology. Feel free to reach out!";

pub const CONTACT_LINKS: &[ContactLink] = &[
    ContactLink {
        label: "akshaykalyan@example.com",
        href: "mailto:akshaykalyan@example.com",
    },
    ContactLink {
        label: "GitHub Profile",
        href: "https://github.com/akshaykalyan",
    },
    ContactLink {
        label: "LinkedIn Profile",
        href: "https://linkedin.com/in/akshaykalyan",
    },
];

pub const FOOTER: &str = "© 2024 Akshay Kalyan. Built with Rust and WebAssembly.";

/// Heading shown at the top of each section.
pub fn section_title(section: SectionId) -> &'static str {
    match section {
        SectionId::Hero => OWNER_NAME,
        SectionId::About => "About Me",
        SectionId::Skills => "Skills & Technologies",
        SectionId::Projects => "Featured Projects",
        SectionId::Education => "Education",
        SectionId::Certifications => "Certifications & Achievements",
        SectionId::Contact => "Get In Touch",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_items_follow_section_order() {
        let sections: Vec<_> = NAV_ITEMS.iter().map(|item| item.section).collect();
        let mut sorted = sections.clone();
        sorted.sort();
        assert_eq!(sections, sorted);
        for item in NAV_ITEMS {
            assert_eq!(item.label.to_lowercase(), item.section.as_str());
        }
    }

    #[test]
    fn content_is_populated() {
        assert!(!ROLES.is_empty());
        assert_eq!(SKILLS.len(), 6);
        assert_eq!(PROJECTS.len(), 4);
        assert_eq!(CERTIFICATIONS.len(), 6);
        assert!(PROJECTS.iter().all(|p| p.github.starts_with("https://")));
    }
}
