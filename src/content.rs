pub const OWNER_NAME: &str = "John Doe";
pub const OWNER_EMAIL: &str = "john.doe@example.com";
pub const OWNER_PHONE: &str = "+1 (555) 123-4567";
pub const OWNER_PHONE_HREF: &str = "tel:+15551234567";
pub const OWNER_LOCATION: &str = "San Francisco, CA";
pub const AVATAR_URL: &str =
    "https://images.pexels.com/photos/3785079/pexels-photo-3785079.jpeg?auto=compress&cs=tinysrgb&w=400";

pub const HERO_PHRASES: [&str; 4] = [
    "Full Stack Developer",
    "React Specialist",
    "Node.js Expert",
    "UI/UX Enthusiast",
];

pub const CV_FILE_NAME: &str = "John_Doe_CV.txt";
pub const CV_TEXT: &str = "John Doe - Full Stack Developer CV\n\nThis is a demo CV file.";

pub fn cv_data_url() -> String {
    let mut url = String::from("data:text/plain;charset=utf-8,");
    for c in CV_TEXT.chars() {
        match c {
            '\n' => url.push_str("%0A"),
            ' ' => url.push_str("%20"),
            '#' => url.push_str("%23"),
            '%' => url.push_str("%25"),
            _ => url.push(c),
        }
    }
    url
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub percentage: u8,
    pub color: &'static str,
}

pub const SKILL_STAGGER_MS: u64 = 200;
pub const BACKEND_SKILL_OFFSET_MS: u64 = 400;

pub const FRONTEND_SKILLS: [Skill; 4] = [
    Skill {
        name: "React/Next.js",
        percentage: 95,
        color: "bg-gradient-to-r from-blue-500 to-cyan-500",
    },
    Skill {
        name: "TypeScript",
        percentage: 90,
        color: "bg-gradient-to-r from-blue-600 to-blue-400",
    },
    Skill {
        name: "Vue.js",
        percentage: 85,
        color: "bg-gradient-to-r from-green-500 to-green-400",
    },
    Skill {
        name: "Tailwind CSS",
        percentage: 92,
        color: "bg-gradient-to-r from-teal-500 to-cyan-400",
    },
];

pub const BACKEND_SKILLS: [Skill; 4] = [
    Skill {
        name: "Node.js",
        percentage: 88,
        color: "bg-gradient-to-r from-green-600 to-green-500",
    },
    Skill {
        name: "Python/Django",
        percentage: 85,
        color: "bg-gradient-to-r from-yellow-500 to-green-500",
    },
    Skill {
        name: "PostgreSQL",
        percentage: 82,
        color: "bg-gradient-to-r from-blue-600 to-indigo-600",
    },
    Skill {
        name: "MongoDB",
        percentage: 80,
        color: "bg-gradient-to-r from-emerald-500 to-green-600",
    },
];

pub fn skill_delay_ms(index: usize, group_offset_ms: u64) -> u64 {
    index as u64 * SKILL_STAGGER_MS + group_offset_ms
}

pub const PROJECT_STAGGER_MS: u64 = 200;

pub fn project_delay_ms(index: usize) -> u64 {
    index as u64 * PROJECT_STAGGER_MS
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub long_description: Option<&'static str>,
    pub image: &'static str,
    pub technologies: &'static [&'static str],
    pub features: Option<&'static [&'static str]>,
    pub duration: Option<&'static str>,
    pub team_size: Option<&'static str>,
    pub role: Option<&'static str>,
    pub github_url: &'static str,
    pub live_url: &'static str,
}

impl Project {
    pub fn overview(&self) -> &'static str {
        self.long_description.unwrap_or(self.description)
    }
}

pub const PROJECTS: [Project; 3] = [
    Project {
        title: "E-Commerce Platform",
        description: "Full-stack e-commerce solution with React, Node.js, and Stripe integration. Features include user authentication, product management, and payment processing.",
        long_description: Some("A comprehensive e-commerce platform built from the ground up with modern web technologies. This project showcases full-stack development skills including user authentication, payment processing, inventory management, and responsive design. The platform supports multiple user roles, real-time notifications, and advanced search functionality."),
        image: "https://images.pexels.com/photos/230544/pexels-photo-230544.jpeg?auto=compress&cs=tinysrgb&w=800",
        technologies: &["React", "Node.js", "MongoDB", "Stripe", "Tailwind CSS"],
        features: Some(&[
            "User authentication and authorization",
            "Shopping cart and wishlist functionality",
            "Secure payment processing with Stripe",
            "Admin dashboard for product management",
            "Real-time inventory tracking",
            "Order history and tracking",
            "Responsive design for all devices",
            "Email notifications and confirmations",
        ]),
        duration: Some("3 months"),
        team_size: Some("2 developers"),
        role: Some("Full Stack Developer"),
        github_url: "https://github.com",
        live_url: "https://example.com",
    },
    Project {
        title: "Task Management App",
        description: "Collaborative task management application with real-time updates, drag-and-drop functionality, and team collaboration features.",
        long_description: Some("A sophisticated task management application designed for team collaboration. Built with Vue.js and Socket.io for real-time updates, this application provides an intuitive interface for managing projects, tasks, and team workflows. Features include drag-and-drop task organization, real-time notifications, and comprehensive reporting."),
        image: "https://images.pexels.com/photos/3184306/pexels-photo-3184306.jpeg?auto=compress&cs=tinysrgb&w=800",
        technologies: &["Vue.js", "Express", "Socket.io", "PostgreSQL"],
        features: Some(&[
            "Real-time collaboration with Socket.io",
            "Drag-and-drop task organization",
            "Project and team management",
            "Time tracking and reporting",
            "File attachments and comments",
            "Custom workflows and statuses",
            "Email and in-app notifications",
            "Advanced filtering and search",
        ]),
        duration: Some("4 months"),
        team_size: Some("3 developers"),
        role: Some("Lead Frontend Developer"),
        github_url: "https://github.com",
        live_url: "https://example.com",
    },
    Project {
        title: "Weather Analytics Dashboard",
        description: "Real-time weather data visualization dashboard with interactive charts, location-based forecasts, and historical data analysis.",
        long_description: Some("An advanced weather analytics dashboard that provides comprehensive weather data visualization and analysis. Built with Next.js and Chart.js, this application offers real-time weather updates, historical data analysis, and predictive forecasting. The dashboard features interactive charts, customizable widgets, and location-based weather tracking."),
        image: "https://images.pexels.com/photos/1118873/pexels-photo-1118873.jpeg?auto=compress&cs=tinysrgb&w=800",
        technologies: &["Next.js", "TypeScript", "Chart.js", "Weather API"],
        features: Some(&[
            "Real-time weather data integration",
            "Interactive charts and visualizations",
            "Historical weather data analysis",
            "Location-based weather tracking",
            "Customizable dashboard widgets",
            "Weather alerts and notifications",
            "Export data functionality",
            "Mobile-responsive design",
        ]),
        duration: Some("2 months"),
        team_size: Some("1 developer"),
        role: Some("Solo Full Stack Developer"),
        github_url: "https://github.com",
        live_url: "https://example.com",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Experience {
    pub role: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
}

pub const EXPERIENCES: [Experience; 3] = [
    Experience {
        role: "Senior Full Stack Developer",
        company: "Tech Solutions Inc.",
        period: "2022 - Present",
        description: "Lead development of enterprise web applications using React, Node.js, and AWS. Managed a team of 4 developers and improved application performance by 40%.",
        technologies: &["React", "Node.js", "AWS", "TypeScript", "PostgreSQL"],
    },
    Experience {
        role: "Full Stack Developer",
        company: "Digital Innovations LLC",
        period: "2020 - 2022",
        description: "Developed and maintained multiple client projects using modern web technologies. Implemented CI/CD pipelines and improved deployment efficiency by 60%.",
        technologies: &["Vue.js", "Python", "Django", "Docker", "MongoDB"],
    },
    Experience {
        role: "Frontend Developer",
        company: "Creative Web Studio",
        period: "2019 - 2020",
        description: "Created responsive and interactive user interfaces for various clients. Collaborated with designers to implement pixel-perfect designs and improve user experience.",
        technologies: &["React", "JavaScript", "SASS", "Webpack"],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_percentages_in_range() {
        for skill in FRONTEND_SKILLS.iter().chain(BACKEND_SKILLS.iter()) {
            assert!(skill.percentage <= 100, "{} over 100%", skill.name);
        }
    }

    #[test]
    fn test_skill_delays() {
        assert_eq!(skill_delay_ms(0, 0), 0);
        assert_eq!(skill_delay_ms(3, 0), 600);
        assert_eq!(skill_delay_ms(0, BACKEND_SKILL_OFFSET_MS), 400);
        assert_eq!(skill_delay_ms(2, BACKEND_SKILL_OFFSET_MS), 800);
    }

    #[test]
    fn test_project_delays() {
        let delays = (0..PROJECTS.len()).map(project_delay_ms).collect::<Vec<_>>();
        assert_eq!(delays, vec![0, 200, 400]);
    }

    #[test]
    fn test_project_titles_unique() {
        let mut titles = PROJECTS.iter().map(|p| p.title).collect::<Vec<_>>();
        titles.sort();
        titles.dedup();
        assert_eq!(titles.len(), PROJECTS.len());
    }

    #[test]
    fn test_overview_falls_back_to_description() {
        let mut project = PROJECTS[0];
        assert_eq!(project.overview(), PROJECTS[0].long_description.unwrap());
        project.long_description = None;
        assert_eq!(project.overview(), project.description);
    }

    #[test]
    fn test_cv_data_url() {
        let url = cv_data_url();
        assert!(url.starts_with("data:text/plain;charset=utf-8,John%20Doe"));
        assert!(url.contains("CV%0A%0AThis"));
        assert!(!url.contains(' '));
        assert!(!url.contains('\n'));
    }
}
