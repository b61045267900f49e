//! Portfolio content: the data model and the literal content rendered on the page.
//!
//! Everything here is `&'static` and fixed at build time. The page components
//! take a `&'static Portfolio`, so tests can swap in their own fixtures.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contact {
    pub email: &'static str,
    /// Display form of the phone number, e.g. `+91 9444545744`.
    pub phone: &'static str,
    pub linkedin: &'static str,
}

impl Contact {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    /// `tel:` URI for the phone number, whitespace stripped.
    pub fn tel(&self) -> String {
        let digits: String = self.phone.split_whitespace().collect();
        format!("tel:{digits}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub initials: &'static str,
    pub headline: &'static str,
    pub tagline: &'static str,
    pub location: &'static str,
    /// Site-relative path of the profile photo. There is no fallback when it's missing.
    pub photo: &'static str,
    pub about: &'static [&'static str],
    pub contact: Contact,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillCategory {
    pub name: &'static str,
    pub skills: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Employer {
    pub name: &'static str,
    pub role: &'static str,
    pub period: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExperienceEntry {
    pub title: &'static str,
    pub description: &'static str,
}

/// Glyph shown on a service card. Resolved to markup by the view layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceIcon {
    Code,
    Build,
    Computer,
    Visibility,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceOffering {
    pub icon: ServiceIcon,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Education {
    pub degree: &'static str,
    pub institution: &'static str,
    pub period: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Certification {
    pub name: &'static str,
    pub issuer: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Portfolio {
    pub profile: Profile,
    /// Skill categories in display order.
    pub skills: &'static [SkillCategory],
    pub employer: Employer,
    pub experience: &'static [ExperienceEntry],
    pub services: &'static [ServiceOffering],
    pub projects: &'static [Project],
    pub education: Education,
    pub certifications: &'static [Certification],
}

pub static CONTENT: Portfolio = Portfolio {
    profile: Profile {
        name: "Sruthi Priya",
        initials: "SP",
        headline: "Full-Stack & Automation Developer",
        tagline: "1+ year @ Nokia | React.js • Node.js • Python • Selenium • Docker • Microservices • VR/3D (Arena XR & Unity) | Passionate about scalable systems, automation, and immersive experiences.",
        location: "Chennai, India",
        photo: "/profile.jpg",
        about: &[
            "Full-stack and automation developer with 1 year of experience at Nokia, specializing in microservices-based web applications, workflow automation, and VR solutions using React.js, Node.js, Python, and Selenium.",
            "Strong interest in microservices architecture and cloud technologies, with hands-on experience building scalable, secure software systems. Open to freelance, contract work, or full-time opportunities in web development, automation, VR prototypes, and process optimization.",
        ],
        contact: Contact {
            email: "stsruthipriya@gmail.com",
            phone: "+91 9444545744",
            linkedin: "https://www.linkedin.com/in/sruthi-priya",
        },
    },
    skills: &[
        SkillCategory {
            name: "Frontend",
            skills: &[
                "HTML",
                "CSS",
                "JavaScript",
                "React.js",
                "Responsive Web Design",
                "Figma",
                "Adobe XD",
            ],
        },
        SkillCategory {
            name: "Backend",
            skills: &["Node.js", "Python"],
        },
        SkillCategory {
            name: "Automation",
            skills: &[
                "Selenium",
                "Python Automation",
                "Excel Automation",
                "VBScript",
                "SAP Automation",
                "Web Scraping",
                "Pandas",
                "OpenPyXL",
            ],
        },
        SkillCategory {
            name: "Databases",
            skills: &["SQLite", "MongoDB", "SQL Server"],
        },
        SkillCategory {
            name: "DevOps",
            skills: &[
                "Docker",
                "Microservices Architecture",
                "Kubernetes",
                "Rancher",
            ],
        },
        SkillCategory {
            name: "BI",
            skills: &[
                "Power BI",
                "Power Automate",
                "Excel (Advanced)",
                "Data Visualization",
            ],
        },
        SkillCategory {
            name: "3D & VR",
            skills: &["Arena XR", "Unity (C#)", "Blender", "SketchUp"],
        },
        SkillCategory {
            name: "Tools",
            skills: &["Proligent Tool"],
        },
    ],
    employer: Employer {
        name: "Nokia Solutions & Networks India Pvt. Ltd.",
        role: "Graduate Apprentice Trainee (Developer)",
        period: "Jan 2025 – Present",
    },
    experience: &[
        ExperienceEntry {
            title: "Web Application Development",
            description: "Developed internal web apps using React.js, Node.js, HTML, CSS, JS. Integrated REST APIs and databases for real-time access.",
        },
        ExperienceEntry {
            title: "Microservices Application Development",
            description: "Built Node.js microservices with Docker, Kubernetes, Rancher deployment. Configured API communication and ingress routing.",
        },
        ExperienceEntry {
            title: "Immersive VR Training Solution",
            description: "Interactive VR onboarding platform with Arena XR. Automated 3D animations using Python — reduced design effort.",
        },
        ExperienceEntry {
            title: "Excel & SAP Automation",
            description: "Automated SAP data extraction, cleaning, reporting using Python, Pandas, OpenPyXL — minimized errors.",
        },
        ExperienceEntry {
            title: "Proligent Tool Automation",
            description: "Automated workflows using Python + Selenium for dynamic elements and repetitive tasks.",
        },
    ],
    services: &[
        ServiceOffering {
            icon: ServiceIcon::Code,
            title: "Full-Stack Web Development",
            description: "Modern React + Node.js apps, responsive UI, API integrations.",
        },
        ServiceOffering {
            icon: ServiceIcon::Build,
            title: "Automation & Scripting",
            description: "Python/Selenium, SAP/Excel pipelines, web scraping.",
        },
        ServiceOffering {
            icon: ServiceIcon::Computer,
            title: "VR / 3D Experiences",
            description: "Immersive training modules with Arena XR & Unity.",
        },
        ServiceOffering {
            icon: ServiceIcon::Visibility,
            title: "Microservices & DevOps",
            description: "Dockerized services, Kubernetes basics, scalable architecture.",
        },
    ],
    projects: &[
        Project {
            title: "VR-Based Fire Rescue Training (Holodeck VR)",
            description: "Immersive VR fire rescue training modules using Arena XR and Unity — realistic emergency simulations to improve preparedness, decision-making, and response skills.",
            tech: &["Arena XR", "Unity", "C#"],
        },
        Project {
            title: "Keyboard Activity Monitoring (Cybersecurity Research)",
            description: "Controlled keyboard event monitoring system to analyze abnormal input patterns for cybersecurity research — strong focus on privacy and ethical data handling.",
            tech: &["Python", "JavaScript"],
        },
        Project {
            title: "Driver Drowsiness Detection System",
            description: "Real-time computer vision system monitoring eye movement and blink rates — triggers audio alerts to enhance driving safety.",
            tech: &["Python", "OpenCV", "Computer Vision"],
        },
        Project {
            title: "Smart Street Light System (IoT)",
            description: "IoT-based street lighting automation with environmental sensors and fire alert notifications — improves safety and energy efficiency.",
            tech: &["IoT", "Sensors", "Python"],
        },
        Project {
            title: "Weather-Adaptive Street Light (IoT + Cloud)",
            description: "Dynamic smart lighting using sensors and IBM Watson Cloud — adjusts brightness based on weather for energy conservation.",
            tech: &["IoT", "IBM Watson", "Cloud"],
        },
    ],
    education: Education {
        degree: "B.E. Computer Science",
        institution: "KCG College of Technology, Chennai",
        period: "2020–2024",
    },
    certifications: &[
        Certification {
            name: "Introduction to Python",
            issuer: "Coursera",
        },
        Certification {
            name: "Introduction to Cloud",
            issuer: "IBM",
        },
        Certification {
            name: "Cybersecurity Essentials",
            issuer: "Cisco",
        },
    ],
};
